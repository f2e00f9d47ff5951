//! vent - Local-first note stash
//!
//! A command-line scratchpad that saves free-form entries with optional
//! category labels to a local key-value store, and lets you search,
//! filter, inspect, and delete them while tracking an estimate of
//! remaining storage capacity.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::VentError;
