//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands};
pub use output::{
    format_capacity, format_category_list, format_entry_detail, format_entry_list, ConsoleNotifier,
};
