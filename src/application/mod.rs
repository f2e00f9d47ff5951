//! Application layer - Use cases and orchestration

pub mod add_entry;
pub mod init;
pub mod list_categories;
pub mod list_entries;
pub mod manage_config;
pub mod notify;
pub mod remove_entry;
pub mod show_entry;
pub mod storage_report;

pub use add_entry::{AddEntryService, AddReport};
pub use list_categories::list_categories;
pub use list_entries::list_entries;
pub use manage_config::ConfigService;
pub use notify::Notifier;
pub use remove_entry::{RemoveEntryService, RemoveReport};
pub use show_entry::show_entry;
pub use storage_report::storage_report;
