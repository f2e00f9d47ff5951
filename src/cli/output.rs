//! Output formatting utilities

use crate::application::Notifier;
use crate::domain::{CapacitySnapshot, Entry};

const LIST_TEXT_WIDTH: usize = 60;

/// Format a list of entries for display, one per line
pub fn format_entry_list(entries: &[Entry]) -> String {
    if entries.is_empty() {
        return "No entries found".to_string();
    }

    let lines: Vec<String> = entries
        .iter()
        .map(|entry| {
            format!(
                "{}  {}  [{}]  {}",
                entry.id,
                entry.created_time,
                entry.categories.first().map(String::as_str).unwrap_or("Main"),
                preview(&entry.text)
            )
        })
        .collect();

    lines.join("\n")
}

/// One-line preview of entry text: newlines collapsed, long text truncated.
fn preview(text: &str) -> String {
    let flat = text.replace(['\n', '\r'], " ");
    if flat.chars().count() <= LIST_TEXT_WIDTH {
        return flat;
    }
    let truncated: String = flat.chars().take(LIST_TEXT_WIDTH).collect();
    format!("{}...", truncated)
}

/// Format a single entry in full for inspection
pub fn format_entry_detail(entry: &Entry) -> String {
    let categories = if entry.categories.is_empty() {
        "(none)".to_string()
    } else {
        entry.categories.join(", ")
    };

    format!(
        "Bytes used for this entry: {}\n\
        Created: {}\n\
        Categories: {}\n\
        \n\
        {}",
        entry.size, entry.created_time, categories, entry.text
    )
}

/// Format the category index for display
pub fn format_category_list(categories: &[String]) -> String {
    if categories.is_empty() {
        return "No categories found".to_string();
    }

    categories.join("\n")
}

/// Format a capacity snapshot as a single status line
pub fn format_capacity(snapshot: &CapacitySnapshot) -> String {
    format!(
        "Remaining storage: {} bytes ({:.1}%)",
        snapshot.remaining, snapshot.percentage
    )
}

/// Notifier that prints to stdout; silenced via the notifications config.
pub struct ConsoleNotifier {
    enabled: bool,
}

impl ConsoleNotifier {
    pub fn new(enabled: bool) -> Self {
        ConsoleNotifier { enabled }
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, title: &str, description: &str) {
        if self.enabled {
            println!("{} {}", title, description);
        }
    }
}
