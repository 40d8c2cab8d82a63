//! Output formatting for the CLI.

use console::style;
use serde::Serialize;
use tasko_core::TodoItem;

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    #[default]
    Human,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
}

/// Print output in the specified format.
pub fn print<T: Serialize + HumanDisplay>(value: &T, format: OutputFormat) {
    match format {
        OutputFormat::Human => println!("{}", value.human_display()),
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(value).expect("Failed to serialize to JSON")
            );
        }
        OutputFormat::Yaml => {
            println!(
                "{}",
                serde_yaml::to_string(value).expect("Failed to serialize to YAML")
            );
        }
    }
}

/// Print the item list with aligned columns.
pub fn print_item_list(items: &[TodoItem], format: OutputFormat) {
    match format {
        OutputFormat::Human => {
            if items.is_empty() {
                println!("No items found.");
                return;
            }

            let id_width = items.iter().map(|i| i.id.len()).max().unwrap_or(2).max(2);
            println!("{:4} {:<id_width$}  TITLE", "", "ID");
            println!("{}", "-".repeat(id_width + 26));

            for item in items {
                println!("{}", render_line(item, id_width));
            }
        }
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(items).expect("Failed to serialize to JSON")
            );
        }
        OutputFormat::Yaml => {
            println!(
                "{}",
                serde_yaml::to_string(items).expect("Failed to serialize to YAML")
            );
        }
    }
}

/// Print a success message.
pub fn print_success(message: &str, format: OutputFormat) {
    match format {
        OutputFormat::Human => println!("{message}"),
        OutputFormat::Json => {
            println!(r#"{{"status": "ok", "message": "{message}"}}"#);
        }
        OutputFormat::Yaml => {
            println!("status: ok\nmessage: {message}");
        }
    }
}

/// One list line: checkbox, id, title; completed titles struck through.
fn render_line(item: &TodoItem, id_width: usize) -> String {
    let mark = if item.completed { "[x]" } else { "[ ]" };
    let title = if item.completed {
        style(item.title.as_str()).strikethrough().dim().to_string()
    } else {
        item.title.clone()
    };
    format!("{mark}  {:<id_width$}  {title}", item.id)
}

/// Trait for human-readable display.
pub trait HumanDisplay {
    fn human_display(&self) -> String;
}

impl HumanDisplay for TodoItem {
    fn human_display(&self) -> String {
        render_line(self, self.id.len().max(2))
    }
}
