//! Output → human/json string formatting.
//!
//! Two modes:
//! - **Human** (default): the messages of the classic contacts log shell
//! - **JSON** (`--json`): `serde_json::to_string_pretty`

use contactdb_executor::{Error, Output};

/// Output formatting mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

/// Format a successful output. An empty string means nothing to print.
pub fn format_output(output: &Output, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => format_json(output),
        OutputMode::Human => format_human(output),
    }
}

/// Format an error.
pub fn format_error(err: &Error, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => serde_json::to_string_pretty(&serde_json::json!({
            "error": err.to_string()
        }))
        .unwrap_or_else(|_| format!("{{\"error\": \"{}\"}}", err)),
        OutputMode::Human => format!("(error) {}", err),
    }
}

fn format_json(output: &Output) -> String {
    serde_json::to_string_pretty(output)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize output: {}\"}}", e))
}

fn format_human(output: &Output) -> String {
    match output {
        Output::Created { .. } | Output::Added { .. } | Output::Cleared { .. } => String::new(),
        Output::LogName(name) => name.clone(),
        Output::Phone {
            name,
            phone: Some(phone),
        } => format!("{}: {}", name, phone),
        Output::Phone { name, phone: None } => format!("No phone number for '{}' found", name),
        Output::Contacts { name, records } => {
            let mut lines = vec![format!("All contacts in {}:", name)];
            if records.is_empty() {
                lines.push("Contacts log is empty.".to_string());
            }
            lines.extend(records.iter().map(|r| r.to_string()));
            lines.join("\n")
        }
        Output::Written { path } => {
            format!("Contacts log successfully written to {}", path.display())
        }
        Output::Loaded { format, .. } => format!("Contacts log loaded from {} file", format),
    }
}
