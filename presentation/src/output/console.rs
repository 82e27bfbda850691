//! Console output formatter for rendered answers

use colored::Colorize;
use ragask_domain::{OutputFormat, RenderedAnswer};

/// Formats the result panel for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format in the requested output format
    pub fn format(rendered: &RenderedAnswer, format: OutputFormat) -> String {
        match format {
            OutputFormat::Text => Self::format_text(rendered),
            OutputFormat::Json => Self::format_json(rendered),
        }
    }

    /// Headline, then the info text dimmed underneath (if any)
    pub fn format_text(rendered: &RenderedAnswer) -> String {
        let mut output = String::new();

        let headline = if rendered.is_error() {
            rendered.answer.red().bold().to_string()
        } else {
            rendered.answer.clone()
        };
        output.push_str(&headline);
        output.push('\n');

        if !rendered.info.is_empty() {
            output.push('\n');
            output.push_str(&Self::indent(&rendered.info, "  ").dimmed().to_string());
            output.push('\n');
        }

        output
    }

    /// Format as JSON
    pub fn format_json(rendered: &RenderedAnswer) -> String {
        serde_json::to_string_pretty(rendered).unwrap_or_else(|_| "{}".to_string())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
