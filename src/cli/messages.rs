//! General message formatting functions for prettifying the CLI.
//! Includes basic utility functions such as:
//!
//! - Highlight Text (make the text teal but not bold)
//! - System message formatting functions that produce the same
//! format messages.
//! - Result rendering for the plain values the store hands back.

use colored::Colorize;

use crate::cli::colors::{TABULA_AMBER, TABULA_TEAL};
use crate::store::{Row, SchemaMismatch};

pub fn highlight_argument(argument: &str) -> String {
    //! Highlight a piece of text in the teal
    //! color to make it obvious.
    //!
    //! Returns a formatted string.

    format!("{}", argument.color(TABULA_TEAL))
}

pub fn system_message(source_name: &str, message: String) -> String {
    //! Write a system message on the command line, properly
    //! formatted, according to the command line theme.
    //!
    //! Takes in a source name (like 'system') as [`str`] and
    //! the message as a formatted text; output of [`format!`].

    let color = match source_name {
        "warn" | "error" => TABULA_AMBER,
        _ => TABULA_TEAL,
    };
    let source_formatted = format!("{:6}", source_name.color(color).bold());

    format!("[{}] {}", source_formatted, message)
}

pub fn schema_mismatch_message(
    table: &str,
    required: &[String],
    mismatch: &SchemaMismatch,
) -> String {
    //! Explain a refused insert: the columns the table wants and what was
    //! wrong with the given ones.

    let mut lines = vec![system_message(
        "warn",
        format!(
            "Insert refused; the columns do not match table {}.",
            highlight_argument(table)
        ),
    )];

    lines.push(format!("  required: {}", required.join(", ")));
    if !mismatch.missing.is_empty() {
        lines.push(format!("  missing:  {}", mismatch.missing.join(", ")));
    }
    if !mismatch.unexpected.is_empty() {
        lines.push(format!("  unknown:  {}", mismatch.unexpected.join(", ")));
    }

    lines.join("\n")
}

pub fn render_rows(rows: &[Row]) -> String {
    if rows.is_empty() {
        return "  (no rows)".to_string();
    }

    rows.iter()
        .map(|row| format!("  {}", row))
        .collect::<Vec<_>>()
        .join("\n")
}
