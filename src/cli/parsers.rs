//! The place where the CLI argument parser and the REPL line parser are
//! defined.
//!
//! A REPL line is split into words, with quoted runs kept together, and
//! turned into a [`ReplCommand`]. `column=value` words become [`Row`]s with
//! [`Value::parse_literal`] deciding each value's type.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::store::{Row, Value};

#[derive(Parser)]
#[command(name = "tabula")]
#[command(about = "A tiny in-memory tabular store", long_about = None)]
pub struct CliParser {
    /// Either drive the store from a REPL or replay the demo scenario.
    #[arg(required = true)]
    pub mode: Option<CliMode>,

    /// Name of the database created at session start.
    #[arg(short, long, env = "TABULA_DATABASE", default_value = "main")]
    pub database: String,

    /// JSON snapshot file used by `save` and `load`.
    #[arg(short, long, env = "TABULA_SNAPSHOT")]
    pub snapshot: Option<PathBuf>,

    /// One of off, error, warn, info, debug, trace.
    #[arg(short, long, env = "TABULA_LOG", default_value = "info")]
    pub log_level: String,
}

#[derive(Clone, ValueEnum)]
pub enum CliMode {
    // Start a REPL client instance.
    Client,

    // Run the school scenario and exit.
    Demo,
}

/// A single parsed REPL line.
#[derive(Debug, PartialEq)]
pub enum ReplCommand {
    Tables,
    Create { table: String, columns: Vec<String> },
    Insert { table: String, record: Row },
    Select { table: String, conditions: Row },
    Update { table: String, conditions: Row, changes: Row },
    Delete { table: String, conditions: Row },
    DeleteAll { table: String },
    Save,
    Load,
    History,
    Help,
    Quit,
}

pub const REPL_USAGE: [(&str, &str); 12] = [
    ("tables", "list every table and its columns"),
    ("create <t> <c1> <c2> ..", "create table t with the given columns"),
    ("insert <t> c=v ..", "insert a row; every column must be given"),
    ("select <t> [c=v ..]", "show rows matching all conditions"),
    ("update <t> [c=v ..] set c=v ..", "overwrite columns on matching rows"),
    ("delete <t> c=v ..", "remove matching rows"),
    ("delete <t> *", "remove every row"),
    ("save", "write the database to the snapshot file"),
    ("load", "replace the database with the snapshot file"),
    ("history", "list command history for this session"),
    ("!", "execute the last command, add more to go further back"),
    ("quit", "leave the session"),
];

pub fn split_words(line: &str) -> Result<Vec<String>, String> {
    //! Whitespace split that keeps quoted runs (with their quotes) in one
    //! word, so `name="Ana Torres"` survives intact.

    let mut words = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;

    for ch in line.chars() {
        match quote {
            Some(q) => {
                current.push(ch);
                if ch == q {
                    quote = None;
                }
            }
            None if ch == '"' || ch == '\'' => {
                current.push(ch);
                quote = Some(ch);
            }
            None if ch.is_whitespace() => {
                if !current.is_empty() {
                    words.push(std::mem::take(&mut current));
                }
            }
            None => current.push(ch),
        }
    }

    if let Some(q) = quote {
        return Err(format!("unterminated quote {}", q));
    }
    if !current.is_empty() {
        words.push(current);
    }

    Ok(words)
}

fn parse_assignments(words: &[String]) -> Result<Row, String> {
    let mut row = Row::new();

    for word in words {
        let (column, value) = word
            .split_once('=')
            .ok_or_else(|| format!("expected column=value, got '{}'", word))?;

        if column.is_empty() {
            return Err(format!("missing column name in '{}'", word));
        }

        row.set(column, Value::parse_literal(value));
    }

    Ok(row)
}

fn table_argument(words: &[String], command: &str) -> Result<String, String> {
    words
        .get(1)
        .cloned()
        .ok_or_else(|| format!("'{}' needs a table name", command))
}

pub fn parse_repl_line(line: &str) -> Result<ReplCommand, String> {
    let words = split_words(line)?;
    let command = words.first().map(String::as_str).unwrap_or_default();

    match command {
        "tables" => Ok(ReplCommand::Tables),
        "save" => Ok(ReplCommand::Save),
        "load" => Ok(ReplCommand::Load),
        "history" => Ok(ReplCommand::History),
        "help" => Ok(ReplCommand::Help),
        "quit" | "exit" => Ok(ReplCommand::Quit),
        "create" => {
            let table = table_argument(&words, command)?;
            Ok(ReplCommand::Create {
                table,
                columns: words[2..].to_vec(),
            })
        }
        "insert" => {
            let table = table_argument(&words, command)?;
            Ok(ReplCommand::Insert {
                table,
                record: parse_assignments(&words[2..])?,
            })
        }
        "select" => {
            let table = table_argument(&words, command)?;
            Ok(ReplCommand::Select {
                table,
                conditions: parse_assignments(&words[2..])?,
            })
        }
        "update" => {
            let table = table_argument(&words, command)?;
            let rest = &words[2..];
            let set_at = rest
                .iter()
                .position(|word| word == "set")
                .ok_or_else(|| "'update' needs a 'set' clause".to_string())?;

            Ok(ReplCommand::Update {
                table,
                conditions: parse_assignments(&rest[..set_at])?,
                changes: parse_assignments(&rest[set_at + 1..])?,
            })
        }
        "delete" => {
            let table = table_argument(&words, command)?;
            let rest = &words[2..];

            match rest {
                [star] if star == "*" => Ok(ReplCommand::DeleteAll { table }),
                [] => Err("'delete' needs conditions, or '*' to remove every row".to_string()),
                conditions => Ok(ReplCommand::Delete {
                    table,
                    conditions: parse_assignments(conditions)?,
                }),
            }
        }
        "" => Err("empty command".to_string()),
        other => Err(format!("unknown command '{}'", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_words_keeps_quoted_runs() {
        let words = split_words(r#"insert people name="Ana Torres" age=15"#).unwrap();
        assert_eq!(words, vec!["insert", "people", "name=\"Ana Torres\"", "age=15"]);
    }

    #[test]
    fn split_words_rejects_open_quote() {
        assert!(split_words("insert people name='Ana").is_err());
    }

    #[test]
    fn parse_insert_types_values() {
        let command = parse_repl_line("insert people id=1 name=Ana active=true").unwrap();
        let expected = Row::new()
            .with("id", 1)
            .with("name", "Ana")
            .with("active", true);

        assert_eq!(
            command,
            ReplCommand::Insert {
                table: "people".to_string(),
                record: expected
            }
        );
    }

    #[test]
    fn parse_update_splits_on_set() {
        let command = parse_repl_line("update people grp=x set id=99").unwrap();

        assert_eq!(
            command,
            ReplCommand::Update {
                table: "people".to_string(),
                conditions: Row::new().with("grp", "x"),
                changes: Row::new().with("id", 99),
            }
        );
    }

    #[test]
    fn parse_update_without_conditions_matches_all() {
        let command = parse_repl_line("update people set id=1").unwrap();

        assert_eq!(
            command,
            ReplCommand::Update {
                table: "people".to_string(),
                conditions: Row::new(),
                changes: Row::new().with("id", 1),
            }
        );
    }

    #[test]
    fn parse_delete_requires_explicit_wildcard() {
        assert!(parse_repl_line("delete people").is_err());
        assert_eq!(
            parse_repl_line("delete people *").unwrap(),
            ReplCommand::DeleteAll {
                table: "people".to_string()
            }
        );
    }

    #[test]
    fn parse_create_collects_columns() {
        assert_eq!(
            parse_repl_line("create people id name").unwrap(),
            ReplCommand::Create {
                table: "people".to_string(),
                columns: vec!["id".to_string(), "name".to_string()],
            }
        );
    }

    #[test]
    fn parse_rejects_unknown_and_malformed() {
        assert!(parse_repl_line("drop people").is_err());
        assert!(parse_repl_line("select").is_err());
        assert!(parse_repl_line("insert people id").is_err());
        assert!(parse_repl_line("insert people =1").is_err());
    }
}
