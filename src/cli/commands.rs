//! This module is where the REPL commands are executed.
//!
//! Tabula command line syntax:
//!
//! - tabula --help | Command Line Help
//! - tabula client | Run the REPL.
//! - tabula demo   | Replay the school scenario and exit.
//!
//! Inside the REPL a line is parsed into a [`ReplCommand`] and handed to a
//! [`CommandExecutor`], which makes the store calls and turns the plain
//! values it gets back (booleans, counts, rows) into a [`CommandResult`].

use crate::cli::messages::{highlight_argument, schema_mismatch_message, system_message};
use crate::cli::parsers::ReplCommand;
use crate::sessions::Session;
use crate::store::{Row, Table};

/// The executor that runs one parsed command against a session.
pub struct CommandExecutor {
    command: ReplCommand,
}

/// What a command produced, for the REPL to print.
///
/// `message` is a one-line summary, `rows` is set for selects, and `quit`
/// asks the REPL to end the session.
#[derive(Debug, Default)]
pub struct CommandResult {
    pub message: Option<String>,
    pub rows: Option<Vec<Row>>,
    pub quit: bool,
}

impl CommandResult {
    fn message(message: String) -> CommandResult {
        CommandResult {
            message: Some(message),
            ..Default::default()
        }
    }
}

fn table_mut<'a>(session: &'a mut Session, name: &str) -> Result<&'a mut Table, String> {
    session.database_mut().get_table_mut(name).ok_or_else(|| {
        system_message(
            "exctr",
            format!("The table {} does not exist.", highlight_argument(name)),
        )
    })
}

impl CommandExecutor {
    pub fn new(command: ReplCommand) -> CommandExecutor {
        CommandExecutor { command }
    }

    pub fn execute(self, session: &mut Session) -> Result<CommandResult, String> {
        match self.command {
            ReplCommand::Tables => Ok(CommandResult::message(format!("{}", session.database()))),
            ReplCommand::Create { table, columns } => {
                if session.database_mut().create_table(&table, columns) {
                    Ok(CommandResult::message(system_message(
                        "tabula",
                        format!("Table {} created.", highlight_argument(&table)),
                    )))
                } else {
                    Err(system_message(
                        "exctr",
                        format!("The table {} already exists.", highlight_argument(&table)),
                    ))
                }
            }
            ReplCommand::Insert { table, record } => {
                let target = table_mut(session, &table)?;
                let given = record.clone();

                if !target.insert(record) {
                    let mismatch = target.schema().mismatch(&given).unwrap_or_default();
                    return Err(schema_mismatch_message(&table, &target.columns(), &mismatch));
                }

                Ok(CommandResult::message(system_message(
                    "tabula",
                    "1 row(s) inserted!".to_string(),
                )))
            }
            ReplCommand::Select { table, conditions } => {
                let target = table_mut(session, &table)?;
                let rows = target.select(Some(&conditions));

                Ok(CommandResult {
                    message: Some(system_message(
                        "tabula",
                        format!("{} row(s) selected!", rows.len()),
                    )),
                    rows: Some(rows),
                    quit: false,
                })
            }
            ReplCommand::Update {
                table,
                conditions,
                changes,
            } => {
                let target = table_mut(session, &table)?;
                let n_updated = target.update(&conditions, &changes);

                Ok(CommandResult::message(system_message(
                    "tabula",
                    format!("{} row(s) updated!", n_updated),
                )))
            }
            ReplCommand::Delete { table, conditions } => {
                let n_deleted = table_mut(session, &table)?.delete(&conditions);

                Ok(CommandResult::message(system_message(
                    "tabula",
                    format!("{} row(s) deleted!", n_deleted),
                )))
            }
            ReplCommand::DeleteAll { table } => {
                let n_deleted = table_mut(session, &table)?.delete_all();

                Ok(CommandResult::message(system_message(
                    "tabula",
                    format!("{} row(s) deleted!", n_deleted),
                )))
            }
            ReplCommand::Save => {
                let path = session.save()?;
                Ok(CommandResult::message(system_message(
                    "tabula",
                    format!("Saved to {}.", highlight_argument(&path.display().to_string())),
                )))
            }
            ReplCommand::Load => {
                let path = session.load()?;
                Ok(CommandResult::message(system_message(
                    "tabula",
                    format!("Loaded from {}.", highlight_argument(&path.display().to_string())),
                )))
            }
            ReplCommand::History => Ok(CommandResult::message(
                session.command_history_lines(None).join("\n"),
            )),
            ReplCommand::Help => Ok(CommandResult::message(super::help_text())),
            ReplCommand::Quit => Ok(CommandResult {
                quit: true,
                ..Default::default()
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::parsers::parse_repl_line;
    use crate::config::Config;
    use crate::store::Value;

    fn run(session: &mut Session, line: &str) -> Result<CommandResult, String> {
        CommandExecutor::new(parse_repl_line(line)?).execute(session)
    }

    #[test]
    fn executor_drives_full_row_lifecycle() {
        let mut session = Session::client(&Config::default());

        run(&mut session, "create people id grp").unwrap();
        run(&mut session, "insert people id=1 grp=x").unwrap();
        run(&mut session, "insert people id=2 grp=y").unwrap();
        run(&mut session, "insert people id=3 grp=x").unwrap();

        let selected = run(&mut session, "select people grp=x").unwrap();
        assert_eq!(selected.rows.unwrap().len(), 2);

        run(&mut session, "update people grp=x set id=99").unwrap();
        run(&mut session, "delete people grp=y").unwrap();

        let table = session.database().get_table("people").unwrap();
        assert_eq!(table.len(), 2);
        assert!(table.rows().iter().all(|row| row.get("id") == Some(&Value::from(99))));
    }

    #[test]
    fn executor_reports_refused_insert() {
        let mut session = Session::client(&Config::default());
        run(&mut session, "create people id name").unwrap();

        let refused = run(&mut session, "insert people id=4").unwrap_err();
        assert!(refused.contains("missing:  name"));
        assert!(session.database().get_table("people").unwrap().is_empty());

        let wrong_name = run(&mut session, "insert people id=4 nick=C").unwrap_err();
        assert!(wrong_name.contains("unknown:  nick"));
        assert!(session.database().get_table("people").unwrap().is_empty());

        run(&mut session, "insert people name=Carlos id=4").unwrap();
        assert_eq!(session.database().get_table("people").unwrap().len(), 1);
    }

    #[test]
    fn executor_reports_missing_and_duplicate_tables() {
        let mut session = Session::client(&Config::default());

        assert!(run(&mut session, "select nowhere").is_err());
        run(&mut session, "create people id").unwrap();
        assert!(run(&mut session, "create people other").is_err());
    }

    #[test]
    fn executor_quit_sets_flag() {
        let mut session = Session::client(&Config::default());
        assert!(run(&mut session, "quit").unwrap().quit);
    }
}
