//! The only point of truth for all information that is related to the
//! current user session. A session holds the database the user is working
//! on, the command history and where snapshots go.
//!
//! The session drives the store from a single thread, one command at a
//! time, which is all the store expects of its caller. At the end of a
//! session everything is discarded unless the user ran `save`.

use std::{fmt::Display, path::PathBuf, time::SystemTime};

use chrono::{DateTime, Local};

use crate::config::Config;
use crate::snapshot;
use crate::store::Database;

struct CommandHistory {
    command: String,
    command_time: SystemTime,
}

impl CommandHistory {
    pub fn command_time_string(&self) -> String {
        let datetime: DateTime<Local> = self.command_time.into();
        datetime.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

impl Display for CommandHistory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.command_time_string(), self.command)
    }
}

pub struct Session {
    command_history: Vec<CommandHistory>,
    start_time: SystemTime,
    database: Database,
    snapshot_path: Option<PathBuf>,
}

impl Session {
    pub fn client(config: &Config) -> Session {
        //! Returns a new client session over an empty database.

        Session {
            command_history: vec![],
            start_time: SystemTime::now(),
            database: Database::new(config.database_name.clone()),
            snapshot_path: config.snapshot_path.clone(),
        }
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn database_mut(&mut self) -> &mut Database {
        &mut self.database
    }

    pub fn add_to_command_history(&mut self, command: &str) {
        self.command_history.push(CommandHistory {
            command: command.to_string(),
            command_time: SystemTime::now(),
        });
    }

    pub fn start_time_string(&self) -> String {
        //! Convert the [`SystemTime`] object into a string representation
        //! to be more readable.

        let datetime: DateTime<Local> = self.start_time.into();
        datetime.format("%Y-%m-%d %H:%M:%S").to_string()
    }

    pub fn command_history_lines(&self, n_prev: Option<usize>) -> Vec<String> {
        //! The previously invoked commands, newest first.
        //! Use `n_prev` to limit the number of commands you see.

        let limit = n_prev.unwrap_or(self.command_history.len());

        self.command_history
            .iter()
            .rev()
            .take(limit)
            .enumerate()
            .map(|(index, command)| format!("{:3} | {}", index, command))
            .collect()
    }

    pub fn get_last_command(&self, nth_back: usize) -> Option<&str> {
        //! Gets the `nth_back`th last command from the history.

        if nth_back == 0 {
            return None;
        }

        self.command_history
            .iter()
            .nth_back(nth_back - 1)
            .map(|cmd| cmd.command.as_str())
    }

    pub fn snapshot_path(&self) -> Result<&PathBuf, String> {
        self.snapshot_path.as_ref().ok_or_else(|| {
            "no snapshot file configured; pass --snapshot or set TABULA_SNAPSHOT".to_string()
        })
    }

    pub fn save(&self) -> Result<PathBuf, String> {
        let path = self.snapshot_path()?;
        snapshot::save(&self.database, path)?;
        Ok(path.clone())
    }

    pub fn load(&mut self) -> Result<PathBuf, String> {
        //! Replace the session's database with the snapshot on disk. The
        //! current database is kept if loading fails.

        let path = self.snapshot_path()?.clone();
        self.database = snapshot::load(&path)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_command_counts_back_from_newest() {
        let mut session = Session::client(&Config::default());
        session.add_to_command_history("tables");
        session.add_to_command_history("select people");

        assert_eq!(session.get_last_command(1), Some("select people"));
        assert_eq!(session.get_last_command(2), Some("tables"));
        assert_eq!(session.get_last_command(3), None);
        assert_eq!(session.get_last_command(0), None);
    }

    #[test]
    fn save_without_path_is_an_error() {
        let session = Session::client(&Config::default());
        assert!(session.save().is_err());
    }
}
