//! Runtime configuration, resolved once at startup.
//!
//! Values come from the command line first, then the environment, then a
//! `.env` file in the working directory (loaded with [`dotenvy`] before
//! arguments are parsed), then defaults. Nothing in the library reads the
//! environment on its own; whoever needs a setting is handed a [`Config`].

use std::{path::PathBuf, str::FromStr};

use log::LevelFilter;

use crate::cli::parsers::CliParser;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_name: String,
    pub snapshot_path: Option<PathBuf>,
    pub log_level: LevelFilter,
}

impl Config {
    pub fn load_dotenv() {
        //! Pull a `.env` file into the process environment, if there is one.
        //! A missing file is normal and ignored.

        if let Err(error) = dotenvy::dotenv() {
            if !error.not_found() {
                eprintln!("ignoring unreadable .env file: {}", error);
            }
        }
    }

    pub fn from_args(args: &CliParser) -> Result<Config, String> {
        let log_level = LevelFilter::from_str(&args.log_level)
            .map_err(|_| format!("invalid log level '{}'", args.log_level))?;

        Ok(Config {
            database_name: args.database.clone(),
            snapshot_path: args.snapshot.clone(),
            log_level,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database_name: "main".to_string(),
            snapshot_path: None,
            log_level: LevelFilter::Info,
        }
    }
}
