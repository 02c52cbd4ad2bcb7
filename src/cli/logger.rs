//! A console backend for the [`log`] facade, so the store's warnings show
//! up in the REPL with the same look as every other system message.

use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::cli::messages::system_message;

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let source = match record.level() {
            Level::Error => "error",
            Level::Warn => "warn",
            Level::Info => "info",
            Level::Debug => "debug",
            Level::Trace => "trace",
        };

        eprintln!("{}", system_message(source, record.args().to_string()));
    }

    fn flush(&self) {}
}

pub fn init(level: LevelFilter) {
    //! Install the console logger. Only the first call takes effect.

    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
