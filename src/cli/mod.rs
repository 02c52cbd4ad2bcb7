use std::io::{self, BufRead, Write};

use colored::Colorize;

use crate::{
    cli::{
        colors::TABULA_TEAL,
        commands::{CommandExecutor, CommandResult},
        messages::{highlight_argument, render_rows, system_message},
        parsers::{REPL_USAGE, parse_repl_line},
    },
    config::Config,
    sessions::Session,
};

mod colors;
mod commands;
mod demo;
pub mod logger;
mod messages;
pub mod parsers;
mod splash_screen;

pub use demo::run_demo;

const DEFAULT_LAST_COMMAND_DELIMITER: &str = "!";

pub fn run_client(config: &Config) {
    splash_screen::splash_screen();

    let session = Session::client(config);

    println!(
        "{}",
        system_message(
            "info",
            format!(
                "Working on database {}.",
                highlight_argument(session.database().name())
            )
        )
    );

    start_repl(session);
}

pub fn help_text() -> String {
    let mut lines = vec![format!("{:32} {}", "COMMAND".color(TABULA_TEAL), "DETAILS")];

    for (command, details) in REPL_USAGE {
        lines.push(format!("{:32} {}", command.color(TABULA_TEAL), details));
    }

    lines.join("\n")
}

fn print_result(result: CommandResult) {
    if let Some(message) = result.message {
        println!("{}", message);
    }
    if let Some(rows) = result.rows {
        println!("{}", render_rows(&rows));
    }
}

fn start_repl(mut session: Session) {
    println!(
        "{}",
        system_message(
            "system",
            format!(
                "Use '{}' to leave and '{}' to know all commands available.",
                highlight_argument("quit"),
                highlight_argument("help"),
            ),
        )
    );
    println!(
        "{}",
        system_message(
            "system",
            format!(
                "New session initiated at '{}'.",
                highlight_argument(&session.start_time_string())
            ),
        )
    );

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!();
        print!("{:6} > ", "tabula".color(TABULA_TEAL).bold());
        if io::stdout().flush().is_err() {
            break;
        }

        let mut buffer = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(error)) => {
                println!("{}", system_message("error", error.to_string()));
                break;
            }
            None => break,
        };

        if buffer.trim().is_empty() {
            continue;
        }

        if buffer.starts_with(DEFAULT_LAST_COMMAND_DELIMITER) {
            let last = buffer.matches(DEFAULT_LAST_COMMAND_DELIMITER).count();

            match session.get_last_command(last) {
                Some(command) => buffer = command.to_string(),
                None => {
                    println!(
                        "{}",
                        system_message(
                            "system",
                            format!(
                                "No command {} steps back.",
                                highlight_argument(&last.to_string())
                            ),
                        )
                    );
                    continue;
                }
            }
        }

        session.add_to_command_history(buffer.trim());

        let outcome = parse_repl_line(&buffer)
            .map_err(|error| system_message("parser", error))
            .and_then(|command| CommandExecutor::new(command).execute(&mut session));

        match outcome {
            Ok(result) => {
                let quit = result.quit;
                print_result(result);
                if quit {
                    break;
                }
            }
            Err(error) => println!("{}", error),
        }
    }

    println!("Goodbye!")
}
