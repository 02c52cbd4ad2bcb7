use clap::Parser;
use log::error;
use tabula_engine::{
    cli::{
        self, logger,
        parsers::{CliMode, CliParser},
    },
    config::Config,
};

fn main() {
    Config::load_dotenv();
    let args = CliParser::parse();

    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("err: {}", message);
            std::process::exit(2);
        }
    };

    logger::init(config.log_level);

    match args.mode {
        Some(CliMode::Client) => cli::run_client(&config),
        Some(CliMode::Demo) => {
            if let Err(message) = cli::run_demo(&config) {
                error!("{}", message);
                std::process::exit(1);
            }
        }
        None => println!("Pick a mode: 'client' or 'demo'. Try --help."),
    }
}
