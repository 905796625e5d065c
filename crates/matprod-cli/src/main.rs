use anyhow::Result;
use clap::ArgMatches;
use log::LevelFilter;
use std::path::PathBuf;

use matprod_cli::cli::command;
use matprod_cli::multiply::input::MultiplyConfig;
use matprod_cli::multiply::run::run_multiply;

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Warn)
        .parse_env(env_logger::Env::default().filter_or("MATPROD_LOG", "warn"))
        .init();

    let matches = command().get_matches();

    handle_multiply(&matches)
}

fn handle_multiply(matches: &ArgMatches) -> Result<()> {
    let config_path: Option<&PathBuf> = matches.get_one("config");
    if let Some(path) = config_path {
        log::info!("[matprod] Using config: {:?}", path);
    }

    let config = match MultiplyConfig::from_arguments(config_path, matches) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{:#}", e);
            std::process::exit(1)
        }
    };

    if matches.get_flag("print_config") {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    if let Err(e) = config.validate() {
        log::error!("{:#}", e);
        std::process::exit(1)
    }

    match run_multiply(&config) {
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("{:#}", e);
            std::process::exit(1)
        }
    }
}
