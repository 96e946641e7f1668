use clap::Parser;
use sql_tokenizer::logging::init_global_logging_with_service;
use sql_tokenizer_cli::{default_filter, run, Cli, LogBridge};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_filter(cli.verbose)),
    )
    .init();

    if let Err(e) = init_global_logging_with_service(LogBridge::service()) {
        log::warn!("Tokenizer logging not installed: {}", e);
    }

    match run(&cli) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
