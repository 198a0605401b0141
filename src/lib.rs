pub mod app;
pub mod commands;
pub mod domain;
pub mod infrastructure;
pub mod shared;

use std::{ffi::OsString, process::ExitCode};

use app::{
    cli::{execute, Cli},
    skin_service::SkinReport,
};
use shared::result::EXIT_USAGE;

pub fn run() -> ExitCode {
    run_from_args(std::env::args_os())
}

pub fn run_from_args<I, T>(args: I) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let cli = match Cli::parse_args(args) {
        Ok(cli) => cli,
        Err(err) => {
            let code = if err.use_stderr() { EXIT_USAGE } else { 0 };
            let _ = err.print();
            return ExitCode::from(code);
        }
    };

    init_logging(cli.verbose);

    match execute(&cli) {
        Ok(report) => {
            println!("{}", success_message(&report));
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}

pub fn success_message(report: &SkinReport) -> String {
    format!(
        "Skin de {} guardada en {}",
        report.player,
        report.files.skin.display()
    )
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_level),
    )
    .try_init();
}
