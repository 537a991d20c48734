//! sqlinity CLI - turns paired SQL migration files into C# sources

use std::process::ExitCode;

mod cli;
mod commands;

use cli::{Cli, Commands, GlobalArgs};
use commands::{common::report_error, create, generate};

fn init_logging(global: &GlobalArgs) {
    env_logger::Builder::new()
        .filter_level(global.log_level())
        .parse_default_env()
        .target(env_logger::Target::Stdout)
        .format_timestamp(None)
        .init();
}

fn main() -> ExitCode {
    let cli = match Cli::parse_lenient(std::env::args_os()) {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    init_logging(&cli.global);

    let result = match &cli.command {
        Some(Commands::Create(args)) if !args.name.is_empty() => create::execute(args, &cli.global),
        Some(Commands::External(args)) => {
            log::debug!("Unrecognized command {:?}, running generate", args);
            generate::execute(&cli.global)
        }
        Some(Commands::Create(_)) | Some(Commands::Generate) | None => {
            generate::execute(&cli.global)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err);
            ExitCode::FAILURE
        }
    }
}
