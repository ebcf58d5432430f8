use anyhow::Result;
use clap::Parser;
use gitbar::adapters::notify::ConsoleNotifier;
use gitbar::adapters::spawn::{DryRunSpawner, ProcessLauncher};
use gitbar::build_dispatcher;
use gitbar::cli::CliArgs;
use gitbar::config::Config;
use gitbar_core::domain::Notification;
use gitbar_core::ports::{Notifier, ProcessSpawner};
use gitbar_core::{CommandKind, Outcome, ToolbarCommand};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info};

fn print_commands() {
    for command in ToolbarCommand::ALL {
        let target = match command.kind() {
            CommandKind::Shell => "shell",
            CommandKind::Repository => "repository",
            CommandKind::File => "file",
        };
        println!("{:<16} {}", command.identifier(), target);
    }
}

fn run(cli_args: CliArgs) -> Result<ExitCode> {
    if cli_args.list {
        print_commands();
        return Ok(ExitCode::SUCCESS);
    }

    // clap requires a command unless --list was given
    let Some(command) = cli_args.command else {
        return Ok(ExitCode::from(2));
    };

    let config = Config::from_cli_and_file(&cli_args)?;
    let spawner: Arc<dyn ProcessSpawner> = if cli_args.dry_run {
        Arc::new(DryRunSpawner::new(std::io::stdout()))
    } else {
        Arc::new(ProcessLauncher)
    };
    let dispatcher = build_dispatcher(&cli_args, &config, spawner, Arc::new(ConsoleNotifier))?;

    let code = match dispatcher.dispatch(command) {
        Outcome::Launched(_) => ExitCode::SUCCESS,
        Outcome::Aborted(_) => ExitCode::from(1),
        Outcome::SpawnFailed => ExitCode::from(2),
    };
    Ok(code)
}

fn main() -> ExitCode {
    // Initialize tracing with env filter; stdout is reserved for --dry-run
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli_args = CliArgs::parse();
    info!("Starting gitbar");

    match run(cli_args) {
        Ok(code) => code,
        Err(err) => {
            error!("Application error: {:#}", err);
            ConsoleNotifier.notify(&Notification::error("gitbar failed", format!("{:#}", err)));
            ExitCode::from(2)
        }
    }
}
