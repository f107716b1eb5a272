mod chart;
mod cli;
mod dispatch;
mod logging;
mod output;
mod prompt;
mod shell;
mod stdout_io;

use std::io;
use std::process::ExitCode;

use clap::{Parser, error::ErrorKind};
use pennywise_client::{ClientError, RecordStore, Settings, SettingsOverrides};
use stdout_io::write_stdout_text;

use crate::chart::TextChartRenderer;
use crate::cli::{Cli, Commands};
use crate::output::OutputMode;
use crate::prompt::Prompter;
use crate::shell::{SharedLedger, Shell, ShellExit};

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(code) => code,
    }
}

fn run() -> Result<ExitCode, ExitCode> {
    let raw_args = std::env::args().collect::<Vec<String>>();
    let cli = match Cli::try_parse() {
        Ok(value) => value,
        Err(err) => return report_parse_error(&err, &raw_args),
    };
    let mode = output::mode_for_command(cli.command.as_ref());

    let overrides = SettingsOverrides {
        home: cli.home.clone(),
        ledger_path: cli.ledger.clone(),
    };
    let settings = match Settings::load(&overrides) {
        Ok(settings) => settings,
        Err(error) => return fail(&error, mode),
    };
    logging::init(&settings.log_level);
    tracing::debug!(
        home = %settings.home.display(),
        ledger = %settings.ledger_path.display(),
        "settings loaded"
    );

    let today = chrono::Local::now().date_naive();
    let command = match cli.command {
        None | Some(Commands::Shell) => return run_shell(&settings, today),
        Some(command) => command,
    };
    tracing::debug!(command = command.name(), "running command");

    match dispatch::dispatch(&command, &settings, today) {
        Ok(success) => {
            if output::print_success(&success, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => fail(&error, mode),
    }
}

fn run_shell(settings: &Settings, today: chrono::NaiveDate) -> Result<ExitCode, ExitCode> {
    let charts = TextChartRenderer::new(output::format::terminal_width());
    let ledger = SharedLedger::new(RecordStore::open_or_empty(&settings.ledger_path));
    install_interrupt_save(ledger.clone());

    let stdin = io::stdin();
    let prompter = Prompter::new(stdin.lock(), io::stdout());

    match Shell::new(settings, &charts, today, ledger, prompter).run() {
        Ok(ShellExit::Saved) => Ok(ExitCode::SUCCESS),
        Ok(ShellExit::SaveFailed) => Err(ExitCode::from(1)),
        Err(error) if error.kind() == io::ErrorKind::BrokenPipe => Ok(ExitCode::SUCCESS),
        Err(error) => {
            tracing::error!("interactive session failed: {error}");
            Err(ExitCode::from(2))
        }
    }
}

/// Ctrl-C saves the session's ledger before the process exits.
fn install_interrupt_save(ledger: SharedLedger) {
    let installed = ctrlc::set_handler(move || {
        let code = match shell::save_after_interrupt(&ledger, &mut io::stdout()) {
            Ok(ShellExit::Saved) => 0,
            Ok(ShellExit::SaveFailed) | Err(_) => 1,
        };
        std::process::exit(code);
    });
    if let Err(error) = installed {
        tracing::warn!("interrupts will not save the ledger: {error}");
    }
}

fn report_parse_error(err: &clap::Error, raw_args: &[String]) -> Result<ExitCode, ExitCode> {
    if matches!(
        err.kind(),
        ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
    ) {
        if write_stdout_text(&err.to_string()).is_err() {
            return Err(ExitCode::from(2));
        }
        return Ok(ExitCode::SUCCESS);
    }

    let command_hint = command_from_args(raw_args);
    let clean_message = strip_clap_boilerplate(&err.to_string());
    let parse_error = ClientError::invalid_argument_for_command(&clean_message, command_hint);
    fail(&parse_error, output::infer_requested_output_mode(raw_args))
}

fn fail(error: &ClientError, mode: OutputMode) -> Result<ExitCode, ExitCode> {
    if output::print_failure(error, mode).is_err() {
        return Err(ExitCode::from(2));
    }
    if error.is_internal() {
        Err(ExitCode::from(2))
    } else {
        Err(ExitCode::from(1))
    }
}

/// Strips clap's trailing boilerplate (Usage line, "For more information" hint)
/// so our "What to do next" section is the single source of guidance.
fn strip_clap_boilerplate(message: &str) -> String {
    let trimmed = if let Some(pos) = message.find("\n\nUsage:") {
        &message[..pos]
    } else if let Some(pos) = message.find("\nFor more information") {
        &message[..pos]
    } else {
        message
    };
    trimmed.trim_end().to_string()
}

fn command_from_args(raw_args: &[String]) -> Option<&'static str> {
    raw_args
        .iter()
        .skip(1)
        .find_map(|value| match value.as_str() {
            "add" => Some("add"),
            "list" => Some("list"),
            "report" => Some("report"),
            "chart" => Some("chart"),
            "categories" => Some("categories"),
            "shell" => Some("shell"),
            _ => None,
        })
}
