use crate::cli::Commands;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OutputMode {
    Text,
    Json,
}

pub fn mode_for_command(command: Option<&Commands>) -> OutputMode {
    match command {
        Some(
            Commands::Add { json, .. }
            | Commands::List { json }
            | Commands::Report { json }
            | Commands::Chart { json }
            | Commands::Categories { json },
        ) if *json => OutputMode::Json,
        _ => OutputMode::Text,
    }
}

/// Best-effort mode detection for failures raised before clap succeeds.
pub fn infer_requested_output_mode(raw_args: &[String]) -> OutputMode {
    if raw_args.iter().skip(1).any(|value| value == "--json") {
        return OutputMode::Json;
    }
    OutputMode::Text
}
