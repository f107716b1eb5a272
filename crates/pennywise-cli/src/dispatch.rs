use chrono::NaiveDate;
use pennywise_client::commands;
use pennywise_client::{ClientError, ClientResult, ExpenseInput, Settings, SuccessEnvelope};

use crate::cli::Commands;

/// Runs one non-interactive command against freshly loaded settings.
pub fn dispatch(
    command: &Commands,
    settings: &Settings,
    today: NaiveDate,
) -> ClientResult<SuccessEnvelope> {
    match command {
        Commands::Add {
            amount,
            category,
            date,
            description,
            json: _,
        } => {
            let input = ExpenseInput {
                amount: amount.clone(),
                category: category.clone(),
                date: date.clone(),
                description: description.clone(),
            };
            commands::add::run(settings, &input, today)
        }
        Commands::List { .. } => commands::list::run(settings),
        Commands::Report { .. } => commands::report::run(settings),
        Commands::Chart { .. } => commands::chart::run(settings),
        Commands::Categories { .. } => commands::categories::run(settings),
        Commands::Shell => Err(ClientError::invalid_argument_with_recovery(
            "The interactive shell cannot run as a one-shot command.",
            vec!["Run `pennywise` or `pennywise shell` from a terminal.".to_string()],
        )),
    }
}
