use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "pennywise",
    version,
    about = "personal expense ledger",
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Ledger CSV file to use instead of `<home>/expenses.csv`
    #[arg(long, global = true)]
    pub ledger: Option<PathBuf>,
    /// Pennywise home directory holding config.toml and the default ledger
    #[arg(long, global = true)]
    pub home: Option<PathBuf>,
    /// Runs the interactive menu when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Open the interactive menu (add, view, report, visualize, save and exit)
    Shell,
    /// Record one expense and save the ledger
    Add {
        /// Positive amount, e.g. 12.50
        #[arg(long, allow_negative_numbers = true)]
        amount: String,
        /// Category number (see `pennywise categories`) or label
        #[arg(long)]
        category: String,
        /// Date as YYYY-MM-DD; defaults to today
        #[arg(long)]
        date: Option<String>,
        /// Optional free-form note
        #[arg(long)]
        description: Option<String>,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// List every expense in stored order with a running total
    List {
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Show totals, category shares, the highest expense and monthly spending
    Report {
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Draw category share and category magnitude charts
    Chart {
        /// Emit the chart series as JSON instead of drawing them
        #[arg(long)]
        json: bool,
    },
    /// List the configured categories and their menu numbers
    Categories {
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Shell => "shell",
            Commands::Add { .. } => "add",
            Commands::List { .. } => "list",
            Commands::Report { .. } => "report",
            Commands::Chart { .. } => "chart",
            Commands::Categories { .. } => "categories",
        }
    }
}

#[cfg(test)]
pub fn parse_from<I, T>(itr: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(itr)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::{Commands, parse_from};

    #[test]
    fn parse_command_paths() {
        let cases: [Vec<&str>; 12] = [
            vec!["pennywise"],
            vec!["pennywise", "shell"],
            vec!["pennywise", "add", "--amount", "4.5", "--category", "1"],
            vec![
                "pennywise",
                "add",
                "--amount",
                "4.5",
                "--category",
                "Food",
                "--date",
                "2024-02-29",
                "--description",
                "lunch",
                "--json",
            ],
            vec!["pennywise", "list"],
            vec!["pennywise", "list", "--json"],
            vec!["pennywise", "report"],
            vec!["pennywise", "report", "--json"],
            vec!["pennywise", "chart"],
            vec!["pennywise", "chart", "--json"],
            vec!["pennywise", "categories", "--json"],
            vec!["pennywise", "--ledger", "./books.csv", "report"],
        ];

        for case in cases {
            let parsed = parse_from(case.clone());
            assert!(parsed.is_ok(), "failed to parse: {case:?}");
        }
    }

    #[test]
    fn negative_amounts_reach_validation() {
        let parsed = parse_from(["pennywise", "add", "--amount", "-5", "--category", "1"]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            assert!(matches!(
                cli.command,
                Some(Commands::Add { ref amount, .. }) if amount == "-5"
            ));
        }
    }

    #[test]
    fn global_ledger_flag_is_accepted_after_subcommand() {
        let parsed = parse_from(["pennywise", "list", "--ledger", "other.csv"]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            assert_eq!(cli.ledger, Some(PathBuf::from("other.csv")));
        }
    }

    #[test]
    fn add_requires_amount_and_category() {
        assert!(parse_from(["pennywise", "add", "--amount", "3"]).is_err());
        assert!(parse_from(["pennywise", "add", "--category", "1"]).is_err());
    }

    #[test]
    fn unknown_commands_are_rejected() {
        assert!(parse_from(["pennywise", "delete"]).is_err());
    }
}
