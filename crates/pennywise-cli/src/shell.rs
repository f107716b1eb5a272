use std::io::{self, BufRead, Write};
use std::sync::{Arc, Mutex, PoisonError};

use chrono::NaiveDate;
use pennywise_client::commands::{chart, list, report};
use pennywise_client::validate::{
    parse_category_choice, validate_amount, validate_date, validate_expense,
};
use pennywise_client::{ClientResult, ExpenseInput, RecordStore, Settings, SuccessEnvelope};

use crate::chart::ChartRenderer;
use crate::output::format::money;
use crate::output::{render_error, render_text_success};
use crate::prompt::Prompter;
use crate::stdout_io::write_line;

const BANNER_WIDTH: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellExit {
    Saved,
    SaveFailed,
}

/// The session's in-memory ledger, shared with the interrupt handler so an
/// interrupted session can still be saved.
#[derive(Debug, Clone)]
pub struct SharedLedger {
    store: Arc<Mutex<RecordStore>>,
}

impl SharedLedger {
    pub fn new(store: RecordStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    fn with<T>(&self, action: impl FnOnce(&mut RecordStore) -> T) -> T {
        let mut store = self.store.lock().unwrap_or_else(PoisonError::into_inner);
        action(&mut store)
    }
}

/// Flushes the ledger and reports the outcome on `out`.
pub fn save_ledger(ledger: &SharedLedger, out: &mut dyn Write) -> io::Result<ShellExit> {
    let (flushed, path) = ledger.with(|store| (store.flush(), store.path().display().to_string()));
    match flushed {
        Ok(()) => {
            write_line(out, &format!("Expenses saved to {path}"))?;
            Ok(ShellExit::Saved)
        }
        Err(error) => {
            tracing::error!(code = %error.code, "saving the ledger failed: {error}");
            write_line(out, &render_error(&error))?;
            Ok(ShellExit::SaveFailed)
        }
    }
}

/// What the interrupt handler runs before the process exits.
pub fn save_after_interrupt(ledger: &SharedLedger, out: &mut dyn Write) -> io::Result<ShellExit> {
    write_line(out, "\n\nProgram interrupted. Saving expenses...")?;
    save_ledger(ledger, out)
}

enum MenuChoice {
    Add,
    View,
    Report,
    Visualize,
    SaveAndExit,
}

impl MenuChoice {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().parse::<u8>().ok()? {
            1 => Some(Self::Add),
            2 => Some(Self::View),
            3 => Some(Self::Report),
            4 => Some(Self::Visualize),
            5 => Some(Self::SaveAndExit),
            _ => None,
        }
    }
}

/// The interactive menu over one in-memory ledger.
///
/// Nothing is written until "Save and Exit", end of input, or an interrupt
/// caught by the handler holding the same [`SharedLedger`].
pub struct Shell<'a, R, W> {
    settings: &'a Settings,
    charts: &'a dyn ChartRenderer,
    today: NaiveDate,
    ledger: SharedLedger,
    prompter: Prompter<R, W>,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(
        settings: &'a Settings,
        charts: &'a dyn ChartRenderer,
        today: NaiveDate,
        ledger: SharedLedger,
        prompter: Prompter<R, W>,
    ) -> Self {
        Self {
            settings,
            charts,
            today,
            ledger,
            prompter,
        }
    }

    pub fn run(&mut self) -> io::Result<ShellExit> {
        let banner = "=".repeat(BANNER_WIDTH);
        self.prompter.say(&banner)?;
        self.prompter.say("    Welcome to Pennywise, your expense ledger!")?;
        self.prompter.say(&banner)?;

        self.describe_load()?;

        let settings = self.settings;
        let categories = &settings.categories;
        loop {
            self.prompter.say("")?;
            self.prompter.say("Main Menu:")?;
            self.prompter.say("1. Add an Expense")?;
            self.prompter.say("2. View All Expenses")?;
            self.prompter.say("3. Generate Report")?;
            self.prompter.say("4. Visualize Expenses")?;
            self.prompter.say("5. Save and Exit")?;

            let Some(answer) = self.prompter.ask("\nEnter your choice (1-5): ")? else {
                self.prompter.say("\n\nInput closed. Saving expenses...")?;
                return self.save();
            };

            match MenuChoice::parse(&answer) {
                Some(MenuChoice::Add) => {
                    let Some(input) = self.ask_expense()? else {
                        self.prompter.say("\n\nInput closed. Saving expenses...")?;
                        return self.save();
                    };
                    self.add_expense(&input)?;
                }
                Some(MenuChoice::View) => {
                    let result = self.ledger.with(|store| list::from_store(store));
                    self.show(result)?
                }
                Some(MenuChoice::Report) => {
                    let result = self
                        .ledger
                        .with(|store| report::from_store(store, categories));
                    self.show(result)?
                }
                Some(MenuChoice::Visualize) => {
                    let result = self
                        .ledger
                        .with(|store| chart::from_store(store, categories));
                    self.show(result)?
                }
                Some(MenuChoice::SaveAndExit) => {
                    let outcome = self.save()?;
                    self.prompter
                        .say("Thank you for using Pennywise. Goodbye!")?;
                    return Ok(outcome);
                }
                None => self
                    .prompter
                    .say("Invalid choice. Please enter a number between 1 and 5.")?,
            }
        }
    }

    fn describe_load(&mut self) -> io::Result<()> {
        let (load_error, count, path) = self.ledger.with(|store| {
            (
                store.load_error().cloned(),
                store.len(),
                store.path().to_path_buf(),
            )
        });

        if let Some(error) = load_error {
            self.prompter.say(&format!(
                "Error loading expenses: {error} Starting with an empty ledger."
            ))
        } else if path.exists() {
            self.prompter
                .say(&format!("Loaded {count} expenses from {}", path.display()))
        } else {
            self.prompter
                .say("No existing expense file found. Starting fresh.")
        }
    }

    /// Collects one entry field by field, re-asking until each answer is
    /// accepted. Returns `None` when input ended before the entry was complete.
    fn ask_expense(&mut self) -> io::Result<Option<ExpenseInput>> {
        let settings = self.settings;
        let categories = &settings.categories;
        let today = self.today;

        self.prompter.say("\n--- Add New Expense ---")?;
        let Some(amount) = self.prompter.prompt_until_valid("Enter expense amount: $", |raw| {
            validate_amount(raw).map(|_| raw.to_string())
        })?
        else {
            return Ok(None);
        };

        self.prompter.say("\nAvailable categories:")?;
        for (index, label) in categories.labels().iter().enumerate() {
            self.prompter.say(&format!("{}. {label}", index + 1))?;
        }
        let Some(category) = self.prompter.prompt_until_valid(
            &format!("Select category (1-{}): ", categories.len()),
            |raw| parse_category_choice(raw, categories).map(|_| raw.to_string()),
        )?
        else {
            return Ok(None);
        };

        let Some(date) = self.prompter.prompt_until_valid(
            "Enter date (YYYY-MM-DD) or press Enter for today: ",
            |raw| validate_date(raw, today).map(|_| raw.to_string()),
        )?
        else {
            return Ok(None);
        };

        let Some(description) = self.prompter.ask("Enter description (optional): ")? else {
            return Ok(None);
        };

        Ok(Some(ExpenseInput {
            amount,
            category,
            date: Some(date),
            description: Some(description),
        }))
    }

    /// `validate_expense` is the only way to build a record; the per-field
    /// prompts above have already accepted every answer it checks.
    fn add_expense(&mut self, input: &ExpenseInput) -> io::Result<()> {
        let record = validate_expense(input, &self.settings.categories, self.today)
            .map_err(io::Error::other)?;
        let amount = record.amount();
        self.ledger.with(|store| store.append(record));
        self.prompter
            .say(&format!("Expense of {} added successfully!", money(amount)))
    }

    fn show(&mut self, result: ClientResult<SuccessEnvelope>) -> io::Result<()> {
        let text = match result {
            Ok(success) => render_text_success(&success, self.charts)?,
            Err(error) => render_error(&error),
        };
        self.prompter.say("")?;
        self.prompter.say(&text)
    }

    fn save(&mut self) -> io::Result<ShellExit> {
        save_ledger(&self.ledger, self.prompter.writer())
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.prompter.into_output()
    }
}
