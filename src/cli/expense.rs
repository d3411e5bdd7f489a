//! Expense CLI commands
//!
//! Recording, listing and category overview.

use clap::Args;

use super::PeriodArgs;
use crate::config::settings::Settings;
use crate::display::{format_category_list, format_expense_list};
use crate::error::LedgerResult;
use crate::models::{ExpenseDraft, YearMonth};
use crate::reports::by_category;
use crate::services::ExpenseService;
use crate::storage::Storage;

/// Arguments for `add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Amount (e.g. "12.50")
    #[arg(allow_hyphen_values = true)]
    pub amount: String,

    /// What the money was spent on
    pub description: String,

    /// Category label, defaults to Other
    #[arg(short, long)]
    pub category: Option<String>,

    /// Month number (1-12), defaults to the current month
    #[arg(short, long)]
    pub month: Option<String>,

    /// Four-digit year, defaults to the current year
    #[arg(short, long)]
    pub year: Option<String>,
}

impl AddArgs {
    /// Turn the arguments into a draft, filling in defaults
    pub fn into_draft(self, today: YearMonth) -> ExpenseDraft {
        ExpenseDraft {
            amount: self.amount,
            description: self.description,
            category: self.category.unwrap_or_else(|| "Other".to_string()),
            year: self.year.unwrap_or_else(|| today.year().to_string()),
            month: self.month.unwrap_or_else(|| today.month().to_string()),
        }
    }
}

/// Arguments for `list`
#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub period: PeriodArgs,

    /// Show only the most recent N records
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Handle `add`
pub fn handle_add_command(
    storage: &mut Storage,
    settings: &Settings,
    args: AddArgs,
) -> LedgerResult<()> {
    let draft = args.into_draft(YearMonth::current());
    let mut service = ExpenseService::new(storage, settings.validation_rules());
    let record = service.add(&draft)?;

    println!(
        "Recorded {} for '{}' under {} in {}",
        record.amount.format_with_symbol(&settings.currency_symbol),
        record.description,
        record.category,
        record.date
    );
    Ok(())
}

/// Handle `list`
pub fn handle_list_command(
    storage: &mut Storage,
    settings: &Settings,
    args: ListArgs,
) -> LedgerResult<()> {
    let period = args.period.resolve()?;
    let service = ExpenseService::new(storage, settings.validation_rules());
    let records = service.list(period, args.limit);

    if records.is_empty() {
        match period {
            Some(period) => println!("No expenses found for {}.", period),
            None => println!("No expenses recorded yet."),
        }
        return Ok(());
    }

    print!("{}", format_expense_list(&records, &settings.currency_symbol));
    Ok(())
}

/// Handle `categories`
pub fn handle_categories_command(storage: &Storage, settings: &Settings) -> LedgerResult<()> {
    let usage = by_category(storage.ledger.records());
    print!(
        "{}",
        format_category_list(settings.category_mode, &usage, &settings.currency_symbol)
    );
    Ok(())
}
