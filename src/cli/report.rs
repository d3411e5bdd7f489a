//! CLI commands for reports

use clap::Args;
use std::path::PathBuf;

use super::{create_output, PeriodArgs};
use crate::config::settings::Settings;
use crate::display::{format_chart, DEFAULT_CHART_WIDTH};
use crate::error::LedgerResult;
use crate::reports::ExpenseSummary;
use crate::storage::Storage;

/// Arguments for `summary`
#[derive(Args, Debug)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub period: PeriodArgs,

    /// Export to CSV file instead of printing
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle `summary`
pub fn handle_summary_command(
    storage: &Storage,
    settings: &Settings,
    args: SummaryArgs,
) -> LedgerResult<()> {
    let period = args.period.resolve()?;
    let report = ExpenseSummary::generate(storage.ledger.records(), period);

    if let Some(path) = args.output {
        let writer = create_output(&path)?;
        report.export_csv(writer)?;
        println!("Summary exported to: {}", path.display());
    } else {
        print!("{}", report.format_terminal(&settings.currency_symbol));
    }

    Ok(())
}

/// Handle `chart`
pub fn handle_chart_command(
    storage: &Storage,
    settings: &Settings,
    period: PeriodArgs,
) -> LedgerResult<()> {
    let period = period.resolve()?;
    let report = ExpenseSummary::generate(storage.ledger.records(), period);

    if report.is_empty() {
        println!("{}", report.empty_message());
        return Ok(());
    }

    let title = match report.period {
        Some(period) => format!("Expenses by Category, {}", period),
        None => "Expenses by Category".to_string(),
    };
    println!("{}\n", title);
    print!(
        "{}",
        format_chart(&report.shares(), &settings.currency_symbol, DEFAULT_CHART_WIDTH)
    );
    println!(
        "\nTotal: {}",
        report.total.format_with_symbol(&settings.currency_symbol)
    );

    Ok(())
}
