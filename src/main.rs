use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use expense_ledger::cli::{
    handle_add_command, handle_audit_command, handle_categories_command, handle_chart_command,
    handle_export_command, handle_list_command, handle_summary_command, handle_verify_command,
    AddArgs, ExportArgs, ListArgs, PeriodArgs, SummaryArgs,
};
use expense_ledger::config::{paths::LedgerPaths, settings::Settings};
use expense_ledger::storage::{json_file_valid, Storage};

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Record expenses and see where the money went",
    long_about = "Keeps an append-only ledger of expenses in a JSON file and \
                  reports totals, per-category breakdowns and monthly summaries."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a new expense
    Add(AddArgs),

    /// List recorded expenses
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show the total and the breakdown by category
    Summary(SummaryArgs),

    /// Chart the share of each category
    Chart(PeriodArgs),

    /// List categories and how often they are used
    Categories,

    /// Export the ledger
    Export(ExportArgs),

    /// Check a JSON or YAML export against its metadata
    Verify {
        /// Export file to check
        file: PathBuf,
    },

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Write default settings and create the data directories
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = LedgerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing expense ledger at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Settings written to: {}", paths.settings_file().display());
            println!("Run 'expenses add 12.50 \"Lunch\" -c Food' to record an expense.");
        }
        Some(Commands::Config) => print_config(&paths, &settings),
        Some(Commands::Verify { file }) => handle_verify_command(&file, &settings.currency_symbol)?,
        Some(command) => run_ledger_command(paths, &settings, command)?,
        None => {
            println!("Expense Ledger - record expenses and see where the money went");
            println!();
            println!("Run 'expenses --help' for usage information.");
        }
    }

    Ok(())
}

fn run_ledger_command(paths: LedgerPaths, settings: &Settings, command: Commands) -> Result<()> {
    let mut storage = Storage::new(paths, settings)?;

    // The audit log is readable even when the ledger file is damaged
    if !matches!(command, Commands::Audit { .. }) {
        storage.load_all()?;
    }

    match command {
        Commands::Add(args) => handle_add_command(&mut storage, settings, args)?,
        Commands::List(args) => handle_list_command(&mut storage, settings, args)?,
        Commands::Summary(args) => handle_summary_command(&storage, settings, args)?,
        Commands::Chart(period) => handle_chart_command(&storage, settings, period)?,
        Commands::Categories => handle_categories_command(&storage, settings)?,
        Commands::Export(args) => handle_export_command(&storage, args)?,
        Commands::Audit { limit } => handle_audit_command(&storage, limit)?,
        Commands::Init | Commands::Config | Commands::Verify { .. } => {}
    }

    Ok(())
}

fn print_config(paths: &LedgerPaths, settings: &Settings) {
    let ledger_file = paths.ledger_file();
    let ledger_status = match std::fs::read_to_string(&ledger_file) {
        Err(_) => "not created yet",
        Ok(contents) if contents.trim().is_empty() => "empty",
        Ok(_) if json_file_valid(&ledger_file) => "ok",
        Ok(_) => "CORRUPT",
    };

    println!("Expense Ledger Configuration");
    println!("============================");
    println!("Base directory:   {}", paths.base_dir().display());
    println!("Ledger file:      {} ({})", ledger_file.display(), ledger_status);
    println!("Settings file:    {}", paths.settings_file().display());
    println!("Audit log:        {}", paths.audit_log().display());
    println!("Export directory: {}", paths.export_dir().display());
    println!();
    println!("Settings:");
    println!("  Currency symbol:      {}", settings.currency_symbol);
    println!("  Amount policy:        {}", settings.amount_policy);
    println!("  Category mode:        {:?}", settings.category_mode);
    println!("  Corrupt store policy: {:?}", settings.corrupt_store_policy);
    println!("  Audit enabled:        {}", settings.audit_enabled);
}
