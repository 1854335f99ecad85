use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use monospend::cli::export::ImportFormat;
use monospend::cli::{
    handle_budget_command, handle_check, handle_expense_command, handle_export_command,
    handle_forecast, handle_import, handle_limits, handle_log, handle_status,
    handle_subscription_command, handle_wishlist_command, BudgetCommands, ExpenseCommands,
    ExportCommands, SubscriptionCommands, WishlistCommands,
};
use monospend::config::{MonospendPaths, Settings};
use monospend::storage::JsonFileStore;

#[derive(Parser)]
#[command(
    name = "monospend",
    version,
    about = "Personal budgeting dashboard in the terminal",
    long_about = "monospend tracks expenses, subscriptions and a monthly budget, and \
                  derives reserves, daily allowance, category limit status, \
                  abnormal-spend alerts and a reserve depletion forecast."
)]
struct Cli {
    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Evaluate as of this date instead of today (YYYY-MM-DD)
    #[arg(long, global = true, env = "MONOSPEND_TODAY")]
    today: Option<NaiveDate>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the dashboard
    Status,

    /// Show category limit status; exits with code 2 if any category is clipping
    Limits,

    /// Show the burn-rate forecast
    Forecast,

    /// Check whether an amount would be flagged as abnormal for a category
    Check {
        amount: String,
        category: String,
    },

    /// Log expenses and wishlist goals from free text, e.g. "Taxi 45, Lunch 12 food"
    Log {
        text: String,
        /// Keep logged expenses out of narrated insights
        #[arg(long)]
        private: bool,
        /// Log anomalous expenses without holding them back
        #[arg(short, long)]
        yes: bool,
    },

    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Subscription management commands
    #[command(subcommand, alias = "sub")]
    Subscription(SubscriptionCommands),

    /// Wishlist commands
    #[command(subcommand)]
    Wishlist(WishlistCommands),

    /// Budget configuration commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Export data
    #[command(subcommand)]
    Export(ExportCommands),

    /// Restore from a JSON/YAML snapshot or append expenses from CSV
    Import {
        file: PathBuf,
        /// File format (guessed from the extension if omitted)
        #[arg(short, long, value_enum)]
        format: Option<ImportFormat>,
    },

    /// Show or change configuration
    Config {
        /// Currency symbol used in output
        #[arg(long)]
        currency: Option<String>,
        /// Date format (strftime)
        #[arg(long)]
        date_format: Option<String>,
        /// Forecasts below this many days are flagged critical
        #[arg(long)]
        critical_days: Option<i64>,
        /// Hold anomalous expenses for confirmation
        #[arg(long)]
        anomaly_hold: Option<bool>,
        /// Number of recent expenses offered to insights
        #[arg(long)]
        insight_sample: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    monospend::init_tracing(cli.verbose);

    let paths = MonospendPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    let mut store = JsonFileStore::open(paths.clone())?;

    let today = cli
        .today
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    tracing::debug!(%today, base_dir = %paths.base_dir().display(), "starting");

    match cli.command {
        Some(Commands::Status) => handle_status(&store, &settings, today)?,
        Some(Commands::Limits) => {
            let clipping = handle_limits(&store, &settings, today)?;
            if clipping > 0 {
                std::process::exit(2);
            }
        }
        Some(Commands::Forecast) => handle_forecast(&store, &settings, today)?,
        Some(Commands::Check { amount, category }) => {
            handle_check(&store, &settings, &amount, &category)?
        }
        Some(Commands::Log { text, private, yes }) => {
            handle_log(&mut store, &settings, today, &text, private, yes)?;
        }
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&mut store, &settings, today, cmd)?;
        }
        Some(Commands::Subscription(cmd)) => {
            handle_subscription_command(&mut store, &settings, cmd)?;
        }
        Some(Commands::Wishlist(cmd)) => {
            handle_wishlist_command(&mut store, &settings, today, cmd)?;
        }
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&mut store, &settings, cmd)?;
        }
        Some(Commands::Export(cmd)) => handle_export_command(&store, cmd)?,
        Some(Commands::Import { file, format }) => handle_import(&mut store, &file, format)?,
        Some(Commands::Config {
            currency,
            date_format,
            critical_days,
            anomaly_hold,
            insight_sample,
        }) => {
            let changed = currency.is_some()
                || date_format.is_some()
                || critical_days.is_some()
                || anomaly_hold.is_some()
                || insight_sample.is_some();

            if let Some(currency) = currency {
                settings.currency_symbol = currency;
            }
            if let Some(date_format) = date_format {
                settings.date_format = date_format;
            }
            if let Some(days) = critical_days {
                settings.critical_depletion_days = days;
            }
            if let Some(hold) = anomaly_hold {
                settings.anomaly_hold = hold;
            }
            if let Some(size) = insight_sample {
                settings.insight_sample_size = size;
            }
            if changed {
                settings.save(&paths)?;
                println!("Configuration saved.");
                println!();
            }

            println!("monospend Configuration");
            println!("=======================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:         {}", settings.currency_symbol);
            println!("  Date format:             {}", settings.date_format);
            println!("  Critical forecast days:  {}", settings.critical_depletion_days);
            println!("  Anomaly hold:            {}", settings.anomaly_hold);
            println!("  Insight sample size:     {}", settings.insight_sample_size);
        }
        None => {
            println!("monospend - personal budgeting dashboard");
            println!();
            println!("Run 'monospend --help' for usage information.");
            println!("Run 'monospend status' to see the dashboard.");
        }
    }

    Ok(())
}
