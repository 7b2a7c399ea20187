use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use expense_tracker::cli::{
    handle_add_command, handle_dashboard_command, handle_export_command, handle_list_command,
    AddArgs, DashboardArgs, ExportArgs, FilterArgs,
};
use expense_tracker::config::{paths::ExpensePaths, settings::Settings};
use expense_tracker::server::{run_server, AppState};
use expense_tracker::storage::{initialize_storage, Storage};

/// Environment variable holding a tracing filter directive
const LOG_ENV: &str = "EXPENSE_TRACKER_LOG";

#[derive(Parser)]
#[command(
    name = "expense",
    author = "Kaylee Beyene",
    version,
    about = "Personal expense tracker with spending dashboards",
    long_about = "Record expenses, browse them by category and date, and see where \
                  the money goes with monthly and per-category dashboards. Runs \
                  from the command line or as a small local web app."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a new expense
    Add(AddArgs),

    /// List expenses, newest first
    #[command(alias = "ls")]
    List(FilterArgs),

    /// Show monthly and per-category totals, optionally writing the charts
    Dashboard(DashboardArgs),

    /// Export expenses to a CSV file
    Export(ExportArgs),

    /// Run the web interface
    Serve {
        /// Address to listen on (defaults to the configured bind address)
        #[arg(short, long)]
        bind: Option<String>,
    },

    /// Create the data directory and default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = ExpensePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    init_logging(&settings);

    let storage = Storage::open(paths.clone())?;

    match cli.command {
        Some(Commands::Add(args)) => handle_add_command(&storage, &settings, args)?,
        Some(Commands::List(filter)) => handle_list_command(&storage, &settings, filter)?,
        Some(Commands::Dashboard(args)) => handle_dashboard_command(&storage, &settings, args)?,
        Some(Commands::Export(args)) => handle_export_command(&storage, args)?,
        Some(Commands::Serve { bind }) => {
            let addr = bind.unwrap_or_else(|| settings.bind_address.clone());
            let state = AppState::new(storage, settings);

            let runtime =
                tokio::runtime::Runtime::new().context("Failed to start the async runtime")?;
            runtime.block_on(run_server(state, &addr))?;
        }
        Some(Commands::Init) => {
            println!("Initializing expense tracker at: {}", paths.base_dir().display());
            initialize_storage(&paths)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Run 'expense add 12.50 Food -d lunch' to record your first expense.");
        }
        Some(Commands::Config) => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Data directory:  {}", paths.data_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Initialized:     {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Bind address:    {}", settings.bind_address);
            println!("  Log filter:      {}", settings.log_filter);
            println!(
                "  Chart sizes:     trend {}x{}, pie {}x{}",
                settings.charts.trend_width,
                settings.charts.trend_height,
                settings.charts.pie_width,
                settings.charts.pie_height
            );
        }
        None => {
            println!("Expense Tracker - record expenses and see where the money goes");
            println!();
            println!("Run 'expense --help' for usage information.");
            println!("Run 'expense serve' to open the web interface.");
        }
    }

    Ok(())
}

/// Log to stderr; `EXPENSE_TRACKER_LOG` wins over the configured filter
fn init_logging(settings: &Settings) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(&settings.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("expense_tracker=info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
