use anyhow::Result;
use clap::{Parser, Subcommand};

use wedding_planner::cli::{
    handle_budget_command, handle_export_command, handle_schedule_command, handle_venue_command,
    BudgetArgs, ExportCommands, PlannerContext, ScheduleCommands, VenueCommands,
};
use wedding_planner::config::{PlannerPaths, Settings};
use wedding_planner::models::Currency;

#[derive(Parser)]
#[command(
    name = "wedding",
    version,
    about = "Wedding planning from the terminal",
    long_about = "Track the wedding budget against a target, keep a timeline of \
                  milestones and compare venues side by side."
)]
struct Cli {
    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Budget tracking
    Budget(BudgetArgs),

    /// Schedule milestones
    #[command(subcommand)]
    Schedule(ScheduleCommands),

    /// Venue comparison
    #[command(subcommand)]
    Venue(VenueCommands),

    /// Export data to CSV, JSON or YAML
    #[command(subcommand)]
    Export(ExportCommands),

    /// Create the data directory and settings file
    Init {
        /// Display language (e.g. en, ko)
        #[arg(long)]
        locale: Option<String>,
        /// Display currency (KRW or USD)
        #[arg(long)]
        currency: Option<Currency>,
    },

    /// Show current configuration and paths
    Config,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    wedding_planner::logging::init(cli.verbose);

    let paths = PlannerPaths::new()?;

    match cli.command {
        Some(Commands::Budget(args)) => {
            let ctx = PlannerContext::open(paths)?;
            handle_budget_command(&ctx, args).await?;
        }
        Some(Commands::Schedule(cmd)) => {
            let ctx = PlannerContext::open(paths)?;
            handle_schedule_command(&ctx, cmd).await?;
        }
        Some(Commands::Venue(cmd)) => {
            let ctx = PlannerContext::open(paths)?;
            handle_venue_command(&ctx, cmd)?;
        }
        Some(Commands::Export(cmd)) => {
            let ctx = PlannerContext::open(paths)?;
            handle_export_command(&ctx, cmd).await?;
        }
        Some(Commands::Init { locale, currency }) => {
            let mut settings = Settings::load_or_create(&paths)?;
            if locale.is_some() {
                settings.locale = locale;
            }
            if let Some(currency) = currency {
                settings.currency = currency;
            }
            settings.save(&paths)?;
            println!("Initialized wedding planner at: {}", paths.base_dir().display());
        }
        Some(Commands::Config) => {
            let ctx = PlannerContext::open(paths)?;
            println!("Wedding Planner Configuration");
            println!("=============================");
            println!("Base directory: {}", ctx.paths.base_dir().display());
            println!("Data directory: {}", ctx.paths.data_dir().display());
            println!("Initialized:    {}", ctx.paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Language:    {}", ctx.catalog.language());
            println!("  Currency:    {}", ctx.settings.currency);
            println!("  Date format: {}", ctx.settings.date_format);
        }
        None => {
            println!("Wedding Planner");
            println!();
            println!("Run 'wedding --help' for usage information.");
        }
    }

    Ok(())
}
