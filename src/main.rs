use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use homekeeper::cli::{
    handle_auth_command, handle_budget_command, handle_calendar_command, handle_community_command,
    handle_config_command, handle_emergency_command, handle_fridge_command, handle_items_command,
    handle_routes_command, handle_schedule_command, Context,
};
use homekeeper::config::{init_tracing, paths::HomekeeperPaths, settings::Settings};
use homekeeper::export::OutputFormat;

#[derive(Parser)]
#[command(
    name = "homekeeper",
    author = "Kaylee Beyene",
    version,
    about = "Dashboards for living on your own",
    long_about = "Homekeeper collects the pages a person living alone checks every day: \
                  the monthly budget, the fridge, home chores, the calendar, the community \
                  board, recommended items and emergency contacts."
)]
struct Cli {
    /// Evaluate every page as of this date (YYYY-MM-DD)
    #[arg(long, global = true, env = "HOMEKEEPER_TODAY")]
    today: Option<NaiveDate>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Monthly budget and expenses
    #[command(subcommand)]
    Budget(homekeeper::cli::BudgetCommands),

    /// Fridge inventory, recipes and the shopping list
    #[command(subcommand, alias = "shopping")]
    Fridge(homekeeper::cli::FridgeCommands),

    /// Home-maintenance tasks and nearby facilities
    #[command(subcommand)]
    Schedule(homekeeper::cli::ScheduleCommands),

    /// Calendar events
    #[command(subcommand)]
    Calendar(homekeeper::cli::CalendarCommands),

    /// Community board and groups
    #[command(subcommand)]
    Community(homekeeper::cli::CommunityCommands),

    /// Recommended items
    Items(homekeeper::cli::ItemsArgs),

    /// Emergency contacts and counselling
    #[command(subcommand)]
    Emergency(homekeeper::cli::EmergencyCommands),

    /// Login, registration and profile
    #[command(subcommand)]
    Auth(homekeeper::cli::AuthCommands),

    /// Route table and navigation menu
    #[command(subcommand)]
    Routes(homekeeper::cli::RoutesCommands),

    /// Show or initialize configuration
    #[command(subcommand)]
    Config(homekeeper::cli::ConfigCommands),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = HomekeeperPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    init_tracing(&settings.log_level);

    let ctx = Context::new(settings, cli.today, cli.format);
    tracing::debug!(today = %ctx.today, "starting");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Some(Commands::Budget(cmd)) => handle_budget_command(&ctx, cmd, &mut out)?,
        Some(Commands::Fridge(cmd)) => handle_fridge_command(&ctx, cmd, &mut out)?,
        Some(Commands::Schedule(cmd)) => handle_schedule_command(&ctx, cmd, &mut out)?,
        Some(Commands::Calendar(cmd)) => handle_calendar_command(&ctx, cmd, &mut out)?,
        Some(Commands::Community(cmd)) => handle_community_command(&ctx, cmd, &mut out)?,
        Some(Commands::Items(args)) => handle_items_command(&ctx, args, &mut out)?,
        Some(Commands::Emergency(cmd)) => handle_emergency_command(&ctx, cmd, &mut out)?,
        Some(Commands::Auth(cmd)) => handle_auth_command(&ctx, cmd, &mut out).await?,
        Some(Commands::Routes(cmd)) => handle_routes_command(&ctx, cmd, &mut out)?,
        Some(Commands::Config(cmd)) => handle_config_command(&ctx, &paths, cmd, &mut out)?,
        None => {
            println!("Homekeeper - dashboards for living on your own");
            println!();
            println!("Run 'homekeeper --help' for usage information.");
            println!("Run 'homekeeper budget summary' to see this month's budget.");
        }
    }

    Ok(())
}
