use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cashflow::cli::{
    handle_config, handle_decide, handle_init, handle_ledger, handle_summary, profile_path,
    RunArgs,
};
use cashflow::config::{CashflowPaths, Settings};

#[derive(Parser)]
#[command(
    name = "cashflow",
    version,
    about = "Household cash-flow projection and bill-safety checks",
    long_about = "Projects a household's cash balance over a horizon from pay \
                  schedules, monthly bills, lines of credit and planned items, \
                  tells you whether each upcoming bill is safe to pay and, when \
                  it is not, how much to borrow and what it will cost."
)]
struct Cli {
    #[command(flatten)]
    run: RunArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Decide whether upcoming bills are safe and what to do if not
    Decide {
        /// Profile file (JSON or YAML); defaults to profile.json in the data directory
        profile: Option<PathBuf>,
    },

    /// Show the projected ledger
    Ledger {
        /// Profile file (JSON or YAML)
        profile: Option<PathBuf>,
    },

    /// Show totals up to the next two paydays
    Summary {
        /// Profile file (JSON or YAML)
        profile: Option<PathBuf>,
    },

    /// Write a sample profile
    Init {
        /// Where to write it; the extension picks JSON or YAML
        path: Option<PathBuf>,
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let paths = CashflowPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Decide { profile }) => {
            handle_decide(&profile_path(&paths, profile), &cli.run, &settings)?;
        }
        Some(Commands::Ledger { profile }) => {
            handle_ledger(&profile_path(&paths, profile), &cli.run, &settings)?;
        }
        Some(Commands::Summary { profile }) => {
            handle_summary(&profile_path(&paths, profile), &cli.run, &settings)?;
        }
        Some(Commands::Init { path, force }) => {
            let today = cli.run.today()?;
            handle_init(&profile_path(&paths, path), today, force, &paths, &settings)?;
        }
        Some(Commands::Config) => {
            handle_config(&paths, &settings)?;
        }
        None => {
            println!("cashflow - household cash-flow projection");
            println!();
            println!("Run 'cashflow --help' for usage information.");
            println!("Run 'cashflow init' to write a sample profile.");
        }
    }

    Ok(())
}
