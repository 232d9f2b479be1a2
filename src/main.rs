use clap::{Parser, Subcommand};
use configuration::{ChartSettings, Config, DatasetSettings};
use dataset_client::HttpDatasetClient;
use tracing_subscriber::EnvFilter;

use crate::session::DashboardSession;

mod render;
mod session;

/// The main entry point for the Vantage analytics application.
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        // One descriptive message; no retry. The user restarts the session.
        eprintln!("Error: {e}. Please restart the session.");
        std::process::exit(1);
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Vendor performance analytics over the published sales summary dataset.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Override the configured dataset URL.
    #[arg(long)]
    url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the dataset and print every derived chart series.
    Dashboard,
    /// Load the dataset and print only the headline summary cards.
    Summary,
}

// ==============================================================================
// Session Orchestration
// ==============================================================================

/// Runs one full load→aggregate→render session.
async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match cli.url {
        // An explicit URL needs no config file; the chart tunables keep their
        // dashboard defaults.
        Some(url) => Config {
            dataset: DatasetSettings { url },
            charts: ChartSettings::default(),
        },
        None => configuration::load_config()?,
    };

    let client = HttpDatasetClient::new(&config.dataset);
    let session = DashboardSession::open(&client, &config.charts).await?;

    match cli.command {
        Commands::Dashboard => render::print_report(session.report()),
        Commands::Summary => render::print_summary(&session.report().summary),
    }

    session.reset();
    Ok(())
}
