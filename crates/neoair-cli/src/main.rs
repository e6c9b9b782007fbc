mod audit;
mod locate;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "neoair-cli")]
#[command(about = "NEO Air marketing site toolbox")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Audit generated pages for near-duplicate content
    Audit(AuditArgs),
    /// Resolve a location signal against the service-area catalog
    Locate(LocateArgs),
}

#[derive(Debug, Args)]
struct AuditArgs {
    /// Also write the full per-pair similarity artifact
    #[arg(long)]
    detailed: bool,

    /// Randomly sample the candidate list down to N pages
    #[arg(long, value_name = "N")]
    sample: Option<usize>,

    /// Audit only location landing pages
    #[arg(long, conflicts_with = "service_details")]
    locations: bool,

    /// Audit only service detail pages
    #[arg(long)]
    service_details: bool,
}

#[derive(Debug, Args)]
struct LocateArgs {
    /// A catalog slug, "City, ST" string, 5-digit zip, or "lat,lng" pair
    input: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = neoair_core::load_app_config_from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Audit(args) => audit::run(&config, &args).await,
        Commands::Locate(args) => locate::run(&args),
    }
}
