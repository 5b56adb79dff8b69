use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{error, info, warn};

use dexdash::analytics::normalize;
use dexdash::config::{Config, DEFAULT_CONFIG_PATH};
use dexdash::discovery::{discover, PairRanker, SearchSession};
use dexdash::export::{self, report, ExportContext, ExportFormat};
use dexdash::logging::init_tracing;
use dexdash::util::display::print_ranked_pairs;
use dexdash::util::dexscreener::DexScreenerClient;
use dexdash::DexDashError;

#[derive(Parser)]
#[command(name = "dexdash", about = "Token pair discovery and analytics export")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search by name, symbol or contract address
    Search {
        query: String,

        /// Open the N-th ranked pair (1-based)
        #[arg(long)]
        select: Option<usize>,

        /// Export the selected pair
        #[arg(long, value_enum, requires = "select")]
        format: Option<FormatArg>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Json,
    Csv,
    Report,
    All,
}

impl FormatArg {
    fn formats(self) -> Vec<ExportFormat> {
        match self {
            FormatArg::Json => vec![ExportFormat::Json],
            FormatArg::Csv => vec![ExportFormat::Csv],
            FormatArg::Report => vec![ExportFormat::Report],
            FormatArg::All => ExportFormat::ALL.to_vec(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load_or_default(&cli.config).context("Failed to load configuration")?;
    let _guard = init_tracing(&config.logging)?;

    info!("📈 DexDash - pair discovery & analytics");

    match cli.command {
        Command::Search { query, select, format } => run_search(&config, &query, select, format).await,
    }
}

async fn run_search(config: &Config, query: &str, select: Option<usize>, format: Option<FormatArg>) -> Result<()> {
    let client = DexScreenerClient::new(&config.api)?;
    let ranker = PairRanker::from_config(&config.ranking);
    let session = SearchSession::new();

    let ticket = session.begin();
    let outcome = discover(&client, &ranker, query).await;
    let Some(outcome) = session.accept(ticket, outcome) else {
        return Ok(());
    };

    let ranked = match outcome {
        Ok(ranked) => ranked,
        Err(e @ (DexDashError::NoResults | DexDashError::EmptyQuery)) => {
            println!("⚠️  {}", e);
            return Ok(());
        }
        Err(e) => {
            error!("Search failed: {}", e);
            return Err(e).context("Search failed");
        }
    };

    let Some(position) = select else {
        print_ranked_pairs(&ranked);
        return Ok(());
    };

    let Some(pair) = ranked.select(position) else {
        print_ranked_pairs(&ranked);
        anyhow::bail!("No pair #{} (found {})", position, ranked.len());
    };

    let now = Utc::now();
    let doc = normalize(pair);
    print!("{}", report::render(&doc, now));

    let ctx = ExportContext::from_config(&config.export, now);
    for format in format.map(FormatArg::formats).unwrap_or_default() {
        // A failed export leaves the others and the printed report unaffected
        match export::export(&doc, format, &ctx) {
            Ok(blob) => {
                let path = export::write_blob(&config.export.output_dir, &blob)?;
                println!("💾 Saved {}", path.display());
            }
            Err(e) => warn!("⚠️ {:?} export skipped: {}", format, e),
        }
    }

    Ok(())
}
