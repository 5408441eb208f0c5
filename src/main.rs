use clap::{Parser, Subcommand};
use tracing::{error, info, warn};

use store_scraper::config::Config;
use store_scraper::constants;
use store_scraper::logging;
use store_scraper::pipeline::Pipeline;
use store_scraper::spiders::create_spider;

#[derive(Parser)]
#[command(name = "store_scraper")]
#[command(about = "Retail chain store-locator data scraper")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch store listings and write NDJSON dumps
    Fetch {
        /// Specific spiders to run (comma-separated). Available: tjx, poundland
        #[arg(long)]
        spiders: Option<String>,
    },
    /// List the supported spiders
    List,
}

async fn run_spiders(api_names: &[String], config: &Config) {
    for api_name in api_names {
        let span = tracing::info_span!("Running spider", api = %api_name);
        let _enter = span.enter();

        let Some(spider) = create_spider(api_name, config) else {
            warn!("Unknown spider specified");
            println!("⚠️  Unknown spider: {api_name}");
            continue;
        };

        info!("Starting pipeline");
        match Pipeline::run_for_api(spider, &config.output_dir).await {
            Ok(result) => {
                info!("Pipeline finished");
                println!("\n📊 Pipeline results for {api_name}:");
                println!("   Raw entries: {}", result.total_raw);
                println!("   Records: {}", result.total_records);
                println!("   Skipped: {}", result.skipped);
                println!("   Errors: {}", result.errors.len());
                println!("   Output file: {}", result.output_file);

                if !result.errors.is_empty() {
                    warn!("{} errors encountered during pipeline run", result.errors.len());
                    println!("\n⚠️  Errors encountered:");
                    for error in &result.errors {
                        println!("   - {error}");
                    }
                }
            }
            Err(e) => {
                error!("Pipeline failed: {}", e);
                println!("❌ Pipeline failed for {api_name}: {e}");
            }
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _log_guard = logging::init_logging();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Fetch { spiders } => {
            let api_names: Vec<String> = match spiders {
                Some(list) => list.split(',').map(|s| s.trim().to_string()).collect(),
                None => constants::get_supported_apis()
                    .into_iter()
                    .map(|s| s.to_string())
                    .collect(),
            };
            run_spiders(&api_names, &config).await;
        }
        Commands::List => {
            println!("Supported spiders:");
            for api_name in constants::get_supported_apis() {
                println!("  {api_name}");
            }
        }
    }

    Ok(())
}
