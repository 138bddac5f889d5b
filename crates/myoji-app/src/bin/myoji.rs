use clap::Parser;

use myoji_config::Config;
use myoji_core::fetch::HttpFetcher;
use myoji_core::lookup::{LookupService, SurnameLookup};

/// Look up one Japanese surname's statistics.
#[derive(Parser)]
#[command(name = "myoji", version, about = "Look up Japanese surname statistics")]
struct Args {
    /// Surname to look up, in kanji.
    myoji: Option<String>,

    /// Skip the cache when reading; a fresh result is still written back.
    #[arg(long)]
    nocache: bool,

    /// Human-readable output instead of JSON.
    #[arg(long)]
    text: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    myoji_app::init_tracing();

    let args = Args::parse();
    let Some(myoji) = args.myoji else {
        return Ok(());
    };

    let config = Config::from_env();
    let service = LookupService::new(config, HttpFetcher::new());

    // A failed lookup prints nothing; absence is not a process error.
    if let Some(record) = service.lookup(&myoji, !args.nocache).await {
        if args.text {
            print!("{}", myoji_app::format_text(&record));
        } else {
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
    }

    Ok(())
}
