use clap::Parser;

use myoji_config::Config;
use myoji_core::fetch::HttpFetcher;
use myoji_core::lookup::LookupService;
use myoji_matrix::builder::{MatrixInput, build_matrix};
use myoji_matrix::render::render_table;

/// Population matrix over row×column surname combinations.
#[derive(Parser)]
#[command(
    name = "myoji-matrix",
    version,
    about = "Compose a population matrix of compound surnames"
)]
struct Args {
    /// Labels of the form "<row1> <row2> ... x <col1> <col2|alt2> ...".
    /// Suffix alternatives separated by | are summed per cell.
    input: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    myoji_app::init_tracing();

    let args = Args::parse();
    let Some(raw) = args.input else {
        return Ok(());
    };
    let Some(input) = MatrixInput::parse(&raw) else {
        tracing::warn!("input needs row and column labels separated by an x token");
        return Ok(());
    };

    let config = Config::from_env();
    let service = LookupService::new(config, HttpFetcher::new());

    let grid = build_matrix(&service, &input.rows, &input.cols).await;
    print!("{}", render_table(&input.rows, &input.cols, &grid));

    Ok(())
}
