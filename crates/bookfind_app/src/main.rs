mod app;
mod effects;
mod logging;
mod render;

use std::path::PathBuf;

use clap::Parser;

use crate::logging::LogDestination;

/// Terminal client for searching books on an Open Library compatible endpoint.
#[derive(Parser, Debug)]
#[command(name = "bookfind", version, about)]
struct Args {
    /// Search endpoint to query.
    #[arg(long, default_value = "https://openlibrary.org/search.json")]
    endpoint: String,

    /// Results per page.
    #[arg(long, default_value_t = 10)]
    page_size: u32,

    /// File carrying the last submitted search across sessions.
    #[arg(long, default_value = ".bookfind_session")]
    session_file: PathBuf,

    /// Where log output goes.
    #[arg(long, value_enum, default_value_t = LogDestination::File)]
    log: LogDestination,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::initialize(args.log);
    app::run(args).await
}
