//! Non-interactive fetch of one account.
//!
//! Usage: fetch_media <account> [--yes]

use clap::Parser;
use twitter_fetcher::commands::{fetch, FetchOptions};
use twitter_fetcher::Settings;

#[derive(Parser)]
#[command(name = "fetch_media")]
#[command(about = "Download all media from a Twitter/X account")]
struct Args {
    /// Account reference: handle, @handle, or profile URL
    account: String,

    /// Skip confirmations
    #[arg(short, long, default_value_t = false)]
    yes: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let settings = Settings::new();

    fetch::run(
        &settings,
        FetchOptions {
            account: Some(args.account),
            assume_yes: args.yes,
            setup_auth: false,
        },
    )
    .await?;

    Ok(())
}
