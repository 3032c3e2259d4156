//! # fetch_replies
//!
//! Fetches every reply to a tweet and saves them, joined with author profiles,
//! as `twitter_replies_<id>.json` and `twitter_replies_<id>.csv`.
//!
//! ## Environment Variables
//!
//! - `TWITTER_BEARER_TOKEN`: Twitter API Bearer Token (or `bearer_token` in the config file)
//! - `TWITTER_API_BASE_URL`: Optional API root override
//! - `RUST_LOG`: Log level, defaults to `info`
//!
//! ## Example Usage
//!
//! ```bash
//! fetch_replies https://twitter.com/user/status/1234567890
//! RUST_LOG=debug fetch_replies 1234567890 --output-dir out
//! ```

use clap::Parser;
use std::path::PathBuf;

use twitter_replies::config::DEFAULT_CONFIG_PATH;
use twitter_replies::{
    resolve_tweet_id, run_fetch, HttpSearchClient, ReplyFetchError, TwitterConfig,
};

#[derive(Debug, Parser)]
#[command(
    name = "fetch_replies",
    version,
    about = "Fetch all replies to a tweet with their authors' profile metrics"
)]
struct Cli {
    /// Tweet status URL or bare tweet ID
    tweet_url_or_id: Option<String>,

    /// JSON file holding `bearer_token`, used when TWITTER_BEARER_TOKEN is unset
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Directory the JSON and CSV files are written to
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,
}

async fn run(cli: Cli) -> Result<(), ReplyFetchError> {
    let config = TwitterConfig::resolve(&cli.config)?;
    let tweet_id = resolve_tweet_id(cli.tweet_url_or_id.as_deref())?;

    println!("Fetching replies to tweet {}...", tweet_id);
    let client = HttpSearchClient::new(&config.api_base_url, &config.bearer_token);
    let result = run_fetch(&client, &tweet_id, &cli.output_dir).await?;

    let Some(files) = result.files else {
        println!("No replies found.");
        return Ok(());
    };

    println!();
    println!("=== Summary ===");
    println!("Total replies fetched: {}", result.records.len());
    println!("JSON file: {}", files.json_file.display());
    if let Some(csv_file) = files.csv_file {
        println!("CSV file: {}", csv_file.display());
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}
