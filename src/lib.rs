//! # Twitter Replies
//!
//! A library and command-line tool that collects every reply in a Twitter/X
//! conversation through the API v2 recent search endpoint, joins each reply with
//! its author's profile metrics, and saves the result as JSON and CSV.
//!
//! ## Pipeline
//!
//! - Resolve the conversation ID from a status URL or a bare ID
//! - Page through `conversation_id:<id>` search results until no `next_token` is returned
//! - Merge each tweet with its author into a flat record
//! - Write `twitter_replies_<id>.json` and `twitter_replies_<id>.csv`
//!
//! ## Configuration
//!
//! - `TWITTER_BEARER_TOKEN`: Bearer Token (falls back to `bearer_token` in
//!   `.claude/commands/fetch-twitter-replies.config.json`)
//! - `TWITTER_API_BASE_URL`: API root (defaults to `https://api.twitter.com/2`)
//! - `RUST_LOG`: Log level (defaults to `info`)

pub mod config;
pub mod error;
pub mod merge;
pub mod output;
pub mod runner;
pub mod twitter;

// Re-export commonly used types and functions
pub use config::TwitterConfig;
pub use error::{ReplyFetchError, UpstreamError};
pub use merge::{merge_replies, FlatReplyRecord};
pub use output::{escape_csv, save_files, SavedFiles};
pub use runner::{run_fetch, RunResult};
pub use twitter::{fetch_replies, resolve_tweet_id, HttpSearchClient, SearchClient};
