//! Text parsing utilities for tweet identifiers.
//!
//! This module turns the free-form command-line argument into the conversation
//! identifier used as the search filter.

use crate::error::ReplyFetchError;

pub const USAGE: &str = "Usage: fetch_replies <tweet_url_or_id>";

/// Extracts the tweet ID from a status URL, or returns the input unchanged.
///
/// Any string containing `status/<digits>` yields exactly those digits, so both
/// `https://twitter.com/user/status/123` and `https://x.com/user/status/123?s=20`
/// resolve to `"123"`. Anything else is assumed to already be a bare ID.
///
/// # Parameters
///
/// - `arg`: The raw argument, as typed by the user
///
/// # Returns
///
/// The canonical conversation ID.
pub fn extract_tweet_id(arg: &str) -> String {
    regex::Regex::new(r"status/(\d+)")
        .ok()
        .and_then(|re| re.captures(arg))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| arg.to_string())
}

/// Resolves the optional command-line argument into a conversation ID.
///
/// # Returns
///
/// - `Ok(String)`: The resolved ID
/// - `Err(ReplyFetchError::Usage)`: If no argument was supplied
pub fn resolve_tweet_id(arg: Option<&str>) -> Result<String, ReplyFetchError> {
    match arg {
        Some(arg) => Ok(extract_tweet_id(arg)),
        None => Err(ReplyFetchError::Usage(USAGE.to_string())),
    }
}
