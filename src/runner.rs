//! One end-to-end run: fetch a conversation, merge, and save.

use log::info;
use std::path::Path;

use crate::error::ReplyFetchError;
use crate::merge::{merge_replies, FlatReplyRecord};
use crate::output::{save_files, SavedFiles};
use crate::twitter::{fetch_replies, SearchClient};

/// Outcome of a run. `files` is `None` when no replies were found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunResult {
    pub conversation_id: String,
    pub records: Vec<FlatReplyRecord>,
    pub files: Option<SavedFiles>,
}

/// Fetches all replies to `conversation_id` and writes them to `output_dir`.
///
/// Upstream failures only shorten the result. The only errors returned are
/// output serialization and file write failures.
pub async fn run_fetch<C: SearchClient + ?Sized>(
    client: &C,
    conversation_id: &str,
    output_dir: &Path,
) -> Result<RunResult, ReplyFetchError> {
    let fetched = fetch_replies(client, conversation_id).await;

    if fetched.tweets.is_empty() {
        info!("No replies found for conversation {}", conversation_id);
        return Ok(RunResult {
            conversation_id: conversation_id.to_string(),
            records: Vec::new(),
            files: None,
        });
    }

    info!("Processing {} replies...", fetched.tweets.len());
    let records = merge_replies(&fetched.tweets, &fetched.users);
    let files = save_files(&records, conversation_id, output_dir)?;

    Ok(RunResult {
        conversation_id: conversation_id.to_string(),
        records,
        files: Some(files),
    })
}
