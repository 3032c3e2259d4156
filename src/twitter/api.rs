//! Core Twitter API utilities.
//!
//! This module contains the transport used by the paginated fetcher: the
//! [`SearchClient`] seam, its reqwest-backed implementation, and the helpers for
//! building authenticated search requests.

use async_trait::async_trait;
use log::{debug, error, info};
use reqwest::Client;

use super::models::SearchResponse;
use crate::error::UpstreamError;

pub const DEFAULT_API_BASE_URL: &str = "https://api.twitter.com/2";
pub const SEARCH_RECENT_PATH: &str = "/tweets/search/recent";

pub const TWEET_FIELDS: &str = "author_id,created_at,public_metrics,in_reply_to_user_id";
pub const EXPANSIONS: &str = "author_id";
pub const USER_FIELDS: &str = "username,name,public_metrics,description";
pub const MAX_RESULTS: u32 = 100;

/// Builds the Authorization header value for a static bearer credential.
///
/// ```rust
/// use twitter_replies::twitter::build_bearer_auth_header;
///
/// assert_eq!(build_bearer_auth_header("abc"), "Bearer abc");
/// ```
pub fn build_bearer_auth_header(bearer_token: &str) -> String {
    format!("Bearer {}", bearer_token)
}

/// Sanitizes text for safe logging by truncating and escaping control characters.
///
/// # Parameters
///
/// - `text`: The text to sanitize
/// - `max_len`: Maximum length in characters before truncation
///
/// # Returns
///
/// A single-line string safe for logging
pub fn sanitize_for_logging(text: &str, max_len: usize) -> String {
    let sanitized: String = text
        .chars()
        .map(|c| match c {
            '\n' | '\r' | '\t' => ' ',
            c if c.is_control() => '?',
            c => c,
        })
        .collect();

    if sanitized.chars().count() > max_len {
        let head: String = sanitized.chars().take(max_len).collect();
        format!("{}... [truncated, {} total bytes]", head, text.len())
    } else {
        sanitized
    }
}

/// Parameters of one recent-search request for a conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub conversation_id: String,
    /// Cursor returned by the previous page; `None` for the first request.
    pub next_token: Option<String>,
}

impl SearchQuery {
    pub fn first_page(conversation_id: &str) -> Self {
        SearchQuery {
            conversation_id: conversation_id.to_string(),
            next_token: None,
        }
    }

    /// Query parameters in the order they are sent.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("query", format!("conversation_id:{}", self.conversation_id)),
            ("tweet.fields", TWEET_FIELDS.to_string()),
            ("expansions", EXPANSIONS.to_string()),
            ("user.fields", USER_FIELDS.to_string()),
            ("max_results", MAX_RESULTS.to_string()),
        ];
        if let Some(token) = &self.next_token {
            params.push(("next_token", token.clone()));
        }
        params
    }

    /// Percent-encoded query string, without the leading `?`.
    pub fn to_query_string(&self) -> String {
        self.params()
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Source of recent-search pages.
///
/// The fetcher only depends on this trait, so pagination can be driven by
/// scripted pages in tests.
#[async_trait]
pub trait SearchClient: Send + Sync {
    /// Fetches a single page. Non-success statuses and transport failures are
    /// returned as [`UpstreamError`]; an `errors` array in a successful payload is not.
    async fn search_page(&self, query: &SearchQuery) -> Result<SearchResponse, UpstreamError>;
}

/// [`SearchClient`] backed by the live Twitter API.
pub struct HttpSearchClient {
    client: Client,
    base_url: String,
    bearer_token: String,
}

impl HttpSearchClient {
    pub fn new(base_url: &str, bearer_token: &str) -> Self {
        HttpSearchClient {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            bearer_token: bearer_token.to_string(),
        }
    }

    pub fn search_url(&self, query: &SearchQuery) -> String {
        format!(
            "{}{}?{}",
            self.base_url,
            SEARCH_RECENT_PATH,
            query.to_query_string()
        )
    }
}

#[async_trait]
impl SearchClient for HttpSearchClient {
    async fn search_page(&self, query: &SearchQuery) -> Result<SearchResponse, UpstreamError> {
        let url = self.search_url(query);
        info!(
            "Requesting replies for conversation {} (cursor: {})",
            query.conversation_id,
            query.next_token.as_deref().unwrap_or("none")
        );
        debug!("Request URL: {}", url);
        debug!("Request headers: Authorization: Bearer [REDACTED]");

        let response = self
            .client
            .get(&url)
            .header("Authorization", build_bearer_auth_header(&self.bearer_token))
            .send()
            .await?;

        let status = response.status();
        debug!("Received response with status: {}", status);

        let body = response.text().await?;
        if !status.is_success() {
            error!("Error: {}", status);
            error!("{}", sanitize_for_logging(&body, 500));
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body,
            });
        }

        debug!("Response summary: {} bytes received", body.len());
        serde_json::from_str(&body).map_err(UpstreamError::Decode)
    }
}
