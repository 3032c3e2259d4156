//! Twitter/X API integration module.
//!
//! This module contains the identifier resolver, the recent search transport,
//! and the paginated reply fetcher, using Bearer Token authentication.

mod api;
mod models;
mod parsing;
mod search;

pub use api::{
    build_bearer_auth_header, sanitize_for_logging, HttpSearchClient, SearchClient, SearchQuery,
    DEFAULT_API_BASE_URL, EXPANSIONS, MAX_RESULTS, SEARCH_RECENT_PATH, TWEET_FIELDS, USER_FIELDS,
};
pub use models::{
    ApiError, Includes, Meta, SearchResponse, Tweet, TweetMetrics, User, UserMetrics,
};
pub use parsing::{extract_tweet_id, resolve_tweet_id, USAGE};
pub use search::{fetch_replies, FetchedReplies, UserDirectory};
