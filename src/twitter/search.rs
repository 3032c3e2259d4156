//! Reply search for Twitter API conversations.
//!
//! This module walks the cursor-paginated recent search endpoint for a single
//! conversation, accumulating every tweet and a deduplicated directory of authors.

use log::{debug, error, info, warn};
use std::collections::HashMap;

use super::api::{SearchClient, SearchQuery};
use super::models::{Tweet, User};
use crate::error::UpstreamError;

/// Users seen during a run, keyed by user ID. The first profile seen for an ID wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDirectory {
    users: HashMap<String, User>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts the user unless its ID is already present or missing.
    ///
    /// # Returns
    ///
    /// `true` if the user was added.
    pub fn insert_if_absent(&mut self, user: User) -> bool {
        let Some(id) = user.id.clone() else {
            warn!("Skipping included user without an id");
            return false;
        };
        if self.users.contains_key(&id) {
            return false;
        }
        self.users.insert(id, user);
        true
    }

    pub fn get(&self, id: &str) -> Option<&User> {
        self.users.get(id)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl FromIterator<User> for UserDirectory {
    fn from_iter<I: IntoIterator<Item = User>>(iter: I) -> Self {
        let mut directory = UserDirectory::new();
        for user in iter {
            directory.insert_if_absent(user);
        }
        directory
    }
}

/// Everything collected for a conversation, in API return order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchedReplies {
    pub tweets: Vec<Tweet>,
    pub users: UserDirectory,
    /// Number of page requests issued, including a failed final one.
    pub pages_requested: usize,
    /// The failure that ended pagination early, if any.
    pub stopped_by: Option<String>,
}

/// Fetches every reply tweet in a conversation, following `next_token` until exhausted.
///
/// A failed page (HTTP error, transport error, undecodable body, or an `errors`
/// array in the payload) is logged and ends pagination. Whatever was collected up
/// to that point is returned; this function never fails.
///
/// # Parameters
///
/// - `client`: The search transport
/// - `conversation_id`: The root tweet ID of the conversation
///
/// # Returns
///
/// All tweets in page order plus the author directory.
pub async fn fetch_replies<C: SearchClient + ?Sized>(
    client: &C,
    conversation_id: &str,
) -> FetchedReplies {
    info!("Fetching replies to tweet {}...", conversation_id);

    let mut fetched = FetchedReplies::default();
    let mut query = SearchQuery::first_page(conversation_id);

    loop {
        fetched.pages_requested += 1;

        let page = match client.search_page(&query).await {
            Ok(page) => page,
            Err(e) => {
                error!("Stopping pagination: {}", e);
                fetched.stopped_by = Some(e.to_string());
                break;
            }
        };

        // Any errors array, even an empty one, ends pagination
        if let Some(errors) = page.errors.as_ref() {
            let e = UpstreamError::Api(errors.iter().map(|err| err.describe()).collect());
            error!("API Errors: {}", e);
            fetched.stopped_by = Some(e.to_string());
            break;
        }

        let page_tweets = page.data.as_ref().map_or(0, |d| d.len());
        let result_count = page.meta.as_ref().and_then(|m| m.result_count);
        let next_token = page.next_token().map(str::to_string);

        if let Some(tweets) = page.data {
            fetched.tweets.extend(tweets);
        }

        if let Some(users) = page.includes.and_then(|inc| inc.users) {
            for user in users {
                fetched.users.insert_if_absent(user);
            }
        }

        info!(
            "Fetched {} tweets, total so far: {}",
            page_tweets,
            fetched.tweets.len()
        );
        debug!(
            "Page {} reported result_count: {:?}",
            fetched.pages_requested, result_count
        );

        match next_token {
            Some(token) => query.next_token = Some(token),
            None => break,
        }
    }

    info!(
        "Finished fetching conversation {}: {} tweets, {} users, {} pages",
        conversation_id,
        fetched.tweets.len(),
        fetched.users.len(),
        fetched.pages_requested
    );

    fetched
}
