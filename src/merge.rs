//! Joins reply tweets with their authors into flat records.

use serde::{Deserialize, Serialize};

use crate::twitter::{Tweet, TweetMetrics, User, UserDirectory, UserMetrics};

/// One reply tweet joined with its author's profile. Every field is a string or a number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatReplyRecord {
    pub id: String,
    pub text: String,
    pub author_id: String,
    pub author_username: String,
    pub author_name: String,
    pub author_bio: String,
    pub author_followers_count: u64,
    pub author_following_count: u64,
    pub author_tweet_count: u64,
    pub created_at: String,
    pub like_count: u64,
    pub retweet_count: u64,
    pub reply_count: u64,
    pub impression_count: u64,
}

impl FlatReplyRecord {
    /// Builds the record for one tweet.
    ///
    /// Metrics are defaulted in two layers: a missing metrics object falls back to
    /// an empty one, then each missing counter inside it falls back to zero. An
    /// unknown author yields empty strings and zero counts.
    pub fn from_tweet(tweet: &Tweet, author: Option<&User>) -> Self {
        let user_metrics = author
            .and_then(|u| u.public_metrics.clone())
            .unwrap_or_else(UserMetrics::default);
        let tweet_metrics = tweet
            .public_metrics
            .clone()
            .unwrap_or_else(TweetMetrics::default);

        FlatReplyRecord {
            id: tweet.id.clone().unwrap_or_default(),
            text: tweet.text.clone().unwrap_or_default(),
            author_id: tweet.author_id.clone().unwrap_or_default(),
            author_username: author.and_then(|u| u.username.clone()).unwrap_or_default(),
            author_name: author.and_then(|u| u.name.clone()).unwrap_or_default(),
            author_bio: author.and_then(|u| u.description.clone()).unwrap_or_default(),
            author_followers_count: user_metrics.followers_count.unwrap_or(0),
            author_following_count: user_metrics.following_count.unwrap_or(0),
            author_tweet_count: user_metrics.tweet_count.unwrap_or(0),
            created_at: tweet.created_at.clone().unwrap_or_default(),
            like_count: tweet_metrics.like_count.unwrap_or(0),
            retweet_count: tweet_metrics.retweet_count.unwrap_or(0),
            reply_count: tweet_metrics.reply_count.unwrap_or(0),
            impression_count: tweet_metrics.impression_count.unwrap_or(0),
        }
    }
}

/// Converts every tweet into a [`FlatReplyRecord`], preserving input order.
///
/// Pure and infallible: authors are looked up by `author_id`, and anything
/// missing is replaced by its default.
pub fn merge_replies(tweets: &[Tweet], users: &UserDirectory) -> Vec<FlatReplyRecord> {
    tweets
        .iter()
        .map(|tweet| {
            let author = tweet.author_id.as_deref().and_then(|id| users.get(id));
            FlatReplyRecord::from_tweet(tweet, author)
        })
        .collect()
}
