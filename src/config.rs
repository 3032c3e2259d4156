//! Configuration module for the reply fetcher.
//!
//! This module resolves the bearer credential and the API base URL from the
//! environment, with a local JSON config file as the credential fallback.

use log::{debug, info, warn};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;

use crate::error::ReplyFetchError;
use crate::twitter::DEFAULT_API_BASE_URL;

pub const BEARER_TOKEN_ENV: &str = "TWITTER_BEARER_TOKEN";
pub const API_BASE_URL_ENV: &str = "TWITTER_API_BASE_URL";
pub const DEFAULT_CONFIG_PATH: &str = ".claude/commands/fetch-twitter-replies.config.json";

/// On-disk shape of the config file.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    bearer_token: Option<String>,
}

/// Credentials and endpoint for the Twitter/X API v2 search.
#[derive(Debug, Clone)]
pub struct TwitterConfig {
    /// Static Bearer Token sent with every search request
    pub bearer_token: String,
    /// API root, without the `/tweets/search/recent` path
    pub api_base_url: String,
}

/// Masks a secret for logging, keeping at most eight characters at each end.
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    let len = chars.len();
    let prefix: String = chars.iter().take(8).collect();

    if len > 16 {
        let suffix: String = chars[len - 8..].iter().collect();
        format!("{}...{}", prefix, suffix)
    } else {
        format!("{}...", prefix)
    }
}

impl TwitterConfig {
    /// Reads `bearer_token` from the config file at `path`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(String))`: If the file exists and holds a non-empty token
    /// - `Ok(None)`: If the file does not exist or has no token
    /// - `Err(...)`: If the file exists but cannot be read or parsed
    fn load_bearer_token_from_file(path: &Path) -> Result<Option<String>, ReplyFetchError> {
        if !path.exists() {
            debug!("No config file at {}", path.display());
            return Ok(None);
        }

        info!("Loading bearer token from config file {}", path.display());
        let contents = fs::read_to_string(path).map_err(|source| ReplyFetchError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: ConfigFile =
            serde_json::from_str(&contents).map_err(|source| ReplyFetchError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;

        match config.bearer_token.filter(|t| !t.is_empty()) {
            Some(token) => Ok(Some(token)),
            None => {
                warn!("Config file {} has no bearer_token", path.display());
                Ok(None)
            }
        }
    }

    /// Resolves the bearer credential: `TWITTER_BEARER_TOKEN` first, then the config file.
    ///
    /// # Parameters
    ///
    /// - `config_path`: Location of the JSON config file holding `bearer_token`
    ///
    /// # Returns
    ///
    /// - `Ok(TwitterConfig)`: If a credential was found
    /// - `Err(ReplyFetchError::Usage)`: If neither source yields a token
    /// - `Err(ReplyFetchError::ConfigRead | ConfigParse)`: If the config file is unreadable
    pub fn resolve(config_path: &Path) -> Result<Self, ReplyFetchError> {
        let bearer_token = match env::var(BEARER_TOKEN_ENV) {
            Ok(token) if !token.is_empty() => {
                info!(
                    "Found {} environment variable with length: {}",
                    BEARER_TOKEN_ENV,
                    token.len()
                );
                token
            }
            _ => match Self::load_bearer_token_from_file(config_path)? {
                Some(token) => token,
                None => {
                    return Err(ReplyFetchError::Usage(format!(
                        "{} not found. Set it as an environment variable or in {}",
                        BEARER_TOKEN_ENV,
                        config_path.display()
                    )))
                }
            },
        };

        debug!("Bearer token (masked): {}", mask_token(&bearer_token));
        if bearer_token.len() < 10 {
            warn!(
                "Bearer token seems unusually short ({} characters)",
                bearer_token.len()
            );
        }

        Ok(TwitterConfig {
            bearer_token,
            api_base_url: get_api_base_url(),
        })
    }
}

/// Gets the API base URL from `TWITTER_API_BASE_URL`, defaulting to the public v2 root.
pub fn get_api_base_url() -> String {
    env::var(API_BASE_URL_ENV)
        .ok()
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}

