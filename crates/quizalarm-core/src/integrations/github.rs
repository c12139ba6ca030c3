//! GitHub integration -- public profile lookup for sign-in.

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::error::ProfileError;
use crate::storage::GithubConfig;

const USER_AGENT: &str = "quizalarm";

/// Public profile fields shown after sign-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitHubUser {
    pub login: String,
    pub avatar_url: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub following: u64,
}

impl GitHubUser {
    /// The display name, falling back to the login.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.login)
    }
}

pub struct GitHubClient {
    client: Client,
    api_base: String,
}

impl GitHubClient {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_base: api_base.into(),
        }
    }

    pub fn from_config(config: &GithubConfig) -> Self {
        Self::new(config.api_base.clone())
    }

    fn user_url(&self, username: &str) -> String {
        format!(
            "{}/users/{}",
            self.api_base.trim_end_matches('/'),
            urlencoding::encode(username)
        )
    }

    /// Fetch the public profile of `username`. Unauthenticated, one attempt.
    ///
    /// # Errors
    ///
    /// `EmptyUsername` before any request for blank input, `NotFound` on 404,
    /// `Http` for any other non-success status, `Transport` when the request
    /// itself fails.
    pub async fn fetch_user(&self, username: &str) -> Result<GitHubUser, ProfileError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(ProfileError::EmptyUsername);
        }

        let resp = self
            .client
            .get(self.user_url(username))
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/vnd.github.v3+json")
            .send()
            .await?;

        match resp.status() {
            StatusCode::NOT_FOUND => Err(ProfileError::NotFound),
            status if !status.is_success() => {
                tracing::warn!(%status, username, "GitHub profile lookup failed");
                Err(ProfileError::Http {
                    status: status.as_u16(),
                })
            }
            _ => {
                let user: GitHubUser = resp.json().await?;
                tracing::info!(login = %user.login, "GitHub profile loaded");
                Ok(user)
            }
        }
    }
}
