//! OAuth2 token data models

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::awx::traits::AwxResource;

/// User summary embedded in a token response
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct TokenSummaryUser {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

/// Application summary embedded in a token response
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct TokenSummaryApplication {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct TokenSummaryFields {
    #[serde(default)]
    pub user: TokenSummaryUser,
    #[serde(default)]
    pub application: Option<TokenSummaryApplication>,
}

/// OAuth2 token from AWX API
///
/// The same shape is served by `/tokens/`, `/users/<id>/tokens/`,
/// `/users/<id>/authorized_tokens/` and `/users/<id>/personal_tokens/`.
/// Personal tokens have no application.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Token {
    pub id: i64,
    #[serde(rename = "type", default)]
    pub token_type: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub related: HashMap<String, String>,
    #[serde(default)]
    pub summary_fields: TokenSummaryFields,
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default)]
    pub modified: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub user: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub application: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires: Option<String>,
    #[serde(default)]
    pub scope: String,
}

/// Token authorized by a user for an application
pub type AuthorizedToken = Token;

/// Personal access token of a user
pub type PersonalToken = Token;

impl Token {
    /// Expiry time, if present and valid RFC 3339
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        let raw = self.expires.as_deref()?;
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Whether the token expired at `now` (tokens without expiry never do)
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at().is_some_and(|expires| expires <= now)
    }

    /// Owner's username from the summary fields
    pub fn username(&self) -> &str {
        &self.summary_fields.user.username
    }
}

impl AwxResource for Token {
    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> &str {
        self.username()
    }

    fn description(&self) -> &str {
        &self.description
    }
}
