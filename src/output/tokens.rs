//! Token output formatter

use chrono::{DateTime, Utc};
use comfy_table::{presets::NOTHING, Table};
use serde::Serialize;

use super::common::{escape_csv, opt_id, print_json, print_yaml};
use crate::awx::Token;
use crate::cli::OutputFormat;

/// Serializable token for structured output (JSON/YAML)
///
/// Secret values are never echoed.
#[derive(Serialize)]
struct SerializableToken {
    id: i64,
    user_id: Option<i64>,
    username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    application: Option<String>,
    description: String,
    scope: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    expires: Option<String>,
    expired: bool,
}

impl SerializableToken {
    fn new(token: &Token, now: DateTime<Utc>) -> Self {
        Self {
            id: token.id,
            user_id: token.user,
            username: token.username().to_string(),
            application: application_name(token),
            description: token.description.clone(),
            scope: token.scope.clone(),
            expires: token.expires.clone(),
            expired: token.is_expired(now),
        }
    }
}

fn application_name(token: &Token) -> Option<String> {
    token
        .summary_fields
        .application
        .as_ref()
        .map(|app| app.name.clone())
}

/// Output tokens in the specified format
pub fn output_tokens(tokens: &[Token], format: OutputFormat, no_header: bool) {
    let now = Utc::now();
    match format {
        OutputFormat::Table => output_table(tokens, now, no_header),
        OutputFormat::Csv => output_csv(tokens, now, no_header),
        OutputFormat::Json => print_json(&serializable(tokens, now)),
        OutputFormat::Yaml => print_yaml(&serializable(tokens, now)),
    }
}

fn serializable(tokens: &[Token], now: DateTime<Utc>) -> Vec<SerializableToken> {
    tokens
        .iter()
        .map(|t| SerializableToken::new(t, now))
        .collect()
}

fn expired_label(token: &Token, now: DateTime<Utc>) -> &'static str {
    if token.is_expired(now) {
        "Yes"
    } else {
        "No"
    }
}

fn output_table(tokens: &[Token], now: DateTime<Utc>, no_header: bool) {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    if !no_header {
        table.set_header(vec![
            "ID",
            "USER",
            "APPLICATION",
            "SCOPE",
            "EXPIRES",
            "EXPIRED",
        ]);
    }

    for token in tokens {
        table.add_row(vec![
            token.id.to_string(),
            token.username().to_string(),
            application_name(token).unwrap_or_default(),
            token.scope.clone(),
            token.expires.clone().unwrap_or_default(),
            expired_label(token, now).to_string(),
        ]);
    }

    println!("{table}");
    if !no_header {
        println!("\nTotal: {} tokens", tokens.len());
    }
}

fn output_csv(tokens: &[Token], now: DateTime<Utc>, no_header: bool) {
    if !no_header {
        println!("id,user_id,username,application,scope,expires,expired");
    }
    for token in tokens {
        println!(
            "{},{},{},{},{},{},{}",
            token.id,
            opt_id(token.user),
            escape_csv(token.username()),
            escape_csv(&application_name(token).unwrap_or_default()),
            escape_csv(&token.scope),
            escape_csv(token.expires.as_deref().unwrap_or("")),
            token.is_expired(now)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn create_test_token(expires: &str) -> Token {
        serde_json::from_value(serde_json::json!({
            "id": 4,
            "user": 2,
            "token": "************",
            "scope": "write",
            "expires": expires,
            "summary_fields": {
                "user": {"id": 2, "username": "admin"},
                "application": {"id": 1, "name": "ci"}
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_serializable_token_hides_secret() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let token = create_test_token("2030-01-01T00:00:00Z");
        let json = serde_json::to_string(&SerializableToken::new(&token, now)).unwrap();
        assert!(!json.contains("****"));
        assert!(json.contains("\"username\":\"admin\""));
        assert!(json.contains("\"application\":\"ci\""));
        assert!(json.contains("\"expired\":false"));
    }

    #[test]
    fn test_expired_label() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(
            expired_label(&create_test_token("2023-06-01T00:00:00Z"), now),
            "Yes"
        );
        assert_eq!(
            expired_label(&create_test_token("2024-06-01T00:00:00Z"), now),
            "No"
        );
    }

    #[test]
    fn test_output_yaml_format() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let tokens = [create_test_token("2023-06-01T00:00:00Z")];
        let yaml = serde_yml::to_string(&serializable(&tokens, now)).unwrap();
        assert!(yaml.contains("scope: write"));
        assert!(yaml.contains("expired: true"));
    }
}
