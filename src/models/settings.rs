//! Settings models for the Telegram notification module.
//!
//! The host collects module settings as a flat string mapping keyed by the
//! field names declared in the settings schema. `TelegramConfig` is the
//! typed, validated form of that mapping.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::HashMap;

use crate::error::{NotifyError, NotifyResult};

/// Settings key holding the bot token.
pub const BOT_TOKEN_KEY: &str = "botToken";
/// Settings key holding the destination chat identifier.
pub const BOT_CHAT_ID_KEY: &str = "botChatID";

/// Input kind of a settings field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Text,
}

/// A configuration field the host renders and collects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SettingField {
    pub key: String,
    pub friendly_name: String,
    #[serde(rename = "Type")]
    pub input_kind: InputKind,
    pub description: String,
    pub placeholder: String,
}

/// Validated Telegram credentials
///
/// Both fields are opaque to this crate: the token is a secret and must not
/// appear in logs or error messages, the chat id is an opaque destination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramConfig {
    #[serde(rename = "botToken")]
    pub bot_token: String,
    #[serde(rename = "botChatID")]
    pub bot_chat_id: String,
}

impl TelegramConfig {
    /// Parses and validates the host-supplied settings mapping.
    ///
    /// A missing key, an empty value, and a whitespace-only value all count
    /// as absent. Validation runs before any network call is attempted.
    ///
    /// # Returns
    /// The typed config, or `NotifyError::Configuration` when either
    /// credential is absent.
    pub fn from_settings(settings: &HashMap<String, String>) -> NotifyResult<Self> {
        let bot_token = settings
            .get(BOT_TOKEN_KEY)
            .map(|v| v.trim())
            .unwrap_or_default();
        let bot_chat_id = settings
            .get(BOT_CHAT_ID_KEY)
            .map(|v| v.trim())
            .unwrap_or_default();

        if bot_token.is_empty() || bot_chat_id.is_empty() {
            return Err(NotifyError::Configuration);
        }

        Ok(Self {
            bot_token: bot_token.to_string(),
            bot_chat_id: bot_chat_id.to_string(),
        })
    }

    /// Parse a JSON config blob into a typed TelegramConfig
    ///
    /// For hosts that persist module settings as a single JSON value rather
    /// than a string mapping.
    pub fn from_json(config: &JsonValue) -> Result<Self, serde_json::Error> {
        serde_json::from_value(config.clone())
    }

    /// Convert to JSON for storage
    pub fn to_json(&self) -> Result<JsonValue, serde_json::Error> {
        serde_json::to_value(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings_of(token: &str, chat_id: &str) -> HashMap<String, String> {
        HashMap::from([
            (BOT_TOKEN_KEY.to_string(), token.to_string()),
            (BOT_CHAT_ID_KEY.to_string(), chat_id.to_string()),
        ])
    }

    #[test]
    fn test_from_settings_valid() {
        let config = settings_of("123456:ABC-DEF", "987654321");
        let config = TelegramConfig::from_settings(&config).unwrap();
        assert_eq!(config.bot_token, "123456:ABC-DEF");
        assert_eq!(config.bot_chat_id, "987654321");
    }

    #[test]
    fn test_from_settings_trims_surrounding_whitespace() {
        let config = settings_of("  123456:ABC-DEF ", " 987654321\n");
        let config = TelegramConfig::from_settings(&config).unwrap();
        assert_eq!(config.bot_token, "123456:ABC-DEF");
        assert_eq!(config.bot_chat_id, "987654321");
    }

    #[test]
    fn test_from_settings_missing_key() {
        let result = TelegramConfig::from_settings(&HashMap::new());
        assert!(matches!(result, Err(NotifyError::Configuration)));
    }

    #[test]
    fn test_from_settings_empty_token() {
        let result = TelegramConfig::from_settings(&settings_of("", "987654321"));
        assert!(matches!(result, Err(NotifyError::Configuration)));
    }

    #[test]
    fn test_from_settings_whitespace_only_chat_id() {
        let result = TelegramConfig::from_settings(&settings_of("123456:ABC-DEF", "   "));
        assert!(matches!(result, Err(NotifyError::Configuration)));
    }

    #[test]
    fn test_json_round_trip() {
        let config = TelegramConfig {
            bot_token: "123456:ABC-DEF".to_string(),
            bot_chat_id: "987654321".to_string(),
        };
        let json = config.to_json().unwrap();
        assert_eq!(json["botToken"], "123456:ABC-DEF");
        assert_eq!(json["botChatID"], "987654321");

        let parsed = TelegramConfig::from_json(&json).unwrap();
        assert_eq!(parsed.bot_token, config.bot_token);
        assert_eq!(parsed.bot_chat_id, config.bot_chat_id);
    }
}
