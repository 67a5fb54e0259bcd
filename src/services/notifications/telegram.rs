//! Telegram notification module implementation.
//!
//! Sends messages through the Telegram Bot API `sendMessage` method with a
//! form-encoded body. One HTTPS exchange per call, no retries; every failure
//! is raised to the host as a `NotifyError`.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use super::module::NotificationModule;
use crate::error::{NotifyError, NotifyResult};
use crate::external::{HttpTransport, ReqwestTransport};
use crate::models::{
    InputKind, NotificationContent, ParseMode, SendMessageResponse, SettingField, TelegramConfig,
    BOT_CHAT_ID_KEY, BOT_TOKEN_KEY,
};

const API_BASE: &str = "https://api.telegram.org";
const TEST_MESSAGE: &str = "Connected with WHMCS";

/// Telegram notification module
///
/// Holds only the injected transport; every call is otherwise stateless and
/// works from the settings the host passes in.
///
/// # Example
/// ```ignore
/// let notifier = TelegramNotifier::new();
/// notifier.test_connection(&settings).await?;
/// notifier.send_notification(&notification, &settings, &extra).await?;
/// ```
pub struct TelegramNotifier {
    transport: Arc<dyn HttpTransport>,
}

impl TelegramNotifier {
    /// Creates a notifier backed by the shared reqwest client
    pub fn new() -> Self {
        Self::with_transport(Arc::new(ReqwestTransport))
    }

    /// Creates a notifier with an injected transport
    ///
    /// Used by tests and by hosts that bring their own client policy.
    pub fn with_transport(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }

    /// Renders a notification as Telegram Markdown.
    ///
    /// Bold title, blank line, body, blank line, then a link labeled
    /// "Open »" pointing at the notification URL.
    pub fn format_message(title: &str, message: &str, url: &str) -> String {
        format!("*{title}*\n\n{message}\n\n[Open »]({url})")
    }

    /// Sends a single message to the configured chat.
    ///
    /// Validates the settings, posts `chat_id`, `text`, and `parse_mode` to
    /// the `sendMessage` endpoint, and decodes the body leniently regardless
    /// of HTTP status since the API reports logical failure in the body.
    ///
    /// # Returns
    /// The decoded response, or the first error of: `Configuration`,
    /// `Transport`, `RemoteApi`.
    pub async fn send_message(
        &self,
        settings: &HashMap<String, String>,
        text: &str,
        parse_mode: ParseMode,
    ) -> NotifyResult<SendMessageResponse> {
        let config = TelegramConfig::from_settings(settings)?;
        let url = format!("{}/bot{}/sendMessage", API_BASE, config.bot_token);

        tracing::debug!(
            parse_mode = parse_mode.as_str(),
            text_len = text.len(),
            "sending message via Telegram Bot API"
        );

        let response = self
            .transport
            .post_form(
                &url,
                &[
                    ("chat_id", config.bot_chat_id.as_str()),
                    ("text", text),
                    ("parse_mode", parse_mode.as_str()),
                ],
            )
            .await?;

        tracing::debug!(status = response.status, "Telegram API exchange completed");

        let decoded = SendMessageResponse::decode(&response.body);
        if decoded.is_api_error() {
            return Err(NotifyError::RemoteApi {
                description: decoded.description.unwrap_or_default(),
            });
        }

        Ok(decoded)
    }
}

impl Default for TelegramNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationModule for TelegramNotifier {
    fn display_name(&self) -> &'static str {
        "Telegram"
    }

    fn logo_file_name(&self) -> &'static str {
        "logo.png"
    }

    fn settings(&self) -> Vec<SettingField> {
        vec![
            SettingField {
                key: BOT_TOKEN_KEY.to_string(),
                friendly_name: "Token".to_string(),
                input_kind: InputKind::Text,
                description: "Token of the Telegram Bot.".to_string(),
                placeholder: "Enter your bot token here".to_string(),
            },
            SettingField {
                key: BOT_CHAT_ID_KEY.to_string(),
                friendly_name: "Chat ID".to_string(),
                input_kind: InputKind::Text,
                description: "ChatID of the user/channel.".to_string(),
                placeholder: "Enter your chat ID here".to_string(),
            },
        ]
    }

    async fn test_connection(&self, settings: &HashMap<String, String>) -> NotifyResult<()> {
        TelegramConfig::from_settings(settings)?;

        let response = self
            .send_message(settings, TEST_MESSAGE, ParseMode::None)
            .await?;
        if response.is_empty() {
            return Err(NotifyError::NoResponse);
        }
        Ok(())
    }

    async fn send_notification(
        &self,
        notification: &dyn NotificationContent,
        settings: &HashMap<String, String>,
        _notification_settings: &HashMap<String, String>,
    ) -> NotifyResult<()> {
        TelegramConfig::from_settings(settings)?;

        let text = Self::format_message(
            notification.title(),
            notification.message(),
            notification.url(),
        );
        self.send_message(settings, &text, ParseMode::Markdown)
            .await?;
        Ok(())
    }
}
