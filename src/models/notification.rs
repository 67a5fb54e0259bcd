//! Notification content and Telegram Bot API response models.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Read-only view of a host notification.
///
/// The notification value is owned by the host; the module only reads its
/// title, body, and target URL to build the outbound message.
pub trait NotificationContent: Send + Sync {
    fn title(&self) -> &str;
    fn message(&self) -> &str;
    fn url(&self) -> &str;
}

/// Markup dialect the API renders the message text with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Plain text; the wire value is the empty string.
    #[default]
    None,
    Markdown,
}

impl ParseMode {
    /// Wire value for the `parse_mode` form field.
    pub fn as_str(self) -> &'static str {
        match self {
            ParseMode::None => "",
            ParseMode::Markdown => "Markdown",
        }
    }
}

/// Decoded Telegram Bot API response
///
/// The API reports logical failure in the body: `ok` is false and
/// `description` holds a human-readable reason. All fields are optional so
/// that responses missing the `ok` key pass through as success.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SendMessageResponse {
    pub ok: Option<bool>,
    pub description: Option<String>,
    pub result: Option<JsonValue>,
    /// Raw body as received from the wire.
    #[serde(skip)]
    pub raw: String,
}

impl SendMessageResponse {
    /// Decodes a response body leniently.
    ///
    /// A body that is not a JSON object decodes to a response with no fields
    /// set, which counts as delivered. The raw body is kept alongside the
    /// decoded fields.
    pub fn decode(body: &str) -> Self {
        let mut response: Self = serde_json::from_str(body).unwrap_or_default();
        response.raw = body.to_string();
        response
    }

    /// True when the exchange produced no usable payload.
    pub fn is_empty(&self) -> bool {
        self.raw.trim().is_empty()
    }

    /// True when the API explicitly flagged the request as failed.
    pub fn is_api_error(&self) -> bool {
        self.ok == Some(false)
    }
}
