//! Telegram Notification Module
//!
//! Outbound-notification connector for the Telegram Bot API. The host
//! application supplies credentials and notification content; this crate
//! formats the message, performs a single HTTPS exchange, and reports the
//! outcome as a typed error on failure.

pub mod error;
pub mod external;
pub mod models;
pub mod services;

pub use error::{NotifyError, NotifyResult};
pub use services::notifications::{NotificationModule, TelegramNotifier};
