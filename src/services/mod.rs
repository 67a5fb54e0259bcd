//! Service layer.
//!
//! Holds the notification module contract and its Telegram implementation.

pub mod notifications;

pub use notifications::{NotificationModule, TelegramNotifier};
