//! Notification module abstraction and the Telegram implementation.
//!
//! `NotificationModule` is the contract the host consumes: a settings
//! schema, a connection test, and a send entry point. `TelegramNotifier`
//! implements it against the Telegram Bot API.

mod module;
mod telegram;

pub use module::NotificationModule;
pub use telegram::TelegramNotifier;
