mod notification;
mod settings;

pub use notification::{NotificationContent, ParseMode, SendMessageResponse};
pub use settings::{InputKind, SettingField, TelegramConfig, BOT_CHAT_ID_KEY, BOT_TOKEN_KEY};
