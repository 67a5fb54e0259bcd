//! Host-facing notification module contract.
//!
//! The host renders the fields from `settings()`, stores what the operator
//! entered as a flat string mapping, and hands that mapping back on every
//! call. All modules must be Send + Sync for use in async contexts.

use async_trait::async_trait;
use std::collections::HashMap;

use crate::error::NotifyResult;
use crate::models::{NotificationContent, SettingField};

/// Trait for notification modules the host can dispatch to
#[async_trait]
pub trait NotificationModule: Send + Sync {
    /// Display name shown in the host's module list
    fn display_name(&self) -> &'static str;

    /// Logo file the host renders next to the display name
    fn logo_file_name(&self) -> &'static str;

    /// Ordered configuration fields the host must render and collect
    fn settings(&self) -> Vec<SettingField>;

    /// Extra per-notification settings; empty for modules that define none
    fn notification_settings(&self) -> Vec<SettingField> {
        Vec::new()
    }

    /// Placeholder hook for hosts that resolve field content dynamically.
    ///
    /// Returns an empty object for any field name unless a module overrides
    /// it.
    fn dynamic_field(
        &self,
        field_name: &str,
        settings: &HashMap<String, String>,
    ) -> serde_json::Value {
        let _ = (field_name, settings);
        serde_json::Value::Object(serde_json::Map::new())
    }

    /// Verifies that the given settings can reach the remote service.
    ///
    /// Lets an operator check credentials before saving them.
    async fn test_connection(&self, settings: &HashMap<String, String>) -> NotifyResult<()>;

    /// Delivers a notification using the given settings.
    ///
    /// `notification_settings` exists to satisfy the host contract and
    /// carries no behavior for modules without per-notification options.
    async fn send_notification(
        &self,
        notification: &dyn NotificationContent,
        settings: &HashMap<String, String>,
        notification_settings: &HashMap<String, String>,
    ) -> NotifyResult<()>;
}
