//! Placeholder substitution for file templates.
//!
//! Templates are plain text; substitution is purely textual and the result is
//! never parsed, so templates may hold any format.

use std::time::{SystemTime, UNIX_EPOCH};

use uuid::Uuid;

/// Token replaced with the current Unix timestamp in payment templates.
pub const TIMESTAMP_TOKEN: &str = "timestamp";

/// Token replaced with a fresh UUID in payment templates.
pub const UUID_TOKEN: &str = "uuid";

/// Replaces every `{{key}}` occurrence with its value.
///
/// Unknown tokens are left untouched.
///
/// # Example
///
/// ```
/// use mockapi_core::render_placeholders;
///
/// let out = render_placeholders("id={{id}} id={{id}} {{other}}", &[("id", "7")]);
/// assert_eq!(out, "id=7 id=7 {{other}}");
/// ```
pub fn render_placeholders(template: &str, values: &[(&str, &str)]) -> String {
    values
        .iter()
        .fold(template.to_string(), |text, (key, value)| {
            text.replace(&format!("{{{{{}}}}}", key), value)
        })
}

/// Values substituted into the payment template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentPlaceholders {
    /// Unix timestamp in whole seconds.
    pub timestamp: u64,
    pub uuid: String,
}

impl PaymentPlaceholders {
    /// Captures the current time and a fresh UUID v4.
    pub fn now() -> Self {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();

        Self {
            timestamp,
            uuid: Uuid::new_v4().to_string(),
        }
    }

    /// Applies `{{timestamp}}` and `{{uuid}}` to the given text.
    pub fn apply(&self, template: &str) -> String {
        let timestamp = self.timestamp.to_string();
        render_placeholders(
            template,
            &[(TIMESTAMP_TOKEN, &timestamp), (UUID_TOKEN, &self.uuid)],
        )
    }
}
