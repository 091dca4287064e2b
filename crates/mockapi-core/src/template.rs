//! Persisted response templates.

use serde::Serialize;
use std::fmt;

/// A named text blob, typically JSON with `{{placeholder}}` tokens.
///
/// Names are unique keys in the template store; writing a template with an
/// existing name replaces its content. Any string is a valid name, including
/// empty or whitespace-only ones.
///
/// # Example
///
/// ```
/// use mockapi_core::Template;
///
/// let template = Template::new("welcome", r#"{"msg": "hi"}"#);
/// assert_eq!(template.name(), "welcome");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Template {
    name: String,
    content: String,
}

impl Template {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Returns the template name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the template body.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consumes the template and returns its body.
    pub fn into_content(self) -> String {
        self.content
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} bytes)", self.name, self.content.len())
    }
}
