//! Mock entities generated per request.
//!
//! Nothing here is persisted. Each call produces fresh identifiers; the only
//! fixed parts are the field shapes and the canned user identity.

use serde::Serialize;
use uuid::Uuid;

/// Name returned by the mock user endpoint.
pub const MOCK_USER_NAME: &str = "Ganteng";

/// Email returned by the mock user endpoint.
pub const MOCK_USER_EMAIL: &str = "ganteng@example.com";

/// Prefix of every generated order id.
pub const ORDER_ID_PREFIX: &str = "ord-";

const ORDER_ID_HEX_LEN: usize = 6;

/// A fake user with a random id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MockUser {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl MockUser {
    /// Generates a user with a fresh UUID v4 id.
    pub fn generate() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: MOCK_USER_NAME.to_string(),
            email: MOCK_USER_EMAIL.to_string(),
        }
    }
}

/// Outcome selected by the status label of a mock order request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderOutcome {
    Success,
    Failed,
    Pending,
    /// Any label outside the known set.
    Unknown,
}

impl OrderOutcome {
    /// Maps a path label to an outcome. Matching is exact and case sensitive.
    pub fn from_label(label: &str) -> Self {
        match label {
            "success" => Self::Success,
            "failed" => Self::Failed,
            "pending" => Self::Pending,
            _ => Self::Unknown,
        }
    }

    /// HTTP status code reported for this outcome.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Success | Self::Unknown => 200,
            Self::Failed => 400,
            Self::Pending => 202,
        }
    }
}

/// A fake order echoing the requested status label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MockOrder {
    pub order_id: String,
    /// Raw label from the request, not validated against the known set.
    pub status: String,
}

impl MockOrder {
    /// Creates an order with a fresh `ord-xxxxxx` id.
    pub fn new(status: impl Into<String>) -> Self {
        let hex = Uuid::new_v4().simple().to_string();

        Self {
            order_id: format!("{}{}", ORDER_ID_PREFIX, &hex[..ORDER_ID_HEX_LEN]),
            status: status.into(),
        }
    }

    /// Outcome derived from the echoed label.
    pub fn outcome(&self) -> OrderOutcome {
        OrderOutcome::from_label(&self.status)
    }
}
