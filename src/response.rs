//! Small response bodies shared by the handlers.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// `{"message": ...}`, returned by deletes and the root greeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Message {
    pub message: String,
}

pub fn message(text: impl Into<String>) -> Message {
    Message {
        message: text.into(),
    }
}
