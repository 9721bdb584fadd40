//! Response bodies. Every response, success or failure, carries a
//! human-readable `message`; errors carry nothing else.

use serde::{Deserialize, Serialize};

use crate::dto::ReactionTimeDto;

/// The plain `{"message": ...}` body used by most endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Successful login: a message plus the bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}

/// Successful reaction-time listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactionTimesResponse {
    pub message: String,
    pub data: Vec<ReactionTimeDto>,
}
