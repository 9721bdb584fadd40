use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single recorded reaction-time measurement, in whole milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactionTime {
    pub id: Uuid,
    pub account_id: Uuid,
    pub millis: i64,
}
