//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request to register a new user.
///
/// `role` stays loosely typed: the API accepts booleans and 0/1 and
/// rejects everything else with its own message, rather than letting the
/// framework 400 on a type mismatch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub role: Option<Value>,
}

/// Request to login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Partial account update; absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateAccountRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub role: Option<Value>,
}

/// Request to record a reaction time. `timer` is loosely typed for the
/// same reason as `role`: numbers and numeric strings are both accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitReactionTimeRequest {
    /// Defaults to `null` when absent so the omission is reported with the
    /// same message as any other unusable value.
    #[serde(default)]
    pub timer: Value,
}

/// One recorded reaction time, as returned by the list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactionTimeDto {
    pub id: String,
    pub user_id: String,
    pub timer: i64,
}
