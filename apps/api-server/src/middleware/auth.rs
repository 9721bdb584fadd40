//! Token verification gate and ownership check.

use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header, web};
use std::future::{Ready, ready};
use uuid::Uuid;

use reflex_core::ports::{AuthError, TokenClaims};

use crate::middleware::error::AppError;
use crate::state::AppState;

/// Verified identity attached to a protected request.
///
/// Extracting this in a handler is the token gate: the request fails with
/// 403 before the handler body runs when the credential is missing or does
/// not verify.
#[derive(Debug, Clone)]
pub struct Identity {
    pub account_id: Uuid,
    pub email: String,
}

impl Identity {
    /// Ownership gate for account-scoped routes, run after the token gate:
    /// the token's subject must equal the path-supplied user id, compared
    /// as strings. The mismatch message is distinct from the invalid-token
    /// one.
    pub fn require_owner(&self, user_id: &str) -> Result<(), AppError> {
        if self.account_id.to_string() == user_id {
            Ok(())
        } else {
            Err(AppError::Auth(AuthError::NotOwner))
        }
    }
}

impl From<TokenClaims> for Identity {
    fn from(claims: TokenClaims) -> Self {
        Self {
            account_id: claims.account_id,
            email: claims.email,
        }
    }
}

impl FromRequest for Identity {
    type Error = AppError;
    type Future = Ready<Result<Self, AppError>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let Some(state) = req.app_data::<web::Data<AppState>>() else {
            tracing::error!("AppState not registered in app data");
            return ready(Err(AppError::Internal(
                "application state missing".to_string(),
            )));
        };

        // The header carries the raw signed token; stripping any scheme
        // prefix is the caller's concern.
        let Some(value) = req.headers().get(header::AUTHORIZATION) else {
            return ready(Err(AppError::Auth(AuthError::TokenMissing)));
        };

        let Ok(token) = value.to_str() else {
            return ready(Err(AppError::Auth(AuthError::TokenInvalid)));
        };

        match state.tokens.verify(token) {
            Ok(claims) => ready(Ok(Identity::from(claims))),
            Err(_) => ready(Err(AppError::Auth(AuthError::TokenInvalid))),
        }
    }
}
