//! User account handlers: registration, login, self-service update and
//! delete. This is the request-facing side of the auth layer; the token
//! and ownership gates live in `middleware::auth`.

use actix_web::{HttpResponse, web};

use reflex_core::domain::{AccountPatch, NewAccount};
use reflex_core::policy;
use reflex_shared::dto::{LoginRequest, RegisterRequest, UpdateAccountRequest};
use reflex_shared::response::{LoginResponse, MessageResponse};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

const INVALID_EMAIL: &str = "The email address is invalid";
const EMAIL_TAKEN: &str = "This email is not available";
const WEAK_PASSWORD: &str = "Password must be at least 5 characters long and contain at least one uppercase letter, one lowercase letter, one digit, and one special character.";
const INVALID_ROLE: &str = "Role must be true|false or 0|1";
const USER_NOT_FOUND: &str = "User not found";
const BAD_CREDENTIALS: &str = "Incorrect email or password";

/// POST /users/register
pub async fn register(
    state: web::Data<AppState>,
    body: web::Json<RegisterRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    if !policy::email_is_valid(&req.email) {
        return Err(AppError::Validation(INVALID_EMAIL.to_string()));
    }

    if state.accounts.find_by_email(&req.email).await?.is_some() {
        return Err(AppError::Conflict(EMAIL_TAKEN.to_string()));
    }

    if !policy::password_is_strong(&req.password) {
        return Err(AppError::Validation(WEAK_PASSWORD.to_string()));
    }

    let role = policy::parse_role(req.role.as_ref())
        .map_err(|_| AppError::Validation(INVALID_ROLE.to_string()))?;
    let role = policy::effective_role(role);

    let password_hash = state
        .passwords
        .hash(&req.password)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    // A concurrent registration can still win the race between the lookup
    // above and this insert; the store's uniqueness check decides, and the
    // loser surfaces as 409 instead of the pre-checked 401.
    let account = state
        .accounts
        .create(NewAccount {
            email: req.email,
            password_hash,
            role,
        })
        .await?;

    Ok(HttpResponse::Created()
        .json(MessageResponse::new(format!("User created: {}", account.email))))
}

/// POST /users/login
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    // Unknown email and wrong password deliberately answer differently
    // (404 vs 401); the split is part of the preserved contract.
    let account = state
        .accounts
        .find_by_email(&req.email)
        .await?
        .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))?;

    let valid = state
        .passwords
        .verify(&req.password, &account.password_hash)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    if !valid {
        return Err(AppError::Unauthorized(BAD_CREDENTIALS.to_string()));
    }

    let token = state
        .tokens
        .issue(account.id, &account.email, account.role)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(HttpResponse::Ok().json(LoginResponse {
        message: "Login successful".to_string(),
        token,
    }))
}

/// PUT /users/{user_id}
pub async fn update(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
    body: web::Json<UpdateAccountRequest>,
) -> AppResult<HttpResponse> {
    identity.require_owner(&path.into_inner())?;

    let req = body.into_inner();

    if let Some(email) = &req.email {
        if let Some(existing) = state.accounts.find_by_email(email).await? {
            if existing.id != identity.account_id {
                return Err(AppError::Conflict(EMAIL_TAKEN.to_string()));
            }
        }
    }

    let password_hash = match &req.password {
        Some(password) => {
            if !policy::password_is_strong(password) {
                return Err(AppError::Validation(WEAK_PASSWORD.to_string()));
            }
            Some(
                state
                    .passwords
                    .hash(password)
                    .map_err(|e| AppError::Internal(e.to_string()))?,
            )
        }
        None => None,
    };

    // Unlike registration, a role supplied here is stored exactly as
    // parsed; only registration applies the elevated default.
    let role = policy::parse_role(req.role.as_ref())
        .map_err(|_| AppError::Validation(INVALID_ROLE.to_string()))?;

    let patch = AccountPatch {
        email: req.email,
        password_hash,
        role,
    };

    // The gates already matched the token to this id, so a miss here means
    // the account was deleted concurrently.
    match state.accounts.update_by_id(identity.account_id, patch).await? {
        // 201 on update is a preserved contract quirk
        Some(updated) => Ok(HttpResponse::Created()
            .json(MessageResponse::new(format!("User updated: {}", updated.email)))),
        None => Err(AppError::NotFound(USER_NOT_FOUND.to_string())),
    }
}

/// DELETE /users/{user_id}
pub async fn delete(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    identity.require_owner(&path.into_inner())?;

    tracing::debug!(account = %identity.email, "self-service delete");

    // Unconditional: deleting an id that no longer exists still reports
    // success.
    state.accounts.delete_by_id(identity.account_id).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("User deleted")))
}
