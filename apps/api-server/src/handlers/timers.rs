//! Reaction-time handlers. Token-gated, but deliberately not
//! ownership-gated: any authenticated caller may target any user id.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use reflex_core::policy;
use reflex_shared::dto::{ReactionTimeDto, SubmitReactionTimeRequest};
use reflex_shared::response::{MessageResponse, ReactionTimesResponse};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

const USER_NOT_FOUND: &str = "User not found";
const BAD_REACTION_TIME: &str = "Reaction time must be a positive integer millisecond value";
const NO_REACTION_TIME: &str = "No reaction time found for this user";

/// POST /timers/{user_id}/submit-reaction-time
pub async fn submit(
    state: web::Data<AppState>,
    _identity: Identity,
    path: web::Path<String>,
    body: web::Json<SubmitReactionTimeRequest>,
) -> AppResult<HttpResponse> {
    // A path id the store never issued cannot belong to any account.
    let account_id = Uuid::parse_str(&path.into_inner())
        .map_err(|_| AppError::NotFound(USER_NOT_FOUND.to_string()))?;

    state
        .accounts
        .find_by_id(account_id)
        .await?
        .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))?;

    let millis = policy::parse_reaction_millis(&body.timer)
        .ok_or_else(|| AppError::BadRequest(BAD_REACTION_TIME.to_string()))?;

    let saved = state.timers.insert(account_id, millis).await?;

    Ok(HttpResponse::Created().json(MessageResponse::new(format!(
        "Reaction time recorded: {}",
        saved.millis
    ))))
}

/// GET /timers/{user_id}/get-reaction-times
pub async fn list(
    state: web::Data<AppState>,
    _identity: Identity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let times = match Uuid::parse_str(&path.into_inner()) {
        Ok(account_id) => state.timers.find_by_account(account_id).await?,
        // an unknown id simply has no records
        Err(_) => Vec::new(),
    };

    if times.is_empty() {
        return Err(AppError::NotFound(NO_REACTION_TIME.to_string()));
    }

    let data = times
        .into_iter()
        .map(|t| ReactionTimeDto {
            id: t.id.to_string(),
            user_id: t.account_id.to_string(),
            timer: t.millis,
        })
        .collect();

    Ok(HttpResponse::Ok().json(ReactionTimesResponse {
        message: "Reaction times retrieved successfully".to_string(),
        data,
    }))
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::test;
    use serde_json::{Value, json};
    use uuid::Uuid;

    use super::*;
    use crate::handlers::testutil::{test_app, test_state};

    async fn read_message(resp: actix_web::dev::ServiceResponse) -> String {
        let body: Value = test::read_body_json(resp).await;
        body["message"].as_str().unwrap_or_default().to_string()
    }

    /// Register an account and log in; returns (user_id, token).
    async fn seeded_session(state: &crate::state::AppState, email: &str) -> (String, String) {
        let app = test_app!(state);

        let req = test::TestRequest::post()
            .uri("/users/register")
            .set_json(json!({"email": email, "password": "Password123!"}))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::post()
            .uri("/users/login")
            .set_json(json!({"email": email, "password": "Password123!"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let body: Value = test::read_body_json(resp).await;
        let token = body["token"].as_str().unwrap().to_string();

        let account = state.accounts.find_by_email(email).await.unwrap().unwrap();
        (account.id.to_string(), token)
    }

    #[actix_web::test]
    async fn submit_records_a_reaction_time() {
        let state = test_state();
        let (user_id, token) = seeded_session(&state, "test@example.com").await;
        let app = test_app!(state);

        let req = test::TestRequest::post()
            .uri(&format!("/timers/{user_id}/submit-reaction-time"))
            .insert_header(("Authorization", token))
            .set_json(json!({"timer": 1500}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CREATED);
        assert_eq!(read_message(resp).await, "Reaction time recorded: 1500");
    }

    #[actix_web::test]
    async fn submit_rejects_a_negative_value() {
        let state = test_state();
        let (user_id, token) = seeded_session(&state, "test@example.com").await;
        let app = test_app!(state);

        let req = test::TestRequest::post()
            .uri(&format!("/timers/{user_id}/submit-reaction-time"))
            .insert_header(("Authorization", token))
            .set_json(json!({"timer": -100}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(read_message(resp).await, BAD_REACTION_TIME);
    }

    #[actix_web::test]
    async fn submit_for_an_unknown_user_is_404() {
        let state = test_state();
        let (_, token) = seeded_session(&state, "test@example.com").await;
        let app = test_app!(state);

        let req = test::TestRequest::post()
            .uri(&format!("/timers/{}/submit-reaction-time", Uuid::new_v4()))
            .insert_header(("Authorization", token))
            .set_json(json!({"timer": 1500}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(read_message(resp).await, USER_NOT_FOUND);
    }

    #[actix_web::test]
    async fn submit_without_a_token_stores_nothing() {
        let state = test_state();
        let (user_id, _) = seeded_session(&state, "test@example.com").await;
        let app = test_app!(state);

        let req = test::TestRequest::post()
            .uri(&format!("/timers/{user_id}/submit-reaction-time"))
            .set_json(json!({"timer": 1500}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        assert_eq!(read_message(resp).await, "Access denied: missing token");

        let account_id = Uuid::parse_str(&user_id).unwrap();
        assert!(
            state
                .timers
                .find_by_account(account_id)
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[actix_web::test]
    async fn list_without_records_is_404() {
        let state = test_state();
        let (user_id, token) = seeded_session(&state, "testpu@example.com").await;
        let app = test_app!(state);

        let req = test::TestRequest::get()
            .uri(&format!("/timers/{user_id}/get-reaction-times"))
            .insert_header(("Authorization", token))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(read_message(resp).await, NO_REACTION_TIME);
    }

    #[actix_web::test]
    async fn register_login_submit_and_list_end_to_end() {
        let state = test_state();
        let app = test_app!(state);

        // register
        let req = test::TestRequest::post()
            .uri("/users/register")
            .set_json(json!({"email": "a@b.com", "password": "Password123!"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        // login
        let req = test::TestRequest::post()
            .uri("/users/login")
            .set_json(json!({"email": "a@b.com", "password": "Password123!"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        let token = body["token"].as_str().unwrap().to_string();

        let user_id = state
            .accounts
            .find_by_email("a@b.com")
            .await
            .unwrap()
            .unwrap()
            .id
            .to_string();

        // nothing recorded yet
        let req = test::TestRequest::get()
            .uri(&format!("/timers/{user_id}/get-reaction-times"))
            .insert_header(("Authorization", token.clone()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(read_message(resp).await, NO_REACTION_TIME);

        // submit one measurement
        let req = test::TestRequest::post()
            .uri(&format!("/timers/{user_id}/submit-reaction-time"))
            .insert_header(("Authorization", token.clone()))
            .set_json(json!({"timer": 1500}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        // and it comes back as a one-element list
        let req = test::TestRequest::get()
            .uri(&format!("/timers/{user_id}/get-reaction-times"))
            .insert_header(("Authorization", token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Reaction times retrieved successfully");
        let data = body["data"].as_array().unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data[0]["timer"], 1500);
        assert_eq!(data[0]["user_id"], user_id);
    }
}
