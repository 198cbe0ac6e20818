//! Auth routes: registration and credential login.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::services::users;
use crate::state::AppState;

/// Response envelope shared by both endpoints.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct AuthReply {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
}

impl AuthReply {
    fn message(message: impl Into<String>) -> Self {
        Self { message: message.into(), user_id: None }
    }

    fn for_user(message: impl Into<String>, user_id: Uuid) -> Self {
        Self { message: message.into(), user_id: Some(user_id) }
    }
}

fn reply(status: StatusCode, body: AuthReply) -> Response {
    (status, Json(body)).into_response()
}

/// Map a body extraction failure or non-object body to `400`.
fn bad_request(reason: impl std::fmt::Display) -> Response {
    reply(StatusCode::BAD_REQUEST, AuthReply::message(format!("Invalid request body: {reason}")))
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `POST /register`: store the user, respond `201` with its new ID.
pub async fn register(State(state): State<AppState>, body: Result<Json<Value>, JsonRejection>) -> Response {
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => return bad_request(rejection.body_text()),
    };
    let data = match users::as_object(&body) {
        Ok(data) => data,
        Err(e) => return bad_request(e),
    };

    let user_id = state.users.register(data).await;
    tracing::info!(%user_id, "user registered");
    reply(StatusCode::CREATED, AuthReply::for_user("User registered successfully", user_id))
}

/// `POST /login`: `200` with the user ID on a credential match, else `401`.
pub async fn login(State(state): State<AppState>, body: Result<Json<Value>, JsonRejection>) -> Response {
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => return bad_request(rejection.body_text()),
    };
    let data = match users::as_object(&body) {
        Ok(data) => data,
        Err(e) => return bad_request(e),
    };

    match state.users.authenticate(data).await {
        Some(user_id) => {
            tracing::info!(%user_id, "login succeeded");
            reply(StatusCode::OK, AuthReply::for_user("Login successful", user_id))
        }
        None => {
            tracing::info!("login rejected");
            reply(StatusCode::UNAUTHORIZED, AuthReply::message("Invalid credentials"))
        }
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;
