use super::*;
use axum::body::to_bytes;
use serde_json::json;

async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn ok_body(value: Value) -> Result<Json<Value>, JsonRejection> {
    Ok(Json(value))
}

// =============================================================================
// AuthReply serialization
// =============================================================================

#[test]
fn reply_without_user_omits_user_id() {
    let value = serde_json::to_value(AuthReply::message("Invalid credentials")).unwrap();
    assert_eq!(value, json!({ "message": "Invalid credentials" }));
}

#[test]
fn reply_with_user_includes_user_id() {
    let id = Uuid::nil();
    let value = serde_json::to_value(AuthReply::for_user("Login successful", id)).unwrap();
    assert_eq!(value, json!({ "message": "Login successful", "user_id": id.to_string() }));
}

// =============================================================================
// Handlers
// =============================================================================

#[tokio::test]
async fn register_responds_created_with_user_id() {
    let state = AppState::default();
    let response = register(
        State(state.clone()),
        ok_body(json!({ "name": "Ada", "email": "ada@example.com", "password": "pw" })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["message"], "User registered successfully");
    let id: Uuid = body["user_id"].as_str().unwrap().parse().unwrap();
    assert!(state.users.get(id).await.is_some());
}

#[tokio::test]
async fn login_after_register_returns_same_id() {
    let state = AppState::default();
    let creds = json!({ "email": "ada@example.com", "password": "pw" });
    let registered = body_json(register(State(state.clone()), ok_body(creds.clone())).await).await;

    let response = login(State(state), ok_body(creds)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Login successful");
    assert_eq!(body["user_id"], registered["user_id"]);
}

#[tokio::test]
async fn login_with_wrong_password_is_unauthorized() {
    let state = AppState::default();
    register(State(state.clone()), ok_body(json!({ "email": "a@b.com", "password": "pw" }))).await;

    let response = login(State(state), ok_body(json!({ "email": "a@b.com", "password": "bad" }))).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await, json!({ "message": "Invalid credentials" }));
}

#[tokio::test]
async fn non_object_body_is_bad_request() {
    let state = AppState::default();
    let response = register(State(state.clone()), ok_body(json!(["not", "an", "object"]))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Invalid request body: request body must be a JSON object");
    assert!(state.users.is_empty().await);
}
