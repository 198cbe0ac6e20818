//! In-memory user registry: registration and credential checks.
//!
//! Field values are stored exactly as posted (any JSON value, `null` when
//! absent) and compared by JSON equality, matching the reference backend.
//! Passwords are kept in plain text; this store is for local development.

use std::sync::Arc;

use serde_json::{Map, Value};
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserError {
    #[error("request body must be a JSON object")]
    NotAnObject,
}

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub user_id: Uuid,
    pub name: Value,
    pub email: Value,
    pub password: Value,
}

/// Registered users in registration order.
#[derive(Debug, Clone, Default)]
pub struct UserStore {
    users: Arc<RwLock<Vec<User>>>,
}

/// View `body` as a JSON object.
///
/// # Errors
///
/// Returns [`UserError::NotAnObject`] for arrays, scalars and `null`.
pub fn as_object(body: &Value) -> Result<&Map<String, Value>, UserError> {
    body.as_object().ok_or(UserError::NotAnObject)
}

fn field(data: &Map<String, Value>, key: &str) -> Value {
    data.get(key).cloned().unwrap_or(Value::Null)
}

impl UserStore {
    /// Store a new user built from `name`, `email` and `password` in `data`.
    /// Every call creates a new user, even for a repeated email.
    pub async fn register(&self, data: &Map<String, Value>) -> Uuid {
        let user = User {
            user_id: Uuid::new_v4(),
            name: field(data, "name"),
            email: field(data, "email"),
            password: field(data, "password"),
        };
        let user_id = user.user_id;
        self.users.write().await.push(user);
        user_id
    }

    /// ID of the first registered user whose `email` and `password` both
    /// equal the ones in `data`.
    pub async fn authenticate(&self, data: &Map<String, Value>) -> Option<Uuid> {
        let email = field(data, "email");
        let password = field(data, "password");
        self.users
            .read()
            .await
            .iter()
            .find(|user| user.email == email && user.password == password)
            .map(|user| user.user_id)
    }

    pub async fn get(&self, user_id: Uuid) -> Option<User> {
        self.users.read().await.iter().find(|user| user.user_id == user_id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;
