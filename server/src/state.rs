//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! only holds the in-memory user list; nothing survives a restart.

use crate::services::users::UserStore;

/// Clone is required by Axum; the store is `Arc`-backed.
#[derive(Clone, Default)]
pub struct AppState {
    pub users: UserStore,
}
