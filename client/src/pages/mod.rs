//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page declares its form fields and which API operation receives the
//! payload. Rendering is delegated to `components::payload_form`, and the
//! backend client comes from context (provided by `app::App`).

pub mod book_trip;
pub mod login;
pub mod make_payment;
pub mod register;
pub mod search_flights;

use std::future::Future;

use leptos::prelude::*;
use travel_api::{ApiClient, ReqwestTransport};

use crate::components::payload_form::Outcome;

/// Client type shared through context.
pub type BackendClient = ApiClient<ReqwestTransport>;

/// Fetch the backend client provided by `App`, if the origin was valid.
pub(crate) fn use_backend() -> Option<BackendClient> {
    use_context::<Option<BackendClient>>().flatten()
}

/// Run one API call in the background and publish its outcome.
///
/// The response is consumed here; the page only sees the status line.
pub(crate) fn submit<F, Fut>(client: Option<BackendClient>, outcome: RwSignal<Option<Outcome>>, call: F)
where
    F: FnOnce(BackendClient) -> Fut + 'static,
    Fut: Future<Output = Result<reqwest::Response, reqwest::Error>> + 'static,
{
    let Some(client) = client else {
        outcome.set(Some(Outcome::Failed("API origin is not configured".to_owned())));
        return;
    };
    outcome.set(Some(Outcome::Pending));
    leptos::task::spawn_local(async move {
        let result = call(client).await;
        outcome.set(Some(Outcome::from_result(result).await));
    });
}
