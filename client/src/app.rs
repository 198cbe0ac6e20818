//! Root application component with routing and the backend client context.

use leptos::prelude::*;
use leptos::logging::{error, warn};
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::Router;
use leptos_router::hooks::use_location;
use travel_api::{ApiClient, ApiConfig, DEFAULT_ORIGIN};

use crate::pages::BackendClient;
use crate::pages::{
    book_trip::BookTripPage, login::LoginPage, make_payment::MakePaymentPage, register::RegisterPage,
    search_flights::SearchFlightsPage,
};
use crate::routes::{Rendered, Shell, ViewKind};

/// Backend origin baked in at build time (`TRAVEL_API_ORIGIN`), or the
/// local default.
pub fn api_origin() -> &'static str {
    option_env!("TRAVEL_API_ORIGIN").unwrap_or(DEFAULT_ORIGIN)
}

fn backend_client(origin: &str) -> Option<BackendClient> {
    match ApiConfig::new(origin) {
        Ok(config) => Some(ApiClient::with_reqwest(config)),
        Err(e) => {
            error!("backend client disabled: {e}");
            None
        }
    }
}

/// Root application component.
///
/// Provides the backend client and mounts whichever page the route table
/// selects for the current location.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(backend_client(api_origin()));

    let shell = match Shell::standard() {
        Ok(shell) => Some(shell),
        Err(e) => {
            error!("route table rejected: {e}");
            None
        }
    };

    view! {
        <Title text="Travel Booking"/>
        <Router>
            <main>{shell.map(|shell| view! { <RouteOutlet shell=shell/> })}</main>
        </Router>
    }
}

/// Renders the page for the current pathname, or nothing.
#[component]
fn RouteOutlet(shell: Shell) -> impl IntoView {
    let location = use_location();
    move || {
        let path = location.pathname.get();
        match shell.render(&path) {
            Rendered::View(kind) => page(kind),
            Rendered::Unresolved(kind) => {
                warn!("route {path} targets {} but no component is mounted", kind.name());
                ().into_any()
            }
            Rendered::Nothing => ().into_any(),
        }
    }
}

fn page(kind: ViewKind) -> AnyView {
    match kind {
        ViewKind::Register => view! { <RegisterPage/> }.into_any(),
        ViewKind::Login => view! { <LoginPage/> }.into_any(),
        ViewKind::BookTrip => view! { <BookTripPage/> }.into_any(),
        ViewKind::MakePayment => view! { <MakePaymentPage/> }.into_any(),
        ViewKind::SearchFlights => view! { <SearchFlightsPage/> }.into_any(),
    }
}
