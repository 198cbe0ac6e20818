//! Login page: email + password against `POST /login`.

use leptos::prelude::*;
use travel_api::Payload;

use super::{submit, use_backend};
use crate::components::payload_form::{Field, FieldKind, Outcome, PayloadForm};

pub const FIELDS: &[Field] = &[
    Field::new("email", "Email", FieldKind::Email),
    Field::new("password", "Password", FieldKind::Password),
];

#[component]
pub fn LoginPage() -> impl IntoView {
    let client = use_backend();
    let outcome = RwSignal::new(None::<Outcome>);

    let on_submit = Callback::new(move |payload: Payload| {
        submit(client.clone(), outcome, move |client| async move { client.login_user(&payload).await });
    });

    view! {
        <PayloadForm title="Sign in" fields=FIELDS submit_label="Log in" on_submit=on_submit outcome=outcome/>
    }
}
