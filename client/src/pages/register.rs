//! Account registration page.

use leptos::prelude::*;
use travel_api::Payload;

use super::{submit, use_backend};
use crate::components::payload_form::{Field, FieldKind, Outcome, PayloadForm};

pub const FIELDS: &[Field] = &[
    Field::new("name", "Name", FieldKind::Text),
    Field::new("email", "Email", FieldKind::Email),
    Field::new("password", "Password", FieldKind::Password),
];

#[component]
pub fn RegisterPage() -> impl IntoView {
    let client = use_backend();
    let outcome = RwSignal::new(None::<Outcome>);

    let on_submit = Callback::new(move |payload: Payload| {
        submit(client.clone(), outcome, move |client| async move { client.register_user(&payload).await });
    });

    view! {
        <PayloadForm title="Create an account" fields=FIELDS submit_label="Register" on_submit=on_submit outcome=outcome/>
    }
}
