//! Flight search page. Fields are sent as query parameters.

use leptos::prelude::*;
use travel_api::Payload;

use super::{submit, use_backend};
use crate::components::payload_form::{Field, FieldKind, Outcome, PayloadForm};

pub const FIELDS: &[Field] = &[
    Field::new("from", "From", FieldKind::Text),
    Field::new("to", "To", FieldKind::Text),
    Field::new("date", "Date", FieldKind::Date),
];

#[component]
pub fn SearchFlightsPage() -> impl IntoView {
    let client = use_backend();
    let outcome = RwSignal::new(None::<Outcome>);

    let on_submit = Callback::new(move |params: Payload| {
        submit(client.clone(), outcome, move |client| async move { client.search_flights(&params).await });
    });

    view! {
        <PayloadForm title="Search flights" fields=FIELDS submit_label="Search" on_submit=on_submit outcome=outcome/>
    }
}
