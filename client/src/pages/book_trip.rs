//! Trip booking page.

use leptos::prelude::*;
use travel_api::Payload;

use super::{submit, use_backend};
use crate::components::payload_form::{Field, FieldKind, Outcome, PayloadForm};

pub const FIELDS: &[Field] = &[
    Field::new("user_id", "User ID", FieldKind::Text),
    Field::new("origin", "Origin", FieldKind::Text),
    Field::new("destination", "Destination", FieldKind::Text),
    Field::new("departure_date", "Departure date", FieldKind::Date),
];

#[component]
pub fn BookTripPage() -> impl IntoView {
    let client = use_backend();
    let outcome = RwSignal::new(None::<Outcome>);

    let on_submit = Callback::new(move |payload: Payload| {
        submit(client.clone(), outcome, move |client| async move { client.book_trip(&payload).await });
    });

    view! {
        <PayloadForm title="Book a trip" fields=FIELDS submit_label="Book" on_submit=on_submit outcome=outcome/>
    }
}
