//! Payment page.

use leptos::prelude::*;
use travel_api::Payload;

use super::{submit, use_backend};
use crate::components::payload_form::{Field, FieldKind, Outcome, PayloadForm};

pub const FIELDS: &[Field] = &[
    Field::new("booking_id", "Booking ID", FieldKind::Text),
    Field::new("amount", "Amount", FieldKind::Number),
    Field::new("currency", "Currency", FieldKind::Text),
    Field::new("payment_method", "Payment method", FieldKind::Text),
];

#[component]
pub fn MakePaymentPage() -> impl IntoView {
    let client = use_backend();
    let outcome = RwSignal::new(None::<Outcome>);

    let on_submit = Callback::new(move |payload: Payload| {
        submit(client.clone(), outcome, move |client| async move { client.make_payment(&payload).await });
    });

    view! {
        <PayloadForm title="Make a payment" fields=FIELDS submit_label="Pay" on_submit=on_submit outcome=outcome/>
    }
}
