//! Generic form that collects named fields into a JSON payload.
//!
//! DESIGN
//! ======
//! Pages declare their fields as static data and receive the finished
//! [`Payload`] through a callback. The form never talks to the network; the
//! page decides which API call the payload goes to and reports back through
//! an [`Outcome`] signal.

use leptos::prelude::*;
use serde_json::{Number, Value};
use travel_api::Payload;

/// Input flavour; controls the HTML input type and how the value is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Password,
    Date,
    Number,
}

impl FieldKind {
    fn input_type(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Password => "password",
            Self::Date => "date",
            Self::Number => "number",
        }
    }
}

/// One form field; `name` becomes the payload key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

impl Field {
    pub const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self { name, label, kind }
    }
}

/// Turn raw input strings into a payload, in field order.
///
/// Values are trimmed (except passwords). Every field is required. Number
/// fields are sent as JSON numbers.
///
/// # Errors
///
/// Returns a user-facing message for the first field that fails.
pub fn build_payload(fields: &[Field], values: &[String]) -> Result<Payload, String> {
    let mut payload = Payload::new();
    for (index, field) in fields.iter().enumerate() {
        let raw = values.get(index).map_or("", String::as_str);
        let value = if field.kind == FieldKind::Password { raw } else { raw.trim() };
        if value.is_empty() {
            return Err(format!("Enter {}.", field.label.to_lowercase()));
        }
        let encoded = match field.kind {
            FieldKind::Number => parse_number(value).ok_or_else(|| format!("{} must be a number.", field.label))?,
            _ => Value::String(value.to_owned()),
        };
        payload.insert(field.name.to_owned(), encoded);
    }
    Ok(payload)
}

fn parse_number(raw: &str) -> Option<Value> {
    if let Ok(int) = raw.parse::<i64>() {
        return Some(Value::Number(int.into()));
    }
    raw.parse::<f64>().ok().and_then(Number::from_f64).map(Value::Number)
}

/// State of the most recent submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Pending,
    /// The backend answered; any status, 2xx or not.
    Responded { status: u16, body: String },
    /// The request never produced a response.
    Failed(String),
}

impl Outcome {
    /// Status line shown under the form.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Pending => "Sending...".to_owned(),
            Self::Responded { status, body } => describe_response(*status, body),
            Self::Failed(reason) => format!("Request failed: {reason}"),
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Responded { status: 200..=299, .. })
    }

    /// Read a `reqwest` result into an outcome, consuming the body.
    pub async fn from_result(result: Result<reqwest::Response, reqwest::Error>) -> Self {
        let response = match result {
            Ok(response) => response,
            Err(e) => return Self::Failed(e.to_string()),
        };
        let status = response.status().as_u16();
        match response.text().await {
            Ok(body) => Self::Responded { status, body },
            Err(e) => Self::Failed(e.to_string()),
        }
    }
}

/// `HTTP <status>: <text>` where text is the JSON `message` field when the
/// body has one, otherwise the raw body.
pub fn describe_response(status: u16, body: &str) -> String {
    let text = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|json| json.get("message").and_then(Value::as_str).map(str::to_owned))
        .unwrap_or_else(|| body.trim().to_owned());
    if text.is_empty() {
        format!("HTTP {status}")
    } else {
        format!("HTTP {status}: {text}")
    }
}

/// Form with one input per field and a status line.
#[component]
pub fn PayloadForm(
    title: &'static str,
    fields: &'static [Field],
    submit_label: &'static str,
    on_submit: Callback<Payload>,
    outcome: RwSignal<Option<Outcome>>,
) -> impl IntoView {
    let values: Vec<RwSignal<String>> = fields.iter().map(|_| RwSignal::new(String::new())).collect();
    let error = RwSignal::new(None::<String>);
    let busy = move || outcome.get() == Some(Outcome::Pending);

    let inputs = fields
        .iter()
        .zip(values.iter().copied())
        .map(|(field, value)| {
            view! {
                <label class="form-field">
                    <span class="form-field__label">{field.label}</span>
                    <input
                        class="form-field__input"
                        type=field.kind.input_type()
                        name=field.name
                        prop:value=move || value.get()
                        on:input=move |ev| value.set(event_target_value(&ev))
                    />
                </label>
            }
        })
        .collect_view();

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy() {
            return;
        }
        let raw: Vec<String> = values.iter().map(|value| value.get_untracked()).collect();
        match build_payload(fields, &raw) {
            Ok(payload) => {
                error.set(None);
                on_submit.run(payload);
            }
            Err(message) => error.set(Some(message)),
        }
    };

    view! {
        <div class="form-page">
            <form class="form-card" on:submit=on_form_submit>
                <h1>{title}</h1>
                {inputs}
                <button class="form-button" type="submit" disabled=busy>
                    {submit_label}
                </button>
            </form>
            <Show when=move || error.get().is_some()>
                <p class="form-message form-message--error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || outcome.get().is_some()>
                <p class=move || {
                    if outcome.get().is_some_and(|o| o.is_success()) {
                        "form-message form-message--ok"
                    } else {
                        "form-message"
                    }
                }>
                    {move || outcome.get().map(|o| o.message()).unwrap_or_default()}
                </p>
            </Show>
        </div>
    }
}

#[cfg(test)]
#[path = "payload_form_test.rs"]
mod payload_form_test;
