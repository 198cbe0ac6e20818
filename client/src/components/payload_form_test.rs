use super::*;
use serde_json::json;

const FIELDS: &[Field] = &[
    Field::new("email", "Email", FieldKind::Email),
    Field::new("password", "Password", FieldKind::Password),
    Field::new("adults", "Adults", FieldKind::Number),
];

fn values(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|v| (*v).to_owned()).collect()
}

// =============================================================================
// build_payload
// =============================================================================

#[test]
fn build_payload_keeps_field_order_and_names() {
    let payload = build_payload(FIELDS, &values(&["a@b.com", "pw", "2"])).unwrap();
    let keys: Vec<_> = payload.keys().map(String::as_str).collect();
    assert_eq!(keys, ["email", "password", "adults"]);
    assert_eq!(payload["email"], json!("a@b.com"));
    assert_eq!(payload["adults"], json!(2));
}

#[test]
fn build_payload_trims_text_but_not_passwords() {
    let payload = build_payload(FIELDS, &values(&["  a@b.com ", " pw ", "1"])).unwrap();
    assert_eq!(payload["email"], json!("a@b.com"));
    assert_eq!(payload["password"], json!(" pw "));
}

#[test]
fn build_payload_requires_every_field() {
    assert_eq!(build_payload(FIELDS, &values(&["  ", "pw", "1"])), Err("Enter email.".to_owned()));
    assert_eq!(build_payload(FIELDS, &values(&["a@b.com", "", "1"])), Err("Enter password.".to_owned()));
    assert_eq!(build_payload(FIELDS, &values(&["a@b.com", "pw"])), Err("Enter adults.".to_owned()));
}

#[test]
fn build_payload_encodes_decimal_numbers() {
    let payload = build_payload(FIELDS, &values(&["a@b.com", "pw", "12.5"])).unwrap();
    assert_eq!(payload["adults"], json!(12.5));
}

#[test]
fn build_payload_rejects_non_numeric_number_field() {
    assert_eq!(
        build_payload(FIELDS, &values(&["a@b.com", "pw", "two"])),
        Err("Adults must be a number.".to_owned())
    );
    assert_eq!(
        build_payload(FIELDS, &values(&["a@b.com", "pw", "NaN"])),
        Err("Adults must be a number.".to_owned())
    );
}

#[test]
fn build_payload_with_no_fields_is_empty() {
    assert_eq!(build_payload(&[], &[]), Ok(Payload::new()));
}

// =============================================================================
// Outcome / describe_response
// =============================================================================

#[test]
fn describe_response_prefers_json_message() {
    let body = r#"{"message":"User registered successfully","user_id":"u1"}"#;
    assert_eq!(describe_response(201, body), "HTTP 201: User registered successfully");
}

#[test]
fn describe_response_falls_back_to_raw_body() {
    assert_eq!(describe_response(404, "Not Found\n"), "HTTP 404: Not Found");
    assert_eq!(describe_response(500, r#"{"error":"boom"}"#), r#"HTTP 500: {"error":"boom"}"#);
}

#[test]
fn describe_response_with_empty_body_shows_status_only() {
    assert_eq!(describe_response(204, ""), "HTTP 204");
}

#[test]
fn outcome_messages() {
    assert_eq!(Outcome::Pending.message(), "Sending...");
    assert_eq!(Outcome::Failed("connection refused".to_owned()).message(), "Request failed: connection refused");
    let responded = Outcome::Responded { status: 401, body: r#"{"message":"Invalid credentials"}"#.to_owned() };
    assert_eq!(responded.message(), "HTTP 401: Invalid credentials");
}

#[test]
fn only_2xx_responses_count_as_success() {
    assert!(Outcome::Responded { status: 201, body: String::new() }.is_success());
    assert!(!Outcome::Responded { status: 401, body: String::new() }.is_success());
    assert!(!Outcome::Failed(String::new()).is_success());
    assert!(!Outcome::Pending.is_success());
}
