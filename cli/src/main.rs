//! Command-line driver for the travel booking API.
//!
//! Each subcommand issues exactly one call through `travel-api` and prints
//! the status line and body it got back, 2xx or not.

use clap::{Args, Parser, Subcommand};
use serde_json::Value;
use tracing_subscriber::EnvFilter;
use travel_api::{ApiClient, ApiConfig, ConfigError, DEFAULT_ORIGIN, Endpoint, ORIGIN_ENV_VAR, Payload};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("payload must be a JSON object")]
    NotAnObject,
    #[error("invalid --param `{0}`: expected KEY=VALUE")]
    InvalidParam(String),
}

#[derive(Parser, Debug)]
#[command(name = "travel-cli", about = "Travel booking API client")]
struct Cli {
    /// Backend origin (scheme://host:port).
    #[arg(long, env = ORIGIN_ENV_VAR, default_value = DEFAULT_ORIGIN)]
    origin: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// POST /register
    Register(BodyArgs),
    /// POST /login
    Login(BodyArgs),
    /// POST /book-trip
    BookTrip(BodyArgs),
    /// POST /make-payment
    MakePayment(BodyArgs),
    /// GET /search-flights
    SearchFlights(QueryArgs),
}

#[derive(Args, Debug)]
struct BodyArgs {
    /// JSON object sent as the request body.
    #[arg(long, default_value = "{}")]
    data: String,
}

#[derive(Args, Debug)]
struct QueryArgs {
    /// Query parameter; repeat for more. A repeated key keeps the last value.
    #[arg(long = "param", value_name = "KEY=VALUE")]
    params: Vec<String>,

    /// Query parameters as a JSON object instead of --param.
    #[arg(long, conflicts_with = "params")]
    data: Option<String>,
}

impl Command {
    fn endpoint(&self) -> Endpoint {
        match self {
            Self::Register(_) => Endpoint::Register,
            Self::Login(_) => Endpoint::Login,
            Self::BookTrip(_) => Endpoint::BookTrip,
            Self::MakePayment(_) => Endpoint::MakePayment,
            Self::SearchFlights(_) => Endpoint::SearchFlights,
        }
    }

    fn payload(&self) -> Result<Payload, CliError> {
        match self {
            Self::Register(args) | Self::Login(args) | Self::BookTrip(args) | Self::MakePayment(args) => {
                parse_object(&args.data)
            }
            Self::SearchFlights(QueryArgs { data: Some(data), .. }) => parse_object(data),
            Self::SearchFlights(QueryArgs { params, data: None }) => parse_params(params),
        }
    }
}

fn parse_object(raw: &str) -> Result<Payload, CliError> {
    match serde_json::from_str::<Value>(raw)? {
        Value::Object(map) => Ok(map),
        _ => Err(CliError::NotAnObject),
    }
}

fn parse_params(params: &[String]) -> Result<Payload, CliError> {
    let mut payload = Payload::new();
    for raw in params {
        let Some((key, value)) = raw.split_once('=') else {
            return Err(CliError::InvalidParam(raw.clone()));
        };
        if key.is_empty() {
            return Err(CliError::InvalidParam(raw.clone()));
        }
        payload.insert(key.to_owned(), Value::String(value.to_owned()));
    }
    Ok(payload)
}

/// Pretty-print JSON bodies; anything else is shown verbatim.
fn render_body(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(json) => serde_json::to_string_pretty(&json).unwrap_or_else(|_| body.to_owned()),
        Err(_) => body.to_owned(),
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let client = ApiClient::with_reqwest(ApiConfig::new(&cli.origin)?);
    let payload = cli.command.payload()?;
    tracing::debug!(origin = %client.config().origin(), keys = payload.len(), "dispatching command");

    let response = client.call(cli.command.endpoint(), &payload).await?;
    let status = response.status();
    let body = response.text().await?;

    println!("HTTP {}", status.as_u16());
    if !body.is_empty() {
        println!("{}", render_body(&body));
    }
    Ok(())
}
