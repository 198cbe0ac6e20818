use super::*;

#[test]
fn local_uses_default_origin() {
    let config = ApiConfig::local().unwrap();
    assert_eq!(config.url_for("/register").as_str(), "http://127.0.0.1:5000/register");
}

#[test]
fn new_trims_trailing_slash() {
    let config = ApiConfig::new("http://api.example.test/").unwrap();
    assert_eq!(config.url_for("/login").as_str(), "http://api.example.test/login");
}

#[test]
fn new_keeps_path_prefix() {
    let config = ApiConfig::new("https://example.test/travel/").unwrap();
    assert_eq!(config.url_for("/book-trip").as_str(), "https://example.test/travel/book-trip");
}

#[test]
fn new_drops_query_and_fragment() {
    let config = ApiConfig::new("http://example.test:8080?debug=1#top").unwrap();
    assert_eq!(config.url_for("/login").as_str(), "http://example.test:8080/login");
}

#[test]
fn new_rejects_relative_origin() {
    let err = ApiConfig::new("/api").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidOrigin { .. }));
}

#[test]
fn new_rejects_non_http_scheme() {
    assert_eq!(
        ApiConfig::new("ftp://example.test").unwrap_err(),
        ConfigError::UnsupportedScheme("ftp".to_owned())
    );
}

#[test]
fn invalid_origin_message_names_the_origin() {
    let err = ApiConfig::new("not a url").unwrap_err();
    assert!(err.to_string().contains("`not a url`"));
}

// Env var tests share ORIGIN_ENV_VAR; keep them in one test to avoid races.
#[test]
fn from_env_reads_override_and_falls_back() {
    unsafe { std::env::set_var(ORIGIN_ENV_VAR, "http://10.0.0.2:9000/") };
    let config = ApiConfig::from_env().unwrap();
    assert_eq!(config.url_for("/login").as_str(), "http://10.0.0.2:9000/login");

    unsafe { std::env::set_var(ORIGIN_ENV_VAR, "   ") };
    assert_eq!(ApiConfig::from_env().unwrap(), ApiConfig::local().unwrap());

    unsafe { std::env::set_var(ORIGIN_ENV_VAR, "gopher://old.example") };
    assert!(ApiConfig::from_env().is_err());

    unsafe { std::env::remove_var(ORIGIN_ENV_VAR) };
    assert_eq!(ApiConfig::from_env().unwrap(), ApiConfig::local().unwrap());
}
