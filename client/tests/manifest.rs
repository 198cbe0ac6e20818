//! Browser build wiring that only shows up in the manifest.

use std::fs;

fn manifest() -> String {
    fs::read_to_string("Cargo.toml").unwrap()
}

fn csr_feature(manifest: &str) -> Vec<String> {
    manifest
        .lines()
        .skip_while(|line| !line.starts_with("csr = ["))
        .skip(1)
        .take_while(|line| line.trim() != "]")
        .map(|line| line.trim().trim_end_matches(',').trim_matches('"').to_owned())
        .collect()
}

#[test]
fn csr_build_forwards_api_tracing_to_console_log() {
    let manifest = manifest();
    let tracing = manifest
        .lines()
        .find(|line| line.starts_with("tracing ="))
        .expect("client declares tracing");
    assert!(tracing.contains("\"log\""), "tracing must enable its `log` feature: {tracing}");

    let csr = csr_feature(&manifest);
    for dep in ["dep:tracing", "dep:console_log", "dep:log"] {
        assert!(csr.iter().any(|item| item == dep), "csr feature is missing {dep}: {csr:?}");
    }
}
