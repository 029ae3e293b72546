// File: e2e_tests.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

mod common;

use common::{blocking, mount_echo_routes, setup_mock_server};
use rxss::config::ConfigParameter;
use rxss::getstate::ScanState;
use rxss::http::Http;
use rxss::probe::{probe_all, ProbeOptions};
use rxss::report::{Outcome, ReportEntry, ReportFormat, ReportGenerator};
use rxss::scanner::ReflectionSite;
use rxss::target::parse_targets;
use serial_test::serial;
use std::fs;
use tempfile::TempDir;

fn run_scan(targets: Vec<String>, config: ConfigParameter) -> (Vec<ReportEntry>, ScanState) {
    let http = Http::new(config).unwrap();
    let mut state = ScanState::new();
    let entries = probe_all(&http, &targets, &ProbeOptions::default(), &mut state);
    (entries, state)
}

fn entry_for<'a>(entries: &'a [ReportEntry], suffix: &str) -> &'a ReportEntry {
    entries
        .iter()
        .find(|e| e.target.ends_with(suffix))
        .unwrap_or_else(|| panic!("no entry for {}", suffix))
}

#[tokio::test(flavor = "multi_thread")]
#[serial]
async fn test_complete_scan_workflow() {
    let mock_server = setup_mock_server().await;
    mount_echo_routes(&mock_server).await;

    let uri = mock_server.uri();
    let input = format!(
        "# targets\n{uri}/search\n{uri}/header\n\n{uri}/static\n{uri}/missing\n{uri}/search?lang=en&q=RXSS\nnot-a-url\n",
        uri = uri
    );
    let targets = parse_targets(&input);
    assert_eq!(targets.len(), 6);

    let (entries, state) = blocking(move || run_scan(targets, ConfigParameter::new())).await;

    assert_eq!(entries.len(), 6);
    assert_eq!(state.total_targets(), 6);
    assert_eq!(state.reflected(), 3);
    assert_eq!(state.clean(), 1);
    assert_eq!(state.failed(), 2);

    let search = entry_for(&entries, "/search");
    assert_eq!(search.outcome, Outcome::Reflected);
    assert_eq!(search.site, Some(ReflectionSite::Body));
    assert!(search.url.contains(&format!("q={}", search.token)));

    let header = entry_for(&entries, "/header");
    assert_eq!(header.outcome, Outcome::Reflected);
    assert_eq!(header.site, Some(ReflectionSite::Header));

    let placeholder = entry_for(&entries, "q=RXSS");
    assert_eq!(placeholder.outcome, Outcome::Reflected);
    assert!(!placeholder.url.contains("RXSS"));

    let clean = entry_for(&entries, "/static");
    assert_eq!(clean.outcome, Outcome::Clean);
    assert_eq!(clean.status, Some(200));

    let missing = entry_for(&entries, "/missing");
    assert_eq!(missing.outcome, Outcome::Failed);
    assert!(missing.error.as_deref().unwrap().contains("404"));

    let junk = entry_for(&entries, "not-a-url");
    assert_eq!(junk.outcome, Outcome::Failed);
}

#[tokio::test(flavor = "multi_thread")]
#[serial]
async fn test_tiny_body_limit_hides_body_reflections() {
    let mock_server = setup_mock_server().await;
    mount_echo_routes(&mock_server).await;

    let targets = vec![format!("{}/search", mock_server.uri())];
    let mut config = ConfigParameter::new();
    config.set_body_limit(10);

    let (entries, state) = blocking(move || run_scan(targets, config)).await;

    assert_eq!(entries[0].outcome, Outcome::Clean);
    assert_eq!(state.clean(), 1);
}

#[tokio::test(flavor = "multi_thread")]
#[serial]
async fn test_report_written_to_file() {
    let mock_server = setup_mock_server().await;
    mount_echo_routes(&mock_server).await;

    let targets = vec![
        format!("{}/search", mock_server.uri()),
        format!("{}/static", mock_server.uri()),
    ];
    let (entries, _) = blocking(move || run_scan(targets, ConfigParameter::new())).await;

    let temp_dir = TempDir::new().unwrap();
    let report_path = temp_dir.path().join("report.json");
    let mut file = fs::File::create(&report_path).unwrap();
    ReportGenerator::write_report(&entries, &mut file, ReportFormat::Json, false).unwrap();

    let content = fs::read_to_string(&report_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
    let rows = parsed.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["outcome"], "reflected");
    assert_eq!(rows[1]["outcome"], "clean");
}

#[tokio::test(flavor = "multi_thread")]
#[serial]
async fn test_zero_token_length_reports_no_reflection() {
    let mock_server = setup_mock_server().await;
    mount_echo_routes(&mock_server).await;

    let targets = vec![format!("{}/static", mock_server.uri())];
    let mut config = ConfigParameter::new();
    config.set_token_length(0);

    let (entries, state) = blocking(move || run_scan(targets, config)).await;

    assert_eq!(entries[0].outcome, Outcome::Failed);
    assert!(entries[0].site.is_none());
    assert_eq!(state.reflected(), 0);
    assert_eq!(state.failed(), 1);
}
