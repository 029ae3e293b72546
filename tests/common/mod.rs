// File: common/mod.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

#![allow(dead_code)]

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// The blocking client must not run on an async worker thread.
pub async fn blocking<T, F>(f: F) -> T
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .expect("blocking task panicked")
}

/// Echoes the `q` query parameter into the body, like a naive search page.
pub struct BodyEcho;

impl Respond for BodyEcho {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let q = query_value(request, "q");
        ResponseTemplate::new(200)
            .set_body_string(format!("<html><body>You searched for {}</body></html>", q))
            .append_header("content-type", "text/html")
    }
}

/// Echoes the `q` query parameter into a response header.
pub struct HeaderEcho;

impl Respond for HeaderEcho {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let q = query_value(request, "q");
        ResponseTemplate::new(200)
            .append_header("x-search-term", format!("term={}", q).as_str())
            .set_body_string("<html><body>Results</body></html>")
    }
}

fn query_value(request: &Request, name: &str) -> String {
    request
        .url
        .query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
        .unwrap_or_default()
}

pub async fn mount_echo_routes(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(BodyEcho)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/header"))
        .respond_with(HeaderEcho)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/static"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html><body>Nothing to see</body></html>")
                .append_header("server", "nginx"),
        )
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(server)
        .await;
}
