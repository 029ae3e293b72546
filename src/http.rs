// File: http.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use crate::config::ConfigParameter;
use crate::errors::{FetchError, FetchResult};
use crate::httpinner::{Body, HttpResponse};
use log::debug;
use reqwest::blocking::Client;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Http {
    config_ptr: ConfigParameter,
    client: Client,
}

impl Http {
    pub fn new(config_ptr: ConfigParameter) -> FetchResult<Self> {
        // 0 disables the request timeout
        let timeout = match config_ptr.timeout() {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        };
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(FetchError::Client)?;
        Ok(Http { config_ptr, client })
    }

    pub fn config(&self) -> &ConfigParameter {
        &self.config_ptr
    }

    /// GET `url`. Statuses of 400 and above are turned into errors, so a returned
    /// response is always one worth scanning.
    pub fn fetch(&self, url: &str) -> FetchResult<HttpResponse> {
        debug!("GET {}", url);
        let response = self.client.get(url).send()?;

        let status = response.status().as_u16();
        let final_url = response.url().to_string();
        debug!("{} answered with status {}", final_url, status);

        if status >= 400 {
            return Err(FetchError::Status {
                url: final_url,
                status,
            });
        }

        let headers = response.headers().clone();
        Ok(HttpResponse::new(final_url, status, headers, Body::new(response)))
    }
}

/// One-shot fetch with the default configuration.
pub fn fetch(url: &str) -> FetchResult<HttpResponse> {
    Http::new(ConfigParameter::default())?.fetch(url)
}
