// File: probe.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use crate::getstate::ScanState;
use crate::http::Http;
use crate::report::{Outcome, ReportEntry};
use crate::scanner;
use crate::target::{inject_token, DEFAULT_PARAM, DEFAULT_PLACEHOLDER};
use crate::token;
use log::{info, warn};

#[derive(Debug, Clone)]
pub struct ProbeOptions {
    pub placeholder: String,
    pub param: String,
}

impl Default for ProbeOptions {
    fn default() -> Self {
        ProbeOptions {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            param: DEFAULT_PARAM.to_string(),
        }
    }
}

/// Fresh token in, fetch, scan. Any failure ends up in the entry instead of aborting.
pub fn probe_target(http: &Http, target: &str, options: &ProbeOptions) -> ReportEntry {
    let config = http.config();
    let token = token::generate(config.token_length());

    let mut entry = ReportEntry {
        target: target.to_string(),
        url: String::new(),
        token: token.clone(),
        outcome: Outcome::Failed,
        site: None,
        status: None,
        error: None,
    };

    // An empty marker is found in every response.
    if token.is_empty() {
        warn!("Skipping {}: token length is 0", target);
        entry.error = Some("token length must be at least 1".to_string());
        return entry;
    }

    let url = match inject_token(target, &token, &options.placeholder, &options.param) {
        Ok(url) => url,
        Err(e) => {
            warn!("Skipping {}: {}", target, e);
            entry.error = Some(format!("invalid target: {}", e));
            return entry;
        }
    };
    entry.url = url.clone();

    let mut response = match http.fetch(&url) {
        Ok(response) => response,
        Err(e) => {
            warn!("Failed to fetch {}: {}", url, e);
            entry.error = Some(e.to_string());
            return entry;
        }
    };
    entry.status = Some(response.status());

    match scanner::locate(&mut response, &[token.as_str()], config.body_limit()) {
        Ok(Some(site)) => {
            info!("{} reflects its token in the {}", url, site);
            entry.outcome = Outcome::Reflected;
            entry.site = Some(site);
        }
        Ok(None) => entry.outcome = Outcome::Clean,
        Err(e) => {
            warn!("Failed to scan {}: {}", url, e);
            entry.error = Some(e.to_string());
        }
    }

    entry
}

pub fn probe_all(
    http: &Http,
    targets: &[String],
    options: &ProbeOptions,
    state: &mut ScanState,
) -> Vec<ReportEntry> {
    state.set_total_targets(targets.len());

    let entries: Vec<ReportEntry> = targets
        .iter()
        .map(|target| {
            let entry = probe_target(http, target, options);
            match entry.outcome {
                Outcome::Reflected => state.add_reflected(),
                Outcome::Clean => state.add_clean(),
                Outcome::Failed => state.add_failure(),
            }
            entry
        })
        .collect();

    state.finish();
    entries
}
