// File: scanner.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use crate::config::DEFAULT_BODY_LIMIT;
use crate::errors::{ReadError, ReadResult};
use crate::httpinner::HttpResponse;
use crate::matcher::MarkerMatcher;
use log::{debug, trace};
use serde::Serialize;
use std::fmt;
use std::io::Read;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReflectionSite {
    Header,
    Body,
}

impl fmt::Display for ReflectionSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReflectionSite::Header => write!(f, "header"),
            ReflectionSite::Body => write!(f, "body"),
        }
    }
}

pub fn scan_headers<S: AsRef<str>>(resp: &HttpResponse, markers: &[S]) -> bool {
    headers_reflect(resp, &MarkerMatcher::new(markers))
}

pub fn scan_body<S: AsRef<str>>(resp: &mut HttpResponse, markers: &[S]) -> ReadResult<bool> {
    scan_body_with_limit(resp, markers, DEFAULT_BODY_LIMIT)
}

/// Like [`scan_body`] but with a caller-chosen cap. Bytes past `limit` are never looked at,
/// so a marker sitting beyond it goes unnoticed.
pub fn scan_body_with_limit<S: AsRef<str>>(
    resp: &mut HttpResponse,
    markers: &[S],
    limit: usize,
) -> ReadResult<bool> {
    body_reflects(resp, &MarkerMatcher::new(markers), limit)
}

pub fn scan_any<S: AsRef<str>>(resp: &mut HttpResponse, markers: &[S]) -> ReadResult<bool> {
    Ok(locate(resp, markers, DEFAULT_BODY_LIMIT)?.is_some())
}

/// Headers first, body only if no header reflected anything.
pub fn locate<S: AsRef<str>>(
    resp: &mut HttpResponse,
    markers: &[S],
    limit: usize,
) -> ReadResult<Option<ReflectionSite>> {
    let matcher = MarkerMatcher::new(markers);

    if headers_reflect(resp, &matcher) {
        return Ok(Some(ReflectionSite::Header));
    }
    if body_reflects(resp, &matcher, limit)? {
        return Ok(Some(ReflectionSite::Body));
    }
    Ok(None)
}

fn headers_reflect(resp: &HttpResponse, matcher: &MarkerMatcher) -> bool {
    if matcher.is_empty() {
        return false;
    }

    for name in resp.headers().keys() {
        let reflected = matcher.is_match(name.as_str().as_bytes());
        trace!("Header key: {}, reflected: {}", name, reflected);
        if reflected {
            debug!("Reflection in header name {} of {}", name, resp.url());
            return true;
        }

        for value in resp.headers().get_all(name) {
            if matcher.is_match(value.as_bytes()) {
                debug!(
                    "Reflection of {:?} in header {} of {}",
                    value.to_str().ok().and_then(|v| matcher.find_first_marker(v)),
                    name,
                    resp.url()
                );
                return true;
            }
        }
    }

    false
}

fn body_reflects(resp: &mut HttpResponse, matcher: &MarkerMatcher, limit: usize) -> ReadResult<bool> {
    let body = resp.take_body().ok_or(ReadError::BodyConsumed)?;
    let captured = read_bounded(body.into_reader(), limit)?;
    trace!("Read {} body bytes from {}", captured.len(), resp.url());

    let reflected = matcher.is_match(&captured);
    if reflected {
        debug!("Reflection in body of {}", resp.url());
    }
    Ok(reflected)
}

// `read_to_end` stops on a zero-length read and retries `Interrupted`, so every end-of-stream
// signal takes the normal path and only real failures come back as errors.
fn read_bounded<R: Read>(reader: R, limit: usize) -> ReadResult<Vec<u8>> {
    let mut captured = Vec::with_capacity(limit.min(64 * 1024));
    reader.take(limit as u64).read_to_end(&mut captured)?;
    Ok(captured)
}
