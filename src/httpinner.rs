// File: httpinner.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use reqwest::header::HeaderMap;
use std::fmt;
use std::io::Read;

/// Single-use byte source behind a response.
pub struct Body {
    reader: Box<dyn Read + Send>,
}

impl Body {
    pub fn new<R: Read + Send + 'static>(reader: R) -> Self {
        Body {
            reader: Box::new(reader),
        }
    }

    pub fn empty() -> Self {
        Body::new(std::io::empty())
    }

    pub fn into_reader(self) -> Box<dyn Read + Send> {
        self.reader
    }
}

impl From<Vec<u8>> for Body {
    fn from(bytes: Vec<u8>) -> Self {
        Body::new(std::io::Cursor::new(bytes))
    }
}

impl From<String> for Body {
    fn from(text: String) -> Self {
        Body::from(text.into_bytes())
    }
}

impl From<&'static str> for Body {
    fn from(text: &'static str) -> Self {
        Body::new(text.as_bytes())
    }
}

impl fmt::Debug for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Body { .. }")
    }
}

#[derive(Debug)]
pub struct HttpResponse {
    headers: HeaderMap,
    status: u16,
    url: String,
    body: Option<Body>,
}

impl HttpResponse {
    pub fn new(url: String, status: u16, headers: HeaderMap, body: Body) -> Self {
        HttpResponse {
            headers,
            status,
            url,
            body: Some(body),
        }
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn body_consumed(&self) -> bool {
        self.body.is_none()
    }

    /// Hands the body out once; later calls get `None`.
    pub fn take_body(&mut self) -> Option<Body> {
        self.body.take()
    }
}
