// File: errors.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use std::fmt;

/// Failure to obtain a usable response for a target.
///
/// `Transport` wraps a request that never produced a response, `Status` a response whose
/// status was 400 or above. Neither is retried.
#[derive(Debug)]
pub enum FetchError {
    Client(reqwest::Error),
    Transport(reqwest::Error),
    Status { url: String, status: u16 },
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Client(e) => write!(f, "error building http client: {}", e),
            Self::Transport(e) => write!(f, "error sending request: {}", e),
            Self::Status { url, status } => {
                write!(f, "error sending request to {}: status code {}", url, status)
            }
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Client(e) => Some(e),
            Self::Transport(e) => Some(e),
            Self::Status { .. } => None,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        Self::Transport(error)
    }
}

#[derive(Debug)]
pub enum ReadError {
    Io(std::io::Error),
    BodyConsumed,
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "error reading response body: {}", e),
            Self::BodyConsumed => write!(f, "response body has already been read"),
        }
    }
}

impl std::error::Error for ReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::BodyConsumed => None,
        }
    }
}

impl From<std::io::Error> for ReadError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error)
    }
}

pub type FetchResult<T> = Result<T, FetchError>;
pub type ReadResult<T> = Result<T, ReadError>;
