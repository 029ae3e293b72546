// File: lib.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

#![allow(clippy::uninlined_format_args)]
#![allow(clippy::bool_assert_comparison)]

pub mod cli;
pub mod config;
pub mod errors;
pub mod getstate;
pub mod http;
pub mod httpinner;
pub mod matcher;
pub mod probe;
pub mod report;
pub mod scanner;
pub mod target;
pub mod token;


pub use errors::{FetchError, ReadError};
pub use http::fetch;
pub use httpinner::{Body, HttpResponse};
pub use matcher::contains_ignore_case;
pub use scanner::{scan_any, scan_body, scan_headers, ReflectionSite};
