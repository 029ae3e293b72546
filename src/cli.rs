// File: cli.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use clap::Parser;
use std::path::PathBuf;

use crate::config::{ConfigParameter, DEFAULT_BODY_LIMIT, DEFAULT_TIMEOUT, DEFAULT_TOKEN_LENGTH};
use crate::target::{DEFAULT_PARAM, DEFAULT_PLACEHOLDER};

#[derive(Parser, Debug)]
#[command(
    name = env!("CARGO_PKG_NAME"),
    version = env!("CARGO_PKG_VERSION"),
    author = env!("CARGO_PKG_AUTHORS"),
    about = env!("CARGO_PKG_DESCRIPTION"),
)]
pub struct Cli {
    #[arg(long = "log-level", default_value = "warn")]
    pub log_level: String,

    #[arg(short = 'v', long = "verbose", help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(long = "no-color", help = "Disable colored output")]
    pub no_color: bool,

    #[arg(
        short = 't',
        long = "timeout",
        default_value_t = DEFAULT_TIMEOUT,
        help = "HTTP request timeout in seconds, 0 disables it"
    )]
    pub timeout: u64,

    #[arg(
        short = 'b',
        long = "body-limit",
        default_value_t = DEFAULT_BODY_LIMIT,
        help = "Maximum number of body bytes inspected"
    )]
    pub body_limit: usize,

    #[arg(
        short = 'l',
        long = "token-length",
        default_value_t = DEFAULT_TOKEN_LENGTH,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..),
        help = "Number of letters in each injected token"
    )]
    pub token_length: usize,

    #[arg(
        long = "placeholder",
        default_value = DEFAULT_PLACEHOLDER,
        help = "Text in a target that is replaced by the token"
    )]
    pub placeholder: String,

    #[arg(
        short = 'p',
        long = "param",
        default_value = DEFAULT_PARAM,
        help = "Query parameter carrying the token when a target has no placeholder"
    )]
    pub param: String,

    #[arg(
        short = 'S',
        long = "show-failed",
        help = "Show failed/unresponsive targets in output"
    )]
    pub show_failed: bool,

    #[arg(
        short = 's',
        long = "suppress-stats",
        help = "Suppress scan summary and statistics"
    )]
    pub suppress_stats: bool,

    #[arg(long = "json", help = "Print results as JSON")]
    pub json: bool,

    #[arg(short = 'i', long = "input-file", help = "Read targets from a file instead of stdin")]
    pub input_file: Option<PathBuf>,
}

impl Cli {
    pub fn to_config(&self) -> ConfigParameter {
        let mut config = ConfigParameter::new();
        config.set_timeout(self.timeout);
        config.set_body_limit(self.body_limit);
        config.set_token_length(self.token_length);
        config.set_print_failed(self.show_failed);
        config.set_suppress_stats(self.suppress_stats);
        config
    }

    pub fn log_level(&self) -> log::LevelFilter {
        if self.verbose {
            return log::LevelFilter::Debug;
        }
        self.log_level.parse().unwrap_or(log::LevelFilter::Warn)
    }
}
