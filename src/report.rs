// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use crate::scanner::ReflectionSite;
use colored::Colorize;
use serde::Serialize;
use std::io::{Result, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Reflected,
    Clean,
    Failed,
}

#[derive(Debug, Serialize)]
pub struct ReportEntry {
    pub target: String,
    pub url: String,
    pub token: String,
    pub outcome: Outcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<ReflectionSite>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub enum ReportFormat {
    Text,
    Json,
}

pub struct ReportGenerator;

impl ReportGenerator {
    pub fn write_report<W: Write>(
        entries: &[ReportEntry],
        out: &mut W,
        format: ReportFormat,
        print_failed: bool,
    ) -> Result<()> {
        match format {
            ReportFormat::Text => Self::write_text_report(entries, out, print_failed),
            ReportFormat::Json => Self::write_json_report(entries, out),
        }
    }

    /// One line per reflected target; failed ones only on request, clean ones never.
    pub fn write_text_report<W: Write>(
        entries: &[ReportEntry],
        out: &mut W,
        print_failed: bool,
    ) -> Result<()> {
        for entry in entries {
            match entry.outcome {
                Outcome::Reflected => {
                    let site = entry.site.map(|s| s.to_string()).unwrap_or_default();
                    writeln!(out, "{} {} ({})", "[REFLECTED]".red().bold(), entry.url, site)?;
                }
                Outcome::Failed if print_failed => {
                    writeln!(
                        out,
                        "{} {} {}",
                        "[FAILED]".yellow(),
                        entry.target,
                        entry.error.as_deref().unwrap_or("")
                    )?;
                }
                _ => {}
            }
        }
        Ok(())
    }

    pub fn write_json_report<W: Write>(entries: &[ReportEntry], out: &mut W) -> Result<()> {
        let json = serde_json::to_string_pretty(entries)?;
        writeln!(out, "{}", json)?;
        Ok(())
    }
}
