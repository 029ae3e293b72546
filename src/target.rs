// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use reqwest::Url;

pub const DEFAULT_PLACEHOLDER: &str = "RXSS";
pub const DEFAULT_PARAM: &str = "q";

/// Puts `token` into `target`: every `placeholder` occurrence is replaced, and a target
/// without one carries the token as the only value of the `param` query parameter.
pub fn inject_token(
    target: &str,
    token: &str,
    placeholder: &str,
    param: &str,
) -> Result<String, url::ParseError> {
    if !placeholder.is_empty() && target.contains(placeholder) {
        let url = Url::parse(&target.replace(placeholder, token))?;
        return Ok(url.to_string());
    }

    let mut url = Url::parse(target)?;
    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != param)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    url.query_pairs_mut()
        .clear()
        .extend_pairs(kept)
        .append_pair(param, token);
    Ok(url.to_string())
}

/// Lines worth scanning: trimmed, no blanks, no `#` comments.
pub fn parse_targets(input: &str) -> Vec<String> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
