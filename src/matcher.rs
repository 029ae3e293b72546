// File: matcher.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use aho_corasick::{AhoCorasick, AhoCorasickBuilder};
use log::trace;

/// Substring test ignoring ASCII case. An empty needle matches anything.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack
        .to_ascii_lowercase()
        .contains(&needle.to_ascii_lowercase())
}

/// All markers of one scan compiled into a single case-insensitive automaton,
/// so a haystack is walked once no matter how many markers there are.
#[derive(Debug)]
pub struct MarkerMatcher {
    automaton: Option<AhoCorasick>,
    markers: Vec<String>,
}

impl MarkerMatcher {
    pub fn new<S: AsRef<str>>(markers: &[S]) -> Self {
        let markers: Vec<String> = markers.iter().map(|m| m.as_ref().to_string()).collect();

        let automaton = if markers.is_empty() {
            None
        } else {
            match AhoCorasickBuilder::new()
                .ascii_case_insensitive(true)
                .build(&markers)
            {
                Ok(automaton) => Some(automaton),
                Err(e) => {
                    // Only reachable for pathological marker sets; fall back to linear scans.
                    trace!("Falling back to per-marker matching: {}", e);
                    None
                }
            }
        };

        Self { automaton, markers }
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn markers(&self) -> &[String] {
        &self.markers
    }

    pub fn is_match(&self, haystack: &[u8]) -> bool {
        if let Some(ref automaton) = self.automaton {
            return automaton.is_match(haystack);
        }

        let lowered = haystack.to_ascii_lowercase();
        self.markers.iter().any(|marker| {
            let needle = marker.as_bytes().to_ascii_lowercase();
            needle.is_empty() || lowered.windows(needle.len()).any(|w| w == needle.as_slice())
        })
    }

    /// First marker, in the order the markers were given, that occurs in `haystack`.
    pub fn find_first_marker(&self, haystack: &str) -> Option<&str> {
        self.markers
            .iter()
            .find(|marker| contains_ignore_case(haystack, marker))
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Hello World", "hello", true)]
    #[case("hello world", "WORLD", true)]
    #[case("abcTOKENxyz", "token", true)]
    #[case("abcTOKENxyz", "tokens", false)]
    #[case("", "a", false)]
    #[case("", "", true)]
    #[case("anything", "", true)]
    fn test_contains_ignore_case(#[case] haystack: &str, #[case] needle: &str, #[case] expected: bool) {
        assert_eq!(contains_ignore_case(haystack, needle), expected);
    }

    #[rstest]
    #[case("MiXeD CaSe", "mixed")]
    #[case("<script>alert(1)</script>", "SCRIPT")]
    #[case("qQwWeE", "QWE")]
    fn test_case_invariance_both_directions(#[case] haystack: &str, #[case] needle: &str) {
        let expected = contains_ignore_case(haystack, needle);
        assert_eq!(
            expected,
            contains_ignore_case(&haystack.to_lowercase(), &needle.to_lowercase())
        );
        assert_eq!(
            expected,
            contains_ignore_case(&haystack.to_uppercase(), &needle.to_uppercase())
        );
    }

    #[test]
    fn test_marker_matcher_agrees_with_contains() {
        let matcher = MarkerMatcher::new(&["token", "XyZ"]);
        let haystacks = ["abcTOKENxyz", "nothing here", "xYz", "TOKE N", ""];

        for haystack in haystacks {
            let expected = matcher
                .markers()
                .iter()
                .any(|m| contains_ignore_case(haystack, m));
            assert_eq!(matcher.is_match(haystack.as_bytes()), expected, "{}", haystack);
        }
    }

    #[test]
    fn test_marker_matcher_empty_set_never_matches() {
        let matcher = MarkerMatcher::new::<&str>(&[]);
        assert!(matcher.is_empty());
        assert!(!matcher.is_match(b"anything"));
    }

    #[test]
    fn test_marker_matcher_empty_marker_matches() {
        let matcher = MarkerMatcher::new(&[""]);
        assert!(matcher.is_match(b"anything"));
        assert!(matcher.is_match(b""));
    }

    #[test]
    fn test_find_first_marker_respects_order() {
        let matcher = MarkerMatcher::new(&["second", "first"]);
        assert_eq!(matcher.find_first_marker("FIRST and SECOND"), Some("second"));
        assert_eq!(matcher.find_first_marker("first only"), Some("first"));
        assert_eq!(matcher.find_first_marker("none"), None);
    }
}
