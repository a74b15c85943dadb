// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Helpful utilities for working with text.

/// Splits a blob of text into its non-blank lines.
///
/// Each line is trimmed of leading and trailing whitespace, and blank
/// lines are dropped entirely. The order of the remaining lines is
/// preserved, and duplicate lines are kept.
///
/// # Examples
///
/// ```
/// use scribo::text::trimmed_lines;
/// let raw = "one\ntwo\nthree";
/// assert_eq!(trimmed_lines(raw), vec!["one", "two", "three"]);
/// ```
///
/// ```
/// use scribo::text::trimmed_lines;
/// let raw = "  one\n\n two \n\nthree\n";
/// assert_eq!(trimmed_lines(raw), vec!["one", "two", "three"]);
/// ```
///
/// ```
/// use scribo::text::trimmed_lines;
/// let raw = "\n   \n";
/// assert!(trimmed_lines(raw).is_empty());
/// ```
pub fn trimmed_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
