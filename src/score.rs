// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Heuristic scoring for SEO content.

/// Estimates the SEO quality of `content` with respect to `keyword`.
///
/// The score is the sum of two components, rounded to two decimal
/// places:
///
/// - **Keyword presence**: 0.2 points per case-insensitive,
///   non-overlapping occurrence of `keyword` in `content`, capped at
///   0.5. An empty keyword contributes nothing.
/// - **Length**: 0.5 points for a word count of 100–200 (the ideal
///   range for a short piece of content), 0.3 points for a word count
///   of 80–99 or 201–250, and 0.1 points otherwise. Words are
///   whitespace-delimited tokens.
///
/// The result always lies in the range [0.1, 1.0]. The function is pure
/// and deterministic; scoring the same content twice yields the same
/// result.
///
/// # Examples
///
/// Ideal length and plenty of keyword matches earn a perfect score:
///
/// ```
/// use scribo::score::seo_score;
/// let content = "word ".repeat(150);
/// assert_eq!(seo_score(&content, "word"), 1.0);
/// ```
///
/// A few words with no keyword in sight earn the minimum score:
///
/// ```
/// use scribo::score::seo_score;
/// assert_eq!(seo_score("short text here", "keyword"), 0.1);
/// ```
pub fn seo_score(content: &str, keyword: &str) -> f64 {
    let score = keyword_score(content, keyword) + length_score(content);
    (score * 100.0).round() / 100.0
}

/// Points awarded for occurrences of the keyword within the content.
fn keyword_score(content: &str, keyword: &str) -> f64 {
    if keyword.is_empty() {
        return 0.0;
    }
    let content = content.to_lowercase();
    let keyword = keyword.to_lowercase();
    let count = content.matches(&keyword).count();
    (count as f64 * 0.2).min(0.5)
}

/// Points awarded for the length of the content.
fn length_score(content: &str) -> f64 {
    let word_count = content.split_whitespace().count();
    match word_count {
        100..=200 => 0.5,
        80..=99 | 201..=250 => 0.3,
        _ => 0.1,
    }
}
