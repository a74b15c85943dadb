// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! scribo is a command-line tool for producing the raw material of an SEO
//! content pipeline. Starting from a single seed keyword, it can suggest
//! related keywords, turn a keyword into candidate titles, expand a title
//! into topic ideas, and write a short content paragraph for a topic, using
//! the OpenAI API to generate the text. Each invocation runs one command,
//! makes one API call, and prints one JSON object to standard output, which
//! makes the tool easy to drive from scripts and other programs.
//!
//! # Examples
//!
//! Suggest five keywords related to a seed keyword:
//!
//! ```bash
//! scribo generate_keywords "loose leaf tea"
//! ```
//!
//! Generate three SEO-optimized titles for a keyword:
//!
//! ```bash
//! scribo generate_titles "gongfu brewing"
//! ```
//!
//! Generate two detailed topic ideas for a title:
//!
//! ```bash
//! scribo generate_topics "A Beginner's Guide to Gongfu Brewing"
//! ```
//!
//! Write a short content paragraph about a topic:
//!
//! ```bash
//! scribo generate_content "Choosing your first gaiwan"
//! ```
//!
//! Get usage and help for the tool:
//!
//! ```bash
//! scribo --help
//! ```
//!
//! On success, each command prints a single JSON object whose only key names
//! the kind of output produced, e.g.:
//!
//! ```json
//! {"keywords": ["white tea", "oolong", "pu-erh", "sencha", "matcha"]}
//! ```
//!
//! On failure, the tool prints a single JSON error object instead and exits
//! with a non-zero status:
//!
//! ```json
//! {"error": "Missing arguments"}
//! ```
//!
//! Generated content can also be scored with the [`score`] module's
//! [`seo_score`](score::seo_score) heuristic, which estimates quality from
//! keyword density and length.
//!
//! # OpenAI API Setup
//!
//! scribo generates its text via the OpenAI API, so you must set up access
//! before running any command. To enable access:
//!
//! 1. Set up an [OpenAI API account].
//! 2. Generate an [API key].
//! 3. Copy and paste the generated key.
//! 4. Store the generated key in your shell's `$OPENAI_API_KEY` environment
//!    variable. Follow your shell's procedure for configuring environment
//!    variables, but generally this involves running
//!
//!    ```bash
//!    $ export OPENAI_API_KEY='copied api key'
//!    ```
//!
//!    In your shell session or in your shell's configuration ("rc") file
//!    (e.g., `~/.bashrc` or `~/.zshrc`).
//!
//! **You are solely responsible for the cost of your use of the OpenAI API!**
//! See the [openai module documentation] for more information on the cost of
//! using the OpenAI API.
//!
//! By default, scribo uses gpt-3.5-turbo; pass `--model` to any command to
//! use a different model.
//!
//! Currently only OpenAI's API is supported by scribo, but support for
//! additional providers may be added in the future.
//!
//! # License
//!
//! scribo is licensed under the terms of the [Apache License 2.0]. Please
//! see the LICENSE file accompanying this source code or visit the previous
//! link for more information on licensing.
//!
//! [Apache License 2.0]: https://www.apache.org/licenses/LICENSE-2.0
//! [API key]: https://platform.openai.com/settings/organization/api-keys
//! [OpenAI API account]: https://platform.openai.com/docs/overview
//! [openai module documentation]: crate::ai::client::openai

pub mod ai;
pub mod cli;
pub mod generator;
pub mod http;
pub mod score;
pub mod text;

#[cfg(test)]
mod test_utils;
