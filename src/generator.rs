// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! AI content generation.
//!
//! A [`Generator`] turns the steps of an SEO content pipeline into API
//! calls: a seed keyword becomes related [keywords](Generator::keywords),
//! a keyword becomes candidate [titles](Generator::titles), a title
//! becomes [topics](Generator::topics), and a topic becomes a short
//! [content](Generator::content) paragraph. Each operation makes exactly
//! one request and post-processes the response into its final shape.

use crate::ai::client::{APIClient, APIError, APIRequest, APIResponse};
use crate::text;
use log::{debug, trace};
use thiserror::Error;

/// All generation requests sample with the same temperature.
const TEMPERATURE: f64 = 0.7;

const KEYWORDS_MAX_TOKENS: u32 = 100;
const TITLES_MAX_TOKENS: u32 = 150;
const TOPICS_MAX_TOKENS: u32 = 200;
const CONTENT_MAX_TOKENS: u32 = 300;

const KEYWORDS_ROLE: &str = "You are a helpful SEO assistant.";
const TITLES_ROLE: &str = "You are a professional SEO content writer.";
const TOPICS_ROLE: &str = "You are a professional content strategist.";
const CONTENT_ROLE: &str = "You are a professional content writer specializing in SEO.";

/// Standard result type for generation operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Indicates an error during a generation operation.
#[derive(Debug, Error)]
pub enum Error {
    /// An error from the underlying API client.
    #[error("API error: {0}")]
    API(#[from] APIError),

    /// The service's response contained no generated text.
    #[error("response contained no content")]
    EmptyResponse,
}

/// Generates SEO copy using an AI service.
///
/// A generator borrows the client it sends its requests through, so one
/// client can serve any number of generators.
pub struct Generator<'a, C: APIClient> {
    client: &'a C,
    model: Option<<C::APIRequest as APIRequest>::Model>,
}

impl<'a, C> Generator<'a, C>
where
    C: APIClient,
    C::APIRequest: Default,
    <C::APIRequest as APIRequest>::Model: Clone,
{
    /// Creates a generator that sends its requests through the given
    /// client, using the client's default model.
    pub fn new(client: &'a C) -> Self {
        Self {
            client,
            model: None,
        }
    }

    /// Selects the model used for generation requests.
    pub fn model(self, model: <C::APIRequest as APIRequest>::Model) -> Self {
        let model = Some(model);
        Self { model, ..self }
    }

    /// Suggests keywords related to the given seed keyword.
    ///
    /// The model is asked for five keywords, but the count is not
    /// enforced: the result contains however many non-blank lines the
    /// model actually returned, in its order.
    pub async fn keywords(&self, seed: &str) -> Result<Vec<String>> {
        debug!("generating keywords for seed keyword {seed:?}");
        let blob = self
            .generate(KEYWORDS_ROLE, keywords_prompt(seed), KEYWORDS_MAX_TOKENS)
            .await?;
        Ok(text::trimmed_lines(&blob))
    }

    /// Generates SEO-optimized titles for the given keyword.
    ///
    /// The model is asked for three titles; as with
    /// [`keywords`](Generator::keywords), the count is not enforced.
    pub async fn titles(&self, keyword: &str) -> Result<Vec<String>> {
        debug!("generating titles for keyword {keyword:?}");
        let blob = self
            .generate(TITLES_ROLE, titles_prompt(keyword), TITLES_MAX_TOKENS)
            .await?;
        Ok(text::trimmed_lines(&blob))
    }

    /// Generates detailed topic ideas for the given title.
    ///
    /// The model is asked for two topics; as with
    /// [`keywords`](Generator::keywords), the count is not enforced.
    pub async fn topics(&self, title: &str) -> Result<Vec<String>> {
        debug!("generating topics for title {title:?}");
        let blob = self
            .generate(TOPICS_ROLE, topics_prompt(title), TOPICS_MAX_TOKENS)
            .await?;
        Ok(text::trimmed_lines(&blob))
    }

    /// Writes a short content paragraph about the given topic.
    ///
    /// Unlike the other operations, the result is the whole response,
    /// trimmed but not split into lines.
    pub async fn content(&self, topic: &str) -> Result<String> {
        debug!("generating content for topic {topic:?}");
        let blob = self
            .generate(CONTENT_ROLE, content_prompt(topic), CONTENT_MAX_TOKENS)
            .await?;
        Ok(String::from(blob.trim()))
    }

    /// Performs one generation request and returns the raw response text.
    async fn generate(&self, role: &str, prompt: String, max_tokens: u32) -> Result<String> {
        trace!("prompt: {prompt}");
        let request = self
            .request()
            .instructions(role)
            .input(prompt)
            .max_tokens(max_tokens);
        let response = self.client.send(&request).await?;
        let text = response.text().ok_or(Error::EmptyResponse)?;
        Ok(String::from(text))
    }

    /// A request preconfigured with the generator's model and temperature.
    fn request(&self) -> C::APIRequest {
        let request = C::APIRequest::default().temperature(TEMPERATURE);
        match &self.model {
            Some(model) => request.model(model.clone()),
            None => request,
        }
    }
}

fn keywords_prompt(seed: &str) -> String {
    format!("Suggest 5 related keywords for '{seed}'. Return only the keywords, one per line.")
}

fn titles_prompt(keyword: &str) -> String {
    format!(
        "Generate 3 SEO-optimized titles for '{keyword}'. Make them professional and engaging. \
         Return only the titles, one per line."
    )
}

fn topics_prompt(title: &str) -> String {
    format!(
        "Generate 2 detailed topic ideas for the title: '{title}'. Make them specific and \
         actionable. Return only the topics, one per line."
    )
}

fn content_prompt(topic: &str) -> String {
    format!(
        "Write a short, SEO-optimized piece of content (100-200 words) about: '{topic}'. \
         Make it professional and engaging."
    )
}
