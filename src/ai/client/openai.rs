// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! OpenAI API client.
//!
//! This module speaks the OpenAI [chat completions] protocol: a request
//! carries a list of role-tagged messages, and the response carries a list
//! of generated "choices". When you create a request, you will have to
//! select a [model](Model) to use; by default, requests use
//! [gpt-3.5-turbo](Model::Gpt35turbo). Read the
//! [OpenAI model documentation](https://platform.openai.com/docs/models)
//! for more information on the various models offered by the OpenAI API.
//!
//! # Access
//!
//! You will need to set up an [OpenAI API account](https://platform.openai.com/docs/overview)
//! and generate your own authentication key to use OpenAI's API. Your key
//! should be stored under the `$OPENAI_API_KEY` environment variable for use
//! with [`Auth`](crate::ai::auth::Auth).
//!
//! **Note that you are solely responsible for paying the costs of OpenAI API
//! access.** The scribo developers are not responsible for costs you incur
//! while generating keywords, titles, topics, or content.
//!
//! # Cost
//!
//! Models are billed on a per-token basis, where a token is the smallest
//! unit of text that the model reads and processes. Input tokens (the
//! prompt scribo sends) and output tokens (the generated text sent back)
//! are billed at different rates. Prices are expressed in US dollars per
//! $1 million tokens. As of July 2025, the prices for each model are as
//! follows; for the latest pricing, see OpenAI's
//! [pricing](https://platform.openai.com/docs/pricing) docs.
//!
//! | Model      | Descriptor    | Input | Output |
//! |------------|---------------|-------|--------|
//! | Gpt4_1nano | gpt-4.1-nano  | $0.10 | $0.40  |
//! | Gpt4omini  | gpt-4o-mini   | $0.15 | $0.60  |
//! | Gpt4_1mini | gpt-4.1-mini  | $0.40 | $1.60  |
//! | Gpt35turbo | gpt-3.5-turbo | $0.50 | $1.50  |
//! | Gpt4_1     | gpt-4.1       | $2.00 | $8.00  |
//! | Gpt4o      | gpt-4o        | $2.50 | $10.00 |
//!
//! # See Also
//!
//! - [OpenAI model documentation](https://platform.openai.com/docs/models)
//!
//! [chat completions]: https://platform.openai.com/docs/api-reference/chat

use crate::ai::auth::Auth;
use crate::ai::client::{APIClient, APIRequest, APIResponse, APIResult};
use crate::ai::service::{APIService, HTTPService};
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The OpenAI chat completions endpoint.
const COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

/// A client for the OpenAI chat completions API.
pub struct OpenAIClient<S = HTTPService>
where
    S: APIService,
{
    auth: Auth,
    service: S,
}

impl OpenAIClient {
    /// Creates a new client that talks to the live OpenAI API using the
    /// given authentication data.
    ///
    /// Returns an error if the underlying HTTP service cannot be
    /// constructed.
    pub fn new(auth: Auth) -> APIResult<Self> {
        let service = HTTPService::new()?;
        Ok(Self::with_service(auth, service))
    }
}

impl<S: APIService> OpenAIClient<S> {
    /// Creates a new client that sends its requests through the given
    /// service, which is usually a deterministic service used for
    /// testing.
    pub(crate) fn with_service(auth: Auth, service: S) -> Self {
        Self { auth, service }
    }
}

impl<S: APIService + Sync> APIClient for OpenAIClient<S> {
    type APIRequest = OpenAIRequest;
    type APIResponse = OpenAIResponse;

    async fn send(&self, request: &OpenAIRequest) -> APIResult<OpenAIResponse> {
        debug!("sending completion request to {COMPLETIONS_URL}");
        if let Ok(body) = serde_json::to_string(request) {
            trace!("request body: {body}");
        }
        let response = self.service.post(COMPLETIONS_URL, &self.auth, request).await?;
        Ok(response)
    }
}

/// A body for an OpenAI chat completion request.
#[derive(Default, Deserialize, Serialize)]
pub struct OpenAIRequest {
    model: Model,

    messages: Vec<Message>,

    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

impl APIRequest for OpenAIRequest {
    /// This request uses OpenAI-specific [models](Model).
    type Model = Model;

    /// Sets the model used by the OpenAI API request.
    ///
    /// If not specified, the [default](Model::default) model,
    /// gpt-3.5-turbo, will be used. If you are on a budget, you can also
    /// try using the [least expensive](Model::cheapest) model.
    fn model(self, model: Model) -> Self {
        Self { model, ..self }
    }

    /// Sets optional instructions for the request.
    ///
    /// Instructions provide high-level guidance on how the model should
    /// behave while generating a response, including tone, goals, and
    /// examples of correct responses. They are sent as the conversation's
    /// "system" message, ahead of the prompt provided by the
    /// [`input`](OpenAIRequest::input) parameter. Instructions are not
    /// necessary if you do not wish to customize the response.
    fn instructions(mut self, instructions: impl Into<String>) -> Self {
        self.messages.retain(|message| message.role != Role::System);
        self.messages.insert(0, Message::system(instructions));
        self
    }

    /// Sets the request's input.
    ///
    /// This is sometimes referred to as a "prompt" and represents a
    /// request made to the model for which a response is expected. It is
    /// sent as the conversation's "user" message.
    fn input(mut self, input: impl Into<String>) -> Self {
        self.messages.retain(|message| message.role != Role::User);
        self.messages.push(Message::user(input));
        self
    }

    /// Sets the sampling temperature for the request.
    ///
    /// If not specified, the service's default applies.
    fn temperature(self, temperature: f64) -> Self {
        let temperature = Some(temperature);
        Self {
            temperature,
            ..self
        }
    }

    /// Caps the length of the generated response, in tokens.
    ///
    /// If not specified, the service's default applies.
    fn max_tokens(self, max_tokens: u32) -> Self {
        let max_tokens = Some(max_tokens);
        Self { max_tokens, ..self }
    }
}

/// A single role-tagged message in a chat completion conversation.
#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct Message {
    role: Role,
    content: String,
}

impl Message {
    fn system(content: impl Into<String>) -> Self {
        let content = content.into();
        Self {
            role: Role::System,
            content,
        }
    }

    fn user(content: impl Into<String>) -> Self {
        let content = content.into();
        Self {
            role: Role::User,
            content,
        }
    }
}

/// The author of a chat completion message.
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// High-level instructions that frame the conversation.
    System,

    /// The caller's prompt.
    User,

    /// Text generated by the model.
    Assistant,
}

/// A body for an OpenAI chat completion response.
///
/// Only the generated choices are retained; everything else in the
/// response (usage counts, fingerprints, and so on) is ignored.
#[derive(Debug, Deserialize)]
pub struct OpenAIResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Message,
}

impl APIResponse for OpenAIResponse {
    /// The content of the first generated choice, or `None` if the
    /// service returned no choices.
    fn text(&self) -> Option<&str> {
        self.choices
            .first()
            .map(|choice| choice.message.content.as_str())
    }
}

/// Available OpenAI chat models.
///
/// For more information on the differences between each model, see the
/// [OpenAI model documentation](https://platform.openai.com/docs/models).
///
/// The [default](Model::default) is [gpt-3.5-turbo](Model::Gpt35turbo), a
/// fast, inexpensive model that is more than adequate for short SEO copy.
/// If you are on a budget, consider using
/// [gpt-4.1-nano](Model::Gpt4_1nano), the [least expensive](Model::cheapest)
/// model.
///
/// # Cost
///
/// OpenAI API usage has a cost, and the cost of each model differs;
/// naturally more powerful models cost more to use.
///
/// See the [cost breakdown](self#cost) in the `openai` module documentation
/// for more details, or visit OpenAI's
/// [pricing](https://platform.openai.com/docs/pricing) docs for the latest
/// prices.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub enum Model {
    /// A fast, inexpensive chat model for everyday tasks.
    #[default]
    #[serde(rename = "gpt-3.5-turbo")]
    Gpt35turbo,

    /// Versatile, high-intelligence flagship model.
    #[serde(rename = "gpt-4o")]
    Gpt4o,

    /// A fast, affordable model for focused tasks.
    #[serde(rename = "gpt-4o-mini")]
    Gpt4omini,

    /// The flagship model for complex tasks.
    ///
    /// It is well-suited for problem-solving across domains.
    #[serde(rename = "gpt-4.1")]
    Gpt4_1,

    /// Provides a balance between intelligence, speed, and cost.
    ///
    /// An attractive model for many use cases.
    #[serde(rename = "gpt-4.1-mini")]
    Gpt4_1mini,

    /// The fastest, most cost-effective 4.1 model.
    #[serde(rename = "gpt-4.1-nano")]
    Gpt4_1nano,
}

impl Model {
    /// The least expensive available model.
    pub fn cheapest() -> Self {
        Model::Gpt4_1nano
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = serde_json::to_string(&self).expect(&format!("could not serialize {:?}", self));
        let s = s.trim_matches('"');
        f.write_fmt(format_args!("{}", s))
    }
}

impl FromStr for Model {
    type Err = String;

    /// Parses a model from its API descriptor, e.g. `"gpt-4o-mini"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = serde_json::Value::String(s.to_string());
        serde_json::from_value(value).map_err(|_| format!("unknown model: {s}"))
    }
}
