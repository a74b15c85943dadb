// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! API clients for various AI services.

pub mod openai;

use crate::http::HTTPError;
use thiserror::Error;

/// A client for an AI service's API.
pub trait APIClient {
    /// The client can make API requests of this type.
    type APIRequest: APIRequest;

    /// The client receives API responses of this type.
    type APIResponse: APIResponse;

    /// Sends the request to the AI service and receives a response.
    fn send(
        &self,
        request: &Self::APIRequest,
    ) -> impl Future<Output = APIResult<Self::APIResponse>> + Send;
}

/// A request to an AI service's API.
///
/// This trait follows a "builder" pattern where elements of the request
/// are built up over time.
///
/// Assuming you have an enum called `Model` that specifies available AI
/// models for your service, and a `ConcreteAPIRequest` struct that
/// implements `APIRequest`, you would create an API request like this:
///
/// ```
/// # use scribo::ai::client::APIRequest;
/// #
/// # pub enum Model {
/// #     AIModel,
/// # }
/// #
/// # #[derive(Default)]
/// # pub struct ConcreteAPIRequest;
/// #
/// # impl APIRequest for ConcreteAPIRequest {
/// #     type Model = Model;
/// #     fn model(self, model: Self::Model) -> Self { self }
/// #     fn instructions(self, instructions: impl Into<String>) -> Self { self }
/// #     fn input(self, input: impl Into<String>) -> Self { self }
/// #     fn temperature(self, temperature: f64) -> Self { self }
/// #     fn max_tokens(self, max_tokens: u32) -> Self { self }
/// # }
/// #
/// let request = ConcreteAPIRequest::default()
///     .model(Model::AIModel)
///     .instructions("Be really snarky.")
///     .input("How do I make an API request?")
///     .temperature(0.7)
///     .max_tokens(100);
/// ```
///
/// It is often useful for your concrete implementation to also implement
/// [`Default`] to return an instance with default values already set,
/// although this is not required.
pub trait APIRequest {
    /// An enum or other data structure providing options for different
    /// AI models, which are specific to each service.
    type Model;

    /// Sets the model used by the API request and returns a new
    /// request.
    ///
    /// AI services often have many different models; consult the
    /// documentation for your specific AI service for options.
    fn model(self, model: Self::Model) -> Self;

    /// Sets specialized instructions for the request and returns a new
    /// request.
    ///
    /// Some AI models allow callers to specify instructions for
    /// generating responses, such as tone, goals, or examples of
    /// correct responses. Consult the API documentation for your
    /// specific service to see if it allows instructions to be
    /// specified. If not, this method can be a no-op.
    fn instructions(self, instructions: impl Into<String>) -> Self;

    /// Sets the request's input and returns a new request.
    ///
    /// The input is often referred to as a "prompt" and is the text
    /// for which an AI service generates a response.
    fn input(self, input: impl Into<String>) -> Self;

    /// Sets the sampling temperature for the request and returns a new
    /// request.
    ///
    /// Higher values produce more varied output; lower values make the
    /// output more deterministic.
    fn temperature(self, temperature: f64) -> Self;

    /// Caps the length of the generated response, in tokens, and
    /// returns a new request.
    fn max_tokens(self, max_tokens: u32) -> Self;
}

/// A response from an AI service's API.
pub trait APIResponse {
    /// The generated text returned by the service, or `None` if the
    /// service did not produce any output.
    fn text(&self) -> Option<&str>;
}

/// An API result that includes the response if successful or an error
/// if unsuccessful.
pub type APIResult<T> = Result<T, APIError>;

/// An API error.
#[derive(Debug, Error)]
pub enum APIError {
    /// An error occurred in the HTTP exchange with the API service.
    #[error("HTTP error: {0}")]
    Http(#[from] HTTPError),
}
