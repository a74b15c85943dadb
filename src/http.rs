// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Services for communicating with APIs using HTTP.

use reqwest::{Client, ClientBuilder, header};
use std::{error, fmt};

/// Builds HTTP clients with a standard configuration.
///
/// Every client produced by a factory identifies itself with a user agent
/// of the form `"name vX.Y.Z"`, built from the name and version the factory
/// was created with.
#[derive(Debug)]
pub struct HTTPClientFactory {
    user_agent: String,
}

impl HTTPClientFactory {
    /// Creates a new factory for the program with the given name and
    /// version.
    ///
    /// Callers will almost always want to pass `env!("CARGO_PKG_NAME")`
    /// and `env!("CARGO_PKG_VERSION")`.
    pub fn new(name: &str, version: &str) -> Self {
        let user_agent = format!("{name} v{version}");
        Self { user_agent }
    }

    /// Creates a new HTTP client.
    ///
    /// Returns an error if the underlying client cannot be constructed,
    /// which can happen if a TLS backend or DNS resolver cannot be
    /// initialized.
    pub fn create(&self) -> HTTPResult<Client> {
        ClientBuilder::new()
            .user_agent(&self.user_agent)
            .build()
            .map_err(HTTPError::Client)
    }

    /// The user agent sent with requests made by clients from this factory.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

/// The result of an HTTP request.
pub type HTTPResult<T> = Result<T, HTTPError>;

/// Indicates an error has occurred when making an HTTP call.
#[derive(Debug)]
pub enum HTTPError {
    /// An error constructing an HTTP client.
    Client(reqwest::Error),

    /// An error that occurred while making an HTTP request.
    Request(reqwest::Error),

    /// An error retrieving or decoding the body of a response.
    Body(reqwest::Error),

    /// An unsuccessful HTTP status code in an HTTP response.
    Http(reqwest::StatusCode),

    /// A missing Content-Type header in a response.
    MissingContentType,

    /// An invalid Content-Type header.
    InvalidContentType(header::ToStrError),

    /// A Content-Type that is not understood by the service.
    UnexpectedContentType(String),
}

impl From<header::ToStrError> for HTTPError {
    fn from(error: header::ToStrError) -> Self {
        HTTPError::InvalidContentType(error)
    }
}

impl fmt::Display for HTTPError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HTTPError::Client(err) => write!(f, "Error creating HTTP client: {err}"),
            HTTPError::Request(err) => write!(f, "Error while making HTTP request: {err}"),
            HTTPError::Body(err) => write!(f, "Error retrieving body of HTTP response: {err}"),
            HTTPError::Http(status) => write!(f, "Request returned HTTP {status}"),
            HTTPError::MissingContentType => write!(f, "Missing Content-Type header"),
            HTTPError::InvalidContentType(err) => {
                write!(f, "Invalid Content-Type header value: {err}")
            }
            HTTPError::UnexpectedContentType(content_type) => {
                write!(f, "Unexpected content type: {content_type}")
            }
        }
    }
}

impl error::Error for HTTPError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            HTTPError::Client(err) => Some(err),
            HTTPError::Request(err) => Some(err),
            HTTPError::Body(err) => Some(err),
            HTTPError::Http(_) => None,
            HTTPError::MissingContentType => None,
            HTTPError::InvalidContentType(err) => Some(err),
            HTTPError::UnexpectedContentType(_) => None,
        }
    }
}
