// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Authentication for AI services.

use std::{env, error, fmt};

/// Manages authentication keys for AI service APIs.
pub struct Auth {
    api_key: String,
}

impl Auth {
    /// Creates a new `Auth` structure using the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        let api_key = api_key.into();
        Self { api_key }
    }

    /// Retrieves an API key from the environment.
    ///
    /// Returns an error if the API key cannot be retrieved from the
    /// environment.
    pub fn from_env(envvar: impl Into<String>) -> AuthResult {
        let envvar = envvar.into();
        match env::var(&envvar) {
            Ok(api_key) => Ok(Self { api_key }),
            Err(source) => Err(AuthError::EnvError { envvar, source }),
        }
    }

    /// The actual API key.
    ///
    /// # Examples
    ///
    /// ```
    /// use scribo::ai::Auth;
    /// let auth = Auth::new("ThisIsMyApiKey");
    /// assert_eq!(auth.api_key(), "ThisIsMyApiKey");
    /// ```
    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl fmt::Debug for Auth {
    // The key is masked so it cannot leak into logs or error reports.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Auth").field("api_key", &"<redacted>").finish()
    }
}

/// Standard result type for [`Auth`] creation.
pub type AuthResult = Result<Auth, AuthError>;

/// Indicates an error when creating an authentication key.
#[derive(Debug)]
pub enum AuthError {
    /// An error occurred while retrieving a key from the environment.
    EnvError {
        /// The environment variable that was consulted.
        envvar: String,

        /// The underlying environment error.
        source: env::VarError,
    },
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::EnvError { envvar, source } => match source {
                env::VarError::NotPresent => {
                    write!(f, "{envvar} not found in environment variables")
                }
                env::VarError::NotUnicode(_) => write!(f, "{envvar} is not valid Unicode"),
            },
        }
    }
}

impl error::Error for AuthError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            AuthError::EnvError { source, .. } => Some(source),
        }
    }
}
