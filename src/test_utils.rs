// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

use crate::ai::auth::Auth;
use crate::ai::service::APIService;
use crate::http::HTTPResult;
use reqwest::IntoUrl;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::json;

pub fn do_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A deterministic API service that answers every POST with a canned
/// chat completion body.
pub struct TestService {
    body: String,
}

impl TestService {
    /// A service whose every completion contains the given text.
    pub fn completing(text: &str) -> Self {
        let body = json!({
            "id": "chatcmpl-test",
            "object": "chat.completion",
            "choices": [
                {
                    "index": 0,
                    "message": {"role": "assistant", "content": text},
                    "finish_reason": "stop"
                }
            ]
        })
        .to_string();
        Self { body }
    }

    /// A service whose completions contain no choices at all.
    pub fn empty() -> Self {
        let body = json!({"choices": []}).to_string();
        Self { body }
    }
}

impl APIService for TestService {
    async fn post<U, D, R>(&self, _uri: U, _auth: &Auth, _data: &D) -> HTTPResult<R>
    where
        U: IntoUrl + Send,
        D: Serialize + Sync,
        R: DeserializeOwned,
    {
        Ok(serde_json::from_str(&self.body).expect("could not parse canned response"))
    }
}
