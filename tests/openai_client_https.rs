// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

use scribo::ai::Auth;
use scribo::ai::client::openai::{Model, OpenAIClient, OpenAIRequest};
use scribo::ai::client::{APIClient, APIRequest, APIResponse};

// These tests aren't particularly interesting and mostly serve to ensure
// that we can actually connect to the OpenAI service. They spend real API
// credits, so they are ignored by default.

#[tokio::test]
#[ignore = "sends a live request to the OpenAI API"]
async fn it_sends_a_request() {
    let auth =
        Auth::from_env("OPENAI_API_KEY").expect("Could not create auth. Is $OPENAI_API_KEY set?");
    let client = OpenAIClient::new(auth).expect("could not create OpenAI client");
    let request = OpenAIRequest::default()
        .model(Model::cheapest())
        .instructions("You are a helpful assistant.")
        .input("write a haiku about ai")
        .temperature(0.7)
        .max_tokens(100);
    let response = client.send(&request).await;
    let response = response.expect("could not make OpenAI API request");
    assert!(response.text().is_some());
    assert!(!response.text().unwrap().is_empty());
}
