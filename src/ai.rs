// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! AI services.

pub mod auth;
pub mod client;
pub mod service;

pub use auth::Auth;
