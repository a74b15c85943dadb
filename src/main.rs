// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    scribo::cli::run().await
}
