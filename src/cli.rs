// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Drives the command-line program.
//!
//! The command-line surface is deliberately small: one command, one
//! free-form input, one JSON object on standard output. Success prints a
//! result object and exits 0; any failure prints an error object and
//! exits 1. All of the exit-code and output-formatting decisions are made
//! here; the rest of the crate reports failures as values.

use crate::ai::Auth;
use crate::ai::client::openai::{Model, OpenAIClient};
use crate::ai::client::{APIClient, APIRequest, APIResult};
use crate::generator::{self, Generator};
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{Parser, Subcommand};
use clap_verbosity_flag::Verbosity;
use log::debug;
use serde::Serialize;
use std::ffi::OsString;
use std::process::ExitCode;
use thiserror::Error;

/// Runs the command-line program.
///
/// The OpenAI API key is read from `$OPENAI_API_KEY` before anything
/// else happens; without it there is no point in parsing arguments.
pub async fn run() -> ExitCode {
    let auth = match Auth::from_env("OPENAI_API_KEY") {
        Ok(auth) => auth,
        Err(err) => return report_failure(err.to_string()),
    };

    let config = match Config::from_args() {
        Ok(config) => config,
        Err(err) => return report_failure(err.to_string()),
    };

    init_logging(&config);

    let runner = match Runner::new(config, auth) {
        Ok(runner) => runner,
        Err(err) => return report_failure(format!("Failed to initialize OpenAI client: {err}")),
    };

    runner.run().await
}

fn init_logging(config: &Config) {
    env_logger::Builder::new()
        .filter_level(config.verbosity().log_level_filter())
        .init();
}

/// Prints a JSON error object and returns the failing exit code.
fn report_failure(message: impl Into<String>) -> ExitCode {
    let failure = Failure {
        error: message.into(),
    };
    let json = serde_json::to_string(&failure).expect("could not serialize error report");
    println!("{json}");
    ExitCode::FAILURE
}

/// The message printed when a generation operation fails.
fn failure_message(command: &str, error: &generator::Error) -> String {
    format!("Error in {command}: {error}")
}

/// Program configuration.
#[derive(Debug, Parser)]
#[command(version)]
#[command(about = "Spins a seed keyword into SEO-friendly keywords, titles, topics, and content", long_about = None)]
pub struct Config {
    #[command(flatten)]
    verbosity: Verbosity,

    #[command(subcommand)]
    command: Command,
}

impl Config {
    /// Parses the program's actual command-line arguments.
    ///
    /// Usage problems are reported as a [`UsageError`] so the caller can
    /// decide how to present them; `--help` and `--version` retain their
    /// usual behavior.
    pub fn from_args() -> Result<Self, UsageError> {
        Self::try_from_args(std::env::args_os())
    }

    fn try_from_args<I, T>(args: I) -> Result<Self, UsageError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Config::try_parse_from(args).map_err(|err| match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            | ErrorKind::MissingSubcommand
            | ErrorKind::MissingRequiredArgument => UsageError::MissingArguments,
            ErrorKind::InvalidSubcommand => {
                let command = err
                    .get(ContextKind::InvalidSubcommand)
                    .and_then(|value| match value {
                        ContextValue::String(command) => Some(command.clone()),
                        _ => None,
                    })
                    .unwrap_or_default();
                UsageError::UnknownCommand(command)
            }
            _ => UsageError::Invalid(err.to_string()),
        })
    }

    pub fn verbosity(&self) -> &Verbosity {
        &self.verbosity
    }

    /// The free-form input text supplied to the command.
    pub fn input(&self) -> String {
        String::from(self.command.input())
    }
}

/// Indicates a problem with the program's command-line arguments.
#[derive(Debug, Error, PartialEq)]
pub enum UsageError {
    /// The command or its input text was not supplied.
    #[error("Missing arguments")]
    MissingArguments,

    /// The supplied command is not one the program understands.
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// Any other argument problem, described by the parser.
    #[error("{0}")]
    Invalid(String),
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Suggest related keywords for a seed keyword
    #[command(name = "generate_keywords")]
    GenerateKeywords {
        /// Seed keyword to expand into related keywords
        seed: String,

        /// AI model used to generate text
        #[arg(short = 'm', long, default_value_t)]
        model: Model,
    },

    /// Generate SEO-optimized titles for a keyword
    #[command(name = "generate_titles")]
    GenerateTitles {
        /// Keyword the titles should target
        keyword: String,

        /// AI model used to generate text
        #[arg(short = 'm', long, default_value_t)]
        model: Model,
    },

    /// Generate detailed topic ideas for a title
    #[command(name = "generate_topics")]
    GenerateTopics {
        /// Title to expand into topic ideas
        title: String,

        /// AI model used to generate text
        #[arg(short = 'm', long, default_value_t)]
        model: Model,
    },

    /// Write a short content paragraph about a topic
    #[command(name = "generate_content")]
    GenerateContent {
        /// Topic the content should cover
        topic: String,

        /// AI model used to generate text
        #[arg(short = 'm', long, default_value_t)]
        model: Model,
    },
}

impl Command {
    /// The name of the command, as typed on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Command::GenerateKeywords { .. } => "generate_keywords",
            Command::GenerateTitles { .. } => "generate_titles",
            Command::GenerateTopics { .. } => "generate_topics",
            Command::GenerateContent { .. } => "generate_content",
        }
    }

    /// The free-form input text supplied to the command.
    pub fn input(&self) -> &str {
        match self {
            Command::GenerateKeywords { seed, .. } => seed,
            Command::GenerateTitles { keyword, .. } => keyword,
            Command::GenerateTopics { title, .. } => title,
            Command::GenerateContent { topic, .. } => topic,
        }
    }
}

/// The result object printed on success.
///
/// Each variant serializes as a JSON object with a single key naming the
/// kind of output produced, e.g. `{"keywords": [...]}`.
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Output {
    Keywords(Vec<String>),
    Titles(Vec<String>),
    Topics(Vec<String>),
    Content(String),
}

/// The error object printed on failure.
#[derive(Debug, Serialize)]
struct Failure {
    error: String,
}

/// Runs one command against an API client and reports the outcome.
pub struct Runner<C: APIClient> {
    config: Config,
    client: C,
}

impl Runner<OpenAIClient> {
    /// Creates a new program runner using the given `config` and
    /// credentials.
    ///
    /// Returns an error if the OpenAI client cannot be constructed.
    pub fn new(config: Config, auth: Auth) -> APIResult<Self> {
        let client = OpenAIClient::new(auth)?;
        Ok(Self::with_client(config, client))
    }
}

impl<C> Runner<C>
where
    C: APIClient,
    C::APIRequest: APIRequest<Model = Model> + Default,
{
    /// Creates a new program runner that sends its requests through the
    /// given client.
    pub fn with_client(config: Config, client: C) -> Self {
        Self { config, client }
    }

    /// Runs the command-line program using its stored configuration
    /// options, printing one JSON object to standard output.
    pub async fn run(&self) -> ExitCode {
        let command = self.config.command.name();
        debug!("running {} with input {:?}", command, self.config.input());
        match self.dispatch().await {
            Ok(output) => {
                let json =
                    serde_json::to_string(&output).expect("could not serialize command output");
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(err) => report_failure(failure_message(command, &err)),
        }
    }

    /// Routes the selected command to its generation operation.
    async fn dispatch(&self) -> generator::Result<Output> {
        match &self.config.command {
            Command::GenerateKeywords { seed, model } => {
                let generator = Generator::new(&self.client).model(model.clone());
                Ok(Output::Keywords(generator.keywords(seed).await?))
            }
            Command::GenerateTitles { keyword, model } => {
                let generator = Generator::new(&self.client).model(model.clone());
                Ok(Output::Titles(generator.titles(keyword).await?))
            }
            Command::GenerateTopics { title, model } => {
                let generator = Generator::new(&self.client).model(model.clone());
                Ok(Output::Topics(generator.topics(title).await?))
            }
            Command::GenerateContent { topic, model } => {
                let generator = Generator::new(&self.client).model(model.clone());
                Ok(Output::Content(generator.content(topic).await?))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod arguments {
        use super::*;

        #[test]
        fn it_parses_each_command() {
            let test_cases = vec![
                ("generate_keywords", "tea"),
                ("generate_titles", "tea"),
                ("generate_topics", "Tea for Beginners"),
                ("generate_content", "Brewing temperatures by style"),
            ];

            for (command, input) in test_cases {
                let config = Config::try_from_args(["scribo", command, input]).unwrap();
                assert_eq!(config.command.name(), command);
                assert_eq!(config.input(), input);
            }
        }

        #[test]
        fn it_parses_a_model_override() {
            let args = ["scribo", "generate_keywords", "tea", "--model", "gpt-4o-mini"];
            let config = Config::try_from_args(args).unwrap();
            match &config.command {
                Command::GenerateKeywords { model, .. } => assert_eq!(*model, Model::Gpt4omini),
                other => panic!("parsed wrong command: {other:?}"),
            }
        }

        #[test]
        fn it_defaults_to_the_default_model() {
            let config = Config::try_from_args(["scribo", "generate_titles", "tea"]).unwrap();
            match &config.command {
                Command::GenerateTitles { model, .. } => assert_eq!(*model, Model::default()),
                other => panic!("parsed wrong command: {other:?}"),
            }
        }

        #[test]
        fn it_requires_a_command() {
            let error = Config::try_from_args(["scribo"]).unwrap_err();
            assert_eq!(error, UsageError::MissingArguments);
            assert_eq!(error.to_string(), "Missing arguments");
        }

        #[test]
        fn it_requires_an_input() {
            let error = Config::try_from_args(["scribo", "generate_keywords"]).unwrap_err();
            assert_eq!(error, UsageError::MissingArguments);
        }

        #[test]
        fn it_rejects_unknown_commands() {
            let error = Config::try_from_args(["scribo", "generate_sonnets", "tea"]).unwrap_err();
            assert_eq!(
                error,
                UsageError::UnknownCommand(String::from("generate_sonnets"))
            );
            assert_eq!(error.to_string(), "Unknown command: generate_sonnets");
        }
    }

    mod envelopes {
        use super::*;

        #[test]
        fn it_serializes_keywords() {
            let output = Output::Keywords(vec![
                String::from("green tea"),
                String::from("oolong"),
            ]);
            let json = serde_json::to_string(&output).unwrap();
            assert_eq!(json, r#"{"keywords":["green tea","oolong"]}"#);
        }

        #[test]
        fn it_serializes_titles() {
            let output = Output::Titles(vec![String::from("Tea for Beginners")]);
            let json = serde_json::to_string(&output).unwrap();
            assert_eq!(json, r#"{"titles":["Tea for Beginners"]}"#);
        }

        #[test]
        fn it_serializes_topics() {
            let output = Output::Topics(vec![String::from("Pairing teas with food")]);
            let json = serde_json::to_string(&output).unwrap();
            assert_eq!(json, r#"{"topics":["Pairing teas with food"]}"#);
        }

        #[test]
        fn it_serializes_content() {
            let output = Output::Content(String::from("Tea is a beverage."));
            let json = serde_json::to_string(&output).unwrap();
            assert_eq!(json, r#"{"content":"Tea is a beverage."}"#);
        }

        #[test]
        fn it_serializes_failures() {
            let failure = Failure {
                error: String::from("Missing arguments"),
            };
            let json = serde_json::to_string(&failure).unwrap();
            assert_eq!(json, r#"{"error":"Missing arguments"}"#);
        }

        #[test]
        fn it_names_the_failing_command() {
            let error = generator::Error::EmptyResponse;
            let message = failure_message("generate_titles", &error);
            assert_eq!(
                message,
                "Error in generate_titles: response contained no content"
            );
        }

        #[test]
        fn it_reports_the_whole_error_chain() {
            use crate::ai::client::APIError;
            use crate::http::HTTPError;

            let error = generator::Error::API(APIError::Http(HTTPError::Http(
                reqwest::StatusCode::UNAUTHORIZED,
            )));
            let message = failure_message("generate_keywords", &error);
            assert_eq!(
                message,
                "Error in generate_keywords: API error: HTTP error: Request returned HTTP 401 Unauthorized"
            );
        }
    }

    mod dispatch {
        use super::*;
        use crate::test_utils::TestService;

        fn runner(args: &[&str], service: TestService) -> Runner<OpenAIClient<TestService>> {
            let config = Config::try_from_args(args.iter().copied()).unwrap();
            let client = OpenAIClient::with_service(Auth::new("test-key-please-ignore"), service);
            Runner::with_client(config, client)
        }

        #[tokio::test]
        async fn it_dispatches_keyword_generation() {
            let runner = runner(
                &["scribo", "generate_keywords", "tea"],
                TestService::completing("green tea\noolong\n"),
            );
            let output = runner.dispatch().await.unwrap();
            let expected = Output::Keywords(vec![
                String::from("green tea"),
                String::from("oolong"),
            ]);
            assert_eq!(output, expected);
        }

        #[tokio::test]
        async fn it_dispatches_title_generation() {
            let runner = runner(
                &["scribo", "generate_titles", "tea"],
                TestService::completing("Tea for Beginners\n"),
            );
            let output = runner.dispatch().await.unwrap();
            let expected = Output::Titles(vec![String::from("Tea for Beginners")]);
            assert_eq!(output, expected);
        }

        #[tokio::test]
        async fn it_dispatches_topic_generation() {
            let runner = runner(
                &["scribo", "generate_topics", "Tea for Beginners"],
                TestService::completing("Pairing teas with food\n"),
            );
            let output = runner.dispatch().await.unwrap();
            let expected = Output::Topics(vec![String::from("Pairing teas with food")]);
            assert_eq!(output, expected);
        }

        #[tokio::test]
        async fn it_dispatches_content_generation() {
            let runner = runner(
                &["scribo", "generate_content", "Pairing teas with food"],
                TestService::completing("Tea pairs well with almost everything.\n"),
            );
            let output = runner.dispatch().await.unwrap();
            let expected = Output::Content(String::from("Tea pairs well with almost everything."));
            assert_eq!(output, expected);
        }

        #[tokio::test]
        async fn it_reports_empty_responses() {
            let runner = runner(
                &["scribo", "generate_keywords", "tea"],
                TestService::empty(),
            );
            let error = runner.dispatch().await.unwrap_err();
            assert!(matches!(error, generator::Error::EmptyResponse));
        }
    }
}
