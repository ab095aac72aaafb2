use tdf::Result;

use std::{env, fs, path::PathBuf};

use anyhow::Context;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputArgsError {
    #[error("Couldn't parse input arguments: {0}")]
    Parse(String),

    #[error("File not found: {0}")]
    FileNotFound(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, PartialEq)]
pub struct InputArgs {
    pub path: PathBuf,
    pub sender: Option<String>,
    pub client: Option<String>,
    pub format: OutputFormat,
}

const USAGE: &str =
    "usage: transaction-data-fetcher <transactions-file> [--sender NAME] [--client NAME] [--format text|json]";

/// Parses the input arguments, requiring the first argument to be a valid filepath
pub fn parse_input_args() -> Result<InputArgs> {
    let mut args = parse_args(env::args().skip(1))?;

    let filename = args.path.display().to_string();
    args.path = fs::canonicalize(&args.path).with_context(|| InputArgsError::FileNotFound(filename))?;

    return Ok(args);
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<InputArgs> {
    let path = args
        .next()
        .filter(|arg| !arg.starts_with("--"))
        .ok_or_else(|| InputArgsError::Parse(format!("First argument must be the input file. {USAGE}")))?;

    let mut input_args = InputArgs {
        path: PathBuf::from(path),
        sender: None,
        client: None,
        format: OutputFormat::Text,
    };

    while let Some(flag) = args.next() {
        let value = args
            .next()
            .ok_or_else(|| InputArgsError::Parse(format!("Missing value for {flag}. {USAGE}")))?;

        match flag.as_str() {
            "--sender" => input_args.sender = Some(value),
            "--client" => input_args.client = Some(value),
            "--format" => {
                input_args.format = match value.as_str() {
                    "text" => OutputFormat::Text,
                    "json" => OutputFormat::Json,
                    _ => Err(InputArgsError::Parse(format!("Unknown format: {value}. {USAGE}")))?,
                }
            }
            _ => Err(InputArgsError::Parse(format!("Unknown argument: {flag}. {USAGE}")))?,
        }
    }

    return Ok(input_args);
}
