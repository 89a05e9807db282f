use crate::config::models::StreamTarget;
use std::path::PathBuf;
use thiserror::Error;

/// Placeholder selecting standard input or standard output.
pub const STDIO_SENTINEL: &str = "-";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Empty {0} path. Use '-' for the standard stream.")]
    EmptyPath(&'static str),

    #[error("Invalid --set format: '{0}'. Expected KEY=VALUE.")]
    InvalidAssignment(String),
}

pub fn parse_stream_target(value: &str, kind: &'static str) -> Result<StreamTarget, ParseError> {
    match value {
        STDIO_SENTINEL => Ok(StreamTarget::Stdio),
        "" => Err(ParseError::EmptyPath(kind)),
        path => Ok(StreamTarget::Path(PathBuf::from(path))),
    }
}

/// Splits `KEY=VALUE` at the first `=`.
pub fn parse_assignment(pair: &str) -> Result<(&str, &str), ParseError> {
    match pair.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Ok((key.trim(), value.trim())),
        _ => Err(ParseError::InvalidAssignment(pair.to_string())),
    }
}
