use std::{io, result};

use thiserror::Error;

/// Everything that can stop a fetch run. None of these are retried.
#[derive(Error, Debug)]
pub enum FetchError {
    /// request could not be completed, or the server answered with an error status
    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("XML parsing failed: {0}")]
    Xml(#[from] quick_xml::Error),

    /// well-formed at the token level, but not a usable document
    #[error("XML parsing failed: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("YAML serialization failed: {0}")]
    Serialize(#[from] serde_yaml::Error),
}

impl FetchError {
    pub fn parse(message: &str) -> Self {
        FetchError::Parse(message.to_string())
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, FetchError::Xml(_) | FetchError::Parse(_))
    }
}

pub type Result<T> = result::Result<T, FetchError>;
