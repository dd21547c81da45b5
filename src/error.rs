//! Error types for markdown conversion and site generation.

use std::path::PathBuf;

use thiserror::Error;

use crate::inline::TextKind;

/// Errors that can occur while converting a document or building the site.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid markdown: unmatched delimiter \"{0}\"")]
    UnmatchedDelimiter(String),

    #[error("invalid heading format: {0}")]
    InvalidHeading(String),

    #[error("invalid HTML: no value")]
    MissingValue,

    #[error("invalid HTML: no tag")]
    MissingTag,

    #[error("invalid HTML: no children")]
    MissingChildren,

    #[error("invalid text run: {0} run has no url")]
    InvalidTextRun(TextKind),

    #[error("no H1 heading found in markdown")]
    NoTitle,

    #[error("multiple H1 headings found: {0:?}")]
    MultipleTitles(Vec<String>),

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file at {path}: {source}")]
    Config {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl Error {
    /// Wrap an I/O error with the path it happened on.
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Error::Io { path, source }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
