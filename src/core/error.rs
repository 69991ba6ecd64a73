//! Error types for chainlift
//!
//! Parse-time errors are fatal to the whole parse: a chain file is either
//! consumed completely or not at all. A lookup that finds no mapping is an
//! ordinary `None`, never an error.

use thiserror::Error;

/// Umbrella error type for chainlift operations
#[derive(Debug, Error)]
pub enum LiftoverError {
    /// Chain file parsing errors
    #[error("chain parse error: {0}")]
    ChainParse(#[from] ChainParseError),

    /// Value type construction errors
    #[error("model error: {0}")]
    Model(#[from] ModelError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while constructing the coordinate value types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// Chromosome names must be non-empty and free of whitespace
    #[error("invalid chromosome name '{0}'")]
    InvalidChromosomeName(String),

    /// String did not match the `chr1(+):123` locus form
    #[error("invalid locus '{0}', expected e.g. 'chr1(+):123'")]
    InvalidLocus(String),

    /// Range endpoints on different chromosomes or strands
    #[error("range endpoints are incompatible: {start} vs {end}")]
    IncompatibleLoci { start: String, end: String },

    /// Range start after range end
    #[error("range start ({start}) is after range end ({end})")]
    InvertedRange { start: i64, end: i64 },
}

/// Errors raised while parsing a chain file
#[derive(Debug, Error)]
pub enum ChainParseError {
    /// Wrong token count, non-numeric field or bad strand symbol
    #[error("malformed line {line}: {message} in '{content}'")]
    MalformedLine {
        line: u64,
        message: String,
        content: String,
    },

    /// A block line appeared before any chain header
    #[error("line {line}: block line before any chain header: '{content}'")]
    BlockBeforeHeader { line: u64, content: String },

    /// Terminal block arithmetic did not reconcile with the declared extent
    #[error("line {line}: {side} alignment should end at position {expected} but ended at {actual}")]
    EndMismatch {
        line: u64,
        side: Side,
        expected: i64,
        actual: i64,
    },

    /// I/O error while reading lines
    #[error("I/O error at line {line}: {source}")]
    Io {
        line: u64,
        #[source]
        source: std::io::Error,
    },
}

/// Which side of the alignment an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Source,
    Target,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Source => f.write_str("source"),
            Side::Target => f.write_str("target"),
        }
    }
}

impl ChainParseError {
    pub fn malformed(line: u64, message: impl Into<String>, content: &str) -> Self {
        ChainParseError::MalformedLine {
            line,
            message: message.into(),
            content: content.chars().take(120).collect(),
        }
    }

    /// The 1-based line number the error refers to.
    pub fn line(&self) -> u64 {
        match self {
            ChainParseError::MalformedLine { line, .. }
            | ChainParseError::BlockBeforeHeader { line, .. }
            | ChainParseError::EndMismatch { line, .. }
            | ChainParseError::Io { line, .. } => *line,
        }
    }
}

/// Result alias for chainlift operations
pub type Result<T> = std::result::Result<T, LiftoverError>;

/// Result alias for chain parsing operations
pub type ChainResult<T> = std::result::Result<T, ChainParseError>;

/// Result alias for value type construction
pub type ModelResult<T> = std::result::Result<T, ModelError>;
