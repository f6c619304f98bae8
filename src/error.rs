//! Error types for printlayout.

use crate::model::RegionKind;
use std::io;
use thiserror::Error;

/// Result type alias for printlayout operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while laying out or printing documents.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading jobs or writing spooled output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The inclusion policy asked for a region the document cannot supply.
    #[error("The {0} cannot be absent if the corresponding inclusion rule is set")]
    MissingRegion(RegionKind),

    /// A content block does not fit on the fresh page it starts.
    #[error("Block '{label}' has a height of {height:.2} which exceeds the page body height of {available:.2}")]
    BlockTooTall {
        /// Label of the offending element
        label: String,
        /// Measured height
        height: f32,
        /// Body height free on that page
        available: f32,
    },

    /// A print rule string could not be parsed.
    #[error("Invalid print rule: {0}")]
    InvalidRule(String),

    /// A job description is malformed.
    #[error("Invalid job: {0}")]
    InvalidJob(String),

    /// The named output queue does not exist.
    #[error("Print queue not found: {0}")]
    QueueNotFound(String),

    /// A queue name is not a single plain path component.
    #[error("Invalid print queue name: {0:?}")]
    InvalidQueueName(String),

    /// Error while serializing output (JSON, spool files).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}
