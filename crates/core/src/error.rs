//! Error types for slide deck generation.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or serializing a deck.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to read or write a file or stream.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Failed to write the ZIP package.
    #[error("ZIP error: {0}")]
    ZipError(String),

    /// Failed to generate an XML part.
    #[error("XML error: {0}")]
    XmlError(String),

    /// Static chart export failed.
    #[error("Chart rendering error: {0}")]
    RenderError(String),

    /// Input data could not be used to build the deck.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
