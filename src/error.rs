//! # Error Handling
//!
//! Centralized error handling for `repoweave`, built on `thiserror`.
//!
//! ## Key Components
//!
//! - **`Error`**: The enum covering every failure the library can report.
//!   Planning and rendering are pure, so the surface is small: the manifest
//!   could not be read, the manifest could not be decoded, or a caller
//!   supplied a malformed build id.
//!
//! - **`Result<T>`**: An alias pinning the error type to `Error`, so library
//!   signatures stay short.

use thiserror::Error;

/// Main error type for repoweave operations
#[derive(Error, Debug)]
pub enum Error {
    /// An I/O error, wrapped from `std::io::Error`.
    ///
    /// In practice this means the `UPSTREAM` manifest could not be opened
    /// or read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The manifest text is not valid TOML of the expected shape.
    #[error("manifest parse error: {0}")]
    ManifestParse(#[from] toml::de::Error),

    /// A build id override that is not exactly eight lowercase hex characters.
    #[error("invalid build id {value:?}: expected 8 lowercase hex characters")]
    InvalidBuildId { value: String },
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
