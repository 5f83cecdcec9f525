//! Error types shared by the collections in this crate.

use std::result;
use thiserror::Error;

/// Convenience `Error` enum for fallible tree operations.
///
/// Both variants leave the tree exactly as it was before the failing call, so
/// the caller is free to treat either one as a no-op.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum Error {
    /// The key is already present. Each key must be unique.
    #[error("key already exists in the tree")]
    DuplicateKey,
    /// The requested key is not present.
    #[error("key not found in the tree")]
    KeyNotFound,
}

/// Convenience `Result` type for fallible tree operations.
pub type Result<T> = result::Result<T, Error>;
