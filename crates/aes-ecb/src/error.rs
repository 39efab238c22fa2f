//! Error type for the buffer facade.

use thiserror::Error;

/// Precondition violations surfaced by the buffer-level operations.
///
/// The block-level primitives are total functions and never fail; only the
/// facade validates its inputs. There is no recovery path and no
/// partial-result semantics.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Encrypt was called with an empty input buffer.
    #[error("input buffer is empty")]
    EmptyInput,

    /// Decrypt was called with a length that is not a multiple of 16.
    #[error("buffer length {0} is not a multiple of the 16-byte block size")]
    NotBlockAligned(usize),
}

/// Crate result alias.
pub type Result<T> = core::result::Result<T, Error>;
