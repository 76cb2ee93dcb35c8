//! Error types

use thiserror::Error;

/// Reasons the memo program may reject its input
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoError {
    /// No full account record in the input was marked as a signer
    #[error("no account signed the memo")]
    NoSigners,

    /// The instruction data is empty
    #[error("memo is empty")]
    EmptyMemo,

    /// A field or record extends past the input region, or an offset overflowed
    #[error("input buffer is malformed")]
    MalformedBuffer,
}
