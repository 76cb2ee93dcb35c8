//! Signer policies and their status code mappings

use {crate::error::MemoError, solana_program::program_error::ProgramError};

/// Whether a memo must be accompanied by at least one signing account.
///
/// The two policies also assign different custom error codes:
///
/// | error             | `Permissive` | `RequireSigner` |
/// |-------------------|--------------|-----------------|
/// | `NoSigners`       | n/a          | 1               |
/// | `EmptyMemo`       | 1            | 2               |
/// | `MalformedBuffer` | 3            | 3               |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoPolicy {
    /// Any non-empty memo is accepted
    Permissive,
    /// At least one full account record must have its signer flag set
    RequireSigner,
}

impl MemoPolicy {
    /// The policy compiled into the program entrypoint
    #[cfg(not(feature = "signer-check"))]
    pub const ACTIVE: Self = Self::Permissive;
    /// The policy compiled into the program entrypoint
    #[cfg(feature = "signer-check")]
    pub const ACTIVE: Self = Self::RequireSigner;

    pub const fn requires_signer(self) -> bool {
        matches!(self, Self::RequireSigner)
    }

    /// Custom error code reported to the runtime for `error`
    pub const fn error_code(self, error: MemoError) -> u32 {
        match (self, error) {
            (Self::Permissive, MemoError::EmptyMemo) => 1,
            (Self::RequireSigner, MemoError::NoSigners) => 1,
            (Self::RequireSigner, MemoError::EmptyMemo) => 2,
            // a permissive walk never produces `NoSigners`, keep it distinct anyway
            (Self::Permissive, MemoError::NoSigners) => 4,
            (_, MemoError::MalformedBuffer) => 3,
        }
    }

    /// Inverse of [`MemoPolicy::error_code`]
    pub fn decode_error(self, code: u32) -> Option<MemoError> {
        [
            MemoError::NoSigners,
            MemoError::EmptyMemo,
            MemoError::MalformedBuffer,
        ]
        .into_iter()
        .find(|error| self.error_code(*error) == code)
    }

    pub fn program_error(self, error: MemoError) -> ProgramError {
        ProgramError::Custom(self.error_code(error))
    }
}

impl Default for MemoPolicy {
    fn default() -> Self {
        Self::ACTIVE
    }
}
