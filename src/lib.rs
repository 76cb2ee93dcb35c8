//! An allocation-free memo program.
//!
//! The program does not use the SDK's account deserializer. It walks the
//! loader's serialized input in place, skipping each account record by its
//! encoded size. Then it reads the length-prefixed instruction data and writes
//! it to the program log as the memo.
//!
//! The serialized input is laid out as follows (all integers little endian):
//!
//! ```text
//! u64                       number of accounts
//! per account, either
//!   u8 NON_DUP_MARKER       full record
//!   u8 is_signer
//!   u8 is_writable
//!   u8 executable
//!   [u8; 4]                 padding
//!   [u8; 32]                key
//!   [u8; 32]                owner
//!   u64                     lamports
//!   u64                     data length `L`
//!   [u8; L]                 data
//!   [u8; 10240]             realloc region
//!   u64                     rent epoch
//! or
//!   u8 index                duplicate of an earlier account
//!   [u8; 7]                 padding
//! u64                       memo length `P`
//! [u8; P]                   memo
//! ```
//!
//! Two policies are supported, see [`MemoPolicy`]. The entrypoint uses
//! [`MemoPolicy::ACTIVE`], which the `signer-check` feature selects.

pub mod account;
pub mod entrypoint;
pub mod error;
pub mod input;
pub mod instruction;
pub mod log;
pub mod policy;
pub mod processor;
#[cfg(test)]
pub(crate) mod test_utils;

pub use {
    error::MemoError,
    policy::MemoPolicy,
    processor::{parse_memo, process_memo, Memo},
};

solana_program::declare_id!("RawMemo111111111111111111111111111111111111");
