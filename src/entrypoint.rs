//! Program entrypoint

#![cfg(not(feature = "no-entrypoint"))]

use {
    crate::{input::RawInput, log::SyscallLog, policy::MemoPolicy, processor::process_memo},
    solana_program::entrypoint::SUCCESS,
};

/// Called by the loader with the serialized program input.
///
/// Returns [`SUCCESS`] once the memo is logged, or the custom error code
/// [`MemoPolicy::ACTIVE`] assigns to the failure.
///
/// # Safety
///
/// `input` must point to program input serialized by the loader.
#[no_mangle]
pub unsafe extern "C" fn entrypoint(input: *mut u8) -> u64 {
    let policy = MemoPolicy::ACTIVE;
    match process_memo(RawInput::new(input), policy, &SyscallLog) {
        Ok(()) => SUCCESS,
        Err(error) => policy.program_error(error).into(),
    }
}

solana_program::custom_heap_default!();
solana_program::custom_panic_default!();
