//! Bounds-checked access to the serialized program input

use {
    crate::error::MemoError,
    solana_program::{
        entrypoint::MAX_PERMITTED_DATA_INCREASE,
        pubkey::{Pubkey, PUBKEY_BYTES},
    },
    std::{marker::PhantomData, mem::size_of, slice::from_raw_parts},
};

/// Offset of the first account record, past the account count
pub const ACCOUNTS_OFFSET: usize = size_of::<u64>();

/// Size of a duplicate record: the marker plus 7 bytes of padding
pub const DUPLICATE_RECORD_LEN: usize = 8;

// Offsets within a full account record, relative to its marker byte.
pub const IS_SIGNER_OFFSET: usize = 1;
pub const IS_WRITABLE_OFFSET: usize = 2;
pub const EXECUTABLE_OFFSET: usize = 3;
pub const KEY_OFFSET: usize = 8;
pub const OWNER_OFFSET: usize = KEY_OFFSET + PUBKEY_BYTES;
pub const LAMPORTS_OFFSET: usize = OWNER_OFFSET + PUBKEY_BYTES;
pub const DATA_LEN_OFFSET: usize = LAMPORTS_OFFSET + size_of::<u64>();
pub const DATA_OFFSET: usize = DATA_LEN_OFFSET + size_of::<u64>();

/// Size of a full record excluding its account data
pub const FULL_RECORD_FIXED_LEN: usize =
    DATA_OFFSET + MAX_PERMITTED_DATA_INCREASE + size_of::<u64>();

const _: () = assert!(DATA_LEN_OFFSET == 80);
const _: () = assert!(FULL_RECORD_FIXED_LEN == 10_336);

/// Size of the loader's input memory region. Nothing the loader serializes can
/// extend past it.
pub const MAX_INPUT_REGION_LEN: usize = u32::MAX as usize;

/// A contiguous byte region that can be read at arbitrary offsets.
///
/// Every read is checked against the region's extent and fails with
/// [`MemoError::MalformedBuffer`] rather than reading out of bounds.
pub trait InputRegion<'a>: Copy {
    /// Returns `len` bytes starting at `offset`
    fn bytes(self, offset: usize, len: usize) -> Result<&'a [u8], MemoError>;

    fn read_u8(self, offset: usize) -> Result<u8, MemoError> {
        Ok(self.bytes(offset, size_of::<u8>())?[0])
    }

    fn read_u64(self, offset: usize) -> Result<u64, MemoError> {
        let bytes = self.bytes(offset, size_of::<u64>())?;
        bytes
            .try_into()
            .map(u64::from_le_bytes)
            .map_err(|_| MemoError::MalformedBuffer)
    }

    fn read_pubkey(self, offset: usize) -> Result<&'a Pubkey, MemoError> {
        let bytes = self.bytes(offset, PUBKEY_BYTES)?;
        let bytes: &[u8; PUBKEY_BYTES] =
            bytes.try_into().map_err(|_| MemoError::MalformedBuffer)?;
        // SAFETY: `Pubkey` is a `repr(transparent)` wrapper around `[u8; 32]`
        Ok(unsafe { &*(bytes as *const [u8; PUBKEY_BYTES] as *const Pubkey) })
    }
}

impl<'a> InputRegion<'a> for &'a [u8] {
    #[inline]
    fn bytes(self, offset: usize, len: usize) -> Result<&'a [u8], MemoError> {
        let end = checked_offset(offset, len)?;
        self.get(offset..end).ok_or(MemoError::MalformedBuffer)
    }
}

/// The input region handed to the program entrypoint by the loader.
///
/// The loader only passes a base pointer, so reads are checked against
/// [`MAX_INPUT_REGION_LEN`]. The VM faults on anything beyond the serialized
/// parameters.
#[derive(Debug, Clone, Copy)]
pub struct RawInput<'a> {
    start: *const u8,
    len: usize,
    _region: PhantomData<&'a [u8]>,
}

impl<'a> RawInput<'a> {
    /// # Safety
    ///
    /// `start` must be the base of the serialized program input and remain
    /// valid and unmodified for `'a`.
    pub unsafe fn new(start: *const u8) -> Self {
        Self {
            start,
            len: MAX_INPUT_REGION_LEN,
            _region: PhantomData,
        }
    }
}

impl<'a> InputRegion<'a> for RawInput<'a> {
    #[inline]
    fn bytes(self, offset: usize, len: usize) -> Result<&'a [u8], MemoError> {
        let end = checked_offset(offset, len)?;
        if end > self.len {
            return Err(MemoError::MalformedBuffer);
        }
        // SAFETY: the range lies inside the loader's input region
        Ok(unsafe { from_raw_parts(self.start.add(offset), len) })
    }
}

/// `base + len`, failing closed on overflow
#[inline]
pub fn checked_offset(base: usize, len: usize) -> Result<usize, MemoError> {
    base.checked_add(len).ok_or(MemoError::MalformedBuffer)
}

/// Converts a serialized u64 length into a `usize`
#[inline]
pub fn checked_len(len: u64) -> Result<usize, MemoError> {
    usize::try_from(len).map_err(|_| MemoError::MalformedBuffer)
}
