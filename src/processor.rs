//! Memo program processor

use {
    crate::{
        account::{signer_present, AccountRecords},
        error::MemoError,
        input::{checked_len, checked_offset, InputRegion},
        log::LogSink,
        policy::MemoPolicy,
    },
    std::mem::size_of,
};

/// The memo located in the program input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Memo<'a> {
    offset: usize,
    data: &'a [u8],
}

impl<'a> Memo<'a> {
    /// Offset of the first memo byte within the input
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false, empty memos are rejected
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Walks the account records and locates the memo that follows them.
///
/// Nothing is written anywhere; the same input always gives the same result.
pub fn parse_memo<'a, R: InputRegion<'a>>(
    region: R,
    policy: MemoPolicy,
) -> Result<Memo<'a>, MemoError> {
    let num_accounts = region.read_u64(0)?;
    let mut records = AccountRecords::new(region, num_accounts);
    let has_signer = signer_present(records.by_ref())?;
    if policy.requires_signer() && !has_signer {
        return Err(MemoError::NoSigners);
    }

    let memo_len_offset = records.cursor();
    let memo_len = region.read_u64(memo_len_offset)?;
    if memo_len == 0 {
        return Err(MemoError::EmptyMemo);
    }
    let offset = checked_offset(memo_len_offset, size_of::<u64>())?;
    let data = region.bytes(offset, checked_len(memo_len)?)?;
    Ok(Memo { offset, data })
}

/// Parses the memo and writes it to `sink`.
///
/// `sink` is only called on success.
pub fn process_memo<'a, R: InputRegion<'a>, S: LogSink + ?Sized>(
    region: R,
    policy: MemoPolicy,
    sink: &S,
) -> Result<(), MemoError> {
    let memo = parse_memo(region, policy)?;
    sink.log(memo.data());
    Ok(())
}
