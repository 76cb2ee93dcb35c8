//! Account records as serialized by the loader

use {
    crate::{
        error::MemoError,
        input::{
            checked_len, checked_offset, InputRegion, ACCOUNTS_OFFSET, DATA_LEN_OFFSET,
            DATA_OFFSET, DUPLICATE_RECORD_LEN, EXECUTABLE_OFFSET, FULL_RECORD_FIXED_LEN,
            IS_SIGNER_OFFSET, IS_WRITABLE_OFFSET, KEY_OFFSET, LAMPORTS_OFFSET, OWNER_OFFSET,
        },
    },
    solana_program::{
        clock::Epoch,
        entrypoint::{MAX_PERMITTED_DATA_INCREASE, NON_DUP_MARKER},
        pubkey::Pubkey,
    },
    std::{marker::PhantomData, mem::size_of},
};

/// One decoded account record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountRecord<'a> {
    Full(FullAccount<'a>),
    /// Refers back to the full record at `index`
    Duplicate { index: u8 },
}

impl<'a> AccountRecord<'a> {
    /// Decodes the record whose marker byte is at `offset`
    pub fn decode<R: InputRegion<'a>>(region: R, offset: usize) -> Result<Self, MemoError> {
        let marker = region.read_u8(offset)?;
        if marker != NON_DUP_MARKER {
            // the padding is part of the record
            region.bytes(offset, DUPLICATE_RECORD_LEN)?;
            return Ok(Self::Duplicate { index: marker });
        }
        FullAccount::decode(region, offset).map(Self::Full)
    }

    /// Number of bytes the record occupies in the input
    pub fn serialized_len(&self) -> usize {
        match self {
            Self::Full(account) => account.serialized_len,
            Self::Duplicate { .. } => DUPLICATE_RECORD_LEN,
        }
    }

    /// Duplicates carry no flags of their own
    pub fn is_signer(&self) -> bool {
        match self {
            Self::Full(account) => account.is_signer(),
            Self::Duplicate { .. } => false,
        }
    }
}

/// Zero-copy view of a full account record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FullAccount<'a> {
    header: &'a [u8],
    key: &'a Pubkey,
    owner: &'a Pubkey,
    data: &'a [u8],
    rent_epoch: Epoch,
    serialized_len: usize,
}

impl<'a> FullAccount<'a> {
    fn decode<R: InputRegion<'a>>(region: R, offset: usize) -> Result<Self, MemoError> {
        let header = region.bytes(offset, DATA_OFFSET)?;
        let data_len = checked_len(region.read_u64(checked_offset(offset, DATA_LEN_OFFSET)?)?)?;
        let serialized_len = checked_offset(FULL_RECORD_FIXED_LEN, data_len)?;
        let data_start = checked_offset(offset, DATA_OFFSET)?;
        let rent_epoch_offset = checked_offset(
            checked_offset(data_start, data_len)?,
            MAX_PERMITTED_DATA_INCREASE,
        )?;
        // Reading the trailing rent epoch proves the whole record is in bounds
        let rent_epoch = region.read_u64(rent_epoch_offset)?;

        Ok(Self {
            header,
            key: region.read_pubkey(checked_offset(offset, KEY_OFFSET)?)?,
            owner: region.read_pubkey(checked_offset(offset, OWNER_OFFSET)?)?,
            data: region.bytes(data_start, data_len)?,
            rent_epoch,
            serialized_len,
        })
    }

    pub fn is_signer(&self) -> bool {
        self.header[IS_SIGNER_OFFSET] != 0
    }

    pub fn is_writable(&self) -> bool {
        self.header[IS_WRITABLE_OFFSET] != 0
    }

    pub fn executable(&self) -> bool {
        self.header[EXECUTABLE_OFFSET] != 0
    }

    pub fn key(&self) -> &'a Pubkey {
        self.key
    }

    pub fn owner(&self) -> &'a Pubkey {
        self.owner
    }

    pub fn lamports(&self) -> u64 {
        let mut bytes = [0u8; size_of::<u64>()];
        bytes.copy_from_slice(&self.header[LAMPORTS_OFFSET..DATA_LEN_OFFSET]);
        u64::from_le_bytes(bytes)
    }

    pub fn data_len(&self) -> usize {
        self.data.len()
    }

    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    pub fn rent_epoch(&self) -> Epoch {
        self.rent_epoch
    }
}

/// Walks `count` account records starting right after the account count.
///
/// The iterator stops after yielding the first error. Once it is exhausted,
/// [`AccountRecords::cursor`] is the offset just past the last record.
#[derive(Debug, Clone)]
pub struct AccountRecords<'a, R> {
    region: R,
    cursor: usize,
    remaining: u64,
    _region: PhantomData<&'a [u8]>,
}

impl<'a, R: InputRegion<'a>> AccountRecords<'a, R> {
    pub fn new(region: R, count: u64) -> Self {
        Self {
            region,
            cursor: ACCOUNTS_OFFSET,
            remaining: count,
            _region: PhantomData,
        }
    }

    /// Offset of the next unread byte
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

impl<'a, R: InputRegion<'a>> Iterator for AccountRecords<'a, R> {
    type Item = Result<AccountRecord<'a>, MemoError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let record = AccountRecord::decode(self.region, self.cursor).and_then(|record| {
            self.cursor = checked_offset(self.cursor, record.serialized_len())?;
            Ok(record)
        });
        self.remaining = match record {
            Ok(_) => self.remaining.saturating_sub(1),
            Err(_) => 0,
        };
        Some(record)
    }
}

impl<'a, R: InputRegion<'a>> std::iter::FusedIterator for AccountRecords<'a, R> {}

/// Whether any record in `records` is a signing full record
pub fn signer_present<'a, I>(records: I) -> Result<bool, MemoError>
where
    I: IntoIterator<Item = Result<AccountRecord<'a>, MemoError>>,
{
    records
        .into_iter()
        .try_fold(false, |seen, record| Ok(seen || record?.is_signer()))
}
