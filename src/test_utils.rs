//! Serializes program input the way the loader lays it out

use {
    crate::input::FULL_RECORD_FIXED_LEN,
    solana_program::{
        clock::Epoch,
        entrypoint::{MAX_PERMITTED_DATA_INCREASE, NON_DUP_MARKER},
        pubkey::Pubkey,
    },
    std::cell::RefCell,
};

#[derive(Debug, Clone)]
pub struct TestAccount {
    pub key: Pubkey,
    pub owner: Pubkey,
    pub is_signer: bool,
    pub is_writable: bool,
    pub executable: bool,
    pub lamports: u64,
    pub data: Vec<u8>,
    pub rent_epoch: Epoch,
}

impl TestAccount {
    pub fn with_data_len(data_len: usize) -> Self {
        Self {
            key: Pubkey::new_unique(),
            owner: Pubkey::new_unique(),
            is_signer: false,
            is_writable: true,
            executable: false,
            lamports: 1,
            data: (0..data_len).map(|i| i as u8).collect(),
            rent_epoch: Epoch::MAX,
        }
    }

    pub fn signer() -> Self {
        Self {
            is_signer: true,
            ..Self::with_data_len(0)
        }
    }
}

#[derive(Debug, Clone)]
enum TestRecord {
    Full(TestAccount),
    Duplicate(u8),
}

#[derive(Debug, Clone, Default)]
pub struct InputBuilder {
    records: Vec<TestRecord>,
    memo: Vec<u8>,
    program_id: Option<Pubkey>,
}

impl InputBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn account(mut self, account: TestAccount) -> Self {
        self.records.push(TestRecord::Full(account));
        self
    }

    pub fn duplicate(mut self, index: u8) -> Self {
        assert_ne!(index, NON_DUP_MARKER);
        self.records.push(TestRecord::Duplicate(index));
        self
    }

    pub fn memo(mut self, memo: &[u8]) -> Self {
        self.memo = memo.to_vec();
        self
    }

    pub fn program_id(mut self, program_id: Pubkey) -> Self {
        self.program_id = Some(program_id);
        self
    }

    /// Offset of the memo length prefix in the built input
    pub fn memo_len_offset(&self) -> usize {
        8 + self
            .records
            .iter()
            .map(|record| match record {
                TestRecord::Full(account) => FULL_RECORD_FIXED_LEN + account.data.len(),
                TestRecord::Duplicate(_) => 8,
            })
            .sum::<usize>()
    }

    pub fn build(&self) -> Vec<u8> {
        let mut input = Vec::with_capacity(self.memo_len_offset() + 8 + self.memo.len() + 32);
        input.extend_from_slice(&(self.records.len() as u64).to_le_bytes());
        for record in &self.records {
            match record {
                TestRecord::Full(account) => {
                    input.push(NON_DUP_MARKER);
                    input.push(account.is_signer as u8);
                    input.push(account.is_writable as u8);
                    input.push(account.executable as u8);
                    input.extend_from_slice(&[0u8; 4]);
                    input.extend_from_slice(account.key.as_ref());
                    input.extend_from_slice(account.owner.as_ref());
                    input.extend_from_slice(&account.lamports.to_le_bytes());
                    input.extend_from_slice(&(account.data.len() as u64).to_le_bytes());
                    input.extend_from_slice(&account.data);
                    input.resize(input.len() + MAX_PERMITTED_DATA_INCREASE, 0);
                    input.extend_from_slice(&account.rent_epoch.to_le_bytes());
                }
                TestRecord::Duplicate(index) => {
                    input.push(*index);
                    input.extend_from_slice(&[0u8; 7]);
                }
            }
        }
        input.extend_from_slice(&(self.memo.len() as u64).to_le_bytes());
        input.extend_from_slice(&self.memo);
        if let Some(program_id) = &self.program_id {
            input.extend_from_slice(program_id.as_ref());
        }
        input
    }
}

/// Log sink that keeps every message it receives
#[derive(Debug, Default)]
pub struct CollectingLog {
    pub messages: RefCell<Vec<Vec<u8>>>,
}

impl crate::log::LogSink for CollectingLog {
    fn log(&self, message: &[u8]) {
        self.messages.borrow_mut().push(message.to_vec());
    }
}
