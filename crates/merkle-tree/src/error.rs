//! Error type for tree construction, proof generation and distribution files.

use anchor_lang::prelude::Pubkey;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, MerkleTreeError>;

#[derive(Debug, Error)]
pub enum MerkleTreeError {
    #[error("allocation list is empty")]
    EmptyInput,

    #[error("allocation input must be a JSON object mapping accounts to amounts")]
    UnexpectedFormat,

    #[error("duplicate account {0}")]
    DuplicateAccount(Pubkey),

    #[error("invalid account `{0}`")]
    InvalidAccount(String),

    #[error("invalid amount for {account}: {reason}")]
    InvalidAmount { account: String, reason: String },

    #[error("token total does not fit in u64")]
    TotalOverflow,

    #[error("leaf index {index} out of range for a tree of {len} leaves")]
    IndexOutOfRange { index: u64, len: usize },

    #[error("leaf {index} does not match the tree; wrong account or amount")]
    LeafMismatch { index: u64 },

    #[error("invalid hex value `{0}`")]
    InvalidHex(String),

    #[error("proof for {account} does not verify against the merkle root")]
    InvalidProof { account: String },

    #[error("claim index {0} appears more than once")]
    DuplicateIndex(u64),

    #[error("claim indices are not contiguous: expected {expected}, found {found}")]
    IndexGap { expected: u64, found: u64 },

    #[error("token total mismatch: file declares {declared}, claims sum to {computed}")]
    TotalMismatch { declared: u64, computed: u64 },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl MerkleTreeError {
    /// True for errors caused by a malformed allocation list.
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            Self::EmptyInput
                | Self::UnexpectedFormat
                | Self::DuplicateAccount(_)
                | Self::InvalidAccount(_)
                | Self::InvalidAmount { .. }
                | Self::TotalOverflow
        )
    }
}
