//! Merkle tree over `(index, account, amount)` allocation leaves.

use anchor_lang::prelude::Pubkey;
use merkle_distributor::utils::{hash_leaf, verify};

use crate::encoding::encode_hash;
use crate::error::{MerkleTreeError, Result};
use crate::merkle::MerkleTree;

/// Allocation tree. The index of a leaf is its position in the input, so the
/// input order is part of what gets published.
#[derive(Debug, Clone)]
pub struct BalanceTree {
    tree: MerkleTree,
}

impl BalanceTree {
    pub fn new(balances: &[(Pubkey, u64)]) -> Result<Self> {
        let leaves = balances
            .iter()
            .enumerate()
            .map(|(index, (account, amount))| Self::to_node(index as u64, account, *amount))
            .collect();
        Ok(Self {
            tree: MerkleTree::new(leaves)?,
        })
    }

    pub fn to_node(index: u64, account: &Pubkey, amount: u64) -> [u8; 32] {
        hash_leaf(index, account, amount)
    }

    pub fn root(&self) -> [u8; 32] {
        self.tree.root()
    }

    pub fn get_hex_root(&self) -> String {
        self.tree.hex_root()
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.tree.depth()
    }

    /// Proof for a leaf the caller already knows.
    ///
    /// The leaf is re-derived from `(index, account, amount)` and has to match
    /// what the tree holds at `index`; anything else is a caller error.
    pub fn get_proof(&self, index: u64, account: &Pubkey, amount: u64) -> Result<Vec<[u8; 32]>> {
        let position = usize::try_from(index)
            .ok()
            .filter(|position| *position < self.len())
            .ok_or(MerkleTreeError::IndexOutOfRange {
                index,
                len: self.len(),
            })?;

        let expected = Self::to_node(index, account, amount);
        if self.tree.leaf(position) != Some(&expected) {
            return Err(MerkleTreeError::LeafMismatch { index });
        }

        self.tree.proof(position)
    }

    pub fn get_hex_proof(&self, index: u64, account: &Pubkey, amount: u64) -> Result<Vec<String>> {
        Ok(self
            .get_proof(index, account, amount)?
            .iter()
            .map(encode_hash)
            .collect())
    }

    /// Stateless check of a leaf and proof against `root`, using the same
    /// fold as the on-chain program.
    pub fn verify_proof(
        index: u64,
        account: &Pubkey,
        amount: u64,
        proof: &[[u8; 32]],
        root: [u8; 32],
    ) -> bool {
        verify(proof, root, Self::to_node(index, account, amount))
    }
}
