//! Re-checks a published distribution file.

use std::collections::BTreeSet;
use std::str::FromStr;

use anchor_lang::prelude::Pubkey;
use tracing::info;

use crate::balance_map::MerkleDistributorInfo;
use crate::balance_tree::BalanceTree;
use crate::encoding::{decode_amount, decode_hash};
use crate::error::{MerkleTreeError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedDistribution {
    pub root: [u8; 32],
    pub token_total: u64,
    pub num_claims: usize,
}

/// Checks that every claim's proof folds to the published root, that the
/// indices are exactly `0..n`, and that the amounts add up to `tokenTotal`.
pub fn verify_distribution(info: &MerkleDistributorInfo) -> Result<VerifiedDistribution> {
    if info.claims.is_empty() {
        return Err(MerkleTreeError::EmptyInput);
    }

    let root = decode_hash(&info.merkle_root)?;
    let declared_total = decode_amount(&info.token_total)?;

    let mut indices = BTreeSet::new();
    let mut computed_total: u64 = 0;
    for (key, claim) in &info.claims {
        let account = Pubkey::from_str(key).map_err(|_| MerkleTreeError::InvalidAccount(key.clone()))?;
        let amount = decode_amount(&claim.amount)?;
        let proof = claim
            .proof
            .iter()
            .map(|entry| decode_hash(entry))
            .collect::<Result<Vec<_>>>()?;

        if !BalanceTree::verify_proof(claim.index, &account, amount, &proof, root) {
            return Err(MerkleTreeError::InvalidProof { account: key.clone() });
        }
        if !indices.insert(claim.index) {
            return Err(MerkleTreeError::DuplicateIndex(claim.index));
        }
        computed_total = computed_total
            .checked_add(amount)
            .ok_or(MerkleTreeError::TotalOverflow)?;
    }

    for (expected, found) in indices.iter().enumerate() {
        if *found != expected as u64 {
            return Err(MerkleTreeError::IndexGap {
                expected: expected as u64,
                found: *found,
            });
        }
    }

    if computed_total != declared_total {
        return Err(MerkleTreeError::TotalMismatch {
            declared: declared_total,
            computed: computed_total,
        });
    }

    info!(claims = info.claims.len(), token_total = computed_total, "distribution verified");

    Ok(VerifiedDistribution {
        root,
        token_total: computed_total,
        num_claims: info.claims.len(),
    })
}
