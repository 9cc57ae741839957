use anchor_lang::prelude::*;
use crate::error::MerkleDistributorError;

/**
 * Per-index claim record
 *
 * Stores the cumulative amount already paid for one leaf index. Keeping the
 * cumulative figure instead of a claimed flag lets an index be revisited after
 * a root update that raised its allocation; only the difference is paid.
 *
 * Derivation: ["claim", distributor_key, index]
 *
 * Lifecycle:
 * 1. Created on first claim for the index (init_if_needed, implicit zero)
 * 2. Raised by each later successful claim
 * 3. Never closed
 */
#[account]
#[derive(Default, Debug)]
pub struct ClaimRecord {
    /// Total amount paid out for this index (cumulative)
    pub claimed_amount: u64,
}

impl ClaimRecord {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<ClaimRecord>();

    pub fn claimed(&self) -> u64 {
        self.claimed_amount
    }

    /// Amount still owed if the leaf commits `amount` in total.
    ///
    /// Fails with `AllocationExhausted` when nothing is left, which covers both
    /// a repeated claim and a claim against a lower, stale allocation.
    pub fn pending(&self, amount: u64) -> Result<u64> {
        require!(
            amount > self.claimed_amount,
            MerkleDistributorError::AllocationExhausted
        );
        Ok(amount - self.claimed_amount)
    }
}
