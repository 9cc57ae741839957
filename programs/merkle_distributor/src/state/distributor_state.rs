use anchor_lang::prelude::*;
use crate::utils::{hash_leaf, verify};

/**
 * Main distributor state account
 *
 * Holds the published merkle root and the authority that may replace it.
 * The token holdings live in a separate vault token account whose authority
 * is this PDA.
 *
 * Derivation: ["distributor", token_mint, creator, version]
 *
 * Lifecycle:
 * 1. Created during new_distributor (root may be all zeros)
 * 2. merkle_root replaced by the owner through update_merkle_root
 * 3. total_claimed incremented by every successful claim
 * 4. Never closed, claim records keep pointing at it
 */
#[account]
#[derive(Default, Debug)]
pub struct TokenDistributor {
    /// Bump seed for PDA derivation
    /// - Saved to avoid recomputation when signing vault transfers
    pub bump: u8,

    /// Version number used in the PDA seeds
    /// - Allows several distributions for the same token/creator pair
    pub version: u64,

    /// Account that created the distributor
    /// - Part of the PDA seeds, so it never changes
    pub creator: Pubkey,

    /// Current owner
    /// - Can update the merkle root, withdraw tokens and hand over ownership
    pub owner: Pubkey,

    /// Token mint address
    pub token_mint: Pubkey,

    /// Token vault account address
    /// - Derived from: ["vault", distributor_key]
    pub token_vault: Pubkey,

    /// Merkle root for claim verification
    /// - All zeros admits no claims
    /// - Replaced wholesale on every epoch update
    pub merkle_root: [u8; 32],

    /// Sum of every delta paid out by claims
    pub total_claimed: u64,
}

impl TokenDistributor {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<TokenDistributor>();

    /// Authorization guard shared by every owner-only instruction.
    pub fn is_owner(&self, key: &Pubkey) -> bool {
        self.owner == *key
    }

    /// Checks a leaf and its proof against the currently published root.
    pub fn verify_claim(
        &self,
        index: u64,
        claimant: &Pubkey,
        amount: u64,
        proof: &[[u8; 32]],
    ) -> bool {
        verify(proof, self.merkle_root, hash_leaf(index, claimant, amount))
    }

    /// Replaces the root and returns the previous one.
    ///
    /// Claim records are untouched; a new root that commits less than an
    /// index has already received makes that index unclaimable.
    pub fn replace_merkle_root(&mut self, new_root: [u8; 32]) -> [u8; 32] {
        std::mem::replace(&mut self.merkle_root, new_root)
    }
}
