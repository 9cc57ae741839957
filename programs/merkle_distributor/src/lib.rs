use anchor_lang::prelude::*;

declare_id!("5ZfmNPYSzbKLfGjf9jg7NQXgWAxcC2CwMYyqnrczQx8E");

pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

use instructions::*;

/**
 * Merkle Distributor Program
 *
 * Distributes a fixed token supply to many recipients. Only a 32-byte merkle
 * root is stored on-chain; every recipient proves their (index, account,
 * amount) leaf against it when claiming.
 *
 * Key Features:
 * - Cumulative claims: each index stores the total already paid, so a later
 *   root with larger amounts pays only the difference
 * - Owner-gated root updates (epochs) that never reset claim history
 * - Claims can be submitted by anyone, tokens always go to the leaf's account
 * - Owner-gated fund rescue and ownership handover
 * - Cross-program call event emission for composability
 * - Support for both SPL Token and Token 2022
 *
 * Architecture:
 * - Distributor PDA: merkle root, owner, mint, running total
 * - Token Vault PDA: holds the tokens to be distributed
 * - Claim Record PDAs: one per leaf index, cumulative amount paid
 *
 * Workflow:
 * 1. Off-chain: build the tree from the allocation list, publish root + proofs
 * 2. Creator creates the distributor with the root and funds the vault
 * 3. Recipients claim with their proofs
 * 4. Owner publishes a new root for the next epoch; recipients claim the increase
 */
#[program]
pub mod merkle_distributor {
    use super::*;

    /**
     * Creates a new distributor
     *
     * @param version - Distinguishes distributors of the same creator and mint
     * @param merkle_root - Initial root, all zeros allowed
     * @param initial_deposit - Tokens moved from the creator into the vault
     *
     * Access Control: Anyone; the creator becomes the owner
     */
    pub fn new_distributor(
        ctx: Context<NewDistributor>,
        version: u64,
        merkle_root: [u8; 32],
        initial_deposit: u64,
    ) -> Result<()> {
        handle_new_distributor(ctx, version, merkle_root, initial_deposit)
    }

    /**
     * Claims the unpaid part of an allocation
     *
     * @param index - Leaf index
     * @param claimant - Recipient committed in the leaf
     * @param amount - Cumulative amount committed in the leaf
     * @param proof - Array of 32-byte hashes forming the merkle proof
     *
     * Access Control: Any signer with a valid merkle proof
     */
    pub fn claim(
        ctx: Context<Claim>,
        index: u64,
        claimant: Pubkey,
        amount: u64,
        proof: Vec<[u8; 32]>,
    ) -> Result<()> {
        handle_claim(ctx, index, claimant, amount, proof)
    }

    /**
     * Replaces the merkle root (epoch update)
     *
     * Access Control: Owner only
     */
    pub fn update_merkle_root(ctx: Context<UpdateRoot>, new_root: [u8; 32]) -> Result<()> {
        handle_update_merkle_root(ctx, new_root)
    }

    /**
     * Withdraws `amount` tokens from the vault
     *
     * Access Control: Owner only
     */
    pub fn withdraw_token(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        handle_withdraw(ctx, Some(amount))
    }

    /**
     * Withdraws the whole vault balance
     *
     * Access Control: Owner only
     */
    pub fn withdraw_all_tokens(ctx: Context<Withdraw>) -> Result<()> {
        handle_withdraw(ctx, None)
    }

    /**
     * Hands ownership to another account
     *
     * Access Control: Owner only
     */
    pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
        handle_transfer_ownership(ctx, new_owner)
    }
}
