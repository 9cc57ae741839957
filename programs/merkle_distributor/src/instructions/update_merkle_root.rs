use anchor_lang::prelude::*;
use crate::state::*;
use crate::error::*;
use crate::event::*;

/**
 * Account context for replacing the merkle root
 *
 * Access Control: Only the owner can replace the root
 *
 * Business Logic:
 * - The new root usually commits cumulative amounts that are >= the old ones,
 *   so recipients can top up without a fresh distribution
 * - Claim records are not touched; the program does not check that the new
 *   tree keeps every index at or above what was already paid for it
 */
#[event_cpi]
#[derive(Accounts)]
pub struct UpdateRoot<'info> {
    #[account(mut)]
    pub distributor: Account<'info, TokenDistributor>,

    #[account(constraint = distributor.is_owner(&owner.key()) @ MerkleDistributorError::Unauthorized)]
    pub owner: Signer<'info>,
}

/**
 * Replaces the merkle root for the distribution
 *
 * @param new_root - Root of the new epoch's tree, accepted unconditionally
 *
 * Merkle Tree Structure:
 * - Each leaf: hash(index_be + claimant_pubkey + amount_be)
 * - Intermediate nodes: hash(min(a, b) + max(a, b))
 * - An unpaired trailing node is carried up unchanged
 */
pub fn handle_update_merkle_root(
    ctx: Context<UpdateRoot>,
    new_root: [u8; 32],
) -> Result<()> {
    let distributor = &mut ctx.accounts.distributor;

    let old_root = distributor.replace_merkle_root(new_root);

    emit_cpi!(UpdateMerkleRoot {
        distributor: distributor.key(),
        admin: ctx.accounts.owner.key(),
        old_root,
        new_root,
    });

    Ok(())
}
