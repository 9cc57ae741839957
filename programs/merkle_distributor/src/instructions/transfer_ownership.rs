use anchor_lang::prelude::*;
use crate::state::*;
use crate::error::*;
use crate::event::*;

#[event_cpi]
#[derive(Accounts)]
pub struct TransferOwnership<'info> {
    #[account(mut)]
    pub distributor: Account<'info, TokenDistributor>,

    #[account(constraint = distributor.is_owner(&owner.key()) @ MerkleDistributorError::Unauthorized)]
    pub owner: Signer<'info>,
}

/// Hands every owner-only permission to `new_owner`.
pub fn handle_transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
    require!(
        new_owner != Pubkey::default(),
        MerkleDistributorError::InvalidOwner
    );

    let distributor = &mut ctx.accounts.distributor;
    let previous_owner = std::mem::replace(&mut distributor.owner, new_owner);

    emit_cpi!(OwnershipTransferred {
        distributor: distributor.key(),
        previous_owner,
        new_owner,
    });

    Ok(())
}
