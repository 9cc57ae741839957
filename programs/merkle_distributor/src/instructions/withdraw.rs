use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::state::*;
use crate::error::*;
use crate::constants::*;
use crate::utils::transfer_token;
use crate::event::*;

/**
 * Account context for withdrawing tokens from the vault
 *
 * Shared by withdraw_token and withdraw_all_tokens. These move tokens out of
 * the vault regardless of outstanding claims; claims that can no longer be
 * covered fail with InsufficientFunds until the vault is topped up.
 *
 * Access Control: Only the owner can withdraw
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Withdraw<'info> {
    pub distributor: Account<'info, TokenDistributor>,

    /// Token vault holding the tokens
    /// - Derived from: ["vault", distributor_key]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), distributor.key().as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Destination token account, any holder of the same mint
    #[account(
        mut,
        token::mint = distributor.token_mint,
        token::token_program = token_program,
    )]
    pub to_token_account: InterfaceAccount<'info, TokenAccount>,

    #[account(
        token::token_program = token_program,
        constraint = token_mint.key() == distributor.token_mint @ MerkleDistributorError::TokenMintMismatch
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    #[account(constraint = distributor.is_owner(&owner.key()) @ MerkleDistributorError::Unauthorized)]
    pub owner: Signer<'info>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/// Resolves how much to withdraw: the requested amount, or everything when
/// `requested` is `None`.
pub fn withdrawal_amount(requested: Option<u64>, vault_balance: u64) -> Result<u64> {
    match requested {
        Some(amount) => {
            require!(amount <= vault_balance, MerkleDistributorError::InsufficientFunds);
            Ok(amount)
        }
        None => Ok(vault_balance),
    }
}

/**
 * Withdraws tokens from the vault to an arbitrary token account
 *
 * @param requested - Amount to withdraw, None withdraws the whole balance
 */
pub fn handle_withdraw(ctx: Context<Withdraw>, requested: Option<u64>) -> Result<()> {
    let distributor = &ctx.accounts.distributor;

    let amount = withdrawal_amount(requested, ctx.accounts.token_vault.amount)?;

    let version_bytes = distributor.version.to_le_bytes();
    let seeds = &[
        DISTRIBUTOR_SEED.as_bytes(),
        distributor.token_mint.as_ref(),
        distributor.creator.as_ref(),
        version_bytes.as_ref(),
        &[distributor.bump],
    ];
    let signer = &[&seeds[..]];

    if amount > 0 {
        transfer_token(
            ctx.accounts.distributor.to_account_info(),
            ctx.accounts.token_vault.to_account_info(),
            ctx.accounts.to_token_account.to_account_info(),
            ctx.accounts.token_mint.to_account_info(),
            ctx.accounts.token_program.to_account_info(),
            amount,
            ctx.accounts.token_mint.decimals,
            Some(signer),
        )?;
    }

    emit_cpi!(WithdrawToken {
        distributor: distributor.key(),
        admin: ctx.accounts.owner.key(),
        to: ctx.accounts.to_token_account.owner,
        amount,
    });

    Ok(())
}
