use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::state::*;
use crate::error::*;
use crate::constants::*;
use crate::utils::transfer_token;
use crate::event::*;

/**
 * Account context for claiming tokens
 *
 * Anyone may submit a claim on behalf of a claimant; the tokens always go to a
 * token account owned by the claimant committed in the leaf. The signer only
 * pays for the claim record the first time an index is claimed.
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(index: u64, claimant: Pubkey)]
pub struct Claim<'info> {
    /// The distributor holding the current merkle root
    #[account(mut)]
    pub distributor: Account<'info, TokenDistributor>,

    /// Cumulative claim record for this leaf index
    /// - Derived from: ["claim", distributor_key, index]
    #[account(
        init_if_needed,
        payer = payer,
        space = ClaimRecord::LEN,
        seeds = [CLAIM_SEED.as_bytes(), distributor.key().as_ref(), index.to_le_bytes().as_ref()],
        bump
    )]
    pub claim_record: Account<'info, ClaimRecord>,

    /// Token vault holding the tokens to be distributed
    /// - Derived from: ["vault", distributor_key]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), distributor.key().as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Claimant's token account receiving the payout
    #[account(
        mut,
        token::mint = distributor.token_mint,
        token::token_program = token_program,
        constraint = claimant_token_account.owner == claimant @ MerkleDistributorError::RecipientMismatch
    )]
    pub claimant_token_account: InterfaceAccount<'info, TokenAccount>,

    #[account(
        token::token_program = token_program,
        constraint = token_mint.key() == distributor.token_mint @ MerkleDistributorError::TokenMintMismatch
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// Pays rent for the claim record if it does not exist yet
    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/// Runs the claim checks and records the claim.
///
/// Checks, in order: the proof folds to the current root (`ProofInvalid`), the
/// leaf commits more than was already paid (`AllocationExhausted`), the vault
/// can cover the difference (`InsufficientFunds`). Nothing is written unless
/// every check passes. Returns the amount to pay out.
pub fn process_claim(
    distributor: &mut TokenDistributor,
    claim_record: &mut ClaimRecord,
    index: u64,
    claimant: &Pubkey,
    amount: u64,
    proof: &[[u8; 32]],
    vault_balance: u64,
) -> Result<u64> {
    require!(
        distributor.verify_claim(index, claimant, amount, proof),
        MerkleDistributorError::ProofInvalid
    );

    let pending_amount = claim_record.pending(amount)?;

    require!(
        vault_balance >= pending_amount,
        MerkleDistributorError::InsufficientFunds
    );

    let new_total_claimed = distributor
        .total_claimed
        .checked_add(pending_amount)
        .ok_or(MerkleDistributorError::ArithmeticOverflow)?;

    claim_record.claimed_amount = amount;
    distributor.total_claimed = new_total_claimed;

    Ok(pending_amount)
}

/**
 * Processes a token claim with merkle proof verification
 *
 * @param index - Leaf index in the published tree
 * @param claimant - Recipient committed in the leaf
 * @param amount - Cumulative amount committed in the leaf
 * @param proof - Sibling hashes, leaf to root
 */
pub fn handle_claim(
    ctx: Context<Claim>,
    index: u64,
    claimant: Pubkey,
    amount: u64,
    proof: Vec<[u8; 32]>,
) -> Result<()> {
    let vault_balance = ctx.accounts.token_vault.amount;
    let distributor = &mut ctx.accounts.distributor;
    let claim_record = &mut ctx.accounts.claim_record;

    // ===== CHECKS + EFFECTS =====
    // The record is written before the transfer, so a re-entrant claim for the
    // same index already sees the new cumulative amount.
    let pending_amount = process_claim(
        distributor,
        claim_record,
        index,
        &claimant,
        amount,
        &proof,
        vault_balance,
    )?;

    let version_bytes = distributor.version.to_le_bytes();
    let token_mint_key = distributor.token_mint;
    let creator_key = distributor.creator;
    let distributor_bump = distributor.bump;
    let distributor_key = distributor.key();

    // ===== INTERACTIONS =====
    let seeds = &[
        DISTRIBUTOR_SEED.as_bytes(),
        token_mint_key.as_ref(),
        creator_key.as_ref(),
        version_bytes.as_ref(),
        &[distributor_bump],
    ];
    let signer = &[&seeds[..]];

    transfer_token(
        ctx.accounts.distributor.to_account_info(),
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.claimant_token_account.to_account_info(),
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        pending_amount,
        ctx.accounts.token_mint.decimals,
        Some(signer),
    )?;

    emit_cpi!(Claimed {
        distributor: distributor_key,
        index,
        account: claimant,
        amount: pending_amount,
    });

    Ok(())
}
