use crate::constants::*;
use crate::event::*;
use crate::state::*;
use crate::utils::transfer_token;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/**
 * Account context for creating a new distributor
 *
 * - Creates the distributor PDA holding the merkle root and owner
 * - Creates the token vault PDA that holds the tokens to be distributed
 * - Optionally moves an initial deposit from the creator into the vault
 *
 * The creator becomes the first owner. Anyone may top up the vault later with
 * a plain token transfer.
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(version: u64)]
pub struct NewDistributor<'info> {
    /// The main distributor account (PDA)
    /// - Derived from: ["distributor", token_mint, creator, version]
    #[account(
        init,
        payer = creator,
        space = TokenDistributor::LEN,
        seeds = [
            DISTRIBUTOR_SEED.as_bytes(),
            token_mint.key().as_ref(),
            creator.key().as_ref(),
            version.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub distributor: Account<'info, TokenDistributor>,

    /// Token vault account (PDA) controlled by the distributor
    /// - Derived from: ["vault", distributor_key]
    #[account(
        init,
        token::mint = token_mint,
        token::authority = distributor,
        token::token_program = token_program,
        seeds = [VAULT_SEED.as_bytes(), distributor.key().as_ref()],
        bump,
        payer = creator,
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// The token mint being distributed
    /// - Supports both SPL Token and Token 2022 programs
    #[account(
        token::token_program = token_program,
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// Creator's token account funding the initial deposit
    #[account(
        mut,
        token::mint = token_mint,
        token::authority = creator,
        token::token_program = token_program,
    )]
    pub creator_token_account: InterfaceAccount<'info, TokenAccount>,

    /// Pays for the new accounts and becomes the owner
    #[account(mut)]
    pub creator: Signer<'info>,

    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Creates a new distributor
 *
 * @param version - Disambiguates several distributors of the same creator and mint
 * @param merkle_root - Initial root, all zeros admits no claims until updated
 * @param initial_deposit - Tokens moved into the vault now, may be zero
 */
pub fn handle_new_distributor(
    ctx: Context<NewDistributor>,
    version: u64,
    merkle_root: [u8; 32],
    initial_deposit: u64,
) -> Result<()> {
    let distributor = &mut ctx.accounts.distributor;

    distributor.bump = ctx.bumps.distributor;
    distributor.version = version;
    distributor.creator = ctx.accounts.creator.key();
    distributor.owner = ctx.accounts.creator.key();
    distributor.token_mint = ctx.accounts.token_mint.key();
    distributor.token_vault = ctx.accounts.token_vault.key();
    distributor.merkle_root = merkle_root;
    // total_claimed starts at 0

    if initial_deposit > 0 {
        transfer_token(
            ctx.accounts.creator.to_account_info(),
            ctx.accounts.creator_token_account.to_account_info(),
            ctx.accounts.token_vault.to_account_info(),
            ctx.accounts.token_mint.to_account_info(),
            ctx.accounts.token_program.to_account_info(),
            initial_deposit,
            ctx.accounts.token_mint.decimals,
            None, // creator signs the transaction
        )?;
    }

    emit_cpi!(DistributorCreated {
        distributor: distributor.key(),
        version,
        owner: ctx.accounts.creator.key(),
        token_mint: ctx.accounts.token_mint.key(),
        token_vault: ctx.accounts.token_vault.key(),
        merkle_root,
        initial_deposit,
    });

    Ok(())
}
