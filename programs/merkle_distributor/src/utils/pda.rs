use anchor_lang::prelude::Pubkey;
use crate::constants::*;

/// Address of the distributor for `(token_mint, creator, version)`.
pub fn find_distributor_address(token_mint: &Pubkey, creator: &Pubkey, version: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            DISTRIBUTOR_SEED.as_bytes(),
            token_mint.as_ref(),
            creator.as_ref(),
            &version.to_le_bytes(),
        ],
        &crate::ID,
    )
}

pub fn find_vault_address(distributor: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VAULT_SEED.as_bytes(), distributor.as_ref()], &crate::ID)
}

/// Address of the claim record for one leaf index.
///
/// A record that does not exist yet means nothing has been claimed for that
/// index, so readers should treat a missing account as `claimed == 0`.
pub fn find_claim_record_address(distributor: &Pubkey, index: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[CLAIM_SEED.as_bytes(), distributor.as_ref(), &index.to_le_bytes()],
        &crate::ID,
    )
}
