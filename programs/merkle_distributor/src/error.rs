use anchor_lang::prelude::*;

#[error_code]
pub enum MerkleDistributorError {
    // Access control errors
    #[msg("Only owner can perform this action")]
    Unauthorized,
    #[msg("Invalid owner account")]
    InvalidOwner,

    // Merkle proof errors
    #[msg("Invalid proof")]
    ProofInvalid,

    // Amount validation errors
    #[msg("Airdrop limit reached for this index")]
    AllocationExhausted,
    #[msg("Insufficient vault balance for this transfer")]
    InsufficientFunds,

    // System level errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
    #[msg("Token mint does not match distributor's token mint")]
    TokenMintMismatch,
    #[msg("Recipient token account is not owned by the claimant")]
    RecipientMismatch,
}
