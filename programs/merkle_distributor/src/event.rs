use anchor_lang::prelude::*;

/// Event emitted when a new distributor is created
#[event]
pub struct DistributorCreated {
    /// The distributor account public key
    pub distributor: Pubkey,
    /// Version used in the distributor PDA seeds
    pub version: u64,
    /// Initial owner of the distributor
    pub owner: Pubkey,
    /// Token mint address
    pub token_mint: Pubkey,
    /// Token vault address
    pub token_vault: Pubkey,
    /// Initial merkle root (may be all zeros)
    pub merkle_root: [u8; 32],
    /// Tokens deposited into the vault at creation
    pub initial_deposit: u64,
}

/// Event emitted on every successful claim
#[event]
pub struct Claimed {
    /// The distributor account public key
    pub distributor: Pubkey,
    /// Leaf index that was claimed
    pub index: u64,
    /// Recipient committed in the leaf
    pub account: Pubkey,
    /// Amount paid out by this claim (the delta, not the cumulative amount)
    pub amount: u64,
}

/// Event emitted when the owner replaces the merkle root
#[event]
pub struct UpdateMerkleRoot {
    /// The distributor account public key
    pub distributor: Pubkey,
    /// Owner who replaced the root
    pub admin: Pubkey,
    pub old_root: [u8; 32],
    pub new_root: [u8; 32],
}

/// Event emitted when the owner withdraws tokens from the vault
#[event]
pub struct WithdrawToken {
    /// The distributor account public key
    pub distributor: Pubkey,
    /// Owner who withdrew the tokens
    pub admin: Pubkey,
    /// Owner of the destination token account
    pub to: Pubkey,
    /// Amount of tokens withdrawn
    pub amount: u64,
}

/// Event emitted when ownership is handed over
#[event]
pub struct OwnershipTransferred {
    pub distributor: Pubkey,
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
}
