use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * PDA seeds shared by the program and by off-chain tooling that needs to
 * derive distributor, vault and claim record addresses.
 */

#[constant]
/// ===== PDA SEED CONSTANTS =====

/// Seed for distributor PDA derivation
/// - Used in: ["distributor", token_mint, creator, version]
/// - One distributor per (token, creator, version) combination
pub const DISTRIBUTOR_SEED: &str = "distributor";

/// Seed for token vault PDA derivation
/// - Used in: ["vault", distributor_key]
/// - The vault authority is the distributor PDA
pub const VAULT_SEED: &str = "vault";

/// Seed for claim record PDA derivation
/// - Used in: ["claim", distributor_key, index]
/// - One record per leaf index, holding the cumulative amount paid out
/// - Survives merkle root updates, so later epochs only pay the increase
pub const CLAIM_SEED: &str = "claim";
