//! Off-chain side of the merkle distributor.
//!
//! Builds the allocation tree, generates proofs and writes the distribution
//! file that recipients use to call `claim`. Leaf encoding, pair hashing and
//! proof verification come from the `merkle_distributor` program crate, so a
//! proof produced here is checked by exactly the same code on-chain.
//!
//! ```no_run
//! use anchor_lang::prelude::Pubkey;
//! use merkle_tree::parse_balance_map;
//!
//! let alice = Pubkey::new_unique();
//! let bob = Pubkey::new_unique();
//! let info = parse_balance_map(vec![(alice, 200), (bob, 300)]).unwrap();
//! println!("{}", info.merkle_root);
//! ```

pub mod balance_map;
pub mod balance_tree;
pub mod encoding;
pub mod error;
pub mod merkle;
pub mod verify;

pub use balance_map::{parse_balance_map, parse_balance_map_json, ClaimInfo, MerkleDistributorInfo};
pub use balance_tree::BalanceTree;
pub use error::{MerkleTreeError, Result};
pub use merkle::MerkleTree;
pub use verify::{verify_distribution, VerifiedDistribution};
