//! `0x`-prefixed hex encodings used in distribution files.
//!
//! Integers are written as even-length lowercase hex (`750` → `0x02ee`,
//! `0` → `0x00`); hashes as 64 hex digits.

use crate::error::{MerkleTreeError, Result};

pub fn encode_hash(hash: &[u8; 32]) -> String {
    format!("0x{}", hex::encode(hash))
}

pub fn decode_hash(value: &str) -> Result<[u8; 32]> {
    let digits = value
        .strip_prefix("0x")
        .ok_or_else(|| MerkleTreeError::InvalidHex(value.to_string()))?;
    let mut out = [0u8; 32];
    hex::decode_to_slice(digits, &mut out).map_err(|_| MerkleTreeError::InvalidHex(value.to_string()))?;
    Ok(out)
}

pub fn encode_amount(amount: u64) -> String {
    let digits = format!("{:x}", amount);
    if digits.len() % 2 == 1 {
        format!("0x0{}", digits)
    } else {
        format!("0x{}", digits)
    }
}

pub fn decode_amount(value: &str) -> Result<u64> {
    let digits = value
        .strip_prefix("0x")
        .ok_or_else(|| MerkleTreeError::InvalidHex(value.to_string()))?;
    u64::from_str_radix(digits, 16).map_err(|_| MerkleTreeError::InvalidHex(value.to_string()))
}
