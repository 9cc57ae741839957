//! Turns an allocation list into the published distribution file.

use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::str::FromStr;

use anchor_lang::prelude::Pubkey;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::error::Category;
use serde_json::Value;
use tracing::{debug, info};

use crate::balance_tree::BalanceTree;
use crate::encoding::encode_amount;
use crate::error::{MerkleTreeError, Result};

/// Everything a claimant needs, keyed by base58 account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MerkleDistributorInfo {
    pub merkle_root: String,
    pub token_total: String,
    pub claims: BTreeMap<String, ClaimInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimInfo {
    pub index: u64,
    pub amount: String,
    pub proof: Vec<String>,
}

impl MerkleDistributorInfo {
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn claim_for(&self, account: &Pubkey) -> Option<&ClaimInfo> {
        self.claims.get(&account.to_string())
    }
}

/// Builds the tree and every proof for `balances`.
///
/// Indices follow the iteration order of `balances`. Duplicate accounts, an
/// empty list or a total above `u64::MAX` are rejected before anything is
/// built.
pub fn parse_balance_map<I>(balances: I) -> Result<MerkleDistributorInfo>
where
    I: IntoIterator<Item = (Pubkey, u64)>,
{
    let balances: Vec<(Pubkey, u64)> = balances.into_iter().collect();
    if balances.is_empty() {
        return Err(MerkleTreeError::EmptyInput);
    }

    let mut seen = HashSet::with_capacity(balances.len());
    let mut token_total: u64 = 0;
    for (account, amount) in &balances {
        if !seen.insert(*account) {
            return Err(MerkleTreeError::DuplicateAccount(*account));
        }
        token_total = token_total
            .checked_add(*amount)
            .ok_or(MerkleTreeError::TotalOverflow)?;
    }

    let tree = BalanceTree::new(&balances)?;

    let mut claims = BTreeMap::new();
    for (index, (account, amount)) in balances.iter().enumerate() {
        let index = index as u64;
        let proof = tree.get_hex_proof(index, account, *amount)?;
        claims.insert(
            account.to_string(),
            ClaimInfo {
                index,
                amount: encode_amount(*amount),
                proof,
            },
        );
    }

    info!(
        claims = claims.len(),
        token_total,
        merkle_root = %tree.get_hex_root(),
        "parsed balance map"
    );

    Ok(MerkleDistributorInfo {
        merkle_root: tree.get_hex_root(),
        token_total: encode_amount(token_total),
        claims,
    })
}

/// Raw `(key, amount)` pairs of an allocation object, in file order and with
/// repeated keys kept, so duplicates reach the account check.
struct AllocationEntries(Vec<(String, Value)>);

impl<'de> Deserialize<'de> for AllocationEntries {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = AllocationEntries;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a JSON object mapping accounts to amounts")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, amount)) = map.next_entry::<String, serde_json::Value>()? {
                    entries.push((key, amount));
                }
                Ok(AllocationEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

/// Parses a JSON allocation object `{ "<base58 account>": amount }`.
///
/// Amounts may be JSON integers, decimal strings or `0x` hex strings. Keys are
/// taken in lexicographic order of their text, which fixes the index of every
/// account in the resulting tree. A key that appears twice is rejected as a
/// duplicate account.
pub fn parse_balance_map_json(input: &str) -> Result<MerkleDistributorInfo> {
    let AllocationEntries(mut entries) =
        serde_json::from_str(input).map_err(|err| match err.classify() {
            Category::Data => MerkleTreeError::UnexpectedFormat,
            _ => MerkleTreeError::Json(err),
        })?;
    debug!(entries = entries.len(), "read allocation file");

    entries.sort_by(|(a, _), (b, _)| a.cmp(b));

    let mut balances = Vec::with_capacity(entries.len());
    for (key, amount) in &entries {
        let account =
            Pubkey::from_str(key.trim()).map_err(|_| MerkleTreeError::InvalidAccount(key.clone()))?;
        balances.push((account, parse_amount(key, amount)?));
    }

    parse_balance_map(balances)
}

fn parse_amount(account: &str, value: &Value) -> Result<u64> {
    let invalid = |reason: &str| MerkleTreeError::InvalidAmount {
        account: account.to_string(),
        reason: reason.to_string(),
    };

    match value {
        Value::Number(number) => {
            if let Some(amount) = number.as_u64() {
                Ok(amount)
            } else if number.as_i64().is_some() {
                Err(invalid("amount is negative"))
            } else if number.is_f64() {
                Err(invalid("amount is not an integer"))
            } else {
                Err(invalid("amount does not fit in u64"))
            }
        }
        Value::String(text) => {
            let text = text.trim();
            let parsed = match text.strip_prefix("0x") {
                Some(digits) if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_hexdigit()) => {
                    u64::from_str_radix(digits, 16).ok()
                }
                None if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) => {
                    text.parse::<u64>().ok()
                }
                _ => None,
            };
            parsed.ok_or_else(|| invalid("expected a non-negative integer"))
        }
        _ => Err(invalid("expected a number or a numeric string")),
    }
}
