use anchor_lang::prelude::Pubkey;
use anchor_lang::solana_program::hash::hashv;

/// Hashes one allocation leaf.
///
/// Layout: `index (u64 BE) || account (32 bytes) || amount (u64 BE)`, no
/// delimiters and no domain prefix. Off-chain tree builders must produce the
/// exact same bytes.
pub fn hash_leaf(index: u64, account: &Pubkey, amount: u64) -> [u8; 32] {
    hashv(&[
        &index.to_be_bytes(),
        account.as_ref(),
        &amount.to_be_bytes(),
    ])
    .to_bytes()
}

/// Hashes two sibling nodes, smaller one first.
///
/// Sorting the pair means a proof never has to say which side a sibling
/// sits on.
pub fn hash_pair(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
    if a <= b {
        hashv(&[a, b]).to_bytes()
    } else {
        hashv(&[b, a]).to_bytes()
    }
}

/// Folds `proof` into `leaf` and compares the result with `root`.
///
/// Proof entries are ordered leaf-to-root. Levels where the node was carried
/// up without a sibling contribute no entry.
pub fn verify(proof: &[[u8; 32]], root: [u8; 32], leaf: [u8; 32]) -> bool {
    let computed = proof
        .iter()
        .fold(leaf, |node, sibling| hash_pair(&node, sibling));
    computed == root
}
