use anchor_lang::solana_program::hash::hashv;
use anchor_lang::solana_program::pubkey::Pubkey;
use crate::utils::{hash_leaf, hash_pair};

#[derive(Debug, Clone)]
pub struct TreeNode {
    pub claimant: Pubkey,
    pub amount: u64,
}

/// Minimal level-by-level builder used to produce roots and proofs for the
/// on-chain verifier.
pub struct SimpleMerkleTree {
    levels: Vec<Vec<[u8; 32]>>,
}

impl SimpleMerkleTree {
    pub fn new(tree_nodes: &[TreeNode]) -> Self {
        let leaves: Vec<[u8; 32]> = tree_nodes
            .iter()
            .enumerate()
            .map(|(index, node)| hash_leaf(index as u64, &node.claimant, node.amount))
            .collect();

        let mut levels = vec![leaves];
        while levels.last().map_or(false, |level| level.len() > 1) {
            let prev = &levels[levels.len() - 1];
            let next: Vec<[u8; 32]> = prev
                .chunks(2)
                .map(|pair| match pair {
                    [left, right] => hash_pair(left, right),
                    // Carry the unpaired node up unchanged
                    [single] => *single,
                    _ => unreachable!(),
                })
                .collect();
            levels.push(next);
        }

        SimpleMerkleTree { levels }
    }

    pub fn root(&self) -> [u8; 32] {
        self.levels.last().and_then(|level| level.first()).copied().unwrap_or([0; 32])
    }

    /// Generate merkle proof for a leaf at given index
    pub fn get_proof(&self, index: usize) -> Result<Vec<[u8; 32]>, &'static str> {
        if index >= self.levels[0].len() {
            return Err("Index out of bounds");
        }

        let mut proof = Vec::new();
        let mut current_index = index;
        for level in &self.levels[..self.levels.len() - 1] {
            let sibling_index = current_index ^ 1;
            if sibling_index < level.len() {
                proof.push(level[sibling_index]);
            }
            current_index /= 2;
        }

        Ok(proof)
    }
}

pub fn wallet(seed: u8) -> Pubkey {
    Pubkey::new_from_array([seed; 32])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::verify;

    fn get_test_data() -> Vec<TreeNode> {
        vec![
            TreeNode { claimant: wallet(1), amount: 1000 },
            TreeNode { claimant: wallet(2), amount: 2000 },
            TreeNode { claimant: wallet(3), amount: 3000 },
            TreeNode { claimant: wallet(4), amount: 4000 },
            TreeNode { claimant: wallet(5), amount: 5000 },
        ]
    }

    #[test]
    fn test_leaf_encoding_layout() {
        let account = wallet(7);
        let mut preimage = Vec::with_capacity(48);
        preimage.extend_from_slice(&3u64.to_be_bytes());
        preimage.extend_from_slice(account.as_ref());
        preimage.extend_from_slice(&250u64.to_be_bytes());

        assert_eq!(preimage.len(), 48);
        assert_eq!(hash_leaf(3, &account, 250), hashv(&[&preimage]).to_bytes());
        assert_ne!(hash_leaf(3, &account, 250), hash_leaf(4, &account, 250));
        assert_ne!(hash_leaf(3, &account, 250), hash_leaf(3, &account, 251));
    }

    #[test]
    fn test_hash_pair_is_order_independent() {
        let a = hash_leaf(0, &wallet(1), 1);
        let b = hash_leaf(1, &wallet(2), 2);
        assert_eq!(hash_pair(&a, &b), hash_pair(&b, &a));

        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        assert_eq!(hash_pair(&a, &b), hashv(&[&low, &high]).to_bytes());
    }

    #[test]
    fn test_odd_node_is_carried_unchanged() {
        let nodes = &get_test_data()[..3];
        let tree = SimpleMerkleTree::new(nodes);

        let l0 = hash_leaf(0, &nodes[0].claimant, nodes[0].amount);
        let l1 = hash_leaf(1, &nodes[1].claimant, nodes[1].amount);
        let l2 = hash_leaf(2, &nodes[2].claimant, nodes[2].amount);

        assert_eq!(tree.root(), hash_pair(&hash_pair(&l0, &l1), &l2));
        // The carried leaf has no sibling at level 0
        assert_eq!(tree.get_proof(2).unwrap(), vec![hash_pair(&l0, &l1)]);
    }

    #[test]
    fn test_get_proof_and_verify() {
        let tree_nodes = get_test_data();
        let merkle_tree = SimpleMerkleTree::new(&tree_nodes);
        let root = merkle_tree.root();

        for (index, node) in tree_nodes.iter().enumerate() {
            let leaf_hash = hash_leaf(index as u64, &node.claimant, node.amount);
            let proof = merkle_tree.get_proof(index).expect("Failed to get proof");

            assert!(verify(&proof, root, leaf_hash), "Proof verification failed for index {}", index);
        }
    }

    #[test]
    fn test_invalid_proof() {
        let tree_nodes = get_test_data();
        let merkle_tree = SimpleMerkleTree::new(&tree_nodes);
        let root = merkle_tree.root();
        let proof = merkle_tree.get_proof(0).expect("Failed to get proof");

        // Wrong leaf
        let wrong_leaf = hash_leaf(0, &wallet(9), 9999);
        assert!(!verify(&proof, root, wrong_leaf), "Invalid proof should not verify");

        // Right leaf, wrong index
        let shifted_leaf = hash_leaf(1, &tree_nodes[0].claimant, tree_nodes[0].amount);
        assert!(!verify(&proof, root, shifted_leaf));

        // Tampered proof
        let correct_leaf = hash_leaf(0, &tree_nodes[0].claimant, tree_nodes[0].amount);
        let mut tampered_proof = proof.clone();
        tampered_proof[0][0] ^= 0x01;
        assert!(!verify(&tampered_proof, root, correct_leaf), "Tampered proof should not verify");

        // Truncated and extended proofs
        assert!(!verify(&proof[..proof.len() - 1], root, correct_leaf));
        let mut extended = proof.clone();
        extended.push([0u8; 32]);
        assert!(!verify(&extended, root, correct_leaf));
    }

    #[test]
    fn test_proof_edge_cases() {
        let single_node = vec![TreeNode { claimant: wallet(1), amount: 1000 }];
        let single_tree = SimpleMerkleTree::new(&single_node);
        let single_proof = single_tree.get_proof(0).expect("Failed to get proof for single node");
        assert_eq!(single_proof.len(), 0, "Single node should have empty proof");

        let single_leaf = hash_leaf(0, &single_node[0].claimant, single_node[0].amount);
        assert_eq!(single_tree.root(), single_leaf);
        assert!(verify(&single_proof, single_tree.root(), single_leaf));

        // Empty proof never matches the zero root
        assert!(!verify(&[], [0u8; 32], single_leaf));

        let merkle_tree = SimpleMerkleTree::new(&get_test_data());
        assert!(merkle_tree.get_proof(10).is_err(), "Out of bounds should return error");
    }
}
