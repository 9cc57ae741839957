//! Level-by-level binary merkle tree.
//!
//! Pairs are hashed smaller-first (`hash_pair`), so proofs carry no
//! left/right flags. When a level has an odd number of nodes the last one is
//! carried to the next level as-is: it is neither duplicated nor re-hashed,
//! and the proof for anything below it gets no entry for that level. The
//! on-chain verifier folds proofs with the same rule.

use merkle_distributor::utils::hash_pair;
use tracing::debug;

use crate::encoding::encode_hash;
use crate::error::{MerkleTreeError, Result};

#[derive(Debug, Clone)]
pub struct MerkleTree {
    /// `levels[0]` are the leaves, the last level holds only the root.
    levels: Vec<Vec<[u8; 32]>>,
}

impl MerkleTree {
    /// Builds every level from the given leaf hashes.
    pub fn new(leaves: Vec<[u8; 32]>) -> Result<Self> {
        if leaves.is_empty() {
            return Err(MerkleTreeError::EmptyInput);
        }

        let leaf_count = leaves.len();
        let mut levels = vec![leaves];
        loop {
            let current = &levels[levels.len() - 1];
            if current.len() == 1 {
                break;
            }
            let next = next_level(current);
            levels.push(next);
        }

        debug!(leaves = leaf_count, depth = levels.len() - 1, "built merkle tree");
        Ok(Self { levels })
    }

    pub fn root(&self) -> [u8; 32] {
        self.levels[self.levels.len() - 1][0]
    }

    pub fn hex_root(&self) -> String {
        encode_hash(&self.root())
    }

    pub fn len(&self) -> usize {
        self.levels[0].len()
    }

    /// Always false; a tree has at least one leaf.
    pub fn is_empty(&self) -> bool {
        self.levels[0].is_empty()
    }

    /// Number of levels above the leaves.
    pub fn depth(&self) -> usize {
        self.levels.len() - 1
    }

    pub fn leaf(&self, index: usize) -> Option<&[u8; 32]> {
        self.levels[0].get(index)
    }

    /// Sibling hashes from the leaf at `index` up to the root.
    pub fn proof(&self, index: usize) -> Result<Vec<[u8; 32]>> {
        if index >= self.len() {
            return Err(MerkleTreeError::IndexOutOfRange {
                index: index as u64,
                len: self.len(),
            });
        }

        let mut proof = Vec::with_capacity(self.depth());
        let mut position = index;
        for level in &self.levels[..self.depth()] {
            let sibling = position ^ 1;
            if let Some(hash) = level.get(sibling) {
                proof.push(*hash);
            }
            position /= 2;
        }
        Ok(proof)
    }
}

fn next_level(level: &[[u8; 32]]) -> Vec<[u8; 32]> {
    level
        .chunks(2)
        .map(|pair| match pair {
            [left, right] => hash_pair(left, right),
            [carried] => *carried,
            _ => unreachable!("chunks(2) yields one or two nodes"),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use merkle_distributor::utils::verify;

    fn leaves(n: u8) -> Vec<[u8; 32]> {
        (0..n).map(|i| [i; 32]).collect()
    }

    #[test]
    fn empty_tree_is_rejected() {
        assert!(matches!(MerkleTree::new(vec![]), Err(MerkleTreeError::EmptyInput)));
    }

    #[test]
    fn single_leaf_is_its_own_root() {
        let tree = MerkleTree::new(leaves(1)).unwrap();
        assert_eq!(tree.root(), [0u8; 32]);
        assert_eq!(tree.depth(), 0);
        assert!(tree.proof(0).unwrap().is_empty());
    }

    #[test]
    fn five_leaves_carry_twice() {
        let l = leaves(5);
        let tree = MerkleTree::new(l.clone()).unwrap();

        let h01 = hash_pair(&l[0], &l[1]);
        let h23 = hash_pair(&l[2], &l[3]);
        let h0123 = hash_pair(&h01, &h23);
        assert_eq!(tree.root(), hash_pair(&h0123, &l[4]));
        assert_eq!(tree.depth(), 3);

        // Leaf 4 is carried through two levels and only pairs at the top
        assert_eq!(tree.proof(4).unwrap(), vec![h0123]);
        assert_eq!(tree.proof(0).unwrap(), vec![l[1], h23, l[4]]);
    }

    #[test]
    fn every_proof_verifies() {
        for n in 1..=17u8 {
            let tree = MerkleTree::new(leaves(n)).unwrap();
            for i in 0..n as usize {
                let proof = tree.proof(i).unwrap();
                assert!(verify(&proof, tree.root(), *tree.leaf(i).unwrap()), "n={} i={}", n, i);
            }
        }
    }

    #[test]
    fn out_of_range_proof() {
        let tree = MerkleTree::new(leaves(4)).unwrap();
        assert!(matches!(
            tree.proof(4),
            Err(MerkleTreeError::IndexOutOfRange { index: 4, len: 4 })
        ));
    }

    #[test]
    fn hex_root_format() {
        let tree = MerkleTree::new(leaves(3)).unwrap();
        let hex_root = tree.hex_root();
        assert!(hex_root.starts_with("0x"));
        assert_eq!(hex_root.len(), 66);
        assert_eq!(hex_root, hex_root.to_lowercase());
    }
}
