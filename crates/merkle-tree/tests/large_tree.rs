use anchor_lang::prelude::Pubkey;
use merkle_tree::BalanceTree;

const NUM_LEAVES: u64 = 100_000;
const NUM_SAMPLES: u64 = 25;

#[test]
fn realistic_size_tree() {
    let wallet = Pubkey::new_from_array([7u8; 32]);
    let elements: Vec<(Pubkey, u64)> = (0..NUM_LEAVES).map(|_| (wallet, 100)).collect();
    let tree = BalanceTree::new(&elements).unwrap();
    let root = tree.root();

    assert_eq!(tree.len(), NUM_LEAVES as usize);
    assert_eq!(tree.depth(), 17);

    for i in (0..NUM_LEAVES).step_by((NUM_LEAVES / NUM_SAMPLES) as usize) {
        let proof = tree.get_proof(i, &wallet, 100).unwrap();
        assert!(proof.len() <= tree.depth());
        assert!(BalanceTree::verify_proof(i, &wallet, 100, &proof, root), "index {}", i);
    }

    // Deep leaves near the ragged right edge
    for i in [NUM_LEAVES - 1, NUM_LEAVES - 2, 99_999 - 32] {
        let proof = tree.get_proof(i, &wallet, 100).unwrap();
        assert!(BalanceTree::verify_proof(i, &wallet, 100, &proof, root), "index {}", i);
        assert!(!BalanceTree::verify_proof(i, &wallet, 101, &proof, root));
    }
}
