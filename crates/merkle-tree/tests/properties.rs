use anchor_lang::prelude::Pubkey;
use merkle_tree::BalanceTree;
use proptest::prelude::*;

fn balances() -> impl Strategy<Value = Vec<(Pubkey, u64)>> {
    prop::collection::vec((any::<[u8; 32]>(), any::<u64>()), 1..40).prop_map(|entries| {
        entries
            .into_iter()
            .map(|(key, amount)| (Pubkey::new_from_array(key), amount))
            .collect()
    })
}

proptest! {
    #[test]
    fn every_leaf_verifies(balances in balances()) {
        let tree = BalanceTree::new(&balances).unwrap();
        for (index, (account, amount)) in balances.iter().enumerate() {
            let proof = tree.get_proof(index as u64, account, *amount).unwrap();
            prop_assert!(BalanceTree::verify_proof(index as u64, account, *amount, &proof, tree.root()));
        }
    }

    #[test]
    fn flipping_a_proof_bit_breaks_verification(
        balances in balances(),
        pick in any::<prop::sample::Index>(),
        entry in any::<prop::sample::Index>(),
        bit in 0usize..256,
    ) {
        prop_assume!(balances.len() > 1);
        let tree = BalanceTree::new(&balances).unwrap();
        let index = pick.index(balances.len());
        let (account, amount) = balances[index];
        let mut proof = tree.get_proof(index as u64, &account, amount).unwrap();
        prop_assume!(!proof.is_empty());

        let entry = entry.index(proof.len());
        proof[entry][bit / 8] ^= 1 << (bit % 8);
        prop_assert!(!BalanceTree::verify_proof(index as u64, &account, amount, &proof, tree.root()));
    }

    #[test]
    fn flipping_account_or_amount_breaks_verification(
        balances in balances(),
        pick in any::<prop::sample::Index>(),
        bit in 0usize..256,
        amount_bit in 0u32..64,
    ) {
        let tree = BalanceTree::new(&balances).unwrap();
        let index = pick.index(balances.len());
        let (account, amount) = balances[index];
        let proof = tree.get_proof(index as u64, &account, amount).unwrap();

        let mut key = account.to_bytes();
        key[bit / 8] ^= 1 << (bit % 8);
        let other_account = Pubkey::new_from_array(key);
        prop_assert!(!BalanceTree::verify_proof(index as u64, &other_account, amount, &proof, tree.root()));

        let other_amount = amount ^ (1u64 << amount_bit);
        prop_assert!(!BalanceTree::verify_proof(index as u64, &account, other_amount, &proof, tree.root()));
    }
}
