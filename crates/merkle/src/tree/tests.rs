//! Tests for tree construction, proof generation and verification.

use super::*;
use crate::constants::expected_proof_length;
use crate::hasher::combine;
use proptest::prelude::*;
use rand::Rng;

fn digest(text: &str) -> Digest {
    text.parse().expect("valid digest")
}

fn random_items(count: usize) -> Vec<Vec<u8>> {
    let mut rng = rand::rng();
    (0..count)
        .map(|_| {
            let len = rng.random_range(0..=64);
            (0..len).map(|_| rng.random::<u8>()).collect()
        })
        .collect()
}

#[test]
fn test_empty_input() {
    let empty: Vec<&str> = Vec::new();
    assert_eq!(Tree::build(empty), Err(MerkleError::EmptyInput));
}

#[test]
fn test_single_item() {
    let tree = Tree::build(["x"]).unwrap();

    assert_eq!(tree.leaf_count(), 1);
    assert_eq!(tree.depth(), 1);
    assert_eq!(tree.height(), 0);
    assert_eq!(tree.root(), hash("x"));
    assert_eq!(
        tree.root(),
        digest("2d711642b726b04401627ca9fbac32f5c8530fb1903cc4db02258717921a4881")
    );

    let proof = tree.generate_proof(0).unwrap();
    assert!(proof.is_empty());
    assert_eq!(proof.compute_root("x"), tree.root());
    // Empty proofs are rejected even when the leaf is the root
    assert!(!tree.verify("x", &proof));
    assert!(!tree.prove(0).unwrap().verify(&tree.root()));

    let root_node = tree.level(0).and_then(|level| level.get(0)).unwrap();
    assert!(root_node.is_leaf());
}

#[test]
fn test_two_items() {
    let tree = Tree::build(["a", "b"]).unwrap();
    let root = combine(&hash("a"), &hash("b"));

    assert_eq!(tree.root(), root);
    assert_eq!(
        root,
        digest("62af5c3cb8da3e4f25061e829ebeea5c7513c54949115b1acc225930a90154da")
    );

    let proof = tree.generate_proof(0).unwrap();
    assert_eq!(
        proof.steps(),
        &[ProofStep::new(hash("b"), Position::Right, 0)]
    );

    let proof = tree.generate_proof(1).unwrap();
    assert_eq!(proof.steps(), &[ProofStep::new(hash("a"), Position::Left, 0)]);
}

#[test]
fn test_three_items_pads_last_leaf() {
    let tree = Tree::build(["a", "b", "c"]).unwrap();

    assert_eq!(tree.leaf_count(), 3);
    assert_eq!(tree.depth(), 3);
    assert_eq!(tree.height(), 2);

    let lengths: Vec<usize> = tree.levels().iter().map(Level::len).collect();
    assert_eq!(lengths, vec![4, 2, 1]);

    // The padding node is a copy of the last leaf, not a new hash
    let leaves = tree.level(0).unwrap();
    assert!(leaves.is_padded());
    assert_eq!(leaves.get(3), leaves.get(2));
    assert_eq!(leaves.get(3).unwrap().digest(), &hash("c"));

    let internal = tree.level(1).unwrap();
    assert!(!internal.is_padded());
    assert_eq!(
        internal.get(1).unwrap().digest(),
        &combine(&hash("c"), &hash("c"))
    );
    assert!(internal.iter().all(|node| !node.is_leaf()));

    assert_eq!(
        tree.root(),
        digest("0bdf27bf7ec894ca7cadfe491ec1a3ece840f117989e8c5e9bd7086467bf6c38")
    );
}

#[test]
fn test_proof_for_padded_leaf() {
    let tree = Tree::build(["a", "b", "c"]).unwrap();
    let proof = tree.generate_proof(2).unwrap();

    let expected = [
        ProofStep::new(hash("c"), Position::Right, 0),
        ProofStep::new(combine(&hash("a"), &hash("b")), Position::Left, 1),
    ];
    assert_eq!(proof.steps(), &expected);
    assert!(tree.verify("c", &proof));
}

#[test]
fn test_five_items_known_root() {
    let tree = Tree::build(["a", "b", "c", "d", "e"]).unwrap();

    let lengths: Vec<usize> = tree.levels().iter().map(Level::len).collect();
    assert_eq!(lengths, vec![6, 4, 2, 1]);
    let widths: Vec<usize> = tree.levels().iter().map(Level::width).collect();
    assert_eq!(widths, vec![5, 3, 2, 1]);
    assert_eq!(
        tree.root(),
        digest("3615e586768e706351e326736e446554c49123d0e24c169d3ecf9b791a82636b")
    );
}

#[test]
fn test_level_invariant() {
    for n in 1..=40usize {
        let items: Vec<String> = (0..n).map(|i| format!("item-{i}")).collect();
        let tree = Tree::build(&items).unwrap();

        assert_eq!(tree.levels()[0].width(), n, "n = {n}");
        for pair in tree.levels().windows(2) {
            assert_eq!(pair[1].width(), pair[0].width().div_ceil(2), "n = {n}");
        }
        for level in &tree.levels()[..tree.height()] {
            assert_eq!(level.len() % 2, 0, "n = {n}");
            assert_eq!(level.is_padded(), level.width() % 2 == 1, "n = {n}");
        }
        assert_eq!(tree.levels().last().map(Level::len), Some(1));
        assert_eq!(tree.height(), expected_proof_length(n), "n = {n}");
    }
}

#[test]
fn test_internal_nodes_combine_children() {
    let items: Vec<String> = (0..11).map(|i| i.to_string()).collect();
    let tree = Tree::build(&items).unwrap();

    for (height, pair) in tree.levels().windows(2).enumerate() {
        let (below, above) = (&pair[0], &pair[1]);
        for node in above {
            let (left, right) = node.children().expect("internal node");
            let expected = combine(
                below.get(left).unwrap().digest(),
                below.get(right).unwrap().digest(),
            );
            assert_eq!(node.digest(), &expected, "height {}", height + 1);
        }
    }
}

#[test]
fn test_index_out_of_range() {
    let tree = Tree::build(["a", "b", "c"]).unwrap();

    assert_eq!(
        tree.generate_proof(3),
        Err(MerkleError::index_out_of_range(3, 3))
    );
    assert!(tree.generate_proof(usize::MAX).is_err());
    // The padding node is not a leaf that can be proven
    assert!(tree.prove(3).is_err());
}

#[test]
fn test_leaf_data_retained() {
    let tree = Tree::build(vec![String::from("alpha"), String::from("beta")]).unwrap();

    assert_eq!(tree.leaf_data(0).map(|b| &b[..]), Some(&b"alpha"[..]));
    assert_eq!(tree.leaf_data(1).map(|b| &b[..]), Some(&b"beta"[..]));
    assert_eq!(tree.leaf_data(2), None);
    assert_eq!(tree.data().len(), 2);
}

#[test]
fn test_prove_bundles_leaf() {
    let tree = Tree::build(["a", "b", "c", "d"]).unwrap();
    let leaf_proof = tree.prove(2).unwrap();

    assert_eq!(leaf_proof.index, 2);
    assert_eq!(&leaf_proof.leaf_data[..], b"c");
    assert_eq!(leaf_proof.proof, tree.generate_proof(2).unwrap());
    assert!(leaf_proof.verify(&tree.root()));
}

#[test]
fn test_deterministic_build() {
    let items = random_items(37);
    let first = Tree::build(&items).unwrap();
    let second = Tree::build(&items).unwrap();

    assert_eq!(first.root(), second.root());
    assert_eq!(first, second);
}

#[test]
fn test_order_sensitive() {
    let forward = Tree::build(["a", "b"]).unwrap();
    let reversed = Tree::build(["b", "a"]).unwrap();

    assert_ne!(forward.root(), reversed.root());
    assert_eq!(
        reversed.root(),
        digest("ab19ec537f09499b26f0f62eed7aefad46ab9f498e06a7328ce8e8ef90da6d86")
    );
}

#[test]
fn test_proof_against_other_root() {
    let tree = Tree::build(["a", "b", "c", "d"]).unwrap();
    let other = Tree::build(["a", "b", "c", "e"]).unwrap();
    let proof = tree.generate_proof(0).unwrap();

    assert!(verify_proof("a", &proof, &tree.root()));
    assert!(!verify_proof("a", &proof, &other.root()));
}

#[test]
fn test_proof_at_wrong_index() {
    let tree = Tree::build(["a", "b", "c", "d"]).unwrap();
    let proof = tree.generate_proof(0).unwrap();

    // "b" is committed, but not at leaf 0
    assert!(!tree.verify("b", &proof));
}

#[test]
fn test_all_proofs_random_data() {
    let items = random_items(100);
    let tree = Tree::build(&items).unwrap();

    for (i, item) in items.iter().enumerate() {
        let proof = tree.generate_proof(i).expect("Failed to generate proof");
        assert_eq!(proof.len(), tree.height());
        assert_eq!(proof.compute_root(item), tree.root());
        assert!(
            verify_proof(item, &proof, &tree.root()),
            "Proof verification failed for leaf {i}"
        );
    }
}

#[cfg(feature = "parallel")]
#[test]
fn test_parallel_build_matches_reference_vector() {
    let items: Vec<String> = (0..1000).map(|i| format!("leaf-{i}")).collect();
    let tree = Tree::build(&items).unwrap();

    // Fold the leaves sequentially with the same padding rule
    let mut level: Vec<Digest> = items.iter().map(|item| hash(item)).collect();
    while level.len() > 1 {
        if level.len() % 2 == 1 {
            level.push(level[level.len() - 1]);
        }
        level = level
            .chunks_exact(2)
            .map(|pair| combine(&pair[0], &pair[1]))
            .collect();
    }
    assert_eq!(tree.root(), level[0]);
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_roundtrip() {
    let tree = Tree::build(["a", "b", "c"]).unwrap();
    let leaf_proof = tree.prove(2).unwrap();

    let json = serde_json::to_string(&leaf_proof.proof).unwrap();
    assert!(json.contains("\"position\":\"right\""));
    assert!(json.contains(&hash("c").to_hex()));

    let decoded: Proof = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, leaf_proof.proof);

    let stats = serde_json::to_value(tree.statistics()).unwrap();
    assert_eq!(stats["leaf_count"], 3);
    assert_eq!(stats["root"], tree.root().to_hex());
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_rejects_malformed_proofs() {
    let sibling = hash("b").to_hex();

    let missing_level = format!(r#"[{{"sibling":"{sibling}","position":"right"}}]"#);
    assert!(serde_json::from_str::<Proof>(&missing_level).is_err());

    let bad_position = format!(r#"[{{"sibling":"{sibling}","position":"up","level":0}}]"#);
    assert!(serde_json::from_str::<Proof>(&bad_position).is_err());

    let bad_digest = r#"[{"sibling":"beef","position":"left","level":0}]"#;
    assert!(serde_json::from_str::<Proof>(bad_digest).is_err());

    let misordered = format!(r#"[{{"sibling":"{sibling}","position":"left","level":1}}]"#);
    assert!(serde_json::from_str::<Proof>(&misordered).is_err());
}

#[test]
fn test_tree_is_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Tree>();
    assert_send_sync::<Proof>();
}

fn items_strategy() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[a-z0-9]{0,12}", 1..48)
}

proptest! {
    #[test]
    fn test_every_leaf_verifies(items in items_strategy()) {
        let tree = Tree::build(&items).unwrap();
        prop_assert_eq!(tree.leaf_count(), items.len());
        prop_assert_eq!(tree.depth(), tree.height() + 1);

        for (i, item) in items.iter().enumerate() {
            let proof = tree.generate_proof(i).unwrap();
            prop_assert_eq!(proof.len(), tree.height());
            prop_assert_eq!(proof.compute_root(item), tree.root());
            if tree.height() > 0 {
                prop_assert!(verify_proof(item, &proof, &tree.root()));
            }
        }
        prop_assert!(tree.generate_proof(items.len()).is_err());
    }

    #[test]
    fn test_tampered_leaf_rejected(
        items in proptest::collection::vec("[a-z0-9]{1,12}", 2..48),
        index in any::<prop::sample::Index>(),
        suffix in "[A-Z]{1,4}",
    ) {
        let tree = Tree::build(&items).unwrap();
        let i = index.index(items.len());
        let proof = tree.generate_proof(i).unwrap();

        // Uppercase suffix guarantees the value differs
        let tampered = format!("{}{}", items[i], suffix);
        prop_assert!(!verify_proof(&tampered, &proof, &tree.root()));
    }

    #[test]
    fn test_swap_changes_root(
        items in proptest::collection::vec("[a-z0-9]{1,12}", 2..32),
        a in any::<prop::sample::Index>(),
        b in any::<prop::sample::Index>(),
    ) {
        let (a, b) = (a.index(items.len()), b.index(items.len()));
        prop_assume!(items[a] != items[b]);

        let mut swapped = items.clone();
        swapped.swap(a, b);

        let original = Tree::build(&items).unwrap();
        let reordered = Tree::build(&swapped).unwrap();
        prop_assert_ne!(original.root(), reordered.root());
    }
}
