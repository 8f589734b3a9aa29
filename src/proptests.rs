use super::*;

use proptest::prelude::*;
use std::collections::BTreeMap;

#[derive(Clone, Debug)]
enum Op {
    Insert(Key, u32),
    Remove(Key),
    Get(Key),
}

// A narrow key range makes duplicates and hits on remove likely.
fn key_strategy() -> impl Strategy<Value = Key> + Clone {
    -64..64
}

fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
    let key = key_strategy();
    let op = prop_oneof![
        50 => (key.clone(), any::<u32>()).prop_map(|(k, v)| Op::Insert(k, v)),
        30 => key.clone().prop_map(Op::Remove),
        20 => key.prop_map(Op::Get),
    ];
    prop::collection::vec(op, 0..=500)
}

// Height of an AVL tree with n nodes is below 1.4405 * log2(n + 2) - 0.3277.
fn avl_height_bound(len: usize) -> f64 {
    1.4405 * ((len + 2) as f64).log2() - 0.3277
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_equivalence(ops in ops_strategy()) {
        let mut t: AvlTreeMap<u32> = AvlTreeMap::new();
        let mut m: BTreeMap<Key, u32> = BTreeMap::new();

        for op in ops {
            match op {
                Op::Insert(key, value) => {
                    let inserted = t.insert(key, value);
                    prop_assert_eq!(inserted, !m.contains_key(&key));
                    m.entry(key).or_insert(value);
                }
                Op::Remove(key) => {
                    prop_assert_eq!(t.remove(key), m.remove(&key));
                }
                Op::Get(key) => {
                    prop_assert_eq!(t.get(key), m.get(&key));
                }
            }

            prop_assert_eq!(t.len(), m.len());
            prop_assert_eq!(t.check_consistency(), Ok(()));
            prop_assert_eq!(t.height(), height(t.root()));
            prop_assert!(t.height() as f64 <= avl_height_bound(t.len()));
        }

        let got: Vec<(Key, u32)> = t.iter().map(|(k, v)| (k, *v)).collect();
        let expected: Vec<(Key, u32)> = m.into_iter().collect();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn prop_free_functions(keys in prop::collection::vec(key_strategy(), 0..=200), victim in key_strategy()) {
        let mut root: Link<Key> = None;
        for &key in &keys {
            root = Some(insert(root, key, key));
        }
        let len = validate(root.as_deref());
        prop_assert!(len.is_ok());

        root = delete(root, victim);
        prop_assert!(search(root.as_deref(), victim).is_none());
        for &key in keys.iter().filter(|&&key| key != victim) {
            prop_assert_eq!(search(root.as_deref(), key).map(|node| *node.value()), Some(key));
        }
        let present = usize::from(keys.contains(&victim));
        prop_assert_eq!(validate(root.as_deref()), len.map(|len| len - present));
        release(root);
    }
}
