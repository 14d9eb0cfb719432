use ordered_tree::boxed::Tree;

use std::collections::BTreeMap;

use crate::Op;

/// Builds a tree mapping each key to itself. Duplicates in `keys` exercise
/// the silent-drop path.
fn build(keys: &[i8]) -> Tree<i8, i8> {
    let mut tree = Tree::new();
    for &key in keys {
        tree.insert(key, key);
    }
    tree
}

/// Applies a set of operations to a tree and a reference map. The map uses
/// first-write-wins inserts to mirror the tree's duplicate policy.
fn do_ops<K, V>(ops: &[Op<K, V>], tree: &mut Tree<K, V>, map: &mut BTreeMap<K, V>) -> bool
where
    K: Ord + Clone,
    V: PartialEq + Clone,
{
    for op in ops {
        match op {
            Op::Insert(k, v) => {
                tree.insert(k.clone(), v.clone());
                map.entry(k.clone()).or_insert_with(|| v.clone());
            }
            Op::Iter => {
                if !tree.iter().eq(map.iter()) {
                    return false;
                }
            }
            Op::Height => {
                let keys = map.len();
                let height = tree.height();
                if height > keys {
                    return false;
                }
                if height < 64 && keys > (1usize << height) - 1 {
                    return false;
                }
            }
        }
    }
    true
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8, i8>>) -> bool {
        let mut tree = Tree::new();
        let mut map = BTreeMap::new();

        do_ops(&ops, &mut tree, &mut map)
            && map.keys().all(|key| tree.find(key) == map.get(key))
    }
}

quickcheck::quickcheck! {
    fn iteration_is_sorted_and_deduplicated(xs: Vec<i8>) -> bool {
        let tree = build(&xs);

        let mut expected = xs;
        expected.sort_unstable();
        expected.dedup();

        tree.keys().copied().eq(expected)
    }
}

quickcheck::quickcheck! {
    fn contains(xs: Vec<i8>) -> bool {
        let tree = build(&xs);

        xs.iter().all(|x| tree.find(x) == Some(x))
    }
}

quickcheck::quickcheck! {
    fn first_payload_wins(entries: Vec<(i8, i8)>) -> bool {
        let mut tree = Tree::new();
        let mut map = BTreeMap::new();
        for &(key, payload) in &entries {
            tree.insert(key, payload);
            map.entry(key).or_insert(payload);
        }

        map.iter().all(|(key, payload)| tree.find(key) == Some(payload))
            && tree.iter().eq(map.iter())
    }
}

quickcheck::quickcheck! {
    fn reinserting_every_key_changes_nothing(xs: Vec<i8>) -> bool {
        let mut tree = build(&xs);
        let keys_before: Vec<i8> = tree.keys().copied().collect();
        let height_before = tree.height();

        for &x in &xs {
            tree.insert(x, x.wrapping_add(1));
        }

        tree.keys().copied().eq(keys_before)
            && tree.height() == height_before
            && xs.iter().all(|x| tree.find(x) == Some(x))
    }
}

quickcheck::quickcheck! {
    fn ascending_inserts_build_a_chain(n: u8) -> bool {
        let mut tree = Tree::new();
        for key in 0..n {
            tree.insert(key, ());
        }

        tree.height() == n as usize
    }
}

quickcheck::quickcheck! {
    fn height_bounds(xs: Vec<i8>) -> bool {
        let tree = build(&xs);
        let keys = tree.keys().count();
        let height = tree.height();

        // A tree of height h holds between h and 2^h - 1 keys.
        height <= keys && keys <= (1usize << height) - 1
    }
}
