mod common;

use proptest::prelude::*;
use rbtree::RBTree;

use crate::common::init_tracing;

#[derive(Debug, Clone)]
enum Op {
    Insert { value: u16, keep_unique: bool },
    Remove(u16),
    PopFirst,
    PopLast,
    RemoveAt(usize),
}

fn op() -> impl Strategy<Value = Op> {
    // a narrow value range makes duplicates and hits on removal likely
    prop_oneof![
        4 => (0..256u16, any::<bool>()).prop_map(|(value, keep_unique)| Op::Insert { value, keep_unique }),
        2 => (0..256u16).prop_map(Op::Remove),
        1 => Just(Op::PopFirst),
        1 => Just(Op::PopLast),
        1 => any::<usize>().prop_map(Op::RemoveAt),
    ]
}

/// Applies `op` to both the tree and a sorted `Vec` acting as the reference model.
fn apply(tree: &mut RBTree<u16>, model: &mut Vec<u16>, op: Op) {
    match op {
        Op::Insert { value, keep_unique } => {
            let (cursor, inserted) = tree.insert(value, keep_unique);
            assert_eq!(cursor.get(), Some(&value));

            assert_eq!(inserted, !(keep_unique && model.contains(&value)));
            if inserted {
                let idx = model.partition_point(|v| *v <= value);
                model.insert(idx, value);
            }
        }
        Op::Remove(value) => {
            let expected = model
                .iter()
                .position(|v| *v == value)
                .map(|idx| model.remove(idx));
            assert_eq!(tree.remove(&value), expected);
        }
        Op::PopFirst => {
            let expected = (!model.is_empty()).then(|| model.remove(0));
            assert_eq!(tree.pop_first(), expected);
        }
        Op::PopLast => assert_eq!(tree.pop_last(), model.pop()),
        Op::RemoveAt(idx) => {
            if model.is_empty() {
                assert_eq!(tree.begin_mut().remove_current(), None);
                return;
            }
            let idx = idx % model.len();

            let mut cursor = tree.begin_mut();
            for _ in 0..idx {
                cursor.move_next();
            }
            assert_eq!(cursor.remove_current(), Some(model.remove(idx)));
            assert_eq!(cursor.get(), model.get(idx));
        }
    }
}

proptest! {
    #[test]
    fn matches_sorted_vec(ops in proptest::collection::vec(op(), 0..400)) {
        init_tracing();

        let mut tree = RBTree::new();
        let mut model = Vec::new();

        for op in ops {
            tracing::debug!("applying {op:?}");
            apply(&mut tree, &mut model, op);

            tree.assert_valid();
            prop_assert_eq!(tree.size(), model.len());
        }

        prop_assert!(tree.iter().eq(model.iter()));
        prop_assert!(tree.iter().rev().eq(model.iter().rev()));
    }

    #[test]
    fn clone_from_matches_source(
        source in proptest::collection::vec(any::<u16>(), 0..300),
        target in proptest::collection::vec(any::<u16>(), 0..300),
    ) {
        let source: RBTree<u16> = source.into_iter().collect();
        let mut target: RBTree<u16> = target.into_iter().collect();

        target.clone_from(&source);
        target.assert_valid();
        prop_assert_eq!(&target, &source);

        let copy = source.clone();
        copy.assert_valid();
        prop_assert_eq!(copy, source);
    }
}
