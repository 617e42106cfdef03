#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use rbtree::RBTree;

#[derive(Debug, Arbitrary)]
enum Op {
    Insert { value: u16, keep_unique: bool },
    Remove(u16),
    PopFirst,
    PopLast,
    /// Removes through a cursor that walked `steps` elements forward from the start.
    RemoveAt(u8),
}

fuzz_target!(|ops: Vec<Op>| {
    let mut tree: RBTree<u16> = RBTree::new();
    let mut model: Vec<u16> = Vec::new();

    for op in ops {
        match op {
            Op::Insert { value, keep_unique } => {
                let (cursor, inserted) = tree.insert(value, keep_unique);
                assert_eq!(cursor.get(), Some(&value));

                let exists = model.contains(&value);
                assert_eq!(inserted, !(keep_unique && exists));
                if inserted {
                    let idx = model.partition_point(|v| *v <= value);
                    model.insert(idx, value);
                }
            }
            Op::Remove(value) => {
                let removed = tree.remove(&value);
                match model.iter().position(|v| *v == value) {
                    Some(idx) => {
                        model.remove(idx);
                        assert_eq!(removed, Some(value));
                    }
                    None => assert_eq!(removed, None),
                }
            }
            Op::PopFirst => {
                let expected = (!model.is_empty()).then(|| model.remove(0));
                assert_eq!(tree.pop_first(), expected);
            }
            Op::PopLast => assert_eq!(tree.pop_last(), model.pop()),
            Op::RemoveAt(steps) => {
                let mut cursor = tree.begin_mut();
                for _ in 0..steps {
                    cursor.move_next();
                }

                let expected_next = cursor.peek_next().copied();
                let removed = cursor.remove_current();
                if let Some(value) = removed {
                    let idx = model.iter().position(|v| *v == value).unwrap();
                    model.remove(idx);
                    assert_eq!(cursor.get().copied(), expected_next);
                }
            }
        }

        tree.assert_valid();
        assert_eq!(tree.size(), model.len());
    }

    assert!(tree.iter().eq(model.iter()));
});
