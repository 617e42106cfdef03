mod common;

use rand::seq::SliceRandom;
use rbtree::RBTree;

use crate::common::{Counts, Spy, init_tracing};

#[test]
fn remove_root_of_three() {
    init_tracing();

    let mut tree: RBTree<u32> = [5, 3, 8].into_iter().collect();
    assert_eq!(tree.end().peek_prev(), Some(&8));

    let mut root = tree.find_mut(&5);
    assert_eq!(root.remove_current(), Some(5));
    assert_eq!(root.get(), Some(&8));

    tree.assert_valid();
    assert_eq!(tree.size(), 2);
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [3, 8]);
}

#[test]
fn remove_missing_and_at_end() {
    init_tracing();

    let mut tree: RBTree<u32> = [1, 2, 3].into_iter().collect();

    assert_eq!(tree.remove(&4), None);
    assert_eq!(tree.end_mut().remove_current(), None);
    assert_eq!(tree.find_mut(&7).remove_current(), None);

    tree.assert_valid();
    assert_eq!(tree.size(), 3);
}

#[test]
fn remove_last_moves_cursor_to_end() {
    init_tracing();

    let mut tree: RBTree<u32> = (0..10).collect();

    let mut cursor = tree.find_mut(&9);
    assert_eq!(cursor.remove_current(), Some(9));
    assert!(cursor.is_end());

    tree.assert_valid();
    assert_eq!(tree.last(), Some(&8));
}

#[test]
fn drain_through_cursor() {
    init_tracing();

    let mut nums = (0..500).collect::<Vec<u32>>();
    nums.shuffle(&mut rand::rng());
    let mut tree: RBTree<u32> = nums.into_iter().collect();

    let mut cursor = tree.begin_mut();
    let mut expected = 0;
    while let Some(value) = cursor.remove_current() {
        assert_eq!(value, expected);
        expected += 1;
    }
    assert_eq!(expected, 500);
    assert!(tree.is_empty());
    tree.assert_valid();
}

#[test]
fn pop_from_both_ends() {
    init_tracing();

    let mut tree: RBTree<u32> = (0..100).collect();

    for i in 0..50 {
        assert_eq!(tree.pop_first(), Some(i));
        assert_eq!(tree.pop_last(), Some(99 - i));
        tree.assert_valid();
    }
    assert_eq!(tree.pop_first(), None);
    assert_eq!(tree.pop_last(), None);
}

#[test]
fn removed_values_are_dropped_once() {
    init_tracing();

    let counts = Counts::shared();
    let mut tree = RBTree::new();
    for key in 0..100 {
        tree.insert(Spy::new(key, &counts), false);
    }

    let removed = tree.pop_first().unwrap();
    assert_eq!(removed.key, 0);
    assert_eq!(counts.drops(), 0);
    drop(removed);
    assert_eq!(counts.drops(), 1);

    tree.clear();
    assert_eq!(counts.drops(), 100);
    assert!(tree.is_empty());
    tree.assert_valid();
}

#[test]
fn clear_and_drop_large_trees() {
    init_tracing();

    let counts = Counts::shared();

    let mut tree = RBTree::new();
    for key in 0..100_000 {
        tree.insert(Spy::new(key, &counts), false);
    }
    tree.clear();
    assert_eq!(counts.drops(), 100_000);
    assert_eq!(tree.size(), 0);

    // the tree stays usable after a clear
    tree.insert(Spy::new(1, &counts), false);
    tree.assert_valid();

    let mut other = RBTree::new();
    for key in 0..50_000 {
        other.insert(Spy::new(key, &counts), false);
    }
    drop(other);
    drop(tree);
    assert_eq!(counts.drops(), 150_001);
}
