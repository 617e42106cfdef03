mod common;

use std::mem;
use std::panic::{self, AssertUnwindSafe};

use rand::seq::SliceRandom;
use rbtree::RBTree;

use crate::common::{Counts, Spy, init_tracing};

fn shuffled(range: std::ops::Range<u32>) -> Vec<u32> {
    let mut nums = range.collect::<Vec<_>>();
    nums.shuffle(&mut rand::rng());
    nums
}

#[test]
fn clone_keeps_shape() {
    init_tracing();

    let tree: RBTree<u32> = shuffled(0..1000).into_iter().collect();
    let copy = tree.clone();

    copy.assert_valid();
    assert_eq!(copy.size(), tree.size());
    assert_eq!(copy, tree);

    let mut a = tree.begin();
    let mut b = copy.begin();
    while !a.is_end() {
        assert_eq!(a.get(), b.get());
        assert_eq!(a.color(), b.color());
        a.move_next();
        b.move_next();
    }
    assert!(b.is_end());
}

#[test]
fn clone_from_reuses_nodes() {
    init_tracing();

    for (src_len, dst_len) in [(0, 100), (100, 0), (100, 100), (300, 50), (50, 300)] {
        let source: RBTree<u32> = shuffled(0..src_len).into_iter().collect();
        let mut target: RBTree<u32> = shuffled(1000..1000 + dst_len).into_iter().collect();

        target.clone_from(&source);

        target.assert_valid();
        assert_eq!(target.size(), source.size());
        assert_eq!(target, source);
    }
}

#[test]
fn clone_from_drops_each_value_once() {
    init_tracing();

    let counts = Counts::shared();

    let mut source = RBTree::new();
    for key in shuffled(0..200) {
        source.insert(Spy::new(key, &counts), false);
    }
    let mut target = RBTree::new();
    for key in shuffled(0..500) {
        target.insert(Spy::new(key, &counts), false);
    }

    target.clone_from(&source);
    target.assert_valid();

    // every value of `target` was either reassigned in place, dropped, or replaced by a clone
    let cloned = counts.clones();
    assert!(cloned <= 200);
    assert_eq!(counts.drops(), 500 - (200 - cloned));
    assert!(target.iter().map(|spy| spy.key).eq(0..200));

    drop(source);
    drop(target);
    assert_eq!(counts.drops(), 700 + cloned);
}

#[test]
fn panicking_clone_frees_partial_copy() {
    init_tracing();

    let counts = Counts::shared();
    let mut source = RBTree::new();
    for key in shuffled(0..100) {
        source.insert(Spy::new(key, &counts), false);
    }

    counts.poison(40);
    let res = panic::catch_unwind(AssertUnwindSafe(|| source.clone()));
    assert!(res.is_err());

    source.assert_valid();
    assert_eq!(source.size(), 100);

    drop(source);
    // every value that was created, including the partial copy, is gone again
    assert_eq!(counts.drops(), 100 + counts.clones());
}

#[test]
fn panicking_clone_from_leaves_target_empty() {
    init_tracing();

    let counts = Counts::shared();
    let mut source = RBTree::new();
    for key in shuffled(0..100) {
        source.insert(Spy::new(key, &counts), false);
    }
    let mut target = RBTree::new();
    for key in shuffled(1000..1030) {
        target.insert(Spy::new(key, &counts), false);
    }

    counts.poison(40);
    let res = panic::catch_unwind(AssertUnwindSafe(|| target.clone_from(&source)));
    assert!(res.is_err());

    target.assert_valid();
    assert!(target.is_empty());
    assert_eq!(target.iter().count(), 0);
    assert_eq!(counts.drops(), 30 + counts.clones());

    // the target is still usable afterwards
    target.insert(Spy::new(7, &counts), false);
    target.assert_valid();
    assert_eq!(target.size(), 1);

    drop(source);
    drop(target);
    assert_eq!(counts.drops(), 131 + counts.clones());
}

#[test]
fn take_and_swap() {
    init_tracing();

    let mut a: RBTree<u32> = (0..10).collect();
    let mut b: RBTree<u32> = (100..105).collect();

    a.swap(&mut b);
    assert_eq!(a.size(), 5);
    assert_eq!(b.size(), 10);
    assert_eq!(a.first(), Some(&100));
    assert_eq!(b.first(), Some(&0));
    a.assert_valid();
    b.assert_valid();

    let taken = mem::take(&mut b);
    assert!(b.is_empty());
    assert_eq!(b.begin(), b.end());
    assert_eq!(taken.size(), 10);
    taken.assert_valid();

    let moved = taken;
    assert_eq!(moved.iter().copied().collect::<Vec<_>>(), (0..10).collect::<Vec<_>>());
}
