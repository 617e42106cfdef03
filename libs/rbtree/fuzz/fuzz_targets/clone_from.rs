#![no_main]

use libfuzzer_sys::fuzz_target;
use rbtree::RBTree;

fuzz_target!(|input: (Vec<u16>, Vec<u16>)| {
    let source: RBTree<u16> = input.0.into_iter().collect();
    let mut target: RBTree<u16> = input.1.into_iter().collect();

    target.clone_from(&source);

    target.assert_valid();
    assert_eq!(target, source);
});
