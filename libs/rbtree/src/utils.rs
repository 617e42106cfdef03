use crate::node::{Link, Node, links};
use core::fmt;
use core::ptr::NonNull;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

impl Side {
    pub(crate) fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Returns the sibling of `node` (which may be a missing child) under `parent`, together with the
/// side the sibling is on.
pub(crate) unsafe fn get_sibling<T>(node: Link<T>, parent: NonNull<Node<T>>) -> (Link<T>, Side) {
    unsafe {
        if let Some(node) = node {
            debug_assert_eq!(
                links(node).parent(),
                Some(parent),
                "node {node:?} is not a child of {parent:?}"
            );
        }

        let parent_lks = links(parent);
        if parent_lks.left() == node {
            (parent_lks.right(), Side::Right)
        } else {
            (parent_lks.left(), Side::Left)
        }
    }
}

pub(crate) unsafe fn find_minimum<T>(mut curr: NonNull<Node<T>>) -> NonNull<Node<T>> {
    unsafe {
        while let Some(left) = links(curr).left() {
            curr = left;
        }
    }

    curr
}

pub(crate) unsafe fn find_maximum<T>(mut curr: NonNull<Node<T>>) -> NonNull<Node<T>> {
    unsafe {
        while let Some(right) = links(curr).right() {
            curr = right;
        }
    }

    curr
}

/// Returns the in-order successor of `node`, or `None` if `node` is the greatest element.
pub(crate) unsafe fn next<T>(node: NonNull<Node<T>>) -> Link<T> {
    unsafe {
        // If we have a right child, its least descendant is our next node
        if let Some(right) = links(node).right() {
            return Some(find_minimum(right));
        }

        let mut curr = node;
        while let Some(parent) = links(curr).parent() {
            // the first ancestor we reach from its left side is our next node
            if links(parent).right() != Some(curr) {
                return Some(parent);
            }

            curr = parent;
        }

        // we reached the tree root without finding a next node
        None
    }
}

/// Returns the in-order predecessor of `node`, or `None` if `node` is the least element.
pub(crate) unsafe fn prev<T>(node: NonNull<Node<T>>) -> Link<T> {
    unsafe {
        // If we have a left child, its greatest descendant is our previous node
        if let Some(left) = links(node).left() {
            return Some(find_maximum(left));
        }

        let mut curr = node;
        while let Some(parent) = links(curr).parent() {
            // the first ancestor we reach from its right side is our previous node
            if links(parent).left() != Some(curr) {
                return Some(parent);
            }

            curr = parent;
        }

        // we reached the tree root without finding a previous node
        None
    }
}
