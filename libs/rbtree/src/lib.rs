//! # A red-black tree with pointer-walking cursors.
//!
//! A Rust implementation of red-black trees, a *self-balancing binary search tree* that keeps its
//! elements sorted and guarantees a height of at most `2 log2(n + 1)`. Insertion, lookup and
//! removal all complete in logarithmic time.
//!
//! Nodes carry a pointer to their parent in addition to their two children, which lets [`Cursor`]s
//! step to the in-order successor or predecessor using only the links of the nodes around them,
//! without an auxiliary stack. A full traversal touches every link at most twice.
//!
//! This crate is self-contained and `no_std` (it requires `alloc`).
//!
//! ## when to use this
//!
//! - **want a sorted collection with stable positions** - a [`CursorMut`] stays on its element
//!   while you walk back and forth, and removing through it lands on the next element.
//! - **need duplicates** - values comparing equal may be stored side by side, or rejected on a
//!   per-insert basis (see [`RBTree::insert`]).
//! - **want to control allocation** - nodes are allocated through an [`Allocator`] type parameter,
//!   so arenas or pools can be plugged in without touching the balancing logic. Allocation failure
//!   can be observed through [`RBTree::try_insert`] and [`RBTree::try_clone`].
//!
//! ## when not to use this
//!
//! - **mostly iterate, rarely search** - a sorted `Vec` has far better cache behaviour.
//! - **are on stable Rust** - the allocator parameter requires the nightly `allocator_api`
//!   feature.
//!
//! ## features
//!
//! The following features are available:
//!
//! | Feature | Default | Explanation                                                                            |
//! |:--------|:--------|:---------------------------------------------------------------------------------------|
//! | `dot`   | `false` | Enables the `RBTree::dot` method, which allows display of the tree in [graphviz format] |
//!
//! [graphviz format]: https://graphviz.org/doc/info/lang.html

#![cfg_attr(not(test), no_std)]
#![feature(allocator_api)]

extern crate alloc;

mod clone;
mod cursors;
#[cfg(feature = "dot")]
mod dot;
mod iter;
mod node;
mod utils;

use crate::node::{Link, Node, color_of, links, value_of};
use crate::utils::Side;
use alloc::alloc::{Global, handle_alloc_error};
use core::alloc::{AllocError, Allocator, Layout};
use core::borrow::Borrow;
use core::cmp::Ordering;
use core::marker::PhantomData;
use core::ptr::NonNull;
use core::{fmt, mem};

pub use cursors::{Cursor, CursorMut};
#[cfg(feature = "dot")]
pub use dot::Dot;
pub use iter::{IntoIter, Iter};
pub use node::Color;

/// A red-black tree.
///
/// This data structure supports efficient O(log n) lookup of elements and may be used for binary
/// search. All operations complete in logarithmic time.
///
/// Elements are ordered by their [`Ord`] implementation. Elements that compare equal may be
/// stored multiple times; later insertions are placed after earlier ones.
///
/// The tree owns its nodes, which are allocated through `A`. Child links own their subtree while
/// parent links are plain back references used for walking upwards.
pub struct RBTree<T, A: Allocator = Global> {
    pub(crate) root: Link<T>,
    size: usize,
    alloc: A,
    _marker: PhantomData<Node<T>>,
}

// Safety: the tree owns all of its nodes, handing it to another thread hands over the elements.
unsafe impl<T: Send, A: Allocator + Send> Send for RBTree<T, A> {}
// Safety: shared references to the tree only ever read links and elements.
unsafe impl<T: Sync, A: Allocator + Sync> Sync for RBTree<T, A> {}

impl<T, A: Allocator> Drop for RBTree<T, A> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T, A: Allocator + Default> Default for RBTree<T, A> {
    fn default() -> Self {
        Self::new_in(A::default())
    }
}

impl<T> RBTree<T> {
    /// Creates a new, empty tree using the global allocator.
    #[must_use]
    pub const fn new() -> Self {
        Self::new_in(Global)
    }
}

impl<T, A: Allocator> RBTree<T, A> {
    /// Creates a new, empty tree that allocates its nodes from `alloc`.
    #[must_use]
    pub const fn new_in(alloc: A) -> Self {
        Self {
            root: None,
            size: 0,
            alloc,
            _marker: PhantomData,
        }
    }

    /// Returns a reference to the underlying allocator.
    pub fn allocator(&self) -> &A {
        &self.alloc
    }

    /// Returns the number of entries in the tree.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the tree contains no entries.
    pub fn is_empty(&self) -> bool {
        debug_assert_eq!(self.root.is_none(), self.size() == 0);
        self.size() == 0
    }

    /// Returns a `Cursor` pointing to the least element, or the end position if the tree is empty.
    pub fn begin(&self) -> Cursor<'_, T, A> {
        Cursor {
            current: self.root.map(|root| unsafe { utils::find_minimum(root) }),
            tree: self,
        }
    }

    /// Returns a `CursorMut` pointing to the least element, or the end position if the tree is
    /// empty.
    pub fn begin_mut(&mut self) -> CursorMut<'_, T, A> {
        CursorMut {
            current: self.root.map(|root| unsafe { utils::find_minimum(root) }),
            tree: self,
        }
    }

    /// Returns a `Cursor` pointing to the end position, which holds no element.
    pub fn end(&self) -> Cursor<'_, T, A> {
        Cursor {
            current: None,
            tree: self,
        }
    }

    /// Returns a `CursorMut` pointing to the end position, which holds no element.
    pub fn end_mut(&mut self) -> CursorMut<'_, T, A> {
        CursorMut {
            current: None,
            tree: self,
        }
    }

    /// Returns a reference to the least element in the tree.
    pub fn first(&self) -> Option<&T> {
        self.begin().get()
    }

    /// Returns a reference to the greatest element in the tree.
    pub fn last(&self) -> Option<&T> {
        let root = self.root?;
        Some(unsafe { value_of(utils::find_maximum(root)) })
    }

    /// Removes and returns the least element in the tree.
    pub fn pop_first(&mut self) -> Option<T> {
        let root = self.root?;
        unsafe {
            let node = utils::find_minimum(root);
            Some(self.remove_internal(node))
        }
    }

    /// Removes and returns the greatest element in the tree.
    pub fn pop_last(&mut self) -> Option<T> {
        let root = self.root?;
        unsafe {
            let node = utils::find_maximum(root);
            Some(self.remove_internal(node))
        }
    }

    /// Gets an iterator over the entries in the tree, in sorted order.
    pub fn iter(&self) -> Iter<'_, T, A> {
        Iter {
            head: self.root.map(|root| unsafe { utils::find_minimum(root) }),
            tail: self.root.map(|root| unsafe { utils::find_maximum(root) }),
            len: self.size,
            _tree: self,
        }
    }

    /// Returns a `Cursor` pointing to an element equal to the given key, or the end position if
    /// there is no such element.
    ///
    /// If several elements compare equal, the first one encountered on the way down from the root
    /// is returned.
    ///
    /// The key may be any borrowed form of the element type, but the ordering on the borrowed
    /// form *must* match the ordering on the element type.
    pub fn find<Q>(&self, key: &Q) -> Cursor<'_, T, A>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        Cursor {
            current: self.find_internal(key),
            tree: self,
        }
    }

    /// Returns a `CursorMut` pointing to an element equal to the given key, or the end position if
    /// there is no such element.
    ///
    /// The key may be any borrowed form of the element type, but the ordering on the borrowed
    /// form *must* match the ordering on the element type.
    pub fn find_mut<Q>(&mut self, key: &Q) -> CursorMut<'_, T, A>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        CursorMut {
            current: self.find_internal(key),
            tree: self,
        }
    }

    /// Returns a reference to an element equal to the given key.
    pub fn get<Q>(&self, key: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find_internal(key).map(|node| unsafe { value_of(node) })
    }

    /// Returns `true` if the tree contains an element equal to the given key.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find_internal(key).is_some()
    }

    /// Inserts a new element into the tree.
    ///
    /// When `keep_unique` is `true` and an equal element is already present, the tree is left
    /// untouched and the returned cursor points to the existing element. Otherwise the element is
    /// inserted after all elements that compare equal to it.
    ///
    /// Returns a cursor pointing to the element and whether the element was inserted.
    ///
    /// # Panics
    ///
    /// Calls [`handle_alloc_error`] if the allocator fails to provide memory for the new node. Use
    /// [`RBTree::try_insert`] to handle allocation failures instead.
    pub fn insert(&mut self, value: T, keep_unique: bool) -> (CursorMut<'_, T, A>, bool)
    where
        T: Ord,
    {
        match self.try_insert(value, keep_unique) {
            Ok(res) => res,
            Err(AllocError) => handle_alloc_error(Layout::new::<Node<T>>()),
        }
    }

    /// Inserts a new element into the tree, returning an error if the allocation of the node
    /// failed.
    ///
    /// See [`RBTree::insert`] for the meaning of `keep_unique` and the returned values.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the allocator fails. The tree is unchanged in that case.
    pub fn try_insert(
        &mut self,
        value: T,
        keep_unique: bool,
    ) -> Result<(CursorMut<'_, T, A>, bool), AllocError>
    where
        T: Ord,
    {
        unsafe {
            let mut parent = None;
            let mut side = Side::Left;
            let mut curr = self.root;

            while let Some(node) = curr {
                side = match value.cmp(value_of(node)) {
                    Ordering::Equal if keep_unique => {
                        let cursor = CursorMut {
                            current: Some(node),
                            tree: self,
                        };
                        return Ok((cursor, false));
                    }
                    Ordering::Less => Side::Left,
                    Ordering::Equal | Ordering::Greater => Side::Right,
                };

                parent = Some(node);
                curr = links(node).child(side);
            }

            // no links may change before this point
            let ptr = self.alloc_node(value)?;

            if let Some(parent) = parent {
                links(ptr).replace_parent(Some(parent));
                links(parent).replace_child(side, Some(ptr));
                self.balance_after_insert(ptr);
            } else {
                links(ptr).set_color(Color::Black);
                self.root = Some(ptr);
            }

            self.size += 1;

            let cursor = CursorMut {
                current: Some(ptr),
                tree: self,
            };
            Ok((cursor, true))
        }
    }

    /// Removes an element equal to the given key from the tree, returning it if there was one.
    ///
    /// The key may be any borrowed form of the element type, but the ordering on the borrowed
    /// form *must* match the ordering on the element type.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let node = self.find_internal(key)?;
        // Safety: `find_internal` only returns nodes of this tree
        Some(unsafe { self.remove_internal(node) })
    }

    /// Removes all elements from the tree.
    ///
    /// Nodes are freed bottom-up while walking the parent links, so this neither recurses nor
    /// allocates.
    pub fn clear(&mut self) {
        if let Some(root) = self.root.take() {
            // Safety: the root was just unlinked, nothing else references the subtree
            unsafe {
                self.free_subtree(root);
            }
        }
        self.size = 0;
    }

    /// Swaps the contents of two trees in O(1).
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Returns a type which renders the tree in [graphviz format] when formatted.
    ///
    /// [graphviz format]: https://graphviz.org/doc/info/lang.html
    #[cfg(feature = "dot")]
    pub fn dot(&self) -> Dot<'_, T, A> {
        Dot { tree: self }
    }

    /// Asserts as many of the tree's invariants as possible.
    ///
    /// This checks that the links of every node are consistent, that the red-black coloring rules
    /// hold, that the elements are sorted and that the stored size matches the number of nodes.
    ///
    /// # Panics
    ///
    /// Panics with a description of the first violated invariant.
    #[track_caller]
    pub fn assert_valid(&self)
    where
        T: Ord,
    {
        let Some(root) = self.root else {
            assert_eq!(self.size, 0, "empty tree must have size 0, but has size {}", self.size);
            return;
        };

        unsafe {
            let root_links = links(root);
            assert_eq!(root_links.parent(), None, "root {root:?} must not have a parent");
            assert_eq!(
                root_links.color(),
                Color::Black,
                "Red-black violation: root {root:?} must be black"
            );

            let (count, _) = Self::assert_valid_inner(root);
            assert_eq!(
                count, self.size,
                "Size violation: tree reports {} elements but {count} nodes are reachable",
                self.size
            );
        }

        assert!(
            self.iter().is_sorted(),
            "Ordering violation: in-order traversal is not sorted"
        );
    }

    /// Returns the number of nodes and the black-height of the subtree rooted at `node`.
    #[track_caller]
    unsafe fn assert_valid_inner(node: NonNull<Node<T>>) -> (usize, usize)
    where
        T: Ord,
    {
        unsafe {
            let node_links = links(node);

            // assert that all links are set up correctly (no loops, self references, etc.)
            node_links.assert_valid(node);

            let mut count = 1;
            let mut black_heights = [0; 2];

            for (i, side) in [Side::Left, Side::Right].into_iter().enumerate() {
                let Some(child) = node_links.child(side) else {
                    continue;
                };
                let child_links = links(child);

                assert_eq!(
                    child_links.parent(),
                    Some(node),
                    "Link violation: {side} child {child:?} does not point back to {node:?}"
                );
                assert!(
                    !(node_links.is_red() && child_links.is_red()),
                    "Red-black violation: red node {node:?} has a red {side} child {child:?}"
                );

                let ordered = match side {
                    Side::Left => value_of(child) <= value_of(node),
                    Side::Right => value_of(child) >= value_of(node),
                };
                assert!(ordered, "Ordering violation: {side} subtree of {node:?} is out of order");

                let (child_count, child_height) = Self::assert_valid_inner(child);
                count += child_count;
                black_heights[i] = child_height;
            }

            assert_eq!(
                black_heights[0], black_heights[1],
                "Red-black violation: left and right subtree of {node:?} have different black-heights"
            );

            (count, black_heights[0] + usize::from(!node_links.is_red()))
        }
    }

    pub(crate) fn alloc_node(&self, value: T) -> Result<NonNull<Node<T>>, AllocError> {
        let ptr = self
            .alloc
            .allocate(Layout::new::<Node<T>>())?
            .cast::<Node<T>>();

        // Safety: the allocation is fresh and has the layout of `Node<T>`
        unsafe {
            ptr.write(Node::new(value));
        }

        Ok(ptr)
    }

    /// Deallocates a node, moving its element out.
    ///
    /// # Safety
    ///
    /// `ptr` must have been allocated by [`Self::alloc_node`] on this tree and nothing may link to
    /// it anymore.
    pub(crate) unsafe fn free_node(&self, ptr: NonNull<Node<T>>) -> T {
        unsafe {
            let node = ptr.read();
            self.alloc.deallocate(ptr.cast(), Layout::new::<Node<T>>());
            node.value
        }
    }

    /// Frees every node of the subtree rooted at `root`, which is detached from its parent first.
    ///
    /// Walks down to a leaf, frees it and climbs back up through its parent link, so every node is
    /// visited a constant number of times and no additional memory is needed.
    pub(crate) unsafe fn free_subtree(&self, root: NonNull<Node<T>>) {
        unsafe {
            links(root).replace_parent(None);

            let mut next = Some(root);
            while let Some(node) = next {
                let node_links = links(node);

                if let Some(left) = node_links.replace_left(None) {
                    next = Some(left);
                } else if let Some(right) = node_links.replace_right(None) {
                    next = Some(right);
                } else {
                    next = node_links.parent();
                    drop(self.free_node(node));
                }
            }
        }
    }

    fn find_internal<Q>(&self, key: &Q) -> Link<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut tree = self.root;
        while let Some(curr) = tree {
            unsafe {
                match key.cmp(value_of(curr).borrow()) {
                    Ordering::Equal => return Some(curr),
                    Ordering::Less => tree = links(curr).left(),
                    Ordering::Greater => tree = links(curr).right(),
                }
            }
        }

        None
    }

    /// Unlinks `node` from the tree, restores the red-black rules and returns its element.
    pub(crate) unsafe fn remove_internal(&mut self, node: NonNull<Node<T>>) -> T {
        unsafe {
            let node_links = links(node);

            // `child` moves into the position that is physically vacated, `parent` is the node it
            // ends up below. If the vacated position was black, `child` is one black short.
            let child;
            let parent;
            let removed_color;

            if let (Some(left), Some(right)) = (node_links.left(), node_links.right()) {
                // Two children: the in-order successor takes the place of `node`
                let successor = utils::find_minimum(right);
                let succ_links = links(successor);

                removed_color = succ_links.color();
                child = succ_links.right();

                if successor == right {
                    parent = Some(successor);
                } else {
                    parent = succ_links.parent();

                    // Detach the successor, its right subtree takes its old slot
                    self.transplant(successor, child);

                    succ_links.replace_right(Some(right));
                    links(right).replace_parent(Some(successor));
                }

                self.transplant(node, Some(successor));

                succ_links.replace_left(Some(left));
                links(left).replace_parent(Some(successor));
                succ_links.set_color(node_links.color());
            } else {
                // At most one child, which is spliced into the slot of `node`
                child = node_links.left().or(node_links.right());
                parent = node_links.parent();
                removed_color = node_links.color();

                self.transplant(node, child);
            }

            if removed_color == Color::Black {
                self.balance_after_remove(child, parent);
            }

            self.size -= 1;

            node_links.replace_parent(None);
            node_links.replace_left(None);
            node_links.replace_right(None);
            self.free_node(node)
        }
    }

    /// Replaces `old` in its parent's child slot (or as the root) with `new`.
    unsafe fn transplant(&mut self, old: NonNull<Node<T>>, new: Link<T>) {
        unsafe {
            let parent = links(old).parent();

            if let Some(parent) = parent {
                let parent_links = links(parent);
                parent_links.replace_child(parent_links.side_of(old), new);
            } else {
                self.root = new;
            }

            if let Some(new) = new {
                links(new).replace_parent(parent);
            }
        }
    }

    fn balance_after_insert(&mut self, mut node: NonNull<Node<T>>) {
        unsafe {
            loop {
                let node_links = links(node);
                debug_assert!(node_links.is_red(), "only red nodes need rebalancing");

                let Some(parent) = node_links.parent() else {
                    // We propagated all the way up, the root is always black
                    node_links.set_color(Color::Black);
                    return;
                };
                let parent_links = links(parent);

                if !parent_links.is_red() {
                    return;
                }

                let Some(grandparent) = parent_links.parent() else {
                    unreachable!("red node {parent:?} cannot be the root");
                };
                let grandparent_links = links(grandparent);

                let (aunt, aunt_side) = utils::get_sibling(Some(parent), grandparent);

                if let Some(aunt) = aunt
                    && links(aunt).is_red()
                {
                    // Red aunt: push the blackness of the grandparent down a level and continue
                    // from the grandparent, which may now have a red parent itself.
                    tracing::trace!("aunt {aunt:?} is red, recoloring around {grandparent:?}");
                    parent_links.set_color(Color::Black);
                    links(aunt).set_color(Color::Black);
                    grandparent_links.set_color(Color::Red);

                    node = grandparent;
                    continue;
                }

                let parent_side = aunt_side.opposite();

                if parent_links.side_of(node) == parent_side {
                    // left-left or right-right: a single rotation lifts the parent above the
                    // grandparent
                    tracing::trace!("{parent_side}-{parent_side} case, rotating {parent:?} up");
                    self.rotate_at(parent, aunt_side);
                    parent_links.set_color(Color::Black);
                } else {
                    // left-right or right-left: the node itself is rotated up twice
                    tracing::trace!(
                        "{parent_side}-{aunt_side} case, double rotating {node:?} up"
                    );
                    self.rotate_at(node, parent_side);
                    self.rotate_at(node, aunt_side);
                    node_links.set_color(Color::Black);
                }

                grandparent_links.set_color(Color::Red);
                break;
            }

            // rotations may have replaced the root
            if let Some(root) = self.root {
                links(root).set_color(Color::Black);
            }
        }
    }

    /// Restores the red-black rules after a black node was removed, leaving `x` (which may be a
    /// missing child of `parent`) one black short.
    unsafe fn balance_after_remove(&mut self, mut x: Link<T>, mut parent: Link<T>) {
        unsafe {
            while color_of(x) == Color::Black {
                let Some(p) = parent else {
                    // x is the root, the missing black is simply dropped
                    break;
                };
                let p_links = links(p);

                let (sibling, sibling_side) = utils::get_sibling(x, p);
                let x_side = sibling_side.opposite();

                // the sibling subtree has a black-height of at least one, so it cannot be empty
                let Some(mut sibling) = sibling else {
                    unreachable!("{x_side} child of {p:?} is black-short but has no sibling");
                };

                if links(sibling).is_red() {
                    // Red sibling: rotate it above the parent so that x gets a black sibling
                    tracing::trace!("sibling {sibling:?} is red, rotating it up");
                    links(sibling).set_color(Color::Black);
                    p_links.set_color(Color::Red);
                    self.rotate_at(sibling, x_side);

                    let Some(new_sibling) = p_links.child(sibling_side) else {
                        unreachable!("red sibling must have had two black children");
                    };
                    sibling = new_sibling;
                }

                let s_links = links(sibling);
                let far = s_links.child(sibling_side);
                let near = s_links.child(x_side);

                if color_of(far) == Color::Black && color_of(near) == Color::Black {
                    // Black sibling with black children: recolor and push the problem upwards
                    tracing::trace!("sibling {sibling:?} has black children, moving up to {p:?}");
                    s_links.set_color(Color::Red);

                    x = Some(p);
                    parent = p_links.parent();
                    continue;
                }

                if color_of(far) == Color::Black {
                    // Near nephew is red: rotate it above the sibling so the red ends up far
                    let Some(near) = near else {
                        unreachable!("near nephew must be red");
                    };
                    tracing::trace!("near nephew {near:?} is red, rotating it up");
                    links(near).set_color(Color::Black);
                    s_links.set_color(Color::Red);
                    self.rotate_at(near, sibling_side);

                    sibling = near;
                }

                // Far nephew is red: rotate the sibling above the parent which restores the
                // missing black on x's side
                tracing::trace!("far nephew of {x_side} child of {p:?} is red, rotating sibling up");
                let s_links = links(sibling);
                s_links.set_color(p_links.color());
                p_links.set_color(Color::Black);
                if let Some(far) = s_links.child(sibling_side) {
                    links(far).set_color(Color::Black);
                }
                self.rotate_at(sibling, x_side);

                x = self.root;
                break;
            }

            if let Some(x) = x {
                links(x).set_color(Color::Black);
            }
        }
    }

    /// Lifts `node` above its parent. The parent becomes the `side` child of `node` and adopts
    /// the subtree `node` previously held on that side, which keeps the in-order sequence intact.
    unsafe fn rotate_at(&mut self, node: NonNull<Node<T>>, side: Side) {
        unsafe {
            let node_links = links(node);
            let Some(parent) = node_links.parent() else {
                unreachable!("cannot rotate the root {node:?}");
            };
            let parent_links = links(parent);
            debug_assert_eq!(parent_links.child(side.opposite()), Some(node));

            let inner = node_links.replace_child(side, Some(parent));
            let grandparent = parent_links.replace_parent(Some(node));

            parent_links.replace_child(side.opposite(), inner);
            if let Some(inner) = inner {
                links(inner).replace_parent(Some(parent));
            }

            node_links.replace_parent(grandparent);
            match grandparent {
                Some(grandparent) => {
                    let gp_links = links(grandparent);
                    gp_links.replace_child(gp_links.side_of(parent), Some(node));
                }
                None => self.root = Some(node),
            }
        }
    }
}

impl<T: fmt::Debug, A: Allocator> fmt::Debug for RBTree<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: PartialEq, A: Allocator> PartialEq for RBTree<T, A> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl<T: Eq, A: Allocator> Eq for RBTree<T, A> {}

impl<T: Ord> FromIterator<T> for RBTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord, A: Allocator> Extend<T> for RBTree<T, A> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value, false);
        }
    }
}

impl<'a, T, A: Allocator> IntoIterator for &'a RBTree<T, A> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, A: Allocator> IntoIterator for RBTree<T, A> {
    type Item = T;
    type IntoIter = IntoIter<T, A>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { tree: self }
    }
}
