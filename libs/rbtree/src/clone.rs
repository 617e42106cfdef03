//! Deep copies of a tree.
//!
//! Both copying a whole tree and merging one tree into another walk the nodes through their parent
//! links instead of recursing, so deep trees cannot exhaust the stack.

use crate::node::{Link, Node, links, value_of};
use crate::utils::Side;
use crate::{Color, RBTree};
use alloc::alloc::handle_alloc_error;
use core::alloc::{AllocError, Allocator, Layout};
use core::mem;
use core::ptr::NonNull;

impl<T: Clone, A: Allocator + Clone> Clone for RBTree<T, A> {
    fn clone(&self) -> Self {
        match self.try_clone() {
            Ok(tree) => tree,
            Err(AllocError) => handle_alloc_error(Layout::new::<Node<T>>()),
        }
    }

    /// Overwrites `self` with a copy of `source`, reusing the nodes of `self` where both trees
    /// have a node in the same position.
    fn clone_from(&mut self, source: &Self) {
        // Safety: both trees are borrowed for the whole merge and own disjoint nodes
        if let Err(AllocError) = unsafe { self.merge_from(source) } {
            handle_alloc_error(Layout::new::<Node<T>>());
        }
    }
}

impl<T: Clone, A: Allocator + Clone> RBTree<T, A> {
    /// Returns a copy of the tree with the same shape and colors, returning an error if an
    /// allocation failed.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the allocator fails. Nodes copied up to that point are freed, the
    /// same happens if `T::clone` panics.
    pub fn try_clone(&self) -> Result<Self, AllocError> {
        let mut out = Self::new_in(self.allocator().clone());

        if let Some(root) = self.root {
            // Safety: `root` belongs to `self`, `out` is fresh and owns nothing yet
            unsafe {
                let copy = out.clone_subtree(root, None)?;
                links(copy).set_color(Color::Black);
                out.root = Some(copy);
            }
            out.size = self.size();
        }

        Ok(out)
    }
}

impl<T: Clone, A: Allocator> RBTree<T, A> {
    /// Copies the subtree rooted at `src_root` into nodes allocated from this tree, hanging the
    /// copy below `parent`. The caller is responsible for linking the returned node into
    /// `parent`'s child slot.
    unsafe fn clone_subtree(
        &self,
        src_root: NonNull<Node<T>>,
        parent: Link<T>,
    ) -> Result<NonNull<Node<T>>, AllocError> {
        unsafe {
            let dst_root = self.clone_node(src_root, parent)?;
            // frees the partial copy if an allocation fails or `T::clone` panics
            let guard = FreeOnDrop {
                tree: self,
                root: dst_root,
            };

            let mut src = src_root;
            let mut dst = dst_root;
            loop {
                let src_links = links(src);
                let dst_links = links(dst);

                // Descend into the first child that has not been copied yet, otherwise climb
                let pending = [Side::Left, Side::Right]
                    .into_iter()
                    .find_map(|side| match (src_links.child(side), dst_links.child(side)) {
                        (Some(src_child), None) => Some((side, src_child)),
                        _ => None,
                    });

                if let Some((side, src_child)) = pending {
                    let copy = self.clone_node(src_child, Some(dst))?;
                    dst_links.replace_child(side, Some(copy));

                    src = src_child;
                    dst = copy;
                } else if src == src_root {
                    mem::forget(guard);
                    return Ok(dst_root);
                } else {
                    let (Some(src_parent), Some(dst_parent)) = (src_links.parent(), dst_links.parent())
                    else {
                        unreachable!("copied node {dst:?} lost its parent");
                    };
                    src = src_parent;
                    dst = dst_parent;
                }
            }
        }
    }

    unsafe fn clone_node(
        &self,
        src: NonNull<Node<T>>,
        parent: Link<T>,
    ) -> Result<NonNull<Node<T>>, AllocError> {
        unsafe {
            let node = self.alloc_node(value_of(src).clone())?;
            links(node).set_color(links(src).color());
            links(node).replace_parent(parent);
            Ok(node)
        }
    }

    /// Makes `self` a copy of `source`.
    ///
    /// If an allocation fails or `T::clone`/`T::clone_from` panics halfway through, `self` is
    /// left empty rather than half merged.
    unsafe fn merge_from(&mut self, source: &Self) -> Result<(), AllocError> {
        let guard = ClearOnDrop(self);
        // Safety: ensured by caller
        unsafe {
            guard.0.merge_nodes(source)?;
        }
        mem::forget(guard);

        Ok(())
    }

    /// Both trees are walked in lockstep. Where both have a node, the element and color are
    /// copied over in place. Subtrees only `self` has are freed, subtrees only `source` has are
    /// cloned.
    ///
    /// Every node reachable from `self.root` stays fully linked at every step, so `self` can be
    /// cleared at any point.
    unsafe fn merge_nodes(&mut self, source: &Self) -> Result<(), AllocError> {
        unsafe {
            let Some(src_root) = source.root else {
                self.clear();
                return Ok(());
            };
            let Some(dst_root) = self.root else {
                self.root = Some(self.clone_subtree(src_root, None)?);
                self.size = source.size();
                return Ok(());
            };

            sync_node(dst_root, src_root);

            let mut src = src_root;
            let mut dst = dst_root;
            // The child slot of (src, dst) to reconcile next, `None` once both are done
            let mut pending = Some(Side::Left);

            loop {
                let Some(side) = pending else {
                    if src == src_root {
                        break;
                    }

                    let (Some(src_parent), Some(dst_parent)) =
                        (links(src).parent(), links(dst).parent())
                    else {
                        unreachable!("merged node {dst:?} lost its parent");
                    };

                    pending = following_side(links(src_parent).side_of(src));
                    src = src_parent;
                    dst = dst_parent;
                    continue;
                };

                let dst_links = links(dst);

                match (links(src).child(side), dst_links.child(side)) {
                    (Some(src_child), Some(dst_child)) => {
                        sync_node(dst_child, src_child);

                        src = src_child;
                        dst = dst_child;
                        pending = Some(Side::Left);
                    }
                    (Some(src_child), None) => {
                        let copy = self.clone_subtree(src_child, Some(dst))?;
                        dst_links.replace_child(side, Some(copy));
                        pending = following_side(side);
                    }
                    (None, Some(dst_child)) => {
                        dst_links.replace_child(side, None);
                        self.free_subtree(dst_child);
                        pending = following_side(side);
                    }
                    (None, None) => pending = following_side(side),
                }
            }

            links(dst_root).set_color(Color::Black);
            self.size = source.size();

            Ok(())
        }
    }
}

/// Frees a detached subtree when dropped.
struct FreeOnDrop<'a, T, A: Allocator> {
    tree: &'a RBTree<T, A>,
    root: NonNull<Node<T>>,
}

impl<T, A: Allocator> Drop for FreeOnDrop<'_, T, A> {
    fn drop(&mut self) {
        // Safety: the subtree was allocated from `tree` and is not linked into it
        unsafe {
            self.tree.free_subtree(self.root);
        }
    }
}

/// Empties the tree when dropped.
struct ClearOnDrop<'a, T, A: Allocator>(&'a mut RBTree<T, A>);

impl<T, A: Allocator> Drop for ClearOnDrop<'_, T, A> {
    fn drop(&mut self) {
        self.0.clear();
    }
}

/// Copies element and color of `src` into `dst`.
unsafe fn sync_node<T: Clone>(dst: NonNull<Node<T>>, src: NonNull<Node<T>>) {
    unsafe {
        (*dst.as_ptr()).value.clone_from(value_of(src));
        links(dst).set_color(links(src).color());
    }
}

fn following_side(side: Side) -> Option<Side> {
    match side {
        Side::Left => Some(Side::Right),
        Side::Right => None,
    }
}
