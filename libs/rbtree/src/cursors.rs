use crate::node::{Link, links, value_of};
use crate::{Color, RBTree, utils};
use alloc::alloc::Global;
use core::alloc::Allocator;
use core::{fmt, ptr};

/// A cursor which provides read-only access to a [`RBTree`].
///
/// A cursor either points to an element or to the *end* position, which sits between the
/// greatest and the least element: moving forward from the end wraps around to the least element
/// and moving backward wraps around to the greatest.
pub struct Cursor<'a, T, A: Allocator = Global> {
    pub(crate) current: Link<T>,
    pub(crate) tree: &'a RBTree<T, A>,
}

impl<T, A: Allocator> Clone for Cursor<'_, T, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, A: Allocator> Copy for Cursor<'_, T, A> {}

/// Two cursors are equal if they point to the same position of the same tree.
impl<T, A: Allocator> PartialEq for Cursor<'_, T, A> {
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current && ptr::eq(self.tree, other.tree)
    }
}

impl<T, A: Allocator> Eq for Cursor<'_, T, A> {}

impl<T: fmt::Debug, A: Allocator> fmt::Debug for Cursor<'_, T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cursor").field(&self.get()).finish()
    }
}

impl<'a, T, A: Allocator> Cursor<'a, T, A> {
    /// Returns a reference to the element the cursor points to, or `None` at the end position.
    pub fn get(&self) -> Option<&'a T> {
        self.current.map(|node| unsafe { value_of(node) })
    }

    /// Returns the color of the node the cursor points to, or `None` at the end position.
    pub fn color(&self) -> Option<Color> {
        self.current.map(|node| unsafe { links(node).color() })
    }

    /// Returns `true` if the cursor points to the end position.
    pub fn is_end(&self) -> bool {
        self.current.is_none()
    }

    /// Moves the cursor to the next element in sorted order.
    ///
    /// Moving past the greatest element lands on the end position, moving forward from the end
    /// position lands on the least element.
    pub fn move_next(&mut self) {
        self.current = next_or_first(self.current, self.tree);
    }

    /// Moves the cursor to the previous element in sorted order.
    ///
    /// Moving before the least element lands on the end position, moving backward from the end
    /// position lands on the greatest element.
    pub fn move_prev(&mut self) {
        self.current = prev_or_last(self.current, self.tree);
    }

    /// Returns the element after the cursor without moving it.
    pub fn peek_next(&self) -> Option<&'a T> {
        next_or_first(self.current, self.tree).map(|node| unsafe { value_of(node) })
    }

    /// Returns the element before the cursor without moving it.
    pub fn peek_prev(&self) -> Option<&'a T> {
        prev_or_last(self.current, self.tree).map(|node| unsafe { value_of(node) })
    }
}

/// A cursor which provides read-only access to a [`RBTree`] and can remove the element it points
/// to.
pub struct CursorMut<'a, T, A: Allocator = Global> {
    pub(crate) current: Link<T>,
    pub(crate) tree: &'a mut RBTree<T, A>,
}

impl<T: fmt::Debug, A: Allocator> fmt::Debug for CursorMut<'_, T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CursorMut").field(&self.get()).finish()
    }
}

impl<'a, T, A: Allocator> CursorMut<'a, T, A> {
    /// Returns a reference to the element the cursor points to, or `None` at the end position.
    ///
    /// Elements are never handed out mutably, changing them could break the tree's ordering.
    pub fn get(&self) -> Option<&T> {
        self.current.map(|node| unsafe { value_of(node) })
    }

    /// Returns the color of the node the cursor points to, or `None` at the end position.
    pub fn color(&self) -> Option<Color> {
        self.current.map(|node| unsafe { links(node).color() })
    }

    /// Returns `true` if the cursor points to the end position.
    pub fn is_end(&self) -> bool {
        self.current.is_none()
    }

    /// Moves the cursor to the next element in sorted order, see [`Cursor::move_next`].
    pub fn move_next(&mut self) {
        self.current = next_or_first(self.current, &*self.tree);
    }

    /// Moves the cursor to the previous element in sorted order, see [`Cursor::move_prev`].
    pub fn move_prev(&mut self) {
        self.current = prev_or_last(self.current, &*self.tree);
    }

    /// Returns the element after the cursor without moving it.
    pub fn peek_next(&self) -> Option<&T> {
        next_or_first(self.current, &*self.tree).map(|node| unsafe { value_of(node) })
    }

    /// Returns the element before the cursor without moving it.
    pub fn peek_prev(&self) -> Option<&T> {
        prev_or_last(self.current, &*self.tree).map(|node| unsafe { value_of(node) })
    }

    /// Removes the element the cursor points to from the tree and returns it.
    ///
    /// Afterwards the cursor points to the element that followed the removed one, or to the end
    /// position if it was the greatest. Returns `None` and leaves the tree untouched if the cursor
    /// is at the end position.
    pub fn remove_current(&mut self) -> Option<T> {
        let current = self.current?;

        // Safety: `current` is a node of `tree`, which we borrow mutably
        unsafe {
            // the successor has to be found while the links still describe the old tree
            self.current = utils::next(current);
            Some(self.tree.remove_internal(current))
        }
    }

    /// Returns a read-only cursor pointing to the same position.
    pub fn as_cursor(&self) -> Cursor<'_, T, A> {
        Cursor {
            current: self.current,
            tree: &*self.tree,
        }
    }
}

fn next_or_first<T, A: Allocator>(current: Link<T>, tree: &RBTree<T, A>) -> Link<T> {
    // Safety: cursors only ever point to nodes of the tree they borrow
    unsafe {
        match current {
            Some(current) => utils::next(current),
            None => tree.root.map(|root| utils::find_minimum(root)),
        }
    }
}

fn prev_or_last<T, A: Allocator>(current: Link<T>, tree: &RBTree<T, A>) -> Link<T> {
    // Safety: cursors only ever point to nodes of the tree they borrow
    unsafe {
        match current {
            Some(current) => utils::prev(current),
            None => tree.root.map(|root| utils::find_maximum(root)),
        }
    }
}
