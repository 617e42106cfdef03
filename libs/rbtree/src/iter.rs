use crate::node::{Link, value_of};
use crate::{RBTree, utils};
use alloc::alloc::Global;
use core::alloc::Allocator;
use core::fmt;
use core::iter::FusedIterator;

/// An iterator over references to the entries of a [`RBTree`], in sorted order.
pub struct Iter<'a, T, A: Allocator = Global> {
    pub(crate) head: Link<T>,
    pub(crate) tail: Link<T>,
    pub(crate) len: usize,
    pub(crate) _tree: &'a RBTree<T, A>,
}
impl<'a, T, A: Allocator> Clone for Iter<'a, T, A> {
    #[inline]
    fn clone(&self) -> Iter<'a, T, A> {
        Iter {
            head: self.head,
            tail: self.tail,
            len: self.len,
            _tree: self._tree,
        }
    }
}
impl<T: fmt::Debug, A: Allocator> fmt::Debug for Iter<'_, T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}
impl<'a, T, A: Allocator> Iterator for Iter<'a, T, A> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let head = self.head?;

        if Some(head) == self.tail {
            self.head = None;
            self.tail = None;
        } else {
            // Safety: `head` and `tail` are nodes of the tree we borrow for `'a`
            self.head = unsafe { utils::next(head) };
        }
        self.len -= 1;

        Some(unsafe { value_of(head) })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}
impl<'a, T, A: Allocator> DoubleEndedIterator for Iter<'a, T, A> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let tail = self.tail?;

        if Some(tail) == self.head {
            self.head = None;
            self.tail = None;
        } else {
            self.tail = unsafe { utils::prev(tail) };
        }
        self.len -= 1;

        Some(unsafe { value_of(tail) })
    }
}
impl<T, A: Allocator> ExactSizeIterator for Iter<'_, T, A> {}
impl<T, A: Allocator> FusedIterator for Iter<'_, T, A> {}

/// An owning iterator over the entries of a [`RBTree`], in sorted order.
///
/// Elements not yet yielded are dropped together with the iterator.
pub struct IntoIter<T, A: Allocator = Global> {
    pub(crate) tree: RBTree<T, A>,
}
impl<T: fmt::Debug, A: Allocator> fmt::Debug for IntoIter<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.tree).finish()
    }
}
impl<T, A: Allocator> Iterator for IntoIter<T, A> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.tree.pop_first()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.tree.size(), Some(self.tree.size()))
    }
}
impl<T, A: Allocator> DoubleEndedIterator for IntoIter<T, A> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.tree.pop_last()
    }
}
impl<T, A: Allocator> ExactSizeIterator for IntoIter<T, A> {}
impl<T, A: Allocator> FusedIterator for IntoIter<T, A> {}
