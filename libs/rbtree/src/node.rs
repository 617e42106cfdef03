use crate::utils::Side;
use core::cell::Cell;
use core::fmt;
use core::ptr::NonNull;

pub(crate) type Link<T> = Option<NonNull<Node<T>>>;

/// The color of a node in a [`RBTree`][crate::RBTree].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => f.write_str("red"),
            Color::Black => f.write_str("black"),
        }
    }
}

/// A single tree vertex, allocated and owned by the tree.
pub(crate) struct Node<T> {
    pub(crate) links: Links<T>,
    pub(crate) value: T,
}

impl<T> Node<T> {
    /// Creates a new, unlinked red node.
    pub(crate) const fn new(value: T) -> Self {
        Self {
            links: Links::new(),
            value,
        }
    }
}

/// Returns the links of the node pointed to by `ptr`.
///
/// # Safety
///
/// `ptr` must point to a live node owned by a tree and the returned reference must not outlive
/// that node.
#[inline]
pub(crate) unsafe fn links<'a, T>(ptr: NonNull<Node<T>>) -> &'a Links<T> {
    // Safety: ensured by caller
    unsafe { &(*ptr.as_ptr()).links }
}

/// Returns the value stored in the node pointed to by `ptr`.
///
/// # Safety
///
/// Same requirements as [`links`].
#[inline]
pub(crate) unsafe fn value_of<'a, T>(ptr: NonNull<Node<T>>) -> &'a T {
    // Safety: ensured by caller
    unsafe { &(*ptr.as_ptr()).value }
}

/// Returns the color of an optional node. Missing children count as black.
#[inline]
pub(crate) unsafe fn color_of<T>(link: Link<T>) -> Color {
    match link {
        // Safety: ensured by caller
        Some(node) => unsafe { links(node).color() },
        None => Color::Black,
    }
}

/// Links to other nodes in a [`RBTree`][crate::RBTree].
///
/// Parent links are non-owning back references, child links own their subtree. All links live
/// in `Cell`s so a rebalancing step can rewire several nodes it holds shared references to.
pub(crate) struct Links<T> {
    color: Cell<Color>,
    up: Cell<Link<T>>,
    left: Cell<Link<T>>,
    right: Cell<Link<T>>,
}

impl<T> fmt::Debug for Links<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Links")
            .field("self", &format_args!("{self:p}"))
            .field("color", &self.color())
            .field("parent", &self.parent())
            .field("left", &self.left())
            .field("right", &self.right())
            .finish()
    }
}

impl<T> Links<T> {
    /// New nodes start out red and unlinked.
    pub(crate) const fn new() -> Self {
        Self {
            color: Cell::new(Color::Red),
            up: Cell::new(None),
            left: Cell::new(None),
            right: Cell::new(None),
        }
    }

    #[inline]
    pub(crate) fn color(&self) -> Color {
        self.color.get()
    }
    #[inline]
    pub(crate) fn set_color(&self, color: Color) {
        self.color.set(color);
    }
    #[inline]
    pub(crate) fn is_red(&self) -> bool {
        self.color() == Color::Red
    }

    #[inline]
    pub(crate) fn parent(&self) -> Link<T> {
        self.up.get()
    }
    #[inline]
    pub(crate) fn left(&self) -> Link<T> {
        self.left.get()
    }
    #[inline]
    pub(crate) fn right(&self) -> Link<T> {
        self.right.get()
    }
    #[inline]
    pub(crate) fn child(&self, side: Side) -> Link<T> {
        match side {
            Side::Left => self.left(),
            Side::Right => self.right(),
        }
    }

    #[inline]
    pub(crate) fn replace_parent(&self, lk: Link<T>) -> Link<T> {
        self.up.replace(lk)
    }
    #[inline]
    pub(crate) fn replace_left(&self, lk: Link<T>) -> Link<T> {
        self.left.replace(lk)
    }
    #[inline]
    pub(crate) fn replace_right(&self, lk: Link<T>) -> Link<T> {
        self.right.replace(lk)
    }
    #[inline]
    pub(crate) fn replace_child(&self, side: Side, child: Link<T>) -> Link<T> {
        match side {
            Side::Left => self.replace_left(child),
            Side::Right => self.replace_right(child),
        }
    }

    /// Returns the side on which `child` hangs off this node.
    ///
    /// # Panics
    ///
    /// With debug assertions enabled, panics if `child` is not a child of this node.
    #[inline]
    pub(crate) fn side_of(&self, child: NonNull<Node<T>>) -> Side {
        if self.left() == Some(child) {
            Side::Left
        } else {
            debug_assert_eq!(self.right(), Some(child), "node is not a child of its parent");
            Side::Right
        }
    }

    /// Asserts that this node does not link to itself and that no two of its links alias.
    #[track_caller]
    pub(crate) fn assert_valid(&self, this: NonNull<Node<T>>) {
        let links = [
            ("parent", self.parent()),
            ("left child", self.left()),
            ("right child", self.right()),
        ];

        for (name, link) in links {
            assert_ne!(link, Some(this), "node's {name} cannot be itself; node={self:#?}");
        }

        for (i, (a_name, a)) in links.iter().enumerate() {
            for (b_name, b) in &links[i + 1..] {
                if a.is_some() {
                    assert_ne!(a, b, "node's {a_name} and {b_name} cannot be the same; node={self:#?}");
                }
            }
        }
    }
}
