use crate::node::{Node, links, value_of};
use crate::utils::Side;
use crate::{Color, RBTree};
use alloc::alloc::Global;
use core::alloc::Allocator;
use core::fmt;
use core::ptr::NonNull;

/// Renders a [`RBTree`] in graphviz format, see [`RBTree::dot`].
pub struct Dot<'a, T, A: Allocator = Global> {
    pub(crate) tree: &'a RBTree<T, A>,
}

impl<T: fmt::Debug, A: Allocator> Dot<'_, T, A> {
    #[allow(
        clippy::only_used_in_recursion,
        reason = "need to ensure tree is borrowed for the entire time we operate on it"
    )]
    fn node_fmt(&self, f: &mut fmt::Formatter, node: NonNull<Node<T>>) -> fmt::Result {
        unsafe {
            let node_links = links(node);
            let id = node.addr();

            let fill = match node_links.color() {
                Color::Red => "firebrick1",
                Color::Black => "gray20",
            };
            writeln!(
                f,
                r#"    {id} [label="{value:?}", style=filled, fillcolor={fill}, fontcolor=white];"#,
                value = value_of(node),
            )?;

            if let Some(up) = node_links.parent() {
                writeln!(f, r#"    {id} -> {} [label="up", style=dashed];"#, up.addr())?;
            }

            for side in [Side::Left, Side::Right] {
                if let Some(child) = node_links.child(side) {
                    writeln!(f, r#"    {id} -> {} [label="{side}"];"#, child.addr())?;
                    self.node_fmt(f, child)?;
                }
            }
        }

        Ok(())
    }
}

impl<T: fmt::Debug, A: Allocator> fmt::Display for Dot<'_, T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("digraph {\n")?;
        if let Some(root) = self.tree.root {
            self.node_fmt(f, root)?;
        }
        f.write_str("}\n")
    }
}

impl<T: fmt::Debug, A: Allocator> fmt::Debug for Dot<'_, T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
