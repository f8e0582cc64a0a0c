use super::{Expr, NodeLocation, Visit, Visitor};
use std::fmt;

/// Capability shared by every expression node in the tree.
///
/// The generic methods are bound on `Self: Sized`, which keeps the trait
/// object safe: `&dyn Node` is what [`Visitor::visit_node`] receives for nodes
/// a visitor does not handle specifically.
pub trait Node: fmt::Debug {
    /// Where the parser found this node, if known.
    fn location(&self) -> Option<NodeLocation>;

    /// Direct child expressions, in source order.
    fn children(&self) -> Vec<&Expr>;

    /// Calls the visitor method for this node's concrete kind and returns
    /// its result unchanged.
    fn accept<R, C, V>(&self, visitor: &mut V, cx: C) -> R
    where
        V: Visitor<R, C> + ?Sized,
        Self: Sized;

    fn visit<V: Visit>(&self, visit: V)
    where
        Self: Sized;
}

impl<T: Node> Node for &T {
    fn location(&self) -> Option<NodeLocation> {
        (**self).location()
    }

    fn children(&self) -> Vec<&Expr> {
        (**self).children()
    }

    fn accept<R, C, V>(&self, visitor: &mut V, cx: C) -> R
    where
        V: Visitor<R, C> + ?Sized,
        Self: Sized,
    {
        (**self).accept(visitor, cx)
    }

    fn visit<V: Visit>(&self, visit: V)
    where
        Self: Sized,
    {
        (**self).visit(visit)
    }
}
