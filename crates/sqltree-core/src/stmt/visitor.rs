use super::{
    BooleanLiteral, Expr, Identifier, IsNullPredicate, LikePredicate, LogicalBinaryExpression,
    LongLiteral, Node, NotExpression, NullLiteral, StringLiteral,
};

/// An operation over expression trees, producing `R` from a context `C`.
///
/// Dispatch happens in two steps: [`Node::accept`] resolves the concrete node
/// kind, then the matching `visit_*` method performs the operation. A new
/// operation is a new implementation of this trait and never touches the
/// nodes. A new node kind needs a new method here and an arm in
/// [`Expr::accept`](Node::accept).
///
/// Every node method falls back to [`visit_node`](Self::visit_node), so an
/// operation that only cares about a few node kinds overrides just those.
pub trait Visitor<R, C> {
    /// Handles any node without a more specific override.
    fn visit_node(&mut self, node: &dyn Node, cx: C) -> R;

    /// Dispatches on the expression's concrete kind.
    fn visit_expr(&mut self, node: &Expr, cx: C) -> R {
        node.accept(self, cx)
    }

    fn visit_boolean_literal(&mut self, node: &BooleanLiteral, cx: C) -> R {
        self.visit_node(node, cx)
    }

    fn visit_identifier(&mut self, node: &Identifier, cx: C) -> R {
        self.visit_node(node, cx)
    }

    fn visit_is_null_predicate(&mut self, node: &IsNullPredicate, cx: C) -> R {
        self.visit_node(node, cx)
    }

    fn visit_like_predicate(&mut self, node: &LikePredicate, cx: C) -> R {
        self.visit_node(node, cx)
    }

    fn visit_logical_binary_expression(&mut self, node: &LogicalBinaryExpression, cx: C) -> R {
        self.visit_node(node, cx)
    }

    fn visit_long_literal(&mut self, node: &LongLiteral, cx: C) -> R {
        self.visit_node(node, cx)
    }

    fn visit_not_expression(&mut self, node: &NotExpression, cx: C) -> R {
        self.visit_node(node, cx)
    }

    fn visit_null_literal(&mut self, node: &NullLiteral, cx: C) -> R {
        self.visit_node(node, cx)
    }

    fn visit_string_literal(&mut self, node: &StringLiteral, cx: C) -> R {
        self.visit_node(node, cx)
    }
}

impl<R, C, V: Visitor<R, C> + ?Sized> Visitor<R, C> for &mut V {
    fn visit_node(&mut self, node: &dyn Node, cx: C) -> R {
        Visitor::visit_node(&mut **self, node, cx)
    }

    fn visit_expr(&mut self, node: &Expr, cx: C) -> R {
        Visitor::visit_expr(&mut **self, node, cx)
    }

    fn visit_boolean_literal(&mut self, node: &BooleanLiteral, cx: C) -> R {
        Visitor::visit_boolean_literal(&mut **self, node, cx)
    }

    fn visit_identifier(&mut self, node: &Identifier, cx: C) -> R {
        Visitor::visit_identifier(&mut **self, node, cx)
    }

    fn visit_is_null_predicate(&mut self, node: &IsNullPredicate, cx: C) -> R {
        Visitor::visit_is_null_predicate(&mut **self, node, cx)
    }

    fn visit_like_predicate(&mut self, node: &LikePredicate, cx: C) -> R {
        Visitor::visit_like_predicate(&mut **self, node, cx)
    }

    fn visit_logical_binary_expression(&mut self, node: &LogicalBinaryExpression, cx: C) -> R {
        Visitor::visit_logical_binary_expression(&mut **self, node, cx)
    }

    fn visit_long_literal(&mut self, node: &LongLiteral, cx: C) -> R {
        Visitor::visit_long_literal(&mut **self, node, cx)
    }

    fn visit_not_expression(&mut self, node: &NotExpression, cx: C) -> R {
        Visitor::visit_not_expression(&mut **self, node, cx)
    }

    fn visit_null_literal(&mut self, node: &NullLiteral, cx: C) -> R {
        Visitor::visit_null_literal(&mut **self, node, cx)
    }

    fn visit_string_literal(&mut self, node: &StringLiteral, cx: C) -> R {
        Visitor::visit_string_literal(&mut **self, node, cx)
    }
}
