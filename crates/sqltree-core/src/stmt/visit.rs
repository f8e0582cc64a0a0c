#![allow(unused_variables)]

use super::{
    BooleanLiteral, Expr, Identifier, IsNullPredicate, LikePredicate, LogicalBinaryExpression,
    LongLiteral, Node, NotExpression, NullLiteral, StringLiteral,
};

/// Depth-first walk over an expression tree.
///
/// Each method defaults to the free function of the same name, which visits
/// the node's children. Override a method to observe a node kind and call the
/// free function to keep descending.
pub trait Visit {
    fn visit<N: Node>(&mut self, i: &N)
    where
        Self: Sized,
    {
        i.visit(self);
    }

    fn visit_expr(&mut self, i: &Expr) {
        visit_expr(self, i);
    }

    fn visit_expr_boolean(&mut self, i: &BooleanLiteral) {
        visit_expr_boolean(self, i);
    }

    fn visit_expr_identifier(&mut self, i: &Identifier) {
        visit_expr_identifier(self, i);
    }

    fn visit_expr_is_null(&mut self, i: &IsNullPredicate) {
        visit_expr_is_null(self, i);
    }

    fn visit_expr_like(&mut self, i: &LikePredicate) {
        visit_expr_like(self, i);
    }

    fn visit_expr_logical_binary(&mut self, i: &LogicalBinaryExpression) {
        visit_expr_logical_binary(self, i);
    }

    fn visit_expr_long(&mut self, i: &LongLiteral) {
        visit_expr_long(self, i);
    }

    fn visit_expr_not(&mut self, i: &NotExpression) {
        visit_expr_not(self, i);
    }

    fn visit_expr_null(&mut self, i: &NullLiteral) {
        visit_expr_null(self, i);
    }

    fn visit_expr_string(&mut self, i: &StringLiteral) {
        visit_expr_string(self, i);
    }
}

impl<V: Visit> Visit for &mut V {
    fn visit_expr(&mut self, i: &Expr) {
        Visit::visit_expr(&mut **self, i);
    }

    fn visit_expr_boolean(&mut self, i: &BooleanLiteral) {
        Visit::visit_expr_boolean(&mut **self, i);
    }

    fn visit_expr_identifier(&mut self, i: &Identifier) {
        Visit::visit_expr_identifier(&mut **self, i);
    }

    fn visit_expr_is_null(&mut self, i: &IsNullPredicate) {
        Visit::visit_expr_is_null(&mut **self, i);
    }

    fn visit_expr_like(&mut self, i: &LikePredicate) {
        Visit::visit_expr_like(&mut **self, i);
    }

    fn visit_expr_logical_binary(&mut self, i: &LogicalBinaryExpression) {
        Visit::visit_expr_logical_binary(&mut **self, i);
    }

    fn visit_expr_long(&mut self, i: &LongLiteral) {
        Visit::visit_expr_long(&mut **self, i);
    }

    fn visit_expr_not(&mut self, i: &NotExpression) {
        Visit::visit_expr_not(&mut **self, i);
    }

    fn visit_expr_null(&mut self, i: &NullLiteral) {
        Visit::visit_expr_null(&mut **self, i);
    }

    fn visit_expr_string(&mut self, i: &StringLiteral) {
        Visit::visit_expr_string(&mut **self, i);
    }
}

pub fn visit_expr<V>(v: &mut V, node: &Expr)
where
    V: Visit + ?Sized,
{
    match node {
        Expr::BooleanLiteral(expr) => v.visit_expr_boolean(expr),
        Expr::Identifier(expr) => v.visit_expr_identifier(expr),
        Expr::IsNull(expr) => v.visit_expr_is_null(expr),
        Expr::Like(expr) => v.visit_expr_like(expr),
        Expr::LogicalBinary(expr) => v.visit_expr_logical_binary(expr),
        Expr::LongLiteral(expr) => v.visit_expr_long(expr),
        Expr::Not(expr) => v.visit_expr_not(expr),
        Expr::NullLiteral(expr) => v.visit_expr_null(expr),
        Expr::StringLiteral(expr) => v.visit_expr_string(expr),
    }
}

pub fn visit_expr_boolean<V>(v: &mut V, node: &BooleanLiteral)
where
    V: Visit + ?Sized,
{
}

pub fn visit_expr_identifier<V>(v: &mut V, node: &Identifier)
where
    V: Visit + ?Sized,
{
}

pub fn visit_expr_is_null<V>(v: &mut V, node: &IsNullPredicate)
where
    V: Visit + ?Sized,
{
    v.visit_expr(node.value());
}

pub fn visit_expr_like<V>(v: &mut V, node: &LikePredicate)
where
    V: Visit + ?Sized,
{
    v.visit_expr(node.value());
    v.visit_expr(node.pattern());

    if let Some(escape) = node.escape() {
        v.visit_expr(escape);
    }
}

pub fn visit_expr_logical_binary<V>(v: &mut V, node: &LogicalBinaryExpression)
where
    V: Visit + ?Sized,
{
    v.visit_expr(node.left());
    v.visit_expr(node.right());
}

pub fn visit_expr_long<V>(v: &mut V, node: &LongLiteral)
where
    V: Visit + ?Sized,
{
}

pub fn visit_expr_not<V>(v: &mut V, node: &NotExpression)
where
    V: Visit + ?Sized,
{
    v.visit_expr(node.value());
}

pub fn visit_expr_null<V>(v: &mut V, node: &NullLiteral)
where
    V: Visit + ?Sized,
{
}

pub fn visit_expr_string<V>(v: &mut V, node: &StringLiteral)
where
    V: Visit + ?Sized,
{
}

/// Calls `f` on every expression in the tree, children before parents.
pub fn for_each_expr<F>(node: &impl Node, f: F)
where
    F: FnMut(&Expr),
{
    struct ForEach<F> {
        f: F,
    }

    impl<F> Visit for ForEach<F>
    where
        F: FnMut(&Expr),
    {
        fn visit_expr(&mut self, node: &Expr) {
            visit_expr(self, node);
            (self.f)(node);
        }
    }

    node.visit(ForEach { f });
}
