use super::{Expr, Node, NodeLocation, Visit, Visitor};

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalOperator {
    And,
    Or,
}

/// Combines two boolean expressions with `AND` or `OR`.
///
/// Chains stay binary: `a AND b AND c` is `(a AND b) AND c`.
#[derive(Debug, Clone)]
pub struct LogicalBinaryExpression {
    location: Option<NodeLocation>,
    operator: LogicalOperator,
    left: Box<Expr>,
    right: Box<Expr>,
}

structural_eq!(LogicalBinaryExpression {
    operator,
    left,
    right
});

impl LogicalBinaryExpression {
    pub fn new(operator: LogicalOperator, left: impl Into<Expr>, right: impl Into<Expr>) -> Self {
        Self::from_parts(None, operator, left.into(), right.into())
    }

    pub fn new_at(
        location: NodeLocation,
        operator: LogicalOperator,
        left: impl Into<Expr>,
        right: impl Into<Expr>,
    ) -> Self {
        Self::from_parts(Some(location), operator, left.into(), right.into())
    }

    fn from_parts(
        location: Option<NodeLocation>,
        operator: LogicalOperator,
        left: Expr,
        right: Expr,
    ) -> Self {
        Self {
            location,
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn operator(&self) -> LogicalOperator {
        self.operator
    }

    pub fn left(&self) -> &Expr {
        &self.left
    }

    pub fn right(&self) -> &Expr {
        &self.right
    }
}

impl fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::And => "AND",
            Self::Or => "OR",
        })
    }
}

impl Expr {
    pub fn and(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        LogicalBinaryExpression::new(LogicalOperator::And, lhs, rhs).into()
    }

    pub fn or(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        LogicalBinaryExpression::new(LogicalOperator::Or, lhs, rhs).into()
    }
}

impl From<LogicalBinaryExpression> for Expr {
    fn from(value: LogicalBinaryExpression) -> Self {
        Self::LogicalBinary(value)
    }
}

impl Node for LogicalBinaryExpression {
    fn location(&self) -> Option<NodeLocation> {
        self.location
    }

    fn children(&self) -> Vec<&Expr> {
        vec![&*self.left, &*self.right]
    }

    fn accept<R, C, V>(&self, visitor: &mut V, cx: C) -> R
    where
        V: Visitor<R, C> + ?Sized,
    {
        visitor.visit_logical_binary_expression(self, cx)
    }

    fn visit<V: Visit>(&self, mut visit: V) {
        visit.visit_expr_logical_binary(self);
    }
}
