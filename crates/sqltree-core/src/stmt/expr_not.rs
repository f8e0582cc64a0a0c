use super::{Expr, Node, NodeLocation, Visit, Visitor};

/// Negates a boolean expression.
///
/// # Examples
///
/// ```text
/// NOT (name LIKE 'a%')
/// ```
#[derive(Debug, Clone)]
pub struct NotExpression {
    location: Option<NodeLocation>,
    value: Box<Expr>,
}

structural_eq!(NotExpression { value });

impl NotExpression {
    pub fn new(value: impl Into<Expr>) -> Self {
        Self::from_parts(None, value.into())
    }

    pub fn new_at(location: NodeLocation, value: impl Into<Expr>) -> Self {
        Self::from_parts(Some(location), value.into())
    }

    fn from_parts(location: Option<NodeLocation>, value: Expr) -> Self {
        Self {
            location,
            value: Box::new(value),
        }
    }

    /// The expression to negate.
    pub fn value(&self) -> &Expr {
        &self.value
    }
}

impl Expr {
    /// Creates a `NOT` expression that negates the given expression.
    pub fn not(expr: impl Into<Self>) -> Self {
        NotExpression::new(expr).into()
    }

    /// Returns true if this is a `NOT` expression.
    pub fn is_not(&self) -> bool {
        matches!(self, Self::Not(_))
    }
}

impl From<NotExpression> for Expr {
    fn from(value: NotExpression) -> Self {
        Self::Not(value)
    }
}

impl Node for NotExpression {
    fn location(&self) -> Option<NodeLocation> {
        self.location
    }

    fn children(&self) -> Vec<&Expr> {
        vec![&*self.value]
    }

    fn accept<R, C, V>(&self, visitor: &mut V, cx: C) -> R
    where
        V: Visitor<R, C> + ?Sized,
    {
        visitor.visit_not_expression(self, cx)
    }

    fn visit<V: Visit>(&self, mut visit: V) {
        visit.visit_expr_not(self);
    }
}
