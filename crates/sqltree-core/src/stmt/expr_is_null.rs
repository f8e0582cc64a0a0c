use super::{Expr, Node, NodeLocation, Visit, Visitor};

/// Tests whether an expression is null.
///
/// # Examples
///
/// ```text
/// x IS NULL      // negated: false
/// x IS NOT NULL  // negated: true
/// ```
#[derive(Debug, Clone)]
pub struct IsNullPredicate {
    location: Option<NodeLocation>,
    value: Box<Expr>,
    negated: bool,
}

structural_eq!(IsNullPredicate { value, negated });

impl IsNullPredicate {
    pub fn new(value: impl Into<Expr>, negated: bool) -> Self {
        Self::from_parts(None, value.into(), negated)
    }

    pub fn new_at(location: NodeLocation, value: impl Into<Expr>, negated: bool) -> Self {
        Self::from_parts(Some(location), value.into(), negated)
    }

    fn from_parts(location: Option<NodeLocation>, value: Expr, negated: bool) -> Self {
        Self {
            location,
            value: Box::new(value),
            negated,
        }
    }

    /// The expression to check for null.
    pub fn value(&self) -> &Expr {
        &self.value
    }

    /// When `true`, this is an `IS NOT NULL` check.
    pub fn is_negated(&self) -> bool {
        self.negated
    }
}

impl Expr {
    pub fn is_null(expr: impl Into<Self>) -> Self {
        IsNullPredicate::new(expr, false).into()
    }

    pub fn is_not_null(expr: impl Into<Self>) -> Self {
        IsNullPredicate::new(expr, true).into()
    }
}

impl From<IsNullPredicate> for Expr {
    fn from(value: IsNullPredicate) -> Self {
        Self::IsNull(value)
    }
}

impl Node for IsNullPredicate {
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
        visitor.visit_is_null_predicate(self, cx)
    }

    fn visit<V: Visit>(&self, mut visit: V) {
        visit.visit_expr_is_null(self);
    }
}
