use super::{Expr, Node, NodeLocation, Visit, Visitor};

#[derive(Debug, Clone)]
pub struct BooleanLiteral {
    location: Option<NodeLocation>,
    value: bool,
}

structural_eq!(BooleanLiteral { value });

impl BooleanLiteral {
    pub fn new(value: bool) -> Self {
        Self::from_parts(None, value)
    }

    pub fn new_at(location: NodeLocation, value: bool) -> Self {
        Self::from_parts(Some(location), value)
    }

    fn from_parts(location: Option<NodeLocation>, value: bool) -> Self {
        Self { location, value }
    }

    pub fn value(&self) -> bool {
        self.value
    }
}

impl Expr {
    pub fn boolean(value: bool) -> Self {
        BooleanLiteral::new(value).into()
    }

    /// Returns true if the expression is the `true` literal
    pub fn is_true(&self) -> bool {
        matches!(self, Self::BooleanLiteral(lit) if lit.value)
    }

    /// Returns true if the expression is the `false` literal
    pub fn is_false(&self) -> bool {
        matches!(self, Self::BooleanLiteral(lit) if !lit.value)
    }
}

impl From<BooleanLiteral> for Expr {
    fn from(value: BooleanLiteral) -> Self {
        Self::BooleanLiteral(value)
    }
}

impl From<bool> for Expr {
    fn from(value: bool) -> Self {
        Self::boolean(value)
    }
}

impl Node for BooleanLiteral {
    fn location(&self) -> Option<NodeLocation> {
        self.location
    }

    fn children(&self) -> Vec<&Expr> {
        vec![]
    }

    fn accept<R, C, V>(&self, visitor: &mut V, cx: C) -> R
    where
        V: Visitor<R, C> + ?Sized,
    {
        visitor.visit_boolean_literal(self, cx)
    }

    fn visit<V: Visit>(&self, mut visit: V) {
        visit.visit_expr_boolean(self);
    }
}
