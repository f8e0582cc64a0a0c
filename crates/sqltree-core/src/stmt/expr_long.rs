use super::{Expr, Node, NodeLocation, Visit, Visitor};

#[derive(Debug, Clone)]
pub struct LongLiteral {
    location: Option<NodeLocation>,
    value: i64,
}

structural_eq!(LongLiteral { value });

impl LongLiteral {
    pub fn new(value: i64) -> Self {
        Self::from_parts(None, value)
    }

    pub fn new_at(location: NodeLocation, value: i64) -> Self {
        Self::from_parts(Some(location), value)
    }

    fn from_parts(location: Option<NodeLocation>, value: i64) -> Self {
        Self { location, value }
    }

    pub fn value(&self) -> i64 {
        self.value
    }
}

impl Expr {
    pub fn long(value: i64) -> Self {
        LongLiteral::new(value).into()
    }
}

impl From<LongLiteral> for Expr {
    fn from(value: LongLiteral) -> Self {
        Self::LongLiteral(value)
    }
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Self::long(value)
    }
}

impl Node for LongLiteral {
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
        visitor.visit_long_literal(self, cx)
    }

    fn visit<V: Visit>(&self, mut visit: V) {
        visit.visit_expr_long(self);
    }
}
