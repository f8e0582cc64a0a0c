use super::{Expr, Node, NodeLocation, Visit, Visitor};

/// The `NULL` constant.
#[derive(Debug, Clone, Default)]
pub struct NullLiteral {
    location: Option<NodeLocation>,
}

structural_eq!(NullLiteral {});

impl NullLiteral {
    pub fn new() -> Self {
        Self { location: None }
    }

    pub fn new_at(location: NodeLocation) -> Self {
        Self {
            location: Some(location),
        }
    }
}

impl Expr {
    pub fn null() -> Self {
        NullLiteral::new().into()
    }

    /// Is the `NULL` literal
    pub fn is_null_literal(&self) -> bool {
        matches!(self, Self::NullLiteral(_))
    }
}

impl From<NullLiteral> for Expr {
    fn from(value: NullLiteral) -> Self {
        Self::NullLiteral(value)
    }
}

impl Node for NullLiteral {
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
        visitor.visit_null_literal(self, cx)
    }

    fn visit<V: Visit>(&self, mut visit: V) {
        visit.visit_expr_null(self);
    }
}
