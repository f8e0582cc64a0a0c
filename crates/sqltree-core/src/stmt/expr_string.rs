use super::{Expr, Node, NodeLocation, Visit, Visitor};

/// A string constant, e.g. the `'a%'` in `name LIKE 'a%'`.
///
/// The value is stored unescaped: the SQL text `'it''s'` is the value `it's`.
#[derive(Debug, Clone)]
pub struct StringLiteral {
    location: Option<NodeLocation>,
    value: String,
}

structural_eq!(StringLiteral { value });

impl StringLiteral {
    pub fn new(value: impl Into<String>) -> Self {
        Self::from_parts(None, value.into())
    }

    pub fn new_at(location: NodeLocation, value: impl Into<String>) -> Self {
        Self::from_parts(Some(location), value.into())
    }

    fn from_parts(location: Option<NodeLocation>, value: String) -> Self {
        Self { location, value }
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl Expr {
    pub fn string(value: impl Into<String>) -> Self {
        StringLiteral::new(value).into()
    }
}

impl From<StringLiteral> for Expr {
    fn from(value: StringLiteral) -> Self {
        Self::StringLiteral(value)
    }
}

impl Node for StringLiteral {
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
        visitor.visit_string_literal(self, cx)
    }

    fn visit<V: Visit>(&self, mut visit: V) {
        visit.visit_expr_string(self);
    }
}
