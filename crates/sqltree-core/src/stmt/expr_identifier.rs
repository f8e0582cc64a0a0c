use super::{Expr, Node, NodeLocation, Visit, Visitor};

/// References a column, alias or other named object.
///
/// A delimited identifier was written in quotes (`"Name"`) and keeps its case;
/// it is a different identifier from the undelimited `Name`.
///
/// # Examples
///
/// ```text
/// x        // Identifier { value: "x", delimited: false }
/// "Order"  // Identifier { value: "Order", delimited: true }
/// ```
#[derive(Debug, Clone)]
pub struct Identifier {
    location: Option<NodeLocation>,
    value: String,
    delimited: bool,
}

structural_eq!(Identifier { value, delimited });

impl Identifier {
    pub fn new(value: impl Into<String>) -> Self {
        Self::from_parts(None, value.into(), false)
    }

    pub fn new_at(location: NodeLocation, value: impl Into<String>, delimited: bool) -> Self {
        Self::from_parts(Some(location), value.into(), delimited)
    }

    /// Creates an identifier that was written in quotes.
    pub fn delimited(value: impl Into<String>) -> Self {
        Self::from_parts(None, value.into(), true)
    }

    fn from_parts(location: Option<NodeLocation>, value: String, delimited: bool) -> Self {
        Self {
            location,
            value,
            delimited,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_delimited(&self) -> bool {
        self.delimited
    }
}

impl Expr {
    pub fn identifier(value: impl Into<String>) -> Self {
        Identifier::new(value).into()
    }
}

impl From<Identifier> for Expr {
    fn from(value: Identifier) -> Self {
        Self::Identifier(value)
    }
}

impl Node for Identifier {
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
        visitor.visit_identifier(self, cx)
    }

    fn visit<V: Visit>(&self, mut visit: V) {
        visit.visit_expr_identifier(self);
    }
}
