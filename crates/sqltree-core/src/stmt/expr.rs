use super::*;

/// An expression node.
///
/// Equality and hashing are structural and only defined within a variant: a
/// `Like` is never equal to a `Not`, even if their operands coincide. Source
/// locations do not take part in either.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    /// `true` or `false`
    BooleanLiteral(BooleanLiteral),

    /// A column, alias or other name reference
    Identifier(Identifier),

    /// `value IS [NOT] NULL`
    IsNull(IsNullPredicate),

    /// `value LIKE pattern [ESCAPE escape]`
    Like(LikePredicate),

    /// `left AND right` or `left OR right`
    LogicalBinary(LogicalBinaryExpression),

    /// A 64-bit integer constant
    LongLiteral(LongLiteral),

    /// `NOT value`
    Not(NotExpression),

    /// `NULL`
    NullLiteral(NullLiteral),

    /// A single-quoted string constant
    StringLiteral(StringLiteral),
}

impl Expr {
    /// Returns true if the expression is a LIKE predicate.
    pub fn is_like(&self) -> bool {
        matches!(self, Self::Like(_))
    }

    pub fn as_like(&self) -> Option<&LikePredicate> {
        match self {
            Self::Like(expr) => Some(expr),
            _ => None,
        }
    }

    /// Returns true if the expression is a constant.
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            Self::BooleanLiteral(_)
                | Self::LongLiteral(_)
                | Self::NullLiteral(_)
                | Self::StringLiteral(_)
        )
    }

    fn as_node(&self) -> &dyn Node {
        match self {
            Self::BooleanLiteral(expr) => expr,
            Self::Identifier(expr) => expr,
            Self::IsNull(expr) => expr,
            Self::Like(expr) => expr,
            Self::LogicalBinary(expr) => expr,
            Self::LongLiteral(expr) => expr,
            Self::Not(expr) => expr,
            Self::NullLiteral(expr) => expr,
            Self::StringLiteral(expr) => expr,
        }
    }
}

impl Node for Expr {
    fn location(&self) -> Option<NodeLocation> {
        self.as_node().location()
    }

    fn children(&self) -> Vec<&Expr> {
        self.as_node().children()
    }

    fn accept<R, C, V>(&self, visitor: &mut V, cx: C) -> R
    where
        V: Visitor<R, C> + ?Sized,
    {
        match self {
            Self::BooleanLiteral(expr) => expr.accept(visitor, cx),
            Self::Identifier(expr) => expr.accept(visitor, cx),
            Self::IsNull(expr) => expr.accept(visitor, cx),
            Self::Like(expr) => expr.accept(visitor, cx),
            Self::LogicalBinary(expr) => expr.accept(visitor, cx),
            Self::LongLiteral(expr) => expr.accept(visitor, cx),
            Self::Not(expr) => expr.accept(visitor, cx),
            Self::NullLiteral(expr) => expr.accept(visitor, cx),
            Self::StringLiteral(expr) => expr.accept(visitor, cx),
        }
    }

    fn visit<V: Visit>(&self, mut visit: V) {
        visit.visit_expr(self);
    }
}
