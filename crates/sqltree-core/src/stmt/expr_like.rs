use super::{Expr, Node, NodeLocation, Visit, Visitor};
use crate::{Error, Result};

use std::hash::{Hash, Hasher};

/// Tests if a string expression matches a SQL pattern.
///
/// In `pattern`, `%` matches any run of characters and `_` matches exactly
/// one. The optional `escape` operand names the character that makes the
/// next wildcard match literally.
///
/// # Examples
///
/// ```text
/// name LIKE 'a%'                // names starting with "a"
/// code LIKE '10\%' ESCAPE '\'   // the literal string "10%"
/// ```
///
/// Equality and hashing cover `value`, `pattern` and `escape`. Where the
/// predicate appeared in the source is not part of its identity.
#[derive(Debug, Clone)]
pub struct LikePredicate {
    location: Option<NodeLocation>,
    value: Box<Expr>,
    pattern: Box<Expr>,
    escape: Option<Box<Expr>>,
}

/// Assembles a [`LikePredicate`] from operands that may not all be present.
///
/// Returned by [`LikePredicate::builder`].
#[derive(Debug, Default)]
pub struct LikePredicateBuilder {
    location: Option<NodeLocation>,
    value: Option<Expr>,
    pattern: Option<Expr>,
    escape: Option<Expr>,
}

impl LikePredicate {
    /// Creates a predicate with no source location.
    pub fn new(value: impl Into<Expr>, pattern: impl Into<Expr>, escape: Option<Expr>) -> Self {
        Self::from_parts(None, value.into(), pattern.into(), escape)
    }

    /// Creates a predicate found at `location` in the source text.
    pub fn new_at(
        location: NodeLocation,
        value: impl Into<Expr>,
        pattern: impl Into<Expr>,
        escape: Option<Expr>,
    ) -> Self {
        Self::from_parts(Some(location), value.into(), pattern.into(), escape)
    }

    /// Creates a predicate from operands that may be missing.
    ///
    /// Fails with an invalid construction error naming the first missing
    /// operand when `value` or `pattern` is `None`. A missing `escape` is a
    /// predicate without an `ESCAPE` clause.
    pub fn try_new(
        location: Option<NodeLocation>,
        value: Option<Expr>,
        pattern: Option<Expr>,
        escape: Option<Expr>,
    ) -> Result<Self> {
        let Some(value) = value else {
            return Err(missing("value", location));
        };

        let Some(pattern) = pattern else {
            return Err(missing("pattern", location));
        };

        Ok(Self::from_parts(location, value, pattern, escape))
    }

    pub fn builder() -> LikePredicateBuilder {
        LikePredicateBuilder::default()
    }

    fn from_parts(
        location: Option<NodeLocation>,
        value: Expr,
        pattern: Expr,
        escape: Option<Expr>,
    ) -> Self {
        Self {
            location,
            value: Box::new(value),
            pattern: Box::new(pattern),
            escape: escape.map(Box::new),
        }
    }

    /// The string expression being matched.
    pub fn value(&self) -> &Expr {
        &self.value
    }

    /// The pattern to match against.
    pub fn pattern(&self) -> &Expr {
        &self.pattern
    }

    /// The `ESCAPE` operand, if the predicate has one.
    pub fn escape(&self) -> Option<&Expr> {
        self.escape.as_deref()
    }
}

fn missing(operand: &str, location: Option<NodeLocation>) -> Error {
    match location {
        Some(location) => log::debug!("rejected LIKE predicate at {location}: no {operand}"),
        None => log::debug!("rejected LIKE predicate: no {operand}"),
    }

    Error::invalid_construction(format!("{operand} is missing"))
}

impl PartialEq for LikePredicate {
    fn eq(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }

        self.escape == other.escape && self.pattern == other.pattern && self.value == other.value
    }
}

impl Eq for LikePredicate {}

impl Hash for LikePredicate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
        self.pattern.hash(state);
        // `None` hashes its discriminant alone, distinct from any escape
        self.escape.hash(state);
    }
}

impl LikePredicateBuilder {
    pub fn location(mut self, location: NodeLocation) -> Self {
        self.location = Some(location);
        self
    }

    pub fn value(mut self, value: impl Into<Expr>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn pattern(mut self, pattern: impl Into<Expr>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    pub fn escape(mut self, escape: impl Into<Expr>) -> Self {
        self.escape = Some(escape.into());
        self
    }

    pub fn build(self) -> Result<LikePredicate> {
        LikePredicate::try_new(self.location, self.value, self.pattern, self.escape)
    }
}

impl Expr {
    pub fn like(value: impl Into<Self>, pattern: impl Into<Self>) -> Self {
        LikePredicate::new(value, pattern, None).into()
    }

    pub fn like_escape(
        value: impl Into<Self>,
        pattern: impl Into<Self>,
        escape: impl Into<Self>,
    ) -> Self {
        LikePredicate::new(value, pattern, Some(escape.into())).into()
    }
}

impl From<LikePredicate> for Expr {
    fn from(value: LikePredicate) -> Self {
        Self::Like(value)
    }
}

impl Node for LikePredicate {
    fn location(&self) -> Option<NodeLocation> {
        self.location
    }

    fn children(&self) -> Vec<&Expr> {
        let mut children = vec![&*self.value, &*self.pattern];
        children.extend(self.escape());
        children
    }

    fn accept<R, C, V>(&self, visitor: &mut V, cx: C) -> R
    where
        V: Visitor<R, C> + ?Sized,
    {
        visitor.visit_like_predicate(self, cx)
    }

    fn visit<V: Visit>(&self, mut visit: V) {
        visit.visit_expr_like(self);
    }
}
