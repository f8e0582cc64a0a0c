#[macro_use]
mod fmt;
use fmt::ToSql;

mod flavor;
use flavor::Flavor;

mod ident;
use ident::Ident;

mod params;
pub use params::{Params, Placeholder, Value};

// Fragment serializers
mod expr;
mod value;

use sqltree_core::stmt::{Expr, Node};

/// Serialize an expression to a SQL string
#[derive(Debug, Clone)]
pub struct Serializer {
    /// The database flavor handles the differences between SQL dialects:
    /// placeholder syntax and identifier quoting.
    flavor: Flavor,
}

struct Formatter<'a, P> {
    /// Handle to the serializer
    serializer: &'a Serializer,

    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store literals. When `None`, literals are written inline.
    params: Option<&'a mut P>,
}

/// Whether an expression is the outermost one being serialized. Nested
/// compound expressions are wrapped in parentheses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Nesting {
    Top,
    Nested,
}

impl Serializer {
    /// Serializes `expr` with every literal written inline.
    pub fn serialize(&self, expr: &Expr) -> String {
        self.serialize_impl::<Vec<Value>>(expr, None)
    }

    /// Serializes `expr`, replacing string, integer and boolean literals with
    /// placeholders and pushing their values onto `params`.
    pub fn serialize_with_params(&self, expr: &Expr, params: &mut impl Params) -> String {
        self.serialize_impl(expr, Some(params))
    }

    fn serialize_impl<P: Params>(&self, expr: &Expr, params: Option<&mut P>) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            params,
        };

        expr.accept(&mut fmt, Nesting::Top);

        log::trace!("serialized expression; flavor={:?} sql={ret}", self.flavor);
        ret
    }
}
