#[macro_use]
mod macros;

mod error;
pub use error::{Error, IntoError};

pub mod stmt;
pub use stmt::{Expr, LikePredicate, Node, NodeLocation, Visitor};

/// A Result type alias that uses sqltree's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
