mod expr;
pub use expr::Expr;

mod expr_boolean;
pub use expr_boolean::BooleanLiteral;

mod expr_identifier;
pub use expr_identifier::Identifier;

mod expr_is_null;
pub use expr_is_null::IsNullPredicate;

mod expr_like;
pub use expr_like::{LikePredicate, LikePredicateBuilder};

mod expr_logical_binary;
pub use expr_logical_binary::{LogicalBinaryExpression, LogicalOperator};

mod expr_long;
pub use expr_long::LongLiteral;

mod expr_not;
pub use expr_not::NotExpression;

mod expr_null;
pub use expr_null::NullLiteral;

mod expr_string;
pub use expr_string::StringLiteral;

mod location;
pub use location::NodeLocation;

mod node;
pub use node::Node;

pub mod visit;
pub use visit::Visit;

mod visitor;
pub use visitor::Visitor;
