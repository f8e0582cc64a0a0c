use super::{Formatter, Ident, Nesting, Params, ToSql, Value};

use sqltree_core::stmt::{
    BooleanLiteral, Expr, Identifier, IsNullPredicate, LikePredicate, LogicalBinaryExpression,
    LongLiteral, Node, NotExpression, NullLiteral, StringLiteral, Visitor,
};

impl ToSql for &Expr {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        self.accept(f, Nesting::Nested);
    }
}

impl<P: Params> Formatter<'_, P> {
    fn parenthesized(&mut self, cx: Nesting, body: impl FnOnce(&mut Self)) {
        if cx == Nesting::Nested {
            self.dst.push('(');
        }

        body(self);

        if cx == Nesting::Nested {
            self.dst.push(')');
        }
    }

    fn literal(&mut self, value: Value) {
        if let Some(params) = &mut self.params {
            let placeholder = params.push(&value);
            fmt!(self, placeholder);
        } else {
            fmt!(self, &value);
        }
    }
}

impl<P: Params> Visitor<(), Nesting> for Formatter<'_, P> {
    fn visit_node(&mut self, node: &dyn Node, _cx: Nesting) {
        todo!("node={node:?}")
    }

    fn visit_boolean_literal(&mut self, node: &BooleanLiteral, _cx: Nesting) {
        self.literal(Value::Bool(node.value()));
    }

    fn visit_identifier(&mut self, node: &Identifier, _cx: Nesting) {
        fmt!(self, Ident(node));
    }

    fn visit_is_null_predicate(&mut self, node: &IsNullPredicate, cx: Nesting) {
        self.parenthesized(cx, |f| {
            if node.is_negated() {
                fmt!(f, node.value(), " IS NOT NULL");
            } else {
                fmt!(f, node.value(), " IS NULL");
            }
        });
    }

    fn visit_like_predicate(&mut self, node: &LikePredicate, cx: Nesting) {
        self.parenthesized(cx, |f| {
            fmt!(f, node.value(), " LIKE ", node.pattern());

            if let Some(escape) = node.escape() {
                fmt!(f, " ESCAPE ", escape);
            }
        });
    }

    fn visit_logical_binary_expression(&mut self, node: &LogicalBinaryExpression, cx: Nesting) {
        let operator = node.operator().to_string();

        self.parenthesized(cx, |f| {
            fmt!(f, node.left(), " ", operator.as_str(), " ", node.right());
        });
    }

    fn visit_long_literal(&mut self, node: &LongLiteral, _cx: Nesting) {
        self.literal(Value::I64(node.value()));
    }

    fn visit_not_expression(&mut self, node: &NotExpression, cx: Nesting) {
        self.parenthesized(cx, |f| {
            fmt!(f, "NOT ", node.value());
        });
    }

    fn visit_null_literal(&mut self, _node: &NullLiteral, _cx: Nesting) {
        fmt!(self, "null");
    }

    fn visit_string_literal(&mut self, node: &StringLiteral, _cx: Nesting) {
        self.literal(Value::String(node.value().to_string()));
    }
}
