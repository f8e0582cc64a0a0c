use super::{Formatter, Params, ToSql};

use sqltree_core::stmt::Identifier;

/// An identifier, quoted with the flavor's delimiter when it was written
/// delimited.
pub(super) struct Ident<'a>(pub(super) &'a Identifier);

impl ToSql for Ident<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        if !self.0.is_delimited() {
            f.dst.push_str(self.0.value());
            return;
        }

        let quote = f.serializer.flavor.identifier_quote();

        f.dst.push(quote);
        for ch in self.0.value().chars() {
            if ch == quote {
                f.dst.push(quote);
            }
            f.dst.push(ch);
        }
        f.dst.push(quote);
    }
}
