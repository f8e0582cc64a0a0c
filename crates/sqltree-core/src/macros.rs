/// Implements `PartialEq`, `Eq` and `Hash` for a node over the listed fields.
///
/// The node's location is never listed: two nodes parsed at different
/// positions with the same content are the same expression.
macro_rules! structural_eq {
    ( $ty:ident { $( $field:ident ),* } ) => {
        impl PartialEq for $ty {
            #[allow(unused_variables)]
            fn eq(&self, other: &Self) -> bool {
                true $( && self.$field == other.$field )*
            }
        }

        impl Eq for $ty {}

        impl core::hash::Hash for $ty {
            #[allow(unused_variables)]
            fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
                $( core::hash::Hash::hash(&self.$field, state); )*
            }
        }
    };
}
