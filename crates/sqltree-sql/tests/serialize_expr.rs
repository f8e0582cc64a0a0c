use pretty_assertions::assert_eq;
use sqltree_core::stmt::{Expr, Identifier, LikePredicate, NodeLocation};
use sqltree_sql::{Params, Placeholder, Serializer, Value};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn scenario() -> Expr {
    LikePredicate::new(
        Expr::identifier("x"),
        Expr::string("a%"),
        Some(Expr::string("\\")),
    )
    .into()
}

#[test]
fn like_with_escape() {
    init_logging();

    assert_eq!(
        Serializer::ansi().serialize(&scenario()),
        r"x LIKE 'a%' ESCAPE '\'"
    );
}

#[test]
fn like_without_escape() {
    let expr = Expr::like(Expr::identifier("name"), Expr::string("_b%"));
    assert_eq!(Serializer::ansi().serialize(&expr), "name LIKE '_b%'");
}

#[test]
fn location_does_not_change_output() {
    let located: Expr = LikePredicate::new_at(
        NodeLocation::new(4, 2),
        Expr::identifier("x"),
        Expr::string("a%"),
        Some(Expr::string("\\")),
    )
    .into();

    let serializer = Serializer::ansi();
    assert_eq!(serializer.serialize(&located), serializer.serialize(&scenario()));
}

#[test]
fn nested_predicates_are_parenthesized() {
    let expr = Expr::and(
        Expr::like(Expr::identifier("a"), Expr::string("x%")),
        Expr::or(
            Expr::not(Expr::is_null(Expr::identifier("b"))),
            Expr::is_not_null(Expr::identifier("c")),
        ),
    );

    assert_eq!(
        Serializer::ansi().serialize(&expr),
        "(a LIKE 'x%') AND ((NOT (b IS NULL)) OR (c IS NOT NULL))"
    );
}

#[test]
fn like_operands_can_be_compound() {
    let expr = Expr::like(
        Expr::like(Expr::identifier("a"), Expr::string("b")),
        Expr::identifier("p"),
    );

    assert_eq!(
        Serializer::ansi().serialize(&expr),
        "(a LIKE 'b') LIKE p"
    );
}

#[test]
fn literals_inline() {
    let expr = Expr::and(
        Expr::like_escape(Expr::identifier("s"), Expr::string("it''s"), Expr::null()),
        Expr::and(Expr::boolean(true), Expr::long(-7)),
    );

    assert_eq!(
        Serializer::ansi().serialize(&expr),
        "(s LIKE 'it''''s' ESCAPE null) AND (true AND -7)"
    );
}

#[test]
fn delimited_identifiers_follow_flavor() {
    let expr = Expr::like(Identifier::delimited("Na\"me"), Expr::string("a%"));
    assert_eq!(
        Serializer::postgresql().serialize(&expr),
        r#""Na""me" LIKE 'a%'"#
    );

    let expr = Expr::like(Identifier::delimited("or`der"), Expr::string("a%"));
    assert_eq!(Serializer::mysql().serialize(&expr), "`or``der` LIKE 'a%'");
}

#[test]
fn placeholders_per_flavor() {
    let cases = [
        (Serializer::ansi(), r"x LIKE ? ESCAPE ?"),
        (Serializer::mysql(), r"x LIKE ? ESCAPE ?"),
        (Serializer::postgresql(), r"x LIKE $1 ESCAPE $2"),
        (Serializer::sqlite(), r"x LIKE ?1 ESCAPE ?2"),
    ];

    for (serializer, expected) in cases {
        let mut params = vec![];
        let sql = serializer.serialize_with_params(&scenario(), &mut params);

        assert_eq!(sql, expected);
        assert_eq!(
            params,
            vec![Value::String("a%".into()), Value::String("\\".into())]
        );
    }
}

#[test]
fn null_is_never_a_placeholder() {
    let expr = Expr::and(
        Expr::is_null(Expr::long(1)),
        Expr::like_escape(Expr::identifier("x"), Expr::boolean(false), Expr::null()),
    );

    let mut params = vec![];
    let sql = Serializer::postgresql().serialize_with_params(&expr, &mut params);

    assert_eq!(sql, "($1 IS NULL) AND (x LIKE $2 ESCAPE null)");
    assert_eq!(params, vec![Value::I64(1), Value::Bool(false)]);
}

#[test]
fn custom_params_collector() {
    #[derive(Default)]
    struct Named(Vec<String>);

    impl Params for Named {
        fn push(&mut self, param: &Value) -> Placeholder {
            self.0.push(format!("{param:?}"));
            Placeholder(self.0.len())
        }
    }

    let mut named = Named::default();
    let sql = Serializer::sqlite().serialize_with_params(&scenario(), &mut named);

    assert_eq!(sql, "x LIKE ?1 ESCAPE ?2");
    assert_eq!(named.0, [r#"String("a%")"#, r#"String("\\")"#]);
}
