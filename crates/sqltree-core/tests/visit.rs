use pretty_assertions::assert_eq;
use sqltree_core::stmt::{self, visit, Expr, Identifier, LikePredicate, Node, Visit};

#[test]
fn walk_reaches_every_like_operand() {
    #[derive(Default)]
    struct Identifiers(Vec<String>);

    impl Visit for Identifiers {
        fn visit_expr_identifier(&mut self, i: &Identifier) {
            self.0.push(i.value().to_string());
        }
    }

    let expr = Expr::or(
        Expr::like_escape(
            Expr::identifier("a"),
            Expr::identifier("b"),
            Expr::identifier("c"),
        ),
        Expr::is_not_null(Expr::identifier("d")),
    );

    let mut ids = Identifiers::default();
    ids.visit(&expr);

    assert_eq!(ids.0, ["a", "b", "c", "d"]);
}

#[test]
fn overriding_like_can_stop_descent() {
    #[derive(Default)]
    struct Shallow {
        likes: usize,
        identifiers: usize,
    }

    impl Visit for Shallow {
        fn visit_expr_like(&mut self, _: &LikePredicate) {
            self.likes += 1;
        }

        fn visit_expr_identifier(&mut self, _: &Identifier) {
            self.identifiers += 1;
        }
    }

    let expr = Expr::and(
        Expr::like(Expr::identifier("a"), Expr::string("%")),
        Expr::identifier("b"),
    );

    let mut shallow = Shallow::default();
    shallow.visit(&expr);

    assert_eq!(shallow.likes, 1);
    assert_eq!(shallow.identifiers, 1);
}

#[test]
fn overriding_like_can_keep_descending() {
    #[derive(Default)]
    struct Deep {
        likes: usize,
        leaves: usize,
    }

    impl Visit for Deep {
        fn visit_expr_like(&mut self, i: &LikePredicate) {
            self.likes += 1;
            visit::visit_expr_like(self, i);
        }

        fn visit_expr_string(&mut self, _: &stmt::StringLiteral) {
            self.leaves += 1;
        }
    }

    let like = LikePredicate::new(
        Expr::like(Expr::identifier("a"), Expr::string("x")),
        Expr::string("y"),
        Some(Expr::string("z")),
    );

    let mut deep = Deep::default();
    like.visit(&mut deep);

    assert_eq!(deep.likes, 2);
    assert_eq!(deep.leaves, 3);
}

#[test]
fn for_each_expr_is_post_order() {
    let expr = Expr::not(Expr::like(Expr::identifier("x"), Expr::string("a%")));

    let mut seen = vec![];
    visit::for_each_expr(&expr, |e| seen.push(e.clone()));

    assert_eq!(
        seen,
        vec![
            Expr::identifier("x"),
            Expr::string("a%"),
            Expr::like(Expr::identifier("x"), Expr::string("a%")),
            expr.clone(),
        ]
    );
}

#[test]
fn for_each_expr_skips_absent_escape() {
    let without = Expr::like(Expr::identifier("x"), Expr::string("a%"));
    let with = Expr::like_escape(Expr::identifier("x"), Expr::string("a%"), Expr::null());

    let count = |expr: &Expr| {
        let mut n = 0;
        visit::for_each_expr(expr, |_| n += 1);
        n
    };

    assert_eq!(count(&without), 3);
    assert_eq!(count(&with), 4);
}
