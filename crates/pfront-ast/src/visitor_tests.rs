use crate::test_utils::{assign, call, loc, no_op};
use crate::{CompoundStmt, Expr, ExprKind, Statement, Visitor, walk_compound, walk_if};

/// Records the name of every statement and expression it is shown.
#[derive(Default)]
struct Trace {
    events: Vec<String>,
}

impl Visitor for Trace {
    fn visit_compound(&mut self, compound: &CompoundStmt) {
        self.events.push(format!("block[{}]", compound.len()));
        walk_compound(self, compound);
    }

    fn visit_if(
        &mut self,
        condition: &Expr,
        then_branch: &CompoundStmt,
        else_branch: &CompoundStmt,
    ) {
        self.events.push("if".into());
        walk_if(self, condition, then_branch, else_branch);
    }

    fn visit_leaf(&mut self, stmt: &Statement) {
        self.events.push(stmt.name().into());
        crate::walk_leaf(self, stmt);
    }

    fn visit_expr(&mut self, expr: &Expr) {
        self.events.push(format!("expr {expr}"));
        crate::walk_expr(self, expr);
    }
}

fn trace(stmt: &Statement) -> Vec<String> {
    let mut visitor = Trace::default();
    visitor.visit_statement(stmt);
    visitor.events
}

#[test]
fn visits_in_source_order() {
    let block = CompoundStmt::new(loc(0, 20), [assign("x", 1, 1), call("f", 5)]);

    assert_eq!(
        trace(&block.into()),
        ["block[2]", "Assign", "expr x", "expr 1", "Call"]
    );
}

#[test]
fn leaves_are_never_compounds_or_no_ops() {
    #[derive(Default)]
    struct Leaves(Vec<&'static str>);

    impl Visitor for Leaves {
        fn visit_leaf(&mut self, stmt: &Statement) {
            assert!(!stmt.is_compound());
            assert!(!stmt.is_no_op());
            self.0.push(stmt.name());
        }
    }

    let body = CompoundStmt::new(
        loc(21, 30),
        [no_op(22), Statement::Break { location: loc(24, 29) }],
    );
    let nested = CompoundStmt::new(
        loc(0, 50),
        [
            no_op(0),
            CompoundStmt::new(loc(1, 10), [call("a", 2), no_op(3)]).into(),
            Statement::while_loop(
                loc(10, 30),
                Expr::bool(true, loc(16, 20)),
                body.into(),
            ),
        ],
    );

    let mut leaves = Leaves::default();
    leaves.visit_compound(&nested);
    assert_eq!(leaves.0, ["Call", "Break"]);
}

#[test]
fn if_visits_condition_then_both_branches() {
    let stmt = Statement::if_else(
        loc(0, 30),
        Expr::var("ready", loc(4, 9)),
        call("go", 11),
        Some(call("wait", 20)),
    );

    assert_eq!(
        trace(&stmt),
        ["if", "expr ready", "block[1]", "Call", "block[1]", "Call"]
    );
}

#[test]
fn missing_else_is_visited_as_empty_block() {
    let stmt = Statement::if_else(loc(0, 10), Expr::bool(false, loc(4, 9)), call("go", 9), None);

    assert_eq!(trace(&stmt), ["if", "expr false", "block[1]", "Call", "block[0]"]);
}

#[test]
fn expressions_are_walked_recursively() {
    let at = loc(0, 10);
    let inner = Expr::new(
        ExprKind::Call {
            function: "g".into(),
            args: vec![Expr::int(2, at)],
        },
        at,
    );
    let stmt = Statement::Send {
        location: at,
        machine: Expr::new(ExprKind::This, at),
        event: Expr::var("eReq", at),
        payload: Some(inner),
    };

    assert_eq!(
        trace(&stmt),
        ["Send", "expr this", "expr eReq", "expr g(2)", "expr 2"]
    );
}

#[test]
fn skipping_walk_prunes_subtree() {
    #[derive(Default)]
    struct Shallow(usize);

    impl Visitor for Shallow {
        fn visit_while(&mut self, _: &Expr, _: &CompoundStmt) {}

        fn visit_leaf(&mut self, _: &Statement) {
            self.0 += 1;
        }
    }

    let block = CompoundStmt::new(
        loc(0, 40),
        [
            call("before", 1),
            Statement::while_loop(loc(5, 30), Expr::bool(true, loc(11, 15)), call("inside", 17)),
            call("after", 31),
        ],
    );

    let mut shallow = Shallow::default();
    shallow.visit_compound(&block);
    assert_eq!(shallow.0, 2);
}
