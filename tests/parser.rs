use std::rc::Rc;

use laika::{
    ast::{
        BinaryOperator, Expr, ForLoop, FunctionDef, LogicalOperator, Program, Property, Statement,
        UnaryOperator,
    },
    parse_program,
};
use pretty_assertions::assert_eq;

fn num(value: f64) -> Box<Expr> {
    Box::new(Expr::NumericLiteral(value))
}

fn ident(name: &str) -> Expr {
    Expr::Identifier(name.to_string())
}

fn body_of(src: &str) -> Vec<Statement> {
    match parse_program(src) {
        Ok(Program { body }) => body,
        Err(e) => panic!("Failed to parse {src:?}: {e}"),
    }
}

fn single_expression(src: &str) -> Expr {
    match body_of(src).as_slice() {
        [Statement::Expression(expr)] => expr.clone(),
        other => panic!("Expected one expression statement, got {other:?}"),
    }
}

#[test]
fn multiplicative_binds_tighter_than_additive() {
    let expected = Statement::VariableDeclaration { constant: false,
                                                    name:     "x".into(),
                                                    value:    Some(Expr::Binary { left:  num(1.0),
                                                                                  op:    BinaryOperator::Add,
                                                                                  right: Box::new(Expr::Binary { left:  num(2.0),
                                                                                                                 op:    BinaryOperator::Mul,
                                                                                                                 right: num(3.0), }), }), };

    assert_eq!(body_of("mut x = 1 + 2 * 3;"), vec![expected]);
}

#[test]
fn additive_is_left_associative() {
    let expected = Expr::Binary { left:  Box::new(Expr::Binary { left:  num(10.0),
                                                                 op:    BinaryOperator::Sub,
                                                                 right: num(4.0), }),
                                  op:    BinaryOperator::Sub,
                                  right: num(3.0), };

    assert_eq!(single_expression("10 - 4 - 3"), expected);
}

#[test]
fn assignment_is_right_associative() {
    let expected = Expr::Assignment { assignee: Box::new(ident("a")),
                                      value:    Box::new(Expr::Assignment { assignee: Box::new(ident("b")),
                                                                            value:    num(1.0), }), };

    assert_eq!(single_expression("a = b = 1"), expected);
}

#[test]
fn unary_operators_take_whole_boolean_expressions() {
    let expected = Expr::Unary { op:      UnaryOperator::Not,
                                 operand: Box::new(Expr::Logical { left:  Box::new(ident("a")),
                                                                   op:    LogicalOperator::And,
                                                                   right: Box::new(ident("b")), }), };
    assert_eq!(single_expression("!a and b"), expected);

    let expected = Expr::Unary { op:      UnaryOperator::Not,
                                 operand: Box::new(Expr::Unary { op:      UnaryOperator::Not,
                                                                 operand: Box::new(ident("x")), }), };
    assert_eq!(single_expression("!!x"), expected);
}

#[test]
fn logical_precedence() {
    // or < and < comparison
    let expected =
        Expr::Logical { left:  Box::new(ident("a")),
                        op:    LogicalOperator::Or,
                        right: Box::new(Expr::Logical { left:  Box::new(ident("b")),
                                                        op:    LogicalOperator::And,
                                                        right: Box::new(Expr::Logical { left:  Box::new(ident("c")),
                                                                                        op:    LogicalOperator::Less,
                                                                                        right: num(1.0), }), }), };

    assert_eq!(single_expression("a or b and c < 1"), expected);
}

#[test]
fn member_and_call_chains_compose() {
    let call_x = Expr::Call { caller:    Box::new(ident("f")),
                              arguments: vec![ident("x")], };
    let call_y = Expr::Call { caller:    Box::new(call_x),
                              arguments: vec![ident("y")], };
    let dot_z = Expr::Member { object:   Box::new(call_y),
                               property: Box::new(ident("z")),
                               computed: false, };
    let index_w = Expr::Member { object:   Box::new(dot_z),
                                 property: Box::new(ident("w")),
                                 computed: true, };

    assert_eq!(single_expression("f(x)(y).z[w]"), index_w);
}

#[test]
fn object_literals() {
    let expected = Expr::ObjectLiteral(vec![Property { key:   "a".into(),
                                                       value: None, },
                                            Property { key:   "b".into(),
                                                       value: Some(Expr::StringLiteral("s".into())), }]);

    assert_eq!(single_expression("{ a, b: \"s\", }"), expected);
    assert_eq!(single_expression("{}"), Expr::ObjectLiteral(vec![]));
}

#[test]
fn function_declaration() {
    let expected = Statement::Function(Rc::new(FunctionDef { name:       "add".into(),
                                                             parameters: vec!["a".into(), "b".into()],
                                                             body:       vec![Statement::Return(Some(Expr::Binary { left:  Box::new(ident("a")),
                                                                                                                    op:    BinaryOperator::Add,
                                                                                                                    right: Box::new(ident("b")), }))], }));

    assert_eq!(body_of("fn add(a, b) { return a + b; }"), vec![expected]);
}

#[test]
fn return_without_value() {
    let expected = Statement::Function(Rc::new(FunctionDef { name:       "f".into(),
                                                             parameters: vec![],
                                                             body:       vec![Statement::Return(None)], }));

    assert_eq!(body_of("fn f() { return }"), vec![expected.clone()]);
    assert_eq!(body_of("fn f() { return; }"), vec![expected]);

    let split = Statement::Function(Rc::new(FunctionDef { name:       "f".into(),
                                                          parameters: vec![],
                                                          body:       vec![Statement::Return(None),
                                                                           Statement::Expression(Expr::NumericLiteral(1.0))], }));
    assert_eq!(body_of("fn f() { return\n 1 }"), vec![split]);
}

#[test]
fn else_if_nests_inside_else_branch() {
    let inner = Statement::If { condition:   ident("b"),
                                then_branch: vec![Statement::Expression(Expr::NumericLiteral(2.0))],
                                else_branch: vec![Statement::Expression(Expr::NumericLiteral(3.0))], };
    let expected = Statement::If { condition:   ident("a"),
                                   then_branch: vec![Statement::Expression(Expr::NumericLiteral(1.0))],
                                   else_branch: vec![inner], };

    assert_eq!(body_of("if (a) { 1 } else if (b) { 2 } else { 3 }"), vec![expected]);
}

#[test]
fn for_loop_clauses() {
    let expected = Statement::For(ForLoop { initializer: Some(Box::new(Statement::VariableDeclaration { constant: false,
                                                                                                        name:     "i".into(),
                                                                                                        value:    Some(Expr::NumericLiteral(0.0)), })),
                                            condition:   Some(Expr::Logical { left:  Box::new(ident("i")),
                                                                              op:    LogicalOperator::Less,
                                                                              right: num(3.0), }),
                                            increment:   Some(Expr::Unary { op:      UnaryOperator::Increment,
                                                                            operand: Box::new(ident("i")), }),
                                            body:        vec![Statement::Pass], });

    assert_eq!(body_of("for (mut i = 0; i < 3; ++i) { pass; }"), vec![expected]);

    let empty = Statement::For(ForLoop { initializer: None,
                                         condition:   None,
                                         increment:   None,
                                         body:        vec![Statement::Break], });
    assert_eq!(body_of("for (;;) { break }"), vec![empty]);
}

#[test]
fn semicolons_are_optional_between_statements() {
    let with = body_of("mut a = 1; mut b = 2;");
    let without = body_of("mut a = 1\nmut b = 2");
    let extra = body_of(";;mut a = 1;;; mut b = 2;;");

    assert_eq!(with, without);
    assert_eq!(with, extra);
    assert_eq!(with.len(), 2);
}

#[test]
fn keep_declarations_are_constant() {
    assert_eq!(body_of("keep k = 1"),
               vec![Statement::VariableDeclaration { constant: true,
                                                     name:     "k".into(),
                                                     value:    Some(Expr::NumericLiteral(1.0)), }]);
}
