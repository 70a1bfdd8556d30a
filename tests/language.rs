use std::{
    fs::{self},
    rc::Rc,
};

use laika::{
    Outcome, Session,
    ast::FunctionDef,
    error::{Error, ParseError, RuntimeError},
    interpreter::{
        environment::Environment,
        evaluator::function::core::NATIVE_FUNCTIONS,
        value::core::{FunctionValue, RuntimeValue},
    },
    parse_program, run_source,
};
use walkdir::WalkDir;

#[test]
fn bundled_scripts_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("scripts").into_iter()
                               .filter_map(Result::ok)
                               .filter(|e| e.path().extension().is_some_and(|ext| ext == "lai"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        if let Err(e) = run_source(&content) {
            panic!("Script {path:?} failed:\nError: {e}");
        }
    }

    assert!(count > 0, "No scripts found in scripts/");
}

#[test]
fn readme_examples_work() {
    let content = fs::read_to_string("README.md").expect("README.md should be readable");

    let blocks = extract_laika_blocks(&content);
    assert!(!blocks.is_empty(), "No laika examples found in README.md");

    for (i, code) in blocks.into_iter().enumerate() {
        if let Err(e) = run_source(&code) {
            panic!("README example {} failed:\n{}\nError: {:?}", i + 1, code, e);
        }
    }
}

fn extract_laika_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```laika") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn assert_success(src: &str) {
    if let Err(e) = run_source(src) {
        panic!("Script failed: {e}");
    }
}

fn assert_failure(src: &str) -> Error {
    match run_source(src) {
        Ok(outcome) => panic!("Script succeeded with {outcome:?} but was expected to fail"),
        Err(e) => e,
    }
}

fn assert_runtime_failure(src: &str) -> RuntimeError {
    match assert_failure(src) {
        Error::Runtime(e) => e,
        Error::Parse(e) => panic!("Expected a runtime error, got parse error: {e}"),
    }
}

fn value_of(src: &str) -> RuntimeValue {
    match run_source(src) {
        Ok(Outcome::Value(value)) => value,
        Ok(Outcome::Exit(code)) => panic!("Script exited with status {code}"),
        Err(e) => panic!("Script failed: {e}"),
    }
}

#[test]
fn assignment_and_basic_arithmetic() {
    assert_success("mut x = 1 + 2\nassert(x == 3)");
    assert_success("mut x = 7 * 9\nassert(x == 63)");
    assert_success("mut x = 8 - 5\nassert(x == 3)");
    assert_success("mut x = 10 / 4\nassert(x * 2 == 5)");
    assert_success("mut x = 10 % 4\nassert(x == 2)");
    assert_success("mut x = (1 + 2) * 3\nassert(x == 9)");
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(value_of("1 + 2 * 3"), RuntimeValue::Number(7.0));
    assert_eq!(value_of("10 - 4 - 3"), RuntimeValue::Number(3.0));
}

#[test]
fn constant_reassignment_fails() {
    let err = assert_runtime_failure("keep PI = 3; PI = 4;");
    assert!(matches!(err, RuntimeError::ConstantReassignment { ref name } if name == "PI"));
}

#[test]
fn builtin_globals_are_constants() {
    assert_eq!(value_of("true"), RuntimeValue::Boolean(true));
    assert_eq!(value_of("false"), RuntimeValue::Boolean(false));
    assert_eq!(value_of("null"), RuntimeValue::Null);

    assert!(matches!(assert_runtime_failure("true = 1"),
                     RuntimeError::ConstantReassignment { .. }));
    assert!(matches!(assert_runtime_failure("mut println = 1"), RuntimeError::Redeclaration { .. }));
}

#[test]
fn declarations_and_scoping() {
    assert_eq!(value_of("mut x; x"), RuntimeValue::Null);
    assert!(matches!(assert_runtime_failure("mut a = 1; mut a = 2"),
                     RuntimeError::Redeclaration { .. }));
    assert!(matches!(assert_runtime_failure("y = 1"), RuntimeError::UnresolvedName { .. }));
    assert!(matches!(assert_runtime_failure("y + 1"), RuntimeError::UnresolvedName { .. }));

    // A function scope may shadow a global.
    assert_eq!(value_of("mut a = 1; fn f() { mut a = 2; return a; } f() + a"),
               RuntimeValue::Number(3.0));
}

#[test]
fn while_loop_runs_until_condition_fails() {
    assert_eq!(value_of("mut i = 0; while (i < 3) { i = i + 1; } i"),
               RuntimeValue::Number(3.0));
}

#[test]
fn functions_and_arity() {
    let add = "fn add(a, b) { return a + b; }";

    assert_eq!(value_of(&format!("{add} add(2, 3)")), RuntimeValue::Number(5.0));
    // The missing parameter is Null, and arithmetic on Null yields Null.
    assert_eq!(value_of(&format!("{add} add(2)")), RuntimeValue::Null);
    // Extra arguments are ignored.
    assert_eq!(value_of("fn one(a) { return a; } one(1, 2, 3)"),
               RuntimeValue::Number(1.0));
}

#[test]
fn function_without_return_yields_last_statement() {
    assert_eq!(value_of("fn f() { 1 + 1 } f()"), RuntimeValue::Number(2.0));
    assert_eq!(value_of("fn f() {} f()"), RuntimeValue::Null);
    assert_eq!(value_of("fn f() { return; } f()"), RuntimeValue::Null);
}

#[test]
fn recursion() {
    let src = "fn fib(n) {
                   if (n < 2) { return n; }
                   return fib(n - 1) + fib(n - 2);
               }
               fib(15)";
    assert_eq!(value_of(src), RuntimeValue::Number(610.0));
}

#[test]
fn closures_share_mutable_state() {
    let mut session = Session::new();
    session.run("fn makeCounter() {
                     mut n = 0;
                     fn inc() { n = n + 1; return n; }
                     return inc;
                 }
                 mut counter = makeCounter();")
           .unwrap();

    assert_eq!(session.run("counter()").unwrap(),
               Outcome::Value(RuntimeValue::Number(1.0)));
    assert_eq!(session.run("counter()").unwrap(),
               Outcome::Value(RuntimeValue::Number(2.0)));

    // A second counter has its own state.
    session.run("mut other = makeCounter();").unwrap();
    assert_eq!(session.run("other()").unwrap(),
               Outcome::Value(RuntimeValue::Number(1.0)));
    assert_eq!(session.run("counter()").unwrap(),
               Outcome::Value(RuntimeValue::Number(3.0)));
}

#[test]
fn closures_see_later_mutations() {
    let src = "mut base = 1;
               fn addBase(x) { return x + base; }
               base = 10;
               addBase(5)";
    assert_eq!(value_of(src), RuntimeValue::Number(15.0));
}

#[test]
fn break_stops_loop_immediately() {
    let src = "mut i = 0; mut after = 0;
               while (1) {
                   i = i + 1;
                   if (i == 3) { break; }
                   after = after + 1;
               }
               assert(i == 3)
               assert(after == 2)";
    assert_success(src);
}

#[test]
fn pass_in_for_loop_still_runs_increment() {
    let src = "mut sum = 0; mut k = 0;
               for (k = 0; k < 5; ++k) {
                   if (k == 2) { pass; }
                   sum = sum + k;
               }
               assert(sum == 8)
               assert(k == 5)";
    assert_success(src);
}

#[test]
fn pass_in_while_loop_rechecks_condition() {
    let src = "mut i = 0; mut odd = 0;
               while (i < 6) {
                   ++i;
                   if (i % 2 == 0) { pass; }
                   ++odd;
               }
               odd";
    assert_eq!(value_of(src), RuntimeValue::Number(3.0));
}

#[test]
fn break_only_leaves_innermost_loop() {
    let src = "mut outer = 0; mut total = 0; mut j = 0;
               while (outer < 3) {
                   ++outer;
                   for (j = 0; j < 10; ++j) {
                       if (j == 2) { break; }
                       ++total;
                   }
               }
               total";
    assert_eq!(value_of(src), RuntimeValue::Number(6.0));
}

#[test]
fn for_loop_with_empty_clauses() {
    let src = "mut n = 0;
               for (;;) {
                   ++n;
                   if (n == 4) { break; }
               }
               n";
    assert_eq!(value_of(src), RuntimeValue::Number(4.0));
}

#[test]
fn return_propagates_out_of_loops_and_branches() {
    let src = "fn find() {
                   mut i = 0;
                   while (1) {
                       i = i + 1;
                       if (i == 4) { return i; }
                   }
               }
               find()";
    assert_eq!(value_of(src), RuntimeValue::Number(4.0));

    let src = "fn first_even(limit) {
                   for (mut i = 1; i < limit; ++i) {
                       if (i % 2 == 0) {
                           if (i > 0) { return i; }
                       }
                   }
                   return 0;
               }
               first_even(10)";
    assert_eq!(value_of(src), RuntimeValue::Number(2.0));
}

#[test]
fn loop_signals_outside_loops_fail() {
    assert!(matches!(assert_runtime_failure("break"),
                     RuntimeError::BreakOutsideLoop { keyword: "break" }));
    assert!(matches!(assert_runtime_failure("if (1) { pass; }"),
                     RuntimeError::BreakOutsideLoop { keyword: "pass" }));
    assert!(matches!(assert_runtime_failure("fn f() { break; } while (1) { f(); }"),
                     RuntimeError::BreakOutsideLoop { .. }));
}

#[test]
fn top_level_return_is_exit_status() {
    assert_eq!(run_source("return 3").unwrap(), Outcome::Exit(3));
    assert!(matches!(assert_runtime_failure("mut x = 1; return; x"),
                     RuntimeError::ReturnOutsideFunction { type_name: "null" }));
    assert_eq!(run_source("for (mut i = 0; i < 10; ++i) { if (i == 2) { return i; } }").unwrap(),
               Outcome::Exit(2));

    assert!(matches!(assert_runtime_failure("return \"x\""),
                     RuntimeError::ReturnOutsideFunction { type_name: "string" }));
    assert!(matches!(assert_runtime_failure("return 3 / 2"),
                     RuntimeError::InvalidExitStatus { .. }));
}

#[test]
fn statements_after_top_level_return_do_not_run() {
    let mut session = Session::new();
    assert_eq!(session.run("mut x = 1; return 0; x = 2;").unwrap(),
               Outcome::Exit(0));
    assert_eq!(session.run("x").unwrap(),
               Outcome::Value(RuntimeValue::Number(1.0)));
}

#[test]
fn truthiness() {
    for (value, expected) in [(0.0, false), (1.0, true), (-3.0, true), (0.5, true)] {
        assert_eq!(RuntimeValue::Number(value).is_truthy().unwrap(), expected);
    }
    for (value, expected) in [("", false), ("a", true), ("0", true), (" ", true)] {
        assert_eq!(RuntimeValue::String(value.into()).is_truthy().unwrap(),
                   expected);
    }
    assert!(!RuntimeValue::Null.is_truthy().unwrap());

    assert_eq!(value_of("if (\"\") { 1 } else { 2 }"), RuntimeValue::Number(2.0));
    assert_eq!(value_of("if (0) { 1 } else { 2 }"), RuntimeValue::Number(2.0));
    assert_eq!(value_of("if (null) { 1 } else { 2 }"), RuntimeValue::Number(2.0));
    assert_eq!(value_of("if (\"x\") { 1 } else { 2 }"), RuntimeValue::Number(1.0));

    assert!(matches!(assert_runtime_failure("if ({}) { 1 }"),
                     RuntimeError::NoTruthValue { type_name: "object" }));
    assert!(matches!(assert_runtime_failure("fn f() {} !f"),
                     RuntimeError::NoTruthValue { type_name: "function" }));
}

#[test]
fn literals_round_trip_through_display() {
    for literal in ["0", "42", "1234567"] {
        assert_eq!(value_of(literal).to_string(), literal);
    }
    for text in ["hello", "", "with spaces", "# not a comment"] {
        let src = format!("\"{text}\"");
        assert_eq!(value_of(&src).to_string(), text);
    }
}

#[test]
fn division_by_zero_and_lenient_arithmetic() {
    assert!(matches!(assert_runtime_failure("1/0"), RuntimeError::DivisionByZero));
    assert_eq!(value_of("1 + \"a\""), RuntimeValue::Null);
    assert_eq!(value_of("\"a\" * 2"), RuntimeValue::Null);
    assert_eq!(value_of("null - 1"), RuntimeValue::Null);

    match value_of("5 % 0") {
        RuntimeValue::Number(n) => assert!(n.is_nan()),
        other => panic!("expected a number, got {other:?}"),
    }
}

#[test]
fn comparisons() {
    assert_eq!(value_of("1 < 2"), RuntimeValue::Boolean(true));
    assert_eq!(value_of("2 <= 2"), RuntimeValue::Boolean(true));
    assert_eq!(value_of("3 > 4"), RuntimeValue::Boolean(false));
    assert_eq!(value_of("4 >= 5"), RuntimeValue::Boolean(false));
    assert_eq!(value_of("1 != 2"), RuntimeValue::Boolean(true));
    assert_eq!(value_of("\"a\" == \"a\""), RuntimeValue::Boolean(true));
    assert_eq!(value_of("\"a\" != \"b\""), RuntimeValue::Boolean(true));

    assert!(matches!(assert_runtime_failure("\"a\" < \"b\""), RuntimeError::TypeError { .. }));
    assert!(matches!(assert_runtime_failure("1 == \"1\""), RuntimeError::TypeError { .. }));
    assert!(matches!(assert_runtime_failure("true == true"), RuntimeError::TypeError { .. }));
}

#[test]
fn logical_operators_evaluate_both_sides() {
    let src = "mut calls = 0;
               fn touch() { calls = calls + 1; return 1; }
               0 and touch();
               1 or touch();
               calls";
    assert_eq!(value_of(src), RuntimeValue::Number(2.0));

    assert_eq!(value_of("1 and \"x\""), RuntimeValue::Boolean(true));
    assert_eq!(value_of("0 or \"\""), RuntimeValue::Boolean(false));
    assert_eq!(value_of("!0"), RuntimeValue::Boolean(true));
    assert_eq!(value_of("!!\"x\""), RuntimeValue::Boolean(true));
}

#[test]
fn if_else_chains() {
    let src = "fn classify(n) {
                   if (n < 0) { return \"negative\"; }
                   else if (n == 0) { return \"zero\"; }
                   else { return \"positive\"; }
               }";

    assert_eq!(value_of(&format!("{src} classify(0 - 4)")),
               RuntimeValue::String("negative".into()));
    assert_eq!(value_of(&format!("{src} classify(0)")),
               RuntimeValue::String("zero".into()));
    assert_eq!(value_of(&format!("{src} classify(9)")),
               RuntimeValue::String("positive".into()));

    assert_eq!(value_of("if (0) { 1 }"), RuntimeValue::Null);
}

#[test]
fn branch_and_for_declarations_leak_into_enclosing_scope() {
    assert_eq!(value_of("if (1) { mut inner = 5; } inner"),
               RuntimeValue::Number(5.0));
    assert_eq!(value_of("for (mut j = 0; j < 2; ++j) {} j"),
               RuntimeValue::Number(2.0));

    // The body shares the loop's scope, so a declaration inside it is
    // repeated in the same scope on the second iteration.
    assert!(matches!(assert_runtime_failure("for (mut j = 0; j < 2; ++j) { mut t = j; }"),
                     RuntimeError::Redeclaration { .. }));
}

#[test]
fn objects_and_member_access() {
    let obj = "mut o = { a: 1, b: \"x\", nested: { c: 3 } };";

    assert_eq!(value_of(&format!("{obj} o.a")), RuntimeValue::Number(1.0));
    assert_eq!(value_of(&format!("{obj} o[\"b\"]")), RuntimeValue::String("x".into()));
    assert_eq!(value_of(&format!("{obj} o.nested.c")), RuntimeValue::Number(3.0));
    assert_eq!(value_of(&format!("{obj} o.missing")), RuntimeValue::Null);
    assert_eq!(value_of(&format!("{obj} o[1]")), RuntimeValue::Null);

    assert_eq!(value_of(&format!("{obj} o")).to_string(),
               "{ a: 1, b: \"x\", nested: { c: 3 } }");
    assert_eq!(value_of("{}").to_string(), "{}");
}

#[test]
fn shorthand_properties_resolve_at_evaluation_time() {
    assert_eq!(value_of("mut a = 1; mut o = { a, b: 2, }; o.a + o.b"),
               RuntimeValue::Number(3.0));
    assert!(matches!(assert_runtime_failure("mut o = { nope };"),
                     RuntimeError::UnresolvedName { .. }));
}

#[test]
fn member_access_errors() {
    assert!(matches!(assert_runtime_failure("mut n = 1; n.x"), RuntimeError::TypeError { .. }));
    assert!(matches!(assert_runtime_failure("mut o = {}; o[{}]"),
                     RuntimeError::TypeError { .. }));
    assert!(matches!(assert_runtime_failure("mut o = { a: 1 }; o.a = 2"),
                     RuntimeError::InvalidAssignmentTarget { kind: "MemberExpr" }));
    assert!(matches!(assert_runtime_failure("1 = 2"),
                     RuntimeError::InvalidAssignmentTarget { kind: "NumericLiteral" }));
}

#[test]
fn increment_and_decrement() {
    assert_eq!(value_of("mut n = 1; ++n; ++n; --n; n"), RuntimeValue::Number(2.0));
    assert_eq!(value_of("mut n = 5; ++n"), RuntimeValue::Number(6.0));

    // Objects are shared, so the update is visible through every alias.
    assert_eq!(value_of("mut o = { count: 1 }; mut alias = o; ++o.count; alias.count"),
               RuntimeValue::Number(2.0));

    assert!(matches!(assert_runtime_failure("keep k = 1; ++k"),
                     RuntimeError::ConstantReassignment { .. }));
    assert!(matches!(assert_runtime_failure("mut s = \"a\"; ++s"),
                     RuntimeError::TypeError { .. }));
    assert!(matches!(assert_runtime_failure("++1"), RuntimeError::TypeError { .. }));
    assert!(matches!(assert_runtime_failure("mut o = {}; ++o.missing"),
                     RuntimeError::TypeError { .. }));
}

#[test]
fn calling_values() {
    assert!(matches!(assert_runtime_failure("mut x = 1; x()"),
                     RuntimeError::NotCallable { type_name: "number" }));
    assert_eq!(value_of("fn make() { fn inner(x) { return x * 2; } return inner; } make()(21)"),
               RuntimeValue::Number(42.0));
    assert_eq!(value_of("fn f() {} f").to_string(), "Function f");
    assert_eq!(value_of("println").to_string(), "NativeFunction println");
}

#[test]
fn native_functions() {
    assert_eq!(value_of("println(1, \"a\")"), RuntimeValue::Null);
    assert_eq!(value_of("println()"), RuntimeValue::Null);
    assert_eq!(value_of("time() > 0"), RuntimeValue::Boolean(true));
    assert_eq!(value_of("assert(1)"), RuntimeValue::Boolean(true));

    assert!(matches!(assert_runtime_failure("assert(0)"), RuntimeError::AssertionFailed));
    assert!(matches!(assert_runtime_failure("time(1)"),
                     RuntimeError::ArgumentCountMismatch { name: "time", found: 1, .. }));
    assert!(matches!(assert_runtime_failure("assert()"),
                     RuntimeError::ArgumentCountMismatch { name: "assert", found: 0, .. }));

    let global = Environment::global();
    for name in NATIVE_FUNCTIONS {
        assert!(matches!(global.lookup(name), Ok(RuntimeValue::NativeFunction(native)) if native.name == *name),
                "{name} is not bound in the global scope");
    }
}

#[test]
fn runaway_recursion_is_an_error() {
    let err = assert_runtime_failure("fn down(n) { return down(n + 1); } down(0)");
    assert!(matches!(err, RuntimeError::StackOverflow { .. }));

    // The session stays usable afterwards.
    let mut session = Session::new();
    assert!(session.run("fn down(n) { return down(n + 1); } down(0)").is_err());
    assert_eq!(session.run("fn id(x) { return x; } id(7)").unwrap(),
               Outcome::Value(RuntimeValue::Number(7.0)));
}

#[test]
fn sessions_persist_and_are_independent() {
    let mut first = Session::new();
    let mut second = Session::new();

    first.run("mut x = 41").unwrap();
    assert_eq!(first.run("x + 1").unwrap(),
               Outcome::Value(RuntimeValue::Number(42.0)));
    assert!(second.run("x").is_err());
}

#[test]
fn comments_and_optional_semicolons() {
    let src = "# leading comment
               mut a = 1 # trailing comment
               mut b = 2;;;
               a + b";
    assert_eq!(value_of(src), RuntimeValue::Number(3.0));
    assert_eq!(value_of(""), RuntimeValue::Null);
}

#[test]
fn parse_errors() {
    assert!(matches!(assert_failure("mut = 1"), Error::Parse(ParseError::UnexpectedToken { .. })));
    assert!(matches!(assert_failure("keep x;"),
                     Error::Parse(ParseError::MissingConstantValue { .. })));
    assert!(matches!(assert_failure("\"abc"),
                     Error::Parse(ParseError::UnterminatedString { line: 1 })));
    assert!(matches!(assert_failure("mut x = 1 @ 2"),
                     Error::Parse(ParseError::UnrecognizedCharacter { .. })));
    assert!(matches!(assert_failure("fn f(1) {}"),
                     Error::Parse(ParseError::InvalidParameter { .. })));
    assert!(matches!(assert_failure("mut o = {}; o.1"),
                     Error::Parse(ParseError::InvalidMemberProperty { .. })));
    assert!(matches!(assert_failure("for (mut i = 0 i < 3; ++i) {}"),
                     Error::Parse(ParseError::UnexpectedToken { .. })));
    assert!(matches!(assert_failure("if (1) 2"), Error::Parse(ParseError::UnexpectedToken { .. })));
    assert!(matches!(assert_failure("(1 + 2"), Error::Parse(ParseError::UnexpectedEndOfInput { .. })));
}

#[test]
fn parse_errors_report_lines() {
    assert!(matches!(assert_failure("mut a = 1;\nmut = 2"),
                     Error::Parse(ParseError::UnexpectedToken { line: 2, .. })));
    assert!(matches!(assert_failure("mut a = 1;\n\nif (a) {\n"),
                     Error::Parse(ParseError::UnexpectedEndOfInput { line: 3 })));
}

#[test]
fn argument_and_parameter_limits() {
    let args = vec!["1"; 256].join(", ");
    assert!(matches!(assert_failure(&format!("println({args})")),
                     Error::Parse(ParseError::TooManyArguments { count: 256, max: 255, .. })));

    let params = (0..256).map(|i| format!("p{i}")).collect::<Vec<_>>().join(", ");
    assert!(matches!(assert_failure(&format!("fn f({params}) {{}}")),
                     Error::Parse(ParseError::TooManyParameters { count: 256, .. })));

    let args = vec!["1"; 255].join(", ");
    assert_success(&format!("println({args})"));
}

#[test]
fn return_value_starts_on_the_same_line() {
    assert_eq!(value_of("fn f() {\n    return\n    1\n}\nf()"), RuntimeValue::Null);
    assert_eq!(value_of("fn f() { return 1 +\n 2 }\nf()"), RuntimeValue::Number(3.0));
}

#[test]
fn deeply_nested_parentheses() {
    let depth = 5_000;
    let src = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(value_of(&src), RuntimeValue::Number(1.0));
}

#[test]
fn long_unary_chains() {
    assert_eq!(value_of(&format!("{}1", "!".repeat(20_000))),
               RuntimeValue::Boolean(true));
    assert_eq!(value_of(&format!("{}1", "!".repeat(20_001))),
               RuntimeValue::Boolean(false));
}

#[test]
fn long_binary_chains() {
    let src = format!("1{}", "+1".repeat(50_000));
    assert_eq!(value_of(&src), RuntimeValue::Number(50_001.0));

    // Tearing down the tree must not recurse once per node either.
    let program = parse_program(&format!("1{}", "+1".repeat(200_000))).unwrap();
    drop(program);
}

#[test]
fn deeply_nested_statements() {
    let depth = 5_000;
    let src = format!("mut hits = 0\n{}++hits{}\nhits",
                      "if (1) { ".repeat(depth),
                      " }".repeat(depth));
    assert_eq!(value_of(&src), RuntimeValue::Number(1.0));

    let src = format!("{}{{ 7 }}", "if (0) {} else ".repeat(depth));
    assert_success(&src);
}

#[test]
fn deeply_nested_objects() {
    let src = "mut o = {}
               for (mut i = 0; i < 50000; ++i) { o = { o } }
               o";
    let printed = value_of(src).to_string();
    assert!(printed.starts_with("{ o: { o: { o: "));
    assert!(printed.ends_with("{} } } }"));
}

#[test]
fn dropping_a_session_frees_its_closures() {
    let mut session = Session::new();
    session.run("fn makeCounter() {
                     mut n = 0
                     fn count() { return ++n; }
                     return count
                 }
                 keep counter = makeCounter()
                 mut point = { counter }
                 counter(); counter()")
           .unwrap();

    let global = Rc::downgrade(session.env());
    drop(session);
    assert!(global.upgrade().is_none());
}

#[test]
fn releasing_a_scope_keeps_what_is_still_referenced() {
    let scope = Environment::new(Some(Environment::global()));
    let definition = Rc::new(FunctionDef { name:       "inner".into(),
                                           parameters: vec![],
                                           body:       vec![], });
    let function = Rc::new(FunctionValue { definition,
                                           closure: Rc::clone(&scope) });
    scope.declare("inner", RuntimeValue::Function(Rc::clone(&function)), true)
         .unwrap();

    // `function` is still held here, so its scope survives.
    let weak = Rc::downgrade(&scope);
    Environment::release(scope);
    assert!(function.closure.lookup("inner").is_ok());

    drop(function);
    Environment::release(weak.upgrade().unwrap());
    assert!(weak.upgrade().is_none());
}
