use std::fs;

use spl::{
    error::{Error, OperandSide, ParseError, RuntimeError},
    interpreter::{evaluator::core::Interpreter, value::Number},
    parse, run_with_output,
};
use walkdir::WalkDir;

#[test]
fn golden_programs_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/programs").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "spl"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                                                             panic!("Failed to read {expected_path:?}: {e}")
                                                         });

        count += 1;
        let mut out = Vec::new();
        if let Err(e) = run_with_output(&source, &mut out) {
            panic!("Program {path:?} failed:\n{source}\nError: {e:?}");
        }
        assert_eq!(String::from_utf8(out).unwrap(), expected, "Output of {path:?} differs");
    }

    assert!(count > 0, "No programs found in tests/programs");
}

fn output_of(src: &str) -> String {
    let mut out = Vec::new();
    if let Err(e) = run_with_output(src, &mut out) {
        panic!("Script failed: {e}");
    }
    String::from_utf8(out).unwrap()
}

fn runtime_failure(src: &str) -> RuntimeError {
    match run_with_output(src, &mut Vec::new()) {
        Err(Error::Runtime(e)) => e,
        Err(Error::Parse(e)) => panic!("Script was rejected by the parser: {e}"),
        Ok(()) => panic!("Script succeeded but was expected to fail"),
    }
}

fn parse_failure(src: &str) -> ParseError {
    match parse(src) {
        Err(e) => e,
        Ok(_) => panic!("Script parsed but was expected to be rejected"),
    }
}

#[test]
fn end_to_end_scenarios() {
    assert_eq!(output_of("x=3; y=4; print x+y*2;"), "11\n");
    assert_eq!(output_of("avg(a,b): (a+b)/2; print avg(5,7);"), "6\n");
    assert_eq!(output_of("avg(a,b): (a+b)/2.0; print avg(5,8);"), "6.5\n");
}

#[test]
fn integer_division_of_integers_truncates() {
    assert_eq!(output_of("avg(a,b): (a+b)/2; print avg(5,8);"), "6\n");
    assert_eq!(output_of("print 7 / 2; print 0 - 7 / 2;"), "3\n-3\n");
}

#[test]
fn integer_arithmetic_prints_without_decimal_point() {
    assert_eq!(output_of("print 2 + 3;"), "5\n");
    assert_eq!(output_of("print 7 - 10;"), "-3\n");
    assert_eq!(output_of("print 6 * 7;"), "42\n");
    assert_eq!(output_of("print 2 * (3 + 4);"), "14\n");
    assert_eq!(output_of("print 10 - 4 - 3;"), "3\n");
    assert_eq!(output_of("print 100 / 10 / 5;"), "2\n");
}

#[test]
fn float_results_are_formatted() {
    assert_eq!(output_of("print 1.5 * 2;"), "3.0\n");
    assert_eq!(output_of("print 2.;"), "2.0\n");
    assert_eq!(output_of("print 1 / 4.0;"), "0.25\n");
    assert_eq!(output_of("print 0.1 + 0.2;"), "0.30000000000000004\n");
}

#[test]
fn oversized_integer_literal_becomes_float() {
    assert_eq!(output_of("print 9223372036854775808;"), "9223372036854775808.0\n");
}

#[test]
fn division_by_zero_is_reported_without_output() {
    let mut out = Vec::new();
    let err = run_with_output("x=1; print x/0;", &mut out).unwrap_err();

    assert_eq!(err, Error::Runtime(RuntimeError::DivisionByZero { line: 1 }));
    assert!(!err.is_fatal());
    assert!(out.is_empty());

    assert_eq!(runtime_failure("print 3 / 0.0;"), RuntimeError::DivisionByZero { line: 1 });
}

#[test]
fn integer_overflow_is_reported() {
    assert_eq!(runtime_failure("print 9223372036854775807 + 1;"),
               RuntimeError::Overflow { line: 1 });
}

#[test]
fn float_overflow_is_reported() {
    let big = format!("1{}.0", "0".repeat(300));

    assert_eq!(runtime_failure(&format!("x = {big};\nprint x * x;")),
               RuntimeError::Overflow { line: 2 });
    assert_eq!(runtime_failure(&format!("print 0 - {big} * {big};")),
               RuntimeError::Operand { side:   OperandSide::Right,
                                       source: Box::new(RuntimeError::Overflow { line: 1 }), });
}

#[test]
fn literals_print_as_numbers() {
    assert_eq!(output_of("print 2.50;"), "2.5\n");
    assert_eq!(output_of("x = 007; print x;"), "7\n");
    assert_eq!(output_of("print 3.000;"), "3.0\n");
}

#[test]
fn undefined_names() {
    assert_eq!(runtime_failure("x = 1;\nprint y;"),
               RuntimeError::UndefinedVariable { name: "y".to_string(),
                                                 line: 2, });
    assert_eq!(runtime_failure("print g(1);"),
               RuntimeError::UndefinedFunction { name: "g".to_string(),
                                                 line: 1, });
}

#[test]
fn arity_is_checked() {
    assert_eq!(runtime_failure("f(a): a; print f(1, 2);"),
               RuntimeError::ArityMismatch { name:     "f".to_string(),
                                             expected: 1,
                                             found:    2,
                                             line:     1, });
    assert!(matches!(runtime_failure("f(a, b): a; f();"),
                     RuntimeError::ArityMismatch { expected: 2, found: 0, .. }));
}

#[test]
fn operand_failures_record_their_side() {
    let err = runtime_failure("print 1 + y;");

    assert!(matches!(&err, RuntimeError::Operand { side: OperandSide::Right, .. }));
    assert_eq!(err.root_cause(),
               &RuntimeError::UndefinedVariable { name: "y".to_string(),
                                                  line: 1, });
    assert_eq!(err.to_string(),
               "Error on line 1: Variable 'y' is not defined. (in right operand)");

    let nested = runtime_failure("print (1 / 0) * 2 + 3;");
    assert!(matches!(&nested, RuntimeError::Operand { side: OperandSide::Left, .. }));
    assert_eq!(nested.root_cause(), &RuntimeError::DivisionByZero { line: 1 });
}

#[test]
fn block_assignment_shadows_outer_binding() {
    assert_eq!(output_of("x=1; { x=2; print x; } print x;"), "2\n1\n");
    assert_eq!(output_of("x = 1; { y = x + 1; { print x + y; } }"), "3\n");
}

#[test]
fn block_scope_is_dropped_on_exit() {
    assert!(matches!(runtime_failure("{ y = 1; } print y;"),
                     RuntimeError::UndefinedVariable { .. }));
    assert!(matches!(runtime_failure("{ g(x): x; } print g(1);"),
                     RuntimeError::UndefinedFunction { .. }));
}

#[test]
fn bare_print_dumps_current_scope_in_name_order() {
    assert_eq!(output_of("b = 2; a = 1.5; print;"), "a: 1.5\nb: 2\n");
    assert_eq!(output_of("x = 1; { y = 2; print; }"), "y: 2\n");
    assert_eq!(output_of("print;"), "");
    assert_eq!(output_of("{ print }"), "");
}

#[test]
fn call_binds_arguments_in_callers_scope_and_restores_it() {
    // `a` is already 1 when the second argument is evaluated.
    assert_eq!(output_of("f(a, b): a + b; a = 10; print f(1, a); print a;"), "2\n10\n");
    assert_eq!(output_of("x = 5; f(x): x * 2; print f(3); print x;"), "6\n5\n");
}

#[test]
fn call_parameters_do_not_leak() {
    assert!(matches!(runtime_failure("f(p): p; f(1); print p;"),
                     RuntimeError::UndefinedVariable { .. }));
}

#[test]
fn bindings_are_restored_after_failed_call() {
    let mut program = parse("a = 5; f(a, b): a / 0; f(1, 2); print a;").unwrap();
    let mut interpreter = Interpreter::with_output(Vec::<u8>::new());

    let err = interpreter.execute(&mut program).unwrap_err();

    assert_eq!(err.root_cause(), &RuntimeError::DivisionByZero { line: 1 });
    assert_eq!(interpreter.scopes().lookup("a"), Some(&Number::Integer(5)));
    assert_eq!(interpreter.scopes().lookup("b"), None);
    assert_eq!(interpreter.scopes().depth(), 1);
}

#[test]
fn failed_statement_stays_queued() {
    let mut program = parse("x = 1; print y; print x;").unwrap();
    let mut interpreter = Interpreter::with_output(Vec::<u8>::new());

    assert!(interpreter.execute(&mut program).is_err());
    assert_eq!(program.len(), 2);
    assert_eq!(program.statements[0].kind(), "PrintStatement");
}

#[test]
fn failing_block_leaves_its_scope() {
    let mut program = parse("{ y = 1; print z; }").unwrap();
    let mut interpreter = Interpreter::with_output(Vec::<u8>::new());

    assert!(interpreter.execute(&mut program).is_err());
    assert_eq!(interpreter.scopes().depth(), 1);
    assert_eq!(interpreter.scopes().lookup("y"), None);
}

#[test]
fn output_before_a_failure_is_kept() {
    let mut out = Vec::new();
    let err = run_with_output("print 1; print y; print 2;", &mut out).unwrap_err();

    assert!(matches!(err, Error::Runtime(RuntimeError::UndefinedVariable { .. })));
    assert_eq!(out, b"1\n");
}

#[test]
fn functions_can_call_functions() {
    assert_eq!(output_of("sq(x): x * x; sumsq(a, b): sq(a) + sq(b); print sumsq(3, 4);"),
               "25\n");
    assert_eq!(output_of("f(x): x; f(x): x * 10; print f(2);"), "20\n");
    assert_eq!(output_of("f(x): x; f(2) + 3;"), "");
}

#[test]
fn block_bodied_functions_return_values() {
    assert_eq!(output_of("f(x): { y = x * 2; return y; } y = 1; print f(5); print y;"),
               "10\n1\n");
    assert_eq!(output_of("f(x): { { return x + 1; } } print f(1);"), "2\n");
    assert_eq!(output_of("f(x): { return x; print 99; } print f(4);"), "4\n");
    assert_eq!(output_of("f(n): { g(m): m * n; return g(3); } print f(2);"), "6\n");

    assert!(matches!(runtime_failure("f(x): { y = x; } print f(1);"),
                     RuntimeError::MissingReturn { .. }));
}

#[test]
fn keywords_followed_by_paren_are_function_names() {
    assert_eq!(output_of("print(x): x + 1; print print(1);"), "2\n");
    assert!(matches!(runtime_failure("print(3);"), RuntimeError::UndefinedFunction { .. }));
}

#[test]
fn parse_errors_are_fatal_and_run_nothing() {
    let mut out = Vec::new();
    let err = run_with_output("print 1; x = ", &mut out).unwrap_err();

    assert!(err.is_fatal());
    assert!(out.is_empty());
}

#[test]
fn statements_need_terminators() {
    assert_eq!(parse_failure("x = 1"),
               ParseError::MissingTerminator { statement: "AssignmentStatement",
                                               found:     "end of input".to_string(),
                                               line:      1, });
    assert!(matches!(parse_failure("print 1 print 2;"),
                     ParseError::MissingTerminator { statement: "PrintStatement", .. }));
    assert!(parse("{ x = 1 } { print x }").is_ok());
    assert!(parse("f(x): { return x } print f(1);").is_ok());
    assert!(parse("x = 1;;").is_err());
}

#[test]
fn lexical_errors() {
    assert_eq!(parse_failure("x = 1.2.3;"),
               ParseError::MultipleDecimalPoints { literal: "1.2".to_string(),
                                                   line:    1, });
    assert_eq!(parse_failure("x = 1;\ny = 2 # 3;"),
               ParseError::IllegalCharacter { character: '#',
                                              line:      2, });

    let huge = "9".repeat(400);
    assert_eq!(parse_failure(&format!("x = {huge};")),
               ParseError::InvalidNumber { literal: huge,
                                           line:    1, });
}

#[test]
fn grammar_errors() {
    assert!(matches!(parse_failure("print (1 + 2;"), ParseError::UnmatchedParen { .. }));
    assert!(matches!(parse_failure("print f(1, 2;"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(parse_failure("print f(1, 2"), ParseError::UnmatchedParen { .. }));
    assert_eq!(parse_failure("x = 1;\n{ y = 2;"), ParseError::UnclosedBlock { line: 2 });
    assert_eq!(parse_failure("f(1): 2;"),
               ParseError::NonIdentifierParameter { function: "f".to_string(),
                                                    line:     1, });
    assert_eq!(parse_failure("x = 1;\n\ny = ;"),
               ParseError::ExpectedFactor { found: "';'".to_string(),
                                            line:  3, });
    assert!(matches!(parse_failure("= 3;"), ParseError::ExpectedStatement { .. }));
    assert!(matches!(parse_failure("}"), ParseError::ExpectedStatement { .. }));
    assert_eq!(parse_failure("return 1;"), ParseError::ReturnOutsideFunction { line: 1 });
    assert!(matches!(parse_failure("{ return 1; }"),
                     ParseError::ReturnOutsideFunction { .. }));
}

#[test]
fn errors_render_with_line_numbers() {
    assert_eq!(parse_failure("x = 1;\nprint (2;").to_string(),
               "Error on line 2: Expected closing parenthesis ')' but none found.");
    assert_eq!(runtime_failure("\n\nprint 1 / 0;").to_string(),
               "Error on line 3: Division by zero.");
}
