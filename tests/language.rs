use std::fs;

use radixcalc::{
    error::{Error, EvalError, ParseError},
    evaluate_line, evaluate_line_with_limits, inspect_line,
    interpreter::{lexer::TokenType, parser::core::Limits},
    lex_and_parse_number,
};
use walkdir::WalkDir;

#[test]
fn case_files_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "txt"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (line_no, (expression, expected)) in extract_cases(&content) {
            count += 1;
            let result = evaluate_line(&expression);
            match (expected, result) {
                (Expected::Value(want), Ok(got)) => {
                    assert_eq!(got, want, "{path:?}:{line_no}: `{expression}`");
                },
                (Expected::Failure, Err(_)) => {},
                (Expected::Value(want), Err(e)) => {
                    panic!("{path:?}:{line_no}: `{expression}` should be {want} but failed: {e}")
                },
                (Expected::Failure, Ok(got)) => {
                    panic!("{path:?}:{line_no}: `{expression}` should fail but gave {got}")
                },
            }
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

enum Expected {
    Value(i64),
    Failure,
}

/// Reads `<expression> => <value>` and `<expression> => error` lines, skipping
/// blanks and `#` comments.
fn extract_cases(content: &str) -> Vec<(usize, (String, Expected))> {
    content.lines()
           .enumerate()
           .filter(|(_, line)| !line.trim().is_empty() && !line.trim_start().starts_with('#'))
           .map(|(i, line)| {
               let (expression, expected) =
                   line.rsplit_once("=>")
                       .unwrap_or_else(|| panic!("line {} has no '=>': {line}", i + 1));
               let expected = match expected.trim() {
                   "error" => Expected::Failure,
                   value => Expected::Value(value.parse()
                                                 .unwrap_or_else(|e| panic!("line {}: {e}", i + 1))),
               };
               (i + 1, (expression.trim().to_string(), expected))
           })
           .collect()
}

fn assert_value(src: &str, expected: i64) {
    match evaluate_line(src) {
        Ok(value) => assert_eq!(value, expected, "`{src}`"),
        Err(e) => panic!("`{src}` failed: {e}"),
    }
}

fn parse_error(src: &str) -> ParseError {
    match evaluate_line(src) {
        Err(Error::Parse(e)) => e,
        other => panic!("`{src}` should fail to parse, got {other:?}"),
    }
}

fn eval_error(src: &str) -> EvalError {
    match evaluate_line(src) {
        Err(Error::Eval(e)) => e,
        other => panic!("`{src}` should fail to evaluate, got {other:?}"),
    }
}

#[test]
fn end_to_end_scenarios() {
    assert_value("1+2*3\n", 7);
    assert_value("(1+2)*3\n", 9);
    assert_value("-5+3\n", -2);
    assert_value("0x1A+2\n", 28);
    assert_value("010+2\n", 10);
}

#[test]
fn precedence_and_associativity() {
    assert_value("2+3*4-5", 9);
    assert_value("10-4-3", 3);
    assert_value("100/10/5", 2);
    assert_value("2*3/4", 1);
    assert_value("2*(3/4)", 0);
    assert_value("8/2*4", 16);
    assert_value("-2*-3", 6);
    assert_value("--4", 4);
    assert_value("+-+7", -7);
}

#[test]
fn division_truncates_toward_zero() {
    assert_value("7/2", 3);
    assert_value("-7/2", -3);
    assert_value("7/-2", -3);
    assert_value("-7/-2", 3);
}

#[test]
fn whitespace_and_unknown_characters_are_skipped() {
    assert_value("  1 +\t2  ", 3);
    assert_value("1 + 2 ; comment", 3);
    assert_value("4 $* 5", 20);
}

#[test]
fn radix_resolution() {
    assert_eq!(lex_and_parse_number("0x1A").unwrap(), 26);
    assert_eq!(lex_and_parse_number("0X1a").unwrap(), 26);
    assert_eq!(lex_and_parse_number("0b101").unwrap(), 5);
    assert_eq!(lex_and_parse_number("0B11").unwrap(), 3);
    assert_eq!(lex_and_parse_number("017").unwrap(), 15);
    assert_eq!(lex_and_parse_number("17").unwrap(), 17);
    assert_eq!(lex_and_parse_number("0").unwrap(), 0);
    assert_eq!(lex_and_parse_number("00").unwrap(), 0);
}

#[test]
fn standalone_number_rejects_expressions() {
    assert!(matches!(lex_and_parse_number("1+2"),
                     Err(Error::Parse(ParseError::UnexpectedTrailingTokens { .. }))));
    assert!(matches!(lex_and_parse_number("-1"),
                     Err(Error::Parse(ParseError::UnexpectedToken { .. }))));
    assert!(matches!(lex_and_parse_number(""),
                     Err(Error::Parse(ParseError::UnexpectedEndOfInput { .. }))));
}

#[test]
fn single_literal() {
    assert_value("5\n", 5);
    assert_value("0b0", 0);
}

#[test]
fn unterminated_parenthesis_is_error() {
    assert_eq!(parse_error("(1+2"),
               ParseError::MissingClosingParen { position: 1,
                                                 found:    None, });
    assert_eq!(parse_error("((1)+2 3)"),
               ParseError::MissingClosingParen { position: 1,
                                                 found:    Some("3".to_string()), });
}

#[test]
fn division_by_zero_is_error() {
    assert_eq!(eval_error("3/0"), EvalError::DivisionByZero { position: 2 });
    assert_eq!(eval_error("1 + 6 / (2 - 2)"), EvalError::DivisionByZero { position: 7 });
}

#[test]
fn malformed_literals_are_errors() {
    assert!(matches!(parse_error("08"),
                     ParseError::MalformedLiteral { radix: 8, .. }));
    assert!(matches!(parse_error("0b102"),
                     ParseError::MalformedLiteral { radix: 2, .. }));
    assert!(matches!(parse_error("0x"),
                     ParseError::MalformedLiteral { radix: 8, .. }));
    assert!(matches!(parse_error("12ab"),
                     ParseError::MalformedLiteral { radix: 10, .. }));
    assert!(matches!(parse_error("1 + 0xx1"),
                     ParseError::MalformedLiteral { radix: 16, position: 5, .. }));
}

#[test]
fn structural_errors() {
    assert!(matches!(parse_error(""), ParseError::UnexpectedEndOfInput { .. }));
    assert!(matches!(parse_error("1+"), ParseError::UnexpectedEndOfInput { .. }));
    assert!(matches!(parse_error("*2"),
                     ParseError::UnexpectedToken { position: 1, .. }));
    assert!(matches!(parse_error("()"),
                     ParseError::UnexpectedToken { position: 2, .. }));
    assert!(matches!(parse_error("1 2"),
                     ParseError::UnexpectedTrailingTokens { position: 3, .. }));
    assert!(matches!(parse_error("1)"),
                     ParseError::UnexpectedTrailingTokens { position: 2, .. }));
}

#[test]
fn overflow_is_error() {
    assert_value("0x7FFFFFFFFFFFFFFF", i64::MAX);
    assert!(matches!(parse_error("0x8000000000000000"), ParseError::LiteralTooLarge { .. }));
    assert_eq!(eval_error("0x7FFFFFFFFFFFFFFF + 1"), EvalError::Overflow { position: 20 });
    assert_eq!(eval_error("0x7FFFFFFFFFFFFFFF * 2"), EvalError::Overflow { position: 20 });
    assert_eq!(eval_error("(-0x7FFFFFFFFFFFFFFF - 1) / -1"),
               EvalError::Overflow { position: 27 });
    assert_eq!(eval_error("-(-0x7FFFFFFFFFFFFFFF - 1)"), EvalError::Overflow { position: 1 });
}

#[test]
fn nesting_limit_is_enforced() {
    let nested = |depth: usize| format!("{}1{}", "(".repeat(depth), ")".repeat(depth));

    assert_value(&nested(100), 1);
    assert!(matches!(parse_error(&nested(300)),
                     ParseError::NestingTooDeep { limit: 256, .. }));
    assert!(matches!(parse_error(&format!("{}1", "-".repeat(300))),
                     ParseError::NestingTooDeep { .. }));

    let limits = Limits { max_depth: 4 };
    assert_eq!(evaluate_line_with_limits("((1))", limits).unwrap(), 1);
    assert!(matches!(evaluate_line_with_limits("((((1))))", limits),
                     Err(Error::Parse(ParseError::NestingTooDeep { limit: 4, .. }))));
}

#[test]
fn nesting_limit_at_end_of_input_blames_last_token() {
    let limits = Limits { max_depth: 2 };
    assert_eq!(evaluate_line_with_limits("--", limits),
               Err(Error::Parse(ParseError::NestingTooDeep { limit:    2,
                                                             position: 2, })));
    assert_eq!(evaluate_line_with_limits(" - (", limits),
               Err(Error::Parse(ParseError::NestingTooDeep { limit:    2,
                                                             position: 4, })));

    let message = evaluate_line_with_limits("--", limits).unwrap_err().to_string();
    assert!(message.starts_with("Error at column 2:"), "{message}");
}

#[test]
fn inspection_keeps_every_stage() {
    let report = inspect_line("(1+2", Limits::default());
    assert_eq!(report.tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
               [TokenType::LParen, TokenType::IntLiteral, TokenType::Plus, TokenType::IntLiteral]);
    assert!(report.ast.is_none());
    assert!(matches!(report.result, Err(Error::Parse(ParseError::MissingClosingParen { .. }))));

    let report = inspect_line("2*(3-3)+1/0", Limits::default());
    let ast = report.ast.expect("parsing succeeded");
    assert!(ast.iter().any(|(_, node)| node.value == Some(0)));
    assert_eq!(report.result, Err(Error::Eval(EvalError::DivisionByZero { position: 10 })));

    let report = inspect_line("0b11 * 0x2", Limits::default());
    assert_eq!(report.result, Ok(6));
    assert_eq!(report.result, evaluate_line("0b11 * 0x2"));
    assert_eq!(report.ast.and_then(|ast| ast.root().and_then(|root| ast.get(root)?.value)),
               Some(6));
}

#[test]
fn diagnostics_name_the_error_and_column() {
    let message = evaluate_line("3/0").unwrap_err().to_string();
    assert_eq!(message, "Error at column 2: Division by zero.");

    let message = evaluate_line("(1+2").unwrap_err().to_string();
    assert!(message.contains("column 1"), "{message}");
    assert!(message.contains("end of input"), "{message}");

    let message = evaluate_line("0b2").unwrap_err().to_string();
    assert!(message.contains("base-2"), "{message}");
}

#[test]
fn repeated_runs_agree() {
    for src in ["1+2*3", "-(0x10 - 010) / 0b11", "((7))"] {
        assert_eq!(evaluate_line(src), evaluate_line(src));
    }
}
