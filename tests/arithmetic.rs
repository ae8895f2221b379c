mod common;

use parsecomb::text::{char, lexeme, number, satisfy, whitespace};
use parsecomb::{
    AndExt, Fix, LabelExt, MapExt, OrExt, Parser, boxed, default, fix, many, parse_to_end,
};
use std::rc::Rc;

/// `many` needs one match, so optional repetition is spelled out
fn zero_or_more<'code, P>(parser: P) -> impl Parser<'code, Output = Vec<P::Output>>
where
    P: Parser<'code>,
{
    many(parser).or_else(default())
}

fn operator<'code>(symbols: &'static str) -> impl Parser<'code, Output = char> {
    lexeme(satisfy(move |ch| symbols.contains(ch)))
}

fn apply(lhs: i64, (op, rhs): (char, i64)) -> i64 {
    match op {
        '+' => lhs + rhs,
        '-' => lhs - rhs,
        '*' => lhs * rhs,
        '/' => lhs / rhs,
        other => panic!("not an operator: {other}"),
    }
}

fn calculator<'code>() -> Fix<'code, i64> {
    fix(|expr| {
        let factor = Rc::new(
            lexeme(number())
                .label("number")
                .map(|n| n as i64)
                .or_else(
                    lexeme(char('('))
                        .label("'('")
                        .then(expr)
                        .skip(lexeme(char(')')).label("')'")),
                ),
        );
        let term = Rc::new(
            Rc::clone(&factor)
                .and(zero_or_more(operator("*/").and(Rc::clone(&factor))))
                .map(|(first, rest)| rest.into_iter().fold(first, apply)),
        );
        boxed(
            Rc::clone(&term)
                .and(zero_or_more(operator("+-").and(term)))
                .map(|(first, rest)| rest.into_iter().fold(first, apply)),
        )
    })
}

fn evaluate(input: &str) -> Result<i64, parsecomb::ParseError> {
    parse_to_end(whitespace().then(calculator()), input)
}

#[test]
fn test_precedence() {
    common::init_logging();

    assert_eq!(evaluate("1 + 2 * 3"), Ok(7));
    assert_eq!(evaluate("(1 + 2) * 3"), Ok(9));
    assert_eq!(evaluate("2 * (3 + 4) - 5"), Ok(9));
    assert_eq!(evaluate("10 / 2 / 5"), Ok(1));
    assert_eq!(evaluate("  8 - 3 - 2 "), Ok(3));
}

#[test]
fn test_single_factor() {
    common::init_logging();

    assert_eq!(evaluate("42"), Ok(42));
    assert_eq!(evaluate("((((((1))))))"), Ok(1));
}

#[test]
fn test_long_flat_sum() {
    common::init_logging();

    let input = vec!["1"; 500].join(" + ");
    assert_eq!(evaluate(&input), Ok(500));
}

#[test]
fn test_missing_operand() {
    common::init_logging();

    let error = evaluate("1 + ").unwrap_err();
    assert_eq!(error.position(), 4);
    assert_eq!(
        error.to_string(),
        "error at (line: 1, column: 5)\nunexpected end of input\nexpected number or '('"
    );
}

#[test]
fn test_unclosed_parenthesis() {
    common::init_logging();

    let error = evaluate("(1 + 2").unwrap_err();
    assert_eq!(error.position(), 6);
    assert_eq!(error.message().unexpected, "end of input");
    assert_eq!(error.message().expected, vec!["')'"]);
}

#[test]
fn test_trailing_garbage() {
    common::init_logging();

    let error = evaluate("1 + 2 )").unwrap_err();
    assert_eq!(error.position(), 6);
    assert_eq!(error.message().unexpected, "')'");
    assert!(error.message().expected.iter().any(|e| e == "end of input"));
}
