//! Tests for operators.rs

use crate::operators::*;
use crate::token::JsToken;

#[test]
fn test_precedence_ordering() {
    let p = |t| precedence_of(t).unwrap();
    assert!(p(JsToken::Multiply) > p(JsToken::Plus));
    assert!(p(JsToken::Plus) > p(JsToken::LeftShift));
    assert!(p(JsToken::LeftShift) > p(JsToken::LessThan));
    assert!(p(JsToken::LessThan) > p(JsToken::StrictEqual));
    assert!(p(JsToken::StrictEqual) > p(JsToken::BitwiseAnd));
    assert!(p(JsToken::BitwiseAnd) > p(JsToken::BitwiseXor));
    assert!(p(JsToken::BitwiseXor) > p(JsToken::BitwiseOr));
    assert!(p(JsToken::BitwiseOr) > p(JsToken::LogicalAnd));
    assert!(p(JsToken::LogicalAnd) > p(JsToken::LogicalOr));
    assert!(p(JsToken::LogicalOr) > p(JsToken::ConditionalIf));
    assert!(p(JsToken::ConditionalIf) > p(JsToken::Assign));
    assert!(p(JsToken::Assign) > p(JsToken::Comma));
}

#[test]
fn test_relational_keywords() {
    assert_eq!(precedence_of(JsToken::In), Some(OperatorPrecedence::Relational));
    assert_eq!(
        precedence_of(JsToken::InstanceOf),
        Some(OperatorPrecedence::Relational)
    );
}

#[test]
fn test_associativity() {
    assert_eq!(associativity_of(JsToken::Minus), Some(Associativity::Left));
    assert_eq!(associativity_of(JsToken::PlusAssign), Some(Associativity::Right));
    assert!(operator_info(JsToken::ConditionalIf).unwrap().is_right_associative());
    assert!(!operator_info(JsToken::Comma).unwrap().is_right_associative());
}

#[test]
fn test_non_operators_have_no_entry() {
    assert_eq!(precedence_of(JsToken::Identifier), None);
    assert_eq!(precedence_of(JsToken::LogicalNot), None);
    assert_eq!(precedence_of(JsToken::Increment), None);
    assert_eq!(precedence_of(JsToken::LeftParenthesis), None);
}

#[test]
fn test_every_binary_operator_has_precedence() {
    use JsToken::*;
    for token in [
        LogicalAnd, LogicalOr, BitwiseAnd, BitwiseOr, BitwiseXor, Equal, NotEqual, StrictEqual,
        StrictNotEqual, LessThan, LessThanEqual, GreaterThan, GreaterThanEqual, LeftShift,
        RightShift, UnsignedRightShift, Plus, Minus, Multiply, Divide, Modulo, In, InstanceOf,
    ] {
        assert!(token.is_binary_operator());
        assert!(precedence_of(token).is_some(), "{token}");
    }
}
