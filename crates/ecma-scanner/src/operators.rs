//! Operator precedence and associativity.
//!
//! The table is built once on first use and is read-only afterwards, so it
//! can be consulted from any number of parser threads.

use crate::token::JsToken;
use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Binding strength of a binary-position operator, weakest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OperatorPrecedence {
    Comma,
    Assignment,
    Conditional,
    LogicalOr,
    LogicalAnd,
    BitwiseOr,
    BitwiseXor,
    BitwiseAnd,
    Equality,
    Relational,
    Shift,
    Additive,
    Multiplicative,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Associativity {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorInfo {
    pub precedence: OperatorPrecedence,
    pub associativity: Associativity,
}

impl OperatorInfo {
    fn new(precedence: OperatorPrecedence) -> OperatorInfo {
        let associativity = match precedence {
            OperatorPrecedence::Assignment | OperatorPrecedence::Conditional => Associativity::Right,
            _ => Associativity::Left,
        };
        OperatorInfo {
            precedence,
            associativity,
        }
    }

    pub fn is_right_associative(&self) -> bool {
        self.associativity == Associativity::Right
    }
}

static OPERATOR_TABLE: Lazy<FxHashMap<JsToken, OperatorInfo>> = Lazy::new(|| {
    use JsToken::*;
    use OperatorPrecedence as P;

    let groups: &[(P, &[JsToken])] = &[
        (P::Comma, &[Comma]),
        (
            P::Assignment,
            &[
                Assign,
                PlusAssign,
                MinusAssign,
                MultiplyAssign,
                DivideAssign,
                ModuloAssign,
                BitwiseAndAssign,
                BitwiseOrAssign,
                BitwiseXorAssign,
                LeftShiftAssign,
                RightShiftAssign,
                UnsignedRightShiftAssign,
            ],
        ),
        (P::Conditional, &[ConditionalIf]),
        (P::LogicalOr, &[LogicalOr]),
        (P::LogicalAnd, &[LogicalAnd]),
        (P::BitwiseOr, &[BitwiseOr]),
        (P::BitwiseXor, &[BitwiseXor]),
        (P::BitwiseAnd, &[BitwiseAnd]),
        (P::Equality, &[Equal, NotEqual, StrictEqual, StrictNotEqual]),
        (
            P::Relational,
            &[
                LessThan,
                LessThanEqual,
                GreaterThan,
                GreaterThanEqual,
                InstanceOf,
                In,
            ],
        ),
        (P::Shift, &[LeftShift, RightShift, UnsignedRightShift]),
        (P::Additive, &[Plus, Minus]),
        (P::Multiplicative, &[Multiply, Divide, Modulo]),
    ];

    let mut table = FxHashMap::default();
    for &(precedence, tokens) in groups {
        for &token in tokens {
            table.insert(token, OperatorInfo::new(precedence));
        }
    }
    table
});

/// Precedence and associativity of `token` in binary position.
pub fn operator_info(token: JsToken) -> Option<OperatorInfo> {
    OPERATOR_TABLE.get(&token).copied()
}

/// Precedence class of `token`, or `None` when it is not a binary,
/// assignment, conditional or comma operator.
pub fn precedence_of(token: JsToken) -> Option<OperatorPrecedence> {
    operator_info(token).map(|info| info.precedence)
}

pub fn associativity_of(token: JsToken) -> Option<Associativity> {
    operator_info(token).map(|info| info.associativity)
}
