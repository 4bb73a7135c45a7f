//! Operators and punctuation, longest match first.

use super::Scanner;
use crate::diagnostics::ErrorSink;
use crate::token::JsToken;

impl<S: ErrorSink> Scanner<S> {
    /// Operator or punctuator starting with `ch` (the character under the
    /// cursor). Anything else is an illegal character.
    pub(super) fn scan_punctuation(&mut self, ch: char) -> JsToken {
        use JsToken::*;

        self.pos += 1;
        match ch {
            '{' => LeftCurly,
            '}' => RightCurly,
            '(' => LeftParenthesis,
            ')' => RightParenthesis,
            '[' => LeftBracket,
            ']' => RightBracket,
            ';' => Semicolon,
            ',' => Comma,
            '.' => AccessField,
            '?' => ConditionalIf,
            ':' => Colon,
            '~' => BitwiseNot,
            '=' => {
                if self.eat('=') {
                    if self.eat('=') { StrictEqual } else { Equal }
                } else {
                    Assign
                }
            }
            '!' => {
                if self.eat('=') {
                    if self.eat('=') { StrictNotEqual } else { NotEqual }
                } else {
                    LogicalNot
                }
            }
            '+' => {
                if self.eat('+') {
                    Increment
                } else if self.eat('=') {
                    PlusAssign
                } else {
                    Plus
                }
            }
            '-' => {
                if self.eat('-') {
                    Decrement
                } else if self.eat('=') {
                    MinusAssign
                } else {
                    Minus
                }
            }
            '*' => self.with_assign(Multiply, MultiplyAssign),
            '/' => self.with_assign(Divide, DivideAssign),
            '%' => self.with_assign(Modulo, ModuloAssign),
            '^' => self.with_assign(BitwiseXor, BitwiseXorAssign),
            '&' => {
                if self.eat('&') {
                    LogicalAnd
                } else {
                    self.with_assign(BitwiseAnd, BitwiseAndAssign)
                }
            }
            '|' => {
                if self.eat('|') {
                    LogicalOr
                } else {
                    self.with_assign(BitwiseOr, BitwiseOrAssign)
                }
            }
            '<' => {
                if self.eat('<') {
                    self.with_assign(LeftShift, LeftShiftAssign)
                } else {
                    self.with_assign(LessThan, LessThanEqual)
                }
            }
            '>' => {
                // Settle how many `>` there are before looking for `=`.
                if self.eat('>') {
                    if self.eat('>') {
                        self.with_assign(UnsignedRightShift, UnsignedRightShiftAssign)
                    } else {
                        self.with_assign(RightShift, RightShiftAssign)
                    }
                } else {
                    self.with_assign(GreaterThan, GreaterThanEqual)
                }
            }
            _ => {
                self.pos -= 1;
                self.illegal_character()
            }
        }
    }

    /// `plain`, or `assign` when followed by `=`.
    #[inline]
    fn with_assign(&mut self, plain: JsToken, assign: JsToken) -> JsToken {
        if self.eat('=') { assign } else { plain }
    }
}
