//! Token vocabulary shared by the scanner and its consumers.

use serde::{Deserialize, Serialize};

/// The syntactic category of an ECMAScript token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum JsToken {
    /// No token scanned yet.
    None,
    EndOfFile,
    /// A character (or run) no other rule accepts.
    Error,

    // Trivia
    WhiteSpace,
    EndOfLine,
    SingleLineComment,
    MultipleLineComment,

    // Identifiers and literals
    Identifier,
    NumericLiteral,
    StringLiteral,
    RegularExpression,

    // Keywords
    Break,
    Case,
    Catch,
    Class,
    Const,
    Continue,
    Debugger,
    Default,
    Delete,
    Do,
    Else,
    Enum,
    Export,
    Extends,
    False,
    Finally,
    For,
    Function,
    If,
    Import,
    In,
    InstanceOf,
    New,
    Null,
    Return,
    Super,
    Switch,
    This,
    Throw,
    True,
    Try,
    TypeOf,
    Var,
    Void,
    While,
    With,

    // Reserved in strict mode only
    Implements,
    Interface,
    Let,
    Package,
    Private,
    Protected,
    Public,
    Static,
    Yield,

    // Punctuation
    LeftCurly,
    RightCurly,
    LeftParenthesis,
    RightParenthesis,
    LeftBracket,
    RightBracket,
    Semicolon,
    Comma,
    AccessField,
    ConditionalIf,
    Colon,

    // Unary-only operators
    LogicalNot,
    BitwiseNot,
    Increment,
    Decrement,

    // Binary operators
    LogicalAnd,
    LogicalOr,
    BitwiseAnd,
    BitwiseOr,
    BitwiseXor,
    Equal,
    NotEqual,
    StrictEqual,
    StrictNotEqual,
    LessThan,
    LessThanEqual,
    GreaterThan,
    GreaterThanEqual,
    LeftShift,
    RightShift,
    UnsignedRightShift,
    Plus,
    Minus,
    Multiply,
    Divide,
    Modulo,

    // Assignment operators
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
}

impl JsToken {
    /// Whether this token is a reserved word.
    ///
    /// The strict-mode-only words (`let`, `yield`, `static`, ...) are only
    /// reserved when `strict` is set.
    pub fn is_keyword(self, strict: bool) -> bool {
        use JsToken::*;
        match self {
            Break | Case | Catch | Class | Const | Continue | Debugger | Default | Delete | Do
            | Else | Enum | Export | Extends | False | Finally | For | Function | If | Import
            | In | InstanceOf | New | Null | Return | Super | Switch | This | Throw | True
            | Try | TypeOf | Var | Void | While | With => true,
            Implements | Interface | Let | Package | Private | Protected | Public | Static
            | Yield => strict,
            _ => false,
        }
    }

    /// Strict-mode-only reserved words, which are plain identifiers otherwise.
    pub fn is_strict_mode_keyword(self) -> bool {
        use JsToken::*;
        matches!(
            self,
            Implements | Interface | Let | Package | Private | Protected | Public | Static | Yield
        )
    }

    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            JsToken::WhiteSpace
                | JsToken::EndOfLine
                | JsToken::SingleLineComment
                | JsToken::MultipleLineComment
        )
    }

    pub fn is_literal(self) -> bool {
        matches!(
            self,
            JsToken::NumericLiteral
                | JsToken::StringLiteral
                | JsToken::RegularExpression
                | JsToken::True
                | JsToken::False
                | JsToken::Null
        )
    }

    pub fn is_assignment_operator(self) -> bool {
        use JsToken::*;
        matches!(
            self,
            Assign
                | PlusAssign
                | MinusAssign
                | MultiplyAssign
                | DivideAssign
                | ModuloAssign
                | BitwiseAndAssign
                | BitwiseOrAssign
                | BitwiseXorAssign
                | LeftShiftAssign
                | RightShiftAssign
                | UnsignedRightShiftAssign
        )
    }

    /// Binary operators proper, excluding assignment, comma and `?`.
    pub fn is_binary_operator(self) -> bool {
        use JsToken::*;
        matches!(
            self,
            LogicalAnd
                | LogicalOr
                | BitwiseAnd
                | BitwiseOr
                | BitwiseXor
                | Equal
                | NotEqual
                | StrictEqual
                | StrictNotEqual
                | LessThan
                | LessThanEqual
                | GreaterThan
                | GreaterThanEqual
                | LeftShift
                | RightShift
                | UnsignedRightShift
                | Plus
                | Minus
                | Multiply
                | Divide
                | Modulo
                | In
                | InstanceOf
        )
    }

    pub fn is_punctuation(self) -> bool {
        self >= JsToken::LeftCurly && self <= JsToken::UnsignedRightShiftAssign
    }

    /// Canonical source text for tokens whose text is fixed.
    pub fn text(self) -> Option<&'static str> {
        use JsToken::*;
        let text = match self {
            Break => "break",
            Case => "case",
            Catch => "catch",
            Class => "class",
            Const => "const",
            Continue => "continue",
            Debugger => "debugger",
            Default => "default",
            Delete => "delete",
            Do => "do",
            Else => "else",
            Enum => "enum",
            Export => "export",
            Extends => "extends",
            False => "false",
            Finally => "finally",
            For => "for",
            Function => "function",
            If => "if",
            Import => "import",
            In => "in",
            InstanceOf => "instanceof",
            New => "new",
            Null => "null",
            Return => "return",
            Super => "super",
            Switch => "switch",
            This => "this",
            Throw => "throw",
            True => "true",
            Try => "try",
            TypeOf => "typeof",
            Var => "var",
            Void => "void",
            While => "while",
            With => "with",
            Implements => "implements",
            Interface => "interface",
            Let => "let",
            Package => "package",
            Private => "private",
            Protected => "protected",
            Public => "public",
            Static => "static",
            Yield => "yield",
            LeftCurly => "{",
            RightCurly => "}",
            LeftParenthesis => "(",
            RightParenthesis => ")",
            LeftBracket => "[",
            RightBracket => "]",
            Semicolon => ";",
            Comma => ",",
            AccessField => ".",
            ConditionalIf => "?",
            Colon => ":",
            LogicalNot => "!",
            BitwiseNot => "~",
            Increment => "++",
            Decrement => "--",
            LogicalAnd => "&&",
            LogicalOr => "||",
            BitwiseAnd => "&",
            BitwiseOr => "|",
            BitwiseXor => "^",
            Equal => "==",
            NotEqual => "!=",
            StrictEqual => "===",
            StrictNotEqual => "!==",
            LessThan => "<",
            LessThanEqual => "<=",
            GreaterThan => ">",
            GreaterThanEqual => ">=",
            LeftShift => "<<",
            RightShift => ">>",
            UnsignedRightShift => ">>>",
            Plus => "+",
            Minus => "-",
            Multiply => "*",
            Divide => "/",
            Modulo => "%",
            Assign => "=",
            PlusAssign => "+=",
            MinusAssign => "-=",
            MultiplyAssign => "*=",
            DivideAssign => "/=",
            ModuloAssign => "%=",
            BitwiseAndAssign => "&=",
            BitwiseOrAssign => "|=",
            BitwiseXorAssign => "^=",
            LeftShiftAssign => "<<=",
            RightShiftAssign => ">>=",
            UnsignedRightShiftAssign => ">>>=",
            _ => return Option::None,
        };
        Some(text)
    }

    /// Whether a `/` following this token starts a regular expression
    /// rather than a division.
    ///
    /// A `/` is a divide only when the previous significant token can end an
    /// operand: identifiers, literals, closing brackets, and the keywords
    /// that evaluate to a value.
    pub fn regex_allowed_after(prev: Option<JsToken>) -> bool {
        use JsToken::*;
        match prev {
            Option::None => true,
            Some(
                Identifier | NumericLiteral | StringLiteral | RegularExpression | RightParenthesis
                | RightBracket | RightCurly | This | Null | True | False | Super | Increment
                | Decrement,
            ) => false,
            // Strict-only words are identifiers in sloppy code.
            Some(token) if token.is_strict_mode_keyword() => false,
            Some(_) => true,
        }
    }
}

impl std::fmt::Display for JsToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}
