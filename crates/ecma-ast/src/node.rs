//! Node storage types.
//!
//! Every node is a [`Node`] record in the arena: a span, a parent handle and
//! a [`NodeData`] variant. A variant's children live in numbered *slots*:
//! fixed fields for ordinary nodes (absent children are
//! [`NodeIndex::NONE`]), and one slot per element for lists. Slots are in
//! source order, which is the order `children` and `walk` visit them in.

use crate::base::NodeIndex;
use crate::scope::{FieldId, ScopeId};
use ecma_scanner::{JsToken, TokenSpan};
use serde::Serialize;

#[derive(Clone, Debug, Serialize)]
pub struct Node {
    pub data: NodeData,
    pub span: TokenSpan,
    /// Non-owning back-reference; [`NodeIndex::NONE`] while detached.
    pub parent: NodeIndex,
}

impl Node {
    pub fn new(data: NodeData, span: TokenSpan) -> Node {
        Node {
            data,
            span,
            parent: NodeIndex::NONE,
        }
    }

    #[inline]
    pub fn is_list(&self) -> bool {
        matches!(self.data, NodeData::List(_))
    }
}

/// Value of a literal leaf.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum ConstantValue {
    Number(f64),
    String(String),
    Boolean(bool),
    Null,
}

/// What a [`NodeList`] holds. Appending a list of the same family inlines
/// its elements; lists of different families nest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ListFamily {
    Expressions,
    Properties,
    Parameters,
    Declarations,
    Statements,
    Cases,
}

/// Ordered, dense child sequence. Each element's parent is the list node
/// itself, and the list node's span is the union of its elements' spans.
#[derive(Clone, Debug, Serialize)]
pub struct NodeList {
    pub family: ListFamily,
    pub nodes: Vec<NodeIndex>,
}

impl NodeList {
    pub fn new(family: ListFamily) -> NodeList {
        NodeList {
            family,
            nodes: Vec::new(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[derive(Clone, Debug, Serialize)]
pub enum NodeData {
    // Expressions
    Constant(ConstantValue),
    RegExpLiteral {
        pattern: String,
        flags: String,
    },
    /// A variable reference.
    Lookup {
        name: String,
        /// Resolved field, once bound.
        field: Option<FieldId>,
    },
    BinaryOperator {
        op: JsToken,
        left: NodeIndex,
        right: NodeIndex,
    },
    UnaryOperator {
        op: JsToken,
        operand: NodeIndex,
        postfix: bool,
    },
    Conditional {
        condition: NodeIndex,
        when_true: NodeIndex,
        when_false: NodeIndex,
    },
    /// `a, b, c`; `expressions` is an expression list.
    Comma {
        expressions: NodeIndex,
    },
    ArrayLiteral {
        elements: NodeIndex,
    },
    ObjectLiteral {
        properties: NodeIndex,
    },
    /// `name: value` inside an object literal. `name` is an
    /// [`NodeData::ObjectLiteralField`].
    ObjectLiteralProperty {
        name: NodeIndex,
        value: NodeIndex,
    },
    ObjectLiteralField {
        name: String,
    },
    Function {
        name: Option<String>,
        parameters: NodeIndex,
        body: NodeIndex,
        scope: Option<ScopeId>,
    },
    Parameter {
        name: String,
        field: Option<FieldId>,
    },

    // Statements
    ExpressionStatement {
        expression: NodeIndex,
    },
    Var {
        declarations: NodeIndex,
    },
    VariableDeclaration {
        name: String,
        initializer: NodeIndex,
        field: Option<FieldId>,
    },
    Block {
        statements: NodeIndex,
        scope: Option<ScopeId>,
    },
    For {
        initializer: NodeIndex,
        condition: NodeIndex,
        increment: NodeIndex,
        body: NodeIndex,
    },
    ForIn {
        /// A [`NodeData::Lookup`] or a single-declaration [`NodeData::Var`].
        variable: NodeIndex,
        collection: NodeIndex,
        body: NodeIndex,
    },
    While {
        condition: NodeIndex,
        body: NodeIndex,
    },
    DoWhile {
        body: NodeIndex,
        condition: NodeIndex,
    },
    Switch {
        expression: NodeIndex,
        cases: NodeIndex,
    },
    /// `case value:` or, with an absent value, `default:`.
    SwitchCase {
        case_value: NodeIndex,
        statements: NodeIndex,
    },
    Program {
        statements: NodeIndex,
        scope: Option<ScopeId>,
    },

    List(NodeList),
}

impl NodeData {
    /// Short variant name for logs and debug output.
    pub fn name(&self) -> &'static str {
        match self {
            NodeData::Constant(_) => "Constant",
            NodeData::RegExpLiteral { .. } => "RegExpLiteral",
            NodeData::Lookup { .. } => "Lookup",
            NodeData::BinaryOperator { .. } => "BinaryOperator",
            NodeData::UnaryOperator { .. } => "UnaryOperator",
            NodeData::Conditional { .. } => "Conditional",
            NodeData::Comma { .. } => "Comma",
            NodeData::ArrayLiteral { .. } => "ArrayLiteral",
            NodeData::ObjectLiteral { .. } => "ObjectLiteral",
            NodeData::ObjectLiteralProperty { .. } => "ObjectLiteralProperty",
            NodeData::ObjectLiteralField { .. } => "ObjectLiteralField",
            NodeData::Function { .. } => "Function",
            NodeData::Parameter { .. } => "Parameter",
            NodeData::ExpressionStatement { .. } => "ExpressionStatement",
            NodeData::Var { .. } => "Var",
            NodeData::VariableDeclaration { .. } => "VariableDeclaration",
            NodeData::Block { .. } => "Block",
            NodeData::For { .. } => "For",
            NodeData::ForIn { .. } => "ForIn",
            NodeData::While { .. } => "While",
            NodeData::DoWhile { .. } => "DoWhile",
            NodeData::Switch { .. } => "Switch",
            NodeData::SwitchCase { .. } => "SwitchCase",
            NodeData::Program { .. } => "Program",
            NodeData::List(_) => "List",
        }
    }

    pub fn is_statement(&self) -> bool {
        matches!(
            self,
            NodeData::ExpressionStatement { .. }
                | NodeData::Var { .. }
                | NodeData::VariableDeclaration { .. }
                | NodeData::Block { .. }
                | NodeData::For { .. }
                | NodeData::ForIn { .. }
                | NodeData::While { .. }
                | NodeData::DoWhile { .. }
                | NodeData::Switch { .. }
                | NodeData::SwitchCase { .. }
                | NodeData::Program { .. }
        )
    }

    /// Scope attached to a scope-introducing node.
    pub fn scope(&self) -> Option<ScopeId> {
        match self {
            NodeData::Function { scope, .. }
            | NodeData::Block { scope, .. }
            | NodeData::Program { scope, .. } => *scope,
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&NodeList> {
        match self {
            NodeData::List(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_list_mut(&mut self) -> Option<&mut NodeList> {
        match self {
            NodeData::List(list) => Some(list),
            _ => None,
        }
    }

    /// Number of child slots, present or not.
    pub fn slot_count(&self) -> usize {
        use NodeData::*;
        match self {
            Constant(_)
            | RegExpLiteral { .. }
            | Lookup { .. }
            | ObjectLiteralField { .. }
            | Parameter { .. } => 0,
            UnaryOperator { .. }
            | Comma { .. }
            | ArrayLiteral { .. }
            | ObjectLiteral { .. }
            | ExpressionStatement { .. }
            | Var { .. }
            | VariableDeclaration { .. }
            | Block { .. }
            | Program { .. } => 1,
            BinaryOperator { .. }
            | ObjectLiteralProperty { .. }
            | Function { .. }
            | While { .. }
            | DoWhile { .. }
            | Switch { .. }
            | SwitchCase { .. } => 2,
            Conditional { .. } | ForIn { .. } => 3,
            For { .. } => 4,
            List(list) => list.nodes.len(),
        }
    }

    /// Child in `slot`, or [`NodeIndex::NONE`] when absent or out of range.
    pub fn slot(&self, slot: usize) -> NodeIndex {
        use NodeData::*;
        let child = match (self, slot) {
            (BinaryOperator { left, .. }, 0) => left,
            (BinaryOperator { right, .. }, 1) => right,
            (UnaryOperator { operand, .. }, 0) => operand,
            (Conditional { condition, .. }, 0) => condition,
            (Conditional { when_true, .. }, 1) => when_true,
            (Conditional { when_false, .. }, 2) => when_false,
            (Comma { expressions }, 0) => expressions,
            (ArrayLiteral { elements }, 0) => elements,
            (ObjectLiteral { properties }, 0) => properties,
            (ObjectLiteralProperty { name, .. }, 0) => name,
            (ObjectLiteralProperty { value, .. }, 1) => value,
            (Function { parameters, .. }, 0) => parameters,
            (Function { body, .. }, 1) => body,
            (ExpressionStatement { expression }, 0) => expression,
            (Var { declarations }, 0) => declarations,
            (VariableDeclaration { initializer, .. }, 0) => initializer,
            (Block { statements, .. }, 0) => statements,
            (For { initializer, .. }, 0) => initializer,
            (For { condition, .. }, 1) => condition,
            (For { increment, .. }, 2) => increment,
            (For { body, .. }, 3) => body,
            (ForIn { variable, .. }, 0) => variable,
            (ForIn { collection, .. }, 1) => collection,
            (ForIn { body, .. }, 2) => body,
            (While { condition, .. }, 0) => condition,
            (While { body, .. }, 1) => body,
            (DoWhile { body, .. }, 0) => body,
            (DoWhile { condition, .. }, 1) => condition,
            (Switch { expression, .. }, 0) => expression,
            (Switch { cases, .. }, 1) => cases,
            (SwitchCase { case_value, .. }, 0) => case_value,
            (SwitchCase { statements, .. }, 1) => statements,
            (Program { statements, .. }, 0) => statements,
            (List(list), i) => return list.nodes.get(i).copied().unwrap_or(NodeIndex::NONE),
            _ => return NodeIndex::NONE,
        };
        *child
    }

    /// Mutable access to a fixed slot. Lists are not handled here: their
    /// slots are resized rather than overwritten with an absent handle.
    pub(crate) fn fixed_slot_mut(&mut self, slot: usize) -> Option<&mut NodeIndex> {
        use NodeData::*;
        let child = match (self, slot) {
            (BinaryOperator { left, .. }, 0) => left,
            (BinaryOperator { right, .. }, 1) => right,
            (UnaryOperator { operand, .. }, 0) => operand,
            (Conditional { condition, .. }, 0) => condition,
            (Conditional { when_true, .. }, 1) => when_true,
            (Conditional { when_false, .. }, 2) => when_false,
            (Comma { expressions }, 0) => expressions,
            (ArrayLiteral { elements }, 0) => elements,
            (ObjectLiteral { properties }, 0) => properties,
            (ObjectLiteralProperty { name, .. }, 0) => name,
            (ObjectLiteralProperty { value, .. }, 1) => value,
            (Function { parameters, .. }, 0) => parameters,
            (Function { body, .. }, 1) => body,
            (ExpressionStatement { expression }, 0) => expression,
            (Var { declarations }, 0) => declarations,
            (VariableDeclaration { initializer, .. }, 0) => initializer,
            (Block { statements, .. }, 0) => statements,
            (For { initializer, .. }, 0) => initializer,
            (For { condition, .. }, 1) => condition,
            (For { increment, .. }, 2) => increment,
            (For { body, .. }, 3) => body,
            (ForIn { variable, .. }, 0) => variable,
            (ForIn { collection, .. }, 1) => collection,
            (ForIn { body, .. }, 2) => body,
            (While { condition, .. }, 0) => condition,
            (While { body, .. }, 1) => body,
            (DoWhile { body, .. }, 0) => body,
            (DoWhile { condition, .. }, 1) => condition,
            (Switch { expression, .. }, 0) => expression,
            (Switch { cases, .. }, 1) => cases,
            (SwitchCase { case_value, .. }, 0) => case_value,
            (SwitchCase { statements, .. }, 1) => statements,
            (Program { statements, .. }, 0) => statements,
            _ => return None,
        };
        Some(child)
    }

    /// Slot currently holding `child`.
    pub fn slot_of(&self, child: NodeIndex) -> Option<usize> {
        if child.is_none() {
            return None;
        }
        (0..self.slot_count()).find(|&slot| self.slot(slot) == child)
    }
}

/// Present direct children of one node, in source order.
///
/// Lazily produced and restartable: cloning the iterator (or calling
/// [`NodeArena::children`](crate::NodeArena::children) again) starts a
/// fresh pass.
#[derive(Clone, Debug)]
pub struct Children<'a> {
    data: Option<&'a NodeData>,
    slot: usize,
}

impl<'a> Children<'a> {
    pub(crate) fn new(data: Option<&'a NodeData>) -> Children<'a> {
        Children { data, slot: 0 }
    }
}

impl Iterator for Children<'_> {
    type Item = NodeIndex;

    fn next(&mut self) -> Option<NodeIndex> {
        let data = self.data?;
        while self.slot < data.slot_count() {
            let child = data.slot(self.slot);
            self.slot += 1;
            if child.is_some() {
                return Some(child);
            }
        }
        None
    }
}

impl std::iter::FusedIterator for Children<'_> {}
