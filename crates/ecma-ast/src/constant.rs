//! Constant-foldability.

use crate::arena::NodeArena;
use crate::base::NodeIndex;
use crate::node::NodeData;
use ecma_scanner::JsToken;

impl NodeArena {
    /// Whether `node`'s value could be computed ahead of time.
    ///
    /// Literals are constant; references, functions, regular expression
    /// literals (each evaluation creates a new object) and anything with a
    /// side effect are not. Composite expressions are constant when every
    /// present child is, so an empty array or object literal is constant.
    /// Statements are never constant.
    pub fn is_constant(&self, node: NodeIndex) -> bool {
        let Some(data) = self.data(node) else {
            return false;
        };
        match data {
            NodeData::Constant(_) | NodeData::ObjectLiteralField { .. } => true,
            NodeData::RegExpLiteral { .. }
            | NodeData::Lookup { .. }
            | NodeData::Function { .. }
            | NodeData::Parameter { .. } => false,
            NodeData::BinaryOperator { op, .. } if op.is_assignment_operator() => false,
            NodeData::UnaryOperator { op, .. }
                if matches!(op, JsToken::Increment | JsToken::Decrement | JsToken::Delete) =>
            {
                false
            }
            data if data.is_statement() => false,
            _ => self.children(node).all(|child| self.is_constant(child)),
        }
    }
}
