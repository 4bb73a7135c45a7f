//! Node construction API.
//!
//! Every constructor takes the span of the node's own leading token(s),
//! reparents the children it is given, and widens the span to cover them.

use crate::arena::{NodeArena, union_span};
use crate::base::NodeIndex;
use crate::node::{ConstantValue, ListFamily, Node, NodeData, NodeList};
use ecma_scanner::{JsToken, TokenSpan};

impl NodeArena {
    /// Allocate `data` and attach every child it names.
    ///
    /// A node has one parent slot, so a handle named in two slots ends up
    /// in the last of them and the earlier slot is left empty.
    fn alloc(&mut self, data: NodeData, span: TokenSpan) -> NodeIndex {
        let index = self.add(Node::new(data, span));
        let slots = self.data(index).map_or(0, NodeData::slot_count);
        for slot in 0..slots {
            let child = self.data(index).map_or(NodeIndex::NONE, |data| data.slot(slot));
            if child.is_none() {
                continue;
            }
            self.adopt(index, child);
            let widened = match (self.span_of(index), self.span_of(child)) {
                (Some(own), Some(theirs)) => Some(union_span(own, theirs)),
                _ => None,
            };
            if let (Some(span), Some(node)) = (widened, self.get_mut(index)) {
                node.span = span;
            }
        }
        index
    }

    /// A list holding `elements` in order. Same-family lists among
    /// `elements` are inlined. With no elements the list keeps `span`.
    pub fn add_list(
        &mut self,
        family: ListFamily,
        span: TokenSpan,
        elements: &[NodeIndex],
    ) -> NodeIndex {
        let list = self.add(Node::new(NodeData::List(NodeList::new(family)), span));
        for &element in elements {
            self.list_append(list, element);
        }
        list
    }

    fn add_owned_list(
        &mut self,
        family: ListFamily,
        owner_span: &TokenSpan,
        elements: &[NodeIndex],
    ) -> NodeIndex {
        self.add_list(family, owner_span.flatten_to_start(), elements)
    }

    // Expressions

    pub fn add_constant(&mut self, span: TokenSpan, value: ConstantValue) -> NodeIndex {
        self.alloc(NodeData::Constant(value), span)
    }

    pub fn add_regexp(&mut self, span: TokenSpan, pattern: &str, flags: &str) -> NodeIndex {
        self.alloc(
            NodeData::RegExpLiteral {
                pattern: pattern.to_string(),
                flags: flags.to_string(),
            },
            span,
        )
    }

    pub fn add_lookup(&mut self, span: TokenSpan, name: &str) -> NodeIndex {
        self.alloc(
            NodeData::Lookup {
                name: name.to_string(),
                field: None,
            },
            span,
        )
    }

    /// Binary or assignment operator.
    pub fn add_binary(
        &mut self,
        span: TokenSpan,
        op: JsToken,
        left: NodeIndex,
        right: NodeIndex,
    ) -> NodeIndex {
        self.alloc(NodeData::BinaryOperator { op, left, right }, span)
    }

    pub fn add_unary(
        &mut self,
        span: TokenSpan,
        op: JsToken,
        operand: NodeIndex,
        postfix: bool,
    ) -> NodeIndex {
        self.alloc(
            NodeData::UnaryOperator {
                op,
                operand,
                postfix,
            },
            span,
        )
    }

    pub fn add_conditional(
        &mut self,
        span: TokenSpan,
        condition: NodeIndex,
        when_true: NodeIndex,
        when_false: NodeIndex,
    ) -> NodeIndex {
        self.alloc(
            NodeData::Conditional {
                condition,
                when_true,
                when_false,
            },
            span,
        )
    }

    pub fn add_comma(&mut self, span: TokenSpan, expressions: &[NodeIndex]) -> NodeIndex {
        let expressions = self.add_owned_list(ListFamily::Expressions, &span, expressions);
        self.alloc(NodeData::Comma { expressions }, span)
    }

    pub fn add_array_literal(&mut self, span: TokenSpan, elements: &[NodeIndex]) -> NodeIndex {
        let elements = self.add_owned_list(ListFamily::Expressions, &span, elements);
        self.alloc(NodeData::ArrayLiteral { elements }, span)
    }

    pub fn add_object_literal(&mut self, span: TokenSpan, properties: &[NodeIndex]) -> NodeIndex {
        let properties = self.add_owned_list(ListFamily::Properties, &span, properties);
        self.alloc(NodeData::ObjectLiteral { properties }, span)
    }

    pub fn add_object_field(&mut self, span: TokenSpan, name: &str) -> NodeIndex {
        self.alloc(
            NodeData::ObjectLiteralField {
                name: name.to_string(),
            },
            span,
        )
    }

    /// `name: value`; `name` should be an object-literal field.
    pub fn add_object_property(
        &mut self,
        span: TokenSpan,
        name: NodeIndex,
        value: NodeIndex,
    ) -> NodeIndex {
        self.alloc(NodeData::ObjectLiteralProperty { name, value }, span)
    }

    /// Function expression. `body` should be a block.
    pub fn add_function(
        &mut self,
        span: TokenSpan,
        name: Option<&str>,
        parameters: &[NodeIndex],
        body: NodeIndex,
    ) -> NodeIndex {
        let parameters = self.add_owned_list(ListFamily::Parameters, &span, parameters);
        self.alloc(
            NodeData::Function {
                name: name.map(str::to_string),
                parameters,
                body,
                scope: None,
            },
            span,
        )
    }

    pub fn add_parameter(&mut self, span: TokenSpan, name: &str) -> NodeIndex {
        self.alloc(
            NodeData::Parameter {
                name: name.to_string(),
                field: None,
            },
            span,
        )
    }

    // Statements

    pub fn add_expression_statement(&mut self, span: TokenSpan, expression: NodeIndex) -> NodeIndex {
        self.alloc(NodeData::ExpressionStatement { expression }, span)
    }

    pub fn add_var(&mut self, span: TokenSpan, declarations: &[NodeIndex]) -> NodeIndex {
        let declarations = self.add_owned_list(ListFamily::Declarations, &span, declarations);
        self.alloc(NodeData::Var { declarations }, span)
    }

    pub fn add_variable_declaration(
        &mut self,
        span: TokenSpan,
        name: &str,
        initializer: NodeIndex,
    ) -> NodeIndex {
        self.alloc(
            NodeData::VariableDeclaration {
                name: name.to_string(),
                initializer,
                field: None,
            },
            span,
        )
    }

    pub fn add_block(&mut self, span: TokenSpan, statements: &[NodeIndex]) -> NodeIndex {
        let statements = self.add_owned_list(ListFamily::Statements, &span, statements);
        self.alloc(
            NodeData::Block {
                statements,
                scope: None,
            },
            span,
        )
    }

    pub fn add_for(
        &mut self,
        span: TokenSpan,
        initializer: NodeIndex,
        condition: NodeIndex,
        increment: NodeIndex,
        body: NodeIndex,
    ) -> NodeIndex {
        self.alloc(
            NodeData::For {
                initializer,
                condition,
                increment,
                body,
            },
            span,
        )
    }

    pub fn add_for_in(
        &mut self,
        span: TokenSpan,
        variable: NodeIndex,
        collection: NodeIndex,
        body: NodeIndex,
    ) -> NodeIndex {
        self.alloc(
            NodeData::ForIn {
                variable,
                collection,
                body,
            },
            span,
        )
    }

    pub fn add_while(&mut self, span: TokenSpan, condition: NodeIndex, body: NodeIndex) -> NodeIndex {
        self.alloc(NodeData::While { condition, body }, span)
    }

    pub fn add_do_while(
        &mut self,
        span: TokenSpan,
        body: NodeIndex,
        condition: NodeIndex,
    ) -> NodeIndex {
        self.alloc(NodeData::DoWhile { body, condition }, span)
    }

    pub fn add_switch(&mut self, span: TokenSpan, expression: NodeIndex, cases: &[NodeIndex]) -> NodeIndex {
        let cases = self.add_owned_list(ListFamily::Cases, &span, cases);
        self.alloc(NodeData::Switch { expression, cases }, span)
    }

    /// `case value:`; pass [`NodeIndex::NONE`] for `default:`.
    pub fn add_switch_case(
        &mut self,
        span: TokenSpan,
        case_value: NodeIndex,
        statements: &[NodeIndex],
    ) -> NodeIndex {
        let statements = self.add_owned_list(ListFamily::Statements, &span, statements);
        self.alloc(
            NodeData::SwitchCase {
                case_value,
                statements,
            },
            span,
        )
    }

    pub fn add_program(&mut self, span: TokenSpan, statements: &[NodeIndex]) -> NodeIndex {
        let statements = self.add_owned_list(ListFamily::Statements, &span, statements);
        self.alloc(
            NodeData::Program {
                statements,
                scope: None,
            },
            span,
        )
    }

    /// `left, right` as one comma sequence.
    ///
    /// If `left` is already a comma sequence it is extended in place;
    /// otherwise a new one is built. A comma sequence on the right is
    /// flattened into the result rather than nested, and the emptied
    /// sequence is detached from its parent. `right` always leaves its
    /// previous parent; so does `left` unless it is the extended sequence.
    pub fn combine_with_comma(&mut self, left: NodeIndex, right: NodeIndex) -> NodeIndex {
        let sequence = match self.data(left) {
            Some(NodeData::Comma { .. }) => left,
            Some(_) => {
                let span = self
                    .span_of(left)
                    .map_or_else(TokenSpan::empty, |span| span.clone().with_token(JsToken::Comma));
                self.add_comma(span, &[left])
            }
            None => return right,
        };
        let addition = match self.data(right) {
            Some(NodeData::Comma { expressions }) => *expressions,
            Some(_) => right,
            None => return sequence,
        };
        let expressions = match self.data(sequence) {
            Some(NodeData::Comma { expressions }) => *expressions,
            _ => return sequence,
        };
        if !self.list_append(expressions, addition) {
            return sequence;
        }
        if addition != right {
            let previous = self.parent_of(right);
            if previous.is_some() {
                self.replace_child(previous, right, NodeIndex::NONE);
            }
        }
        sequence
    }
}
