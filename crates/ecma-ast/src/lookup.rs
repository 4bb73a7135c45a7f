//! Lookup classification and binding.

use crate::arena::NodeArena;
use crate::base::NodeIndex;
use crate::node::NodeData;
use crate::scope::{FieldId, FieldKind, ScopeId, ScopeTable};
use crate::walk::VisitorMut;
use ecma_scanner::JsToken;
use tracing::debug;

impl NodeArena {
    /// Attach `scope` to a function, block or program node.
    pub fn set_scope(&mut self, node: NodeIndex, scope: ScopeId) -> bool {
        let Some(target) = self.get_mut(node) else {
            return false;
        };
        match &mut target.data {
            NodeData::Function { scope: slot, .. }
            | NodeData::Block { scope: slot, .. }
            | NodeData::Program { scope: slot, .. } => {
                *slot = Some(scope);
                true
            }
            _ => false,
        }
    }

    /// Innermost scope attached to an ancestor of `node`.
    pub fn lexical_scope_of(&self, node: NodeIndex) -> Option<ScopeId> {
        self.ancestors(node)
            .find_map(|ancestor| self.data(ancestor).and_then(NodeData::scope))
    }

    /// The function or global scope `node` belongs to.
    ///
    /// Parent links are followed upwards; block-level scopes met on the way
    /// are skipped. A node with no scoped ancestor belongs to the global
    /// scope.
    pub fn variable_scope_of(&self, node: NodeIndex, scopes: &ScopeTable) -> ScopeId {
        let found = self
            .ancestors(node)
            .filter_map(|ancestor| self.data(ancestor).and_then(NodeData::scope))
            .find(|&scope| {
                scopes
                    .scope(scope)
                    .is_some_and(|s| s.kind.is_variable_scope())
            });
        found.unwrap_or_else(|| {
            debug!(node = %node, "no enclosing function scope, using global");
            scopes.global()
        })
    }

    /// Whether the lookup `lookup` is written to, judged from its immediate
    /// parent only: the left operand of an assignment, the operand of `++`
    /// or `--`, or the variable of a `for (x in ...)` loop.
    pub fn is_assignment_target(&self, lookup: NodeIndex) -> bool {
        if !matches!(self.data(lookup), Some(NodeData::Lookup { .. })) {
            return false;
        }
        match self.data(self.parent_of(lookup)) {
            Some(NodeData::BinaryOperator { op, left, .. }) => {
                op.is_assignment_operator() && *left == lookup
            }
            Some(NodeData::UnaryOperator { op, .. }) => {
                matches!(op, JsToken::Increment | JsToken::Decrement)
            }
            Some(NodeData::ForIn { variable, .. }) => *variable == lookup,
            _ => false,
        }
    }

    /// Field a lookup has been bound to.
    pub fn lookup_field(&self, lookup: NodeIndex) -> Option<FieldId> {
        match self.data(lookup) {
            Some(NodeData::Lookup { field, .. }) => *field,
            _ => None,
        }
    }

    /// Resolve the lookup `lookup` through the scope chain starting at its
    /// innermost enclosing scope and record the result on the node.
    ///
    /// A name declared nowhere becomes an undeclared global. Each binding
    /// counts as one reference to the field. Returns `None` if `lookup` is
    /// not a lookup.
    pub fn bind_lookup(&mut self, lookup: NodeIndex, scopes: &mut ScopeTable) -> Option<FieldId> {
        let name = match self.data(lookup) {
            Some(NodeData::Lookup { name, .. }) => name.clone(),
            _ => return None,
        };
        let start = self
            .lexical_scope_of(lookup)
            .unwrap_or_else(|| scopes.global());
        let field = match scopes.resolve(start, &name) {
            Some(field) => field,
            None => {
                let global = scopes.global();
                scopes.declare(global, &name, FieldKind::UndeclaredGlobal, NodeIndex::NONE)
            }
        };
        if let Some(record) = scopes.field_mut(field) {
            record.reference_count += 1;
        }
        if let Some(NodeData::Lookup { field: slot, .. }) = self.get_mut(lookup).map(|n| &mut n.data) {
            *slot = Some(field);
        }
        debug!(
            name = %name,
            field = field.0,
            write = self.is_assignment_target(lookup),
            "bound lookup"
        );
        Some(field)
    }
}

/// Binds every lookup in a subtree.
pub struct LookupBinder<'a> {
    scopes: &'a mut ScopeTable,
    bound: usize,
}

impl<'a> LookupBinder<'a> {
    pub fn new(scopes: &'a mut ScopeTable) -> LookupBinder<'a> {
        LookupBinder { scopes, bound: 0 }
    }

    /// Number of lookups bound so far.
    pub fn bound(&self) -> usize {
        self.bound
    }
}

impl VisitorMut for LookupBinder<'_> {
    fn walk(&mut self, arena: &mut NodeArena, node: NodeIndex) -> bool {
        if arena.bind_lookup(node, self.scopes).is_some() {
            self.bound += 1;
        }
        true
    }
}
