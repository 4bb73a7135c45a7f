//! Scopes and declared fields.
//!
//! The table is the minimal binding surface lookups resolve against: a
//! tree of scopes, each mapping names to the fields declared directly in
//! it. Scope 0 is always the global scope.

use crate::base::NodeIndex;
use ecma_common::limits::MAX_SCOPE_CHAIN_DEPTH;
use rustc_hash::FxHashMap;
use serde::Serialize;
use smallvec::SmallVec;
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ScopeId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct FieldId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ScopeKind {
    Global,
    Function,
    Block,
    Catch,
    With,
}

impl ScopeKind {
    /// Function and global scopes own `var` declarations; the others are
    /// skipped when looking for a variable's home.
    pub fn is_variable_scope(self) -> bool {
        matches!(self, ScopeKind::Global | ScopeKind::Function)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum FieldKind {
    /// `var` or function-local declaration.
    Local,
    Argument,
    /// Declared at top level.
    Global,
    /// Supplied by the host environment.
    Predefined,
    /// Referenced but never declared; created on first reference.
    UndeclaredGlobal,
}

#[derive(Clone, Debug)]
pub struct Field {
    pub name: String,
    pub kind: FieldKind,
    pub scope: ScopeId,
    /// Declaring nodes, in declaration order.
    pub declarations: SmallVec<[NodeIndex; 1]>,
    /// Number of lookups bound to this field.
    pub reference_count: u32,
}

#[derive(Clone, Debug)]
pub struct Scope {
    pub kind: ScopeKind,
    pub parent: Option<ScopeId>,
    /// Node that introduced the scope.
    pub node: NodeIndex,
    names: FxHashMap<String, FieldId>,
}

impl Scope {
    /// Number of names declared directly in this scope.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[derive(Clone, Debug)]
pub struct ScopeTable {
    scopes: Vec<Scope>,
    fields: Vec<Field>,
}

impl Default for ScopeTable {
    fn default() -> Self {
        ScopeTable::new()
    }
}

impl ScopeTable {
    /// A table holding only the global scope.
    pub fn new() -> ScopeTable {
        ScopeTable {
            scopes: vec![Scope {
                kind: ScopeKind::Global,
                parent: None,
                node: NodeIndex::NONE,
                names: FxHashMap::default(),
            }],
            fields: Vec::new(),
        }
    }

    #[inline]
    pub fn global(&self) -> ScopeId {
        ScopeId(0)
    }

    pub fn create_scope(&mut self, kind: ScopeKind, parent: ScopeId, node: NodeIndex) -> ScopeId {
        let id = ScopeId(self.scopes.len() as u32);
        self.scopes.push(Scope {
            kind,
            parent: Some(parent),
            node,
            names: FxHashMap::default(),
        });
        id
    }

    pub fn scope(&self, id: ScopeId) -> Option<&Scope> {
        self.scopes.get(id.0 as usize)
    }

    pub fn field(&self, id: FieldId) -> Option<&Field> {
        self.fields.get(id.0 as usize)
    }

    pub fn field_mut(&mut self, id: FieldId) -> Option<&mut Field> {
        self.fields.get_mut(id.0 as usize)
    }

    pub fn scope_count(&self) -> usize {
        self.scopes.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = (FieldId, &Field)> {
        self.fields
            .iter()
            .enumerate()
            .map(|(i, field)| (FieldId(i as u32), field))
    }

    /// Declare `name` directly in `scope`.
    ///
    /// Redeclaring a name in the same scope returns the existing field and
    /// records the additional declaration.
    pub fn declare(
        &mut self,
        scope: ScopeId,
        name: &str,
        kind: FieldKind,
        declaration: NodeIndex,
    ) -> FieldId {
        if let Some(existing) = self.find_in_scope(scope, name) {
            if let Some(field) = self.field_mut(existing) {
                if declaration.is_some() {
                    field.declarations.push(declaration);
                }
            }
            return existing;
        }
        let id = FieldId(self.fields.len() as u32);
        let mut declarations = SmallVec::new();
        if declaration.is_some() {
            declarations.push(declaration);
        }
        self.fields.push(Field {
            name: name.to_string(),
            kind,
            scope,
            declarations,
            reference_count: 0,
        });
        if let Some(target) = self.scopes.get_mut(scope.0 as usize) {
            target.names.insert(name.to_string(), id);
        }
        id
    }

    /// Declare a `var`: the field lives in the nearest function or global
    /// scope enclosing `scope`, not in an intervening block.
    pub fn declare_var(&mut self, scope: ScopeId, name: &str, declaration: NodeIndex) -> FieldId {
        let home = self.variable_scope(scope);
        let kind = if home == self.global() {
            FieldKind::Global
        } else {
            FieldKind::Local
        };
        self.declare(home, name, kind, declaration)
    }

    /// Declare a host-provided global such as `undefined` or `Math`.
    pub fn declare_predefined(&mut self, name: &str) -> FieldId {
        let global = self.global();
        self.declare(global, name, FieldKind::Predefined, NodeIndex::NONE)
    }

    pub fn find_in_scope(&self, scope: ScopeId, name: &str) -> Option<FieldId> {
        self.scope(scope)?.names.get(name).copied()
    }

    /// Resolve `name` from `scope` outwards through the scope chain.
    pub fn resolve(&self, scope: ScopeId, name: &str) -> Option<FieldId> {
        self.chain(scope)
            .find_map(|id| self.find_in_scope(id, name))
    }

    /// Nearest function or global scope at or above `scope`.
    pub fn variable_scope(&self, scope: ScopeId) -> ScopeId {
        self.chain(scope)
            .find(|&id| self.scope(id).is_some_and(|s| s.kind.is_variable_scope()))
            .unwrap_or_else(|| {
                debug!(scope = scope.0, "no variable scope in chain, using global");
                self.global()
            })
    }

    /// `scope` and its ancestors, innermost first.
    fn chain(&self, scope: ScopeId) -> impl Iterator<Item = ScopeId> + '_ {
        let mut current = self.scope(scope).map(|_| scope);
        (0..MAX_SCOPE_CHAIN_DEPTH).map_while(move |_| {
            let id = current?;
            current = self.scope(id).and_then(|s| s.parent);
            Some(id)
        })
    }
}
