//! Arena-backed ECMAScript syntax tree.
//!
//! This crate provides the node framework consumed by parsers and
//! rewriting passes:
//! - `NodeArena` / `NodeIndex` - Node storage and non-owning handles
//! - `NodeData` - Concrete node variants and their child slots
//! - List operations with reparenting and span maintenance
//! - `Visitor` / `VisitorMut` - Pre/post-order walking
//! - `ScopeTable` and lookup classification

pub mod arena;
pub mod base;
pub mod node;
pub mod scope;
pub mod walk;

mod constant;
mod factory;
mod list;
mod lookup;
mod replace;

pub use arena::NodeArena;
pub use base::NodeIndex;
pub use lookup::LookupBinder;
pub use node::{Children, ConstantValue, ListFamily, Node, NodeData, NodeList};
pub use scope::{Field, FieldId, FieldKind, Scope, ScopeId, ScopeKind, ScopeTable};
pub use walk::{Visitor, VisitorMut};

#[cfg(test)]
#[path = "tests/test_fixtures.rs"]
mod test_fixtures;
#[cfg(test)]
#[path = "tests/list_tests.rs"]
mod list_tests;
#[cfg(test)]
#[path = "tests/replace_tests.rs"]
mod replace_tests;
#[cfg(test)]
#[path = "tests/walk_tests.rs"]
mod walk_tests;
#[cfg(test)]
#[path = "tests/constant_tests.rs"]
mod constant_tests;
#[cfg(test)]
#[path = "tests/scope_tests.rs"]
mod scope_tests;
