//! Centralized limits and thresholds.
//!
//! Parent links and scope chains are walked iteratively. A malformed tree
//! (a cycle introduced by a buggy rewriting pass) would otherwise spin
//! forever, so every such walk is bounded by one of these constants.

// =============================================================================
// Walk Limits
// =============================================================================

/// Maximum number of parent links followed when searching for an enclosing
/// scope or variable scope from a node.
pub const MAX_PARENT_WALK_ITERATIONS: usize = 10_000;

/// Maximum number of scopes visited when resolving a name through a scope
/// chain.
pub const MAX_SCOPE_CHAIN_DEPTH: usize = 10_000;

// =============================================================================
// Capacity Hints
// =============================================================================

/// Rough characters-per-token ratio used to pre-size token buffers.
pub const CHARS_PER_TOKEN_ESTIMATE: usize = 4;

/// Upper bound for any pre-allocation derived from source length.
pub const MAX_TOKEN_PREALLOC: usize = 1_000_000;
