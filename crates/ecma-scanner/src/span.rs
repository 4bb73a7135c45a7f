//! Token spans.
//!
//! A `TokenSpan` is a half-open `[start, end)` range of absolute character
//! offsets tagged with a token kind. It never stores line/column numbers;
//! those are resolved on demand through the `IndexResolver` shared by every
//! span of one scan.

use crate::token::JsToken;
use ecma_common::{IndexResolver, SourceLocation};
use serde::Serialize;
use std::sync::Arc;

#[derive(Clone, Debug, Serialize)]
pub struct TokenSpan {
    pub start: u32,
    pub end: u32,
    pub token: JsToken,
    #[serde(skip)]
    resolver: Option<Arc<IndexResolver>>,
}

impl TokenSpan {
    pub fn new(start: u32, end: u32, token: JsToken, resolver: Arc<IndexResolver>) -> TokenSpan {
        debug_assert!(start <= end);
        TokenSpan {
            start,
            end,
            token,
            resolver: Some(resolver),
        }
    }

    /// A span with no resolver, for synthesized nodes that have no source.
    pub fn detached(start: u32, end: u32, token: JsToken) -> TokenSpan {
        TokenSpan {
            start,
            end,
            token,
            resolver: None,
        }
    }

    /// Zero-width span at offset 0 with no resolver.
    pub fn empty() -> TokenSpan {
        TokenSpan::detached(0, 0, JsToken::None)
    }

    #[inline]
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, offset: u32) -> bool {
        offset >= self.start && offset < self.end
    }

    pub fn resolver(&self) -> Option<&Arc<IndexResolver>> {
        self.resolver.as_ref()
    }

    pub fn with_token(mut self, token: JsToken) -> TokenSpan {
        self.token = token;
        self
    }

    /// Location of `start`. Without a resolver everything is on line 1.
    pub fn start_location(&self) -> SourceLocation {
        self.location_of(self.start)
    }

    /// Location of `end`.
    pub fn end_location(&self) -> SourceLocation {
        self.location_of(self.end)
    }

    pub fn start_line(&self) -> u32 {
        self.start_location().line
    }

    pub fn start_column(&self) -> u32 {
        self.start_location().column
    }

    fn location_of(&self, index: u32) -> SourceLocation {
        match &self.resolver {
            Some(resolver) => resolver.index_to_location(index),
            None => SourceLocation::new(index, 1, index + 1),
        }
    }

    /// The smallest span covering both `a` and `b`.
    ///
    /// The token kind and resolver come from `a` (or `b` when `a` has no
    /// resolver).
    pub fn combine(a: &TokenSpan, b: &TokenSpan) -> TokenSpan {
        TokenSpan {
            start: a.start.min(b.start),
            end: a.end.max(b.end),
            token: a.token,
            resolver: a.resolver.clone().or_else(|| b.resolver.clone()),
        }
    }

    /// Zero-width span at this span's start.
    pub fn flatten_to_start(&self) -> TokenSpan {
        TokenSpan {
            start: self.start,
            end: self.start,
            token: self.token,
            resolver: self.resolver.clone(),
        }
    }

    /// Zero-width span at this span's end.
    pub fn flatten_to_end(&self) -> TokenSpan {
        TokenSpan {
            start: self.end,
            end: self.end,
            token: self.token,
            resolver: self.resolver.clone(),
        }
    }

    /// Whether both spans cover the same range (token kind and resolver are
    /// ignored).
    pub fn same_range(&self, other: &TokenSpan) -> bool {
        self.start == other.start && self.end == other.end
    }
}

impl PartialEq for TokenSpan {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end && self.token == other.token
    }
}

impl Eq for TokenSpan {}

impl std::fmt::Display for TokenSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[{}..{})", self.token, self.start, self.end)
    }
}
