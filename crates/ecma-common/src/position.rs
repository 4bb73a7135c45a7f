//! Index to line/column mapping.
//!
//! Offsets are absolute character indices (Unicode scalar values) into the
//! source document. Lines and columns are 1-based. A scan of a sub-range of a
//! larger document starts from an initial `SourceLocation` so that every
//! location it reports is expressed in the coordinates of the whole document.

use serde::{Deserialize, Serialize};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A resolved position in source text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceLocation {
    /// Absolute character index.
    pub index: u32,
    /// 1-based line number.
    pub line: u32,
    /// 1-based column number.
    pub column: u32,
}

impl SourceLocation {
    /// The first character of a document.
    pub const START: SourceLocation = SourceLocation {
        index: 0,
        line: 1,
        column: 1,
    };

    pub fn new(index: u32, line: u32, column: u32) -> SourceLocation {
        SourceLocation {
            index,
            line,
            column,
        }
    }
}

impl Default for SourceLocation {
    fn default() -> Self {
        SourceLocation::START
    }
}

impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Maps absolute character offsets to 1-based line/column locations.
///
/// The resolver owns a strictly increasing sequence of line-start offsets
/// (the offset just past each line terminator). A scanner appends to it as
/// it discovers terminators; every span produced by that scan shares the
/// same resolver and queries it lazily, so appends never invalidate earlier
/// spans. The sequence sits behind a lock so that spans, and the trees that
/// hold them, can be handed to another thread.
#[derive(Debug)]
pub struct IndexResolver {
    line_starts: RwLock<Vec<u32>>,
    initial: SourceLocation,
}

impl IndexResolver {
    /// Create an empty resolver whose first line begins at `initial`.
    pub fn new(initial: SourceLocation) -> IndexResolver {
        IndexResolver {
            line_starts: RwLock::new(Vec::new()),
            initial,
        }
    }

    /// Create a resolver with every line start of `text` precomputed.
    ///
    /// `text` is assumed to begin at `initial.index`. `\r\n` counts as a
    /// single terminator.
    pub fn from_text(text: &str, initial: SourceLocation) -> IndexResolver {
        let resolver = IndexResolver::new(initial);
        let mut chars = text.chars().peekable();
        let mut offset = initial.index;
        while let Some(ch) = chars.next() {
            offset += 1;
            match ch {
                '\r' => {
                    if chars.peek() == Some(&'\n') {
                        chars.next();
                        offset += 1;
                    }
                    resolver.add_line_start(offset);
                }
                '\n' | '\u{2028}' | '\u{2029}' => resolver.add_line_start(offset),
                _ => {}
            }
        }
        resolver
    }

    // The vector is only ever appended to in order, so a writer that
    // panicked mid-push leaves it strictly increasing either way.
    fn read_starts(&self) -> RwLockReadGuard<'_, Vec<u32>> {
        self.line_starts.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_starts(&self) -> RwLockWriteGuard<'_, Vec<u32>> {
        self.line_starts.write().unwrap_or_else(|e| e.into_inner())
    }

    /// The location of the first character this resolver covers.
    pub fn initial_location(&self) -> SourceLocation {
        self.initial
    }

    /// Record the start of a new line.
    ///
    /// Offsets must arrive in increasing order; an offset that is not
    /// greater than the last recorded one is ignored, which keeps the
    /// sequence strictly increasing when a region is rescanned.
    pub fn add_line_start(&self, offset: u32) {
        let mut starts = self.write_starts();
        if starts.last().is_none_or(|&last| offset > last) {
            starts.push(offset);
        }
    }

    /// Number of lines seen so far (at least one).
    pub fn line_count(&self) -> usize {
        self.read_starts().len() + 1
    }

    /// Absolute offset at which the 1-based `line` (relative to the initial
    /// line) begins, if that line has been seen.
    pub fn line_start(&self, line: u32) -> Option<u32> {
        if line < self.initial.line {
            return None;
        }
        let relative = (line - self.initial.line) as usize;
        if relative == 0 {
            return Some(self.initial.index);
        }
        self.read_starts().get(relative - 1).copied()
    }

    /// Resolve an absolute index to a 1-based line/column location.
    ///
    /// O(log n) in the number of recorded lines.
    pub fn index_to_location(&self, index: u32) -> SourceLocation {
        let starts = self.read_starts();
        match starts.binary_search(&index) {
            Ok(found) => SourceLocation::new(index, self.initial.line + found as u32 + 1, 1),
            Err(0) => SourceLocation::new(
                index,
                self.initial.line,
                self.initial.column + index.saturating_sub(self.initial.index),
            ),
            Err(insert_at) => {
                let line_start = starts[insert_at - 1];
                SourceLocation::new(
                    index,
                    self.initial.line + insert_at as u32,
                    index - line_start + 1,
                )
            }
        }
    }
}

impl Default for IndexResolver {
    fn default() -> Self {
        IndexResolver::new(SourceLocation::START)
    }
}
