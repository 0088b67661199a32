//! Breadcrumb path stack threaded through transform/restore calls
//!
//! Every combinator that delegates to a child contract appends a tag
//! describing the descent step (object key, array index, union branch),
//! so a failure deep inside a nested structure reports the full trail
//! from the top-level entry point down to the violating leaf.

use std::fmt;

/// Immutable, append-only stack of human-readable location tags.
///
/// An empty stack marks the root of a top-level `transform`/`restore`
/// call. [`Breadcrumbs::with`] returns an extended copy; the receiver is
/// never mutated, so sibling descents never observe each other's tags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Breadcrumbs {
    tags: Vec<String>,
}

impl Breadcrumbs {
    /// Create an empty stack (the root of a call tree).
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a new stack equal to this one plus the appended tag.
    pub fn with(&self, tag: impl Into<String>) -> Self {
        let mut tags = self.tags.clone();
        tags.push(tag.into());
        Self { tags }
    }

    /// Number of tags on the stack (the current nesting depth).
    pub fn depth(&self) -> usize {
        self.tags.len()
    }

    /// True at the root of a top-level call.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Render the trail as an arrow-joined breadcrumb string, e.g.
    /// `object:restore['remote'] -> array:restore[1] -> number:restore`.
    /// The empty stack renders as `(root)`.
    pub fn render(&self) -> String {
        if self.tags.is_empty() {
            "(root)".to_string()
        } else {
            self.tags.join(" -> ")
        }
    }
}

impl fmt::Display for Breadcrumbs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}
