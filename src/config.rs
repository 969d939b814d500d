//! Configuration for parsing, rendering and the interactive session.
//!
//! Every value here is filled from CLI flags; there is no config file.

use std::num::NonZeroUsize;

/// Configuration for the text renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Use Unicode box-drawing characters (true) or plain ASCII (false).
    pub unicode: bool,
    /// Padding inside node boxes (in characters).
    pub padding: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            unicode: true,
            padding: 1,
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

/// What the indentation parser does with lines that are empty after
/// stripping their leading whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlankLines {
    /// Ignore the line completely: no node, and the ancestor stack is untouched.
    #[default]
    Skip,
    /// Treat the line like any other, producing a node with the empty label.
    Keep,
}

/// Configuration for the indented-text parser.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IndentConfig {
    pub blank_lines: BlankLines,
    /// `None` counts every leading whitespace character (tabs included) as one
    /// unit of depth. `Some(n)` advances tabs to the next multiple of `n`.
    pub tab_width: Option<NonZeroUsize>,
}

impl IndentConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blank_lines(mut self, blank_lines: BlankLines) -> Self {
        self.blank_lines = blank_lines;
        self
    }

    pub fn with_tab_width(mut self, tab_width: Option<usize>) -> Self {
        self.tab_width = tab_width.and_then(NonZeroUsize::new);
        self
    }
}

/// Everything a [`Session`](crate::session::Session) needs at start-up.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionConfig {
    pub render: RenderConfig,
    pub indent: IndentConfig,
}
