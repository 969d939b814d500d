//! Indented text → flowchart forest.
//!
//! Each line's leading whitespace is its depth. A line's parent is the most
//! recent still-open line with a strictly smaller depth; lines at the
//! shallowest level become roots.
//!
//! ```text
//! Root
//!   Child1
//!   Child2
//!     Grandchild
//! ```
//!
//! yields `Root→Child1`, `Root→Child2`, `Child2→Grandchild`.

use std::num::NonZeroUsize;

use tracing::trace;

use crate::config::{BlankLines, IndentConfig};
use crate::graph::FlowTree;

/// One input line after depth measurement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndentedLine<'a> {
    /// Zero-based line number in the source text.
    pub line_no: usize,
    pub depth: usize,
    /// The line minus its leading whitespace; trailing content is untouched.
    pub label: &'a str,
}

/// Measure the depth of `line` and strip its leading whitespace.
///
/// With `tab_width = None` each whitespace character is one unit. With
/// `Some(w)` a tab advances to the next multiple of `w`; `Some(0)` is the
/// same as `None`.
pub fn measure(line: &str, tab_width: Option<usize>) -> (usize, &str) {
    let label = line.trim_start();
    let prefix = &line[..line.len() - label.len()];
    let depth = match tab_width.filter(|&w| w > 0) {
        None => prefix.chars().count(),
        Some(w) => prefix.chars().fold(0, |col, ch| {
            if ch == '\t' { (col / w + 1) * w } else { col + 1 }
        }),
    };
    (depth, label)
}

/// Split `src` on `\n` and measure every line the parser will consume.
///
/// Lines that are blank after stripping are dropped under [`BlankLines::Skip`].
pub fn lines<'a>(src: &'a str, config: &IndentConfig) -> impl Iterator<Item = IndentedLine<'a>> {
    let tab_width = config.tab_width.map(NonZeroUsize::get);
    let keep_blank = config.blank_lines == BlankLines::Keep;
    src.split('\n')
        .enumerate()
        .map(move |(line_no, raw)| {
            let (depth, label) = measure(raw, tab_width);
            IndentedLine {
                line_no,
                depth,
                label,
            }
        })
        .filter(move |line| keep_blank || !line.label.is_empty())
}

/// Stack-based indentation parser.
#[derive(Debug, Clone, Default)]
pub struct IndentParser {
    pub config: IndentConfig,
}

impl IndentParser {
    pub fn new(config: IndentConfig) -> Self {
        Self { config }
    }

    /// Build a fresh forest from `src`. Never fails.
    pub fn parse(&self, src: &str) -> FlowTree {
        let mut tree = FlowTree::new();
        // Open ancestor chain: (label, depth), depths strictly increasing.
        let mut stack: Vec<(&str, usize)> = Vec::new();

        for line in lines(src, &self.config) {
            while stack.last().is_some_and(|&(_, d)| d >= line.depth) {
                stack.pop();
            }
            tree.insert_node(line.label);
            if let Some(&(parent, _)) = stack.last() {
                trace!(line = line.line_no, parent, child = line.label, "edge");
                tree.add_edge(parent, line.label);
            } else {
                trace!(line = line.line_no, root = line.label, "root");
            }
            stack.push((line.label, line.depth));
        }
        tree
    }
}

/// Parse with the default configuration.
pub fn parse_indented(src: &str) -> FlowTree {
    IndentParser::default().parse(src)
}

#[cfg(test)]
#[path = "../../tests/rust/test_parsers_indent.rs"]
mod tests;
