//! Text front ends.
//!
//! - [`indent`]: indented outline → [`FlowTree`](crate::graph::FlowTree).
//! - [`words`]: word splitting for interactive shell commands.

pub mod indent;
pub mod words;

pub use indent::{IndentParser, parse_indented};
pub use words::split_words;
