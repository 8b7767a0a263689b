//! # dotviz Parser
//!
//! Lenient parser for the subset of the Graphviz DOT language understood by
//! dotviz. It turns source text into a [`dotviz_core::graph::Graph`].
//!
//! The parser never fails. Statements it does not understand are skipped
//! (and logged at debug level), so any text yields some graph, possibly
//! empty.
//!
//! ## Usage
//!
//! ```
//! let graph = dotviz_parser::parse("digraph G { a -> b; }");
//!
//! assert_eq!(graph.node_count(), 2);
//! assert_eq!(graph.edges()[0].source(), "a");
//! assert_eq!(graph.edges()[0].target(), "b");
//! ```
//!
//! ## Supported syntax
//!
//! - Header: the first `[strict] (graph | digraph) [id] {`, keywords in any
//!   case; anything before it is skipped
//! - Edges: `a -> b;` (`--` in undirected graphs), chains `a -> b -> c;`,
//!   optionally followed by `[key=value, ...]`
//! - Nodes: `a [key=value, ...];`
//! - Defaults: `node [...]`, `edge [...]`, `graph [...]`
//! - Graph attributes: `key = value;`
//! - Comments: `//` lines, `#` lines and single-line `/* */`
//!
//! Every statement must end with `;` and fit on one line.

pub mod attributes;
mod lexer;
mod parser;
mod span;
mod tokens;

pub use span::Span;

use dotviz_core::graph::Graph;

/// Parse DOT source text into a graph.
///
/// This is the main entry point for the parser:
///
/// 1. **Tokenize** - Convert source text to tokens
/// 2. **Build** - Detect the header and classify each statement
///
/// # Example
///
/// ```
/// let graph = dotviz_parser::parse("graph { a -- b; b [shape=box]; }");
///
/// assert!(!graph.kind().is_directed());
/// assert_eq!(graph.node("b").unwrap().attributes().get("shape"), Some("box"));
/// ```
pub fn parse(source: &str) -> Graph {
    let tokens = lexer::tokenize(source);
    parser::build_graph(source, &tokens)
}
