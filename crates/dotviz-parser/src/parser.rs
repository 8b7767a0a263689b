//! Graph construction from DOT tokens.
//!
//! This module turns the token stream from the [`lexer`](super::lexer) into a
//! [`Graph`]. The public entry point is [`build_graph`].
//!
//! Parsing happens in three steps:
//!
//! 1. **Header** - the first run of an optional `strict`, the
//!    `graph`/`digraph` keyword, an optional id and `{`. Text before it is
//!    skipped. Without a header the whole text is the body of an unnamed
//!    directed graph.
//! 2. **Lines** - the body is split at newlines and each line is split into
//!    statements at `;` outside brackets. Comment lines and a trailing run
//!    without `;` are skipped.
//! 3. **Statements** - a small state machine classifies every statement as
//!    an edge, node, defaults or graph-attribute statement, or ignores it.
//!
//! Nothing here fails: statements that fit no pattern are logged at debug
//! level and dropped.

use log::{debug, info, trace};

use dotviz_core::{
    attributes::Attributes,
    graph::{DEFAULT_GRAPH_ID, Graph, GraphKind},
};

use crate::{
    attributes,
    tokens::{PositionedToken, Token, source_text},
};

/// Result of header detection.
#[derive(Debug, Clone, PartialEq)]
struct Header {
    kind: GraphKind,
    strict: bool,
    id: String,
    /// Index of the first token after the opening brace.
    body_start: usize,
}

/// What a defaults statement applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DefaultTarget {
    Node,
    Edge,
    Graph,
}

/// A classified statement.
#[derive(Debug, Clone, PartialEq)]
enum Statement {
    /// `a -> b -> c [attrs];`
    Edge {
        ids: Vec<String>,
        attributes: Option<Attributes>,
    },
    /// `a [attrs];`
    Node { id: String, attributes: Attributes },
    /// `node [attrs];`, `edge [attrs];` or `graph [attrs];`
    Defaults {
        target: DefaultTarget,
        attributes: Attributes,
    },
    /// `key = value;`
    GraphAttribute { key: String, value: String },
    /// Anything else, with the reason it was not understood.
    Ignored(&'static str),
}

/// The part of a statement that precedes its attribute list.
#[derive(Debug, Clone, PartialEq)]
enum Head {
    Node(String),
    Edge(Vec<String>),
    Defaults(DefaultTarget),
}

/// Classifier states.
#[derive(Debug, Clone, PartialEq)]
enum State {
    Start,
    /// A single id has been read.
    Subject(String),
    /// `node`, `edge` or `graph` has been read.
    Keyword(DefaultTarget),
    /// An edge operator has been read; an id must follow.
    AwaitTarget(Vec<String>),
    /// Two or more ids joined by edge operators.
    Chain(Vec<String>),
    /// `key =` has been read; a value must follow.
    AwaitValue(String),
    Assignment(String, String),
    /// A head followed by a closed attribute list; nothing may follow.
    Bracketed(Head, Attributes),
}

/// Words that cannot name a node.
const RESERVED: [&str; 3] = ["strict", "digraph", "subgraph"];

fn default_target(token: &Token<'_>) -> Option<DefaultTarget> {
    if token.is_keyword("node") {
        Some(DefaultTarget::Node)
    } else if token.is_keyword("edge") {
        Some(DefaultTarget::Edge)
    } else if token.is_keyword("graph") {
        Some(DefaultTarget::Graph)
    } else {
        None
    }
}

fn is_reserved(token: &Token<'_>) -> bool {
    RESERVED.iter().any(|word| token.is_keyword(word))
}

/// Index of the first token at or after `index` that is not trivia or a newline.
fn skip_header_trivia(tokens: &[PositionedToken<'_>], mut index: usize) -> usize {
    while tokens
        .get(index)
        .is_some_and(|t| t.is_trivia() || t.token == Token::Newline)
    {
        index += 1;
    }
    index
}

/// Find the first `[strict] (graph|digraph) [id] {` in the token stream.
///
/// Whatever precedes it is skipped, including comments spanning several
/// lines. Lines starting with `#` never hold the header.
fn detect_header(tokens: &[PositionedToken<'_>]) -> Option<Header> {
    let mut line_start = true;
    let mut index = 0;

    while let Some(token) = tokens.get(index) {
        match token.token {
            Token::Newline => line_start = true,
            Token::Whitespace => {}
            Token::Unknown('#') if line_start => {
                while tokens.get(index + 1).is_some_and(|t| t.token != Token::Newline) {
                    index += 1;
                }
            }
            _ => {
                if let Some(header) = header_at(tokens, index) {
                    return Some(header);
                }
                line_start = false;
            }
        }
        index += 1;
    }

    None
}

/// Match a header starting exactly at `index`.
fn header_at(tokens: &[PositionedToken<'_>], mut index: usize) -> Option<Header> {
    let mut strict = false;
    if tokens.get(index)?.is_keyword("strict") {
        strict = true;
        index = skip_header_trivia(tokens, index + 1);
    }

    let keyword = tokens.get(index)?;
    let kind = if keyword.is_keyword("digraph") {
        GraphKind::Directed
    } else if keyword.is_keyword("graph") {
        GraphKind::Undirected
    } else {
        return None;
    };
    index = skip_header_trivia(tokens, index + 1);

    let mut id = DEFAULT_GRAPH_ID.to_string();
    if let Some(name) = tokens.get(index)?.as_id() {
        id = name.to_string();
        index = skip_header_trivia(tokens, index + 1);
    }

    if tokens.get(index)?.token != Token::LeftBrace {
        return None;
    }

    Some(Header {
        kind,
        strict,
        id,
        body_start: index + 1,
    })
}

/// Returns true if the line should be skipped entirely.
///
/// That is the case for blank lines and lines whose first token is a `//`
/// comment or `#`.
fn is_skipped_line(line: &[PositionedToken<'_>]) -> bool {
    match line.iter().find(|t| !matches!(t.token, Token::Whitespace)) {
        None => true,
        Some(first) => matches!(first.token, Token::LineComment(_) | Token::Unknown('#')),
    }
}

/// Split a line at `;` outside brackets.
///
/// Returns the terminated statements (without their `;`) and the trailing
/// tokens after the last `;`.
fn split_statements<'t, 'src>(
    line: &'t [PositionedToken<'src>],
) -> (Vec<&'t [PositionedToken<'src>]>, &'t [PositionedToken<'src>]) {
    let mut statements = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (index, token) in line.iter().enumerate() {
        match token.token {
            Token::LeftBracket => depth += 1,
            Token::RightBracket => depth = depth.saturating_sub(1),
            Token::Semicolon if depth == 0 => {
                statements.push(&line[start..index]);
                start = index + 1;
            }
            _ => {}
        }
    }

    (statements, &line[start..])
}

/// Classify one statement.
///
/// `tokens` excludes the terminating `;`. Attribute lists are resolved
/// from the tokens between the brackets.
fn classify(source: &str, tokens: &[PositionedToken<'_>], kind: GraphKind) -> Statement {
    let mut significant = tokens
        .iter()
        .enumerate()
        .filter(|(_, t)| !t.is_trivia() && !matches!(t.token, Token::RightBrace));
    let mut state = State::Start;

    while let Some((index, token)) = significant.next() {
        let is_edge_operator = matches!(token.token, Token::DirectedEdge | Token::UndirectedEdge);
        let operator_matches = match token.token {
            Token::DirectedEdge => kind == GraphKind::Directed,
            Token::UndirectedEdge => kind == GraphKind::Undirected,
            _ => false,
        };

        if token.token == Token::LeftBracket {
            let head = match state {
                State::Subject(id) => Head::Node(id),
                State::Chain(ids) => Head::Edge(ids),
                State::Keyword(target) => Head::Defaults(target),
                _ => return Statement::Ignored("unexpected attribute list"),
            };
            let Some((close, _)) = significant
                .by_ref()
                .find(|(_, t)| t.token == Token::RightBracket)
            else {
                return Statement::Ignored("unclosed attribute list");
            };
            let list = attributes::from_tokens(source, &tokens[index + 1..close]);
            state = State::Bracketed(head, list);
            continue;
        }

        state = match state {
            State::Start => {
                if token.is_keyword("subgraph") {
                    return Statement::Ignored("subgraphs are not supported");
                } else if let Some(target) = default_target(token) {
                    State::Keyword(target)
                } else if is_reserved(token) {
                    return Statement::Ignored("reserved keyword used as an id");
                } else if let Some(id) = token.as_id() {
                    State::Subject(id.to_string())
                } else {
                    return Statement::Ignored("statement does not start with an id");
                }
            }
            State::Subject(_) | State::Chain(_) if is_edge_operator && !operator_matches => {
                return Statement::Ignored("edge operator does not match the graph kind");
            }
            State::Subject(id) if is_edge_operator => State::AwaitTarget(vec![id]),
            State::Chain(ids) if is_edge_operator => State::AwaitTarget(ids),
            State::Subject(id) if token.token == Token::Equals => State::AwaitValue(id),
            State::AwaitValue(key) => match token.as_id() {
                Some(value) => State::Assignment(key, value.to_string()),
                None => return Statement::Ignored("assignment without a value"),
            },
            State::AwaitTarget(mut ids) => match token.as_id() {
                Some(id) if !is_reserved(token) && default_target(token).is_none() => {
                    ids.push(id.to_string());
                    State::Chain(ids)
                }
                _ => return Statement::Ignored("edge operator without a target id"),
            },
            _ => return Statement::Ignored("unexpected token"),
        };
    }

    match state {
        State::Chain(ids) => Statement::Edge {
            ids,
            attributes: None,
        },
        State::Bracketed(Head::Edge(ids), attributes) => Statement::Edge {
            ids,
            attributes: Some(attributes),
        },
        State::Bracketed(Head::Node(id), attributes) => Statement::Node { id, attributes },
        State::Bracketed(Head::Defaults(target), attributes) => {
            Statement::Defaults { target, attributes }
        }
        State::Assignment(key, value) => Statement::GraphAttribute { key, value },
        State::Start => Statement::Ignored("empty statement"),
        State::Subject(_) => Statement::Ignored("node statement without an attribute list"),
        _ => Statement::Ignored("incomplete statement"),
    }
}

/// Accumulates classified statements into a graph.
struct GraphBuilder {
    graph: Graph,
    node_defaults: Attributes,
    edge_defaults: Attributes,
}

impl GraphBuilder {
    fn new(graph: Graph) -> Self {
        Self {
            graph,
            node_defaults: Attributes::new(),
            edge_defaults: Attributes::new(),
        }
    }

    fn apply(&mut self, statement: Statement, line_number: usize, text: &str) {
        match statement {
            Statement::Edge { ids, attributes } => {
                let edge_attributes = self.edge_defaults.merge(&attributes.unwrap_or_default());
                for pair in ids.windows(2) {
                    self.graph.add_edge(
                        &pair[0],
                        &pair[1],
                        &self.node_defaults,
                        edge_attributes.clone(),
                    );
                }
                trace!(line = line_number, statement = text; "Edge statement");
            }
            Statement::Node { id, attributes } => {
                self.graph.upsert_node(&id, &self.node_defaults, &attributes);
                trace!(line = line_number, statement = text; "Node statement");
            }
            Statement::Defaults { target, attributes } => {
                match target {
                    DefaultTarget::Node => {
                        self.node_defaults = self.node_defaults.merge(&attributes);
                    }
                    DefaultTarget::Edge => {
                        self.edge_defaults = self.edge_defaults.merge(&attributes);
                    }
                    DefaultTarget::Graph => self.graph.merge_attributes(&attributes),
                }
                trace!(line = line_number, statement = text; "Defaults statement");
            }
            Statement::GraphAttribute { key, value } => {
                let incoming: Attributes = [(key, value)].into_iter().collect();
                self.graph.merge_attributes(&incoming);
                trace!(line = line_number, statement = text; "Graph attribute statement");
            }
            Statement::Ignored(reason) => {
                debug!(line = line_number, statement = text, reason; "Ignoring statement");
            }
        }
    }
}

/// 1-based line number of the token at `index`.
fn line_of(tokens: &[PositionedToken<'_>], index: usize) -> usize {
    tokens[..index]
        .iter()
        .filter(|t| t.token == Token::Newline)
        .count()
        + 1
}

/// Build a graph from source text and its tokens.
///
/// `tokens` must be the output of [`lexer::tokenize`](super::lexer::tokenize)
/// for `source`.
pub fn build_graph(source: &str, tokens: &[PositionedToken<'_>]) -> Graph {
    let (graph, body_start) = match detect_header(tokens) {
        Some(header) => {
            debug!(
                graph_id = header.id.as_str(),
                kind = header.kind.keyword(),
                strict = header.strict;
                "Detected graph header"
            );
            (
                Graph::new(header.kind, header.strict, header.id),
                header.body_start,
            )
        }
        None => {
            debug!("No graph header found, parsing as unnamed digraph");
            (Graph::default(), 0)
        }
    };

    let kind = graph.kind();
    let mut builder = GraphBuilder::new(graph);
    let first_line = line_of(tokens, body_start);
    let body = &tokens[body_start..];

    for (offset, line) in body.split(|t| t.token == Token::Newline).enumerate() {
        let line_number = first_line + offset;
        if is_skipped_line(line) {
            continue;
        }

        let (statements, trailing) = split_statements(line);
        for statement in statements {
            let text = source_text(source, statement);
            if text.is_empty() {
                continue;
            }
            let classified = classify(source, statement, kind);
            builder.apply(classified, line_number, text);
        }

        let remainder = trailing
            .iter()
            .filter(|t| !t.is_trivia() && !matches!(t.token, Token::RightBrace))
            .count();
        if remainder > 0 {
            let text = source_text(source, trailing);
            debug!(
                line = line_number,
                statement = text;
                "Ignoring statement without terminating semicolon"
            );
        }
    }

    let graph = builder.graph;
    info!(
        graph_id = graph.id(),
        strict = graph.is_strict(),
        node_count = graph.node_count(),
        edge_count = graph.edge_count();
        "Parsed graph"
    );
    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    fn header(source: &str) -> Option<Header> {
        detect_header(&tokenize(source))
    }

    fn attrs(pairs: &[(&str, &str)]) -> Attributes {
        pairs.iter().copied().collect()
    }

    fn classify_source(source: &str, kind: GraphKind) -> Statement {
        let tokens = tokenize(source);
        classify(source, &tokens, kind)
    }

    #[test]
    fn test_header_digraph_with_id() {
        let header = header("digraph Flow {").unwrap();
        assert_eq!(header.kind, GraphKind::Directed);
        assert_eq!(header.id, "Flow");
        assert!(!header.strict);
    }

    #[test]
    fn test_header_without_id() {
        let header = header("graph {").unwrap();
        assert_eq!(header.kind, GraphKind::Undirected);
        assert_eq!(header.id, "G");
    }

    #[test]
    fn test_header_strict_and_case_insensitive() {
        let header = header("STRICT DiGraph \"My graph\" {").unwrap();
        assert!(header.strict);
        assert_eq!(header.kind, GraphKind::Directed);
        assert_eq!(header.id, "My graph");
    }

    #[test]
    fn test_header_after_comments() {
        let header = header("// title\n# pragma\n/* c */\n\ndigraph 42\n{").unwrap();
        assert_eq!(header.id, "42");
    }

    #[test]
    fn test_header_after_multiline_comment() {
        let header = header("/* Copyright\n * team */\ngraph Net {\n  a -- b;\n}\n").unwrap();
        assert_eq!(header.kind, GraphKind::Undirected);
        assert_eq!(header.id, "Net");
    }

    #[test]
    fn test_header_is_first_match() {
        let header = header("banner text\nstrict digraph A {\ngraph B {").unwrap();
        assert!(header.strict);
        assert_eq!(header.id, "A");
    }

    #[test]
    fn test_header_not_taken_from_hash_line() {
        assert_eq!(header("# digraph Hidden {\na -> b;"), None);
        assert_eq!(header("# digraph Hidden {\ngraph Shown {").unwrap().id, "Shown");
    }

    #[test]
    fn test_header_body_start() {
        let tokens = tokenize("digraph G { a");
        let header = detect_header(&tokens).unwrap();
        assert_eq!(tokens[header.body_start].token, Token::Whitespace);
        assert_eq!(tokens[header.body_start + 1].token, Token::Identifier("a"));
    }

    #[test]
    fn test_no_header() {
        assert_eq!(header("a -> b;"), None);
        assert_eq!(header("subgraph cluster_0 {"), None);
        assert_eq!(header("digraph G"), None);
        assert_eq!(header(""), None);
    }

    #[test]
    fn test_classify_edge() {
        assert_eq!(
            classify_source("a -> b", GraphKind::Directed),
            Statement::Edge {
                ids: vec!["a".to_string(), "b".to_string()],
                attributes: None
            }
        );
    }

    #[test]
    fn test_classify_edge_chain_with_attributes() {
        assert_eq!(
            classify_source("a -- b -- c [color=red]", GraphKind::Undirected),
            Statement::Edge {
                ids: vec!["a".to_string(), "b".to_string(), "c".to_string()],
                attributes: Some(attrs(&[("color", "red")]))
            }
        );
    }

    #[test]
    fn test_classify_wrong_operator() {
        assert!(matches!(
            classify_source("a -- b", GraphKind::Directed),
            Statement::Ignored(_)
        ));
        assert!(matches!(
            classify_source("a -> b", GraphKind::Undirected),
            Statement::Ignored(_)
        ));
    }

    #[test]
    fn test_classify_node() {
        assert_eq!(
            classify_source("\"Node A\" [ shape=box ]", GraphKind::Directed),
            Statement::Node {
                id: "Node A".to_string(),
                attributes: attrs(&[("shape", "box")])
            }
        );
    }

    #[test]
    fn test_classify_defaults() {
        assert_eq!(
            classify_source("Node [color=red]", GraphKind::Directed),
            Statement::Defaults {
                target: DefaultTarget::Node,
                attributes: attrs(&[("color", "red")])
            }
        );
        assert_eq!(
            classify_source("graph [bgcolor=gray]", GraphKind::Directed),
            Statement::Defaults {
                target: DefaultTarget::Graph,
                attributes: attrs(&[("bgcolor", "gray")])
            }
        );
    }

    #[test]
    fn test_classify_assignment() {
        assert_eq!(
            classify_source("rankdir = LR", GraphKind::Directed),
            Statement::GraphAttribute {
                key: "rankdir".to_string(),
                value: "LR".to_string()
            }
        );
    }

    #[test]
    fn test_classify_ignored() {
        for source in [
            "a",
            "node",
            "a ->",
            "a -> [color=red]",
            "a [color=red",
            "a [x=1] b",
            "subgraph cluster { a",
            "a:port -> b",
            "= b",
            "",
        ] {
            assert!(
                matches!(classify_source(source, GraphKind::Directed), Statement::Ignored(_)),
                "expected `{source}` to be ignored"
            );
        }
    }

    #[test]
    fn test_split_statements() {
        let tokens = tokenize("a [label=\"x;y\"]; b [k=1;j=2]; c");
        let (statements, trailing) = split_statements(&tokens);
        assert_eq!(statements.len(), 2);
        assert_eq!(source_text("a [label=\"x;y\"]; b [k=1;j=2]; c", trailing), "c");
    }

    #[test]
    fn test_skipped_lines() {
        assert!(is_skipped_line(&tokenize("   ")));
        assert!(is_skipped_line(&tokenize("  // comment a -> b;")));
        assert!(is_skipped_line(&tokenize("# a -> b;")));
        assert!(!is_skipped_line(&tokenize("a -> b; // trailing")));
    }

    #[test]
    fn test_line_of() {
        let tokens = tokenize("a\nb\nc");
        assert_eq!(line_of(&tokens, 0), 1);
        assert_eq!(line_of(&tokens, 2), 2);
        assert_eq!(line_of(&tokens, 4), 3);
    }

    #[test]
    fn test_body_starts_on_header_line() {
        let tokens = tokenize("/* a\n b */\ngraph Net { x -- y;\n}");
        let header = detect_header(&tokens).unwrap();
        assert_eq!(line_of(&tokens, header.body_start), 3);
    }
}
