//! Parses the `a--b,c--d,...` graph token format into a [tutte_ir::Graph].
//!
//! The grammar has no interior whitespace and no nesting, so a hand-rolled
//! scanner over the byte string is simpler and faster than pulling in a
//! parser-generator crate for it.

mod error;

pub use error::ParseError;

use tutte_ir::Graph;

/// Parses `s` into a graph with `N = max(vertex id) + 1` vertices.
pub fn parse_graph(s: &str) -> Result<Graph, ParseError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }
    let bytes = trimmed.as_bytes();
    let mut pos = 0usize;
    let mut pairs = Vec::new();
    let mut max_id = 0usize;

    loop {
        let (u, next) = parse_number(bytes, pos)?;
        pos = next;

        if !bytes[pos..].starts_with(b"--") {
            return Err(ParseError::ExpectedDash(u.to_string()));
        }
        pos += 2;

        let (v, next) = parse_number(bytes, pos)?;
        pos = next;

        max_id = max_id.max(u).max(v);
        pairs.push((u, v));

        if pos == bytes.len() {
            break;
        }
        if bytes[pos] != b',' {
            return Err(ParseError::ExpectedComma(u.to_string(), v.to_string()));
        }
        pos += 1;
        if pos == bytes.len() {
            return Err(ParseError::UnexpectedEnd);
        }
    }

    let mut graph = Graph::new(max_id + 1);
    for (u, v) in pairs {
        graph.add_edge(u, v);
    }
    Ok(graph)
}

/// Scans a run of ASCII digits starting at `start`, returning the parsed
/// value and the position just past it.
fn parse_number(bytes: &[u8], start: usize) -> Result<(usize, usize), ParseError> {
    if start >= bytes.len() {
        return Err(ParseError::UnexpectedEnd);
    }
    if !bytes[start].is_ascii_digit() {
        let end = bytes[start..]
            .iter()
            .position(|&b| b == b',' || b == b'-')
            .map_or(bytes.len(), |p| start + p);
        let text = std::str::from_utf8(&bytes[start..end]).unwrap_or("?");
        return Err(ParseError::InvalidVertexId(text.to_string()));
    }
    let mut end = start;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let text = std::str::from_utf8(&bytes[start..end]).expect("ascii digits are valid utf8");
    text.parse::<usize>().map(|n| (n, end)).map_err(|_| ParseError::InvalidVertexId(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_single_edge() {
        let g = parse_graph("0--1").unwrap();
        assert_eq!(g.vertex_count(), 2);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn parses_multiple_edges_and_sizes_from_max_id() {
        let g = parse_graph("0--1,1--2,2--0").unwrap();
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.edge_count(), 3);
    }

    #[test]
    fn parses_parallel_edges() {
        let g = parse_graph("0--1,0--1").unwrap();
        assert_eq!(g.vertex_count(), 2);
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!(parse_graph(""), Err(ParseError::Empty));
        assert_eq!(parse_graph("   "), Err(ParseError::Empty));
    }

    #[test]
    fn rejects_missing_dash() {
        assert_eq!(parse_graph("0-1"), Err(ParseError::ExpectedDash("0".to_string())));
    }

    #[test]
    fn rejects_missing_comma() {
        assert!(matches!(parse_graph("0--1;1--2"), Err(ParseError::ExpectedComma(_, _))));
    }

    #[test]
    fn rejects_trailing_comma() {
        assert_eq!(parse_graph("0--1,"), Err(ParseError::UnexpectedEnd));
    }

    #[test]
    fn rejects_non_integer_vertex() {
        assert!(matches!(parse_graph("a--1"), Err(ParseError::InvalidVertexId(_))));
    }
}
