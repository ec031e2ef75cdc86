/// Errors produced while parsing the `a--b,c--d` graph token.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("input is empty")]
    Empty,

    #[error("unexpected end of input, expecting a vertex id")]
    UnexpectedEnd,

    #[error("expecting a dash after vertex {0}")]
    ExpectedDash(String),

    #[error("expecting a comma or end of input after edge {0}--{1}")]
    ExpectedComma(String, String),

    #[error("'{0}' is not a valid non-negative integer vertex id")]
    InvalidVertexId(String),
}
