/// The top-level error for `tuttec`, aggregating every recoverable error
/// from the library crates into one type surfaced as exit code 1 with a
/// single `log::error!` line.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("graph is not connected")]
    DisconnectedGraph,

    #[error("could not read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Parse(#[from] tutte_parser::ParseError),

    #[error(transparent)]
    Decomposition(#[from] tutte_ir::DecompositionError),

    #[error(transparent)]
    Crt(#[from] tutte_ring::CrtError),
}
