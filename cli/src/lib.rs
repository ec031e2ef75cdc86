//! Library entry point for `tuttec`, kept separate from `main.rs` so the
//! full parse-decompose-compute pipeline is testable without spawning a
//! process.

mod cli_args;
mod error;

pub use cli_args::Cli;
pub use error::AppError;

use std::io::Read;

use tutte_engine::Substitution;
use tutte_ir::{BuildTreeDecomposition, Graph, GreedyDegree, GreedyFillIn, GreedyLocalDegree, GreedyLocalFillIn};
use tutte_pass::Pass;

/// Initializes the logger, honoring `RUST_LOG` when set and otherwise
/// deriving a default level from the repeat count of `-v`.
pub fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).try_init();
}

/// Runs the full pipeline for `cli`. Returns the polynomial's printed form
/// on success, or `None` when `--tree-only` was given and there is nothing
/// to print to stdout.
pub fn run(cli: &Cli) -> Result<Option<String>, AppError> {
    let text = read_input(cli)?;
    let graph = tutte_parser::parse_graph(&text)?;
    log::info!("parsed graph: {} vertices, {} edges", graph.vertex_count(), graph.edge_count());

    if !graph.is_connected() {
        return Err(AppError::DisconnectedGraph);
    }

    let order = resolve_order(cli, &graph)?;
    let root = BuildTreeDecomposition.run((graph, order.clone()))?;

    if cli.print_tree || cli.tree_only {
        log::info!("elimination order: {:?}", order);
        log::info!("tree decomposition: {}", *root.borrow());
        log::info!("treewidth: {}", tutte_ir::tree_width(&root));
    }

    if cli.tree_only {
        return Ok(None);
    }

    let substitution = if cli.chromatic {
        Substitution::Chromatic
    } else if cli.flow {
        Substitution::Flow
    } else {
        Substitution::General
    };
    let (q, v) = tutte_engine::master_q_v(substitution);

    let result = if cli.chinese_remainder {
        tutte_engine::run_chinese_remainder(&q, &v, &root)?
    } else {
        tutte_engine::run_direct(&q, &v, &root)
    };

    Ok(Some(format!("{result}")))
}

fn read_input(cli: &Cli) -> Result<String, AppError> {
    match &cli.input_file {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|source| AppError::Io { path: path.display().to_string(), source }),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|source| AppError::Io { path: "<stdin>".to_string(), source })?;
            Ok(buf)
        }
    }
}

/// Resolves the elimination order from whichever single selector `cli`
/// specifies, defaulting to the degree heuristic when none is given.
fn resolve_order(cli: &Cli, graph: &Graph) -> Result<Vec<usize>, AppError> {
    let selectors =
        [cli.degree, cli.fill_in, cli.local_degree, cli.local_fill_in, cli.elimination_order.is_some()];
    if selectors.iter().filter(|&&set| set).count() > 1 {
        return Err(AppError::InvalidArgument(
            "at most one of --degree, --fill-in, --local-degree, --local-fill-in, --elimination-order may be given"
                .to_string(),
        ));
    }

    if let Some(text) = &cli.elimination_order {
        let mut order = Vec::new();
        for token in text.split_whitespace() {
            let v: usize = token
                .parse()
                .map_err(|_| AppError::InvalidArgument(format!("'{token}' is not a valid vertex id")))?;
            order.push(v);
        }
        return Ok(order);
    }

    if cli.fill_in {
        return Ok(GreedyFillIn.run(graph.clone())?);
    }
    if cli.local_degree {
        return Ok(GreedyLocalDegree.run(graph.clone())?);
    }
    if cli.local_fill_in {
        return Ok(GreedyLocalFillIn.run(graph.clone())?);
    }
    Ok(GreedyDegree.run(graph.clone())?)
}
