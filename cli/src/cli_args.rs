use std::path::PathBuf;

use clap::Parser;

/// Computes the Tutte polynomial of a connected undirected multigraph.
#[derive(Debug, Parser)]
#[command(name = "tuttec", about = "Computes the Tutte polynomial of a connected graph")]
pub struct Cli {
    /// Read the graph token from this file instead of stdin.
    #[arg(long)]
    pub input_file: Option<PathBuf>,

    /// Eliminate vertices of minimum current degree first (the default).
    #[arg(long)]
    pub degree: bool,

    /// Eliminate vertices of minimum fill-in cost first.
    #[arg(long = "fill-in")]
    pub fill_in: bool,

    /// Like --degree, but the next vertex is chosen from the current one's neighbors.
    #[arg(long = "local-degree")]
    pub local_degree: bool,

    /// Like --fill-in, but the next vertex is chosen from the current one's neighbors.
    #[arg(long = "local-fill-in")]
    pub local_fill_in: bool,

    /// A user-supplied elimination order: whitespace-separated vertex ids.
    #[arg(long = "elimination-order")]
    pub elimination_order: Option<String>,

    /// Log the elimination order and the bag tree (with its width) at info level.
    #[arg(long = "print-tree")]
    pub print_tree: bool,

    /// Like --print-tree, but skip computing the polynomial entirely.
    #[arg(long = "tree-only")]
    pub tree_only: bool,

    /// Compute the flow polynomial instead (substitutes v with -Q).
    #[arg(short = 'f', long)]
    pub flow: bool,

    /// Compute the chromatic polynomial instead (substitutes v with -1).
    #[arg(short = 'c', long)]
    pub chromatic: bool,

    /// Use Chinese-remainder reconstruction instead of direct big-integer arithmetic.
    #[arg(long = "chinese-remainder")]
    pub chinese_remainder: bool,

    /// Raise the log level; repeatable (info -> debug -> trace).
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
