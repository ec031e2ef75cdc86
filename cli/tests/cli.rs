//! Integration tests driving `tutte_cli::run` end to end, the way
//! `air-script`'s `tests/` directory drives the compiled AirScript pipeline
//! through its library entry point rather than the `main` binary directly.

use std::path::PathBuf;

use tutte_cli::{AppError, Cli};

fn base_cli() -> Cli {
    Cli {
        input_file: None,
        degree: false,
        fill_in: false,
        local_degree: false,
        local_fill_in: false,
        elimination_order: None,
        print_tree: false,
        tree_only: false,
        flow: false,
        chromatic: false,
        chinese_remainder: false,
        verbose: 0,
    }
}

/// Writes `token` to a uniquely-named file under the system temp directory
/// and returns its path; the caller is responsible for cleanup.
fn write_input(name: &str, token: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("tuttec-cli-test-{name}.txt"));
    std::fs::write(&path, token).unwrap();
    path
}

#[test]
fn single_edge_prints_q_times_one_plus_v() {
    let path = write_input("single-edge", "0--1");
    let mut cli = base_cli();
    cli.input_file = Some(path.clone());
    let output = tutte_cli::run(&cli).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(output, Some("+ Q + Q v ".to_string()));
}

#[test]
fn triangle_prints_known_polynomial() {
    let path = write_input("triangle", "0--1,1--2,2--0");
    let mut cli = base_cli();
    cli.input_file = Some(path.clone());
    let output = tutte_cli::run(&cli).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(output, Some("+ 3 Q v + 3 Q v^2 + Q v^3 + Q^2 ".to_string()));
}

#[test]
fn path_of_three_vertices_prints_q_squared_times_one_plus_v_squared() {
    let path = write_input("path3", "0--1,1--2");
    let mut cli = base_cli();
    cli.input_file = Some(path.clone());
    let output = tutte_cli::run(&cli).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(output, Some("+ Q^2 + 2 Q^2 v + Q^2 v^2 ".to_string()));
}

#[test]
fn chinese_remainder_agrees_with_direct_computation_on_triangle() {
    let path = write_input("triangle-crt", "0--1,1--2,2--0");

    let mut direct_cli = base_cli();
    direct_cli.input_file = Some(path.clone());
    let direct = tutte_cli::run(&direct_cli).unwrap();

    let mut crt_cli = base_cli();
    crt_cli.input_file = Some(path.clone());
    crt_cli.chinese_remainder = true;
    let crt = tutte_cli::run(&crt_cli).unwrap();

    std::fs::remove_file(&path).ok();
    assert_eq!(direct, crt);
}

#[test]
fn tree_only_skips_polynomial_output() {
    let path = write_input("tree-only", "0--1");
    let mut cli = base_cli();
    cli.input_file = Some(path.clone());
    cli.tree_only = true;
    let output = tutte_cli::run(&cli).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(output, None);
}

#[test]
fn missing_input_file_is_an_io_error() {
    let mut cli = base_cli();
    cli.input_file = Some(PathBuf::from("/nonexistent/tuttec-cli-test-missing.txt"));
    let result = tutte_cli::run(&cli);
    assert!(matches!(result, Err(AppError::Io { .. })));
}
