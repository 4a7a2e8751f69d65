//! Tests for the `analyze` subcommand of the binary.

use std::process::{Command, Output};

fn analyze(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_minimax_tictactoe"))
        .arg("analyze")
        .args(args)
        .output()
        .expect("binary runs")
}

#[test]
fn test_analyze_refuses_boards_where_o_is_not_to_move() {
    for board in ["___/___/___", "XO_/___/___", "OO_/___/___"] {
        let output = analyze(&["--board", board]);
        assert!(!output.status.success(), "{board} was accepted");
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Not O's turn"), "{board}: {stderr}");
    }
}

#[test]
fn test_analyze_refuses_finished_game() {
    let output = analyze(&["--board", "XXX/OO_/___"]);
    assert!(!output.status.success());
}

#[test]
fn test_analyze_json_names_the_block() {
    let output = analyze(&["--board", "XX_/_O_/___", "--json"]);
    assert!(output.status.success());

    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(report["best"]["position"], "TopRight");
    assert_eq!(report["moves"].as_array().map(Vec::len), Some(6));
}
