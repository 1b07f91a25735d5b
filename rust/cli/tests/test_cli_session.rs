//! End-to-end tests driving the CLI through its public entry points with
//! scripted input streams.

use std::io::Cursor;

use serial_test::serial;

use oxo_cli::commands::{handle_cfg_command, handle_eval_command, handle_play_command};
use oxo_cli::{exit_code, run, StrategyArg};
use oxo_engine::logger::GameRecord;

fn clear_env() {
    for key in ["OXO_CONFIG", "OXO_STRATEGY", "OXO_DELAY_MS", "OXO_SEED"] {
        unsafe { std::env::remove_var(key) };
    }
}

#[test]
#[serial]
fn play_session_renders_board_and_computer_reply() {
    clear_env();
    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut stdin = Cursor::new(b"5\nq\n".to_vec());

    handle_play_command(
        Some(StrategyArg::Exhaustive),
        Some(1),
        Some(42),
        Some(0),
        None,
        &mut out,
        &mut err,
        &mut stdin,
    )
    .expect("play session");

    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("play: strategy=exhaustive games=1 seed=42"));
    assert!(out.contains(" 7 | 8 | 9 "));
    assert!(out.contains("Computer is thinking..."));
    assert!(out.contains("Computer plays"));
    // center taken by the human, so its digit is gone after the first move
    assert!(out.contains(" X "));
}

#[test]
#[serial]
fn play_flags_override_environment() {
    clear_env();
    unsafe { std::env::set_var("OXO_STRATEGY", "heuristic") };

    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut stdin = Cursor::new(b"q\n".to_vec());
    handle_play_command(
        Some(StrategyArg::Exhaustive),
        None,
        Some(1),
        Some(0),
        None,
        &mut out,
        &mut err,
        &mut stdin,
    )
    .expect("play session");

    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("strategy=exhaustive"));
    clear_env();
}

#[test]
#[serial]
fn play_survives_a_broken_config_with_a_warning() {
    clear_env();
    unsafe { std::env::set_var("OXO_STRATEGY", "montecarlo") };

    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut stdin = Cursor::new(b"q\n".to_vec());
    handle_play_command(
        None,
        Some(1),
        Some(1),
        Some(0),
        None,
        &mut out,
        &mut err,
        &mut stdin,
    )
    .expect("play session");

    let err = String::from_utf8(err).unwrap();
    assert!(err.contains("WARNING:"));
    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("strategy=heuristic")); // fell back to the default
    clear_env();
}

#[test]
#[serial]
fn play_writes_a_parseable_session_log() {
    clear_env();
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("logs").join("games.jsonl");

    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut stdin = Cursor::new(b"5\n1\nq\n".to_vec());
    handle_play_command(
        Some(StrategyArg::Exhaustive),
        Some(1),
        Some(3),
        Some(0),
        Some(path.to_string_lossy().into_owned()),
        &mut out,
        &mut err,
        &mut stdin,
    )
    .expect("play session");

    let content = std::fs::read_to_string(&path).expect("log file");
    let record: GameRecord = serde_json::from_str(content.lines().next().unwrap()).unwrap();
    assert_eq!(record.strategy, "exhaustive");
    assert!(record.ts.is_some());
    assert!(!record.moves.is_empty());
}

#[test]
fn eval_handler_prints_a_full_summary() {
    let mut out = Vec::new();
    let mut err = Vec::new();
    handle_eval_command(
        StrategyArg::Heuristic,
        StrategyArg::Exhaustive,
        Some(4),
        Some(11),
        &mut out,
        &mut err,
    )
    .expect("eval");

    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("eval: heuristic vs exhaustive games=4 seed=11"));
    assert!(out.contains("heuristic (A): 0 wins"));
    assert!(out.contains("avg moves/game:"));
}

#[test]
#[serial]
fn cfg_command_through_run_reports_sources() {
    clear_env();
    unsafe { std::env::set_var("OXO_DELAY_MS", "50") };

    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(["oxo", "cfg"], &mut out, &mut err);
    assert_eq!(code, exit_code::SUCCESS);

    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("delay_ms = 50 (env)"));
    assert!(out.contains("strategy = heuristic (default)"));
    clear_env();
}

#[test]
#[serial]
fn cfg_handler_surfaces_file_values() {
    use std::io::Write as _;

    clear_env();
    let mut file = tempfile::NamedTempFile::new().expect("tempfile");
    writeln!(file, "strategy = \"exhaustive\"\ngames = 3").expect("write");
    unsafe { std::env::set_var("OXO_CONFIG", file.path()) };

    let mut out = Vec::new();
    let mut err = Vec::new();
    handle_cfg_command(&mut out, &mut err).expect("cfg");

    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("strategy = exhaustive (file)"));
    assert!(out.contains("games    = 3 (file)"));
    clear_env();
}

#[test]
fn run_rejects_eval_without_policies() {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(["oxo", "eval"], &mut out, &mut err);
    assert_eq!(code, exit_code::ERROR);
    let err = String::from_utf8(err).unwrap();
    assert!(err.contains("policy-a"));
}
