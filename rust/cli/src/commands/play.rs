//! # Play Command
//!
//! Interactive tic-tac-toe against the computer.
//!
//! The human plays X and moves first; the computer's mark (O) is passed to
//! the AI explicitly rather than assumed. Each turn the board is rendered
//! with keypad digits in the free cells, the player picks a cell (or `n` to
//! abandon the game, `q` to leave), and the engine validates the move: an
//! occupied cell or garbage input re-prompts without touching the game
//! state.
//!
//! After a human move that leaves the game live, the computer's reply is
//! computed first and applied only after the thinking pause, and only if the
//! game is still live at that point. A reset during the pause therefore
//! discards the pending move instead of stamping it onto a cleared board.

use std::io::{BufRead, Write};
use std::thread::sleep;
use std::time::Duration;

use crate::config;
use crate::error::CliError;
use crate::formatters::{format_board, format_board_with_line, format_move};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{parse_move_input, ParseResult};
use crate::StrategyArg;
use oxo_ai::{create_policy_seeded, MovePolicy, Strategy};
use oxo_engine::board::{Move, Player};
use oxo_engine::game::GameState;
use oxo_engine::logger::{GameLogger, GameRecord, MoveRecord};
use oxo_engine::rules::Verdict;

/// Handle the play command: interactive gameplay against the computer.
///
/// Flags override config-file and environment values, which override the
/// defaults (heuristic strategy, one game, 300 ms thinking pause).
///
/// # Arguments
///
/// * `strategy` - Decision strategy for the computer (default from config)
/// * `games` - Number of games in the session (must be >= 1)
/// * `seed` - RNG seed for the computer's tie-breaking (default: random)
/// * `delay_ms` - Thinking pause before the computer's move
/// * `log` - Optional JSONL file to append finished games to
/// * `out` - Output stream for game display
/// * `err` - Error stream for warnings and errors
/// * `stdin` - Input stream for cell selections
///
/// # Returns
///
/// * `Ok(())` on successful completion (including a user quit)
/// * `Err(CliError)` if games < 1, the config is unusable, or I/O fails
pub fn handle_play_command(
    strategy: Option<StrategyArg>,
    games: Option<u32>,
    seed: Option<u64>,
    delay_ms: Option<u64>,
    log: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let cfg = match config::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_warning(err, &format!("ignoring bad config: {}", e))?;
            config::Config::default()
        }
    };

    let strategy = strategy
        .map(StrategyArg::to_strategy)
        .or_else(|| Strategy::from_name(&cfg.strategy))
        .unwrap_or(Strategy::Heuristic);
    let games = games.unwrap_or(cfg.games);
    let seed = seed.or(cfg.seed);
    let delay_ms = delay_ms.unwrap_or(cfg.delay_ms).min(config::MAX_DELAY_MS);

    execute_play_command(strategy, games, seed, delay_ms, log, stdin, out, err)
}

/// Execute the play command with resolved parameters (module-private helper)
///
/// This is the core implementation that handles the session loop, player
/// interaction, and computer moves.
#[allow(clippy::too_many_arguments)]
fn execute_play_command(
    strategy: Strategy,
    games: u32,
    seed: Option<u64>,
    delay_ms: u64,
    log: Option<String>,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if games == 0 {
        ui::write_error(err, "games must be >= 1")?;
        return Err(CliError::InvalidInput("games must be >= 1".to_string()));
    }

    let seed = seed.unwrap_or_else(rand::random);
    let human = Player::X;
    let computer = human.opponent();

    writeln!(
        out,
        "play: strategy={} games={} seed={}",
        strategy, games, seed
    )?;

    let mut policy = create_policy_seeded(strategy, seed);
    let mut logger = match &log {
        Some(path) => Some(GameLogger::create(path)?),
        None => None,
    };

    let mut completed = 0u32;
    let mut quit_requested = false;

    for i in 1..=games {
        if quit_requested {
            break;
        }
        writeln!(out, "Game {}", i)?;

        let mut state = GameState::new(human);
        let mut moves: Vec<MoveRecord> = Vec::new();

        let result = loop {
            writeln!(out, "{}", format_board(state.board()))?;
            write!(out, "Your move (1-9, ROW COL, n = new game, q = quit): ")?;
            out.flush()?;

            let Some(input) = read_stdin_line(stdin) else {
                quit_requested = true;
                break "abandoned";
            };
            match parse_move_input(&input) {
                ParseResult::Quit => {
                    quit_requested = true;
                    break "abandoned";
                }
                ParseResult::NewGame => {
                    state = GameState::new(human);
                    moves.clear();
                    writeln!(out, "Starting a new game.")?;
                    continue;
                }
                ParseResult::Invalid(msg) => {
                    ui::write_error(err, &msg)?;
                    continue;
                }
                ParseResult::Move(mv) => match state.play(mv) {
                    Ok(next) => {
                        state = next;
                        moves.push(MoveRecord {
                            player: human,
                            mv,
                            verdict: state.verdict(),
                        });
                    }
                    Err(e) => {
                        // occupied cell or similar: no-op, keep prompting
                        ui::write_error(err, &e.to_string())?;
                        continue;
                    }
                },
            }

            if let Some(result) = announce_if_finished(&state, human, out)? {
                break result;
            }

            writeln!(out, "Computer is thinking...")?;
            let pending = policy.choose_move(state.board(), computer)?;
            sleep(Duration::from_millis(delay_ms));
            let Some(next) = apply_if_live(&state, pending) else {
                continue;
            };
            state = next;
            writeln!(out, "Computer plays {}", format_move(&pending))?;
            moves.push(MoveRecord {
                player: computer,
                mv: pending,
                verdict: state.verdict(),
            });

            if let Some(result) = announce_if_finished(&state, human, out)? {
                break result;
            }
        };

        if result != "abandoned" {
            completed += 1;
        }
        if let Some(logger) = &mut logger {
            if !moves.is_empty() {
                let record = GameRecord {
                    game_id: logger.next_id(),
                    seed: Some(seed),
                    strategy: strategy.as_str().to_string(),
                    moves: std::mem::take(&mut moves),
                    result: result.to_string(),
                    ts: None,
                };
                logger.write(&record)?;
            }
        }
    }

    writeln!(out, "Session games={}", games)?;
    writeln!(out, "Games completed: {}", completed)?;
    Ok(())
}

/// Applies a computed move only if the game is still live.
///
/// The pending move was chosen before the thinking pause; by the time the
/// pause is over the game may have been reset or finished, in which case the
/// move must be discarded rather than applied.
fn apply_if_live(state: &GameState, pending: Move) -> Option<GameState> {
    if !state.is_active() {
        return None;
    }
    state.play(pending).ok()
}

/// Prints the final board and outcome when the game has ended, returning the
/// result summary for the session log.
fn announce_if_finished(
    state: &GameState,
    human: Player,
    out: &mut dyn Write,
) -> Result<Option<&'static str>, CliError> {
    match state.verdict() {
        Verdict::InProgress => Ok(None),
        Verdict::Win { winner, line } => {
            writeln!(out, "{}", format_board_with_line(state.board(), Some(&line)))?;
            if winner == human {
                writeln!(out, "You win!")?;
            } else {
                writeln!(out, "Computer wins!")?;
            }
            Ok(Some(match winner {
                Player::X => "X wins",
                Player::O => "O wins",
            }))
        }
        Verdict::Draw => {
            writeln!(out, "{}", format_board(state.board()))?;
            writeln!(out, "It's a draw!")?;
            Ok(Some("draw"))
        }
    }
}
