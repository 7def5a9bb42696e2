use crate::debug_log;
use crate::games::SessionRng;
use super::board::{Board, CELL_COUNT};
use super::types::{Difficulty, Mark};
use super::win_detector::check_win;

/// A win found at search depth `d` scores `WIN_SCORE - d`.
pub const WIN_SCORE: i32 = 10;

/// Picks the computer's next cell. `None` only when the board is full.
pub fn select_move(
    board: &Board,
    to_move: Mark,
    difficulty: Difficulty,
    rng: &mut SessionRng,
) -> Option<usize> {
    match difficulty {
        Difficulty::Easy => board.first_empty(),
        Difficulty::Medium => rng.pick(&board.available_moves()),
        Difficulty::Hard => calculate_minimax_move(board, to_move).map(|(cell, _)| cell),
    }
}

/// Best cell for `bot_mark` with its score. Equal scores resolve to the lowest cell.
pub fn calculate_minimax_move(board: &Board, bot_mark: Mark) -> Option<(usize, i32)> {
    let mut best_move: Option<(usize, i32)> = None;

    for (cell, score) in score_moves(board, bot_mark).into_iter().enumerate() {
        let Some(score) = score else {
            continue;
        };
        if best_move.is_none_or(|(_, best_score)| score > best_score) {
            best_move = Some((cell, score));
        }
    }

    if let Some((cell, score)) = best_move {
        debug_log!("minimax for {} picked cell {} (score {})", bot_mark, cell, score);
    }
    best_move
}

/// Exact minimax score of playing each empty cell for `bot_mark`; `None` for taken cells.
///
/// Every root candidate is searched with a full alpha-beta window, so pruning never leaks
/// bounds into the returned values.
pub fn score_moves(board: &Board, bot_mark: Mark) -> [Option<i32>; CELL_COUNT] {
    let mut scores = [None; CELL_COUNT];
    let mut board = *board;

    for cell in board.available_moves() {
        if board.place(cell, bot_mark).is_err() {
            continue;
        }
        let score = minimax(&mut board, 0, false, bot_mark, i32::MIN, i32::MAX);
        board.clear(cell);
        scores[cell] = Some(score);
    }

    scores
}

fn minimax(
    board: &mut Board,
    depth: i32,
    is_maximizing: bool,
    bot_mark: Mark,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    let opponent_mark = bot_mark.opponent();

    if check_win(board, bot_mark) {
        return WIN_SCORE - depth;
    }
    if check_win(board, opponent_mark) {
        return depth - WIN_SCORE;
    }

    let moves = board.available_moves();
    if moves.is_empty() {
        return 0;
    }

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for cell in moves {
            if board.place(cell, bot_mark).is_err() {
                continue;
            }
            let eval = minimax(board, depth + 1, false, bot_mark, alpha, beta);
            board.clear(cell);

            max_eval = max_eval.max(eval);
            alpha = alpha.max(eval);
            if beta <= alpha {
                break;
            }
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for cell in moves {
            if board.place(cell, opponent_mark).is_err() {
                continue;
            }
            let eval = minimax(board, depth + 1, true, bot_mark, alpha, beta);
            board.clear(cell);

            min_eval = min_eval.min(eval);
            beta = beta.min(eval);
            if beta <= alpha {
                break;
            }
        }
        min_eval
    }
}
