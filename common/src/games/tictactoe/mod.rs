mod board;
mod bot_controller;
mod match_controller;
mod score;
mod types;
mod win_detector;

pub use board::{Board, CELL_COUNT, SIDE};
pub use bot_controller::{WIN_SCORE, calculate_minimax_move, score_moves, select_move};
pub use match_controller::{
    COMPUTER_MARK, HUMAN_MARK, MatchController, MatchPhase, RoundAdvance, TurnReport,
};
pub use score::{LOSS_POINTS, MatchSummary, RoundResult, ScoreBoard, TIE_POINTS, WIN_POINTS};
pub use types::{Difficulty, Mark, Outcome, TerminalStatus, WINNING_LINES, WinningLine};
pub use win_detector::{check_win, evaluate, find_winner, winning_lines};
