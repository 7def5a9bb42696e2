use super::board::Board;
use super::types::{Mark, TerminalStatus, WINNING_LINES, WinningLine};

pub fn check_win(board: &Board, mark: Mark) -> bool {
    WINNING_LINES
        .iter()
        .any(|line| holds_line(board, line, mark))
}

/// Every line held by `mark`. A single move can complete two lines at once.
pub fn winning_lines(board: &Board, mark: Mark) -> Vec<WinningLine> {
    WINNING_LINES
        .iter()
        .copied()
        .filter(|line| holds_line(board, line, mark))
        .collect()
}

pub fn find_winner(board: &Board) -> Option<Mark> {
    [Mark::X, Mark::O]
        .into_iter()
        .find(|&mark| check_win(board, mark))
}

pub fn evaluate(board: &Board) -> TerminalStatus {
    if let Some(winner) = find_winner(board) {
        return TerminalStatus::Win(winner);
    }
    if board.is_full() {
        return TerminalStatus::Draw;
    }
    TerminalStatus::Ongoing
}

#[inline(always)]
fn holds_line(board: &Board, line: &WinningLine, mark: Mark) -> bool {
    line.cells().iter().all(|&cell| board.get(cell) == Some(mark))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_single_mark_boards_are_ongoing() {
        assert_eq!(evaluate(&Board::new()), TerminalStatus::Ongoing);
        for cell in 0..9 {
            for mark in [Mark::X, Mark::O] {
                let mut board = Board::new();
                board.place(cell, mark).unwrap();
                assert_eq!(evaluate(&board), TerminalStatus::Ongoing);
            }
        }
    }

    #[test]
    fn test_each_line_alone_is_a_win() {
        for line in WINNING_LINES {
            for mark in [Mark::X, Mark::O] {
                let mut board = Board::new();
                for cell in line.cells() {
                    board.place(cell, mark).unwrap();
                }
                assert_eq!(evaluate(&board), TerminalStatus::Win(mark));
                assert_eq!(winning_lines(&board, mark), vec![line]);
                assert!(!check_win(&board, mark.opponent()));
            }
        }
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = Board::from_notation("XOX XOO OXX");
        assert_eq!(evaluate(&board), TerminalStatus::Draw);
        assert_eq!(find_winner(&board), None);
    }

    #[test]
    fn test_full_board_with_line_is_win() {
        let board = Board::from_notation("XXX OOX OXO");
        assert_eq!(evaluate(&board), TerminalStatus::Win(Mark::X));
    }

    #[test]
    fn test_double_line_reports_both() {
        let board = Board::from_notation("XXX OXO OOX");
        let lines = winning_lines(&board, Mark::X);
        assert_eq!(lines, vec![WinningLine([0, 1, 2]), WinningLine([0, 4, 8])]);
        assert_eq!(evaluate(&board), TerminalStatus::Win(Mark::X));
    }

    #[test]
    fn test_evaluate_does_not_mutate() {
        let board = Board::from_notation("XO. .X. ..O");
        let before = board;
        let _ = evaluate(&board);
        assert_eq!(board, before);
    }
}
