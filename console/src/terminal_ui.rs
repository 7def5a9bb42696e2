use tictactoe_common::games::tictactoe::{Board, MatchSummary, SIDE, WinningLine};

/// Empty cells show the number to type; winning cells are bracketed.
pub fn render_board(board: &Board, highlight: &[WinningLine]) -> String {
    let mut out = String::new();
    for row in 0..SIDE {
        if row > 0 {
            out.push_str("---+---+---\n");
        }
        let cells: Vec<String> = (0..SIDE)
            .map(|col| {
                let index = row * SIDE + col;
                let highlighted = highlight.iter().any(|line| line.contains(index));
                match board.get(index) {
                    Some(mark) if highlighted => format!("[{}]", mark),
                    Some(mark) => format!(" {} ", mark),
                    None => format!(" {} ", index + 1),
                }
            })
            .collect();
        out.push_str(&cells.join("|"));
        out.push('\n');
    }
    out
}

pub fn render_summary(summary: &MatchSummary) -> String {
    format!(
        "Summary\n  Player Wins: {}\n  Computer Wins: {}\n  Ties: {}\n  Final Score: {}\n",
        summary.player_wins, summary.computer_wins, summary.ties, summary.points
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_common::games::tictactoe::Mark;

    #[test]
    fn test_empty_cells_show_numbers() {
        let rendered = render_board(&Board::new(), &[]);
        assert_eq!(
            rendered,
            " 1 | 2 | 3 \n---+---+---\n 4 | 5 | 6 \n---+---+---\n 7 | 8 | 9 \n"
        );
    }

    #[test]
    fn test_winning_line_is_bracketed() {
        let mut board = Board::new();
        for cell in [0, 4, 8] {
            board.place(cell, Mark::X).unwrap();
        }
        board.place(1, Mark::O).unwrap();
        let rendered = render_board(&board, &[WinningLine([0, 4, 8])]);
        assert_eq!(
            rendered,
            "[X]| O | 3 \n---+---+---\n 4 |[X]| 6 \n---+---+---\n 7 | 8 |[X]\n"
        );
    }

    #[test]
    fn test_summary_lists_all_tallies() {
        let summary = MatchSummary {
            rounds_played: 3,
            player_wins: 1,
            computer_wins: 1,
            ties: 1,
            points: 7,
        };
        let rendered = render_summary(&summary);
        assert!(rendered.contains("Player Wins: 1"));
        assert!(rendered.contains("Computer Wins: 1"));
        assert!(rendered.contains("Ties: 1"));
        assert!(rendered.contains("Final Score: 7"));
    }
}
