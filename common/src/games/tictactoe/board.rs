use std::fmt;

use super::types::Mark;
use crate::error::BoardError;

pub const CELL_COUNT: usize = 9;
pub const SIDE: usize = 3;

/// 3x3 grid, row-major, `None` for an empty cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Option<Mark>; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Option<Mark>; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// `X`, `O` and `.` in row-major order, whitespace ignored.
    #[cfg(test)]
    pub fn from_notation(notation: &str) -> Self {
        let mut cells = [None; CELL_COUNT];
        let symbols: Vec<char> = notation.chars().filter(|c| !c.is_whitespace()).collect();
        assert_eq!(symbols.len(), CELL_COUNT, "notation must describe 9 cells");
        for (cell, symbol) in cells.iter_mut().zip(symbols) {
            *cell = match symbol {
                'X' => Some(Mark::X),
                'O' => Some(Mark::O),
                '.' => None,
                other => panic!("unexpected board symbol {:?}", other),
            };
        }
        Self::from_cells(cells)
    }

    pub fn cells(&self) -> &[Option<Mark>; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied().flatten()
    }

    pub fn is_empty(&self, index: usize) -> bool {
        index < CELL_COUNT && self.cells[index].is_none()
    }

    pub fn place(&mut self, index: usize, mark: Mark) -> Result<(), BoardError> {
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(BoardError::OutOfRange(index))?;
        if cell.is_some() {
            return Err(BoardError::Occupied(index));
        }
        *cell = Some(mark);
        Ok(())
    }

    pub fn clear(&mut self, index: usize) {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = None;
        }
    }

    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(index, _)| index)
            .collect()
    }

    pub fn first_empty(&self) -> Option<usize> {
        self.cells.iter().position(Option::is_none)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == Some(mark)).count()
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Same position with every X and O swapped.
    pub fn mirrored(&self) -> Self {
        let mut cells = self.cells;
        for cell in cells.iter_mut() {
            *cell = cell.map(|mark| mark.opponent());
        }
        Self { cells }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.cells.chunks(SIDE).enumerate() {
            if row_index > 0 {
                writeln!(f, "---+---+---")?;
            }
            let symbols: Vec<String> = row
                .iter()
                .map(|cell| cell.map_or(' ', |mark| mark.symbol()).to_string())
                .collect();
            writeln!(f, " {} ", symbols.join(" | "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_rejects_occupied_and_out_of_range() {
        let mut board = Board::new();
        assert_eq!(board.place(4, Mark::X), Ok(()));
        assert_eq!(board.place(4, Mark::O), Err(BoardError::Occupied(4)));
        assert_eq!(board.place(9, Mark::O), Err(BoardError::OutOfRange(9)));
        assert_eq!(board.get(4), Some(Mark::X));
        assert_eq!(board.filled_count(), 1);
    }

    #[test]
    fn test_available_moves_are_ascending() {
        let board = Board::from_notation("X.O .X. O..");
        assert_eq!(board.available_moves(), vec![1, 3, 5, 7, 8]);
        assert_eq!(board.first_empty(), Some(1));
    }

    #[test]
    fn test_from_cells_keeps_row_major_order() {
        let (x, o) = (Some(Mark::X), Some(Mark::O));
        let board = Board::from_cells([x, None, o, None, x, None, None, None, o]);
        assert_eq!(board, Board::from_notation("X.O .X. ..O"));
        assert_eq!(board.get(2), Some(Mark::O));
        assert_eq!(board.cells()[8], o);
        assert_eq!(board.filled_count(), 4);
    }

    #[test]
    fn test_clear_restores_cell() {
        let mut board = Board::new();
        board.place(0, Mark::O).unwrap();
        board.clear(0);
        assert!(board.is_empty(0));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_full_board() {
        let board = Board::from_notation("XOX XOO OXX");
        assert!(board.is_full());
        assert_eq!(board.first_empty(), None);
        assert!(board.available_moves().is_empty());
        assert_eq!(board.count(Mark::X), 5);
        assert_eq!(board.count(Mark::O), 4);
    }

    #[test]
    fn test_mirrored_swaps_marks() {
        let board = Board::from_notation("XX. OO. ...");
        assert_eq!(board.mirrored(), Board::from_notation("OO. XX. ..."));
        assert_eq!(board.mirrored().mirrored(), board);
    }

    #[test]
    fn test_display() {
        let board = Board::from_notation("X.. .O. ..X");
        let rendered = board.to_string();
        assert_eq!(
            rendered,
            " X |   |   \n---+---+---\n   | O |   \n---+---+---\n   |   | X \n"
        );
    }
}
