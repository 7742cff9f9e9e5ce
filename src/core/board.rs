use super::r#move::Move;
use super::types::Symbol;
use crate::error::BoardParseError;
use serde::{Deserialize, Serialize};

/// 盤面コラボレータの契約
///
/// The search only ever talks to a board through this trait. `Clone` must
/// produce an independent deep copy: mutating the clone never touches the
/// original.
pub trait GameBoard: Clone {
    fn cols(&self) -> usize;
    fn rows(&self) -> usize;
    fn is_legal_move(&self, col: usize, row: usize, symbol: Symbol) -> bool;
    fn count_score(&self, symbol: Symbol) -> usize;
    /// Mutates the board in place.
    fn apply_move(&mut self, col: usize, row: usize, symbol: Symbol);

    fn has_legal_moves_remaining(&self, symbol: Symbol) -> bool {
        (0..self.cols()).any(|col| (0..self.rows()).any(|row| self.is_legal_move(col, row, symbol)))
    }

    /// Number of legal moves for `symbol`, scanning columns then rows.
    fn legal_move_count(&self, symbol: Symbol) -> usize {
        let mut count = 0;
        for col in 0..self.cols() {
            for row in 0..self.rows() {
                if self.is_legal_move(col, row, symbol) {
                    count += 1;
                }
            }
        }
        count
    }
}

/// 盤面
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub cols: usize,
    pub rows: usize,
    /// row-major: index = row * cols + col
    cells: Vec<Option<Symbol>>,
    pub last_move: Option<Move>,
}

impl Board {
    pub fn new(cols: usize, rows: usize) -> Self {
        Board {
            cols,
            rows,
            cells: vec![None; cols * rows],
            last_move: None,
        }
    }

    /// Empty grid with the four starting stones in the centre.
    /// X takes the (left, lower) and (right, upper) diagonal, as in standard Othello.
    pub fn standard(cols: usize, rows: usize) -> Self {
        let mut board = Board::new(cols, rows);
        if cols >= 2 && rows >= 2 {
            let (c, r) = (cols / 2, rows / 2);
            board.set(c - 1, r - 1, Some(Symbol::O));
            board.set(c, r, Some(Symbol::O));
            board.set(c, r - 1, Some(Symbol::X));
            board.set(c - 1, r, Some(Symbol::X));
        }
        board
    }

    /// 文字列から盤面を作成 ('X', 'O', '.'; 1行 = 1文字列)
    pub fn from_strings<S: AsRef<str>>(lines: &[S]) -> Result<Self, BoardParseError> {
        let rows: Vec<Vec<char>> = lines
            .iter()
            .map(|l| l.as_ref().chars().filter(|c| !c.is_whitespace()).collect())
            .collect();

        let cols = rows.first().map(|r| r.len()).unwrap_or(0);
        if rows.is_empty() || cols == 0 {
            return Err(BoardParseError::Empty);
        }

        let mut board = Board::new(cols, rows.len());
        for (row, line) in rows.iter().enumerate() {
            if line.len() != cols {
                return Err(BoardParseError::Ragged {
                    row,
                    expected: cols,
                    found: line.len(),
                });
            }
            for (col, &ch) in line.iter().enumerate() {
                let cell = match ch {
                    '.' | '-' | '_' => None,
                    other => Some(
                        Symbol::from_char(other)
                            .ok_or(BoardParseError::UnknownCell { ch: other, col, row })?,
                    ),
                };
                board.set(col, row, cell);
            }
        }
        Ok(board)
    }

    /// One string per row, the inverse of `from_strings`.
    pub fn to_strings(&self) -> Vec<String> {
        (0..self.rows)
            .map(|row| {
                (0..self.cols)
                    .map(|col| self.get(col, row).map(Symbol::as_char).unwrap_or('.'))
                    .collect()
            })
            .collect()
    }

    pub fn in_bounds(&self, col: isize, row: isize) -> bool {
        col >= 0 && row >= 0 && (col as usize) < self.cols && (row as usize) < self.rows
    }

    pub fn get(&self, col: usize, row: usize) -> Option<Symbol> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        self.cells[row * self.cols + col]
    }

    pub fn set(&mut self, col: usize, row: usize, cell: Option<Symbol>) {
        if col < self.cols && row < self.rows {
            self.cells[row * self.cols + col] = cell;
        }
    }
}

impl GameBoard for Board {
    fn cols(&self) -> usize {
        self.cols
    }

    fn rows(&self) -> usize {
        self.rows
    }

    fn is_legal_move(&self, col: usize, row: usize, symbol: Symbol) -> bool {
        crate::logic::is_legal_move(self, col, row, symbol)
    }

    fn count_score(&self, symbol: Symbol) -> usize {
        crate::logic::count_score(self, symbol)
    }

    fn apply_move(&mut self, col: usize, row: usize, symbol: Symbol) {
        crate::logic::play_move(self, col, row, symbol);
    }
}
