use crate::core::{Board, Move, Symbol};
use crossterm::style::Stylize;
use std::fmt::Write;

pub struct DisplayState {
    pub highlights: Vec<Move>,
    pub status_msg: Option<String>,
    pub colored: bool,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            highlights: Vec::new(),
            status_msg: None,
            colored: true,
        }
    }
}

/// 盤面を文字列に描画 (列ラベルが上、行ラベルが左)
pub fn render_board(board: &Board, state: &DisplayState) -> String {
    let mut out = String::new();

    if let Some(msg) = &state.status_msg {
        if state.colored {
            let _ = writeln!(out, "{}", msg.clone().bold().yellow());
        } else {
            let _ = writeln!(out, "{}", msg);
        }
    }

    out.push_str("    ");
    for col in 0..board.cols {
        let _ = write!(out, "{:>2}", col);
    }
    out.push('\n');

    for row in 0..board.rows {
        let _ = write!(out, "{:>2} |", row);
        for col in 0..board.cols {
            let last = board.last_move == Some(Move::new(col, row));
            let cell = match board.get(col, row) {
                Some(s) => styled_symbol(s, last, state.colored),
                None if state.highlights.contains(&Move::new(col, row)) => {
                    if state.colored {
                        format!(" {}", '*'.dark_grey())
                    } else {
                        " *".to_string()
                    }
                }
                None => " .".to_string(),
            };
            out.push_str(&cell);
        }
        out.push('\n');
    }
    out
}

fn styled_symbol(symbol: Symbol, last: bool, colored: bool) -> String {
    let ch = symbol.as_char();
    if !colored {
        return format!(" {}", ch);
    }
    let styled = match symbol {
        Symbol::X => ch.red(),
        Symbol::O => ch.cyan(),
    };
    if last {
        format!(" {}", styled.bold().underlined())
    } else {
        format!(" {}", styled)
    }
}

pub fn print_board(board: &Board, state: &DisplayState) {
    print!("{}", render_board(board, state));
}
