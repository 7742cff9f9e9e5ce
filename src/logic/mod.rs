use crate::core::{Board, GameBoard, Move, Symbol};

/// 8方向 (dcol, drow)
pub const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Cells that would be flipped in one direction if `symbol` played at (col, row).
/// Empty unless the run of opponent stones is closed by one of `symbol`'s stones.
fn flips_in_direction(
    board: &Board,
    col: usize,
    row: usize,
    symbol: Symbol,
    (dc, dr): (isize, isize),
) -> Vec<(usize, usize)> {
    let opponent = symbol.opponent();
    let mut out = Vec::new();
    let mut c = col as isize + dc;
    let mut r = row as isize + dr;

    while board.in_bounds(c, r) {
        match board.get(c as usize, r as usize) {
            Some(s) if s == opponent => out.push((c as usize, r as usize)),
            Some(_) => return out,
            None => break,
        }
        c += dc;
        r += dr;
    }
    Vec::new()
}

/// 裏返る石の一覧
pub fn flips(board: &Board, col: usize, row: usize, symbol: Symbol) -> Vec<(usize, usize)> {
    DIRECTIONS
        .iter()
        .flat_map(|&d| flips_in_direction(board, col, row, symbol, d))
        .collect()
}

/// 合法手判定: 空きマスで、少なくとも1方向で相手の石を挟めること
pub fn is_legal_move(board: &Board, col: usize, row: usize, symbol: Symbol) -> bool {
    if col >= board.cols || row >= board.rows || board.get(col, row).is_some() {
        return false;
    }
    DIRECTIONS
        .iter()
        .any(|&d| !flips_in_direction(board, col, row, symbol, d).is_empty())
}

/// 合法手生成 (列 → 行 の順)
pub fn legal_moves(board: &Board, symbol: Symbol) -> Vec<Move> {
    let mut moves = Vec::new();
    for col in 0..board.cols {
        for row in 0..board.rows {
            if is_legal_move(board, col, row, symbol) {
                moves.push(Move::new(col, row));
            }
        }
    }
    moves
}

/// 石を置いて挟んだ石を裏返す。合法性はチェックしない
pub fn play_move(board: &mut Board, col: usize, row: usize, symbol: Symbol) {
    if col >= board.cols || row >= board.rows {
        log::warn!("ignoring out-of-bounds move ({}, {}) for {}", col, row, symbol);
        return;
    }
    for (c, r) in flips(board, col, row, symbol) {
        board.set(c, r, Some(symbol));
    }
    board.set(col, row, Some(symbol));
    board.last_move = Some(Move::new(col, row));
}

/// 着手を適用した新しい盤面を返す
pub fn apply_move(board: &Board, mv: &Move, symbol: Symbol) -> Board {
    let mut next = board.clone();
    play_move(&mut next, mv.col, mv.row, symbol);
    next
}

pub fn count_score(board: &Board, symbol: Symbol) -> usize {
    let mut count = 0;
    for col in 0..board.cols {
        for row in 0..board.rows {
            if board.get(col, row) == Some(symbol) {
                count += 1;
            }
        }
    }
    count
}

/// どちらも打てなければ終局
pub fn is_game_over<B: GameBoard>(board: &B) -> bool {
    !board.has_legal_moves_remaining(Symbol::X) && !board.has_legal_moves_remaining(Symbol::O)
}

/// 石数の多い方。同数なら None
pub fn winner<B: GameBoard>(board: &B) -> Option<Symbol> {
    let x = board.count_score(Symbol::X);
    let o = board.count_score(Symbol::O);
    match x.cmp(&o) {
        std::cmp::Ordering::Greater => Some(Symbol::X),
        std::cmp::Ordering::Less => Some(Symbol::O),
        std::cmp::Ordering::Equal => None,
    }
}
