use super::config::{NoMovePolicy, SearchConfig};
use crate::core::{GameBoard, Move, Symbol};
use crate::logic::is_game_over;
use crate::player::PlayerController;
use std::cell::RefCell;

/// Counters kept across the agent's lifetime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Every max/min scoring call ever made. Never reset.
    pub total_nodes: u64,
    /// Deepest ply any scoring call was made at.
    pub max_depth_seen: usize,
    pub last_search_nodes: u64,
}

/// A successor: an owned clone with one move applied, and the move that produced it.
#[derive(Debug, Clone)]
pub struct SearchNode<B> {
    pub board: B,
    pub mv: Move,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub value: f64,
    pub nodes: u64,
}

/// Successors for `symbol`, ordered by column then row.
pub fn successors<B: GameBoard>(board: &B, symbol: Symbol) -> Vec<SearchNode<B>> {
    let mut out = Vec::new();
    for col in 0..board.cols() {
        for row in 0..board.rows() {
            if board.is_legal_move(col, row, symbol) {
                let mut next = board.clone();
                next.apply_move(col, row, symbol);
                out.push(SearchNode {
                    board: next,
                    mv: Move::new(col, row),
                });
            }
        }
    }
    out
}

/// Depth-bounded minimax with optional alpha-beta pruning.
///
/// Both layers score from the agent's own fixed perspective: `max_value`
/// enumerates the agent's moves, `min_value` the opponent's. No negamax
/// sign flipping.
pub struct AlphaBetaAI {
    config: SearchConfig,
    name: String,
    stats: RefCell<SearchStats>,
}

impl AlphaBetaAI {
    pub fn new(config: SearchConfig, name: &str) -> Self {
        Self {
            config,
            name: name.to_string(),
            stats: RefCell::new(SearchStats::default()),
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn stats(&self) -> SearchStats {
        *self.stats.borrow()
    }

    // --- Search Root ---
    pub fn search_root<B: GameBoard>(&self, board: &B) -> SearchResult {
        let start_nodes = self.stats.borrow().total_nodes;
        let mut best: Option<(Move, f64)> = None;

        for node in successors(board, self.config.symbol) {
            let alpha = best.map_or(f64::NEG_INFINITY, |(_, v)| v);
            let value = self.min_value(&node.board, alpha, f64::INFINITY, 1);

            // 同点なら先に見つけた手を優先
            match best {
                Some((_, best_value)) if value <= best_value => {}
                _ => best = Some((node.mv, value)),
            }
        }

        let nodes = self.stats.borrow().total_nodes - start_nodes;
        self.stats.borrow_mut().last_search_nodes = nodes;

        let result = match best {
            Some((mv, value)) => SearchResult {
                best_move: Some(mv),
                value,
                nodes,
            },
            None => SearchResult {
                best_move: None,
                value: self.static_value(board),
                nodes,
            },
        };

        log::debug!(
            "{} ({}): best {:?} value {} nodes {} [depth {}, {}, prune {}]",
            self.name,
            self.config.symbol,
            result.best_move,
            result.value,
            result.nodes,
            self.config.max_depth,
            self.config.heuristic,
            self.config.prune
        );
        result
    }

    // --- Max layer (agent to move) ---
    pub(crate) fn max_value<B: GameBoard>(
        &self,
        board: &B,
        mut alpha: f64,
        beta: f64,
        depth: usize,
    ) -> f64 {
        self.visit(depth);

        if self.is_terminal(board) {
            return self.terminal_value(board);
        }
        if depth >= self.config.max_depth {
            return self.evaluate(board);
        }

        let children = successors(board, self.config.symbol);
        if children.is_empty() {
            return match self.config.no_move_policy {
                NoMovePolicy::Forfeit => f64::NEG_INFINITY,
                NoMovePolicy::Pass => self.min_value(&board.clone(), alpha, beta, depth),
            };
        }

        let mut best = f64::NEG_INFINITY;
        for node in children {
            best = best.max(self.min_value(&node.board, alpha, beta, depth + 1));
            if self.config.prune && best >= beta {
                return best; // Beta Cutoff
            }
            alpha = alpha.max(best);
        }
        best
    }

    // --- Min layer (opponent to move) ---
    pub(crate) fn min_value<B: GameBoard>(
        &self,
        board: &B,
        alpha: f64,
        mut beta: f64,
        depth: usize,
    ) -> f64 {
        self.visit(depth);

        if self.is_terminal(board) {
            return self.terminal_value(board);
        }
        if depth >= self.config.max_depth {
            return self.evaluate(board);
        }

        let children = successors(board, self.config.opponent());
        if children.is_empty() {
            return match self.config.no_move_policy {
                NoMovePolicy::Forfeit => f64::INFINITY,
                NoMovePolicy::Pass => self.max_value(&board.clone(), alpha, beta, depth),
            };
        }

        let mut best = f64::INFINITY;
        for node in children {
            best = best.min(self.max_value(&node.board, alpha, beta, depth + 1));
            if self.config.prune && best <= alpha {
                return best; // Alpha Cutoff
            }
            beta = beta.min(best);
        }
        best
    }

    fn visit(&self, depth: usize) {
        let mut stats = self.stats.borrow_mut();
        stats.total_nodes += 1;
        stats.max_depth_seen = stats.max_depth_seen.max(depth);
    }

    /// Neither side has a legal move anywhere, whoever is to move.
    pub(crate) fn is_terminal<B: GameBoard>(&self, board: &B) -> bool {
        is_game_over(board)
    }

    /// 0 on a draw, +inf if the agent leads, -inf otherwise.
    pub(crate) fn terminal_value<B: GameBoard>(&self, board: &B) -> f64 {
        let own = board.count_score(self.config.symbol);
        let opp = board.count_score(self.config.opponent());
        match own.cmp(&opp) {
            std::cmp::Ordering::Equal => 0.0,
            std::cmp::Ordering::Greater => f64::INFINITY,
            std::cmp::Ordering::Less => f64::NEG_INFINITY,
        }
    }

    fn evaluate<B: GameBoard>(&self, board: &B) -> f64 {
        self.config.heuristic.evaluate(board, self.config.symbol)
    }

    /// Value reported when the root itself has no move for the agent.
    fn static_value<B: GameBoard>(&self, board: &B) -> f64 {
        if self.is_terminal(board) {
            self.terminal_value(board)
        } else {
            self.evaluate(board)
        }
    }
}

impl<B: GameBoard> PlayerController<B> for AlphaBetaAI {
    fn get_move(&self, board: &B) -> anyhow::Result<Option<Move>> {
        let result = self.search_root(board);
        if result.best_move.is_none() {
            log::info!("{} ({}) has no legal move and passes", self.name, self.config.symbol);
        }
        Ok(result.best_move)
    }

    fn symbol(&self) -> Symbol {
        self.config.symbol
    }

    fn name(&self) -> &str {
        &self.name
    }
}
