use super::evaluator::Heuristic;
use crate::core::Symbol;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// What a layer does when its mover has no successors but the game is not over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NoMovePolicy {
    /// Hand the turn to the opponent on the same position without using a ply.
    #[default]
    Pass,
    /// Keep the fold identity: -inf in a max layer, +inf in a min layer.
    Forfeit,
}

/// Symbol-independent part of the search configuration (what a config file holds).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    pub heuristic: Heuristic,
    pub prune: bool,
    pub max_depth: usize,
    pub no_move_policy: NoMovePolicy,
}

impl Default for SearchSettings {
    fn default() -> Self {
        SearchSettings {
            heuristic: Heuristic::PieceDifference,
            prune: true,
            max_depth: 4,
            no_move_policy: NoMovePolicy::Pass,
        }
    }
}

impl SearchSettings {
    pub fn for_symbol(self, symbol: Symbol) -> SearchConfig {
        SearchConfig {
            symbol,
            heuristic: self.heuristic,
            prune: self.prune,
            max_depth: self.max_depth,
            no_move_policy: self.no_move_policy,
        }
    }
}

/// 探索エージェントの設定 (構築後は不変)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    pub symbol: Symbol,
    pub heuristic: Heuristic,
    pub prune: bool,
    /// Plies below the root. Root successors sit at ply 1.
    pub max_depth: usize,
    #[serde(default)]
    pub no_move_policy: NoMovePolicy,
}

impl SearchConfig {
    pub fn new(symbol: Symbol, heuristic: Heuristic, prune: bool, max_depth: usize) -> Self {
        SearchConfig {
            symbol,
            heuristic,
            prune,
            max_depth,
            no_move_policy: NoMovePolicy::default(),
        }
    }

    /// Build from the loosely-typed selector values a front end may hand over:
    /// heuristic code 0/1/2 and a signed depth.
    pub fn from_raw(
        symbol: Symbol,
        heuristic_code: i64,
        prune: bool,
        max_depth: i64,
    ) -> Result<Self, ConfigError> {
        let heuristic = Heuristic::from_code(heuristic_code)?;
        if max_depth < 0 {
            return Err(ConfigError::NegativeDepth(max_depth));
        }
        Ok(Self::new(symbol, heuristic, prune, max_depth as usize))
    }

    pub fn with_no_move_policy(mut self, policy: NoMovePolicy) -> Self {
        self.no_move_policy = policy;
        self
    }

    pub fn opponent(&self) -> Symbol {
        self.symbol.opponent()
    }
}
