use crate::config::{BoardConfig, SelfPlaySettings};
use crate::core::{Board, Symbol};
use crate::game::{save_record, Game, GameOutcome};
use crate::logic::{is_game_over, legal_moves, play_move};
use crate::player::ai::{AlphaBetaAI, SearchSettings};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Instant;

pub struct SelfPlayConfig {
    pub board: BoardConfig,
    pub x: SearchSettings,
    pub o: SearchSettings,
    pub settings: SelfPlaySettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameResult {
    pub game: usize,
    pub winner: Option<Symbol>,
    pub moves: usize,
    pub x_score: usize,
    pub o_score: usize,
    pub time_ms: u128,
    pub x_nodes: u64,
    pub o_nodes: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelfPlayStats {
    pub total_games: usize,
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
    pub avg_moves: f64,
    pub avg_time_ms: f64,
    pub avg_x_nodes: f64,
    pub avg_o_nodes: f64,
    pub x_settings: SearchSettings,
    pub o_settings: SearchSettings,
    pub games: Vec<GameResult>,
}

impl SelfPlayStats {
    pub fn new(x_settings: SearchSettings, o_settings: SearchSettings) -> Self {
        Self {
            total_games: 0,
            x_wins: 0,
            o_wins: 0,
            draws: 0,
            avg_moves: 0.0,
            avg_time_ms: 0.0,
            avg_x_nodes: 0.0,
            avg_o_nodes: 0.0,
            x_settings,
            o_settings,
            games: Vec::new(),
        }
    }

    pub fn add_result(&mut self, result: GameResult) {
        self.total_games += 1;
        match result.winner {
            Some(Symbol::X) => self.x_wins += 1,
            Some(Symbol::O) => self.o_wins += 1,
            None => self.draws += 1,
        }
        self.games.push(result);
        self.recalculate_averages();
    }

    fn recalculate_averages(&mut self) {
        if self.games.is_empty() {
            return;
        }
        let n = self.games.len() as f64;
        self.avg_moves = self.games.iter().map(|g| g.moves).sum::<usize>() as f64 / n;
        self.avg_time_ms = self.games.iter().map(|g| g.time_ms).sum::<u128>() as f64 / n;
        self.avg_x_nodes = self.games.iter().map(|g| g.x_nodes).sum::<u64>() as f64 / n;
        self.avg_o_nodes = self.games.iter().map(|g| g.o_nodes).sum::<u64>() as f64 / n;
    }
}

/// Plays `num_games` games in parallel. Each game owns its own pair of agents.
pub fn run_selfplay(config: &SelfPlayConfig) -> anyhow::Result<SelfPlayStats> {
    let mut results = (0..config.settings.num_games)
        .into_par_iter()
        .map(|game| play_one(config, game))
        .collect::<anyhow::Result<Vec<GameResult>>>()?;
    results.sort_by_key(|r| r.game);

    let mut stats = SelfPlayStats::new(config.x, config.o);
    for result in results {
        stats.add_result(result);
    }

    log::info!(
        "self-play finished: X {} / O {} / draws {} over {} games",
        stats.x_wins,
        stats.o_wins,
        stats.draws,
        stats.total_games
    );
    Ok(stats)
}

fn play_one(config: &SelfPlayConfig, game_num: usize) -> anyhow::Result<GameResult> {
    let start_time = Instant::now();
    let seed = config.settings.seed.wrapping_add(game_num as u64);
    let (board, next) = random_opening(
        Board::standard(config.board.cols, config.board.rows),
        config.settings.random_opening_moves,
        seed,
    );

    let x = AlphaBetaAI::new(config.x.for_symbol(Symbol::X), "AI-X");
    let o = AlphaBetaAI::new(config.o.for_symbol(Symbol::O), "AI-O");

    let mut game = Game::new(board);
    game.current_player = next;
    let outcome: GameOutcome = game.play(&x, &o, |_, _| {})?;

    if let Some(dir) = &config.settings.record_dir {
        save_record(&game.record(outcome), dir, &format!("game_{:04}", game_num))?;
    }

    let elapsed = start_time.elapsed();
    log::info!(
        "game {} done: {:?} ({} moves, {:.1}s)",
        game_num + 1,
        outcome.winner,
        outcome.moves,
        elapsed.as_secs_f64()
    );

    Ok(GameResult {
        game: game_num,
        winner: outcome.winner,
        moves: outcome.moves,
        x_score: outcome.x_score,
        o_score: outcome.o_score,
        time_ms: elapsed.as_millis(),
        x_nodes: x.stats().total_nodes,
        o_nodes: o.stats().total_nodes,
    })
}

/// Plays `plies` random moves from X's turn. Returns the board and the side to move next.
pub fn random_opening(mut board: Board, plies: usize, seed: u64) -> (Board, Symbol) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut to_move = Symbol::X;

    for _ in 0..plies {
        if is_game_over(&board) {
            break;
        }
        if let Some(mv) = legal_moves(&board, to_move).choose(&mut rng) {
            play_move(&mut board, mv.col, mv.row, to_move);
        }
        to_move = to_move.opponent();
    }
    (board, to_move)
}

pub fn save_stats(stats: &SelfPlayStats, dir: &Path) -> anyhow::Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let filename = dir.join(format!(
        "selfplay_{}.json",
        chrono::Local::now().format("%Y%m%d_%H%M%S")
    ));
    let file = std::fs::File::create(&filename)?;
    serde_json::to_writer_pretty(file, stats)?;
    Ok(filename)
}
