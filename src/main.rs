use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use reversi_ab::config::AppConfig;
use reversi_ab::core::{Board, Symbol};
use reversi_ab::display::{print_board, DisplayState};
use reversi_ab::game::{save_record, Game};
use reversi_ab::logic::legal_moves;
use reversi_ab::player::ai::{Heuristic, SearchSettings};
use reversi_ab::player::{AlphaBetaAI, HumanPlayer, PlayerController};
use reversi_ab::selfplay::{run_selfplay, save_stats, SelfPlayConfig};
use std::path::{Path, PathBuf};

/// Othello/Reversi with a minimax / alpha-beta player.
#[derive(Parser)]
#[command(name = "reversi-ab", about = "Reversi with a depth-bounded alpha-beta player")]
struct Cli {
    /// Path to JSON configuration file
    #[arg(long, global = true, default_value = "reversi_config.json")]
    config: PathBuf,

    #[command(flatten)]
    overrides: Overrides,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct Overrides {
    #[arg(long, global = true)]
    cols: Option<usize>,
    #[arg(long, global = true)]
    rows: Option<usize>,
    /// Search depth in plies
    #[arg(long, global = true)]
    depth: Option<usize>,
    /// piece-difference, mobility or custom
    #[arg(long, global = true)]
    heuristic: Option<Heuristic>,
    /// Plain minimax without alpha-beta cutoffs
    #[arg(long, global = true)]
    no_prune: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Play a single game in the terminal
    Play {
        /// Which side the human plays
        #[arg(long, value_enum, default_value = "x")]
        human: HumanSide,
        /// Save the game record into this directory
        #[arg(long)]
        record_dir: Option<PathBuf>,
    },
    /// Run AI-vs-AI games and report statistics
    SelfPlay {
        #[arg(long)]
        games: Option<usize>,
        /// Heuristic for O (X uses --heuristic / the config file)
        #[arg(long)]
        o_heuristic: Option<Heuristic>,
        /// Directory for the statistics JSON
        #[arg(long, default_value = "selfplay_results")]
        out: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum HumanSide {
    X,
    O,
    #[value(name = "none")]
    Nobody,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    apply_overrides(&mut config, &cli.overrides);
    config.validate()?;

    match cli.command {
        Command::Play { human, record_dir } => run_play(&config, human, record_dir),
        Command::SelfPlay {
            games,
            o_heuristic,
            out,
        } => {
            if let Some(n) = games {
                config.selfplay.num_games = n;
            }
            let o = SearchSettings {
                heuristic: o_heuristic.unwrap_or(config.search.heuristic),
                ..config.search
            };
            run_batch(&config, o, &out)
        }
    }
}

fn apply_overrides(config: &mut AppConfig, o: &Overrides) {
    if let Some(cols) = o.cols {
        config.board.cols = cols;
    }
    if let Some(rows) = o.rows {
        config.board.rows = rows;
    }
    if let Some(depth) = o.depth {
        config.search.max_depth = depth;
    }
    if let Some(h) = o.heuristic {
        config.search.heuristic = h;
    }
    if o.no_prune {
        config.search.prune = false;
    }
}

fn controller(config: &AppConfig, symbol: Symbol, human: bool) -> Box<dyn PlayerController> {
    if human {
        Box::new(HumanPlayer::new(symbol, "Human"))
    } else {
        Box::new(AlphaBetaAI::new(
            config.search.for_symbol(symbol),
            &format!("AI-{}", symbol),
        ))
    }
}

fn run_play(config: &AppConfig, human: HumanSide, record_dir: Option<PathBuf>) -> Result<()> {
    let x = controller(config, Symbol::X, matches!(human, HumanSide::X));
    let o = controller(config, Symbol::O, matches!(human, HumanSide::O));

    let board = Board::standard(config.board.cols, config.board.rows);
    print_board(&board, &status(&board, Symbol::X));

    let mut game = Game::new(board);
    let outcome = game.play(x.as_ref(), o.as_ref(), |board, turn| {
        match turn.mv {
            Some(mv) => println!("{} plays {}", turn.symbol, mv),
            None => println!("{} passes", turn.symbol),
        }
        print_board(board, &status(board, turn.symbol.opponent()));
    })?;

    match outcome.winner {
        Some(s) => println!("{} wins ({} - {})", s, outcome.x_score, outcome.o_score),
        None => println!("Draw ({} - {})", outcome.x_score, outcome.o_score),
    }

    if let Some(dir) = record_dir {
        let path = save_record(&game.record(outcome), &dir, "game")?;
        println!("Record saved to {}", path.display());
    }
    Ok(())
}

fn status(board: &Board, to_move: Symbol) -> DisplayState {
    DisplayState {
        highlights: legal_moves(board, to_move),
        status_msg: Some(format!("{} to move", to_move)),
        ..DisplayState::default()
    }
}

fn run_batch(config: &AppConfig, o: SearchSettings, out: &Path) -> Result<()> {
    let stats = run_selfplay(&SelfPlayConfig {
        board: config.board,
        x: config.search,
        o,
        settings: config.selfplay.clone(),
    })?;

    let total = stats.total_games.max(1) as f64;
    println!("=== Self-Play Results ===");
    println!(
        "X ({}): {} wins ({:.1}%)",
        stats.x_settings.heuristic,
        stats.x_wins,
        stats.x_wins as f64 / total * 100.0
    );
    println!(
        "O ({}): {} wins ({:.1}%)",
        stats.o_settings.heuristic,
        stats.o_wins,
        stats.o_wins as f64 / total * 100.0
    );
    println!(
        "Draws: {} ({:.1}%)",
        stats.draws,
        stats.draws as f64 / total * 100.0
    );
    println!("Avg Moves: {:.1}", stats.avg_moves);
    println!(
        "Avg Nodes: X {:.0} / O {:.0}",
        stats.avg_x_nodes, stats.avg_o_nodes
    );

    let path = save_stats(&stats, out)?;
    println!("Saved to {}", path.display());
    Ok(())
}
