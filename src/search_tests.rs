#[cfg(test)]
mod tests {
    use crate::core::{Board, GameBoard, Move, Symbol};
    use crate::logic::legal_moves;
    use crate::player::ai::alpha_beta::successors;
    use crate::player::ai::{AlphaBetaAI, Heuristic, NoMovePolicy, SearchConfig};
    use crate::player::PlayerController;
    use crate::selfplay::random_opening;

    fn agent(symbol: Symbol, heuristic: Heuristic, prune: bool, depth: usize) -> AlphaBetaAI {
        AlphaBetaAI::new(SearchConfig::new(symbol, heuristic, prune, depth), "test")
    }

    /// X's two moves: (0, 0) wins more stones, (1, 3) leaves X more mobile.
    fn two_move_board() -> Board {
        Board::from_strings(&["...O", "OO..", "..O.", "X.OX"]).unwrap()
    }

    #[test]
    fn test_forced_win_single_move() {
        let board = Board::from_strings(&["XO."]).unwrap();
        for prune in [false, true] {
            let ai = agent(Symbol::X, Heuristic::PieceDifference, prune, 3);
            assert_eq!(ai.get_move(&board).unwrap(), Some(Move::new(2, 0)));
            // the only successor is terminal: one scoring call
            assert_eq!(ai.stats().total_nodes, 1);
            assert_eq!(ai.stats().max_depth_seen, 1);
        }

        let ai = agent(Symbol::X, Heuristic::Mobility, true, 3);
        assert_eq!(ai.search_root(&board).value, f64::INFINITY);
    }

    #[test]
    fn test_piece_difference_depth_one() {
        let board = two_move_board();
        assert_eq!(
            legal_moves(&board, Symbol::X),
            vec![Move::new(0, 0), Move::new(1, 3)]
        );
        for prune in [false, true] {
            let ai = agent(Symbol::X, Heuristic::PieceDifference, prune, 1);
            let result = ai.search_root(&board);
            assert_eq!(result.best_move, Some(Move::new(0, 0)));
            assert_eq!(result.value, 2.0);
            assert_eq!(result.nodes, 2);
        }
    }

    #[test]
    fn test_mobility_changes_the_choice() {
        let board = two_move_board();
        let by_pieces = agent(Symbol::X, Heuristic::PieceDifference, true, 1)
            .search_root(&board)
            .best_move;
        let by_mobility = agent(Symbol::X, Heuristic::Mobility, true, 1).search_root(&board);

        assert_eq!(by_mobility.best_move, Some(Move::new(1, 3)));
        assert_eq!(by_mobility.value, 3.0);
        assert_ne!(by_mobility.best_move, by_pieces);

        let custom = agent(Symbol::X, Heuristic::Custom, false, 1).search_root(&board);
        assert_eq!(custom.best_move, Some(Move::new(1, 3)));
        assert_eq!(custom.value, 6.0);
    }

    #[test]
    fn test_ties_keep_first_in_scan_order() {
        // every opening move on 4x4 flips exactly one stone
        let board = Board::standard(4, 4);
        let ai = agent(Symbol::X, Heuristic::PieceDifference, true, 1);
        let result = ai.search_root(&board);
        assert_eq!(result.best_move, Some(legal_moves(&board, Symbol::X)[0]));
        assert_eq!(result.best_move, Some(Move::new(0, 1)));
        assert_eq!(result.value, 3.0);
    }

    #[test]
    fn test_pruning_preserves_value_and_move() {
        let mut pruned_total = 0;
        let mut full_total = 0;

        // early positions, then late ones where passes and finished games show up
        let openings = (0..8u64)
            .map(|seed| (seed, 4 + seed as usize))
            .chain((20..26u64).map(|seed| (seed, 6 * 6 - 7)));

        for (seed, plies) in openings {
            let (board, to_move) = random_opening(Board::standard(6, 6), plies, seed);
            for heuristic in Heuristic::ALL {
                for policy in [NoMovePolicy::Pass, NoMovePolicy::Forfeit] {
                    let config = SearchConfig::new(to_move, heuristic, false, 3)
                        .with_no_move_policy(policy);
                    let full = AlphaBetaAI::new(config, "full").search_root(&board);
                    let pruned =
                        AlphaBetaAI::new(SearchConfig { prune: true, ..config }, "pruned")
                            .search_root(&board);

                    assert_eq!(
                        pruned.best_move, full.best_move,
                        "seed {} {:?}",
                        seed, heuristic
                    );
                    assert_eq!(pruned.value, full.value, "seed {} {:?}", seed, heuristic);
                    assert!(pruned.nodes <= full.nodes);

                    pruned_total += pruned.nodes;
                    full_total += full.nodes;
                }
            }
        }
        assert!(pruned_total < full_total);
    }

    #[test]
    fn test_node_count_is_deterministic() {
        let (board, to_move) = random_opening(Board::standard(6, 6), 6, 11);
        let first = agent(to_move, Heuristic::Mobility, false, 3);
        let second = agent(to_move, Heuristic::Mobility, false, 3);

        let a = first.search_root(&board);
        let b = second.search_root(&board);
        assert_eq!(a.nodes, b.nodes);
        assert_eq!(a, b);

        // the counter keeps growing across searches on the same agent
        first.search_root(&board);
        assert_eq!(first.stats().total_nodes, 2 * a.nodes);
        assert_eq!(first.stats().last_search_nodes, a.nodes);
    }

    #[test]
    fn test_depth_bound_respected() {
        let board = Board::standard(6, 6);
        for depth in 1..=4 {
            let ai = AlphaBetaAI::new(
                SearchConfig::new(Symbol::X, Heuristic::PieceDifference, false, depth)
                    .with_no_move_policy(NoMovePolicy::Forfeit),
                "depth",
            );
            ai.search_root(&board);
            assert_eq!(ai.stats().max_depth_seen, depth);
        }

        // depth 0 behaves like a one-ply lookahead
        let zero = agent(Symbol::X, Heuristic::PieceDifference, false, 0);
        let one = agent(Symbol::X, Heuristic::PieceDifference, false, 1);
        assert_eq!(zero.search_root(&board), one.search_root(&board));
        assert_eq!(zero.stats().max_depth_seen, 1);
    }

    #[test]
    fn test_terminal_short_circuit() {
        let won = Board::from_strings(&["XX", "XO"]).unwrap();
        let drawn = Board::from_strings(&["XO", "OX"]).unwrap();
        let inf = f64::INFINITY;

        let x = agent(Symbol::X, Heuristic::Mobility, true, 10);
        assert_eq!(x.max_value(&won, -inf, inf, 0), inf);
        assert_eq!(x.min_value(&won, -inf, inf, 0), inf);
        assert_eq!(x.max_value(&drawn, -inf, inf, 0), 0.0);
        assert_eq!(x.stats().total_nodes, 3);

        // same position, other perspective
        let o = agent(Symbol::O, Heuristic::Mobility, true, 10);
        assert_eq!(o.max_value(&won, -inf, inf, 3), -inf);

        // terminal even at the depth ceiling: no heuristic value
        let shallow = agent(Symbol::X, Heuristic::Mobility, true, 0);
        assert_eq!(shallow.min_value(&won, -inf, inf, 0), inf);
    }

    #[test]
    fn test_no_move_policy() {
        // O has no move here but X does
        let board = Board::from_strings(&["O.OO", "OXO."]).unwrap();
        let inf = f64::INFINITY;
        assert!(!board.has_legal_moves_remaining(Symbol::O));
        assert!(board.has_legal_moves_remaining(Symbol::X));

        let forfeit = AlphaBetaAI::new(
            SearchConfig::new(Symbol::X, Heuristic::PieceDifference, false, 6)
                .with_no_move_policy(NoMovePolicy::Forfeit),
            "forfeit",
        );
        assert_eq!(forfeit.min_value(&board, -inf, inf, 0), inf);
        assert_eq!(forfeit.stats().total_nodes, 1);

        // pass: X plays (3, 1) and ends the game 3 - 4 down
        let pass = agent(Symbol::X, Heuristic::PieceDifference, false, 6);
        assert_eq!(pass.min_value(&board, -inf, inf, 0), -inf);
        assert_eq!(pass.stats().total_nodes, 3);
        assert_eq!(pass.stats().max_depth_seen, 1);
    }

    #[test]
    fn test_max_layer_without_moves() {
        // X has no move here but O does
        let board = Board::from_strings(&["X.XX", "XOX."]).unwrap();
        let inf = f64::INFINITY;
        assert!(!board.has_legal_moves_remaining(Symbol::X));
        assert!(board.has_legal_moves_remaining(Symbol::O));

        let forfeit = AlphaBetaAI::new(
            SearchConfig::new(Symbol::X, Heuristic::PieceDifference, false, 6)
                .with_no_move_policy(NoMovePolicy::Forfeit),
            "forfeit",
        );
        assert_eq!(forfeit.max_value(&board, -inf, inf, 0), -inf);
        assert_eq!(forfeit.stats().total_nodes, 1);

        // pass hands the same position to the min layer at the same ply
        let reference = agent(Symbol::X, Heuristic::PieceDifference, false, 6);
        let expected = reference.min_value(&board, -inf, inf, 0);

        let pass = agent(Symbol::X, Heuristic::PieceDifference, false, 6);
        let value = pass.max_value(&board, -inf, inf, 0);
        assert_eq!(value, expected);
        // O plays (3, 1) and loses 3 - 4
        assert_eq!(value, inf);
        assert_eq!(pass.stats().max_depth_seen, reference.stats().max_depth_seen);
        assert_eq!(pass.stats().max_depth_seen, 1);
        assert_eq!(pass.stats().total_nodes, reference.stats().total_nodes + 1);
    }

    #[test]
    fn test_root_without_moves_passes() {
        let board = Board::from_strings(&["OX."]).unwrap();
        let ai = agent(Symbol::X, Heuristic::PieceDifference, true, 4);
        let result = ai.search_root(&board);
        assert_eq!(result.best_move, None);
        assert_eq!(result.nodes, 0);
        assert_eq!(result.value, 0.0);
        assert_eq!(ai.get_move(&board).unwrap(), None);
    }

    #[test]
    fn test_successors_are_owned_clones() {
        let board = Board::standard(6, 6);
        let snapshot = board.clone();
        let nodes = successors(&board, Symbol::O);

        let moves: Vec<Move> = nodes.iter().map(|n| n.mv).collect();
        assert_eq!(moves, legal_moves(&board, Symbol::O));
        for node in &nodes {
            assert_ne!(node.board, board);
            assert_eq!(node.board.get(node.mv.col, node.mv.row), Some(Symbol::O));
        }
        assert_eq!(board, snapshot);
        assert!(successors(&Board::from_strings(&["OX."]).unwrap(), Symbol::X).is_empty());
    }
}
