//! End-to-end search scenarios.

use caissa::board::{Board, Color, Move, Piece, Square};
use caissa::eval::evaluate;
use caissa::search::{Searcher, MATE_SCORE};

fn single_threaded() -> Searcher {
    Searcher::with_threads(16, 1)
}

#[test]
fn opening_move_from_the_back_ranks() {
    let board = Board::new();
    let searcher = Searcher::new(16);

    let result = searcher.find_best_move(&board, Color::White, 1);
    let best = result.best_move.expect("white has an opening move");

    assert!(
        best.from.row() == 6 || best.from.row() == 7,
        "opening move from unexpected square: {best}"
    );
    assert!(result.score.is_finite());
}

#[test]
fn fools_mate_is_found() {
    let mut board = Board::new();
    for text in ["f2f3", "e7e5", "g2g4"] {
        board.make_move(text.parse::<Move>().expect("valid move text"));
    }

    let searcher = single_threaded();
    let result = searcher.find_best_move(&board, Color::Black, 2);

    assert_eq!(
        result.best_move,
        Some("d8h4".parse().expect("valid move text"))
    );
    assert!(
        result.score >= 9000.0,
        "mate score not reported: {}",
        result.score
    );
}

#[test]
fn back_rank_mate_is_found() {
    let (board, side) = Board::from_fen("r5k1/8/8/8/8/8/5PPP/6K1 b - - 0 1").expect("valid fen");
    assert_eq!(side, Color::Black);

    let searcher = single_threaded();
    let result = searcher.find_best_move(&board, Color::Black, 2);
    let best = result.best_move.expect("black has moves");

    assert_eq!(best.to, Square::new(7, 0), "expected the rook drop to a1");
    assert!(
        result.score >= 9000.0,
        "mate score not reported: {}",
        result.score
    );
}

#[test]
fn promotion_prefers_the_queen() {
    let (board, side) = Board::from_fen("7k/P7/8/8/8/8/8/7K w - - 0 1").expect("valid fen");
    assert_eq!(side, Color::White);

    let searcher = single_threaded();
    let result = searcher.find_best_move(&board, Color::White, 3);
    let best = result.best_move.expect("white has moves");

    assert_eq!(best.promotion, Some(Piece::Queen), "best move: {best}");
}

#[test]
fn en_passant_is_available_after_the_double_push() {
    let mut board = Board::new();
    for text in ["e2e4", "a7a6", "e4e5", "d7d5"] {
        board.make_move(text.parse::<Move>().expect("valid move text"));
    }

    let target = board.en_passant_target().expect("double push sets target");
    let moves = board.legal_moves(Color::White);
    assert!(moves
        .iter()
        .any(|mv| mv.to == target && mv.from == Square::new(3, 4)));
}

#[test]
fn mated_side_gets_no_move_and_zero_score() {
    let mut board = Board::new();
    for text in ["f2f3", "e7e5", "g2g4", "d8h4"] {
        board.make_move(text.parse::<Move>().expect("valid move text"));
    }

    let searcher = single_threaded();
    let result = searcher.find_best_move(&board, Color::White, 3);

    assert!(result.best_move.is_none());
    assert!(result.score.abs() < f64::EPSILON);
    assert!(board.is_king_in_check(Color::White));
}

#[test]
fn parallel_and_sequential_search_agree_on_the_score() {
    let (board, side) =
        Board::from_fen("r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4")
            .expect("valid fen");

    let sequential = single_threaded().find_best_move(&board, side, 3);
    let parallel = Searcher::with_threads(16, 4).find_best_move(&board, side, 3);

    assert!((sequential.score - parallel.score).abs() < 1e-9);
}

#[test]
fn deeper_search_does_not_collapse() {
    let (board, side) =
        Board::from_fen("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1").expect("valid fen");

    let searcher = single_threaded();
    let shallow = searcher.find_best_move(&board, side, 2);
    let deep = searcher.find_best_move(&board, side, 4);

    // Heuristic monotonicity: two extra plies must not crater the score.
    assert!(
        deep.score >= shallow.score - 1.5,
        "depth 4 score {} fell far below depth 2 score {}",
        deep.score,
        shallow.score
    );
}

// --- Null-window / full-window equivalence ---------------------------------
//
// A plain fail-hard alpha-beta over the public API, with the same
// quiescence and mate scoring as the engine but no transposition table,
// no PVS, and no null move. At depths where null-move pruning cannot
// trigger, the engine's root scores must match it exactly.

fn reference_quiescence(
    board: &mut Board,
    side: Color,
    mut alpha: i32,
    beta: i32,
) -> i32 {
    let stand_pat = evaluate(board, side);
    if stand_pat >= beta {
        return beta;
    }
    if stand_pat > alpha {
        alpha = stand_pat;
    }

    for mv in board.tactical_moves(side) {
        board.make_move(mv);
        let score = -reference_quiescence(board, side.opposite(), -beta, -alpha);
        board.unmake_move();
        if score >= beta {
            return beta;
        }
        if score > alpha {
            alpha = score;
        }
    }
    alpha
}

fn reference_alphabeta(
    board: &mut Board,
    side: Color,
    depth: u32,
    mut alpha: i32,
    beta: i32,
    ply: i32,
) -> i32 {
    if depth == 0 {
        return reference_quiescence(board, side, alpha, beta);
    }

    let moves = board.legal_moves(side);
    if moves.is_empty() {
        return if board.is_king_in_check(side) {
            -(MATE_SCORE - ply)
        } else {
            0
        };
    }

    for mv in moves {
        board.make_move(mv);
        let score = -reference_alphabeta(board, side.opposite(), depth - 1, -beta, -alpha, ply + 1);
        board.unmake_move();
        if score >= beta {
            return beta;
        }
        if score > alpha {
            alpha = score;
        }
    }
    alpha
}

fn reference_root_score(fen: &str, depth: u32) -> i32 {
    let (mut board, side) = Board::from_fen(fen).expect("valid fen");
    let mut best = i32::MIN;
    for mv in board.legal_moves(side) {
        board.make_move(mv);
        let score = -reference_alphabeta(
            &mut board,
            side.opposite(),
            depth - 1,
            -2_000_000,
            2_000_000,
            1,
        );
        board.unmake_move();
        best = best.max(score);
    }
    best
}

#[test]
fn pvs_matches_plain_alpha_beta_at_the_root() {
    let suite = [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    ];

    for fen in suite {
        for depth in [2, 3] {
            let (board, side) = Board::from_fen(fen).expect("valid fen");
            let engine = single_threaded().find_best_move(&board, side, depth);
            let engine_cp = (engine.score * 100.0).round() as i32;
            let reference_cp = reference_root_score(fen, depth);

            assert_eq!(
                engine_cp, reference_cp,
                "score divergence on {fen} at depth {depth}"
            );
        }
    }
}
