//! Move ordering for the alpha-beta and quiescence searches.
//!
//! Scores, highest first: the transposition-table move outranks
//! everything; promotions carry a large flat bonus; captures use MVV-LVA
//! (victim value x 100 minus attacker value, en passant counting as a pawn
//! capture); a small bonus rewards checking moves, detected by a
//! make/test/unmake probe. The sort is stable, so equal scores keep the
//! generator's deterministic order.

use crate::board::{Board, Color, Move, Piece};
use crate::eval::MATERIAL;

const TT_MOVE_SCORE: i32 = 1_000_000;
const PROMOTION_BONUS: i32 = 10_000;
const CHECK_BONUS: i32 = 300;

/// Victim/attacker capture score; zero for quiet moves.
fn capture_score(board: &Board, mv: Move) -> i32 {
    let Some((_, attacker)) = board.piece_at(mv.from) else {
        return 0;
    };
    let victim = match board.piece_at(mv.to) {
        Some((_, piece)) => Some(piece),
        // A pawn sliding off its file onto an empty square is en passant.
        None if attacker == Piece::Pawn && mv.from.col() != mv.to.col() => Some(Piece::Pawn),
        None => None,
    };
    match victim {
        Some(piece) => MATERIAL[piece.index()] * 100 - MATERIAL[attacker.index()],
        None => 0,
    }
}

fn score_move(board: &mut Board, mv: Move, tt_move: Option<Move>, side: Color) -> i32 {
    if tt_move == Some(mv) {
        return TT_MOVE_SCORE;
    }

    let mut score = capture_score(board, mv);
    if mv.promotion.is_some() {
        score += PROMOTION_BONUS;
    }

    board.make_move(mv);
    if board.is_king_in_check(side.opposite()) {
        score += CHECK_BONUS;
    }
    board.unmake_move();

    score
}

/// Order moves for the main search, best candidates first.
pub(crate) fn order_moves(
    board: &mut Board,
    moves: &mut [Move],
    tt_move: Option<Move>,
    side: Color,
) {
    let mut scored: Vec<(i32, Move)> = moves
        .iter()
        .map(|&mv| (score_move(board, mv, tt_move, side), mv))
        .collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    for (slot, (_, mv)) in moves.iter_mut().zip(scored) {
        *slot = mv;
    }
}

/// Cheaper ordering for quiescence: MVV-LVA and promotions only, no check
/// probe.
pub(crate) fn order_tactical(board: &Board, moves: &mut [Move]) {
    let mut scored: Vec<(i32, Move)> = moves
        .iter()
        .map(|&mv| {
            let mut score = capture_score(board, mv);
            if mv.promotion.is_some() {
                score += PROMOTION_BONUS;
            }
            (score, mv)
        })
        .collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    for (slot, (_, mv)) in moves.iter_mut().zip(scored) {
        *slot = mv;
    }
}
