//! Negamax alpha-beta with transposition table, null-move pruning,
//! principal-variation search, and quiescence.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::board::{Board, Color};
use crate::eval::evaluate;
use crate::tt::{Bound, TranspositionTable};

use super::move_order::{order_moves, order_tactical};
use super::{INFINITY, MATE_SCORE, MATE_THRESHOLD};

/// Shared references threaded through the recursion.
pub(crate) struct SearchContext<'a> {
    pub tt: &'a TranspositionTable,
    pub nodes: &'a AtomicU64,
}

/// Translate a score into its transposition-table form. Mate scores are
/// stored relative to the node rather than the root, so an entry written
/// at one depth reads back with the correct distance at another.
fn score_to_tt(score: i32, ply: i32) -> i32 {
    if score >= MATE_THRESHOLD {
        score + ply
    } else if score <= -MATE_THRESHOLD {
        score - ply
    } else {
        score
    }
}

fn score_from_tt(score: i32, ply: i32) -> i32 {
    if score >= MATE_THRESHOLD {
        score - ply
    } else if score <= -MATE_THRESHOLD {
        score + ply
    } else {
        score
    }
}

/// Fail-hard negamax over the window [alpha, beta] for `side`, searching
/// `depth` more plies. `ply` is the distance from the root, used for mate
/// scoring.
pub(crate) fn negamax(
    board: &mut Board,
    side: Color,
    depth: u32,
    mut alpha: i32,
    beta: i32,
    ply: i32,
    ctx: &SearchContext<'_>,
) -> i32 {
    ctx.nodes.fetch_add(1, Ordering::Relaxed);

    let hash = board.hash_key();
    let mut tt_move = None;
    if let Some(entry) = ctx.tt.probe(hash) {
        // The stored move seeds ordering even when the entry is too
        // shallow to return.
        tt_move = entry.best_move;
        if entry.depth >= depth {
            let score = score_from_tt(entry.score, ply);
            match entry.bound {
                Bound::Exact => return score,
                Bound::Lower if score >= beta => return beta,
                Bound::Upper if score <= alpha => return alpha,
                _ => {}
            }
        }
    }

    if depth == 0 {
        return quiescence(board, side, alpha, beta, ctx);
    }

    let in_check = board.is_king_in_check(side);

    // Null-move pruning: hand the opponent a free move and search shallow;
    // if the position still clears beta it is almost certainly good enough.
    // Skipped in check and without non-pawn material (zugzwang).
    if depth >= 3 && !in_check && board.has_non_pawn_material(side) {
        board.make_null();
        let score = -negamax(
            board,
            side.opposite(),
            depth - 3,
            -beta,
            -beta + 1,
            ply + 1,
            ctx,
        );
        board.unmake_null();
        if score >= beta {
            return beta;
        }
    }

    let mut moves = board.legal_moves(side);
    if moves.is_empty() {
        return if in_check { -(MATE_SCORE - ply) } else { 0 };
    }
    order_moves(board, &mut moves, tt_move, side);

    let mut best_move = moves[0];
    let mut raised_alpha = false;

    for (i, &mv) in moves.iter().enumerate() {
        board.make_move(mv);
        let score = if i == 0 {
            -negamax(board, side.opposite(), depth - 1, -beta, -alpha, ply + 1, ctx)
        } else {
            // Principal-variation search: probe with a null window and
            // re-search on a hit inside the full window.
            let probe = -negamax(
                board,
                side.opposite(),
                depth - 1,
                -alpha - 1,
                -alpha,
                ply + 1,
                ctx,
            );
            if probe > alpha && probe < beta {
                -negamax(board, side.opposite(), depth - 1, -beta, -alpha, ply + 1, ctx)
            } else {
                probe
            }
        };
        board.unmake_move();

        if score >= beta {
            ctx.tt
                .store(hash, depth, score_to_tt(beta, ply), Bound::Lower, Some(mv));
            return beta;
        }
        if score > alpha {
            alpha = score;
            best_move = mv;
            raised_alpha = true;
        }
    }

    let bound = if raised_alpha {
        Bound::Exact
    } else {
        Bound::Upper
    };
    ctx.tt
        .store(hash, depth, score_to_tt(alpha, ply), bound, Some(best_move));
    alpha
}

/// Extend the leaf through forcing moves (captures including en passant,
/// and promotions) until the position is quiet. Unbounded in depth but
/// finite: capture sequences terminate.
pub(crate) fn quiescence(
    board: &mut Board,
    side: Color,
    mut alpha: i32,
    beta: i32,
    ctx: &SearchContext<'_>,
) -> i32 {
    ctx.nodes.fetch_add(1, Ordering::Relaxed);

    let stand_pat = evaluate(board, side);
    if stand_pat >= beta {
        return beta;
    }
    if stand_pat > alpha {
        alpha = stand_pat;
    }

    let mut moves = board.tactical_moves(side);
    order_tactical(board, &mut moves);

    for mv in moves {
        board.make_move(mv);
        let score = -quiescence(board, side.opposite(), -beta, -alpha, ctx);
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

/// Search a position with the widest possible window; the root split
/// evaluates each root move this way.
pub(crate) fn search_move_full_window(
    board: &mut Board,
    side: Color,
    depth: u32,
    ctx: &SearchContext<'_>,
) -> i32 {
    negamax(board, side, depth, -INFINITY, INFINITY, 1, ctx)
}
