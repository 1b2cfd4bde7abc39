//! Parallel root split.
//!
//! Each root move is searched with a full window on a private clone of the
//! root board, so workers share no mutable state except the lock-free
//! transposition table. Results are reduced to the maximum score; the
//! reduction is order-independent because every move gets an exact,
//! window-independent search.

use std::sync::atomic::AtomicU64;
use std::thread;

use crate::board::{Board, Color, Move};
use crate::tt::TranspositionTable;

use super::alphabeta::{search_move_full_window, SearchContext};

/// Score every root move at `depth`, returning `(move, score)` pairs in
/// root-move order. Splits across scoped threads unless the position is
/// trivially small or the pool has a single thread.
pub(crate) fn search_root(
    board: &Board,
    side: Color,
    moves: &[Move],
    depth: u32,
    tt: &TranspositionTable,
    nodes: &AtomicU64,
    threads: usize,
) -> Vec<(Move, i32)> {
    let workers = if moves.len() <= 2 || threads <= 1 {
        1
    } else {
        threads.min(moves.len())
    };

    if workers == 1 {
        let ctx = SearchContext { tt, nodes };
        return moves
            .iter()
            .map(|&mv| (mv, score_root_move(board, side, mv, depth, &ctx)))
            .collect();
    }

    let mut indexed: Vec<(usize, Move, i32)> = thread::scope(|scope| {
        let handles: Vec<_> = (0..workers)
            .map(|worker| {
                scope.spawn(move || {
                    let ctx = SearchContext { tt, nodes };
                    moves
                        .iter()
                        .enumerate()
                        .skip(worker)
                        .step_by(workers)
                        .map(|(i, &mv)| (i, mv, score_root_move(board, side, mv, depth, &ctx)))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        handles
            .into_iter()
            .flat_map(|handle| handle.join().expect("search worker panicked"))
            .collect()
    });

    indexed.sort_by_key(|&(i, _, _)| i);
    indexed.into_iter().map(|(_, mv, score)| (mv, score)).collect()
}

fn score_root_move(
    board: &Board,
    side: Color,
    mv: Move,
    depth: u32,
    ctx: &SearchContext<'_>,
) -> i32 {
    let mut local = board.fresh_clone();
    local.make_move(mv);
    -search_move_full_window(&mut local, side.opposite(), depth - 1, ctx)
}
