//! Search: iterative deepening driving a parallel root split over a
//! negamax alpha-beta core.
//!
//! Features:
//! - Iterative deepening with the previous best move seeding the ordering
//! - Principal-variation search with null-window probes
//! - Null-move pruning with a pawn-endgame guard
//! - Quiescence extension over captures and promotions
//! - Shared lock-free transposition table
//! - Root moves evaluated in parallel on private board clones

mod alphabeta;
mod move_order;
mod root;

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use crate::board::{Board, Color, Move};
use crate::tt::TranspositionTable;

/// Score of a mate at the root, in centipawns (10 000 pawn units). Mates
/// found at ply p score `MATE_SCORE - p`, so shallower mates win.
pub const MATE_SCORE: i32 = 1_000_000;

/// Scores at or beyond this magnitude encode a forced mate.
pub const MATE_THRESHOLD: i32 = MATE_SCORE - 1_000;

/// Window bound strictly above any reachable score.
pub(crate) const INFINITY: i32 = 2_000_000;

/// Default transposition-table size in megabytes.
pub const DEFAULT_TT_MB: usize = 64;

/// Outcome of a search. `best_move` is `None` iff the side to move has no
/// legal moves (checkmate or stalemate, distinguished by
/// `Board::is_king_in_check`); the score is then 0.
#[derive(Clone, Copy, Debug)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    /// Evaluation in pawn units from the searching side's perspective.
    pub score: f64,
}

/// A reusable search driver owning the transposition table. The table
/// persists across calls, so consecutive searches of nearby positions
/// start warm.
pub struct Searcher {
    tt: TranspositionTable,
    threads: usize,
}

impl Searcher {
    /// Create a searcher with a transposition table of roughly `tt_mb`
    /// megabytes and a thread pool sized to the available hardware
    /// parallelism (fallback 2).
    #[must_use]
    pub fn new(tt_mb: usize) -> Self {
        let threads = std::thread::available_parallelism().map_or(2, std::num::NonZeroUsize::get);
        Searcher::with_threads(tt_mb, threads)
    }

    /// Create a searcher with a pinned thread count. One thread makes the
    /// search fully deterministic.
    #[must_use]
    pub fn with_threads(tt_mb: usize, threads: usize) -> Self {
        Searcher {
            tt: TranspositionTable::new(tt_mb),
            threads: threads.max(1),
        }
    }

    /// Find the best move for `side` searching to `max_depth` plies.
    ///
    /// Runs iterative deepening from depth 1; each iteration evaluates
    /// every root move with a full window (in parallel when worthwhile)
    /// and keeps the maximum. The caller's board is never mutated.
    #[must_use]
    pub fn find_best_move(&self, board: &Board, side: Color, max_depth: u32) -> SearchResult {
        let mut root = board.fresh_clone();
        let mut moves = root.legal_moves(side);
        if moves.is_empty() {
            return SearchResult {
                best_move: None,
                score: 0.0,
            };
        }

        let start = Instant::now();
        let nodes = AtomicU64::new(0);
        let mut best: Option<(Move, i32)> = None;

        for depth in 1..=max_depth.max(1) {
            move_order::order_moves(&mut root, &mut moves, None, side);
            if let Some((prev_best, _)) = best {
                if let Some(pos) = moves.iter().position(|&m| m == prev_best) {
                    moves[..=pos].rotate_right(1);
                }
            }

            let scored = root::search_root(&root, side, &moves, depth, &self.tt, &nodes, self.threads);

            // Maximum score, first root move on ties.
            let mut iteration_best: Option<(Move, i32)> = None;
            for (mv, score) in scored {
                if iteration_best.map_or(true, |(_, s)| score > s) {
                    iteration_best = Some((mv, score));
                }
            }
            best = iteration_best.or(best);

            if let Some((mv, score)) = best {
                log::debug!(
                    "depth {depth} best {mv} score {score}cp nodes {} elapsed {:?}",
                    nodes.load(Ordering::Relaxed),
                    start.elapsed(),
                );
            }
        }

        match best {
            Some((mv, score)) => SearchResult {
                best_move: Some(mv),
                score: f64::from(score) / 100.0,
            },
            None => SearchResult {
                best_move: None,
                score: 0.0,
            },
        }
    }
}
