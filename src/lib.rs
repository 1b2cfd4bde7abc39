//! Chess search and evaluation core.
//!
//! Provides the engine internals behind a playing shell:
//! - Mailbox (8x8 grid) board with reversible `make`/`unmake` and an
//!   incrementally maintained Zobrist hash
//! - Full legal move generation (castling, en passant, promotion)
//! - Tapered static evaluation (material, piece-square tables, pawn
//!   structure, mobility, king safety)
//! - Iterative-deepening alpha-beta with a shared transposition table,
//!   quiescence, null-move pruning, PVS, and a parallel root split
//!
//! The board does not track whose turn it is; callers pass the acting
//! color, and the host shell owns game orchestration, draw rules, and any
//! user interface.
//!
//! # Quick start
//!
//! ```
//! use caissa::board::{Board, Color};
//! use caissa::search::Searcher;
//!
//! let board = Board::new();
//!
//! let searcher = Searcher::new(64);
//! let result = searcher.find_best_move(&board, Color::White, 3);
//! if let Some(best) = result.best_move {
//!     println!("best move: {best}, eval: {:.2} pawns", result.score);
//! }
//! ```
//!
//! # Building positions
//!
//! ```
//! use caissa::board::{Board, Color};
//!
//! let (board, side) = Board::from_fen(
//!     "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1",
//! ).unwrap();
//! assert_eq!(side, Color::Black);
//! assert!(board.en_passant_target().is_some());
//! ```
//!
//! # Features
//!
//! - `serde` - derive `Serialize`/`Deserialize` for the plain value types

#![warn(clippy::pedantic)]
// Chess engines index boards and tables with casts everywhere; these are
// all bounded by construction.
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
// Evaluation tables read better as plain rows.
#![allow(clippy::large_stack_arrays)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod board;
pub mod eval;
pub mod search;
pub mod tt;
