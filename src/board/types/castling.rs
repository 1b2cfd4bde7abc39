//! Castling state: has-moved flags and derived rights.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;

/// Has-moved flags for both kings and all four original rooks.
///
/// A side may castle on a wing iff neither its king nor the rook on that
/// wing has moved. The flags are monotonic within a search line; `unmake`
/// restores them wholesale from the undo record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingState {
    white_king_moved: bool,
    black_king_moved: bool,
    white_rook_a_moved: bool,
    white_rook_h_moved: bool,
    black_rook_a_moved: bool,
    black_rook_h_moved: bool,
}

impl CastlingState {
    /// Fresh game state: nothing has moved.
    #[must_use]
    pub const fn initial() -> Self {
        CastlingState {
            white_king_moved: false,
            black_king_moved: false,
            white_rook_a_moved: false,
            white_rook_h_moved: false,
            black_rook_a_moved: false,
            black_rook_h_moved: false,
        }
    }

    /// State with every flag set; used as the base when parsing FEN
    /// castling fields, which then clear flags per granted right.
    #[must_use]
    pub(crate) const fn all_moved() -> Self {
        CastlingState {
            white_king_moved: true,
            black_king_moved: true,
            white_rook_a_moved: true,
            white_rook_h_moved: true,
            black_rook_a_moved: true,
            black_rook_h_moved: true,
        }
    }

    #[inline]
    #[must_use]
    pub const fn can_castle(self, color: Color, kingside: bool) -> bool {
        match (color, kingside) {
            (Color::White, true) => !self.white_king_moved && !self.white_rook_h_moved,
            (Color::White, false) => !self.white_king_moved && !self.white_rook_a_moved,
            (Color::Black, true) => !self.black_king_moved && !self.black_rook_h_moved,
            (Color::Black, false) => !self.black_king_moved && !self.black_rook_a_moved,
        }
    }

    pub(crate) fn mark_king_moved(&mut self, color: Color) {
        match color {
            Color::White => self.white_king_moved = true,
            Color::Black => self.black_king_moved = true,
        }
    }

    pub(crate) fn mark_rook_moved(&mut self, color: Color, kingside: bool) {
        match (color, kingside) {
            (Color::White, true) => self.white_rook_h_moved = true,
            (Color::White, false) => self.white_rook_a_moved = true,
            (Color::Black, true) => self.black_rook_h_moved = true,
            (Color::Black, false) => self.black_rook_a_moved = true,
        }
    }

    pub(crate) fn grant_right(&mut self, color: Color, kingside: bool) {
        match color {
            Color::White => self.white_king_moved = false,
            Color::Black => self.black_king_moved = false,
        }
        match (color, kingside) {
            (Color::White, true) => self.white_rook_h_moved = false,
            (Color::White, false) => self.white_rook_a_moved = false,
            (Color::Black, true) => self.black_rook_h_moved = false,
            (Color::Black, false) => self.black_rook_a_moved = false,
        }
    }

    /// 4-bit rights bitmap indexing the Zobrist castling keys:
    /// WK << 3 | WQ << 2 | BK << 1 | BQ.
    #[must_use]
    pub(crate) fn rights_mask(self) -> u8 {
        (u8::from(self.can_castle(Color::White, true)) << 3)
            | (u8::from(self.can_castle(Color::White, false)) << 2)
            | (u8::from(self.can_castle(Color::Black, true)) << 1)
            | u8::from(self.can_castle(Color::Black, false))
    }
}
