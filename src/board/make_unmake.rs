//! Reversible move application.
//!
//! `make_move` pushes an undo record and updates grid, castling flags,
//! en-passant target, and hash atomically; `unmake_move` pops the record
//! and restores every saved field. The hash is restored by assignment from
//! the record, so round-trips are exact even across castling, en passant,
//! and promotion.

use super::state::Board;
use super::types::{CastlingState, Color, Move, Piece, Square};
use super::zobrist::ZOBRIST;

/// One frame of the board's undo stack.
#[derive(Clone, Debug)]
pub(crate) enum Undo {
    Move {
        mv: Move,
        /// Captured piece with the square it stood on (differs from the
        /// destination for en passant).
        captured: Option<(Square, Color, Piece)>,
        en_passant: Option<Square>,
        castling: CastlingState,
        hash: u64,
    },
    Null {
        en_passant: Option<Square>,
        hash: u64,
    },
}

impl Board {
    /// Apply a move returned by the move generator.
    ///
    /// Castling is recognized as a king moving two columns, en passant as
    /// a pawn moving diagonally onto an empty square. Calling this with a
    /// move whose `from` square is empty is a caller bug.
    pub fn make_move(&mut self, mv: Move) {
        let (color, piece) = self.piece_at(mv.from).expect("make_move: 'from' square empty");
        let is_castling = piece == Piece::King && mv.from.col().abs_diff(mv.to.col()) == 2;
        let is_en_passant =
            piece == Piece::Pawn && mv.from.col() != mv.to.col() && self.piece_at(mv.to).is_none();

        // Rights bitmap before any flag mutation; the matching key is
        // XORed out against the post-move bitmap below.
        let old_rights = self.castling.rights_mask();

        let captured = if is_en_passant {
            let cap_sq = Square::new(mv.from.row(), mv.to.col());
            self.piece_at(cap_sq).map(|(c, p)| (cap_sq, c, p))
        } else {
            self.piece_at(mv.to).map(|(c, p)| (mv.to, c, p))
        };

        self.undo_stack.push(Undo::Move {
            mv,
            captured,
            en_passant: self.en_passant,
            castling: self.castling,
            hash: self.hash,
        });

        let mut hash = self.hash;
        hash ^= ZOBRIST.side_to_move;
        if let Some(ep) = self.en_passant {
            hash ^= ZOBRIST.en_passant[ep.col()];
        }

        if let Some((cap_sq, cap_color, cap_piece)) = captured {
            self.grid[cap_sq.row()][cap_sq.col()] = None;
            hash ^= ZOBRIST.pieces[cap_color.index()][cap_piece.index()][cap_sq.index()];
        }

        hash ^= ZOBRIST.pieces[color.index()][piece.index()][mv.from.index()];
        self.grid[mv.from.row()][mv.from.col()] = None;
        let placed = mv.promotion.unwrap_or(piece);
        self.grid[mv.to.row()][mv.to.col()] = Some((color, placed));
        hash ^= ZOBRIST.pieces[color.index()][placed.index()][mv.to.index()];

        if is_castling {
            let row = mv.from.row();
            let (rook_from, rook_to) = if mv.to.col() == 6 {
                (Square::new(row, 7), Square::new(row, 5))
            } else {
                (Square::new(row, 0), Square::new(row, 3))
            };
            let rook = self.piece_at(rook_from).expect("castling without rook");
            self.grid[rook_from.row()][rook_from.col()] = None;
            self.grid[rook_to.row()][rook_to.col()] = Some(rook);
            hash ^= ZOBRIST.pieces[color.index()][Piece::Rook.index()][rook_from.index()];
            hash ^= ZOBRIST.pieces[color.index()][Piece::Rook.index()][rook_to.index()];
        }

        self.en_passant = None;
        if piece == Piece::Pawn && mv.from.row().abs_diff(mv.to.row()) == 2 {
            let ep = Square::new((mv.from.row() + mv.to.row()) / 2, mv.from.col());
            self.en_passant = Some(ep);
            hash ^= ZOBRIST.en_passant[ep.col()];
        }

        if piece == Piece::King {
            self.castling.mark_king_moved(color);
        }
        self.mark_corner(mv.from);
        self.mark_corner(mv.to);

        // The two keys cancel when the bitmap did not change.
        hash ^= ZOBRIST.castling[old_rights as usize];
        hash ^= ZOBRIST.castling[self.castling.rights_mask() as usize];

        self.hash = hash;
    }

    /// Any move from or to an original rook corner invalidates that wing,
    /// covering both the rook leaving and the rook being captured in
    /// place. The corner can only hold a never-moved rook while its flag
    /// is still clear, so marking unconditionally is exact.
    fn mark_corner(&mut self, sq: Square) {
        match (sq.row(), sq.col()) {
            (7, 0) => self.castling.mark_rook_moved(Color::White, false),
            (7, 7) => self.castling.mark_rook_moved(Color::White, true),
            (0, 0) => self.castling.mark_rook_moved(Color::Black, false),
            (0, 7) => self.castling.mark_rook_moved(Color::Black, true),
            _ => {}
        }
    }

    /// Revert the most recent `make_move`. A no-op on an empty undo stack.
    pub fn unmake_move(&mut self) {
        let Some(record) = self.undo_stack.pop() else {
            return;
        };
        match record {
            Undo::Move {
                mv,
                captured,
                en_passant,
                castling,
                hash,
            } => {
                self.hash = hash;
                self.en_passant = en_passant;
                self.castling = castling;

                let (color, piece_now) = self
                    .piece_at(mv.to)
                    .expect("unmake_move: 'to' square empty");
                let original = if mv.promotion.is_some() {
                    Piece::Pawn
                } else {
                    piece_now
                };
                self.grid[mv.to.row()][mv.to.col()] = None;
                self.grid[mv.from.row()][mv.from.col()] = Some((color, original));

                if piece_now == Piece::King && mv.from.col().abs_diff(mv.to.col()) == 2 {
                    let row = mv.to.row();
                    let (rook_from, rook_to) = if mv.to.col() == 6 {
                        (Square::new(row, 7), Square::new(row, 5))
                    } else {
                        (Square::new(row, 0), Square::new(row, 3))
                    };
                    let rook = self
                        .piece_at(rook_to)
                        .expect("unmake_move: castled rook missing");
                    self.grid[rook_to.row()][rook_to.col()] = None;
                    self.grid[rook_from.row()][rook_from.col()] = Some(rook);
                }

                if let Some((cap_sq, cap_color, cap_piece)) = captured {
                    self.grid[cap_sq.row()][cap_sq.col()] = Some((cap_color, cap_piece));
                }
            }
            Undo::Null { en_passant, hash } => {
                self.en_passant = en_passant;
                self.hash = hash;
            }
        }
    }

    /// Pass the turn without moving. Used only by null-move pruning.
    pub fn make_null(&mut self) {
        self.undo_stack.push(Undo::Null {
            en_passant: self.en_passant,
            hash: self.hash,
        });
        self.hash ^= ZOBRIST.side_to_move;
        if let Some(ep) = self.en_passant.take() {
            self.hash ^= ZOBRIST.en_passant[ep.col()];
        }
    }

    /// Revert the most recent `make_null`. A no-op on an empty undo stack.
    pub fn unmake_null(&mut self) {
        let Some(record) = self.undo_stack.pop() else {
            return;
        };
        let Undo::Null { en_passant, hash } = record else {
            unreachable!("unmake_null without matching make_null");
        };
        self.en_passant = en_passant;
        self.hash = hash;
    }
}
