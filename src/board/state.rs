//! Board state and occupancy queries.

use super::make_unmake::Undo;
use super::types::{CastlingState, Color, Piece, Square};
use super::zobrist::ZOBRIST;

const KNIGHT_DELTAS: [(isize, isize); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

const KING_DELTAS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub(crate) const ORTHOGONAL_DIRS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub(crate) const DIAGONAL_DIRS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const ALL_DIRS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// The mutable position: an 8x8 occupancy grid, castling has-moved flags,
/// en-passant target, incrementally maintained Zobrist hash, and the undo
/// stack for reversible `make`/`unmake`.
///
/// The board does not track the side to move; operations take the acting
/// color and the hash flips the side key on every `make`. Rows run from
/// Black's back rank (row 0) to White's back rank (row 7).
#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) grid: [[Option<(Color, Piece)>; 8]; 8],
    pub(crate) castling: CastlingState,
    pub(crate) en_passant: Option<Square>,
    pub(crate) hash: u64,
    pub(crate) undo_stack: Vec<Undo>,
}

impl Board {
    /// The standard starting position, White to move, with the initial
    /// hash computed.
    #[must_use]
    pub fn new() -> Self {
        let mut grid = [[None; 8]; 8];
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (col, &piece) in back_rank.iter().enumerate() {
            grid[0][col] = Some((Color::Black, piece));
            grid[1][col] = Some((Color::Black, Piece::Pawn));
            grid[6][col] = Some((Color::White, Piece::Pawn));
            grid[7][col] = Some((Color::White, piece));
        }

        let mut board = Board {
            grid,
            castling: CastlingState::initial(),
            en_passant: None,
            hash: 0,
            undo_stack: Vec::new(),
        };
        board.hash = board.recompute_hash(Color::White);
        board
    }

    /// An empty board with no pieces; used by FEN parsing.
    pub(crate) fn empty() -> Self {
        Board {
            grid: [[None; 8]; 8],
            castling: CastlingState::all_moved(),
            en_passant: None,
            hash: 0,
            undo_stack: Vec::new(),
        }
    }

    /// A deep copy with a fresh, empty undo stack. Root-split workers
    /// search on these.
    #[must_use]
    pub(crate) fn fresh_clone(&self) -> Self {
        Board {
            grid: self.grid,
            castling: self.castling,
            en_passant: self.en_passant,
            hash: self.hash,
            undo_stack: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.grid[sq.row()][sq.col()]
    }

    #[inline]
    #[must_use]
    pub fn color_at(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|(color, _)| color)
    }

    /// Current en-passant target square, if the previous move was a double
    /// pawn push.
    #[inline]
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant
    }

    #[inline]
    #[must_use]
    pub fn castling_state(&self) -> CastlingState {
        self.castling
    }

    /// Incrementally maintained Zobrist hash of the position.
    #[inline]
    #[must_use]
    pub fn hash_key(&self) -> u64 {
        self.hash
    }

    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        for row in 0..8 {
            for col in 0..8 {
                if self.grid[row][col] == Some((color, Piece::King)) {
                    return Some(Square::new(row, col));
                }
            }
        }
        None
    }

    /// Whether any piece of `attacker` attacks `sq`: pawn diagonals,
    /// knight offsets, king adjacency, and sliding rays for
    /// bishop/rook/queen.
    #[must_use]
    pub fn is_square_attacked_by(&self, sq: Square, attacker: Color) -> bool {
        let row = sq.row() as isize;
        let col = sq.col() as isize;

        // A pawn attacks diagonally forward, so the attacker sits one row
        // behind the target along its own direction of travel.
        let pawn_dir: isize = match attacker {
            Color::White => -1,
            Color::Black => 1,
        };
        for dc in [-1, 1] {
            if let Some(from) = Square::try_new(row - pawn_dir, col + dc) {
                if self.piece_at(from) == Some((attacker, Piece::Pawn)) {
                    return true;
                }
            }
        }

        for (dr, dc) in KNIGHT_DELTAS {
            if let Some(from) = Square::try_new(row + dr, col + dc) {
                if self.piece_at(from) == Some((attacker, Piece::Knight)) {
                    return true;
                }
            }
        }

        for (dr, dc) in KING_DELTAS {
            if let Some(from) = Square::try_new(row + dr, col + dc) {
                if self.piece_at(from) == Some((attacker, Piece::King)) {
                    return true;
                }
            }
        }

        for (i, &(dr, dc)) in ALL_DIRS.iter().enumerate() {
            let diagonal = i >= 4;
            let mut r = row + dr;
            let mut c = col + dc;
            while let Some(from) = Square::try_new(r, c) {
                if let Some((color, piece)) = self.piece_at(from) {
                    if color == attacker {
                        let reaches = match piece {
                            Piece::Queen => true,
                            Piece::Rook => !diagonal,
                            Piece::Bishop => diagonal,
                            _ => false,
                        };
                        if reaches {
                            return true;
                        }
                    }
                    break;
                }
                r += dr;
                c += dc;
            }
        }

        false
    }

    #[must_use]
    pub fn is_king_in_check(&self, color: Color) -> bool {
        match self.find_king(color) {
            Some(king_sq) => self.is_square_attacked_by(king_sq, color.opposite()),
            None => false,
        }
    }

    /// Whether `color` still has a knight, bishop, rook, or queen. Used by
    /// the null-move guard against pawn-endgame zugzwang.
    #[must_use]
    pub(crate) fn has_non_pawn_material(&self, color: Color) -> bool {
        for row in 0..8 {
            for col in 0..8 {
                if let Some((c, piece)) = self.grid[row][col] {
                    if c == color && piece != Piece::Pawn && piece != Piece::King {
                        return true;
                    }
                }
            }
        }
        false
    }

    /// Recompute the Zobrist hash from scratch for the given side to move.
    /// The incremental hash must always equal this.
    #[must_use]
    pub fn recompute_hash(&self, side_to_move: Color) -> u64 {
        let mut hash = 0u64;
        for row in 0..8 {
            for col in 0..8 {
                if let Some((color, piece)) = self.grid[row][col] {
                    hash ^= ZOBRIST.pieces[color.index()][piece.index()][row * 8 + col];
                }
            }
        }
        hash ^= ZOBRIST.castling[self.castling.rights_mask() as usize];
        if let Some(ep) = self.en_passant {
            hash ^= ZOBRIST.en_passant[ep.col()];
        }
        if side_to_move == Color::Black {
            hash ^= ZOBRIST.side_to_move;
        }
        hash
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
