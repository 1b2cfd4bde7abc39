//! FEN parsing and formatting.
//!
//! The board does not store the side to move, so `from_fen` hands it back
//! alongside the position. Halfmove and fullmove counters are accepted and
//! ignored; `to_fen` re-emits them as `0 1`.

use super::error::FenError;
use super::state::Board;
use super::types::{CastlingState, Color, Piece, Square};

impl Board {
    /// Parse a FEN string into a board and the side to move.
    pub fn from_fen(fen: &str) -> Result<(Board, Color), FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        let mut board = Board::empty();

        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::BadRankCount { found: ranks.len() });
        }
        // FEN lists rank 8 first, which is row 0 here.
        for (row, rank_str) in ranks.iter().enumerate() {
            let mut col = 0;
            for ch in rank_str.chars() {
                if let Some(skip) = ch.to_digit(10) {
                    col += skip as usize;
                    continue;
                }
                if col >= 8 {
                    return Err(FenError::TooManyFiles { rank: row });
                }
                let color = if ch.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                let piece = Piece::from_char(ch.to_ascii_lowercase())
                    .ok_or(FenError::InvalidPiece { ch })?;
                board.grid[row][col] = Some((color, piece));
                col += 1;
            }
            if col > 8 {
                return Err(FenError::TooManyFiles { rank: row });
            }
        }

        let side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        let mut castling = CastlingState::all_moved();
        if parts[2] != "-" {
            for ch in parts[2].chars() {
                match ch {
                    'K' => castling.grant_right(Color::White, true),
                    'Q' => castling.grant_right(Color::White, false),
                    'k' => castling.grant_right(Color::Black, true),
                    'q' => castling.grant_right(Color::Black, false),
                    _ => return Err(FenError::InvalidCastling { ch }),
                }
            }
        }
        board.castling = castling;

        if parts[3] != "-" {
            board.en_passant = Some(parts[3].parse::<Square>().map_err(|_| {
                FenError::InvalidEnPassant {
                    found: parts[3].to_string(),
                }
            })?);
        }

        board.hash = board.recompute_hash(side_to_move);
        Ok((board, side_to_move))
    }

    /// Format the position as FEN for the given side to move.
    #[must_use]
    pub fn to_fen(&self, side_to_move: Color) -> String {
        let mut fen = String::new();
        for row in 0..8 {
            if row > 0 {
                fen.push('/');
            }
            let mut empty = 0;
            for col in 0..8 {
                match self.grid[row][col] {
                    None => empty += 1,
                    Some((color, piece)) => {
                        if empty > 0 {
                            fen.push(char::from_digit(empty, 10).unwrap_or('0'));
                            empty = 0;
                        }
                        let ch = piece.to_char();
                        fen.push(match color {
                            Color::White => ch.to_ascii_uppercase(),
                            Color::Black => ch,
                        });
                    }
                }
            }
            if empty > 0 {
                fen.push(char::from_digit(empty, 10).unwrap_or('0'));
            }
        }

        fen.push(' ');
        fen.push(match side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        });

        fen.push(' ');
        let mut any_right = false;
        for (color, kingside, ch) in [
            (Color::White, true, 'K'),
            (Color::White, false, 'Q'),
            (Color::Black, true, 'k'),
            (Color::Black, false, 'q'),
        ] {
            if self.castling.can_castle(color, kingside) {
                fen.push(ch);
                any_right = true;
            }
        }
        if !any_right {
            fen.push('-');
        }

        fen.push(' ');
        match self.en_passant {
            Some(sq) => fen.push_str(&sq.to_string()),
            None => fen.push('-'),
        }

        fen.push_str(" 0 1");
        fen
    }
}
