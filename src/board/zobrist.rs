//! Zobrist key tables.
//!
//! A process-wide table of 64-bit keys generated once from a fixed seed,
//! so hashes are identical across runs and platforms. The hash of a
//! position is the XOR of the piece key for every occupied square, the
//! castling key for the current rights bitmap, the en-passant key for the
//! current target file (if any), and the side key iff Black is to move.

use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Fixed seed keeping the key tables reproducible for test vectors.
const ZOBRIST_SEED: u64 = 0x9E37_79B9_7F4A_7C15;

pub(crate) struct ZobristKeys {
    /// Indexed by [color][piece][square index].
    pub pieces: [[[u64; 64]; 6]; 2],
    /// XORed in iff Black is to move.
    pub side_to_move: u64,
    /// Indexed by the 4-bit castling rights bitmap.
    pub castling: [u64; 16],
    /// Indexed by en-passant target file.
    pub en_passant: [u64; 8],
}

pub(crate) static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(|| {
    let mut rng = StdRng::seed_from_u64(ZOBRIST_SEED);
    let mut keys = ZobristKeys {
        pieces: [[[0; 64]; 6]; 2],
        side_to_move: 0,
        castling: [0; 16],
        en_passant: [0; 8],
    };
    for color in 0..2 {
        for piece in 0..6 {
            for sq in 0..64 {
                keys.pieces[color][piece][sq] = rng.gen();
            }
        }
    }
    keys.side_to_move = rng.gen();
    for mask in 0..16 {
        keys.castling[mask] = rng.gen();
    }
    for file in 0..8 {
        keys.en_passant[file] = rng.gen();
    }
    keys
});
