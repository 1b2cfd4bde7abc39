//! Unit and property tests for the board, move generator, and evaluator.
