//! Game implementations.

pub mod spin;
pub mod tictactoe;
