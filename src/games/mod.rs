//! Concrete games.
//!
//! - `subtract_square`: Subtract perfect squares from a shared counter
//! - `chopsticks`: Finger-counting game with four hands, modulo 5

pub mod chopsticks;
pub mod subtract_square;
