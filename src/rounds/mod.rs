//! Rounds and how they are generated.

mod generator;
mod round;

pub use generator::generate_round;
pub use round::Round;
