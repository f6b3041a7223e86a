//! Exact evaluation of strategies over a whole code space
//!
//! Walks the implicit game tree of a strategy and reduces it to the number of
//! keys solved in each number of guesses.

mod distribution;
mod tree;

pub use distribution::{GuessDistribution, expected_guesses};
pub use tree::summarize;
