//! Core domain types for Mastermind
//!
//! This module contains the fundamental value types: codes, feedback, and the
//! code space they are drawn from. Everything here is pure and immutable.

mod code;
mod error;
mod feedback;
mod space;

pub use code::{Code, MAX_COLORS, MAX_PEGS};
pub use error::SolverError;
pub use feedback::Feedback;
pub use space::CodeSpace;
