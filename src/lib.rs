//! Mastermind Solver
//!
//! Exact evaluation of one-step-ahead Mastermind strategies. A strategy picks
//! each guess by scoring how it would split the codes still consistent with
//! the feedback so far; the analyzer plays every key to the end and reports
//! how many guesses each one needed.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use mastermind_solver::analysis::summarize;
//! use mastermind_solver::core::CodeSpace;
//! use mastermind_solver::solver::{CandidatePool, StrategyType};
//!
//! let space = CodeSpace::CLASSIC;
//! let strategy =
//!     StrategyType::from_name("worst-case", space, CandidatePool::Unrestricted).unwrap();
//!
//! let distribution = summarize(&strategy, &space.generate()).unwrap();
//! println!("{distribution}: {:.3}", distribution.expected_guesses().unwrap());
//! ```

// Core domain types
pub mod core;

// Guess selection
pub mod solver;

// Game-tree analysis
pub mod analysis;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
