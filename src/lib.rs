//! Filum is a backtracking solver for finite-domain constraint satisfaction
//! problems with uniqueness constraints: grid puzzles where every row,
//! column and block must hold distinct values.
//!
//! The engine is a depth-first search over an explicitly mutable constraint
//! network, with an undo trail as its backbone: every domain mutation made
//! by a propagator is recorded against a per-trial marker, so abandoning a
//! candidate rolls the whole network back in O(changes) instead of cloning
//! state per node.
//!
//! # Core Concepts
//!
//! - **[`Board`]**: the boundary representation of a puzzle, translated into
//!   a [`ConstraintNetwork`] of variables, domains and adjacency.
//! - **[`Trail`]**: the undo log enabling cheap backtracking.
//! - **[`Propagator`]**: a consistency check run after every assignment,
//!   from a plain assignment check up to forward checking, arc consistency
//!   and naked-subset elimination.
//! - **[`SolverConfig`]**: selects the variable- and value-ordering
//!   heuristics and the propagation pipeline for one solve call.
//!
//! [`Board`]: crate::board::Board
//! [`ConstraintNetwork`]: crate::solver::network::ConstraintNetwork
//! [`Trail`]: crate::solver::trail::Trail
//! [`Propagator`]: crate::solver::propagator::Propagator
//! [`SolverConfig`]: crate::solver::config::SolverConfig
//!
//! # Example: closing the last hole in a 4x4 grid
//!
//! ```
//! use filum::board::Board;
//! use filum::solver::config::SolverConfig;
//! use filum::solver::engine::Solver;
//!
//! let cells = vec![
//!     0, 2, 3, 4,
//!     3, 4, 1, 2,
//!     2, 1, 4, 3,
//!     4, 3, 2, 1,
//! ];
//! let board = Board::new(2, 2, cells).unwrap();
//!
//! let solver = Solver::new(SolverConfig::default());
//! let report = solver.solve(&board).unwrap();
//!
//! assert!(report.solved);
//! assert_eq!(report.board.value(0, 0), 1);
//! assert_eq!(report.stats.assignments, 1);
//! assert_eq!(report.stats.backtracks, 0);
//! ```

pub mod board;
pub mod error;
pub mod solver;
