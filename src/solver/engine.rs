use std::time::Instant;

use serde::Serialize;
use tracing::{debug, trace};

use crate::{
    board::Board,
    error::{Error, Result},
    solver::{
        config::SolverConfig,
        heuristics::{value::ValueOrderingHeuristic, variable::VariableSelectionHeuristic},
        network::ConstraintNetwork,
        propagator::Propagator,
        stats::{PropagatorStats, SearchStats},
        trail::Trail,
    },
};

/// The outcome of one solve call.
///
/// On success `board` is the solved grid; on an unsatisfiable puzzle it is
/// the input board, unchanged.
#[derive(Debug, Clone, Serialize)]
pub struct SolveReport {
    pub solved: bool,
    pub board: Board,
    pub stats: SearchStats,
}

/// Depth-first backtracking search over a constraint network.
///
/// The solver composes a variable-selection heuristic, a value-ordering
/// heuristic and a propagation pipeline, all chosen through
/// [`SolverConfig`] and resolved once per solve call. Each candidate trial
/// places one trail marker, assigns, propagates, and either recurses or is
/// rolled back to that marker; the first complete assignment wins and
/// short-circuits all enclosing levels.
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solves `board`, returning the solved grid or the unchanged input
    /// when no solution exists.
    ///
    /// # Errors
    ///
    /// Only engine invariant violations surface as errors; an unsatisfiable
    /// board is reported through [`SolveReport::solved`].
    pub fn solve(&self, board: &Board) -> Result<SolveReport> {
        let started = Instant::now();
        debug!(config = ?self.config, "starting solve");

        let network = ConstraintNetwork::from_board(board)?;
        let mut search = Search::new(network, self.config);
        search.run()?;

        let mut stats = search.stats;
        stats.duration = started.elapsed();
        debug!(
            solved = search.solution_found,
            assignments = stats.assignments,
            backtracks = stats.backtracks,
            "solve finished"
        );

        let board = if search.solution_found {
            Board::from_network(&search.network, board.block_rows(), board.block_cols())
        } else {
            board.clone()
        };
        Ok(SolveReport {
            solved: search.solution_found,
            board,
            stats,
        })
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}

/// One solve call's worth of state: the network being mutated, the trail
/// that can unwind it, the resolved strategies and the counters.
struct Search {
    network: ConstraintNetwork,
    trail: Trail,
    variable_heuristic: Box<dyn VariableSelectionHeuristic>,
    value_heuristic: Box<dyn ValueOrderingHeuristic>,
    propagators: Vec<Box<dyn Propagator>>,
    stats: SearchStats,
    solution_found: bool,
}

impl Search {
    fn new(network: ConstraintNetwork, config: SolverConfig) -> Self {
        let propagators = config.build_pipeline();
        let stats = SearchStats {
            propagators: propagators
                .iter()
                .map(|p| {
                    let descriptor = p.descriptor();
                    PropagatorStats {
                        name: descriptor.name,
                        description: descriptor.description,
                        ..PropagatorStats::default()
                    }
                })
                .collect(),
            ..SearchStats::default()
        };
        Self {
            network,
            trail: Trail::new(),
            variable_heuristic: config.variable_selection.build(),
            value_heuristic: config.value_selection.build(),
            propagators,
            stats,
            solution_found: false,
        }
    }

    /// Runs the pipeline once up front to settle the givens, then searches.
    /// On success the trail is committed; on failure (or a refuted board)
    /// every mutation is unwound, leaving the network at its input state.
    fn run(&mut self) -> Result<()> {
        self.trail.place_marker();
        if self.propagate() {
            self.solve_level(0)?;
        }
        if self.solution_found {
            self.trail.clear();
        } else {
            self.trail.undo_to_last_marker(&mut self.network)?;
        }
        Ok(())
    }

    fn solve_level(&mut self, level: usize) -> Result<()> {
        if self.solution_found {
            return Ok(());
        }

        let Some(variable) = self.variable_heuristic.select_variable(&self.network) else {
            let unassigned = self.network.unassigned_count();
            if unassigned > 0 {
                return Err(Error::VariableSelection { unassigned });
            }
            trace!(level, "complete assignment reached");
            self.solution_found = true;
            return Ok(());
        };

        for value in self.value_heuristic.order_values(variable, &self.network) {
            trace!(level, variable, value, "trying candidate");
            self.trail.place_marker();
            self.trail
                .record(variable, self.network.variable(variable).domain().clone());
            self.network.variable_mut(variable).assign(value);
            self.stats.assignments += 1;

            if self.propagate() {
                self.solve_level(level + 1)?;
            }
            if self.solution_found {
                return Ok(());
            }

            self.trail.undo_to_last_marker(&mut self.network)?;
            self.network.variable_mut(variable).unassign();
            self.stats.backtracks += 1;
        }
        Ok(())
    }

    /// Runs the pipeline in order, stopping at the first contradiction.
    /// Prunings are measured as trail growth.
    fn propagate(&mut self) -> bool {
        for (index, propagator) in self.propagators.iter().enumerate() {
            let recorded_before = self.trail.len();
            let started = Instant::now();
            let consistent = propagator.propagate(&mut self.network, &mut self.trail);

            let entry = &mut self.stats.propagators[index];
            entry.calls += 1;
            entry.time_spent_micros += started.elapsed().as_micros() as u64;
            entry.prunings += (self.trail.len() - recorded_before) as u64;

            if !consistent {
                return false;
            }
        }
        true
    }
}
