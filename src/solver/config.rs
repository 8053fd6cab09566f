use serde::{Deserialize, Serialize};

use crate::solver::{
    heuristics::{
        value::{InOrderHeuristic, LeastConstrainingValueHeuristic, ValueOrderingHeuristic},
        variable::{
            DegreeHeuristic, MinimumRemainingValuesHeuristic, SelectFirstHeuristic,
            VariableSelectionHeuristic,
        },
    },
    propagator::Propagator,
    propagators::{
        arc_consistency::ArcConsistency, assignment_check::AssignmentCheck,
        forward_checking::ForwardChecking, naked_subset::NakedSubset,
    },
};

/// Which variable-selection heuristic the search uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VariableSelection {
    /// First unassigned variable in network order.
    #[default]
    First,
    MinimumRemainingValues,
    Degree,
}

/// Which value-ordering heuristic the search uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ValueSelection {
    /// Candidate values ascending.
    #[default]
    InOrder,
    LeastConstraining,
}

/// The primary consistency check run after every assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ConsistencyCheck {
    /// Verify assigned neighbours only; no pruning.
    #[default]
    AssignmentOnly,
    ForwardChecking,
    ArcConsistency,
}

/// Additional elimination run alongside the primary check each step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HeuristicCheck {
    #[default]
    None,
    NakedPairs,
    NakedTriples,
    Both,
}

/// The full strategy selection for one solve call.
///
/// Set before calling [`Solver::solve`](crate::solver::engine::Solver::solve)
/// and immutable for its duration. Each axis is resolved into its strategy
/// object once at solve start, never re-branched per node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SolverConfig {
    pub variable_selection: VariableSelection,
    pub value_selection: ValueSelection,
    pub consistency: ConsistencyCheck,
    pub heuristic_check: HeuristicCheck,
}

impl VariableSelection {
    pub(crate) fn build(self) -> Box<dyn VariableSelectionHeuristic> {
        match self {
            Self::First => Box::new(SelectFirstHeuristic),
            Self::MinimumRemainingValues => Box::new(MinimumRemainingValuesHeuristic),
            Self::Degree => Box::new(DegreeHeuristic),
        }
    }
}

impl ValueSelection {
    pub(crate) fn build(self) -> Box<dyn ValueOrderingHeuristic> {
        match self {
            Self::InOrder => Box::new(InOrderHeuristic),
            Self::LeastConstraining => Box::new(LeastConstrainingValueHeuristic),
        }
    }
}

impl SolverConfig {
    /// The propagation pipeline: the primary consistency check followed by
    /// any additional eliminations, in a fixed order.
    pub(crate) fn build_pipeline(self) -> Vec<Box<dyn Propagator>> {
        let mut pipeline: Vec<Box<dyn Propagator>> = vec![match self.consistency {
            ConsistencyCheck::AssignmentOnly => Box::new(AssignmentCheck),
            ConsistencyCheck::ForwardChecking => Box::new(ForwardChecking),
            ConsistencyCheck::ArcConsistency => Box::new(ArcConsistency),
        }];
        match self.heuristic_check {
            HeuristicCheck::None => {}
            HeuristicCheck::NakedPairs => pipeline.push(Box::new(NakedSubset::pairs())),
            HeuristicCheck::NakedTriples => pipeline.push(Box::new(NakedSubset::triples())),
            HeuristicCheck::Both => {
                pipeline.push(Box::new(NakedSubset::pairs()));
                pipeline.push(Box::new(NakedSubset::triples()));
            }
        }
        pipeline
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults_match_plain_backtracking() {
        let config = SolverConfig::default();
        assert_eq!(config.variable_selection, VariableSelection::First);
        assert_eq!(config.value_selection, ValueSelection::InOrder);
        assert_eq!(config.consistency, ConsistencyCheck::AssignmentOnly);
        assert_eq!(config.heuristic_check, HeuristicCheck::None);
    }

    #[test]
    fn the_pipeline_orders_primary_then_heuristic_checks() {
        let config = SolverConfig {
            consistency: ConsistencyCheck::ForwardChecking,
            heuristic_check: HeuristicCheck::Both,
            ..SolverConfig::default()
        };
        let pipeline = config.build_pipeline();
        let names: Vec<String> = pipeline.iter().map(|p| p.descriptor().name).collect();
        assert_eq!(names, vec!["ForwardChecking", "NakedPairs", "NakedTriples"]);
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = SolverConfig {
            variable_selection: VariableSelection::MinimumRemainingValues,
            value_selection: ValueSelection::LeastConstraining,
            consistency: ConsistencyCheck::ArcConsistency,
            heuristic_check: HeuristicCheck::NakedPairs,
        };
        let encoded = serde_json::to_string(&config).unwrap();
        let decoded: SolverConfig = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, config);
    }
}
