//! Strategies for choosing which unassigned variable to branch on next.

use std::cmp::Reverse;

use crate::solver::network::{ConstraintNetwork, VariableId};

/// A variable-selection heuristic.
///
/// Implementors choose the unassigned variable the solver branches on next;
/// a good choice can shrink the search tree dramatically. Every heuristic is
/// deterministic: ties break on the lowest network-order index.
///
/// # Returns
///
/// * `Some(id)` of the chosen variable while unassigned variables remain.
/// * `None` only when every variable is assigned.
pub trait VariableSelectionHeuristic: std::fmt::Debug {
    fn select_variable(&self, network: &ConstraintNetwork) -> Option<VariableId>;
}

/// Selects the first unassigned variable in network order.
#[derive(Debug, Clone, Copy)]
pub struct SelectFirstHeuristic;

impl VariableSelectionHeuristic for SelectFirstHeuristic {
    fn select_variable(&self, network: &ConstraintNetwork) -> Option<VariableId> {
        network
            .variables()
            .iter()
            .find(|v| !v.is_assigned())
            .map(|v| v.id())
    }
}

/// Minimum remaining values: selects the unassigned variable with the
/// smallest domain.
///
/// A fail-first strategy: the most constrained variable is the most likely
/// to expose a dead branch early.
#[derive(Debug, Clone, Copy)]
pub struct MinimumRemainingValuesHeuristic;

impl VariableSelectionHeuristic for MinimumRemainingValuesHeuristic {
    fn select_variable(&self, network: &ConstraintNetwork) -> Option<VariableId> {
        network
            .variables()
            .iter()
            .filter(|v| !v.is_assigned())
            .min_by_key(|v| (v.domain().len(), v.id()))
            .map(|v| v.id())
    }
}

/// Degree: selects the unassigned variable constrained by the most
/// *unassigned* neighbours, the one whose assignment touches the largest
/// live neighbourhood.
#[derive(Debug, Clone, Copy)]
pub struct DegreeHeuristic;

impl VariableSelectionHeuristic for DegreeHeuristic {
    fn select_variable(&self, network: &ConstraintNetwork) -> Option<VariableId> {
        network
            .variables()
            .iter()
            .filter(|v| !v.is_assigned())
            .max_by_key(|v| {
                let degree = network
                    .neighbors_of(v.id())
                    .iter()
                    .filter(|&&n| !network.variable(n).is_assigned())
                    .count();
                (degree, Reverse(v.id()))
            })
            .map(|v| v.id())
    }
}
