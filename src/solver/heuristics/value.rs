//! Strategies for ordering the candidate values tried at a search node.

use crate::solver::{
    domain::CellValue,
    network::{ConstraintNetwork, VariableId},
};

/// A value-ordering heuristic: given the variable being branched on, returns
/// its candidate values in the order they should be tried. The returned
/// sequence is consumed once per search node.
pub trait ValueOrderingHeuristic: std::fmt::Debug {
    fn order_values(&self, variable: VariableId, network: &ConstraintNetwork) -> Vec<CellValue>;
}

/// Candidate values in ascending order.
#[derive(Debug, Clone, Copy)]
pub struct InOrderHeuristic;

impl ValueOrderingHeuristic for InOrderHeuristic {
    fn order_values(&self, variable: VariableId, network: &ConstraintNetwork) -> Vec<CellValue> {
        network.variable(variable).domain().iter().collect()
    }
}

/// Least constraining value: candidates ordered by how rarely they appear in
/// the neighbours' domains, rarest first.
///
/// A value few neighbours still admit removes the least from their options
/// when assigned, so it is the least likely to force a future contradiction.
/// Ties break on ascending value.
#[derive(Debug, Clone, Copy)]
pub struct LeastConstrainingValueHeuristic;

impl ValueOrderingHeuristic for LeastConstrainingValueHeuristic {
    fn order_values(&self, variable: VariableId, network: &ConstraintNetwork) -> Vec<CellValue> {
        let mut values: Vec<CellValue> = network.variable(variable).domain().iter().collect();
        values.sort_by_key(|&value| {
            network
                .neighbors_of(variable)
                .iter()
                .filter(|&&n| network.variable(n).domain().contains(value))
                .count()
        });
        values
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::solver::domain::Domain;

    #[test]
    fn in_order_is_ascending() {
        let network =
            ConstraintNetwork::new(vec![Domain::new([4, 2, 1, 3])], &[]).unwrap();
        assert_eq!(
            InOrderHeuristic.order_values(0, &network),
            vec![1, 2, 3, 4]
        );
    }

    #[test]
    fn lcv_tries_the_rarest_value_first() {
        // 1 appears in both neighbours' domains, 2 in one, 3 in neither.
        let domains = vec![
            Domain::new([1, 2, 3]),
            Domain::new([1, 2, 4]),
            Domain::new([1, 4]),
        ];
        let network = ConstraintNetwork::new(domains, &[vec![0, 1, 2]]).unwrap();

        assert_eq!(
            LeastConstrainingValueHeuristic.order_values(0, &network),
            vec![3, 2, 1]
        );
    }

    #[test]
    fn lcv_ties_break_on_ascending_value() {
        let domains = vec![Domain::new([1, 2]), Domain::new([1, 2])];
        let network = ConstraintNetwork::new(domains, &[vec![0, 1]]).unwrap();

        assert_eq!(
            LeastConstrainingValueHeuristic.order_values(0, &network),
            vec![1, 2]
        );
    }

    #[test]
    fn lcv_is_deterministic_for_identical_states() {
        let build = || {
            let domains = vec![
                Domain::new(1..=4),
                Domain::new([2, 3]),
                Domain::new([3, 4]),
            ];
            ConstraintNetwork::new(domains, &[vec![0, 1, 2]]).unwrap()
        };
        let first = LeastConstrainingValueHeuristic.order_values(0, &build());
        let second = LeastConstrainingValueHeuristic.order_values(0, &build());
        assert_eq!(first, second);
    }
}
