use crate::solver::{
    network::ConstraintNetwork,
    propagator::{prune, Propagator, PropagatorDescriptor},
    trail::Trail,
};

/// A single sweep of the arc-consistency rule: every assigned variable's
/// value is pruned from its unassigned neighbours, and two assigned
/// neighbours holding the same value are a contradiction, as is a wiped-out
/// domain.
///
/// One call makes one pass; it does not iterate to a fixpoint internally.
/// The search re-runs the pipeline after every assignment, so pruning still
/// reaches a fixpoint over the search tree; a domain narrowed in this call
/// is picked up by the next one.
#[derive(Debug, Clone, Copy)]
pub struct ArcConsistency;

impl Propagator for ArcConsistency {
    fn descriptor(&self) -> PropagatorDescriptor {
        PropagatorDescriptor {
            name: "ArcConsistency".to_string(),
            description: "single-pass pruning sweep with assigned-pair conflicts".to_string(),
        }
    }

    fn propagate(&self, network: &mut ConstraintNetwork, trail: &mut Trail) -> bool {
        for id in 0..network.len() {
            let Some(value) = network.variable(id).assignment() else {
                continue;
            };
            let neighbors = network.neighbors_of(id).to_vec();
            for neighbor in neighbors {
                if let Some(other) = network.variable(neighbor).assignment() {
                    if other == value {
                        return false;
                    }
                } else if !prune(network, trail, neighbor, value) {
                    return false;
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::solver::domain::Domain;

    fn triangle(domains: [Domain; 3]) -> ConstraintNetwork {
        ConstraintNetwork::new(domains.to_vec(), &[vec![0, 1, 2]]).unwrap()
    }

    #[test]
    fn prunes_like_forward_checking() {
        let mut network = triangle([
            Domain::singleton(4),
            Domain::new(1..=4),
            Domain::new(1..=4),
        ]);
        let mut trail = Trail::new();
        trail.place_marker();

        assert!(ArcConsistency.propagate(&mut network, &mut trail));
        assert_eq!(network.variable(1).domain(), &Domain::new([1, 2, 3]));
        assert_eq!(network.variable(2).domain(), &Domain::new([1, 2, 3]));
    }

    #[test]
    fn equal_assigned_neighbors_are_a_contradiction() {
        let mut network = triangle([
            Domain::singleton(1),
            Domain::singleton(1),
            Domain::new(1..=4),
        ]);
        let mut trail = Trail::new();
        trail.place_marker();

        assert!(!ArcConsistency.propagate(&mut network, &mut trail));
    }

    #[test]
    fn wipeout_is_a_contradiction() {
        let mut network = triangle([
            Domain::singleton(1),
            Domain::new([1, 2]),
            Domain::singleton(2),
        ]);
        let mut trail = Trail::new();
        trail.place_marker();

        assert!(!ArcConsistency.propagate(&mut network, &mut trail));
        assert!(network.variable(1).domain().is_empty());
    }

    #[test]
    fn one_call_makes_one_pass() {
        // A chain a - b - c: a is assigned, b is narrowed to a singleton by
        // this pass, but b's value only reaches c on a later call.
        let domains = vec![
            Domain::singleton(1),
            Domain::new([1, 2]),
            Domain::new([2, 3]),
        ];
        let mut network =
            ConstraintNetwork::new(domains, &[vec![0, 1], vec![1, 2]]).unwrap();
        let mut trail = Trail::new();
        trail.place_marker();

        assert!(ArcConsistency.propagate(&mut network, &mut trail));
        assert_eq!(network.variable(1).domain(), &Domain::new([2]));
        // Untouched this pass: variable 1 is not *assigned*, only narrowed.
        assert_eq!(network.variable(2).domain(), &Domain::new([2, 3]));
    }
}
