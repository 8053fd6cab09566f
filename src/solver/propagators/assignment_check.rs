use crate::solver::{
    network::ConstraintNetwork,
    propagator::{Propagator, PropagatorDescriptor},
    trail::Trail,
};

/// The weakest consistency check: verifies that no two assigned neighbours
/// hold the same value. Pure read, prunes nothing; with this check alone
/// the search is plain chronological backtracking.
#[derive(Debug, Clone, Copy)]
pub struct AssignmentCheck;

impl Propagator for AssignmentCheck {
    fn descriptor(&self) -> PropagatorDescriptor {
        PropagatorDescriptor {
            name: "AssignmentCheck".to_string(),
            description: "assigned neighbours hold distinct values".to_string(),
        }
    }

    fn propagate(&self, network: &mut ConstraintNetwork, _trail: &mut Trail) -> bool {
        for variable in network.variables() {
            let Some(value) = variable.assignment() else {
                continue;
            };
            for &neighbor in network.neighbors_of(variable.id()) {
                if network.variable(neighbor).assignment() == Some(value) {
                    return false;
                }
            }
        }
        true
    }
}
