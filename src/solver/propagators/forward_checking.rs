use crate::solver::{
    network::ConstraintNetwork,
    propagator::{prune, Propagator, PropagatorDescriptor},
    trail::Trail,
};

/// Removes every assigned variable's value from the domains of its
/// unassigned neighbours, recording each removal on the trail. Fails as soon
/// as a neighbour's domain is wiped out, so dead branches are detected right
/// after the assignment that killed them rather than at the bottom of the
/// tree.
#[derive(Debug, Clone, Copy)]
pub struct ForwardChecking;

impl Propagator for ForwardChecking {
    fn descriptor(&self) -> PropagatorDescriptor {
        PropagatorDescriptor {
            name: "ForwardChecking".to_string(),
            description: "prune assigned values from unassigned neighbours".to_string(),
        }
    }

    fn propagate(&self, network: &mut ConstraintNetwork, trail: &mut Trail) -> bool {
        for id in 0..network.len() {
            let Some(value) = network.variable(id).assignment() else {
                continue;
            };
            let neighbors = network.neighbors_of(id).to_vec();
            for neighbor in neighbors {
                if network.variable(neighbor).is_assigned() {
                    continue;
                }
                if !prune(network, trail, neighbor, value) {
                    return false;
                }
            }
        }
        true
    }
}
