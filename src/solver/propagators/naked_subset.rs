use std::collections::HashSet;

use crate::solver::{
    domain::CellValue,
    network::{ConstraintNetwork, VariableId},
    propagator::{prune, Propagator, PropagatorDescriptor},
    trail::Trail,
};

/// Naked-subset elimination for subsets of size 2 (pairs) or 3 (triples).
///
/// When `size` unassigned, mutually adjacent variables all hold the same
/// `size`-value domain, those values are claimed by the subset: no variable
/// visible to *all* of its members can take any of them, so they are pruned
/// from every such common neighbour whose domain is still wider than a
/// singleton. The defining variables themselves are never pruned
/// (adjacency is irreflexive, so no member appears in the common
/// neighbourhood), and neither is any further variable holding the
/// identical domain, since it defines a subset of its own.
///
/// Two assigned neighbours holding the same value are reported as a
/// contradiction. An emptied common neighbour is *not*: wipeout detection is
/// the job of the pruning propagator running alongside this one.
#[derive(Debug, Clone, Copy)]
pub struct NakedSubset {
    size: usize,
}

impl NakedSubset {
    pub fn pairs() -> Self {
        Self { size: 2 }
    }

    pub fn triples() -> Self {
        Self { size: 3 }
    }

    /// Prunes the shared values from every eligible variable in `targets`.
    fn eliminate(
        &self,
        network: &mut ConstraintNetwork,
        trail: &mut Trail,
        targets: &[VariableId],
        shared: &[CellValue],
    ) {
        for &target in targets {
            let domain = network.variable(target).domain();
            if domain.len() <= 1 {
                continue;
            }
            // An identical domain defines a subset of its own, it is not a
            // target.
            if domain.len() == self.size && shared.iter().all(|&v| domain.contains(v)) {
                continue;
            }
            for &value in shared {
                // Wipeout here is deliberately not a failure.
                let _ = prune(network, trail, target, value);
            }
        }
    }
}

impl Propagator for NakedSubset {
    fn descriptor(&self) -> PropagatorDescriptor {
        PropagatorDescriptor {
            name: match self.size {
                2 => "NakedPairs".to_string(),
                _ => "NakedTriples".to_string(),
            },
            description: format!(
                "prune {}-value subsets from common neighbourhoods",
                self.size
            ),
        }
    }

    fn propagate(&self, network: &mut ConstraintNetwork, trail: &mut Trail) -> bool {
        for id in 0..network.len() {
            let neighbors = network.neighbors_of(id).to_vec();
            for &neighbor in &neighbors {
                let variable = network.variable(id);
                let other = network.variable(neighbor);

                if variable.is_assigned() || other.is_assigned() {
                    match (variable.assignment(), other.assignment()) {
                        (Some(a), Some(b)) if a == b => return false,
                        _ => continue,
                    }
                }

                if variable.domain().len() != self.size || variable.domain() != other.domain() {
                    continue;
                }

                let subset = variable.domain().clone();
                let shared: Vec<CellValue> = subset.iter().collect();
                let other_neighbors: HashSet<VariableId> =
                    network.neighbors_of(neighbor).iter().copied().collect();
                let common: Vec<VariableId> = neighbors
                    .iter()
                    .copied()
                    .filter(|c| other_neighbors.contains(c))
                    .collect();

                if self.size == 2 {
                    self.eliminate(network, trail, &common, &shared);
                    continue;
                }

                // A triple needs a third defining member: another mutual
                // neighbour holding the identical three-value domain. Two
                // matching domains alone claim nothing: their neighbours
                // may still take the value the pair leaves over.
                let thirds: Vec<VariableId> = common
                    .iter()
                    .copied()
                    .filter(|&t| network.variable(t).domain() == &subset)
                    .collect();
                for third in thirds {
                    let third_neighbors: HashSet<VariableId> =
                        network.neighbors_of(third).iter().copied().collect();
                    let targets: Vec<VariableId> = common
                        .iter()
                        .copied()
                        .filter(|c| third_neighbors.contains(c))
                        .collect();
                    self.eliminate(network, trail, &targets, &shared);
                }
            }
        }
        true
    }
}
