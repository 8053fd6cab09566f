use crate::solver::{
    domain::CellValue,
    network::{ConstraintNetwork, VariableId},
    trail::Trail,
};

#[derive(Debug, Clone)]
pub struct PropagatorDescriptor {
    pub name: String,
    pub description: String,
}

/// A consistency check run after every assignment (and once up front).
///
/// A propagator inspects the network and may prune domains, recording every
/// mutation on the trail first. It returns `true` when no contradiction was
/// detected and `false` when the current branch is dead; in the latter case
/// it leaves its partial work in place; rolling back is the trail's job
/// once the caller backtracks.
pub trait Propagator: std::fmt::Debug {
    fn descriptor(&self) -> PropagatorDescriptor;

    fn propagate(&self, network: &mut ConstraintNetwork, trail: &mut Trail) -> bool;
}

/// Removes `value` from `variable`'s domain, recording the prior snapshot on
/// the trail. Removing an absent value records nothing. Returns `false` when
/// the removal emptied the domain.
pub(crate) fn prune(
    network: &mut ConstraintNetwork,
    trail: &mut Trail,
    variable: VariableId,
    value: CellValue,
) -> bool {
    if !network.variable(variable).domain().contains(value) {
        return true;
    }
    trail.record(variable, network.variable(variable).domain().clone());
    let domain = network.variable_mut(variable).domain_mut();
    let _ = domain.remove(value);
    !domain.is_empty()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::solver::domain::Domain;

    #[test]
    fn prune_records_before_mutating() {
        let mut network =
            ConstraintNetwork::new(vec![Domain::new(1..=4)], &[]).unwrap();
        let mut trail = Trail::new();
        trail.place_marker();

        assert!(prune(&mut network, &mut trail, 0, 2));
        assert_eq!(trail.len(), 1);
        assert_eq!(network.variable(0).domain(), &Domain::new([1, 3, 4]));

        trail.undo_to_last_marker(&mut network).unwrap();
        assert_eq!(network.variable(0).domain(), &Domain::new(1..=4));
    }

    #[test]
    fn pruning_an_absent_value_records_nothing() {
        let mut network =
            ConstraintNetwork::new(vec![Domain::new([1, 2])], &[]).unwrap();
        let mut trail = Trail::new();

        assert!(prune(&mut network, &mut trail, 0, 9));
        assert_eq!(trail.len(), 0);
    }

    #[test]
    fn prune_reports_a_wiped_out_domain() {
        let mut network =
            ConstraintNetwork::new(vec![Domain::singleton(5)], &[]).unwrap();
        let mut trail = Trail::new();

        assert!(!prune(&mut network, &mut trail, 0, 5));
        assert!(network.variable(0).domain().is_empty());
    }
}
