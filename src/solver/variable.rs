use crate::solver::{
    domain::{CellValue, Domain},
    network::VariableId,
};

/// One slot whose value must be determined, identified by a stable index
/// into its [`ConstraintNetwork`](crate::solver::network::ConstraintNetwork).
///
/// Assignment is an explicit flag, set when the search commits to a value
/// (or at construction for givens), not merely a singleton domain:
/// propagation may narrow a domain to one value without the variable
/// counting as assigned, which keeps such variables visible to selection
/// and prunable by forward checking. The flag is owned by the search; the
/// trail only restores domains.
#[derive(Debug, Clone)]
pub struct Variable {
    id: VariableId,
    domain: Domain,
    assigned: bool,
}

impl Variable {
    /// A variable constructed with a singleton domain is a given and starts
    /// out assigned.
    pub fn new(id: VariableId, domain: Domain) -> Self {
        let assigned = domain.is_singleton();
        Self {
            id,
            domain,
            assigned,
        }
    }

    pub fn id(&self) -> VariableId {
        self.id
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    pub fn domain_mut(&mut self) -> &mut Domain {
        &mut self.domain
    }

    pub fn is_assigned(&self) -> bool {
        self.assigned
    }

    /// The committed value, if the variable is assigned.
    pub fn assignment(&self) -> Option<CellValue> {
        if self.assigned {
            self.domain.singleton_value()
        } else {
            None
        }
    }

    /// Commits the variable to `value`, collapsing its domain. The caller
    /// records the prior domain snapshot on the trail first.
    pub fn assign(&mut self, value: CellValue) {
        self.domain.assign(value);
        self.assigned = true;
    }

    /// Drops the assignment flag after a backtracked trial. The domain
    /// itself is restored separately by the trail.
    pub fn unassign(&mut self) {
        self.assigned = false;
    }
}
