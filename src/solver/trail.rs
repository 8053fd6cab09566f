use crate::{
    error::{Error, Result},
    solver::{domain::Domain, network::ConstraintNetwork, network::VariableId},
};

/// The undo log for domain mutations.
///
/// Every propagator records a variable's prior domain snapshot here *before*
/// mutating it. A marker is placed once per candidate trial; undoing pops
/// every change back to the most recent marker and restores the recorded
/// snapshots in reverse chronological order, so a variable touched several
/// times in one segment ends up at its oldest recorded state.
///
/// The trail is owned by one solve call at a time. After a solve finishes
/// the trail is empty: either every change was undone on the way out of a
/// failed search, or the solution was committed with [`Trail::clear`].
#[derive(Debug, Default)]
pub struct Trail {
    changes: Vec<(VariableId, Domain)>,
    markers: Vec<usize>,
    ever_marked: bool,
}

impl Trail {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a rollback boundary. Each candidate trial places exactly one.
    pub fn place_marker(&mut self) {
        self.markers.push(self.changes.len());
        self.ever_marked = true;
    }

    /// Appends a change after the most recent marker. `saved` must be the
    /// domain snapshot taken *before* the mutation it accounts for.
    pub fn record(&mut self, variable: VariableId, saved: Domain) {
        self.changes.push((variable, saved));
    }

    /// Pops every change since the most recent marker, restoring each
    /// recorded domain, and removes the marker itself.
    ///
    /// Undoing a trail that never held a marker is a no-op; undoing *past*
    /// the oldest marker is an engine defect, reported as
    /// [`Error::TrailUnderflow`] rather than silently ignored.
    pub fn undo_to_last_marker(&mut self, network: &mut ConstraintNetwork) -> Result<()> {
        let Some(marker) = self.markers.pop() else {
            if self.ever_marked {
                return Err(Error::TrailUnderflow);
            }
            return Ok(());
        };
        for (variable, saved) in self.changes.drain(marker..).rev() {
            *network.variable_mut(variable).domain_mut() = saved;
        }
        Ok(())
    }

    /// Commits all recorded changes by forgetting them, along with their
    /// markers. Called once a solution is accepted.
    pub fn clear(&mut self) {
        self.changes.clear();
        self.markers.clear();
    }

    /// Number of recorded changes across all segments.
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty() && self.markers.is_empty()
    }
}
