use im::OrdSet;

/// A candidate value for one variable. Grid puzzles use `1..=side`; `0` is
/// reserved by the board layer for "empty".
pub type CellValue = i32;

/// The set of values still admissible for one variable.
///
/// Backed by a persistent ordered set, so cloning a domain for a trail
/// snapshot is cheap structural sharing rather than a deep copy, and
/// iteration yields values in ascending order.
///
/// A domain is owned by its [`Variable`](crate::solver::variable::Variable);
/// an emptied domain signals a contradiction to the propagators, it is never
/// an error by itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Domain(OrdSet<CellValue>);

impl Domain {
    pub fn new(values: impl IntoIterator<Item = CellValue>) -> Self {
        Self(values.into_iter().collect())
    }

    /// A domain holding exactly one value.
    pub fn singleton(value: CellValue) -> Self {
        Self(OrdSet::unit(value))
    }

    pub fn contains(&self, value: CellValue) -> bool {
        self.0.contains(&value)
    }

    /// Removes `value` if present. Returns whether the domain changed;
    /// removing an absent value is a no-op.
    pub fn remove(&mut self, value: CellValue) -> bool {
        self.0.remove(&value).is_some()
    }

    /// Collapses the domain to the single `value`.
    ///
    /// Callers record the prior snapshot on the trail before calling this.
    pub fn assign(&mut self, value: CellValue) {
        self.0 = OrdSet::unit(value);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_singleton(&self) -> bool {
        self.0.len() == 1
    }

    /// If the domain is a singleton, returns the single value.
    pub fn singleton_value(&self) -> Option<CellValue> {
        if self.is_singleton() {
            self.0.get_min().copied()
        } else {
            None
        }
    }

    /// Values in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = CellValue> + '_ {
        self.0.iter().copied()
    }
}
