use std::collections::BTreeSet;

use crate::{
    board::Board,
    error::{Error, Result},
    solver::{domain::Domain, variable::Variable},
};

/// Stable index of a variable within its network.
pub type VariableId = usize;

/// The constraint graph: an ordered sequence of variables plus the adjacency
/// relation derived from uniqueness groups.
///
/// Two variables are neighbours when they share at least one group (row,
/// column or block for grid puzzles) and must therefore hold distinct
/// values. Adjacency is symmetric, irreflexive, and fixed at construction;
/// only the domains mutate afterwards.
#[derive(Debug, Clone)]
pub struct ConstraintNetwork {
    variables: Vec<Variable>,
    neighbors: Vec<Vec<VariableId>>,
}

impl ConstraintNetwork {
    /// Builds a network from per-variable initial domains and uniqueness
    /// groups. Every member of every group must index into `domains`.
    pub fn new(domains: Vec<Domain>, groups: &[Vec<VariableId>]) -> Result<Self> {
        let len = domains.len();
        let mut adjacency: Vec<BTreeSet<VariableId>> = vec![BTreeSet::new(); len];

        for group in groups {
            for &member in group {
                if member >= len {
                    return Err(Error::GroupOutOfBounds {
                        variable: member,
                        len,
                    });
                }
            }
            for &a in group {
                for &b in group {
                    if a != b {
                        let _ = adjacency[a].insert(b);
                    }
                }
            }
        }

        let variables = domains
            .into_iter()
            .enumerate()
            .map(|(id, domain)| Variable::new(id, domain))
            .collect();
        let neighbors = adjacency
            .into_iter()
            .map(|set| set.into_iter().collect())
            .collect();

        Ok(Self {
            variables,
            neighbors,
        })
    }

    /// Translates a board into a network: givens become singleton domains,
    /// empty cells get the full `1..=side` domain, and the row, column and
    /// block uniqueness groups supply the adjacency.
    pub fn from_board(board: &Board) -> Result<Self> {
        let side = board.side();
        let domains = board
            .cells()
            .iter()
            .map(|&given| {
                if given == 0 {
                    Domain::new(1..=side as i32)
                } else {
                    Domain::singleton(given)
                }
            })
            .collect();

        let mut groups: Vec<Vec<VariableId>> = Vec::with_capacity(3 * side);
        for row in 0..side {
            groups.push((0..side).map(|col| row * side + col).collect());
        }
        for col in 0..side {
            groups.push((0..side).map(|row| row * side + col).collect());
        }
        let (block_rows, block_cols) = (board.block_rows(), board.block_cols());
        for band in 0..block_cols {
            for stack in 0..block_rows {
                let mut block = Vec::with_capacity(side);
                for r in 0..block_rows {
                    for c in 0..block_cols {
                        let row = band * block_rows + r;
                        let col = stack * block_cols + c;
                        block.push(row * side + col);
                    }
                }
                groups.push(block);
            }
        }

        Self::new(domains, &groups)
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    pub fn variable(&self, id: VariableId) -> &Variable {
        &self.variables[id]
    }

    pub fn variable_mut(&mut self, id: VariableId) -> &mut Variable {
        &mut self.variables[id]
    }

    /// All variables in network order, which is also the tie-break order for
    /// the selection heuristics.
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// Neighbours of `id`, in ascending order.
    pub fn neighbors_of(&self, id: VariableId) -> &[VariableId] {
        &self.neighbors[id]
    }

    pub fn unassigned_count(&self) -> usize {
        self.variables.iter().filter(|v| !v.is_assigned()).count()
    }

    /// Whether every variable is assigned.
    pub fn is_complete(&self) -> bool {
        self.variables.iter().all(Variable::is_assigned)
    }
}
