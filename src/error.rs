use crate::solver::{domain::CellValue, network::VariableId};

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors surfaced by board construction and by the solver.
///
/// An unsatisfiable puzzle is *not* an error; `solve` reports it through
/// [`SolveReport::solved`](crate::solver::engine::SolveReport). The variants
/// here are either invalid input or engine invariant violations, which
/// indicate a defect rather than a hard puzzle.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("block shape {block_rows}x{block_cols} does not form a grid")]
    BlockShape { block_rows: usize, block_cols: usize },

    #[error("board of side {side} needs {expected} cells, got {actual}")]
    BoardShape {
        side: usize,
        expected: usize,
        actual: usize,
    },

    #[error("cell ({row}, {col}) holds {value}, outside 0..={side}")]
    CellOutOfRange {
        row: usize,
        col: usize,
        value: CellValue,
        side: usize,
    },

    #[error("constraint group references variable {variable}, but the network has {len}")]
    GroupOutOfBounds { variable: VariableId, len: usize },

    #[error("variable selection returned no variable while {unassigned} remain unassigned")]
    VariableSelection { unassigned: usize },

    #[error("trail undo requested with no marker in place")]
    TrailUnderflow,
}
