use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    solver::{domain::CellValue, network::ConstraintNetwork},
};

/// The externally supplied puzzle: a `side x side` grid divided into
/// `block_rows x block_cols` blocks, with `0` marking an empty cell.
///
/// This is the boundary representation; the solver works on the
/// [`ConstraintNetwork`] translated from it and a solved network is
/// translated back with the same dimensional parameters. JSON via serde is
/// the supported interchange form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    side: usize,
    block_rows: usize,
    block_cols: usize,
    cells: Vec<CellValue>,
}

impl Board {
    /// Builds a board from row-major cells. The side length is
    /// `block_rows * block_cols`; every cell must lie in `0..=side`.
    pub fn new(block_rows: usize, block_cols: usize, cells: Vec<CellValue>) -> Result<Self> {
        if block_rows == 0 || block_cols == 0 {
            return Err(Error::BlockShape {
                block_rows,
                block_cols,
            });
        }
        let side = block_rows * block_cols;
        let expected = side * side;
        if cells.len() != expected {
            return Err(Error::BoardShape {
                side,
                expected,
                actual: cells.len(),
            });
        }
        for (index, &value) in cells.iter().enumerate() {
            if value < 0 || value > side as CellValue {
                return Err(Error::CellOutOfRange {
                    row: index / side,
                    col: index % side,
                    value,
                    side,
                });
            }
        }
        Ok(Self {
            side,
            block_rows,
            block_cols,
            cells,
        })
    }

    /// An all-empty board of the given block shape.
    pub fn empty(block_rows: usize, block_cols: usize) -> Self {
        let side = block_rows * block_cols;
        Self {
            side,
            block_rows,
            block_cols,
            cells: vec![0; side * side],
        }
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn block_rows(&self) -> usize {
        self.block_rows
    }

    pub fn block_cols(&self) -> usize {
        self.block_cols
    }

    /// Row-major cells, `0` for empty.
    pub fn cells(&self) -> &[CellValue] {
        &self.cells
    }

    /// # Panics
    ///
    /// Panics if `row` or `col` is outside the grid.
    pub fn value(&self, row: usize, col: usize) -> CellValue {
        self.cells[row * self.side + col]
    }

    /// Places a given (or `0` to clear a cell).
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is outside the grid.
    pub fn set(&mut self, row: usize, col: usize, value: CellValue) -> Result<()> {
        if value < 0 || value > self.side as CellValue {
            return Err(Error::CellOutOfRange {
                row,
                col,
                value,
                side: self.side,
            });
        }
        self.cells[row * self.side + col] = value;
        Ok(())
    }

    /// Translates a network back into a board with the given block shape.
    /// Unassigned variables come back as empty cells, so translating a
    /// half-solved network yields a board with holes.
    pub fn from_network(
        network: &ConstraintNetwork,
        block_rows: usize,
        block_cols: usize,
    ) -> Self {
        let side = block_rows * block_cols;
        debug_assert_eq!(network.len(), side * side);
        let cells = network
            .variables()
            .iter()
            .map(|v| v.assignment().unwrap_or(0))
            .collect();
        Self {
            side,
            block_rows,
            block_cols,
            cells,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn construction_checks_the_cell_count() {
        let result = Board::new(2, 2, vec![0; 15]);
        assert!(matches!(
            result,
            Err(Error::BoardShape {
                side: 4,
                expected: 16,
                actual: 15,
            })
        ));
    }

    #[test]
    fn construction_checks_value_range() {
        let mut cells = vec![0; 16];
        cells[6] = 5;
        let result = Board::new(2, 2, cells);
        assert!(matches!(
            result,
            Err(Error::CellOutOfRange {
                row: 1,
                col: 2,
                value: 5,
                side: 4,
            })
        ));
    }

    #[test]
    fn degenerate_block_shapes_are_rejected() {
        assert!(matches!(
            Board::new(0, 3, vec![]),
            Err(Error::BlockShape { .. })
        ));
    }

    #[test]
    fn set_rejects_out_of_range_values() {
        let mut board = Board::empty(2, 2);
        assert!(board.set(0, 0, 4).is_ok());
        assert!(board.set(0, 0, 5).is_err());
        assert_eq!(board.value(0, 0), 4);
    }

    #[test]
    fn board_round_trips_through_the_network() {
        #[rustfmt::skip]
        let cells = vec![
            1, 2, 3, 4,
            3, 4, 1, 2,
            2, 1, 4, 3,
            4, 3, 2, 1,
        ];
        let board = Board::new(2, 2, cells).unwrap();
        let network = ConstraintNetwork::from_board(&board).unwrap();
        let back = Board::from_network(&network, 2, 2);
        assert_eq!(back, board);
    }

    #[test]
    fn unassigned_variables_come_back_as_holes() {
        let mut board = Board::empty(2, 2);
        board.set(3, 1, 2).unwrap();
        let network = ConstraintNetwork::from_board(&board).unwrap();
        let back = Board::from_network(&network, 2, 2);
        assert_eq!(back, board);
    }

    #[test]
    fn board_round_trips_through_json() {
        let mut board = Board::empty(3, 3);
        board.set(4, 4, 7).unwrap();

        let encoded = serde_json::to_string(&board).unwrap();
        let decoded: Board = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, board);
    }
}
