use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Square board of cells, indexed by `(row, col)`.
///
/// Only the generators in this crate build grids, so the shape and mine count always agree with the cells.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Grid {
    cells: Array2<Cell>,
    mine_count: CellCount,
}

impl Grid {
    /// Wraps an already generated square array of cells.
    pub(crate) fn from_cells(cells: Array2<Cell>) -> Self {
        debug_assert_eq!(cells.nrows(), cells.ncols(), "grid must be square");
        let mine_count = cells
            .iter()
            .filter(|cell| cell.content.is_mine())
            .count()
            .try_into()
            .unwrap_or(CellCount::MAX);
        Self { cells, mine_count }
    }

    pub fn side(&self) -> Coord {
        self.cells.nrows().try_into().unwrap_or(Coord::MAX)
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.side(), self.side())
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mine_count)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let side = self.side();
        if coords.0 < side && coords.1 < side {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds { coords, side })
        }
    }

    pub fn get(&self, coords: Coord2) -> Option<&Cell> {
        self.cells.get(coords.to_nd_index())
    }

    /// Panics if `coords` is out of bounds, callers validate first.
    pub(crate) fn cell_mut(&mut self, coords: Coord2) -> &mut Cell {
        &mut self.cells[coords.to_nd_index()]
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.cells.iter_neighbors(coords)
    }

    /// All cells with their coordinates, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord2, &Cell)> {
        self.cells
            .indexed_iter()
            .map(|((row, col), cell)| ((row as Coord, col as Coord), cell))
    }

    /// Whether no move has been applied yet: every cell is still hidden.
    pub fn is_untouched(&self) -> bool {
        self.cells
            .iter()
            .all(|cell| cell.visibility == Visibility::Hidden)
    }

    /// Maps every cell through `f` into a display grid of the same shape.
    pub fn map_symbols(&self, f: impl Fn(&Cell) -> DisplaySymbol) -> Snapshot {
        Snapshot::new(self.cells.map(f))
    }
}

/// Mines among the neighbors of `coords`.
pub(crate) fn adjacent_mine_count(cells: &Array2<Cell>, coords: Coord2) -> u8 {
    cells
        .iter_neighbors(coords)
        .filter(|&pos| cells[pos.to_nd_index()].content.is_mine())
        .count() as u8
}

impl Index<Coord2> for Grid {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

/// Read-only view of the board as display symbols.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    symbols: Array2<DisplaySymbol>,
}

impl Snapshot {
    pub(crate) fn new(symbols: Array2<DisplaySymbol>) -> Self {
        Self { symbols }
    }

    pub fn side(&self) -> Coord {
        self.symbols.nrows().try_into().unwrap_or(Coord::MAX)
    }

    pub fn get(&self, coords: Coord2) -> Option<DisplaySymbol> {
        self.symbols.get(coords.to_nd_index()).copied()
    }

    /// Rows of symbols, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = DisplaySymbol> + '_> {
        self.symbols.rows().into_iter().map(|row| row.into_iter().copied())
    }

    pub fn count(&self, symbol: DisplaySymbol) -> usize {
        self.symbols.iter().filter(|&&s| s == symbol).count()
    }
}

impl Index<Coord2> for Snapshot {
    type Output = DisplaySymbol;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.symbols[coords.to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(side: Coord, mines: &[Coord2]) -> Grid {
        FixedBoardGenerator::new(mines)
            .generate(GameConfig::new(side, mines.len() as CellCount).unwrap())
            .unwrap()
    }

    #[test]
    fn counts_follow_mines() {
        let grid = grid(3, &[(0, 0), (2, 2)]);

        assert_eq!(grid.side(), 3);
        assert_eq!(grid.total_cells(), 9);
        assert_eq!(grid.mine_count(), 2);
        assert_eq!(grid.safe_cell_count(), 7);
    }

    #[test]
    fn validate_coords_checks_both_axes() {
        let grid = grid(3, &[(0, 0)]);

        assert_eq!(grid.validate_coords((2, 2)), Ok((2, 2)));
        assert_eq!(
            grid.validate_coords((3, 0)),
            Err(GameError::OutOfBounds {
                coords: (3, 0),
                side: 3
            })
        );
        assert!(grid.validate_coords((0, 3)).is_err());
        assert!(grid.get((0, 3)).is_none());
    }

    #[test]
    fn adjacent_mine_count_handles_edges() {
        let grid = grid(3, &[(0, 0), (0, 2)]);

        assert_eq!(adjacent_mine_count(&grid.cells, (0, 1)), 2);
        assert_eq!(adjacent_mine_count(&grid.cells, (1, 1)), 2);
        assert_eq!(adjacent_mine_count(&grid.cells, (2, 0)), 0);
        assert_eq!(adjacent_mine_count(&grid.cells, (1, 0)), 1);
        assert_eq!(grid[(1, 0)].content, CellContent::Adjacent(1));
    }

    #[test]
    fn fresh_grid_is_untouched() {
        let mut grid = grid(3, &[(0, 0)]);
        assert!(grid.is_untouched());

        grid.cell_mut((2, 2)).visibility = Visibility::Flagged;
        assert!(!grid.is_untouched());
    }

    #[test]
    fn iter_is_row_major() {
        let grid = grid(2, &[(1, 0)]);
        let coords: alloc::vec::Vec<_> = grid.iter().map(|(pos, _)| pos).collect();

        assert_eq!(coords, [(0, 0), (0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn snapshot_rows_match_shape() {
        let grid = grid(2, &[(1, 0)]);
        let snapshot = grid.map_symbols(|cell| cell.display(true));

        assert_eq!(snapshot.side(), 2);
        assert_eq!(snapshot.rows().count(), 2);
        assert_eq!(snapshot[(1, 0)], DisplaySymbol::Mine);
        assert_eq!(snapshot.count(DisplaySymbol::Hidden), 3);
    }
}
