use ndarray::Array2;

use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

pub trait BoardGenerator {
    fn generate(self, config: GameConfig) -> Result<Grid>;
}

/// Lays out mines on an empty board and fills in the adjacent count of every other cell.
///
/// Nothing is shared with the caller until the finished grid is returned.
fn build_grid(side: Coord, mines: impl IntoIterator<Item = Coord2>) -> Grid {
    let mut cells: Array2<Cell> = Array2::default((side as usize, side as usize));

    for coords in mines {
        cells[coords.to_nd_index()].content = CellContent::Mine;
    }

    for row in 0..side {
        for col in 0..side {
            let coords = (row, col);
            if cells[coords.to_nd_index()].content.is_mine() {
                continue;
            }
            let count = crate::grid::adjacent_mine_count(&cells, coords);
            cells[coords.to_nd_index()].content = CellContent::Adjacent(count);
        }
    }

    Grid::from_cells(cells)
}
