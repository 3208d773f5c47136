use alloc::vec;
use alloc::vec::Vec;

use crate::*;

/// Cells uncovered by a single reveal, in the order they were uncovered.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RevealReport {
    pub hit_mine: bool,
    pub revealed: Vec<(Coord2, DisplaySymbol)>,
}

/// Applies player moves to a grid, keeping the remaining safe-cell counter in step.
///
/// Every cell becomes [`Visibility::Revealed`] at most once, and the counter drops by one exactly when a safe cell
/// does.
#[derive(Debug)]
pub struct RevealEngine<'a> {
    grid: &'a mut Grid,
    remaining_safe: &'a mut CellCount,
}

impl<'a> RevealEngine<'a> {
    pub fn new(grid: &'a mut Grid, remaining_safe: &'a mut CellCount) -> Self {
        Self {
            grid,
            remaining_safe,
        }
    }

    /// Flags a hidden cell or unflags a flagged one, returning the new visibility.
    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<Visibility> {
        use Visibility::*;

        let coords = self.grid.validate_coords(coords)?;
        let cell = self.grid.cell_mut(coords);

        cell.visibility = match cell.visibility {
            Hidden => Flagged,
            Flagged => Hidden,
            Revealed => {
                return Err(GameError::InvalidTransition {
                    coords,
                    visibility: Revealed,
                });
            }
        };
        Ok(cell.visibility)
    }

    /// Reveals a hidden cell, flooding outwards when it has no adjacent mines.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealReport> {
        let coords = self.grid.validate_coords(coords)?;

        let visibility = self.grid[coords].visibility;
        if visibility != Visibility::Hidden {
            return Err(GameError::InvalidTransition { coords, visibility });
        }

        let mut report = RevealReport::default();
        match self.reveal_cell(coords, &mut report) {
            CellContent::Mine => {
                log::debug!("Mine hit at {:?}", coords);
                report.hit_mine = true;
            }
            CellContent::Adjacent(0) => self.flood_fill(coords, &mut report),
            CellContent::Adjacent(count) => {
                log::debug!("Revealed {:?}, adjacent mines: {}", coords, count);
            }
        }
        Ok(report)
    }

    /// Expands outwards from a zero cell that was just revealed.
    ///
    /// A cell enters the stack only at the moment it turns from hidden to revealed, so each cell is expanded at most
    /// once. Flagged neighbors are left alone.
    fn flood_fill(&mut self, start: Coord2, report: &mut RevealReport) {
        let mut to_expand = vec![start];
        log::trace!("Starting flood-fill from {:?}", start);

        while let Some(expand_coords) = to_expand.pop() {
            for neighbor in self.grid.iter_neighbors(expand_coords) {
                if self.grid[neighbor].visibility != Visibility::Hidden {
                    continue;
                }

                let content = self.reveal_cell(neighbor, report);
                log::trace!("Flood revealed {:?}, content: {:?}", neighbor, content);

                if content == CellContent::Adjacent(0) {
                    to_expand.push(neighbor);
                }
            }
        }

        log::debug!(
            "Flood-fill from {:?} revealed {} cells",
            start,
            report.revealed.len()
        );
    }

    fn reveal_cell(&mut self, coords: Coord2, report: &mut RevealReport) -> CellContent {
        let cell = self.grid.cell_mut(coords);
        cell.visibility = Visibility::Revealed;
        let content = cell.content;

        if !content.is_mine() {
            *self.remaining_safe = self.remaining_safe.saturating_sub(1);
        }
        report
            .revealed
            .push((coords, DisplaySymbol::from_content(content)));
        content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(side: Coord, mines: &[Coord2]) -> (Grid, CellCount) {
        let config = GameConfig::new(side, mines.len() as CellCount).unwrap();
        let grid = FixedBoardGenerator::new(mines).generate(config).unwrap();
        let remaining = grid.safe_cell_count();
        (grid, remaining)
    }

    #[test]
    fn toggle_flag_round_trips() {
        let (mut grid, mut remaining) = grid(3, &[(0, 0)]);
        let mut engine = RevealEngine::new(&mut grid, &mut remaining);

        assert_eq!(engine.toggle_flag((1, 1)).unwrap(), Visibility::Flagged);
        assert_eq!(engine.toggle_flag((1, 1)).unwrap(), Visibility::Hidden);
        assert_eq!(grid[(1, 1)].visibility, Visibility::Hidden);
        assert_eq!(remaining, 8);
    }

    #[test]
    fn toggle_flag_rejects_revealed_cell() {
        let (mut grid, mut remaining) = grid(3, &[(0, 0)]);
        let mut engine = RevealEngine::new(&mut grid, &mut remaining);

        engine.reveal((0, 1)).unwrap();
        let err = engine.toggle_flag((0, 1)).unwrap_err();

        assert_eq!(
            err,
            GameError::InvalidTransition {
                coords: (0, 1),
                visibility: Visibility::Revealed
            }
        );
    }

    #[test]
    fn reveal_numbered_cell_does_not_cascade() {
        let (mut grid, mut remaining) = grid(3, &[(0, 0)]);
        let mut engine = RevealEngine::new(&mut grid, &mut remaining);

        let report = engine.reveal((1, 1)).unwrap();

        assert!(!report.hit_mine);
        assert_eq!(report.revealed, [((1, 1), DisplaySymbol::Number(1))]);
        assert_eq!(remaining, 7);
    }

    #[test]
    fn reveal_mine_reports_hit_and_leaves_counter() {
        let (mut grid, mut remaining) = grid(3, &[(0, 0)]);
        let mut engine = RevealEngine::new(&mut grid, &mut remaining);

        let report = engine.reveal((0, 0)).unwrap();

        assert!(report.hit_mine);
        assert_eq!(report.revealed, [((0, 0), DisplaySymbol::Mine)]);
        assert_eq!(remaining, 8);
        assert_eq!(grid[(0, 0)].visibility, Visibility::Revealed);
    }

    #[test]
    fn reveal_twice_is_rejected() {
        let (mut grid, mut remaining) = grid(3, &[(0, 0)]);
        let mut engine = RevealEngine::new(&mut grid, &mut remaining);

        engine.reveal((1, 1)).unwrap();
        let err = engine.reveal((1, 1)).unwrap_err();

        assert_eq!(
            err,
            GameError::InvalidTransition {
                coords: (1, 1),
                visibility: Visibility::Revealed
            }
        );
        assert_eq!(remaining, 7);
    }

    #[test]
    fn reveal_flagged_cell_is_rejected() {
        let (mut grid, mut remaining) = grid(3, &[(0, 0)]);
        let mut engine = RevealEngine::new(&mut grid, &mut remaining);

        engine.toggle_flag((2, 2)).unwrap();
        assert!(matches!(
            engine.reveal((2, 2)),
            Err(GameError::InvalidTransition {
                visibility: Visibility::Flagged,
                ..
            })
        ));

        engine.toggle_flag((2, 2)).unwrap();
        assert!(engine.reveal((2, 2)).is_ok());
    }

    #[test]
    fn out_of_bounds_moves_are_rejected() {
        let (mut grid, mut remaining) = grid(3, &[(0, 0)]);
        let mut engine = RevealEngine::new(&mut grid, &mut remaining);

        assert_eq!(
            engine.reveal((3, 0)).unwrap_err(),
            GameError::OutOfBounds {
                coords: (3, 0),
                side: 3
            }
        );
        assert!(matches!(
            engine.toggle_flag((0, 200)),
            Err(GameError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn flood_fill_stops_at_numbered_border() {
        // column 2 is all mines, column 3 is cut off from the flood
        let mines = [(0, 2), (1, 2), (2, 2), (3, 2)];
        let (mut grid, mut remaining) = grid(4, &mines);
        let mut engine = RevealEngine::new(&mut grid, &mut remaining);

        let report = engine.reveal((0, 0)).unwrap();

        assert_eq!(report.revealed.len(), 8);
        assert_eq!(remaining, 4);
        for row in 0..4 {
            assert_eq!(grid[(row, 0)].visibility, Visibility::Revealed);
            assert_eq!(grid[(row, 1)].visibility, Visibility::Revealed);
            assert_eq!(grid[(row, 3)].visibility, Visibility::Hidden);
        }
    }

    #[test]
    fn flood_fill_skips_flagged_cells() {
        let (mut grid, mut remaining) = grid(4, &[(0, 0)]);
        let mut engine = RevealEngine::new(&mut grid, &mut remaining);

        engine.toggle_flag((3, 0)).unwrap();
        let report = engine.reveal((3, 3)).unwrap();

        assert_eq!(report.revealed.len(), 14);
        assert_eq!(remaining, 1);
        assert_eq!(grid[(3, 0)].visibility, Visibility::Flagged);
    }

    #[test]
    fn flood_fill_reports_each_cell_once() {
        let (mut grid, mut remaining) = grid(5, &[(4, 4)]);
        let mut engine = RevealEngine::new(&mut grid, &mut remaining);

        let report = engine.reveal((0, 0)).unwrap();
        let mut coords: Vec<_> = report.revealed.iter().map(|(pos, _)| *pos).collect();
        coords.sort();
        coords.dedup();

        assert_eq!(coords.len(), report.revealed.len());
        assert_eq!(coords.len(), 24);
        assert_eq!(remaining, 0);
    }
}
