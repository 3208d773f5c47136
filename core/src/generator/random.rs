use alloc::vec::Vec;
use rand::prelude::*;
use rand::rngs::SmallRng;

use super::*;

/// Purely random generation: every placement of the configured mine count is equally likely.
///
/// Generation is reproducible, the same seed and config always give the same board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RandomBoardGenerator {
    seed: u64,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Picks a fresh seed from the operating system's entropy source.
    pub fn from_entropy() -> Self {
        let mut rng = SmallRng::from_os_rng();
        Self::new(rng.next_u64())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self, config: GameConfig) -> Result<Grid> {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let grid = generate_with_rng(config, &mut rng)?;
        log::debug!(
            "Generated {}x{} board with {} mines from seed {}",
            config.side,
            config.side,
            config.mines,
            self.seed
        );
        Ok(grid)
    }
}

/// Shuffles all linear cell indices and mines the first `config.mines` of them.
pub fn generate_with_rng<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Result<Grid> {
    config.validate()?;

    let mut indices: Vec<CellCount> = (0..config.total_cells()).collect();
    indices.shuffle(rng);

    let mines = indices[..usize::from(config.mines)]
        .iter()
        .map(|&index| unflatten(index, config.side));

    Ok(build_grid(config.side, mines))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mine_positions(grid: &Grid) -> Vec<Coord2> {
        grid.iter()
            .filter(|(_, cell)| cell.content.is_mine())
            .map(|(coords, _)| coords)
            .collect()
    }

    #[test]
    fn places_exact_mine_count() {
        let config = GameConfig::new(10, 20).unwrap();

        for seed in 0..50 {
            let grid = RandomBoardGenerator::new(seed).generate(config).unwrap();
            assert_eq!(grid.mine_count(), 20);
            assert_eq!(mine_positions(&grid).len(), 20);
        }
    }

    #[test]
    fn same_seed_same_board() {
        let config = GameConfig::new(8, 10).unwrap();

        let a = RandomBoardGenerator::new(7).generate(config).unwrap();
        let b = RandomBoardGenerator::new(7).generate(config).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_vary_layout() {
        let config = GameConfig::new(10, 20).unwrap();
        let first = mine_positions(&RandomBoardGenerator::new(0).generate(config).unwrap());

        let any_different = (1..10).any(|seed| {
            mine_positions(&RandomBoardGenerator::new(seed).generate(config).unwrap()) != first
        });
        assert!(any_different);
    }

    #[test]
    fn nearly_full_board_leaves_one_safe_cell() {
        let config = GameConfig::new(3, 8).unwrap();
        let grid = RandomBoardGenerator::new(3).generate(config).unwrap();

        let safe: Vec<_> = grid
            .iter()
            .filter(|(_, cell)| !cell.content.is_mine())
            .collect();
        assert_eq!(safe.len(), 1);
        let (coords, cell) = safe[0];
        assert_eq!(
            cell.content,
            CellContent::Adjacent(grid.iter_neighbors(coords).count() as u8)
        );
    }

    #[test]
    fn rejects_invalid_config() {
        let err = RandomBoardGenerator::new(0)
            .generate(GameConfig::new_unchecked(4, 16))
            .unwrap_err();

        assert_eq!(err, GameError::InvalidConfiguration { side: 4, mines: 16 });
    }

    #[test]
    fn every_cell_can_hold_a_mine() {
        let config = GameConfig::new(3, 1).unwrap();
        let mut seen = [[false; 3]; 3];

        for seed in 0..500 {
            let grid = RandomBoardGenerator::new(seed).generate(config).unwrap();
            for (row, col) in mine_positions(&grid) {
                seen[row as usize][col as usize] = true;
            }
        }

        assert!(seen.iter().flatten().all(|&hit| hit));
    }
}
