use alloc::collections::BTreeSet;
use alloc::vec::Vec;

use super::*;

/// Places mines at exact coordinates, for scripted scenarios and replays.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedBoardGenerator {
    mines: Vec<Coord2>,
}

impl FixedBoardGenerator {
    pub fn new(mines: &[Coord2]) -> Self {
        Self {
            mines: mines.to_vec(),
        }
    }
}

impl BoardGenerator for FixedBoardGenerator {
    fn generate(self, config: GameConfig) -> Result<Grid> {
        config.validate()?;

        let mut mines = BTreeSet::new();
        for coords in self.mines {
            if coords.0 >= config.side || coords.1 >= config.side {
                return Err(GameError::OutOfBounds {
                    coords,
                    side: config.side,
                });
            }
            mines.insert(coords);
        }

        if mines.len() != usize::from(config.mines) {
            log::warn!(
                "Fixed layout has {} distinct mines, config asks for {}",
                mines.len(),
                config.mines
            );
            return Err(GameError::InvalidConfiguration {
                side: config.side,
                mines: config.mines,
            });
        }

        Ok(build_grid(config.side, mines))
    }
}
