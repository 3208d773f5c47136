//! Board engine for a square-grid mine sweeping game.
//!
//! A [`GameController`] owns one generated [`Grid`] and accepts reveal and flag moves until the game is won or lost.
//! Rendering and input handling live outside this crate, everything they need is exposed through [`Snapshot`] and
//! [`RevealResult`].
#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use cell::*;
pub use controller::*;
pub use error::*;
pub use generator::*;
pub use grid::*;
pub use reveal::*;
pub use types::*;

mod cell;
mod controller;
mod error;
mod generator;
mod grid;
mod reveal;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub side: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    pub const DEFAULT_SIDE: Coord = 10;
    pub const DEFAULT_MINES: CellCount = 20;

    pub const fn new_unchecked(side: Coord, mines: CellCount) -> Self {
        Self { side, mines }
    }

    /// Creates a config for a `side`x`side` board, requires `0 < mines < side * side`.
    pub fn new(side: Coord, mines: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(side, mines);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.mines == 0 || self.mines >= self.total_cells() {
            log::warn!(
                "Rejected config: {} mines do not fit a {}x{} board",
                self.mines,
                self.side,
                self.side
            );
            return Err(GameError::InvalidConfiguration {
                side: self.side,
                mines: self.mines,
            });
        }
        Ok(())
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.side, self.side)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(Self::DEFAULT_SIDE, Self::DEFAULT_MINES)
    }
}
