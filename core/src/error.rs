use thiserror::Error;

use crate::{CellCount, Coord, Coord2, Visibility};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid configuration: {mines} mines on a {side}x{side} board")]
    InvalidConfiguration { side: Coord, mines: CellCount },
    #[error("Coordinates {coords:?} are outside a {side}x{side} board")]
    OutOfBounds { coords: Coord2, side: Coord },
    #[error("Cell at {coords:?} is {visibility:?}, move not allowed")]
    InvalidTransition {
        coords: Coord2,
        visibility: Visibility,
    },
    #[error("Game already ended, no new moves are accepted")]
    GameAlreadyOver,
}

pub type Result<T> = core::result::Result<T, GameError>;
