use serde::{Deserialize, Serialize};

/// What a cell holds, fixed once the board is generated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellContent {
    Mine,
    /// Number of mines among the up to 8 neighbors.
    Adjacent(u8),
}

impl CellContent {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }
}

impl Default for CellContent {
    fn default() -> Self {
        Self::Adjacent(0)
    }
}

/// Player-visible state of a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    Hidden,
    Revealed,
    Flagged,
}

impl Default for Visibility {
    fn default() -> Self {
        Self::Hidden
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub content: CellContent,
    pub visibility: Visibility,
}

impl Cell {
    /// Symbol shown to the player, `reveal_mines` exposes mines that are still hidden.
    pub const fn display(self, reveal_mines: bool) -> DisplaySymbol {
        match (self.visibility, self.content) {
            (Visibility::Flagged, _) => DisplaySymbol::Flag,
            (Visibility::Hidden, CellContent::Mine) if reveal_mines => DisplaySymbol::Mine,
            (Visibility::Hidden, _) => DisplaySymbol::Hidden,
            (Visibility::Revealed, content) => DisplaySymbol::from_content(content),
        }
    }
}

/// Per-cell symbol handed to the rendering layer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplaySymbol {
    Hidden,
    Flag,
    Mine,
    Blank,
    Number(u8),
}

impl DisplaySymbol {
    pub const fn from_content(content: CellContent) -> Self {
        match content {
            CellContent::Mine => Self::Mine,
            CellContent::Adjacent(0) => Self::Blank,
            CellContent::Adjacent(count) => Self::Number(count),
        }
    }
}
