use std::path::Path;

use anyhow::{Context, bail};
use gridsweep_core::{CellCount, Coord, GameConfig};
use serde::Deserialize;

/// Columns are addressed by a single letter.
pub const MAX_SIDE: Coord = 26;

/// Optional settings file, every key can also be given on the command line.
///
/// ```toml
/// side = 10
/// mines = 20
/// seed = 1234
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub side: Option<Coord>,
    pub mines: Option<CellCount>,
    pub seed: Option<u64>,
}

impl Settings {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("could not read settings file {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("invalid settings file {}", path.display()))
    }

    pub fn from_toml(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Values set in `overrides` win over the ones in `self`.
    pub fn merge(self, overrides: Settings) -> Self {
        Self {
            side: overrides.side.or(self.side),
            mines: overrides.mines.or(self.mines),
            seed: overrides.seed.or(self.seed),
        }
    }

    /// Fills the gaps with the default board and checks it can be played from the terminal.
    pub fn game_config(&self) -> anyhow::Result<GameConfig> {
        let defaults = GameConfig::default();
        let side = self.side.unwrap_or(defaults.side);
        let mines = self.mines.unwrap_or(defaults.mines);

        if side > MAX_SIDE {
            bail!("side {side} is too large, at most {MAX_SIDE} columns can be addressed");
        }
        GameConfig::new(side, mines).context("cannot start a game with these settings")
    }
}
