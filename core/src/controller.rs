use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - InProgress -> Won
/// - InProgress -> Lost
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// Indicates the game has ended and no moves can be made anymore
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::InProgress
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    Continue,
    Won,
    Lost,
}

/// What a single reveal did to the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealResult {
    pub outcome: RevealOutcome,
    pub revealed: Vec<(Coord2, DisplaySymbol)>,
}

/// One game session, from a freshly generated board until it is won or lost.
#[derive(Clone, Debug, PartialEq)]
pub struct GameController {
    config: GameConfig,
    grid: Grid,
    remaining_safe: CellCount,
    flagged_count: CellCount,
    status: GameStatus,
    triggered_mine: Option<Coord2>,
    seed: Option<u64>,
}

impl GameController {
    /// Starts a game on a board seeded from OS entropy.
    pub fn new(config: GameConfig) -> Result<Self> {
        Self::with_random(config, RandomBoardGenerator::from_entropy())
    }

    /// Starts a game on a reproducible board.
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self> {
        Self::with_random(config, RandomBoardGenerator::new(seed))
    }

    /// Starts a game on a board from any generator.
    ///
    /// The board must match `config` and have no move applied to it yet.
    pub fn with_generator(config: GameConfig, generator: impl BoardGenerator) -> Result<Self> {
        let grid = generator.generate(config)?;
        if grid.side() != config.side || grid.mine_count() != config.mines || !grid.is_untouched()
        {
            log::warn!(
                "Generator returned a {}x{} board with {} mines for {:?}",
                grid.side(),
                grid.side(),
                grid.mine_count(),
                config
            );
            return Err(GameError::InvalidConfiguration {
                side: config.side,
                mines: config.mines,
            });
        }
        Ok(Self::from_grid(config, grid))
    }

    fn with_random(config: GameConfig, generator: RandomBoardGenerator) -> Result<Self> {
        let seed = generator.seed();
        let mut game = Self::with_generator(config, generator)?;
        game.seed = Some(seed);
        Ok(game)
    }

    fn from_grid(config: GameConfig, grid: Grid) -> Self {
        Self {
            config,
            remaining_safe: grid.safe_cell_count(),
            grid,
            flagged_count: 0,
            status: Default::default(),
            triggered_mine: None,
            seed: None,
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn side(&self) -> Coord {
        self.grid.side()
    }

    /// Safe cells that still have to be revealed to win.
    pub fn remaining_safe(&self) -> CellCount {
        self.remaining_safe
    }

    pub fn flag_count(&self) -> CellCount {
        self.flagged_count
    }

    /// How many mines have not been flagged yet, negative when there are more flags than mines.
    pub fn mines_left(&self) -> isize {
        (self.config.mines as isize) - (self.flagged_count as isize)
    }

    /// The mine that ended the game, if it was lost.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    /// Seed of the random board, `None` for boards from other generators.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn visibility_at(&self, coords: Coord2) -> Option<Visibility> {
        self.grid.get(coords).map(|cell| cell.visibility)
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealResult> {
        self.check_in_progress()?;

        let report = self.engine().reveal(coords)?;

        let outcome = if report.hit_mine {
            self.triggered_mine = Some(coords);
            self.end_game(GameStatus::Lost);
            RevealOutcome::Lost
        } else if self.remaining_safe == 0 {
            self.end_game(GameStatus::Won);
            RevealOutcome::Won
        } else {
            RevealOutcome::Continue
        };

        Ok(RevealResult {
            outcome,
            revealed: report.revealed,
        })
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<Visibility> {
        self.check_in_progress()?;

        let visibility = self.engine().toggle_flag(coords)?;
        match visibility {
            Visibility::Flagged => self.flagged_count += 1,
            _ => self.flagged_count -= 1,
        }
        log::debug!("Flag at {:?} is now {:?}", coords, visibility);
        Ok(visibility)
    }

    /// Player view of the board.
    ///
    /// Hidden cells never expose their content, except that unflagged mines are shown once the game is lost.
    pub fn snapshot(&self) -> Snapshot {
        let reveal_mines = matches!(self.status, GameStatus::Lost);
        self.grid.map_symbols(|cell| cell.display(reveal_mines))
    }

    /// Full content of every cell regardless of visibility.
    pub fn solution(&self) -> Snapshot {
        self.grid
            .map_symbols(|cell| DisplaySymbol::from_content(cell.content))
    }

    fn engine(&mut self) -> RevealEngine<'_> {
        RevealEngine::new(&mut self.grid, &mut self.remaining_safe)
    }

    fn check_in_progress(&self) -> Result<()> {
        if self.status.is_finished() {
            Err(GameError::GameAlreadyOver)
        } else {
            Ok(())
        }
    }

    fn end_game(&mut self, status: GameStatus) {
        debug_assert!(status.is_finished());
        self.status = status;
        log::debug!(
            "Game ended: {:?}, {} safe cells left",
            status,
            self.remaining_safe
        );
    }
}
