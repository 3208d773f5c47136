use std::io::{BufRead, Write};

use anyhow::Context;
use gridsweep_core::{GameController, GameError, RevealOutcome, Visibility};

use crate::command::{Command, cell_label};
use crate::render::BoardView;

/// How an interactive session finished.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Ending {
    Won,
    Lost,
    Quit,
}

const HELP: &str = "\
Commands:
  A0      reveal the cell in column A, row 0
  A0 F    set or remove a flag on that cell
  H       show this help
  Q       quit the game";

/// Plays `game` with commands read line by line from `input` until it ends or input runs out.
pub fn run(
    game: &mut GameController,
    mut input: impl BufRead,
    mut out: impl Write,
) -> anyhow::Result<Ending> {
    let side = game.side();
    let mines = game.config().mines;
    writeln!(out, "Welcome to gridsweep!")?;
    writeln!(out, "{mines} mines are hidden on a {side}x{side} board.")?;
    writeln!(out, "{HELP}")?;

    loop {
        writeln!(out)?;
        writeln!(out, "Mines left: {}", game.mines_left())?;
        write!(out, "{}", BoardView(&game.snapshot()))?;
        write!(out, "-> ")?;
        out.flush()?;

        let mut line = String::new();
        let read = input
            .read_line(&mut line)
            .context("could not read command")?;
        if read == 0 {
            log::debug!("input closed, leaving game");
            return Ok(Ending::Quit);
        }

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(err) => {
                writeln!(out, "Invalid input: {err}")?;
                continue;
            }
        };
        log::debug!("command: {:?}", command);

        match command {
            Command::Quit => return Ok(Ending::Quit),
            Command::Help => writeln!(out, "{HELP}")?,
            Command::ToggleFlag(coords) => match game.toggle_flag(coords) {
                Ok(Visibility::Flagged) => writeln!(out, "Flag was added!")?,
                Ok(_) => writeln!(out, "Flag was removed!")?,
                Err(err) => writeln!(out, "{}", rejection(err))?,
            },
            Command::Reveal(coords) => match game.reveal(coords) {
                Ok(result) => match result.outcome {
                    RevealOutcome::Continue => match result.revealed.len() {
                        1 => writeln!(out, "Good pick!")?,
                        count => writeln!(out, "Good pick! {count} cells revealed.")?,
                    },
                    RevealOutcome::Won => {
                        writeln!(out)?;
                        write!(out, "{}", BoardView(&game.snapshot()))?;
                        writeln!(out, "Congratulations, you won!")?;
                        return Ok(Ending::Won);
                    }
                    RevealOutcome::Lost => {
                        writeln!(out, "MINE at {}! You lost.", cell_label(coords))?;
                        writeln!(out, "Solution:")?;
                        write!(out, "{}", BoardView(&game.solution()))?;
                        return Ok(Ending::Lost);
                    }
                },
                Err(err) => writeln!(out, "{}", rejection(err))?,
            },
        }
    }
}

/// Player-facing message for a move the engine refused.
fn rejection(err: GameError) -> String {
    match err {
        GameError::OutOfBounds { coords, side } => {
            format!("{} is not on the {side}x{side} board.", cell_label(coords))
        }
        GameError::InvalidTransition {
            coords,
            visibility: Visibility::Revealed,
        } => format!("{} was already revealed.", cell_label(coords)),
        GameError::InvalidTransition {
            coords,
            visibility: Visibility::Flagged,
        } => format!("{} is flagged, remove the flag first.", cell_label(coords)),
        err => err.to_string(),
    }
}
