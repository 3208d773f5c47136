use gridsweep_core::{Coord, Coord2};
use thiserror::Error;

/// A single line of player input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Reveal(Coord2),
    ToggleFlag(Coord2),
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty command")]
    Empty,
    #[error("too many words")]
    TooManyWords,
    #[error("`{0}` is not a cell, use a column letter followed by a row number, e.g. A0")]
    BadCell(String),
    #[error("unknown suffix `{0}`, only F (flag) is allowed")]
    BadSuffix(String),
}

impl Command {
    /// Parses `A0` (reveal), `A0 F` (toggle flag), `H` (help) or `Q` (quit), ignoring case.
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let line = line.trim().to_ascii_uppercase();
        let words: Vec<&str> = line.split_whitespace().collect();

        match words.as_slice() {
            [] => Err(ParseError::Empty),
            ["Q"] => Ok(Self::Quit),
            ["H" | "?"] => Ok(Self::Help),
            [cell] => Ok(Self::Reveal(parse_cell(cell)?)),
            [cell, "F"] => Ok(Self::ToggleFlag(parse_cell(cell)?)),
            [_, suffix] => Err(ParseError::BadSuffix(suffix.to_string())),
            _ => Err(ParseError::TooManyWords),
        }
    }
}

/// Column letter then row number, so `C7` is row 7, column 2.
fn parse_cell(word: &str) -> Result<Coord2, ParseError> {
    let bad_cell = || ParseError::BadCell(word.to_string());

    let mut chars = word.chars();
    let col = chars
        .next()
        .filter(char::is_ascii_uppercase)
        .ok_or_else(bad_cell)?;
    let row_digits = chars.as_str();
    if row_digits.is_empty() || !row_digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(bad_cell());
    }
    let row: Coord = row_digits.parse().map_err(|_| bad_cell())?;

    Ok((row, col as Coord - b'A'))
}

/// Inverse of the cell syntax accepted by [`Command::parse`].
pub fn cell_label((row, col): Coord2) -> String {
    let col = char::from(b'A'.saturating_add(col));
    format!("{col}{row}")
}
