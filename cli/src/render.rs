use std::fmt::{self, Display};

use gridsweep_core::{DisplaySymbol, Snapshot};

/// Text rendering of a board, column letters across the top and row numbers down the side.
///
/// | Symbol      | Char |
/// | ----------- | ---- |
/// | `Hidden`    | `-`  |
/// | `Flag`      | `F`  |
/// | `Mine`      | `M`  |
/// | `Blank`     | ` `  |
/// | `Number(n)` | `n`  |
pub struct BoardView<'a>(pub &'a Snapshot);

impl Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let snapshot = self.0;

        write!(f, "   ")?;
        for col in 0..snapshot.side() {
            write!(f, " {}", char::from(b'A'.saturating_add(col)))?;
        }
        writeln!(f)?;

        for (row, symbols) in snapshot.rows().enumerate() {
            write!(f, "{row:>2} ")?;
            for symbol in symbols {
                write!(f, " {}", symbol_char(symbol))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn symbol_char(symbol: DisplaySymbol) -> char {
    match symbol {
        DisplaySymbol::Hidden => '-',
        DisplaySymbol::Flag => 'F',
        DisplaySymbol::Mine => 'M',
        DisplaySymbol::Blank => ' ',
        DisplaySymbol::Number(n) => char::from_digit(n.into(), 10).unwrap_or('?'),
    }
}
