use crate::core::{GameBoard, Move, Symbol};
use crate::error::InputError;
use crate::player::PlayerController;
use std::cell::RefCell;
use std::io::{self, BufRead, Write};

/// Line-oriented human input: column first, then row.
///
/// Nothing is checked against the board here; a malformed number or a
/// closed input stream is returned as an `InputError`.
pub struct HumanPlayer {
    symbol: Symbol,
    name: String,
    input: RefCell<Box<dyn BufRead>>,
    prompt: bool,
}

impl HumanPlayer {
    pub fn new(symbol: Symbol, name: &str) -> Self {
        Self {
            symbol,
            name: name.to_string(),
            input: RefCell::new(Box::new(io::BufReader::new(io::stdin()))),
            prompt: true,
        }
    }

    pub fn with_reader<R: BufRead + 'static>(symbol: Symbol, name: &str, reader: R) -> Self {
        Self {
            symbol,
            name: name.to_string(),
            input: RefCell::new(Box::new(reader)),
            prompt: false,
        }
    }

    fn read_int(&self, field: &'static str) -> Result<usize, InputError> {
        if self.prompt {
            print!("Enter {}: ", field);
            io::stdout().flush()?;
        }

        let mut line = String::new();
        if self.input.borrow_mut().read_line(&mut line)? == 0 {
            return Err(InputError::UnexpectedEof(field));
        }

        let trimmed = line.trim();
        trimmed.parse::<usize>().map_err(|source| InputError::Malformed {
            field,
            line: trimmed.to_string(),
            source,
        })
    }
}

impl<B: GameBoard> PlayerController<B> for HumanPlayer {
    fn get_move(&self, _board: &B) -> anyhow::Result<Option<Move>> {
        let col = self.read_int("col")?;
        let row = self.read_int("row")?;
        Ok(Some(Move::new(col, row)))
    }

    fn symbol(&self) -> Symbol {
        self.symbol
    }

    fn name(&self) -> &str {
        &self.name
    }
}
