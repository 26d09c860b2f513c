use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::time::Duration;

use chess::ChessMove;
use uci::parse_move;
use utils::Position;

use super::{Engine, EngineError};

const QUIT: &str = "quit";

/// Reads moves in coordinate notation until a legal one arrives.
pub struct HumanEngine<R, W> {
    input: R,
    output: W,
}

impl HumanEngine<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> HumanEngine<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn prompt(&mut self) -> Result<String, EngineError> {
        write!(self.output, "Enter your move (e.g. e2e4): ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(EngineError::InputClosed);
        }
        Ok(line.trim().to_string())
    }
}

impl<R: BufRead, W: Write> Engine for HumanEngine<R, W> {
    fn name(&self) -> String {
        "Human".to_string()
    }

    fn select_move(
        &mut self,
        position: &mut Position,
        _think_time: Duration,
    ) -> Result<ChessMove, EngineError> {
        loop {
            let text = self.prompt()?;
            if text.eq_ignore_ascii_case(QUIT) {
                return Err(EngineError::Quit);
            }

            match parse_move(&text) {
                Ok(mv) if position.is_legal(mv) => return Ok(mv),
                Ok(_) => writeln!(self.output, "Illegal move! Try again.")?,
                Err(err) => writeln!(self.output, "Invalid move: {}. Try again.", err)?,
            }
        }
    }
}
