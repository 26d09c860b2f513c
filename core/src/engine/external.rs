use std::path::Path;
use std::time::Duration;

use chess::ChessMove;
use uci::{format_move, EngineProcess};
use utils::Position;

use super::{Engine, EngineError};

/// Defers to a UCI engine running in a child process.
pub struct ExternalEngine {
    process: EngineProcess,
    name: String,
}

impl ExternalEngine {
    pub fn new(path: &Path) -> Result<Self, EngineError> {
        Ok(Self::from_process(EngineProcess::new(path)?, path))
    }

    fn from_process(process: EngineProcess, path: &Path) -> Self {
        let name = match process.name() {
            Some(name) => name.to_string(),
            None => path.display().to_string(),
        };
        log::debug!("Connected to external engine {}", name);

        Self { process, name }
    }
}

impl Engine for ExternalEngine {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn select_move(
        &mut self,
        position: &mut Position,
        think_time: Duration,
    ) -> Result<ChessMove, EngineError> {
        let move_time = think_time.as_millis().max(1) as u64;
        let mv = self.process.best_move(&position.fen(), move_time)?;

        if !position.is_legal(mv) {
            return Err(EngineError::IllegalMove(format_move(mv)));
        }
        Ok(mv)
    }
}
