use std::ffi::OsStr;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};
use std::time::Duration;

use chess::ChessMove;
use thiserror::Error;

use crate::{
    commands::{UciInput, UciOutput},
    parse_move, Decoder, Encoder, NotationError, NULL_MOVE,
};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("failed to start engine {path}: {source}")]
    Spawn {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("engine {0} pipe unavailable")]
    Pipe(&'static str),
    #[error("engine i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error("engine closed its output")]
    Closed,
    #[error("engine returned no move ({0})")]
    NoMove(String),
    #[error("engine returned a malformed move: {0}")]
    Notation(#[from] NotationError),
}

/// A UCI engine running as a child process. One request is in flight at a
/// time: every call writes its commands and blocks until the answer arrives.
pub struct EngineProcess {
    child: Child,
    stdin: BufWriter<ChildStdin>,
    stdout: BufReader<ChildStdout>,
    name: Option<String>,
}

impl EngineProcess {
    pub fn new(path: &Path) -> Result<Self, ClientError> {
        Self::with_args(path, &[] as &[&str])
    }

    /// Spawns the engine and completes the `uci`/`isready` handshake.
    pub fn with_args<S: AsRef<OsStr>>(path: &Path, args: &[S]) -> Result<Self, ClientError> {
        let mut child = Command::new(path)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| ClientError::Spawn {
                path: path.to_path_buf(),
                source,
            })?;

        let (Some(stdin), Some(stdout)) = (child.stdin.take(), child.stdout.take()) else {
            let _ = child.kill();
            return Err(ClientError::Pipe("stdio"));
        };

        let mut engine = Self {
            child,
            stdin: BufWriter::new(stdin),
            stdout: BufReader::new(stdout),
            name: None,
        };

        engine.handshake()?;
        Ok(engine)
    }

    /// Name the engine reported with `id name`, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Asks for the best move in `fen` given `move_time` milliseconds.
    /// The move is only checked for shape, not for legality.
    pub fn best_move(&mut self, fen: &str, move_time: u64) -> Result<ChessMove, ClientError> {
        self.send(&UciInput::Position {
            fen: fen.to_string(),
        })?;
        self.send(&UciInput::Go { move_time })?;

        loop {
            if let UciOutput::BestMove { best_move, .. } = self.receive()? {
                if best_move == NULL_MOVE || best_move == "(none)" {
                    return Err(ClientError::NoMove(best_move));
                }
                return Ok(parse_move(&best_move)?);
            }
        }
    }

    pub fn new_game(&mut self) -> Result<(), ClientError> {
        self.send(&UciInput::UciNewGame)?;
        self.wait_ready()
    }

    fn handshake(&mut self) -> Result<(), ClientError> {
        self.send(&UciInput::Uci)?;
        loop {
            match self.receive()? {
                UciOutput::IdName(name) => self.name = Some(name),
                UciOutput::UciOk => break,
                _ => {}
            }
        }

        self.new_game()
    }

    fn wait_ready(&mut self) -> Result<(), ClientError> {
        self.send(&UciInput::IsReady)?;
        while self.receive()? != UciOutput::ReadyOk {}
        Ok(())
    }

    fn send(&mut self, command: &UciInput) -> Result<(), ClientError> {
        let line = Encoder.encode(command);
        log::debug!(">> {}", line);

        writeln!(self.stdin, "{}", line)?;
        self.stdin.flush()?;
        Ok(())
    }

    fn receive(&mut self) -> Result<UciOutput, ClientError> {
        let mut line = String::new();
        if self.stdout.read_line(&mut line)? == 0 {
            return Err(ClientError::Closed);
        }

        log::debug!("<< {}", line.trim_end());
        Ok(Decoder.decode(&line))
    }
}

impl Drop for EngineProcess {
    fn drop(&mut self) {
        // Ask politely first, kill if the engine is gone or does not listen
        if self.send(&UciInput::Quit).is_err() {
            let _ = self.child.kill();
            let _ = self.child.wait();
            return;
        }

        std::thread::sleep(Duration::from_millis(100));

        match self.child.try_wait() {
            Ok(Some(_)) => {}
            _ => {
                let _ = self.child.kill();
                let _ = self.child.wait();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_binary() {
        let result = EngineProcess::new(Path::new("/nonexistent/engine"));
        assert!(matches!(result, Err(ClientError::Spawn { .. })));
    }

    #[cfg(unix)]
    mod scripted {
        use super::*;
        use chess::Square;

        const FAKE_ENGINE: &str = r#"
while read -r line; do
  case "$line" in
    uci) echo "id name Fake Engine"; echo "uciok" ;;
    isready) echo "readyok" ;;
    go*) echo "info depth 1 score cp 20"; echo "bestmove e2e4 ponder e7e5" ;;
    quit) exit 0 ;;
  esac
done
"#;

        const NO_MOVE_ENGINE: &str = r#"
while read -r line; do
  case "$line" in
    uci) echo "uciok" ;;
    isready) echo "readyok" ;;
    go*) echo "bestmove (none)" ;;
    quit) exit 0 ;;
  esac
done
"#;

        fn spawn(script: &str) -> Result<EngineProcess, ClientError> {
            EngineProcess::with_args(Path::new("/bin/sh"), &["-c", script])
        }

        #[test]
        fn test_handshake_and_best_move() {
            let mut engine = spawn(FAKE_ENGINE).unwrap();
            assert_eq!(engine.name(), Some("Fake Engine"));

            let fen = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
            let mv = engine.best_move(fen, 10).unwrap();
            assert_eq!(mv, ChessMove::new(Square::E2, Square::E4, None));

            // Requests can be repeated on the same process
            assert!(engine.best_move(fen, 10).is_ok());
        }

        #[test]
        fn test_engine_without_move() {
            let mut engine = spawn(NO_MOVE_ENGINE).unwrap();
            assert_eq!(engine.name(), None);

            let result = engine.best_move("7k/8/6Q1/8/8/8/8/K7 b - - 0 1", 10);
            assert!(matches!(result, Err(ClientError::NoMove(text)) if text == "(none)"));
        }

        #[test]
        fn test_engine_that_exits_during_handshake() {
            let result = spawn("read -r line; exit 0");
            assert!(matches!(result, Err(ClientError::Closed)));
        }
    }
}
