/// Requests sent to an engine process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UciInput {
    Uci,
    IsReady,
    UciNewGame,
    Position { fen: String },
    Go { move_time: u64 },
    Quit,
}

/// Lines an engine process answers with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UciOutput {
    IdName(String),
    IdAuthor(String),
    UciOk,
    ReadyOk,
    BestMove {
        best_move: String,
        ponder: Option<String>,
    },
    Info(String),
    Option(String),
    Unknown(String),
}
