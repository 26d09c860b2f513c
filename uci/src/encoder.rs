use super::commands::UciInput;

pub struct Encoder;

impl Encoder {
    pub fn encode(&self, command: &UciInput) -> String {
        match command {
            UciInput::Uci => "uci".to_string(),
            UciInput::IsReady => "isready".to_string(),
            UciInput::UciNewGame => "ucinewgame".to_string(),
            UciInput::Position { fen } => format!("position fen {}", fen),
            UciInput::Go { move_time } => format!("go movetime {}", move_time),
            UciInput::Quit => "quit".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_commands() {
        assert_eq!(Encoder.encode(&UciInput::Uci), "uci");
        assert_eq!(Encoder.encode(&UciInput::IsReady), "isready");
        assert_eq!(Encoder.encode(&UciInput::UciNewGame), "ucinewgame");
        assert_eq!(Encoder.encode(&UciInput::Go { move_time: 250 }), "go movetime 250");
        assert_eq!(Encoder.encode(&UciInput::Quit), "quit");
    }

    #[test]
    fn test_encode_position() {
        let fen = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1";
        assert_eq!(
            Encoder.encode(&UciInput::Position {
                fen: fen.to_string()
            }),
            format!("position fen {}", fen)
        );
    }
}
