use super::commands::UciOutput;

pub struct Decoder;

impl Decoder {
    pub fn decode(&self, line: &str) -> UciOutput {
        let line = line.trim();

        match line {
            "uciok" => UciOutput::UciOk,
            "readyok" => UciOutput::ReadyOk,

            _ if line.starts_with("id name ") => {
                UciOutput::IdName(line["id name ".len()..].trim().to_string())
            }
            _ if line.starts_with("id author ") => {
                UciOutput::IdAuthor(line["id author ".len()..].trim().to_string())
            }
            _ if line.starts_with("bestmove") => self.decode_bestmove(line),
            _ if line.starts_with("info") => {
                UciOutput::Info(line["info".len()..].trim().to_string())
            }
            _ if line.starts_with("option") => UciOutput::Option(line.to_string()),

            _ => UciOutput::Unknown(line.to_string()),
        }
    }

    fn decode_bestmove(&self, line: &str) -> UciOutput {
        // bestmove <move> [ponder <move>]
        let mut tokens = line.split_whitespace().skip(1);
        let Some(best_move) = tokens.next() else {
            return UciOutput::Unknown(line.to_string());
        };

        let ponder = match (tokens.next(), tokens.next()) {
            (Some("ponder"), Some(mv)) => Some(mv.to_string()),
            _ => None,
        };

        UciOutput::BestMove {
            best_move: best_move.to_string(),
            ponder,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_responses() {
        assert_eq!(Decoder.decode("uciok"), UciOutput::UciOk);
        assert_eq!(Decoder.decode("readyok\n"), UciOutput::ReadyOk);
    }

    #[test]
    fn test_id() {
        assert_eq!(
            Decoder.decode("id name Stockfish 16"),
            UciOutput::IdName("Stockfish 16".to_string())
        );
        assert_eq!(
            Decoder.decode("id author the Stockfish developers"),
            UciOutput::IdAuthor("the Stockfish developers".to_string())
        );
    }

    #[test]
    fn test_bestmove() {
        let UciOutput::BestMove { best_move, ponder } = Decoder.decode("bestmove e2e4") else {
            panic!("Expected BestMove")
        };
        assert_eq!(best_move, "e2e4");
        assert!(ponder.is_none());
    }

    #[test]
    fn test_bestmove_with_ponder() {
        let UciOutput::BestMove { best_move, ponder } =
            Decoder.decode("bestmove g1f3 ponder g8f6")
        else {
            panic!("Expected BestMove")
        };
        assert_eq!(best_move, "g1f3");
        assert_eq!(ponder.as_deref(), Some("g8f6"));
    }

    #[test]
    fn test_bestmove_without_move() {
        assert!(matches!(Decoder.decode("bestmove"), UciOutput::Unknown(_)));
    }

    #[test]
    fn test_info_and_option() {
        assert_eq!(
            Decoder.decode("info depth 12 score cp 31"),
            UciOutput::Info("depth 12 score cp 31".to_string())
        );
        assert!(matches!(
            Decoder.decode("option name Hash type spin default 16 min 1 max 33554432"),
            UciOutput::Option(_)
        ));
    }

    #[test]
    fn test_unknown_line() {
        assert!(matches!(
            Decoder.decode("Stockfish 16 by the Stockfish developers"),
            UciOutput::Unknown(_)
        ));
    }
}
