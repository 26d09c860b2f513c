use std::time::Duration;

use chess::Color;
use uci::format_move;
use utils::Position;

use crate::engine::{Engine, EngineError};
use crate::outcome::GameOutcome;

/// Alternates two engines until the game is over.
pub struct Game {
    white: Box<dyn Engine>,
    black: Box<dyn Engine>,
    think_time: Duration,
}

impl Game {
    pub fn new(white: Box<dyn Engine>, black: Box<dyn Engine>, think_time: Duration) -> Self {
        Self {
            white,
            black,
            think_time,
        }
    }

    pub fn play(&mut self, mut position: Position) -> Result<GameOutcome, EngineError> {
        let starting_position = position.fen();
        let white_name = self.white.name();
        let black_name = self.black.name();
        log::info!("Starting game: {} vs {}", white_name, black_name);

        let mut moves = Vec::new();
        let mut positions = Vec::new();

        let termination = loop {
            if let Some(termination) = position.termination() {
                break termination;
            }

            let engine = match position.side_to_move() {
                Color::White => &mut self.white,
                Color::Black => &mut self.black,
            };

            let mv = engine.select_move(&mut position, self.think_time)?;
            if !position.is_legal(mv) {
                return Err(EngineError::IllegalMove(format_move(mv)));
            }

            log::info!("{} plays {}", engine.name(), format_move(mv));

            positions.push(*position.board());
            position.push(mv);
            moves.push(mv);
        };

        let result = termination.result(position.side_to_move());
        log::info!("Game over by {}: {}", termination, result);

        Ok(GameOutcome {
            starting_position,
            white_name,
            black_name,
            termination,
            result,
            moves,
            positions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{AlphaBetaEngine, RandomEngine, StaticEngine};
    use chess::ChessMove;
    use evaluation::MaterialEvaluator;
    use search::SearchConfig;
    use std::str::FromStr;
    use utils::Termination;

    /// Plays the same move whatever happens.
    struct Stubborn(ChessMove);

    impl Engine for Stubborn {
        fn name(&self) -> String {
            "Stubborn".to_string()
        }

        fn select_move(&mut self, _: &mut Position, _: Duration) -> Result<ChessMove, EngineError> {
            Ok(self.0)
        }
    }

    fn searcher(max_depth: u8) -> Box<dyn Engine> {
        let config = SearchConfig {
            max_depth,
            ..Default::default()
        };
        Box::new(AlphaBetaEngine::new(Box::new(MaterialEvaluator), config).unwrap())
    }

    #[test]
    fn test_random_game_terminates() {
        let mut game = Game::new(
            Box::new(RandomEngine::new(Some(1))),
            Box::new(RandomEngine::new(Some(2))),
            Duration::ZERO,
        );

        let outcome = game.play(Position::default()).unwrap();
        assert!(!outcome.moves.is_empty());
        assert_eq!(outcome.moves.len(), outcome.positions.len());
        assert!(["1-0", "0-1", "1/2-1/2"].contains(&outcome.result));
    }

    #[test]
    fn test_search_delivers_mate() {
        let mut game = Game::new(
            searcher(2),
            Box::new(RandomEngine::new(Some(1))),
            Duration::from_secs(10),
        );

        let position = Position::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").unwrap();
        let outcome = game.play(position).unwrap();

        assert_eq!(outcome.termination, Termination::Checkmate);
        assert_eq!(outcome.result, "1-0");
        assert_eq!(outcome.moves.len(), 1);
        assert_eq!(
            outcome.to_string(),
            "AlphaBeta (Material) vs Random - 1 moves: 1-0 (checkmate)"
        );
    }

    #[test]
    fn test_black_mates_with_static_player() {
        // Mirror of the back rank mate, Black to move
        let mut game = Game::new(
            Box::new(RandomEngine::new(Some(1))),
            Box::new(StaticEngine::new(Box::new(MaterialEvaluator), Some(1))),
            Duration::ZERO,
        );

        let position = Position::from_fen("r5k1/8/8/8/8/8/5PPP/6K1 b - - 0 1").unwrap();
        let outcome = game.play(position).unwrap();

        assert_eq!(outcome.result, "0-1");
        assert_eq!(outcome.moves, vec![ChessMove::from_str("a8a1").unwrap()]);
    }

    #[test]
    fn test_finished_position_plays_no_moves() {
        let mut game = Game::new(searcher(1), searcher(1), Duration::ZERO);

        let position = Position::from_fen("k7/8/8/8/8/8/8/K7 w - - 0 1").unwrap();
        let outcome = game.play(position).unwrap();

        assert_eq!(outcome.termination, Termination::InsufficientMaterial);
        assert_eq!(outcome.result, "1/2-1/2");
        assert!(outcome.moves.is_empty());
    }

    #[test]
    fn test_illegal_move_stops_the_game() {
        let mut game = Game::new(
            Box::new(Stubborn(ChessMove::from_str("e2e5").unwrap())),
            searcher(1),
            Duration::ZERO,
        );

        assert!(matches!(
            game.play(Position::default()),
            Err(EngineError::IllegalMove(mv)) if mv == "e2e5"
        ));
    }
}
