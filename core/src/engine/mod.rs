mod alpha_beta;
mod def;
mod external;
mod human;
mod random;
mod static_eval;

use evaluation::MaterialEvaluator;

use crate::args::{Args, Player};
pub use alpha_beta::AlphaBetaEngine;
pub use def::{Engine, EngineError};
pub use external::ExternalEngine;
pub use human::HumanEngine;
pub use random::RandomEngine;
pub use static_eval::StaticEngine;

pub fn create(
    player: Player,
    args: &Args,
    seed: Option<u64>,
) -> Result<Box<dyn Engine>, EngineError> {
    let engine: Box<dyn Engine> = match player {
        Player::Human => Box::new(HumanEngine::stdio()),
        Player::Random => Box::new(RandomEngine::new(seed)),
        Player::Static => Box::new(StaticEngine::new(Box::new(MaterialEvaluator), seed)),
        Player::Search => Box::new(AlphaBetaEngine::new(
            Box::new(MaterialEvaluator),
            args.search.config(),
        )?),
        Player::External => Box::new(ExternalEngine::new(&args.engine_path)?),
    };

    log::debug!("Created {:?} player: {}", player, engine.name());
    Ok(engine)
}
