mod args;
mod bench;
mod engine;
mod game;
mod outcome;

use std::error::Error;
use std::fs::{self, File};
use std::time::Duration;

use args::{Args, Command};
use clap::Parser;
use engine::EngineError;
use game::Game;
use log::LevelFilter;
use simplelog::{CombinedLogger, Config, SharedLogger, SimpleLogger, WriteLogger};
use utils::Position;

fn main() -> Result<(), Box<dyn Error>> {
    let args = init()?;

    let config = args.search.config();
    config.validate()?;

    if let Some(Command::Bench { think_time }) = args.command {
        bench::run(config, Duration::from_millis(think_time))?;
        return Ok(());
    }

    let position = match &args.fen {
        Some(fen) => Position::from_fen(fen)?,
        None => Position::default(),
    };

    let players = engine::create(args.white, &args, args.seed).and_then(|white| {
        let black = engine::create(args.black, &args, args.seed.map(|seed| seed.wrapping_add(1)))?;
        Ok((white, black))
    });
    let (white, black) = match players {
        Ok(players) => players,
        Err(err) if err.ends_game_only() => {
            log::error!("Game not started: {}", err);
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    let mut game = Game::new(white, black, Duration::from_millis(args.think_time));
    match game.play(position) {
        Ok(outcome) => {
            log::info!("{}", outcome);

            if let Some(path) = &args.pgn {
                fs::write(path, outcome.to_pgn())?;
                log::info!("Saved game to {}", path.display());
            }
        }
        Err(EngineError::Quit) | Err(EngineError::InputClosed) => {
            log::info!("Game abandoned");
        }
        Err(err) if err.ends_game_only() => {
            log::error!("Game aborted: {}", err);
        }
        Err(err) => return Err(err.into()),
    }

    Ok(())
}

fn init() -> Result<Args, Box<dyn Error>> {
    let args = Args::parse();

    let mut loggers: Vec<Box<dyn SharedLogger>> =
        vec![SimpleLogger::new(args.log_level, Config::default())];

    if let Some(log_file) = &args.log_file {
        loggers.push(WriteLogger::new(
            LevelFilter::Debug,
            Config::default(),
            File::create(log_file)?,
        ));
    }

    CombinedLogger::init(loggers)?;

    Ok(args)
}
