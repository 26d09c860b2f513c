use std::time::Duration;

use evaluation::MaterialEvaluator;
use search::{ConfigError, SearchConfig, SearchEngine};
use uci::format_move;
use utils::Position;

/// Perft positions from https://github.com/AndyGrant/Ethereal/blob/master/src/perft/standard.epd
pub const POSITIONS: &[&str] = &[
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    "n1n5/PPPk4/8/8/8/8/4Kppp/5N1N b - - 0 1",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    "rnbqkb1r/ppppp1pp/7n/4Pp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
];

pub fn run(config: SearchConfig, think_time: Duration) -> Result<(), ConfigError> {
    let engine = SearchEngine::new(Box::new(MaterialEvaluator), config)?;

    println!(
        "Running benchmark: {} positions, {} ms each\n",
        POSITIONS.len(),
        think_time.as_millis()
    );

    let mut total_nodes = 0;
    let mut total_time = Duration::ZERO;

    for fen in POSITIONS {
        let mut position = match Position::from_fen(fen) {
            Ok(position) => position,
            Err(err) => {
                log::warn!("Skipping {}: {}", fen, err);
                continue;
            }
        };

        let outcome = engine.search(&mut position, think_time);
        total_nodes += outcome.nodes;
        total_time += outcome.elapsed;

        println!("{}", fen);
        println!(
            "  best {} score {} depth {} nodes {} nps {}",
            outcome
                .best_move
                .map_or_else(|| "none".to_string(), format_move),
            outcome
                .score
                .map_or_else(|| "none".to_string(), |score| score.to_string()),
            outcome.depth,
            outcome.nodes,
            nps(outcome.nodes, outcome.elapsed)
        );
    }

    println!("\n=== Benchmark Summary ===");
    println!("Nodes: {}", total_nodes);
    println!("NPS: {}", nps(total_nodes, total_time));
    println!("Time: {} ms", total_time.as_millis());

    Ok(())
}

fn nps(nodes: u64, elapsed: Duration) -> u64 {
    let seconds = elapsed.as_secs_f64();
    if seconds > 0.0 {
        (nodes as f64 / seconds) as u64
    } else {
        0
    }
}
