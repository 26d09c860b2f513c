pub mod def;
pub mod material;
mod pst;
pub mod scores;
pub mod values;

pub use def::Evaluator;
pub use material::{evaluate, static_score, terminal_score, MaterialEvaluator};
pub use values::piece_value;
