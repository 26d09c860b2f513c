use utils::Position;

/// Static position evaluation.
pub trait Evaluator: Send {
    fn name(&self) -> String;
    /// Evaluate position from White's perspective. Positive = White advantage.
    fn evaluate(&self, position: &Position) -> i32;
    /// Same as [`Evaluator::evaluate`] for a position the caller already knows
    /// is not over.
    fn evaluate_ongoing(&self, position: &Position) -> i32 {
        self.evaluate(position)
    }
}
