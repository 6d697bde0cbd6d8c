use serde::{Serialize, Deserialize};

/// Outcome of one `train_loop` run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainReport {
    /// Iterations actually executed; never exceeds `max_iterations`.
    pub iterations: usize,
    /// MSE of the last executed iteration, `None` if no iteration ran.
    pub final_mse: Option<f64>,
    /// `true` when the loop stopped early because MSE fell below `stop_mse`.
    pub converged: bool,
}
