use log::debug;

use crate::error::{PerceptronError, Result};
use crate::loss::mse::MseLoss;
use crate::perceptron::perceptron::Perceptron;
use crate::train::train_config::TrainConfig;
use crate::train::train_report::TrainReport;

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Fits `perceptron` to the labelled batch and reports how the run ended.
///
/// # Arguments
/// - `perceptron` — mutable reference; its weights are updated in place and
///                  training resumes from whatever weights it already holds
/// - `inputs`     — feature vectors, each of length `num_inputs`
/// - `desired`    — target outputs in `{0, 1}`, same length as `inputs`
/// - `config`     — learning rate, stop MSE, iteration cap, update rule
///
/// Each iteration runs a forward pass over the whole batch, applies one
/// batch weight update, then stops early if the MSE of that pass is below
/// `config.stop_mse`.
///
/// # Errors
/// Fails before touching the weights if the batch is empty, the two
/// sequences differ in length, or any feature vector has the wrong width.
pub fn train_loop(
    perceptron: &mut Perceptron,
    inputs: &[Vec<f64>],
    desired: &[f64],
    config: &TrainConfig,
) -> Result<TrainReport> {
    check_dataset(perceptron.num_inputs(), inputs, desired)?;

    let mut report = TrainReport {
        iterations: 0,
        final_mse: None,
        converged: false,
    };

    for iteration in 0..config.max_iterations {
        // ── Forward pass ─────────────────────────────────────────────────
        let current: Vec<f64> = inputs.iter()
            .map(|input| perceptron.output(input))
            .collect();

        let errors: Vec<f64> = desired.iter().zip(current.iter())
            .map(|(d, c)| d - c)
            .collect();

        // ── Batch update ─────────────────────────────────────────────────
        config.update_rule.apply(
            perceptron.weights_mut(),
            inputs,
            &errors,
            config.learning_rate,
        );

        // ── Convergence ──────────────────────────────────────────────────
        let mse = MseLoss::loss(&current, desired);
        report.iterations = iteration + 1;
        report.final_mse = Some(mse);

        if perceptron.is_debug() {
            debug!("iteration = {iteration}, mse = {mse}");
        }

        if mse < config.stop_mse {
            report.converged = true;
            break;
        }
    }

    if perceptron.is_debug() {
        debug!("weights: {:?}", perceptron.weights());
    }

    Ok(report)
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

fn check_dataset(num_inputs: usize, inputs: &[Vec<f64>], desired: &[f64]) -> Result<()> {
    if inputs.is_empty() || desired.is_empty() {
        return Err(PerceptronError::EmptyDataset);
    }

    if inputs.len() != desired.len() {
        return Err(PerceptronError::DatasetSizeMismatch {
            features: inputs.len(),
            desired: desired.len(),
        });
    }

    if let Some(row) = inputs.iter().find(|row| row.len() != num_inputs) {
        return Err(PerceptronError::FeatureWidthMismatch {
            expected: num_inputs,
            found: row.len(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_check_runs_before_size_check() {
        let err = check_dataset(2, &[], &[1.0]).unwrap_err();
        assert_eq!(err, PerceptronError::EmptyDataset);
    }

    #[test]
    fn size_check_runs_before_width_check() {
        let inputs = vec![vec![0.0; 5], vec![0.0; 5], vec![0.0; 5]];
        let err = check_dataset(2, &inputs, &[0.0, 1.0]).unwrap_err();
        assert_eq!(err, PerceptronError::DatasetSizeMismatch { features: 3, desired: 2 });
    }

    #[test]
    fn ragged_rows_after_the_first_are_rejected() {
        let inputs = vec![vec![0.0, 0.0], vec![1.0]];
        let err = check_dataset(2, &inputs, &[0.0, 1.0]).unwrap_err();
        assert_eq!(err, PerceptronError::FeatureWidthMismatch { expected: 2, found: 1 });
    }

    #[test]
    fn well_formed_batch_passes() {
        let inputs = vec![vec![0.0, 1.0], vec![1.0, 0.0]];
        assert!(check_dataset(2, &inputs, &[0.0, 1.0]).is_ok());
    }
}
