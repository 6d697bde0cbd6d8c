use std::io::{self, Write};

use rand::Rng;

use crate::activation::activation::ActivationFunction;
use crate::error::{PerceptronError, Result};
use crate::train::loop_fn::train_loop;
use crate::train::train_config::TrainConfig;
use crate::train::train_report::TrainReport;

/// A single-layer perceptron: one weight per input plus a bias.
///
/// `weights[0]` is the bias, applied with a fixed coefficient of `-1`;
/// `weights[k]` multiplies input `k - 1`. The vector always holds
/// `num_inputs + 1` entries.
#[derive(Debug, Clone)]
pub struct Perceptron {
    weights: Vec<f64>,
    activator: ActivationFunction,
    debug: bool,
}

impl Perceptron {
    /// Builds a perceptron with weights drawn uniformly from `[0, 1)` using
    /// the entropy-seeded thread-local RNG.
    pub fn new(num_inputs: usize, debug: bool) -> Result<Perceptron> {
        Perceptron::with_rng(num_inputs, debug, &mut rand::thread_rng())
    }

    /// Same as `new`, drawing the initial weights from `rng`.
    pub fn with_rng<R: Rng>(num_inputs: usize, debug: bool, rng: &mut R) -> Result<Perceptron> {
        if num_inputs < 1 {
            return Err(PerceptronError::InvalidConfiguration(
                "number of inputs must be at least 1".to_string(),
            ));
        }

        let weights = (0..=num_inputs).map(|_| rng.gen::<f64>()).collect();

        Ok(Perceptron {
            weights,
            activator: ActivationFunction::default(),
            debug,
        })
    }

    /// Builds a perceptron from explicit weights, bias first.
    pub fn from_weights(weights: Vec<f64>, debug: bool) -> Result<Perceptron> {
        if weights.len() < 2 {
            return Err(PerceptronError::InvalidConfiguration(format!(
                "expected a bias and at least one input weight, got {} weights",
                weights.len()
            )));
        }

        Ok(Perceptron {
            weights,
            activator: ActivationFunction::default(),
            debug,
        })
    }

    pub fn with_activation(mut self, activator: ActivationFunction) -> Perceptron {
        self.activator = activator;
        self
    }

    pub fn num_inputs(&self) -> usize {
        self.weights.len() - 1
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn activation(&self) -> ActivationFunction {
        self.activator
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    /// Trains on the batch with the default update rule.
    pub fn train(
        &mut self,
        inputs: &[Vec<f64>],
        desired: &[f64],
        learning_rate: f64,
        stop_mse: f64,
        max_iterations: usize,
    ) -> Result<TrainReport> {
        let config = TrainConfig::new(learning_rate, stop_mse, max_iterations);
        self.train_with(inputs, desired, &config)
    }

    pub fn train_with(
        &mut self,
        inputs: &[Vec<f64>],
        desired: &[f64],
        config: &TrainConfig,
    ) -> Result<TrainReport> {
        train_loop(self, inputs, desired, config)
    }

    /// Raw weighted sum `-w0 + Σ x[k] * w[k + 1]`, before thresholding.
    pub fn weighted_sum(&self, input: &[f64]) -> Result<f64> {
        self.check_width(input)?;
        Ok(self.sum_unchecked(input))
    }

    /// Classifies one input. With the default step activation the result is
    /// `0.0` or `1.0`.
    pub fn predict(&self, input: &[f64]) -> Result<f64> {
        self.check_width(input)?;
        Ok(self.output(input))
    }

    /// Writes the weights, bias first, one per line.
    pub fn write_weights<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for w in &self.weights {
            writeln!(out, "{w}")?;
        }
        Ok(())
    }

    pub fn print_weights(&self) -> io::Result<()> {
        let stdout = io::stdout();
        self.write_weights(&mut stdout.lock())
    }

    /// Thresholded output for an input already known to have the right width.
    pub(crate) fn output(&self, input: &[f64]) -> f64 {
        self.activator.function(self.sum_unchecked(input))
    }

    pub(crate) fn weights_mut(&mut self) -> &mut [f64] {
        &mut self.weights
    }

    fn sum_unchecked(&self, input: &[f64]) -> f64 {
        input.iter().zip(self.weights[1..].iter())
            .fold(-self.weights[0], |acc, (x, w)| acc + x * w)
    }

    fn check_width(&self, input: &[f64]) -> Result<()> {
        if input.len() != self.num_inputs() {
            return Err(PerceptronError::FeatureWidthMismatch {
                expected: self.num_inputs(),
                found: input.len(),
            });
        }
        Ok(())
    }
}
