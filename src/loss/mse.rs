pub struct MseLoss;

impl MseLoss {
    /// Scalar MSE: mean((predicted - expected)²)
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        let n = predicted.len() as f64;
        predicted.iter().zip(expected.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>() / n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loss_matches_mean_of_squared_errors() {
        // errors: 0, 0, -1, 1 -> (0 + 0 + 1 + 1) / 4
        let predicted = [0.0, 0.0, 1.0, 0.0];
        let expected = [0.0, 0.0, 0.0, 1.0];
        assert_eq!(MseLoss::loss(&predicted, &expected), 0.5);
    }
}
