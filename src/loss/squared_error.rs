pub struct SquaredError;

impl SquaredError {
    /// `½ Σ (target - output)²` over one instance's outputs.
    pub fn loss(outputs: &[f64], targets: &[u8]) -> f64 {
        0.5 * outputs.iter().zip(targets.iter())
            .map(|(&o, &t)| (f64::from(t) - o).powi(2))
            .sum::<f64>()
    }

    /// Mean of per-instance losses. Zero for an empty run.
    pub fn mean(total: f64, count: usize) -> f64 {
        if count == 0 { 0.0 } else { total / count as f64 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_each_wrong_output_as_half() {
        assert_eq!(SquaredError::loss(&[1.0, 1.0], &[1, 0]), 0.5);
        assert_eq!(SquaredError::loss(&[0.0, 1.0, 1.0], &[1, 0, 0]), 1.5);
        assert_eq!(SquaredError::loss(&[0.0, 1.0], &[0, 1]), 0.0);
    }

    #[test]
    fn mean_of_empty_run_is_zero() {
        assert_eq!(SquaredError::mean(3.0, 0), 0.0);
        assert_eq!(SquaredError::mean(3.0, 2), 1.5);
    }
}
