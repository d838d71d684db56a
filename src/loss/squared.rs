/// Per-output squared error used by the trainer.
pub struct SquaredError;

impl SquaredError {
    /// Scalar error for one output neuron: (predicted - target)²
    pub fn loss(predicted: f64, target: f64) -> f64 {
        (predicted - target).powi(2)
    }

    /// Output-layer delta seed: -(predicted - target) · σ'(predicted), with the
    /// sigmoid derivative written as `p · (1 - p)`.
    /// The sign is folded in so the update step is `w += lr · delta · a`.
    pub fn delta(predicted: f64, target: f64) -> f64 {
        -(predicted - target) * predicted * (1.0 - predicted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loss_is_squared_difference() {
        assert!((SquaredError::loss(0.75, 0.25) - 0.25).abs() < 1e-15);
        assert_eq!(SquaredError::loss(0.4, 0.4), 0.0);
    }

    #[test]
    fn delta_points_towards_target() {
        assert!(SquaredError::delta(0.8, 0.1) < 0.0);
        assert!(SquaredError::delta(0.2, 0.9) > 0.0);
        assert_eq!(SquaredError::delta(0.5, 0.5), 0.0);
    }

    #[test]
    fn delta_matches_closed_form() {
        let (p, t) = (0.6, 0.1);
        let expected = -(p - t) * p * (1.0 - p);
        assert_eq!(SquaredError::delta(p, t), expected);
    }
}
