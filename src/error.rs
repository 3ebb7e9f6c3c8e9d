//! Errors reported by the checked builders and by batch evaluation.
use thiserror::Error;

/// Input validation failures, reported only by the checked builders
/// and by batch evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PpError {
    #[error("unequal length: x has {x_len} elements, y has {y_len}")]
    LengthMismatch { x_len: usize, y_len: usize },

    #[error("non-finite value in input at index {idx}")]
    NonFinite { idx: usize },

    #[error("knots must be strictly increasing; violated at index {idx}")]
    NonIncreasing { idx: usize },

    #[error("output length {got} does not match {expected} observation points")]
    OutputLength { expected: usize, got: usize },
}

/// Check the preconditions shared by every builder:
/// equal lengths, finite values, strictly increasing knots.
pub(crate) fn check_samples<T: num_traits::Float>(x: &[T], y: &[T]) -> Result<(), PpError> {
    if x.len() != y.len() {
        return Err(PpError::LengthMismatch {
            x_len: x.len(),
            y_len: y.len(),
        });
    }
    if let Some(idx) = x.iter().chain(y.iter()).position(|v| !v.is_finite()) {
        return Err(PpError::NonFinite { idx: idx % x.len() });
    }
    if let Some(idx) = x.windows(2).position(|w| w[1] <= w[0]) {
        return Err(PpError::NonIncreasing { idx: idx + 1 });
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_check_samples() {
        assert_eq!(check_samples::<f64>(&[], &[]), Ok(()));
        assert_eq!(check_samples(&[0.0, 1.0, 2.5], &[3.0, -1.0, 0.0]), Ok(()));

        assert_eq!(
            check_samples(&[0.0, 1.0], &[0.0]),
            Err(PpError::LengthMismatch { x_len: 2, y_len: 1 })
        );
        assert_eq!(
            check_samples(&[0.0, f64::NAN, 2.0], &[0.0, 1.0, 2.0]),
            Err(PpError::NonFinite { idx: 1 })
        );
        assert_eq!(
            check_samples(&[0.0, 1.0, 2.0], &[0.0, 1.0, f64::INFINITY]),
            Err(PpError::NonFinite { idx: 2 })
        );
        assert_eq!(
            check_samples(&[0.0, 1.0, 1.0, 3.0], &[0.0; 4]),
            Err(PpError::NonIncreasing { idx: 2 })
        );
        assert_eq!(
            check_samples(&[0.0, 2.0, 1.0], &[0.0; 3]),
            Err(PpError::NonIncreasing { idx: 2 })
        );
    }

    #[test]
    fn test_messages() {
        let msg = PpError::LengthMismatch { x_len: 3, y_len: 2 }.to_string();
        assert_eq!(msg, "unequal length: x has 3 elements, y has 2");
        let msg = PpError::NonIncreasing { idx: 4 }.to_string();
        assert!(msg.contains("index 4"));
    }
}
