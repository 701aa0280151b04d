//! Objective and constraint callables.
//!
//! The complex treats both the objective and every constraint as an opaque
//! scalar function of the (bounds-rescaled) coordinate. A constraint is
//! satisfied when it evaluates to a non-negative number.
//!
//! Infallible closures implement [`ScalarFunction`] directly. Closures that can
//! fail are wrapped in [`Fallible`] so their errors reach the caller unchanged.

#![forbid(unsafe_code)]

use thiserror::Error;

/// Errors raised by an objective or constraint.
///
/// Evaluation errors are fatal to the refinement step that triggered them; the
/// complex never retries.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvaluationError {
    /// The callable reported a failure.
    #[error("Function evaluation failed at {coordinates}: {message}")]
    Failed {
        /// Debug rendering of the coordinate that was being evaluated.
        coordinates: String,
        /// Description of the failure.
        message: String,
    },
}

impl EvaluationError {
    /// Convenience constructor for callables reporting a failure at `x`.
    #[must_use]
    pub fn failed<const D: usize>(x: &[f64; D], message: impl Into<String>) -> Self {
        Self::Failed {
            coordinates: format!("{x:?}"),
            message: message.into(),
        }
    }
}

/// A scalar function of a D-dimensional coordinate.
///
/// # Examples
///
/// ```rust
/// use shgo_complex::core::traits::scalar_function::{Fallible, ScalarFunction, EvaluationError};
///
/// let mut sphere = |x: &[f64; 2]| x.iter().map(|v| v * v).sum::<f64>();
/// assert_eq!(sphere.evaluate(&[1.0, 2.0]), Ok(5.0));
///
/// let mut guarded = Fallible(|x: &[f64; 2]| -> Result<f64, EvaluationError> {
///     if x[0] < 0.0 {
///         Err(EvaluationError::failed(x, "negative input"))
///     } else {
///         Ok(x[0].sqrt())
///     }
/// });
/// assert!(guarded.evaluate(&[-1.0, 0.0]).is_err());
/// ```
pub trait ScalarFunction<const D: usize> {
    /// Evaluates the function at `x`.
    ///
    /// # Errors
    ///
    /// Returns an [`EvaluationError`] when the underlying callable fails.
    fn evaluate(&mut self, x: &[f64; D]) -> Result<f64, EvaluationError>;
}

impl<F, const D: usize> ScalarFunction<D> for F
where
    F: FnMut(&[f64; D]) -> f64,
{
    #[inline]
    fn evaluate(&mut self, x: &[f64; D]) -> Result<f64, EvaluationError> {
        Ok(self(x))
    }
}

/// Adapter for closures returning `Result<f64, EvaluationError>`.
#[derive(Clone, Copy, Debug)]
pub struct Fallible<F>(pub F);

impl<F, const D: usize> ScalarFunction<D> for Fallible<F>
where
    F: FnMut(&[f64; D]) -> Result<f64, EvaluationError>,
{
    #[inline]
    fn evaluate(&mut self, x: &[f64; D]) -> Result<f64, EvaluationError> {
        (self.0)(x)
    }
}

/// Boxed objective or constraint as stored by the vertex cache.
pub type BoxedScalarFunction<const D: usize> = Box<dyn ScalarFunction<D>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_scalar_functions() {
        let mut calls = 0;
        let mut f = |x: &[f64; 3]| {
            calls += 1;
            x[0] + x[1] + x[2]
        };
        assert_eq!(f.evaluate(&[1.0, 2.0, 3.0]), Ok(6.0));
        assert_eq!(f.evaluate(&[0.0, 0.0, 0.0]), Ok(0.0));
        drop(f);
        assert_eq!(calls, 2);
    }

    #[test]
    fn fallible_propagates_errors_unchanged() {
        let mut f = Fallible(|x: &[f64; 1]| -> Result<f64, EvaluationError> {
            Err(EvaluationError::failed(x, "boom"))
        });
        let err = f.evaluate(&[0.5]).unwrap_err();
        assert_eq!(
            err,
            EvaluationError::Failed {
                coordinates: "[0.5]".to_string(),
                message: "boom".to_string(),
            }
        );
        assert!(err.to_string().contains("boom"));
    }

    #[test]
    fn boxed_functions_are_object_safe() {
        let mut boxed: Vec<BoxedScalarFunction<2>> = vec![
            Box::new(|x: &[f64; 2]| x[0]),
            Box::new(Fallible(|x: &[f64; 2]| -> Result<f64, EvaluationError> {
                Ok(-x[1])
            })),
        ];
        let values: Vec<f64> = boxed
            .iter_mut()
            .map(|g| g.evaluate(&[2.0, 3.0]).unwrap())
            .collect();
        assert_eq!(values, vec![2.0, -3.0]);
    }
}
