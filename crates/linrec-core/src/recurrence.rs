//! Linear recurrence definitions and their companion transition matrices.
//!
//! A recurrence of order k is
//! `a(n) = c[0]*a(n-1) + c[1]*a(n-2) + ... + c[k-1]*a(n-k)` with seeds
//! `a(1..=k)`. Its companion matrix has the coefficients in row 0 and a
//! shifted identity below, so one multiplication advances the state vector
//! `(a(n), ..., a(n-k+1))` by one step.

use tracing::debug;

use crate::error::LinRecError;
use crate::evaluator::Evaluator;
use crate::matrix::Matrix;
use crate::ring::Ring;

/// A validated linear recurrence over ring `R`.
///
/// Coefficients and seeds are reduced into canonical form on construction
/// and never change afterwards.
#[derive(Debug, Clone)]
pub struct RecurrenceSpec<R: Ring> {
    ring: R,
    coefficients: Vec<R::Elem>,
    seeds: Vec<R::Elem>,
}

impl<R: Ring> RecurrenceSpec<R> {
    /// Create a recurrence of the given `order`.
    ///
    /// Fails with [`LinRecError::InvalidSpecification`] if `order` is 0 or
    /// either sequence does not have exactly `order` elements.
    pub fn new(
        ring: R,
        order: usize,
        coefficients: Vec<R::Elem>,
        seeds: Vec<R::Elem>,
    ) -> Result<Self, LinRecError> {
        if order == 0 {
            return Err(LinRecError::InvalidSpecification(
                "order must be at least 1".into(),
            ));
        }
        if coefficients.len() != order {
            return Err(LinRecError::InvalidSpecification(format!(
                "order {order} needs {order} coefficients, got {}",
                coefficients.len()
            )));
        }
        if seeds.len() != order {
            return Err(LinRecError::InvalidSpecification(format!(
                "order {order} needs {order} seeds, got {}",
                seeds.len()
            )));
        }

        let coefficients = coefficients.into_iter().map(|c| ring.reduce(c)).collect();
        let seeds = seeds.into_iter().map(|s| ring.reduce(s)).collect();
        Ok(Self {
            ring,
            coefficients,
            seeds,
        })
    }

    /// Create a recurrence whose order is the number of coefficients.
    pub fn from_parts(
        ring: R,
        coefficients: Vec<R::Elem>,
        seeds: Vec<R::Elem>,
    ) -> Result<Self, LinRecError> {
        let order = coefficients.len();
        Self::new(ring, order, coefficients, seeds)
    }

    #[must_use]
    pub fn order(&self) -> usize {
        self.coefficients.len()
    }

    #[must_use]
    pub fn ring(&self) -> &R {
        &self.ring
    }

    /// `c[0..k]`, where `c[0]` multiplies the most recent term.
    #[must_use]
    pub fn coefficients(&self) -> &[R::Elem] {
        &self.coefficients
    }

    /// `a(1..=k)`.
    #[must_use]
    pub fn seeds(&self) -> &[R::Elem] {
        &self.seeds
    }

    /// The state vector at n = k, most recent first: `[a(k), ..., a(1)]`.
    #[must_use]
    pub fn initial_state(&self) -> Vec<R::Elem> {
        self.seeds.iter().rev().cloned().collect()
    }
}

/// Build the k×k companion transition matrix of `spec`.
pub fn build_transition<R: Ring>(spec: &RecurrenceSpec<R>) -> Result<Matrix<R::Elem>, LinRecError> {
    let k = spec.order();
    let ring = spec.ring();
    let mut entries = Vec::with_capacity(k * k);
    entries.extend(spec.coefficients().iter().cloned());
    for i in 1..k {
        entries.extend((0..k).map(|j| if j + 1 == i { ring.one() } else { ring.zero() }));
    }
    debug!(order = k, "built companion transition matrix");
    Matrix::new(k, k, entries)
}

/// Compute a(n) for `spec` without caching the transition matrix.
///
/// Use [`Evaluator`] to answer several queries against one recurrence.
pub fn nth_term<R: Ring>(spec: &RecurrenceSpec<R>, n: u64) -> Result<R::Elem, LinRecError> {
    Evaluator::new(spec.clone())?.nth_term(n)
}
