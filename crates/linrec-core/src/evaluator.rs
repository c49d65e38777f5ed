//! Term evaluation with a cached transition matrix.

use tracing::debug;

use crate::error::LinRecError;
use crate::iterator::TermIterator;
use crate::matrix::{Matrix, MatrixEngine};
use crate::recurrence::{build_transition, RecurrenceSpec};
use crate::ring::Ring;

/// Evaluates terms of one recurrence.
///
/// The companion matrix is built once in [`Evaluator::new`] and reused by
/// every query. The evaluator holds no mutable state, so it can be shared
/// across threads behind an `Arc` or a plain reference.
#[derive(Debug, Clone)]
pub struct Evaluator<R: Ring> {
    spec: RecurrenceSpec<R>,
    engine: MatrixEngine<R>,
    transition: Matrix<R::Elem>,
}

impl<R: Ring> Evaluator<R> {
    pub fn new(spec: RecurrenceSpec<R>) -> Result<Self, LinRecError> {
        let transition = build_transition(&spec)?;
        let engine = MatrixEngine::new(spec.ring().clone());
        Ok(Self {
            spec,
            engine,
            transition,
        })
    }

    #[must_use]
    pub fn spec(&self) -> &RecurrenceSpec<R> {
        &self.spec
    }

    /// The cached companion transition matrix.
    #[must_use]
    pub fn transition(&self) -> &Matrix<R::Elem> {
        &self.transition
    }

    /// Compute a(n), with terms numbered from 1.
    ///
    /// Indices up to the order are answered from the seeds. Larger indices
    /// raise the transition matrix to `n - k` and apply it to the seed state.
    pub fn nth_term(&self, n: u64) -> Result<R::Elem, LinRecError> {
        if n == 0 {
            return Err(LinRecError::InvalidIndex(n));
        }

        let k = self.spec.order();
        if let Ok(idx) = usize::try_from(n) {
            if idx <= k {
                return Ok(self.spec.seeds()[idx - 1].clone());
            }
        }

        let exponent = n - k as u64;
        debug!(order = k, index = n, exponent, "evaluating term by matrix power");
        let advance = self.engine.power(&self.transition, exponent)?;
        let state = self.engine.apply(&advance, &self.spec.initial_state())?;
        state
            .into_iter()
            .next()
            .ok_or_else(|| LinRecError::DimensionMismatch("empty state vector".into()))
    }

    /// Compute a(n) for each index in order. Stops at the first invalid index.
    pub fn terms(&self, indices: &[u64]) -> Result<Vec<R::Elem>, LinRecError> {
        indices.iter().map(|&n| self.nth_term(n)).collect()
    }

    /// Lazy iterator over a(1), a(2), ... stepping the recurrence directly.
    #[must_use]
    pub fn iter(&self) -> TermIterator<R> {
        TermIterator::new(self.spec.clone())
    }
}
