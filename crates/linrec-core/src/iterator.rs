//! Lazy term iterator that steps the recurrence one term at a time.
//!
//! Each step costs O(k) ring operations, so this is the right tool for
//! listing a prefix of the sequence and the wrong one for a single far term.

use std::collections::VecDeque;

use crate::recurrence::RecurrenceSpec;
use crate::ring::Ring;

/// Lazy iterator over `(n, a(n))` pairs starting from a(1).
///
/// # Example
/// ```
/// use linrec_core::iterator::TermIterator;
/// use linrec_core::presets::Preset;
/// let terms: Vec<_> = TermIterator::new(Preset::Fibonacci.spec())
///     .take(7)
///     .map(|(_, v)| v.to_string())
///     .collect();
/// assert_eq!(terms, ["1", "1", "2", "3", "5", "8", "13"]);
/// ```
#[derive(Debug, Clone)]
pub struct TermIterator<R: Ring> {
    spec: RecurrenceSpec<R>,
    // Last k terms, oldest at the front.
    window: VecDeque<R::Elem>,
    index: u64,
}

impl<R: Ring> TermIterator<R> {
    #[must_use]
    pub fn new(spec: RecurrenceSpec<R>) -> Self {
        let window = VecDeque::with_capacity(spec.order() + 1);
        Self {
            spec,
            window,
            index: 0,
        }
    }
}

impl<R: Ring> Iterator for TermIterator<R> {
    type Item = (u64, R::Elem);

    fn next(&mut self) -> Option<Self::Item> {
        let k = self.spec.order();
        let position = self.window.len();
        // The window only runs short while the seeds are being emitted.
        let value = if position < k {
            self.spec.seeds()[position].clone()
        } else {
            let ring = self.spec.ring();
            self.spec
                .coefficients()
                .iter()
                .zip(self.window.iter().rev())
                .fold(ring.zero(), |acc, (c, a)| ring.mul_add(&acc, c, a))
        };

        self.window.push_back(value.clone());
        if self.window.len() > k {
            self.window.pop_front();
        }
        self.index += 1;
        Some((self.index, value))
    }
}
