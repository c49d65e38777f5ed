//! # linrec-core
//!
//! Fast evaluation of linear recurrences of fixed order by exponentiating
//! their companion matrix. Arithmetic is generic over a [`Ring`]: unbounded
//! integers, or integers modulo a fixed modulus.

pub mod constants;
pub mod error;
pub mod evaluator;
pub mod iterator;
pub mod matrix;
pub mod presets;
pub mod recurrence;
pub mod ring;

// Re-exports
pub use error::LinRecError;
pub use evaluator::Evaluator;
pub use iterator::TermIterator;
pub use matrix::{Matrix, MatrixEngine};
pub use presets::Preset;
pub use recurrence::{build_transition, RecurrenceSpec};
pub use ring::{BigModular, Integers, Modular, Ring};

use num_bigint::BigInt;
use num_traits::ToPrimitive;
use tracing::debug;

/// Ring chosen for a caller-supplied modulus.
enum RingChoice {
    Exact,
    Word(Modular),
    Wide(BigModular),
}

impl RingChoice {
    /// No modulus runs exact; moduli that fit in a `u64` take the
    /// fixed-width ring, larger ones the big modular ring.
    fn for_modulus(modulus: Option<&BigInt>) -> Result<Self, LinRecError> {
        let Some(m) = modulus else {
            return Ok(Self::Exact);
        };
        match m.to_u64() {
            Some(small) => Modular::new(small).map(Self::Word),
            None => BigModular::new(m.clone()).map(Self::Wide),
        }
    }
}

fn word_spec(
    ring: Modular,
    order: usize,
    coefficients: &[BigInt],
    seeds: &[BigInt],
) -> Result<RecurrenceSpec<Modular>, LinRecError> {
    let coefficients = coefficients.iter().map(|c| ring.reduce_big(c)).collect();
    let seeds = seeds.iter().map(|s| ring.reduce_big(s)).collect();
    RecurrenceSpec::new(ring, order, coefficients, seeds)
}

/// Compute a(`index`) of the order-`order` recurrence with the given
/// coefficients and seeds.
///
/// Without a modulus the result is exact. With a modulus `m` every value is
/// reduced into `[0, m)` (negative inputs wrap around), and moduli that fit
/// in a `u64` take the fixed-width path.
///
/// # Example
/// ```
/// use num_bigint::BigInt;
/// let fib = [BigInt::from(1), BigInt::from(1)];
/// let a10 = linrec_core::nth_term(2, &fib, &fib, None, 10).unwrap();
/// assert_eq!(a10, BigInt::from(55));
/// ```
pub fn nth_term(
    order: usize,
    coefficients: &[BigInt],
    seeds: &[BigInt],
    modulus: Option<&BigInt>,
    index: u64,
) -> Result<BigInt, LinRecError> {
    match RingChoice::for_modulus(modulus)? {
        RingChoice::Exact => {
            debug!(order, index, "evaluating over unbounded integers");
            let spec = RecurrenceSpec::new(Integers, order, coefficients.to_vec(), seeds.to_vec())?;
            recurrence::nth_term(&spec, index)
        }
        RingChoice::Word(ring) => {
            debug!(order, index, modulus = ring.modulus(), "evaluating over u64 modular ring");
            let spec = word_spec(ring, order, coefficients, seeds)?;
            recurrence::nth_term(&spec, index).map(BigInt::from)
        }
        RingChoice::Wide(ring) => {
            debug!(order, index, modulus = %ring.modulus(), "evaluating over big modular ring");
            let spec = RecurrenceSpec::new(ring, order, coefficients.to_vec(), seeds.to_vec())?;
            recurrence::nth_term(&spec, index)
        }
    }
}

/// List a(1..=`count`) by stepping the recurrence directly.
///
/// Costs O(k) ring operations per term; meant for short prefixes. The ring
/// is chosen from the modulus exactly as in [`nth_term`], so with a modulus
/// every listed value lies in `[0, m)`.
pub fn sequence_prefix(
    order: usize,
    coefficients: &[BigInt],
    seeds: &[BigInt],
    modulus: Option<&BigInt>,
    count: u64,
) -> Result<Vec<(u64, BigInt)>, LinRecError> {
    if count == 0 {
        return Err(LinRecError::InvalidIndex(count));
    }
    let limit = usize::try_from(count).unwrap_or(usize::MAX);

    match RingChoice::for_modulus(modulus)? {
        RingChoice::Exact => {
            let spec = RecurrenceSpec::new(Integers, order, coefficients.to_vec(), seeds.to_vec())?;
            Ok(TermIterator::new(spec).take(limit).collect())
        }
        RingChoice::Word(ring) => {
            debug!(order, count, modulus = ring.modulus(), "listing over u64 modular ring");
            let spec = word_spec(ring, order, coefficients, seeds)?;
            Ok(TermIterator::new(spec)
                .take(limit)
                .map(|(n, v)| (n, BigInt::from(v)))
                .collect())
        }
        RingChoice::Wide(ring) => {
            debug!(order, count, modulus = %ring.modulus(), "listing over big modular ring");
            let spec = RecurrenceSpec::new(ring, order, coefficients.to_vec(), seeds.to_vec())?;
            Ok(TermIterator::new(spec).take(limit).collect())
        }
    }
}

/// Compute the n-th Fibonacci number, F(1) = F(2) = 1.
///
/// # Example
/// ```
/// assert_eq!(linrec_core::fibonacci(10).unwrap().to_string(), "55");
/// ```
pub fn fibonacci(n: u64) -> Result<BigInt, LinRecError> {
    recurrence::nth_term(&Preset::Fibonacci.spec(), n)
}
