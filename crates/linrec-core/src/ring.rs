//! Numeric rings the matrix engine computes over.
//!
//! The engine is written once against [`Ring`]; the concrete ring decides
//! whether arithmetic is unbounded or reduced modulo a fixed modulus.

use std::fmt;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, ToPrimitive, Zero};

use crate::constants::MIN_MODULUS;
use crate::error::LinRecError;

/// A commutative ring with the operations needed for matrix products.
///
/// Rings are small configuration values (at most a modulus), so the engine
/// passes them by reference and clones them freely.
pub trait Ring: Clone + fmt::Debug + Send + Sync {
    /// Element type. Values handed to the engine are expected to be in
    /// canonical form (see [`Ring::reduce`]).
    type Elem: Clone + PartialEq + fmt::Debug + fmt::Display + Send + Sync;

    /// Additive identity.
    fn zero(&self) -> Self::Elem;

    /// Multiplicative identity.
    fn one(&self) -> Self::Elem;

    /// `a + b`.
    fn add(&self, a: &Self::Elem, b: &Self::Elem) -> Self::Elem;

    /// `a * b`.
    fn mul(&self, a: &Self::Elem, b: &Self::Elem) -> Self::Elem;

    /// `acc + a * b`, the inner step of every dot product.
    ///
    /// Fixed-width rings override this to fuse the product and the sum in
    /// a wider accumulator before reducing once.
    fn mul_add(&self, acc: &Self::Elem, a: &Self::Elem, b: &Self::Elem) -> Self::Elem {
        self.add(acc, &self.mul(a, b))
    }

    /// Bring an arbitrary element into canonical form.
    fn reduce(&self, value: Self::Elem) -> Self::Elem {
        value
    }
}

/// Unbounded signed integers. Never overflows, never reduces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Integers;

impl Ring for Integers {
    type Elem = BigInt;

    fn zero(&self) -> BigInt {
        BigInt::zero()
    }

    fn one(&self) -> BigInt {
        BigInt::one()
    }

    fn add(&self, a: &BigInt, b: &BigInt) -> BigInt {
        a + b
    }

    fn mul(&self, a: &BigInt, b: &BigInt) -> BigInt {
        a * b
    }

    fn mul_add(&self, acc: &BigInt, a: &BigInt, b: &BigInt) -> BigInt {
        let mut sum = a * b;
        sum += acc;
        sum
    }
}

/// Integers modulo a `u64` modulus.
///
/// Products are accumulated in `u128`: for any `u64` operands
/// `acc + a * b <= 2^128 - 2^64`, so the fused multiply-add cannot overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Modular {
    modulus: u64,
}

impl Modular {
    /// Create the ring of integers modulo `modulus` (must be at least 2).
    pub fn new(modulus: u64) -> Result<Self, LinRecError> {
        if modulus < MIN_MODULUS {
            return Err(LinRecError::InvalidSpecification(format!(
                "modulus must be at least {MIN_MODULUS}, got {modulus}"
            )));
        }
        Ok(Self { modulus })
    }

    /// The modulus this ring reduces by.
    #[must_use]
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Reduce a signed big integer into `[0, m)` using floor semantics, so
    /// `-1` maps to `m - 1`.
    #[must_use]
    pub fn reduce_big(&self, value: &BigInt) -> u64 {
        // The residue lies in [0, m), so it always fits in a u64.
        value
            .mod_floor(&BigInt::from(self.modulus))
            .to_u64()
            .unwrap_or_default()
    }

    #[allow(clippy::cast_possible_truncation)]
    fn narrow(&self, wide: u128) -> u64 {
        (wide % u128::from(self.modulus)) as u64
    }
}

impl Ring for Modular {
    type Elem = u64;

    fn zero(&self) -> u64 {
        0
    }

    fn one(&self) -> u64 {
        1
    }

    fn add(&self, a: &u64, b: &u64) -> u64 {
        self.narrow(u128::from(*a) + u128::from(*b))
    }

    fn mul(&self, a: &u64, b: &u64) -> u64 {
        self.narrow(u128::from(*a) * u128::from(*b))
    }

    fn mul_add(&self, acc: &u64, a: &u64, b: &u64) -> u64 {
        self.narrow(u128::from(*acc) + u128::from(*a) * u128::from(*b))
    }

    fn reduce(&self, value: u64) -> u64 {
        value % self.modulus
    }
}

/// Integers modulo an arbitrary-size modulus. Elements live in `[0, m)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BigModular {
    modulus: BigInt,
}

impl BigModular {
    /// Create the ring of integers modulo `modulus` (must be at least 2).
    pub fn new(modulus: BigInt) -> Result<Self, LinRecError> {
        if modulus < BigInt::from(MIN_MODULUS) {
            return Err(LinRecError::InvalidSpecification(format!(
                "modulus must be at least {MIN_MODULUS}, got {modulus}"
            )));
        }
        Ok(Self { modulus })
    }

    /// The modulus this ring reduces by.
    #[must_use]
    pub fn modulus(&self) -> &BigInt {
        &self.modulus
    }
}

impl Ring for BigModular {
    type Elem = BigInt;

    fn zero(&self) -> BigInt {
        BigInt::zero()
    }

    fn one(&self) -> BigInt {
        BigInt::one()
    }

    fn add(&self, a: &BigInt, b: &BigInt) -> BigInt {
        (a + b).mod_floor(&self.modulus)
    }

    fn mul(&self, a: &BigInt, b: &BigInt) -> BigInt {
        (a * b).mod_floor(&self.modulus)
    }

    fn mul_add(&self, acc: &BigInt, a: &BigInt, b: &BigInt) -> BigInt {
        let mut sum = a * b;
        sum += acc;
        sum.mod_floor(&self.modulus)
    }

    fn reduce(&self, value: BigInt) -> BigInt {
        value.mod_floor(&self.modulus)
    }
}
