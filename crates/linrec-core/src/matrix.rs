//! Dense square-matrix engine over a pluggable [`Ring`].
//!
//! Matrices are immutable values: every product allocates a fresh
//! [`Matrix`]. Exponentiation recurses on the exponent, halving it on even
//! steps, so `power(A, p)` costs O(log p) multiplications.

use tracing::trace;

use crate::error::LinRecError;
use crate::ring::Ring;

/// Dense matrix stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<E> {
    rows: usize,
    cols: usize,
    entries: Vec<E>,
}

impl<E> Matrix<E> {
    /// Create a matrix from row-major entries.
    pub fn new(rows: usize, cols: usize, entries: Vec<E>) -> Result<Self, LinRecError> {
        if entries.len() != rows * cols {
            return Err(LinRecError::DimensionMismatch(format!(
                "{rows}x{cols} matrix needs {} entries, got {}",
                rows * cols,
                entries.len()
            )));
        }
        Ok(Self {
            rows,
            cols,
            entries,
        })
    }

    /// Create a matrix from a list of equally long rows.
    pub fn from_rows(rows: Vec<Vec<E>>) -> Result<Self, LinRecError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let mut entries = Vec::with_capacity(height * width);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(LinRecError::DimensionMismatch(format!(
                    "row {i} has {} entries, expected {width}",
                    row.len()
                )));
            }
            entries.extend(row);
        }
        Self::new(height, width, entries)
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Entry at `(row, col)`, or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&E> {
        if row < self.rows && col < self.cols {
            self.entries.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Row `i` as a slice. Callers keep `i < rows`.
    pub(crate) fn row(&self, i: usize) -> &[E] {
        &self.entries[i * self.cols..(i + 1) * self.cols]
    }

    /// All entries in row-major order.
    #[must_use]
    pub fn entries(&self) -> &[E] {
        &self.entries
    }
}

/// Matrix operations bound to one ring.
#[derive(Debug, Clone)]
pub struct MatrixEngine<R: Ring> {
    ring: R,
}

impl<R: Ring> MatrixEngine<R> {
    #[must_use]
    pub fn new(ring: R) -> Self {
        Self { ring }
    }

    #[must_use]
    pub fn ring(&self) -> &R {
        &self.ring
    }

    /// The k×k identity matrix.
    #[must_use]
    pub fn identity(&self, k: usize) -> Matrix<R::Elem> {
        let entries = (0..k * k)
            .map(|idx| {
                if idx / k == idx % k {
                    self.ring.one()
                } else {
                    self.ring.zero()
                }
            })
            .collect();
        Matrix {
            rows: k,
            cols: k,
            entries,
        }
    }

    /// `a · b`. Each entry is accumulated with [`Ring::mul_add`], so a
    /// modular ring reduces after every step.
    pub fn multiply(
        &self,
        a: &Matrix<R::Elem>,
        b: &Matrix<R::Elem>,
    ) -> Result<Matrix<R::Elem>, LinRecError> {
        if a.cols != b.rows {
            return Err(LinRecError::DimensionMismatch(format!(
                "cannot multiply {}x{} by {}x{}",
                a.rows, a.cols, b.rows, b.cols
            )));
        }

        let mut entries = Vec::with_capacity(a.rows * b.cols);
        for i in 0..a.rows {
            let row = a.row(i);
            for j in 0..b.cols {
                let mut acc = self.ring.zero();
                for (p, x) in row.iter().enumerate() {
                    acc = self.ring.mul_add(&acc, x, &b.entries[p * b.cols + j]);
                }
                entries.push(acc);
            }
        }

        Ok(Matrix {
            rows: a.rows,
            cols: b.cols,
            entries,
        })
    }

    /// `a · a`.
    pub fn square(&self, a: &Matrix<R::Elem>) -> Result<Matrix<R::Elem>, LinRecError> {
        self.multiply(a, a)
    }

    /// `a^p` by recursive squaring. `a^0` is the identity.
    pub fn power(&self, a: &Matrix<R::Elem>, p: u64) -> Result<Matrix<R::Elem>, LinRecError> {
        if !a.is_square() {
            return Err(LinRecError::NonSquareMatrix {
                rows: a.rows,
                cols: a.cols,
            });
        }
        if p == 0 {
            return Ok(self.identity(a.rows));
        }
        self.power_rec(a, p)
    }

    fn power_rec(&self, a: &Matrix<R::Elem>, p: u64) -> Result<Matrix<R::Elem>, LinRecError> {
        trace!(exponent = p, size = a.rows, "matrix power step");
        match p {
            0 => Err(LinRecError::InvalidExponent(p)),
            1 => Ok(a.clone()),
            _ if p % 2 == 0 => {
                let half = self.power_rec(a, p / 2)?;
                self.square(&half)
            }
            _ => {
                let rest = self.power_rec(a, p - 1)?;
                self.multiply(a, &rest)
            }
        }
    }

    /// Matrix-vector product `a · v`.
    pub fn apply(&self, a: &Matrix<R::Elem>, v: &[R::Elem]) -> Result<Vec<R::Elem>, LinRecError> {
        if a.cols != v.len() {
            return Err(LinRecError::DimensionMismatch(format!(
                "cannot apply {}x{} matrix to vector of length {}",
                a.rows,
                a.cols,
                v.len()
            )));
        }

        Ok((0..a.rows)
            .map(|i| {
                a.row(i)
                    .iter()
                    .zip(v)
                    .fold(self.ring.zero(), |acc, (x, y)| self.ring.mul_add(&acc, x, y))
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ring::{Integers, Modular};
    use num_bigint::BigInt;

    fn int_matrix(rows: &[&[i64]]) -> Matrix<BigInt> {
        Matrix::from_rows(
            rows.iter()
                .map(|r| r.iter().map(|&x| BigInt::from(x)).collect())
                .collect(),
        )
        .unwrap()
    }

    fn q_matrix() -> Matrix<BigInt> {
        int_matrix(&[&[1, 1], &[1, 0]])
    }

    #[test]
    fn new_rejects_wrong_entry_count() {
        let result = Matrix::new(2, 2, vec![1u64, 2, 3]);
        assert!(matches!(result, Err(LinRecError::DimensionMismatch(_))));
    }

    #[test]
    fn from_rows_rejects_ragged_rows() {
        let result = Matrix::from_rows(vec![vec![1u64, 2], vec![3]]);
        assert!(matches!(result, Err(LinRecError::DimensionMismatch(_))));
    }

    #[test]
    fn get_out_of_bounds() {
        let m = q_matrix();
        assert_eq!(m.get(0, 0), Some(&BigInt::from(1)));
        assert_eq!(m.get(1, 1), Some(&BigInt::from(0)));
        assert_eq!(m.get(2, 0), None);
        assert_eq!(m.get(0, 2), None);
    }

    #[test]
    fn row_slices_follow_row_major_layout() {
        let m = int_matrix(&[&[1, 2, 3], &[4, 5, 6]]);
        assert_eq!(m.row(0), &[BigInt::from(1), BigInt::from(2), BigInt::from(3)][..]);
        assert_eq!(m.row(1), &m.entries()[3..]);
    }

    #[test]
    fn identity_matrix() {
        let engine = MatrixEngine::new(Integers);
        let id = engine.identity(3);
        assert_eq!(id, int_matrix(&[&[1, 0, 0], &[0, 1, 0], &[0, 0, 1]]));
    }

    #[test]
    fn multiply_by_identity_both_sides() {
        let engine = MatrixEngine::new(Integers);
        let a = int_matrix(&[&[2, -1, 4], &[0, 3, 5], &[7, 1, -2]]);
        let id = engine.identity(3);
        assert_eq!(engine.multiply(&a, &id).unwrap(), a);
        assert_eq!(engine.multiply(&id, &a).unwrap(), a);
    }

    #[test]
    fn multiply_rectangular() {
        let engine = MatrixEngine::new(Integers);
        let a = int_matrix(&[&[1, 2, 3], &[4, 5, 6]]);
        let b = int_matrix(&[&[7, 8], &[9, 10], &[11, 12]]);
        let c = engine.multiply(&a, &b).unwrap();
        assert_eq!(c, int_matrix(&[&[58, 64], &[139, 154]]));
    }

    #[test]
    fn multiply_dimension_mismatch() {
        let engine = MatrixEngine::new(Integers);
        let a = int_matrix(&[&[1, 2, 3]]);
        let b = int_matrix(&[&[1, 2]]);
        assert!(matches!(
            engine.multiply(&a, &b),
            Err(LinRecError::DimensionMismatch(_))
        ));
    }

    #[test]
    fn square_q_matrix() {
        let engine = MatrixEngine::new(Integers);
        // Q^2 = [[2,1],[1,1]]
        assert_eq!(
            engine.square(&q_matrix()).unwrap(),
            int_matrix(&[&[2, 1], &[1, 1]])
        );
    }

    #[test]
    fn q_power_10_gives_fib_10() {
        let engine = MatrixEngine::new(Integers);
        // Q^10 = [[F(11), F(10)], [F(10), F(9)]]
        assert_eq!(
            engine.power(&q_matrix(), 10).unwrap(),
            int_matrix(&[&[89, 55], &[55, 34]])
        );
    }

    #[test]
    fn power_zero_is_identity() {
        let engine = MatrixEngine::new(Integers);
        assert_eq!(engine.power(&q_matrix(), 0).unwrap(), engine.identity(2));
    }

    #[test]
    fn power_one_is_input() {
        let engine = MatrixEngine::new(Integers);
        let a = int_matrix(&[&[3, 1], &[4, 1]]);
        assert_eq!(engine.power(&a, 1).unwrap(), a);
    }

    #[test]
    fn power_matches_repeated_multiplication() {
        let engine = MatrixEngine::new(Integers);
        let a = int_matrix(&[&[1, 2, 0], &[0, 1, -1], &[3, 0, 1]]);
        let mut expected = engine.identity(3);
        for p in 1..=13 {
            expected = engine.multiply(&expected, &a).unwrap();
            assert_eq!(engine.power(&a, p).unwrap(), expected, "p = {p}");
        }
    }

    #[test]
    fn power_non_square() {
        let engine = MatrixEngine::new(Integers);
        let a = int_matrix(&[&[1, 2, 3], &[4, 5, 6]]);
        assert_eq!(
            engine.power(&a, 3),
            Err(LinRecError::NonSquareMatrix { rows: 2, cols: 3 })
        );
        // Shape is checked before the identity base case.
        assert!(engine.power(&a, 0).is_err());
    }

    #[test]
    fn power_rec_rejects_zero_exponent() {
        let engine = MatrixEngine::new(Integers);
        assert_eq!(
            engine.power_rec(&q_matrix(), 0),
            Err(LinRecError::InvalidExponent(0))
        );
    }

    #[test]
    fn modular_power_stays_reduced() {
        let ring = Modular::new(1_000).unwrap();
        let engine = MatrixEngine::new(ring);
        let q = Matrix::new(2, 2, vec![1u64, 1, 1, 0]).unwrap();
        // F(31) = 1346269, F(30) = 832040, F(29) = 514229
        let q30 = engine.power(&q, 30).unwrap();
        assert_eq!(q30.entries(), &[269, 40, 40, 229]);
        assert!(q30.entries().iter().all(|&x| x < 1_000));
    }

    #[test]
    fn apply_matrix_to_vector() {
        let engine = MatrixEngine::new(Integers);
        let a = int_matrix(&[&[1, 2], &[3, 4]]);
        let v = vec![BigInt::from(5), BigInt::from(6)];
        assert_eq!(
            engine.apply(&a, &v).unwrap(),
            vec![BigInt::from(17), BigInt::from(39)]
        );
    }

    #[test]
    fn apply_dimension_mismatch() {
        let engine = MatrixEngine::new(Integers);
        let v = vec![BigInt::from(1)];
        assert!(matches!(
            engine.apply(&q_matrix(), &v),
            Err(LinRecError::DimensionMismatch(_))
        ));
    }
}
