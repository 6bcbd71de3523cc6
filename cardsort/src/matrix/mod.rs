/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */
//! Dense square matrices over cards and their condensed triangular form.
//!
//! Distance data in this crate is always square, symmetric and zero on the
//! diagonal, so the strict upper triangle alone reconstructs the full matrix.
//! [`CondensedMatrix`] is that flattened triangle (row-major) and is the
//! canonical externally visible artifact.

use std::ops::{Index, IndexMut};

use thiserror::Error;

/// An owned, row-major, square matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SquareMatrix<T> {
    data: Box<[T]>,
    dim: usize,
}

impl<T: Clone + Default> SquareMatrix<T> {
    /// Construct a `dim` x `dim` matrix with every entry set to the default
    /// value of `T`.
    pub fn zeros(dim: usize) -> Self {
        Self {
            data: vec![T::default(); dim * dim].into_boxed_slice(),
            dim,
        }
    }
}

impl<T> SquareMatrix<T> {
    /// Return the number of rows (equivalently, columns).
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Return the underlying data as a slice, row-major.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Return the underlying data as a mutable slice, row-major.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Return row `row` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.dim()`.
    pub fn row(&self, row: usize) -> &[T] {
        assert!(
            row < self.dim,
            "tried to access row {row} of a matrix with {} rows",
            self.dim
        );
        &self.data[row * self.dim..(row + 1) * self.dim]
    }
}

impl<T: Copy> SquareMatrix<T> {
    /// Write `value` at `(i, j)` and mirror it at `(j, i)`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.dim()` or `j >= self.dim()`.
    pub fn set_symmetric(&mut self, i: usize, j: usize, value: T) {
        self[(i, j)] = value;
        self[(j, i)] = value;
    }
}

impl<T> Index<(usize, usize)> for SquareMatrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(row < self.dim, "row {row} is out of bounds (max: {})", self.dim);
        assert!(col < self.dim, "col {col} is out of bounds (max: {})", self.dim);
        &self.data[row * self.dim + col]
    }
}

impl<T> IndexMut<(usize, usize)> for SquareMatrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(row < self.dim, "row {row} is out of bounds (max: {})", self.dim);
        assert!(col < self.dim, "col {col} is out of bounds (max: {})", self.dim);
        &mut self.data[row * self.dim + col]
    }
}

/// Returned when a flat value buffer cannot be interpreted as the strict
/// upper triangle of a square matrix over `cards` cards.
#[derive(Debug, Error)]
#[non_exhaustive]
#[error(
    "condensed distance matrix of length {len} does not match {cards} cards \
     (expected length {expected})"
)]
pub struct TryFromCondensedError {
    len: usize,
    cards: usize,
    expected: usize,
}

/// The strict upper triangle of a symmetric, zero-diagonal matrix over
/// cards, flattened row-major.
///
/// For `n` cards the condensed form has length `n * (n - 1) / 2`; entry
/// `(i, j)` with `i < j` lives at `i * n - i * (i + 1) / 2 + (j - i - 1)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CondensedMatrix {
    values: Box<[u32]>,
    cards: usize,
}

impl CondensedMatrix {
    /// Try to interpret `values` as the condensed distance matrix over
    /// `cards` cards. Rejects any length that is not triangular for `cards`.
    pub fn try_from_values(
        values: Vec<u32>,
        cards: usize,
    ) -> Result<Self, TryFromCondensedError> {
        let expected = cards * cards.saturating_sub(1) / 2;
        if values.len() != expected {
            return Err(TryFromCondensedError {
                len: values.len(),
                cards,
                expected,
            });
        }
        Ok(Self {
            values: values.into_boxed_slice(),
            cards,
        })
    }

    /// Flatten the strict upper triangle of `matrix`, row-major.
    ///
    /// The matrix is assumed symmetric with a zero diagonal; entries below
    /// the diagonal are never read.
    pub fn from_square(matrix: &SquareMatrix<u32>) -> Self {
        let n = matrix.dim();
        let mut values = Vec::with_capacity(n * n.saturating_sub(1) / 2);
        for i in 0..n {
            for j in (i + 1)..n {
                values.push(matrix[(i, j)]);
            }
        }
        Self {
            values: values.into_boxed_slice(),
            cards: n,
        }
    }

    /// The number of cards the matrix ranges over.
    pub fn cards(&self) -> usize {
        self.cards
    }

    /// The number of condensed entries, `cards * (cards - 1) / 2`.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the condensed form has no entries (fewer than two cards).
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The condensed entries, row-major over the strict upper triangle.
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    /// Return the distance between cards `i` and `j` (zero-based). The
    /// diagonal is zero by construction.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.cards()` or `j >= self.cards()`.
    pub fn get(&self, i: usize, j: usize) -> u32 {
        assert!(i < self.cards, "card {i} is out of bounds (max: {})", self.cards);
        assert!(j < self.cards, "card {j} is out of bounds (max: {})", self.cards);
        if i == j {
            return 0;
        }
        let (i, j) = if i < j { (i, j) } else { (j, i) };
        self.values[i * self.cards - i * (i + 1) / 2 + (j - i - 1)]
    }

    /// The largest condensed entry, or zero when there are none.
    pub fn max(&self) -> u32 {
        self.values.iter().copied().max().unwrap_or(0)
    }

    /// The condensed entries widened to `f64`, in order.
    pub fn to_f64(&self) -> Vec<f64> {
        self.values.iter().map(|&v| f64::from(v)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeros_is_square_and_zero() {
        let m = SquareMatrix::<u32>::zeros(4);
        assert_eq!(m.dim(), 4);
        assert_eq!(m.as_slice().len(), 16);
        assert!(m.as_slice().iter().all(|&v| v == 0));
    }

    #[test]
    fn set_symmetric_mirrors() {
        let mut m = SquareMatrix::<u8>::zeros(3);
        m.set_symmetric(0, 2, 1);
        assert_eq!(m[(0, 2)], 1);
        assert_eq!(m[(2, 0)], 1);
        assert_eq!(m[(1, 2)], 0);
    }

    #[test]
    fn row_returns_row_major_slices() {
        let mut m = SquareMatrix::<u32>::zeros(2);
        m[(0, 1)] = 7;
        m[(1, 0)] = 9;
        assert_eq!(m.row(0), &[0, 7]);
        assert_eq!(m.row(1), &[9, 0]);
    }

    #[test]
    #[should_panic(expected = "row 2 is out of bounds (max: 2)")]
    fn index_panics_out_of_bounds() {
        let m = SquareMatrix::<u32>::zeros(2);
        let _ = m[(2, 0)];
    }

    #[test]
    fn condense_flattens_upper_triangle_row_major() {
        // 0 1 2
        // 1 0 3
        // 2 3 0
        let mut m = SquareMatrix::<u32>::zeros(3);
        m.set_symmetric(0, 1, 1);
        m.set_symmetric(0, 2, 2);
        m.set_symmetric(1, 2, 3);

        let c = CondensedMatrix::from_square(&m);
        assert_eq!(c.cards(), 3);
        assert_eq!(c.values(), &[1, 2, 3]);
        assert_eq!(c.get(0, 1), 1);
        assert_eq!(c.get(2, 0), 2);
        assert_eq!(c.get(1, 2), 3);
        assert_eq!(c.get(1, 1), 0);
        assert_eq!(c.max(), 3);
    }

    #[test]
    fn try_from_values_rejects_non_triangular_lengths() {
        let err = CondensedMatrix::try_from_values(vec![1, 2], 3).unwrap_err();
        assert_eq!(
            err.to_string(),
            "condensed distance matrix of length 2 does not match 3 cards (expected length 3)"
        );

        let ok = CondensedMatrix::try_from_values(vec![1, 2, 3], 3).unwrap();
        assert_eq!(ok.values(), &[1, 2, 3]);
    }

    #[test]
    fn single_card_condenses_to_empty() {
        let m = SquareMatrix::<u32>::zeros(1);
        let c = CondensedMatrix::from_square(&m);
        assert!(c.is_empty());
        assert_eq!(c.cards(), 1);
        assert_eq!(c.max(), 0);
    }
}
