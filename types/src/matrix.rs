//! Dense row-major `f64` matrix.

use std::mem::size_of;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("cannot multiply {lhs_rows}x{lhs_cols} by {rhs_rows}x{rhs_cols}")]
    Mismatch {
        lhs_rows: usize,
        lhs_cols: usize,
        rhs_rows: usize,
        rhs_cols: usize,
    },
    #[error("row {row} has {len} entries, expected {expected}")]
    Ragged {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("{rows}x{cols} matrix does not fit in memory")]
    TooLarge { rows: usize, cols: usize },
}

/// A dense matrix stored row-major.
///
/// Shape is stored explicitly so `0x0` (and `0xN`) matrices are well-formed.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

/// Reserve room for `rows * cols` entries, failing instead of aborting when
/// the buffer cannot be allocated.
fn allocate(rows: usize, cols: usize) -> Result<(usize, Vec<f64>), ShapeError> {
    let too_large = ShapeError::TooLarge { rows, cols };
    let len = rows.checked_mul(cols).ok_or(too_large)?;
    let bytes = len.checked_mul(size_of::<f64>()).ok_or(too_large)?;
    if isize::try_from(bytes).is_err() {
        return Err(too_large);
    }

    let mut data = Vec::new();
    data.try_reserve_exact(len).map_err(|_| too_large)?;
    Ok((len, data))
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, ShapeError> {
        let (len, mut data) = allocate(rows, cols)?;
        data.resize(len, 0.0);
        Ok(Self { rows, cols, data })
    }

    /// Build a matrix by evaluating `f(row, col)` for every entry, row by row.
    pub fn from_fn(
        rows: usize,
        cols: usize,
        mut f: impl FnMut(usize, usize) -> f64,
    ) -> Result<Self, ShapeError> {
        let (_, mut data) = allocate(rows, cols)?;
        for row in 0..rows {
            for col in 0..cols {
                data.push(f(row, col));
            }
        }
        Ok(Self { rows, cols, data })
    }

    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, ShapeError> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != cols {
                return Err(ShapeError::Ragged {
                    row,
                    len: values.len(),
                    expected: cols,
                });
            }
            data.extend_from_slice(values);
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }

    pub fn identity(n: usize) -> Result<Self, ShapeError> {
        Self::from_fn(n, n, |row, col| if row == col { 1.0 } else { 0.0 })
    }

    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub const fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.data[row * self.cols + col])
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Sum of the main diagonal.
    #[must_use]
    pub fn trace(&self) -> f64 {
        (0..self.rows.min(self.cols))
            .map(|i| self.data[i * self.cols + i])
            .sum()
    }

    /// Standard matrix product `self · rhs`.
    ///
    /// Loops in i-k-j order so the inner loop walks both `rhs` and the output
    /// row contiguously.
    pub fn matmul(&self, rhs: &Self) -> Result<Self, ShapeError> {
        if self.cols != rhs.rows {
            return Err(ShapeError::Mismatch {
                lhs_rows: self.rows,
                lhs_cols: self.cols,
                rhs_rows: rhs.rows,
                rhs_cols: rhs.cols,
            });
        }

        let mut out = Self::zeros(self.rows, rhs.cols)?;
        let n = rhs.cols;
        for i in 0..self.rows {
            let out_row = &mut out.data[i * n..(i + 1) * n];
            for k in 0..self.cols {
                let a = self.data[i * self.cols + k];
                let rhs_row = &rhs.data[k * n..(k + 1) * n];
                for (acc, b) in out_row.iter_mut().zip(rhs_row) {
                    *acc += a * b;
                }
            }
        }
        Ok(out)
    }
}
