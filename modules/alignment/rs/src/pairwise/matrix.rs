use std::ops::{Index, IndexMut};

use derive_getters::Getters;
use eyre::{ensure, eyre, Result};

use crate::Score;

/// Dense row-major table of alignment scores.
///
/// Row `i` corresponds to the candidate prefix of length `i`, column `j` to the read prefix of
/// length `j`. Row 0 and column 0 hold the empty-prefix boundary.
#[derive(Clone, PartialEq, Debug, Getters)]
pub struct ScoreMatrix<S: Score> {
    rows: usize,
    cols: usize,
    #[getter(skip)]
    data: Vec<S>,
}

impl<S: Score> ScoreMatrix<S> {
    /// Zero-filled matrix with the given shape.
    /// Both dimensions include the boundary and must be positive.
    pub fn new(rows: usize, cols: usize) -> Self {
        debug_assert!(rows > 0 && cols > 0);
        Self {
            rows,
            cols,
            data: vec![S::zero(); rows * cols],
        }
    }

    /// Matrix from row-major values.
    pub fn from_rows(rows: Vec<Vec<S>>) -> Result<Self> {
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        ensure!(
            cols > 0,
            "Score matrix must have at least one row and one column"
        );
        if let Some(ind) = rows.iter().position(|x| x.len() != cols) {
            return Err(eyre!(
                "Row {} has {} columns while the first row has {}",
                ind,
                rows[ind].len(),
                cols
            ));
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            data: rows.into_iter().flatten().collect(),
        })
    }

    /// Reshape the matrix and reset all values to zero, reusing the allocated buffer.
    pub fn reset(&mut self, rows: usize, cols: usize) {
        debug_assert!(rows > 0 && cols > 0);
        self.rows = rows;
        self.cols = cols;
        self.data.clear();
        self.data.resize(rows * cols, S::zero());
    }

    pub fn get(&self, row: usize, col: usize) -> Result<S> {
        if row >= self.rows || col >= self.cols {
            return Err(eyre!(
                "Cell ({}, {}) is outside of the {}x{} score matrix",
                row,
                col,
                self.rows,
                self.cols
            ));
        }
        Ok(self.data[row * self.cols + col])
    }

    pub fn row(&self, row: usize) -> Result<&[S]> {
        if row >= self.rows {
            return Err(eyre!(
                "Row {} is outside of the score matrix with {} rows",
                row,
                self.rows
            ));
        }
        Ok(&self.data[row * self.cols..(row + 1) * self.cols])
    }

    pub fn column(&self, col: usize) -> Result<impl ExactSizeIterator<Item = S> + '_> {
        if col >= self.cols {
            return Err(eyre!(
                "Column {} is outside of the score matrix with {} columns",
                col,
                self.cols
            ));
        }
        Ok(self.data.iter().skip(col).step_by(self.cols).copied())
    }

    /// Bottom-right cell: the score of the full alignment.
    pub fn last(&self) -> S {
        self.data[self.data.len() - 1]
    }

    pub fn iter_rows(&self) -> impl ExactSizeIterator<Item = &[S]> + '_ {
        self.data.chunks_exact(self.cols)
    }
}

impl<S: Score> Index<(usize, usize)> for ScoreMatrix<S> {
    type Output = S;

    #[inline(always)]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        debug_assert!(row < self.rows && col < self.cols);
        &self.data[row * self.cols + col]
    }
}

impl<S: Score> IndexMut<(usize, usize)> for ScoreMatrix<S> {
    #[inline(always)]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        debug_assert!(row < self.rows && col < self.cols);
        &mut self.data[row * self.cols + col]
    }
}
