use eyre::{eyre, OptionExt, Result};

use crate::pairwise::alignment::{Alignment, Op, Step};
use crate::Score;

use super::Tracer;

/// Direction-tagged matrix recorded while filling the global alignment scores.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct TraceMatrix {
    rows: usize,
    cols: usize,
    ops: Vec<Option<Op>>,
}

impl TraceMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Direction that won the given cell, `None` for the origin.
    pub fn get(&self, row: usize, col: usize) -> Result<Option<Op>> {
        if row >= self.rows || col >= self.cols {
            return Err(eyre!(
                "Cell ({}, {}) is outside of the {}x{} trace matrix",
                row,
                col,
                self.rows,
                self.cols
            ));
        }
        Ok(self.ops[row * self.cols + col])
    }

    /// Walk from the bottom-right cell back to the origin and return the alignment path.
    pub fn trace(&self) -> Result<Vec<Step<u32>>> {
        if self.ops.is_empty() {
            return Err(eyre!("Trace matrix is empty"));
        }

        let (mut row, mut col) = (self.rows - 1, self.cols - 1);
        let mut path = Vec::with_capacity(row + col);
        while row != 0 || col != 0 {
            let op = self.ops[row * self.cols + col]
                .ok_or_else(|| eyre!("Direction of cell ({}, {}) wasn't recorded", row, col))?;
            let (drow, dcol) = op.consumes();
            row = row
                .checked_sub(drow)
                .ok_or_eyre("Trace path leaves the matrix through the top border")?;
            col = col
                .checked_sub(dcol)
                .ok_or_eyre("Trace path leaves the matrix through the left border")?;
            path.push(op);
        }
        path.reverse();
        Ok(Step::from_ops(path))
    }

    /// Same as `trace`, bundled with the alignment score.
    pub fn alignment<S: Score>(&self, score: S) -> Result<Alignment<S>> {
        Ok(Alignment::new(score, self.trace()?))
    }
}

impl Tracer for TraceMatrix {
    fn reset(&mut self, rows: usize, cols: usize) {
        self.rows = rows;
        self.cols = cols;
        self.ops.clear();
        self.ops.resize(rows * cols, None);
    }

    #[inline(always)]
    fn deletion(&mut self, row: usize, col: usize) {
        self.ops[row * self.cols + col] = Some(Op::Deletion);
    }

    #[inline(always)]
    fn insertion(&mut self, row: usize, col: usize) {
        self.ops[row * self.cols + col] = Some(Op::Insertion);
    }

    #[inline(always)]
    fn diagonal(&mut self, row: usize, col: usize, identical: bool) {
        let op = if identical { Op::Match } else { Op::Mismatch };
        self.ops[row * self.cols + col] = Some(op);
    }
}
