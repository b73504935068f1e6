use derive_getters::Getters;
use derive_more::Constructor;
use eyre::{ensure, Result};

use crate::pairwise::scoring::GAP;
use crate::{Alignable, Score};

use super::step::Step;

/// One optimal global alignment between a candidate and a read.
#[derive(Clone, PartialEq, Debug, Getters, Constructor)]
pub struct Alignment<S: Score> {
    score: S,
    steps: Vec<Step<u32>>,
}

impl<S: Score> Alignment<S> {
    /// Checks if the alignment is empty, i.e. both sequences were empty.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Returns the total length of the alignment - the number of columns.
    pub fn len(&self) -> usize {
        self.steps.iter().map(|x| *x.len() as usize).sum()
    }

    /// Returns the RLE representation of the alignment.
    pub fn rle(&self) -> String {
        Step::rle_string(self.steps.iter())
    }

    /// Renders both sequences with gaps inserted, e.g. `ACGT` / `A-GT`.
    pub fn render<Seq1, Seq2>(&self, candidate: &Seq1, read: &Seq2) -> Result<(String, String)>
    where
        Seq1: Alignable + ?Sized,
        Seq2: Alignable<Symbol = Seq1::Symbol> + ?Sized,
        Seq1::Symbol: Into<char>,
    {
        let total = self.len();
        let mut first = String::with_capacity(total);
        let mut second = String::with_capacity(total);
        let (mut i, mut j) = (0, 0);

        for step in &self.steps {
            let (di, dj) = step.op().consumes();
            for _ in 0..*step.len() {
                ensure!(
                    i + di <= candidate.len() && j + dj <= read.len(),
                    "Alignment path doesn't fit sequences of length {} and {}",
                    candidate.len(),
                    read.len()
                );
                first.push(if di == 1 {
                    (*candidate.at(i)).into()
                } else {
                    GAP as char
                });
                second.push(if dj == 1 {
                    (*read.at(j)).into()
                } else {
                    GAP as char
                });
                i += di;
                j += dj;
            }
        }
        ensure!(
            i == candidate.len() && j == read.len(),
            "Alignment path covers {}/{} candidate and {}/{} read symbols",
            i,
            candidate.len(),
            j,
            read.len()
        );
        Ok((first, second))
    }
}
