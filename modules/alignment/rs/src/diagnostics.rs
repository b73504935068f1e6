use std::io::Write;

use derive_more::Constructor;
use eyre::Result;
use itertools::Itertools;

use crate::pairwise::alignment::Alignment;
use crate::pairwise::matrix::ScoreMatrix;
use crate::Score;

/// Receiver of the intermediate results produced by global alignments.
#[allow(unused_variables)]
pub trait Sink<S: Score> {
    fn matrix(&mut self, label: &str, matrix: &ScoreMatrix<S>) -> Result<()> {
        Ok(())
    }

    /// `rows` are the candidate and the read with gaps inserted, e.g. `ACGT` / `A-GT`.
    fn alignment(
        &mut self,
        index: usize,
        alignment: &Alignment<S>,
        rows: (&str, &str),
    ) -> Result<()> {
        Ok(())
    }
}

#[derive(Clone, Copy, Eq, PartialEq, Debug, Default)]
pub struct Noop;

impl<S: Score> Sink<S> for Noop {}

/// Human-readable dump of matrices and alignments.
///
/// Matrices are written transposed: one line per read column, scores separated by tabs.
#[derive(Debug, Constructor)]
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn format_score<S: Score>(score: S) -> String {
    match score.to_f64() {
        Some(x) => format!("{:.2}", x),
        None => format!("{:?}", score),
    }
}

impl<S: Score, W: Write> Sink<S> for WriterSink<W> {
    fn matrix(&mut self, label: &str, matrix: &ScoreMatrix<S>) -> Result<()> {
        writeln!(self.writer, "# {}", label)?;
        for col in 0..*matrix.cols() {
            let line = matrix.column(col)?.map(format_score).join("\t");
            writeln!(self.writer, "{}", line)?;
        }
        writeln!(self.writer)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn alignment(
        &mut self,
        index: usize,
        alignment: &Alignment<S>,
        (candidate, read): (&str, &str),
    ) -> Result<()> {
        writeln!(self.writer, "--------------------------------")?;
        writeln!(self.writer, "Read: {}", index)?;
        writeln!(self.writer, "Score: {}", format_score(*alignment.score()))?;
        writeln!(self.writer, "{}", alignment.rle())?;
        writeln!(self.writer, "{}", candidate)?;
        writeln!(self.writer, "{}", read)?;
        writeln!(self.writer)?;
        Ok(())
    }
}
