pub use traceback::TraceMatrix;

use eyre::Result;
use num::Float;

use crate::pairwise::matrix::ScoreMatrix;
use crate::pairwise::scoring::{ScoringMatrix, Token};
use crate::Alignable;

mod traceback;

// The global alignment runs row-by-row and notifies the tracer about the move that won each cell.
// Diagonal moves win ties, then deletions ("up"), then insertions ("left").
#[allow(unused_variables)]
pub trait Tracer {
    fn reset(&mut self, rows: usize, cols: usize) {}

    fn deletion(&mut self, row: usize, col: usize) {}
    fn insertion(&mut self, row: usize, col: usize) {}
    fn diagonal(&mut self, row: usize, col: usize, identical: bool) {}
}

impl Tracer for () {}

/// Fill `matrix` with global alignment scores of `candidate` (rows) against `read` (columns) and
/// return the score of the full alignment.
///
/// Gap costs are looked up in the scoring matrix like any other pair, so arbitrary (asymmetric)
/// tables are supported. The first failed lookup aborts the computation.
pub fn fill<Seq1, Seq2, Scheme, T>(
    candidate: &Seq1,
    read: &Seq2,
    scoring: &Scheme,
    matrix: &mut ScoreMatrix<Scheme::Score>,
    tracer: &mut T,
) -> Result<Scheme::Score>
where
    Seq1: Alignable + ?Sized,
    Seq2: Alignable<Symbol = Seq1::Symbol> + ?Sized,
    Seq1::Symbol: PartialEq,
    Scheme: ScoringMatrix<Symbol = Seq1::Symbol> + ?Sized,
    T: Tracer,
{
    let (rows, cols) = (candidate.len() + 1, read.len() + 1);
    matrix.reset(rows, cols);
    tracer.reset(rows, cols);

    // Read-side gap costs are shared by all rows
    let insertions = (0..read.len())
        .map(|j| scoring.score(Token::Gap, Token::Symbol(*read.at(j))))
        .collect::<Result<Vec<_>>>()?;

    for col in 1..cols {
        matrix[(0, col)] = matrix[(0, col - 1)] + insertions[col - 1];
        tracer.insertion(0, col);
    }

    for row in 1..rows {
        let symbol = *candidate.at(row - 1);
        let deletion = scoring.score(Token::Symbol(symbol), Token::Gap)?;

        matrix[(row, 0)] = matrix[(row - 1, 0)] + deletion;
        tracer.deletion(row, 0);

        for col in 1..cols {
            let other = *read.at(col - 1);

            let left = matrix[(row, col - 1)] + insertions[col - 1];
            let up = matrix[(row - 1, col)] + deletion;
            let cross = matrix[(row - 1, col - 1)]
                + scoring.score(Token::Symbol(symbol), Token::Symbol(other))?;

            let score = left.max(up).max(cross);
            matrix[(row, col)] = score;

            if score == cross {
                tracer.diagonal(row, col, symbol == other);
            } else if score == up {
                tracer.deletion(row, col);
            } else {
                tracer.insertion(row, col);
            }
        }
    }

    Ok(matrix.last())
}
