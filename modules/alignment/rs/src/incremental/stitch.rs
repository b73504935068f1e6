use eyre::{ensure, Result};
use num::Float;

use crate::pairwise::scoring::{ScoringMatrix, Token};
use crate::{Alignable, Score};

/// Row of the reverse matrix holding the suffix that follows an edit at the 1-based `position`.
///
/// `total_rows` includes the boundary row, i.e. it equals `candidate.len() + 1`. Deletions and
/// substitutions consume the candidate symbol at `position`, leaving `total_rows - 1 - position`
/// symbols after it. An insertion happens before `position` and keeps that symbol in the suffix,
/// which is one row further: `total_rows - position`.
///
/// Valid positions are `1..=candidate.len()` for consuming edits and `1..=candidate.len() + 1`
/// for insertions (the last one appends to the candidate).
pub fn mirror_index(total_rows: usize, position: usize, consumes_symbol: bool) -> Result<usize> {
    let last = if consumes_symbol {
        total_rows.saturating_sub(1)
    } else {
        total_rows
    };
    ensure!(
        position >= 1 && position <= last,
        "Edit position {} is outside of the valid range [1, {}]",
        position,
        last
    );
    Ok(last - position)
}

/// Best score of joining a prefix alignment with a suffix alignment.
///
/// `prefix[j]` is the score of some candidate prefix against the first `j` read symbols,
/// `suffix[k]` is the score of the matching candidate suffix against the last `k` read symbols.
/// Every split of the read is tried: max over j of `prefix[j] + suffix[cols - 1 - j]`.
pub fn stitch<S: Score>(prefix: &[S], suffix: &[S]) -> Result<S> {
    ensure!(
        prefix.len() == suffix.len(),
        "Can't stitch rows of different length: {} and {}",
        prefix.len(),
        suffix.len()
    );
    ensure!(!prefix.is_empty(), "Can't stitch empty rows");

    Ok(prefix
        .iter()
        .zip(suffix.iter().rev())
        .map(|(left, right)| *left + *right)
        .fold(S::neg_infinity(), |best, x| best.max(x)))
}

/// Extend a forward row by one new candidate `symbol` aligned against every prefix of `context`.
///
/// The result at column `k` is the best score of the prefix + `symbol` against the first `k`
/// context symbols, given that `symbol` occupies the last alignment column on the candidate side.
pub fn extend<Seq, Scheme>(
    front: &[Scheme::Score],
    symbol: Seq::Symbol,
    context: &Seq,
    scoring: &Scheme,
) -> Result<Vec<Scheme::Score>>
where
    Seq: Alignable + ?Sized,
    Scheme: ScoringMatrix<Symbol = Seq::Symbol> + ?Sized,
{
    ensure!(
        front.len() == context.len() + 1,
        "Local context has {} symbols while the stored alignment was built for {}",
        context.len(),
        front.len().saturating_sub(1)
    );

    let gap = scoring.score(Token::Symbol(symbol), Token::Gap)?;
    let mut row = Vec::with_capacity(front.len());
    row.push(front[0] + gap);
    for k in 0..context.len() {
        let aligned =
            front[k] + scoring.score(Token::Symbol(symbol), Token::Symbol(*context.at(k)))?;
        let skipped = front[k + 1] + gap;
        row.push(aligned.max(skipped));
    }
    Ok(row)
}
