#![allow(dead_code)]

use eyre::Result;
use polisher_alignment_rs::pairwise::scoring::{ScoringMatrix, Table, Token, Uniform};
use rand::rngs::StdRng;
use rand::Rng;

pub const ALPHABET: &[u8] = b"ACGT";

// Asymmetric on purpose: candidate/read roles must never be swapped
pub const TABLE: &str = "
# Homopolymer-friendly scores
     A     C     G     T     -
A    2  -1.5    -1    -1  -1.5
C   -1     2  -1.5    -1    -1
G   -1    -1     2  -0.5    -1
T  -0.5   -1    -1     2    -2
-  -1.5   -1    -1    -1     0
";

pub fn uniform() -> Uniform<f64, u8> {
    Uniform::default()
}

pub fn table() -> Result<Table<f64>> {
    TABLE.parse()
}

pub fn random_sequence(rng: &mut StdRng, min: usize, max: usize) -> Vec<u8> {
    let length = rng.random_range(min..=max);
    (0..length)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())])
        .collect()
}

/// Copy of `origin` with a few random point errors.
pub fn mutate(rng: &mut StdRng, origin: &[u8], errors: usize) -> Vec<u8> {
    let mut result = origin.to_vec();
    for _ in 0..errors {
        let symbol = ALPHABET[rng.random_range(0..ALPHABET.len())];
        match rng.random_range(0..3) {
            0 if !result.is_empty() => {
                let position = rng.random_range(0..result.len());
                result.remove(position);
            }
            1 if !result.is_empty() => {
                let position = rng.random_range(0..result.len());
                result[position] = symbol;
            }
            _ => {
                let position = rng.random_range(0..=result.len());
                result.insert(position, symbol);
            }
        }
    }
    result
}

/// Straightforward Needleman-Wunsch over plain vectors.
pub fn reference<M>(candidate: &[u8], read: &[u8], scoring: &M) -> Result<Vec<Vec<f64>>>
where
    M: ScoringMatrix<Score = f64, Symbol = u8>,
{
    let mut matrix = vec![vec![0.0; read.len() + 1]; candidate.len() + 1];
    for j in 1..=read.len() {
        let insertion = scoring.score(Token::Gap, Token::Symbol(read[j - 1]))?;
        matrix[0][j] = matrix[0][j - 1] + insertion;
    }
    for i in 1..=candidate.len() {
        let deletion = scoring.score(Token::Symbol(candidate[i - 1]), Token::Gap)?;
        matrix[i][0] = matrix[i - 1][0] + deletion;
        for j in 1..=read.len() {
            let (a, b) = (Token::Symbol(candidate[i - 1]), Token::Symbol(read[j - 1]));
            let candidates = [
                matrix[i - 1][j - 1] + scoring.score(a, b)?,
                matrix[i - 1][j] + scoring.score(a, Token::Gap)?,
                matrix[i][j - 1] + scoring.score(Token::Gap, b)?,
            ];
            matrix[i][j] = candidates.into_iter().fold(f64::NEG_INFINITY, f64::max);
        }
    }
    Ok(matrix)
}

pub fn reference_score<M>(candidate: &[u8], read: &[u8], scoring: &M) -> Result<f64>
where
    M: ScoringMatrix<Score = f64, Symbol = u8>,
{
    let matrix = reference(candidate, read, scoring)?;
    Ok(matrix[candidate.len()][read.len()])
}

pub fn deleted(candidate: &[u8], position: usize) -> Vec<u8> {
    let mut result = candidate.to_vec();
    result.remove(position - 1);
    result
}

pub fn substituted(candidate: &[u8], position: usize, symbol: u8) -> Vec<u8> {
    let mut result = candidate.to_vec();
    result[position - 1] = symbol;
    result
}

pub fn inserted(candidate: &[u8], position: usize, symbol: u8) -> Vec<u8> {
    let mut result = candidate.to_vec();
    result.insert(position - 1, symbol);
    result
}
