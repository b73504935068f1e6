use std::fs;
use std::path::Path;
use std::str::FromStr;

use derive_getters::Getters;
use eyre::{ensure, eyre, OptionExt, Result, WrapErr};

use super::{Score, ScoringMatrix, Token, GAP};

/// Dense substitution table over a byte alphabet, including the gap column/row.
///
/// Text representation (comments and blank lines are ignored):
/// ```text
/// # Column symbols, '-' is the gap
///      A    C    G    T    -
/// A    1   -1   -1   -1   -1
/// C   -1    1   -1   -1   -1
/// G   -1   -1    1   -1   -1
/// T   -1   -1   -1    1   -1
/// -   -1   -1   -1   -1    0
/// ```
/// Rows correspond to candidate tokens, columns to read tokens. The `-` row and column are only
/// reachable through `Token::Gap`: a sequence symbol `-` is rejected by lookups.
#[derive(Clone, PartialEq, Debug, Getters)]
pub struct Table<S: Score> {
    symbols: Vec<u8>,
    #[getter(skip)]
    index: [Option<u16>; 256],
    #[getter(skip)]
    scores: Vec<S>,
}

impl<S: Score> Table<S> {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read scoring table: {}", path.display()))?;
        content
            .parse()
            .wrap_err_with(|| format!("Malformed scoring table: {}", path.display()))
    }

    #[inline(always)]
    fn position(&self, token: Token<u8>) -> Result<usize> {
        let byte = match token {
            Token::Symbol(GAP) => {
                return Err(eyre!(
                    "Gap symbol '{}' can't be scored as a sequence symbol",
                    GAP as char
                ));
            }
            Token::Symbol(symbol) => symbol,
            Token::Gap => GAP,
        };
        self.index[byte as usize]
            .map(|x| x as usize)
            .ok_or_else(|| eyre!("Symbol '{}' is not present in the scoring table", token))
    }
}

impl<S: Score> ScoringMatrix for Table<S> {
    type Score = S;
    type Symbol = u8;

    #[inline(always)]
    fn score(&self, a: Token<u8>, b: Token<u8>) -> Result<S> {
        let (row, col) = (self.position(a)?, self.position(b)?);
        Ok(self.scores[row * self.symbols.len() + col])
    }
}

fn parse_symbol(field: &str, line: usize) -> Result<u8> {
    match field.as_bytes() {
        [symbol] => Ok(*symbol),
        _ => Err(eyre!(
            "Line {}: expected a single-byte symbol, got '{}'",
            line,
            field
        )),
    }
}

fn parse_score<S: Score>(field: &str, line: usize) -> Result<S> {
    let value: f64 = field
        .parse()
        .wrap_err_with(|| format!("Line {}: invalid score '{}'", line, field))?;
    num::cast(value)
        .ok_or_else(|| eyre!("Line {}: score {} is not representable", line, value))
}

impl<S: Score> FromStr for Table<S> {
    type Err = eyre::Report;

    fn from_str(content: &str) -> Result<Self> {
        let mut lines = content
            .lines()
            .enumerate()
            .map(|(ind, line)| (ind + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'));

        let (header_line, header) = lines.next().ok_or_eyre("Scoring table is empty")?;
        let symbols = header
            .split_whitespace()
            .map(|field| parse_symbol(field, header_line))
            .collect::<Result<Vec<_>>>()?;

        let mut index = [None; 256];
        for (ind, symbol) in symbols.iter().enumerate() {
            ensure!(
                index[*symbol as usize].is_none(),
                "Line {}: symbol '{}' is listed twice in the header",
                header_line,
                *symbol as char
            );
            index[*symbol as usize] = Some(ind as u16);
        }

        let width = symbols.len();
        let mut scores = vec![S::zero(); width * width];
        let mut filled = vec![false; width];
        for (line, content) in lines {
            let mut fields = content.split_whitespace();
            let symbol = fields
                .next()
                .ok_or_else(|| eyre!("Line {}: missing row symbol", line))
                .and_then(|field| parse_symbol(field, line))?;
            let row = index[symbol as usize]
                .ok_or_else(|| {
                    eyre!(
                        "Line {}: row symbol '{}' is missing from the header",
                        line,
                        symbol as char
                    )
                })? as usize;
            ensure!(
                !filled[row],
                "Line {}: row '{}' is defined twice",
                line,
                symbol as char
            );

            let values = fields
                .map(|field| parse_score::<S>(field, line))
                .collect::<Result<Vec<_>>>()?;
            ensure!(
                values.len() == width,
                "Line {}: expected {} scores, got {}",
                line,
                width,
                values.len()
            );

            scores[row * width..(row + 1) * width].copy_from_slice(&values);
            filled[row] = true;
        }

        if let Some(missing) = filled.iter().position(|x| !x) {
            return Err(eyre!(
                "Row for symbol '{}' is missing",
                symbols[missing] as char
            ));
        }

        Ok(Self {
            symbols,
            index,
            scores,
        })
    }
}
