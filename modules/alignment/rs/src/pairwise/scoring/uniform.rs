use std::marker::PhantomData;

use eyre::{eyre, Result};

use super::{Score, ScoringMatrix, Token};

/// Position- and symbol-invariant scoring: one score for identical symbols, one for different
/// symbols and one for a symbol against a gap.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Uniform<S: Score, Symbol = u8> {
    pub matched: S,
    pub mismatched: S,
    pub gap: S,
    _phantom: PhantomData<Symbol>,
}

impl<S: Score, Symbol: PartialEq + Copy> Uniform<S, Symbol> {
    pub fn new(matched: S, mismatched: S, gap: S) -> Self {
        Self {
            matched,
            mismatched,
            gap,
            _phantom: Default::default(),
        }
    }
}

impl<S: Score, Symbol: PartialEq + Copy> Default for Uniform<S, Symbol> {
    fn default() -> Self {
        Self::new(S::one(), S::zero() - S::one(), S::zero() - S::one())
    }
}

impl<S: Score, Symbol: PartialEq + Copy> ScoringMatrix for Uniform<S, Symbol> {
    type Score = S;
    type Symbol = Symbol;

    #[inline(always)]
    fn score(&self, a: Token<Symbol>, b: Token<Symbol>) -> Result<S> {
        match (a, b) {
            (Token::Symbol(a), Token::Symbol(b)) if a == b => Ok(self.matched),
            (Token::Symbol(_), Token::Symbol(_)) => Ok(self.mismatched),
            (Token::Symbol(_), Token::Gap) | (Token::Gap, Token::Symbol(_)) => Ok(self.gap),
            (Token::Gap, Token::Gap) => Err(eyre!("Gaps can't be aligned against each other")),
        }
    }
}
