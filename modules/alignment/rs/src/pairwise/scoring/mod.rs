use std::fmt::{Display, Formatter};
use std::rc::Rc;
use std::sync::Arc;

use eyre::Result;
use impl_tools::autoimpl;

pub use table::Table;
pub use uniform::Uniform;

pub use crate::Score;

mod table;
mod uniform;

/// Gap symbol used by text representations of scoring tables and alignments.
pub const GAP: u8 = b'-';

/// One side of an alignment column: either a sequence symbol or a gap.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Token<Symbol> {
    Symbol(Symbol),
    Gap,
}

impl Display for Token<u8> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Symbol(symbol) => write!(f, "{}", *symbol as char),
            Token::Gap => write!(f, "{}", GAP as char),
        }
    }
}

/// Lookup table of pairwise scores for symbols and gaps.
///
/// The first token always comes from the candidate (consensus) and the second one from the read,
/// which allows asymmetric tables. Unknown symbols must be reported as errors, the alignment code
/// propagates them unchanged.
#[autoimpl(for <T: trait + ?Sized> &T, Box<T>, Rc<T>, Arc<T>)]
pub trait ScoringMatrix {
    type Score: Score;
    type Symbol: Copy;

    fn score(&self, a: Token<Self::Symbol>, b: Token<Self::Symbol>) -> Result<Self::Score>;
}
