/// `Op` is a single column of a global alignment between a candidate and a read.
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum Op {
    /// Candidate symbol aligned against a gap, an "up" move in the score matrix (D)
    Deletion,
    /// Read symbol aligned against a gap, a "left" move in the score matrix (I)
    Insertion,
    /// Identical symbols (=)
    Match,
    /// Different symbols (X)
    Mismatch,
}

impl Op {
    /// Returns the symbol representation of the operation.
    pub fn symbol(&self) -> char {
        match self {
            Op::Deletion => 'D',
            Op::Insertion => 'I',
            Op::Match => '=',
            Op::Mismatch => 'X',
        }
    }

    /// Number of (candidate, read) symbols consumed by the operation.
    pub fn consumes(&self) -> (usize, usize) {
        match self {
            Op::Deletion => (1, 0),
            Op::Insertion => (0, 1),
            Op::Match | Op::Mismatch => (1, 1),
        }
    }
}
