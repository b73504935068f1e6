use std::borrow::Borrow;
use std::fmt::{Display, Write};

use derive_getters::Getters;

use polisher_core_rs::num::PrimUInt;

use super::op::Op;

/// Run of `len` identical columns of a global alignment.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Getters)]
pub struct Step<Len: PrimUInt> {
    /// Always positive.
    len: Len,
    op: Op,
}

impl<Len: PrimUInt> Step<Len> {
    /// Run-length encode single-column operations, e.g. `[=, =, D]` -> `2=1D`.
    /// A run that reaches `Len::max_value()` is continued by a new step.
    pub fn from_ops(ops: impl IntoIterator<Item = Op>) -> Vec<Self> {
        let mut runs: Vec<Self> = Vec::new();
        for op in ops {
            match runs.last_mut() {
                Some(last) if last.op == op && last.len < Len::max_value() => {
                    last.len = last.len + Len::one();
                }
                _ => runs.push(Self {
                    len: Len::one(),
                    op,
                }),
            }
        }
        runs
    }

    /// CIGAR-like representation: `1=1D2=`.
    pub fn rle_string(steps: impl Iterator<Item: Borrow<Step<Len>>>) -> String
    where
        Len: Display,
    {
        let mut result = String::with_capacity(steps.size_hint().0 * 3);
        for step in steps {
            let step = step.borrow();
            // Writing into a String is infallible
            let _ = write!(result, "{}{}", step.len, step.op.symbol());
        }
        result
    }
}
