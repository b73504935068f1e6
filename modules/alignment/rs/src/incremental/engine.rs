use derive_getters::Getters;
use eyre::{eyre, Result, WrapErr};
use rayon::prelude::*;

use crate::diagnostics::Sink;
use crate::pairwise::global::{fill, TraceMatrix, Tracer};
use crate::pairwise::matrix::ScoreMatrix;
use crate::pairwise::scoring::ScoringMatrix;
use crate::{Alignable, Score};

use super::stitch::{extend, mirror_index, stitch};

/// Forward and reverse global alignment scores of one read against the current candidate.
///
/// The reverse matrix aligns the reversed candidate against the reversed read, so its row `k`
/// holds the scores of the last `k` candidate symbols against every read suffix.
#[derive(Clone, PartialEq, Debug, Getters)]
pub struct Slot<S: Score> {
    forward: ScoreMatrix<S>,
    reverse: ScoreMatrix<S>,
}

impl<S: Score> Slot<S> {
    /// Fill both matrices and return them together with the global alignment score.
    /// Only the forward pass is reported to the `tracer`.
    pub fn build<Seq1, Seq2, Scheme, T>(
        candidate: &Seq1,
        read: &Seq2,
        scoring: &Scheme,
        tracer: &mut T,
    ) -> Result<(Self, S)>
    where
        Seq1: Alignable + ?Sized,
        Seq2: Alignable<Symbol = Seq1::Symbol> + ?Sized,
        Seq1::Symbol: PartialEq,
        Scheme: ScoringMatrix<Symbol = Seq1::Symbol, Score = S> + ?Sized,
        T: Tracer,
    {
        let mut forward = ScoreMatrix::new(candidate.len() + 1, read.len() + 1);
        let score = fill(candidate, read, scoring, &mut forward, tracer)?;

        let mut reverse = ScoreMatrix::new(candidate.len() + 1, read.len() + 1);
        fill(
            &candidate.reversed(),
            &read.reversed(),
            scoring,
            &mut reverse,
            &mut (),
        )?;

        Ok((Self { forward, reverse }, score))
    }

    /// Length of the candidate the slot was built for.
    pub fn candidate_len(&self) -> usize {
        self.forward.rows() - 1
    }

    /// Length of the read the slot was built for.
    pub fn read_len(&self) -> usize {
        self.forward.cols() - 1
    }

    fn suffix(&self, position: usize, consumes_symbol: bool) -> Result<(&[S], &[S])> {
        let mirrored = mirror_index(*self.forward.rows(), position, consumes_symbol)?;
        let prefix = self.forward.row(position - 1)?;
        let suffix = self.reverse.row(mirrored)?;
        Ok((prefix, suffix))
    }
}

/// Incremental scorer of single-symbol candidate edits.
///
/// Every read is registered once per candidate with [`Engine::global_alignment`], after which the
/// score of a deletion, substitution or insertion at any candidate position is computed in
/// O(read length) by stitching a (locally extended) forward row with a reverse row. Stored
/// matrices are never modified by the evaluators.
pub struct Engine<S: Score> {
    slots: Vec<Option<Slot<S>>>,
    sink: Option<Box<dyn Sink<S> + Send>>,
}

impl<S: Score> Engine<S> {
    /// Engine with `expected_reads` unpopulated slots.
    pub fn new(expected_reads: usize) -> Self {
        let mut slots = Vec::with_capacity(expected_reads);
        slots.resize_with(expected_reads, || None);
        Self { slots, sink: None }
    }

    /// Report every global alignment (matrices and traced path) to the given sink.
    pub fn with_sink<K: Sink<S> + Send + 'static>(mut self, sink: K) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Number of slots, populated or not.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Resize the slot collection. Kept slots retain their content, new ones are unpopulated.
    pub fn resize(&mut self, expected_reads: usize) {
        log::debug!(
            "Resizing alignment slots: {} -> {}",
            self.slots.len(),
            expected_reads
        );
        self.slots.resize_with(expected_reads, || None);
    }

    /// Release all stored matrices. The engine must be resized before it can be used again.
    pub fn clean(&mut self) {
        log::debug!("Releasing {} alignment slots", self.slots.len());
        self.slots.clear();
        self.slots.shrink_to_fit();
    }

    pub fn slot(&self, index: usize) -> Result<&Slot<S>> {
        self.slots
            .get(index)
            .ok_or_else(|| {
                eyre!(
                    "Slot index {} is out of range, the engine holds {} slots",
                    index,
                    self.slots.len()
                )
            })?
            .as_ref()
            .ok_or_else(|| eyre!("Slot {} wasn't populated by a global alignment", index))
    }

    pub fn forward(&self, index: usize) -> Result<&ScoreMatrix<S>> {
        Ok(self.slot(index)?.forward())
    }

    pub fn reverse(&self, index: usize) -> Result<&ScoreMatrix<S>> {
        Ok(self.slot(index)?.reverse())
    }

    /// Align `read` against `candidate`, store both score matrices in the slot `index` and return
    /// the global alignment score.
    ///
    /// With a sink attached, the traced forward alignment is reported together with its gapped
    /// rendering, which needs symbols convertible to `char`. The slot keeps its previous content
    /// if the alignment or the sink fails.
    pub fn global_alignment<Seq1, Seq2, Scheme>(
        &mut self,
        candidate: &Seq1,
        read: &Seq2,
        scoring: &Scheme,
        index: usize,
    ) -> Result<S>
    where
        Seq1: Alignable + ?Sized,
        Seq2: Alignable<Symbol = Seq1::Symbol> + ?Sized,
        Seq1::Symbol: PartialEq + Into<char>,
        Scheme: ScoringMatrix<Symbol = Seq1::Symbol, Score = S> + ?Sized,
    {
        if index >= self.slots.len() {
            return Err(eyre!(
                "Slot index {} is out of range, the engine holds {} slots",
                index,
                self.slots.len()
            ));
        }

        let (slot, score) = match self.sink.as_mut() {
            None => Slot::build(candidate, read, scoring, &mut ())?,
            Some(sink) => {
                let mut trace = TraceMatrix::new();
                let (slot, score) = Slot::build(candidate, read, scoring, &mut trace)?;
                sink.matrix("forward", slot.forward())?;
                sink.matrix("reverse", slot.reverse())?;
                let alignment = trace.alignment(score)?;
                let (first, second) = alignment.render(candidate, read)?;
                sink.alignment(index, &alignment, (&first, &second))?;
                (slot, score)
            }
        };

        log::trace!(
            "Slot {}: aligned {} candidate symbols against {} read symbols, score {:?}",
            index,
            candidate.len(),
            read.len(),
            score
        );
        self.slots[index] = Some(slot);
        Ok(score)
    }

    /// Register every read against the same candidate, read `i` going to slot `i`.
    ///
    /// The slot collection is resized to `reads.len()` before the alignment starts. Reads are
    /// aligned in parallel unless a sink is attached, in which case they are processed in order.
    pub fn align_all<Seq1, Seq2, Scheme>(
        &mut self,
        candidate: &Seq1,
        reads: &[Seq2],
        scoring: &Scheme,
    ) -> Result<Vec<S>>
    where
        Seq1: Alignable + Sync + ?Sized,
        Seq2: Alignable<Symbol = Seq1::Symbol> + Sync,
        Seq1::Symbol: PartialEq + Into<char>,
        Scheme: ScoringMatrix<Symbol = Seq1::Symbol, Score = S> + Sync + ?Sized,
    {
        self.resize(reads.len());

        if self.sink.is_some() {
            log::debug!("Aligning {} reads sequentially", reads.len());
            return reads
                .iter()
                .enumerate()
                .map(|(index, read)| self.global_alignment(candidate, read, scoring, index))
                .collect();
        }

        log::debug!("Aligning {} reads in parallel", reads.len());
        let built = reads
            .par_iter()
            .enumerate()
            .map(|(index, read)| {
                Slot::build(candidate, read, scoring, &mut ())
                    .wrap_err_with(|| format!("Failed to align read {}", index))
            })
            .collect::<Result<Vec<_>>>()?;

        let mut scores = Vec::with_capacity(built.len());
        for (target, (slot, score)) in self.slots.iter_mut().zip(built) {
            *target = Some(slot);
            scores.push(score);
        }
        Ok(scores)
    }

    /// Score of the candidate without its `position`-th symbol (1-based) against the read in
    /// the slot `index`.
    pub fn add_deletion(&self, index: usize, position: usize) -> Result<S> {
        let (prefix, suffix) = self.slot(index)?.suffix(position, true)?;
        stitch(prefix, suffix)
    }

    /// Score of the candidate with its `position`-th symbol (1-based) replaced by `symbol`.
    ///
    /// `context` must be the read the slot was built from.
    pub fn add_substitution<Seq, Scheme>(
        &self,
        index: usize,
        position: usize,
        symbol: Seq::Symbol,
        context: &Seq,
        scoring: &Scheme,
    ) -> Result<S>
    where
        Seq: Alignable + ?Sized,
        Scheme: ScoringMatrix<Symbol = Seq::Symbol, Score = S> + ?Sized,
    {
        let (front, suffix) = self.slot(index)?.suffix(position, true)?;
        stitch(&extend(front, symbol, context, scoring)?, suffix)
    }

    /// Score of the candidate with `symbol` inserted before its `position`-th symbol (1-based).
    /// `position = candidate.len() + 1` appends the symbol.
    ///
    /// `context` must be the read the slot was built from.
    pub fn add_insertion<Seq, Scheme>(
        &self,
        index: usize,
        position: usize,
        symbol: Seq::Symbol,
        context: &Seq,
        scoring: &Scheme,
    ) -> Result<S>
    where
        Seq: Alignable + ?Sized,
        Scheme: ScoringMatrix<Symbol = Seq::Symbol, Score = S> + ?Sized,
    {
        let (front, suffix) = self.slot(index)?.suffix(position, false)?;
        stitch(&extend(front, symbol, context, scoring)?, suffix)
    }
}
