// Instead of making a custom trait here I must support Rust builtin traits for containers
// once they are ready: https://internals.rust-lang.org/t/traits-that-should-be-in-std-but-arent/3002

use derive_more::Constructor;

/// Trait for sequences that can be aligned: candidates, reads and their views.
pub trait Alignable {
    /// The type of individual symbols/elements being aligned.
    type Symbol: Copy;

    /// Returns true if the sequence is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the length of the sequence.
    fn len(&self) -> usize;

    /// Returns the symbol at the given position.
    fn at(&self, pos: usize) -> &Self::Symbol;

    /// Returns a zero-copy view of the sequence read from the end to the start.
    fn reversed(&self) -> Reversed<'_, Self> {
        Reversed::new(self)
    }

    /// Copies the symbols into a vector, mostly useful to materialize views.
    fn symbols(&self) -> Vec<Self::Symbol> {
        (0..self.len()).map(|pos| *self.at(pos)).collect()
    }
}

impl<T: Copy> Alignable for [T] {
    type Symbol = T;

    #[inline(always)]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> &Self::Symbol {
        &self[pos]
    }
}

impl<T: Copy, const N: usize> Alignable for [T; N] {
    type Symbol = T;

    #[inline(always)]
    fn len(&self) -> usize {
        N
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> &Self::Symbol {
        &self[pos]
    }
}

impl<T: Copy> Alignable for &[T] {
    type Symbol = T;

    #[inline(always)]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> &Self::Symbol {
        &self[pos]
    }
}

impl<T: Copy> Alignable for Vec<T> {
    type Symbol = T;

    #[inline(always)]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> &Self::Symbol {
        &self[pos]
    }
}

/// A helper struct that reverses the order of an alignable object.
#[derive(Constructor, Debug)]
pub struct Reversed<'a, T: Alignable + ?Sized> {
    base: &'a T,
}

impl<T: Alignable + ?Sized> Alignable for Reversed<'_, T> {
    type Symbol = T::Symbol;

    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.base.is_empty()
    }

    #[inline(always)]
    fn len(&self) -> usize {
        self.base.len()
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> &Self::Symbol {
        self.base.at(self.base.len() - pos - 1)
    }
}
