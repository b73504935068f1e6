use std::fmt::Debug;

/// T values are primitive integers
pub trait PrimInt: ::num::PrimInt + Debug + Default {}
impl<T: ::num::PrimInt + Debug + Default> PrimInt for T {}

/// T values are non-negative primitive integers, e.g. lengths of alignment steps
pub trait PrimUInt: PrimInt + ::num::Unsigned {}
impl<T: PrimInt + ::num::Unsigned> PrimUInt for T {}

/// T values are real numbers, e.g. alignment scores.
/// Thread-safety is required so that tables and matrices can be shared across workers.
pub trait Float: ::num::Float + Debug + Default + Send + Sync + 'static {}
impl<T: ::num::Float + Debug + Default + Send + Sync + 'static> Float for T {}
