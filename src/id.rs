//! Id trait for stable record identifiers.
//!
//! The [`Id`] trait abstracts over the integer type used for record
//! identifiers. Picking a narrower type shrinks the permutation arrays
//! and caps how many records a slab can ever hold.

/// Trait for identifier types handed out by a slab.
///
/// An id is a plain integer in `[0, capacity)`. `LIMIT` is the largest
/// capacity a slab keyed by this type may reach, so every id a slab
/// hands out round-trips through `from_usize`/`as_usize` losslessly.
///
/// # Example
///
/// ```
/// use category_slab::Id;
///
/// assert_eq!(u16::LIMIT, u16::MAX);
/// assert_eq!(u32::from_usize(42).as_usize(), 42);
/// ```
///
/// # Custom Id Types
///
/// ```
/// use category_slab::Id;
///
/// #[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
/// struct OrderId(u64);
///
/// impl Id for OrderId {
///     const LIMIT: Self = OrderId(u64::MAX);
///
///     fn from_usize(val: usize) -> Self {
///         OrderId(val as u64)
///     }
///
///     fn as_usize(&self) -> usize {
///         self.0 as usize
///     }
/// }
/// ```
pub trait Id: Copy + Eq {
    /// Maximum capacity of a slab keyed by this type.
    ///
    /// A slab never grows to more than `LIMIT.as_usize()` slots, which
    /// guarantees every position fits in the id type without truncation.
    const LIMIT: Self;

    /// Creates an id from a `usize` value.
    ///
    /// Only called with values below `LIMIT.as_usize()`.
    fn from_usize(val: usize) -> Self;

    /// Returns the id as a `usize`, for indexing the backing arrays.
    fn as_usize(&self) -> usize;
}

// =============================================================================
// Implementations for integer types
// =============================================================================

impl Id for u16 {
    const LIMIT: Self = u16::MAX;

    #[inline]
    fn from_usize(val: usize) -> Self {
        val as u16
    }

    #[inline]
    fn as_usize(&self) -> usize {
        *self as usize
    }
}

impl Id for u32 {
    const LIMIT: Self = u32::MAX;

    #[inline]
    fn from_usize(val: usize) -> Self {
        val as u32
    }

    #[inline]
    fn as_usize(&self) -> usize {
        *self as usize
    }
}

impl Id for u64 {
    const LIMIT: Self = u64::MAX;

    #[inline]
    fn from_usize(val: usize) -> Self {
        val as u64
    }

    #[inline]
    fn as_usize(&self) -> usize {
        *self as usize
    }
}

impl Id for usize {
    const LIMIT: Self = usize::MAX;

    #[inline]
    fn from_usize(val: usize) -> Self {
        val
    }

    #[inline]
    fn as_usize(&self) -> usize {
        *self
    }
}
