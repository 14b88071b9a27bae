//! # Ordinal Values
//!
//! Some layer values are *ordinal* - discrete but meaningfully ordered, such
//! as drainage levels or vegetation-density bands - as opposed to purely
//! categorical ones like rock types. The diffusion operator
//! ([`mix`](crate::layer::mix)) only makes sense over ordinal values, so it
//! is gated on this trait.

use crate::area::LayerValue;

/// A discrete value with a meaningful order and a bounded range.
///
/// `from_rank(rank(v)) == v` must hold for every value in
/// `[MIN_RANK, MAX_RANK]`; operators clamp to that range before converting
/// back, so `from_rank` is never called out of range.
pub trait Ordinal: LayerValue {
    /// Rank of the smallest value in the domain.
    const MIN_RANK: i32;
    /// Rank of the largest value in the domain.
    const MAX_RANK: i32;

    /// Position of this value in the domain's order.
    fn rank(self) -> i32;

    /// Value at the given in-range rank.
    fn from_rank(rank: i32) -> Self;
}

impl Ordinal for u8 {
    const MIN_RANK: i32 = 0;
    const MAX_RANK: i32 = u8::MAX as i32;

    #[inline]
    fn rank(self) -> i32 {
        i32::from(self)
    }

    #[inline]
    fn from_rank(rank: i32) -> Self {
        // Operators clamp before converting; saturate as a fallback.
        rank.clamp(Self::MIN_RANK, Self::MAX_RANK) as u8
    }
}

impl Ordinal for u16 {
    const MIN_RANK: i32 = 0;
    const MAX_RANK: i32 = u16::MAX as i32;

    #[inline]
    fn rank(self) -> i32 {
        i32::from(self)
    }

    #[inline]
    fn from_rank(rank: i32) -> Self {
        rank.clamp(Self::MIN_RANK, Self::MAX_RANK) as u16
    }
}
