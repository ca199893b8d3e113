use std::fmt::{self, Debug, Display};
use num_traits::PrimInt;

/// Tentative or final distance of a vertex.
///
/// Variant order matters: the derived `Ord` places every `Finite` value before
/// `Unreached`, so `Unreached` behaves as infinity in comparisons and heaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance<W> {
    Finite(W),
    Unreached,
}

impl<W> Distance<W>
where
    W: PrimInt + Debug,
{
    /// Distance of a search source
    pub fn zero() -> Self {
        Distance::Finite(W::zero())
    }

    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// Returns the finite value, `None` for unreached
    pub fn finite(self) -> Option<W> {
        match self {
            Distance::Finite(w) => Some(w),
            Distance::Unreached => None,
        }
    }

    /// Extends this distance by an edge weight.
    ///
    /// `Unreached` stays `Unreached`. Returns `None` when the sum does not fit in `W`.
    pub fn extend(self, weight: W) -> Option<Self> {
        match self {
            Distance::Finite(w) => w.checked_add(&weight).map(Distance::Finite),
            Distance::Unreached => Some(Distance::Unreached),
        }
    }
}

impl<W> Default for Distance<W> {
    fn default() -> Self {
        Distance::Unreached
    }
}

impl<W> From<Option<W>> for Distance<W> {
    fn from(value: Option<W>) -> Self {
        value.map_or(Distance::Unreached, Distance::Finite)
    }
}

impl<W: Display> Display for Distance<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(w) => write!(f, "{}", w),
            Distance::Unreached => write!(f, "inf"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreached_sorts_after_every_finite_value() {
        assert!(Distance::Finite(u64::MAX) < Distance::Unreached);
        assert!(Distance::Finite(0i64) < Distance::Finite(1));
        assert_eq!(Distance::<u32>::default(), Distance::Unreached);
    }

    #[test]
    fn extend_adds_and_keeps_unreached() {
        assert_eq!(Distance::Finite(3i64).extend(4), Some(Distance::Finite(7)));
        assert_eq!(Distance::Finite(u8::MAX - 5).extend(5), Some(Distance::Finite(u8::MAX)));
        assert_eq!(Distance::<u8>::Unreached.extend(u8::MAX), Some(Distance::Unreached));
    }

    #[test]
    fn extend_reports_overflow() {
        assert_eq!(Distance::Finite(u8::MAX - 1).extend(5), None);
        assert_eq!(Distance::Finite(i64::MAX).extend(1), None);
    }
}
