/// Sample types with a known value that compares greater than or equal to every legitimate sample
///
/// Filters use this value to mask samples that have already been selected during a scan.
/// It is implemented for the primitive integers (their `MAX`) and floats (positive infinity).
///
/// Types without a natural upper bound, such as fixed-point wrappers around a raw reading,
/// can implement this trait themselves, or pass the sentinel explicitly through
/// [`MedianFilter::new`](crate::MedianFilter::new).
///
/// ```
/// use sliding_median::{MedianFilter, Sentinel};
///
/// #[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
/// struct Millivolts(u16);
///
/// impl Sentinel for Millivolts {
///     const SENTINEL: Self = Millivolts(u16::MAX);
/// }
///
/// let mut filter = MedianFilter::<Millivolts, 3>::default();
/// filter.filter(Millivolts(3300));
/// assert_eq!(filter.filter(Millivolts(3290)), Millivolts(3290));
/// ```
pub trait Sentinel: Sized {
    /// A value no legitimate sample exceeds
    const SENTINEL: Self;
}

macro_rules! impl_sentinel_max {
    ($($t:ty),*) => {
        $(
            impl Sentinel for $t {
                const SENTINEL: Self = <$t>::MAX;
            }
        )*
    };
}

impl_sentinel_max!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl Sentinel for f32 {
    const SENTINEL: Self = f32::INFINITY;
}

impl Sentinel for f64 {
    const SENTINEL: Self = f64::INFINITY;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_sentinels_are_max() {
        assert_eq!(u8::SENTINEL, u8::MAX);
        assert_eq!(i16::SENTINEL, i16::MAX);
        assert_eq!(usize::SENTINEL, usize::MAX);
    }

    #[test]
    fn float_sentinels_dominate_max() {
        assert!(f32::SENTINEL >= f32::MAX);
        assert!(f64::SENTINEL >= f64::MAX);
    }
}
