#![doc = include_str!("../README.md")]
#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![warn(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "alloc")]
mod boxed;
mod error;
mod select;
mod sentinel;

#[cfg(feature = "alloc")]
pub use boxed::BoxedMedianFilter;
pub use error::{Error, Result};
pub use sentinel::Sentinel;

/// A streaming filter that turns each incoming sample into a smoothed output sample
///
/// Implemented by every filter flavour in this crate, so control loops can stay generic over
/// how the window is stored.
pub trait Filter {
    /// Type of the samples going in and coming out
    type Sample;

    /// Submits a new sample and returns the filtered value
    fn filter(&mut self, sample: Self::Sample) -> Self::Sample;

    /// Number of samples in the window
    fn capacity(&self) -> usize;
}

/// Sliding-window median filter with a window size fixed at compile time
///
/// The [`Self::new`] constructor fills all `N` slots of the window with a start value.
/// Each call to [`Self::filter`] then overwrites the oldest sample and returns the median of the
/// `N` most recent ones, counting start values that have not aged out yet.
///
/// For even `N` the result is the upper of the two middle samples, never an average,
/// so the output is always a value that was actually submitted (or the start value).
///
/// `N` must be at least 1. A zero-sized window fails to compile:
///
/// ```compile_fail
/// let _ = sliding_median::MedianFilter::<u8, 0>::default();
/// ```
#[derive(Debug, Clone)]
pub struct MedianFilter<T, const N: usize> {
    /// Value that compares greater than or equal to every legitimate sample
    ///
    /// Written over already-selected slots of the scratch copy during a scan
    sentinel: T,

    /// Last `N` samples, as a ring buffer
    window: [T; N],

    /// Slot the next sample is written to
    ///
    /// Always in `0..N`, moving backwards one slot per sample
    cursor: usize,
}

impl<T, const N: usize> MedianFilter<T, N> {
    const NON_EMPTY: () = assert!(N > 0, "Window size must be greater than 0");

    /// Number of samples in the window
    pub const fn capacity(&self) -> usize {
        N
    }
}

impl<T: Copy + PartialOrd, const N: usize> MedianFilter<T, N> {
    /// Constructs a new [`Self`], with every slot of the window set to `start`
    ///
    /// Inputs:
    /// - `sentinel`: A value greater than or equal to any sample that will be submitted.
    /// - `start`: Value the window is pre-filled with.
    ///
    /// For primitive numeric types, [`Self::default`] and [`Self::filled_with`] derive the
    /// sentinel automatically.
    pub fn new(sentinel: T, start: T) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NON_EMPTY;
        log_construction(N);

        Self {
            sentinel,
            window: [start; N],
            cursor: N - 1,
        }
    }

    /// Constructs a new [`Self`] with an explicit sentinel, and the window filled with `T::default()`
    pub fn with_sentinel(sentinel: T) -> Self
    where
        T: Default,
    {
        Self::new(sentinel, T::default())
    }

    /// Constructs a new [`Self`] with the window filled with `start`, and the sentinel taken from [`Sentinel`]
    pub fn filled_with(start: T) -> Self
    where
        T: Sentinel,
    {
        Self::new(T::SENTINEL, start)
    }

    /// The sentinel this filter masks selected samples with
    pub fn sentinel(&self) -> T {
        self.sentinel
    }

    /// Submits a new sample, and returns the median of the window
    ///
    /// The sample replaces the oldest one in the window.
    /// Runs in O(N²) comparisons with an `N` sample scratch copy on the stack, and never fails.
    pub fn filter(&mut self, sample: T) -> T {
        self.window[self.cursor] = sample;
        self.cursor = (self.cursor + N - 1) % N;

        let mut scratch = [self.sentinel; N];
        select::median_of(&self.window, &mut scratch, self.sentinel)
    }
}

impl<T: Copy + PartialOrd + Sentinel + Default, const N: usize> Default for MedianFilter<T, N> {
    /// Initializes a filter with the window filled with `T::default()`, and the sentinel from [`Sentinel`]
    fn default() -> Self {
        Self::new(T::SENTINEL, T::default())
    }
}

impl<T: Copy + PartialOrd, const N: usize> Filter for MedianFilter<T, N> {
    type Sample = T;

    fn filter(&mut self, sample: T) -> T {
        MedianFilter::filter(self, sample)
    }

    fn capacity(&self) -> usize {
        N
    }
}

fn log_construction(capacity: usize) {
    #[cfg(feature = "logging")]
    {
        if capacity % 2 == 0 {
            log::warn!(
                "Got even median window size: {}. The upper middle sample will be returned.",
                capacity
            );
        }

        log::debug!(
            "Built median filter over {} samples, selecting rank {}",
            capacity,
            select::rounds(capacity)
        );
    }

    #[cfg(not(feature = "logging"))]
    let _ = capacity;
}
