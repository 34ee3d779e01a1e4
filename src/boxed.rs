use alloc::{boxed::Box, vec};

use crate::{log_construction, select, Error, Filter, Result, Sentinel};

/// Sliding-window median filter with a window size chosen at run time
///
/// Behaves exactly like [`MedianFilter`](crate::MedianFilter), but stores its window and scratch
/// buffer on the heap. Both are allocated once, in the constructor; [`Self::filter`] never allocates.
///
/// Use this when the window size comes from configuration rather than from the code.
#[derive(Debug, Clone)]
pub struct BoxedMedianFilter<T> {
    sentinel: T,
    window: Box<[T]>,

    /// Reused by every scan so filtering does not allocate
    scratch: Box<[T]>,

    /// Slot the next sample is written to, always in `0..capacity`
    cursor: usize,
}

impl<T: Copy + PartialOrd> BoxedMedianFilter<T> {
    /// Constructs a new [`Self`] over `capacity` samples, with every slot set to `start`
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero. See [`Self::try_new`] for a non-panicking version.
    pub fn new(capacity: usize, sentinel: T, start: T) -> Self {
        match Self::try_new(capacity, sentinel, start) {
            Ok(filter) => filter,
            Err(e) => panic!("{e}"),
        }
    }

    /// Constructs a new [`Self`] over `capacity` samples, with every slot set to `start`
    ///
    /// Returns [`Error::ZeroCapacity`] if `capacity` is zero.
    pub fn try_new(capacity: usize, sentinel: T, start: T) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::ZeroCapacity);
        }
        log_construction(capacity);

        Ok(Self {
            sentinel,
            window: vec![start; capacity].into_boxed_slice(),
            scratch: vec![sentinel; capacity].into_boxed_slice(),
            cursor: capacity - 1,
        })
    }

    /// Constructs a new [`Self`] with an explicit sentinel, and the window filled with `T::default()`
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn with_sentinel(capacity: usize, sentinel: T) -> Self
    where
        T: Default,
    {
        Self::new(capacity, sentinel, T::default())
    }

    /// Constructs a new [`Self`] with the window filled with `start`, and the sentinel taken from [`Sentinel`]
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn filled_with(capacity: usize, start: T) -> Self
    where
        T: Sentinel,
    {
        Self::new(capacity, T::SENTINEL, start)
    }

    /// Number of samples in the window
    pub fn capacity(&self) -> usize {
        self.window.len()
    }

    /// The sentinel this filter masks selected samples with
    pub fn sentinel(&self) -> T {
        self.sentinel
    }

    /// Submits a new sample, and returns the median of the window
    ///
    /// The sample replaces the oldest one in the window.
    pub fn filter(&mut self, sample: T) -> T {
        let capacity = self.window.len();

        self.window[self.cursor] = sample;
        self.cursor = (self.cursor + capacity - 1) % capacity;

        select::median_of(&self.window, &mut self.scratch, self.sentinel)
    }
}

impl<T: Copy + PartialOrd> Filter for BoxedMedianFilter<T> {
    type Sample = T;

    fn filter(&mut self, sample: T) -> T {
        BoxedMedianFilter::filter(self, sample)
    }

    fn capacity(&self) -> usize {
        self.window.len()
    }
}
