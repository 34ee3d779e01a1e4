//! A basic example showing minimal usage
//!
//! We construct a [`MedianFilter`], and feed it readings one at a time as a control loop would

use sliding_median::MedianFilter;

/// Some raw readings from a 12-bit ADC
///
/// In practice, these would arrive one per loop tick.
/// Note the saturated spike at 4095 and the dropout at 0
const DATA: [u16; 12] = [512, 515, 509, 4095, 511, 514, 0, 510, 508, 513, 512, 516];

fn main() {
    // Five sample window, pre-filled with zeros, sentinel derived from u16::MAX
    let mut filter = MedianFilter::<u16, 5>::default();

    for reading in DATA {
        let smoothed = filter.filter(reading);
        println!("raw: {reading:>4}  filtered: {smoothed:>4}");
    }
}
