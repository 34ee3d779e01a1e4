//! An example showcasing filtering a custom sample type
//!
//! Only [`Copy`] and [`PartialOrd`] are needed, plus a sentinel value

use sliding_median::MedianFilter;

/// Our custom data type: a fixed-point distance, in tenths of a millimetre
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Distance(u32);

/// Our sensor can never report more than 4 metres
const OUT_OF_RANGE: Distance = Distance(40_000);

/// Some readings from an ultrasonic rangefinder
///
/// Echoes that never come back are reported as [`OUT_OF_RANGE`]
const DATA: [Distance; 10] = [
    Distance(1203),
    Distance(1198),
    OUT_OF_RANGE,
    Distance(1201),
    Distance(1195),
    Distance(1199),
    OUT_OF_RANGE,
    Distance(1190),
    Distance(1188),
    Distance(1185),
];

fn main() {
    // No built-in maximum for our type, so we pass the sentinel in ourselves
    // It just works!
    let mut filter = MedianFilter::<Distance, 3>::new(OUT_OF_RANGE, DATA[0]);

    for reading in DATA {
        let smoothed = filter.filter(reading);
        println!("raw: {reading:?}  filtered: {smoothed:?}");
    }
}
