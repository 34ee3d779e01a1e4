//! A more fully-fledged example, showcasing runtime-sized windows and the [`Filter`] trait

use sliding_median::{BoxedMedianFilter, Error, Filter, MedianFilter};

/// Some temperature readings in degrees Celsius, with a couple of glitches
///
/// The exact smoothed value settles around 21.5
const DATA: [f32; 15] = [
    21.4, 21.5, 21.3, 85.0, 21.6, 21.5, 21.7, -40.0, 21.6, 21.4, 21.5, 21.8, 21.5, 21.6, 21.4,
];

/// Runs the readings through any filter, returning the last output
fn run(filter: &mut impl Filter<Sample = f32>) -> f32 {
    let mut last = f32::NAN;

    for reading in DATA {
        last = filter.filter(reading);
    }

    println!("Window of {} samples settled on {last}", filter.capacity());
    last
}

fn main() -> Result<(), Error> {
    // Starting from the first reading avoids the initial ramp up from zero
    let mut fixed = MedianFilter::<f32, 5>::filled_with(DATA[0]);
    run(&mut fixed);

    // The window size could come from a configuration file here
    let capacity = 7;
    let mut boxed = BoxedMedianFilter::try_new(capacity, f32::INFINITY, DATA[0])?;
    run(&mut boxed);

    // Zero sized windows are rejected up front
    match BoxedMedianFilter::try_new(0, f32::INFINITY, 0.0) {
        Ok(_) => println!("Unexpectedly built an empty filter"),
        Err(e) => println!("Could not build filter: {e}"),
    }

    Ok(())
}
