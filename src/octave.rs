//! The octave loop shared by every topology.
//!
//! Octave `o` samples the primitive at `frequency * 2^o` with weight
//! `amplitude * persistence^o`. The sum is divided by `2 - 1 / 2^(octaves - 1)`,
//! the limit of the weight series for a persistence of one half. The divisor
//! ignores the configured persistence, so other persistence values are only
//! approximately range-normalized; stored fields depend on this exact formula.

use crate::options::Options;

/// Divisor that keeps the summed octaves in a stable range.
#[inline]
pub fn normalization_divisor(octaves: u32) -> f64 {
    2.0 - 1.0 / 2f64.powf(f64::from(octaves) - 1.0)
}

/// Sums every octave of `sample` at `point`, normalizes, then applies the
/// post-scale hook.
///
/// `point` is already expressed in the primitive's own space; each octave
/// scales every axis by its frequency before calling `sample`.
pub fn accumulate<const N: usize>(
    point: [f64; N],
    options: &Options,
    sample: impl Fn([f64; N]) -> f64,
) -> f64 {
    let octaves = options.octaves.get();
    let mut value = 0.0f64;

    for octave in 0..octaves {
        let octave = f64::from(octave);
        let freq = options.frequency * 2f64.powf(octave);
        let weight = options.amplitude * options.persistence.powf(octave);
        value += sample(point.map(|axis| axis * freq)) * weight;
    }

    let result = value / normalization_divisor(octaves);
    match &options.scale {
        Some(scale) => scale.apply(result),
        None => result,
    }
}
