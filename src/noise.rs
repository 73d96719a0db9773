//! Noise primitives consumed by the samplers, one capability per arity.
//!
//! Any closure of the right shape is a noise primitive; [`NoiseSource`] lifts
//! the generators of the `noise` crate into the same traits.

use ::noise::NoiseFn;

/// A one-dimensional noise primitive returning values nominally in `[-1, 1]`.
pub trait Noise1 {
    fn sample1(&self, x: f64) -> f64;
}

/// A two-dimensional noise primitive returning values nominally in `[-1, 1]`.
pub trait Noise2 {
    fn sample2(&self, x: f64, y: f64) -> f64;
}

/// A three-dimensional noise primitive returning values nominally in `[-1, 1]`.
pub trait Noise3 {
    fn sample3(&self, x: f64, y: f64, z: f64) -> f64;
}

impl<F: Fn(f64) -> f64> Noise1 for F {
    #[inline]
    fn sample1(&self, x: f64) -> f64 {
        self(x)
    }
}

impl<F: Fn(f64, f64) -> f64> Noise2 for F {
    #[inline]
    fn sample2(&self, x: f64, y: f64) -> f64 {
        self(x, y)
    }
}

impl<F: Fn(f64, f64, f64) -> f64> Noise3 for F {
    #[inline]
    fn sample3(&self, x: f64, y: f64, z: f64) -> f64 {
        self(x, y, z)
    }
}

/// Adapter exposing a `noise` crate generator (e.g. `Perlin`) through the
/// arity traits.
///
/// The `noise` generators have no 1-D form, so [`Noise1`] walks the 2-D
/// generator along `y = 0`.
#[derive(Clone, Debug)]
pub struct NoiseSource<N>(pub N);

impl<N: NoiseFn<f64, 2>> Noise1 for NoiseSource<N> {
    #[inline]
    fn sample1(&self, x: f64) -> f64 {
        self.0.get([x, 0.0])
    }
}

impl<N: NoiseFn<f64, 2>> Noise2 for NoiseSource<N> {
    #[inline]
    fn sample2(&self, x: f64, y: f64) -> f64 {
        self.0.get([x, y])
    }
}

impl<N: NoiseFn<f64, 3>> Noise3 for NoiseSource<N> {
    #[inline]
    fn sample3(&self, x: f64, y: f64, z: f64) -> f64 {
        self.0.get([x, y, z])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::noise::Perlin;

    #[test]
    fn closures_are_primitives() {
        let line = |x: f64| x * 2.0;
        let plane = |x: f64, y: f64| x - y;
        let volume = |x: f64, y: f64, z: f64| x + y + z;
        assert_eq!(line.sample1(1.5), 3.0);
        assert_eq!(plane.sample2(3.0, 1.0), 2.0);
        assert_eq!(volume.sample3(1.0, 2.0, 3.0), 6.0);
    }

    #[test]
    fn source_forwards_to_generator() {
        let perlin = Perlin::new(7);
        let source = NoiseSource(Perlin::new(7));
        let p = [0.3, 1.7, -2.2];
        assert_eq!(source.sample3(p[0], p[1], p[2]), perlin.get(p));
        assert_eq!(source.sample2(p[0], p[1]), perlin.get([p[0], p[1]]));
        assert_eq!(source.sample1(p[0]), perlin.get([p[0], 0.0]));
    }
}
