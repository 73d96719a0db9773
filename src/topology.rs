//! Per-cell samplers for each supported domain.
//!
//! Line, rectangle and cuboid pass their grid coordinate straight through.
//! The cylinder and sphere surfaces are wrapped into 3-space first so the
//! resulting field tiles seamlessly across the wrapped axes.

use std::f64::consts::{PI, TAU};

use crate::noise::{Noise1, Noise2, Noise3};
use crate::octave::accumulate;
use crate::options::Options;

/// Radius of a circle with the given circumference.
#[inline]
pub fn get_circle_radius(circumference: f64) -> f64 {
    circumference / TAU
}

/// Maps a 2-D surface coordinate onto the 3-D point handed to the primitive.
pub trait SurfaceMapping {
    fn point(&self, x: f64, y: f64) -> [f64; 3];
}

/// Side of a cylinder: `x` runs around the circumference, `y` along the height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CylinderSurface {
    pub circumference: f64,
    pub radius: f64,
}

impl CylinderSurface {
    pub fn new(circumference: f64) -> Self {
        Self {
            circumference,
            radius: get_circle_radius(circumference),
        }
    }
}

impl SurfaceMapping for CylinderSurface {
    #[inline]
    fn point(&self, x: f64, y: f64) -> [f64; 3] {
        let theta = x / self.circumference * TAU;
        [self.radius * theta.sin(), self.radius * theta.cos(), y]
    }
}

/// Surface of a sphere: `x` is longitude over the full circumference, `y` is
/// latitude over half of it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SphereSurface {
    pub circumference: f64,
    pub circumference_semi: f64,
}

impl SphereSurface {
    pub fn new(circumference: f64) -> Self {
        Self {
            circumference,
            circumference_semi: circumference / 2.0,
        }
    }
}

impl SurfaceMapping for SphereSurface {
    #[inline]
    fn point(&self, x: f64, y: f64) -> [f64; 3] {
        let theta = x / self.circumference * TAU;
        let phi = y / self.circumference_semi * PI;
        let sin_phi = (phi + PI).sin();
        [
            TAU * theta.sin() * sin_phi,
            TAU * theta.cos() * sin_phi,
            TAU * phi.cos(),
        ]
    }
}

/// Samples any surface mapping through a 3-D primitive.
#[inline]
pub fn get_surface_noise_value<N, M>(
    noise: &N,
    options: &Options,
    mapping: &M,
    x: f64,
    y: f64,
) -> f64
where
    N: Noise3 + ?Sized,
    M: SurfaceMapping + ?Sized,
{
    accumulate(mapping.point(x, y), options, |[a, b, c]| noise.sample3(a, b, c))
}

pub fn get_line_noise_value<N: Noise1 + ?Sized>(noise: &N, options: &Options, x: f64) -> f64 {
    accumulate([x], options, |[x]| noise.sample1(x))
}

pub fn get_rectangle_noise_value<N: Noise2 + ?Sized>(
    noise: &N,
    options: &Options,
    x: f64,
    y: f64,
) -> f64 {
    accumulate([x, y], options, |[x, y]| noise.sample2(x, y))
}

pub fn get_cuboid_noise_value<N: Noise3 + ?Sized>(
    noise: &N,
    options: &Options,
    x: f64,
    y: f64,
    z: f64,
) -> f64 {
    accumulate([x, y, z], options, |[x, y, z]| noise.sample3(x, y, z))
}

/// `radius` is normally [`get_circle_radius`] of `circumference`; builders
/// compute it once per field.
pub fn get_cylinder_surface_noise_value<N: Noise3 + ?Sized>(
    noise: &N,
    options: &Options,
    circumference: f64,
    radius: f64,
    x: f64,
    y: f64,
) -> f64 {
    let mapping = CylinderSurface {
        circumference,
        radius,
    };
    get_surface_noise_value(noise, options, &mapping, x, y)
}

/// `circumference_semi` is normally half of `circumference`.
pub fn get_sphere_surface_noise_value<N: Noise3 + ?Sized>(
    noise: &N,
    options: &Options,
    circumference: f64,
    circumference_semi: f64,
    x: f64,
    y: f64,
) -> f64 {
    let mapping = SphereSurface {
        circumference,
        circumference_semi,
    };
    get_surface_noise_value(noise, options, &mapping, x, y)
}
