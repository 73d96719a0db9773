//! Fractal (fBm) scalar fields over lines, rectangles, cuboids and the
//! surfaces of cylinders and spheres.
//!
//! A caller-supplied noise primitive is sampled once per octave at doubling
//! frequency and decaying weight; the weighted sum is normalized, optionally
//! post-scaled, and written into a dense field.
//!
//! ```
//! use fractal_field::{make_rectangle, Options};
//!
//! let options = Options::default().with_octaves(4)?.with_frequency(0.05);
//! let wave = |x: f64, y: f64| (x * 0.1).sin() * (y * 0.1).cos();
//! let grid = make_rectangle(64, 32, &wave, &options)?;
//! assert_eq!(grid.columns().len(), 64);
//! # Ok::<(), fractal_field::FieldError>(())
//! ```

pub mod builder;
pub mod error;
pub mod field;
pub mod noise;
pub mod octave;
pub mod options;
pub mod topology;

pub use builder::{
    make_cuboid, make_cylinder_surface, make_line, make_rectangle, make_sphere_surface,
    make_surface,
};
pub use error::{FieldError, FieldResult};
pub use field::{Grid, Volume};
pub use self::noise::{Noise1, Noise2, Noise3, NoiseSource};
pub use octave::{accumulate, normalization_divisor};
pub use options::{fractal_noise_options, Options, PartialOptions, Scale, MAX_OCTAVES};
pub use topology::{
    get_circle_radius, get_cuboid_noise_value, get_cylinder_surface_noise_value,
    get_line_noise_value, get_rectangle_noise_value, get_sphere_surface_noise_value,
    get_surface_noise_value, CylinderSurface, SphereSurface, SurfaceMapping,
};
