//! Field builders: validate the extents, then sample every cell.
//!
//! The cylinder and sphere builders share [`make_surface`]; they differ only
//! in the [`SurfaceMapping`] they inject.

use tracing::debug;

use crate::error::{require_extent, FieldError, FieldResult};
use crate::field::{Grid, Volume};
use crate::noise::{Noise1, Noise2, Noise3};
use crate::options::Options;
use crate::topology::{
    get_cuboid_noise_value, get_line_noise_value, get_rectangle_noise_value,
    get_surface_noise_value, CylinderSurface, SphereSurface, SurfaceMapping,
};

pub fn make_line<N: Noise1 + ?Sized>(
    length: usize,
    noise: &N,
    options: &Options,
) -> FieldResult<Vec<f64>> {
    require_extent("length", length)?;
    debug!(length, octaves = options.octaves.get(), "building line field");

    Ok((0..length)
        .map(|x| get_line_noise_value(noise, options, x as f64))
        .collect())
}

pub fn make_rectangle<N: Noise2 + ?Sized>(
    width: usize,
    height: usize,
    noise: &N,
    options: &Options,
) -> FieldResult<Grid> {
    require_extent("width", width)?;
    require_extent("height", height)?;
    debug!(width, height, octaves = options.octaves.get(), "building rectangle field");

    Ok(Grid::from_fn(width, height, |x, y| {
        get_rectangle_noise_value(noise, options, x as f64, y as f64)
    }))
}

pub fn make_cuboid<N: Noise3 + ?Sized>(
    width: usize,
    height: usize,
    depth: usize,
    noise: &N,
    options: &Options,
) -> FieldResult<Volume> {
    require_extent("width", width)?;
    require_extent("height", height)?;
    require_extent("depth", depth)?;
    debug!(width, height, depth, octaves = options.octaves.get(), "building cuboid field");

    Ok(Volume::from_fn(width, height, depth, |x, y, z| {
        get_cuboid_noise_value(noise, options, x as f64, y as f64, z as f64)
    }))
}

/// Samples a `width` x `height` grid through any surface mapping.
pub fn make_surface<N, M>(
    width: usize,
    height: usize,
    mapping: &M,
    noise: &N,
    options: &Options,
) -> FieldResult<Grid>
where
    N: Noise3 + ?Sized,
    M: SurfaceMapping + ?Sized,
{
    require_extent("width", width)?;
    require_extent("height", height)?;

    Ok(Grid::from_fn(width, height, |x, y| {
        get_surface_noise_value(noise, options, mapping, x as f64, y as f64)
    }))
}

/// Wraps the `x` axis around a cylinder whose circumference is `circumference`
/// cells; the result is `circumference` columns of `height` samples.
pub fn make_cylinder_surface<N: Noise3 + ?Sized>(
    circumference: usize,
    height: usize,
    noise: &N,
    options: &Options,
) -> FieldResult<Grid> {
    require_extent("circumference", circumference)?;
    debug!(circumference, height, octaves = options.octaves.get(), "building cylinder surface");

    let mapping = CylinderSurface::new(circumference as f64);
    make_surface(circumference, height, &mapping, noise, options)
}

/// Wraps a `circumference` x `circumference / 2` grid around a sphere.
///
/// An odd circumference drops the last half row: the grid height is
/// `circumference / 2` rounded down, while latitude still spans the unrounded
/// half circumference.
pub fn make_sphere_surface<N: Noise3 + ?Sized>(
    circumference: usize,
    noise: &N,
    options: &Options,
) -> FieldResult<Grid> {
    if circumference < 2 {
        return Err(FieldError::SphereTooSmall { circumference });
    }
    let height = circumference / 2;
    debug!(circumference, height, octaves = options.octaves.get(), "building sphere surface");

    let mapping = SphereSurface::new(circumference as f64);
    make_surface(circumference, height, &mapping, noise, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constant3(_: f64, _: f64, _: f64) -> f64 {
        0.5
    }

    #[test]
    fn line_has_requested_length() {
        let line = make_line(9, &|x: f64| x, &Options::default()).unwrap();
        assert_eq!(line.len(), 9);
        assert_eq!(line[4], 4.0);
    }

    #[test]
    fn rectangle_cells_sample_their_own_coordinate() {
        let grid = make_rectangle(5, 3, &|x: f64, y: f64| x * 10.0 + y, &Options::default())
            .unwrap();
        assert_eq!(grid.width(), 5);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.get(4, 2), Some(42.0));
    }

    #[test]
    fn cuboid_has_requested_shape() {
        let volume = make_cuboid(2, 3, 4, &constant3, &Options::default()).unwrap();
        assert_eq!(
            (volume.width(), volume.height(), volume.depth()),
            (2, 3, 4)
        );
        assert!(volume.as_slice().iter().all(|&v| v == 0.5));
    }

    #[test]
    fn zero_extents_are_rejected() {
        let options = Options::default();
        assert_eq!(
            make_line(0, &|x: f64| x, &options).unwrap_err(),
            FieldError::EmptyExtent { axis: "length" }
        );
        assert_eq!(
            make_rectangle(3, 0, &|x: f64, _: f64| x, &options).unwrap_err(),
            FieldError::EmptyExtent { axis: "height" }
        );
        assert_eq!(
            make_cuboid(1, 1, 0, &constant3, &options).unwrap_err(),
            FieldError::EmptyExtent { axis: "depth" }
        );
        assert_eq!(
            make_cylinder_surface(0, 4, &constant3, &options).unwrap_err(),
            FieldError::EmptyExtent { axis: "circumference" }
        );
        assert_eq!(
            make_cylinder_surface(4, 0, &constant3, &options).unwrap_err(),
            FieldError::EmptyExtent { axis: "height" }
        );
        assert_eq!(
            make_sphere_surface(1, &constant3, &options).unwrap_err(),
            FieldError::SphereTooSmall { circumference: 1 }
        );
    }

    #[test]
    fn sphere_height_rounds_down() {
        let options = Options::default();
        let even = make_sphere_surface(8, &constant3, &options).unwrap();
        assert_eq!((even.width(), even.height()), (8, 4));
        let odd = make_sphere_surface(7, &constant3, &options).unwrap();
        assert_eq!((odd.width(), odd.height()), (7, 3));
    }

    #[test]
    fn cylinder_columns_match_circumference() {
        let grid = make_cylinder_surface(12, 5, &constant3, &Options::default()).unwrap();
        assert_eq!(grid.columns().len(), 12);
        assert!(grid.columns().all(|column| column.len() == 5));
    }
}
