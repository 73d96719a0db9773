/// False-colour PNG previews of the rank-2 fields.
///
/// | File            | Grid                                  |
/// |-----------------|---------------------------------------|
/// | rectangle.png   | width × height                        |
/// | cylinder.png    | circumference × height (x wraps)      |
/// | sphere.png      | circumference × circumference/2       |
///
/// Colour encoding
/// ───────────────
/// All previews share the "jet" ramp:
///   blue (low) → cyan → green → yellow → red (high)
///
/// Samples are treated as signed: 0.0 → green, -1.0 → blue, +1.0 → red.
/// Values outside `[-1, 1]` saturate.
use std::path::Path;

use anyhow::Context;
use fractal_field::Grid;
use image::{Rgb, RgbImage};
use tracing::info;

use crate::render::RenderedFields;

// ── Colour map ────────────────────────────────────────────────────────────────

/// "Jet" ramp: blue → cyan → green → yellow → red.
/// `t` ∈ [0.0, 1.0].
fn jet(t: f64) -> [u8; 3] {
    let t = t.clamp(0.0, 1.0);
    let r = (1.5 - (4.0 * t - 3.0).abs()).clamp(0.0, 1.0);
    let g = (1.5 - (4.0 * t - 2.0).abs()).clamp(0.0, 1.0);
    let b = (1.5 - (4.0 * t - 1.0).abs()).clamp(0.0, 1.0);
    [(r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8]
}

/// Colourize a signed value v ∈ [-1.0, 1.0] → jet(0.0 … 1.0).
#[inline]
fn diverge(v: f64) -> [u8; 3] {
    jet((v.clamp(-1.0, 1.0) + 1.0) * 0.5)
}

// ── PNG writer ────────────────────────────────────────────────────────────────

/// One pixel per cell: column `x` of the grid becomes image column `x`.
fn grid_image(grid: &Grid) -> RgbImage {
    let mut img = RgbImage::new(grid.width() as u32, grid.height() as u32);
    for (x, column) in grid.columns().enumerate() {
        for (y, &v) in column.iter().enumerate() {
            img.put_pixel(x as u32, y as u32, Rgb(diverge(v)));
        }
    }
    img
}

fn save_grid(grid: &Grid, path: &Path) -> anyhow::Result<()> {
    grid_image(grid)
        .save(path)
        .with_context(|| format!("failed to save {}", path.display()))?;
    info!(path = %path.display(), "wrote preview");
    Ok(())
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Writes a preview for every rank-2 field that was rendered into `dir`.
pub fn export_pngs(fields: &RenderedFields, dir: &Path) -> anyhow::Result<()> {
    let previews = [
        ("rectangle.png", &fields.rectangle),
        ("cylinder.png", &fields.cylinder),
        ("sphere.png", &fields.sphere),
    ];
    for (name, grid) in previews {
        if let Some(grid) = grid {
            save_grid(grid, &dir.join(name))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_endpoints() {
        assert_eq!(diverge(-1.0), [0, 0, 127]);
        assert_eq!(diverge(0.0), [127, 255, 127]);
        assert_eq!(diverge(1.0), [127, 0, 0]);
        // saturates outside the signed range
        assert_eq!(diverge(5.0), diverge(1.0));
        assert_eq!(diverge(-5.0), diverge(-1.0));
    }

    #[test]
    fn image_follows_grid_layout() {
        let grid = Grid::from_fn(3, 2, |x, _| if x == 2 { 1.0 } else { -1.0 });
        let img = grid_image(&grid);
        assert_eq!(img.dimensions(), (3, 2));
        assert_eq!(img.get_pixel(2, 1).0, diverge(1.0));
        assert_eq!(img.get_pixel(0, 1).0, diverge(-1.0));
    }
}
