//! Render settings read from a JSON file.
//!
//! Every key is optional; a missing file argument renders the built-in
//! defaults. A shape section set to `null` is skipped.
//!
//! ```json
//! {
//!   "seed": 42,
//!   "output_dir": "fields",
//!   "rectangle": { "width": 512, "height": 256, "options": { "frequency": 0.02, "octaves": 6 } },
//!   "cuboid": null
//! }
//! ```
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use fractal_field::PartialOptions;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Perlin seed; a random one is drawn when absent.
    pub seed: Option<u32>,
    /// Fields land in `<output_dir>/<seed>/`.
    pub output_dir: PathBuf,
    pub line: Option<LineConfig>,
    pub rectangle: Option<RectangleConfig>,
    pub cuboid: Option<CuboidConfig>,
    pub cylinder: Option<CylinderConfig>,
    pub sphere: Option<SphereConfig>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LineConfig {
    pub length: usize,
    #[serde(default)]
    pub options: PartialOptions,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RectangleConfig {
    pub width: usize,
    pub height: usize,
    #[serde(default)]
    pub options: PartialOptions,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CuboidConfig {
    pub width: usize,
    pub height: usize,
    pub depth: usize,
    #[serde(default)]
    pub options: PartialOptions,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CylinderConfig {
    pub circumference: usize,
    pub height: usize,
    #[serde(default)]
    pub options: PartialOptions,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SphereConfig {
    pub circumference: usize,
    #[serde(default)]
    pub options: PartialOptions,
}

/// Perlin is zero on integer lattice points, so grid-space shapes need a
/// fractional base frequency to show any structure.
fn lattice_options(frequency: f64, octaves: u32) -> PartialOptions {
    PartialOptions {
        frequency: Some(frequency),
        octaves: Some(octaves),
        ..Default::default()
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            seed: None,
            output_dir: PathBuf::from("fields"),
            line: Some(LineConfig {
                length: 512,
                options: lattice_options(0.02, 5),
            }),
            rectangle: Some(RectangleConfig {
                width: 512,
                height: 256,
                options: lattice_options(0.02, 6),
            }),
            cuboid: Some(CuboidConfig {
                width: 32,
                height: 32,
                depth: 32,
                options: lattice_options(0.08, 3),
            }),
            cylinder: Some(CylinderConfig {
                circumference: 512,
                height: 128,
                options: lattice_options(0.02, 6),
            }),
            // The sphere is sampled on a radius of 2π regardless of circumference.
            sphere: Some(SphereConfig {
                circumference: 512,
                options: lattice_options(0.4, 6),
            }),
        }
    }
}

/// Reads the render file at `path`, or the defaults when there is none.
pub fn load(path: Option<&Path>) -> anyhow::Result<RenderConfig> {
    let Some(path) = path else {
        return Ok(RenderConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read render config {}", path.display()))?;
    parse(&text).with_context(|| format!("invalid render config {}", path.display()))
}

pub fn parse(text: &str) -> anyhow::Result<RenderConfig> {
    Ok(serde_json::from_str(text)?)
}
