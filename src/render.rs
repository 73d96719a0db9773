use fractal_field::{
    Grid, NoiseSource, Volume, fractal_noise_options, make_cuboid, make_cylinder_surface,
    make_line, make_rectangle, make_sphere_surface,
};
use noise::Perlin;
use serde::Serialize;
use tracing::info;

use crate::config::RenderConfig;

/// Every field produced by one render run, keyed by shape.
#[derive(Serialize)]
pub struct RenderedFields {
    pub seed: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rectangle: Option<Grid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cuboid: Option<Volume>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cylinder: Option<Grid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sphere: Option<Grid>,
}

/// Builds every shape enabled in `config` from one Perlin primitive.
pub fn render(config: &RenderConfig, seed: u32) -> anyhow::Result<RenderedFields> {
    let source = NoiseSource(Perlin::new(seed));

    let line = match &config.line {
        Some(line) => {
            let options = fractal_noise_options(line.options.clone())?;
            Some(make_line(line.length, &source, &options)?)
        }
        None => None,
    };

    let rectangle = match &config.rectangle {
        Some(rect) => {
            let options = fractal_noise_options(rect.options.clone())?;
            let grid = make_rectangle(rect.width, rect.height, &source, &options)?;
            log_range("rectangle", &grid);
            Some(grid)
        }
        None => None,
    };

    let cuboid = match &config.cuboid {
        Some(cuboid) => {
            let options = fractal_noise_options(cuboid.options.clone())?;
            let volume =
                make_cuboid(cuboid.width, cuboid.height, cuboid.depth, &source, &options)?;
            if let Some((min, max)) = volume.min_max() {
                info!(shape = "cuboid", depth = volume.depth(), min, max, "sampled");
            }
            Some(volume)
        }
        None => None,
    };

    let cylinder = match &config.cylinder {
        Some(cylinder) => {
            let options = fractal_noise_options(cylinder.options.clone())?;
            let grid =
                make_cylinder_surface(cylinder.circumference, cylinder.height, &source, &options)?;
            log_range("cylinder", &grid);
            Some(grid)
        }
        None => None,
    };

    let sphere = match &config.sphere {
        Some(sphere) => {
            let options = fractal_noise_options(sphere.options.clone())?;
            let grid = make_sphere_surface(sphere.circumference, &source, &options)?;
            log_range("sphere", &grid);
            Some(grid)
        }
        None => None,
    };

    Ok(RenderedFields {
        seed,
        line,
        rectangle,
        cuboid,
        cylinder,
        sphere,
    })
}

fn log_range(shape: &str, grid: &Grid) {
    if let Some((min, max)) = grid.min_max() {
        info!(shape, width = grid.width(), height = grid.height(), min, max, "sampled");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse;

    fn small_config() -> RenderConfig {
        parse(
            r#"{
                "line": { "length": 8, "options": { "frequency": 0.1 } },
                "rectangle": { "width": 6, "height": 4, "options": { "frequency": 0.1, "octaves": 3 } },
                "cuboid": { "width": 2, "height": 3, "depth": 4 },
                "cylinder": { "circumference": 10, "height": 3 },
                "sphere": { "circumference": 9 }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn renders_every_enabled_shape() {
        let fields = render(&small_config(), 3).unwrap();
        assert_eq!(fields.line.as_ref().unwrap().len(), 8);
        let rectangle = fields.rectangle.as_ref().unwrap();
        assert_eq!((rectangle.width(), rectangle.height()), (6, 4));
        assert_eq!(fields.cuboid.as_ref().unwrap().as_slice().len(), 24);
        let sphere = fields.sphere.as_ref().unwrap();
        assert_eq!((sphere.width(), sphere.height()), (9, 4));
    }

    #[test]
    fn same_seed_renders_identical_fields() {
        let config = small_config();
        let a = render(&config, 11).unwrap();
        let b = render(&config, 11).unwrap();
        assert_eq!(a.rectangle, b.rectangle);
        assert_eq!(a.sphere, b.sphere);
    }

    #[test]
    fn zero_octaves_fails_the_run() {
        let config = parse(r#"{ "line": { "length": 4, "options": { "octaves": 0 } } }"#).unwrap();
        assert!(render(&config, 1).is_err());
    }
}
