//! Octave configuration threaded through every sampler and builder.
//!
//! [`Options`] is the fully-populated bundle the samplers consume.
//! [`PartialOptions`] mirrors it with every field optional so that a settings
//! file can be mapped onto it field for field; [`fractal_noise_options`] fills
//! in the defaults and rejects values the octave loop cannot normalize.

use std::fmt;
use std::num::NonZeroU32;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{FieldError, FieldResult};

pub const DEFAULT_AMPLITUDE: f64 = 1.0;
pub const DEFAULT_FREQUENCY: f64 = 1.0;
pub const DEFAULT_OCTAVES: NonZeroU32 = NonZeroU32::MIN;
pub const DEFAULT_PERSISTENCE: f64 = 0.5;
/// Largest accepted octave count.
pub const MAX_OCTAVES: u32 = i32::MAX as u32;

/// Accepts octave counts in `1..=MAX_OCTAVES`.
fn octave_count(octaves: u32) -> FieldResult<NonZeroU32> {
    if octaves > MAX_OCTAVES {
        return Err(FieldError::InvalidOctaves);
    }
    NonZeroU32::new(octaves).ok_or(FieldError::InvalidOctaves)
}

/// Post-scale hook applied to every normalized sample.
#[derive(Clone)]
pub struct Scale(Arc<dyn Fn(f64) -> f64 + Send + Sync>);

impl Scale {
    pub fn new(f: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    #[inline]
    pub fn apply(&self, value: f64) -> f64 {
        (self.0)(value)
    }
}

impl fmt::Debug for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Scale(..)")
    }
}

/// Amplitude, frequency and octave settings for one sampling call.
#[derive(Clone, Debug)]
pub struct Options {
    /// Weight of the first octave.
    pub amplitude: f64,
    /// Coordinate multiplier of the first octave; doubled every octave.
    pub frequency: f64,
    pub octaves: NonZeroU32,
    /// Per-octave amplitude decay.
    pub persistence: f64,
    /// Applied to the normalized sum, after everything else.
    pub scale: Option<Scale>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            amplitude: DEFAULT_AMPLITUDE,
            frequency: DEFAULT_FREQUENCY,
            octaves: DEFAULT_OCTAVES,
            persistence: DEFAULT_PERSISTENCE,
            scale: None,
        }
    }
}

impl Options {
    pub fn with_amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }

    pub fn with_frequency(mut self, frequency: f64) -> Self {
        self.frequency = frequency;
        self
    }

    /// Sets the octave count, rejecting zero and anything above [`MAX_OCTAVES`].
    pub fn with_octaves(mut self, octaves: u32) -> FieldResult<Self> {
        self.octaves = octave_count(octaves)?;
        Ok(self)
    }

    pub fn with_persistence(mut self, persistence: f64) -> Self {
        self.persistence = persistence;
        self
    }

    pub fn with_scale(mut self, scale: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        self.scale = Some(Scale::new(scale));
        self
    }
}

/// [`Options`] with every field optional, as read from a settings file.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PartialOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amplitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub octaves: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persistence: Option<f64>,
    #[serde(skip)]
    pub scale: Option<Scale>,
}

/// Fills every omitted field with its default.
///
/// Fails with [`FieldError::InvalidOctaves`] when `octaves` is present and
/// zero or above [`MAX_OCTAVES`].
pub fn fractal_noise_options(partial: PartialOptions) -> FieldResult<Options> {
    let octaves = match partial.octaves {
        Some(octaves) => octave_count(octaves)?,
        None => DEFAULT_OCTAVES,
    };
    Ok(Options {
        amplitude: partial.amplitude.unwrap_or(DEFAULT_AMPLITUDE),
        frequency: partial.frequency.unwrap_or(DEFAULT_FREQUENCY),
        octaves,
        persistence: partial.persistence.unwrap_or(DEFAULT_PERSISTENCE),
        scale: partial.scale,
    })
}

impl TryFrom<PartialOptions> for Options {
    type Error = FieldError;

    fn try_from(partial: PartialOptions) -> FieldResult<Self> {
        fractal_noise_options(partial)
    }
}
