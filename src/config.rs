//! Validation of raw scatter params into an immutable config.
//!
//! Every check runs; problems are collected and reported together so a
//! caller sees all of them at once. Nothing downstream re-validates.

use crate::error::ConfigError;
use crate::prng::RandomSource;
use crate::types::{Bounds, ScatterParams, VariationParams};

/// How a random variation (rotation angle or resize percentage) is drawn.
#[derive(Debug, Clone, PartialEq)]
pub enum Sampling {
    /// One uniform draw in [lo, hi).
    Continuous { lo: f64, hi: f64 },
    /// One uniform pick from an explicit set of values.
    Discrete(Vec<f64>),
}

impl Sampling {
    /// Draw one value. None for a sampling that has nothing to draw
    /// from (an empty set or an empty range); no draw is consumed then.
    pub fn sample<R: RandomSource>(&self, rng: &mut R) -> Option<f64> {
        match self {
            Sampling::Continuous { lo, hi } if lo < hi => {
                Some(rng.uniform_in_range(*lo, *hi))
            }
            Sampling::Continuous { .. } => None,
            Sampling::Discrete(values) if values.is_empty() => None,
            Sampling::Discrete(values) => Some(values[rng.uniform_int(values.len())]),
        }
    }
}

/// Validated, immutable scatter configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterConfig {
    pub seed: u64,
    pub container_id: String,
    pub bounds: Bounds,
    pub count: usize,
    pub repetition: bool,
    pub no_touch: bool,
    /// Resize percentage offsets (e.g. -30 means 70% of measured size).
    pub resize: Option<Sampling>,
    /// Rotation in degrees.
    pub rotation: Option<Sampling>,
}

#[derive(Clone, Copy)]
enum VariationTarget {
    Rotation,
    Resize,
}

impl VariationTarget {
    fn error(self, reason: String) -> ConfigError {
        match self {
            VariationTarget::Rotation => ConfigError::InvalidRotationConfig(reason),
            VariationTarget::Resize => ConfigError::InvalidSizeConfig(reason),
        }
    }
}

const ALLOWED_KINDS: &str = "continuous, discrete";

fn validate_variation(
    params: &VariationParams,
    target: VariationTarget,
    errors: &mut Vec<ConfigError>,
) -> Option<Sampling> {
    if !params.enabled {
        return None;
    }
    let kind = match params.kind.as_deref().map(str::trim) {
        None | Some("") => {
            errors.push(target.error("type hasn't been specified".into()));
            return None;
        }
        Some(k) => k,
    };
    let continuous = match kind {
        "continuous" | "cont" => true,
        "discrete" | "disc" => false,
        other => {
            errors.push(target.error(format!(
                "type `{other}` is not allowed; allowed types are: {ALLOWED_KINDS}"
            )));
            return None;
        }
    };
    let values = match params.values.as_deref() {
        Some(v) => v,
        None => {
            errors.push(target.error("range hasn't been defined".into()));
            return None;
        }
    };
    if continuous {
        match *values {
            [lo, hi] if lo < hi => Some(Sampling::Continuous { lo, hi }),
            [lo, hi] => {
                errors.push(target.error(format!(
                    "continuous range needs min < max, got [{lo}, {hi}]"
                )));
                None
            }
            _ => {
                errors.push(target.error(format!(
                    "continuous range needs exactly two limits, got {}",
                    values.len()
                )));
                None
            }
        }
    } else if values.is_empty() {
        errors.push(target.error("discrete set is empty".into()));
        None
    } else {
        Some(Sampling::Discrete(values.to_vec()))
    }
}

/// Check bounds are usable as a placement surface.
pub fn validate_bounds(bounds: Bounds) -> Result<Bounds, ConfigError> {
    // NaN fails both comparisons.
    if bounds.width > 0.0 && bounds.height > 0.0 {
        Ok(bounds)
    } else {
        Err(ConfigError::InvalidBounds {
            width: bounds.width,
            height: bounds.height,
        })
    }
}

/// Validate raw params. Returns every error found, not just the first.
pub fn validate(params: &ScatterParams) -> Result<ScatterConfig, Vec<ConfigError>> {
    let mut errors = Vec::new();

    if params.container_id.trim().is_empty() {
        errors.push(ConfigError::MissingContainer);
    }
    if params.sources.is_empty() {
        errors.push(ConfigError::EmptyItemSet);
    }
    let available = params.sources.len();
    let count = params.count.unwrap_or(available);
    if !params.sources.is_empty() && count > available && !params.repetition {
        errors.push(ConfigError::RepetitionConflict {
            requested: count,
            available,
        });
    }
    if let Err(e) = validate_bounds(params.bounds) {
        errors.push(e);
    }
    let rotation = validate_variation(&params.rotation, VariationTarget::Rotation, &mut errors);
    let resize = validate_variation(&params.resize, VariationTarget::Resize, &mut errors);

    if !errors.is_empty() {
        for (i, e) in errors.iter().enumerate() {
            log::error!("scatter config error {i}: {e}");
        }
        return Err(errors);
    }

    Ok(ScatterConfig {
        seed: params.seed,
        container_id: params.container_id.trim().to_string(),
        bounds: params.bounds,
        count,
        repetition: params.repetition,
        no_touch: params.no_touch,
        resize,
        rotation,
    })
}
