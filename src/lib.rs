//! picscatter: random scatter layout for rectangular pictures.
//!
//! Exposes `scatter_json`, which accepts a JSON string (scatter params)
//! and returns a JSON string (scatter result). Hosts that keep a layout
//! alive across resizes use `generate::Scatterer` directly.

pub mod collision;
pub mod config;
pub mod error;
pub mod generate;
pub mod placement;
pub mod prng;
pub mod types;

pub use error::{ConfigError, Result, ScatterError};

use crate::generate::Scatterer;
use crate::prng::Pcg32;
use crate::types::{ScatterParams, ScatterResult};

/// Validate params and run a single layout pass.
pub fn scatter(params: &ScatterParams) -> Result<ScatterResult> {
    let config = config::validate(params).map_err(ScatterError::InvalidConfig)?;
    let rng = Pcg32::new(config.seed, 0);
    let mut scatterer = Scatterer::new(config, &params.sources, rng);
    let layout = scatterer.layout();
    let visible_count = layout.visible_count();
    Ok(ScatterResult {
        layout,
        visible_count,
    })
}

/// Run the scatter engine on JSON params.
///
/// Takes a JSON string matching `ScatterParams` and returns a JSON
/// string matching `ScatterResult`.
pub fn scatter_json(params_json: &str) -> Result<String> {
    let params: ScatterParams = serde_json::from_str(params_json)?;
    let result = scatter(&params)?;
    Ok(serde_json::to_string(&result)?)
}
