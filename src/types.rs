//! Data types matching the picscatter JSON schema.
//!
//! Params and results derive Serialize + Deserialize so they can
//! round-trip through the JSON interchange format.

use serde::{Deserialize, Serialize};

// -- Geometry ------------------------------------------------------

/// Screen-space point; y grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Size of the host surface items are scattered across.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

// -- Sources -------------------------------------------------------

/// A picture the host can draw. `width`/`height` are the measured
/// intrinsic size; absent when the host has not finished loading it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

// -- Variations (rotation / resize) --------------------------------

/// Raw random-variation settings as supplied by the caller.
///
/// `kind` stays a string here so that unsupported kinds surface as
/// validation errors rather than parse failures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariationParams {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<f64>>,
}

fn default_resize() -> VariationParams {
    VariationParams {
        enabled: false,
        kind: Some("continuous".into()),
        values: Some(vec![-10.0, 10.0]),
    }
}

fn default_rotation() -> VariationParams {
    VariationParams {
        enabled: true,
        kind: Some("continuous".into()),
        values: Some(vec![0.0, 359.0]),
    }
}

// -- Engine I/O ----------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScatterParams {
    #[serde(default)]
    pub seed: u64,
    #[serde(default)]
    pub container_id: String,
    pub bounds: Bounds,
    #[serde(default)]
    pub sources: Vec<Source>,
    /// Number of items to place; all sources when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(default)]
    pub repetition: bool,
    #[serde(default)]
    pub no_touch: bool,
    #[serde(default = "default_resize")]
    pub resize: VariationParams,
    #[serde(default = "default_rotation")]
    pub rotation: VariationParams,
}

fn is_true(v: &bool) -> bool {
    *v
}

/// One item of a layout, with its final placement state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub id: String,
    pub source: String,
    pub width: f64,
    pub height: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center: Option<Point>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation_deg: Option<f64>,
    #[serde(default)]
    pub corners: Vec<Point>,
    #[serde(default = "default_visible", skip_serializing_if = "is_true")]
    pub visible: bool,
}

fn default_visible() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub bounds: Bounds,
    #[serde(default)]
    pub items: Vec<Rectangle>,
}

impl Layout {
    pub fn visible_count(&self) -> usize {
        self.items.iter().filter(|r| r.visible).count()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScatterResult {
    pub layout: Layout,
    #[serde(default)]
    pub visible_count: usize,
}

// -- Tests ---------------------------------------------------------
