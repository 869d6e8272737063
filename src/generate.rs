//! Scatter layout orchestration.
//!
//! A `Scatterer` resolves and sizes its items once, then lays them out
//! in insertion order. Every pass is a full recompute: the host calls
//! `on_resize` when its surface changes and the whole layout is redone.

use crate::config::{validate_bounds, Sampling, ScatterConfig};
use crate::error::{ConfigError, ScatterError};
use crate::placement::{PlacementOutcome, Placer};
use crate::prng::RandomSource;
use crate::types::{Bounds, Layout, Rectangle, Source};

/// Callback notified with the layout produced by every pass.
pub type LayoutListener = Box<dyn FnMut(&Layout)>;

/// Pick which sources get drawn. With repetition every item is an
/// independent pick; without it the sources are shuffled and the
/// first `count` taken.
pub fn resolve_sources<R: RandomSource>(
    rng: &mut R,
    sources: &[Source],
    count: usize,
    repetition: bool,
) -> Vec<Source> {
    if sources.is_empty() {
        return Vec::new();
    }
    if repetition {
        (0..count)
            .map(|_| sources[rng.uniform_int(sources.len())].clone())
            .collect()
    } else {
        let mut picked = rng.shuffle(sources);
        picked.truncate(count);
        picked
    }
}

/// Scale factor for one item: `sample` is a percentage offset, so -30
/// gives 0.7.
fn resize_factor<R: RandomSource>(rng: &mut R, resize: Option<&Sampling>) -> f64 {
    match resize.and_then(|sampling| sampling.sample(rng)) {
        Some(percent) => (100.0 + percent) / 100.0,
        None => 1.0,
    }
}

/// Build the unplaced rectangle for a source, fixing its size.
fn sized_item<R: RandomSource>(
    rng: &mut R,
    index: usize,
    source: &Source,
    resize: Option<&Sampling>,
) -> Rectangle {
    let (w, h) = match (source.width, source.height) {
        (Some(w), Some(h)) if w > 0.0 && h > 0.0 => (w, h),
        _ => {
            log::warn!(
                "probably {} has not been preloaded, it could spoil the randomization",
                source.url
            );
            (source.width.unwrap_or(0.0), source.height.unwrap_or(0.0))
        }
    };
    let factor = resize_factor(rng, resize);
    Rectangle {
        id: format!("item_{}", index + 1),
        source: source.url.clone(),
        width: (w * factor).floor().max(0.0),
        height: (h * factor).floor().max(0.0),
        center: None,
        rotation_deg: None,
        corners: Vec::new(),
        visible: true,
    }
}

/// Owns the items of one scatter and lays them out on demand.
pub struct Scatterer<R: RandomSource> {
    config: ScatterConfig,
    rng: R,
    items: Vec<Rectangle>,
    listeners: Vec<LayoutListener>,
}

impl<R: RandomSource> Scatterer<R> {
    /// Resolve which sources to draw and fix every item's size.
    pub fn new(config: ScatterConfig, sources: &[Source], mut rng: R) -> Self {
        let picked = resolve_sources(&mut rng, sources, config.count, config.repetition);
        let items = picked
            .iter()
            .enumerate()
            .map(|(i, s)| sized_item(&mut rng, i, s, config.resize.as_ref()))
            .collect();
        Self {
            config,
            rng,
            items,
            listeners: Vec::new(),
        }
    }

    pub fn config(&self) -> &ScatterConfig {
        &self.config
    }

    /// Items in insertion order, with the state of the last pass.
    pub fn items(&self) -> &[Rectangle] {
        &self.items
    }

    /// Register a callback run after every layout pass.
    pub fn subscribe(&mut self, listener: LayoutListener) {
        self.listeners.push(listener);
    }

    /// Run one full layout pass over all items.
    pub fn layout(&mut self) -> Layout {
        let bounds = self.config.bounds;
        let no_touch = self.config.no_touch;
        let mut placer = Placer::new(&mut self.rng, bounds, self.config.rotation.as_ref());

        let mut finalized: Vec<Rectangle> = Vec::with_capacity(self.items.len());
        let mut hidden = 0usize;
        for item in &self.items {
            let mut rect = unplaced(item);
            if no_touch {
                if placer.place_avoiding_overlap(&mut rect, &finalized)
                    == PlacementOutcome::Invisible
                {
                    hidden += 1;
                }
            } else {
                placer.place_freely(&mut rect);
            }
            finalized.push(rect);
        }

        log::info!(
            "laid out {} item(s) in {}x{} ({} hidden)",
            finalized.len(),
            bounds.width,
            bounds.height,
            hidden
        );

        self.items = finalized;
        let layout = Layout {
            bounds,
            items: self.items.clone(),
        };
        for listener in &mut self.listeners {
            listener(&layout);
        }
        layout
    }

    /// The host surface changed size: adopt the new bounds and redo the
    /// whole layout.
    pub fn on_resize(&mut self, bounds: Bounds) -> Result<Layout, ScatterError> {
        let bounds = validate_bounds(bounds).map_err(|e: ConfigError| {
            log::error!("rejected resize: {e}");
            ScatterError::InvalidConfig(vec![e])
        })?;
        log::debug!("container resized to {}x{}", bounds.width, bounds.height);
        self.config.bounds = bounds;
        Ok(self.layout())
    }
}

/// Fresh copy of an item with its placement state cleared; size kept.
fn unplaced(item: &Rectangle) -> Rectangle {
    Rectangle {
        center: None,
        rotation_deg: None,
        corners: Vec::new(),
        visible: true,
        ..item.clone()
    }
}
