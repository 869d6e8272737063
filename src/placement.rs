//! Per-item random placement, with an optional no-overlap retry loop.

use crate::collision::{axis_aligned_corners, is_collision};
use crate::config::Sampling;
use crate::prng::RandomSource;
use crate::types::{Bounds, Point, Rectangle};

/// Redraws allowed after a colliding first candidate; a rectangle is
/// hidden once `MAX_ATTEMPTS + 1` candidates have all collided.
pub const MAX_ATTEMPTS: u32 = 10;

/// States of the no-overlap placement loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementState {
    /// About to draw a fresh candidate; `failures` candidates collided so far.
    Candidate { failures: u32 },
    PlacedVisible { attempts: u32 },
    PlacedInvisible,
}

/// Final result of placing one rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementOutcome {
    Visible { attempts: u32 },
    Invisible,
}

/// Draws candidate placements inside `bounds`. The RNG and the rotation
/// sampling are injected so the caller controls reproducibility.
pub struct Placer<'a, R: RandomSource> {
    rng: &'a mut R,
    bounds: Bounds,
    rotation: Option<&'a Sampling>,
}

impl<'a, R: RandomSource> Placer<'a, R> {
    pub fn new(rng: &'a mut R, bounds: Bounds, rotation: Option<&'a Sampling>) -> Self {
        Self { rng, bounds, rotation }
    }

    /// Whole-pixel position in [0, extent).
    fn draw_coordinate(&mut self, extent: f64) -> f64 {
        self.rng.uniform_in_range(0.0, extent).floor()
    }

    /// Move `rect` to a random center, redraw its rotation, and
    /// recompute its corners. Always consumes two draws, plus one when
    /// rotation is enabled.
    fn draw_candidate(&mut self, rect: &mut Rectangle) {
        let center = Point::new(
            self.draw_coordinate(self.bounds.width),
            self.draw_coordinate(self.bounds.height),
        );
        rect.center = Some(center);
        rect.corners = axis_aligned_corners(center, rect.width, rect.height).to_vec();
        rect.rotation_deg = self.rotation.and_then(|s| s.sample(&mut *self.rng));
    }

    /// Single unconstrained placement; never hides the rectangle.
    pub fn place_freely(&mut self, rect: &mut Rectangle) {
        self.draw_candidate(rect);
        rect.visible = true;
        log::debug!("placed {} freely at {:?}", rect.id, rect.center);
    }

    /// Place `rect` so it collides with none of `placed`, retrying with
    /// fresh draws. When the first candidate and all `MAX_ATTEMPTS`
    /// redraws collide, the rectangle is hidden: no corners, no
    /// rotation. A clean candidate is accepted whatever the count.
    pub fn place_avoiding_overlap(
        &mut self,
        rect: &mut Rectangle,
        placed: &[Rectangle],
    ) -> PlacementOutcome {
        let mut state = PlacementState::Candidate { failures: 0 };
        loop {
            state = match state {
                PlacementState::Candidate { failures } => {
                    self.draw_candidate(rect);
                    if !collides_with_any(rect, placed) {
                        PlacementState::PlacedVisible { attempts: failures + 1 }
                    } else if failures < MAX_ATTEMPTS {
                        PlacementState::Candidate { failures: failures + 1 }
                    } else {
                        PlacementState::PlacedInvisible
                    }
                }
                PlacementState::PlacedVisible { attempts } => {
                    rect.visible = true;
                    log::debug!(
                        "placed {} at {:?} after {attempts} attempt(s)",
                        rect.id,
                        rect.center
                    );
                    return PlacementOutcome::Visible { attempts };
                }
                PlacementState::PlacedInvisible => {
                    rect.visible = false;
                    rect.corners.clear();
                    rect.rotation_deg = None;
                    log::debug!("hid {} after {MAX_ATTEMPTS} colliding redraws", rect.id);
                    return PlacementOutcome::Invisible;
                }
            };
        }
    }
}

/// True if `rect` collides with any visible, placed rectangle.
pub fn collides_with_any(rect: &Rectangle, placed: &[Rectangle]) -> bool {
    placed
        .iter()
        .filter(|other| other.visible && !other.corners.is_empty())
        .any(|other| is_collision(rect, other))
}
