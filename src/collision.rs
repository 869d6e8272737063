//! Rectangle projections and the approximate overlap test.
//!
//! Corners are stored axis-aligned (rotation is only a visual transform
//! applied by the host), while projections are taken on the rectangle's
//! rotated local axes. The overlap test only checks each rectangle's own
//! two local axes; it is not a full separating-axis test.

use crate::types::{Point, Rectangle};

/// Values closer than this to an integer are treated as that integer
/// before flooring, so float noise cannot push 50.0 down to 49.
const SNAP_EPSILON: f64 = 1e-9;

/// Corners of an axis-aligned rectangle, clockwise from top-left
/// (screen coordinates, y down).
pub fn axis_aligned_corners(center: Point, width: f64, height: f64) -> [Point; 4] {
    let half_w = width / 2.0;
    let half_h = height / 2.0;
    [
        Point::new(center.x - half_w, center.y - half_h),
        Point::new(center.x + half_w, center.y - half_h),
        Point::new(center.x + half_w, center.y + half_h),
        Point::new(center.x - half_w, center.y + half_h),
    ]
}

fn floor_snapped(v: f64) -> f64 {
    let r = v.round();
    if (v - r).abs() < SNAP_EPSILON {
        r
    } else {
        v.floor()
    }
}

/// One end of a projected interval: signed distance from the center
/// along the axis, and the corner it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extreme {
    pub distance: f64,
    pub corner: Point,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisProjection {
    pub min: Extreme,
    pub max: Extreme,
}

impl AxisProjection {
    fn start(distance: f64, corner: Point) -> Self {
        let e = Extreme { distance, corner };
        AxisProjection { min: e, max: e }
    }

    fn include(&mut self, distance: f64, corner: Point) {
        // Strict comparisons: the first corner wins ties.
        if distance < self.min.distance {
            self.min = Extreme { distance, corner };
        }
        if distance > self.max.distance {
            self.max = Extreme { distance, corner };
        }
    }

    /// True if the interval [lo, hi] of another rectangle touches this
    /// one: either end inside, or this interval enclosed by it.
    fn touches(&self, lo: f64, hi: f64) -> bool {
        let (min, max) = (self.min.distance, self.max.distance);
        (min <= lo && lo <= max) || (min <= hi && hi <= max) || (lo <= min && max <= hi)
    }
}

/// Projections of a rectangle's corners on its local x and y axes.
/// Local y points up the screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub x: AxisProjection,
    pub y: AxisProjection,
}

/// Rotation folded into a quarter turn; the local axes repeat every 90°.
fn quarter_rotation(rect: &Rectangle) -> f64 {
    rect.rotation_deg.unwrap_or(0.0) % 90.0
}

/// Signed distances of `corner` on the local axes of a rectangle
/// centered at `center`, whose x axis sits `-angle90` degrees off the
/// screen horizontal.
fn project_corner(center: Point, corner: Point, angle90: f64) -> (f64, f64) {
    let dx = corner.x - center.x;
    let dy = corner.y - center.y;
    let distance = dx.hypot(dy);
    if distance == 0.0 {
        return (0.0, 0.0);
    }

    // Angle of [center, corner] against the screen horizontal, y up.
    let mut angle = -(dy / dx).atan().to_degrees();
    if angle > 0.0 {
        angle -= 180.0;
    }
    if corner.y < center.y || (corner.y == center.y && corner.x < center.x) {
        angle -= 180.0;
    }

    let mut delta = angle - angle90;
    if delta < -180.0 {
        delta += 360.0;
    }

    let px = floor_snapped(distance * delta.to_radians().cos());
    let py = floor_snapped(distance * (delta - 90.0).to_radians().cos());
    (px, py)
}

/// Compute fresh projections for a placed rectangle. None when the
/// rectangle has no center or no corners (unplaced or hidden).
pub fn compute_projections(rect: &Rectangle) -> Option<Projection> {
    let center = rect.center?;
    let angle90 = -quarter_rotation(rect);

    let mut corners = rect.corners.iter().copied();
    let first = corners.next()?;
    let (px, py) = project_corner(center, first, angle90);
    let mut x = AxisProjection::start(px, first);
    let mut y = AxisProjection::start(py, first);
    for corner in corners {
        let (px, py) = project_corner(center, corner, angle90);
        x.include(px, corner);
        y.include(py, corner);
    }
    Some(Projection { x, y })
}

/// Offset of `to` from `from`, expressed on the local axes of a
/// rectangle rotated by `quarter_deg`.
fn local_offset(from: Point, to: Point, quarter_deg: f64) -> (f64, f64) {
    let (sin_r, cos_r) = quarter_deg.to_radians().sin_cos();
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    (dx * cos_r + dy * sin_r, dx * sin_r - dy * cos_r)
}

/// Does `other`'s extent touch `rect`'s projection on both of `rect`'s
/// local axes?
fn touches_on_own_axes(rect: &Rectangle, proj: &Projection, other: &Rectangle) -> bool {
    let (Some(from), Some(to)) = (rect.center, other.center) else {
        return false;
    };
    let (off_x, off_y) = local_offset(from, to, quarter_rotation(rect));
    let half_w = other.width / 2.0;
    let half_h = other.height / 2.0;
    proj.x.touches(off_x - half_w, off_x + half_w) && proj.y.touches(off_y - half_h, off_y + half_h)
}

/// Approximate overlap test between two placed rectangles.
///
/// False when either rectangle has no projections. Otherwise true only
/// if the extents touch on all four local axes (two per rectangle).
pub fn is_collision(a: &Rectangle, b: &Rectangle) -> bool {
    let (Some(pa), Some(pb)) = (compute_projections(a), compute_projections(b)) else {
        return false;
    };
    touches_on_own_axes(a, &pa, b) && touches_on_own_axes(b, &pb, a)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect_at(x: f64, y: f64, width: f64, height: f64, rotation_deg: Option<f64>) -> Rectangle {
        let center = Point::new(x, y);
        Rectangle {
            id: "item".into(),
            source: "test.png".into(),
            width,
            height,
            center: Some(center),
            rotation_deg,
            corners: axis_aligned_corners(center, width, height).to_vec(),
            visible: true,
        }
    }

    #[test]
    fn corners_clockwise_from_top_left() {
        let c = axis_aligned_corners(Point::new(10.0, 20.0), 8.0, 4.0);
        assert_eq!(c[0], Point::new(6.0, 18.0));
        assert_eq!(c[1], Point::new(14.0, 18.0));
        assert_eq!(c[2], Point::new(14.0, 22.0));
        assert_eq!(c[3], Point::new(6.0, 22.0));
    }

    #[test]
    fn square_projections() {
        let sq = rect_at(0.0, 0.0, 100.0, 100.0, Some(0.0));
        let p = compute_projections(&sq).expect("projections");
        assert_eq!(p.x.min.distance, -50.0);
        assert_eq!(p.x.min.corner, Point::new(-50.0, -50.0));
        assert_eq!(p.x.max.distance, 50.0);
        assert_eq!(p.x.max.corner, Point::new(50.0, -50.0));
        // Local y points up the screen: the top edge is the max.
        assert_eq!(p.y.max.distance, 50.0);
        assert_eq!(p.y.max.corner, Point::new(-50.0, -50.0));
        assert_eq!(p.y.min.distance, -50.0);
        assert_eq!(p.y.min.corner, Point::new(50.0, 50.0));
    }

    #[test]
    fn wide_rectangle_projections() {
        let r = rect_at(300.0, 200.0, 100.0, 50.0, None);
        let p = compute_projections(&r).expect("projections");
        assert_eq!((p.x.min.distance, p.x.max.distance), (-50.0, 50.0));
        assert_eq!((p.y.min.distance, p.y.max.distance), (-25.0, 25.0));
    }

    #[test]
    fn rotated_projections_use_axis_aligned_corners() {
        // Corners stay axis-aligned while the axes turn by 45°, so the
        // square's diagonals land on the axes.
        let sq = rect_at(0.0, 0.0, 100.0, 100.0, Some(45.0));
        assert_eq!(sq.corners[0], Point::new(-50.0, -50.0));
        let p = compute_projections(&sq).expect("projections");
        assert_eq!(p.x.min.distance, -71.0);
        assert_eq!(p.x.min.corner, Point::new(-50.0, -50.0));
        assert_eq!(p.x.max.distance, 70.0);
        assert_eq!(p.x.max.corner, Point::new(50.0, 50.0));
        assert_eq!(p.y.max.distance, 70.0);
        assert_eq!(p.y.max.corner, Point::new(50.0, -50.0));
        assert_eq!(p.y.min.distance, -71.0);
        assert_eq!(p.y.min.corner, Point::new(-50.0, 50.0));
    }

    #[test]
    fn rotation_repeats_every_quarter_turn() {
        let a = compute_projections(&rect_at(0.0, 0.0, 100.0, 50.0, Some(10.0)));
        let b = compute_projections(&rect_at(0.0, 0.0, 100.0, 50.0, Some(100.0)));
        assert_eq!(a, b);
    }

    #[test]
    fn unplaced_has_no_projections() {
        let mut r = rect_at(0.0, 0.0, 10.0, 10.0, None);
        r.center = None;
        assert!(compute_projections(&r).is_none());

        let mut hidden = rect_at(0.0, 0.0, 10.0, 10.0, None);
        hidden.corners.clear();
        assert!(compute_projections(&hidden).is_none());
    }

    #[test]
    fn zero_size_projects_to_center() {
        let r = rect_at(5.0, 5.0, 0.0, 0.0, None);
        let p = compute_projections(&r).expect("projections");
        assert_eq!((p.x.min.distance, p.x.max.distance), (0.0, 0.0));
    }

    #[test]
    fn separated_no_collision() {
        let a = rect_at(0.0, 0.0, 100.0, 50.0, Some(0.0));
        let b = rect_at(200.0, 0.0, 100.0, 50.0, Some(0.0));
        assert!(!is_collision(&a, &b));
        assert!(!is_collision(&b, &a));
    }

    #[test]
    fn overlapping_collision() {
        let a = rect_at(0.0, 0.0, 100.0, 50.0, Some(0.0));
        let b = rect_at(50.0, 0.0, 100.0, 50.0, Some(0.0));
        assert!(is_collision(&a, &b));
        assert!(is_collision(&b, &a));
    }

    #[test]
    fn touching_edges_collide() {
        // Inclusive bounds: shared edges count.
        let a = rect_at(0.0, 0.0, 100.0, 50.0, None);
        let b = rect_at(100.0, 0.0, 100.0, 50.0, None);
        assert!(is_collision(&a, &b));
    }

    #[test]
    fn vertically_separated_no_collision() {
        let a = rect_at(0.0, 0.0, 100.0, 50.0, None);
        let b = rect_at(0.0, 80.0, 100.0, 50.0, None);
        assert!(!is_collision(&a, &b));
    }

    #[test]
    fn enclosed_rectangle_collides() {
        let big = rect_at(100.0, 100.0, 400.0, 400.0, None);
        let small = rect_at(120.0, 90.0, 10.0, 10.0, None);
        assert!(is_collision(&big, &small));
        assert!(is_collision(&small, &big));
    }

    #[test]
    fn local_offset_matches_corner_projections() {
        // Both paths put a point on the same rotated local axes.
        let center = Point::new(300.0, 200.0);
        for r in [10.0, 30.0, 45.0, 80.0] {
            for corner in axis_aligned_corners(center, 100.0, 50.0) {
                let (ox, oy) = local_offset(center, corner, r);
                assert_eq!(
                    (floor_snapped(ox), floor_snapped(oy)),
                    project_corner(center, corner, -r),
                    "rotation {r}, corner {corner:?}"
                );
            }
        }
    }

    #[test]
    fn rotated_overlapping_collision() {
        let a = rect_at(300.0, 200.0, 100.0, 50.0, Some(30.0));
        let b = rect_at(340.0, 200.0, 100.0, 50.0, Some(30.0));
        assert!(is_collision(&a, &b));
        assert!(is_collision(&b, &a));
    }

    #[test]
    fn rotated_separated_no_collision() {
        let a = rect_at(300.0, 200.0, 100.0, 50.0, Some(30.0));
        let b = rect_at(600.0, 200.0, 100.0, 50.0, Some(30.0));
        assert!(!is_collision(&a, &b));
        assert!(!is_collision(&b, &a));
    }

    #[test]
    fn collision_needs_projections() {
        let a = rect_at(0.0, 0.0, 100.0, 50.0, None);
        let mut b = rect_at(0.0, 0.0, 100.0, 50.0, None);
        b.corners.clear();
        assert!(!is_collision(&a, &b));
        assert!(!is_collision(&b, &a));
    }
}
