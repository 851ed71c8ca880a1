use crate::error::{GeometryError, Result};
use crate::math::angle_2d::{rotation_sign, Rotation};
use crate::math::line_2d::Line2;
use crate::math::{within_tolerance, Point2, Vector2, TOLERANCE};

use std::f64::consts::TAU;

/// Fraction of the shorter back tangent used to size a default curve.
///
/// The 3/8 rule: a newly inserted curve consumes three eighths of the
/// shorter tangent, leaving room to adjust the radius in either direction.
const DEFAULT_TANGENT_FRACTION: f64 = 0.375;

/// A circular arc in the plane.
///
/// `start_angle` is measured counter-clockwise from +X at the center;
/// `sweep_angle` is signed, positive = counter-clockwise.
#[derive(Debug, Clone, Copy)]
pub struct ArcDefinition {
    center: Point2,
    radius: f64,
    start_angle: f64,
    sweep_angle: f64,
}

impl ArcDefinition {
    /// Creates an arc from explicit parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not positive.
    pub fn new(center: Point2, radius: f64, start_angle: f64, sweep_angle: f64) -> Result<Self> {
        if radius < TOLERANCE {
            return Err(GeometryError::Degenerate("arc radius must be positive".into()).into());
        }
        Ok(Self {
            center,
            radius,
            start_angle,
            sweep_angle,
        })
    }

    /// Solves for the arc tangent to two consecutive back tangents.
    ///
    /// `tangent_a` is the incoming tangent (traveled toward the point of
    /// intersection), `tangent_b` the outgoing one. The segments need not
    /// touch; their carrier lines are extended to find the PI. The curve is
    /// sized by the 3/8 rule on the shorter tangent, so the arc begins on
    /// `tangent_a` and ends on `tangent_b`.
    ///
    /// # Errors
    ///
    /// Returns an error for zero-length tangents, parallel tangent lines,
    /// or an asymmetric construction (unequal radii at the two tangent
    /// points, which indicates corrupt input).
    #[allow(clippy::float_cmp)]
    pub fn from_back_tangents(
        tangent_a: (Point2, Point2),
        tangent_b: (Point2, Point2),
    ) -> Result<Self> {
        let line_a = Line2::from_points(tangent_a.0, tangent_a.1)?;
        let line_b = Line2::from_points(tangent_b.0, tangent_b.1)?;

        let pi = line_a
            .intersect(&line_b)
            .ok_or(GeometryError::NoIntersection)?;

        let far_a = farther_from(&pi, &tangent_a);
        let far_b = farther_from(&pi, &tangent_b);

        let va = far_a - pi;
        let vb = far_b - pi;
        if va.norm() < TOLERANCE || vb.norm() < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }

        let tangent_len = DEFAULT_TANGENT_FRACTION * va.norm().min(vb.norm());

        // Tangent points sit back from the PI along each tangent. The
        // center construction is symmetric in the two points, so the CCW
        // ordering of [`sort_ccw`] is not needed here.
        let radius_point_a = pi + va.normalize() * tangent_len;
        let radius_point_b = pi + vb.normalize() * tangent_len;

        let ortho_a = line_a.orthogonal_through(radius_point_a);
        let ortho_b = line_b.orthogonal_through(radius_point_b);

        let center = ortho_a
            .intersect(&ortho_b)
            .ok_or(GeometryError::NoIntersection)?;

        let r_a = (radius_point_a - center).norm();
        let r_b = (radius_point_b - center).norm();
        if !within_tolerance(r_a, r_b, TOLERANCE) {
            return Err(GeometryError::Degenerate(format!(
                "asymmetric tangent construction: radii {r_a} and {r_b} differ"
            ))
            .into());
        }

        // Travel: along tangent_a into the PI, out along tangent_b.
        let dir_in = (pi - far_a).normalize();
        let dir_out = (far_b - pi).normalize();
        let rot = rotation_sign(&dir_in, &dir_out);
        if rot == 0.0 {
            return Err(GeometryError::Degenerate("tangents are collinear".into()).into());
        }

        let start_angle = angle_at(&center, &radius_point_a);
        let end_angle = angle_at(&center, &radius_point_b);

        // Positive sweep = CCW; rotation_sign is positive for clockwise.
        let mut sweep = end_angle - start_angle;
        if rot < 0.0 {
            // Counter-clockwise curve: sweep in (0, 2π).
            if sweep <= 0.0 {
                sweep += TAU;
            }
        } else {
            // Clockwise curve: sweep in (-2π, 0).
            if sweep >= 0.0 {
                sweep -= TAU;
            }
        }

        Self::new(center, r_a, start_angle, sweep)
    }

    /// Returns the arc center.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the radius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the start angle in radians, CCW from +X.
    #[must_use]
    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    /// Returns the signed sweep angle (positive = CCW).
    #[must_use]
    pub fn sweep_angle(&self) -> f64 {
        self.sweep_angle
    }

    /// Returns the end angle (`start_angle + sweep_angle`).
    #[must_use]
    pub fn end_angle(&self) -> f64 {
        self.start_angle + self.sweep_angle
    }

    /// Unsigned central angle of the arc.
    #[must_use]
    pub fn central_angle(&self) -> f64 {
        self.sweep_angle.abs()
    }

    /// Rotation sense of the arc.
    #[must_use]
    pub fn rotation(&self) -> Rotation {
        Rotation::from_sign(-self.sweep_angle)
    }

    /// Evaluates the arc at parameter `t` in `[0, 1]`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        let angle = self.start_angle + self.sweep_angle * t;
        self.center + Vector2::new(angle.cos(), angle.sin()) * self.radius
    }

    /// Returns the arc's start point.
    #[must_use]
    pub fn start_point(&self) -> Point2 {
        self.point_at(0.0)
    }

    /// Returns the arc's end point.
    #[must_use]
    pub fn end_point(&self) -> Point2 {
        self.point_at(1.0)
    }
}

/// Orders two vectors counter-clockwise: the result satisfies
/// `v0 × v1 >= 0`. A cross product of exactly zero leaves the input
/// order unchanged.
#[must_use]
pub fn sort_ccw(v0: Vector2, v1: Vector2) -> (Vector2, Vector2) {
    let cross = v0.x * v1.y - v0.y * v1.x;
    if cross < 0.0 {
        (v1, v0)
    } else {
        (v0, v1)
    }
}

/// The segment endpoint farther from `point`.
fn farther_from(point: &Point2, segment: &(Point2, Point2)) -> Point2 {
    if (segment.0 - point).norm() >= (segment.1 - point).norm() {
        segment.0
    } else {
        segment.1
    }
}

/// Angle of the vector from `center` to `point`, CCW from +X.
fn angle_at(center: &Point2, point: &Point2) -> f64 {
    let d = point - center;
    d.y.atan2(d.x)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::PI;

    use super::*;

    const TOL: f64 = 1e-9;

    #[test]
    fn explicit_constructor_validates_radius() {
        assert!(ArcDefinition::new(Point2::origin(), 0.0, 0.0, 1.0).is_err());
        assert!(ArcDefinition::new(Point2::origin(), 100.0, 0.0, 1.0).is_ok());
    }

    #[test]
    fn symmetric_right_angle_left_turn() {
        // Eastbound approach ending at the origin, northbound departure.
        // 3/8 of 800 = 300: radius 300, center left of travel at (-300, 300).
        let arc = ArcDefinition::from_back_tangents(
            (Point2::new(-800.0, 0.0), Point2::new(0.0, 0.0)),
            (Point2::new(0.0, 0.0), Point2::new(0.0, 800.0)),
        )
        .unwrap();

        assert!((arc.radius() - 300.0).abs() < TOL, "radius={}", arc.radius());
        assert!((arc.center().x + 300.0).abs() < TOL, "cx={}", arc.center().x);
        assert!((arc.center().y - 300.0).abs() < TOL, "cy={}", arc.center().y);

        // Left turn is counter-clockwise: positive sweep of 90 degrees.
        assert!((arc.sweep_angle() - PI / 2.0).abs() < TOL);
        assert_eq!(arc.rotation(), Rotation::CounterClockwise);

        // Arc runs from the incoming tangent to the outgoing one.
        let sp = arc.start_point();
        assert!((sp.x + 300.0).abs() < TOL && sp.y.abs() < TOL, "start={sp}");
        let ep = arc.end_point();
        assert!(ep.x.abs() < TOL && (ep.y - 300.0).abs() < TOL, "end={ep}");
    }

    #[test]
    fn symmetric_right_angle_right_turn() {
        // Northbound approach, eastbound departure: clockwise curve.
        let arc = ArcDefinition::from_back_tangents(
            (Point2::new(0.0, -800.0), Point2::new(0.0, 0.0)),
            (Point2::new(0.0, 0.0), Point2::new(800.0, 0.0)),
        )
        .unwrap();

        assert!((arc.radius() - 300.0).abs() < TOL);
        assert!((arc.center().x - 300.0).abs() < TOL, "cx={}", arc.center().x);
        assert!((arc.center().y + 300.0).abs() < TOL, "cy={}", arc.center().y);
        assert!((arc.sweep_angle() + PI / 2.0).abs() < TOL);
        assert_eq!(arc.rotation(), Rotation::Clockwise);
    }

    #[test]
    fn tangency_invariant() {
        // Asymmetric tangent lengths, oblique angle.
        let a = (Point2::new(-1000.0, -200.0), Point2::new(0.0, 0.0));
        let b = (Point2::new(0.0, 0.0), Point2::new(400.0, 500.0));
        let arc = ArcDefinition::from_back_tangents(a, b).unwrap();

        // center -> tangent point must be perpendicular to the tangent.
        let da = (a.1 - a.0).normalize();
        let ra = arc.start_point() - arc.center();
        assert!(da.dot(&ra).abs() < 1e-4, "dot_a={}", da.dot(&ra));

        let db = (b.1 - b.0).normalize();
        let rb = arc.end_point() - arc.center();
        assert!(db.dot(&rb).abs() < 1e-4, "dot_b={}", db.dot(&rb));

        // Both tangent points lie on the circle.
        assert!((ra.norm() - arc.radius()).abs() < 1e-6);
        assert!((rb.norm() - arc.radius()).abs() < 1e-6);
    }

    #[test]
    fn shorter_tangent_sizes_the_curve() {
        // Tangent lengths 800 and 400: curve sized from 0.375 * 400 = 150.
        let arc = ArcDefinition::from_back_tangents(
            (Point2::new(-800.0, 0.0), Point2::new(0.0, 0.0)),
            (Point2::new(0.0, 0.0), Point2::new(0.0, 400.0)),
        )
        .unwrap();
        assert!((arc.radius() - 150.0).abs() < TOL, "radius={}", arc.radius());
    }

    #[test]
    fn parallel_tangents_fail() {
        let result = ArcDefinition::from_back_tangents(
            (Point2::new(0.0, 0.0), Point2::new(100.0, 0.0)),
            (Point2::new(0.0, 50.0), Point2::new(100.0, 50.0)),
        );
        assert!(matches!(
            result,
            Err(crate::AlineaError::Geometry(GeometryError::NoIntersection))
        ));
    }

    #[test]
    fn degenerate_tangent_fails_cleanly() {
        // Coincident endpoints: a typed error, not a NaN-poisoned arc.
        let result = ArcDefinition::from_back_tangents(
            (Point2::new(0.0, 0.0), Point2::new(0.0, 0.0)),
            (Point2::new(0.0, 0.0), Point2::new(0.0, 800.0)),
        );
        assert!(result.is_err());
    }

    #[test]
    fn sort_ccw_orders_by_cross_product() {
        let east = Vector2::new(1.0, 0.0);
        let n = Vector2::new(0.0, 1.0);
        // east x north = +1: already CCW.
        assert_eq!(sort_ccw(east, n), (east, n));
        // north x east = -1: swapped.
        assert_eq!(sort_ccw(n, east), (east, n));
        // Exactly zero cross: order untouched.
        let west = Vector2::new(-1.0, 0.0);
        assert_eq!(sort_ccw(east, west), (east, west));
    }

    #[test]
    fn point_at_endpoints_and_midpoint() {
        let arc = ArcDefinition::new(Point2::new(0.0, 0.0), 2.0, 0.0, PI).unwrap();
        let mid = arc.point_at(0.5);
        assert!((mid.x).abs() < TOL && (mid.y - 2.0).abs() < TOL, "mid={mid}");
        assert!((arc.end_angle() - PI).abs() < TOL);
        assert!((arc.central_angle() - PI).abs() < TOL);
    }
}
