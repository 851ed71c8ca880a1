use crate::error::{GeometryError, Result};
use crate::math::angle_2d::Rotation;
use crate::math::Point2;

/// A clothoid transition spiral between a tangent and a circular arc.
///
/// Curvature varies linearly with arc length. One of the two radii is
/// infinite (the tangent end); the other is the radius of the adjoining
/// circular curve. A radius of `0.0` is accepted as LandXML shorthand for
/// "infinite" and normalized on construction.
#[derive(Debug, Clone, Copy)]
pub struct SpiralDefinition {
    start: Point2,
    start_bearing: f64,
    length: f64,
    radius_start: f64,
    radius_end: f64,
    rotation: Rotation,
}

impl SpiralDefinition {
    /// Creates a spiral definition.
    ///
    /// # Errors
    ///
    /// Returns an error if the length is not positive, both radii are
    /// infinite (a straight line, not a spiral), or the radii are equal
    /// (a circular arc, not a spiral).
    #[allow(clippy::float_cmp)]
    pub fn new(
        start: Point2,
        start_bearing: f64,
        length: f64,
        radius_start: f64,
        radius_end: f64,
        rotation: Rotation,
    ) -> Result<Self> {
        if length <= 0.0 {
            return Err(GeometryError::Degenerate("spiral length must be positive".into()).into());
        }

        let radius_start = normalize_radius(radius_start);
        let radius_end = normalize_radius(radius_end);

        if radius_start.is_infinite() && radius_end.is_infinite() {
            return Err(
                GeometryError::Degenerate("spiral with two infinite radii is a line".into()).into(),
            );
        }
        if radius_start == radius_end {
            return Err(
                GeometryError::Degenerate("spiral with equal radii is an arc".into()).into(),
            );
        }
        if radius_start < 0.0 || radius_end < 0.0 {
            return Err(GeometryError::Degenerate("spiral radius must be positive".into()).into());
        }

        Ok(Self {
            start,
            start_bearing,
            length,
            radius_start,
            radius_end,
            rotation,
        })
    }

    /// Returns the start point.
    #[must_use]
    pub fn start(&self) -> &Point2 {
        &self.start
    }

    /// Returns the bearing at the start point.
    #[must_use]
    pub fn start_bearing(&self) -> f64 {
        self.start_bearing
    }

    /// Returns the spiral length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Returns the radius at the start (infinite for an entry spiral).
    #[must_use]
    pub fn radius_start(&self) -> f64 {
        self.radius_start
    }

    /// Returns the radius at the end (infinite for an exit spiral).
    #[must_use]
    pub fn radius_end(&self) -> f64 {
        self.radius_end
    }

    /// Returns the rotation sense.
    #[must_use]
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// True for an entry spiral (straight at the start, curved at the end).
    #[must_use]
    pub fn is_entry(&self) -> bool {
        self.radius_start.is_infinite()
    }

    /// The finite radius at the curved end of the spiral.
    #[must_use]
    pub fn min_radius(&self) -> f64 {
        self.radius_start.min(self.radius_end)
    }

    /// Total change in tangent direction over the spiral, `L / (2R)`.
    #[must_use]
    pub fn theta(&self) -> f64 {
        self.length / (2.0 * self.min_radius())
    }

    /// Lateral clothoid offset at arc length `l` from the tangent end,
    /// using the cubic approximation `l³ / (6 R L)`.
    #[must_use]
    pub fn lateral(&self, l: f64) -> f64 {
        l.powi(3) / (6.0 * self.min_radius() * self.length)
    }

    /// Along-tangent clothoid distance at arc length `l` from the tangent
    /// end: `l − l⁵ / (40 R² L²)`.
    #[must_use]
    pub fn along(&self, l: f64) -> f64 {
        l - l.powi(5) / (40.0 * self.min_radius().powi(2) * self.length.powi(2))
    }
}

/// LandXML encodes an infinite radius as 0 or "INF"; fold both to infinity.
#[allow(clippy::float_cmp)]
fn normalize_radius(radius: f64) -> f64 {
    if radius == 0.0 {
        f64::INFINITY
    } else {
        radius
    }
}
