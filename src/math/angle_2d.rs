use std::f64::consts::{PI, TAU};

use crate::error::{GeometryError, Result};

use super::{Vector2, TOLERANCE};

/// Rotation sense of a curve, matching the LandXML `rot` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    Clockwise,
    CounterClockwise,
}

impl Rotation {
    /// Signed convention used throughout: clockwise is positive.
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Rotation::Clockwise => 1.0,
            Rotation::CounterClockwise => -1.0,
        }
    }

    /// Builds a rotation from a signed value (positive = clockwise).
    #[must_use]
    pub fn from_sign(value: f64) -> Self {
        if value < 0.0 {
            Rotation::CounterClockwise
        } else {
            Rotation::Clockwise
        }
    }
}

/// Quadrant of a surveyor's bearing (e.g. "N 30° E" is [`Quadrant::NorthEast`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quadrant {
    NorthEast,
    SouthEast,
    SouthWest,
    NorthWest,
}

/// Unit vector pointing north, the zero-bearing reference.
#[must_use]
pub fn north() -> Vector2 {
    Vector2::new(0.0, 1.0)
}

/// Sign of the rotation that carries `in_vec` onto `out_vec`.
///
/// Returns `+1.0` for clockwise, `-1.0` for counter-clockwise, and `0.0`
/// when the vectors are collinear within [`TOLERANCE`].
#[must_use]
pub fn rotation_sign(in_vec: &Vector2, out_vec: &Vector2) -> f64 {
    let cross = in_vec.x * out_vec.y - in_vec.y * out_vec.x;
    if cross.abs() < TOLERANCE {
        0.0
    } else {
        -cross.signum()
    }
}

/// Unsigned angle between two vectors, in `[0, π]`.
#[must_use]
pub fn angle_between(a: &Vector2, b: &Vector2) -> f64 {
    let denom = a.norm() * b.norm();
    if denom < TOLERANCE {
        return 0.0;
    }
    (a.dot(b) / denom).clamp(-1.0, 1.0).acos()
}

/// Bearing of a vector: angle measured clockwise from north, in `[0, 2π)`.
///
/// # Errors
///
/// Returns an error for a zero-length vector.
#[allow(clippy::float_cmp)]
pub fn bearing_of(v: &Vector2) -> Result<f64> {
    if v.norm() < TOLERANCE {
        return Err(GeometryError::ZeroVector.into());
    }
    let up = north();
    let mut bearing = rotation_sign(&up, v) * angle_between(&up, v);
    // Collinear with north: either due north (0) or due south (π).
    if bearing == 0.0 && v.y < 0.0 {
        bearing = PI;
    }
    if bearing < 0.0 {
        bearing += TAU;
    }
    Ok(bearing)
}

/// Unit vector at the given bearing (clockwise from north).
#[must_use]
pub fn vector_from_bearing(bearing: f64) -> Vector2 {
    Vector2::new(bearing.sin(), bearing.cos())
}

/// Converts a quadrant bearing to a north azimuth in `[0, 2π)`.
///
/// `angle` is the bearing's angular part in radians, measured from the
/// north or south meridian toward the east or west per the quadrant.
#[must_use]
pub fn azimuth_from_bearing(angle: f64, quadrant: Quadrant) -> f64 {
    match quadrant {
        Quadrant::NorthEast => angle,
        Quadrant::SouthEast => PI - angle,
        Quadrant::SouthWest => PI + angle,
        Quadrant::NorthWest => TAU - angle,
    }
}

/// Station length defining degree of curve in US customary units (feet).
pub const STATION_LENGTH_FT: f64 = 100.0;

/// Station length defining degree of curve in metric units (meters).
pub const STATION_LENGTH_M: f64 = 1000.0;

/// Converts a degree of curve (degrees subtended per station length) to a
/// radius in the same length unit as `station_length`.
///
/// # Errors
///
/// Returns an error if the degree is not positive.
pub fn degree_of_curve_to_radius(degree: f64, station_length: f64) -> Result<f64> {
    if degree <= 0.0 {
        return Err(GeometryError::Degenerate("degree of curve must be positive".into()).into());
    }
    Ok((180.0 / PI) * station_length / degree)
}

/// Converts a radius to a degree of curve for the given station length.
///
/// # Errors
///
/// Returns an error if the radius is not positive.
pub fn radius_to_degree_of_curve(radius: f64, station_length: f64) -> Result<f64> {
    if radius <= 0.0 {
        return Err(GeometryError::Degenerate("radius must be positive".into()).into());
    }
    Ok((180.0 / PI) * station_length / radius)
}
