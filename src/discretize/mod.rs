//! Polyline discretization of arcs and clothoid spirals.
//!
//! All routines are pure: the returned sequence excludes the caller's
//! start point and includes the curve end point, in travel order.
//!
//! Bearing convention: angle clockwise from north. A positive central
//! angle bends toward the right-hand side of the bearing (clockwise);
//! a negative central angle bends left.

use crate::curve::SpiralDefinition;
use crate::error::{DiscretizeError, Result};
use crate::math::angle_2d::{vector_from_bearing, Rotation};
use crate::math::{Point2, Vector2, TOLERANCE};

/// How the `interval` argument of the discretizers is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscretizeMode {
    /// `interval` is the exact number of equal angular steps.
    Segment,
    /// `interval` is the arc length of each step.
    Interval,
    /// `interval` is the maximum chord-to-arc deviation of each step.
    Tolerance,
}

/// Discretizes a circular arc into an ordered point sequence.
///
/// The arc starts at `start` heading along `bearing` and turns through
/// `central_angle` at the given `radius`. The output excludes `start`,
/// includes the arc end point, and appends a partial trailing segment
/// only when the leftover arc length exceeds [`TOLERANCE`].
///
/// # Errors
///
/// Returns an error if `radius`, `interval`, or the central angle is not
/// usable for the selected mode.
pub fn discretize_arc(
    start: Point2,
    bearing: f64,
    radius: f64,
    central_angle: f64,
    interval: f64,
    mode: DiscretizeMode,
) -> Result<Vec<Point2>> {
    if radius <= 0.0 {
        return Err(invalid("radius", radius));
    }
    if central_angle.abs() < TOLERANCE {
        return Err(invalid("central_angle", central_angle));
    }

    let dir = if central_angle < 0.0 { -1.0 } else { 1.0 };
    let central = central_angle.abs();

    let (step, whole) = step_plan(central, radius, interval, mode)?;

    let t_hat = vector_from_bearing(bearing);
    let r_hat = right_of(&t_hat);

    let mut points = Vec::with_capacity(whole + 1);
    #[allow(clippy::cast_precision_loss)]
    for k in 1..=whole {
        let delta = step * k as f64;
        points.push(arc_point(&start, &t_hat, &r_hat, radius, dir, delta));
    }

    // Partial trailing segment only if it has measurable length.
    #[allow(clippy::cast_precision_loss)]
    let leftover = central - step * whole as f64;
    if leftover * radius > TOLERANCE {
        points.push(arc_point(&start, &t_hat, &r_hat, radius, dir, central));
    }

    Ok(points)
}

/// Discretizes a spiral-arc-spiral curve into an ordered point sequence.
///
/// The curve consists of an entry clothoid of `length`, a circular arc at
/// `radius`, and a mirrored exit clothoid of the same length. The arc
/// spans the total `central_angle` less the turn consumed by the two
/// spirals (`length / (2 * radius)` each).
///
/// # Errors
///
/// Returns an error if any parameter is unusable, or if the spirals
/// consume more than the total central angle.
pub fn discretize_spiral(
    start: Point2,
    bearing: f64,
    radius: f64,
    central_angle: f64,
    length: f64,
    interval: f64,
    mode: DiscretizeMode,
) -> Result<Vec<Point2>> {
    if radius <= 0.0 {
        return Err(invalid("radius", radius));
    }
    if length <= 0.0 {
        return Err(invalid("length", length));
    }

    let dir = if central_angle < 0.0 { -1.0 } else { 1.0 };
    let central = central_angle.abs();
    let rotation = Rotation::from_sign(dir);

    let entry = SpiralDefinition::new(start, bearing, length, f64::INFINITY, radius, rotation)?;
    let theta_s = entry.theta();

    let arc_span = central - 2.0 * theta_s;
    if arc_span < 0.0 {
        // Spirals alone would overshoot the total deflection.
        return Err(invalid("length", length));
    }

    let spiral_step = spiral_step_length(length, radius, interval, mode)?;

    let mut points = Vec::new();

    // Entry clothoid: lateral offset grows toward the curve side.
    let t_in = vector_from_bearing(bearing);
    let r_in = right_of(&t_in);
    let mut l = spiral_step;
    while l < length - TOLERANCE {
        points.push(start + t_in * entry.along(l) + r_in * (dir * entry.lateral(l)));
        l += spiral_step;
    }
    let spiral_end = start + t_in * entry.along(length) + r_in * (dir * entry.lateral(length));
    points.push(spiral_end);

    // Central circular arc, reduced by the spiral turn on each side.
    let arc_bearing = bearing + dir * theta_s;
    if arc_span > TOLERANCE {
        points.extend(discretize_arc(
            spiral_end,
            arc_bearing,
            radius,
            dir * arc_span,
            interval,
            mode,
        )?);
    }
    let arc_end = points[points.len() - 1];

    // Exit clothoid, mirrored: walked backward from the curve end point,
    // which sits one spiral ahead of the arc end along the exit tangent.
    let exit_bearing = bearing + dir * central;
    let t_out = vector_from_bearing(exit_bearing);
    let r_out = right_of(&t_out);
    let curve_end =
        arc_end + t_out * entry.along(length) - r_out * (dir * entry.lateral(length));

    let mut l = length - spiral_step;
    while l > TOLERANCE {
        points.push(curve_end - t_out * entry.along(l) + r_out * (dir * entry.lateral(l)));
        l -= spiral_step;
    }
    points.push(curve_end);

    Ok(points)
}

/// Angular step size and whole-segment count for an arc.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn step_plan(
    central: f64,
    radius: f64,
    interval: f64,
    mode: DiscretizeMode,
) -> Result<(f64, usize)> {
    if interval <= 0.0 {
        return Err(invalid("interval", interval));
    }
    match mode {
        DiscretizeMode::Segment => {
            let count = interval.floor();
            if count < 1.0 {
                return Err(invalid("interval", interval));
            }
            // Exact count: no leftover partial segment.
            Ok((central / count, count as usize))
        }
        DiscretizeMode::Interval => {
            let step = interval / radius;
            Ok((step, (central / step).floor() as usize))
        }
        DiscretizeMode::Tolerance => {
            if interval >= 2.0 * radius {
                return Err(invalid("interval", interval));
            }
            let step = 2.0 * (1.0 - interval / radius).acos();
            Ok((step, (central / step).floor() as usize))
        }
    }
}

/// Sample spacing (arc length) along a spiral for the given mode.
fn spiral_step_length(length: f64, radius: f64, interval: f64, mode: DiscretizeMode) -> Result<f64> {
    if interval <= 0.0 {
        return Err(invalid("interval", interval));
    }
    match mode {
        DiscretizeMode::Segment => {
            let count = interval.floor();
            if count < 1.0 {
                return Err(invalid("interval", interval));
            }
            Ok(length / count)
        }
        DiscretizeMode::Interval => Ok(interval),
        DiscretizeMode::Tolerance => {
            if interval >= 2.0 * radius {
                return Err(invalid("interval", interval));
            }
            // Chord-error step at the sharpest curvature the spiral reaches.
            Ok(radius * 2.0 * (1.0 - interval / radius).acos())
        }
    }
}

/// Point on the arc at cumulative turn `delta` from the start.
///
/// `start + R sin δ · t̂ + dir · R (1 − cos δ) · r̂`: the offset along the
/// entry tangent plus the lateral offset toward the curve side.
fn arc_point(
    start: &Point2,
    t_hat: &Vector2,
    r_hat: &Vector2,
    radius: f64,
    dir: f64,
    delta: f64,
) -> Point2 {
    start + t_hat * (radius * delta.sin()) + r_hat * (dir * radius * (1.0 - delta.cos()))
}

/// Right-hand orthogonal of a unit vector.
fn right_of(v: &Vector2) -> Vector2 {
    Vector2::new(v.y, -v.x)
}

fn invalid(parameter: &'static str, value: f64) -> crate::AlineaError {
    DiscretizeError::InvalidParameter { parameter, value }.into()
}
