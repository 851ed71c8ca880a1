//! Station/equation resolution.
//!
//! A station equation marks a point where the nominal station value jumps
//! from `back` to `ahead` without advancing physical distance, preserving
//! legacy chainage when a route is renumbered. Equations are supplied as a
//! slice ordered ascending by `back`; every function here is pure over its
//! arguments.

use crate::error::{Result, StationError};

/// A station discontinuity: nominal stationing jumps from `back` to
/// `ahead` at a single physical point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StationEquation {
    pub back: f64,
    pub ahead: f64,
}

impl StationEquation {
    /// Creates a station equation.
    #[must_use]
    pub fn new(back: f64, ahead: f64) -> Self {
        Self { back, ahead }
    }
}

/// Converts a nominal station to the physical distance from the alignment
/// start station.
///
/// Walks the equations in order, accumulating the physical length of each
/// fully passed range. A station exactly on an equation boundary resolves
/// in the pre-equation frame (the `<=` branch). Stations beyond the last
/// equation continue from its `ahead` value.
///
/// # Errors
///
/// Returns an error if the station is not a finite number.
pub fn station_to_distance(
    station: f64,
    start: f64,
    equations: &[StationEquation],
) -> Result<f64> {
    if !station.is_finite() {
        return Err(StationError::InvalidStation(station.to_string()).into());
    }

    let mut distance = 0.0;
    let mut cur = start;
    for eq in equations {
        if station <= eq.ahead {
            return Ok(distance + station - cur);
        }
        distance += eq.back - cur;
        cur = eq.ahead;
    }
    Ok(distance + station - cur)
}

/// Converts a physical distance from the alignment start back to a nominal
/// station. Inverse of [`station_to_distance`].
///
/// # Errors
///
/// Returns an error if the distance is not a finite number.
pub fn distance_to_station(
    distance: f64,
    start: f64,
    equations: &[StationEquation],
) -> Result<f64> {
    if !distance.is_finite() {
        return Err(StationError::InvalidStation(distance.to_string()).into());
    }

    let mut remaining = distance;
    let mut cur = start;
    for eq in equations {
        let span = eq.back - cur;
        if remaining <= span {
            return Ok(cur + remaining);
        }
        remaining -= span;
        cur = eq.ahead;
    }
    Ok(cur + remaining)
}

/// Parses a station value from text.
///
/// Accepts plain numbers (`"1234.5"`) and surveyor chainage notation
/// (`"12+34.56"`, meaning `12 * 100 + 34.56`).
///
/// # Errors
///
/// Returns an error if the text is not a valid station.
pub fn parse_station(text: &str) -> Result<f64> {
    let invalid = || StationError::InvalidStation(text.to_string());
    let trimmed = text.trim();

    if let Some((whole, offset)) = trimmed.split_once('+') {
        let whole: f64 = whole.trim().parse().map_err(|_| invalid())?;
        let offset: f64 = offset.trim().parse().map_err(|_| invalid())?;
        if offset < 0.0 {
            return Err(invalid().into());
        }
        return Ok(whole * 100.0 + offset);
    }

    let value: f64 = trimmed.parse().map_err(|_| invalid())?;
    Ok(value)
}
