//! Explicit length-unit conversion.
//!
//! The geometry routines in this crate are unit-agnostic: every function
//! assumes all lengths in a single call share one unit. Mixed-unit data
//! (LandXML files commonly carry feet alongside metric plans) must be
//! converted at the boundary with [`convert`], never inside geometry code.

/// A length unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Millimeter,
    Meter,
    Foot,
    Inch,
}

impl Unit {
    /// Meters per one of this unit.
    #[must_use]
    pub fn meters_per_unit(self) -> f64 {
        match self {
            Unit::Millimeter => 0.001,
            Unit::Meter => 1.0,
            Unit::Foot => 0.3048,
            Unit::Inch => 0.0254,
        }
    }
}

/// Converts a length value between units.
#[must_use]
pub fn convert(value: f64, from: Unit, to: Unit) -> f64 {
    value * from.meters_per_unit() / to.meters_per_unit()
}
