pub mod angle_2d;
pub mod line_2d;
pub mod units;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons, in length
/// units. Survey-grade alignment data is only meaningful to a tenth of a
/// millimeter, so the tolerance is coarser than a typical CAD kernel's.
pub const TOLERANCE: f64 = 1e-4;

/// Returns true if `a` and `b` differ by less than `tol`.
#[must_use]
pub fn within_tolerance(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() < tol
}

/// Embeds a planar point into 3D with `z = 0`, for callers that attach
/// alignment geometry to a 3D document.
#[must_use]
pub fn embed_3d(point: &Point2) -> Point3 {
    Point3::new(point.x, point.y, 0.0)
}
