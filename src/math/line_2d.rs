use crate::error::{GeometryError, Result};

use super::{Point2, Vector2, TOLERANCE};

/// Algebraic form of a 2D line.
///
/// A line is either sloped (`y = slope * x + intercept`) or vertical
/// (`x = const`, slope undefined). The variant makes the two cases
/// mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineForm {
    Sloped { slope: f64, intercept: f64 },
    Vertical { x: f64 },
}

/// A directed 2D line through two points, carrying its slope/intercept form.
///
/// The endpoints define the direction used by [`Line2::side_of`]; the
/// algebraic form drives intersection and orthogonal construction.
#[derive(Debug, Clone, Copy)]
pub struct Line2 {
    start: Point2,
    end: Point2,
    form: LineForm,
}

impl Line2 {
    /// Creates a line through two points.
    ///
    /// # Errors
    ///
    /// Returns an error if the points are coincident within [`TOLERANCE`].
    #[allow(clippy::float_cmp)]
    pub fn from_points(start: Point2, end: Point2) -> Result<Self> {
        let dx = end.x - start.x;
        let dy = end.y - start.y;
        if (dx * dx + dy * dy).sqrt() < TOLERANCE {
            return Err(GeometryError::Degenerate(
                "line endpoints are coincident".into(),
            )
            .into());
        }

        let form = if dx == 0.0 {
            LineForm::Vertical { x: start.x }
        } else {
            let slope = dy / dx;
            LineForm::Sloped {
                slope,
                intercept: start.y - slope * start.x,
            }
        };

        Ok(Self { start, end, form })
    }

    /// Creates a line through `origin` along `direction`.
    ///
    /// # Errors
    ///
    /// Returns an error if the direction vector is zero-length.
    pub fn from_origin_direction(origin: Point2, direction: Vector2) -> Result<Self> {
        if direction.norm() < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        Self::from_points(origin, origin + direction)
    }

    /// Returns the first defining point.
    #[must_use]
    pub fn start(&self) -> &Point2 {
        &self.start
    }

    /// Returns the second defining point.
    #[must_use]
    pub fn end(&self) -> &Point2 {
        &self.end
    }

    /// Returns the unit direction from start to end.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        let d = self.end - self.start;
        d / d.norm()
    }

    /// Returns the algebraic form of the line.
    #[must_use]
    pub fn form(&self) -> LineForm {
        self.form
    }

    /// Intersects two lines, returning the common point.
    ///
    /// Returns `None` if both lines are vertical, or if the slopes are
    /// exactly equal. Parallel detection deliberately uses exact equality
    /// rather than [`TOLERANCE`]: near-parallel tangents still yield their
    /// (distant) intersection point, which alignment construction relies on.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn intersect(&self, other: &Line2) -> Option<Point2> {
        match (self.form, other.form) {
            (LineForm::Vertical { .. }, LineForm::Vertical { .. }) => None,
            (LineForm::Vertical { x }, LineForm::Sloped { slope, intercept }) => {
                Some(Point2::new(x, slope * x + intercept))
            }
            (LineForm::Sloped { slope, intercept }, LineForm::Vertical { x }) => {
                Some(Point2::new(x, slope * x + intercept))
            }
            (
                LineForm::Sloped {
                    slope: m1,
                    intercept: b1,
                },
                LineForm::Sloped {
                    slope: m2,
                    intercept: b2,
                },
            ) => {
                if m1 == m2 {
                    return None;
                }
                let x = (b2 - b1) / (m1 - m2);
                Some(Point2::new(x, m1 * x + b1))
            }
        }
    }

    /// Constructs the line through `point` perpendicular to this line.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn orthogonal_through(&self, point: Point2) -> Line2 {
        let form = match self.form {
            // Horizontal line: the perpendicular is vertical.
            LineForm::Sloped { slope, .. } if slope == 0.0 => LineForm::Vertical { x: point.x },
            LineForm::Sloped { slope, .. } => {
                let m = -1.0 / slope;
                LineForm::Sloped {
                    slope: m,
                    intercept: point.y - m * point.x,
                }
            }
            // Vertical line: the perpendicular is horizontal.
            LineForm::Vertical { .. } => LineForm::Sloped {
                slope: 0.0,
                intercept: point.y,
            },
        };

        // Second defining point one unit along the perpendicular.
        let end = match form {
            LineForm::Vertical { x } => Point2::new(x, point.y + 1.0),
            LineForm::Sloped { slope, intercept } => {
                let x = point.x + 1.0;
                Point2::new(x, slope * x + intercept)
            }
        };

        Line2 {
            start: point,
            end,
            form,
        }
    }

    /// Reports which side of the directed line a point falls on.
    ///
    /// Returns `+1` if `point` is left of start→end, `-1` if right, and `0`
    /// if collinear within [`TOLERANCE`].
    #[must_use]
    pub fn side_of(&self, point: &Point2) -> i8 {
        let d = self.end - self.start;
        let p = point - self.start;
        let cross = d.x * p.y - d.y * p.x;
        if cross.abs() < TOLERANCE {
            0
        } else if cross > 0.0 {
            1
        } else {
            -1
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn from_points_sloped() {
        let line = Line2::from_points(Point2::new(0.0, 1.0), Point2::new(2.0, 5.0)).unwrap();
        match line.form() {
            LineForm::Sloped { slope, intercept } => {
                assert!((slope - 2.0).abs() < TOLERANCE, "slope={slope}");
                assert!((intercept - 1.0).abs() < TOLERANCE, "intercept={intercept}");
            }
            LineForm::Vertical { .. } => panic!("expected sloped form"),
        }
    }

    #[test]
    fn from_points_vertical() {
        let line = Line2::from_points(Point2::new(3.0, 0.0), Point2::new(3.0, 10.0)).unwrap();
        assert_eq!(line.form(), LineForm::Vertical { x: 3.0 });
    }

    #[test]
    fn coincident_points_rejected() {
        let result = Line2::from_points(Point2::new(1.0, 1.0), Point2::new(1.0, 1.0));
        assert!(result.is_err());
    }

    #[test]
    fn zero_direction_rejected() {
        let result = Line2::from_origin_direction(Point2::origin(), Vector2::new(0.0, 0.0));
        assert!(result.is_err());
    }

    #[test]
    fn intersect_perpendicular() {
        let a = Line2::from_points(Point2::new(-1.0, 0.0), Point2::new(1.0, 0.0)).unwrap();
        let b = Line2::from_points(Point2::new(0.5, -1.0), Point2::new(0.5, 1.0)).unwrap();
        let pt = a.intersect(&b).unwrap();
        assert!((pt.x - 0.5).abs() < TOLERANCE);
        assert!(pt.y.abs() < TOLERANCE);
    }

    #[test]
    fn intersect_general() {
        // y = x and y = -x + 2 meet at (1, 1).
        let a = Line2::from_points(Point2::new(0.0, 0.0), Point2::new(2.0, 2.0)).unwrap();
        let b = Line2::from_points(Point2::new(0.0, 2.0), Point2::new(2.0, 0.0)).unwrap();
        let pt = a.intersect(&b).unwrap();
        assert!((pt.x - 1.0).abs() < TOLERANCE);
        assert!((pt.y - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn intersect_parallel_returns_none() {
        let a = Line2::from_points(Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)).unwrap();
        let b = Line2::from_points(Point2::new(0.0, 1.0), Point2::new(1.0, 2.0)).unwrap();
        assert!(a.intersect(&b).is_none());
    }

    #[test]
    fn intersect_both_vertical_returns_none() {
        let a = Line2::from_points(Point2::new(0.0, 0.0), Point2::new(0.0, 1.0)).unwrap();
        let b = Line2::from_points(Point2::new(2.0, 0.0), Point2::new(2.0, 1.0)).unwrap();
        assert!(a.intersect(&b).is_none());
    }

    #[test]
    fn orthogonal_of_horizontal_is_vertical() {
        let line = Line2::from_points(Point2::new(0.0, 2.0), Point2::new(5.0, 2.0)).unwrap();
        let ortho = line.orthogonal_through(Point2::new(3.0, 7.0));
        assert_eq!(ortho.form(), LineForm::Vertical { x: 3.0 });
    }

    #[test]
    fn orthogonal_of_vertical_is_horizontal() {
        let line = Line2::from_points(Point2::new(2.0, 0.0), Point2::new(2.0, 5.0)).unwrap();
        let ortho = line.orthogonal_through(Point2::new(7.0, 3.0));
        match ortho.form() {
            LineForm::Sloped { slope, intercept } => {
                assert!(slope.abs() < TOLERANCE);
                assert!((intercept - 3.0).abs() < TOLERANCE);
            }
            LineForm::Vertical { .. } => panic!("expected horizontal form"),
        }
    }

    #[test]
    fn orthogonal_general_slope_is_negative_reciprocal() {
        let line = Line2::from_points(Point2::new(0.0, 0.0), Point2::new(1.0, 2.0)).unwrap();
        let ortho = line.orthogonal_through(Point2::new(0.0, 0.0));
        match ortho.form() {
            LineForm::Sloped { slope, .. } => {
                assert!((slope + 0.5).abs() < TOLERANCE, "slope={slope}");
            }
            LineForm::Vertical { .. } => panic!("expected sloped form"),
        }
    }

    #[test]
    fn orthogonal_passes_through_point() {
        let line = Line2::from_points(Point2::new(0.0, 0.0), Point2::new(3.0, 1.0)).unwrap();
        let p = Point2::new(2.0, 5.0);
        let ortho = line.orthogonal_through(p);
        // The orthogonal's own intersection with the base line, then the
        // direction p -> foot must be perpendicular to the base direction.
        let foot = line.intersect(&ortho).unwrap();
        let d = line.direction();
        let n = p - foot;
        assert!(d.dot(&n).abs() < TOLERANCE, "dot={}", d.dot(&n));
    }

    #[test]
    fn side_of_directed_line() {
        let line = Line2::from_points(Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)).unwrap();
        assert_eq!(line.side_of(&Point2::new(0.5, 1.0)), 1);
        assert_eq!(line.side_of(&Point2::new(0.5, -1.0)), -1);
        assert_eq!(line.side_of(&Point2::new(5.0, 0.0)), 0);
    }
}
