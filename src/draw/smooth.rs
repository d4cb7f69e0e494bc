//! Tension-based curve fitting for freehand strokes.
//!
//! Each interior point gets a pair of control points placed along the line
//! through its neighbours, scaled by `tension` and split in proportion to the
//! lengths of the adjacent segments. The first and last segments become
//! quadratic curves, everything in between cubic curves.

use super::stroke::Point;

/// Tension applied when no other value is configured.
pub const DEFAULT_TENSION: f64 = 0.5;

/// One drawing command of a smoothed stroke path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    MoveTo(Point),
    LineTo(Point),
    QuadTo { ctrl: Point, to: Point },
    CubicTo { ctrl1: Point, ctrl2: Point, to: Point },
}

/// Builds the path for `points`.
///
/// - A single point yields a zero-length line so round caps draw a dot.
/// - Two points, or a tension of zero, yield a plain polyline.
pub fn tension_path(points: &[Point], tension: f64) -> Vec<PathSegment> {
    let Some((&first, rest)) = points.split_first() else {
        return Vec::new();
    };

    if rest.is_empty() {
        return vec![PathSegment::MoveTo(first), PathSegment::LineTo(first)];
    }

    if rest.len() == 1 || tension == 0.0 {
        return polyline(first, rest);
    }

    // (incoming control, point, outgoing control) for every interior point
    let knots: Vec<(Point, Point, Point)> = points
        .windows(3)
        .filter_map(|w| control_points(w[0], w[1], w[2], tension).map(|(a, b)| (a, w[1], b)))
        .collect();

    let (Some(head), Some(tail)) = (knots.first(), knots.last()) else {
        // Every interior point coincided with its neighbours.
        return polyline(first, rest);
    };

    let mut path = Vec::with_capacity(knots.len() + 2);
    path.push(PathSegment::MoveTo(first));
    path.push(PathSegment::QuadTo {
        ctrl: head.0,
        to: head.1,
    });
    for pair in knots.windows(2) {
        path.push(PathSegment::CubicTo {
            ctrl1: pair[0].2,
            ctrl2: pair[1].0,
            to: pair[1].1,
        });
    }
    path.push(PathSegment::QuadTo {
        ctrl: tail.2,
        to: *rest.last().unwrap_or(&first),
    });
    path
}

fn polyline(first: Point, rest: &[Point]) -> Vec<PathSegment> {
    std::iter::once(PathSegment::MoveTo(first))
        .chain(rest.iter().copied().map(PathSegment::LineTo))
        .collect()
}

/// Control points around `p1`, or `None` when all three points coincide.
fn control_points(p0: Point, p1: Point, p2: Point, tension: f64) -> Option<(Point, Point)> {
    let d01 = (p1.0 - p0.0).hypot(p1.1 - p0.1);
    let d12 = (p2.0 - p1.0).hypot(p2.1 - p1.1);
    let total = d01 + d12;
    if total == 0.0 || !total.is_finite() {
        return None;
    }

    let fa = tension * d01 / total;
    let fb = tension * d12 / total;
    let (dx, dy) = (p2.0 - p0.0, p2.1 - p0.1);

    Some(((p1.0 - fa * dx, p1.1 - fa * dy), (p1.0 + fb * dx, p1.1 + fb * dy)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_has_no_path() {
        assert!(tension_path(&[], DEFAULT_TENSION).is_empty());
    }

    #[test]
    fn single_point_is_a_dot() {
        assert_eq!(
            tension_path(&[(3.0, 4.0)], DEFAULT_TENSION),
            vec![PathSegment::MoveTo((3.0, 4.0)), PathSegment::LineTo((3.0, 4.0))]
        );
    }

    #[test]
    fn two_points_are_a_straight_segment() {
        assert_eq!(
            tension_path(&[(0.0, 0.0), (5.0, 0.0)], DEFAULT_TENSION),
            vec![PathSegment::MoveTo((0.0, 0.0)), PathSegment::LineTo((5.0, 0.0))]
        );
    }

    #[test]
    fn corner_is_rounded_with_quadratic_ends() {
        let path = tension_path(&[(10.0, 10.0), (20.0, 10.0), (20.0, 20.0)], 0.5);
        assert_eq!(
            path,
            vec![
                PathSegment::MoveTo((10.0, 10.0)),
                PathSegment::QuadTo {
                    ctrl: (17.5, 7.5),
                    to: (20.0, 10.0)
                },
                PathSegment::QuadTo {
                    ctrl: (22.5, 12.5),
                    to: (20.0, 20.0)
                },
            ]
        );
    }

    #[test]
    fn interior_segments_are_cubic() {
        let points = [(0.0, 0.0), (10.0, 0.0), (20.0, 0.0), (30.0, 0.0)];
        let path = tension_path(&points, 0.5);
        assert_eq!(path.len(), 4);
        assert_eq!(
            path[2],
            PathSegment::CubicTo {
                ctrl1: (15.0, 0.0),
                ctrl2: (15.0, 0.0),
                to: (20.0, 0.0)
            }
        );
        assert_eq!(
            path[3],
            PathSegment::QuadTo {
                ctrl: (25.0, 0.0),
                to: (30.0, 0.0)
            }
        );
    }

    #[test]
    fn zero_tension_is_a_polyline() {
        let points = [(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)];
        let path = tension_path(&points, 0.0);
        assert!(path[1..].iter().all(|s| matches!(s, PathSegment::LineTo(_))));
    }

    #[test]
    fn repeated_points_fall_back_to_polyline() {
        let points = [(4.0, 4.0); 3];
        let path = tension_path(&points, 0.5);
        assert_eq!(path.len(), 3);
        assert_eq!(path[0], PathSegment::MoveTo((4.0, 4.0)));
    }
}
