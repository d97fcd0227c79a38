//! Conversion from kurbo paths.

use super::{error::OutlineError, source::OutlineBuf};
use kurbo::{BezPath, PathEl};
use raw::{tables::glyf::PointFlags, types::Point};

#[cfg(feature = "libm")]
#[allow(unused_imports)]
use core_maths::CoreFloat;

/// Creates an outline from a kurbo `BezPath` in font units.
///
/// Each subpath becomes a contour. Quadratic and cubic control points are
/// flagged as such and coordinates are rounded to integers. In a closed
/// subpath, a final on-curve point with the same coordinates as the first
/// is removed since the contour is implicitly closed.
pub fn outline_from_bez_path(path: &BezPath, units_per_em: u16) -> Result<OutlineBuf, OutlineError> {
    let mut outline = OutlineBuf::new(units_per_em);
    let mut contour_start: Option<usize> = None;
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p0) => {
                finish_contour(&mut outline, contour_start.take(), false);
                contour_start = Some(outline.points.len());
                outline.push(to_point(p0), PointFlags::on_curve());
            }
            PathEl::LineTo(p0) => {
                contour_start.get_or_insert(outline.points.len());
                outline.push(to_point(p0), PointFlags::on_curve());
            }
            PathEl::QuadTo(p0, p1) => {
                contour_start.get_or_insert(outline.points.len());
                outline.push(to_point(p0), PointFlags::off_curve_quad());
                outline.push(to_point(p1), PointFlags::on_curve());
            }
            PathEl::CurveTo(p0, p1, p2) => {
                contour_start.get_or_insert(outline.points.len());
                outline.push(to_point(p0), PointFlags::off_curve_cubic());
                outline.push(to_point(p1), PointFlags::off_curve_cubic());
                outline.push(to_point(p2), PointFlags::on_curve());
            }
            PathEl::ClosePath => finish_contour(&mut outline, contour_start.take(), true),
        }
    }
    finish_contour(&mut outline, contour_start.take(), false);
    outline.as_outline_ref()?;
    Ok(outline)
}

fn to_point(p: kurbo::Point) -> Point<i32> {
    Point::new(p.x.round() as i32, p.y.round() as i32)
}

fn finish_contour(outline: &mut OutlineBuf, start: Option<usize>, is_closed: bool) {
    let Some(start) = start else {
        return;
    };
    let len = outline.points.len();
    // Remove last point in closed path if it has the same coords as the
    // move point
    if is_closed
        && len > start + 1
        && outline.points[len - 1] == outline.points[start]
        && outline.flags[len - 1].is_on_curve()
    {
        outline.points.pop();
        outline.flags.pop();
    }
    outline.close_contour();
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn points_and_kinds(outline: &OutlineBuf) -> Vec<(i32, i32, char)> {
        outline
            .points
            .iter()
            .zip(&outline.flags)
            .map(|(point, flags)| {
                let kind = if flags.is_off_curve_quad() {
                    'q'
                } else if flags.is_off_curve_cubic() {
                    'c'
                } else {
                    'o'
                };
                (point.x, point.y, kind)
            })
            .collect()
    }

    #[test]
    fn closed_lines() {
        let mut path = BezPath::new();
        path.move_to((0.0, 0.0));
        path.line_to((0.0, 10.0));
        path.line_to((2.0, 10.0));
        path.line_to((2.0, 0.0));
        path.line_to((0.0, 0.0));
        path.close_path();
        let outline = outline_from_bez_path(&path, 1000).unwrap();
        assert_eq!(
            points_and_kinds(&outline),
            [(0, 0, 'o'), (0, 10, 'o'), (2, 10, 'o'), (2, 0, 'o')]
        );
        assert_eq!(outline.contour_ends, [3]);
    }

    #[test]
    fn curves_and_rounding() {
        let mut path = BezPath::new();
        path.move_to((0.4, 0.0));
        path.quad_to((100.0, 0.0), (100.0, 99.6));
        path.curve_to((100.0, 200.0), (0.0, 200.0), (0.0, 100.0));
        path.close_path();
        path.move_to((300.0, 300.0));
        path.line_to((310.0, 300.0));
        path.line_to((300.0, 300.0));
        let outline = outline_from_bez_path(&path, 1000).unwrap();
        assert_eq!(
            points_and_kinds(&outline),
            [
                (0, 0, 'o'),
                (100, 0, 'q'),
                (100, 100, 'o'),
                (100, 200, 'c'),
                (0, 200, 'c'),
                (0, 100, 'o'),
                // Open subpaths keep their final point
                (300, 300, 'o'),
                (310, 300, 'o'),
                (300, 300, 'o'),
            ]
        );
        assert_eq!(outline.contour_ends, [5, 8]);
    }

    #[test]
    fn empty_path() {
        let outline = outline_from_bez_path(&BezPath::new(), 1000).unwrap();
        assert!(outline.points.is_empty());
        assert!(outline.contour_ends.is_empty());
    }

    #[test]
    fn invalid_units_per_em() {
        assert_eq!(
            outline_from_bez_path(&BezPath::new(), 0).unwrap_err(),
            OutlineError::InvalidUnitsPerEm
        );
    }
}
