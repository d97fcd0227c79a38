//! Outline representation and point classification for hinting.
//!
//! Points are stored in a flat buffer. Each contour is a range of that
//! buffer and each point carries the indices of its successor and
//! predecessor so that contours can be walked as cycles.

use super::{
    angle::Angle, collections::ScratchVec, config::HintConfig, error::OutlineError,
    metrics::derived_constant, source::OutlineRef,
};
use core::ops::Range;

/// Hinting directions.
///
/// The values are such that `dir1 + dir2 == 0` when the directions are
/// opposite.
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(i8)]
pub enum Direction {
    #[default]
    None = 4,
    Right = 1,
    Left = -1,
    Up = 2,
    Down = -2,
}

impl Direction {
    /// Computes a direction from a vector using the default dominance
    /// ratio.
    pub fn new(dx: i32, dy: i32) -> Self {
        Self::with_ratio(dx, dy, HintConfig::LATIN.direction_ratio)
    }

    /// Computes a direction from a vector.
    ///
    /// The vector only has a direction if its longer arm is more than
    /// `ratio` times its shorter arm. The zero vector has no direction.
    pub fn with_ratio(dx: i32, dy: i32, ratio: i32) -> Self {
        let (dir, long_arm, short_arm) = if dy >= dx {
            if dy >= -dx {
                (Direction::Up, dy, dx)
            } else {
                (Direction::Left, -dx, dy)
            }
        } else if dy >= -dx {
            (Direction::Right, dx, dy)
        } else {
            (Direction::Down, -dy, dx)
        };
        // Return no direction if arm lengths do not differ enough.
        if long_arm as i64 <= ratio as i64 * (short_arm as i64).abs() {
            Direction::None
        } else {
            dir
        }
    }

    pub fn is_opposite(self, other: Self) -> bool {
        self as i8 + other as i8 == 0
    }

    pub fn is_same_axis(self, other: Self) -> bool {
        (self as i8).abs() == (other as i8).abs()
    }
}

/// Winding order of the outer contours of a glyph.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Orientation {
    Clockwise,
    CounterClockwise,
}

/// Outline point with a lot of context for hinting.
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
pub struct Point {
    /// Describes the type and hinting state of the point.
    pub flags: u8,
    /// X coordinate in font units.
    pub fx: i32,
    /// Y coordinate in font units.
    pub fy: i32,
    /// Direction of inwards vector.
    pub in_dir: Direction,
    /// Direction of outwards vector.
    pub out_dir: Direction,
    /// Coordinate along the axis being analyzed.
    pub u: i32,
    /// Coordinate perpendicular to the axis being analyzed.
    pub v: i32,
    /// Index of the next point in the contour.
    pub next_ix: u16,
    /// Index of the previous point in the contour.
    pub prev_ix: u16,
}

/// Point type flags.
impl Point {
    /// Quadratic control point.
    pub const QUAD: u8 = 1 << 0;
    /// Cubic control point.
    pub const CUBIC: u8 = 1 << 1;
    /// Any control point.
    pub const CONTROL: u8 = Self::QUAD | Self::CUBIC;
    /// Candidate for weak interpolation.
    pub const WEAK_INTERPOLATION: u8 = 1 << 4;
    /// Distance to next point is very small.
    pub const NEAR: u8 = 1 << 5;
    /// Curvature changes sign around this point.
    pub const INFLECTION: u8 = 1 << 6;
}

impl Point {
    pub fn is_on_curve(&self) -> bool {
        self.flags & Self::CONTROL == 0
    }

    pub fn is_control(&self) -> bool {
        !self.is_on_curve()
    }

    pub fn is_weak(&self) -> bool {
        self.flags & Self::WEAK_INTERPOLATION != 0
    }

    pub fn is_inflection(&self) -> bool {
        self.flags & Self::INFLECTION != 0
    }

    /// Returns the index of the next point in the contour.
    pub fn next(&self) -> usize {
        self.next_ix as usize
    }

    /// Returns the index of the previous point in the contour.
    pub fn prev(&self) -> usize {
        self.prev_ix as usize
    }
}

/// A closed contour as a range of the outline point buffer.
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
pub struct Contour {
    first_ix: u16,
    last_ix: u16,
}

impl Contour {
    pub fn first(self) -> usize {
        self.first_ix as usize
    }

    pub fn last(self) -> usize {
        self.last_ix as usize
    }

    pub fn len(self) -> usize {
        self.last() - self.first() + 1
    }

    /// Returns true if the contour has fewer than two points and so cannot
    /// be walked as a cycle.
    pub fn is_degenerate(self) -> bool {
        self.len() < 2
    }

    pub fn range(self) -> Range<usize> {
        self.first()..self.last() + 1
    }

    /// Returns the index of the point following `ix`, wrapping around.
    pub fn next(self, ix: usize) -> usize {
        if ix >= self.last() {
            self.first()
        } else {
            ix + 1
        }
    }

    /// Returns the index of the point preceding `ix`, wrapping around.
    pub fn prev(self, ix: usize) -> usize {
        if ix <= self.first() {
            self.last()
        } else {
            ix - 1
        }
    }
}

/// Point graph for a single glyph.
///
/// The buffers are reused when the outline is refilled.
#[derive(Clone, Default, Debug)]
pub struct Outline {
    pub units_per_em: i32,
    pub orientation: Option<Orientation>,
    pub points: ScratchVec<Point>,
    pub contours: ScratchVec<Contour>,
}

impl Outline {
    /// Fills the outline from the given source and classifies all points.
    pub fn fill(&mut self, source: &OutlineRef, config: &HintConfig) -> Result<(), OutlineError> {
        self.clear();
        self.units_per_em = source.units_per_em() as i32;
        let points = source.points();
        let flags = source.flags();
        if !self.points.try_reserve(points.len())
            || !self.contours.try_reserve(source.contour_ends().len())
        {
            return Err(OutlineError::InsufficientMemory);
        }
        for (point, point_flags) in points.iter().zip(flags) {
            let flags = if point_flags.is_off_curve_quad() {
                Point::QUAD
            } else if point_flags.is_off_curve_cubic() {
                Point::CUBIC
            } else {
                0
            };
            self.points.push(Point {
                flags,
                fx: point.x,
                fy: point.y,
                ..Default::default()
            });
        }
        for range in source.contours() {
            let contour = Contour {
                first_ix: range.start as u16,
                last_ix: (range.end - 1) as u16,
            };
            for ix in contour.range() {
                let point = &mut self.points[ix];
                point.next_ix = contour.next(ix) as u16;
                point.prev_ix = contour.prev(ix) as u16;
            }
            self.contours.push(contour);
        }
        self.orientation = self.compute_orientation();
        let near_limit = derived_constant(self.units_per_em, config.near_limit);
        self.mark_near_points(near_limit);
        self.compute_directions(config.direction_ratio);
        self.compute_weak_points(config.weak_angle_threshold);
        log::trace!(
            "filled outline with {} points in {} contours, orientation {:?}",
            self.points.len(),
            self.contours.len(),
            self.orientation
        );
        Ok(())
    }

    pub fn clear(&mut self) {
        self.units_per_em = 0;
        self.orientation = None;
        self.points.clear();
        self.contours.clear();
    }

    /// Returns the points of the given contour.
    pub fn contour_points(&self, contour: Contour) -> &[Point] {
        &self.points[contour.range()]
    }
}

impl Outline {
    /// Determines the winding order from the signed area of the polygon
    /// formed by all points.
    fn compute_orientation(&self) -> Option<Orientation> {
        let points = self.points.as_slice();
        let mut area = 0i64;
        for contour in self.contours.iter() {
            for point in &points[contour.range()] {
                let prev = &points[point.prev()];
                area += (point.fy as i64 - prev.fy as i64) * (point.fx as i64 + prev.fx as i64);
            }
        }
        match area {
            0 => None,
            area if area > 0 => Some(Orientation::CounterClockwise),
            _ => Some(Orientation::Clockwise),
        }
    }

    /// Computes the near flag for each point.
    fn mark_near_points(&mut self, near_limit: i32) {
        let points = self.points.as_mut_slice();
        for contour in self.contours.iter() {
            if contour.is_degenerate() {
                continue;
            }
            for ix in contour.range() {
                let point = points[ix];
                let next = points[point.next()];
                let dist = (next.fx - point.fx).abs() + (next.fy - point.fy).abs();
                if dist < near_limit {
                    points[ix].flags |= Point::NEAR;
                }
            }
        }
    }

    /// Computes directions of in and out vectors from the immediate
    /// neighbors of each point.
    fn compute_directions(&mut self, ratio: i32) {
        let points = self.points.as_mut_slice();
        for contour in self.contours.iter() {
            if contour.is_degenerate() {
                log::trace!("skipping degenerate contour at {}", contour.first());
                continue;
            }
            for ix in contour.range() {
                let point = points[ix];
                let prev = points[point.prev()];
                let next = points[point.next()];
                let point = &mut points[ix];
                point.in_dir = Direction::with_ratio(point.fx - prev.fx, point.fy - prev.fy, ratio);
                point.out_dir = Direction::with_ratio(next.fx - point.fx, next.fy - point.fy, ratio);
            }
        }
    }

    /// Marks points that should be interpolated rather than hinted.
    ///
    /// Any previous weak classification is discarded so this can be rerun
    /// on an unchanged outline with identical results.
    pub fn compute_weak_points(&mut self, angle_threshold: i32) {
        let points = self.points.as_mut_slice();
        for contour in self.contours.iter() {
            for ix in contour.range() {
                points[ix].flags &= !Point::WEAK_INTERPOLATION;
            }
            if contour.is_degenerate() {
                continue;
            }
            for ix in contour.range() {
                let point = points[ix];
                let make_weak = if point.is_control() {
                    // Control points are always weak
                    true
                } else if point.out_dir == point.in_dir {
                    if point.out_dir != Direction::None {
                        // Point lies on a vertical or horizontal segment but
                        // not at start or end
                        true
                    } else {
                        let prev = points[point.prev()];
                        let next = points[point.next()];
                        let angle_in = Angle::from_vector(point.fx - prev.fx, point.fy - prev.fy);
                        let angle_out = Angle::from_vector(next.fx - point.fx, next.fy - point.fy);
                        // Nearly collinear diagonal
                        angle_in.diff(angle_out).abs() < angle_threshold
                    }
                } else {
                    // Point forms a "spike"
                    point.in_dir.is_opposite(point.out_dir)
                };
                if make_weak {
                    points[ix].flags |= Point::WEAK_INTERPOLATION;
                }
            }
        }
    }
}
