//! Outlines as supplied by a font parser.

use super::error::OutlineError;
use alloc::vec::Vec;
use raw::{tables::glyf::PointFlags, types::Point};

/// Validated view of an outline in font units.
///
/// The layout matches a TrueType simple glyph: parallel arrays of points
/// and flags, and the index of the last point of each contour.
#[derive(Copy, Clone, Debug)]
pub struct OutlineRef<'a> {
    points: &'a [Point<i32>],
    flags: &'a [PointFlags],
    contour_ends: &'a [u16],
    units_per_em: u16,
}

impl<'a> OutlineRef<'a> {
    /// Creates a new outline, checking that the contour structure is
    /// consistent with the points.
    pub fn new(
        points: &'a [Point<i32>],
        flags: &'a [PointFlags],
        contour_ends: &'a [u16],
        units_per_em: u16,
    ) -> Result<Self, OutlineError> {
        if units_per_em == 0 {
            return Err(OutlineError::InvalidUnitsPerEm);
        }
        if points.len() > u16::MAX as usize {
            return Err(OutlineError::TooManyPoints(points.len()));
        }
        if flags.len() != points.len() {
            return Err(OutlineError::FlagCountMismatch {
                points: points.len(),
                flags: flags.len(),
            });
        }
        let mut prev_end: Option<u16> = None;
        for (contour, &end) in contour_ends.iter().enumerate() {
            if prev_end.is_some_and(|prev| end <= prev) {
                return Err(OutlineError::ContourEndOutOfOrder { contour, end });
            }
            prev_end = Some(end);
        }
        let contour_points = prev_end.map(|end| end as usize + 1).unwrap_or_default();
        if contour_points != points.len() {
            return Err(OutlineError::PointCountMismatch {
                points: points.len(),
                contour_points,
            });
        }
        Ok(Self {
            points,
            flags,
            contour_ends,
            units_per_em,
        })
    }

    pub fn points(&self) -> &'a [Point<i32>] {
        self.points
    }

    pub fn flags(&self) -> &'a [PointFlags] {
        self.flags
    }

    pub fn contour_ends(&self) -> &'a [u16] {
        self.contour_ends
    }

    pub fn units_per_em(&self) -> u16 {
        self.units_per_em
    }

    /// Returns an iterator over the point ranges of each contour.
    pub fn contours(&self) -> impl Iterator<Item = core::ops::Range<usize>> + 'a {
        let mut start = 0;
        self.contour_ends.iter().map(move |&end| {
            let end = end as usize + 1;
            let range = start..end;
            start = end;
            range
        })
    }
}

/// Owned outline storage with a simple builder interface.
#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct OutlineBuf {
    pub points: Vec<Point<i32>>,
    pub flags: Vec<PointFlags>,
    pub contour_ends: Vec<u16>,
    pub units_per_em: u16,
}

impl OutlineBuf {
    pub fn new(units_per_em: u16) -> Self {
        Self {
            units_per_em,
            ..Default::default()
        }
    }

    /// Creates an outline from per point "ends its contour" markers.
    ///
    /// `contour_count` is the number of contours declared by the producer
    /// and must match the number of markers that are set.
    pub fn from_end_markers(
        points: Vec<Point<i32>>,
        flags: Vec<PointFlags>,
        end_markers: &[bool],
        contour_count: usize,
        units_per_em: u16,
    ) -> Result<Self, OutlineError> {
        if end_markers.len() != points.len() {
            return Err(OutlineError::PointCountMismatch {
                points: points.len(),
                contour_points: end_markers.len(),
            });
        }
        if points.len() > u16::MAX as usize {
            return Err(OutlineError::TooManyPoints(points.len()));
        }
        let contour_ends = end_markers
            .iter()
            .enumerate()
            .filter_map(|(ix, is_end)| is_end.then_some(ix as u16))
            .collect::<Vec<_>>();
        if contour_ends.len() != contour_count {
            return Err(OutlineError::ContourCountMismatch {
                declared: contour_count,
                found: contour_ends.len(),
            });
        }
        let outline = Self {
            points,
            flags,
            contour_ends,
            units_per_em,
        };
        // Validate the remaining structure up front
        outline.as_outline_ref()?;
        Ok(outline)
    }

    pub fn clear(&mut self) {
        self.points.clear();
        self.flags.clear();
        self.contour_ends.clear();
    }

    /// Appends a point to the current contour.
    pub fn push(&mut self, point: Point<i32>, flags: PointFlags) {
        self.points.push(point);
        self.flags.push(flags);
    }

    /// Ends the current contour.
    ///
    /// Does nothing if no points were pushed since the previous contour
    /// was closed.
    pub fn close_contour(&mut self) {
        let start = self
            .contour_ends
            .last()
            .map(|end| *end as usize + 1)
            .unwrap_or_default();
        if self.points.len() > start {
            self.contour_ends.push((self.points.len() - 1) as u16);
        }
    }

    /// Returns a validated view of the outline.
    pub fn as_outline_ref(&self) -> Result<OutlineRef<'_>, OutlineError> {
        OutlineRef::new(
            &self.points,
            &self.flags,
            &self.contour_ends,
            self.units_per_em,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn on(x: i32, y: i32) -> (Point<i32>, PointFlags) {
        (Point::new(x, y), PointFlags::on_curve())
    }

    fn split(points: &[(Point<i32>, PointFlags)]) -> (Vec<Point<i32>>, Vec<PointFlags>) {
        points.iter().copied().unzip()
    }

    #[test]
    fn valid_outline() {
        let (points, flags) = split(&[on(0, 0), on(0, 10), on(2, 10), on(5, 5)]);
        let outline = OutlineRef::new(&points, &flags, &[2, 3], 1000).unwrap();
        assert_eq!(outline.contours().collect::<Vec<_>>(), [0..3, 3..4]);
        assert_eq!(outline.units_per_em(), 1000);
    }

    #[test]
    fn empty_outline() {
        let outline = OutlineRef::new(&[], &[], &[], 1000).unwrap();
        assert_eq!(outline.contours().count(), 0);
    }

    #[test]
    fn point_count_mismatch() {
        let (points, flags) = split(&[on(0, 0), on(0, 10), on(2, 10)]);
        assert_eq!(
            OutlineRef::new(&points, &flags, &[1], 1000).unwrap_err(),
            OutlineError::PointCountMismatch {
                points: 3,
                contour_points: 2
            }
        );
        assert_eq!(
            OutlineRef::new(&points, &flags, &[3], 1000).unwrap_err(),
            OutlineError::PointCountMismatch {
                points: 3,
                contour_points: 4
            }
        );
        assert!(matches!(
            OutlineRef::new(&points, &flags, &[], 1000),
            Err(OutlineError::PointCountMismatch { .. })
        ));
    }

    #[test]
    fn contour_ends_out_of_order() {
        let (points, flags) = split(&[on(0, 0), on(0, 10), on(2, 10)]);
        assert_eq!(
            OutlineRef::new(&points, &flags, &[1, 1, 2], 1000).unwrap_err(),
            OutlineError::ContourEndOutOfOrder { contour: 1, end: 1 }
        );
    }

    #[test]
    fn flag_count_mismatch() {
        let (points, _) = split(&[on(0, 0), on(0, 10)]);
        let flags = [PointFlags::on_curve()];
        assert_eq!(
            OutlineRef::new(&points, &flags, &[1], 1000).unwrap_err(),
            OutlineError::FlagCountMismatch {
                points: 2,
                flags: 1
            }
        );
    }

    #[test]
    fn zero_units_per_em() {
        assert_eq!(
            OutlineRef::new(&[], &[], &[], 0).unwrap_err(),
            OutlineError::InvalidUnitsPerEm
        );
    }

    #[test]
    fn end_markers() {
        let (points, flags) = split(&[on(0, 0), on(0, 10), on(2, 10), on(5, 5)]);
        let markers = [false, false, true, true];
        let outline =
            OutlineBuf::from_end_markers(points.clone(), flags.clone(), &markers, 2, 1000)
                .unwrap();
        assert_eq!(outline.contour_ends, [2, 3]);
        assert_eq!(
            OutlineBuf::from_end_markers(points.clone(), flags.clone(), &markers, 3, 1000)
                .unwrap_err(),
            OutlineError::ContourCountMismatch {
                declared: 3,
                found: 2
            }
        );
        // Trailing points without an end marker
        let markers = [false, true, false, false];
        assert!(matches!(
            OutlineBuf::from_end_markers(points, flags, &markers, 1, 1000),
            Err(OutlineError::PointCountMismatch { .. })
        ));
    }

    #[test]
    fn builder_skips_empty_contours() {
        let mut outline = OutlineBuf::new(1000);
        outline.close_contour();
        let (point, flags) = on(1, 1);
        outline.push(point, flags);
        outline.close_contour();
        outline.close_contour();
        assert_eq!(outline.contour_ends, [0]);
        assert!(outline.as_outline_ref().is_ok());
    }
}
