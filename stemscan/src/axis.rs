//! Segments for one dimension of an outline.

use super::{
    collections::ScratchVec,
    outline::{Direction, Orientation, Outline, Point},
};

/// Either horizontal or vertical.
///
/// A type alias because it's used as an index.
pub type Dimension = usize;

/// Segments for one dimension of an outline.
#[derive(Clone, Default, Debug)]
pub struct Axis {
    /// Either horizontal or vertical.
    pub dim: Dimension,
    /// Depends on dimension and outline orientation.
    pub major_dir: Direction,
    /// Collection of segments for the axis.
    pub segments: ScratchVec<Segment>,
}

impl Axis {
    /// X coordinates, i.e. vertical segments.
    pub const HORIZONTAL: Dimension = 0;
    /// Y coordinates, i.e. horizontal segments.
    pub const VERTICAL: Dimension = 1;
}

impl Axis {
    pub fn new(dim: Dimension, orientation: Option<Orientation>) -> Self {
        let mut axis = Self::default();
        axis.reset(dim, orientation);
        axis
    }

    /// Prepares the axis for a new outline, keeping the segment storage.
    ///
    /// The major direction is the one in which an outer contour enters ink
    /// when scanning the axis: left to right for the horizontal axis and
    /// top to bottom for the vertical axis. Outlines without an orientation
    /// are treated as clockwise.
    pub fn reset(&mut self, dim: Dimension, orientation: Option<Orientation>) {
        self.dim = dim;
        self.major_dir = match (dim, orientation) {
            (Self::HORIZONTAL, Some(Orientation::CounterClockwise)) => Direction::Down,
            (Self::VERTICAL, Some(Orientation::CounterClockwise)) => Direction::Left,
            (Self::HORIZONTAL, _) => Direction::Up,
            (Self::VERTICAL, _) => Direction::Right,
            _ => Direction::None,
        };
        self.segments.clear();
    }

    /// Returns an iterator over the index pairs of mutually linked
    /// segments, each pair reported once with the lower index first.
    pub fn stems(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let segments = self.segments.as_slice();
        segments
            .iter()
            .enumerate()
            .filter_map(move |(ix, segment)| {
                let link_ix = segment.link_ix? as usize;
                (link_ix > ix && segments.get(link_ix)?.link_ix == Some(ix as u16))
                    .then_some((ix, link_ix))
            })
    }
}

/// Sequence of points with a single dominant direction.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    /// Flags describing the properties of the segment.
    pub flags: u8,
    /// Dominant direction of the segment.
    pub dir: Direction,
    /// Position of the segment.
    pub pos: i32,
    /// Deviation from segment position.
    pub delta: i32,
    /// Minimum coordinate of the segment.
    pub min_coord: i32,
    /// Maximum coordinate of the segment.
    pub max_coord: i32,
    /// Used during stem matching.
    pub score: i32,
    /// Used during stem matching.
    pub len: i32,
    /// Index of best candidate for a stem link.
    pub link_ix: Option<u16>,
    /// Index of the segment this one is a serif of.
    pub serif_ix: Option<u16>,
    /// Number of segments that chose this one as their best candidate.
    pub num_linked: u16,
    /// Index of first point in the outline.
    pub first_ix: u16,
    /// Index of last point in the outline.
    pub last_ix: u16,
}

/// Segment flags.
impl Segment {
    pub const NORMAL: u8 = 0;
    pub const ROUND: u8 = 1;
}

impl Segment {
    pub fn first(&self) -> usize {
        self.first_ix as usize
    }

    pub fn first_point<'a>(&self, points: &'a [Point]) -> &'a Point {
        &points[self.first()]
    }

    pub fn last(&self) -> usize {
        self.last_ix as usize
    }

    pub fn last_point<'a>(&self, points: &'a [Point]) -> &'a Point {
        &points[self.last()]
    }

    pub fn is_round(&self) -> bool {
        self.flags & Self::ROUND != 0
    }

    /// Returns true for a single point segment that only carries metric
    /// information.
    pub fn is_fake(&self) -> bool {
        self.first_ix == self.last_ix
    }

    pub fn link<'a>(&self, segments: &'a [Segment]) -> Option<&'a Segment> {
        segments.get(self.link_ix.map(|ix| ix as usize)?)
    }

    pub fn serif<'a>(&self, segments: &'a [Segment]) -> Option<&'a Segment> {
        segments.get(self.serif_ix.map(|ix| ix as usize)?)
    }

    /// Returns an iterator over the indices of the points of the segment,
    /// following successors from the first point to the last.
    pub fn points<'a>(&self, outline: &'a Outline) -> impl Iterator<Item = usize> + 'a {
        let points = outline.points.as_slice();
        let last_ix = self.last();
        // A segment never covers more than one lap of its contour
        let mut remaining = points.len();
        let mut next_ix = Some(self.first());
        core::iter::from_fn(move || {
            let ix = next_ix?;
            remaining = remaining.checked_sub(1)?;
            next_ix = (ix != last_ix)
                .then(|| points.get(ix).map(|point| point.next()))
                .flatten();
            Some(ix)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn major_directions() {
        use Direction::{Down, Left, Right, Up};
        let cases = [
            (Axis::HORIZONTAL, Some(Orientation::Clockwise), Up),
            (Axis::HORIZONTAL, Some(Orientation::CounterClockwise), Down),
            (Axis::HORIZONTAL, None, Up),
            (Axis::VERTICAL, Some(Orientation::Clockwise), Right),
            (Axis::VERTICAL, Some(Orientation::CounterClockwise), Left),
            (Axis::VERTICAL, None, Right),
        ];
        for (dim, orientation, expected) in cases {
            assert_eq!(Axis::new(dim, orientation).major_dir, expected);
        }
    }

    #[test]
    fn reset_clears_segments() {
        let mut axis = Axis::new(Axis::HORIZONTAL, None);
        axis.segments.push(Segment::default());
        axis.reset(Axis::VERTICAL, Some(Orientation::Clockwise));
        assert!(axis.segments.is_empty());
        assert_eq!(axis.dim, Axis::VERTICAL);
    }

    #[test]
    fn stems_reports_mutual_pairs_once() {
        let mut axis = Axis::new(Axis::HORIZONTAL, None);
        let linked = |link_ix| Segment {
            link_ix,
            ..Default::default()
        };
        axis.segments.push(linked(Some(2)));
        axis.segments.push(linked(Some(2)));
        axis.segments.push(linked(Some(0)));
        axis.segments.push(linked(None));
        assert_eq!(axis.stems().collect::<Vec<_>>(), [(0, 2)]);
    }
}
