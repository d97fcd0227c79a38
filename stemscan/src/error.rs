//! Errors reported for malformed outlines.

use core::fmt;

/// Errors that may occur when loading an outline for analysis.
///
/// These all indicate a contract violation by whatever produced the
/// outline. Geometric oddities such as degenerate contours or coincident
/// points are not errors; they are skipped by the analysis stages.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum OutlineError {
    /// The number of point flags differs from the number of points.
    FlagCountMismatch { points: usize, flags: usize },
    /// A contour end index was not greater than the previous one.
    ContourEndOutOfOrder { contour: usize, end: u16 },
    /// The contour end indices do not cover exactly the points of the
    /// outline.
    PointCountMismatch { points: usize, contour_points: usize },
    /// The declared number of contours differs from the number of contour
    /// end markers.
    ContourCountMismatch { declared: usize, found: usize },
    /// Units per em must be non-zero.
    InvalidUnitsPerEm,
    /// Point indices are limited to 16 bits.
    TooManyPoints(usize),
    /// Exceeded memory limits when growing scratch buffers.
    InsufficientMemory,
}

impl fmt::Display for OutlineError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::FlagCountMismatch { points, flags } => {
                write!(f, "outline has {points} points but {flags} point flags")
            }
            Self::ContourEndOutOfOrder { contour, end } => {
                write!(f, "end point {end} of contour {contour} is out of order")
            }
            Self::PointCountMismatch {
                points,
                contour_points,
            } => write!(
                f,
                "contours cover {contour_points} points but the outline has {points}"
            ),
            Self::ContourCountMismatch { declared, found } => write!(
                f,
                "expected {declared} contours but found {found} contour end markers"
            ),
            Self::InvalidUnitsPerEm => write!(f, "units per em must be non-zero"),
            Self::TooManyPoints(count) => write!(
                f,
                "outline has {count} points, more than the supported maximum of {}",
                u16::MAX
            ),
            Self::InsufficientMemory => write!(f, "exceeded memory limits"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for OutlineError {}
