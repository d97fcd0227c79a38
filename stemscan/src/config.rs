//! Tunable constants for the analysis stages.

/// Heuristic constants that drive point classification, segment linking
/// and width sampling.
///
/// Lengths are expressed for an outline with 2048 units per em and are
/// rescaled to the actual units per em of each outline. The defaults are
/// the values used by the Latin script; other values are accepted but are
/// not guaranteed to produce useful hints.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HintConfig {
    /// A vector only has a direction if its longer arm exceeds this many
    /// times its shorter arm.
    pub direction_ratio: i32,
    /// Points whose incoming and outgoing angles differ by less than this
    /// many [`Angle`](crate::Angle) units are weak.
    pub weak_angle_threshold: i32,
    /// Points closer than this to their successor are marked as near.
    pub near_limit: i32,
    /// Opposing segments must overlap by more than this length to be
    /// linked.
    pub link_min_overlap: i32,
    /// Weight of the overlap length in the link score `dist + K / len`.
    pub link_length_score: i32,
    /// Segment detection gives up on a glyph that produces more segments
    /// than this on one axis.
    pub max_segments: usize,
    /// Maximum number of width samples recorded per axis.
    pub max_widths: usize,
}

impl HintConfig {
    /// Constants for the Latin script.
    pub const LATIN: Self = Self {
        direction_ratio: 14,
        weak_angle_threshold: 2,
        near_limit: 20,
        link_min_overlap: 8,
        link_length_score: 6000,
        max_segments: 1000,
        max_widths: crate::metrics::MAX_WIDTHS,
    };
}

impl Default for HintConfig {
    fn default() -> Self {
        Self::LATIN
    }
}
