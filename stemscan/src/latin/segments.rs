//! Latin segment computation and linking.
//!
//! A segment is a series of consecutive points that are appropriately
//! aligned along a coordinate axis.
//!
//! The linking stage associates pairs of segments to form stems and
//! identifies serifs with a post-process pass.

use super::super::{
    axis::{Axis, Dimension, Segment},
    config::HintConfig,
    metrics::derived_constant,
    outline::Outline,
};

// Bound for score values.
const MAX_SCORE: i32 = 32000;

/// Computes segments for the Latin writing system.
///
/// Returns false if the outline produced too many segments, in which case
/// the axis is left without segments.
pub(crate) fn compute_segments(outline: &mut Outline, axis: &mut Axis, config: &HintConfig) -> bool {
    assign_point_uvs(outline, axis.dim);
    build_segments(outline, axis, config.max_segments)
}

/// Link segments to form stems and serifs.
pub(crate) fn link_segments(units_per_em: i32, axis: &mut Axis, config: &HintConfig) {
    // Heuristic value to set up a minimum for overlapping
    let len_threshold = derived_constant(units_per_em, config.link_min_overlap).max(1);
    // Heuristic value to weight lengths
    let len_score = derived_constant(units_per_em, config.link_length_score);
    // Vertical positions grow upward so the scan order is inverted
    let is_inverted = axis.dim == Axis::VERTICAL;
    let major_dir = axis.major_dir;
    let segments = axis.segments.as_mut_slice();
    for segment in segments.iter_mut() {
        segment.score = MAX_SCORE;
        segment.len = 0;
        segment.link_ix = None;
        segment.serif_ix = None;
        segment.num_linked = 0;
    }
    // Compare each segment to the others.. O(n^2)
    for ix1 in 0..segments.len() {
        let seg1 = segments[ix1];
        if seg1.dir != major_dir || seg1.is_fake() {
            continue;
        }
        // Search for stems having opposite directions with seg1 on the
        // near side of seg2
        for ix2 in 0..segments.len() {
            let seg1 = segments[ix1];
            let seg2 = segments[ix2];
            if seg2.is_fake() || !seg1.dir.is_opposite(seg2.dir) {
                continue;
            }
            let dist = if is_inverted {
                seg1.pos - seg2.pos
            } else {
                seg2.pos - seg1.pos
            };
            if dist < 0 {
                continue;
            }
            // Note: the min/max functions chosen here are intentional
            let min = seg1.min_coord.max(seg2.min_coord);
            let max = seg1.max_coord.min(seg2.max_coord);
            // How much they overlap
            let len = max - min;
            if len <= len_threshold {
                continue;
            }
            // The less overlapping along the main axis, the worse it is
            let score = dist + len_score / len;
            if score < seg1.score {
                let seg1 = &mut segments[ix1];
                seg1.score = score;
                seg1.len = len;
                seg1.link_ix = Some(ix2 as u16);
            }
            if score < seg2.score {
                let seg2 = &mut segments[ix2];
                seg2.score = score;
                seg2.len = len;
                seg2.link_ix = Some(ix1 as u16);
            }
        }
    }
    // Now compute "serif" segments
    for ix1 in 0..segments.len() {
        let Some(ix2) = segments[ix1].link_ix else {
            continue;
        };
        let seg2 = &mut segments[ix2 as usize];
        seg2.num_linked = seg2.num_linked.saturating_add(1);
        if seg2.link_ix != Some(ix1 as u16) {
            log::trace!("segment {ix1} demoted to serif of {ix2}");
            let seg1 = &mut segments[ix1];
            seg1.link_ix = None;
            seg1.serif_ix = Some(ix2);
        }
    }
}

/// Set the (u, v) values to font unit coords for each point depending
/// on the axis dimension.
pub(crate) fn assign_point_uvs(outline: &mut Outline, dim: Dimension) {
    if dim == Axis::HORIZONTAL {
        for point in outline.points.iter_mut() {
            point.u = point.fx;
            point.v = point.fy;
        }
    } else {
        for point in outline.points.iter_mut() {
            point.u = point.fy;
            point.v = point.fx;
        }
    }
}

/// Build the set of segments for each contour.
fn build_segments(outline: &Outline, axis: &mut Axis, max_segments: usize) -> bool {
    axis.segments.clear();
    let major_dir = axis.major_dir;
    let points = outline.points.as_slice();
    for contour in outline.contours.iter() {
        if contour.is_degenerate() {
            log::trace!("no segments for degenerate contour at {}", contour.first());
            continue;
        }
        let mut point_ix = contour.first();
        let mut last_ix = contour.prev(point_ix);
        // Check if we're starting on an edge and if so, find
        // the starting point
        if points[point_ix].out_dir.is_same_axis(major_dir)
            && points[last_ix].out_dir.is_same_axis(major_dir)
        {
            last_ix = point_ix;
            loop {
                point_ix = contour.prev(point_ix);
                if !points[point_ix].out_dir.is_same_axis(major_dir) {
                    point_ix = contour.next(point_ix);
                    break;
                }
                if point_ix == last_ix {
                    break;
                }
            }
        }
        last_ix = point_ix;
        let mut segment_dir = major_dir;
        let mut min_pos = MAX_SCORE;
        let mut max_pos = -MAX_SCORE;
        let mut on_edge = false;
        let mut passed = false;
        loop {
            if on_edge {
                let point = &points[point_ix];
                min_pos = min_pos.min(point.u);
                max_pos = max_pos.max(point.u);
                if point.out_dir != segment_dir || point_ix == last_ix {
                    // Leaving an edge so finish the current segment
                    if let Some(segment) = axis.segments.last_mut() {
                        let first = segment.first_point(points);
                        segment.last_ix = point_ix as u16;
                        segment.pos = (min_pos + max_pos) >> 1;
                        segment.delta = (max_pos - min_pos) >> 1;
                        segment.min_coord = first.v.min(point.v);
                        segment.max_coord = first.v.max(point.v);
                        if first.is_control() || point.is_control() {
                            segment.flags |= Segment::ROUND;
                        }
                    }
                    on_edge = false;
                }
            }
            if point_ix == last_ix {
                if passed {
                    break;
                }
                passed = true;
            }
            let point = &points[point_ix];
            if !on_edge && point.out_dir.is_same_axis(major_dir) {
                if axis.segments.len() >= max_segments {
                    log::debug!(
                        "segment limit of {max_segments} exceeded on axis {}",
                        axis.dim
                    );
                    axis.segments.clear();
                    return false;
                }
                segment_dir = point.out_dir;
                axis.segments.push(Segment {
                    dir: segment_dir,
                    first_ix: point_ix as u16,
                    last_ix: point_ix as u16,
                    score: MAX_SCORE,
                    ..Default::default()
                });
                min_pos = point.u;
                max_pos = point.u;
                on_edge = true;
            }
            point_ix = contour.next(point_ix);
        }
    }
    true
}
