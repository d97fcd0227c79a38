//! Latin standard stem width computation.

use super::{
    super::{
        axis::Axis,
        config::HintConfig,
        metrics::{AxisWidths, MAX_WIDTHS},
        outline::Outline,
    },
    segments::{compute_segments, link_segments},
};

/// Compute all stem widths and initialize standard width and height from
/// the given reference outline.
///
/// The outline should already be filled. An empty outline produces the
/// fallback metrics for its units per em. Each axis is left holding the
/// linked segments of its own dimension.
pub(crate) fn compute_widths(
    outline: &mut Outline,
    axes: &mut [Axis; 2],
    config: &HintConfig,
) -> [AxisWidths; 2] {
    let mut result: [AxisWidths; 2] = Default::default();
    let max_widths = config.max_widths.min(MAX_WIDTHS);
    for (dim, axis) in axes.iter_mut().enumerate() {
        axis.reset(dim, outline.orientation);
    }
    if !outline.points.is_empty() {
        outline.compute_inflections();
        // Now process each dimension
        for (widths, axis) in result.iter_mut().zip(axes.iter_mut()) {
            if !compute_segments(outline, axis, config) {
                continue;
            }
            link_segments(outline.units_per_em, axis, config);
            let segments = axis.segments.as_slice();
            // Each stem is seen from both of its segments
            let mut touched = alloc::vec![false; segments.len()];
            for (segment_ix, segment) in segments.iter().enumerate() {
                if touched[segment_ix] {
                    continue;
                }
                let Some(link_ix) = segment.link_ix.map(|ix| ix as usize) else {
                    continue;
                };
                let Some(link) = segments.get(link_ix) else {
                    continue;
                };
                if link.link_ix != Some(segment_ix as u16) {
                    continue;
                }
                if widths.widths.len() >= max_widths {
                    break;
                }
                touched[segment_ix] = true;
                touched[link_ix] = true;
                widths.widths.push((segment.pos - link.pos).abs());
            }
        }
    }
    for (dim, widths) in result.iter_mut().enumerate() {
        // Now set derived values
        widths.update_metrics(outline.units_per_em);
        log::debug!(
            "axis {dim} widths {:?} standard width {}",
            widths.widths.as_slice(),
            widths.metrics.standard_width
        );
    }
    result
}
