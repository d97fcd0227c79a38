//! Stem width metrics and scaling.

use super::{axis::Dimension, collections::ScratchVec};
use raw::types::Fixed;

/// Maximum number of width samples per axis.
pub const MAX_WIDTHS: usize = 16;

/// Ordered stem widths in font units, in the order they were sampled.
pub type UnscaledWidths = ScratchVec<i32>;

/// Thresholds derived from the sampled widths of one axis.
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WidthMetrics {
    /// Used for creating edges.
    pub edge_distance_threshold: i32,
    /// Default stem thickness.
    pub standard_width: i32,
}

/// Sampled widths and derived metrics for one axis.
#[derive(Clone, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisWidths {
    pub widths: UnscaledWidths,
    pub metrics: WidthMetrics,
}

impl AxisWidths {
    /// Sets the derived metrics from the first sampled width, falling back
    /// to a width derived from units per em when nothing was sampled.
    pub(crate) fn update_metrics(&mut self, units_per_em: i32) {
        let standard_width = self
            .widths
            .first()
            .copied()
            .unwrap_or_else(|| derived_constant(units_per_em, 50));
        // Heuristic value of 20% of the standard width
        self.metrics.edge_distance_threshold = standard_width / 5;
        self.metrics.standard_width = standard_width;
    }

    /// Scales the widths for the given dimension.
    pub fn scale(&self, scale: &Scale, dim: Dimension) -> ScaledAxisWidths {
        let (scale, delta) = scale.for_dim(dim);
        let widths = self
            .widths
            .iter()
            .map(|width| {
                let scaled = fixed_mul(*width, scale);
                ScaledWidth {
                    scaled,
                    fitted: pix_round(scaled),
                }
            })
            .collect();
        ScaledAxisWidths {
            scale,
            delta,
            widths,
            edge_distance_threshold: fixed_mul(self.metrics.edge_distance_threshold, scale),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScaledWidth {
    /// Width after applying scale.
    pub scaled: i32,
    /// Grid-fitted width.
    pub fitted: i32,
}

/// Widths of one axis scaled to a particular size.
#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct ScaledAxisWidths {
    /// Font unit to 26.6 scale in the axis direction.
    pub scale: i32,
    /// 1/64 pixel delta in the axis direction.
    pub delta: i32,
    pub widths: ScratchVec<ScaledWidth>,
    /// Edge distance threshold in 26.6.
    pub edge_distance_threshold: i32,
}

/// Scaling parameters supplied alongside an outline.
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
pub struct Scale {
    /// Font unit to 26.6 scale in the X direction.
    pub x_scale: i32,
    /// Font unit to 26.6 scale in the Y direction.
    pub y_scale: i32,
    /// In 1/64 device pixels.
    pub x_delta: i32,
    /// In 1/64 device pixels.
    pub y_delta: i32,
    /// From the source font.
    pub units_per_em: i32,
}

impl Scale {
    /// Creates uniform scaling parameters for a size in pixels per em.
    pub fn new(size: f32, units_per_em: i32) -> Self {
        let scale = if units_per_em == 0 {
            0
        } else {
            fixed_div((size * 64.0) as i32, units_per_em)
        };
        Self {
            x_scale: scale,
            y_scale: scale,
            x_delta: 0,
            y_delta: 0,
            units_per_em,
        }
    }

    /// Returns the scale and delta for the given dimension.
    pub fn for_dim(&self, dim: Dimension) -> (i32, i32) {
        if dim == crate::Axis::HORIZONTAL {
            (self.x_scale, self.x_delta)
        } else {
            (self.y_scale, self.y_delta)
        }
    }
}

/// All constants are defined based on a UPEM of 2048.
pub(crate) fn derived_constant(units_per_em: i32, value: i32) -> i32 {
    value * units_per_em / 2048
}

// Fixed point helpers
//
// The autohinter does lots of bit fiddling with fixed point values so we
// work with raw bits rather than the strongly typed variants.

pub(crate) fn fixed_mul(a: i32, b: i32) -> i32 {
    (Fixed::from_bits(a) * Fixed::from_bits(b)).to_bits()
}

pub(crate) fn fixed_div(a: i32, b: i32) -> i32 {
    (Fixed::from_bits(a) / Fixed::from_bits(b)).to_bits()
}

pub(crate) fn pix_round(a: i32) -> i32 {
    (a + 32) & !63
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Axis;

    #[test]
    fn derived_constants() {
        assert_eq!(derived_constant(2048, 50), 50);
        assert_eq!(derived_constant(1000, 50), 24);
        assert_eq!(derived_constant(1000, 8), 3);
        assert_eq!(derived_constant(1000, 6000), 2929);
    }

    #[test]
    fn fallback_metrics() {
        let mut widths = AxisWidths::default();
        widths.update_metrics(1000);
        assert_eq!(
            widths.metrics,
            WidthMetrics {
                edge_distance_threshold: 4,
                standard_width: 24,
            }
        );
        widths.widths.push(60);
        widths.widths.push(80);
        widths.update_metrics(1000);
        assert_eq!(
            widths.metrics,
            WidthMetrics {
                edge_distance_threshold: 12,
                standard_width: 60,
            }
        );
    }

    #[test]
    fn scaled_widths() {
        let scale = Scale::new(16.0, 1000);
        // 16px at 1000 upem is 1.024 in 16.16
        assert!((67100..67120).contains(&scale.x_scale));
        let widths = AxisWidths {
            widths: [60, 100].into_iter().collect(),
            metrics: WidthMetrics {
                edge_distance_threshold: 12,
                standard_width: 60,
            },
        };
        let scaled = widths.scale(&scale, Axis::HORIZONTAL);
        assert_eq!(
            scaled.widths.as_slice(),
            &[
                ScaledWidth {
                    scaled: 61,
                    fitted: 64
                },
                ScaledWidth {
                    scaled: 102,
                    fitted: 128
                },
            ]
        );
        assert_eq!(scaled.edge_distance_threshold, 12);
    }

    #[test]
    fn per_axis_scale() {
        let scale = Scale {
            x_scale: 1 << 16,
            y_scale: 2 << 16,
            x_delta: 5,
            y_delta: -3,
            units_per_em: 1000,
        };
        assert_eq!(scale.for_dim(Axis::HORIZONTAL), (1 << 16, 5));
        assert_eq!(scale.for_dim(Axis::VERTICAL), (2 << 16, -3));
    }
}
