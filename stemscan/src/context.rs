//! Reusable state for analyzing glyph outlines.

use super::{
    axis::{Axis, Dimension},
    config::HintConfig,
    error::OutlineError,
    latin,
    metrics::AxisWidths,
    outline::Outline,
    script::Script,
    source::OutlineRef,
};

/// Scratch buffers and settings for stem analysis.
///
/// A context can be reused for any number of glyphs. Buffers grow to fit
/// the largest glyph seen so far and are never shrunk. Independent contexts
/// share no state so each thread can own one.
#[derive(Clone, Debug)]
pub struct HintContext {
    script: Script,
    config: HintConfig,
    outline: Outline,
    axes: [Axis; 2],
}

impl HintContext {
    /// Creates a new context with the default constants of the given
    /// script.
    pub fn new(script: Script) -> Self {
        Self::with_config(script, script.config())
    }

    /// Creates a new context with custom constants.
    pub fn with_config(script: Script, config: HintConfig) -> Self {
        Self {
            script,
            config,
            outline: Outline::default(),
            axes: [
                Axis::new(Axis::HORIZONTAL, None),
                Axis::new(Axis::VERTICAL, None),
            ],
        }
    }

    pub fn script(&self) -> Script {
        self.script
    }

    pub fn config(&self) -> &HintConfig {
        &self.config
    }

    /// Classifies the points of the given outline and computes linked
    /// segments for both axes.
    ///
    /// Results remain available through [`outline`](Self::outline) and
    /// [`axis`](Self::axis) until the next call.
    pub fn analyze(&mut self, source: &OutlineRef) -> Result<(), OutlineError> {
        let config = self.config;
        self.outline.fill(source, &config)?;
        self.outline.compute_inflections();
        for (dim, axis) in self.axes.iter_mut().enumerate() {
            axis.reset(dim, self.outline.orientation);
            if latin::compute_segments(&mut self.outline, axis, &config) {
                latin::link_segments(self.outline.units_per_em, axis, &config);
            }
        }
        log::debug!(
            "analyzed {} points: {} horizontal and {} vertical segments",
            self.outline.points.len(),
            self.axes[Axis::HORIZONTAL].segments.len(),
            self.axes[Axis::VERTICAL].segments.len()
        );
        Ok(())
    }

    /// Returns the point graph of the most recently analyzed outline.
    pub fn outline(&self) -> &Outline {
        &self.outline
    }

    /// Returns the segments for the given dimension.
    ///
    /// # Panics
    ///
    /// Panics if `dim` is not [`Axis::HORIZONTAL`] or [`Axis::VERTICAL`].
    pub fn axis(&self, dim: Dimension) -> &Axis {
        &self.axes[dim]
    }

    pub fn axes(&self) -> &[Axis; 2] {
        &self.axes
    }

    /// Samples stem widths for both axes from the given reference outline.
    ///
    /// This reuses the analysis buffers so previous results from
    /// [`analyze`](Self::analyze) are replaced by those of the reference
    /// outline.
    pub fn sample_widths(&mut self, source: &OutlineRef) -> Result<[AxisWidths; 2], OutlineError> {
        let config = self.config;
        self.outline.fill(source, &config)?;
        Ok(latin::compute_widths(&mut self.outline, &mut self.axes, &config))
    }

    /// Computes the standard stem widths for a font.
    ///
    /// The reference glyph is the first of the script's standard
    /// characters for which `load` returns an outline with points. If
    /// there is none, the widths are empty and the metrics fall back to
    /// values derived from `units_per_em`.
    pub fn compute_widths<'a>(
        &mut self,
        units_per_em: u16,
        mut load: impl FnMut(char) -> Option<OutlineRef<'a>>,
    ) -> [AxisWidths; 2] {
        let config = self.config;
        let class = self.script.class();
        let mut is_filled = false;
        for &ch in class.std_chars {
            let Some(source) = load(ch) else {
                continue;
            };
            if source.points().is_empty() {
                continue;
            }
            match self.outline.fill(&source, &config) {
                Ok(()) => {
                    log::debug!("sampling {} widths from {ch:?}", class.name);
                    is_filled = true;
                    break;
                }
                Err(e) => log::warn!("failed to fill reference glyph {ch:?}: {e}"),
            }
        }
        if !is_filled {
            log::debug!("no {} reference glyph, using fallback widths", class.name);
            self.outline.clear();
            self.outline.units_per_em = units_per_em as i32;
        }
        latin::compute_widths(&mut self.outline, &mut self.axes, &config)
    }
}

impl Default for HintContext {
    fn default() -> Self {
        Self::new(Script::default())
    }
}

#[cfg(test)]
mod tests {
    use super::{
        super::{
            latin::segments::tests::BOX_O,
            outline::tests::{make_outline, RECTANGLE},
            Direction,
        },
        *,
    };
    use pretty_assertions::assert_eq;

    #[test]
    fn context_is_send_and_clone() {
        fn assert_send_clone<T: Send + Clone>() {}
        assert_send_clone::<HintContext>();
    }

    #[test]
    fn analyze_rectangle() {
        let source = make_outline(1000, &[RECTANGLE]);
        let mut context = HintContext::default();
        context.analyze(&source.as_outline_ref().unwrap()).unwrap();
        let axis = context.axis(Axis::HORIZONTAL);
        assert_eq!(axis.major_dir, Direction::Up);
        assert_eq!(axis.stems().collect::<alloc::vec::Vec<_>>(), [(0, 1)]);
        assert_eq!(context.axis(Axis::VERTICAL).stems().count(), 0);
        assert_eq!(context.outline().points.len(), 4);
    }

    #[test]
    fn analyze_replaces_previous_results() {
        let mut context = HintContext::default();
        let big = make_outline(1000, BOX_O);
        let small = make_outline(1000, &[RECTANGLE]);
        context.analyze(&big.as_outline_ref().unwrap()).unwrap();
        let capacity = context.axis(Axis::HORIZONTAL).segments.capacity();
        context.analyze(&small.as_outline_ref().unwrap()).unwrap();
        let axis = context.axis(Axis::HORIZONTAL);
        assert_eq!(axis.segments.len(), 2);
        assert_eq!(axis.segments.capacity(), capacity);
    }

    #[test]
    fn widths_from_first_available_char() {
        let empty = OutlineRef::new(&[], &[], &[], 1000).unwrap();
        let reference = make_outline(1000, BOX_O);
        let mut requested = alloc::vec::Vec::new();
        let mut context = HintContext::default();
        let [horizontal, vertical] = context.compute_widths(1000, |ch| {
            requested.push(ch);
            match ch {
                'o' => Some(empty),
                'O' => reference.as_outline_ref().ok(),
                _ => None,
            }
        });
        assert_eq!(requested, ['o', 'O']);
        assert_eq!(horizontal.widths.as_slice(), &[100, 100]);
        assert_eq!(vertical.widths.as_slice(), &[60, 80]);
    }

    #[test]
    fn widths_from_last_standard_char() {
        let reference = make_outline(1000, BOX_O);
        let mut requested = alloc::vec::Vec::new();
        let mut context = HintContext::default();
        let [horizontal, _] = context.compute_widths(1000, |ch| {
            requested.push(ch);
            (ch == '0').then(|| reference.as_outline_ref().ok()).flatten()
        });
        assert_eq!(requested, ['o', 'O', '0']);
        assert_eq!(horizontal.widths.as_slice(), &[100, 100]);
    }

    #[test]
    fn sampling_replaces_analysis_on_both_axes() {
        let mut context = HintContext::default();
        let small = make_outline(1000, &[RECTANGLE]);
        let reference = make_outline(1000, BOX_O);
        context.analyze(&small.as_outline_ref().unwrap()).unwrap();
        context
            .sample_widths(&reference.as_outline_ref().unwrap())
            .unwrap();
        assert_eq!(context.outline().points.len(), 8);
        for (dim, axis) in context.axes().iter().enumerate() {
            assert_eq!(axis.dim, dim);
            assert_eq!(axis.segments.len(), 4);
            assert_eq!(axis.stems().count(), 2);
            for segment in axis.segments.iter() {
                assert!(segment.dir.is_same_axis(axis.major_dir));
                assert!(segment.last() < context.outline().points.len());
            }
        }
        // Fallback sampling leaves both axes empty
        context.compute_widths(1000, |_| None);
        assert_eq!(context.axis(Axis::HORIZONTAL).dim, Axis::HORIZONTAL);
        assert_eq!(context.axis(Axis::VERTICAL).dim, Axis::VERTICAL);
        assert!(context.axes().iter().all(|axis| axis.segments.is_empty()));
    }

    #[test]
    fn widths_fallback_without_reference() {
        let mut context = HintContext::default();
        for widths in context.compute_widths(1000, |_| None) {
            assert!(widths.widths.is_empty());
            assert_eq!(widths.metrics.standard_width, 24);
            assert_eq!(widths.metrics.edge_distance_threshold, 4);
        }
    }

    #[test]
    fn sample_widths_directly() {
        let reference = make_outline(1000, BOX_O);
        let mut context = HintContext::default();
        let widths = context
            .sample_widths(&reference.as_outline_ref().unwrap())
            .unwrap();
        assert_eq!(widths[0].metrics.standard_width, 100);
        assert_eq!(widths[1].metrics.standard_width, 60);
    }
}
