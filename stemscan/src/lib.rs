//! Stem analysis for automatic hinting of glyph outlines.
//!
//! This crate implements the analysis half of an autohinter: given an
//! outline in font units it
//!
//! * links each contour into a cyclic point graph and classifies the
//!   tangent direction of every point,
//! * marks weak points (to be interpolated rather than hinted) and
//!   inflection points,
//! * detects *segments*, runs of points aligned with a hinting axis, and
//! * links opposing segments into stems and serifs.
//!
//! A [`HintContext`] owns the scratch buffers for all of these stages and can
//! be reused across glyphs. The same pipeline run over a reference glyph
//! (such as "o" for Latin) yields the standard stem widths of a font; see
//! [`HintContext::compute_widths`].
//!
//! Font parsing lives elsewhere. Outlines are supplied as points, flags and
//! contour end indices in the shape of a TrueType simple glyph; see
//! [`OutlineRef`].

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![cfg_attr(not(any(test, feature = "std")), no_std)]

extern crate alloc;

/// Expose our "raw" underlying parser crate.
pub extern crate read_fonts as raw;

mod angle;
mod axis;
mod collections;
mod config;
mod context;
mod error;
mod inflection;
mod latin;
mod metrics;
mod outline;
#[cfg(feature = "kurbo")]
mod pen;
mod script;
mod source;

pub use angle::{Angle, ANGLE_2PI, ANGLE_PI};
pub use axis::{Axis, Dimension, Segment};
pub use collections::ScratchVec;
pub use config::HintConfig;
pub use context::HintContext;
pub use error::OutlineError;
pub use metrics::{
    AxisWidths, Scale, ScaledAxisWidths, ScaledWidth, UnscaledWidths, WidthMetrics, MAX_WIDTHS,
};
pub use outline::{Contour, Direction, Orientation, Outline, Point};
#[cfg(feature = "kurbo")]
pub use pen::outline_from_bez_path;
pub use script::{Script, ScriptClass};
pub use source::{OutlineBuf, OutlineRef};
