//! Latin writing system.

pub(crate) mod segments;
pub(crate) mod widths;

pub(crate) use segments::{compute_segments, link_segments};
pub(crate) use widths::compute_widths;
