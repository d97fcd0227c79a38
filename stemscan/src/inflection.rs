//! Inflection point detection.
//!
//! A contour is split into straight runs of points sharing the same angle.
//! When the turn into a run and the turn out of it bend in opposite
//! directions, curvature changes sign and every point of the run is marked
//! as an inflection point. Stem detection must not mistake such smoothly
//! curving regions for straight edges.

use super::{
    angle::Angle,
    outline::{Contour, Outline, Point},
};

impl Outline {
    /// Marks the inflection points of every contour.
    pub fn compute_inflections(&mut self) {
        let points = self.points.as_mut_slice();
        for contour in self.contours.iter() {
            for point in &mut points[contour.range()] {
                point.flags &= !Point::INFLECTION;
            }
            if contour.is_degenerate() || !mark_contour_inflections(points, *contour) {
                log::trace!(
                    "no inflections computed for contour at {}",
                    contour.first()
                );
            }
        }
    }
}

fn is_coincident(points: &[Point], a: usize, b: usize) -> bool {
    points[a].fx == points[b].fx && points[a].fy == points[b].fy
}

fn angle_between(points: &[Point], from: usize, to: usize) -> Angle {
    Angle::from_vector(
        points[to].fx - points[from].fx,
        points[to].fy - points[from].fy,
    )
}

/// Returns false if the contour was skipped because it has fewer than two
/// distinct point positions or is a single straight run.
fn mark_contour_inflections(points: &mut [Point], contour: Contour) -> bool {
    // Every inner loop below advances one point per step and a complete
    // pass needs at most two laps, so bound the total work.
    let mut budget = contour.len() * 3;
    let mut first = contour.first();
    let mut start = first;
    let mut end = first;
    // Find the first point that differs from the start
    loop {
        end = contour.next(end);
        if end == first {
            return false;
        }
        if !is_coincident(points, start, end) {
            break;
        }
    }
    let mut angle_seg = angle_between(points, start, end);
    // Extend the first run backward as long as the angle is unchanged
    let mut before = start;
    let angle_in = loop {
        loop {
            start = before;
            before = contour.prev(before);
            if before == first {
                return false;
            }
            if !is_coincident(points, before, start) {
                break;
            }
        }
        let angle_in = angle_between(points, before, start);
        if angle_in != angle_seg {
            break angle_in;
        }
    };
    first = start;
    let mut diff_in = angle_in.diff(angle_seg);
    let mut finished = false;
    while !finished {
        // Extend the end of the current run as long as the angle is
        // unchanged
        let mut after = end;
        let angle_out = loop {
            loop {
                end = after;
                after = contour.next(after);
                if after == first {
                    finished = true;
                }
                budget = match budget.checked_sub(1) {
                    Some(budget) => budget,
                    None => return true,
                };
                if !is_coincident(points, end, after) {
                    break;
                }
            }
            let angle_out = angle_between(points, end, after);
            if angle_out != angle_seg {
                break angle_out;
            }
        };
        let diff_out = angle_seg.diff(angle_out);
        if (diff_in ^ diff_out) < 0 {
            // The turns on either side of this run disagree
            log::trace!("inflection run from point {start} to {end}");
            let mut ix = start;
            loop {
                points[ix].flags |= Point::INFLECTION;
                if ix == end {
                    break;
                }
                ix = contour.next(ix);
            }
        }
        start = end;
        end = after;
        angle_seg = angle_out;
        diff_in = diff_out;
    }
    true
}
