//! Iterative Cohen-Sutherland line clipping in three dimensions.
//!
//! The loop is deliberately iterative rather than recursive: each pass
//! either terminates (trivial accept/reject) or moves one endpoint onto the
//! highest-precedence boundary it violates, and an endpoint can be moved at
//! most once per boundary pair, so the loop is bounded without consuming
//! stack proportional to the number of crossings.

use crate::math::vec4::Vec4;

use super::outcode::{Boundary, ClipVolume, Outcode};

/// Each endpoint can violate at most one boundary of each of the three
/// opposing pairs, so no run needs more than six endpoint moves. Exceeding
/// this means the precedence/update logic is broken, not bad input.
const MAX_ENDPOINT_MOVES: u32 = 6;

/// Clips a segment in canonical coordinates against the view volume.
///
/// Returns the surviving (possibly shortened) segment, or `None` when the
/// segment lies entirely outside the volume. A segment already fully inside
/// is returned unchanged.
///
/// # Panics
///
/// Panics if the loop fails to converge within six endpoint moves, which
/// indicates an internal invariant violation.
pub fn clip_segment(p0: Vec4, p1: Vec4, volume: ClipVolume) -> Option<(Vec4, Vec4)> {
    let mut ep0 = p0;
    let mut ep1 = p1;
    let mut moves = 0u32;

    loop {
        let out0 = volume.outcode(ep0);
        let out1 = volume.outcode(ep1);

        if (out0 | out1).is_inside() {
            // Both endpoints inside.
            return Some((ep0, ep1));
        }
        if !(out0 & out1).is_inside() {
            // Both endpoints beyond the same boundary plane.
            return None;
        }

        // Move ep0 first when both endpoints are outside; a fixed choice
        // keeps results deterministic.
        let moving_first = !out0.is_inside();
        let outcode = if moving_first { out0 } else { out1 };

        let t = match crossing_param(volume, outcode, ep0, ep1) {
            Some(t) => t,
            // Every violated boundary is parallel to the segment, so the
            // segment can never enter the volume.
            None => return None,
        };

        // The intersection is parameterized along ep0 -> ep1 regardless of
        // which endpoint moves; w is carried over unchanged.
        let hit = Vec4::new(
            ep0.x + t * (ep1.x - ep0.x),
            ep0.y + t * (ep1.y - ep0.y),
            ep0.z + t * (ep1.z - ep0.z),
            if moving_first { ep0.w } else { ep1.w },
        );
        if moving_first {
            ep0 = hit;
        } else {
            ep1 = hit;
        }

        moves += 1;
        if moves > MAX_ENDPOINT_MOVES {
            panic!("line clipper failed to converge after {MAX_ENDPOINT_MOVES} endpoint moves");
        }
    }
}

/// Parametric intersection of the segment with the highest-precedence
/// boundary the outcode violates.
///
/// A boundary whose denominator is exactly zero cannot be crossed along the
/// segment (the relevant coordinate never changes); the next violated
/// boundary in precedence order is tried instead. `None` means no violated
/// boundary can be crossed.
fn crossing_param(volume: ClipVolume, outcode: Outcode, e0: Vec4, e1: Vec4) -> Option<f64> {
    let dx = e1.x - e0.x;
    let dy = e1.y - e0.y;
    let dz = e1.z - e0.z;

    for boundary in Boundary::IN_PRECEDENCE {
        if !outcode.violates(boundary) {
            continue;
        }
        let (numerator, denominator) = match volume {
            ClipVolume::Parallel => match boundary {
                Boundary::Left => (-1.0 - e0.x, dx),
                Boundary::Right => (1.0 - e0.x, dx),
                Boundary::Bottom => (-1.0 - e0.y, dy),
                Boundary::Top => (1.0 - e0.y, dy),
                Boundary::Near => (-e0.z, dz),
                Boundary::Far => (-1.0 - e0.z, dz),
            },
            ClipVolume::Perspective { zmin } => match boundary {
                Boundary::Left => (-e0.x + e0.z, dx - dz),
                Boundary::Right => (e0.x + e0.z, -dx - dz),
                Boundary::Bottom => (-e0.y + e0.z, dy - dz),
                Boundary::Top => (e0.y + e0.z, -dy - dz),
                Boundary::Near => (e0.z - zmin, -dz),
                Boundary::Far => (-e0.z - 1.0, dz),
            },
        };
        if denominator != 0.0 {
            return Some(numerator / denominator);
        }
    }
    None
}
