//! Hover-circle geometry solver
//!
//! For each pill the reveal mask is a circle that slides up from the bottom
//! edge and, at full scale, covers the whole pill with its visible arc
//! tangent to the pill's top edge. Given the pill's rendered size this module
//! solves for the minimal such circle.
//!
//! Dimensions are rounded up to whole pixels so the scaled circle never
//! leaves sub-pixel gaps at the pill's corners.

/// Solved circle for one pill, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PillGeometry {
    /// Circle diameter.
    pub diameter: f32,
    /// How far the circle's resting bottom edge sits below the pill's
    /// bottom edge.
    pub bottom_offset: f32,
    /// Scale origin measured down from the circle's top edge. This lands
    /// exactly on the pill's bottom edge, so the circle grows out of it.
    pub origin_y: f32,
}

/// Solve the covering circle for a pill of `width` x `height`.
///
/// Returns `None` for a degenerate (zero-size) layout; the caller keeps
/// whatever geometry it had. The radicand clamp guards against floating-point
/// overshoot only; for any positive height the radius is at least half the
/// width.
pub fn solve(width: f32, height: f32) -> Option<PillGeometry> {
    if width <= 0.0 || height <= 0.0 {
        return None;
    }

    let w = width;
    let h = height;

    let radius = (w * w / 4.0 + h * h) / (2.0 * h);
    let diameter = (2.0 * radius).ceil() + 2.0;
    let bottom_offset = (radius - (radius * radius - w * w / 4.0).max(0.0).sqrt()).ceil() + 1.0;

    Some(PillGeometry {
        diameter,
        bottom_offset,
        origin_y: diameter - bottom_offset,
    })
}
