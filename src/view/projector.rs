//! World-to-screen projection
//!
//! A single pure function maps simulation meters to viewport pixels given
//! the active scale, the camera offset, and the viewport center. Trail
//! recording and live drawing both go through it, so recorded points and
//! current positions always share a coordinate frame at recording time.

use crate::simulation::states::{NVec2, TrailPoint};

/// Screen-space offset applied by panning, in pixels.
pub type CameraOffset = (f64, f64);

/// Project a world position to whole-pixel screen coordinates.
///
///   screen_x = round(x * scale + center_x - camera_x)
///   screen_y = round(y * scale + center_y - camera_y)
///
/// `scale` is one of the two fixed constants selected by the zoom flag;
/// `center` is the viewport midpoint.
pub fn world_to_screen(
    pos: NVec2,
    scale: f64,
    camera: CameraOffset,
    center: (f64, f64),
) -> TrailPoint {
    let sx = pos.x * scale + center.0 - camera.0;
    let sy = pos.y * scale + center.1 - camera.1;
    (sx.round() as i32, sy.round() as i32)
}
