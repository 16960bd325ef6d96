use cgmath::Vector3;
use twistcube_core::Axis;

/// Returns the fixed world-space unit vector that the rendering layer rotates
/// a slice's visual objects around for `axis`.
///
/// Follows the usual right-handed scene orientation (+X right, +Y up,
/// +Z toward the viewer); the middle slices share a vector with the outer
/// face they follow (`M` with `L`, `E` with `D`, `S` with `F`).
pub fn world_axis(axis: Axis) -> Vector3<f32> {
    match axis {
        Axis::U => Vector3::unit_y(),
        Axis::D | Axis::E => -Vector3::unit_y(),
        Axis::R => Vector3::unit_x(),
        Axis::L | Axis::M => -Vector3::unit_x(),
        Axis::F | Axis::S => Vector3::unit_z(),
        Axis::B => -Vector3::unit_z(),
    }
}
