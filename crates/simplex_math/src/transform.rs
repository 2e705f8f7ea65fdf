// Rotation helpers for placing cameras and shapes.
//
// glam already covers quaternion composition and vector rotation; this only
// adds the look-at construction the scene builder needs.

use glam::{EulerRot, Quat, Vec3};

/// Rotation that turns the default view direction (-Z) toward `to` as seen
/// from `from`.
///
/// Built from yaw (about +Y) and pitch (about +X) only, so the result never
/// rolls: the rotated +Y axis stays in the vertical plane of the view.
/// Looking straight up or down is the degenerate case where yaw is
/// undefined; `atan2(0, 0)` yields zero yaw there.
pub fn look_at_rotation(from: Vec3, to: Vec3) -> Quat {
    let forward = (to - from).normalize_or_zero();
    if forward == Vec3::ZERO {
        return Quat::IDENTITY;
    }

    let yaw = -forward.x.atan2(-forward.z);
    let pitch = forward.y.clamp(-1.0, 1.0).asin();

    Quat::from_euler(EulerRot::YXZ, yaw, pitch, 0.0)
}
