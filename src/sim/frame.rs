//! Conversions between the simulator's raw frame (metres, shared by both
//! teams) and a team's canonical frame (millimetres, rotated by 180° for the
//! first team).
//!
//! Every `*_to_raw` function is the inverse of the matching read-path
//! conversion, up to floating point error and angle wraparound.

use std::f32::consts::PI;

use glam::{EulerRot, Mat3A, Vec3A};

use crate::{PhysicsBackend, Pose2, SimBody, TeamSide, consts, normalize_angle};

const FLIP_HORIZONTAL: Vec3A = Vec3A::new(-1.0, -1.0, 1.0);

/// Converts a raw ball position in metres to the canonical frame in mm.
///
/// The flat backend has no height, so the ball is put at its resting height.
#[must_use]
pub fn ball_position_to_canonical(raw: Vec3A, backend: PhysicsBackend, side: TeamSide) -> Vec3A {
    let mut pos = raw * consts::M_TO_MM;
    if backend.is_flat() {
        pos.z = consts::ball::FLAT_HEIGHT_MM;
    }
    if side.is_first() {
        pos *= FLIP_HORIZONTAL;
    }
    pos
}

/// Reads a body's planar pose in mm in the raw frame and whether it is upright.
#[must_use]
pub fn raw_pose_of(body: &dyn SimBody) -> (Pose2, bool) {
    let pos = body.position() * consts::M_TO_MM;
    let rot = body.rotation();
    let pose = Pose2 {
        rotation: rot.x_axis.y.atan2(rot.x_axis.x),
        translation: pos.truncate(),
    };
    (pose, rot.z_axis.z >= consts::robot::UPRIGHT_MIN_UP_Z)
}

#[must_use]
pub fn pose_to_canonical(raw: Pose2, side: TeamSide) -> Pose2 {
    if side.is_first() { raw.half_turned() } else { raw }
}

/// A half turn is its own inverse, so this matches [`pose_to_canonical`].
#[must_use]
pub fn pose_to_raw(canonical: Pose2, side: TeamSide) -> Pose2 {
    if side.is_first() {
        canonical.half_turned()
    } else {
        canonical
    }
}

/// Odometry shares the field rotation convention of the world state.
#[must_use]
pub fn odometry_from_pose(robot_pose: Pose2, side: TeamSide) -> Pose2 {
    pose_to_canonical(robot_pose, side)
}

/// Converts a canonical placement (position in mm, (roll, pitch, yaw) in
/// radians) to the raw frame. Units are left unchanged.
#[must_use]
pub fn placement_to_raw(pos: Vec3A, rot: Vec3A, side: TeamSide) -> (Vec3A, Vec3A) {
    if side.is_first() {
        (
            pos * FLIP_HORIZONTAL,
            Vec3A::new(rot.x, rot.y, normalize_angle(rot.z + PI)),
        )
    } else {
        (pos, rot)
    }
}

#[must_use]
pub fn ball_placement_to_raw(pos: Vec3A, side: TeamSide) -> Vec3A {
    if side.is_first() { pos * FLIP_HORIZONTAL } else { pos }
}

/// Builds a body orientation from (roll, pitch, yaw) angles.
#[must_use]
pub fn rotation_from_angles(rot: Vec3A) -> Mat3A {
    Mat3A::from_euler(EulerRot::ZYX, rot.z, rot.y, rot.x)
}
