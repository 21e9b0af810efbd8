use std::{
    f32::consts::{PI, TAU},
    fmt::Display,
};

use glam::Vec2;

/// Wraps an angle into `[-PI, PI]`.
///
/// Angles already inside the range are returned untouched, so `PI` stays `PI`.
#[must_use]
pub fn normalize_angle(angle: f32) -> f32 {
    if (-PI..=PI).contains(&angle) {
        angle
    } else {
        (angle + PI).rem_euclid(TAU) - PI
    }
}

/// A planar pose on the field: translation in mm, rotation in radians.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pose2 {
    pub rotation: f32,
    pub translation: Vec2,
}

impl Pose2 {
    pub const IDENTITY: Self = Self {
        rotation: 0.0,
        translation: Vec2::ZERO,
    };

    #[must_use]
    pub const fn new(rotation: f32, x: f32, y: f32) -> Self {
        Self {
            rotation,
            translation: Vec2::new(x, y),
        }
    }

    /// A pose standing at `position` and facing `target`.
    #[must_use]
    pub fn looking_at(position: Vec2, target: Vec2) -> Self {
        let dir = target - position;
        Self {
            rotation: dir.y.atan2(dir.x),
            translation: position,
        }
    }

    /// The pose as seen after rotating the whole field by 180° around its centre.
    ///
    /// Equivalent to composing a pure rotation of `PI` with `self`, but the
    /// translation is negated exactly instead of going through `sin`/`cos`.
    #[must_use]
    pub fn half_turned(self) -> Self {
        Self {
            rotation: normalize_angle(self.rotation + PI),
            translation: -self.translation,
        }
    }
}

impl Display for Pose2 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "Pose2 {{ x: {}, y: {}, rot: {}° }}",
            self.translation.x,
            self.translation.y,
            self.rotation.to_degrees()
        )
    }
}
