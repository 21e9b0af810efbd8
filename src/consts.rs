/// Simulator units (1m) to field units (1mm) conversion scale
pub const M_TO_MM: f32 = 1000.0;

/// Field units (1mm) to simulator units (1m) conversion scale
pub const MM_TO_M: f32 = 1.0 / 1000.0;

/// Milliseconds per second, used to turn per-millisecond differences into per-second rates
pub const MS_PER_S: f32 = 1000.0;

pub const DEFAULT_ROBOTS_PER_TEAM: u32 = 7;

pub mod ball {
    /// Height of the ball centre reported by the flat (2D) backend, which has no z axis
    pub const FLAT_HEIGHT_MM: f32 = 50.0;

    /// Standard deviation of the curve bias, in radians per second of the rolling step
    pub const CURVE_STD_DEV_PER_S: f32 = 0.015;
}

pub mod robot {
    /// Minimum z component of a body's up axis for it to count as upright
    pub const UPRIGHT_MIN_UP_Z: f32 = 0.5;
}

pub mod scene {
    pub const ROBOTS_GROUP: &str = "RoboCup.robots";
    pub const EXTRAS_GROUP: &str = "RoboCup.extras";

    /// Length of the name part in front of the number, e.g. `robot` in `robot12`
    pub const NAME_PREFIX_LEN: usize = 5;
}
