use crate::consts;

/// Which physics engine the host simulator runs.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub enum PhysicsBackend {
    /// Planar physics: no height axis, ball friction is applied by us.
    Flat2D,
    #[default]
    Full3D,
}

impl PhysicsBackend {
    #[must_use]
    pub const fn is_flat(self) -> bool {
        matches!(self, Self::Flat2D)
    }
}

#[derive(Clone, Debug)]
pub struct SyncConfig {
    pub robots_per_team: u32,
    pub backend: PhysicsBackend,
    /// Length of one simulation step, used by the ball friction model
    pub sim_step_length_ms: f32,
    pub robots_group: &'static str,
    pub extras_group: &'static str,
    /// Length of the name part in front of a robot's number
    pub name_prefix_len: usize,
    /// Optional RNG seed for the curve bias, mixed with each robot's number
    /// If None, a random seed will be used
    pub rng_seed: Option<u64>,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl SyncConfig {
    pub const DEFAULT: Self = Self {
        robots_per_team: consts::DEFAULT_ROBOTS_PER_TEAM,
        backend: PhysicsBackend::Full3D,
        sim_step_length_ms: 10.0,
        robots_group: consts::scene::ROBOTS_GROUP,
        extras_group: consts::scene::EXTRAS_GROUP,
        name_prefix_len: consts::scene::NAME_PREFIX_LEN,
        rng_seed: None,
    };
}
