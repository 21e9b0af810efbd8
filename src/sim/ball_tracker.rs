use std::rc::Rc;

use glam::{Vec2, Vec3A};
use log::{debug, warn};
use rand::{SeedableRng, rngs::StdRng};
use rand_distr::{Distribution, Normal};

use crate::{BodyHandle, GroundTruthBall, PhysicsBackend, TeamSide, consts, frame};

/// Rolling state one robot keeps about the shared ball between samples.
///
/// Every synchronizer owns its own tracker, since robots may sample the ball
/// at different times within the same tick sequence.
pub struct BallTracker {
    tracked: Option<BodyHandle>,
    last_position: Vec3A,
    /// None until the first sample
    last_time: Option<u32>,
    had_velocity: bool,
    /// Current angular bias applied to the ball's horizontal velocity each step
    curve_angle: f32,
    rng: StdRng,
}

impl BallTracker {
    #[must_use]
    pub fn new(rng_seed: Option<u64>) -> Self {
        let rng = match rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            tracked: None,
            last_position: Vec3A::ZERO,
            last_time: None,
            had_velocity: false,
            curve_angle: 0.0,
            rng,
        }
    }

    #[must_use]
    pub const fn curve_angle(&self) -> f32 {
        self.curve_angle
    }

    #[must_use]
    pub const fn last_time(&self) -> Option<u32> {
        self.last_time
    }

    #[must_use]
    pub const fn had_velocity(&self) -> bool {
        self.had_velocity
    }

    fn reset(&mut self) {
        self.last_position = Vec3A::ZERO;
        self.last_time = None;
        self.had_velocity = false;
        self.curve_angle = 0.0;
    }

    /// Samples the ball at `now_ms` and updates the rolling state.
    ///
    /// On the 3D backend this also writes a curved velocity back into the
    /// simulator, so the next physics step already follows the curve. The
    /// returned velocity is the finite-difference estimate before that write.
    ///
    /// A second sample at the same `now_ms` reports zero velocity and clears
    /// the moving flag, so the next moving sample rolls a new curve.
    pub fn sample(
        &mut self,
        ball: &BodyHandle,
        now_ms: u32,
        backend: PhysicsBackend,
        side: TeamSide,
    ) -> GroundTruthBall {
        if !self.tracked.as_ref().is_some_and(|b| Rc::ptr_eq(b, ball)) {
            if self.tracked.is_some() {
                debug!("Ball identity changed, dropping previous samples");
            }
            self.reset();
            self.tracked = Some(ball.clone());
        }

        let position = frame::ball_position_to_canonical(ball.borrow().position(), backend, side);

        let mut velocity = Vec3A::ZERO;
        if let Some(last_time) = self.last_time.filter(|&t| t != now_ms) {
            let elapsed_ms = now_ms.wrapping_sub(last_time) as f32;
            velocity = (position - self.last_position) * consts::MS_PER_S / elapsed_ms;

            if !backend.is_flat() {
                self.apply_curve(ball, velocity, elapsed_ms);
            }
        }

        self.last_position = position;
        self.last_time = Some(now_ms);
        self.had_velocity = velocity.truncate() != Vec2::ZERO;

        GroundTruthBall { position, velocity }
    }

    fn apply_curve(&mut self, ball: &BodyHandle, estimated_vel: Vec3A, elapsed_ms: f32) {
        let moving = estimated_vel.truncate() != Vec2::ZERO;
        if moving && !self.had_velocity {
            self.curve_angle = self.roll_curve(elapsed_ms);
            debug!("Ball started moving, curve bias {} rad", self.curve_angle);
        } else if !moving {
            self.curve_angle = 0.0;
        }

        let mut body = ball.borrow_mut();
        let vel = body.velocity();
        let curved = Vec2::from_angle(self.curve_angle).rotate(vel.truncate());
        body.set_velocity(curved.extend(vel.z).into());
    }

    fn roll_curve(&mut self, elapsed_ms: f32) -> f32 {
        let std_dev = consts::ball::CURVE_STD_DEV_PER_S * elapsed_ms / consts::MS_PER_S;
        match Normal::new(0.0, std_dev) {
            Ok(normal) => normal.sample(&mut self.rng),
            Err(err) => {
                warn!("Invalid curve distribution (std dev {std_dev}): {err}, not curving");
                0.0
            }
        }
    }
}
