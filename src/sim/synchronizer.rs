use std::rc::Rc;

use glam::{Vec2, Vec3A};
use log::{debug, trace};

use crate::{
    BallTracker, BodyHandle, Clock, GroundTruthPlayer, NameSuffixResolver, PlayerNumberResolver,
    Pose2, Roster, Scene, SharedBall, SyncConfig, TeamSide, WorldState, consts, frame,
};

/// The simulator side of one simulated robot.
///
/// Translates between the raw simulator frame and the canonical frame of the
/// robot's team: it reads ground truth for the robot's perception and turns
/// placement commands back into simulator moves.
pub struct SimulatedRobot {
    robot: BodyHandle,
    number: u32,
    side: TeamSide,
    config: SyncConfig,
    resolver: Box<dyn PlayerNumberResolver>,
    roster: Roster,
    ball: SharedBall,
    clock: Rc<dyn Clock>,
    ball_tracker: BallTracker,
}

impl SimulatedRobot {
    /// Creates a synchronizer that derives player numbers from scene names.
    pub fn new(
        robot: BodyHandle,
        scene: &dyn Scene,
        ball: SharedBall,
        clock: Rc<dyn Clock>,
        config: SyncConfig,
    ) -> Self {
        let resolver = NameSuffixResolver {
            prefix_len: config.name_prefix_len,
        };
        Self::with_resolver(robot, scene, ball, clock, config, Box::new(resolver))
    }

    pub fn with_resolver(
        robot: BodyHandle,
        scene: &dyn Scene,
        ball: SharedBall,
        clock: Rc<dyn Clock>,
        config: SyncConfig,
        resolver: Box<dyn PlayerNumberResolver>,
    ) -> Self {
        assert!(config.robots_per_team > 0, "robots_per_team must be at least 1");

        let number = resolver.player_number_of(&*robot.borrow());
        let side = TeamSide::from_number(number, config.robots_per_team);
        let roster = Roster::build(scene, &*resolver, &config, number);
        // one curve stream per robot
        let ball_tracker = BallTracker::new(config.rng_seed.map(|seed| seed ^ u64::from(number)));

        Self {
            robot,
            number,
            side,
            config,
            resolver,
            roster,
            ball,
            clock,
            ball_tracker,
        }
    }

    /// Raw scene number of the owning robot
    #[must_use]
    pub const fn number(&self) -> u32 {
        self.number
    }

    #[must_use]
    pub const fn side(&self) -> TeamSide {
        self.side
    }

    #[must_use]
    pub const fn config(&self) -> &SyncConfig {
        &self.config
    }

    #[must_use]
    pub const fn roster(&self) -> &Roster {
        &self.roster
    }

    #[must_use]
    pub const fn ball_tracker(&self) -> &BallTracker {
        &self.ball_tracker
    }

    /// Rebuilds the roster after robots were added to or removed from the scene.
    pub fn refresh_roster(&mut self, scene: &dyn Scene) {
        self.roster = Roster::build(scene, &*self.resolver, &self.config, self.number);
    }

    /// Reads the current ground truth in this robot's canonical frame.
    ///
    /// Not a pure read: it advances the ball tracker and, on the 3D backend,
    /// writes the curved ball velocity back into the simulator.
    pub fn read_world_state(&mut self) -> WorldState {
        let mut state = WorldState::default();
        self.read_world_state_into(&mut state);
        state
    }

    /// Same as [`Self::read_world_state`], reusing the buffers of `state`.
    pub fn read_world_state_into(&mut self, state: &mut WorldState) {
        state.clear();

        if let Some(ball) = self.ball.get() {
            let now_ms = self.clock.now_ms();
            let sample = self
                .ball_tracker
                .sample(&ball, now_ms, self.config.backend, self.side);
            state.balls.push(sample);
        }

        state.own_pose = self.own_pose();

        let WorldState {
            own_team_players,
            opponent_team_players,
            ..
        } = state;
        let (first_players, second_players) = if self.side.is_first() {
            (own_team_players, opponent_team_players)
        } else {
            (opponent_team_players, own_team_players)
        };
        self.push_players(TeamSide::First, first_players);
        self.push_players(TeamSide::Second, second_players);
    }

    fn push_players(&self, team: TeamSide, out: &mut Vec<GroundTruthPlayer>) {
        for entry in self.roster.team(team) {
            let (raw_pose, upright) = frame::raw_pose_of(&*entry.body.borrow());
            out.push(GroundTruthPlayer {
                number: team.normalize_number(entry.number, self.config.robots_per_team),
                pose: frame::pose_to_canonical(raw_pose, self.side),
                upright,
            });
        }
    }

    /// The owning robot's pose in its canonical frame.
    #[must_use]
    pub fn own_pose(&self) -> Pose2 {
        let (raw_pose, _) = frame::raw_pose_of(&*self.robot.borrow());
        frame::pose_to_canonical(raw_pose, self.side)
    }

    #[must_use]
    pub fn odometry(&self, robot_pose: Pose2) -> Pose2 {
        frame::odometry_from_pose(robot_pose, self.side)
    }

    /// Raw ball position in mm, without the team rotation.
    #[must_use]
    pub fn absolute_ball_position(&self) -> Option<Vec2> {
        let ball = self.ball.get()?;
        let pos = ball.borrow().position() * consts::M_TO_MM;
        Some(pos.truncate())
    }

    /// Moves the owning robot to a raw position in mm.
    ///
    /// `rot` holds (roll, pitch, yaw) in radians and is only applied if
    /// `change_rotation` is set.
    pub fn move_robot(&self, pos: Vec3A, rot: Vec3A, change_rotation: bool, reset_dynamics: bool) {
        let mut robot = self.robot.borrow_mut();
        let pos_m = pos * consts::MM_TO_M;
        if change_rotation {
            robot.move_to_with_rotation(pos_m, frame::rotation_from_angles(rot));
        } else {
            robot.move_to(pos_m);
        }
        if reset_dynamics {
            robot.reset_dynamics();
        }
    }

    /// Like [`Self::move_robot`], but `pos` and `rot` are in the canonical frame.
    pub fn move_robot_per_team(
        &self,
        pos: Vec3A,
        rot: Vec3A,
        change_rotation: bool,
        reset_dynamics: bool,
    ) {
        let (raw_pos, raw_rot) = frame::placement_to_raw(pos, rot, self.side);
        self.move_robot(raw_pos, raw_rot, change_rotation, reset_dynamics);
    }

    /// Moves the ball to a raw position in mm. Does nothing without a ball.
    pub fn move_ball(&self, pos: Vec3A, reset_dynamics: bool) {
        let Some(ball) = self.ball.get() else {
            debug!("No ball in the scene, ignoring ball placement");
            return;
        };

        let mut ball = ball.borrow_mut();
        ball.move_to(pos * consts::MM_TO_M);
        if reset_dynamics {
            ball.reset_dynamics();
        }
    }

    pub fn move_ball_per_team(&self, pos: Vec3A, reset_dynamics: bool) {
        self.move_ball(frame::ball_placement_to_raw(pos, self.side), reset_dynamics);
    }

    /// Slows the ball down by `deceleration` (mm/s²) over one simulation step.
    ///
    /// Only the flat backend needs this, the 3D engine models rolling friction itself.
    /// The ball stops instead of reversing once its speed would drop below zero.
    pub fn apply_ball_friction(&self, deceleration: f32) {
        if !self.config.backend.is_flat() {
            return;
        }
        let Some(ball) = self.ball.get() else {
            return;
        };

        let mut ball = ball.borrow_mut();
        let vel = ball.velocity().truncate() * consts::M_TO_MM;
        let speed = vel.length();
        let new_speed = speed - deceleration * self.config.sim_step_length_ms / consts::MS_PER_S;
        trace!("Ball friction: {speed} mm/s -> {new_speed} mm/s");

        let new_vel = if new_speed <= 0.0 || speed == 0.0 {
            Vec2::ZERO
        } else {
            vel * (new_speed / speed) * consts::MM_TO_M
        };
        ball.set_velocity(new_vel.extend(0.0).into());
    }
}
