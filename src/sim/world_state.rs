use arrayvec::ArrayVec;
use glam::Vec3A;

use crate::Pose2;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GroundTruthPlayer {
    /// Player number, starting at 1 for both teams
    pub number: u32,
    pub pose: Pose2,
    pub upright: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GroundTruthBall {
    /// mm, canonical frame
    pub position: Vec3A,
    /// mm/s, finite difference of the last two samples
    pub velocity: Vec3A,
}

/// What the simulator knows about the match, seen from one robot's team.
#[derive(Clone, Debug, Default)]
pub struct WorldState {
    pub own_pose: Pose2,
    pub own_team_players: Vec<GroundTruthPlayer>,
    pub opponent_team_players: Vec<GroundTruthPlayer>,
    /// Empty if the scene has no ball
    pub balls: ArrayVec<GroundTruthBall, 1>,
}

impl WorldState {
    pub fn clear(&mut self) {
        self.own_pose = Pose2::IDENTITY;
        self.own_team_players.clear();
        self.opponent_team_players.clear();
        self.balls.clear();
    }

    #[must_use]
    pub fn ball(&self) -> Option<&GroundTruthBall> {
        self.balls.first()
    }
}
