use glam::Vec2;

use crate::Pose2;

/// Where a robot stands before it enters the pitch.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SetupPose {
    pub player_number: u32,
    /// Global field coordinates, mm
    pub position: Vec2,
    /// The point the robot looks at, global field coordinates, mm
    pub turned_towards: Vec2,
}

impl SetupPose {
    #[must_use]
    pub fn to_pose(&self) -> Pose2 {
        Pose2::looking_at(self.position, self.turned_towards)
    }
}

#[derive(Clone, Debug, Default)]
pub struct SetupPoses {
    /// Not ordered by number
    pub poses: Vec<SetupPose>,
}

impl SetupPoses {
    /// Finds the setup pose of player `number`.
    ///
    /// A list with a single entry answers for every number, which keeps demo
    /// scenes with one robot short. Otherwise the entry must exist.
    #[must_use]
    pub fn pose_of_robot(&self, number: u32) -> &SetupPose {
        if let [only] = self.poses.as_slice() {
            return only;
        }

        let Some(pose) = self.poses.iter().find(|p| p.player_number == number) else {
            panic!("No setup pose for player {number}");
        };
        pose
    }
}
