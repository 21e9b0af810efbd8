use std::{cell::RefCell, rc::Rc, time::Instant};

use glam::{Mat3A, Vec3A};

/// A rigid body owned by the host simulator.
///
/// All quantities are in simulator units (metres, m/s). Flat (2D) backends
/// report a zero z component and ignore the z component of commands.
pub trait SimBody {
    /// Hierarchical scene name, e.g. `RoboCup.robots.robot3`.
    fn full_name(&self) -> &str;
    fn position(&self) -> Vec3A;
    fn rotation(&self) -> Mat3A;
    fn velocity(&self) -> Vec3A;
    fn set_velocity(&mut self, vel: Vec3A);
    fn move_to(&mut self, pos: Vec3A);
    fn move_to_with_rotation(&mut self, pos: Vec3A, rot: Mat3A);
    fn reset_dynamics(&mut self);
}

pub type BodyHandle = Rc<RefCell<dyn SimBody>>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GroupId(pub usize);

/// Read access to the simulator's scene graph.
pub trait Scene {
    /// Looks up a compound group such as `RoboCup.robots`.
    fn resolve_group(&self, path: &str) -> Option<GroupId>;
    fn child_count(&self, group: GroupId) -> usize;
    fn child(&self, group: GroupId, index: usize) -> BodyHandle;
}

/// Monotonic host time in milliseconds.
pub trait Clock {
    fn now_ms(&self) -> u32;
}

#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    start: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u32 {
        // wraps after ~49 days, the ball tracker uses wrapping differences
        self.start.elapsed().as_millis() as u32
    }
}

/// The one physical ball of a match, observed by every robot's synchronizer.
///
/// Cloning shares the slot: setting a ball through any clone is seen by all.
#[derive(Clone, Default)]
pub struct SharedBall(Rc<RefCell<Option<BodyHandle>>>);

impl SharedBall {
    #[must_use]
    pub fn new(ball: Option<BodyHandle>) -> Self {
        Self(Rc::new(RefCell::new(ball)))
    }

    pub fn set(&self, ball: Option<BodyHandle>) {
        *self.0.borrow_mut() = ball;
    }

    #[must_use]
    pub fn get(&self) -> Option<BodyHandle> {
        self.0.borrow().clone()
    }

    #[must_use]
    pub fn is_present(&self) -> bool {
        self.0.borrow().is_some()
    }
}
