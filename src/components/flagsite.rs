//! The flag site module and the ground anchor it owns.
//!
//! Every flag carries a [`FlagSite`]. The site owns the [`GroundPivot`], the
//! point where the pole meets the ground, and manages the flag's
//! [`GroundJoint`](super::groundjoint::GroundJoint) in response to
//! [`UnsetJointEvent`](crate::events::joint::UnsetJointEvent) and
//! [`SetJointEvent`](crate::events::joint::SetJointEvent).
//!
//! The rotator only reads the pivot's position and up axis; the pivot
//! rotation is written back by the rotation transaction and by the spawn-time
//! orientation pass.

use bevy_ecs::prelude::Component;
use glam::{Quat, Vec3};

/// Distance from a flag's origin down to the base of its pole.
pub const DEFAULT_PIVOT_OFFSET: Vec3 = Vec3::new(0.0, -1.5, 0.0);

/// Fixed reference transform the flag turns around.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GroundPivot {
    /// World-space position of the pivot.
    pub position: Vec3,
    /// World-space rotation of the pivot.
    pub rotation: Quat,
}

impl Default for GroundPivot {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

impl GroundPivot {
    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// The pivot's up axis in world space.
    pub fn up(&self) -> Vec3 {
        (self.rotation * Vec3::Y).normalize()
    }
}

/// Site module present on every flag.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct FlagSite {
    /// Offset from the part origin to the pivot, in part space.
    pub pivot_offset: Vec3,
    /// The ground anchor. Placed by the spawn path.
    pub ground_pivot: GroundPivot,
}

impl Default for FlagSite {
    fn default() -> Self {
        Self {
            pivot_offset: DEFAULT_PIVOT_OFFSET,
            ground_pivot: GroundPivot::default(),
        }
    }
}

impl FlagSite {
    /// Place the ground pivot below a part posed at `position`/`rotation`.
    ///
    /// The pivot takes the part's rotation; any rotation added at runtime is
    /// not reproduced here.
    pub fn place_pivot(&mut self, position: Vec3, rotation: Quat) {
        self.ground_pivot = GroundPivot::new(position + rotation * self.pivot_offset, rotation);
    }
}
