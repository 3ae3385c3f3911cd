//! Joint requests sent to a flag's site.
//!
//! The rotation transaction brackets its move with [`UnsetJointEvent`] and
//! [`SetJointEvent`]. Both are triggered on the world and handled
//! synchronously by the site observers in
//! [`crate::systems::flagsite`], so nothing else runs while the joint is
//! released.

use bevy_ecs::prelude::*;

/// Ask the flag site to release its ground joint.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnsetJointEvent {
    pub entity: Entity,
}

/// Ask the flag site to recreate its ground joint at the current pose.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetJointEvent {
    pub entity: Entity,
}
