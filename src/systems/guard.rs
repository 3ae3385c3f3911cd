//! Preconditions for turning a flag.
//!
//! A flag may only be rotated while it is held by its ground joint and while
//! it is the root part of its vessel. Rotating a non-root part would move it
//! relative to the rest of the vessel with no defined result.

use bevy_ecs::hierarchy::ChildOf;
use bevy_ecs::prelude::*;
use thiserror::Error;

use crate::components::groundjoint::GroundJoint;

/// Why a rotation is not allowed right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RotateBlocked {
    #[error("flag has no ground joint")]
    NoJoint,
    #[error("flag is not the root part of its vessel")]
    NotRoot,
}

/// Check both preconditions. The joint is checked first.
pub fn can_rotate(
    joint: Option<&GroundJoint>,
    parent: Option<&ChildOf>,
) -> Result<(), RotateBlocked> {
    if !joint.is_some_and(GroundJoint::is_attached) {
        return Err(RotateBlocked::NoJoint);
    }
    if parent.is_some() {
        return Err(RotateBlocked::NotRoot);
    }
    Ok(())
}

/// [`can_rotate`] for an entity in `world`.
pub fn check_entity(world: &World, entity: Entity) -> Result<(), RotateBlocked> {
    can_rotate(world.get::<GroundJoint>(entity), world.get::<ChildOf>(entity))
}
