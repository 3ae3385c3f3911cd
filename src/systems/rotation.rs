//! Turning planted flags about their ground pivot.
//!
//! # Rotation transaction
//!
//! [`rotate_flag`] takes exclusive access to the world, so the whole
//! transaction completes before any other system or observer can look at the
//! flag:
//!
//! 1. check [`can_rotate`](super::guard::can_rotate); on failure leave
//!    everything untouched
//! 2. trigger [`UnsetJointEvent`] so the site releases the ground joint
//! 3. rotate the part about the pivot's position and up axis
//! 4. trigger [`SetJointEvent`] so the site recreates the joint
//! 5. store the pivot's new rotation in [`OrientationState`] and prime it
//!
//! # Spawn-time initialization
//!
//! [`observe_flag_spawned`] runs for every new flag. The host does not
//! restore rotation added at runtime, so a primed state is pushed back onto
//! the pivot; an unprimed state is seeded from the pivot instead.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use glam::Quat;
use log::{debug, warn};
use thiserror::Error;

use crate::components::flagrotator::{FlagRotator, RotateDirection};
use crate::components::flagsite::{FlagSite, GroundPivot};
use crate::components::orientation::OrientationState;
use crate::components::part::VesselName;
use crate::components::parttransform::PartTransform;
use crate::events::joint::{SetJointEvent, UnsetJointEvent};
use crate::events::partspawned::PartSpawnedEvent;
use crate::resources::screenmessages::{
    FLAVOR_MESSAGE_DURATION, FlavorMessages, ScreenMessage, ScreenMessageStyle, ScreenMessages,
};
use crate::systems::guard::{RotateBlocked, check_entity};
use crate::systems::hooks::RotatorHooks;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RotateError {
    #[error(transparent)]
    Blocked(#[from] RotateBlocked),
    #[error("{0:?} is not a rotatable flag")]
    NotAFlag(Entity),
    #[error("no action named '{0}'")]
    UnknownAction(String),
    #[error("rotation angle must be finite")]
    InvalidAngle,
}

/// Rotate `entity` by `angle_degrees` about its ground pivot's up axis.
pub fn rotate_flag(world: &mut World, entity: Entity, angle_degrees: f32) -> Result<(), RotateError> {
    let Some(pivot) = world.get::<FlagSite>(entity).map(|site| site.ground_pivot) else {
        return Err(RotateError::NotAFlag(entity));
    };
    if world.get::<PartTransform>(entity).is_none()
        || world.get::<OrientationState>(entity).is_none()
    {
        return Err(RotateError::NotAFlag(entity));
    }
    if !angle_degrees.is_finite() {
        warn!("Refusing to rotate flag {:?} by {} degrees", entity, angle_degrees);
        return Err(RotateError::InvalidAngle);
    }

    if let Err(blocked) = check_entity(world, entity) {
        match blocked {
            RotateBlocked::NoJoint => post_no_joint_message(world, entity),
            RotateBlocked::NotRoot => {
                warn!("Can't rotate flag {:?}: flag is not root part in vessel", entity)
            }
        }
        return Err(blocked.into());
    }

    if !world.contains_resource::<RotatorHooks>() {
        warn!("Rotator hooks not installed; ground joint of {:?} will not follow the rotation", entity);
    }
    world.trigger(UnsetJointEvent { entity });

    let delta = Quat::from_axis_angle(pivot.up(), angle_degrees.to_radians());
    let pivot_rotation = (delta * pivot.rotation).normalize();
    if let Some(mut transform) = world.get_mut::<PartTransform>(entity) {
        transform.rotate_about(pivot.position, delta);
    }
    if let Some(mut site) = world.get_mut::<FlagSite>(entity) {
        site.ground_pivot.rotation = pivot_rotation;
    }

    world.trigger(SetJointEvent { entity });

    if let Some(mut state) = world.get_mut::<OrientationState>(entity) {
        *state = OrientationState::primed(pivot_rotation);
    }
    debug!("Rotated flag {:?} by {} degrees", entity, angle_degrees);
    Ok(())
}

/// Rotate one configured step in `direction`.
pub fn rotate_in_direction(
    world: &mut World,
    entity: Entity,
    direction: RotateDirection,
) -> Result<(), RotateError> {
    let step = world
        .get::<FlagRotator>(entity)
        .map(|rotator| rotator.step(direction))
        .ok_or(RotateError::NotAFlag(entity))?;
    rotate_flag(world, entity, step)
}

pub fn rotate_clockwise(world: &mut World, entity: Entity) -> Result<(), RotateError> {
    rotate_in_direction(world, entity, RotateDirection::Clockwise)
}

pub fn rotate_counterclockwise(world: &mut World, entity: Entity) -> Result<(), RotateError> {
    rotate_in_direction(world, entity, RotateDirection::Counterclockwise)
}

/// Entry point for UI wiring: run the rotator action named `action`.
pub fn invoke_part_action(world: &mut World, entity: Entity, action: &str) -> Result<(), RotateError> {
    let rotator = world
        .get::<FlagRotator>(entity)
        .ok_or(RotateError::NotAFlag(entity))?;
    let direction = rotator
        .action(action)
        .filter(|a| a.active)
        .map(|a| a.direction)
        .ok_or_else(|| RotateError::UnknownAction(action.to_string()))?;
    rotate_in_direction(world, entity, direction)
}

/// Reconcile a pivot with its persisted orientation.
pub fn initialize_orientation(state: &mut OrientationState, pivot: &mut GroundPivot) {
    if state.primed {
        pivot.rotation = state.rotation;
    } else {
        *state = OrientationState::primed(pivot.rotation);
    }
}

/// Per-instance start for flags carrying a [`FlagRotator`].
pub fn observe_flag_spawned(
    trigger: On<PartSpawnedEvent>,
    mut query: Query<(&mut FlagRotator, &mut OrientationState, &mut FlagSite)>,
) {
    let entity = trigger.event().entity;
    let Ok((mut rotator, mut state, mut site)) = query.get_mut(entity) else {
        return;
    };
    if !rotator.is_awake() {
        warn!("Rotator on {:?} was never awakened; it has no actions", entity);
    }
    rotator.on_start();
    let was_primed = state.primed;
    initialize_orientation(&mut state, &mut site.ground_pivot);
    debug!(
        "Initialized rotator on {:?} ({})",
        entity,
        if was_primed { "restored" } else { "seeded" }
    );
}

fn post_no_joint_message(world: &mut World, entity: Entity) {
    let vessel = world
        .get::<VesselName>(entity)
        .map(|v| v.as_str().to_string())
        .unwrap_or_default();
    let Some(text) = world
        .get_resource_mut::<FlavorMessages>()
        .and_then(|mut pool| pool.pick(&vessel))
    else {
        warn!("Can't rotate flag {:?}: no ground joint", entity);
        return;
    };
    match world.get_resource_mut::<ScreenMessages>() {
        Some(mut messages) => messages.post(ScreenMessage::new(
            text,
            FLAVOR_MESSAGE_DURATION,
            ScreenMessageStyle::UpperCenter,
        )),
        None => warn!("No ScreenMessages resource; dropped message: {}", text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_initialize_unprimed_seeds_from_pivot() {
        let tilt = Quat::from_axis_angle(Vec3::X, 0.2);
        let mut pivot = GroundPivot::new(Vec3::ZERO, tilt);
        let mut state = OrientationState::default();
        initialize_orientation(&mut state, &mut pivot);
        assert!(state.primed);
        assert_eq!(state.rotation, tilt);
        assert_eq!(pivot.rotation, tilt);
    }

    #[test]
    fn test_initialize_primed_overrides_pivot() {
        let stored = Quat::from_axis_angle(Vec3::Y, 1.0);
        let mut pivot = GroundPivot::default();
        let mut state = OrientationState::primed(stored);
        initialize_orientation(&mut state, &mut pivot);
        assert_eq!(pivot.rotation, stored);
        assert_eq!(state, OrientationState::primed(stored));
    }
}
