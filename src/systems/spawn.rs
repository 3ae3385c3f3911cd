//! Instantiating parts from their templates.
//!
//! [`spawn_part`] is the host's creation path for both fresh placements and
//! parts restored from a save. It clones every module of the template onto
//! the new entity, places the flag site's ground pivot, and finally triggers
//! [`PartSpawnedEvent`] so per-instance start hooks can run.

use bevy_ecs::hierarchy::ChildOf;
use bevy_ecs::prelude::*;
use glam::{Quat, Vec3};
use log::info;

use crate::components::groundjoint::GroundJoint;
use crate::components::orientation::OrientationState;
use crate::components::part::{Part, VesselName};
use crate::components::parttransform::PartTransform;
use crate::events::partspawned::PartSpawnedEvent;
use crate::resources::partlibrary::{HostError, PartLibrary, PartModule};

/// Where and how to create a part.
#[derive(Debug, Clone)]
pub struct PartPlacement {
    pub position: Vec3,
    pub rotation: Quat,
    pub vessel_name: String,
    /// Parent part, for non-root members of a vessel.
    pub parent: Option<Entity>,
    /// Whether the host gives the part a ground joint right away.
    pub grounded: bool,
    /// Persisted orientation from a save, if any.
    pub orientation: Option<OrientationState>,
}

impl Default for PartPlacement {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            vessel_name: "Flag".to_string(),
            parent: None,
            grounded: true,
            orientation: None,
        }
    }
}

impl PartPlacement {
    pub fn at(position: Vec3, rotation: Quat) -> Self {
        Self {
            position,
            rotation,
            ..Self::default()
        }
    }

    pub fn with_vessel_name(mut self, name: impl Into<String>) -> Self {
        self.vessel_name = name.into();
        self
    }

    pub fn with_parent(mut self, parent: Entity) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn with_grounded(mut self, grounded: bool) -> Self {
        self.grounded = grounded;
        self
    }

    pub fn with_orientation(mut self, orientation: OrientationState) -> Self {
        self.orientation = Some(orientation);
        self
    }
}

/// Spawn an instance of `part_name` and announce it.
pub fn spawn_part(
    world: &mut World,
    part_name: &str,
    placement: PartPlacement,
) -> Result<Entity, HostError> {
    let modules: Vec<PartModule> = {
        let mut library = world
            .get_resource_mut::<PartLibrary>()
            .ok_or_else(|| HostError::UnknownPart(part_name.to_string()))?;
        let template = library
            .get_mut(part_name)
            .ok_or_else(|| HostError::UnknownPart(part_name.to_string()))?;
        template.record_instance();
        template.modules().cloned().collect()
    };

    let mut entity = world.spawn((
        Part::new(part_name),
        PartTransform::new(placement.position, placement.rotation),
        VesselName(placement.vessel_name.clone()),
    ));
    for module in modules {
        match module {
            PartModule::FlagSite(mut site) => {
                site.place_pivot(placement.position, placement.rotation);
                if placement.grounded {
                    entity.insert(GroundJoint::attached(
                        site.ground_pivot.position,
                        placement.rotation,
                    ));
                }
                entity.insert(site);
            }
            PartModule::FlagRotator(rotator) => {
                entity.insert(rotator);
                if placement.orientation.is_none() {
                    entity.insert(OrientationState::default());
                }
            }
        }
    }
    // Persisted orientation is kept even when the template has no rotator.
    if let Some(orientation) = placement.orientation {
        entity.insert(orientation);
    }
    if let Some(parent) = placement.parent {
        entity.insert(ChildOf(parent));
    }
    let id = entity.id();

    info!(
        "Spawned '{}' for vessel '{}' as {:?}",
        part_name, placement.vessel_name, id
    );
    world.trigger(PartSpawnedEvent {
        entity: id,
        part_name: part_name.to_string(),
    });
    Ok(id)
}
