//! Save files for planted flags.
//!
//! A [`SaveGame`] lists every root part with its template name, vessel name,
//! pose, whether it was grounded, and its [`OrientationState`]. Loading goes
//! through [`spawn_part`], exactly like a new placement, so the rotator's
//! spawn-time pass reapplies the stored orientation.
//!
//! The ground pivot's rotation is deliberately not saved: the host rebuilds
//! the pivot from the part pose, and the orientation state restores it.

use bevy_ecs::hierarchy::ChildOf;
use bevy_ecs::prelude::*;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::components::groundjoint::GroundJoint;
use crate::components::orientation::OrientationState;
use crate::components::part::{Part, VesselName};
use crate::components::parttransform::PartTransform;
use crate::resources::partlibrary::HostError;
use crate::systems::spawn::{PartPlacement, spawn_part};

pub const SAVE_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedPart {
    pub part: String,
    pub vessel: String,
    pub transform: PartTransform,
    #[serde(default)]
    pub grounded: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<OrientationState>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveGame {
    pub version: u32,
    pub parts: Vec<SavedPart>,
}

impl Default for SaveGame {
    fn default() -> Self {
        Self {
            version: SAVE_VERSION,
            parts: Vec::new(),
        }
    }
}

/// Collect all root parts in spawn order.
pub fn save_parts(world: &mut World) -> SaveGame {
    let mut query = world.query_filtered::<(
        Entity,
        &Part,
        &VesselName,
        &PartTransform,
        Option<&GroundJoint>,
        Option<&OrientationState>,
    ), Without<ChildOf>>();

    let mut saved: Vec<(Entity, SavedPart)> = query
        .iter(world)
        .map(|(entity, part, vessel, transform, joint, orientation)| {
            (
                entity,
                SavedPart {
                    part: part.name.clone(),
                    vessel: vessel.as_str().to_string(),
                    transform: *transform,
                    grounded: joint.is_some_and(GroundJoint::is_attached),
                    orientation: orientation.copied(),
                },
            )
        })
        .collect();
    saved.sort_by_key(|(entity, _)| *entity);

    SaveGame {
        version: SAVE_VERSION,
        parts: saved.into_iter().map(|(_, part)| part).collect(),
    }
}

/// Respawn every part in `save`. Returns the new entities in save order.
pub fn load_parts(world: &mut World, save: &SaveGame) -> Result<Vec<Entity>, HostError> {
    if save.version > SAVE_VERSION {
        warn!(
            "Save version {} is newer than supported version {}",
            save.version, SAVE_VERSION
        );
    }
    let mut entities = Vec::with_capacity(save.parts.len());
    for saved in &save.parts {
        let mut placement = PartPlacement::at(saved.transform.position, saved.transform.rotation)
            .with_vessel_name(saved.vessel.clone())
            .with_grounded(saved.grounded);
        if let Some(orientation) = saved.orientation {
            placement = placement.with_orientation(orientation);
        }
        entities.push(spawn_part(world, &saved.part, placement)?);
    }
    info!("Loaded {} part(s)", entities.len());
    Ok(entities)
}

pub fn write_save(path: impl AsRef<Path>, save: &SaveGame) -> Result<(), PersistenceError> {
    let text = serde_json::to_string_pretty(save)?;
    std::fs::write(path.as_ref(), text)?;
    info!("Saved {} part(s) to {:?}", save.parts.len(), path.as_ref());
    Ok(())
}

pub fn read_save(path: impl AsRef<Path>) -> Result<SaveGame, PersistenceError> {
    let text = std::fs::read_to_string(path.as_ref())?;
    Ok(serde_json::from_str(&text)?)
}
