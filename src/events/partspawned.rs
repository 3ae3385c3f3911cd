//! Part creation notification.
//!
//! [`spawn_part`](crate::systems::spawn::spawn_part) triggers a
//! [`PartSpawnedEvent`] after an instance has received all of its template's
//! modules, for new placements and for parts restored from a save alike.
//! The rotator listens for it to run its per-instance start.

use bevy_ecs::prelude::*;

#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct PartSpawnedEvent {
    /// The new instance.
    pub entity: Entity,
    /// Name of the template it was spawned from.
    pub part_name: String,
}
