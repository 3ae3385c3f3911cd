//! Identity components shared by every part spawned from a template.

use bevy_ecs::prelude::Component;

/// Marks an entity as an instance of a named part template.
#[derive(Component, Clone, Debug, PartialEq, Eq)]
pub struct Part {
    /// Name of the template this entity was spawned from (e.g. `"flag"`).
    pub name: String,
}

impl Part {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Display name of the vessel a part belongs to.
#[derive(Component, Clone, Debug, Default, PartialEq, Eq)]
pub struct VesselName(pub String);

impl VesselName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
