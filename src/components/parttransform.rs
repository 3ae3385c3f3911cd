//! World-space pose of a part.
//!
//! For a root part this is also the pose of its whole vessel: moving the root
//! moves the vessel. Non-root parts carry a [`ChildOf`](bevy_ecs::hierarchy::ChildOf)
//! link to their parent and are never repositioned directly.

use bevy_ecs::prelude::Component;
use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Position and orientation of a part in world space.
#[derive(Component, Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PartTransform {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Default for PartTransform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

impl PartTransform {
    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// Rotate this pose by `delta` about `pivot` instead of about its own origin.
    pub fn rotate_about(&mut self, pivot: Vec3, delta: Quat) {
        self.position = delta * (self.position - pivot) + pivot;
        self.rotation = (delta * self.rotation).normalize();
    }
}
