//! Persisted orientation of a flag's ground pivot.
//!
//! [`OrientationState`] is the only per-flag data the rotator persists. It
//! holds no logic of its own; the rotation systems consult and update it.
//!
//! - `primed == false`: nothing authoritative stored yet. The first
//!   initialization pass seeds `rotation` from the pivot and sets `primed`.
//! - `primed == true`: `rotation` is reapplied to the pivot on every load.

use bevy_ecs::prelude::Component;
use glam::Quat;
use serde::{Deserialize, Serialize};

#[derive(Component, Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrientationState {
    /// Ground pivot rotation, stored as `[x, y, z, w]`.
    #[serde(default = "identity")]
    pub rotation: Quat,
    /// Whether `rotation` is authoritative.
    #[serde(default)]
    pub primed: bool,
}

fn identity() -> Quat {
    Quat::IDENTITY
}

impl Default for OrientationState {
    fn default() -> Self {
        Self {
            rotation: Quat::IDENTITY,
            primed: false,
        }
    }
}

impl OrientationState {
    /// A primed state holding `rotation`.
    pub fn primed(rotation: Quat) -> Self {
        Self {
            rotation,
            primed: true,
        }
    }

    /// Serialize for the host's save pass.
    pub fn save(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Restore from the host's load pass. Missing fields take their defaults.
    pub fn load(node: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(node)
    }
}
