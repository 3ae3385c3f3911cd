//! Rotator module that lets a planted flag be turned about its pole.
//!
//! A [`FlagRotator`] is attached once to the shared `flag` template by the
//! [injector](crate::systems::injector) and is cloned onto every flag spawned
//! afterwards. It carries its configuration (step angle, action labels) and
//! the two UI actions it exposes.
//!
//! # Lifecycle
//!
//! 1. [`FlagRotator::from_config`] builds an un-awakened module.
//! 2. [`FlagRotator::awake`] performs first-time setup: it registers the two
//!    actions with their default labels. The host normally calls this when a
//!    module is added to a template, but not for inert templates, so the
//!    injector calls it itself.
//! 3. [`FlagRotator::on_start`] runs for every spawned flag and applies label
//!    overrides from the configuration.
//!
//! The actual rotation lives in [`crate::systems::rotation`].

use bevy_ecs::prelude::Component;
use smallvec::SmallVec;

use crate::resources::rotatorconfig::RotatorConfig;

/// Name of the clockwise action, as used by UI wiring.
pub const CLOCKWISE_ACTION: &str = "Clockwise";
/// Name of the counterclockwise action, as used by UI wiring.
pub const COUNTERCLOCKWISE_ACTION: &str = "Counterclockwise";

/// Which way to turn the flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RotateDirection {
    Clockwise,
    Counterclockwise,
}

impl RotateDirection {
    /// Sign applied to the step angle.
    pub fn sign(self) -> f32 {
        match self {
            RotateDirection::Clockwise => 1.0,
            RotateDirection::Counterclockwise => -1.0,
        }
    }

    pub fn action_name(self) -> &'static str {
        match self {
            RotateDirection::Clockwise => CLOCKWISE_ACTION,
            RotateDirection::Counterclockwise => COUNTERCLOCKWISE_ACTION,
        }
    }

    pub fn from_action_name(name: &str) -> Option<Self> {
        match name {
            CLOCKWISE_ACTION => Some(RotateDirection::Clockwise),
            COUNTERCLOCKWISE_ACTION => Some(RotateDirection::Counterclockwise),
            _ => None,
        }
    }
}

/// A triggerable action exposed to the UI.
#[derive(Clone, Debug, PartialEq)]
pub struct PartAction {
    /// Stable name used to invoke the action.
    pub name: &'static str,
    /// Label shown to the player.
    pub label: String,
    pub direction: RotateDirection,
    pub active: bool,
}

impl PartAction {
    fn new(direction: RotateDirection) -> Self {
        Self {
            name: direction.action_name(),
            label: direction.action_name().to_string(),
            direction,
            active: true,
        }
    }
}

#[derive(Component, Clone, Debug, PartialEq)]
pub struct FlagRotator {
    /// Step angle in degrees for one click.
    pub delta_angle: f32,
    /// Label override for the clockwise action; empty keeps the default.
    pub clockwise_name: String,
    /// Label override for the counterclockwise action; empty keeps the default.
    pub counterclockwise_name: String,
    actions: SmallVec<[PartAction; 2]>,
}

impl Default for FlagRotator {
    fn default() -> Self {
        Self::from_config(&RotatorConfig::default())
    }
}

impl FlagRotator {
    /// Build an un-awakened rotator from configuration.
    pub fn from_config(config: &RotatorConfig) -> Self {
        Self {
            delta_angle: config.delta_angle,
            clockwise_name: config.clockwise_name.clone(),
            counterclockwise_name: config.counterclockwise_name.clone(),
            actions: SmallVec::new(),
        }
    }

    /// First-time setup: register the UI actions with default labels.
    ///
    /// Calling it again is a no-op.
    pub fn awake(&mut self) {
        if self.is_awake() {
            return;
        }
        self.actions.push(PartAction::new(RotateDirection::Clockwise));
        self.actions.push(PartAction::new(RotateDirection::Counterclockwise));
    }

    pub fn is_awake(&self) -> bool {
        !self.actions.is_empty()
    }

    /// Per-instance start: apply non-empty label overrides.
    pub fn on_start(&mut self) {
        for action in self.actions.iter_mut() {
            let label = match action.direction {
                RotateDirection::Clockwise => &self.clockwise_name,
                RotateDirection::Counterclockwise => &self.counterclockwise_name,
            };
            if !label.is_empty() {
                action.label = label.clone();
            }
        }
    }

    pub fn actions(&self) -> &[PartAction] {
        &self.actions
    }

    pub fn action(&self, name: &str) -> Option<&PartAction> {
        self.actions.iter().find(|a| a.name == name)
    }

    /// Signed angle for one step in `direction`.
    pub fn step(&self, direction: RotateDirection) -> f32 {
        direction.sign() * self.delta_angle
    }
}
