//! Scoped registration of the flag observers.
//!
//! [`RotatorHooks::install`] subscribes the spawn-time rotator start and the
//! flag site's joint handlers. [`RotatorHooks::uninstall`] despawns the
//! observer entities again, which unsubscribes them. Installing twice is a
//! no-op.

use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::systems::flagsite::{observe_set_joint, observe_unset_joint};
use crate::systems::rotation::observe_flag_spawned;

/// Observer entities owned by the flag hooks.
#[derive(Resource, Debug)]
pub struct RotatorHooks {
    observers: Vec<Entity>,
}

impl RotatorHooks {
    /// Register the observers. Returns false if they were already registered.
    pub fn install(world: &mut World) -> bool {
        if world.contains_resource::<RotatorHooks>() {
            debug!("Rotator hooks already installed");
            return false;
        }
        let mut observers = Vec::with_capacity(3);
        observers.push(world.add_observer(observe_flag_spawned).id());
        observers.push(world.add_observer(observe_unset_joint).id());
        observers.push(world.add_observer(observe_set_joint).id());
        info!("Installed {} rotator hooks", observers.len());
        world.insert_resource(RotatorHooks { observers });
        true
    }

    /// Remove the observers. Returns false if none were registered.
    pub fn uninstall(world: &mut World) -> bool {
        let Some(hooks) = world.remove_resource::<RotatorHooks>() else {
            return false;
        };
        for observer in hooks.observers {
            world.despawn(observer);
        }
        info!("Uninstalled rotator hooks");
        true
    }

    pub fn observers(&self) -> &[Entity] {
        &self.observers
    }
}
