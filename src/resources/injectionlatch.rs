//! One-shot guard for template injection.
//!
//! The injector records each template it has handled here, so that running it
//! again in the same process does nothing.

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashSet;

#[derive(Resource, Debug, Default)]
pub struct InjectionLatch {
    done: FxHashSet<String>,
}

impl InjectionLatch {
    pub fn is_done(&self, template: &str) -> bool {
        self.done.contains(template)
    }

    /// Record `template`. Returns false if it was already recorded.
    pub fn mark(&mut self, template: impl Into<String>) -> bool {
        self.done.insert(template.into())
    }
}
