//! Expiry of on-screen messages.
use bevy_ecs::prelude::*;

use crate::resources::screenmessages::ScreenMessages;
use crate::resources::worldtime::WorldTime;

/// Count down every message by this frame's delta and drop expired ones.
pub fn update_screen_messages(time: Res<WorldTime>, mut messages: ResMut<ScreenMessages>) {
    if messages.is_empty() {
        return;
    }
    messages.tick(time.delta);
}
