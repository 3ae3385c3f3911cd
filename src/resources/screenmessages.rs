//! On-screen message queue and the flavor text pool.
//!
//! [`ScreenMessages`] holds the messages currently shown to the player. Each
//! one expires after its duration; see
//! [`update_screen_messages`](crate::systems::screenmessages::update_screen_messages).
//!
//! [`FlavorMessages`] is the pool the rotator draws from when a flag is
//! turned before it has been planted. Selection is uniform and independent;
//! repeats are allowed. `{vessel}` in a message is replaced by the vessel name.

use bevy_ecs::prelude::Resource;
use fastrand::Rng;

/// How long flavor messages stay on screen, in seconds.
pub const FLAVOR_MESSAGE_DURATION: f32 = 5.0;

const DEFAULT_FLAVOR_MESSAGES: [&str; 5] = [
    "That seems pointless. The insolent flag remains motionless.",
    "Manufacturer's tip: place pointy end into the ground before adjusting flag orientation.",
    "User error: {vessel} lacks the intelligence for this task",
    "User error: replace user and try again",
    "This flag appears to be defective. Or incorrectly planted. Probably the second one.",
];

/// Where a message is drawn on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScreenMessageStyle {
    UpperLeft,
    UpperCenter,
    UpperRight,
    LowerCenter,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScreenMessage {
    pub text: String,
    /// Total time on screen in seconds.
    pub duration: f32,
    /// Time left before the message disappears.
    pub remaining: f32,
    pub style: ScreenMessageStyle,
}

impl ScreenMessage {
    pub fn new(text: impl Into<String>, duration: f32, style: ScreenMessageStyle) -> Self {
        Self {
            text: text.into(),
            duration,
            remaining: duration,
            style,
        }
    }
}

/// Messages currently on screen, oldest first.
#[derive(Resource, Debug, Default)]
pub struct ScreenMessages {
    pub messages: Vec<ScreenMessage>,
}

impl ScreenMessages {
    pub fn post(&mut self, message: ScreenMessage) {
        self.messages.push(message);
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&ScreenMessage> {
        self.messages.last()
    }

    /// Advance message timers by `dt` seconds and drop expired messages.
    pub fn tick(&mut self, dt: f32) {
        for message in self.messages.iter_mut() {
            message.remaining -= dt;
        }
        self.messages.retain(|m| m.remaining > 0.0);
    }
}

/// Pool of flavor strings for failed rotation attempts.
#[derive(Resource, Debug, Clone)]
pub struct FlavorMessages {
    pub messages: Vec<String>,
    rng: Rng,
}

impl Default for FlavorMessages {
    fn default() -> Self {
        Self::new(DEFAULT_FLAVOR_MESSAGES.iter().map(|s| s.to_string()).collect())
    }
}

impl FlavorMessages {
    pub fn new(messages: Vec<String>) -> Self {
        Self {
            messages,
            rng: Rng::new(),
        }
    }

    /// Use a seeded generator, for reproducible selection.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Rng::with_seed(seed);
        self
    }

    /// Draw one message, substituting `vessel` for `{vessel}`.
    pub fn pick(&mut self, vessel: &str) -> Option<String> {
        if self.messages.is_empty() {
            return None;
        }
        let index = self.rng.usize(..self.messages.len());
        Some(self.messages[index].replace("{vessel}", vessel))
    }
}
