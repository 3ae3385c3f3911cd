//! Physics joint binding a planted part to the ground.
//!
//! The joint is owned by the host: it is created when a flag settles and
//! dropped when it is knocked loose. The flag site releases and recreates it
//! around a rotation. An entity without this component, or with
//! `attachment == None`, has no joint.

use bevy_ecs::prelude::Component;
use glam::{Quat, Vec3};

/// Pose captured when the joint was created.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JointAttachment {
    /// World-space anchor point of the joint.
    pub anchor: Vec3,
    /// Part rotation at the time the joint was made.
    pub rotation: Quat,
}

#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct GroundJoint {
    pub attachment: Option<JointAttachment>,
}

impl GroundJoint {
    pub fn attached(anchor: Vec3, rotation: Quat) -> Self {
        Self {
            attachment: Some(JointAttachment { anchor, rotation }),
        }
    }

    pub fn is_attached(&self) -> bool {
        self.attachment.is_some()
    }

    /// Drop the joint. Returns the released attachment, if there was one.
    pub fn release(&mut self) -> Option<JointAttachment> {
        self.attachment.take()
    }
}
