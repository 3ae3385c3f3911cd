//! Flag site observers: release and recreate the ground joint.
//!
//! The joint is recreated at the pivot position, capturing the part's current
//! rotation. Entities without a [`GroundJoint`] component are left alone; the
//! site only manages a joint the host already gave the flag.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::flagsite::FlagSite;
use crate::components::groundjoint::{GroundJoint, JointAttachment};
use crate::components::parttransform::PartTransform;
use crate::events::joint::{SetJointEvent, UnsetJointEvent};

pub fn observe_unset_joint(trigger: On<UnsetJointEvent>, mut joints: Query<&mut GroundJoint>) {
    let entity = trigger.event().entity;
    if let Ok(mut joint) = joints.get_mut(entity) {
        if joint.release().is_some() {
            debug!("Released ground joint of {:?}", entity);
        }
    }
}

pub fn observe_set_joint(
    trigger: On<SetJointEvent>,
    mut query: Query<(&FlagSite, &PartTransform, &mut GroundJoint)>,
) {
    let entity = trigger.event().entity;
    let Ok((site, transform, mut joint)) = query.get_mut(entity) else {
        return;
    };
    joint.attachment = Some(JointAttachment {
        anchor: site.ground_pivot.position,
        rotation: transform.rotation,
    });
    debug!(
        "Recreated ground joint of {:?} at {:?}",
        entity, site.ground_pivot.position
    );
}
