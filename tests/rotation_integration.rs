//! Integration tests for the rotation transaction and its guard.
//!
//! # Usage
//!
//! ```sh
//! cargo test --test rotation_integration
//! ```

use bevy_ecs::prelude::*;
use glam::{Quat, Vec3};

use flagturn::components::flagrotator::{CLOCKWISE_ACTION, COUNTERCLOCKWISE_ACTION, FlagRotator};
use flagturn::components::flagsite::FlagSite;
use flagturn::components::groundjoint::GroundJoint;
use flagturn::components::orientation::OrientationState;
use flagturn::components::parttransform::PartTransform;
use flagturn::resources::partlibrary::{FLAG_PART, PartLibrary};
use flagturn::resources::rotatorconfig::RotatorConfig;
use flagturn::resources::screenmessages::{
    FLAVOR_MESSAGE_DURATION, FlavorMessages, ScreenMessageStyle, ScreenMessages,
};
use flagturn::resources::worldtime::WorldTime;
use flagturn::systems::guard::RotateBlocked;
use flagturn::systems::hooks::RotatorHooks;
use flagturn::systems::injector::inject_flag_rotator;
use flagturn::systems::rotation::{
    RotateError, invoke_part_action, rotate_clockwise, rotate_counterclockwise, rotate_flag,
};
use flagturn::systems::screenmessages::update_screen_messages;
use flagturn::systems::spawn::{PartPlacement, spawn_part};
use flagturn::systems::time::update_world_time;

const EPSILON: f32 = 1e-5;

fn make_world() -> World {
    let mut world = World::new();
    world.insert_resource(RotatorConfig::default());
    world.insert_resource(PartLibrary::with_stock_parts());
    world.insert_resource(ScreenMessages::default());
    world.insert_resource(FlavorMessages::default().with_seed(42));
    world.insert_resource(WorldTime::default());
    RotatorHooks::install(&mut world);
    inject_flag_rotator(&mut world, FLAG_PART).unwrap();
    world
}

fn plant(world: &mut World, placement: PartPlacement) -> Entity {
    spawn_part(world, FLAG_PART, placement).unwrap()
}

fn pivot_rotation(world: &World, flag: Entity) -> Quat {
    world.get::<FlagSite>(flag).unwrap().ground_pivot.rotation
}

/// Same rotation, ignoring the quaternion sign.
fn same_rotation(a: Quat, b: Quat) -> bool {
    a.dot(b).abs() > 1.0 - EPSILON
}

/// Snapshot of everything a blocked rotation must leave alone.
fn snapshot(world: &World, flag: Entity) -> (PartTransform, FlagSite, OrientationState) {
    (
        *world.get::<PartTransform>(flag).unwrap(),
        world.get::<FlagSite>(flag).unwrap().clone(),
        *world.get::<OrientationState>(flag).unwrap(),
    )
}

// =============================================================================
// Successful rotation
// =============================================================================

#[test]
fn clockwise_from_identity_turns_five_degrees_about_up() {
    let mut world = make_world();
    let flag = plant(&mut world, PartPlacement::at(Vec3::new(0.0, 1.5, 0.0), Quat::IDENTITY));

    rotate_clockwise(&mut world, flag).unwrap();

    let expected = Quat::from_axis_angle(Vec3::Y, 5f32.to_radians());
    assert!(pivot_rotation(&world, flag).abs_diff_eq(expected, EPSILON));

    let state = world.get::<OrientationState>(flag).unwrap();
    assert!(state.primed);
    assert_eq!(state.rotation, pivot_rotation(&world, flag));

    let transform = world.get::<PartTransform>(flag).unwrap();
    assert!(transform.rotation.abs_diff_eq(expected, EPSILON));
}

#[test]
fn rotation_pivots_about_anchor_not_origin() {
    let mut world = make_world();
    let flag = plant(&mut world, PartPlacement::at(Vec3::new(0.0, 1.5, 0.0), Quat::IDENTITY));
    // Lean the part away from the pole base so the pivot choice is visible.
    world.get_mut::<PartTransform>(flag).unwrap().position = Vec3::new(1.0, 1.5, 0.0);

    rotate_flag(&mut world, flag, 90.0).unwrap();

    let pivot = world.get::<FlagSite>(flag).unwrap().ground_pivot.position;
    assert!(pivot.abs_diff_eq(Vec3::ZERO, EPSILON));
    let transform = world.get::<PartTransform>(flag).unwrap();
    assert!(
        transform.position.abs_diff_eq(Vec3::new(0.0, 1.5, -1.0), EPSILON),
        "got {:?}",
        transform.position
    );
}

#[test]
fn rotation_recreates_joint_at_new_pose() {
    let mut world = make_world();
    let flag = plant(&mut world, PartPlacement::default());

    rotate_flag(&mut world, flag, 30.0).unwrap();

    let joint = world.get::<GroundJoint>(flag).unwrap();
    let attachment = joint.attachment.expect("joint should be recreated");
    let transform = world.get::<PartTransform>(flag).unwrap();
    assert_eq!(attachment.rotation, transform.rotation);
    assert_eq!(
        attachment.anchor,
        world.get::<FlagSite>(flag).unwrap().ground_pivot.position
    );
}

#[test]
fn rotate_then_inverse_restores_pivot() {
    let mut world = make_world();
    let slope = Quat::from_axis_angle(Vec3::new(1.0, 0.0, 1.0).normalize(), 0.3);
    let flag = plant(&mut world, PartPlacement::at(Vec3::new(4.0, 2.0, -1.0), slope));
    let before = pivot_rotation(&world, flag);
    let position_before = world.get::<PartTransform>(flag).unwrap().position;

    for angle in [5.0, 37.5, -120.0, 400.0] {
        rotate_flag(&mut world, flag, angle).unwrap();
        rotate_flag(&mut world, flag, -angle).unwrap();
        assert!(
            same_rotation(pivot_rotation(&world, flag), before),
            "angle {} did not invert",
            angle
        );
    }
    let position_after = world.get::<PartTransform>(flag).unwrap().position;
    assert!(position_after.abs_diff_eq(position_before, 1e-4));
}

#[test]
fn clockwise_then_counterclockwise_cancel() {
    let mut world = make_world();
    let flag = plant(&mut world, PartPlacement::default());
    let before = pivot_rotation(&world, flag);

    rotate_clockwise(&mut world, flag).unwrap();
    rotate_counterclockwise(&mut world, flag).unwrap();

    assert!(same_rotation(pivot_rotation(&world, flag), before));
}

#[test]
fn seventy_two_steps_equal_one_full_turn() {
    let mut world = make_world();
    let stepped = plant(&mut world, PartPlacement::default());
    let turned = plant(&mut world, PartPlacement::default());
    let start = pivot_rotation(&world, stepped);

    for _ in 0..72 {
        rotate_clockwise(&mut world, stepped).unwrap();
    }
    rotate_flag(&mut world, turned, 360.0).unwrap();

    let a = pivot_rotation(&world, stepped);
    let b = pivot_rotation(&world, turned);
    assert!(same_rotation(a, b));
    assert!(same_rotation(a, start));
}

#[test]
fn steps_use_configured_delta_angle() {
    let mut world = World::new();
    world.insert_resource(RotatorConfig {
        delta_angle: 45.0,
        ..RotatorConfig::default()
    });
    world.insert_resource(PartLibrary::with_stock_parts());
    world.insert_resource(ScreenMessages::default());
    world.insert_resource(FlavorMessages::default());
    RotatorHooks::install(&mut world);
    inject_flag_rotator(&mut world, FLAG_PART).unwrap();
    let flag = plant(&mut world, PartPlacement::default());

    rotate_counterclockwise(&mut world, flag).unwrap();

    let expected = Quat::from_axis_angle(Vec3::Y, -45f32.to_radians());
    assert!(pivot_rotation(&world, flag).abs_diff_eq(expected, EPSILON));
}

// =============================================================================
// Guard
// =============================================================================

#[test]
fn no_joint_posts_one_message_and_changes_nothing() {
    let mut world = make_world();
    let flag = plant(&mut world, PartPlacement::default().with_grounded(false));
    let before = snapshot(&world, flag);

    let result = rotate_clockwise(&mut world, flag);

    assert_eq!(result, Err(RotateError::Blocked(RotateBlocked::NoJoint)));
    assert_eq!(snapshot(&world, flag), before);

    let messages = world.resource::<ScreenMessages>();
    assert_eq!(messages.len(), 1);
    let message = messages.last().unwrap();
    assert_eq!(message.duration, FLAVOR_MESSAGE_DURATION);
    assert_eq!(message.style, ScreenMessageStyle::UpperCenter);
    assert!(!message.text.is_empty());
    assert!(!message.text.contains("{vessel}"));
}

#[test]
fn flavor_message_comes_from_pool() {
    let mut world = make_world();
    world.insert_resource(FlavorMessages::new(vec!["{vessel} is loose".to_string()]));
    let flag = plant(
        &mut world,
        PartPlacement::default()
            .with_grounded(false)
            .with_vessel_name("Jeb's Flag"),
    );

    let _ = rotate_clockwise(&mut world, flag);

    let messages = world.resource::<ScreenMessages>();
    assert_eq!(messages.last().unwrap().text, "Jeb's Flag is loose");
}

#[test]
fn released_joint_blocks_rotation() {
    let mut world = make_world();
    let flag = plant(&mut world, PartPlacement::default());
    world.get_mut::<GroundJoint>(flag).unwrap().release();
    let before = snapshot(&world, flag);

    assert!(rotate_flag(&mut world, flag, 10.0).is_err());
    assert_eq!(snapshot(&world, flag), before);
}

#[test]
fn non_root_logs_only_and_changes_nothing() {
    let mut world = make_world();
    let base = world.spawn(PartTransform::default()).id();
    let flag = plant(&mut world, PartPlacement::default().with_parent(base));
    let before = snapshot(&world, flag);

    let result = rotate_clockwise(&mut world, flag);

    assert_eq!(result, Err(RotateError::Blocked(RotateBlocked::NotRoot)));
    assert_eq!(snapshot(&world, flag), before);
    assert!(world.resource::<ScreenMessages>().is_empty());
    assert!(world.get::<GroundJoint>(flag).unwrap().is_attached());
}

#[test]
fn non_finite_angle_is_rejected_and_changes_nothing() {
    let mut world = make_world();
    let flag = plant(&mut world, PartPlacement::default());
    let before = snapshot(&world, flag);

    for angle in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
        assert_eq!(rotate_flag(&mut world, flag, angle), Err(RotateError::InvalidAngle));
    }

    assert_eq!(snapshot(&world, flag), before);
    assert!(world.get::<GroundJoint>(flag).unwrap().is_attached());
    assert!(world.resource::<ScreenMessages>().is_empty());
    assert!(rotate_clockwise(&mut world, flag).is_ok());
}

#[test]
fn rotation_without_hooks_still_turns_flag() {
    let mut world = make_world();
    let flag = plant(&mut world, PartPlacement::default());
    RotatorHooks::uninstall(&mut world);
    let before = *world.get::<PartTransform>(flag).unwrap();

    assert!(rotate_clockwise(&mut world, flag).is_ok());

    assert_ne!(*world.get::<PartTransform>(flag).unwrap(), before);
    assert!(same_rotation(
        world.get::<OrientationState>(flag).unwrap().rotation,
        pivot_rotation(&world, flag)
    ));
}

#[test]
fn non_flag_entity_is_rejected() {
    let mut world = make_world();
    let other = world.spawn(PartTransform::default()).id();
    assert_eq!(
        rotate_flag(&mut world, other, 5.0),
        Err(RotateError::NotAFlag(other))
    );
}

#[test]
fn flavor_messages_expire_after_five_seconds() {
    let mut world = make_world();
    let flag = plant(&mut world, PartPlacement::default().with_grounded(false));
    let _ = rotate_clockwise(&mut world, flag);

    let mut schedule = Schedule::default();
    schedule.add_systems(update_screen_messages);

    update_world_time(&mut world, 4.0);
    schedule.run(&mut world);
    assert_eq!(world.resource::<ScreenMessages>().len(), 1);

    update_world_time(&mut world, 1.5);
    schedule.run(&mut world);
    assert!(world.resource::<ScreenMessages>().is_empty());
}

// =============================================================================
// UI actions
// =============================================================================

#[test]
fn actions_rotate_in_opposite_directions() {
    let mut world = make_world();
    let flag = plant(&mut world, PartPlacement::default());

    invoke_part_action(&mut world, flag, CLOCKWISE_ACTION).unwrap();
    let after_cw = pivot_rotation(&world, flag);
    invoke_part_action(&mut world, flag, COUNTERCLOCKWISE_ACTION).unwrap();
    invoke_part_action(&mut world, flag, COUNTERCLOCKWISE_ACTION).unwrap();
    let after_ccw = pivot_rotation(&world, flag);

    let cw = Quat::from_axis_angle(Vec3::Y, 5f32.to_radians());
    assert!(after_cw.abs_diff_eq(cw, EPSILON));
    assert!(after_ccw.abs_diff_eq(cw.inverse(), EPSILON));
}

#[test]
fn unknown_action_is_rejected() {
    let mut world = make_world();
    let flag = plant(&mut world, PartPlacement::default());
    assert_eq!(
        invoke_part_action(&mut world, flag, "Upside down"),
        Err(RotateError::UnknownAction("Upside down".to_string()))
    );
}

#[test]
fn spawned_flag_has_labelled_actions() {
    let mut world = World::new();
    let mut config = RotatorConfig::default();
    config
        .load_from_str("[flag_rotator]\nclockwise_name = Widdershins no more\n")
        .unwrap();
    world.insert_resource(config);
    world.insert_resource(PartLibrary::with_stock_parts());
    RotatorHooks::install(&mut world);
    inject_flag_rotator(&mut world, FLAG_PART).unwrap();

    let flag = plant(&mut world, PartPlacement::default());

    let rotator = world.get::<FlagRotator>(flag).unwrap();
    assert_eq!(rotator.actions().len(), 2);
    assert_eq!(
        rotator.action(CLOCKWISE_ACTION).unwrap().label,
        "Widdershins no more"
    );
    assert_eq!(
        rotator.action(COUNTERCLOCKWISE_ACTION).unwrap().label,
        "Counterclockwise"
    );
}
