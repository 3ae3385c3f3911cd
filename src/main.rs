//! Flagturn main entry point.
//!
//! A small driver around the library: it builds a world with the stock flag
//! template, injects the rotator, plants (or loads) a flag, turns it, and
//! optionally writes the result to a save file.
//!
//! # Running
//!
//! ```sh
//! cargo run -- --clockwise 3 --save flags.json
//! cargo run -- --load flags.json --counterclockwise 1
//! ```

use bevy_ecs::prelude::*;
use clap::Parser;
use glam::{Quat, Vec3};
use log::{error, info, warn};
use std::path::PathBuf;

use flagturn::components::flagrotator::{CLOCKWISE_ACTION, COUNTERCLOCKWISE_ACTION, FlagRotator};
use flagturn::components::flagsite::FlagSite;
use flagturn::components::orientation::OrientationState;
use flagturn::components::parttransform::PartTransform;
use flagturn::resources::partlibrary::{FLAG_PART, PartLibrary};
use flagturn::resources::rotatorconfig::RotatorConfig;
use flagturn::resources::screenmessages::{FlavorMessages, ScreenMessages};
use flagturn::resources::worldtime::WorldTime;
use flagturn::systems::hooks::RotatorHooks;
use flagturn::systems::injector::inject_flag_rotator;
use flagturn::systems::persistence::{load_parts, read_save, save_parts, write_save};
use flagturn::systems::rotation::invoke_part_action;
use flagturn::systems::screenmessages::update_screen_messages;
use flagturn::systems::spawn::{PartPlacement, spawn_part};
use flagturn::systems::time::update_world_time;

/// Plant a flag and turn it.
#[derive(Parser)]
#[command(version, about = "Turn planted flags about their pole")]
struct Cli {
    /// INI file with the [flag_rotator] section.
    #[arg(long, value_name = "PATH", default_value = "./flagturn.ini")]
    config: PathBuf,

    /// Restore flags from a save file instead of planting a new one.
    #[arg(long, value_name = "PATH")]
    load: Option<PathBuf>,

    /// Write the flags to a save file on exit.
    #[arg(long, value_name = "PATH")]
    save: Option<PathBuf>,

    /// Number of clockwise steps to apply.
    #[arg(long, default_value_t = 0)]
    clockwise: u32,

    /// Number of counterclockwise steps to apply.
    #[arg(long, default_value_t = 0)]
    counterclockwise: u32,

    /// Plant the flag without a ground joint.
    #[arg(long)]
    unplanted: bool,

    /// Attach the flag under another part so it is not the vessel root.
    #[arg(long)]
    nested: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut world = World::new();
    let mut config = RotatorConfig::with_path(cli.config.clone());
    if let Err(e) = config.load_from_file() {
        warn!("Config file not found or invalid, using defaults: {}", e);
    }
    world.insert_resource(config);
    world.insert_resource(PartLibrary::with_stock_parts());
    world.insert_resource(ScreenMessages::default());
    world.insert_resource(FlavorMessages::default());
    world.insert_resource(WorldTime::default());

    RotatorHooks::install(&mut world);
    if let Err(e) = inject_flag_rotator(&mut world, FLAG_PART) {
        error!("Flag rotation unavailable this session: {}", e);
    }

    let flags = match &cli.load {
        Some(path) => match read_save(path).map_err(|e| e.to_string()).and_then(|save| {
            load_parts(&mut world, &save).map_err(|e| e.to_string())
        }) {
            Ok(flags) => flags,
            Err(e) => {
                error!("Failed to load {:?}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => match plant_flag(&mut world, cli.unplanted, cli.nested) {
            Ok(flag) => vec![flag],
            Err(e) => {
                error!("Failed to plant flag: {}", e);
                std::process::exit(1);
            }
        },
    };

    let steps = std::iter::repeat_n(CLOCKWISE_ACTION, cli.clockwise as usize)
        .chain(std::iter::repeat_n(COUNTERCLOCKWISE_ACTION, cli.counterclockwise as usize));
    for action in steps {
        for &flag in &flags {
            if let Err(e) = invoke_part_action(&mut world, flag, action) {
                warn!("{} on {:?} failed: {}", action, flag, e);
            }
        }
    }

    for &flag in &flags {
        report_flag(&world, flag);
    }
    for message in &world.resource::<ScreenMessages>().messages {
        println!("[{:?}] {}", message.style, message.text);
    }

    // One frame so messages start counting down.
    update_world_time(&mut world, 1.0 / 60.0);
    let mut schedule = Schedule::default();
    schedule.add_systems(update_screen_messages);
    schedule.run(&mut world);
    info!(
        "Frame {}: {} message(s) still on screen",
        world.resource::<WorldTime>().frame_count,
        world.resource::<ScreenMessages>().len()
    );

    if let Some(path) = &cli.save {
        let save = save_parts(&mut world);
        if let Err(e) = write_save(path, &save) {
            error!("Failed to write {:?}: {}", path, e);
        }
    }

    RotatorHooks::uninstall(&mut world);
}

fn plant_flag(
    world: &mut World,
    unplanted: bool,
    nested: bool,
) -> Result<Entity, flagturn::resources::partlibrary::HostError> {
    let mut placement = PartPlacement::at(Vec3::new(0.0, 1.5, 0.0), Quat::IDENTITY)
        .with_vessel_name("Flag")
        .with_grounded(!unplanted);
    if nested {
        let base = world.spawn(PartTransform::default()).id();
        placement = placement.with_parent(base);
    }
    spawn_part(world, FLAG_PART, placement)
}

fn report_flag(world: &World, flag: Entity) {
    let Some(transform) = world.get::<PartTransform>(flag) else {
        return;
    };
    let pivot = world.get::<FlagSite>(flag).map(|s| s.ground_pivot);
    let state = world.get::<OrientationState>(flag);
    let labels: Vec<&str> = world
        .get::<FlagRotator>(flag)
        .map(|r| r.actions().iter().map(|a| a.label.as_str()).collect())
        .unwrap_or_default();
    info!(
        "Flag {:?}: position={:?} rotation={:?} pivot={:?} orientation={:?} actions={:?}",
        flag, transform.position, transform.rotation, pivot, state, labels
    );
}
