//! Flagturn library.
//!
//! Adds yaw adjustment to planted flags: a rotator module is injected once
//! into the shared flag template, every flag spawned afterwards inherits it,
//! and UI actions turn the flag about its ground pivot while keeping the
//! ground joint and persisted orientation consistent.
//!
//! - [`components`] – ECS components (flag site, ground joint, rotator, orientation)
//! - [`events`] – joint requests and part spawn notifications
//! - [`resources`] – part templates, configuration, screen messages
//! - [`systems`] – injector, guard, rotation transaction, spawning, persistence

pub mod components;
pub mod events;
pub mod resources;
pub mod systems;
