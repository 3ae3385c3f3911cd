//! ECS components for flags and the parts they are spawned as.
//!
//! Submodules overview:
//! - [`flagrotator`] – rotator module: step angle, action labels, UI actions
//! - [`flagsite`] – site module owning the ground pivot
//! - [`groundjoint`] – physics joint binding a part to the ground
//! - [`orientation`] – persisted pivot rotation and its `primed` flag
//! - [`part`] – template name and vessel name
//! - [`parttransform`] – world-space pose of a part

pub mod flagrotator;
pub mod flagsite;
pub mod groundjoint;
pub mod orientation;
pub mod part;
pub mod parttransform;
