//! Event types exchanged between the host and the rotator.
//!
//! Submodules:
//! - [`joint`] – requests to the flag site to release or recreate the ground joint
//! - [`partspawned`] – notification that an instance was created from a template
pub mod joint;
pub mod partspawned;
