//! Systems and exclusive world functions.
//!
//! - [`flagsite`] – joint release/recreate observers of the flag site
//! - [`guard`] – root and joint preconditions for rotation
//! - [`hooks`] – scoped observer registration
//! - [`injector`] – one-time rotator injection into the flag template
//! - [`persistence`] – JSON save files
//! - [`rotation`] – the rotation transaction and spawn-time initialization
//! - [`screenmessages`] – message expiry
//! - [`spawn`] – instantiating parts from templates
//! - [`time`] – world clock update
pub mod flagsite;
pub mod guard;
pub mod hooks;
pub mod injector;
pub mod persistence;
pub mod rotation;
pub mod screenmessages;
pub mod spawn;
pub mod time;
