//! ECS resources made available to systems.
//!
//! Overview
//! - `injectionlatch` – templates the injector has already handled
//! - `partlibrary` – part templates and the host's attach paths
//! - `rotatorconfig` – step angle and action labels loaded from INI
//! - `screenmessages` – on-screen messages and the flavor text pool
//! - `worldtime` – simulation time and delta
pub mod injectionlatch;
pub mod partlibrary;
pub mod rotatorconfig;
pub mod screenmessages;
pub mod worldtime;
