//! One-time injection of the rotator into the shared flag template.
//!
//! The stock `flag` template is inert: its public attach path refuses new
//! modules and it never runs module construction callbacks. The injector
//! therefore
//!
//! 1. builds the rotator from [`RotatorConfig`] and calls
//!    [`FlagRotator::awake`] on it directly;
//! 2. attaches it with [`PartTemplate::force_attach`], treating
//!    [`HostError::ModuleListUnavailable`] as the expected outcome;
//! 3. confirms the attachment with [`PartTemplate::has_module`].
//!
//! Without a [`RotatorConfig`] resource nothing is injected.
//!
//! Every flag spawned afterwards inherits the rotator. Injection must happen
//! before the first flag is spawned and is recorded in [`InjectionLatch`] so a
//! second run in the same process does nothing.
//!
//! [`PartTemplate::force_attach`]: crate::resources::partlibrary::PartTemplate::force_attach
//! [`PartTemplate::has_module`]: crate::resources::partlibrary::PartTemplate::has_module

use bevy_ecs::prelude::*;
use log::{debug, info};
use thiserror::Error;

use crate::components::flagrotator::FlagRotator;
use crate::resources::injectionlatch::InjectionLatch;
use crate::resources::partlibrary::{HostError, ModuleKind, PartLibrary, PartModule};
use crate::resources::rotatorconfig::RotatorConfig;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateInjectionError {
    #[error("failed to find part template '{0}'")]
    TemplateMissing(String),
    #[error("template '{template}' already has {count} live instance(s)")]
    InstancesExist { template: String, count: u32 },
    #[error("host rejected the rotator: {0}")]
    InjectionFailed(HostError),
    #[error("rotator is not present on template '{0}' after injection")]
    NotAttached(String),
    #[error("no flag rotator configuration loaded")]
    ConfigMissing,
}

/// What a successful call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InjectionOutcome {
    /// The rotator was attached by this call.
    Injected,
    /// The template already carried a rotator; nothing was attached.
    AlreadyPresent,
    /// This template was handled earlier in the process.
    AlreadyInjected,
}

/// Attach a [`FlagRotator`] to the template named `part_name`.
pub fn inject_flag_rotator(
    world: &mut World,
    part_name: &str,
) -> Result<InjectionOutcome, TemplateInjectionError> {
    let latch = world.get_resource_or_insert_with(InjectionLatch::default);
    if latch.is_done(part_name) {
        debug!("Template '{}' already injected; skipping", part_name);
        return Ok(InjectionOutcome::AlreadyInjected);
    }

    let config = world.get_resource::<RotatorConfig>().cloned();

    let outcome = {
        let mut library = world
            .get_resource_mut::<PartLibrary>()
            .ok_or_else(|| TemplateInjectionError::TemplateMissing(part_name.to_string()))?;
        let template = library
            .get_mut(part_name)
            .ok_or_else(|| TemplateInjectionError::TemplateMissing(part_name.to_string()))?;

        let Some(config) = config else {
            return Err(TemplateInjectionError::ConfigMissing);
        };

        if template.instance_count() > 0 {
            return Err(TemplateInjectionError::InstancesExist {
                template: part_name.to_string(),
                count: template.instance_count(),
            });
        }

        if template.has_module(ModuleKind::FlagRotator) {
            InjectionOutcome::AlreadyPresent
        } else {
            let mut rotator = FlagRotator::from_config(&config);
            rotator.awake();

            match template.force_attach(PartModule::FlagRotator(rotator)) {
                Ok(()) => {}
                Err(HostError::ModuleListUnavailable(_)) => {
                    debug!("Host reported unavailable module list for '{}'", part_name);
                }
                Err(e) => return Err(TemplateInjectionError::InjectionFailed(e)),
            }

            if !template.has_module(ModuleKind::FlagRotator) {
                return Err(TemplateInjectionError::NotAttached(part_name.to_string()));
            }
            InjectionOutcome::Injected
        }
    };

    world.resource_mut::<InjectionLatch>().mark(part_name);
    info!("Flag rotator on template '{}': {:?}", part_name, outcome);
    Ok(outcome)
}
