//! Registry of part templates.
//!
//! Each [`PartTemplate`] is the shared prototype every instance of a part type
//! is spawned from. Templates are normally sealed once loaded.
//!
//! Some stock templates are *inert*: the host never runs their construction
//! path, so
//! - the public [`PartTemplate::add_module`] rejects them with
//!   [`HostError::TemplateInert`];
//! - the low-level [`PartTemplate::force_attach`] does attach the module but
//!   then reports [`HostError::ModuleListUnavailable`], because the host
//!   cannot rebuild the module index of an inert template;
//! - modules attached to them never receive [`awake`](crate::components::flagrotator::FlagRotator::awake).
//!
//! [`PartTemplate::has_module`] answers whether a module is present without
//! going through the module index.

use bevy_ecs::prelude::Resource;
use log::debug;
use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::components::flagrotator::FlagRotator;
use crate::components::flagsite::FlagSite;

/// Name of the stock flag template.
pub const FLAG_PART: &str = "flag";

/// Errors reported by the template host.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    #[error("no part template named '{0}'")]
    UnknownPart(String),
    #[error("template '{0}' is inert and does not accept modules")]
    TemplateInert(String),
    #[error("module list of template '{0}' is unavailable")]
    ModuleListUnavailable(String),
    #[error("template '{template}' already has a {kind:?} module")]
    DuplicateModule { template: String, kind: ModuleKind },
}

/// Discriminant of a [`PartModule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleKind {
    FlagSite,
    FlagRotator,
}

/// A behavior carried by a template and cloned onto each instance.
#[derive(Debug, Clone, PartialEq)]
pub enum PartModule {
    FlagSite(FlagSite),
    FlagRotator(FlagRotator),
}

impl PartModule {
    pub fn kind(&self) -> ModuleKind {
        match self {
            PartModule::FlagSite(_) => ModuleKind::FlagSite,
            PartModule::FlagRotator(_) => ModuleKind::FlagRotator,
        }
    }

    /// Construction callback run by the host for active templates.
    fn awake(&mut self) {
        if let PartModule::FlagRotator(rotator) = self {
            rotator.awake();
        }
    }
}

#[derive(Debug, Clone)]
pub struct PartTemplate {
    name: String,
    inert: bool,
    modules: Vec<PartModule>,
    instances: u32,
}

impl PartTemplate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            inert: false,
            modules: Vec::new(),
            instances: 0,
        }
    }

    /// Build an inert template that already carries `modules`.
    pub fn inert(name: impl Into<String>, modules: Vec<PartModule>) -> Self {
        Self {
            name: name.into(),
            inert: true,
            modules,
            instances: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_inert(&self) -> bool {
        self.inert
    }

    /// Number of instances spawned from this template so far.
    pub fn instance_count(&self) -> u32 {
        self.instances
    }

    pub fn has_module(&self, kind: ModuleKind) -> bool {
        self.modules.iter().any(|m| m.kind() == kind)
    }

    pub fn modules(&self) -> impl Iterator<Item = &PartModule> {
        self.modules.iter()
    }

    /// Public attach path. Runs the module's construction callback.
    pub fn add_module(&mut self, mut module: PartModule) -> Result<(), HostError> {
        if self.inert {
            return Err(HostError::TemplateInert(self.name.clone()));
        }
        if self.has_module(module.kind()) {
            return Err(HostError::DuplicateModule {
                template: self.name.clone(),
                kind: module.kind(),
            });
        }
        module.awake();
        self.modules.push(module);
        Ok(())
    }

    /// Low-level attach path. Skips the construction callback.
    ///
    /// On an inert template the module is attached and the call still returns
    /// [`HostError::ModuleListUnavailable`].
    pub fn force_attach(&mut self, module: PartModule) -> Result<(), HostError> {
        debug!("Force-attaching {:?} to template '{}'", module.kind(), self.name);
        self.modules.push(module);
        if self.inert {
            return Err(HostError::ModuleListUnavailable(self.name.clone()));
        }
        Ok(())
    }

    pub(crate) fn record_instance(&mut self) {
        self.instances += 1;
    }
}

/// All loaded part templates keyed by name.
#[derive(Resource, Debug, Default)]
pub struct PartLibrary {
    templates: FxHashMap<String, PartTemplate>,
}

impl PartLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Library holding the stock inert `flag` template with its site module.
    pub fn with_stock_parts() -> Self {
        let mut library = Self::new();
        library.insert(PartTemplate::inert(
            FLAG_PART,
            vec![PartModule::FlagSite(FlagSite::default())],
        ));
        library
    }

    pub fn insert(&mut self, template: PartTemplate) {
        self.templates.insert(template.name.clone(), template);
    }

    pub fn get(&self, name: &str) -> Option<&PartTemplate> {
        self.templates.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut PartTemplate> {
        self.templates.get_mut(name)
    }
}
