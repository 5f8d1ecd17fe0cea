//! A set of Pkl modules rendered together into one file tree.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::ast::Module;
use crate::memfs::{clean_path, MemFs};
use crate::renderer::PklRenderer;

/// Path of the project manifest every project starts with.
pub const MANIFEST_PATH: &str = "PklProject";

/// A module tree and the path it is written to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PklModule {
    pub path: String,
    pub ast: Module,
}

impl PklModule {
    pub fn new(path: impl Into<String>, ast: Module) -> Self {
        Self {
            path: path.into(),
            ast,
        }
    }

    pub fn marshal(&self) -> Result<Vec<u8>> {
        PklRenderer.render_bytes(&self.ast)
    }
}

#[derive(Debug, Clone)]
pub struct Project {
    pub name: String,
    modules: BTreeMap<String, PklModule>,
}

impl Project {
    /// New project holding only its `amends "pkl:Project"` manifest.
    pub fn new(name: impl Into<String>) -> Self {
        let manifest = PklModule::new(MANIFEST_PATH, Module::amending("pkl:Project"));

        let mut modules = BTreeMap::new();
        modules.insert(manifest.path.clone(), manifest);

        Self {
            name: name.into(),
            modules,
        }
    }

    /// Register a module, replacing any module already at the same path.
    /// Paths are cleaned first, so `a.pkl` and `./a.pkl` name one module.
    pub fn add_module(&mut self, mut module: PklModule) {
        module.path = clean_path(&module.path);
        if self.modules.contains_key(&module.path) {
            debug!(path = %module.path, "replacing module");
        }
        self.modules.insert(module.path.clone(), module);
    }

    pub fn module(&self, path: &str) -> Option<&PklModule> {
        self.modules.get(&clean_path(path))
    }

    pub fn modules(&self) -> impl Iterator<Item = &PklModule> {
        self.modules.values()
    }

    /// Render every module into a fresh in-memory store, in path order.
    pub fn render(&self) -> Result<MemFs> {
        let fs = MemFs::new();

        for module in self.modules.values() {
            let data = module
                .marshal()
                .with_context(|| format!("marshal Pkl module {}", module.path))?;
            fs.write_file(&module.path, &data)
                .with_context(|| format!("write Pkl module {}", module.path))?;
            debug!(path = %module.path, bytes = data.len(), "rendered module");
        }

        info!(project = %self.name, modules = self.modules.len(), "rendered project");
        Ok(fs)
    }
}
