//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for UIs.
//!
//! The facade:
//! - **Dispatches** to the matching `commands::*::run`
//! - **Resolves settings** (render options come from the stored config unless the
//!   caller overrides them)
//! - **Returns structured types** (`Result<CmdResult>`), never strings to print
//!
//! `SolidApi<C: Catalog>` is generic over where products come from: the CLI uses a
//! boxed catalog chosen at startup, tests use `InMemoryCatalog`.

use crate::catalog::Catalog;
use crate::commands;
use crate::config::SolidConfig;
use crate::error::Result;

pub struct SolidApi<C: Catalog> {
    catalog: C,
    paths: commands::SolidPaths,
}

impl<C: Catalog> SolidApi<C> {
    pub fn new(catalog: C, paths: commands::SolidPaths) -> Self {
        Self { catalog, paths }
    }

    pub fn products(&self) -> Result<commands::CmdResult> {
        commands::products::run(&self.catalog)
    }

    pub fn filter_products(&self, criteria: &Criteria) -> Result<commands::CmdResult> {
        commands::filter::run(&self.catalog, criteria)
    }

    pub fn render_html(
        &self,
        root: &str,
        children: &[ChildArg],
        indent: Option<usize>,
    ) -> Result<commands::CmdResult> {
        let options = self.load_config()?.render_options(indent)?;
        commands::html::run(root, children, &options)
    }

    pub fn demo(&self) -> Result<commands::CmdResult> {
        let options = self.load_config()?.render_options(None)?;
        commands::demo::run(&self.catalog, &options)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    fn load_config(&self) -> Result<SolidConfig> {
        SolidConfig::load(&self.paths.config_dir)
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::filter::{Criteria, MatchMode};
pub use crate::commands::html::ChildArg;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel, SolidPaths};
