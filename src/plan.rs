//! The frozen build plan and its serializable manifest.
//!
//! Once [`configure`](crate::config::configure) has run, the registrations
//! and the directory mapping are frozen into a [`BuildPlan`]: immutable for
//! the rest of the process, read by the generator and by the CLI. The plan
//! exports a [`BuildManifest`] — a plain serde view with paths rendered as
//! strings — for `--json` output and for any tool that wants the effective
//! configuration without linking against this crate.

use crate::shortcode::{ShortcodeError, ShortcodeRegistry};
use crate::types::DirMapping;
use serde::Serialize;
use std::path::PathBuf;

/// Immutable result of running the build configuration.
#[derive(Debug)]
pub struct BuildPlan {
    dir: DirMapping,
    passthrough_copies: Vec<PathBuf>,
    watch_targets: Vec<PathBuf>,
    shortcodes: ShortcodeRegistry,
}

impl BuildPlan {
    pub(crate) fn new(
        dir: DirMapping,
        passthrough_copies: Vec<PathBuf>,
        watch_targets: Vec<PathBuf>,
        shortcodes: ShortcodeRegistry,
    ) -> Self {
        Self {
            dir,
            passthrough_copies,
            watch_targets,
            shortcodes,
        }
    }

    /// Input/output directory mapping for the generator.
    pub fn dir(&self) -> &DirMapping {
        &self.dir
    }

    /// Source paths copied verbatim into the output tree.
    pub fn passthrough_copies(&self) -> &[PathBuf] {
        &self.passthrough_copies
    }

    /// Paths the generator's watcher should rebuild on.
    pub fn watch_targets(&self) -> &[PathBuf] {
        &self.watch_targets
    }

    pub fn shortcodes(&self) -> &ShortcodeRegistry {
        &self.shortcodes
    }

    /// Invoke a registered shortcode by name.
    pub fn invoke_shortcode(&self, name: &str) -> Result<String, ShortcodeError> {
        self.shortcodes.invoke(name)
    }

    /// Plain serializable view of the plan.
    pub fn manifest(&self) -> BuildManifest {
        BuildManifest {
            dir: self.dir.clone(),
            passthrough_copies: display_paths(&self.passthrough_copies),
            watch_targets: display_paths(&self.watch_targets),
            shortcodes: self
                .shortcodes
                .names()
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

fn display_paths(paths: &[PathBuf]) -> Vec<String> {
    paths.iter().map(|p| p.display().to_string()).collect()
}

/// Serializable view of a [`BuildPlan`].
///
/// Shortcode bodies are closures and cannot travel; only their names do.
#[derive(Debug, Clone, Serialize)]
pub struct BuildManifest {
    pub dir: DirMapping,
    pub passthrough_copies: Vec<String>,
    pub watch_targets: Vec<String>,
    pub shortcodes: Vec<String>,
}
