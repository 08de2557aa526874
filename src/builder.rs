//! The configuration-registration handle.
//!
//! [`ConfigBuilder`] is the mutable object handed to
//! [`configure`](crate::config::configure). The site's configuration
//! function calls registration methods on it, then returns the directory
//! mapping; the caller freezes the result into an immutable
//! [`BuildPlan`](crate::plan::BuildPlan).
//!
//! The builder is purely declarative: it touches no files, reads no
//! environment, and validates nothing. Whether a registered source path
//! actually exists is the generator's problem at copy time (the `check`
//! subcommand offers a preview via [`sources`](crate::sources)).
//!
//! Passthrough and watch registrations are sets with remembered insertion
//! order: re-registering a path is a no-op, and nothing downstream may
//! attach meaning to the ordering.

use crate::plan::BuildPlan;
use crate::shortcode::ShortcodeRegistry;
use crate::types::DirMapping;
use std::path::PathBuf;

/// Accumulates passthrough-copy rules, watch targets, and shortcodes.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    passthrough_copies: Vec<PathBuf>,
    watch_targets: Vec<PathBuf>,
    shortcodes: ShortcodeRegistry,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a source path to be copied verbatim into the output tree.
    ///
    /// Idempotent: registering a path that is already present changes
    /// nothing.
    pub fn add_passthrough_copy(&mut self, source: impl Into<PathBuf>) -> &mut Self {
        push_unique(&mut self.passthrough_copies, source.into());
        self
    }

    /// Register a path whose changes should trigger a rebuild in watch
    /// mode. Advisory — the generator's file-watcher decides what to do
    /// with it. Idempotent like passthrough rules.
    pub fn add_watch_target(&mut self, target: impl Into<PathBuf>) -> &mut Self {
        push_unique(&mut self.watch_targets, target.into());
        self
    }

    /// Bind a named shortcode. Re-registering a name replaces the earlier
    /// binding.
    pub fn add_shortcode<F>(&mut self, name: impl Into<String>, body: F) -> &mut Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        self.shortcodes.register(name, body);
        self
    }

    pub fn passthrough_copies(&self) -> &[PathBuf] {
        &self.passthrough_copies
    }

    pub fn watch_targets(&self) -> &[PathBuf] {
        &self.watch_targets
    }

    pub fn shortcodes(&self) -> &ShortcodeRegistry {
        &self.shortcodes
    }

    /// Freeze the registrations together with the directory mapping.
    pub fn into_plan(self, dir: DirMapping) -> BuildPlan {
        BuildPlan::new(dir, self.passthrough_copies, self.watch_targets, self.shortcodes)
    }
}

fn push_unique(paths: &mut Vec<PathBuf>, candidate: PathBuf) {
    if !paths.contains(&candidate) {
        paths.push(candidate);
    }
}
