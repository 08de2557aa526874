//! The site's build configuration.
//!
//! This is the one place that decides what the external generator does for
//! Hearthwiki: which directories are copied through untouched, which paths
//! the dev-mode watcher rebuilds on, which shortcodes templates may call,
//! and where content is read from and written to.
//!
//! ```text
//! ./src/assets   → passthrough copy + watch target
//! ./src/css/     → passthrough copy + watch target
//! "year"         → shortcode (current four-digit year)
//! src → public   → directory mapping returned to the generator
//! ```
//!
//! [`configure`] runs once, synchronously, before any build or render work
//! starts, and is deterministic: same registrations, same mapping, every
//! call. It validates nothing — a missing assets directory is the
//! generator's error to report at copy time.

use crate::builder::ConfigBuilder;
use crate::plan::BuildPlan;
use crate::shortcode;
use crate::types::DirMapping;

/// Static assets (favicon, fonts, images) copied verbatim to the output root.
pub const ASSETS_DIR: &str = "./src/assets";

/// Stylesheets, also copied verbatim.
pub const CSS_DIR: &str = "./src/css/";

/// Content root the generator reads templates from.
pub const INPUT_DIR: &str = "src";

/// Root the rendered site is written into.
pub const OUTPUT_DIR: &str = "public";

/// Register Hearthwiki's build rules on the given handle and return the
/// generator's directory mapping.
///
/// Side effects, all via the handle:
/// 1. passthrough-copy rules for [`ASSETS_DIR`] and [`CSS_DIR`];
/// 2. the same two paths as watch targets;
/// 3. the `"year"` shortcode for copyright footers.
pub fn configure(builder: &mut ConfigBuilder) -> DirMapping {
    builder
        .add_passthrough_copy(ASSETS_DIR)
        .add_passthrough_copy(CSS_DIR)
        .add_watch_target(ASSETS_DIR)
        .add_watch_target(CSS_DIR)
        .add_shortcode("year", shortcode::year);

    DirMapping::new(INPUT_DIR, OUTPUT_DIR)
}

/// Run [`configure`] against a fresh handle and freeze the result.
pub fn build_plan() -> BuildPlan {
    let mut builder = ConfigBuilder::new();
    let dir = configure(&mut builder);
    builder.into_plan(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn registers_exactly_two_passthrough_copies() {
        let mut builder = ConfigBuilder::new();
        configure(&mut builder);
        assert_eq!(
            builder.passthrough_copies(),
            [PathBuf::from("./src/assets"), PathBuf::from("./src/css/")]
        );
    }

    #[test]
    fn registers_the_same_two_paths_as_watch_targets() {
        let mut builder = ConfigBuilder::new();
        configure(&mut builder);
        assert_eq!(builder.watch_targets(), builder.passthrough_copies());
    }

    #[test]
    fn registers_the_year_shortcode() {
        let mut builder = ConfigBuilder::new();
        configure(&mut builder);
        assert_eq!(builder.shortcodes().names(), vec!["year"]);
    }

    #[test]
    fn year_shortcode_renders_four_digits() {
        let plan = build_plan();
        let y = plan.invoke_shortcode("year").unwrap();
        assert_eq!(y.len(), 4);
        assert!(y.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn directory_mapping_is_src_to_public() {
        let mut builder = ConfigBuilder::new();
        let dir = configure(&mut builder);
        assert_eq!(dir, DirMapping::new("src", "public"));
    }

    #[test]
    fn mapping_is_deterministic_across_calls() {
        let first = configure(&mut ConfigBuilder::new());
        let second = configure(&mut ConfigBuilder::new());
        assert_eq!(first, second);
    }

    #[test]
    fn configuring_the_same_handle_twice_changes_nothing() {
        let mut builder = ConfigBuilder::new();
        configure(&mut builder);
        configure(&mut builder);
        assert_eq!(builder.passthrough_copies().len(), 2);
        assert_eq!(builder.watch_targets().len(), 2);
        assert_eq!(builder.shortcodes().len(), 1);
    }

    #[test]
    fn build_plan_freezes_the_full_configuration() {
        let plan = build_plan();
        assert_eq!(plan.dir(), &DirMapping::new("src", "public"));
        assert_eq!(plan.passthrough_copies().len(), 2);
        assert_eq!(plan.watch_targets().len(), 2);
        assert!(plan.shortcodes().contains("year"));
    }
}
