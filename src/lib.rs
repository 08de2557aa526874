//! # Hearthwiki
//!
//! Build configuration and site metadata for the Hearthwiki static
//! archive. The heavy lifting — template rendering, Markdown/HTML
//! generation, routing, asset copying — belongs to the external
//! static-site generator; this crate is the declarative layer the
//! generator consumes at startup, plus the metadata record its templates
//! interpolate.
//!
//! # Architecture: Configure, Freeze, Consume
//!
//! ```text
//! 1. Configure   ConfigBuilder  →  registrations     (configure() runs once)
//! 2. Freeze      registrations  →  BuildPlan         (immutable from here on)
//! 3. Consume     BuildPlan      →  generator / CLI   (copy rules, watcher, shortcodes)
//! ```
//!
//! The registration handle is an explicit builder rather than ambient
//! mutable state, and the directory mapping is an explicit return value
//! rather than a field mutated in place. That keeps the whole
//! configuration a linear, synchronous sequence — no suspension points,
//! no locking — and makes every piece testable with plain assertions.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`builder`] | The registration handle handed to the configuration function |
//! | [`config`] | Hearthwiki's build rules: passthrough copies, watch targets, the `year` shortcode, `src` → `public` |
//! | [`plan`] | Frozen build plan and its serializable JSON manifest |
//! | [`shortcode`] | Named zero-argument template snippets |
//! | [`site`] | Site metadata record (URL from the environment, fixed name/description) |
//! | [`sources`] | On-disk survey of registered passthrough sources |
//! | [`types`] | Shared declarative types (`DirMapping`) |
//! | [`output`] | CLI output formatting — pure `format_*` plus `print_*` wrappers |
//!
//! # Design Decisions
//!
//! ## No Configuration Files
//!
//! Every path here is a compile-time constant and the site name and
//! description are literals. The single environmental input is the `URL`
//! variable the deploy host sets. A site whose identity lives in one
//! reviewed source file needs no cascade of overrides — and the metadata
//! record stays identical on every machine that builds it.
//!
//! ## Declarative Only
//!
//! Nothing in this crate copies, deletes, or renders. Registered
//! passthrough paths are instructions for the generator; the [`sources`]
//! survey walks them read-only so `hearthwiki check` can preview what the
//! generator will find. Failure detection (a missing assets directory,
//! say) is the generator's job at build time.
//!
//! ## Shortcodes Are Never Cached
//!
//! A watch-mode process lives for days. The `year` shortcode is
//! recomputed on every invocation so a copyright footer rolls over
//! correctly at midnight on January 1st — the registry dispatches to the
//! registered function each time instead of memoizing.

pub mod builder;
pub mod config;
pub mod output;
pub mod plan;
pub mod shortcode;
pub mod site;
pub mod sources;
pub mod types;
