//! Named template shortcodes.
//!
//! A shortcode is a small dynamic snippet referenced by name from otherwise
//! static templates — the templating layer calls it wherever the name
//! appears and splices in the returned string. Shortcodes here are
//! zero-argument: they close over nothing mutable and produce a value from
//! scratch on every invocation.
//!
//! The registry deliberately does not cache results. The built-in [`year`]
//! shortcode is the reason: a watch-mode process can stay alive across a
//! year boundary, and a cached copyright year would quietly go stale.
//!
//! ## Built-ins
//!
//! | Name | Value |
//! |------|-------|
//! | `year` | Current calendar year, four digits (e.g. `"2026"`) |

use chrono::{Datelike, Local};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ShortcodeError {
    #[error("unknown shortcode: {0}")]
    Unknown(String),
}

/// A registered shortcode body: zero arguments in, rendered string out.
pub type ShortcodeFn = Box<dyn Fn() -> String + Send + Sync>;

/// Name → shortcode table.
///
/// Names are unique; registering a name twice replaces the earlier binding.
/// Iteration order is lexicographic by name, which keeps manifest output
/// and CLI listings stable.
#[derive(Default)]
pub struct ShortcodeRegistry {
    entries: BTreeMap<String, ShortcodeFn>,
}

impl ShortcodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to `body`. A later registration under the same name wins.
    pub fn register<F>(&mut self, name: impl Into<String>, body: F)
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        self.entries.insert(name.into(), Box::new(body));
    }

    /// Invoke a shortcode by name.
    ///
    /// The body runs on every call — results are never memoized.
    pub fn invoke(&self, name: &str) -> Result<String, ShortcodeError> {
        self.entries
            .get(name)
            .map(|body| body())
            .ok_or_else(|| ShortcodeError::Unknown(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered names, lexicographically sorted.
    pub fn names(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// Bodies are opaque closures; show the names only.
impl fmt::Debug for ShortcodeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShortcodeRegistry")
            .field("names", &self.names())
            .finish()
    }
}

/// Current calendar year as a four-digit string, in host-local time.
///
/// Computed fresh on every call so long-lived watch processes roll over
/// correctly at midnight on January 1st.
pub fn year() -> String {
    Local::now().year().to_string()
}
