// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rendering configuration for a [`CrumbsController`](crate::controller::CrumbsController).
//!
//! ## Overview
//!
//! A configuration is fixed for the lifetime of a controller. It carries:
//!
//! - per-level maximum lengths (missing entries mean "no limit"),
//! - the separator markup placed between rendered items,
//! - the [`ItemWrap`] placed around every item,
//! - an optional container selector, consumed by
//!   [`CrumbsController::from_lookup`](crate::controller::CrumbsController::from_lookup).
//!
//! ## Serde
//!
//! With the `serde` feature the configuration reads the same options object a
//! page script would declare:
//!
//! ```json
//! {
//!   "maxLength": [30, 30, 30],
//!   "separator": "<span class=\"separator\">&nbsp;&gt; </span>",
//!   "container": "#crumbs_container",
//!   "itemWrap": ["<span class=\"item\">", "</span>"]
//! }
//! ```
//!
//! Every key is optional and falls back to [`CrumbsConfig::default`].

use alloc::string::String;
use alloc::vec::Vec;

use crate::types::{ItemWrap, Level};

/// Separator used when none is configured.
pub const DEFAULT_SEPARATOR: &str = " > ";

/// Controller configuration.
///
/// ```
/// use understory_crumbs::config::CrumbsConfig;
///
/// let config = CrumbsConfig::new()
///     .with_max_length([30, 30, 30])
///     .with_separator("-")
///     .with_item_wrap("[", "]");
/// assert_eq!(config.max_length_for(1), Some(30));
/// assert_eq!(config.max_length_for(3), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct CrumbsConfig {
    /// Maximum text length per level, counted in chars.
    pub max_length: Vec<usize>,
    /// Markup inserted between rendered items.
    pub separator: String,
    /// Markup placed around every rendered item.
    pub item_wrap: ItemWrap,
    /// Selector of the container that receives published markup.
    pub container: Option<String>,
}

impl Default for CrumbsConfig {
    fn default() -> Self {
        Self {
            max_length: Vec::new(),
            separator: String::from(DEFAULT_SEPARATOR),
            item_wrap: ItemWrap::default(),
            container: None,
        }
    }
}

impl CrumbsConfig {
    /// Create a configuration with no limits, the default separator, and no wrap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set per-level maximum lengths, starting at level 0.
    pub fn with_max_length(mut self, max_length: impl IntoIterator<Item = usize>) -> Self {
        self.max_length = max_length.into_iter().collect();
        self
    }

    /// Set the separator markup.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Set the item wrap markup.
    pub fn with_item_wrap(mut self, prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        self.item_wrap = ItemWrap::new(prefix, suffix);
        self
    }

    /// Set the container selector.
    pub fn with_container(mut self, selector: impl Into<String>) -> Self {
        self.container = Some(selector.into());
        self
    }

    /// Maximum length configured for `level`, or `None` when unlimited.
    pub fn max_length_for(&self, level: Level) -> Option<usize> {
        self.max_length.get(level).copied()
    }
}
