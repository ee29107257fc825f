// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The trail controller.
//!
//! ## Overview
//!
//! [`CrumbsController`] stages one text fragment per level and renders the
//! staged trail into its [`RenderTarget`] on [`publish`](CrumbsController::publish).
//!
//! ## Staging rules
//!
//! - [`set`](CrumbsController::set) stores the (possibly shortened) text at a level and drops every
//!   deeper level. Changing a filter resets everything below it.
//! - Levels skipped over by a deep `set` hold empty strings, so a level always
//!   renders at its own position.
//! - [`add_to_list`](CrumbsController::add_to_list) and [`remove_from_list`](CrumbsController::remove_from_list)
//!   maintain a [`ListAccumulator`] per level and stage its joined labels
//!   through `set`. A different family token resets the accumulator.
//! - Nothing reaches the target until [`publish`](CrumbsController::publish) (or
//!   [`clear`](CrumbsController::clear), which publishes the empty trail).
//!
//! ## Rendering
//!
//! Every staged entry, empty or not, is wrapped with the configured
//! [`ItemWrap`](crate::types::ItemWrap) and the wrapped entries are joined with the separator in level
//! order.
//!
//! ```
//! use understory_crumbs::config::CrumbsConfig;
//! use understory_crumbs::controller::CrumbsController;
//!
//! let config = CrumbsConfig::new().with_separator("-").with_item_wrap("[", "]");
//! let mut crumbs: CrumbsController<&str, String> = CrumbsController::new(config, String::new());
//! crumbs.set(0, "A");
//! crumbs.set(1, "B");
//! crumbs.publish();
//! assert_eq!(crumbs.target(), "[A]-[B]");
//! ```

use alloc::string::String;
use alloc::vec::Vec;

use crate::config::CrumbsConfig;
use crate::ellipsis::ellipsize;
use crate::error::CrumbsError;
use crate::list::ListAccumulator;
use crate::target::{ContainerLookup, RenderTarget};
use crate::types::Level;

/// Stages a leveled breadcrumb trail and publishes it as markup.
///
/// `F` is the list family token, compared with [`PartialEq`]. `T` is the
/// render target the controller owns.
///
/// ## Usage
///
/// - Construct with [`CrumbsController::new`] when the target is already at
///   hand, or [`CrumbsController::from_lookup`] to resolve the configured
///   container selector.
/// - Feed UI events into [`set`](Self::set), [`add_to_list`](Self::add_to_list),
///   and [`remove_from_list`](Self::remove_from_list).
/// - Call [`publish`](Self::publish) when the trail should become visible.
pub struct CrumbsController<F, T> {
    config: CrumbsConfig,
    staging: Vec<String>,
    lists: Vec<Option<ListAccumulator<F>>>,
    target: T,
}

impl<F: core::fmt::Debug, T> core::fmt::Debug for CrumbsController<F, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CrumbsController")
            .field("config", &self.config)
            .field("staging", &self.staging)
            .field("lists", &self.lists)
            .finish_non_exhaustive()
    }
}

impl<F: PartialEq, T: RenderTarget> CrumbsController<F, T> {
    /// Create a controller that publishes into `target`.
    pub fn new(config: CrumbsConfig, target: T) -> Self {
        Self {
            config,
            staging: Vec::new(),
            lists: Vec::new(),
            target,
        }
    }

    /// Create a controller bound to the container named by `config.container`.
    ///
    /// Fails with [`CrumbsError::MissingContainer`] when no selector is
    /// configured and [`CrumbsError::ContainerNotFound`] when `lookup` has no
    /// match.
    pub fn from_lookup<L>(config: CrumbsConfig, lookup: &mut L) -> Result<Self, CrumbsError>
    where
        L: ContainerLookup<Target = T>,
    {
        let selector = config
            .container
            .as_deref()
            .ok_or(CrumbsError::MissingContainer)?;
        let target = lookup
            .query_selector(selector)
            .ok_or_else(|| CrumbsError::ContainerNotFound {
                selector: String::from(selector),
            })?;
        Ok(Self::new(config, target))
    }

    /// Stage `text` at `level` and drop all deeper levels.
    ///
    /// The text is shortened with [`ellipsize`] using the level's configured
    /// maximum length. Levels above `level` that were never set are filled
    /// with empty strings.
    pub fn set(&mut self, level: Level, text: &str) {
        let text = ellipsize(text, self.config.max_length_for(level)).into_owned();
        self.staging.truncate(level);
        self.staging.resize_with(level, String::new);
        self.staging.push(text);
    }

    /// Add `text` to the list at `level` and stage the joined list.
    ///
    /// If the level's list belongs to `family`, `text` is appended; otherwise
    /// a new list seeded with `text` replaces it. The level then displays
    /// `prefix` followed by the labels joined with `", "`.
    pub fn add_to_list(&mut self, level: Level, family: F, prefix: &str, text: &str) {
        let (list, _) = self.list_for(level, family);
        list.push(text);
        let display = list.display(prefix);
        self.set(level, &display);
    }

    /// Remove `text` from the list at `level` and stage the joined list.
    ///
    /// If the level's list belongs to `family`, the first label equal to
    /// `text` is removed; a missing label is reported as a warning and leaves
    /// the list as it was. A different family resets the list to empty.
    /// An empty list stages an empty string, without `prefix`.
    pub fn remove_from_list(&mut self, level: Level, family: F, prefix: &str, text: &str) {
        let (list, kept) = self.list_for(level, family);
        if kept && !list.remove(text) {
            tracing::warn!(level, text, "tried to remove non-existent list item");
        }
        let display = if list.is_empty() {
            String::new()
        } else {
            list.display(prefix)
        };
        self.set(level, &display);
    }

    /// Drop every staged level and publish the empty trail.
    ///
    /// List accumulators are kept; a later list operation at a level
    /// continues from its accumulated labels.
    pub fn clear(&mut self) {
        self.staging.clear();
        self.publish();
    }

    /// Render the staged trail into the owned target, replacing its content.
    pub fn publish(&mut self) {
        let markup = self.render();
        tracing::trace!(levels = self.staging.len(), bytes = markup.len(), "publishing trail");
        self.target.replace_markup(&markup);
    }

    /// Render the staged trail into `target` instead of the owned one.
    pub fn publish_to<R: RenderTarget + ?Sized>(&self, target: &mut R) {
        target.replace_markup(&self.render());
    }

    /// Build the markup for the staged trail.
    ///
    /// Each entry is wrapped with the item wrap and entries are joined with
    /// the separator. An empty trail renders as an empty string.
    pub fn render(&self) -> String {
        let wrap = &self.config.item_wrap;
        let mut out = String::new();
        for (level, text) in self.staging.iter().enumerate() {
            if level > 0 {
                out.push_str(&self.config.separator);
            }
            wrap.wrap_into(&mut out, text);
        }
        out
    }

    /// The list at `level`, replaced by an empty one unless it belongs to `family`.
    ///
    /// The flag is `true` when the existing list was kept.
    fn list_for(&mut self, level: Level, family: F) -> (&mut ListAccumulator<F>, bool) {
        if self.lists.len() <= level {
            self.lists.resize_with(level + 1, || None);
        }
        let slot = &mut self.lists[level];
        if slot.as_ref().is_some_and(|list| list.is_family(&family)) {
            return (slot.get_or_insert_with(|| ListAccumulator::new(family)), true);
        }
        if slot.is_some() {
            tracing::debug!(level, "list family changed, resetting");
        }
        (slot.insert(ListAccumulator::new(family)), false)
    }
}

impl<F, T> CrumbsController<F, T> {
    /// The configuration this controller was built with.
    pub fn config(&self) -> &CrumbsConfig {
        &self.config
    }

    /// Staged texts, one per level starting at the root.
    pub fn staging(&self) -> &[String] {
        &self.staging
    }

    /// Staged text at `level`, if that level is part of the trail.
    pub fn level_text(&self, level: Level) -> Option<&str> {
        self.staging.get(level).map(String::as_str)
    }

    /// The list accumulator at `level`, if one was ever started.
    pub fn list(&self, level: Level) -> Option<&ListAccumulator<F>> {
        self.lists.get(level).and_then(Option::as_ref)
    }

    /// The owned render target.
    pub fn target(&self) -> &T {
        &self.target
    }

    /// Mutable access to the owned render target.
    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }

    /// Consume the controller and return its render target.
    pub fn into_target(self) -> T {
        self.target
    }
}
