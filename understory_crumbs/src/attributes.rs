// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Declarative crumb attributes on interactive controls.
//!
//! ## Overview
//!
//! Pages describe how a control contributes to the trail with `data-crumbs-*`
//! attributes. The event layer reads them once per control, keeps the parsed
//! [`CrumbAttributes`], and on each interaction calls
//! [`CrumbAttributes::apply`].
//!
//! | Attribute                   | Required | Default | Meaning                                   |
//! |-----------------------------|----------|---------|-------------------------------------------|
//! | `data-crumbs-level`         | yes      |         | Level the control acts on (`0` or more).  |
//! | `data-crumbs-text`          | yes      |         | Text shown at that level.                 |
//! | `data-crumbs-event`         | no       | `click` | Event that should trigger the update.     |
//! | `data-crumbs-publish`       | no       | `false` | Publish right after the update.           |
//! | `data-crumbs-list`          | no       |         | Family name for multi-select siblings.    |
//! | `data-crumbs-list-prefix`   | no       | empty   | Prefix shown before the joined list.      |
//!
//! This module does not bind events; the event name is carried for the caller.
//!
//! ```
//! use understory_crumbs::attributes::CrumbAttributes;
//! use understory_crumbs::config::CrumbsConfig;
//! use understory_crumbs::controller::CrumbsController;
//!
//! let attrs = CrumbAttributes::from_lookup(|name| match name {
//!     "data-crumbs-level" => Some("0"),
//!     "data-crumbs-text" => Some("Red"),
//!     "data-crumbs-list" => Some("color"),
//!     "data-crumbs-list-prefix" => Some("Colors: "),
//!     "data-crumbs-publish" => Some("true"),
//!     _ => None,
//! })
//! .unwrap();
//!
//! let mut crumbs = CrumbsController::new(CrumbsConfig::new(), String::new());
//! attrs.apply(&mut crumbs, true);
//! assert_eq!(crumbs.target(), "Colors: Red");
//! ```

use alloc::string::String;

use crate::controller::CrumbsController;
use crate::error::CrumbsError;
use crate::target::RenderTarget;
use crate::types::Level;

/// Attribute holding the level.
pub const LEVEL_ATTR: &str = "data-crumbs-level";
/// Attribute holding the crumb text.
pub const TEXT_ATTR: &str = "data-crumbs-text";
/// Attribute naming the triggering event.
pub const EVENT_ATTR: &str = "data-crumbs-event";
/// Attribute requesting an immediate publish.
pub const PUBLISH_ATTR: &str = "data-crumbs-publish";
/// Attribute holding the list family.
pub const LIST_ATTR: &str = "data-crumbs-list";
/// Attribute holding the list prefix.
pub const LIST_PREFIX_ATTR: &str = "data-crumbs-list-prefix";

/// Event used when a control does not name one.
pub const DEFAULT_EVENT: &str = "click";

/// List membership of a control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListAttributes {
    /// Family shared by sibling controls.
    pub family: String,
    /// Prefix shown before the joined labels.
    pub prefix: String,
}

/// Parsed `data-crumbs-*` attributes of one control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CrumbAttributes {
    /// Level the control acts on.
    pub level: Level,
    /// Text contributed at that level.
    pub text: String,
    /// Event that should trigger the update.
    pub event: String,
    /// Whether to publish right after the update.
    pub publish: bool,
    /// List membership, for multi-select controls.
    pub list: Option<ListAttributes>,
}

impl CrumbAttributes {
    /// Parse attributes through `get`, which returns the raw value of an
    /// attribute or `None` when the control does not carry it.
    pub fn from_lookup<'a>(get: impl Fn(&str) -> Option<&'a str>) -> Result<Self, CrumbsError> {
        let raw_level = get(LEVEL_ATTR).ok_or(CrumbsError::MissingAttribute { name: LEVEL_ATTR })?;
        let level = raw_level
            .trim()
            .parse::<Level>()
            .map_err(|_| CrumbsError::InvalidLevel {
                value: String::from(raw_level),
            })?;
        let text = get(TEXT_ATTR).ok_or(CrumbsError::MissingAttribute { name: TEXT_ATTR })?;
        let publish = match get(PUBLISH_ATTR) {
            None => false,
            Some(raw) => parse_flag(PUBLISH_ATTR, raw)?,
        };
        let list = get(LIST_ATTR).map(|family| ListAttributes {
            family: String::from(family),
            prefix: String::from(get(LIST_PREFIX_ATTR).unwrap_or_default()),
        });

        Ok(Self {
            level,
            text: String::from(text),
            event: String::from(get(EVENT_ATTR).unwrap_or(DEFAULT_EVENT)),
            publish,
            list,
        })
    }

    /// Whether the control aggregates into a list.
    pub fn is_list(&self) -> bool {
        self.list.is_some()
    }

    /// Feed one interaction with this control into `crumbs`.
    ///
    /// List controls add their text when `selected` and remove it otherwise.
    /// Plain controls set their level when `selected`; deselecting them does
    /// nothing. Publishes afterwards when the publish flag is set.
    pub fn apply<T: RenderTarget>(&self, crumbs: &mut CrumbsController<String, T>, selected: bool) {
        match (&self.list, selected) {
            (Some(list), true) => {
                crumbs.add_to_list(self.level, list.family.clone(), &list.prefix, &self.text);
            }
            (Some(list), false) => {
                crumbs.remove_from_list(self.level, list.family.clone(), &list.prefix, &self.text);
            }
            (None, true) => crumbs.set(self.level, &self.text),
            (None, false) => {}
        }
        if self.publish {
            crumbs.publish();
        }
    }
}

fn parse_flag(name: &'static str, raw: &str) -> Result<bool, CrumbsError> {
    match raw.trim() {
        "" | "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(CrumbsError::InvalidFlag {
            name,
            value: String::from(raw),
        }),
    }
}
