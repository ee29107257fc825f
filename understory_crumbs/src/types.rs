// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types shared by the controller, configuration, and attribute parsing.

use alloc::string::String;

/// Hierarchy level of a crumb; `0` is the root.
///
/// Levels index both the staging sequence and the per-level maximum lengths in
/// [`CrumbsConfig`](crate::config::CrumbsConfig).
pub type Level = usize;

/// Markup placed around every rendered item.
///
/// Each staged entry renders as `prefix + text + suffix`, including empty
/// entries, so the wrap markup always appears once per level.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "(String, String)", into = "(String, String)")
)]
pub struct ItemWrap {
    /// Markup emitted before the item text.
    pub prefix: String,
    /// Markup emitted after the item text.
    pub suffix: String,
}

impl ItemWrap {
    /// Create a wrap from a prefix and suffix.
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    /// Append `text` wrapped in this prefix/suffix to `out`.
    pub fn wrap_into(&self, out: &mut String, text: &str) {
        out.push_str(&self.prefix);
        out.push_str(text);
        out.push_str(&self.suffix);
    }
}

impl From<(String, String)> for ItemWrap {
    fn from((prefix, suffix): (String, String)) -> Self {
        Self { prefix, suffix }
    }
}

impl From<ItemWrap> for (String, String) {
    fn from(wrap: ItemWrap) -> Self {
        (wrap.prefix, wrap.suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_into_surrounds_text() {
        let wrap = ItemWrap::new("<b>", "</b>");
        let mut out = String::from(">");
        wrap.wrap_into(&mut out, "x");
        assert_eq!(out, "><b>x</b>");
    }

    #[test]
    fn default_wrap_is_transparent() {
        let mut out = String::new();
        ItemWrap::default().wrap_into(&mut out, "plain");
        assert_eq!(out, "plain");
    }
}
