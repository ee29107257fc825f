// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Multi-select aggregation for a single level.
//!
//! A [`ListAccumulator`] collects the labels of the currently selected
//! members of one control family (for example a group of checkboxes) so the
//! level can display them as a single comma-joined crumb.

use alloc::string::String;
use alloc::vec::Vec;

/// Separator placed between aggregated labels.
pub const LIST_SEPARATOR: &str = ", ";

/// Ordered labels selected within one family.
///
/// The family token `F` is compared with [`PartialEq`]; a token of a
/// different value starts a fresh accumulator. Labels keep insertion order
/// and duplicates are retained.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListAccumulator<F> {
    family: F,
    items: Vec<String>,
}

impl<F: PartialEq> ListAccumulator<F> {
    /// Create an empty accumulator for `family`.
    pub fn new(family: F) -> Self {
        Self {
            family,
            items: Vec::new(),
        }
    }

    /// The family this accumulator belongs to.
    pub fn family(&self) -> &F {
        &self.family
    }

    /// Whether `family` matches the stored family.
    pub fn is_family(&self, family: &F) -> bool {
        self.family == *family
    }

    /// Labels in insertion order.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Whether no labels are held.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append a label.
    pub fn push(&mut self, text: impl Into<String>) {
        self.items.push(text.into());
    }

    /// Remove the first label equal to `text`.
    ///
    /// Returns `false` when no such label exists.
    pub fn remove(&mut self, text: &str) -> bool {
        match self.items.iter().position(|item| item == text) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Render `prefix` followed by the labels joined with [`LIST_SEPARATOR`].
    pub fn display(&self, prefix: &str) -> String {
        let mut out = String::from(prefix);
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                out.push_str(LIST_SEPARATOR);
            }
            out.push_str(item);
        }
        out
    }
}
