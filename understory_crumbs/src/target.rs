// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render targets: where published markup ends up.
//!
//! The controller never talks to a document directly. Toolkits implement
//! [`RenderTarget`] for their container handle (a DOM element, a web view
//! node, a test buffer) and, when containers are addressed by selector,
//! [`ContainerLookup`] for whatever resolves those selectors.

use alloc::string::String;

/// A container whose entire content is replaced on every publish.
pub trait RenderTarget {
    /// Replace the container content with `markup`.
    fn replace_markup(&mut self, markup: &str);
}

impl RenderTarget for String {
    fn replace_markup(&mut self, markup: &str) {
        self.clear();
        self.push_str(markup);
    }
}

impl<T: RenderTarget + ?Sized> RenderTarget for &mut T {
    fn replace_markup(&mut self, markup: &str) {
        (**self).replace_markup(markup);
    }
}

/// Resolves a selector (for example `#crumbs_container`) to a render target.
///
/// Used by [`CrumbsController::from_lookup`](crate::controller::CrumbsController::from_lookup)
/// to bind the container named in
/// [`CrumbsConfig::container`](crate::config::CrumbsConfig::container).
pub trait ContainerLookup {
    /// The target type produced for a matching selector.
    type Target: RenderTarget;

    /// Return the first container matching `selector`, if any.
    fn query_selector(&mut self, selector: &str) -> Option<Self::Target>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_target_replaces_previous_content() {
        let mut out = String::from("stale");
        out.replace_markup("<i>fresh</i>");
        assert_eq!(out, "<i>fresh</i>");
        out.replace_markup("");
        assert!(out.is_empty());
    }

    #[test]
    fn borrowed_target_forwards() {
        let mut out = String::new();
        {
            let mut borrowed = &mut out;
            borrowed.replace_markup("via ref");
        }
        assert_eq!(out, "via ref");
    }
}
