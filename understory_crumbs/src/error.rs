// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors for container binding and attribute parsing.
//!
//! Trail operations themselves never fail.

use alloc::string::String;

use thiserror::Error;

/// Failure to bind a container or to read a control's crumb attributes.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum CrumbsError {
    /// The configuration names no container selector.
    #[error("no container selector configured")]
    MissingContainer,

    /// No container matched the configured selector.
    #[error("container not found: {selector}")]
    ContainerNotFound {
        /// The selector that was looked up.
        selector: String,
    },

    /// A required attribute is absent.
    #[error("missing attribute: {name}")]
    MissingAttribute {
        /// Attribute name, e.g. `data-crumbs-level`.
        name: &'static str,
    },

    /// The level attribute is not a non-negative integer.
    #[error("invalid crumb level: {value:?}")]
    InvalidLevel {
        /// The raw attribute value.
        value: String,
    },

    /// A boolean attribute holds something other than `true`, `false`, or nothing.
    #[error("invalid flag {name}: {value:?}")]
    InvalidFlag {
        /// Attribute name.
        name: &'static str,
        /// The raw attribute value.
        value: String,
    },
}
