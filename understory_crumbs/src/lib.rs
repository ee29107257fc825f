// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Crumbs: a leveled breadcrumb trail for cascading UI controls.
//!
//! ## Overview
//!
//! This crate keeps the "rootline" of a page in sync with a hierarchy of
//! controls, such as cascading filters on a search page. Each control acts
//! on a level (`0` is the root); picking something at one level discards
//! everything below it. The trail is staged in memory and rendered as markup
//! into a container only when published.
//!
//! It does not listen for events or touch a document. A toolkit's event
//! layer calls into the [`CrumbsController`](crate::controller::CrumbsController)
//! and supplies a [`RenderTarget`](crate::target::RenderTarget) for the output.
//!
//! ## Workflow
//!
//! 1) Configure — build a [`CrumbsConfig`](crate::config::CrumbsConfig) with
//!    per-level maximum lengths, separator markup, and item-wrap markup.
//! 2) Bind — construct the controller with a render target, or resolve the
//!    configured selector through a [`ContainerLookup`](crate::target::ContainerLookup).
//! 3) Stage — on each interaction call
//!    [`set`](crate::controller::CrumbsController::set) for single-choice
//!    controls, or [`add_to_list`](crate::controller::CrumbsController::add_to_list) /
//!    [`remove_from_list`](crate::controller::CrumbsController::remove_from_list)
//!    for multi-select families. Controls described with `data-crumbs-*`
//!    attributes can go through [`CrumbAttributes`](crate::attributes::CrumbAttributes).
//! 4) Publish — [`publish`](crate::controller::CrumbsController::publish)
//!    replaces the container content with the rendered trail.
//!
//! ## Text length
//!
//! Overlong texts are shortened in the middle, keeping head and tail; see
//! [`ellipsis`](crate::ellipsis). Lengths count `char`s.
//!
//! ## Example
//!
//! ```
//! use understory_crumbs::config::CrumbsConfig;
//! use understory_crumbs::controller::CrumbsController;
//!
//! let config = CrumbsConfig::new()
//!     .with_max_length([30, 30, 30])
//!     .with_separator(" &gt; ")
//!     .with_item_wrap("<span class=\"item\">", "</span>");
//! let mut crumbs = CrumbsController::new(config, String::new());
//!
//! crumbs.set(0, "Shoes");
//! crumbs.add_to_list(1, "brand", "Brands: ", "Acme");
//! crumbs.add_to_list(1, "brand", "Brands: ", "Globex");
//! crumbs.publish();
//! assert_eq!(
//!     crumbs.target(),
//!     "<span class=\"item\">Shoes</span> &gt; <span class=\"item\">Brands: Acme, Globex</span>"
//! );
//!
//! // Picking a different root drops the brand level.
//! crumbs.set(0, "Bags");
//! crumbs.publish();
//! assert_eq!(crumbs.target(), "<span class=\"item\">Bags</span>");
//! ```
//!
//! ## Features
//!
//! - `std`: build the dependencies with their `std` support.
//! - `serde`: (de)serialize [`CrumbsConfig`](crate::config::CrumbsConfig) with the
//!   camelCase keys of a page options object. Its tests only build with this
//!   feature, so run the suite with `cargo test -p understory_crumbs --all-features`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod attributes;
pub mod config;
pub mod controller;
pub mod ellipsis;
pub mod error;
pub mod list;
pub mod target;
pub mod types;
