// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cascading filters driving a breadcrumb trail.
//!
//! This example loads the page options from JSON, resolves the container by
//! selector on a tiny in-memory "page", and replays a few interactions the way
//! an event layer would: read each control's `data-crumbs-*` attributes and
//! apply them to the controller.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_demos --example crumbs_filters`

use std::collections::HashMap;

use understory_crumbs::attributes::CrumbAttributes;
use understory_crumbs::config::CrumbsConfig;
use understory_crumbs::controller::CrumbsController;
use understory_crumbs::error::CrumbsError;
use understory_crumbs::target::{ContainerLookup, RenderTarget};

const OPTIONS: &str = r##"{
    "maxLength": [30, 30, 30],
    "separator": "<span class=\"separator\">&nbsp;&gt; </span>",
    "container": "#crumbs_container",
    "itemWrap": ["<span class=\"item\">", "</span>"]
}"##;

/// Stand-in for a DOM element: prints whatever is published into it.
#[derive(Debug)]
struct Container {
    id: String,
    inner_html: String,
}

impl RenderTarget for Container {
    fn replace_markup(&mut self, markup: &str) {
        self.inner_html.replace_markup(markup);
        println!("{} <- {}", self.id, self.inner_html);
    }
}

/// Stand-in for a document with a few container ids.
struct Page {
    ids: Vec<&'static str>,
}

impl ContainerLookup for Page {
    type Target = Container;

    fn query_selector(&mut self, selector: &str) -> Option<Container> {
        let id = selector.strip_prefix('#')?;
        self.ids.iter().any(|known| *known == id).then(|| Container {
            id: selector.to_owned(),
            inner_html: String::new(),
        })
    }
}

/// A control carrying `data-crumbs-*` attributes.
fn control(attrs: &[(&str, &str)]) -> Result<CrumbAttributes, CrumbsError> {
    let attrs: HashMap<&str, &str> = attrs.iter().copied().collect();
    CrumbAttributes::from_lookup(|name| attrs.get(name).copied())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()))
        .init();

    let config: CrumbsConfig = serde_json::from_str(OPTIONS)?;
    let mut page = Page {
        ids: vec!["search", "crumbs_container"],
    };
    let mut crumbs = CrumbsController::from_lookup(config, &mut page)?;

    let category = control(&[
        ("data-crumbs-level", "0"),
        ("data-crumbs-text", "Outdoor Equipment and Camping Supplies"),
        ("data-crumbs-event", "change"),
    ])?;
    let tents = control(&[
        ("data-crumbs-level", "1"),
        ("data-crumbs-text", "Tents"),
        ("data-crumbs-publish", "true"),
    ])?;
    let brand = |name: &'static str| {
        control(&[
            ("data-crumbs-level", "2"),
            ("data-crumbs-text", name),
            ("data-crumbs-list", "brand"),
            ("data-crumbs-list-prefix", "Brands: "),
            ("data-crumbs-publish", "true"),
        ])
    };
    let (acme, globex) = (brand("Acme")?, brand("Globex")?);

    category.apply(&mut crumbs, true);
    tents.apply(&mut crumbs, true);
    acme.apply(&mut crumbs, true);
    globex.apply(&mut crumbs, true);
    acme.apply(&mut crumbs, false);
    // Unchecking twice logs a warning and changes nothing.
    acme.apply(&mut crumbs, false);

    // Picking a new category resets everything below it.
    control(&[("data-crumbs-level", "0"), ("data-crumbs-text", "Bags")])?.apply(&mut crumbs, true);
    crumbs.publish();

    crumbs.clear();
    println!("final: {:?}", crumbs.into_target());
    Ok(())
}
