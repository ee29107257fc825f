// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_crumbs::config::CrumbsConfig;
use understory_crumbs::controller::CrumbsController;
use understory_crumbs::ellipsis::ellipsize;

fn config(levels: usize) -> CrumbsConfig {
    CrumbsConfig::new()
        .with_max_length(core::iter::repeat_n(30, levels))
        .with_separator("<span class=\"separator\">&nbsp;&gt; </span>")
        .with_item_wrap("<span class=\"item\">", "</span>")
}

fn gen_labels(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| format!("Category {i} with a fairly long descriptive label"))
        .collect()
}

fn bench_ellipsize(c: &mut Criterion) {
    let mut group = c.benchmark_group("ellipsize");
    for &len in &[16usize, 256, 4096] {
        let text: String = ('a'..='z').cycle().take(len).collect();
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_function(format!("max30_len{len}"), |b| {
            b.iter(|| black_box(ellipsize(black_box(&text), Some(30)).len()));
        });
    }
    group.finish();
}

fn bench_set_publish(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_publish");
    for &levels in &[3usize, 16, 64] {
        let labels = gen_labels(levels);
        group.throughput(Throughput::Elements(levels as u64));
        group.bench_function(format!("levels{levels}"), |b| {
            b.iter_batched(
                || CrumbsController::<u32, String>::new(config(levels), String::new()),
                |mut crumbs| {
                    for (level, label) in labels.iter().enumerate() {
                        crumbs.set(level, label);
                    }
                    crumbs.publish();
                    black_box(crumbs.target().len());
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_list_toggle(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_toggle");
    let labels = gen_labels(32);
    group.throughput(Throughput::Elements(labels.len() as u64 * 2));
    group.bench_function("add_then_remove_32", |b| {
        b.iter_batched(
            || CrumbsController::<&str, String>::new(config(3), String::new()),
            |mut crumbs| {
                for label in &labels {
                    crumbs.add_to_list(1, "family", "Selected: ", label);
                }
                for label in labels.iter().rev() {
                    crumbs.remove_from_list(1, "family", "Selected: ", label);
                }
                black_box(crumbs.render().len());
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_ellipsize, bench_set_publish, bench_list_toggle);
criterion_main!(benches);
