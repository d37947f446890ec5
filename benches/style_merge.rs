// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the options merge and queue churn.
//!
//! Measures the performance of:
//! - Merging an override tree into the default style
//! - Resolving a merged tree into render properties
//! - Pushing and draining a long request queue

use criterion::{criterion_group, criterion_main, Criterion};
use iced_toast::config::defaults::default_style;
use iced_toast::config::Settings;
use iced_toast::style::{merge, resolve, StyleMap, StyleValue};
use iced_toast::{Controller, ToastOptions};
use std::hint::black_box;
use std::time::{Duration, Instant};

fn override_tree(depth: usize) -> StyleMap {
    let mut leaf_group = StyleMap::new();
    leaf_group.insert("radius".into(), StyleValue::leaf("8px"));
    leaf_group.insert("width".into(), StyleValue::leaf("1px"));

    let mut tree = StyleMap::new();
    tree.insert("background".into(), StyleValue::leaf("#202020"));
    tree.insert("border".into(), StyleValue::Map(leaf_group));
    for level in 0..depth {
        let mut wrapper = StyleMap::new();
        wrapper.insert(format!("level-{level}"), StyleValue::Map(tree));
        tree = wrapper;
    }
    tree
}

/// Benchmark the recursive merge against the default tree.
fn bench_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("style");

    let default = default_style();
    let shallow = override_tree(0);
    let deep = override_tree(16);

    group.bench_function("merge_shallow", |b| {
        b.iter(|| black_box(merge(&default, shallow.clone())));
    });

    group.bench_function("merge_deep", |b| {
        b.iter(|| black_box(merge(&default, deep.clone())));
    });

    group.finish();
}

/// Benchmark lowering a merged tree into render properties.
fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("style");

    let merged = merge(&default_style(), override_tree(0));

    group.bench_function("resolve", |b| {
        b.iter(|| black_box(resolve(&merged)));
    });

    group.finish();
}

/// Benchmark queueing many requests and draining them through the full
/// lifecycle with a single late tick.
fn bench_queue_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("controller");

    let settings = Settings {
        duration_ms: Some(100),
        animation_ms: Some(50),
        ..Settings::default()
    };

    group.bench_function("queue_100_and_drain", |b| {
        b.iter(|| {
            let mut controller = Controller::with_settings(settings.clone());
            let start = Instant::now();
            for i in 0..100 {
                controller.request_at(format!("toast-{i}"), ToastOptions::info(), start);
            }
            controller.tick_at(start + Duration::from_secs(3600));
            black_box(controller.has_toasts());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_merge, bench_resolve, bench_queue_churn);
criterion_main!(benches);
