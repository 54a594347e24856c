// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Completable and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};

use completable::dictionary::{demo_word_list, Dictionary};
use completable::model::CompletionStack;

mod fixtures;
mod profiler;

// Group names (`stack.push_pop`, `word_list.build`) and case IDs stay stable so results
// remain comparable across refactors.

fn type_and_erase(stack: &mut CompletionStack, word: &str) -> u64 {
    let mut acc = 0u64;
    for ch in word.chars() {
        stack.push(ch);
        acc = acc.wrapping_mul(131).wrapping_add(stack.top().length() as u64);
    }
    for _ in word.chars() {
        stack.pop();
        acc = acc.wrapping_mul(131).wrapping_add(stack.count() as u64);
    }
    acc
}

fn bench_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("stack.push_pop");

    let cases: [(&str, Arc<dyn Dictionary>, Vec<String>); 3] = [
        (
            "demo",
            Arc::new(demo_word_list()),
            ["calm", "capable", "well-being", "zzz"].map(str::to_owned).to_vec(),
        ),
        (
            "generated_10k",
            Arc::new(fixtures::word_list(10_000)),
            (0..16).map(|index| fixtures::word(index * 613)).collect(),
        ),
        (
            "generated_200k",
            Arc::new(fixtures::word_list(200_000)),
            (0..16).map(|index| fixtures::word(index * 12_289)).collect(),
        ),
    ];

    for (case, dictionary, words) in cases {
        let chars: usize = words.iter().map(|word| word.chars().count()).sum();
        group.throughput(Throughput::Elements(chars as u64));
        let mut stack = CompletionStack::new(dictionary);
        group.bench_function(case, |b| {
            b.iter(|| {
                let mut acc = 0u64;
                for word in &words {
                    acc ^= type_and_erase(&mut stack, black_box(word));
                }
                black_box(acc)
            })
        });
    }

    group.finish();
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("word_list.build");

    for (case, count) in [("small", 1_000usize), ("large", 100_000)] {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_function(case, |b| {
            b.iter_batched(
                || fixtures::entries(count),
                |entries| {
                    let list = completable::dictionary::WordList::from_entries(entries);
                    black_box(list.size())
                },
                BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = bench_push_pop, bench_build
}
criterion_main!(benches);
