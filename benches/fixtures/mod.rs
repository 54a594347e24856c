// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Completable and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

// Deterministic word lists (no RNG).

use completable::dictionary::{WordEntry, WordList};

const SYLLABLES: [&str; 16] = [
    "ka", "lo", "mi", "ne", "ra", "so", "tu", "vi", "ba", "de", "fo", "gu", "ha", "je", "pi", "ze",
];

/// The `index`th generated word; two to five syllables.
pub fn word(index: usize) -> String {
    let syllables = 2 + index % 4;
    let mut rest = index;
    let mut out = String::with_capacity(syllables * 2);
    for _ in 0..syllables {
        out.push_str(SYLLABLES[rest % SYLLABLES.len()]);
        rest = rest / SYLLABLES.len() + index % 7;
    }
    out
}

/// `count` entries, each related to a few of its neighbors.
pub fn entries(count: usize) -> Vec<WordEntry> {
    (0..count)
        .map(|index| {
            let near = |offset: usize| word((index + offset) % count.max(1));
            WordEntry::new(word(index))
                .with_synonyms([near(1), near(2)])
                .with_antonyms([near(count / 2)])
                .with_parts_of_speech(["noun"])
        })
        .collect()
}

pub fn word_list(count: usize) -> WordList {
    WordList::from_entries(entries(count))
}
