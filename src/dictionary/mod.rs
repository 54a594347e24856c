// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Completable and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Dictionary data sources.
//!
//! The UI only talks to a [`Dictionary`]: an alphabetically ordered collection of entries, each
//! addressed by its alphabetic index. Everything the views show (completion ranges, length order,
//! synonyms, antonyms, ordinal summations, attributes) is a lookup keyed by that index.

use smol_str::SmolStr;

mod loader;
mod word_list;

pub use loader::{find_dictionaries, load_dictionary, DictionaryError, DICTIONARY_EXTENSIONS};
pub use word_list::{demo_word_list, ordinal_summation_of, WordEntry, WordList};

bitflags::bitflags! {
    /// Labels attached to a dictionary entry.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Attributes: u8 {
        const NAME = 1 << 0;
        const MALE_NAME = 1 << 1;
        const FEMALE_NAME = 1 << 2;
        const PLACE = 1 << 3;
        const COMPOUND = 1 << 4;
        const ACRONYM = 1 << 5;
    }
}

const ATTRIBUTE_LABELS: [(Attributes, &str); 6] = [
    (Attributes::NAME, "name"),
    (Attributes::MALE_NAME, "male name"),
    (Attributes::FEMALE_NAME, "female name"),
    (Attributes::PLACE, "place"),
    (Attributes::COMPOUND, "compound"),
    (Attributes::ACRONYM, "acronym"),
];

impl Attributes {
    /// Parses a single label such as `"male name"` (also accepts `male_name`).
    pub fn from_label(label: &str) -> Option<Self> {
        let normalized = label.trim().to_ascii_lowercase().replace(['_', '-'], " ");
        ATTRIBUTE_LABELS
            .iter()
            .find(|(_, name)| *name == normalized)
            .map(|(flag, _)| *flag)
    }

    pub fn labels(self) -> impl Iterator<Item = &'static str> {
        ATTRIBUTE_LABELS
            .into_iter()
            .filter(move |(flag, _)| self.contains(*flag))
            .map(|(_, name)| name)
    }
}

/// The capability contract of a word collection.
///
/// Indices are alphabetic-order positions in `0..size()`. Implementations must keep
/// `as_longest`/`from_longest` a bijection over that range.
pub trait Dictionary: Send + Sync {
    fn size(&self) -> usize;

    /// Returns `(start, length)` of the contiguous alphabetic range of entries starting with
    /// `prefix`. A length of zero means nothing matches.
    fn complete(&self, prefix: &str) -> (usize, usize);

    fn at(&self, index: usize) -> &str;

    /// Rank of `index` when entries are ordered by length.
    fn as_longest(&self, index: usize) -> usize;

    /// Alphabetic index of the entry holding length rank `rank`.
    fn from_longest(&self, rank: usize) -> usize;

    fn synonyms(&self, index: usize) -> &[usize];

    fn antonyms(&self, index: usize) -> &[usize];

    fn ordinal_summation(&self, index: usize) -> u32;

    /// Every entry whose ordinal summation equals `value`, in alphabetic order.
    fn from_ordinal_summation(&self, value: u32) -> &[usize];

    fn parts_of_speech(&self, index: usize) -> &[SmolStr];

    fn attributes(&self, index: usize) -> Attributes;

    fn is_name(&self, index: usize) -> bool {
        self.attributes(index).contains(Attributes::NAME)
    }

    fn is_male_name(&self, index: usize) -> bool {
        self.attributes(index).contains(Attributes::MALE_NAME)
    }

    fn is_female_name(&self, index: usize) -> bool {
        self.attributes(index).contains(Attributes::FEMALE_NAME)
    }

    fn is_place(&self, index: usize) -> bool {
        self.attributes(index).contains(Attributes::PLACE)
    }

    fn is_compound(&self, index: usize) -> bool {
        self.attributes(index).contains(Attributes::COMPOUND)
    }

    fn is_acronym(&self, index: usize) -> bool {
        self.attributes(index).contains(Attributes::ACRONYM)
    }
}
