// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Completable and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use rayon::prelude::*;
use smol_str::SmolStr;

use super::{Attributes, Dictionary};

/// One raw dictionary entry before indexing. Related words are referenced by text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordEntry {
    pub word: SmolStr,
    pub synonyms: Vec<SmolStr>,
    pub antonyms: Vec<SmolStr>,
    pub parts_of_speech: Vec<SmolStr>,
    pub attributes: Attributes,
}

impl WordEntry {
    pub fn new(word: impl Into<SmolStr>) -> Self {
        Self {
            word: word.into(),
            ..Self::default()
        }
    }

    pub fn with_synonyms<S: Into<SmolStr>>(mut self, words: impl IntoIterator<Item = S>) -> Self {
        self.synonyms.extend(words.into_iter().map(Into::into));
        self
    }

    pub fn with_antonyms<S: Into<SmolStr>>(mut self, words: impl IntoIterator<Item = S>) -> Self {
        self.antonyms.extend(words.into_iter().map(Into::into));
        self
    }

    pub fn with_parts_of_speech<S: Into<SmolStr>>(
        mut self,
        parts: impl IntoIterator<Item = S>,
    ) -> Self {
        self.parts_of_speech.extend(parts.into_iter().map(Into::into));
        self
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes |= attributes;
        self
    }
}

/// In-memory [`Dictionary`] built from a list of entries.
///
/// Entries are sorted by byte order and deduplicated (duplicate entries merge their relations).
/// Synonym/antonym references to words that are not in the list are dropped.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: Vec<SmolStr>,
    by_length: Vec<usize>,
    length_rank: Vec<usize>,
    synonyms: Vec<Vec<usize>>,
    antonyms: Vec<Vec<usize>>,
    parts_of_speech: Vec<Vec<SmolStr>>,
    attributes: Vec<Attributes>,
    ordinals: Vec<u32>,
    by_ordinal: BTreeMap<u32, Vec<usize>>,
}

impl WordList {
    pub fn from_words<S: Into<SmolStr>>(words: impl IntoIterator<Item = S>) -> Self {
        Self::from_entries(words.into_iter().map(WordEntry::new))
    }

    pub fn from_entries(entries: impl IntoIterator<Item = WordEntry>) -> Self {
        let mut entries: Vec<WordEntry> = entries
            .into_iter()
            .filter(|entry| !entry.word.trim().is_empty())
            .collect();
        entries.par_sort_unstable_by(|a, b| a.word.cmp(&b.word));
        entries.dedup_by(|duplicate, kept| {
            if duplicate.word != kept.word {
                return false;
            }
            kept.synonyms.append(&mut duplicate.synonyms);
            kept.antonyms.append(&mut duplicate.antonyms);
            kept.parts_of_speech.append(&mut duplicate.parts_of_speech);
            kept.attributes |= duplicate.attributes;
            true
        });

        let words: Vec<SmolStr> = entries.iter().map(|entry| entry.word.clone()).collect();
        let resolve = |own: usize, related: &[SmolStr]| -> Vec<usize> {
            let mut indices: Vec<usize> = related
                .iter()
                .filter_map(|word| words.binary_search(word).ok())
                .filter(|&index| index != own)
                .collect();
            indices.sort_unstable();
            indices.dedup();
            indices
        };

        let mut synonyms = Vec::with_capacity(entries.len());
        let mut antonyms = Vec::with_capacity(entries.len());
        let mut parts_of_speech = Vec::with_capacity(entries.len());
        let mut attributes = Vec::with_capacity(entries.len());
        for (index, entry) in entries.iter_mut().enumerate() {
            synonyms.push(resolve(index, &entry.synonyms));
            antonyms.push(resolve(index, &entry.antonyms));
            let mut parts = std::mem::take(&mut entry.parts_of_speech);
            parts.sort_unstable();
            parts.dedup();
            parts_of_speech.push(parts);
            attributes.push(entry.attributes | derived_attributes(&entry.word));
        }

        let lengths: Vec<usize> = words.par_iter().map(|word| word.chars().count()).collect();
        let mut by_length: Vec<usize> = (0..words.len()).collect();
        by_length.par_sort_unstable_by_key(|&index| (lengths[index], index));
        let mut length_rank = vec![0; words.len()];
        for (rank, &index) in by_length.iter().enumerate() {
            length_rank[index] = rank;
        }

        let ordinals: Vec<u32> = words.par_iter().map(|word| ordinal_summation_of(word)).collect();
        let mut by_ordinal: BTreeMap<u32, Vec<usize>> = BTreeMap::new();
        for (index, &value) in ordinals.iter().enumerate() {
            by_ordinal.entry(value).or_default().push(index);
        }

        Self {
            words,
            by_length,
            length_rank,
            synonyms,
            antonyms,
            parts_of_speech,
            attributes,
            ordinals,
            by_ordinal,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[SmolStr] {
        &self.words
    }
}

fn derived_attributes(word: &str) -> Attributes {
    let mut attributes = Attributes::empty();
    if word.contains([' ', '-']) {
        attributes |= Attributes::COMPOUND;
    }
    if word.chars().count() >= 2 && word.chars().all(|ch| ch.is_ascii_uppercase()) {
        attributes |= Attributes::ACRONYM;
    }
    attributes
}

/// Sum of letter positions (`a`=1 .. `z`=26, case-insensitive); other characters count zero.
pub fn ordinal_summation_of(word: &str) -> u32 {
    word.bytes()
        .filter(u8::is_ascii_alphabetic)
        .map(|byte| u32::from(byte.to_ascii_lowercase() - b'a' + 1))
        .sum()
}

impl Dictionary for WordList {
    fn size(&self) -> usize {
        self.words.len()
    }

    fn complete(&self, prefix: &str) -> (usize, usize) {
        let start = self.words.partition_point(|word| word.as_str() < prefix);
        let length = self.words[start..].partition_point(|word| word.starts_with(prefix));
        (start, length)
    }

    fn at(&self, index: usize) -> &str {
        self.words.get(index).map_or("", SmolStr::as_str)
    }

    fn as_longest(&self, index: usize) -> usize {
        self.length_rank.get(index).copied().unwrap_or(index)
    }

    fn from_longest(&self, rank: usize) -> usize {
        self.by_length.get(rank).copied().unwrap_or(rank)
    }

    fn synonyms(&self, index: usize) -> &[usize] {
        self.synonyms.get(index).map_or(&[], Vec::as_slice)
    }

    fn antonyms(&self, index: usize) -> &[usize] {
        self.antonyms.get(index).map_or(&[], Vec::as_slice)
    }

    fn ordinal_summation(&self, index: usize) -> u32 {
        self.ordinals.get(index).copied().unwrap_or(0)
    }

    fn from_ordinal_summation(&self, value: u32) -> &[usize] {
        self.by_ordinal.get(&value).map_or(&[], Vec::as_slice)
    }

    fn parts_of_speech(&self, index: usize) -> &[SmolStr] {
        self.parts_of_speech.get(index).map_or(&[], Vec::as_slice)
    }

    fn attributes(&self, index: usize) -> Attributes {
        self.attributes.get(index).copied().unwrap_or_default()
    }
}

type DemoRow = (
    &'static str,
    &'static [&'static str],
    &'static [&'static str],
    &'static [&'static str],
    Attributes,
);

const NONE: Attributes = Attributes::empty();

const DEMO_ROWS: &[DemoRow] = &[
    ("able", &["capable", "competent"], &["unable"], &["adjective"], NONE),
    ("accept", &["receive", "take"], &["reject", "refuse"], &["verb"], NONE),
    ("ancient", &["old", "antique"], &["modern", "new"], &["adjective"], NONE),
    ("antique", &["ancient", "old"], &["modern"], &["adjective", "noun"], NONE),
    ("big", &["large", "huge"], &["small", "little"], &["adjective"], NONE),
    ("bold", &["brave", "daring"], &["timid", "shy"], &["adjective"], NONE),
    ("brave", &["bold", "daring"], &["cowardly", "timid"], &["adjective", "verb"], NONE),
    ("calm", &["quiet", "still", "serene"], &["agitated", "noisy"], &["adjective", "noun", "verb"], NONE),
    ("capable", &["able", "competent"], &["incapable"], &["adjective"], NONE),
    ("cold", &["chilly", "cool"], &["hot", "warm"], &["adjective", "noun"], NONE),
    ("competent", &["able", "capable"], &["incompetent"], &["adjective"], NONE),
    ("cool", &["cold", "chilly"], &["warm"], &["adjective", "verb"], NONE),
    ("cowardly", &["timid"], &["brave", "bold"], &["adjective"], NONE),
    ("daring", &["bold", "brave"], &["timid"], &["adjective", "noun"], NONE),
    ("dark", &["dim", "gloomy"], &["light", "bright"], &["adjective", "noun"], NONE),
    ("bright", &["light", "shiny"], &["dark", "dim"], &["adjective"], NONE),
    ("dim", &["dark", "faint"], &["bright"], &["adjective", "verb"], NONE),
    ("fast", &["quick", "rapid", "swift"], &["slow"], &["adjective", "adverb"], NONE),
    ("gloomy", &["dark", "dim"], &["bright", "cheerful"], &["adjective"], NONE),
    ("cheerful", &["happy", "merry"], &["gloomy", "sad"], &["adjective"], NONE),
    ("happy", &["cheerful", "glad", "merry"], &["sad", "unhappy"], &["adjective"], NONE),
    ("glad", &["happy", "pleased"], &["sad"], &["adjective"], NONE),
    ("hot", &["warm", "heated"], &["cold", "cool"], &["adjective"], NONE),
    ("huge", &["big", "large", "vast"], &["small", "tiny"], &["adjective"], NONE),
    ("large", &["big", "huge"], &["small"], &["adjective"], NONE),
    ("light", &["bright"], &["dark", "heavy"], &["adjective", "noun", "verb"], NONE),
    ("little", &["small", "tiny"], &["big", "large"], &["adjective", "adverb"], NONE),
    ("merry", &["happy", "cheerful"], &["sad"], &["adjective"], NONE),
    ("modern", &["new", "current"], &["ancient", "old"], &["adjective"], NONE),
    ("new", &["fresh", "modern"], &["old"], &["adjective"], NONE),
    ("noisy", &["loud"], &["quiet", "calm"], &["adjective"], NONE),
    ("old", &["ancient", "antique"], &["new", "young", "modern"], &["adjective"], NONE),
    ("quick", &["fast", "rapid", "swift"], &["slow"], &["adjective"], NONE),
    ("quiet", &["calm", "still"], &["noisy", "loud"], &["adjective", "noun"], NONE),
    ("rapid", &["fast", "quick"], &["slow"], &["adjective"], NONE),
    ("sad", &["unhappy", "gloomy"], &["happy", "glad"], &["adjective"], NONE),
    ("slow", &["sluggish"], &["fast", "quick", "rapid"], &["adjective", "verb"], NONE),
    ("small", &["little", "tiny"], &["big", "large", "huge"], &["adjective"], NONE),
    ("swift", &["fast", "quick"], &["slow"], &["adjective"], NONE),
    ("timid", &["shy", "cowardly"], &["bold", "brave"], &["adjective"], NONE),
    ("tiny", &["small", "little"], &["huge", "big"], &["adjective"], NONE),
    ("warm", &["hot"], &["cold", "cool"], &["adjective", "verb"], NONE),
    ("Alice", &[], &[], &["noun"], Attributes::NAME.union(Attributes::FEMALE_NAME)),
    ("Arthur", &[], &[], &["noun"], Attributes::NAME.union(Attributes::MALE_NAME)),
    ("Boston", &[], &[], &["noun"], Attributes::PLACE),
    ("Carol", &[], &[], &["noun"], Attributes::NAME.union(Attributes::FEMALE_NAME)),
    ("Dublin", &[], &[], &["noun"], Attributes::PLACE),
    ("NASA", &[], &[], &["noun"], NONE),
    ("RADAR", &[], &[], &["noun"], NONE),
    ("ice cream", &[], &[], &["noun"], NONE),
    ("well-being", &["welfare"], &[], &["noun"], NONE),
];

/// A small built-in thesaurus used by `--demo` and throughout the tests.
pub fn demo_word_list() -> WordList {
    WordList::from_entries(DEMO_ROWS.iter().map(
        |(word, synonyms, antonyms, parts, attributes)| {
            WordEntry::new(*word)
                .with_synonyms(synonyms.iter().copied())
                .with_antonyms(antonyms.iter().copied())
                .with_parts_of_speech(parts.iter().copied())
                .with_attributes(*attributes)
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::{demo_word_list, ordinal_summation_of, WordEntry, WordList};
    use crate::dictionary::{Attributes, Dictionary};

    #[test]
    fn complete_returns_contiguous_alphabetic_range() {
        let words = WordList::from_words(["cab", "apple", "cat", "dog", "car"]);
        assert_eq!(words.complete("ca"), (1, 3));
        assert_eq!(words.at(1), "cab");
        assert_eq!(words.at(3), "cat");
        assert_eq!(words.complete(""), (0, 5));
        assert_eq!(words.complete("cz").1, 0);
        assert_eq!(words.complete("zebra").1, 0);
    }

    #[test]
    fn length_ranks_form_a_bijection() {
        let words = WordList::from_words(["ccc", "a", "bb", "dddd", "ee"]);
        for index in 0..words.size() {
            assert_eq!(words.from_longest(words.as_longest(index)), index);
        }
        assert_eq!(words.at(words.from_longest(0)), "a");
        assert_eq!(words.at(words.from_longest(1)), "bb");
        assert_eq!(words.at(words.from_longest(2)), "ee");
        assert_eq!(words.at(words.from_longest(4)), "dddd");
    }

    #[test]
    fn duplicates_merge_relations() {
        let words = WordList::from_entries([
            WordEntry::new("fast").with_synonyms(["quick"]),
            WordEntry::new("quick"),
            WordEntry::new("fast").with_antonyms(["slow"]).with_synonyms(["rapid"]),
            WordEntry::new("slow"),
        ]);
        assert_eq!(words.size(), 3);
        let (fast, _) = words.complete("fast");
        let (quick, _) = words.complete("quick");
        let (slow, _) = words.complete("slow");
        assert_eq!(words.synonyms(fast), &[quick]);
        assert_eq!(words.antonyms(fast), &[slow]);
    }

    #[test]
    fn ordinal_summation_ignores_case_and_punctuation() {
        assert_eq!(ordinal_summation_of("abc"), 6);
        assert_eq!(ordinal_summation_of("ABC"), 6);
        assert_eq!(ordinal_summation_of("a-b c"), 6);

        let words = WordList::from_words(["abc", "cba", "bad", "z"]);
        let (abc, _) = words.complete("abc");
        let value = words.ordinal_summation(abc);
        let same: Vec<&str> =
            words.from_ordinal_summation(value).iter().map(|&index| words.at(index)).collect();
        assert_eq!(same, vec!["abc", "cba"]);
    }

    #[test]
    fn attributes_are_derived_for_compounds_and_acronyms() {
        let words = demo_word_list();
        let (nasa, _) = words.complete("NASA");
        let (ice_cream, _) = words.complete("ice cream");
        let (alice, _) = words.complete("Alice");
        assert!(words.is_acronym(nasa));
        assert!(words.is_compound(ice_cream));
        assert!(words.is_name(alice));
        assert!(words.is_female_name(alice));
        assert!(!words.is_male_name(alice));
        assert_eq!(words.attributes(words.complete("Boston").0), Attributes::PLACE);
    }

    #[test]
    fn out_of_range_lookups_are_empty() {
        let words = WordList::from_words(["a"]);
        assert_eq!(words.at(7), "");
        assert!(words.synonyms(7).is_empty());
        assert!(words.parts_of_speech(7).is_empty());
    }
}
