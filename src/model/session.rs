// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Completable and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::sync::Arc;

use crate::dictionary::Dictionary;

use super::{CompletionStack, DictionaryCatalog, Settings, WordFilter, WordStack, WordStackEntry};

/// Everything the views read and the input handlers mutate.
#[derive(Debug)]
pub struct SearchSession {
    stack: CompletionStack,
    history: WordStack,
    filter: WordFilter,
    settings: Settings,
    catalog: DictionaryCatalog,
}

impl SearchSession {
    pub fn new(dictionary: Arc<dyn Dictionary>) -> Self {
        Self {
            stack: CompletionStack::new(dictionary),
            history: WordStack::default(),
            filter: WordFilter::default(),
            settings: Settings::default(),
            catalog: DictionaryCatalog::default(),
        }
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    pub fn dictionary(&self) -> &Arc<dyn Dictionary> {
        self.stack.dictionary()
    }

    /// Swaps the data source. Both stacks start over.
    pub fn set_dictionary(&mut self, dictionary: Arc<dyn Dictionary>) {
        self.stack.set_dictionary(dictionary);
        self.history.clear();
    }

    pub fn stack(&self) -> &CompletionStack {
        &self.stack
    }

    pub fn stack_mut(&mut self) -> &mut CompletionStack {
        &mut self.stack
    }

    pub fn history(&self) -> &WordStack {
        &self.history
    }

    pub fn filter(&self) -> &WordFilter {
        &self.filter
    }

    pub fn filter_mut(&mut self) -> &mut WordFilter {
        &mut self.filter
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    pub fn catalog(&self) -> &DictionaryCatalog {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut DictionaryCatalog {
        &mut self.catalog
    }

    pub fn prefix(&self) -> &str {
        self.stack.top().prefix()
    }

    /// The word under the completion cursor.
    pub fn selection(&self) -> Option<usize> {
        self.stack.top().selection()
    }

    /// Returns `true` when the prefix grew.
    pub fn extend_prefix(&mut self, ch: char) -> bool {
        let before = self.stack.count();
        self.stack.push(ch);
        self.stack.count() != before
    }

    /// Returns `true` when a character was removed.
    pub fn erase(&mut self) -> bool {
        let before = self.stack.count();
        self.stack.pop();
        self.stack.count() != before
    }

    /// Extends the prefix by whatever all current matches have in common.
    pub fn complete_common_prefix(&mut self) -> bool {
        let top = self.stack.top();
        if top.length() == 0 {
            return false;
        }

        let dictionary = self.stack.dictionary().clone();
        let first = dictionary.at(top.start());
        let last = dictionary.at(top.start() + top.length() - 1);
        let typed = top.prefix().chars().count();
        let common: Vec<char> = first
            .chars()
            .zip(last.chars())
            .take_while(|(a, b)| a == b)
            .map(|(a, _)| a)
            .collect();

        let before = self.stack.count();
        for &ch in common.iter().skip(typed) {
            self.stack.push(ch);
        }
        self.stack.count() != before
    }

    /// Replaces the prefix with `word`, remembering where the user came from.
    pub fn accept_word(&mut self, word: &str, came_from: WordStackEntry) {
        self.history.push(came_from);
        self.replace_prefix(word);
    }

    /// Restores the most recently superseded prefix and its cursor.
    pub fn go_back(&mut self) -> Option<WordStackEntry> {
        let entry = self.history.pop()?;
        self.replace_prefix(&entry.prefix);
        *self.stack.top_mut().cursor_mut(entry.slot) = entry.cursor;
        Some(entry)
    }

    fn replace_prefix(&mut self, prefix: &str) {
        self.stack.pop_to_root();
        for ch in prefix.chars() {
            self.stack.push(ch);
        }
    }
}
