// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Completable and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Bounded stack of search frames.
//!
//! Every frame is one refinement of the typed prefix together with the dictionary's answer for
//! it. Frame 0 always stands for the empty prefix and therefore spans the whole dictionary.

use std::collections::BinaryHeap;
use std::fmt;
use std::sync::Arc;

use crate::dictionary::Dictionary;

pub const CAPACITY: usize = 108;

/// Which scroll cursor of a frame a view owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorSlot {
    Completion,
    Length,
    Synonyms,
    Antonyms,
    OrdinalSummation,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFrame {
    prefix: String,
    start: usize,
    length: usize,
    display_start: usize,
    length_completion: Vec<usize>,
    len_display_start: usize,
    syn_display_start: usize,
    ant_display_start: usize,
    ord_sum_display_start: usize,
}

impl SearchFrame {
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Length ranks of every match, ascending. Map back with `Dictionary::from_longest`.
    pub fn length_completion(&self) -> &[usize] {
        &self.length_completion
    }

    pub fn cursor(&self, slot: CursorSlot) -> usize {
        match slot {
            CursorSlot::Completion => self.display_start,
            CursorSlot::Length => self.len_display_start,
            CursorSlot::Synonyms => self.syn_display_start,
            CursorSlot::Antonyms => self.ant_display_start,
            CursorSlot::OrdinalSummation => self.ord_sum_display_start,
        }
    }

    pub fn cursor_mut(&mut self, slot: CursorSlot) -> &mut usize {
        match slot {
            CursorSlot::Completion => &mut self.display_start,
            CursorSlot::Length => &mut self.len_display_start,
            CursorSlot::Synonyms => &mut self.syn_display_start,
            CursorSlot::Antonyms => &mut self.ant_display_start,
            CursorSlot::OrdinalSummation => &mut self.ord_sum_display_start,
        }
    }

    /// Alphabetic index under the completion cursor, if anything matches.
    pub fn selection(&self) -> Option<usize> {
        if self.length == 0 {
            return None;
        }
        Some(self.start + self.display_start.min(self.length - 1))
    }

    fn clear(&mut self) {
        self.prefix.clear();
        self.start = 0;
        self.length = 0;
        self.display_start = 0;
        self.length_completion.clear();
        self.len_display_start = 0;
        self.syn_display_start = 0;
        self.ant_display_start = 0;
        self.ord_sum_display_start = 0;
    }
}

pub struct CompletionStack {
    dictionary: Arc<dyn Dictionary>,
    frames: Box<[SearchFrame]>,
    count: usize,
    rev: u64,
}

impl fmt::Debug for CompletionStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompletionStack")
            .field("dictionary_size", &self.dictionary.size())
            .field("frames", &&self.frames[..self.count])
            .field("rev", &self.rev)
            .finish()
    }
}

impl CompletionStack {
    pub fn new(dictionary: Arc<dyn Dictionary>) -> Self {
        let mut stack = Self {
            dictionary,
            frames: vec![SearchFrame::default(); CAPACITY].into_boxed_slice(),
            count: 1,
            rev: 0,
        };
        stack.clear_top();
        stack
    }

    pub fn dictionary(&self) -> &Arc<dyn Dictionary> {
        &self.dictionary
    }

    /// Swaps the data source and resets the stack to a single root frame.
    pub fn set_dictionary(&mut self, dictionary: Arc<dyn Dictionary>) {
        self.dictionary = dictionary;
        self.clear_all();
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Bumped whenever the set of live frames or their match ranges change.
    pub fn rev(&self) -> u64 {
        self.rev
    }

    pub fn top(&self) -> &SearchFrame {
        &self.frames[self.count - 1]
    }

    /// Mutable access to the top frame for cursor updates.
    pub fn top_mut(&mut self) -> &mut SearchFrame {
        &mut self.frames[self.count - 1]
    }

    pub fn frames(&self) -> &[SearchFrame] {
        &self.frames[..self.count]
    }

    /// Extends the prefix by `ch`. A full stack or a prefix without matches leaves the stack
    /// untouched.
    pub fn push(&mut self, ch: char) {
        if self.count == CAPACITY {
            tracing::debug!(%ch, "completion stack full");
            return;
        }

        let mut prefix = self.top().prefix.clone();
        prefix.push(ch);
        let (start, length) = self.dictionary.complete(&prefix);
        if length == 0 {
            tracing::debug!(prefix = %prefix, "no matches, push rolled back");
            return;
        }

        let length_completion = length_ranks(self.dictionary.as_ref(), start, length);
        self.count += 1;
        let top = &mut self.frames[self.count - 1];
        top.clear();
        top.prefix = prefix;
        top.start = start;
        top.length = length;
        top.length_completion = length_completion;
        self.rev = self.rev.wrapping_add(1);
    }

    /// Drops the top frame unless it is the root.
    pub fn pop(&mut self) {
        if self.count <= 1 {
            return;
        }
        self.frames[self.count - 1].clear();
        self.count -= 1;
        self.rev = self.rev.wrapping_add(1);
    }

    pub fn pop_to_root(&mut self) {
        while self.count > 1 {
            self.pop();
        }
    }

    pub fn clear_top(&mut self) {
        let index = self.count - 1;
        let size = self.dictionary.size();
        let frame = &mut self.frames[index];
        frame.clear();
        if index == 0 {
            frame.start = 0;
            frame.length = size;
            // Length ranks are a bijection over the whole dictionary.
            frame.length_completion = (0..size).collect();
        }
        self.rev = self.rev.wrapping_add(1);
    }

    pub fn clear_all(&mut self) {
        for frame in &mut self.frames[1..self.count] {
            frame.clear();
        }
        self.count = 1;
        self.clear_top();
    }
}

/// Collects the length ranks of `start..start + length` through a max-heap, ascending.
fn length_ranks(dictionary: &dyn Dictionary, start: usize, length: usize) -> Vec<usize> {
    let heap: BinaryHeap<usize> = (start..start + length)
        .map(|index| dictionary.as_longest(index))
        .collect();
    heap.into_sorted_vec()
}
