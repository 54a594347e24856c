// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Completable and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::ui::WidgetId;

use super::CursorSlot;

/// A prefix the user navigated away from, with the view that was focused at the time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordStackEntry {
    pub prefix: String,
    pub widget: WidgetId,
    pub slot: CursorSlot,
    pub cursor: usize,
}

/// Navigation history for "go back".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordStack {
    entries: Vec<WordStackEntry>,
}

impl WordStack {
    pub fn push(&mut self, entry: WordStackEntry) {
        self.entries.push(entry);
    }

    pub fn pop(&mut self) -> Option<WordStackEntry> {
        self.entries.pop()
    }

    pub fn last(&self) -> Option<&WordStackEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
