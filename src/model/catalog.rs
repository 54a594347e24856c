// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Completable and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::path::{Path, PathBuf};

/// Slow work the dictionaries tab asks for. The owner of the terminal runs it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DictionaryRequest {
    /// Search the typed location for dictionary files.
    Scan,
    /// Load the selected dictionary file.
    Load,
}

/// Search location, the dictionary files found under it and the selected one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DictionaryCatalog {
    location: String,
    found: Vec<PathBuf>,
    selected: usize,
    status: Option<String>,
}

impl DictionaryCatalog {
    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn push_char(&mut self, ch: char) {
        self.location.push(ch);
    }

    /// Returns `true` when a character was removed.
    pub fn pop_char(&mut self) -> bool {
        self.location.pop().is_some()
    }

    /// Where a scan starts; an empty location means the working directory.
    pub fn search_root(&self) -> PathBuf {
        if self.location.is_empty() {
            PathBuf::from(".")
        } else {
            PathBuf::from(&self.location)
        }
    }

    pub fn found(&self) -> &[PathBuf] {
        &self.found
    }

    /// Replaces the scan result and selects its first entry.
    pub fn set_found(&mut self, found: Vec<PathBuf>) {
        self.found = found;
        self.selected = 0;
    }

    pub fn selected_index(&self) -> Option<usize> {
        (!self.found.is_empty()).then_some(self.selected)
    }

    pub fn selected(&self) -> Option<&Path> {
        self.found.get(self.selected).map(PathBuf::as_path)
    }

    /// Moves the selection by `delta` rows, clamped to the found entries.
    pub fn move_selection(&mut self, delta: isize) {
        let last = self.found.len().saturating_sub(1);
        self.selected = self.selected.saturating_add_signed(delta).min(last);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.found.len().saturating_sub(1);
    }

    /// Outcome of the last scan or load, shown above the entries.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn set_status(&mut self, status: Option<String>) {
        self.status = status;
    }
}
