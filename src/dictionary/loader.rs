// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Completable and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Dictionary files.
//!
//! Two formats are accepted:
//! - `*.json`: `{ "entries": [ { "word": "...", "synonyms": [...], "antonyms": [...],
//!   "parts_of_speech": [...], "attributes": ["name", "place", ...] } ] }`
//! - anything else: a plain word list, one entry per line. Blank lines and lines starting with
//!   `#` are skipped.

use std::{
    error::Error,
    fmt, fs, io,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use super::{Attributes, WordEntry, WordList};

#[derive(Debug)]
pub enum DictionaryError {
    Io {
        path: PathBuf,
        source: io::Error,
    },
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    Empty {
        path: PathBuf,
    },
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "io error at {path:?}: {source}"),
            Self::Json { path, source } => write!(f, "invalid dictionary json at {path:?}: {source}"),
            Self::Empty { path } => write!(f, "dictionary {path:?} contains no entries"),
        }
    }
}

impl Error for DictionaryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::Empty { .. } => None,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DictionaryFile {
    entries: Vec<EntryRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct EntryRecord {
    word: String,
    #[serde(default)]
    synonyms: Vec<String>,
    #[serde(default)]
    antonyms: Vec<String>,
    #[serde(default)]
    parts_of_speech: Vec<String>,
    #[serde(default)]
    attributes: Vec<String>,
}

impl EntryRecord {
    fn into_entry(self) -> WordEntry {
        let mut attributes = Attributes::empty();
        for label in &self.attributes {
            match Attributes::from_label(label) {
                Some(flag) => attributes |= flag,
                None => tracing::warn!(word = %self.word, label = %label, "unknown attribute"),
            }
        }

        WordEntry::new(self.word)
            .with_synonyms(self.synonyms)
            .with_antonyms(self.antonyms)
            .with_parts_of_speech(self.parts_of_speech)
            .with_attributes(attributes)
    }
}

pub fn load_dictionary(path: impl AsRef<Path>) -> Result<WordList, DictionaryError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| DictionaryError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let words = if is_json {
        let file: DictionaryFile =
            serde_json::from_slice(&bytes).map_err(|source| DictionaryError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        WordList::from_entries(file.entries.into_iter().map(EntryRecord::into_entry))
    } else {
        WordList::from_words(parse_word_lines(&bytes))
    };

    if words.is_empty() {
        return Err(DictionaryError::Empty {
            path: path.to_path_buf(),
        });
    }

    tracing::info!(path = %path.display(), entries = words.words().len(), "dictionary loaded");
    Ok(words)
}

/// File extensions picked up by [`find_dictionaries`].
pub const DICTIONARY_EXTENSIONS: [&str; 2] = ["json", "txt"];

/// Collects the dictionary files under `root`, sorted by path.
///
/// `root` may also name a single file. Hidden entries are skipped and unreadable subdirectories
/// are left out rather than failing the whole search.
pub fn find_dictionaries(root: impl AsRef<Path>) -> Result<Vec<PathBuf>, DictionaryError> {
    let root = root.as_ref();
    let metadata = fs::metadata(root).map_err(|source| DictionaryError::Io {
        path: root.to_path_buf(),
        source,
    })?;
    if !metadata.is_dir() {
        return Ok(vec![root.to_path_buf()]);
    }

    let entries = fs::read_dir(root).map_err(|source| DictionaryError::Io {
        path: root.to_path_buf(),
        source,
    })?;
    let mut found = Vec::new();
    collect_dictionaries(entries, &mut found);
    found.sort();
    tracing::info!(root = %root.display(), found = found.len(), "dictionary search finished");
    Ok(found)
}

fn collect_dictionaries(entries: fs::ReadDir, found: &mut Vec<PathBuf>) {
    for entry in entries.flatten() {
        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }
        let path = entry.path();
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        if file_type.is_dir() {
            match fs::read_dir(&path) {
                Ok(children) => collect_dictionaries(children, found),
                Err(err) => tracing::debug!(path = %path.display(), %err, "skipping directory"),
            }
        } else if is_dictionary_file(&path) {
            found.push(path);
        }
    }
}

fn is_dictionary_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            DICTIONARY_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

fn parse_word_lines(bytes: &[u8]) -> Vec<String> {
    let mut words = Vec::new();
    let mut line_start = 0;
    let ends = memchr::memchr_iter(b'\n', bytes).chain(std::iter::once(bytes.len()));
    for line_end in ends {
        let line = String::from_utf8_lossy(&bytes[line_start..line_end]);
        line_start = line_end + 1;

        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        words.push(line.to_owned());
    }
    words
}
