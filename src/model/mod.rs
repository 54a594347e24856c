// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Completable and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Search state shared by every view.
//!
//! The completion stack holds the typed prefix refinements, the word stack remembers prefixes the
//! user navigated away from, and the filter and settings shape what the views display.

pub mod catalog;
pub mod completion_stack;
pub mod filter;
pub mod session;
pub mod settings;
pub mod word_stack;

pub use catalog::{DictionaryCatalog, DictionaryRequest};
pub use completion_stack::{CompletionStack, CursorSlot, SearchFrame, CAPACITY};
pub use filter::{FilterAttribute, FilterDirection, FilterSelection, WordFilter};
pub use session::SearchSession;
pub use settings::{Animation, Setting, Settings};
pub use word_stack::{WordStack, WordStackEntry};
