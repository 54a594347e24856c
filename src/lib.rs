// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Completable and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Completable: interactive dictionary completion in the terminal.
//!
//! `dictionary` holds the word data, `model` the search state, `ui` the window composition engine
//! and `tui` the concrete views and the terminal loop.

pub mod dictionary;
pub mod logging;
pub mod model;
pub mod tui;
pub mod ui;
