// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Completable and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Decoded key presses the window engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    ShiftLeft,
    ShiftRight,
    PageUp,
    PageDown,
    Home,
    End,
    Return,
    Delete,
    Tab,
    Backspace,
    F(u8),
    Char(char),
}

/// Toggles the overlay (help) layer.
pub const OVERLAY_TOGGLE: char = ',';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scroll {
    LineUp,
    LineDown,
    PageUp,
    PageDown,
    Home,
    End,
}

/// The widget-level handler a key is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyHook {
    FocusLeft,
    FocusRight,
    Scroll(Scroll),
    Submit,
    GoBack,
    CompleteCommon,
    Erase,
    Insert(char),
}

/// Static key → hook table. Keys without a hook are ignored by widgets.
pub fn hook_for(key: Key) -> Option<KeyHook> {
    let hook = match key {
        Key::Left => KeyHook::FocusLeft,
        Key::Right => KeyHook::FocusRight,
        Key::Up => KeyHook::Scroll(Scroll::LineUp),
        Key::Down => KeyHook::Scroll(Scroll::LineDown),
        Key::PageUp => KeyHook::Scroll(Scroll::PageUp),
        Key::PageDown => KeyHook::Scroll(Scroll::PageDown),
        Key::Home => KeyHook::Scroll(Scroll::Home),
        Key::End => KeyHook::Scroll(Scroll::End),
        Key::Return => KeyHook::Submit,
        Key::Delete => KeyHook::GoBack,
        Key::Tab => KeyHook::CompleteCommon,
        Key::Backspace => KeyHook::Erase,
        Key::Char(ch) if (' '..='~').contains(&ch) => KeyHook::Insert(ch),
        Key::Char(_) | Key::ShiftLeft | Key::ShiftRight | Key::F(_) => return None,
    };
    Some(hook)
}
