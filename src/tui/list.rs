// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Completable and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The five word-list views.
//!
//! They differ only in where their words come from; scrolling, accepting a word and prefix
//! editing are shared. Lists derived from the selected word are cached until the stack, the
//! selection or the filter changes.

use ratatui::{buffer::Buffer, layout::Rect};

use crate::model::{CursorSlot, SearchSession, WordStackEntry};
use crate::ui::{
    HookCx, LayoutCx, Layer, PrefixEditor, RenderCx, Scroll, Scrollable, Submittable, Widget,
    WidgetId,
};

use super::{antonyms_rect, completion_rect, counted_title, lower_left_rect, synonyms_rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ListKind {
    Completion,
    Length,
    Synonyms,
    Antonyms,
    OrdinalSummation,
}

impl ListKind {
    pub(crate) fn slot(self) -> CursorSlot {
        match self {
            Self::Completion => CursorSlot::Completion,
            Self::Length => CursorSlot::Length,
            Self::Synonyms => CursorSlot::Synonyms,
            Self::Antonyms => CursorSlot::Antonyms,
            Self::OrdinalSummation => CursorSlot::OrdinalSummation,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Completion => "Completion",
            Self::Length => "Length",
            Self::Synonyms => "Synonyms",
            Self::Antonyms => "Antonyms",
            Self::OrdinalSummation => "Ordinal Summation",
        }
    }

    /// Lists computed from the selected word, filtered by the word filter.
    fn is_derived(self) -> bool {
        matches!(
            self,
            Self::Synonyms | Self::Antonyms | Self::OrdinalSummation
        )
    }

    fn derive(self, session: &SearchSession, selection: usize) -> Vec<usize> {
        let dictionary = session.dictionary().as_ref();
        let words = match self {
            Self::Synonyms => dictionary.synonyms(selection),
            Self::Antonyms => dictionary.antonyms(selection),
            Self::OrdinalSummation => {
                dictionary.from_ordinal_summation(dictionary.ordinal_summation(selection))
            }
            Self::Completion | Self::Length => &[],
        };
        let filter = session.filter();
        words
            .iter()
            .copied()
            .filter(|&index| filter.passes(dictionary, index))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CacheKey {
    stack_rev: u64,
    selection: Option<usize>,
    filter_rev: u64,
}

impl CacheKey {
    fn of(session: &SearchSession) -> Self {
        Self {
            stack_rev: session.stack().rev(),
            selection: session.selection(),
            filter_rev: session.filter().rev(),
        }
    }
}

/// Derived word indices, valid while the key matches the session.
#[derive(Debug, Default)]
pub(crate) struct ListCache {
    key: Option<CacheKey>,
    words: Vec<usize>,
}

impl ListCache {
    fn refresh(&mut self, kind: ListKind, session: &SearchSession) -> &[usize] {
        let key = CacheKey::of(session);
        if self.key != Some(key) {
            self.words = match key.selection {
                Some(selection) => kind.derive(session, selection),
                None => Vec::new(),
            };
            self.key = Some(key);
        }
        &self.words
    }
}

pub(crate) struct ListView {
    kind: ListKind,
    input: WidgetId,
    after_submit: Option<WidgetId>,
    cache: ListCache,
}

impl ListView {
    /// `input` is redrawn whenever the prefix changes.
    pub(crate) fn new(kind: ListKind, input: WidgetId) -> Self {
        Self {
            kind,
            input,
            after_submit: None,
            cache: ListCache::default(),
        }
    }

    /// Focus moves to `widget` after a word from this list is accepted.
    pub(crate) fn activating(mut self, widget: WidgetId) -> Self {
        self.after_submit = Some(widget);
        self
    }

    fn len(&mut self, session: &SearchSession) -> usize {
        let top = session.stack().top();
        match self.kind {
            ListKind::Completion => top.length(),
            ListKind::Length => top.length_completion().len(),
            _ => self.cache.refresh(self.kind, session).len(),
        }
    }

    fn word_at(&mut self, session: &SearchSession, row: usize) -> Option<usize> {
        let top = session.stack().top();
        match self.kind {
            ListKind::Completion => (row < top.length()).then(|| top.start() + row),
            ListKind::Length => top
                .length_completion()
                .get(row)
                .map(|&rank| session.dictionary().from_longest(rank)),
            _ => self.cache.refresh(self.kind, session).get(row).copied(),
        }
    }

    /// The cursor clamped to the current list, `None` when the list is empty.
    fn cursor(&mut self, session: &SearchSession) -> Option<usize> {
        let len = self.len(session);
        if len == 0 {
            return None;
        }
        let cursor = session.stack().top().cursor(self.kind.slot());
        if cursor >= len {
            tracing::warn!(kind = ?self.kind, cursor, len, "list cursor out of range");
        }
        Some(cursor.min(len - 1))
    }

    fn prefix_changed(&self, cx: &mut HookCx<'_>) {
        cx.mark_dirty(self.input);
    }
}

impl Widget for ListView {
    fn layer(&self) -> Layer {
        Layer::Primary
    }

    fn title(&mut self, cx: &RenderCx<'_>) -> String {
        let session = cx.session();
        let count = self.len(session);
        if !self.kind.is_derived() {
            return counted_title(self.kind.label(), count);
        }

        let dictionary = session.dictionary();
        match (self.kind, session.selection()) {
            (ListKind::OrdinalSummation, Some(selection)) => {
                let mut digits = itoa::Buffer::new();
                let value = digits.format(dictionary.ordinal_summation(selection));
                let label = format!("{} {value} of {}", self.kind.label(), dictionary.at(selection));
                counted_title(&label, count)
            }
            (_, Some(selection)) => {
                let label = format!("{} of {}", self.kind.label(), dictionary.at(selection));
                counted_title(&label, count)
            }
            (_, None) => counted_title(self.kind.label(), count),
        }
    }

    fn layout(&self, cx: &LayoutCx<'_>) -> Rect {
        let (screen, settings) = (cx.screen(), cx.settings());
        match self.kind {
            ListKind::Completion => completion_rect(screen, settings),
            ListKind::Length | ListKind::OrdinalSummation => lower_left_rect(screen, settings),
            ListKind::Synonyms => synonyms_rect(screen, settings),
            ListKind::Antonyms => antonyms_rect(screen, settings),
        }
    }

    fn render(&mut self, buf: &mut Buffer, area: Rect, cx: &RenderCx<'_>) {
        let session = cx.session();
        let theme = cx.theme();
        let Some(cursor) = self.cursor(session) else {
            return;
        };

        let rows = usize::from(area.height);
        let first = cursor.saturating_sub(rows.saturating_sub(1));
        for (offset, y) in (area.top()..area.bottom()).enumerate() {
            let row = first + offset;
            let Some(index) = self.word_at(session, row) else {
                break;
            };
            let style = match (row == cursor, cx.is_active()) {
                (true, true) => theme.selection_style(),
                (true, false) => theme.passive_selection_style(),
                (false, _) => theme.base_style(),
            };
            let line = Rect::new(area.x, y, area.width, 1);
            buf.set_style(line, style);
            buf.set_stringn(
                area.x,
                y,
                session.dictionary().at(index),
                usize::from(area.width),
                style,
            );
        }
    }

    fn scrollable(&mut self) -> Option<&mut dyn Scrollable> {
        Some(self)
    }

    fn submittable(&mut self) -> Option<&mut dyn Submittable> {
        Some(self)
    }

    fn editor(&mut self) -> Option<&mut dyn PrefixEditor> {
        Some(self)
    }
}

impl Scrollable for ListView {
    fn scroll(&mut self, motion: Scroll, cx: &mut HookCx<'_>) {
        let last = self.len(cx.session()).saturating_sub(1);
        let page = cx.page_len();
        let slot = self.kind.slot();
        let frame = cx.session_mut().stack_mut().top_mut();
        let cursor = frame.cursor(slot).min(last);
        let next = match motion {
            Scroll::LineUp => cursor.saturating_sub(1),
            Scroll::LineDown => (cursor + 1).min(last),
            Scroll::PageUp => cursor.saturating_sub(page),
            Scroll::PageDown => cursor.saturating_add(page).min(last),
            Scroll::Home => 0,
            Scroll::End => last,
        };
        if next == frame.cursor(slot) {
            return;
        }

        *frame.cursor_mut(slot) = next;
        if self.kind == ListKind::Completion {
            // A new selection invalidates the positions in lists derived from it.
            for derived in [
                CursorSlot::Synonyms,
                CursorSlot::Antonyms,
                CursorSlot::OrdinalSummation,
            ] {
                *frame.cursor_mut(derived) = 0;
            }
        }
        cx.mark_self_dirty();
    }
}

impl Submittable for ListView {
    fn submit(&mut self, cx: &mut HookCx<'_>) {
        let Some(cursor) = self.cursor(cx.session()) else {
            return;
        };
        let Some(index) = self.word_at(cx.session(), cursor) else {
            return;
        };

        let session = cx.session();
        let word = session.dictionary().at(index).to_owned();
        let came_from = WordStackEntry {
            prefix: session.prefix().to_owned(),
            widget: cx.id(),
            slot: self.kind.slot(),
            cursor,
        };
        tracing::debug!(word = %word, from = ?self.kind, "word accepted");
        cx.session_mut().accept_word(&word, came_from);
        self.prefix_changed(cx);
        if let Some(next) = self.after_submit {
            cx.activate(next);
        }
    }
}

impl PrefixEditor for ListView {
    fn insert(&mut self, ch: char, cx: &mut HookCx<'_>) {
        if cx.session_mut().extend_prefix(ch) {
            self.prefix_changed(cx);
        }
    }

    fn erase(&mut self, cx: &mut HookCx<'_>) {
        if cx.session_mut().erase() {
            self.prefix_changed(cx);
        }
    }

    fn complete_common(&mut self, cx: &mut HookCx<'_>) {
        if cx.session_mut().complete_common_prefix() {
            self.prefix_changed(cx);
        }
    }

    fn go_back(&mut self, cx: &mut HookCx<'_>) {
        if let Some(entry) = cx.session_mut().go_back() {
            self.prefix_changed(cx);
            cx.activate(entry.widget);
        }
    }
}
