// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Completable and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Views of the dictionaries tab: a search location and the dictionary files found under it.

use ratatui::{buffer::Buffer, layout::Rect, style::Modifier};

use crate::model::DictionaryRequest;
use crate::ui::{
    Effect, HookCx, LayoutCx, Layer, PrefixEditor, RenderCx, Scroll, Scrollable, Submittable,
    Widget, WidgetId,
};

use super::{catalog_rect, counted_title, input_rect};

/// Edits the search location and drives the selection in the catalog view.
pub(crate) struct LocationView {
    catalog: WidgetId,
}

impl LocationView {
    /// `catalog` is redrawn whenever the selection moves.
    pub(crate) fn new(catalog: WidgetId) -> Self {
        Self { catalog }
    }
}

impl Widget for LocationView {
    fn layer(&self) -> Layer {
        Layer::Primary
    }

    fn title(&mut self, _cx: &RenderCx<'_>) -> String {
        "Search location (Tab to search)".to_owned()
    }

    fn layout(&self, cx: &LayoutCx<'_>) -> Rect {
        input_rect(cx.screen())
    }

    fn render(&mut self, buf: &mut Buffer, area: Rect, cx: &RenderCx<'_>) {
        let style = cx.theme().base_style();
        let location = cx.session().catalog().location();
        let (x, _) = buf.set_stringn(area.x, area.y, location, usize::from(area.width), style);
        if x < area.right() {
            buf.set_stringn(x, area.y, "_", 1, style.add_modifier(Modifier::SLOW_BLINK));
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

impl PrefixEditor for LocationView {
    fn insert(&mut self, ch: char, cx: &mut HookCx<'_>) {
        cx.session_mut().catalog_mut().push_char(ch);
        cx.mark_self_dirty();
    }

    fn erase(&mut self, cx: &mut HookCx<'_>) {
        if cx.session_mut().catalog_mut().pop_char() {
            cx.mark_self_dirty();
        }
    }

    fn complete_common(&mut self, cx: &mut HookCx<'_>) {
        cx.emit(Effect::Dictionary(DictionaryRequest::Scan));
    }

    fn go_back(&mut self, _cx: &mut HookCx<'_>) {}
}

impl Scrollable for LocationView {
    fn scroll(&mut self, motion: Scroll, cx: &mut HookCx<'_>) {
        let catalog = cx.session_mut().catalog_mut();
        match motion {
            Scroll::LineUp | Scroll::PageUp => catalog.move_selection(-1),
            Scroll::LineDown | Scroll::PageDown => catalog.move_selection(1),
            Scroll::Home => catalog.select_first(),
            Scroll::End => catalog.select_last(),
        }
        cx.mark_dirty(self.catalog);
    }
}

impl Submittable for LocationView {
    fn submit(&mut self, cx: &mut HookCx<'_>) {
        if cx.session().catalog().selected().is_some() {
            cx.emit(Effect::Dictionary(DictionaryRequest::Load));
        }
    }
}

/// Dictionary files found by the last search, the selected one reversed.
#[derive(Default)]
pub(crate) struct CatalogView;

impl Widget for CatalogView {
    fn layer(&self) -> Layer {
        Layer::Primary
    }

    fn title(&mut self, cx: &RenderCx<'_>) -> String {
        counted_title("Dictionaries", cx.session().catalog().found().len())
    }

    fn layout(&self, cx: &LayoutCx<'_>) -> Rect {
        catalog_rect(cx.screen())
    }

    fn render(&mut self, buf: &mut Buffer, area: Rect, cx: &RenderCx<'_>) {
        let catalog = cx.session().catalog();
        let theme = cx.theme();
        let mut rows = area.top()..area.bottom();

        if let Some(status) = catalog.status() {
            let Some(y) = rows.next() else {
                return;
            };
            buf.set_stringn(area.x, y, status, usize::from(area.width), theme.label_style());
        }

        let Some(selected) = catalog.selected_index() else {
            return;
        };
        let visible = rows.len();
        let first = selected.saturating_sub(visible.saturating_sub(1));
        for ((row, path), y) in catalog.found().iter().enumerate().skip(first).zip(rows) {
            let style = if row == selected {
                theme.base_style().add_modifier(Modifier::REVERSED)
            } else {
                theme.base_style()
            };
            buf.set_style(Rect::new(area.x, y, area.width, 1), style);
            buf.set_stringn(
                area.x,
                y,
                path.display().to_string(),
                usize::from(area.width),
                style,
            );
        }
    }
}
