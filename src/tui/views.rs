// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Completable and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Views other than the word lists.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget as _, Wrap},
};

use crate::model::{FilterAttribute, Setting};
use crate::ui::{
    Effect, HookCx, LayoutCx, Layer, RenderCx, Scroll, Scrollable, Submittable, Theme, Widget,
    WidgetId,
};

use super::{
    attributes_rect, centered_box, centered_rect, description_rect, help_header_style,
    help_key_style, help_kv, indicator_rect, input_rect,
};

/// Shows the typed prefix.
pub(crate) struct InputView;

impl Widget for InputView {
    fn layer(&self) -> Layer {
        Layer::Primary
    }

    fn title(&mut self, _cx: &RenderCx<'_>) -> String {
        "enter , for help".to_owned()
    }

    fn layout(&self, cx: &LayoutCx<'_>) -> Rect {
        input_rect(cx.screen())
    }

    fn render(&mut self, buf: &mut Buffer, area: Rect, cx: &RenderCx<'_>) {
        let session = cx.session();
        let prefix = session.prefix();
        let style = cx.theme().base_style();
        let (x, _) = buf.set_stringn(area.x, area.y, prefix, usize::from(area.width), style);
        if x < area.right() {
            buf.set_stringn(x, area.y, "_", 1, style.add_modifier(Modifier::SLOW_BLINK));
        }
    }
}

/// Labels and parts of speech of the selected word.
pub(crate) struct AttributesView;

impl Widget for AttributesView {
    fn layer(&self) -> Layer {
        Layer::Primary
    }

    fn title(&mut self, cx: &RenderCx<'_>) -> String {
        let session = cx.session();
        match session.selection() {
            Some(selection) => format!("Attributes of {}", session.dictionary().at(selection)),
            None => "Attributes".to_owned(),
        }
    }

    fn layout(&self, cx: &LayoutCx<'_>) -> Rect {
        attributes_rect(cx.screen())
    }

    fn render(&mut self, buf: &mut Buffer, area: Rect, cx: &RenderCx<'_>) {
        let session = cx.session();
        let theme = cx.theme();
        let Some(selection) = session.selection() else {
            return;
        };
        let dictionary = session.dictionary();

        let labels: Vec<&str> = dictionary.attributes(selection).labels().collect();
        let labels = if labels.is_empty() {
            "none".to_owned()
        } else {
            labels.join(", ")
        };
        let parts: Vec<&str> = dictionary
            .parts_of_speech(selection)
            .iter()
            .map(|part| part.as_str())
            .collect();

        let rows = [("labels", labels), ("parts of speech", parts.join(", "))];
        for ((label, value), y) in rows.iter().zip(area.top()..area.bottom()) {
            let line = Line::from(vec![
                Span::styled(format!("{label}: "), theme.label_style()),
                Span::styled(value.clone(), theme.base_style()),
            ]);
            buf.set_line(area.x, y, &line, area.width);
        }
    }
}

const FILTER_ROWS: usize = 1 + FilterAttribute::ALL.len();

/// Word filter editor on the auxiliary layer.
pub(crate) struct FilterView {
    hover: usize,
    input: WidgetId,
}

impl FilterView {
    /// `input` is marked dirty so every filtered list is redrawn.
    pub(crate) fn new(input: WidgetId) -> Self {
        Self { hover: 0, input }
    }
}

impl Widget for FilterView {
    fn layer(&self) -> Layer {
        Layer::Auxiliary
    }

    fn title(&mut self, _cx: &RenderCx<'_>) -> String {
        "Filter".to_owned()
    }

    fn layout(&self, cx: &LayoutCx<'_>) -> Rect {
        centered_box(40, FILTER_ROWS as u16 + 2, cx.screen())
    }

    fn render(&mut self, buf: &mut Buffer, area: Rect, cx: &RenderCx<'_>) {
        let filter = cx.session().filter();
        let theme = cx.theme();
        let rows = std::iter::once(format!("direction: {}", filter.direction().label())).chain(
            FilterAttribute::ALL.iter().map(|attribute| {
                let mark = if filter.is_selected(*attribute) { 'x' } else { ' ' };
                format!("[{mark}] {}", attribute.label())
            }),
        );

        for ((row, text), y) in rows.enumerate().zip(area.top()..area.bottom()) {
            let style = if row == self.hover {
                theme.selection_style()
            } else {
                theme.base_style()
            };
            buf.set_style(Rect::new(area.x, y, area.width, 1), style);
            buf.set_stringn(area.x, y, &text, usize::from(area.width), style);
        }
    }

    fn scrollable(&mut self) -> Option<&mut dyn Scrollable> {
        Some(self)
    }

    fn submittable(&mut self) -> Option<&mut dyn Submittable> {
        Some(self)
    }
}

impl Scrollable for FilterView {
    fn scroll(&mut self, motion: Scroll, cx: &mut HookCx<'_>) {
        self.hover = step_hover(self.hover, FILTER_ROWS, motion);
        cx.mark_self_dirty();
    }
}

impl Submittable for FilterView {
    fn submit(&mut self, cx: &mut HookCx<'_>) {
        let filter = cx.session_mut().filter_mut();
        match self.hover.checked_sub(1).and_then(|row| FilterAttribute::ALL.get(row)) {
            Some(attribute) => filter.toggle(*attribute),
            None => filter.toggle_direction(),
        }
        cx.mark_self_dirty();
        cx.mark_dirty(self.input);
    }
}

/// Key reference on the overlay layer.
pub(crate) struct HelpView {
    entries: &'static [(&'static str, &'static str)],
}

pub(crate) const COMPLETION_HELP: &[(&str, &str)] = &[
    ("a-z ...", "extend the prefix"),
    ("Backspace", "remove the last character"),
    ("Tab", "complete the common prefix"),
    ("Up/Down", "move the cursor"),
    ("PgUp/PgDn", "move by a page"),
    ("Home/End", "first or last word"),
    ("Left/Right", "focus the neighboring list"),
    ("Return", "search for the highlighted word"),
    ("Delete", "go back to the previous search"),
    ("F1-F12", "word filter"),
    ("Shift-Left/Right", "switch tabs"),
    (",", "toggle this help"),
    ("Esc/Ctrl-C", "quit"),
];

pub(crate) const SETTINGS_HELP: &[(&str, &str)] = &[
    ("Up/Down", "move the cursor"),
    ("Return", "enable or disable the setting, or pick the next animation"),
    ("Shift-Left/Right", "switch tabs"),
    (",", "toggle this help"),
    ("Esc/Ctrl-C", "quit"),
];

pub(crate) const DICTIONARIES_HELP: &[(&str, &str)] = &[
    ("a-z ...", "edit the search location"),
    ("Backspace", "remove the last character"),
    ("Tab", "search the location for dictionaries"),
    ("Up/Down", "move the selection"),
    ("Return", "load the selected dictionary"),
    ("Shift-Left/Right", "switch tabs"),
    (",", "toggle this help"),
    ("Esc/Ctrl-C", "quit"),
];

impl HelpView {
    pub(crate) fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    fn lines(&self, theme: &Theme) -> Vec<Line<'static>> {
        let key_width = self.entries.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
        let key_style = help_key_style(theme);
        let mut lines = vec![
            Line::styled("--- Keys ---", help_header_style(theme)),
            Line::default(),
        ];
        lines.extend(
            self.entries
                .iter()
                .map(|(key, desc)| help_kv(key, desc, key_width, key_style)),
        );
        lines
    }
}

impl Widget for HelpView {
    fn layer(&self) -> Layer {
        Layer::Overlay
    }

    fn title(&mut self, _cx: &RenderCx<'_>) -> String {
        "Help".to_owned()
    }

    fn layout(&self, cx: &LayoutCx<'_>) -> Rect {
        centered_rect(70, 70, cx.screen())
    }

    fn render(&mut self, buf: &mut Buffer, area: Rect, cx: &RenderCx<'_>) {
        Paragraph::new(self.lines(cx.theme()))
            .style(cx.theme().base_style())
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

/// Abbreviations of every container, the active one highlighted.
pub(crate) struct IndicatorView {
    slots: u16,
}

impl IndicatorView {
    pub(crate) fn new(slots: u16) -> Self {
        Self { slots }
    }
}

impl Widget for IndicatorView {
    fn layer(&self) -> Layer {
        Layer::Primary
    }

    fn title(&mut self, _cx: &RenderCx<'_>) -> String {
        String::new()
    }

    fn layout(&self, cx: &LayoutCx<'_>) -> Rect {
        indicator_rect(cx.screen(), self.slots)
    }

    fn render(&mut self, buf: &mut Buffer, area: Rect, cx: &RenderCx<'_>) {
        let theme = cx.theme();
        let active = cx.active_container_id();
        for (id, container) in cx.containers() {
            let offset = (container.indicator_position() + 1).saturating_mul(2);
            let Some(x) = area.right().checked_sub(offset) else {
                continue;
            };
            if x < area.left() {
                continue;
            }
            let style = if Some(id) == active {
                theme.base_style().add_modifier(Modifier::REVERSED)
            } else {
                theme.base_style()
            };
            buf.set_stringn(x, area.y, container.abbreviation(), 1, style);
        }
    }

    fn borders_enabled(&self) -> bool {
        false
    }
}

/// Name of the container it belongs to, sized to the name.
pub(crate) struct DescriptionView {
    text: String,
}

impl DescriptionView {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            text: format!(" {name} "),
        }
    }
}

impl Widget for DescriptionView {
    fn layer(&self) -> Layer {
        Layer::Primary
    }

    fn title(&mut self, _cx: &RenderCx<'_>) -> String {
        String::new()
    }

    fn layout(&self, cx: &LayoutCx<'_>) -> Rect {
        description_rect(cx.screen(), self.text.chars().count() as u16)
    }

    fn render(&mut self, buf: &mut Buffer, area: Rect, cx: &RenderCx<'_>) {
        buf.set_stringn(
            area.x,
            area.y,
            &self.text,
            usize::from(area.width),
            cx.theme().title_style(true),
        );
    }

    fn borders_enabled(&self) -> bool {
        false
    }
}

const BUSY_ANIMATION_LABEL: &str = "Busy Animation";
/// One row per switch plus the busy animation row.
const SETTINGS_ROWS: usize = Setting::ALL.len() + 1;

/// Runtime settings, one row each.
#[derive(Default)]
pub(crate) struct SettingsView {
    hover: usize,
}

impl Widget for SettingsView {
    fn layer(&self) -> Layer {
        Layer::Primary
    }

    fn title(&mut self, _cx: &RenderCx<'_>) -> String {
        "Settings".to_owned()
    }

    fn layout(&self, cx: &LayoutCx<'_>) -> Rect {
        cx.screen()
    }

    fn render(&mut self, buf: &mut Buffer, area: Rect, cx: &RenderCx<'_>) {
        let settings = cx.session().settings();
        let theme = cx.theme();
        let label_width = Setting::ALL
            .iter()
            .map(|setting| setting.label())
            .chain(std::iter::once(BUSY_ANIMATION_LABEL))
            .map(str::len)
            .max()
            .unwrap_or(0);

        let switches = Setting::ALL.iter().map(|setting| {
            let state = if settings.is_enabled(*setting) {
                "Enabled"
            } else {
                "Disabled"
            };
            (setting.label(), state)
        });
        let rows = switches.chain(std::iter::once((
            BUSY_ANIMATION_LABEL,
            settings.busy_animation().label(),
        )));

        for ((row, (label, value)), y) in rows.enumerate().zip(area.top()..area.bottom()) {
            let text = format!("{label:<label_width$}  {value}");
            let style = match (row == self.hover, cx.is_active()) {
                (true, true) => theme.selection_style(),
                (true, false) => theme.passive_selection_style(),
                (false, _) => theme.base_style(),
            };
            buf.set_style(Rect::new(area.x, y, area.width, 1), style);
            buf.set_stringn(area.x, y, text, usize::from(area.width), style);
        }
    }

    fn scrollable(&mut self) -> Option<&mut dyn Scrollable> {
        Some(self)
    }

    fn submittable(&mut self) -> Option<&mut dyn Submittable> {
        Some(self)
    }
}

impl Scrollable for SettingsView {
    fn scroll(&mut self, motion: Scroll, cx: &mut HookCx<'_>) {
        self.hover = step_hover(self.hover, SETTINGS_ROWS, motion);
        cx.mark_self_dirty();
    }
}

impl Submittable for SettingsView {
    fn submit(&mut self, cx: &mut HookCx<'_>) {
        let Some(setting) = Setting::ALL.get(self.hover).copied() else {
            let animation = cx.session_mut().settings_mut().cycle_busy_animation();
            tracing::debug!(?animation, "busy animation changed");
            cx.mark_self_dirty();
            return;
        };
        let changed = cx.session_mut().settings_mut().toggle(setting);
        for setting in changed {
            tracing::debug!(?setting, "setting changed");
            cx.emit(Effect::SettingChanged(setting));
        }
        cx.mark_self_dirty();
    }
}

/// Hover movement over a fixed number of rows, clamped at both ends.
fn step_hover(hover: usize, rows: usize, motion: Scroll) -> usize {
    let last = rows.saturating_sub(1);
    match motion {
        Scroll::LineUp | Scroll::PageUp => hover.saturating_sub(1),
        Scroll::LineDown | Scroll::PageDown => (hover + 1).min(last),
        Scroll::Home => 0,
        Scroll::End => last,
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::step_hover;
    use crate::ui::Scroll;

    #[rstest]
    #[case(0, Scroll::LineUp, 0)]
    #[case(0, Scroll::LineDown, 1)]
    #[case(4, Scroll::LineDown, 4)]
    #[case(3, Scroll::Home, 0)]
    #[case(1, Scroll::End, 4)]
    fn hover_is_clamped(#[case] hover: usize, #[case] motion: Scroll, #[case] expected: usize) {
        assert_eq!(step_hover(hover, 5, motion), expected);
    }
}
