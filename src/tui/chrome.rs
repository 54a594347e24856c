// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Completable and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Geometry, title and help-text helpers shared by the views.
const GOLDEN_RATIO: f64 = 1.618;
const INPUT_HEIGHT: u16 = 3;
const ATTRIBUTES_HEIGHT: u16 = 5;

/// Rows between the input box and the attributes box.
fn body_height(screen: Rect) -> u16 {
    screen
        .height
        .saturating_sub(INPUT_HEIGHT + ATTRIBUTES_HEIGHT)
}

/// Height of an upper list box; shares its column with a lower box when `split`.
fn upper_height(screen: Rect, split: bool) -> u16 {
    let body = body_height(screen);
    if split {
        (f64::from(body) / GOLDEN_RATIO) as u16
    } else {
        body
    }
}

fn left_width(screen: Rect) -> u16 {
    screen.width / 2
}

fn input_rect(screen: Rect) -> Rect {
    Rect::new(screen.x, screen.y, screen.width, INPUT_HEIGHT.min(screen.height))
}

fn attributes_rect(screen: Rect) -> Rect {
    let y = screen.bottom().saturating_sub(ATTRIBUTES_HEIGHT);
    Rect::new(screen.x, y, screen.width, ATTRIBUTES_HEIGHT.min(screen.height))
}

fn completion_rect(screen: Rect, settings: &Settings) -> Rect {
    Rect::new(
        screen.x,
        screen.y + INPUT_HEIGHT,
        left_width(screen),
        upper_height(screen, settings.lower_left_enabled()),
    )
}

/// Length completion and ordinal summation take turns in this slot.
fn lower_left_rect(screen: Rect, settings: &Settings) -> Rect {
    let upper = completion_rect(screen, settings);
    Rect::new(
        screen.x,
        upper.bottom(),
        upper.width,
        body_height(screen).saturating_sub(upper.height),
    )
}

fn synonyms_rect(screen: Rect, settings: &Settings) -> Rect {
    let left = left_width(screen);
    Rect::new(
        screen.x + left,
        screen.y + INPUT_HEIGHT,
        screen.width - left,
        upper_height(screen, settings.is_enabled(Setting::Antonyms)),
    )
}

fn antonyms_rect(screen: Rect, settings: &Settings) -> Rect {
    let upper = synonyms_rect(screen, settings);
    Rect::new(
        upper.x,
        upper.bottom(),
        upper.width,
        body_height(screen).saturating_sub(upper.height),
    )
}

/// One cell per container, two columns apart, on the bottom row.
fn indicator_rect(screen: Rect, slots: u16) -> Rect {
    let width = slots.saturating_mul(2).min(screen.width);
    Rect::new(
        screen.right().saturating_sub(width + 2),
        screen.bottom().saturating_sub(1),
        width,
        1.min(screen.height),
    )
}

/// `width` columns of the bottom row, two in from the left; never past the middle.
fn description_rect(screen: Rect, width: u16) -> Rect {
    Rect::new(
        screen.x + 2.min(screen.width),
        screen.bottom().saturating_sub(1),
        width.min((screen.width / 2).saturating_sub(2)),
        1.min(screen.height),
    )
}

/// Everything below the location box on the dictionaries tab.
fn catalog_rect(screen: Rect) -> Rect {
    Rect::new(
        screen.x,
        screen.y + INPUT_HEIGHT.min(screen.height),
        screen.width,
        screen.height.saturating_sub(INPUT_HEIGHT),
    )
}

fn centered_rect(width_percent: u16, height_percent: u16, area: Rect) -> Rect {
    let vertical_margin = (100u16.saturating_sub(height_percent)) / 2;
    let horizontal_margin = (100u16.saturating_sub(width_percent)) / 2;

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(vertical_margin),
            Constraint::Percentage(height_percent),
            Constraint::Percentage(vertical_margin),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(horizontal_margin),
            Constraint::Percentage(width_percent),
            Constraint::Percentage(horizontal_margin),
        ])
        .split(vertical[1])[1]
}

/// A box of fixed size centered in `area`, shrunk to fit.
fn centered_box(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

fn counted_title(label: &str, count: usize) -> String {
    let mut digits = itoa::Buffer::new();
    format!("{label} ({})", digits.format(count))
}

fn help_key_style(theme: &Theme) -> Style {
    theme.label_style().add_modifier(Modifier::BOLD)
}

fn help_header_style(theme: &Theme) -> Style {
    theme.base_style().add_modifier(Modifier::BOLD)
}

fn help_kv(key: &str, desc: &str, key_width: usize, key_style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{key:>width$}", width = key_width), key_style),
        Span::raw("  "),
        Span::raw(desc.to_owned()),
    ])
}
