// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Completable and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Window composition engine.
//!
//! [`UiState`] owns every widget and container and is the single writer of focus and visibility:
//! which container is active, which widget is active per layer, which reasons hide a widget and
//! which widgets need a redraw. Input and render passes receive it explicitly.
//!
//! Each enabled widget keeps an off-screen surface. `draw` refreshes the surfaces of dirty widgets
//! and `present` composes the active container's surfaces onto the frame, back layer first.

use ratatui::{
    buffer::Buffer,
    layout::{Margin, Rect},
    style::Style,
    widgets::{Block, Widget as _},
};
use smallvec::SmallVec;

use crate::model::{SearchSession, Settings};

mod container;
mod keys;
mod theme;
mod visibility;
mod widget;

pub use container::{Container, ContainerId, ContainerKind, Frontmost, Layer};
pub use keys::{hook_for, Key, KeyHook, Scroll, OVERLAY_TOGGLE};
pub use theme::{Theme, ThemeError, PALETTE_ENV};
pub use visibility::{Aspect, VisibilityFlags};
pub use widget::{
    title_indent, Effect, HookCx, LayoutCx, Neighbors, PrefixEditor, RenderCx, Scrollable,
    Submittable, Widget, WidgetId, WidgetState,
};

/// Below this many rows every widget only clears its surface.
pub const MIN_ROWS: u16 = 30;
/// Below this many columns every widget only clears its surface.
pub const MIN_COLS: u16 = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

pub struct UiState {
    states: Vec<WidgetState>,
    widgets: Vec<Box<dyn Widget>>,
    containers: Vec<Container>,
    active_container: Option<ContainerId>,
    screen: Rect,
    theme: Theme,
    pending: Vec<Effect>,
}

impl Default for UiState {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

impl UiState {
    pub fn new(theme: Theme) -> Self {
        Self {
            states: Vec::new(),
            widgets: Vec::new(),
            containers: Vec::new(),
            active_container: None,
            screen: Rect::new(0, 0, MIN_COLS, MIN_ROWS),
            theme,
            pending: Vec::new(),
        }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn screen(&self) -> Rect {
        self.screen
    }

    /// Records the terminal size. Returns `true` when it changed.
    pub fn set_screen(&mut self, screen: Rect) -> bool {
        if self.screen == screen {
            return false;
        }
        self.screen = screen;
        true
    }

    pub fn is_degraded(&self) -> bool {
        self.screen.height < MIN_ROWS || self.screen.width < MIN_COLS
    }

    // Assembly.

    pub fn insert_widget(&mut self, widget: Box<dyn Widget>) -> WidgetId {
        let id = WidgetId::from_raw(self.states.len());
        self.states.push(WidgetState::new(widget.layer()));
        self.widgets.push(widget);
        id
    }

    pub fn insert_container(&mut self, container: Container) -> ContainerId {
        let id = ContainerId::from_idx(self.containers.len());
        self.containers.push(container);
        id
    }

    pub fn container(&self, id: ContainerId) -> &Container {
        &self.containers[id.idx()]
    }

    pub fn container_mut(&mut self, id: ContainerId) -> &mut Container {
        &mut self.containers[id.idx()]
    }

    pub fn widget_state(&self, id: WidgetId) -> &WidgetState {
        &self.states[id.idx()]
    }

    /// Adds `widget` to the container under the widget's layer. The first widget of a layer
    /// becomes that layer's active widget.
    pub fn add_widget(
        &mut self,
        container: ContainerId,
        widget: WidgetId,
        session: &mut SearchSession,
    ) {
        let layer = self.states[widget.idx()].layer;
        self.containers[container.idx()].push_member(layer, widget);
        let owners = &mut self.states[widget.idx()].containers;
        if !owners.contains(&container) {
            owners.push(container);
        }

        if !self.containers[container.idx()].frontmost().shows(layer) {
            self.disable(widget, Aspect::Layer, session);
        }
        if self.belongs_to_active_container(widget) {
            self.enable(widget, Aspect::Container, session.settings());
        } else {
            self.disable(widget, Aspect::Container, session);
        }
    }

    /// Marking `widget` dirty also marks `dependent` dirty.
    pub fn add_dirty_dependency(&mut self, widget: WidgetId, dependent: WidgetId) {
        let dependents = &mut self.states[widget.idx()].dependents;
        if !dependents.contains(&dependent) {
            dependents.push(dependent);
        }
    }

    /// Returns `false` (and links nothing) when the two widgets live in different layers.
    pub fn set_left_neighbor(
        &mut self,
        container: ContainerId,
        widget: WidgetId,
        neighbor: WidgetId,
    ) -> bool {
        if self.states[widget.idx()].layer != self.states[neighbor.idx()].layer {
            return false;
        }
        self.states[widget.idx()].neighbors_in_mut(container).left = Some(neighbor);
        true
    }

    /// Returns `false` (and links nothing) when the two widgets live in different layers.
    pub fn set_right_neighbor(
        &mut self,
        container: ContainerId,
        widget: WidgetId,
        neighbor: WidgetId,
    ) -> bool {
        if self.states[widget.idx()].layer != self.states[neighbor.idx()].layer {
            return false;
        }
        self.states[widget.idx()].neighbors_in_mut(container).right = Some(neighbor);
        true
    }

    /// Wires `ring` so that right moves forward and left moves backward, wrapping around.
    pub fn link_ring(&mut self, container: ContainerId, ring: &[WidgetId]) {
        for (idx, &widget) in ring.iter().enumerate() {
            let next = ring[(idx + 1) % ring.len()];
            if self.set_right_neighbor(container, widget, next) {
                self.set_left_neighbor(container, next, widget);
            }
        }
    }

    /// Makes `left` and `right` sibling containers of each other.
    pub fn link_containers(&mut self, left: ContainerId, right: ContainerId) {
        self.containers[left.idx()].set_right_neighbor(Some(right));
        self.containers[right.idx()].set_left_neighbor(Some(left));
    }

    // Widgets.

    pub fn belongs_to_active_container(&self, widget: WidgetId) -> bool {
        self.active_container
            .is_some_and(|active| self.states[widget.idx()].containers.contains(&active))
    }

    pub fn is_active(&self, widget: WidgetId) -> bool {
        let Some(active) = self.active_container else {
            return false;
        };
        let container = &self.containers[active.idx()];
        container.contains(self.states[widget.idx()].layer, widget)
            && container.active_widget() == Some(widget)
    }

    /// Marks `widget` and, transitively, its dirty-dependents. Each widget is visited once.
    pub fn mark_dirty(&mut self, widget: WidgetId) {
        let mut visited = vec![false; self.states.len()];
        let mut pending: SmallVec<[WidgetId; 8]> = SmallVec::new();
        pending.push(widget);
        while let Some(next) = pending.pop() {
            if std::mem::replace(&mut visited[next.idx()], true) {
                continue;
            }
            let state = &mut self.states[next.idx()];
            state.dirty = true;
            pending.extend(state.dependents.iter().copied());
        }
    }

    /// Only the border and title need a redraw.
    pub fn mark_title_dirty(&mut self, widget: WidgetId) {
        self.states[widget.idx()].title_dirty = true;
    }

    pub fn mark_all_dirty(&mut self) {
        for state in &mut self.states {
            state.dirty = true;
        }
    }

    /// Clears `aspect`; a widget that becomes enabled is resized.
    pub fn enable(&mut self, widget: WidgetId, aspect: Aspect, settings: &Settings) {
        let visibility = &mut self.states[widget.idx()].visibility;
        let was_enabled = visibility.is_enabled();
        visibility.unset(aspect);
        if !was_enabled && visibility.is_enabled() {
            self.resize_widget(widget, settings);
        }
    }

    /// Sets `aspect`; a widget that was enabled runs its pre-disable hook and drops its surface.
    pub fn disable(&mut self, widget: WidgetId, aspect: Aspect, session: &mut SearchSession) {
        let state = &mut self.states[widget.idx()];
        if state.visibility.is_enabled() {
            let mut effects = Vec::new();
            let mut cx = HookCx {
                id: widget,
                rect: state.rect,
                session: &mut *session,
                effects: &mut effects,
            };
            self.widgets[widget.idx()].pre_disable(&mut cx);
            state.surface = None;
            self.apply_effects(effects);
        }
        self.states[widget.idx()].visibility.set(aspect);
        self.mark_dirty(widget);
    }

    /// Recomputes geometry and reallocates the surface. No-op while disabled.
    pub fn resize_widget(&mut self, widget: WidgetId, settings: &Settings) {
        let screen = self.screen;
        let state = &mut self.states[widget.idx()];
        if !state.is_enabled() {
            return;
        }
        state.surface = None;

        let behavior = &mut self.widgets[widget.idx()];
        let rect = behavior.layout(&LayoutCx { screen, settings }).intersection(screen);
        behavior.post_resize(rect);
        state.rect = rect;
        state.surface = Some(Buffer::empty(rect));
        self.mark_dirty(widget);
    }

    /// Refreshes the widget's surface if it is dirty (or `force_clear` is set).
    pub fn draw_widget(&mut self, widget: WidgetId, session: &SearchSession, force_clear: bool) {
        let degraded = self.is_degraded();
        let active = self.is_active(widget);
        let Self {
            states,
            widgets,
            containers,
            active_container,
            theme,
            ..
        } = self;

        let state = &mut states[widget.idx()];
        if !state.is_enabled() {
            return;
        }
        let Some(surface) = state.surface.as_mut() else {
            return;
        };
        if degraded {
            surface.reset();
            return;
        }
        if force_clear {
            surface.reset();
            state.dirty = true;
        }
        if state.dirty {
            state.title_dirty = true;
        }
        if !state.title_dirty {
            return;
        }

        let behavior = &mut widgets[widget.idx()];
        let cx = RenderCx {
            session,
            theme: &*theme,
            active,
            containers: containers.as_slice(),
            active_container: *active_container,
        };
        let area = surface.area;
        // Framed widgets reserve the outer ring for border and title even with borders off.
        let framed = behavior.borders_enabled();
        if framed {
            let title = behavior.title(&cx);
            draw_chrome(surface, area, &title, session.settings().borders(), active, theme);
        }

        if state.dirty {
            let inner = if framed {
                area.inner(Margin::new(1, 1))
            } else {
                area
            };
            clear_area(surface, inner);
            behavior.render(surface, inner, &cx);
        }

        state.dirty = false;
        state.title_dirty = false;
    }

    fn widget_on_key(&mut self, widget: WidgetId, key: Key, session: &mut SearchSession) {
        if !self.states[widget.idx()].is_enabled() || !self.is_active(widget) {
            return;
        }
        let Some(hook) = hook_for(key) else {
            return;
        };

        match hook {
            KeyHook::FocusLeft => self.activate_neighbor(widget, Side::Left),
            KeyHook::FocusRight => self.activate_neighbor(widget, Side::Right),
            hook => {
                let mut effects = Vec::new();
                let mut cx = HookCx {
                    id: widget,
                    rect: self.states[widget.idx()].rect,
                    session: &mut *session,
                    effects: &mut effects,
                };
                let behavior = &mut self.widgets[widget.idx()];
                match hook {
                    KeyHook::Scroll(motion) => {
                        if let Some(scrollable) = behavior.scrollable() {
                            scrollable.scroll(motion, &mut cx);
                        }
                    }
                    KeyHook::Submit => {
                        if let Some(submittable) = behavior.submittable() {
                            submittable.submit(&mut cx);
                        }
                    }
                    KeyHook::Insert(ch) => {
                        if let Some(editor) = behavior.editor() {
                            editor.insert(ch, &mut cx);
                        }
                    }
                    KeyHook::Erase => {
                        if let Some(editor) = behavior.editor() {
                            editor.erase(&mut cx);
                        }
                    }
                    KeyHook::CompleteCommon => {
                        if let Some(editor) = behavior.editor() {
                            editor.complete_common(&mut cx);
                        }
                    }
                    KeyHook::GoBack => {
                        if let Some(editor) = behavior.editor() {
                            editor.go_back(&mut cx);
                        }
                    }
                    KeyHook::FocusLeft | KeyHook::FocusRight => {}
                }
                self.apply_effects(effects);
            }
        }
    }

    /// Walks the neighbor chain, skipping hidden widgets, until an enabled one or the start.
    fn activate_neighbor(&mut self, widget: WidgetId, side: Side) {
        let Some(container) = self.active_container else {
            return;
        };
        let neighbor_of = |states: &[WidgetState], id: WidgetId| {
            let neighbors = states[id.idx()].neighbors_in(container);
            match side {
                Side::Left => neighbors.left,
                Side::Right => neighbors.right,
            }
        };

        let mut next = neighbor_of(&self.states, widget);
        for _ in 0..self.states.len() {
            let Some(candidate) = next else {
                return;
            };
            if candidate == widget {
                return;
            }
            if self.states[candidate.idx()].is_enabled() {
                self.set_active_widget(container, candidate);
                return;
            }
            next = neighbor_of(&self.states, candidate);
        }
    }

    fn apply_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::MarkDirty(widget) => self.mark_dirty(widget),
                Effect::Activate(widget) => {
                    if let Some(container) = self.active_container {
                        if !self.set_active_widget(container, widget) {
                            let layer = self.states[widget.idx()].layer;
                            self.focus_first_shown(container, layer);
                        }
                    }
                }
                other => self.pending.push(other),
            }
        }
    }

    /// Effects the engine does not handle itself, in the order they were raised.
    pub fn take_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.pending)
    }

    // Containers.

    pub fn active_container(&self) -> Option<ContainerId> {
        self.active_container
    }

    pub fn set_active_container(&mut self, container: ContainerId, session: &mut SearchSession) {
        let previous = self.active_container;
        if previous == Some(container) {
            return;
        }

        if let Some(previous) = previous {
            let members: Vec<WidgetId> = self.containers[previous.idx()].all_members().collect();
            for widget in members {
                self.disable(widget, Aspect::Container, session);
            }

            // Help stays shown (or hidden) across container switches.
            let previous_overlay = self.containers[previous.idx()].frontmost().is_overlay();
            let next = &self.containers[container.idx()];
            if next.active_widget().is_some() && next.frontmost().is_overlay() != previous_overlay
            {
                self.toggle_layer(container, Layer::Overlay, session);
            }
        }

        self.active_container = Some(container);
        tracing::debug!(
            container = self.containers[container.idx()].name(),
            "active container changed"
        );

        let members: Vec<WidgetId> = self.containers[container.idx()].all_members().collect();
        for widget in members {
            self.enable(widget, Aspect::Container, session.settings());
        }
    }

    pub fn active_widget(&self, container: ContainerId) -> Option<WidgetId> {
        self.containers[container.idx()].active_widget()
    }

    /// Returns `false` when `widget` is not a member of the container or cannot take focus.
    pub fn set_active_widget(&mut self, container: ContainerId, widget: WidgetId) -> bool {
        let layer = self.states[widget.idx()].layer;
        if !self.containers[container.idx()].contains(layer, widget) {
            return false;
        }
        if !self.is_focusable(widget) {
            tracing::debug!(?widget, "refusing focus for a hidden widget");
            return false;
        }
        if let Some(previous) = self.containers[container.idx()].active_in(layer) {
            self.mark_dirty(previous);
        }
        self.mark_dirty(widget);
        self.containers[container.idx()].set_active_in(layer, widget);
        true
    }

    /// Hidden only because its container is in the background (or not hidden at all).
    fn is_focusable(&self, widget: WidgetId) -> bool {
        self.states[widget.idx()]
            .visibility
            .currently_set()
            .all(|aspect| aspect == Aspect::Container)
    }

    /// Focuses the first member of `layer` that can take focus.
    pub fn focus_first_shown(&mut self, container: ContainerId, layer: Layer) -> Option<WidgetId> {
        let candidate = self.containers[container.idx()]
            .members(layer)
            .iter()
            .copied()
            .find(|widget| self.is_focusable(*widget))?;
        self.set_active_widget(container, candidate);
        Some(candidate)
    }

    /// Shows or hides `layer` in the container. The primary layer cannot be toggled.
    pub fn toggle_layer(&mut self, container: ContainerId, layer: Layer, session: &mut SearchSession) {
        if layer == Layer::Primary {
            return;
        }
        let frontmost = self.containers[container.idx()].frontmost();
        let shown = frontmost.shows(layer);
        let displaced = self.containers[container.idx()].active_widget();
        self.containers[container.idx()].set_frontmost(frontmost.with(layer, !shown));
        tracing::debug!(?layer, shown = !shown, "layer toggled");

        let members: Vec<WidgetId> = self.containers[container.idx()].members(layer).to_vec();
        if shown {
            for &widget in &members {
                self.disable(widget, Aspect::Layer, session);
            }
            for other in Layer::ALL.into_iter().filter(|other| *other != layer) {
                let others: Vec<WidgetId> = self.containers[container.idx()].members(other).to_vec();
                for widget in others {
                    self.mark_dirty(widget);
                }
            }
        } else {
            for &widget in &members {
                self.enable(widget, Aspect::Layer, session.settings());
            }
            // The displaced widget loses its active markers.
            if let Some(displaced) = displaced {
                self.mark_title_dirty(displaced);
            }
        }
    }

    /// Resizes every shown widget of `container`. No-op unless it is the active container.
    pub fn resize(&mut self, container: ContainerId, settings: &Settings) {
        if self.active_container != Some(container) {
            return;
        }
        let frontmost = self.containers[container.idx()].frontmost();
        for layer in Layer::ALL.into_iter().filter(|layer| frontmost.shows(*layer)) {
            let members = self.containers[container.idx()].members(layer).to_vec();
            for widget in members {
                self.resize_widget(widget, settings);
            }
        }
    }

    /// Draws every shown widget of `container`, back layer first. No-op unless it is active.
    pub fn draw(&mut self, container: ContainerId, session: &SearchSession, force_clear: bool) {
        if self.active_container != Some(container) {
            return;
        }
        let frontmost = self.containers[container.idx()].frontmost();
        for layer in Layer::ALL.into_iter().filter(|layer| frontmost.shows(*layer)) {
            let members = self.containers[container.idx()].members(layer).to_vec();
            for widget in members {
                self.draw_widget(widget, session, force_clear);
            }
        }
    }

    /// Routes a key through the active container and returns the effects left for the caller.
    pub fn on_key(&mut self, key: Key, session: &mut SearchSession) -> Vec<Effect> {
        let Some(container) = self.active_container else {
            return self.take_effects();
        };
        let frontmost = self.containers[container.idx()].frontmost();
        let active = self.containers[container.idx()].active_widget();
        let overlay_active =
            active.is_some_and(|widget| self.states[widget.idx()].layer == Layer::Overlay);

        match key {
            Key::F(_) => {
                if !frontmost.is_overlay() {
                    self.toggle_layer(container, Layer::Auxiliary, session);
                }
            }
            Key::Char(OVERLAY_TOGGLE) => self.toggle_layer(container, Layer::Overlay, session),
            Key::ShiftLeft => self.switch_container(container, Side::Left, session),
            Key::ShiftRight => self.switch_container(container, Side::Right, session),
            Key::Left if overlay_active => self.switch_container(container, Side::Left, session),
            Key::Right if overlay_active => self.switch_container(container, Side::Right, session),
            key => {
                if let Some(widget) = active {
                    self.widget_on_key(widget, key, session);
                }
            }
        }
        self.take_effects()
    }

    fn switch_container(&mut self, from: ContainerId, side: Side, session: &mut SearchSession) {
        let neighbor = match side {
            Side::Left => self.containers[from.idx()].left_neighbor(),
            Side::Right => self.containers[from.idx()].right_neighbor(),
        };
        if let Some(neighbor) = neighbor {
            self.set_active_container(neighbor, session);
        }
    }

    /// Copies the surfaces of the active container's shown widgets onto `target`.
    pub fn present(&self, target: &mut Buffer) {
        let Some(active) = self.active_container else {
            return;
        };
        let container = &self.containers[active.idx()];
        for layer in Layer::ALL {
            if !container.frontmost().shows(layer) {
                continue;
            }
            for widget in container.members(layer) {
                let state = &self.states[widget.idx()];
                if !state.is_enabled() {
                    continue;
                }
                if let Some(surface) = &state.surface {
                    blit(surface, target);
                }
            }
        }
    }
}

fn draw_chrome(
    buf: &mut Buffer,
    area: Rect,
    title: &str,
    borders: bool,
    active: bool,
    theme: &Theme,
) {
    if area.is_empty() {
        return;
    }
    if borders {
        Block::bordered()
            .border_style(theme.border_style(active))
            .render(area, buf);
    } else {
        clear_area(buf, Rect::new(area.x, area.y, area.width, 1));
    }
    if title.is_empty() {
        return;
    }

    let title_len = title.chars().count();
    let indent = title_indent(area.width, title_len).max(0);
    let width = i32::from(area.width);
    let mut put = |offset: i32, text: &str, style: Style| {
        if (0..width).contains(&offset) {
            let max_width = usize::try_from(width - offset).unwrap_or(0);
            buf.set_stringn(area.x + offset as u16, area.y, text, max_width, style);
        }
    };

    let title_len = i32::try_from(title_len).unwrap_or(i32::MAX);
    put(indent - 1, " ", theme.base_style());
    put(indent, title, theme.title_style(active));
    put(indent.saturating_add(title_len), " ", theme.base_style());
    if active {
        put(indent - 2, ">", theme.border_style(true));
        put(indent.saturating_add(title_len).saturating_add(1), "<", theme.border_style(true));
    }
}

fn clear_area(buf: &mut Buffer, area: Rect) {
    let area = area.intersection(buf.area);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            buf[(x, y)].reset();
        }
    }
}

fn blit(surface: &Buffer, target: &mut Buffer) {
    let area = surface.area.intersection(target.area);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            target[(x, y)] = surface[(x, y)].clone();
        }
    }
}

#[cfg(test)]
mod tests;
