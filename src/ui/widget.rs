// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Completable and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Widget contract.
//!
//! A widget owns one rectangle of the screen. The engine keeps its bookkeeping (geometry, dirty
//! flags, visibility, surface) in [`WidgetState`]; the behavior lives behind the [`Widget`] trait.
//! Optional behaviors are separate capability traits so a widget only opts into the keys it
//! handles.

use ratatui::{buffer::Buffer, layout::Rect};
use smallvec::SmallVec;

use crate::model::{DictionaryRequest, SearchSession, Setting, Settings};

use super::{Aspect, Container, ContainerId, Layer, Scroll, Theme, VisibilityFlags};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(usize);

impl WidgetId {
    /// Builds an id from a raw arena index. Only meaningful for the `UiState` that issued it.
    pub fn from_raw(raw: usize) -> Self {
        Self(raw)
    }

    pub(crate) fn idx(self) -> usize {
        self.0
    }
}

/// A request from a hook, applied by the engine once the hook returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    MarkDirty(WidgetId),
    /// Make the widget active within the active container.
    Activate(WidgetId),
    /// A setting changed; the owner of the widgets decides what that means.
    SettingChanged(Setting),
    /// The dictionaries tab asks for a scan or a load.
    Dictionary(DictionaryRequest),
}

pub struct LayoutCx<'a> {
    pub(crate) screen: Rect,
    pub(crate) settings: &'a Settings,
}

impl LayoutCx<'_> {
    pub fn screen(&self) -> Rect {
        self.screen
    }

    pub fn settings(&self) -> &Settings {
        self.settings
    }
}

pub struct RenderCx<'a> {
    pub(crate) session: &'a SearchSession,
    pub(crate) theme: &'a Theme,
    pub(crate) active: bool,
    pub(crate) containers: &'a [Container],
    pub(crate) active_container: Option<ContainerId>,
}

impl<'a> RenderCx<'a> {
    pub fn session(&self) -> &'a SearchSession {
        self.session
    }

    pub fn theme(&self) -> &'a Theme {
        self.theme
    }

    /// Whether the widget being drawn is the active one.
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn containers(&self) -> impl Iterator<Item = (ContainerId, &'a Container)> + 'a {
        self.containers
            .iter()
            .enumerate()
            .map(|(idx, container)| (ContainerId::from_idx(idx), container))
    }

    pub fn active_container_id(&self) -> Option<ContainerId> {
        self.active_container
    }
}

pub struct HookCx<'a> {
    pub(crate) id: WidgetId,
    pub(crate) rect: Rect,
    pub(crate) session: &'a mut SearchSession,
    pub(crate) effects: &'a mut Vec<Effect>,
}

impl HookCx<'_> {
    pub fn id(&self) -> WidgetId {
        self.id
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Rows skipped by page-wise scrolling.
    pub fn page_len(&self) -> usize {
        usize::from(self.rect.height.saturating_sub(3)).max(1)
    }

    pub fn session(&self) -> &SearchSession {
        self.session
    }

    pub fn session_mut(&mut self) -> &mut SearchSession {
        self.session
    }

    pub fn mark_dirty(&mut self, widget: WidgetId) {
        self.effects.push(Effect::MarkDirty(widget));
    }

    pub fn mark_self_dirty(&mut self) {
        let id = self.id;
        self.mark_dirty(id);
    }

    pub fn activate(&mut self, widget: WidgetId) {
        self.effects.push(Effect::Activate(widget));
    }

    pub fn emit(&mut self, effect: Effect) {
        self.effects.push(effect);
    }
}

pub trait Scrollable {
    fn scroll(&mut self, motion: Scroll, cx: &mut HookCx<'_>);
}

pub trait Submittable {
    fn submit(&mut self, cx: &mut HookCx<'_>);
}

/// Keys that edit a line of typed text: the search prefix or a search location.
pub trait PrefixEditor {
    fn insert(&mut self, ch: char, cx: &mut HookCx<'_>);

    fn erase(&mut self, cx: &mut HookCx<'_>);

    fn complete_common(&mut self, cx: &mut HookCx<'_>);

    fn go_back(&mut self, cx: &mut HookCx<'_>);
}

pub trait Widget {
    fn layer(&self) -> Layer;

    fn title(&mut self, cx: &RenderCx<'_>) -> String;

    /// Geometry for the current screen size.
    fn layout(&self, cx: &LayoutCx<'_>) -> Rect;

    /// Draws the content into `area`, the rectangle inside the border.
    fn render(&mut self, buf: &mut Buffer, area: Rect, cx: &RenderCx<'_>);

    fn borders_enabled(&self) -> bool {
        true
    }

    fn post_resize(&mut self, _rect: Rect) {}

    fn pre_disable(&mut self, _cx: &mut HookCx<'_>) {}

    fn scrollable(&mut self) -> Option<&mut dyn Scrollable> {
        None
    }

    fn submittable(&mut self) -> Option<&mut dyn Submittable> {
        None
    }

    fn editor(&mut self) -> Option<&mut dyn PrefixEditor> {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Neighbors {
    pub left: Option<WidgetId>,
    pub right: Option<WidgetId>,
}

/// Engine-side bookkeeping for one widget.
#[derive(Debug, Clone)]
pub struct WidgetState {
    pub(crate) layer: Layer,
    pub(crate) rect: Rect,
    pub(crate) surface: Option<Buffer>,
    pub(crate) dirty: bool,
    pub(crate) title_dirty: bool,
    pub(crate) visibility: VisibilityFlags,
    pub(crate) dependents: SmallVec<[WidgetId; 4]>,
    pub(crate) neighbors: SmallVec<[(ContainerId, Neighbors); 1]>,
    pub(crate) containers: SmallVec<[ContainerId; 2]>,
}

impl WidgetState {
    /// Starts hidden until a container holding it becomes active.
    pub(crate) fn new(layer: Layer) -> Self {
        let mut visibility = VisibilityFlags::default();
        visibility.set(Aspect::Container);
        Self {
            layer,
            rect: Rect::default(),
            surface: None,
            dirty: true,
            title_dirty: true,
            visibility,
            dependents: SmallVec::new(),
            neighbors: SmallVec::new(),
            containers: SmallVec::new(),
        }
    }

    pub fn layer(&self) -> Layer {
        self.layer
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn is_title_dirty(&self) -> bool {
        self.title_dirty
    }

    pub fn visibility(&self) -> VisibilityFlags {
        self.visibility
    }

    pub fn is_enabled(&self) -> bool {
        self.visibility.is_enabled()
    }

    pub fn dependents(&self) -> &[WidgetId] {
        &self.dependents
    }

    pub fn surface(&self) -> Option<&Buffer> {
        self.surface.as_ref()
    }

    pub(crate) fn neighbors_in(&self, container: ContainerId) -> Neighbors {
        self.neighbors
            .iter()
            .find(|(id, _)| *id == container)
            .map(|(_, neighbors)| *neighbors)
            .unwrap_or_default()
    }

    pub(crate) fn neighbors_in_mut(&mut self, container: ContainerId) -> &mut Neighbors {
        let position = match self.neighbors.iter().position(|(id, _)| *id == container) {
            Some(position) => position,
            None => {
                self.neighbors.push((container, Neighbors::default()));
                self.neighbors.len() - 1
            }
        };
        &mut self.neighbors[position].1
    }
}

/// Column where a title starts: `width - round(width / 1.618 + title_len / 2)`.
pub fn title_indent(width: u16, title_len: usize) -> i32 {
    let width_f = f64::from(width);
    let offset = (width_f / 1.618 + title_len as f64 / 2.0 + 0.5) as i32;
    i32::from(width) - offset
}
