// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Completable and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use smol_str::SmolStr;

use super::WidgetId;

/// Partition key for widgets within a container, back to front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Layer {
    Primary,
    Auxiliary,
    Overlay,
}

impl Layer {
    pub const ALL: [Self; 3] = [Self::Primary, Self::Auxiliary, Self::Overlay];

    fn idx(self) -> usize {
        match self {
            Self::Primary => 0,
            Self::Auxiliary => 1,
            Self::Overlay => 2,
        }
    }
}

/// Which layer currently receives input.
///
/// The overlay remembers whether the auxiliary layer is still shown underneath it so that closing
/// the overlay returns to the right place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Frontmost {
    #[default]
    Primary,
    Auxiliary,
    Overlay {
        above_auxiliary: bool,
    },
}

impl Frontmost {
    pub fn layer(self) -> Layer {
        match self {
            Self::Primary => Layer::Primary,
            Self::Auxiliary => Layer::Auxiliary,
            Self::Overlay { .. } => Layer::Overlay,
        }
    }

    pub fn is_overlay(self) -> bool {
        matches!(self, Self::Overlay { .. })
    }

    pub fn shows(self, layer: Layer) -> bool {
        match layer {
            Layer::Primary => true,
            Layer::Auxiliary => matches!(
                self,
                Self::Auxiliary
                    | Self::Overlay {
                        above_auxiliary: true
                    }
            ),
            Layer::Overlay => self.is_overlay(),
        }
    }

    /// The state after showing or hiding `layer`. The primary layer is always shown.
    pub fn with(self, layer: Layer, shown: bool) -> Self {
        match (layer, shown, self) {
            (Layer::Primary, _, current) => current,
            (Layer::Auxiliary, true, Self::Primary) => Self::Auxiliary,
            (Layer::Auxiliary, true, Self::Overlay { .. }) => Self::Overlay {
                above_auxiliary: true,
            },
            (Layer::Auxiliary, false, Self::Auxiliary) => Self::Primary,
            (Layer::Auxiliary, false, Self::Overlay { .. }) => Self::Overlay {
                above_auxiliary: false,
            },
            (Layer::Overlay, true, Self::Primary) => Self::Overlay {
                above_auxiliary: false,
            },
            (Layer::Overlay, true, Self::Auxiliary) => Self::Overlay {
                above_auxiliary: true,
            },
            (Layer::Overlay, false, Self::Overlay { above_auxiliary }) => {
                if above_auxiliary {
                    Self::Auxiliary
                } else {
                    Self::Primary
                }
            }
            (_, _, current) => current,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContainerId(usize);

impl ContainerId {
    pub(crate) fn idx(self) -> usize {
        self.0
    }

    pub(crate) fn from_idx(idx: usize) -> Self {
        Self(idx)
    }
}

/// Two flavors of the same top-level grouping; they behave identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    Tab,
    Page,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct LayerMembers {
    widgets: Vec<WidgetId>,
    active: Option<WidgetId>,
}

/// Widgets grouped by layer, with one active widget per layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    kind: ContainerKind,
    name: SmolStr,
    abbreviation: SmolStr,
    indicator_position: u16,
    layers: [LayerMembers; 3],
    frontmost: Frontmost,
    left: Option<ContainerId>,
    right: Option<ContainerId>,
}

impl Container {
    pub fn new(
        kind: ContainerKind,
        name: impl Into<SmolStr>,
        abbreviation: impl Into<SmolStr>,
        indicator_position: u16,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            abbreviation: abbreviation.into(),
            indicator_position,
            layers: Default::default(),
            frontmost: Frontmost::Primary,
            left: None,
            right: None,
        }
    }

    pub fn kind(&self) -> ContainerKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn abbreviation(&self) -> &str {
        &self.abbreviation
    }

    /// Slot in the indicator, counted from the right edge.
    pub fn indicator_position(&self) -> u16 {
        self.indicator_position
    }

    pub fn frontmost(&self) -> Frontmost {
        self.frontmost
    }

    pub(crate) fn set_frontmost(&mut self, frontmost: Frontmost) {
        self.frontmost = frontmost;
    }

    pub fn members(&self, layer: Layer) -> &[WidgetId] {
        &self.layers[layer.idx()].widgets
    }

    pub fn all_members(&self) -> impl Iterator<Item = WidgetId> + '_ {
        self.layers.iter().flat_map(|layer| layer.widgets.iter().copied())
    }

    pub fn contains(&self, layer: Layer, widget: WidgetId) -> bool {
        self.members(layer).contains(&widget)
    }

    pub fn active_in(&self, layer: Layer) -> Option<WidgetId> {
        self.layers[layer.idx()].active
    }

    /// The active widget of the frontmost layer.
    pub fn active_widget(&self) -> Option<WidgetId> {
        self.active_in(self.frontmost.layer())
    }

    pub(crate) fn push_member(&mut self, layer: Layer, widget: WidgetId) {
        let members = &mut self.layers[layer.idx()];
        if members.widgets.contains(&widget) {
            return;
        }
        members.widgets.push(widget);
        if members.active.is_none() {
            members.active = Some(widget);
        }
    }

    pub(crate) fn set_active_in(&mut self, layer: Layer, widget: WidgetId) {
        self.layers[layer.idx()].active = Some(widget);
    }

    pub fn left_neighbor(&self) -> Option<ContainerId> {
        self.left
    }

    pub fn right_neighbor(&self) -> Option<ContainerId> {
        self.right
    }

    pub fn set_left_neighbor(&mut self, neighbor: Option<ContainerId>) {
        self.left = neighbor;
    }

    pub fn set_right_neighbor(&mut self, neighbor: Option<ContainerId>) {
        self.right = neighbor;
    }
}
