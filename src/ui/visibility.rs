// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Completable and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use bitflags::bitflags;

/// One independent reason for a widget to be hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Aspect {
    /// The widget's layer is not shown in its container.
    Layer,
    /// None of the widget's containers is the active one.
    Container,
    /// Switched off by a runtime setting.
    Feature,
}

impl Aspect {
    pub const ALL: [Self; 3] = [Self::Layer, Self::Container, Self::Feature];

    fn bits(self) -> AspectBits {
        match self {
            Self::Layer => AspectBits::LAYER,
            Self::Container => AspectBits::CONTAINER,
            Self::Feature => AspectBits::FEATURE,
        }
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    struct AspectBits: u8 {
        const LAYER = 1 << 0;
        const CONTAINER = 1 << 1;
        const FEATURE = 1 << 2;
    }
}

/// The set of reasons currently hiding a widget. Empty means enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisibilityFlags {
    bits: AspectBits,
}

impl VisibilityFlags {
    pub fn set(&mut self, aspect: Aspect) {
        self.bits.insert(aspect.bits());
    }

    pub fn unset(&mut self, aspect: Aspect) {
        self.bits.remove(aspect.bits());
    }

    pub fn is_set(&self, aspect: Aspect) -> bool {
        self.bits.contains(aspect.bits())
    }

    pub fn currently_set(&self) -> impl Iterator<Item = Aspect> + '_ {
        Aspect::ALL.into_iter().filter(move |aspect| self.is_set(*aspect))
    }

    pub fn is_enabled(&self) -> bool {
        self.bits.is_empty()
    }
}
