// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Completable and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use smallvec::SmallVec;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Setting {
    Borders,
    CompletionList,
    LengthCompletion,
    OrdinalSummation,
    Antonyms,
}

impl Setting {
    pub const ALL: [Self; 5] = [
        Self::Borders,
        Self::CompletionList,
        Self::LengthCompletion,
        Self::OrdinalSummation,
        Self::Antonyms,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Borders => "Borders",
            Self::CompletionList => "Completion List",
            Self::LengthCompletion => "Length Completion",
            Self::OrdinalSummation => "Ordinal Summation",
            Self::Antonyms => "Antonyms",
        }
    }

    /// The setting that cannot be enabled at the same time as this one.
    fn exclusive_with(self) -> Option<Self> {
        match self {
            Self::LengthCompletion => Some(Self::OrdinalSummation),
            Self::OrdinalSummation => Some(Self::LengthCompletion),
            _ => None,
        }
    }
}

/// Frames played while a dictionary is scanned for or loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Animation {
    #[default]
    Default,
    CheersTo107,
}

impl Animation {
    pub const ALL: [Self; 2] = [Self::Default, Self::CheersTo107];

    pub fn label(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::CheersTo107 => "Cheers To 107",
        }
    }

    /// The following animation, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Self::Default => Self::CheersTo107,
            Self::CheersTo107 => Self::Default,
        }
    }
}

/// Runtime switches and the busy animation. Not persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    borders: bool,
    completion_list: bool,
    length_completion: bool,
    ordinal_summation: bool,
    antonyms: bool,
    busy_animation: Animation,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            borders: true,
            completion_list: true,
            length_completion: true,
            ordinal_summation: false,
            antonyms: true,
            busy_animation: Animation::Default,
        }
    }
}

impl Settings {
    pub fn is_enabled(&self, setting: Setting) -> bool {
        match setting {
            Setting::Borders => self.borders,
            Setting::CompletionList => self.completion_list,
            Setting::LengthCompletion => self.length_completion,
            Setting::OrdinalSummation => self.ordinal_summation,
            Setting::Antonyms => self.antonyms,
        }
    }

    pub fn borders(&self) -> bool {
        self.borders
    }

    /// Either of the two views sharing the lower-left slot is on.
    pub fn lower_left_enabled(&self) -> bool {
        self.length_completion || self.ordinal_summation
    }

    /// Applies `enabled` and returns every setting whose value changed.
    pub fn set(&mut self, setting: Setting, enabled: bool) -> SmallVec<[Setting; 2]> {
        let mut changed = SmallVec::new();
        if self.is_enabled(setting) == enabled {
            return changed;
        }

        *self.slot(setting) = enabled;
        changed.push(setting);

        if enabled {
            if let Some(other) = setting.exclusive_with() {
                if self.is_enabled(other) {
                    *self.slot(other) = false;
                    changed.push(other);
                }
            }
        }
        changed
    }

    pub fn toggle(&mut self, setting: Setting) -> SmallVec<[Setting; 2]> {
        let enabled = !self.is_enabled(setting);
        self.set(setting, enabled)
    }

    pub fn busy_animation(&self) -> Animation {
        self.busy_animation
    }

    pub fn set_busy_animation(&mut self, animation: Animation) {
        self.busy_animation = animation;
    }

    /// Switches to the next animation and returns it.
    pub fn cycle_busy_animation(&mut self) -> Animation {
        self.busy_animation = self.busy_animation.next();
        self.busy_animation
    }

    fn slot(&mut self, setting: Setting) -> &mut bool {
        match setting {
            Setting::Borders => &mut self.borders,
            Setting::CompletionList => &mut self.completion_list,
            Setting::LengthCompletion => &mut self.length_completion,
            Setting::OrdinalSummation => &mut self.ordinal_summation,
            Setting::Antonyms => &mut self.antonyms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Animation, Setting, Settings};

    #[test]
    fn defaults_show_every_list_but_ordinal_summation() {
        let settings = Settings::default();
        for setting in Setting::ALL {
            assert_eq!(
                settings.is_enabled(setting),
                setting != Setting::OrdinalSummation,
                "{setting:?}"
            );
        }
        assert_eq!(settings.busy_animation(), Animation::Default);
    }

    #[test]
    fn busy_animation_cycles_through_every_animation() {
        let mut settings = Settings::default();
        assert_eq!(settings.cycle_busy_animation(), Animation::CheersTo107);
        assert_eq!(settings.busy_animation().label(), "Cheers To 107");
        assert_eq!(settings.cycle_busy_animation(), Animation::Default);

        settings.set_busy_animation(Animation::CheersTo107);
        assert_eq!(settings.busy_animation(), Animation::ALL[1]);
    }

    #[test]
    fn length_and_ordinal_are_mutually_exclusive() {
        let mut settings = Settings::default();
        assert!(settings.is_enabled(Setting::LengthCompletion));

        let changed = settings.toggle(Setting::OrdinalSummation);
        assert_eq!(
            changed.as_slice(),
            &[Setting::OrdinalSummation, Setting::LengthCompletion]
        );
        assert!(!settings.is_enabled(Setting::LengthCompletion));

        let changed = settings.toggle(Setting::OrdinalSummation);
        assert_eq!(changed.as_slice(), &[Setting::OrdinalSummation]);
        assert!(!settings.lower_left_enabled());
    }

    #[test]
    fn setting_the_current_value_changes_nothing() {
        let mut settings = Settings::default();
        assert!(settings.set(Setting::Borders, true).is_empty());
        assert_eq!(settings, Settings::default());
    }
}
