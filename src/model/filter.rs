// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Completable and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Attribute filter for the derived word views.

use crate::dictionary::{Attributes, Dictionary};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterDirection {
    /// Drop words carrying any selected attribute.
    #[default]
    Exclusive,
    /// Keep only words carrying at least one selected attribute.
    Inclusive,
}

impl FilterDirection {
    pub fn label(self) -> &'static str {
        match self {
            Self::Exclusive => "exclusive",
            Self::Inclusive => "inclusive",
        }
    }

    fn flipped(self) -> Self {
        match self {
            Self::Exclusive => Self::Inclusive,
            Self::Inclusive => Self::Exclusive,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterAttribute {
    Name,
    MaleName,
    FemaleName,
    Place,
    Compound,
    Acronym,
    /// Matches words without any label.
    AllLabelsMissing,
}

impl FilterAttribute {
    pub const ALL: [Self; 7] = [
        Self::Name,
        Self::MaleName,
        Self::FemaleName,
        Self::Place,
        Self::Compound,
        Self::Acronym,
        Self::AllLabelsMissing,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::MaleName => "male name",
            Self::FemaleName => "female name",
            Self::Place => "place",
            Self::Compound => "compound",
            Self::Acronym => "acronym",
            Self::AllLabelsMissing => "all labels missing",
        }
    }

    fn matches(self, attributes: Attributes) -> bool {
        match self {
            Self::Name => attributes.contains(Attributes::NAME),
            Self::MaleName => attributes.contains(Attributes::MALE_NAME),
            Self::FemaleName => attributes.contains(Attributes::FEMALE_NAME),
            Self::Place => attributes.contains(Attributes::PLACE),
            Self::Compound => attributes.contains(Attributes::COMPOUND),
            Self::Acronym => attributes.contains(Attributes::ACRONYM),
            Self::AllLabelsMissing => attributes.is_empty(),
        }
    }

    fn flag(self) -> FilterSelection {
        match self {
            Self::Name => FilterSelection::NAME,
            Self::MaleName => FilterSelection::MALE_NAME,
            Self::FemaleName => FilterSelection::FEMALE_NAME,
            Self::Place => FilterSelection::PLACE,
            Self::Compound => FilterSelection::COMPOUND,
            Self::Acronym => FilterSelection::ACRONYM,
            Self::AllLabelsMissing => FilterSelection::ALL_LABELS_MISSING,
        }
    }
}

bitflags::bitflags! {
    /// Attributes ticked in the filter view.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct FilterSelection: u8 {
        const NAME = 1 << 0;
        const MALE_NAME = 1 << 1;
        const FEMALE_NAME = 1 << 2;
        const PLACE = 1 << 3;
        const COMPOUND = 1 << 4;
        const ACRONYM = 1 << 5;
        const ALL_LABELS_MISSING = 1 << 6;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordFilter {
    selected: FilterSelection,
    direction: FilterDirection,
    rev: u64,
}

impl WordFilter {
    pub fn direction(&self) -> FilterDirection {
        self.direction
    }

    pub fn toggle_direction(&mut self) {
        self.direction = self.direction.flipped();
        self.rev = self.rev.wrapping_add(1);
    }

    pub fn is_selected(&self, attribute: FilterAttribute) -> bool {
        self.selected.contains(attribute.flag())
    }

    pub fn toggle(&mut self, attribute: FilterAttribute) {
        self.selected.toggle(attribute.flag());
        self.rev = self.rev.wrapping_add(1);
    }

    pub fn selection(&self) -> FilterSelection {
        self.selected
    }

    pub fn selected(&self) -> impl Iterator<Item = FilterAttribute> + '_ {
        FilterAttribute::ALL
            .into_iter()
            .filter(move |attribute| self.is_selected(*attribute))
    }

    /// Bumped on every change so cached word lists can tell they are stale.
    pub fn rev(&self) -> u64 {
        self.rev
    }

    pub fn passes(&self, dictionary: &dyn Dictionary, index: usize) -> bool {
        let attributes = dictionary.attributes(index);
        let mut hits = self.selected().filter(|attribute| attribute.matches(attributes));
        match self.direction {
            FilterDirection::Exclusive => hits.next().is_none(),
            FilterDirection::Inclusive => hits.next().is_some(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FilterAttribute, FilterDirection, FilterSelection, WordFilter};
    use crate::dictionary::{demo_word_list, Dictionary};

    #[test]
    fn default_filter_passes_everything() {
        let words = demo_word_list();
        let filter = WordFilter::default();
        assert!((0..words.size()).all(|index| filter.passes(&words, index)));
    }

    #[test]
    fn exclusive_drops_selected_attributes() {
        let words = demo_word_list();
        let mut filter = WordFilter::default();
        filter.toggle(FilterAttribute::Name);

        let (alice, _) = words.complete("Alice");
        let (boston, _) = words.complete("Boston");
        assert!(!filter.passes(&words, alice));
        assert!(filter.passes(&words, boston));
    }

    #[test]
    fn inclusive_keeps_only_selected_attributes() {
        let words = demo_word_list();
        let mut filter = WordFilter::default();
        filter.toggle_direction();
        assert_eq!(filter.direction(), FilterDirection::Inclusive);

        let (calm, _) = words.complete("calm");
        assert!(!filter.passes(&words, calm), "nothing selected keeps nothing");

        filter.toggle(FilterAttribute::AllLabelsMissing);
        assert!(filter.passes(&words, calm));
        let (nasa, _) = words.complete("NASA");
        assert!(!filter.passes(&words, nasa));
    }

    #[test]
    fn every_change_bumps_the_revision() {
        let mut filter = WordFilter::default();
        let rev = filter.rev();
        filter.toggle(FilterAttribute::Place);
        filter.toggle(FilterAttribute::Place);
        filter.toggle_direction();
        assert_eq!(filter.rev(), rev + 3);
        assert_eq!(filter.selected().count(), 0);
    }

    #[test]
    fn selection_tracks_toggled_attributes() {
        let mut filter = WordFilter::default();
        filter.toggle(FilterAttribute::Acronym);
        filter.toggle(FilterAttribute::AllLabelsMissing);

        assert_eq!(
            filter.selection(),
            FilterSelection::ACRONYM | FilterSelection::ALL_LABELS_MISSING
        );
        assert!(filter.is_selected(FilterAttribute::Acronym));
        assert!(!filter.is_selected(FilterAttribute::Place));
        assert_eq!(
            filter.selected().collect::<Vec<_>>(),
            vec![FilterAttribute::Acronym, FilterAttribute::AllLabelsMissing]
        );
    }
}
