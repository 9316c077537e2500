use serde::Serialize;

use crate::combination::{Combination, CombinationKey};
use crate::dimensions::Dimension;
use crate::generator::generate;

/// One rendered table row: the joined option values plus editable fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectionRow {
    pub label: String,
    pub price: f64,
    pub included: bool,
}

/// The current combinations of an editing session.
///
/// Replaced by [`CollectionStore::regenerate`] after every dimension edit;
/// price and inclusion edits go straight to the matching entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectionStore {
    combinations: Vec<Combination>,
}

impl CollectionStore {
    /// Seeds the store with the combinations accepted in an earlier session.
    #[must_use]
    pub fn new(initial: Vec<Combination>) -> Self {
        Self {
            combinations: initial,
        }
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Combination] {
        &self.combinations
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.combinations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.combinations.is_empty()
    }

    /// Recomputes every combination from `dimensions`, carrying metadata over
    /// from the current list.
    pub fn regenerate(&mut self, dimensions: &[Dimension]) {
        self.combinations = generate(dimensions, &self.combinations);
    }

    /// Sets the price of every combination matching `key`.
    ///
    /// Returns `false` if nothing matched.
    pub fn set_price(&mut self, key: &CombinationKey, price: f64) -> bool {
        self.update(key, |combination| combination.price = price)
    }

    /// Sets the inclusion flag of every combination matching `key`.
    ///
    /// Returns `false` if nothing matched.
    pub fn set_included(&mut self, key: &CombinationKey, included: bool) -> bool {
        self.update(key, |combination| combination.included = included)
    }

    fn update<F>(&mut self, key: &CombinationKey, mut apply: F) -> bool
    where
        F: FnMut(&mut Combination),
    {
        let mut matched = false;
        for combination in self
            .combinations
            .iter_mut()
            .filter(|combination| key.matches(&combination.options))
        {
            apply(combination);
            matched = true;
        }
        matched
    }

    #[must_use]
    pub fn rows(&self) -> Vec<CollectionRow> {
        self.combinations
            .iter()
            .map(|combination| CollectionRow {
                label: combination.label(),
                price: combination.price,
                included: combination.included,
            })
            .collect()
    }

    /// Combinations flagged for submission, in table order.
    pub fn included(&self) -> impl Iterator<Item = &Combination> {
        self.combinations.iter().filter(|c| c.included)
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<Combination> {
        self.combinations
    }
}
