//! Editing controller for a product's variant dimensions.
//!
//! Every mutating operation finishes by regenerating the collection store,
//! so callers never observe dimensions and combinations out of step.

use crate::collections::{CollectionRow, CollectionStore};
use crate::combination::{Combination, CombinationKey};
use crate::dimensions::{
    is_blank, Dimension, DimensionId, DimensionStore, OptionId, VariantOption,
};
use crate::error::{EditError, SubmissionError};
use crate::submission::{build_submission, VariantSubmission};

#[derive(Debug, Clone, Default)]
pub struct VariantEditor {
    dimensions: DimensionStore,
    collections: CollectionStore,
}

impl VariantEditor {
    /// Starts a session with the combinations accepted previously.
    ///
    /// `previous` is shown as-is until the first dimension edit regenerates.
    #[must_use]
    pub fn new(previous: Vec<Combination>) -> Self {
        Self {
            dimensions: DimensionStore::new(),
            collections: CollectionStore::new(previous),
        }
    }

    /// Starts a session on an existing product.
    ///
    /// Dimensions are rebuilt from the pairs of `previous` (in first-seen
    /// order) and regenerated immediately, so every earlier combination keeps
    /// its price and flag while missing ones appear with defaults.
    #[must_use]
    pub fn resume(previous: Vec<Combination>) -> Self {
        let mut rebuilt: Vec<(String, Vec<String>)> = Vec::new();
        for pair in previous.iter().flat_map(|c| c.options.iter()) {
            if is_blank(&pair.key) || is_blank(&pair.value) {
                continue;
            }
            let position = match rebuilt.iter().position(|(key, _)| *key == pair.key) {
                Some(position) => position,
                None => {
                    rebuilt.push((pair.key.clone(), Vec::new()));
                    rebuilt.len() - 1
                }
            };
            let values = &mut rebuilt[position].1;
            if !values.contains(&pair.value) {
                values.push(pair.value.clone());
            }
        }

        let dimensions: Vec<Dimension> = rebuilt
            .into_iter()
            .map(|(name, values)| Dimension::with_options(name, values))
            .collect();
        tracing::debug!(
            dimensions = dimensions.len(),
            previous = previous.len(),
            "resuming variant session"
        );

        let mut editor = Self {
            dimensions: DimensionStore::from(dimensions),
            collections: CollectionStore::new(previous),
        };
        editor.regenerate();
        editor
    }

    #[must_use]
    pub fn dimensions(&self) -> &[Dimension] {
        self.dimensions.as_slice()
    }

    #[must_use]
    pub fn dimension(&self, id: DimensionId) -> Option<&Dimension> {
        self.dimensions.get(id)
    }

    #[must_use]
    pub fn combinations(&self) -> &[Combination] {
        self.collections.as_slice()
    }

    #[must_use]
    pub fn rows(&self) -> Vec<CollectionRow> {
        self.collections.rows()
    }

    /// Appends a new, empty dimension.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::UnfinishedDimension`] without changing anything
    /// while any existing dimension still lacks a name or a filled option.
    pub fn add_dimension(&mut self) -> Result<DimensionId, EditError> {
        if let Some(pending) = self.dimensions.first_incomplete() {
            tracing::warn!(
                dimension = %pending.name,
                "add_dimension blocked: previous dimension is incomplete"
            );
            return Err(EditError::UnfinishedDimension);
        }

        let id = self.dimensions.push(Dimension::empty());
        self.check_invariants();
        Ok(id)
    }

    pub fn rename_dimension(&mut self, id: DimensionId, name: impl Into<String>) {
        match self.dimensions.get_mut(id) {
            Some(dimension) => dimension.name = name.into(),
            None => {
                tracing::debug!(?id, "rename_dimension: unknown dimension");
            }
        }
        self.regenerate();
    }

    /// Sets an option's value.
    ///
    /// Non-trailing options left blank are removed. Filling the trailing
    /// entry slot opens a new blank slot after it.
    pub fn edit_option(
        &mut self,
        dimension_id: DimensionId,
        option_id: OptionId,
        name: impl Into<String>,
    ) {
        let Some(dimension) = self.dimensions.get_mut(dimension_id) else {
            tracing::debug!(?dimension_id, "edit_option: unknown dimension");
            return;
        };
        let Some(position) = dimension.option_position(option_id) else {
            tracing::debug!(?dimension_id, ?option_id, "edit_option: unknown option");
            return;
        };

        let was_last = position + 1 == dimension.options.len();
        dimension.options[position].name = name.into();

        let last = dimension.options.len() - 1;
        let mut index = 0;
        dimension.options.retain(|option| {
            let keep = index == last || !is_blank(&option.name);
            index += 1;
            keep
        });

        let filled_slot = dimension
            .options
            .last()
            .is_some_and(|option| !is_blank(&option.name));
        if was_last && filled_slot {
            dimension.options.push(VariantOption::blank());
        }

        self.regenerate();
    }

    /// Removes an option. The trailing entry slot cannot be removed.
    ///
    /// Returns `false` when nothing was removed.
    pub fn delete_option(&mut self, dimension_id: DimensionId, option_id: OptionId) -> bool {
        let removed = match self.dimensions.get_mut(dimension_id) {
            Some(dimension) => match dimension.option_position(option_id) {
                Some(position) if position + 1 < dimension.options.len() => {
                    dimension.options.remove(position);
                    true
                }
                Some(_) => {
                    tracing::debug!(?dimension_id, "delete_option: entry slot is permanent");
                    false
                }
                None => false,
            },
            None => false,
        };

        self.regenerate();
        removed
    }

    /// Removes a dimension and regenerates immediately.
    pub fn delete_dimension(&mut self, id: DimensionId) -> bool {
        let removed = self.dimensions.remove(id).is_some();
        self.regenerate();
        removed
    }

    pub fn set_price(&mut self, key: &CombinationKey, price: f64) -> bool {
        self.collections.set_price(key, price)
    }

    pub fn set_included(&mut self, key: &CombinationKey, included: bool) -> bool {
        self.collections.set_included(key, included)
    }

    /// Payload of included combinations for the save request.
    ///
    /// # Errors
    ///
    /// See [`build_submission`].
    pub fn submission(&self, min_price: f64) -> Result<Vec<VariantSubmission>, SubmissionError> {
        build_submission(self.collections.as_slice(), min_price)
    }

    #[must_use]
    pub fn into_combinations(self) -> Vec<Combination> {
        self.collections.into_inner()
    }

    fn regenerate(&mut self) {
        self.check_invariants();
        self.collections.regenerate(self.dimensions.as_slice());
    }

    fn check_invariants(&self) {
        debug_assert!(
            self.dimensions.is_well_formed(),
            "dimension store holds a blank non-trailing option: {:?}",
            self.dimensions
        );
    }
}

#[cfg(test)]
#[path = "editor_test.rs"]
mod tests;
