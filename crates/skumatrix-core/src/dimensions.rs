//! Variant dimensions (e.g. "Color") and their options (e.g. "Red").
//!
//! Ids are minted per editing session and only distinguish entries while the
//! session is alive. Combinations never refer to them; see [`crate::generator`].

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DimensionId(Uuid);

impl DimensionId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for DimensionId {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OptionId(Uuid);

impl OptionId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for OptionId {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns `true` when a dimension or option name counts as empty.
///
/// Whitespace-only names are treated the same as `""`.
#[must_use]
pub fn is_blank(name: &str) -> bool {
    name.trim().is_empty()
}

/// One concrete value of a [`Dimension`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantOption {
    pub id: OptionId,
    pub name: String,
}

impl VariantOption {
    /// An empty entry slot with a fresh id.
    #[must_use]
    pub fn blank() -> Self {
        Self::named("")
    }

    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: OptionId::new(),
            name: name.into(),
        }
    }
}

/// A named axis of product variation with its ordered options.
///
/// The last option is the entry slot and may be blank; every other option
/// must carry a name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    pub id: DimensionId,
    pub name: String,
    pub options: Vec<VariantOption>,
}

impl Dimension {
    /// A freshly added dimension: no name and a single blank option.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            id: DimensionId::new(),
            name: String::new(),
            options: vec![VariantOption::blank()],
        }
    }

    /// Builds a dimension from option names, adding the trailing entry slot.
    #[must_use]
    pub fn with_options<I, S>(name: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut options: Vec<VariantOption> =
            options.into_iter().map(VariantOption::named).collect();
        options.retain(|option| !is_blank(&option.name));
        options.push(VariantOption::blank());

        Self {
            id: DimensionId::new(),
            name: name.into(),
            options,
        }
    }

    /// Options that carry a value, in declaration order.
    pub fn filled_options(&self) -> impl Iterator<Item = &VariantOption> {
        self.options.iter().filter(|option| !is_blank(&option.name))
    }

    /// Named, with at least one filled option.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        !is_blank(&self.name) && self.filled_options().next().is_some()
    }

    /// Only the last option may be blank, and there is always at least one.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        match self.options.split_last() {
            Some((_, leading)) => leading.iter().all(|option| !is_blank(&option.name)),
            None => false,
        }
    }

    #[must_use]
    pub fn option_position(&self, option_id: OptionId) -> Option<usize> {
        self.options.iter().position(|option| option.id == option_id)
    }
}

/// Ordered list of dimensions owned by one editing session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DimensionStore {
    dimensions: Vec<Dimension>,
}

impl DimensionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Dimension] {
        &self.dimensions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.dimensions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dimensions.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: DimensionId) -> Option<&Dimension> {
        self.dimensions.iter().find(|dimension| dimension.id == id)
    }

    pub fn get_mut(&mut self, id: DimensionId) -> Option<&mut Dimension> {
        self.dimensions.iter_mut().find(|dimension| dimension.id == id)
    }

    /// The first dimension that is not yet ready, if any.
    #[must_use]
    pub fn first_incomplete(&self) -> Option<&Dimension> {
        self.dimensions.iter().find(|dimension| !dimension.is_ready())
    }

    pub fn push(&mut self, dimension: Dimension) -> DimensionId {
        let id = dimension.id;
        self.dimensions.push(dimension);
        id
    }

    /// Removes the dimension, returning it if it existed.
    pub fn remove(&mut self, id: DimensionId) -> Option<Dimension> {
        let position = self.dimensions.iter().position(|d| d.id == id)?;
        Some(self.dimensions.remove(position))
    }

    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.dimensions.iter().all(Dimension::is_well_formed)
    }
}

impl From<Vec<Dimension>> for DimensionStore {
    fn from(dimensions: Vec<Dimension>) -> Self {
        Self { dimensions }
    }
}
