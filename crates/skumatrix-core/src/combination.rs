use serde::{Deserialize, Serialize};

/// Price assigned to a combination that has no earlier counterpart.
pub const DEFAULT_PRICE: f64 = 1.0;

/// One `(dimension name, option name)` entry of a combination.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OptionPair {
    /// Dimension name, e.g. `"Color"`.
    pub key: String,
    /// Option name, e.g. `"Red"`.
    pub value: String,
}

impl OptionPair {
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Merge identity of a combination: its option values in dimension order.
///
/// Dimension names and session ids are not part of the key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CombinationKey(Vec<String>);

impl CombinationKey {
    #[must_use]
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(values.into_iter().map(Into::into).collect())
    }

    #[must_use]
    pub fn from_pairs(pairs: &[OptionPair]) -> Self {
        Self(pairs.iter().map(|pair| pair.value.clone()).collect())
    }

    /// Returns `true` if `pairs` carries exactly these values in this order.
    #[must_use]
    pub fn matches(&self, pairs: &[OptionPair]) -> bool {
        self.0.len() == pairs.len()
            && self
                .0
                .iter()
                .zip(pairs)
                .all(|(value, pair)| *value == pair.value)
    }

    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.0
    }

    /// Display form used as the table row label, e.g. `"Red / S"`.
    #[must_use]
    pub fn label(&self) -> String {
        self.0.join(" / ")
    }
}

/// A sellable SKU: one option per ready dimension plus its editable metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combination {
    pub options: Vec<OptionPair>,
    pub price: f64,
    #[serde(alias = "checked")]
    pub included: bool,
}

impl Combination {
    /// A combination with default price and not included.
    #[must_use]
    pub fn new(options: Vec<OptionPair>) -> Self {
        Self {
            options,
            price: DEFAULT_PRICE,
            included: false,
        }
    }

    #[must_use]
    pub fn key(&self) -> CombinationKey {
        CombinationKey::from_pairs(&self.options)
    }

    #[must_use]
    pub fn label(&self) -> String {
        self.options
            .iter()
            .map(|pair| pair.value.as_str())
            .collect::<Vec<_>>()
            .join(" / ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red_small() -> Combination {
        Combination::new(vec![
            OptionPair::new("Color", "Red"),
            OptionPair::new("Size", "S"),
        ])
    }

    #[test]
    fn new_combination_uses_defaults() {
        let combination = red_small();
        assert!((combination.price - DEFAULT_PRICE).abs() < f64::EPSILON);
        assert!(!combination.included);
    }

    #[test]
    fn key_ignores_dimension_names() {
        let renamed = Combination::new(vec![
            OptionPair::new("Colour", "Red"),
            OptionPair::new("Fit", "S"),
        ]);
        assert_eq!(red_small().key(), renamed.key());
    }

    #[test]
    fn key_is_order_sensitive() {
        let reversed = CombinationKey::new(["S", "Red"]);
        assert_ne!(red_small().key(), reversed);
        assert!(!reversed.matches(&red_small().options));
    }

    #[test]
    fn key_rejects_prefix_match() {
        let prefix = CombinationKey::new(["Red"]);
        assert!(!prefix.matches(&red_small().options));
    }

    #[test]
    fn label_joins_values() {
        assert_eq!(red_small().label(), "Red / S");
        assert_eq!(red_small().key().label(), "Red / S");
    }

    #[test]
    fn deserializes_checked_alias() {
        let json = r#"{"options":[{"key":"Color","value":"Red"}],"price":4.5,"checked":true}"#;
        let combination: Combination = serde_json::from_str(json).expect("valid payload");
        assert!(combination.included);
        assert!((combination.price - 4.5).abs() < f64::EPSILON);
    }
}
