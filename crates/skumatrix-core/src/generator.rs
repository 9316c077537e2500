//! Cartesian expansion of variant dimensions into combinations.
//!
//! Price and inclusion flags are carried over from the previous generation by
//! matching on [`CombinationKey`] (option values in order). Ids never take
//! part in matching, so renaming an option value drops its old metadata while
//! renaming a dimension keeps it.

use std::collections::{HashMap, HashSet};

use crate::combination::{Combination, CombinationKey, OptionPair, DEFAULT_PRICE};
use crate::dimensions::{is_blank, Dimension};

/// A dimension that survived filtering, reduced to its live names.
#[derive(Debug)]
struct ReadyDimension<'a> {
    name: &'a str,
    values: Vec<&'a str>,
}

/// Metadata from the previous generation, indexed once per regeneration.
struct CarryOver {
    by_key: HashMap<CombinationKey, (f64, bool)>,
}

impl CarryOver {
    fn index(previous: &[Combination]) -> Self {
        let mut by_key = HashMap::with_capacity(previous.len());
        for combination in previous {
            // first occurrence wins
            by_key
                .entry(combination.key())
                .or_insert((combination.price, combination.included));
        }
        Self { by_key }
    }

    fn resolve(&self, options: Vec<OptionPair>) -> Combination {
        let key = CombinationKey::from_pairs(&options);
        let (price, included) = self
            .by_key
            .get(&key)
            .copied()
            .unwrap_or((DEFAULT_PRICE, false));

        Combination {
            options,
            price,
            included,
        }
    }

    fn contains(&self, options: &[OptionPair]) -> bool {
        self.by_key.contains_key(&CombinationKey::from_pairs(options))
    }
}

/// Generates every combination of the ready dimensions.
///
/// Dimensions with a blank name, or without a filled option, are skipped.
/// Pairs follow dimension declaration order and the last dimension varies
/// fastest. Each result takes its price and inclusion flag from the entry of
/// `previous` with the same option values, or the defaults when none exists.
#[must_use]
pub fn generate(dimensions: &[Dimension], previous: &[Combination]) -> Vec<Combination> {
    let ready = ready_dimensions(dimensions);
    if ready.is_empty() {
        tracing::debug!(
            dimensions = dimensions.len(),
            "no ready dimensions; clearing combinations"
        );
        return Vec::new();
    }

    let carry_over = CarryOver::index(previous);
    let live = live_pairs(&ready);

    let mut carried = 0_usize;
    let combinations: Vec<Combination> = expand(&ready)
        .into_iter()
        .filter(|options| resolves_against(options, &live))
        .map(|options| {
            if carry_over.contains(&options) {
                carried += 1;
            }
            carry_over.resolve(options)
        })
        .collect();

    tracing::debug!(
        dimensions = dimensions.len(),
        ready = ready.len(),
        combinations = combinations.len(),
        carried,
        "regenerated combinations"
    );

    combinations
}

fn ready_dimensions(dimensions: &[Dimension]) -> Vec<ReadyDimension<'_>> {
    dimensions
        .iter()
        .filter(|dimension| !is_blank(&dimension.name))
        .map(|dimension| ReadyDimension {
            name: dimension.name.as_str(),
            values: dimension
                .filled_options()
                .map(|option| option.name.as_str())
                .collect(),
        })
        .filter(|dimension| !dimension.values.is_empty())
        .collect()
}

/// Recursively builds the option-pair sequences for `ready`.
///
/// The head dimension loops outermost, so later dimensions vary faster.
fn expand(ready: &[ReadyDimension<'_>]) -> Vec<Vec<OptionPair>> {
    let Some((head, rest)) = ready.split_first() else {
        return Vec::new();
    };

    if rest.is_empty() {
        return head
            .values
            .iter()
            .map(|value| vec![OptionPair::new(head.name, *value)])
            .collect();
    }

    let tails = expand(rest);
    let mut sequences = Vec::with_capacity(head.values.len() * tails.len());
    for value in &head.values {
        for tail in &tails {
            let mut options = Vec::with_capacity(tail.len() + 1);
            options.push(OptionPair::new(head.name, *value));
            options.extend(tail.iter().cloned());
            sequences.push(options);
        }
    }
    sequences
}

fn live_pairs<'a>(ready: &[ReadyDimension<'a>]) -> HashSet<(&'a str, &'a str)> {
    ready
        .iter()
        .flat_map(|dimension| {
            dimension
                .values
                .iter()
                .map(move |value| (dimension.name, *value))
        })
        .collect()
}

/// Every pair must name a live dimension and one of its current values.
///
/// `expand` only builds pairs from `ready`, so this never rejects its output;
/// it re-checks membership by name after expansion and is the guard any
/// other source of pairs has to pass.
fn resolves_against(options: &[OptionPair], live: &HashSet<(&str, &str)>) -> bool {
    options
        .iter()
        .all(|pair| live.contains(&(pair.key.as_str(), pair.value.as_str())))
}

#[cfg(test)]
#[path = "generator_test.rs"]
mod tests;
