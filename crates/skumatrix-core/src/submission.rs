//! Payload handed to the persistence layer when a product is saved.
//!
//! Only included combinations are forwarded. Translating dimension and
//! option names into backend identifiers happens on the receiving side.

use serde::{Deserialize, Serialize};

use crate::combination::{Combination, OptionPair};
use crate::dimensions::is_blank;
use crate::error::SubmissionError;

/// Lowest price the console accepts for a variant.
pub const MIN_PRICE: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantSubmission {
    pub options: Vec<OptionPair>,
    pub price: f64,
}

/// Builds the save payload from the included combinations.
///
/// # Errors
///
/// Returns [`SubmissionError::NothingIncluded`] if no combination is
/// included, [`SubmissionError::PriceBelowMinimum`] for a price under
/// `min_price` (or not finite), and [`SubmissionError::BlankPair`] for a
/// combination with no pairs or a blank key/value.
pub fn build_submission(
    combinations: &[Combination],
    min_price: f64,
) -> Result<Vec<VariantSubmission>, SubmissionError> {
    let variants = combinations
        .iter()
        .filter(|combination| combination.included)
        .map(|combination| {
            validate(combination, min_price)?;
            Ok(VariantSubmission {
                options: combination.options.clone(),
                price: combination.price,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if variants.is_empty() {
        return Err(SubmissionError::NothingIncluded);
    }

    Ok(variants)
}

fn validate(combination: &Combination, min_price: f64) -> Result<(), SubmissionError> {
    if combination.options.is_empty()
        || combination
            .options
            .iter()
            .any(|pair| is_blank(&pair.key) || is_blank(&pair.value))
    {
        return Err(SubmissionError::BlankPair {
            label: combination.label(),
        });
    }

    if !combination.price.is_finite() || combination.price < min_price {
        return Err(SubmissionError::PriceBelowMinimum {
            label: combination.label(),
            price: combination.price,
            min_price,
        });
    }

    Ok(())
}
