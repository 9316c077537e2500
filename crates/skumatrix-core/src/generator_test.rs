use super::*;

// -----------------------------------------------------------------------
// helpers
// -----------------------------------------------------------------------

fn color_size() -> Vec<Dimension> {
    vec![
        Dimension::with_options("Color", ["Red", "Blue"]),
        Dimension::with_options("Size", ["S", "M"]),
    ]
}

fn labels(combinations: &[Combination]) -> Vec<String> {
    combinations.iter().map(Combination::label).collect()
}

fn find<'a>(combinations: &'a [Combination], values: &[&str]) -> &'a Combination {
    let key = CombinationKey::new(values.iter().copied());
    combinations
        .iter()
        .find(|c| key.matches(&c.options))
        .unwrap_or_else(|| panic!("no combination for {values:?}"))
}

fn set(combinations: &mut [Combination], values: &[&str], price: f64, included: bool) {
    let key = CombinationKey::new(values.iter().copied());
    for combination in combinations.iter_mut().filter(|c| key.matches(&c.options)) {
        combination.price = price;
        combination.included = included;
    }
}

// -----------------------------------------------------------------------
// expansion
// -----------------------------------------------------------------------

#[test]
fn no_dimensions_yields_nothing() {
    assert!(generate(&[], &[]).is_empty());
}

#[test]
fn single_dimension_yields_one_pair_each() {
    let dimensions = vec![Dimension::with_options("Color", ["Red", "Blue"])];
    let combinations = generate(&dimensions, &[]);
    assert_eq!(labels(&combinations), vec!["Red", "Blue"]);
    assert!(combinations.iter().all(|c| c.options.len() == 1));
    assert_eq!(combinations[0].options[0], OptionPair::new("Color", "Red"));
}

#[test]
fn color_size_example_in_declaration_order() {
    let combinations = generate(&color_size(), &[]);

    let expected = vec![
        vec![OptionPair::new("Color", "Red"), OptionPair::new("Size", "S")],
        vec![OptionPair::new("Color", "Red"), OptionPair::new("Size", "M")],
        vec![OptionPair::new("Color", "Blue"), OptionPair::new("Size", "S")],
        vec![OptionPair::new("Color", "Blue"), OptionPair::new("Size", "M")],
    ];
    let actual: Vec<Vec<OptionPair>> = combinations.iter().map(|c| c.options.clone()).collect();
    assert_eq!(actual, expected);

    for combination in &combinations {
        assert!((combination.price - DEFAULT_PRICE).abs() < f64::EPSILON);
        assert!(!combination.included);
    }
}

#[test]
fn cardinality_is_product_of_option_counts() {
    let dimensions = vec![
        Dimension::with_options("Color", ["Red", "Blue", "Green"]),
        Dimension::with_options("Size", ["S", "M"]),
        Dimension::with_options("Material", ["Cotton", "Wool", "Linen", "Silk"]),
    ];
    let combinations = generate(&dimensions, &[]);
    assert_eq!(combinations.len(), 3 * 2 * 4);

    for combination in &combinations {
        let keys: Vec<&str> = combination.options.iter().map(|p| p.key.as_str()).collect();
        assert_eq!(keys, vec!["Color", "Size", "Material"]);
    }
}

#[test]
fn last_dimension_varies_fastest() {
    let dimensions = vec![
        Dimension::with_options("A", ["a1", "a2"]),
        Dimension::with_options("B", ["b1", "b2"]),
        Dimension::with_options("C", ["c1", "c2"]),
    ];
    let combinations = generate(&dimensions, &[]);
    assert_eq!(
        labels(&combinations)[..4],
        [
            "a1 / b1 / c1",
            "a1 / b1 / c2",
            "a1 / b2 / c1",
            "a1 / b2 / c2"
        ]
    );
}

#[test]
fn unnamed_dimension_is_skipped() {
    let mut dimensions = color_size();
    dimensions.insert(1, Dimension::with_options("", ["Cotton"]));
    let combinations = generate(&dimensions, &[]);
    assert_eq!(combinations.len(), 4);
    assert!(combinations.iter().all(|c| c.options.len() == 2));
}

#[test]
fn dimension_with_only_entry_slot_is_dropped_entirely() {
    let mut dimensions = color_size();
    let mut pending = Dimension::empty();
    pending.name = "Material".to_string();
    dimensions.push(pending);

    let combinations = generate(&dimensions, &[]);
    assert_eq!(combinations.len(), 4);
    assert!(combinations
        .iter()
        .all(|c| c.options.iter().all(|p| p.key != "Material")));
}

#[test]
fn blank_options_never_appear() {
    let combinations = generate(&color_size(), &[]);
    assert!(combinations
        .iter()
        .all(|c| c.options.iter().all(|p| !p.value.is_empty())));
}

// -----------------------------------------------------------------------
// carry-over
// -----------------------------------------------------------------------

#[test]
fn regeneration_is_idempotent() {
    let dimensions = color_size();
    let mut first = generate(&dimensions, &[]);
    set(&mut first, &["Blue", "M"], 3.5, true);

    let second = generate(&dimensions, &first);
    let third = generate(&dimensions, &second);
    assert_eq!(first, second);
    assert_eq!(second, third);
}

#[test]
fn adding_option_preserves_existing_metadata() {
    let mut dimensions = color_size();
    let mut previous = generate(&dimensions, &[]);
    set(&mut previous, &["Red", "S"], 9.99, true);

    dimensions[1] = Dimension::with_options("Size", ["S", "M", "L"]);
    let combinations = generate(&dimensions, &previous);

    assert_eq!(combinations.len(), 6);
    let red_small = find(&combinations, &["Red", "S"]);
    assert!((red_small.price - 9.99).abs() < f64::EPSILON);
    assert!(red_small.included);

    for values in [["Red", "L"], ["Blue", "L"], ["Blue", "S"], ["Red", "M"]] {
        let combination = find(&combinations, &values);
        assert!((combination.price - DEFAULT_PRICE).abs() < f64::EPSILON);
        assert!(!combination.included);
    }
}

#[test]
fn renaming_option_value_resets_metadata() {
    let mut dimensions = color_size();
    let mut previous = generate(&dimensions, &[]);
    set(&mut previous, &["Red", "S"], 9.99, true);

    dimensions[0].options[0].name = "Crimson".to_string();
    let combinations = generate(&dimensions, &previous);

    let crimson_small = find(&combinations, &["Crimson", "S"]);
    assert!((crimson_small.price - DEFAULT_PRICE).abs() < f64::EPSILON);
    assert!(!crimson_small.included);
    assert!(combinations.iter().all(|c| c.options[0].value != "Red"));
}

#[test]
fn renaming_dimension_keeps_metadata() {
    let mut dimensions = color_size();
    let mut previous = generate(&dimensions, &[]);
    set(&mut previous, &["Blue", "S"], 2.0, true);

    dimensions[0].name = "Colour".to_string();
    let combinations = generate(&dimensions, &previous);

    let blue_small = find(&combinations, &["Blue", "S"]);
    assert_eq!(blue_small.options[0].key, "Colour");
    assert!((blue_small.price - 2.0).abs() < f64::EPSILON);
    assert!(blue_small.included);
}

#[test]
fn adding_dimension_changes_keys() {
    let mut dimensions = color_size();
    let mut previous = generate(&dimensions, &[]);
    set(&mut previous, &["Red", "S"], 9.99, true);

    dimensions.push(Dimension::with_options("Material", ["Cotton"]));
    let combinations = generate(&dimensions, &previous);

    let extended = find(&combinations, &["Red", "S", "Cotton"]);
    assert!((extended.price - DEFAULT_PRICE).abs() < f64::EPSILON);
    assert!(!extended.included);
}

#[test]
fn first_duplicate_in_previous_wins() {
    let dimensions = vec![Dimension::with_options("Color", ["Red"])];
    let mut first = Combination::new(vec![OptionPair::new("Color", "Red")]);
    first.price = 5.0;
    let mut second = first.clone();
    second.price = 7.0;

    let combinations = generate(&dimensions, &[first, second]);
    assert!((combinations[0].price - 5.0).abs() < f64::EPSILON);
}

#[test]
fn resolves_against_rejects_stale_pairs() {
    let dimensions = color_size();
    let ready = ready_dimensions(&dimensions);
    let live = live_pairs(&ready);

    assert!(resolves_against(
        &[OptionPair::new("Color", "Red"), OptionPair::new("Size", "M")],
        &live
    ));
    assert!(!resolves_against(
        &[OptionPair::new("Color", "Green"), OptionPair::new("Size", "M")],
        &live
    ));
    assert!(!resolves_against(&[OptionPair::new("Colour", "Red")], &live));
}

#[test]
fn stale_previous_entries_are_never_emitted() {
    let mut green = Combination::new(vec![
        OptionPair::new("Color", "Green"),
        OptionPair::new("Size", "S"),
    ]);
    green.price = 4.0;
    green.included = true;

    let combinations = generate(&color_size(), &[green]);
    assert_eq!(combinations.len(), 4);
    assert!(combinations
        .iter()
        .all(|c| c.options.iter().all(|pair| pair.value != "Green")));
    assert!(combinations.iter().all(|c| !c.included));
}
