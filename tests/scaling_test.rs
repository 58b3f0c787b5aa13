use std::collections::HashMap;

use assert_float_eq::assert_float_absolute_eq;

use catering_planner_rs::models::{
    Ingredient, OrderMenuItemSelection, RecipeIngredientLine, ServingStyle, StyleQuantities, Unit,
};
use catering_planner_rs::scaling::{
    UNKNOWN_INGREDIENT_NAME, format_quantity, scale, scale_with_menu_item_awareness,
};

fn make_ingredient(id: &str, name: &str, unit: Unit) -> Ingredient {
    Ingredient {
        id: id.to_string(),
        name: name.to_string(),
        unit,
        is_default: false,
        default_value: None,
        increment_threshold: None,
        increment_amount: None,
    }
}

fn make_catalog() -> HashMap<String, Ingredient> {
    let mut map = HashMap::new();
    map.insert(
        "onion".to_string(),
        make_ingredient("onion", "Onion", Unit::Kilogram),
    );
    map.insert(
        "oil".to_string(),
        make_ingredient("oil", "Groundnut oil", Unit::Liter),
    );
    map.insert(
        "lemon".to_string(),
        make_ingredient("lemon", "Lemon", Unit::Piece),
    );

    let mut salt = make_ingredient("salt", "Salt", Unit::Gram);
    salt.is_default = true;
    salt.default_value = Some(12.0);
    map.insert("salt".to_string(), salt);

    map
}

fn make_line(id: &str, unit: Unit, per_100: f64) -> RecipeIngredientLine {
    RecipeIngredientLine {
        ingredient_id: id.to_string(),
        ingredient_name: id.to_string(),
        unit,
        is_default: false,
        quantities: StyleQuantities::uniform(per_100),
        single_items: None,
        multi_items: None,
        quantity_per_100: None,
    }
}

fn make_selection(
    style: ServingStyle,
    lines: Vec<RecipeIngredientLine>,
) -> OrderMenuItemSelection {
    OrderMenuItemSelection {
        menu_item_id: "menu-1".to_string(),
        menu_item_name: "Menu item".to_string(),
        selected_type: style,
        ingredients: lines,
    }
}

fn total_of(results: &[catering_planner_rs::models::ScaledIngredientResult], id: &str) -> f64 {
    results
        .iter()
        .find(|r| r.ingredient_id == id)
        .map(|r| r.total_quantity)
        .unwrap_or_else(|| panic!("no result row for {}", id))
}

#[test]
fn test_scale_invariance_for_continuous_units() {
    let catalog = make_catalog();
    let selections = vec![make_selection(
        ServingStyle::OnlyBhajiya,
        vec![
            make_line("onion", Unit::Kilogram, 3.7),
            make_line("oil", Unit::Liter, 1.25),
        ],
    )];

    let at_100 = scale(&selections, 100.0, &catalog);
    let at_200 = scale(&selections, 200.0, &catalog);

    for row in &at_100 {
        let doubled = total_of(&at_200, &row.ingredient_id);
        assert_float_absolute_eq!(doubled, row.total_quantity * 2.0, 0.011);
    }
}

#[test]
fn test_empty_selections_scale_to_nothing() {
    let catalog = make_catalog();

    for people in [1.0, 100.0, 1234.0] {
        assert!(scale(&[], people, &catalog).is_empty());
        assert!(scale_with_menu_item_awareness(&[], people, &catalog).is_empty());
    }
}

#[test]
fn test_default_ingredient_fixed_across_styles() {
    let catalog = make_catalog();

    for style in ServingStyle::ALL {
        let mut line = make_line("salt", Unit::Gram, 0.0);
        line.is_default = true;

        let results = scale(&[make_selection(style, vec![line])], 100.0, &catalog);
        assert_float_absolute_eq!(total_of(&results, "salt"), 12.0);
    }
}

#[test]
fn test_aggregation_across_menu_items() {
    let catalog = make_catalog();
    let selections = vec![
        make_selection(
            ServingStyle::OnlyBhajiya,
            vec![make_line("onion", Unit::Kilogram, 5.0)],
        ),
        make_selection(
            ServingStyle::OnlyBhajiya,
            vec![make_line("onion", Unit::Kilogram, 5.0)],
        ),
    ];

    let results = scale(&selections, 100.0, &catalog);
    assert_eq!(results.len(), 1);
    assert_float_absolute_eq!(total_of(&results, "onion"), 10.0);
    assert_eq!(results[0].menu_item_count, Some(2));
}

#[test]
fn test_dual_value_single_vs_multi_selection() {
    let catalog = make_catalog();

    let mut shared = make_line("onion", Unit::Kilogram, 0.0);
    shared.single_items = Some(StyleQuantities::uniform(10.0));
    shared.multi_items = Some(StyleQuantities::uniform(7.0));

    // Alone in the order: the single-item amounts apply.
    let alone = vec![make_selection(ServingStyle::OnlyBhajiya, vec![shared.clone()])];
    let results = scale_with_menu_item_awareness(&alone, 100.0, &catalog);
    assert_float_absolute_eq!(total_of(&results, "onion"), 10.0);

    // A second selection sharing the ingredient flips both to multi.
    let shared_twice = vec![
        make_selection(ServingStyle::OnlyBhajiya, vec![shared.clone()]),
        make_selection(ServingStyle::OnlyBhajiya, vec![shared]),
    ];
    let results = scale_with_menu_item_awareness(&shared_twice, 100.0, &catalog);
    assert_float_absolute_eq!(total_of(&results, "onion"), 14.0);
}

#[test]
fn test_rounding_by_unit() {
    let catalog = make_catalog();
    let selections = vec![make_selection(
        ServingStyle::OnlyBhajiya,
        vec![
            make_line("lemon", Unit::Piece, 3.6),
            make_line("onion", Unit::Kilogram, 3.456),
        ],
    )];

    let results = scale(&selections, 100.0, &catalog);
    assert_float_absolute_eq!(total_of(&results, "lemon"), 4.0);
    assert_float_absolute_eq!(total_of(&results, "onion"), 3.46);
}

#[test]
fn test_missing_ingredient_graceful_fallback() {
    let catalog = make_catalog();
    let selections = vec![make_selection(
        ServingStyle::OnlyBhajiya,
        vec![make_line("no-such-id", Unit::Kilogram, 4.0)],
    )];

    let results = scale(&selections, 100.0, &catalog);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].ingredient_name, UNKNOWN_INGREDIENT_NAME);
    assert_eq!(results[0].unit, Unit::Piece);
    assert_float_absolute_eq!(results[0].total_quantity, 4.0);
}

#[test]
fn test_format_quantity_contract() {
    assert_eq!(format_quantity(1.25, Unit::Kilogram), "1 kg and 250 gm");
    assert_eq!(format_quantity(12.0, Unit::Kilogram), "12 kg");
    assert_eq!(format_quantity(0.8, Unit::Kilogram), "800 gm");
}
