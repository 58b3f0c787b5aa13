use std::collections::HashMap;

use crate::models::{
    Ingredient, OrderMenuItemSelection, RecipeQuantity, ScaledIngredientResult, Unit,
};

/// Quantity per 100 servings assumed for a default ingredient whose
/// catalog record carries no configured value.
pub const DEFAULT_INGREDIENT_FALLBACK: f64 = 12.0;

/// Recipe amounts are authored per this many servings.
pub const SERVINGS_BASIS: f64 = 100.0;

/// Display name substituted when an ingredient reference cannot be
/// resolved.
pub const UNKNOWN_INGREDIENT_NAME: &str = "Unknown Ingredient";

/// Resolves ingredient ids to catalog records.
///
/// A miss is not an error: scaling substitutes a placeholder row and
/// keeps going, so one dangling reference cannot abort an order summary.
pub trait IngredientLookup {
    fn lookup(&self, ingredient_id: &str) -> Option<&Ingredient>;
}

impl IngredientLookup for HashMap<String, Ingredient> {
    fn lookup(&self, ingredient_id: &str) -> Option<&Ingredient> {
        self.get(ingredient_id)
    }
}

/// Round a scaled quantity per the unit's rule: discrete units to whole
/// numbers, continuous units to 2 decimal places.
pub fn round_for_unit(value: f64, unit: Unit) -> f64 {
    if unit.is_discrete() {
        value.round()
    } else {
        (value * 100.0).round() / 100.0
    }
}

/// Insertion-ordered accumulator keyed by ingredient id.
struct Accumulator {
    index: HashMap<String, usize>,
    rows: Vec<ScaledIngredientResult>,
}

impl Accumulator {
    fn new() -> Self {
        Self {
            index: HashMap::new(),
            rows: Vec::new(),
        }
    }

    /// Add one rounded contribution, re-rounding the running total.
    fn add(&mut self, id: &str, name: &str, unit: Unit, rounded: f64, count_contributions: bool) {
        match self.index.get(id) {
            Some(&i) => {
                let row = &mut self.rows[i];
                row.total_quantity = round_for_unit(row.total_quantity + rounded, row.unit);
                if let Some(count) = row.menu_item_count.as_mut() {
                    *count += 1;
                }
            }
            None => {
                self.index.insert(id.to_string(), self.rows.len());
                self.rows.push(ScaledIngredientResult {
                    ingredient_id: id.to_string(),
                    ingredient_name: name.to_string(),
                    unit,
                    total_quantity: rounded,
                    menu_item_count: count_contributions.then_some(1),
                });
            }
        }
    }

    fn into_rows(self) -> Vec<ScaledIngredientResult> {
        self.rows
    }
}

/// Name, unit and configured default for a line, with the catalog-miss
/// placeholder applied at this single call site.
fn resolve_line(
    catalog: &dyn IngredientLookup,
    ingredient_id: &str,
) -> (String, Unit, Option<f64>) {
    match catalog.lookup(ingredient_id) {
        Some(rec) => (rec.name.clone(), rec.unit, rec.default_value),
        None => (UNKNOWN_INGREDIENT_NAME.to_string(), Unit::Piece, None),
    }
}

/// Scale every selection's recipe to the target headcount and aggregate
/// per distinct ingredient.
///
/// Default ingredients contribute their configured catalog value
/// (fallback 12 per 100 servings) regardless of serving style; all other
/// lines contribute the per-style amount matching the selection. Each
/// contribution is rounded per-unit before it is added, and the running
/// total is re-rounded after every add. Existing order reports were
/// built on those totals, so the small accumulation bias across many
/// menu items is kept as-is.
///
/// `number_of_people` is taken as given; callers validate positivity at
/// the input boundary.
pub fn scale(
    selections: &[OrderMenuItemSelection],
    number_of_people: f64,
    catalog: &dyn IngredientLookup,
) -> Vec<ScaledIngredientResult> {
    let mut acc = Accumulator::new();

    for selection in selections {
        for line in &selection.ingredients {
            let (name, unit, default_value) = resolve_line(catalog, &line.ingredient_id);

            let per_100 = if line.is_default {
                default_value.unwrap_or(DEFAULT_INGREDIENT_FALLBACK)
            } else {
                line.quantities.for_style(selection.selected_type)
            };

            let scaled = round_for_unit(per_100 * number_of_people / SERVINGS_BASIS, unit);
            acc.add(&line.ingredient_id, &name, unit, scaled, true);
        }
    }

    acc.into_rows()
}

/// Scale with shared-prep awareness.
///
/// Lines carrying dual amount sets use the `single` set when exactly one
/// selection in the order references the ingredient and the reduced
/// `multi` set when two or more do, since batch-prepping several dishes
/// needs less marginal garnish per dish than preparing each alone. Lines
/// with only a flat legacy amount use it as-is; lines with neither
/// contribute nothing.
pub fn scale_with_menu_item_awareness(
    selections: &[OrderMenuItemSelection],
    number_of_people: f64,
    catalog: &dyn IngredientLookup,
) -> Vec<ScaledIngredientResult> {
    // First pass: how many selections reference each ingredient with a
    // usable quantity shape.
    let mut usage: HashMap<&str, u32> = HashMap::new();
    for selection in selections {
        for line in &selection.ingredients {
            if line.recipe_quantity().is_some() {
                *usage.entry(line.ingredient_id.as_str()).or_insert(0) += 1;
            }
        }
    }

    let mut acc = Accumulator::new();

    for selection in selections {
        for line in &selection.ingredients {
            let per_100 = match line.recipe_quantity() {
                Some(RecipeQuantity::Styled { single, multi }) => {
                    let users = usage.get(line.ingredient_id.as_str()).copied().unwrap_or(0);
                    let set = if users > 1 { multi } else { single };
                    set.for_style(selection.selected_type)
                }
                Some(RecipeQuantity::Legacy(value)) => value,
                None => continue,
            };

            let (name, unit, _) = resolve_line(catalog, &line.ingredient_id);
            let scaled = round_for_unit(per_100 * number_of_people / SERVINGS_BASIS, unit);
            acc.add(&line.ingredient_id, &name, unit, scaled, false);
        }
    }

    acc.into_rows()
}
