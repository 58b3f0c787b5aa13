use serde::{Deserialize, Serialize};

use crate::models::Unit;

/// The four ways a menu item can be served.
///
/// Stored documents spell the styles with the legacy field names
/// (`chart` is the stored spelling of chaat); any other stored value
/// falls back to [`ServingStyle::OnlyBhajiya`] via [`ServingStyle::from_wire`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ServingStyle {
    /// Bhajiya alone, sold by weight.
    #[default]
    OnlyBhajiya,

    /// Plated dish service where bhajiya is the only fried item.
    DishWithOnlyBhajiya,

    /// Plated dish service without a chaat counter.
    DishWithoutChaat,

    /// Plated dish service with both a chaat counter and bhajiya.
    DishWithChaatAndBhajiya,
}

impl ServingStyle {
    pub const ALL: [ServingStyle; 4] = [
        ServingStyle::OnlyBhajiya,
        ServingStyle::DishWithOnlyBhajiya,
        ServingStyle::DishWithoutChaat,
        ServingStyle::DishWithChaatAndBhajiya,
    ];

    /// Stored document name for this style.
    pub fn wire_name(self) -> &'static str {
        match self {
            ServingStyle::OnlyBhajiya => "onlyBhajiyaKG",
            ServingStyle::DishWithOnlyBhajiya => "dishWithOnlyBhajiya",
            ServingStyle::DishWithoutChaat => "dishHaveNoChart",
            ServingStyle::DishWithChaatAndBhajiya => "dishHaveChartAndBhajiya",
        }
    }

    /// Parse a stored style name.
    ///
    /// Anything unrecognized falls back to the first style rather than
    /// failing; an order with a stray style value still scales.
    pub fn from_wire(name: &str) -> Self {
        match name {
            "dishWithOnlyBhajiya" => ServingStyle::DishWithOnlyBhajiya,
            "dishHaveNoChart" => ServingStyle::DishWithoutChaat,
            "dishHaveChartAndBhajiya" => ServingStyle::DishWithChaatAndBhajiya,
            _ => ServingStyle::OnlyBhajiya,
        }
    }

    /// Human label for prompts and tables.
    pub fn label(self) -> &'static str {
        match self {
            ServingStyle::OnlyBhajiya => "Only bhajiya (by weight)",
            ServingStyle::DishWithOnlyBhajiya => "Dish with only bhajiya",
            ServingStyle::DishWithoutChaat => "Dish without chaat counter",
            ServingStyle::DishWithChaatAndBhajiya => "Dish with chaat and bhajiya",
        }
    }
}

impl From<String> for ServingStyle {
    fn from(name: String) -> Self {
        ServingStyle::from_wire(&name)
    }
}

impl From<ServingStyle> for String {
    fn from(style: ServingStyle) -> Self {
        style.wire_name().to_string()
    }
}

/// Per-style amounts, each meaning "quantity per 100 servings".
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleQuantities {
    #[serde(rename = "onlyBhajiyaKG", default)]
    pub only_bhajiya_kg: f64,

    #[serde(rename = "dishWithOnlyBhajiya", default)]
    pub dish_with_only_bhajiya: f64,

    #[serde(rename = "dishHaveNoChart", default)]
    pub dish_have_no_chart: f64,

    #[serde(rename = "dishHaveChartAndBhajiya", default)]
    pub dish_have_chart_and_bhajiya: f64,
}

impl StyleQuantities {
    /// Amount per 100 servings for the given serving style.
    pub fn for_style(&self, style: ServingStyle) -> f64 {
        match style {
            ServingStyle::OnlyBhajiya => self.only_bhajiya_kg,
            ServingStyle::DishWithOnlyBhajiya => self.dish_with_only_bhajiya,
            ServingStyle::DishWithoutChaat => self.dish_have_no_chart,
            ServingStyle::DishWithChaatAndBhajiya => self.dish_have_chart_and_bhajiya,
        }
    }

    /// Uniform amounts across all four styles.
    pub fn uniform(value: f64) -> Self {
        Self {
            only_bhajiya_kg: value,
            dish_with_only_bhajiya: value,
            dish_have_no_chart: value,
            dish_have_chart_and_bhajiya: value,
        }
    }
}

/// Quantity shape of a recipe line for shared-prep aware scaling.
///
/// Styled lines carry one amount set for when a single menu item in the
/// order uses the ingredient and a reduced set for when several share it.
/// Legacy lines carry one flat per-100 amount used as-is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RecipeQuantity {
    Legacy(f64),
    Styled {
        single: StyleQuantities,
        multi: StyleQuantities,
    },
}

/// One ingredient entry inside a menu item's recipe.
///
/// Orders embed snapshot copies of these lines, so `ingredient_name` and
/// `unit` record what was current at order time even if the catalog
/// changes later.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeIngredientLine {
    pub ingredient_id: String,

    #[serde(default)]
    pub ingredient_name: String,

    pub unit: Unit,

    #[serde(rename = "isDefaultIngredient", default)]
    pub is_default: bool,

    #[serde(default)]
    pub quantities: StyleQuantities,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub single_items: Option<StyleQuantities>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multi_items: Option<StyleQuantities>,

    #[serde(rename = "quantityPer100", default, skip_serializing_if = "Option::is_none")]
    pub quantity_per_100: Option<f64>,
}

impl RecipeIngredientLine {
    /// Shape of this line for shared-prep aware scaling, if any.
    ///
    /// Both `single_items` and `multi_items` must be present for the
    /// styled shape; otherwise the flat legacy amount applies.
    pub fn recipe_quantity(&self) -> Option<RecipeQuantity> {
        match (self.single_items, self.multi_items, self.quantity_per_100) {
            (Some(single), Some(multi), _) => Some(RecipeQuantity::Styled { single, multi }),
            (_, _, Some(value)) => Some(RecipeQuantity::Legacy(value)),
            _ => None,
        }
    }
}

/// A menu item and its recipe.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub name: String,

    #[serde(default)]
    pub ingredients: Vec<RecipeIngredientLine>,
}
