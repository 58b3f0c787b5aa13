use serde::{Deserialize, Serialize};

use crate::models::{RecipeIngredientLine, ServingStyle, Unit};

/// One menu item as chosen within a specific order.
///
/// `ingredients` is a snapshot of the menu item's recipe taken when the
/// order was created; later menu edits do not touch saved orders. A
/// selection stored without an ingredient list deserializes as empty and
/// simply contributes nothing when scaled.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderMenuItemSelection {
    pub menu_item_id: String,

    #[serde(default)]
    pub menu_item_name: String,

    #[serde(default)]
    pub selected_type: ServingStyle,

    #[serde(default)]
    pub ingredients: Vec<RecipeIngredientLine>,
}

/// A saved catering order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub client_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_date: Option<String>,

    pub number_of_people: u32,

    #[serde(default)]
    pub selections: Vec<OrderMenuItemSelection>,
}

/// One row of scaled output: the total of a distinct ingredient across
/// every selection in an order.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaledIngredientResult {
    pub ingredient_id: String,
    pub ingredient_name: String,
    pub unit: Unit,

    /// Total in the unit's base magnitude, rounded per the unit's rule.
    pub total_quantity: f64,

    /// How many recipe lines contributed (basic policy only).
    pub menu_item_count: Option<u32>,
}
