pub mod engine;
pub mod format;

pub use engine::{
    DEFAULT_INGREDIENT_FALLBACK, IngredientLookup, SERVINGS_BASIS, UNKNOWN_INGREDIENT_NAME,
    round_for_unit, scale, scale_with_menu_item_awareness,
};
pub use format::format_quantity;
