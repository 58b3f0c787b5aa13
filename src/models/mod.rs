pub mod ingredient;
pub mod menu;
pub mod order;

pub use ingredient::{Ingredient, Unit};
pub use menu::{MenuItem, RecipeIngredientLine, RecipeQuantity, ServingStyle, StyleQuantities};
pub use order::{Order, OrderMenuItemSelection, ScaledIngredientResult};
