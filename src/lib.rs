pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod scaling;
pub mod state;

pub use error::{CateringError, Result};
pub use models::{
    Ingredient, MenuItem, Order, OrderMenuItemSelection, RecipeIngredientLine,
    ScaledIngredientResult, ServingStyle, StyleQuantities, Unit,
};
