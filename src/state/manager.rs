use std::collections::HashMap;

use crate::models::{Ingredient, MenuItem, Order, OrderMenuItemSelection, ServingStyle};
use crate::scaling::IngredientLookup;
use crate::state::CateringState;

/// In-memory view of the catering state: ingredient catalog, menu book
/// and saved orders.
pub struct CateringStateManager {
    /// Catalog ingredients keyed by id.
    ingredients: HashMap<String, Ingredient>,

    /// Menu items keyed by id.
    menu_items: HashMap<String, MenuItem>,

    orders: Vec<Order>,
}

impl CateringStateManager {
    /// Create a manager from a loaded state document.
    pub fn new(state: CateringState) -> Self {
        let mut ingredients = HashMap::new();
        for ingredient in state.ingredients {
            ingredients.insert(ingredient.id.clone(), ingredient);
        }

        let mut menu_items = HashMap::new();
        for item in state.menu_items {
            menu_items.insert(item.id.clone(), item);
        }

        Self {
            ingredients,
            menu_items,
            orders: state.orders,
        }
    }

    /// Get a catalog ingredient by id.
    pub fn ingredient(&self, id: &str) -> Option<&Ingredient> {
        self.ingredients.get(id)
    }

    /// Get a menu item by id.
    pub fn menu_item(&self, id: &str) -> Option<&MenuItem> {
        self.menu_items.get(id)
    }

    /// All catalog ingredients, sorted by name for display.
    pub fn all_ingredients(&self) -> Vec<&Ingredient> {
        let mut list: Vec<&Ingredient> = self.ingredients.values().collect();
        list.sort_by(|a, b| a.name.cmp(&b.name));
        list
    }

    /// All menu items, sorted by name for display.
    pub fn all_menu_items(&self) -> Vec<&MenuItem> {
        let mut list: Vec<&MenuItem> = self.menu_items.values().collect();
        list.sort_by(|a, b| a.name.cmp(&b.name));
        list
    }

    /// Saved orders, oldest first.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Find a saved order by id.
    pub fn find_order(&self, id: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == id)
    }

    /// Append a new order.
    pub fn add_order(&mut self, order: Order) {
        self.orders.push(order);
    }

    /// Allocate the next sequential order id.
    pub fn next_order_id(&self) -> String {
        let max = self
            .orders
            .iter()
            .filter_map(|o| o.id.strip_prefix("order-"))
            .filter_map(|n| n.parse::<u32>().ok())
            .max()
            .unwrap_or(0);
        format!("order-{:04}", max + 1)
    }

    /// Snapshot a menu item's recipe into an order selection.
    ///
    /// The returned selection owns a copy of the recipe lines, so later
    /// menu edits never touch saved orders.
    pub fn selection_from_menu_item(
        &self,
        menu_item_id: &str,
        style: ServingStyle,
    ) -> Option<OrderMenuItemSelection> {
        self.menu_item(menu_item_id).map(|item| OrderMenuItemSelection {
            menu_item_id: item.id.clone(),
            menu_item_name: item.name.clone(),
            selected_type: style,
            ingredients: item.ingredients.clone(),
        })
    }

    /// Convert back to the serializable state document.
    pub fn to_state(&self) -> CateringState {
        CateringState {
            ingredients: self.all_ingredients().into_iter().cloned().collect(),
            menu_items: self.all_menu_items().into_iter().cloned().collect(),
            orders: self.orders.clone(),
        }
    }

    pub fn ingredient_count(&self) -> usize {
        self.ingredients.len()
    }

    pub fn menu_item_count(&self) -> usize {
        self.menu_items.len()
    }

    pub fn order_count(&self) -> usize {
        self.orders.len()
    }
}

impl IngredientLookup for CateringStateManager {
    fn lookup(&self, ingredient_id: &str) -> Option<&Ingredient> {
        self.ingredients.get(ingredient_id)
    }
}
