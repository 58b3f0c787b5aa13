use crate::models::{Ingredient, MenuItem, Order, ScaledIngredientResult};
use crate::scaling::format_quantity;

/// Display a scaled ingredient summary in a formatted table.
pub fn display_ingredient_summary(results: &[ScaledIngredientResult], number_of_people: u32) {
    if results.is_empty() {
        println!("No ingredients to summarize (order has no selections).");
        return;
    }

    println!();
    println!("=== Ingredient Summary ({} people) ===", number_of_people);
    println!();

    // Find max ingredient name length for alignment
    let max_name_len = results
        .iter()
        .map(|r| r.ingredient_name.len())
        .max()
        .unwrap_or(10);

    for (i, row) in results.iter().enumerate() {
        let count_str = match row.menu_item_count {
            Some(count) if count > 1 => format!("  ({} menu items)", count),
            _ => String::new(),
        };

        println!(
            "{:>3}. {:<width$} - {}{}",
            i + 1,
            row.ingredient_name,
            format_quantity(row.total_quantity, row.unit),
            count_str,
            width = max_name_len
        );
    }

    println!();
    println!("--- Summary ---");
    println!("Distinct ingredients: {}", results.len());
    println!();
}

/// Display catalog ingredients.
pub fn display_ingredients(ingredients: &[&Ingredient]) {
    if ingredients.is_empty() {
        println!("Ingredients: (none)");
        return;
    }

    println!();
    println!("=== Ingredients ({}) ===", ingredients.len());
    println!();

    for ingredient in ingredients {
        let tag = if ingredient.is_default { "  [default]" } else { "" };
        println!("  {}{}", ingredient.debug_string(), tag);
    }

    println!();
}

/// Display menu items with their recipe sizes.
pub fn display_menu_items(items: &[&MenuItem]) {
    if items.is_empty() {
        println!("Menu items: (none)");
        return;
    }

    println!();
    println!("=== Menu items ({}) ===", items.len());
    println!();

    for item in items {
        println!(
            "  {} [{}] - {} ingredients",
            item.name,
            item.id,
            item.ingredients.len()
        );
    }

    println!();
}

/// Display saved orders.
pub fn display_orders(orders: &[Order]) {
    if orders.is_empty() {
        println!("Orders: (none)");
        return;
    }

    println!();
    println!("=== Orders ({}) ===", orders.len());
    println!();

    for order in orders {
        let date_str = match &order.event_date {
            Some(date) => format!(" on {}", date),
            None => String::new(),
        };

        println!(
            "  {} - {}{} - {} people, {} menu items",
            order.id,
            order.client_name,
            date_str,
            order.number_of_people,
            order.selections.len()
        );
    }

    println!();
}
