use clap::Parser;
use std::path::Path;

use catering_planner_rs::cli::{Cli, Command};
use catering_planner_rs::error::{CateringError, Result};
use catering_planner_rs::interface::{
    collect_order_details, display_ingredient_summary, display_ingredients, display_menu_items,
    display_orders, prompt_menu_items, prompt_serving_style, prompt_yes_no, write_summary_csv,
};
use catering_planner_rs::models::Order;
use catering_planner_rs::scaling::{scale, scale_with_menu_item_awareness};
use catering_planner_rs::state::{CateringStateManager, load_state, save_state};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Order => cmd_order(&cli.file),
        Command::Summary { id, smart, csv } => cmd_summary(&cli.file, &id, smart, csv.as_deref()),
        Command::List {
            ingredients,
            menu,
            orders,
        } => cmd_list(&cli.file, ingredients, menu, orders),
    }
}

/// Build a new order interactively and show its ingredient summary.
fn cmd_order(file_path: &str) -> Result<()> {
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Catering state file not found: {}", file_path);
        eprintln!("Please ensure catering_state.json exists in the current directory.");
        return Ok(());
    }

    let state = load_state(path)?;
    let mut manager = CateringStateManager::new(state);

    println!(
        "Loaded {} ingredients, {} menu items, {} saved orders",
        manager.ingredient_count(),
        manager.menu_item_count(),
        manager.order_count()
    );
    println!();

    let (client_name, event_date, headcount) = collect_order_details()?;
    println!();

    let selections = {
        let menu_items = manager.all_menu_items();
        if menu_items.is_empty() {
            return Err(CateringError::NoMenuItems);
        }

        display_menu_items(&menu_items);

        let chosen_ids = prompt_menu_items(&menu_items)?;
        if chosen_ids.is_empty() {
            println!("No menu items selected; nothing to scale.");
            return Ok(());
        }

        let mut selections = Vec::new();
        for id in &chosen_ids {
            let item = manager
                .menu_item(id)
                .ok_or_else(|| CateringError::MenuItemNotFound(id.clone()))?;
            let style = prompt_serving_style(&item.name)?;

            let selection = manager
                .selection_from_menu_item(id, style)
                .ok_or_else(|| CateringError::MenuItemNotFound(id.clone()))?;
            selections.push(selection);
        }
        selections
    };

    let smart = prompt_yes_no("Use shared-prep aware scaling?", false)?;

    let results = if smart {
        scale_with_menu_item_awareness(&selections, headcount as f64, &manager)
    } else {
        scale(&selections, headcount as f64, &manager)
    };

    display_ingredient_summary(&results, headcount);

    let save = prompt_yes_no("Save this order?", true)?;
    if save {
        let order_id = manager.next_order_id();
        manager.add_order(Order {
            id: order_id.clone(),
            client_name,
            event_date,
            number_of_people: headcount,
            selections,
        });

        save_state(path, &manager.to_state())?;
        println!("Order saved as {}.", order_id);
    }

    Ok(())
}

/// Recompute the ingredient summary of a saved order.
fn cmd_summary(file_path: &str, order_id: &str, smart: bool, csv: Option<&str>) -> Result<()> {
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Catering state file not found: {}", file_path);
        return Ok(());
    }

    let state = load_state(path)?;
    let manager = CateringStateManager::new(state);

    let order = manager
        .find_order(order_id)
        .ok_or_else(|| CateringError::OrderNotFound(order_id.to_string()))?;

    println!(
        "Order {} - {} - {} people",
        order.id, order.client_name, order.number_of_people
    );

    let results = if smart {
        scale_with_menu_item_awareness(&order.selections, order.number_of_people as f64, &manager)
    } else {
        scale(&order.selections, order.number_of_people as f64, &manager)
    };

    display_ingredient_summary(&results, order.number_of_people);

    if let Some(csv_path) = csv {
        write_summary_csv(&results, Path::new(csv_path))?;
        println!("Summary exported to {}", csv_path);
    }

    Ok(())
}

/// List stored ingredients, menu items and orders.
fn cmd_list(file_path: &str, ingredients: bool, menu: bool, orders: bool) -> Result<()> {
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Catering state file not found: {}", file_path);
        return Ok(());
    }

    let state = load_state(path)?;
    let manager = CateringStateManager::new(state);

    // Bare `list` shows everything.
    let all = !ingredients && !menu && !orders;

    if ingredients || all {
        display_ingredients(&manager.all_ingredients());
    }

    if menu || all {
        display_menu_items(&manager.all_menu_items());
    }

    if orders || all {
        display_orders(manager.orders());
    }

    Ok(())
}
