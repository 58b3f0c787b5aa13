use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{CateringError, Result};
use crate::models::{MenuItem, ServingStyle};

/// Prompt for the client name.
pub fn prompt_client_name() -> Result<String> {
    let input: String = Input::new().with_prompt("Client name").interact_text()?;

    let trimmed = input.trim().to_string();
    if trimmed.is_empty() {
        return Err(CateringError::InvalidInput(
            "Client name must not be empty".to_string(),
        ));
    }

    Ok(trimmed)
}

/// Prompt for an optional event date.
pub fn prompt_event_date() -> Result<Option<String>> {
    let input: String = Input::new()
        .with_prompt("Event date (or press Enter to skip)")
        .allow_empty(true)
        .interact_text()?;

    let trimmed = input.trim();
    Ok(if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    })
}

/// Prompt for the headcount.
///
/// The scaling engine takes the headcount as given, so positivity is
/// enforced here at the input boundary.
pub fn prompt_headcount() -> Result<u32> {
    let input: String = Input::new()
        .with_prompt("How many people is the order for?")
        .default("100".to_string())
        .interact_text()?;

    let people: u32 = input
        .trim()
        .parse()
        .map_err(|_| CateringError::InvalidInput("Invalid number".to_string()))?;

    if people == 0 {
        return Err(CateringError::InvalidInput(
            "Number of people must be positive".to_string(),
        ));
    }

    Ok(people)
}

/// Prompt for the serving style of one selected menu item.
pub fn prompt_serving_style(menu_item_name: &str) -> Result<ServingStyle> {
    let options: Vec<&str> = ServingStyle::ALL.iter().map(|s| s.label()).collect();

    let selection = Select::new()
        .with_prompt(format!("Serving style for '{}'", menu_item_name))
        .items(&options)
        .default(0)
        .interact()?;

    Ok(ServingStyle::ALL[selection])
}

/// Prompt for menu items with fuzzy matching.
///
/// Returns the ids of the chosen menu items, in the order picked.
pub fn prompt_menu_items(available: &[&MenuItem]) -> Result<Vec<String>> {
    let mut chosen: Vec<String> = Vec::new();

    loop {
        let input: String = Input::new()
            .with_prompt("Add a menu item (or press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            break;
        }

        // Try exact match first (case-insensitive)
        let exact_match = available
            .iter()
            .find(|m| m.name.to_lowercase() == input.to_lowercase());

        if let Some(item) = exact_match {
            push_unique(&mut chosen, item);
            continue;
        }

        // Try fuzzy matching
        let mut candidates: Vec<(&MenuItem, f64)> = available
            .iter()
            .map(|m| (*m, jaro_winkler(&m.name.to_lowercase(), &input.to_lowercase())))
            .filter(|(_, score)| *score > 0.7)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        if candidates.is_empty() {
            println!("No matching menu item found for '{}'", input);
            continue;
        }

        if candidates.len() == 1 {
            let item = candidates[0].0;
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", item.name))
                .default(true)
                .interact()?;

            if confirm {
                push_unique(&mut chosen, item);
            }
        } else {
            // Multiple matches - let user select
            let options: Vec<String> = candidates
                .iter()
                .take(5)
                .map(|(m, _)| m.name.clone())
                .collect();

            let mut selection_options = options.clone();
            selection_options.push("None of these".to_string());

            let selection = Select::new()
                .with_prompt("Which did you mean?")
                .items(&selection_options)
                .default(0)
                .interact()?;

            if selection < options.len() {
                push_unique(&mut chosen, candidates[selection].0);
            }
        }
    }

    Ok(chosen)
}

fn push_unique(chosen: &mut Vec<String>, item: &MenuItem) {
    if chosen.iter().any(|id| id == &item.id) {
        println!("'{}' is already on the order", item.name);
    } else {
        println!("Added: {}", item.name);
        chosen.push(item.id.clone());
    }
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Collect the order-level inputs for the order builder.
pub fn collect_order_details() -> Result<(String, Option<String>, u32)> {
    let client_name = prompt_client_name()?;
    let event_date = prompt_event_date()?;
    let headcount = prompt_headcount()?;

    Ok((client_name, event_date, headcount))
}
