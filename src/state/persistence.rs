use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{Ingredient, MenuItem, Order};

/// On-disk document holding the whole catering state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CateringState {
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,

    #[serde(default)]
    pub menu_items: Vec<MenuItem>,

    #[serde(default)]
    pub orders: Vec<Order>,
}

/// Load the state file.
///
/// Catalog collections are deduplicated by id (last occurrence wins,
/// original position kept).
pub fn load_state<P: AsRef<Path>>(path: P) -> Result<CateringState> {
    let content = fs::read_to_string(path)?;
    let mut state: CateringState = serde_json::from_str(&content)?;

    state.ingredients = dedup_by_id(state.ingredients, |i| i.id.clone());
    state.menu_items = dedup_by_id(state.menu_items, |m| m.id.clone());

    Ok(state)
}

/// Save the state file as pretty JSON.
pub fn save_state<P: AsRef<Path>>(path: P, state: &CateringState) -> Result<()> {
    let json = serde_json::to_string_pretty(state)?;
    fs::write(path, json)?;
    Ok(())
}

fn dedup_by_id<T>(items: Vec<T>, key: impl Fn(&T) -> String) -> Vec<T> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut out: Vec<T> = Vec::new();

    for item in items {
        match seen.get(&key(&item)) {
            Some(&i) => out[i] = item,
            None => {
                seen.insert(key(&item), out.len());
                out.push(item);
            }
        }
    }

    out
}
