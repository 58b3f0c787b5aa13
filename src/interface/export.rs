use std::path::Path;

use crate::error::Result;
use crate::models::ScaledIngredientResult;
use crate::scaling::format_quantity;

/// Write a shopping-list CSV, one row per scaled ingredient.
pub fn write_summary_csv(results: &[ScaledIngredientResult], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    // Write header
    wtr.write_record(["ingredient", "quantity", "unit", "formatted"])?;

    for row in results {
        wtr.write_record([
            row.ingredient_name.clone(),
            row.total_quantity.to_string(),
            row.unit.label().to_string(),
            format_quantity(row.total_quantity, row.unit),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Unit;
    use tempfile::NamedTempFile;

    #[test]
    fn test_write_summary_csv() {
        let results = vec![
            ScaledIngredientResult {
                ingredient_id: "besan".to_string(),
                ingredient_name: "Besan".to_string(),
                unit: Unit::Kilogram,
                total_quantity: 12.5,
                menu_item_count: Some(2),
            },
            ScaledIngredientResult {
                ingredient_id: "lemon".to_string(),
                ingredient_name: "Lemon".to_string(),
                unit: Unit::Piece,
                total_quantity: 40.0,
                menu_item_count: Some(1),
            },
        ];

        let file = NamedTempFile::new().unwrap();
        write_summary_csv(&results, file.path()).unwrap();

        let content = std::fs::read_to_string(file.path()).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("ingredient,quantity,unit,formatted"));
        assert_eq!(lines.next(), Some("Besan,12.5,kg,12 kg and 500 gm"));
        assert_eq!(lines.next(), Some("Lemon,40,piece,40 pieces"));
    }
}
