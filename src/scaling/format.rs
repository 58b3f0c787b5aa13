use crate::models::Unit;

/// Format a scaled quantity the way kitchen staff read it.
///
/// Kilogram and liter totals split at the gram/milliliter level
/// ("2 kg and 250 gm"); gram, milliliter and piece render as rounded
/// integers; judi renders the bare value with its label.
pub fn format_quantity(quantity: f64, unit: Unit) -> String {
    match unit {
        Unit::Kilogram => split_large_unit(quantity, "kg", "gm"),
        Unit::Liter => split_large_unit(quantity, "ltr", "ml"),
        Unit::Gram => format!("{} gm", quantity.round() as i64),
        Unit::Milliliter => format!("{} ml", quantity.round() as i64),
        Unit::Piece => {
            let n = quantity.round() as i64;
            if n == 1 {
                "1 piece".to_string()
            } else {
                format!("{} pieces", n)
            }
        }
        Unit::Judi => format!("{} judi", quantity),
    }
}

/// Split a large-unit quantity into whole large units plus a small-unit
/// remainder at 1/1000 resolution.
fn split_large_unit(quantity: f64, large: &str, small: &str) -> String {
    let total_small = (quantity * 1000.0).round() as i64;
    let whole = total_small / 1000;
    let rem = total_small % 1000;

    if whole == 0 {
        format!("{} {}", rem, small)
    } else if rem == 0 {
        format!("{} {}", whole, large)
    } else {
        format!("{} {} and {} {}", whole, large, rem, small)
    }
}
