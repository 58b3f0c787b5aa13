use serde::{Deserialize, Serialize};

/// Measurement unit for ingredient quantities.
///
/// Gram/kilogram/milliliter/liter are continuous; piece and judi (a tied
/// market bundle, used for leafy greens and herbs) are counted whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Gram,
    Kilogram,
    Milliliter,
    Liter,
    Piece,
    Judi,
}

impl Unit {
    /// Whether quantities in this unit are counted in whole units.
    #[inline]
    pub fn is_discrete(self) -> bool {
        matches!(self, Unit::Piece | Unit::Judi)
    }

    /// Short label used in tables and CSV output.
    pub fn label(self) -> &'static str {
        match self {
            Unit::Gram => "gm",
            Unit::Kilogram => "kg",
            Unit::Milliliter => "ml",
            Unit::Liter => "ltr",
            Unit::Piece => "piece",
            Unit::Judi => "judi",
        }
    }
}

/// A catalog ingredient record.
///
/// Default ingredients (oil, salt, garnish masala, ...) are dosed by
/// `default_value` per 100 servings regardless of serving style. The
/// increment fields are stepper hints for authoring forms; scaling never
/// reads them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub id: String,
    pub name: String,
    pub unit: Unit,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub increment_threshold: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub increment_amount: Option<f64>,
}

impl Ingredient {
    /// Debug string for listings.
    pub fn debug_string(&self) -> String {
        let default_part = match self.default_value {
            Some(v) => format!(", default {} {}/100", v, self.unit.label()),
            None => String::new(),
        };
        format!("{} [{}]{}", self.name, self.unit.label(), default_part)
    }
}
