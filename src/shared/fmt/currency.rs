//! Chart currency formatting.
//!
//! Charts plot prices as fractional gold or silver (`9.8` silver). Tooltips
//! render them back as coin parts (`"9s 80c"`). For exact copper amounts use
//! [`Money`](crate::shared::Money) instead.

use serde::{Deserialize, Serialize};

/// Unit a chart axis is plotted in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurrencyUnit {
    #[default]
    Gold,
    Silver,
    Copper,
}

impl CurrencyUnit {
    /// Copper per one unit.
    pub fn copper_factor(&self) -> u64 {
        match self {
            CurrencyUnit::Gold => 10_000,
            CurrencyUnit::Silver => 100,
            CurrencyUnit::Copper => 1,
        }
    }

    /// Convert a copper amount into this unit for plotting.
    pub fn from_copper(&self, copper: u64) -> f64 {
        copper as f64 / self.copper_factor() as f64
    }
}

/// Render a fractional chart value as coin parts, omitting zero parts.
pub fn format_currency_for_chart(value: f64, unit: CurrencyUnit) -> String {
    match unit {
        CurrencyUnit::Gold => {
            let gold = value.floor();
            let silver = ((value - gold) * 100.0).floor();
            let copper = (((value - gold) * 100.0 - silver) * 100.0).floor();
            join_parts(&[(gold, "g"), (silver, "s"), (copper, "c")])
        }
        CurrencyUnit::Silver => {
            let silver = value.floor();
            let copper = ((value - silver) * 100.0).floor();
            join_parts(&[(silver, "s"), (copper, "c")])
        }
        CurrencyUnit::Copper => format!("{}c", value.floor() as i64),
    }
}

fn join_parts(parts: &[(f64, &str)]) -> String {
    let rendered: Vec<String> = parts
        .iter()
        .filter(|(amount, _)| *amount > 0.0)
        .map(|(amount, suffix)| format!("{}{}", *amount as i64, suffix))
        .collect();

    if rendered.is_empty() {
        "0c".to_string()
    } else {
        rendered.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silver_chart_value() {
        assert_eq!(format_currency_for_chart(9.8, CurrencyUnit::Silver), "9s 80c");
        assert_eq!(format_currency_for_chart(0.25, CurrencyUnit::Silver), "25c");
        assert_eq!(format_currency_for_chart(3.0, CurrencyUnit::Silver), "3s");
    }

    #[test]
    fn test_gold_chart_value() {
        assert_eq!(format_currency_for_chart(1.5, CurrencyUnit::Gold), "1g 50s");
        assert_eq!(format_currency_for_chart(12.0, CurrencyUnit::Gold), "12g");
    }

    #[test]
    fn test_copper_chart_value() {
        assert_eq!(format_currency_for_chart(42.9, CurrencyUnit::Copper), "42c");
    }

    #[test]
    fn test_zero_renders_copper() {
        assert_eq!(format_currency_for_chart(0.0, CurrencyUnit::Gold), "0c");
        assert_eq!(format_currency_for_chart(0.0, CurrencyUnit::Silver), "0c");
        assert_eq!(format_currency_for_chart(0.0, CurrencyUnit::Copper), "0c");
    }

    #[test]
    fn test_from_copper() {
        assert_eq!(CurrencyUnit::Gold.from_copper(25_000), 2.5);
        assert_eq!(CurrencyUnit::Silver.from_copper(980), 9.8);
        assert_eq!(CurrencyUnit::Copper.from_copper(7), 7.0);
    }
}
