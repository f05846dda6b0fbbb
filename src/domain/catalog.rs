use super::money::Money;
use crate::error::{PosError, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// A purchasable medicine and its unit price.
#[derive(Debug, Clone, PartialEq)]
pub struct Medicine {
    pub name: String,
    pub unit_price: Money,
}

impl Medicine {
    pub fn new(name: impl Into<String>, unit_price: Money) -> Result<Self> {
        if unit_price.is_negative() {
            return Err(PosError::ValidationError(
                "Unit price must not be negative".to_string(),
            ));
        }
        Ok(Self {
            name: name.into(),
            unit_price,
        })
    }

    /// Whether `name` refers to this medicine.
    pub fn is_named(&self, name: &str) -> bool {
        names_match(&self.name, name)
    }
}

/// Case-insensitive comparison that also requires equal length, so
/// "bioflu" matches "BioFlu" but not "bioflux".
pub fn names_match(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

/// The ordered, read-only list of medicines on sale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    medicines: Vec<Medicine>,
}

impl Catalog {
    /// Builds a catalog from `(name, unit price)` pairs, keeping their order.
    pub fn from_prices(entries: &[(&str, Decimal)]) -> Result<Self> {
        let medicines = entries
            .iter()
            .map(|&(name, price)| Medicine::new(name, Money::new(price)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { medicines })
    }

    /// The six medicines stocked by the counter, in display order.
    pub fn seeded() -> Result<Self> {
        Self::from_prices(&[
            ("Bioflu", dec!(9.00)),
            ("Biogesic", dec!(4.75)),
            ("Neozep", dec!(6.70)),
            ("Alaxan", dec!(8.95)),
            ("Medicol", dec!(6.75)),
            ("Liveraide", dec!(21.17)),
        ])
    }

    /// Returns the first medicine whose name matches `name`.
    pub fn lookup(&self, name: &str) -> Option<&Medicine> {
        self.medicines.iter().find(|m| m.is_named(name))
    }

    pub fn medicines(&self) -> &[Medicine] {
        &self.medicines
    }
}
