use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use shelfwatch_core::{DomainError, DomainResult, ValueObject};

/// A catalog entry: what it is called, when it expires, what it costs.
///
/// Records are immutable once built. Construction goes through
/// [`Product::new`] (or deserialization, which applies the same checks), so
/// every `Product` in circulation has a non-blank name and a real calendar
/// date.
///
/// `price` is a whole number of the smallest currency unit (600 means 6.00).
/// Fractional and negative prices are not representable: a serialized
/// `"price": 5.99` is rejected and should be sent as `599`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ProductRecord")]
pub struct Product {
    name: String,
    expiration_date: NaiveDate,
    price: u64, // Price in smallest currency unit (e.g., cents)
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        expiration_date: NaiveDate,
        price: u64,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }

        Ok(Self {
            name,
            expiration_date,
            price,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn expiration_date(&self) -> NaiveDate {
        self.expiration_date
    }

    pub fn price(&self) -> u64 {
        self.price
    }

    /// Whether the product expired strictly before `today`.
    ///
    /// A product expiring on `today` itself is still good for the day.
    pub fn is_outdated(&self, today: NaiveDate) -> bool {
        self.expiration_date < today
    }
}

impl ValueObject for Product {}

/// Unvalidated wire shape of a [`Product`].
#[derive(Deserialize)]
struct ProductRecord {
    name: String,
    expiration_date: NaiveDate,
    price: u64,
}

impl TryFrom<ProductRecord> for Product {
    type Error = DomainError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        Product::new(record.name, record.expiration_date, record.price)
            .map_err(|err| DomainError::invalid_record(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn new_product_exposes_its_fields() {
        let product = Product::new("salmon", date(2022, 2, 10), 600).unwrap();
        assert_eq!(product.name(), "salmon");
        assert_eq!(product.expiration_date(), date(2022, 2, 10));
        assert_eq!(product.price(), 600);
    }

    #[test]
    fn new_product_rejects_empty_name() {
        let err = Product::new("   ", date(2022, 2, 10), 600).unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for empty name"),
        }
        assert!(Product::new("", date(2022, 2, 10), 600).is_err());
    }

    #[test]
    fn duplicate_names_are_allowed() {
        let a = Product::new("duck", date(2022, 2, 1), 160).unwrap();
        let b = Product::new("duck", date(2022, 3, 1), 170).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn is_outdated_uses_strict_comparison() {
        let duck = Product::new("duck", date(2022, 2, 1), 160).unwrap();
        assert!(!duck.is_outdated(date(2022, 1, 31)));
        assert!(!duck.is_outdated(date(2022, 2, 1)));
        assert!(duck.is_outdated(date(2022, 2, 2)));
    }

    #[test]
    fn serializes_with_iso_date() {
        let product = Product::new("chicken", date(2022, 2, 5), 120).unwrap();
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "chicken",
                "expiration_date": "2022-02-05",
                "price": 120
            })
        );
    }

    #[test]
    fn deserialize_applies_construction_rules() {
        let ok: Product = serde_json::from_str(
            r#"{"name":"duck","expiration_date":"2022-02-01","price":160}"#,
        )
        .unwrap();
        assert_eq!(ok, Product::new("duck", date(2022, 2, 1), 160).unwrap());

        let blank = serde_json::from_str::<Product>(
            r#"{"name":" ","expiration_date":"2022-02-01","price":160}"#,
        )
        .unwrap_err();
        assert!(blank.to_string().contains("invalid record"));

        let err = Product::try_from(ProductRecord {
            name: String::new(),
            expiration_date: date(2022, 2, 1),
            price: 160,
        })
        .unwrap_err();
        assert!(matches!(err, DomainError::InvalidRecord(_)));
    }

    #[test]
    fn deserialize_rejects_fractional_and_negative_prices() {
        let fractional = serde_json::from_str::<Product>(
            r#"{"name":"duck","expiration_date":"2022-02-01","price":5.99}"#,
        );
        assert!(fractional.is_err());

        let negative = serde_json::from_str::<Product>(
            r#"{"name":"duck","expiration_date":"2022-02-01","price":-1}"#,
        );
        assert!(negative.is_err());

        let minor_units: Product = serde_json::from_str(
            r#"{"name":"duck","expiration_date":"2022-02-01","price":599}"#,
        )
        .unwrap();
        assert_eq!(minor_units.price(), 599);
    }

    #[test]
    fn deserialize_rejects_missing_or_malformed_dates() {
        let missing =
            serde_json::from_str::<Product>(r#"{"name":"duck","price":160}"#);
        assert!(missing.is_err());

        let malformed = serde_json::from_str::<Product>(
            r#"{"name":"duck","expiration_date":"2022-02-30","price":160}"#,
        );
        assert!(malformed.is_err());
    }
}
