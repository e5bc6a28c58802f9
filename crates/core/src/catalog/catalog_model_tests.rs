//! Tests for catalog domain models.

#[cfg(test)]
mod tests {
    use crate::catalog::{Catalog, Charge, ChargeSet, Product};
    use crate::errors::{Error, ValidationError};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn crepe() -> Product {
        Product::new("Crêpe", dec!(30), dec!(10), dec!(60))
    }

    fn coffee() -> Product {
        Product::new("Café", dec!(12), dec!(3), dec!(40))
    }

    #[test]
    fn test_unit_margin_can_be_negative() {
        let product = Product::new("Loss leader", dec!(5), dec!(10), dec!(10));
        assert_eq!(product.unit_margin(), dec!(-5));
        assert!(product.validate().is_ok());
    }

    #[test]
    fn test_catalog_rejects_duplicate_names() {
        let err = Catalog::new(vec![crepe(), crepe()]).unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::DuplicateEntry(ref name)) if name == "Crêpe"
        ));
    }

    #[test]
    fn test_catalog_rejects_blank_name() {
        let err = Catalog::new(vec![Product::new("  ", dec!(1), dec!(1), dec!(1))]).unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::MissingField(_))
        ));
    }

    #[test]
    fn test_catalog_preserves_insertion_order() {
        let catalog = Catalog::new(vec![coffee(), crepe()]).unwrap();
        let names: Vec<&str> = catalog.names().collect();
        assert_eq!(names, vec!["Café", "Crêpe"]);
        assert_eq!(catalog.total_daily_orders().unwrap(), dec!(100));
        assert_eq!(catalog.get("Crêpe").unwrap().unit_price, dec!(30));
        assert!(catalog.get("Thé").is_none());
    }

    #[test]
    fn test_negative_price_is_invalid() {
        let catalog =
            Catalog::new(vec![Product::new("Crêpe", dec!(-1), dec!(10), dec!(60))]).unwrap();
        assert!(matches!(
            catalog.validate(),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_catalog_deserialization_enforces_unique_names() {
        let payload = json!([
            {"name": "Crêpe", "unitPrice": 30, "unitCost": 10, "dailyOrders": 60},
            {"name": "Crêpe", "unitPrice": 25, "unitCost": 8, "dailyOrders": 10}
        ]);
        let result: Result<Catalog, _> = serde_json::from_value(payload);
        assert!(result.is_err());
    }

    #[test]
    fn test_catalog_serializes_as_product_list() {
        let catalog = Catalog::new(vec![crepe()]).unwrap();
        let value = serde_json::to_value(&catalog).unwrap();
        assert_eq!(value[0]["name"], "Crêpe");
        assert_eq!(value[0]["unitPrice"], json!(30.0));
    }

    #[test]
    fn test_charge_set_insert_replaces_existing_label() {
        let mut charges =
            ChargeSet::from_amounts([("Loyer", dec!(10000)), ("Internet", dec!(500))]).unwrap();
        assert_eq!(charges.insert("Loyer", dec!(9000)), Some(dec!(10000)));
        assert_eq!(charges.insert("Publicité", dec!(500)), None);
        assert_eq!(charges.len(), 3);
        assert_eq!(charges.get("Loyer"), Some(dec!(9000)));
        assert_eq!(charges.total().unwrap(), dec!(10000));
    }

    #[test]
    fn test_charge_set_rejects_duplicate_labels() {
        let err = ChargeSet::new(vec![
            Charge::new("Loyer", dec!(1)),
            Charge::new("Loyer", dec!(2)),
        ])
        .unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::DuplicateEntry(_))
        ));
    }

    #[test]
    fn test_charge_set_rejects_blank_label() {
        let err = ChargeSet::from_amounts([(" ", dec!(100))]).unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::MissingField(_))
        ));
    }

    #[test]
    fn test_total_daily_orders_reports_overflow() {
        let catalog = Catalog::new(vec![
            Product::new("Crêpe", dec!(30), dec!(10), Decimal::MAX),
            Product::new("Café", dec!(12), dec!(3), Decimal::MAX),
        ])
        .unwrap();
        assert!(matches!(
            catalog.total_daily_orders(),
            Err(Error::Unexpected(_))
        ));
    }

    #[test]
    fn test_empty_charge_set_totals_zero() {
        let charges = ChargeSet::default();
        assert!(charges.is_empty());
        assert_eq!(charges.total().unwrap(), dec!(0));
    }

    #[test]
    fn test_negative_charge_is_invalid() {
        let charges = ChargeSet::from_amounts([("Remise", dec!(-100))]).unwrap();
        let err = charges.validate("monthly charge").unwrap_err();
        assert!(err.to_string().contains("Remise"));
    }
}
