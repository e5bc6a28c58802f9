//! Tests for scenario evaluation and loading.

#[cfg(test)]
mod tests {
    use crate::catalog::{Catalog, ChargeSet, Product};
    use crate::errors::Error;
    use crate::investment::Payback;
    use crate::scenario::{Scenario, ScenarioService, ScenarioServiceTrait};
    use crate::simulation::{Metric, SimulationParameters};
    use crate::sweep::{ProductMix, UnitRange};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::io::Write;

    fn assert_close(actual: Decimal, expected: Decimal) {
        assert!(
            (actual - expected).abs() < dec!(0.01),
            "expected {} to be close to {}",
            actual,
            expected
        );
    }

    #[test]
    fn test_default_scenario_table() {
        let scenario = Scenario::creptime_default();

        let crepe = scenario.catalog.get("Crêpe").unwrap();
        assert_eq!(crepe.unit_price, dec!(30));
        assert_eq!(crepe.unit_cost, dec!(10));
        assert_eq!(crepe.daily_orders, dec!(60));
        let coffee = scenario.catalog.get("Café").unwrap();
        assert_eq!(coffee.unit_price, dec!(12));
        assert_eq!(coffee.daily_orders, dec!(40));

        assert_eq!(scenario.monthly_charges.len(), 6);
        assert_eq!(scenario.monthly_charges.total().unwrap(), dec!(17500));
        assert_eq!(scenario.investment_charges.total().unwrap(), dec!(30000));
        assert_eq!(scenario.params, SimulationParameters::new(30, dec!(0.2), 6));
        assert!(scenario.sweep.is_some());
    }

    #[test]
    fn test_evaluate_default_scenario() {
        let report = Scenario::creptime_default().evaluate().unwrap();

        let financial = &report.financial;
        assert_eq!(financial.gross_revenue, dec!(68400));
        assert_eq!(financial.variable_cost, dec!(21600));
        assert_eq!(financial.fixed_cost, dec!(17500));
        assert_eq!(financial.pretax_profit, dec!(29300));
        assert_eq!(financial.tax, dec!(5860));
        assert_eq!(financial.net_profit, dec!(23440));
        assert_close(financial.profit_per_partner, dec!(3906.67));
        assert_close(
            financial.break_even_revenue.value().unwrap(),
            dec!(25576.92),
        );

        assert_eq!(report.investment.total_investment, dec!(30000));
        assert_close(
            report.investment.monthly_roi_pct.value().unwrap(),
            dec!(78.13),
        );
        assert_close(
            report.investment.annual_roi_pct.value().unwrap(),
            dec!(937.6),
        );
        assert_close(
            report.investment.payback_months.months().unwrap(),
            dec!(1.28),
        );

        assert_eq!(report.partners.investment_per_partner, dec!(5000));
        assert_close(report.partners.monthly_charges_per_partner, dec!(2916.67));

        let rows = report.sweep.unwrap();
        assert_eq!(rows.len(), 9);
        assert_eq!(rows.last().unwrap().result.net_profit, financial.net_profit);
    }

    #[test]
    fn test_evaluate_without_investment_or_sweep() {
        let scenario = Scenario {
            catalog: Catalog::new(vec![Product::new("Crêpe", dec!(30), dec!(10), dec!(60))])
                .unwrap(),
            monthly_charges: ChargeSet::default(),
            investment_charges: ChargeSet::default(),
            params: SimulationParameters::new(30, dec!(0), 1),
            sweep: None,
        };

        let report = scenario.evaluate().unwrap();

        assert_eq!(report.financial.net_profit, dec!(36000));
        assert_eq!(report.investment.monthly_roi_pct, Metric::NotApplicable);
        assert_eq!(report.investment.payback_months, Payback::NotApplicable);
        assert!(report.sweep.is_none());
    }

    #[test]
    fn test_evaluate_rejects_invalid_sweep() {
        let mut scenario = Scenario::creptime_default();
        scenario.sweep = Some(crate::scenario::SweepConfig {
            range: UnitRange::new(dec!(100), dec!(20), dec!(10)),
            mix: ProductMix::Baseline,
        });
        assert!(matches!(
            scenario.evaluate(),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_service_uses_given_default() {
        let mut custom = Scenario::creptime_default();
        custom.params.partner_count = 2;
        let service = ScenarioService::new(custom.clone());
        assert_eq!(service.default_scenario(), custom);

        let default_service = ScenarioService::default();
        assert_eq!(default_service.default_scenario().params.partner_count, 6);
    }

    #[test]
    fn test_service_simulate_and_sweep() {
        let service = ScenarioService::default();
        let scenario = service.default_scenario();

        let financial = service
            .simulate(&scenario.catalog, &scenario.monthly_charges, &scenario.params)
            .unwrap();
        let investment = service
            .compute_investment(&scenario.investment_charges, financial.net_profit)
            .unwrap();
        assert!(investment.monthly_roi_pct.is_applicable());

        let rows = service
            .sweep(
                &ProductMix::Baseline,
                &scenario.catalog,
                UnitRange::new(dec!(10), dec!(30), dec!(10)),
                &scenario.monthly_charges,
                &scenario.params,
            )
            .unwrap();
        assert_eq!(rows.len(), 3);

        let mut bad_params = scenario.params.clone();
        bad_params.partner_count = 0;
        assert!(service
            .simulate(&scenario.catalog, &scenario.monthly_charges, &bad_params)
            .is_err());
    }

    #[test]
    fn test_scenario_json_defaults_optional_sections() {
        let scenario: Scenario = serde_json::from_value(serde_json::json!({
            "catalog": [
                {"name": "Crêpe", "unitPrice": 30, "unitCost": 10, "dailyOrders": 60}
            ],
            "params": {"daysPerMonth": 26, "taxRate": 0.2, "partnerCount": 3}
        }))
        .unwrap();

        assert!(scenario.monthly_charges.is_empty());
        assert!(scenario.investment_charges.is_empty());
        assert!(scenario.sweep.is_none());
        assert_eq!(scenario.params.days_per_month, 26);
    }

    #[test]
    fn test_from_json_file_round_trip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let scenario = Scenario::creptime_default();
        file.write_all(serde_json::to_string(&scenario).unwrap().as_bytes())
            .unwrap();

        let loaded = Scenario::from_json_file(file.path()).unwrap();

        assert_eq!(loaded, scenario);
    }

    #[test]
    fn test_from_json_file_errors() {
        let missing = Scenario::from_json_file("/nonexistent/creptime/scenario.json");
        assert!(matches!(missing, Err(Error::ConfigIO(_))));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();
        let invalid = Scenario::from_json_file(file.path());
        assert!(matches!(invalid, Err(Error::InvalidConfigValue(_))));
    }
}
