//! Monthly cost recurrence and the engine entry point.
//!
//! The generator-side series is an iterative recurrence: each month's fuel
//! and grid components grow from the previous month's values, while
//! maintenance stays flat. The solar side depends only on the payment plan
//! and the month index.

use crate::catalog::{PaymentType, ProductOffering};

use super::metrics::ScalarMetrics;
use super::types::{
    ApplianceLoad, CostAssumptions, EnvironmentAssumptions, MonthlyCostPoint, ProjectionResult,
    ValidationError,
};

/// Length of the projection horizon in months.
pub const HORIZON_MONTHS: usize = 36;

/// Payment weeks assumed per month for the PAYGO plan.
///
/// Deliberately a flat 4 rather than the calendar average of ~4.33; the
/// repayment schedule is quoted on that basis.
pub const WEEKS_PER_MONTH: f64 = 4.0;

/// Runs the full projection: validation, the 36-month series, and metrics.
///
/// # Arguments
///
/// * `offering` - Resolved product offering
/// * `payment` - Selected payment plan
/// * `costs` - Fuel, grid, and generator cost assumptions
/// * `load` - Appliance counts and other watts
/// * `env` - Weather and usage assumptions
///
/// # Errors
///
/// Returns a [`ValidationError`] naming the offending field if any input is
/// outside its documented domain. Degenerate-but-valid numeric inputs (zero
/// load, zero generation) never error; they surface as
/// [`Hours::Unbounded`](super::types::Hours) in the metrics.
pub fn compute_projection(
    offering: &ProductOffering,
    payment: PaymentType,
    costs: &CostAssumptions,
    load: &ApplianceLoad,
    env: &EnvironmentAssumptions,
) -> Result<ProjectionResult, ValidationError> {
    validate_inputs(costs, load, env)?;

    Ok(ProjectionResult {
        monthly_points: monthly_points(offering, payment, costs),
        metrics: ScalarMetrics::from_inputs(offering, load, env),
    })
}

/// Produces the 36-point cost series for validated inputs.
pub fn monthly_points(
    offering: &ProductOffering,
    payment: PaymentType,
    costs: &CostAssumptions,
) -> Vec<MonthlyCostPoint> {
    let growth = costs.monthly_growth_rate();
    let mut fuel_running = costs.fuel_monthly_cost();
    let mut grid_running = costs.grid_monthly_cost;

    let mut points = Vec::with_capacity(HORIZON_MONTHS);
    for month in 0..HORIZON_MONTHS {
        let generator_grid_cost = if month == 0 {
            costs.generator_purchase_cost
                + fuel_running
                + grid_running
                + costs.generator_monthly_maintenance
        } else {
            fuel_running *= 1.0 + growth;
            grid_running *= 1.0 + growth;
            fuel_running + grid_running + costs.generator_monthly_maintenance
        };

        let solar_cost = match (payment, month) {
            (PaymentType::Paygo, 0) => {
                offering.deposit + WEEKS_PER_MONTH * offering.weekly_repayment
            }
            (PaymentType::Paygo, _) => WEEKS_PER_MONTH * offering.weekly_repayment,
            (PaymentType::Cash, 0) => offering.cash_price,
            (PaymentType::Cash, _) => 0.0,
        };

        points.push(MonthlyCostPoint {
            month: month as u32 + 1,
            generator_grid_cost,
            solar_cost,
            savings: generator_grid_cost - solar_cost,
        });
    }
    points
}

fn validate_inputs(
    costs: &CostAssumptions,
    load: &ApplianceLoad,
    env: &EnvironmentAssumptions,
) -> Result<(), ValidationError> {
    require_non_negative("load.other_watts", load.other_watts)?;

    require_non_negative("costs.fuel_litres_per_month", costs.fuel_litres_per_month)?;
    require_non_negative("costs.fuel_price_per_litre", costs.fuel_price_per_litre)?;
    require_non_negative("costs.grid_monthly_cost", costs.grid_monthly_cost)?;
    require_non_negative("costs.generator_purchase_cost", costs.generator_purchase_cost)?;
    require_non_negative(
        "costs.generator_monthly_maintenance",
        costs.generator_monthly_maintenance,
    )?;
    if !costs.yearly_growth_rate_pct.is_finite() || costs.yearly_growth_rate_pct <= -100.0 {
        return Err(ValidationError {
            field: "costs.yearly_growth_rate_pct".into(),
            message: "must be a finite percentage > -100".into(),
        });
    }

    require_range("env.sunny_pct", env.sunny_pct, 0.0, 100.0)?;
    require_range("env.daylight_hours", env.daylight_hours, 0.0, 24.0)?;
    require_range("env.day_usage_pct", env.day_usage_pct, 0.0, 100.0)?;
    require_range(
        "env.solar_replacement_pct",
        env.solar_replacement_pct,
        0.0,
        100.0,
    )?;

    Ok(())
}

fn require_non_negative(field: &str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError {
            field: field.into(),
            message: "must be a finite value >= 0".into(),
        });
    }
    Ok(())
}

fn require_range(field: &str, value: f64, lo: f64, hi: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value < lo || value > hi {
        return Err(ValidationError {
            field: field.into(),
            message: format!("must be in [{lo}, {hi}]"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::resolve_offering;

    fn offering() -> ProductOffering {
        resolve_offering("imax10_1x200", PaymentType::Paygo)
            .expect("catalog entry should exist")
            .0
    }

    fn worked_example_costs() -> CostAssumptions {
        CostAssumptions {
            yearly_growth_rate_pct: 15.0,
            fuel_litres_per_month: 150.0,
            fuel_price_per_litre: 650.0,
            grid_monthly_cost: 0.0,
            generator_purchase_cost: 55_000.0,
            generator_monthly_maintenance: 3_500.0,
        }
    }

    #[test]
    fn series_has_exactly_36_one_indexed_points() {
        let points = monthly_points(&offering(), PaymentType::Paygo, &worked_example_costs());
        assert_eq!(points.len(), HORIZON_MONTHS);
        assert_eq!(points[0].month, 1);
        assert_eq!(points[35].month, 36);
    }

    #[test]
    fn first_month_matches_worked_example() {
        let points = monthly_points(&offering(), PaymentType::Paygo, &worked_example_costs());
        // 55_000 + 150 * 650 + 0 + 3_500
        assert_eq!(points[0].generator_grid_cost, 156_000.0);
        // 75_200 + 4 * 12_600
        assert_eq!(points[0].solar_cost, 125_600.0);
        assert_eq!(points[0].savings, 30_400.0);
    }

    #[test]
    fn paygo_months_after_first_are_flat_installments() {
        let points = monthly_points(&offering(), PaymentType::Paygo, &worked_example_costs());
        for point in &points[1..] {
            assert_eq!(point.solar_cost, 4.0 * 12_600.0);
        }
    }

    #[test]
    fn cash_is_a_single_upfront_payment() {
        let points = monthly_points(&offering(), PaymentType::Cash, &worked_example_costs());
        assert_eq!(points[0].solar_cost, 826_000.0);
        for point in &points[1..] {
            assert_eq!(point.solar_cost, 0.0);
        }
    }

    #[test]
    fn generator_side_compounds_fuel_and_grid_only() {
        let costs = worked_example_costs();
        let points = monthly_points(&offering(), PaymentType::Paygo, &costs);
        let growth = costs.monthly_growth_rate();
        // Month 2 drops the purchase cost and grows the fuel component once.
        let expected = 97_500.0 * (1.0 + growth) + 3_500.0;
        assert!((points[1].generator_grid_cost - expected).abs() < 1e-6);
        // The series keeps growing month over month.
        for pair in points[1..].windows(2) {
            assert!(pair[1].generator_grid_cost > pair[0].generator_grid_cost);
        }
    }

    #[test]
    fn zero_growth_keeps_recurring_costs_flat() {
        let costs = CostAssumptions {
            yearly_growth_rate_pct: 0.0,
            ..worked_example_costs()
        };
        let points = monthly_points(&offering(), PaymentType::Paygo, &costs);
        let recurring = 97_500.0 + 3_500.0;
        for point in &points[1..] {
            assert_eq!(point.generator_grid_cost, recurring);
        }
    }

    #[test]
    fn zero_fuel_and_grid_leaves_maintenance_only() {
        let costs = CostAssumptions {
            fuel_litres_per_month: 0.0,
            grid_monthly_cost: 0.0,
            ..worked_example_costs()
        };
        let points = monthly_points(&offering(), PaymentType::Paygo, &costs);
        assert_eq!(points[0].generator_grid_cost, 55_000.0 + 3_500.0);
        for point in &points[1..] {
            assert_eq!(point.generator_grid_cost, 3_500.0);
        }
    }

    #[test]
    fn savings_is_the_series_difference() {
        let points = monthly_points(&offering(), PaymentType::Paygo, &worked_example_costs());
        for point in &points {
            assert_eq!(point.savings, point.generator_grid_cost - point.solar_cost);
        }
    }

    #[test]
    fn projection_is_deterministic() {
        let costs = worked_example_costs();
        let load = ApplianceLoad {
            tv: 1,
            light: 3,
            ..ApplianceLoad::default()
        };
        let env = EnvironmentAssumptions::default();
        let a = compute_projection(&offering(), PaymentType::Paygo, &costs, &load, &env)
            .expect("valid inputs");
        let b = compute_projection(&offering(), PaymentType::Paygo, &costs, &load, &env)
            .expect("valid inputs");
        assert_eq!(a, b);
    }

    #[test]
    fn negative_other_watts_is_rejected() {
        let load = ApplianceLoad {
            other_watts: -1.0,
            ..ApplianceLoad::default()
        };
        let err = compute_projection(
            &offering(),
            PaymentType::Paygo,
            &worked_example_costs(),
            &load,
            &EnvironmentAssumptions::default(),
        )
        .unwrap_err();
        assert_eq!(err.field, "load.other_watts");
    }

    #[test]
    fn out_of_range_percentage_is_rejected() {
        let env = EnvironmentAssumptions {
            sunny_pct: 130.0,
            ..EnvironmentAssumptions::default()
        };
        let err = compute_projection(
            &offering(),
            PaymentType::Paygo,
            &worked_example_costs(),
            &ApplianceLoad::default(),
            &env,
        )
        .unwrap_err();
        assert_eq!(err.field, "env.sunny_pct");
        assert!(err.to_string().contains("[0, 100]"));
    }

    #[test]
    fn out_of_range_daylight_is_rejected() {
        let env = EnvironmentAssumptions {
            daylight_hours: 25.0,
            ..EnvironmentAssumptions::default()
        };
        let err = compute_projection(
            &offering(),
            PaymentType::Paygo,
            &worked_example_costs(),
            &ApplianceLoad::default(),
            &env,
        )
        .unwrap_err();
        assert_eq!(err.field, "env.daylight_hours");
    }

    #[test]
    fn growth_rate_at_or_below_minus_100_is_rejected() {
        let costs = CostAssumptions {
            yearly_growth_rate_pct: -100.0,
            ..worked_example_costs()
        };
        let err = compute_projection(
            &offering(),
            PaymentType::Paygo,
            &costs,
            &ApplianceLoad::default(),
            &EnvironmentAssumptions::default(),
        )
        .unwrap_err();
        assert_eq!(err.field, "costs.yearly_growth_rate_pct");
    }

    #[test]
    fn negative_growth_is_valid_and_shrinks_costs() {
        let costs = CostAssumptions {
            yearly_growth_rate_pct: -10.0,
            ..worked_example_costs()
        };
        let points = monthly_points(&offering(), PaymentType::Paygo, &costs);
        for pair in points[1..].windows(2) {
            assert!(pair[1].generator_grid_cost < pair[0].generator_grid_cost);
        }
    }

    #[test]
    fn degenerate_inputs_do_not_error() {
        let costs = CostAssumptions {
            fuel_litres_per_month: 0.0,
            grid_monthly_cost: 0.0,
            generator_purchase_cost: 0.0,
            generator_monthly_maintenance: 0.0,
            ..worked_example_costs()
        };
        let env = EnvironmentAssumptions {
            sunny_pct: 0.0,
            daylight_hours: 0.0,
            ..EnvironmentAssumptions::default()
        };
        let result = compute_projection(
            &offering(),
            PaymentType::Paygo,
            &costs,
            &ApplianceLoad::default(),
            &env,
        )
        .expect("degenerate numerics are valid");
        assert!(result.metrics.runtime_without_panels.is_unbounded());
        assert!(result.metrics.battery_charge_time.is_unbounded());
        assert_eq!(result.monthly_points[5].generator_grid_cost, 0.0);
    }
}
