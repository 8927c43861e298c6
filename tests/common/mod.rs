//! Shared test fixtures for integration tests.

use solar_payback::catalog::{PaymentType, ProductOffering, resolve_offering};
use solar_payback::engine::types::{ApplianceLoad, CostAssumptions, EnvironmentAssumptions};

/// The one-panel offering used by most tests.
pub fn default_offering() -> ProductOffering {
    resolve_offering("imax10_1x200", PaymentType::Paygo)
        .expect("catalog entry should exist")
        .0
}

/// Worked-example cost assumptions: 150 L at 650, 15%/yr growth,
/// generator 55 000 with 3 500 maintenance, no grid spend.
pub fn default_costs() -> CostAssumptions {
    CostAssumptions {
        yearly_growth_rate_pct: 15.0,
        fuel_litres_per_month: 150.0,
        fuel_price_per_litre: 650.0,
        grid_monthly_cost: 0.0,
        generator_purchase_cost: 55_000.0,
        generator_monthly_maintenance: 3_500.0,
    }
}

/// A modest household load (1 TV, 3 lights, 1 fan, 2 phones): 175 W.
pub fn default_load() -> ApplianceLoad {
    ApplianceLoad {
        tv: 1,
        light: 3,
        fan: 1,
        phone: 2,
        ..ApplianceLoad::default()
    }
}

/// Stock environment: 70% sunny, 12 daylight hours.
pub fn default_env() -> EnvironmentAssumptions {
    EnvironmentAssumptions::default()
}
