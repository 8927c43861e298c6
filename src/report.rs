//! Plain-text cost breakdown and load tables.
//!
//! The breakdown tables decompose each side of the comparison into its
//! per-month components using the closed forms `base * (1+g)^(m-1)` for
//! the compounding parts. They exist for display; the projection itself
//! uses the iterative recurrence in the engine.

use std::fmt::Write as _;

use crate::catalog::{PaymentType, ProductOffering};
use crate::engine::projection::{HORIZON_MONTHS, WEEKS_PER_MONTH};
use crate::engine::types::{Appliance, ApplianceLoad, CostAssumptions};

/// Per-month component breakdown of the generator-plus-grid side.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorBreakdownRow {
    /// Month number, 1..=36.
    pub month: u32,
    /// Fuel cost for this month.
    pub fuel: f64,
    /// Grid cost for this month.
    pub grid: f64,
    /// Flat maintenance charge.
    pub maintenance: f64,
    /// Generator purchase cost (month 1 only).
    pub upfront: f64,
    /// Sum of all components.
    pub total: f64,
}

/// Per-month component breakdown of the solar side.
#[derive(Debug, Clone, PartialEq)]
pub struct SolarBreakdownRow {
    /// Month number, 1..=36.
    pub month: u32,
    /// Deposit (PAYGO) or cash price (CASH), month 1 only.
    pub upfront: f64,
    /// Monthly installments (PAYGO only).
    pub installments: f64,
    /// Sum of all components.
    pub total: f64,
}

/// Component rows for the generator-plus-grid series.
pub fn generator_breakdown(costs: &CostAssumptions) -> Vec<GeneratorBreakdownRow> {
    let growth = costs.monthly_growth_rate();
    let fuel_base = costs.fuel_monthly_cost();
    let grid_base = costs.grid_monthly_cost;

    (0..HORIZON_MONTHS as u32)
        .map(|m| {
            let factor = (1.0 + growth).powi(m as i32);
            let fuel = fuel_base * factor;
            let grid = grid_base * factor;
            let upfront = if m == 0 {
                costs.generator_purchase_cost
            } else {
                0.0
            };
            GeneratorBreakdownRow {
                month: m + 1,
                fuel,
                grid,
                maintenance: costs.generator_monthly_maintenance,
                upfront,
                total: fuel + grid + costs.generator_monthly_maintenance + upfront,
            }
        })
        .collect()
}

/// Component rows for the solar series under the given plan.
pub fn solar_breakdown(
    offering: &ProductOffering,
    payment: PaymentType,
) -> Vec<SolarBreakdownRow> {
    (0..HORIZON_MONTHS as u32)
        .map(|m| {
            let (upfront, installments) = match payment {
                PaymentType::Paygo => {
                    let upfront = if m == 0 { offering.deposit } else { 0.0 };
                    (upfront, WEEKS_PER_MONTH * offering.weekly_repayment)
                }
                PaymentType::Cash => {
                    let upfront = if m == 0 { offering.cash_price } else { 0.0 };
                    (upfront, 0.0)
                }
            };
            SolarBreakdownRow {
                month: m + 1,
                upfront,
                installments,
                total: upfront + installments,
            }
        })
        .collect()
}

/// Renders the generator-side breakdown as a fixed-width table.
pub fn render_generator_table(costs: &CostAssumptions) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "--- Generator & Grid Breakdown ---");
    let _ = writeln!(
        out,
        "{:>5}  {:>12}  {:>12}  {:>12}  {:>12}  {:>14}",
        "month", "fuel", "grid", "maintenance", "upfront", "total"
    );
    for row in generator_breakdown(costs) {
        let _ = writeln!(
            out,
            "{:>5}  {:>12.2}  {:>12.2}  {:>12.2}  {:>12.2}  {:>14.2}",
            row.month, row.fuel, row.grid, row.maintenance, row.upfront, row.total
        );
    }
    out
}

/// Renders the solar-side breakdown as a fixed-width table.
pub fn render_solar_table(offering: &ProductOffering, payment: PaymentType) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "--- Solar Breakdown ({payment}) ---");
    let _ = writeln!(
        out,
        "{:>5}  {:>12}  {:>12}  {:>14}",
        "month", "upfront", "installments", "total"
    );
    for row in solar_breakdown(offering, payment) {
        let _ = writeln!(
            out,
            "{:>5}  {:>12.2}  {:>12.2}  {:>14.2}",
            row.month, row.upfront, row.installments, row.total
        );
    }
    out
}

/// Renders the per-appliance load table.
pub fn render_load_table(load: &ApplianceLoad) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "--- Appliance Load ---");
    let _ = writeln!(out, "{:<14}  {:>5}  {:>8}  {:>10}", "appliance", "count", "unit W", "total W");
    for appliance in Appliance::ALL {
        let count = load.count(appliance);
        let _ = writeln!(
            out,
            "{:<14}  {:>5}  {:>8.0}  {:>10.0}",
            appliance.label(),
            count,
            appliance.unit_watts(),
            f64::from(count) * appliance.unit_watts()
        );
    }
    let _ = writeln!(
        out,
        "{:<14}  {:>5}  {:>8}  {:>10.0}",
        "Other", "-", "-", load.other_watts
    );
    let _ = writeln!(out, "{:<14}  {:>5}  {:>8}  {:>10.0}", "Total", "", "", load.total_watts());
    out
}
