//! API response and query types.
//!
//! Engine types stay serde-free; these records define the public JSON
//! contract and map from the internal structs.

use serde::{Deserialize, Serialize};

use crate::catalog::ProductOffering;
use crate::engine::metrics::ScalarMetrics;
use crate::engine::types::MonthlyCostPoint;

/// Combined state response: offering, plan, price, and metrics.
#[derive(Debug, Serialize)]
pub struct StateResponse {
    /// Resolved product offering.
    pub offering: OfferingRecord,
    /// Selected payment plan (`"paygo"` or `"cash"`).
    pub payment: String,
    /// Price applicable under the selected plan.
    pub active_price: f64,
    /// Scalar energy metrics.
    pub metrics: MetricsRecord,
    /// Savings in the final projected month.
    pub final_month_savings: f64,
}

/// Product offering as exposed over the API.
#[derive(Debug, Serialize)]
pub struct OfferingRecord {
    /// Catalog key.
    pub id: String,
    /// Human-readable product name.
    pub name: String,
    /// Upfront deposit under the PAYGO plan.
    pub deposit: f64,
    /// Recurring weekly repayment under the PAYGO plan.
    pub weekly_repayment: f64,
    /// Number of weekly repayment periods.
    pub tenor_weeks: u32,
    /// Total price when paying via PAYGO.
    pub paygo_price: f64,
    /// Outright purchase price.
    pub cash_price: f64,
    /// Combined wattage of all solar panels (W).
    pub panel_watts: f64,
    /// Inverter rating (W).
    pub inverter_watts: f64,
    /// Battery capacity (Wh).
    pub battery_capacity_wh: f64,
}

impl From<&ProductOffering> for OfferingRecord {
    fn from(o: &ProductOffering) -> Self {
        Self {
            id: o.id.to_string(),
            name: o.name.to_string(),
            deposit: o.deposit,
            weekly_repayment: o.weekly_repayment,
            tenor_weeks: o.tenor_weeks,
            paygo_price: o.paygo_price,
            cash_price: o.cash_price,
            panel_watts: o.panel_watts,
            inverter_watts: o.inverter_watts,
            battery_capacity_wh: o.battery_capacity_wh,
        }
    }
}

/// Scalar metrics with durations as JSON numbers.
///
/// Unbounded durations serialize as `null` so clients can render them
/// distinctly; they are never encoded as a float infinity.
#[derive(Debug, Serialize)]
pub struct MetricsRecord {
    /// Total appliance load (W).
    pub total_watts: f64,
    /// Battery runtime without panels (hours, `null` = unbounded).
    pub runtime_without_panels_h: Option<f64>,
    /// Battery runtime with panels (hours, `null` = unbounded).
    pub runtime_with_panels_h: Option<f64>,
    /// Watts generated per daytime hour.
    pub daytime_generation_w: f64,
    /// Maximum energy generated per day (Wh).
    pub max_generation_wh_per_day: f64,
    /// Signed daytime balance: generation minus load.
    pub daytime_surplus_w: f64,
    /// Nighttime draw (W).
    pub nighttime_draw_w: f64,
    /// Battery charge time (hours, `null` = unbounded).
    pub battery_charge_time_h: Option<f64>,
}

impl From<&ScalarMetrics> for MetricsRecord {
    fn from(m: &ScalarMetrics) -> Self {
        Self {
            total_watts: m.total_watts,
            runtime_without_panels_h: m.runtime_without_panels.finite(),
            runtime_with_panels_h: m.runtime_with_panels.finite(),
            daytime_generation_w: m.daytime_generation_w,
            max_generation_wh_per_day: m.max_generation_wh_per_day,
            daytime_surplus_w: m.daytime_surplus_w,
            nighttime_draw_w: m.nighttime_draw_w,
            battery_charge_time_h: m.battery_charge_time.finite(),
        }
    }
}

/// One month of the cost comparison as exposed over the API.
#[derive(Debug, Serialize)]
pub struct MonthRecord {
    /// Month number, 1..=36.
    pub month: u32,
    /// Combined generator and grid cost for this month.
    pub generator_grid_cost: f64,
    /// Solar cost for this month.
    pub solar_cost: f64,
    /// `generator_grid_cost - solar_cost`.
    pub savings: f64,
    /// Sign classification: `"favorable"`, `"unfavorable"`, or `"neutral"`.
    pub classification: String,
}

impl From<&MonthlyCostPoint> for MonthRecord {
    fn from(p: &MonthlyCostPoint) -> Self {
        Self {
            month: p.month,
            generator_grid_cost: p.generator_grid_cost,
            solar_cost: p.solar_cost,
            savings: p.savings,
            classification: p.classification().as_str().to_string(),
        }
    }
}

/// Optional range query parameters for the projection endpoint.
#[derive(Debug, Deserialize)]
pub struct ProjectionQuery {
    /// Start month (inclusive, 1-indexed).
    pub from: Option<u32>,
    /// End month (inclusive, 1-indexed).
    pub to: Option<u32>,
}

/// Error response body for 400-class errors.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}
