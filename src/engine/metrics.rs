//! Scalar energy metrics derived from the resolved product and inputs.
//!
//! Each metric is an independent formula over the offering's hardware
//! parameters, the appliance load, and the environment assumptions. None
//! of them share state with the monthly cost recurrence.

use std::fmt;

use crate::catalog::ProductOffering;

use super::types::{ApplianceLoad, EnvironmentAssumptions, Hours};

/// Point energy metrics for one set of inputs.
///
/// Durations use the [`Hours`] sentinel: degenerate inputs (zero load,
/// generation covering the load, zero generation) yield `Unbounded`
/// instead of an error or a float infinity.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarMetrics {
    /// Total appliance load (W).
    pub total_watts: f64,
    /// Battery runtime with no solar input: capacity / load.
    pub runtime_without_panels: Hours,
    /// Battery runtime while panels offset the load:
    /// capacity / (load - daytime generation).
    pub runtime_with_panels: Hours,
    /// Watts generated per daytime hour: sunny fraction x panel wattage.
    pub daytime_generation_w: f64,
    /// Maximum energy generated per day (Wh):
    /// sunny fraction x daylight hours x panel wattage.
    pub max_generation_wh_per_day: f64,
    /// Signed daytime balance while charging: generation minus load.
    /// Negative means appliances draw beyond what the panels supply.
    pub daytime_surplus_w: f64,
    /// Nighttime draw (W); all of it comes from the battery.
    pub nighttime_draw_w: f64,
    /// Time to charge the battery from empty at the daytime generation rate.
    pub battery_charge_time: Hours,
}

impl ScalarMetrics {
    /// Computes all metrics from the resolved inputs.
    ///
    /// Inputs are assumed to be validated; see
    /// [`compute_projection`](super::projection::compute_projection).
    pub fn from_inputs(
        offering: &ProductOffering,
        load: &ApplianceLoad,
        env: &EnvironmentAssumptions,
    ) -> Self {
        let total_watts = load.total_watts();
        let battery = offering.battery_capacity_wh;
        let daytime_generation_w = env.sunny_fraction() * offering.panel_watts;

        Self {
            total_watts,
            runtime_without_panels: Hours::ratio(battery, total_watts),
            runtime_with_panels: Hours::ratio(battery, total_watts - daytime_generation_w),
            daytime_generation_w,
            max_generation_wh_per_day: env.sunny_fraction()
                * env.daylight_hours
                * offering.panel_watts,
            daytime_surplus_w: daytime_generation_w - total_watts,
            nighttime_draw_w: total_watts,
            battery_charge_time: Hours::ratio(battery, daytime_generation_w),
        }
    }
}

impl fmt::Display for ScalarMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Energy Metrics ---")?;
        writeln!(f, "Total appliance load:    {:.2} W", self.total_watts)?;
        writeln!(f, "Runtime without panels:  {}", self.runtime_without_panels)?;
        writeln!(f, "Runtime with panels:     {}", self.runtime_with_panels)?;
        writeln!(f, "Daytime generation:      {:.2} W", self.daytime_generation_w)?;
        writeln!(
            f,
            "Max daily generation:    {:.2} Wh",
            self.max_generation_wh_per_day
        )?;
        writeln!(f, "Daytime surplus:         {:.2} W", self.daytime_surplus_w)?;
        writeln!(f, "Nighttime draw:          {:.2} W", self.nighttime_draw_w)?;
        write!(f, "Battery charge time:     {}", self.battery_charge_time)
    }
}
