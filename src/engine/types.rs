//! Engine input and output records.
//!
//! All inputs are plain value structs filled in by the caller; the engine
//! never reads ambient state. Outputs are recomputed in full on every
//! invocation.

use std::fmt;

/// Fixed appliance kinds with known unit wattages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Appliance {
    Tv,
    Light,
    Fan,
    Phone,
    HomeTheater,
    Laptop,
}

impl Appliance {
    /// All appliance kinds, in display order.
    pub const ALL: [Appliance; 6] = [
        Self::Tv,
        Self::Light,
        Self::Fan,
        Self::Phone,
        Self::HomeTheater,
        Self::Laptop,
    ];

    /// Assumed wattage of a single unit (W).
    pub fn unit_watts(self) -> f64 {
        match self {
            Self::Tv => 45.0,
            Self::Light => 5.0,
            Self::Fan => 75.0,
            Self::Phone => 20.0,
            Self::HomeTheater => 50.0,
            Self::Laptop => 65.0,
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Tv => "TV",
            Self::Light => "Light",
            Self::Fan => "Fan",
            Self::Phone => "Phone",
            Self::HomeTheater => "Home Theater",
            Self::Laptop => "Laptop",
        }
    }
}

/// Appliance counts plus a free-form wattage for anything not in the
/// fixed set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplianceLoad {
    /// Number of TVs (45 W each).
    pub tv: u32,
    /// Number of lights (5 W each).
    pub light: u32,
    /// Number of fans (75 W each).
    pub fan: u32,
    /// Number of phones on charge (20 W each).
    pub phone: u32,
    /// Number of home theater systems (50 W each).
    pub home_theater: u32,
    /// Number of laptops on charge (65 W each).
    pub laptop: u32,
    /// Total wattage of other appliances (W, >= 0).
    pub other_watts: f64,
}

impl ApplianceLoad {
    /// Count configured for the given appliance kind.
    pub fn count(&self, appliance: Appliance) -> u32 {
        match appliance {
            Appliance::Tv => self.tv,
            Appliance::Light => self.light,
            Appliance::Fan => self.fan,
            Appliance::Phone => self.phone,
            Appliance::HomeTheater => self.home_theater,
            Appliance::Laptop => self.laptop,
        }
    }

    /// Total load: the weighted appliance sum plus other watts.
    pub fn total_watts(&self) -> f64 {
        let appliance_watts: f64 = Appliance::ALL
            .iter()
            .map(|&a| f64::from(self.count(a)) * a.unit_watts())
            .sum();
        appliance_watts + self.other_watts
    }
}

/// Fuel, grid, and generator cost assumptions.
#[derive(Debug, Clone, PartialEq)]
pub struct CostAssumptions {
    /// Yearly fuel/grid price growth rate (percent, > -100).
    pub yearly_growth_rate_pct: f64,
    /// Fuel consumed per month (litres).
    pub fuel_litres_per_month: f64,
    /// Fuel unit price (currency per litre).
    pub fuel_price_per_litre: f64,
    /// Monthly spend on grid electricity.
    pub grid_monthly_cost: f64,
    /// One-time generator purchase cost, charged in the first month.
    pub generator_purchase_cost: f64,
    /// Flat monthly generator maintenance cost; never compounds.
    pub generator_monthly_maintenance: f64,
}

impl CostAssumptions {
    /// Monthly growth rate derived from the yearly rate:
    /// `(1 + yearly/100)^(1/12) - 1`.
    pub fn monthly_growth_rate(&self) -> f64 {
        (1.0 + self.yearly_growth_rate_pct / 100.0).powf(1.0 / 12.0) - 1.0
    }

    /// Base monthly fuel cost: litres times unit price.
    pub fn fuel_monthly_cost(&self) -> f64 {
        self.fuel_litres_per_month * self.fuel_price_per_litre
    }
}

impl Default for CostAssumptions {
    fn default() -> Self {
        Self {
            yearly_growth_rate_pct: 15.0,
            fuel_litres_per_month: 150.0,
            fuel_price_per_litre: crate::fuel::DEFAULT_FUEL_PRICE,
            grid_monthly_cost: 0.0,
            generator_purchase_cost: 55_000.0,
            generator_monthly_maintenance: 3_500.0,
        }
    }
}

/// Weather and usage-pattern assumptions.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvironmentAssumptions {
    /// Share of sunny weather per day (percent, 0-100).
    pub sunny_pct: f64,
    /// Hours of daylight per day (0-24).
    pub daylight_hours: f64,
    /// Share of daily usage occurring in daytime (percent, 0-100).
    pub day_usage_pct: f64,
    /// Share of energy needs intended to be replaced by solar (percent, 0-100).
    pub solar_replacement_pct: f64,
}

impl EnvironmentAssumptions {
    /// Sunny share as a fraction in [0, 1].
    pub fn sunny_fraction(&self) -> f64 {
        self.sunny_pct / 100.0
    }

    /// Hours of night per day.
    pub fn night_hours(&self) -> f64 {
        24.0 - self.daylight_hours
    }

    /// Share of daily usage occurring at night (percent).
    pub fn night_usage_pct(&self) -> f64 {
        100.0 - self.day_usage_pct
    }
}

impl Default for EnvironmentAssumptions {
    fn default() -> Self {
        Self {
            sunny_pct: 70.0,
            daylight_hours: 12.0,
            day_usage_pct: 50.0,
            solar_replacement_pct: 50.0,
        }
    }
}

/// Duration result for runtime and charge-time metrics.
///
/// `Unbounded` models the degenerate-but-valid cases: a zero load never
/// drains the battery, and generation at or above the load keeps it topped
/// up indefinitely. Never represented as a float infinity or NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Hours {
    /// A finite duration in hours.
    Finite(f64),
    /// The duration exceeds any bound.
    Unbounded,
}

impl Hours {
    /// Ratio with the degenerate-denominator policy: a denominator <= 0
    /// yields `Unbounded`.
    pub fn ratio(numerator: f64, denominator: f64) -> Self {
        if denominator > 0.0 {
            Self::Finite(numerator / denominator)
        } else {
            Self::Unbounded
        }
    }

    /// Whether the duration exceeds any bound.
    pub fn is_unbounded(self) -> bool {
        matches!(self, Self::Unbounded)
    }

    /// The finite value, if there is one.
    pub fn finite(self) -> Option<f64> {
        match self {
            Self::Finite(h) => Some(h),
            Self::Unbounded => None,
        }
    }
}

impl fmt::Display for Hours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(h) => write!(f, "{h:.2} h"),
            Self::Unbounded => f.write_str("inf"),
        }
    }
}

/// Display-only classification of a month's savings by sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SavingsClass {
    /// Solar is cheaper this month.
    Favorable,
    /// Solar is more expensive this month.
    Unfavorable,
    /// Costs are identical.
    Neutral,
}

impl SavingsClass {
    /// String form used in reports and API responses.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Favorable => "favorable",
            Self::Unfavorable => "unfavorable",
            Self::Neutral => "neutral",
        }
    }
}

/// One month of the cost comparison.
///
/// `month` is 1-indexed for display; internally the recurrence runs over
/// indices 0..36.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyCostPoint {
    /// Month number, 1..=36.
    pub month: u32,
    /// Combined generator and grid cost for this month.
    pub generator_grid_cost: f64,
    /// Solar product cost for this month under the selected plan.
    pub solar_cost: f64,
    /// `generator_grid_cost - solar_cost`.
    pub savings: f64,
}

impl MonthlyCostPoint {
    /// Sign classification of the savings; has no effect on computation.
    pub fn classification(&self) -> SavingsClass {
        if self.savings > 0.0 {
            SavingsClass::Favorable
        } else if self.savings < 0.0 {
            SavingsClass::Unfavorable
        } else {
            SavingsClass::Neutral
        }
    }
}

impl fmt::Display for MonthlyCostPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "m={:>2} | generator+grid={:>12.2}  solar={:>12.2}  savings={:>12.2} ({})",
            self.month,
            self.generator_grid_cost,
            self.solar_cost,
            self.savings,
            self.classification().as_str(),
        )
    }
}

/// Complete engine output: the 36-point series plus the scalar metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionResult {
    /// Ordered monthly cost points, months 1..=36.
    pub monthly_points: Vec<MonthlyCostPoint>,
    /// Scalar energy metrics for the resolved inputs.
    pub metrics: super::metrics::ScalarMetrics,
}

/// Engine input outside its documented domain.
#[derive(Debug)]
pub struct ValidationError {
    /// Name of the offending field.
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation error: {} — {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}
