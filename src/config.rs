//! TOML-based scenario configuration and preset definitions.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::catalog::{self, PaymentType};
use crate::engine::types::{ApplianceLoad, CostAssumptions, EnvironmentAssumptions};
use crate::fuel;

/// Top-level scenario configuration parsed from TOML.
///
/// All fields default to the baseline scenario. Load from TOML with
/// [`ScenarioConfig::from_toml_file`] or use [`ScenarioConfig::baseline`]
/// for the built-in default.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    /// Product selection and payment plan.
    #[serde(default)]
    pub product: ProductConfig,
    /// Appliance counts and other watts.
    #[serde(default)]
    pub appliances: ApplianceConfig,
    /// Fuel and grid cost inputs.
    #[serde(default)]
    pub costs: CostConfig,
    /// Generator purchase and maintenance.
    #[serde(default)]
    pub generator: GeneratorConfig,
    /// Weather and usage assumptions.
    #[serde(default)]
    pub environment: EnvironmentConfig,
}

/// Product selection and payment plan.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProductConfig {
    /// Catalog product id.
    pub id: String,
    /// Payment plan: `"paygo"` or `"cash"`.
    pub payment: String,
}

impl Default for ProductConfig {
    fn default() -> Self {
        Self {
            id: "imax10_1x200".to_string(),
            payment: "paygo".to_string(),
        }
    }
}

/// Appliance counts and other watts.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApplianceConfig {
    /// Number of TVs.
    pub tv: u32,
    /// Number of lights.
    pub light: u32,
    /// Number of fans.
    pub fan: u32,
    /// Number of phones on charge.
    pub phone: u32,
    /// Number of home theater systems.
    pub home_theater: u32,
    /// Number of laptops on charge.
    pub laptop: u32,
    /// Wattage of anything not in the fixed set (W).
    pub other_watts: f64,
}

/// Fuel and grid cost inputs.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CostConfig {
    /// State used to look up the fuel price.
    pub state: String,
    /// Optional path to a per-state fuel-price CSV.
    pub prices_csv: Option<PathBuf>,
    /// Explicit per-litre price; overrides the table and the default.
    pub price_per_litre: Option<f64>,
    /// Yearly fuel/grid price growth rate (percent).
    pub yearly_growth_rate_pct: f64,
    /// Fuel consumed per month (litres).
    pub fuel_litres_per_month: f64,
    /// Monthly spend on grid electricity.
    pub grid_monthly_cost: f64,
}

impl Default for CostConfig {
    fn default() -> Self {
        Self {
            state: "Lagos".to_string(),
            prices_csv: None,
            price_per_litre: None,
            yearly_growth_rate_pct: 15.0,
            fuel_litres_per_month: 150.0,
            grid_monthly_cost: 0.0,
        }
    }
}

/// Generator purchase and maintenance.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// One-time generator purchase cost.
    pub purchase_cost: f64,
    /// Flat monthly maintenance cost.
    pub monthly_maintenance: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            purchase_cost: 55_000.0,
            monthly_maintenance: 3_500.0,
        }
    }
}

/// Weather and usage assumptions.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnvironmentConfig {
    /// Share of sunny weather per day (percent, 0-100).
    pub sunny_pct: f64,
    /// Hours of daylight per day (0-24).
    pub daylight_hours: f64,
    /// Share of daily usage occurring in daytime (percent, 0-100).
    pub day_usage_pct: f64,
    /// Share of energy needs to replace with solar (percent, 0-100).
    pub solar_replacement_pct: f64,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            sunny_pct: 70.0,
            daylight_hours: 12.0,
            day_usage_pct: 50.0,
            solar_replacement_pct: 50.0,
        }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug)]
pub struct ConfigError {
    /// Dotted field path (e.g., `"environment.sunny_pct"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config error: {} — {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

impl ScenarioConfig {
    /// Returns the baseline scenario: the smaller product on PAYGO with the
    /// stock cost and weather assumptions.
    pub fn baseline() -> Self {
        Self {
            product: ProductConfig::default(),
            appliances: ApplianceConfig::default(),
            costs: CostConfig::default(),
            generator: GeneratorConfig::default(),
            environment: EnvironmentConfig::default(),
        }
    }

    /// Returns the cash-outright preset: same product, one-time purchase.
    pub fn cash_outright() -> Self {
        Self {
            product: ProductConfig {
                payment: "cash".to_string(),
                ..ProductConfig::default()
            },
            ..Self::baseline()
        }
    }

    /// Returns the heavy-load preset: the two-panel product powering a full
    /// household plus a grid bill.
    pub fn heavy_load() -> Self {
        Self {
            product: ProductConfig {
                id: "imax10_2x200".to_string(),
                ..ProductConfig::default()
            },
            appliances: ApplianceConfig {
                tv: 2,
                light: 6,
                fan: 2,
                phone: 4,
                home_theater: 1,
                laptop: 1,
                other_watts: 100.0,
            },
            costs: CostConfig {
                grid_monthly_cost: 10_000.0,
                ..CostConfig::default()
            },
            ..Self::baseline()
        }
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["baseline", "cash_outright", "heavy_load"];

    /// Loads a scenario from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "baseline" => Ok(Self::baseline()),
            "cash_outright" => Ok(Self::cash_outright()),
            "heavy_load" => Ok(Self::heavy_load()),
            _ => Err(ConfigError {
                field: "preset".to_string(),
                message: format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            }),
        }
    }

    /// Parses a scenario from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "scenario".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a scenario from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if the configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        let p = &self.product;
        if !catalog::PRODUCTS.contains(&p.id.as_str()) {
            errors.push(ConfigError {
                field: "product.id".into(),
                message: format!(
                    "unknown product \"{}\", available: {}",
                    p.id,
                    catalog::PRODUCTS.join(", ")
                ),
            });
        }
        if PaymentType::try_parse(&p.payment).is_none() {
            errors.push(ConfigError {
                field: "product.payment".into(),
                message: format!("must be \"paygo\" or \"cash\", got \"{}\"", p.payment),
            });
        }

        if self.appliances.other_watts < 0.0 || !self.appliances.other_watts.is_finite() {
            errors.push(ConfigError {
                field: "appliances.other_watts".into(),
                message: "must be a finite value >= 0".into(),
            });
        }

        let c = &self.costs;
        if !fuel::is_known_state(&c.state) {
            errors.push(ConfigError {
                field: "costs.state".into(),
                message: format!("unknown state \"{}\"", c.state),
            });
        }
        if let Some(price) = c.price_per_litre
            && (price < 0.0 || !price.is_finite())
        {
            errors.push(ConfigError {
                field: "costs.price_per_litre".into(),
                message: "must be a finite value >= 0".into(),
            });
        }
        if !c.yearly_growth_rate_pct.is_finite() || c.yearly_growth_rate_pct <= -100.0 {
            errors.push(ConfigError {
                field: "costs.yearly_growth_rate_pct".into(),
                message: "must be a finite percentage > -100".into(),
            });
        }
        if c.fuel_litres_per_month < 0.0 || !c.fuel_litres_per_month.is_finite() {
            errors.push(ConfigError {
                field: "costs.fuel_litres_per_month".into(),
                message: "must be a finite value >= 0".into(),
            });
        }
        if c.grid_monthly_cost < 0.0 || !c.grid_monthly_cost.is_finite() {
            errors.push(ConfigError {
                field: "costs.grid_monthly_cost".into(),
                message: "must be a finite value >= 0".into(),
            });
        }

        let g = &self.generator;
        if g.purchase_cost < 0.0 || !g.purchase_cost.is_finite() {
            errors.push(ConfigError {
                field: "generator.purchase_cost".into(),
                message: "must be a finite value >= 0".into(),
            });
        }
        if g.monthly_maintenance < 0.0 || !g.monthly_maintenance.is_finite() {
            errors.push(ConfigError {
                field: "generator.monthly_maintenance".into(),
                message: "must be a finite value >= 0".into(),
            });
        }

        let e = &self.environment;
        if !(0.0..=100.0).contains(&e.sunny_pct) {
            errors.push(ConfigError {
                field: "environment.sunny_pct".into(),
                message: "must be in [0, 100]".into(),
            });
        }
        if !(0.0..=24.0).contains(&e.daylight_hours) {
            errors.push(ConfigError {
                field: "environment.daylight_hours".into(),
                message: "must be in [0, 24]".into(),
            });
        }
        if !(0.0..=100.0).contains(&e.day_usage_pct) {
            errors.push(ConfigError {
                field: "environment.day_usage_pct".into(),
                message: "must be in [0, 100]".into(),
            });
        }
        if !(0.0..=100.0).contains(&e.solar_replacement_pct) {
            errors.push(ConfigError {
                field: "environment.solar_replacement_pct".into(),
                message: "must be in [0, 100]".into(),
            });
        }

        errors
    }

    /// Payment plan, once validated.
    pub fn payment_type(&self) -> Option<PaymentType> {
        PaymentType::try_parse(&self.product.payment)
    }

    /// Engine appliance load built from the `[appliances]` section.
    pub fn appliance_load(&self) -> ApplianceLoad {
        let a = &self.appliances;
        ApplianceLoad {
            tv: a.tv,
            light: a.light,
            fan: a.fan,
            phone: a.phone,
            home_theater: a.home_theater,
            laptop: a.laptop,
            other_watts: a.other_watts,
        }
    }

    /// Engine cost assumptions with the resolved fuel unit price filled in.
    pub fn cost_assumptions(&self, fuel_price_per_litre: f64) -> CostAssumptions {
        CostAssumptions {
            yearly_growth_rate_pct: self.costs.yearly_growth_rate_pct,
            fuel_litres_per_month: self.costs.fuel_litres_per_month,
            fuel_price_per_litre,
            grid_monthly_cost: self.costs.grid_monthly_cost,
            generator_purchase_cost: self.generator.purchase_cost,
            generator_monthly_maintenance: self.generator.monthly_maintenance,
        }
    }

    /// Engine environment assumptions built from the `[environment]` section.
    pub fn environment(&self) -> EnvironmentAssumptions {
        let e = &self.environment;
        EnvironmentAssumptions {
            sunny_pct: e.sunny_pct,
            daylight_hours: e.daylight_hours,
            day_usage_pct: e.day_usage_pct,
            solar_replacement_pct: e.solar_replacement_pct,
        }
    }
}
