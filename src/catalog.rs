//! Static product catalog and offering resolution.
//!
//! The catalog is a fixed table keyed by product id. Resolution is a pure
//! lookup: it never computes anything and must succeed before any
//! projection runs.

use std::fmt;

/// Payment plan selector for a product offering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentType {
    /// Pay-as-you-go: deposit plus recurring weekly repayments over the tenor.
    Paygo,
    /// One-time outright purchase at the cash price.
    Cash,
}

impl PaymentType {
    /// String form used in configuration files.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Paygo => "paygo",
            Self::Cash => "cash",
        }
    }

    /// Parses the configuration string form.
    pub fn try_parse(s: &str) -> Option<Self> {
        match s {
            "paygo" => Some(Self::Paygo),
            "cash" => Some(Self::Cash),
            _ => None,
        }
    }
}

impl fmt::Display for PaymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Commercial and hardware parameters for one catalog entry.
///
/// Immutable once resolved; all monetary fields are raw currency amounts
/// without formatting.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductOffering {
    /// Catalog key.
    pub id: &'static str,
    /// Human-readable product name.
    pub name: &'static str,
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

impl ProductOffering {
    /// Price applicable under the given payment plan.
    pub fn price_for(&self, payment: PaymentType) -> f64 {
        match payment {
            PaymentType::Paygo => self.paygo_price,
            PaymentType::Cash => self.cash_price,
        }
    }
}

/// Known product ids, in catalog order.
pub const PRODUCTS: &[&str] = &["imax10_1x200", "imax10_2x200"];

const CATALOG: &[ProductOffering] = &[
    ProductOffering {
        id: "imax10_1x200",
        name: "iMax 10 w/ 1 x 200W panel",
        deposit: 75_200.0,
        weekly_repayment: 12_600.0,
        tenor_weeks: 93,
        paygo_price: 1_247_000.0,
        cash_price: 826_000.0,
        panel_watts: 200.0,
        inverter_watts: 500.0,
        battery_capacity_wh: 538.0,
    },
    ProductOffering {
        id: "imax10_2x200",
        name: "iMax 10 w/ 2 x 200W panels",
        deposit: 88_000.0,
        weekly_repayment: 14_000.0,
        tenor_weeks: 93,
        paygo_price: 1_390_000.0,
        cash_price: 946_000.0,
        panel_watts: 400.0,
        inverter_watts: 500.0,
        battery_capacity_wh: 538.0,
    },
];

/// Error raised when a product id is not present in the catalog.
#[derive(Debug)]
pub struct UnknownProductError {
    /// The id that failed to resolve.
    pub product_id: String,
}

impl fmt::Display for UnknownProductError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown product \"{}\", available: {}",
            self.product_id,
            PRODUCTS.join(", ")
        )
    }
}

impl std::error::Error for UnknownProductError {}

/// Resolves a product id and payment plan to the offering and its active price.
///
/// # Errors
///
/// Returns an [`UnknownProductError`] if `product_id` is not in the catalog.
pub fn resolve_offering(
    product_id: &str,
    payment: PaymentType,
) -> Result<(ProductOffering, f64), UnknownProductError> {
    let offering = CATALOG
        .iter()
        .find(|o| o.id == product_id)
        .cloned()
        .ok_or_else(|| UnknownProductError {
            product_id: product_id.to_string(),
        })?;
    let active_price = offering.price_for(payment);
    Ok((offering, active_price))
}
