//! Per-state fuel-price table ingestion.
//!
//! The table is a CSV with a header row: the first column names the state,
//! the remaining columns hold the price history in chronological order.
//! Blank or non-numeric cells are treated as missing. Every failure mode
//! (unreadable file, bad CSV, unknown state, empty row) resolves to the
//! documented default price at the call site; the projection engine never
//! sees the failure.

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Fallback fuel unit price when no table supplies one.
pub const DEFAULT_FUEL_PRICE: f64 = 650.0;

/// States the calculator recognizes.
pub const STATES: &[&str] = &[
    "Abia",
    "Abuja",
    "Adamawa",
    "Akwa Ibom",
    "Anambra",
    "Bauchi",
    "Bayelsa",
    "Benue",
    "Borno",
    "Cross River",
    "Delta",
    "Ebonyi",
    "Edo",
    "Ekiti",
    "Enugu",
    "Gombe",
    "Imo",
    "Jigawa",
    "Kaduna",
    "Kano",
    "Katsina",
    "Kebbi",
    "Kogi",
    "Kwara",
    "Lagos",
    "Nassarawa",
    "Niger",
    "Ogun",
    "Ondo",
    "Osun",
    "Oyo",
    "Plateau",
    "Rivers",
    "Sokoto",
    "Taraba",
    "Yobe",
    "Zamfara",
];

/// Whether the given name is a recognized state (case-insensitive).
pub fn is_known_state(name: &str) -> bool {
    STATES.iter().any(|s| s.eq_ignore_ascii_case(name))
}

/// Error reading or parsing a fuel-price table.
#[derive(Debug)]
pub struct PriceTableError {
    /// Human-readable failure description.
    pub message: String,
}

impl fmt::Display for PriceTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fuel price table error: {}", self.message)
    }
}

impl std::error::Error for PriceTableError {}

#[derive(Debug, Clone)]
struct StateRow {
    state: String,
    prices: Vec<Option<f64>>,
}

/// Parsed per-state fuel-price history.
#[derive(Debug, Clone)]
pub struct FuelPriceTable {
    rows: Vec<StateRow>,
    columns: usize,
}

impl FuelPriceTable {
    /// Parses a table from a CSV file.
    ///
    /// # Errors
    ///
    /// Returns a [`PriceTableError`] if the file cannot be read or the CSV
    /// is malformed.
    pub fn from_csv_file(path: &Path) -> Result<Self, PriceTableError> {
        let file = File::open(path).map_err(|e| PriceTableError {
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_reader(file)
    }

    /// Parses a table from any CSV reader.
    ///
    /// # Errors
    ///
    /// Returns a [`PriceTableError`] if a record cannot be decoded.
    pub fn from_reader(reader: impl Read) -> Result<Self, PriceTableError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let mut rows = Vec::new();
        let mut columns = 0;
        for record in rdr.records() {
            let record = record.map_err(|e| PriceTableError {
                message: e.to_string(),
            })?;
            let mut fields = record.iter();
            let Some(state) = fields.next() else {
                continue;
            };
            let prices: Vec<Option<f64>> = fields
                .map(|cell| cell.trim().parse::<f64>().ok().filter(|p| p.is_finite()))
                .collect();
            columns = columns.max(prices.len());
            rows.push(StateRow {
                state: state.trim().to_string(),
                prices,
            });
        }

        Ok(Self { rows, columns })
    }

    /// Number of state rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Most recent price for a state: the last populated cell in its row.
    ///
    /// State matching is case-insensitive. Returns `None` for unknown
    /// states or rows with no populated cells.
    pub fn latest_price(&self, state: &str) -> Option<f64> {
        let row = self
            .rows
            .iter()
            .find(|r| r.state.eq_ignore_ascii_case(state))?;
        row.prices.iter().rev().find_map(|p| *p)
    }

    /// Average price over the whole table: the mean of per-column means.
    ///
    /// Columns with no populated cells are skipped. Returns `None` when no
    /// column has data.
    pub fn average_price(&self) -> Option<f64> {
        let mut column_means = Vec::with_capacity(self.columns);
        for col in 0..self.columns {
            let cells: Vec<f64> = self
                .rows
                .iter()
                .filter_map(|r| r.prices.get(col).copied().flatten())
                .collect();
            if !cells.is_empty() {
                column_means.push(cells.iter().sum::<f64>() / cells.len() as f64);
            }
        }
        if column_means.is_empty() {
            return None;
        }
        Some(column_means.iter().sum::<f64>() / column_means.len() as f64)
    }
}

/// Where a resolved fuel price came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceSource {
    /// Explicit per-litre override from the configuration.
    Override,
    /// Latest table entry for the configured state.
    Table,
    /// The documented fallback, [`DEFAULT_FUEL_PRICE`].
    Default,
}

impl fmt::Display for PriceSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Override => "configured override",
            Self::Table => "latest table entry",
            Self::Default => "default",
        };
        f.write_str(s)
    }
}

/// Resolves the fuel unit price for a state.
///
/// Resolution order: explicit override, then the latest table entry for
/// the state, then [`DEFAULT_FUEL_PRICE`]. Table problems are reported on
/// stderr and absorbed here; callers always receive a usable price.
pub fn resolve_fuel_price(
    override_price: Option<f64>,
    table_path: Option<&Path>,
    state: &str,
) -> (f64, PriceSource) {
    if let Some(price) = override_price {
        return (price, PriceSource::Override);
    }

    if let Some(path) = table_path {
        match FuelPriceTable::from_csv_file(path) {
            Ok(table) => {
                if let Some(price) = table.latest_price(state) {
                    return (price, PriceSource::Table);
                }
                eprintln!(
                    "warning: no price for state \"{state}\" in \"{}\", using default {DEFAULT_FUEL_PRICE}",
                    path.display()
                );
            }
            Err(e) => {
                eprintln!("warning: {e}, using default {DEFAULT_FUEL_PRICE}");
            }
        }
    }

    (DEFAULT_FUEL_PRICE, PriceSource::Default)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
state,2025-01,2025-02,2025-03
Lagos,640,655,668
Abuja,660,671,
Kano,655,,
Oyo,645,650,661
";

    fn sample_table() -> FuelPriceTable {
        FuelPriceTable::from_reader(SAMPLE.as_bytes()).expect("sample CSV should parse")
    }

    #[test]
    fn parses_all_state_rows() {
        let table = sample_table();
        assert_eq!(table.len(), 4);
        assert!(!table.is_empty());
    }

    #[test]
    fn latest_price_takes_last_populated_cell() {
        let table = sample_table();
        assert_eq!(table.latest_price("Lagos"), Some(668.0));
        // Trailing blank cells are skipped.
        assert_eq!(table.latest_price("Abuja"), Some(671.0));
        assert_eq!(table.latest_price("Kano"), Some(655.0));
    }

    #[test]
    fn latest_price_is_case_insensitive() {
        let table = sample_table();
        assert_eq!(table.latest_price("lagos"), Some(668.0));
    }

    #[test]
    fn unknown_state_has_no_price() {
        let table = sample_table();
        assert_eq!(table.latest_price("Atlantis"), None);
    }

    #[test]
    fn average_is_the_mean_of_column_means() {
        let table = sample_table();
        let col1 = (640.0 + 660.0 + 655.0 + 645.0) / 4.0;
        let col2 = (655.0 + 671.0 + 650.0) / 3.0;
        let col3 = (668.0 + 661.0) / 2.0;
        let expected = (col1 + col2 + col3) / 3.0;
        let avg = table.average_price().expect("table has data");
        assert!((avg - expected).abs() < 1e-9);
    }

    #[test]
    fn empty_table_has_no_average() {
        let table = FuelPriceTable::from_reader("state,2025-01\n".as_bytes()).unwrap();
        assert!(table.average_price().is_none());
        assert!(table.is_empty());
    }

    #[test]
    fn non_numeric_cells_are_missing() {
        let csv = "state,p1,p2\nLagos,n/a,700\n";
        let table = FuelPriceTable::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(table.latest_price("Lagos"), Some(700.0));
        assert_eq!(table.average_price(), Some(700.0));
    }

    #[test]
    fn override_wins_resolution() {
        let (price, source) = resolve_fuel_price(Some(720.0), None, "Lagos");
        assert_eq!(price, 720.0);
        assert_eq!(source, PriceSource::Override);
    }

    #[test]
    fn missing_table_falls_back_to_default() {
        let (price, source) =
            resolve_fuel_price(None, Some(Path::new("does/not/exist.csv")), "Lagos");
        assert_eq!(price, DEFAULT_FUEL_PRICE);
        assert_eq!(source, PriceSource::Default);
    }

    #[test]
    fn no_source_at_all_falls_back_to_default() {
        let (price, source) = resolve_fuel_price(None, None, "Lagos");
        assert_eq!(price, DEFAULT_FUEL_PRICE);
        assert_eq!(source, PriceSource::Default);
    }

    #[test]
    fn state_listing_is_recognized() {
        assert!(is_known_state("Lagos"));
        assert!(is_known_state("akwa ibom"));
        assert!(!is_known_state("Atlantis"));
        assert_eq!(STATES.len(), 37);
    }
}
