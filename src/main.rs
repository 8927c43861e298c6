//! Calculator entry point — CLI wiring and config-driven projection.

use std::path::{Path, PathBuf};
use std::process;

use solar_payback::catalog::resolve_offering;
use solar_payback::config::ScenarioConfig;
use solar_payback::engine::projection::compute_projection;
use solar_payback::fuel::{self, FuelPriceTable};
use solar_payback::io::export::export_csv;
use solar_payback::report;

/// Parsed CLI arguments.
struct CliArgs {
    scenario_path: Option<String>,
    preset: Option<String>,
    fuel_prices: Option<PathBuf>,
    state_override: Option<String>,
    breakdown: bool,
    export_out: Option<String>,
    #[cfg(feature = "api")]
    serve: bool,
    #[cfg(feature = "api")]
    port: u16,
}

fn print_help() {
    eprintln!("solar-payback — Solar home-system payback calculator");
    eprintln!();
    eprintln!("Usage: solar-payback [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --scenario <path>      Load scenario from TOML config file");
    eprintln!("  --preset <name>        Use a built-in preset (baseline)");
    eprintln!("  --fuel-prices <path>   Per-state fuel-price CSV (overrides the scenario)");
    eprintln!("  --state <name>         State for the fuel-price lookup");
    eprintln!("  --breakdown            Print per-component cost tables");
    eprintln!("  --export <path>        Export the monthly series to CSV");
    #[cfg(feature = "api")]
    {
        eprintln!("  --serve                Start REST API server after the projection");
        eprintln!("  --port <u16>           API server port (default: 3000)");
    }
    eprintln!("  --help                 Show this help message");
    eprintln!();
    eprintln!("If no --scenario or --preset is given, the baseline preset is used.");
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        scenario_path: None,
        preset: None,
        fuel_prices: None,
        state_override: None,
        breakdown: false,
        export_out: None,
        #[cfg(feature = "api")]
        serve: false,
        #[cfg(feature = "api")]
        port: 3000,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            "--scenario" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --scenario requires a path argument");
                    process::exit(1);
                }
                cli.scenario_path = Some(args[i].clone());
            }
            "--preset" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --preset requires a name argument");
                    process::exit(1);
                }
                cli.preset = Some(args[i].clone());
            }
            "--fuel-prices" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --fuel-prices requires a path argument");
                    process::exit(1);
                }
                cli.fuel_prices = Some(PathBuf::from(&args[i]));
            }
            "--state" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --state requires a name argument");
                    process::exit(1);
                }
                cli.state_override = Some(args[i].clone());
            }
            "--breakdown" => {
                cli.breakdown = true;
            }
            "--export" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --export requires a path argument");
                    process::exit(1);
                }
                cli.export_out = Some(args[i].clone());
            }
            #[cfg(feature = "api")]
            "--serve" => {
                cli.serve = true;
            }
            #[cfg(feature = "api")]
            "--port" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --port requires a u16 argument");
                    process::exit(1);
                }
                if let Ok(p) = args[i].parse::<u16>() {
                    cli.port = p;
                } else {
                    eprintln!("error: --port value \"{}\" is not a valid u16", args[i]);
                    process::exit(1);
                }
            }
            other => {
                eprintln!("error: unknown argument \"{other}\"");
                print_help();
                process::exit(1);
            }
        }
        i += 1;
    }

    cli
}

fn main() {
    let cli = parse_args();

    // Load config: --scenario takes priority, then --preset, then baseline default
    let mut scenario = if let Some(ref path) = cli.scenario_path {
        match ScenarioConfig::from_toml_file(Path::new(path)) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else if let Some(ref name) = cli.preset {
        match ScenarioConfig::from_preset(name) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else {
        ScenarioConfig::baseline()
    };

    // Apply CLI overrides
    if let Some(path) = cli.fuel_prices {
        scenario.costs.prices_csv = Some(path);
    }
    if let Some(state) = cli.state_override {
        scenario.costs.state = state;
    }

    // Validate
    let errors = scenario.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }

    // Validation guarantees the payment string parses.
    let Some(payment) = scenario.payment_type() else {
        eprintln!("config error: product.payment — must be \"paygo\" or \"cash\"");
        process::exit(1);
    };

    // Resolve the fuel price: override, then table, then default.
    let (fuel_price, source) = fuel::resolve_fuel_price(
        scenario.costs.price_per_litre,
        scenario.costs.prices_csv.as_deref(),
        &scenario.costs.state,
    );
    println!(
        "Fuel price for {}: {:.2}/litre ({source})",
        scenario.costs.state, fuel_price
    );
    if let Some(ref path) = scenario.costs.prices_csv
        && let Ok(table) = FuelPriceTable::from_csv_file(path)
        && let Some(avg) = table.average_price()
    {
        println!("Average fuel price across the table: {avg:.2}/litre");
    }

    // Resolve the offering
    let (offering, active_price) = match resolve_offering(&scenario.product.id, payment) {
        Ok(resolved) => resolved,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };

    println!(
        "{} — {} price: {:.2} (battery {:.0} Wh, panels {:.0} W)",
        offering.name, payment, active_price, offering.battery_capacity_wh, offering.panel_watts
    );

    // Run the projection
    let load = scenario.appliance_load();
    let result = match compute_projection(
        &offering,
        payment,
        &scenario.cost_assumptions(fuel_price),
        &load,
        &scenario.environment(),
    ) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };

    // Print the monthly series
    for point in &result.monthly_points {
        println!("{point}");
    }

    // Print the load table and metrics
    println!();
    print!("{}", report::render_load_table(&load));
    println!();
    println!("{}", result.metrics);

    // Per-component tables if requested
    if cli.breakdown {
        println!();
        print!(
            "{}",
            report::render_generator_table(&scenario.cost_assumptions(fuel_price))
        );
        println!();
        print!("{}", report::render_solar_table(&offering, payment));
    }

    // Export CSV if requested
    if let Some(ref path) = cli.export_out {
        if let Err(e) = export_csv(&result.monthly_points, Path::new(path)) {
            eprintln!("error: failed to write CSV: {e}");
            process::exit(1);
        }
        eprintln!("Series written to {path}");
    }

    // Start API server if requested
    #[cfg(feature = "api")]
    if cli.serve {
        use std::net::SocketAddr;
        use std::sync::Arc;

        let state = Arc::new(solar_payback::api::AppState {
            offering,
            payment,
            active_price,
            result,
        });
        let addr = SocketAddr::from(([0, 0, 0, 0], cli.port));
        let rt = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
            eprintln!("error: failed to create tokio runtime: {e}");
            process::exit(1);
        });
        rt.block_on(solar_payback::api::serve(state, addr));
    }
}
