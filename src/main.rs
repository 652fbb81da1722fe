//! pv-calc entry point: CLI wiring and scenario-driven estimation.

mod cli;

use std::process;

use clap::Parser;
use tracing::{debug, info};

use pv_calc::io::export::export_csv;
use pv_calc::model::Estimator;
use pv_calc::region::REGIONS;
use pv_calc::report::EstimateReport;

use cli::{Cli, OutputFormat};

/// Width of the longest bar in the text chart.
const CHART_WIDTH: usize = 40;

fn main() {
    let cli = Cli::parse();

    #[cfg(feature = "tui")]
    let tui_mode = cli.tui;
    #[cfg(not(feature = "tui"))]
    let tui_mode = false;

    // The TUI owns the terminal, so it runs without a log subscriber.
    if !tui_mode {
        pv_calc::init_tracing();
    }

    if cli.list_regions {
        for r in &REGIONS {
            println!("{}\t{}", r.name, r.yield_kwh_per_kwp);
        }
        return;
    }

    // Load config: --scenario takes priority, then --preset, then default
    let mut scenario = cli.load_scenario().unwrap_or_else(|e| {
        eprintln!("{e}");
        process::exit(1);
    });
    cli.apply_overrides(&mut scenario);

    // Validate
    let errors = scenario.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }

    let estimator = Estimator::new(scenario.tariff);
    let inputs = scenario.to_inputs();
    debug!(?inputs, "scenario resolved");

    #[cfg(feature = "tui")]
    if tui_mode {
        pv_calc::tui::run(estimator, inputs);
        return;
    }

    let estimate = estimator.evaluate(&inputs).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        process::exit(1);
    });

    let report = EstimateReport::new(inputs, estimate);

    match cli.format {
        OutputFormat::Text => {
            println!("{}", report.metrics);
            println!();
            println!("{}", report.chart.render_text(CHART_WIDTH));
        }
        OutputFormat::Json => {
            match serde_json::to_string_pretty(&report) {
                Ok(s) => println!("{s}"),
                Err(e) => {
                    eprintln!("error: failed to serialize results: {e}");
                    process::exit(1);
                }
            }
        }
    }

    // Export CSV if requested
    if let Some(ref path) = cli.csv_out {
        if let Err(e) = export_csv(&estimate, path) {
            eprintln!("error: failed to write CSV: {e}");
            process::exit(1);
        }
        info!(path = %path.display(), "report written");
        eprintln!("Report written to {}", path.display());
    }

    // Start API server if requested
    #[cfg(feature = "api")]
    if cli.serve {
        use std::net::SocketAddr;
        use std::sync::Arc;

        let state = Arc::new(pv_calc::api::AppState { estimator });
        let addr = SocketAddr::from(([0, 0, 0, 0], cli.port));
        let rt = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
            eprintln!("error: failed to create tokio runtime: {e}");
            process::exit(1);
        });
        rt.block_on(pv_calc::api::serve(state, addr));
    }
}
