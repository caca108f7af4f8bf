//! Production-plan service entry point: CLI wiring.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use clap::Parser;

use powerplant_dispatch::cli::{Args, Command, OutputFormat, PlanArgs};
use powerplant_dispatch::config::ServiceConfig;
use powerplant_dispatch::io::export::export_csv;
use powerplant_dispatch::io::payload::{ProductionPlanRequest, response_body};
use powerplant_dispatch::logging::init_tracing;
use powerplant_dispatch::plan::{PlanResult, PlanSummary, Planner};

/// Loads the configuration file if one is given and rejects invalid settings.
fn load_config(path: Option<&Path>) -> Result<ServiceConfig> {
    let config = match path {
        Some(path) => ServiceConfig::from_toml_file(path)?,
        None => ServiceConfig::default(),
    };

    let errors = config.validate();
    if !errors.is_empty() {
        let joined: Vec<String> = errors.iter().map(ToString::to_string).collect();
        bail!("invalid configuration:\n{}", joined.join("\n"));
    }
    Ok(config)
}

fn run_plan(args: &PlanArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    init_tracing(&config.logging);

    let body = fs::read_to_string(&args.request)
        .with_context(|| format!("cannot read request \"{}\"", args.request.display()))?;
    let request = ProductionPlanRequest::from_json_str(&body)?.into_plan_request();
    tracing::debug!(
        load = %request.requested_load,
        plants = request.units.len(),
        "planning request file"
    );

    let units = Planner::new(config.solver).dispatch(&request)?;
    let result = PlanResult::from_units(&units);

    match args.format {
        OutputFormat::Table => {
            for dispatch in &result.dispatches {
                println!("{dispatch}");
            }
            println!("\n{}", PlanSummary::from_units(&units));
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response_body(&result))?);
        }
    }

    if let Some(path) = &args.out {
        export_csv(&units, path)
            .with_context(|| format!("failed to write CSV \"{}\"", path.display()))?;
        tracing::info!(path = %path.display(), "plan written");
    }
    Ok(())
}

#[cfg(feature = "api")]
fn run_serve(args: &powerplant_dispatch::cli::ServeArgs) -> Result<()> {
    use std::sync::Arc;

    use powerplant_dispatch::api::{self, AppState};

    let mut config = load_config(args.config.as_deref())?;
    if let Some(bind) = &args.bind {
        config.server.bind.clone_from(bind);
    }
    init_tracing(&config.logging);

    let addr = config.bind_addr()?;
    let state = Arc::new(AppState {
        planner: Planner::new(config.solver),
    });

    let rt = tokio::runtime::Runtime::new().context("failed to create tokio runtime")?;
    rt.block_on(api::serve(state, addr))
        .with_context(|| format!("API server on {addr} failed"))
}

fn main() -> Result<()> {
    match Args::parse().command {
        #[cfg(feature = "api")]
        Command::Serve(args) => run_serve(&args),
        Command::Plan(args) => run_plan(&args),
    }
}
