//! Lesson Planner - a terminal front-end for an AI-assisted lesson-plan generator
//!
//! This is the binary entry point. All logic lives in the library crates.

use std::io;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use lesson_planner::headless::{run_headless, write_plan, HeadlessOutcome};
use lesson_planner::Args;
use lplan_app::config::init_config_dir;
use lplan_app::{AppState, StderrNotifier};
use lplan_client::HttpPlanGenerator;
use lplan_core::prelude::*;

#[tokio::main]
async fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;
    let args = Args::parse();
    let base_path = std::env::current_dir()?;

    if args.init {
        let path = init_config_dir(&base_path)?;
        println!("Config file: {}", path.display());
        return Ok(ExitCode::SUCCESS);
    }

    lplan_core::logging::init()?;

    info!("═══════════════════════════════════════════════════════");
    info!("Lesson Planner v{}", env!("CARGO_PKG_VERSION"));
    info!("Working directory: {}", base_path.display());
    info!("═══════════════════════════════════════════════════════");

    let settings = args.resolve_settings(&base_path);
    let generator = Arc::new(HttpPlanGenerator::new(&settings.endpoint.url).map_err(report)?);
    let form = args.form_values();

    if !args.headless {
        let state = AppState::with_settings(settings).with_form(form);
        lplan_tui::run(state, generator).await.map_err(report)?;
        return Ok(ExitCode::SUCCESS);
    }

    let outcome = run_headless(form, settings, generator, &StderrNotifier)
        .await
        .map_err(report)?;
    match outcome {
        HeadlessOutcome::Generated(doc) => {
            write_plan(&mut io::stdout().lock(), &doc, args.output_format())?;
            Ok(ExitCode::SUCCESS)
        }
        HeadlessOutcome::Invalid(fields) => {
            eprintln!("{}", Error::missing_required(fields));
            Ok(ExitCode::FAILURE)
        }
        HeadlessOutcome::Failed => Ok(ExitCode::FAILURE),
    }
}

/// Log an error that ends the program and turn it into a report
fn report(e: Error) -> color_eyre::Report {
    if e.is_fatal() {
        error!("Fatal error: {}", e);
    } else {
        warn!("Exiting after error: {}", e);
    }
    e.into()
}
