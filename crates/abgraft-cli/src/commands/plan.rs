use crate::cli::{OutputFormat, PlanArgs};
use crate::config::PartialGraftConfig;
use crate::error::Result;
use crate::utils::output;
use crate::utils::progress::CliProgressHandler;
use abgraft::core::models::cdr::CdrName;
use abgraft::engine::progress::ProgressReporter;
use abgraft::workflows::{self, graft::GraftPlan};
use std::io::Write;
use tracing::{info, warn};

pub fn run(args: PlanArgs) -> Result<()> {
    let partial_config = PartialGraftConfig::from_file(&args.config)?;
    info!("Merging configuration from file and CLI arguments...");
    let final_config = partial_config.merge_with_cli(&args)?;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    eprintln!("Planning CDR grafts...");
    info!("Invoking the core graft planning workflow...");
    let plan = workflows::graft::run(&final_config, &reporter)?;

    if plan.assignments.iter().all(|a| a.grafted().next().is_none()) {
        warn!("No CDR receives a graft in this plan.");
    }

    let mut writer = output::open(args.output.as_deref())?;
    write_plan(&mut writer, &plan, args.format)?;
    writer.flush()?;

    eprintln!(
        "✓ {} plan ({}, {} of {} permutations) for design type {}.",
        plan.strategy,
        plan.cardinalities,
        plan.assignments.len(),
        plan.total_permutations,
        plan.design_type
    );
    if let Some(path) = &args.output {
        eprintln!("  Written to: {}", path.display());
    }
    Ok(())
}

/// Plain output lists one round per line; CSV output has one column per CDR with
/// `0` for CDRs that keep their native loop.
fn write_plan(writer: &mut dyn Write, plan: &GraftPlan, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Plain => {
            for (round, assignment) in plan.assignments.iter().enumerate() {
                writeln!(writer, "{}\t{}", round + 1, assignment)?;
            }
        }
        OutputFormat::Csv => {
            let headers = CdrName::ALL.map(CdrName::as_str);
            output::write_permutations(writer, format, &headers, plan.permutations())?;
        }
    }
    Ok(())
}
