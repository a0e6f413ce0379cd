use crate::reports;
use clap::Args;
use cohort::api;
use cohort::error::CohortResult;
use cohort::export::{GroupingReport, DEFAULT_ACCEPT_DELTA};
use cohort::roster::{loader, Roster};

#[derive(Args, Debug, Clone)]
pub struct AcceptArgs {
    /// Grouping report written by `group --report`.
    #[arg(short, long)]
    pub report: String,

    #[arg(long, default_value_t = DEFAULT_ACCEPT_DELTA)]
    pub delta: f64,

    /// Where to write the updated table. Defaults to overwriting --matrix.
    #[arg(short, long)]
    pub output: Option<String>,
}

pub fn run(args: &AcceptArgs, mut roster: Roster, matrix_path: &str) -> CohortResult<()> {
    let report = GroupingReport::load(&args.report)?;
    reports::print_groups(&report);

    let updated = api::accept_report(&mut roster, &report, args.delta)?;

    let target = args.output.as_deref().unwrap_or(matrix_path);
    loader::save_roster(target, &roster)?;

    println!("Accepted: {} pairs updated in {}", updated, target);
    Ok(())
}
