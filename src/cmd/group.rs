use crate::reports;
use clap::Args;
use cohort::api;
use cohort::config::{Config, SearchParams};
use cohort::error::CohortResult;
use cohort::roster::Roster;

#[derive(Args, Debug, Clone)]
pub struct GroupArgs {
    #[command(flatten)]
    pub config: Config,

    /// Write the grouping report (JSON) here for a later `accept`.
    #[arg(short, long)]
    pub report: Option<String>,
}

pub fn run(args: &GroupArgs, params: SearchParams, roster: &Roster) -> CohortResult<()> {
    let outcome = api::group_roster(roster, &params)?;

    println!("\n=== 🏆 FINAL RESULT ===");
    reports::print_groups(&outcome.report);
    println!("Best Trial: {}", outcome.result.best_trial);
    println!("Score: {:.4}", outcome.result.score);

    if let Some(path) = &args.report {
        outcome.report.save(path)?;
    }
    Ok(())
}
