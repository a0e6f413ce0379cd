use crate::config::SearchParams;
use crate::error::CohortResult;
use crate::export::{self, GroupingReport};
use crate::optimizer::{OptimizationOptions, OptimizationResult, Optimizer};
use crate::roster::Roster;
use tracing::info;

#[derive(Debug, Clone)]
pub struct GroupingOutcome {
    pub result: OptimizationResult,
    pub report: GroupingReport,
}

/// Service: partition a loaded roster with the given search settings.
pub fn group_roster(roster: &Roster, params: &SearchParams) -> CohortResult<GroupingOutcome> {
    params.validate()?;
    let options = OptimizationOptions::from(params);
    let optimizer = Optimizer::from_options(roster, &options)?;

    info!(
        "🔎 Grouping {} entities into {} groups {:?} over {} trials ({})",
        roster.len(),
        options.num_groups,
        optimizer.sizes(),
        options.trials,
        options.scoring_mode
    );

    let result = if options.parallel {
        optimizer.run_parallel(params.seed, options.threads)?
    } else {
        optimizer.run(params.seed)?
    };

    let report = GroupingReport::from_result(&result, options.scoring_mode);
    Ok(GroupingOutcome { result, report })
}

/// Service: apply an approved report back onto the roster's scores.
pub fn accept_report(roster: &mut Roster, report: &GroupingReport, delta: f64) -> CohortResult<usize> {
    report.check_against(roster)?;
    export::accept(roster, &report.indices, delta)
}
