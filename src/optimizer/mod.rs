pub mod runner;

use crate::config::{ScoringMode, SearchParams};
use crate::error::{CohortError, CohortResult};
use crate::partition::{compute_sizes, Partition};
use crate::roster::Roster;
use crate::scorer::Scorer;
use fastrand::Rng;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct OptimizationOptions {
    pub num_groups: usize,
    pub trials: usize,
    pub scoring_mode: ScoringMode,
    pub parallel: bool,
    pub threads: usize,
}

impl From<&SearchParams> for OptimizationOptions {
    fn from(params: &SearchParams) -> Self {
        Self {
            num_groups: params.num_groups,
            trials: params.trials,
            scoring_mode: params.scoring_mode,
            parallel: params.parallel,
            threads: params.threads,
        }
    }
}

impl Default for OptimizationOptions {
    fn default() -> Self {
        Self::from(&SearchParams::default())
    }
}

#[derive(Debug, Clone)]
pub struct OptimizationResult {
    pub partition: Partition,
    pub score: f64,
    /// Zero-based number of the trial that produced `partition`.
    pub best_trial: usize,
    pub trials: usize,
}

/// Receives every finished trial of a sequential run. It cannot stop the
/// search; capping `trials` is the only way to bound a run.
pub trait TrialObserver {
    fn on_trial(&self, trial: usize, score: f64, best_score: f64);
}

pub struct NoopObserver;

impl TrialObserver for NoopObserver {
    fn on_trial(&self, _trial: usize, _score: f64, _best_score: f64) {}
}

/// Random multi-start search: every trial places the whole roster by
/// random insertion, and the lowest-scoring partition wins.
pub struct Optimizer<'a> {
    roster: &'a Roster,
    sizes: Vec<usize>,
    trials: usize,
    scorer: Scorer,
}

impl<'a> Optimizer<'a> {
    pub fn new(roster: &'a Roster, sizes: Vec<usize>, trials: usize, mode: ScoringMode) -> Self {
        Self {
            roster,
            sizes,
            trials,
            scorer: Scorer::new(mode),
        }
    }

    /// Sizes the groups for the roster with [`compute_sizes`].
    pub fn from_options(roster: &'a Roster, options: &OptimizationOptions) -> CohortResult<Self> {
        let sizes = compute_sizes(roster.len(), options.num_groups)?;
        Ok(Self::new(roster, sizes, options.trials, options.scoring_mode))
    }

    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    pub fn trials(&self) -> usize {
        self.trials
    }

    fn check(&self) -> CohortResult<()> {
        if self.trials == 0 {
            return Err(CohortError::InvalidArgument(
                "trials must be at least 1".to_string(),
            ));
        }

        let entity_count = self.roster.len();
        if entity_count == 0 && !self.sizes.is_empty() {
            return Err(CohortError::NoValidPartition(format!(
                "roster is empty but {} groups were requested",
                self.sizes.len()
            )));
        }
        if entity_count > 0 && self.sizes.is_empty() {
            return Err(CohortError::NoValidPartition(format!(
                "{} entities but zero groups",
                entity_count
            )));
        }

        let capacity: usize = self.sizes.iter().sum();
        if capacity != entity_count {
            return Err(CohortError::NoValidPartition(format!(
                "group capacities sum to {} but the roster has {} entities",
                capacity, entity_count
            )));
        }
        Ok(())
    }

    pub fn run(&self, seed: Option<u64>) -> CohortResult<OptimizationResult> {
        self.run_with_observer(seed, &NoopObserver)
    }

    pub fn run_with_observer<O: TrialObserver>(
        &self,
        seed: Option<u64>,
        observer: &O,
    ) -> CohortResult<OptimizationResult> {
        self.check()?;

        let mut best: Option<(usize, Partition)> = None;

        for trial in 0..self.trials {
            let candidate = self.run_trial(trial, seed)?;
            let score = candidate.score();

            let replace = match &best {
                None => true,
                Some((_, current)) => score < current.score(),
            };
            if replace {
                debug!("Trial {:5} | New best: {:.2}", trial, score);
                best = Some((trial, candidate));
            }

            if let Some((_, current)) = &best {
                observer.on_trial(trial, score, current.score());
            }
        }

        let (best_trial, partition) = best.ok_or_else(|| {
            CohortError::NoValidPartition("no trial completed".to_string())
        })?;

        info!(
            "🏁 {} trials done. Best score {:.2} from trial {}",
            self.trials,
            partition.score(),
            best_trial
        );

        Ok(OptimizationResult {
            score: partition.score(),
            partition,
            best_trial,
            trials: self.trials,
        })
    }

    /// Builds, fills and scores one partition. Trials are independent of
    /// each other, which is what lets [`runner`] fan them out.
    pub fn run_trial(&self, trial: usize, seed: Option<u64>) -> CohortResult<Partition> {
        let mut rng = trial_rng(seed, trial);
        let mut partition = Partition::new(&self.sizes);

        for entity in self.roster.entities() {
            // Total capacity equals the roster size, so an open group always exists.
            while !partition.insert_into_random_group(entity, &mut rng) {}
        }

        let score = self.scorer.score(&partition, self.roster.matrix())?;
        partition.set_score(score);
        Ok(partition)
    }
}

/// Seeded runs give trial `t` the generator `seed + t`; unseeded runs draw
/// fresh entropy per trial.
pub fn trial_rng(seed: Option<u64>, trial: usize) -> Rng {
    match seed {
        Some(s) => Rng::with_seed(s.wrapping_add(trial as u64)),
        None => Rng::new(),
    }
}
