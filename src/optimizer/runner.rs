use super::{OptimizationResult, Optimizer};
use crate::error::{CohortError, CohortResult};
use crate::partition::Partition;
use rayon::prelude::*;
use tracing::info;

impl Optimizer<'_> {
    /// Fans the trials out over a rayon pool and reduces to the minimum.
    ///
    /// A lower score wins and ties go to the earlier trial, so for the same
    /// seed this returns exactly what [`Optimizer::run`] returns.
    /// `threads == 0` uses rayon's global pool.
    pub fn run_parallel(
        &self,
        seed: Option<u64>,
        threads: usize,
    ) -> CohortResult<OptimizationResult> {
        self.check()?;

        let search = || {
            (0..self.trials)
                .into_par_iter()
                .map(|trial| self.run_trial(trial, seed).map(|p| (trial, p)))
                .try_reduce_with(|a, b| Ok(pick_better(a, b)))
        };

        let reduced = if threads > 0 {
            info!("🔥 Spawning {} worker threads", threads);
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .map_err(|e| CohortError::Config(format!("Thread pool: {}", e)))?;
            pool.install(search)
        } else {
            search()
        };

        let (best_trial, partition) = reduced.ok_or_else(|| {
            CohortError::NoValidPartition("no trial completed".to_string())
        })??;

        info!(
            "🏁 {} trials done in parallel. Best score {:.2} from trial {}",
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
}

fn pick_better(a: (usize, Partition), b: (usize, Partition)) -> (usize, Partition) {
    let b_wins = b.1.score() < a.1.score() || (b.1.score() == a.1.score() && b.0 < a.0);
    if b_wins {
        b
    } else {
        a
    }
}
