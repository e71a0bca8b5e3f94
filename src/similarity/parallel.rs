//! Parallel matching of one string against many candidates.
//!
//! Each pairwise comparison is still the sequential composite score; only the
//! candidate list is partitioned across workers. `any_similar` may stop on
//! whichever match a worker finds first, while `first_similar` and `score_all`
//! keep candidate order in their results.

use std::sync::Arc;

use log::debug;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::error::{Result, TextsimError};
use crate::similarity::composite::CompositeScorer;
use crate::similarity::config::ParallelConfig;

/// Scores candidate batches on a dedicated thread pool.
#[derive(Debug, Clone)]
pub struct ParallelMatcher {
    scorer: CompositeScorer,
    thread_pool: Arc<ThreadPool>,
}

impl ParallelMatcher {
    /// Create a matcher for the given scorer.
    pub fn new(scorer: CompositeScorer, config: ParallelConfig) -> Result<Self> {
        let thread_pool_size = config.thread_pool_size.unwrap_or_else(num_cpus::get);
        if thread_pool_size == 0 {
            return Err(TextsimError::config(
                "thread_pool_size must be greater than zero",
            ));
        }

        let thread_pool = ThreadPoolBuilder::new()
            .num_threads(thread_pool_size)
            .thread_name(|i| format!("textsim-match-{i}"))
            .build()
            .map_err(|e| TextsimError::internal(format!("Failed to create thread pool: {e}")))?;

        debug!("Created parallel matcher with {thread_pool_size} threads");

        Ok(Self {
            scorer,
            thread_pool: Arc::new(thread_pool),
        })
    }

    /// Get the underlying scorer.
    pub fn scorer(&self) -> &CompositeScorer {
        &self.scorer
    }

    /// Number of worker threads.
    pub fn num_threads(&self) -> usize {
        self.thread_pool.current_num_threads()
    }

    /// Check whether `one` is similar to any candidate.
    pub fn any_similar<S>(&self, one: &str, candidates: &[S]) -> bool
    where
        S: AsRef<str> + Sync,
    {
        self.thread_pool.install(|| {
            candidates
                .par_iter()
                .any(|candidate| self.scorer.is_similar(one, candidate.as_ref()))
        })
    }

    /// Index of the first similar candidate in candidate order.
    pub fn first_similar<S>(&self, one: &str, candidates: &[S]) -> Option<usize>
    where
        S: AsRef<str> + Sync,
    {
        self.thread_pool.install(|| {
            candidates
                .par_iter()
                .position_first(|candidate| self.scorer.is_similar(one, candidate.as_ref()))
        })
    }

    /// Composite values of `one` against every candidate, in candidate order.
    pub fn score_all<S>(&self, one: &str, candidates: &[S]) -> Vec<f64>
    where
        S: AsRef<str> + Sync,
    {
        self.thread_pool.install(|| {
            candidates
                .par_iter()
                .map(|candidate| self.scorer.value(one, candidate.as_ref()))
                .collect()
        })
    }
}
