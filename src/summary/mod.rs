//! Network summary orchestration
//!
//! Runs every analyzer against one read-only [`GraphStore`] and folds the results
//! into a [`MetricsRecord`]. Component analysis and distance estimation form one
//! branch (the estimator needs the largest component); degree, clustering and
//! assortativity run concurrently on the other.

pub mod config;
pub mod record;

pub use config::SummaryConfig;
pub use record::{Metric, MetricsRecord};

use crate::algo::{self, DegreeTable, MeanDegree};
use crate::graph::{GraphError, GraphStore};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::time::Instant;
use thiserror::Error;

/// Errors that can occur while summarizing a network
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SummaryError {
    #[error("Graph '{name}': {source}")]
    MalformedGraph {
        name: String,
        #[source]
        source: GraphError,
    },

    #[error("Graph name must not be empty")]
    EmptyName,

    #[error("Graph name '{0}' appears more than once in the batch")]
    DuplicateName(String),
}

pub type SummaryResult<T> = Result<T, SummaryError>;

/// Builds one [`MetricsRecord`] per graph
#[derive(Debug, Clone, Default)]
pub struct NetworkSummary {
    config: SummaryConfig,
}

impl NetworkSummary {
    pub fn new(config: SummaryConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SummaryConfig {
        &self.config
    }

    /// Summarize one graph.
    pub fn summarize(&self, store: &GraphStore, name: &str) -> SummaryResult<MetricsRecord> {
        validate_name(name)?;
        Ok(self.run(|| compute(store, name, &self.config)))
    }

    /// Build a graph from token rows and summarize it.
    ///
    /// Construction failures are reported with the graph's name.
    pub fn summarize_rows<I, R, S>(
        &self,
        name: &str,
        rows: I,
        directed: bool,
    ) -> SummaryResult<MetricsRecord>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        validate_name(name)?;
        let store = GraphStore::build(rows, directed).map_err(|source| SummaryError::MalformedGraph {
            name: name.to_string(),
            source,
        })?;
        self.summarize(&store, name)
    }

    /// Summarize independent graphs in parallel.
    ///
    /// Returns one result per input, in input order. A bad entry (empty or
    /// repeated name) fails on its own; the first occurrence of a name wins.
    pub fn summarize_batch<'a, I>(&self, graphs: I) -> Vec<SummaryResult<MetricsRecord>>
    where
        I: IntoIterator<Item = (&'a str, &'a GraphStore)>,
    {
        let graphs: Vec<(&str, &GraphStore)> = graphs.into_iter().collect();

        let mut seen = FxHashSet::default();
        let checks: Vec<SummaryResult<()>> = graphs
            .iter()
            .map(|&(name, _)| -> SummaryResult<()> {
                validate_name(name)?;
                if !seen.insert(name) {
                    return Err(SummaryError::DuplicateName(name.to_string()));
                }
                Ok(())
            })
            .collect();

        let results: Vec<SummaryResult<MetricsRecord>> = self.run(|| {
            graphs
                .par_iter()
                .zip(checks.into_par_iter())
                .map(|(&(name, store), check)| -> SummaryResult<MetricsRecord> {
                    check?;
                    Ok(compute(store, name, &self.config))
                })
                .collect()
        });

        for (result, &(name, _)) in results.iter().zip(&graphs) {
            if let Err(e) = result {
                tracing::warn!(name, error = %e, "graph skipped");
            }
        }

        results
    }

    /// Run `op` on the global rayon pool, or on a single worker when the
    /// config asks for sequential execution.
    fn run<T, F>(&self, op: F) -> T
    where
        T: Send,
        F: FnOnce() -> T + Send,
    {
        if self.config.parallel {
            return op();
        }
        match rayon::ThreadPoolBuilder::new().num_threads(1).build() {
            Ok(pool) => pool.install(op),
            Err(e) => {
                tracing::warn!(error = %e, "single-thread pool unavailable, using global pool");
                op()
            }
        }
    }
}

fn validate_name(name: &str) -> SummaryResult<()> {
    if name.trim().is_empty() {
        return Err(SummaryError::EmptyName);
    }
    Ok(())
}

fn compute(store: &GraphStore, name: &str, config: &SummaryConfig) -> MetricsRecord {
    let started = Instant::now();

    let ((largest, avg_distance), (degrees, (avg_clustering, assortativity))) = rayon::join(
        || {
            let largest = algo::largest_component(store);
            let avg_distance = config.estimate_distance.then(|| {
                let mut rng = config.rng();
                Metric::from(algo::estimate_average_distance(
                    store,
                    &largest.members,
                    config.distance_sample_size,
                    &mut rng,
                ))
            });
            (largest, avg_distance)
        },
        || {
            rayon::join(
                || DegreeTable::compute(store),
                || {
                    rayon::join(
                        || Metric::from(algo::average_clustering(store)),
                        || Metric::from(algo::degree_assortativity(store)),
                    )
                },
            )
        },
    );

    let mut record = MetricsRecord {
        name: name.to_string(),
        directed: store.is_directed(),
        n: store.node_count(),
        m: store.edge_count(),
        density: store.density(),
        k: None,
        k_in: None,
        k_out: None,
        largest_component_fraction: largest.fraction,
        avg_clustering,
        assortativity,
        avg_distance,
        max_in_node: None,
        max_in_deg: None,
        max_out_node: None,
        max_out_deg: None,
        max_node: None,
        max_deg: None,
    };

    match degrees.mean() {
        MeanDegree::Directed { k_in, k_out } => {
            record.k_in = Some(k_in);
            record.k_out = Some(k_out);
        }
        MeanDegree::Undirected { k } => record.k = Some(k),
    }

    if config.include_degree_extremes {
        match &degrees {
            DegreeTable::Directed {
                in_degrees,
                out_degrees,
            } => {
                if let Some(max_in) = algo::max_degree_node(store, in_degrees) {
                    record.max_in_node = Some(max_in.node);
                    record.max_in_deg = Some(max_in.degree);
                }
                if let Some(max_out) = algo::max_degree_node(store, out_degrees) {
                    record.max_out_node = Some(max_out.node);
                    record.max_out_deg = Some(max_out.degree);
                }
            }
            DegreeTable::Undirected { degrees } => {
                if let Some(max) = algo::max_degree_node(store, degrees) {
                    record.max_node = Some(max.node);
                    record.max_deg = Some(max.degree);
                }
            }
        }
    }

    tracing::info!(
        name,
        nodes = record.n,
        edges = record.m,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "network summarized"
    );

    record
}
