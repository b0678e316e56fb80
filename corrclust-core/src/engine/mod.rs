//! Correlation clustering over signed graphs.
//!
//! [`ClusteringEngine`] owns a [`SignedGraph`] and runs two greedy local
//! searches over it, both starting from singleton clusters and committing
//! the first strictly improving merge found in scan order:
//!
//! - [`ClusteringEngine::greedy_correlation_clustering`] merges whole label
//!   pairs taken from a per-pass snapshot, bounded by a pass budget.
//! - [`ClusteringEngine::simple_greedy_clustering`] merges the clusters of
//!   ordered vertex pairs until a full pass commits nothing.
//!
//! Correlation clustering is NP-hard; neither search is exact. Each search
//! threads its own working [`Clustering`] value, so `&self` methods never
//! mutate the engine.

pub(crate) mod mistakes;
mod search;

use std::num::NonZeroUsize;

use crate::{
    Result,
    builder::{EngineBuilder, LabelScan},
    clustering::Clustering,
    graph::{GraphStats, SignedGraph, Vertex},
};

use self::mistakes::count_mistakes;

/// Local-search engine for correlation clustering.
///
/// # Examples
/// ```
/// use corrclust_core::ClusteringEngine;
///
/// let engine = ClusteringEngine::new(vec![0, 1, 2], [(0, 1), (1, 2), (0, 2)], [])?;
/// let result = engine.greedy_correlation_clustering();
/// assert_eq!(result.mistakes(), 0);
/// assert_eq!(result.cluster_count(), 1);
/// assert!(engine.validate_clustering(result.clustering()));
/// # Ok::<(), corrclust_core::CorrelationError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ClusteringEngine<V> {
    graph: SignedGraph<V>,
    label_scan: LabelScan,
    max_passes: Option<NonZeroUsize>,
}

impl<V: Vertex> ClusteringEngine<V> {
    /// Builds an engine with default settings.
    ///
    /// # Errors
    /// Returns [`crate::CorrelationError::DualSignedEdge`] when a pair is
    /// listed under both signs.
    pub fn new(
        vertices: Vec<V>,
        positive: impl IntoIterator<Item = (V, V)>,
        negative: impl IntoIterator<Item = (V, V)>,
    ) -> Result<Self> {
        EngineBuilder::new(vertices)
            .with_positive_edges(positive)
            .with_negative_edges(negative)
            .build()
    }

    pub(crate) const fn from_parts(
        graph: SignedGraph<V>,
        label_scan: LabelScan,
        max_passes: Option<NonZeroUsize>,
    ) -> Self {
        Self {
            graph,
            label_scan,
            max_passes,
        }
    }

    /// Returns the underlying signed graph.
    #[must_use]
    pub fn graph(&self) -> &SignedGraph<V> {
        &self.graph
    }

    /// Returns the configured label-scan behaviour.
    #[must_use]
    pub fn label_scan(&self) -> LabelScan {
        self.label_scan
    }

    /// Outer-pass cap applied by the cluster-pair heuristic.
    #[must_use]
    pub fn max_passes(&self) -> usize {
        self.max_passes.map_or_else(
            || {
                let n = self.graph.vertices().len();
                n.saturating_mul(n)
            },
            NonZeroUsize::get,
        )
    }

    /// Counts positive edges split across labels plus negative edges kept
    /// under one label.
    ///
    /// Vertices missing from `clustering` compare as "undefined", and two
    /// undefined endpoints count as sharing a label.
    ///
    /// # Examples
    /// ```
    /// use corrclust_core::{Clustering, ClusteringEngine};
    ///
    /// let engine = ClusteringEngine::new(vec![0, 1, 2], [(0, 1)], [(0, 2), (1, 2)])?;
    /// let together: Clustering<i32, i32> = [(0, 0), (1, 0), (2, 0)].into_iter().collect();
    /// assert_eq!(engine.calculate_mistakes(&together), 2);
    /// # Ok::<(), corrclust_core::CorrelationError>(())
    /// ```
    #[must_use]
    pub fn calculate_mistakes<L>(&self, clustering: &Clustering<V, L>) -> usize
    where
        L: Copy + Eq + std::hash::Hash,
    {
        count_mistakes(&self.graph, |vertex| clustering.label(vertex).copied())
    }

    /// Groups vertices by label in insertion order.
    #[must_use]
    pub fn clusters_as_arrays<L>(&self, clustering: &Clustering<V, L>) -> Vec<(L, Vec<V>)>
    where
        L: Copy + Eq + std::hash::Hash,
    {
        clustering.groups()
    }

    /// Reports whether every vertex supplied at construction has a label.
    #[must_use]
    pub fn validate_clustering<L>(&self, clustering: &Clustering<V, L>) -> bool
    where
        L: Copy + Eq + std::hash::Hash,
    {
        self.graph
            .vertices()
            .iter()
            .all(|&vertex| clustering.contains(vertex))
    }

    /// Returns vertex and edge counts.
    #[must_use]
    pub fn graph_stats(&self) -> GraphStats {
        self.graph.stats()
    }
}


#[cfg(test)]
mod property;
