//! Builder utilities for configuring clustering engines and LP formulators.
//!
//! Collects the vertex list and signed edge lists, applies the dual-sign
//! policy, and validates the search budget before anything is constructed.

use std::num::NonZeroUsize;

use crate::{
    Result,
    engine::ClusteringEngine,
    error::CorrelationError,
    graph::{DualSignPolicy, SignedGraph, Vertex},
    lp::{LpFormulator, PlaceholderSolver},
};

/// How [`ClusteringEngine::greedy_correlation_clustering`] treats its label
/// snapshot after a merge is committed mid-pass.
///
/// # Examples
/// ```
/// use corrclust_core::LabelScan;
///
/// assert_eq!(LabelScan::default(), LabelScan::Snapshot);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LabelScan {
    /// Keep scanning the pass's original snapshot, even though some of its
    /// labels may have been merged away.
    #[default]
    Snapshot,
    /// End the pass at the first commit so the next pass scans fresh labels.
    Refresh,
}

/// Configures and constructs [`ClusteringEngine`] and [`LpFormulator`]
/// instances.
///
/// # Examples
/// ```
/// use corrclust_core::{DualSignPolicy, EngineBuilder, LabelScan};
///
/// let engine = EngineBuilder::new(vec![1, 2, 3])
///     .with_positive_edges([(1, 2)])
///     .with_negative_edges([(2, 3), (1, 2)])
///     .with_dual_sign_policy(DualSignPolicy::PreferNegative)
///     .with_label_scan(LabelScan::Refresh)
///     .with_max_passes(4)
///     .build()?;
/// assert_eq!(engine.graph_stats().positive_edge_count, 0);
/// assert_eq!(engine.max_passes(), 4);
/// # Ok::<(), corrclust_core::CorrelationError>(())
/// ```
#[derive(Debug, Clone)]
pub struct EngineBuilder<V> {
    vertices: Vec<V>,
    positive: Vec<(V, V)>,
    negative: Vec<(V, V)>,
    dual_sign_policy: DualSignPolicy,
    label_scan: LabelScan,
    max_passes: Option<usize>,
}

impl<V: Vertex> EngineBuilder<V> {
    /// Starts a builder over `vertices` with no edges and default settings.
    #[must_use]
    pub fn new(vertices: Vec<V>) -> Self {
        Self {
            vertices,
            positive: Vec::new(),
            negative: Vec::new(),
            dual_sign_policy: DualSignPolicy::default(),
            label_scan: LabelScan::default(),
            max_passes: None,
        }
    }

    /// Appends positive edges.
    #[must_use]
    pub fn with_positive_edges(mut self, edges: impl IntoIterator<Item = (V, V)>) -> Self {
        self.positive.extend(edges);
        self
    }

    /// Appends negative edges.
    #[must_use]
    pub fn with_negative_edges(mut self, edges: impl IntoIterator<Item = (V, V)>) -> Self {
        self.negative.extend(edges);
        self
    }

    /// Sets how pairs listed under both signs are resolved.
    #[must_use]
    pub fn with_dual_sign_policy(mut self, policy: DualSignPolicy) -> Self {
        self.dual_sign_policy = policy;
        self
    }

    /// Returns the configured dual-sign policy.
    #[must_use]
    pub fn dual_sign_policy(&self) -> DualSignPolicy {
        self.dual_sign_policy
    }

    /// Sets the label-scan behaviour of the cluster-pair heuristic.
    #[must_use]
    pub fn with_label_scan(mut self, scan: LabelScan) -> Self {
        self.label_scan = scan;
        self
    }

    /// Returns the configured label-scan behaviour.
    #[must_use]
    pub fn label_scan(&self) -> LabelScan {
        self.label_scan
    }

    /// Overrides the outer-pass cap of the cluster-pair heuristic, which
    /// otherwise defaults to the squared vertex count.
    #[must_use]
    pub fn with_max_passes(mut self, passes: usize) -> Self {
        self.max_passes = Some(passes);
        self
    }

    /// Validates the configuration and constructs a [`ClusteringEngine`].
    ///
    /// # Errors
    /// Returns [`CorrelationError::DualSignedEdge`] when a pair carries both
    /// signs under [`DualSignPolicy::Reject`], and
    /// [`CorrelationError::InvalidMaxPasses`] when a zero pass cap was set.
    pub fn build(self) -> Result<ClusteringEngine<V>> {
        let max_passes = self
            .max_passes
            .map(|got| NonZeroUsize::new(got).ok_or(CorrelationError::InvalidMaxPasses { got }))
            .transpose()?;
        let label_scan = self.label_scan;
        let graph = self.into_graph()?;
        Ok(ClusteringEngine::from_parts(graph, label_scan, max_passes))
    }

    /// Constructs an [`LpFormulator`] backed by the [`PlaceholderSolver`].
    ///
    /// Search settings (label scan, pass cap) do not apply to the LP path
    /// and are ignored.
    ///
    /// # Errors
    /// Returns [`CorrelationError::DualSignedEdge`] when a pair carries both
    /// signs under [`DualSignPolicy::Reject`].
    pub fn build_formulator(self) -> Result<LpFormulator<V>> {
        Ok(LpFormulator::from_parts(self.into_graph()?, PlaceholderSolver))
    }

    fn into_graph(self) -> Result<SignedGraph<V>> {
        SignedGraph::new(
            self.vertices,
            self.positive,
            self.negative,
            self.dual_sign_policy,
        )
    }
}
