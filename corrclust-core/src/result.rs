//! Result types for clustering operations.
//!
//! Provides the scored output of the local-search heuristics and the numeric
//! cluster identifiers produced by LP rounding.

use std::fmt;

use crate::{clustering::Clustering, graph::Vertex};

/// Output of [`crate::ClusteringEngine`] searches.
///
/// `Display` renders a short report listing each cluster's members sorted
/// ascending.
///
/// # Examples
/// ```
/// use corrclust_core::ClusteringEngine;
///
/// let engine = ClusteringEngine::new(vec![0, 1, 2], [(0, 1)], [(1, 2)])?;
/// let result = engine.greedy_correlation_clustering();
/// assert_eq!(result.mistakes(), 0);
/// assert_eq!(result.cluster_count(), 2);
/// assert!(result.to_string().starts_with("Clustering Result (2 clusters, 0 mistakes):"));
/// # Ok::<(), corrclust_core::CorrelationError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ClusteringResult<V> {
    clustering: Clustering<V, V>,
    mistakes: usize,
    cluster_count: usize,
}

impl<V: Vertex> ClusteringResult<V> {
    pub(crate) fn new(clustering: Clustering<V, V>, mistakes: usize) -> Self {
        let cluster_count = clustering.cluster_count();
        Self {
            clustering,
            mistakes,
            cluster_count,
        }
    }

    /// Returns the vertex-to-label mapping.
    #[must_use]
    pub fn clustering(&self) -> &Clustering<V, V> {
        &self.clustering
    }

    /// Consumes the result, returning the mapping.
    #[must_use]
    pub fn into_clustering(self) -> Clustering<V, V> {
        self.clustering
    }

    /// Number of violated edges under the clustering.
    #[must_use]
    pub fn mistakes(&self) -> usize {
        self.mistakes
    }

    /// Number of distinct labels in use.
    #[must_use]
    pub fn cluster_count(&self) -> usize {
        self.cluster_count
    }
}

impl<V: Vertex> PartialEq for ClusteringResult<V> {
    fn eq(&self, other: &Self) -> bool {
        self.mistakes == other.mistakes && self.clustering == other.clustering
    }
}

impl<V: Vertex> Eq for ClusteringResult<V> {}

impl<V: Vertex> fmt::Display for ClusteringResult<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Clustering Result ({} clusters, {} mistakes):",
            self.cluster_count, self.mistakes
        )?;
        for (label, mut members) in self.clustering.groups() {
            members.sort_unstable();
            let rendered: Vec<String> = members.iter().map(ToString::to_string).collect();
            write!(f, "\nCluster {label}: [{}]", rendered.join(", "))?;
        }
        Ok(())
    }
}

/// Identifier assigned to a cluster opened during LP rounding.
///
/// # Examples
/// ```
/// use corrclust_core::ClusterId;
///
/// let id = ClusterId::new(4);
/// assert_eq!(id.get(), 4);
/// assert_eq!(id.to_string(), "4");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClusterId(u64);

impl ClusterId {
    /// Creates a new cluster identifier.
    #[rustfmt::skip]
    #[must_use]
    pub const fn new(id: u64) -> Self { Self(id) }

    /// Returns the underlying numeric identifier.
    #[rustfmt::skip]
    #[must_use]
    pub const fn get(self) -> u64 { self.0 }

    #[must_use]
    pub(crate) const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for ClusterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_lists_sorted_members() {
        let clustering: Clustering<u32, u32> =
            [(3, 1), (1, 1), (2, 2)].into_iter().collect();
        let result = ClusteringResult::new(clustering, 4);
        assert_eq!(
            result.to_string(),
            "Clustering Result (2 clusters, 4 mistakes):\nCluster 1: [1, 3]\nCluster 2: [2]"
        );
    }

    #[test]
    fn cluster_count_is_derived() {
        let result = ClusteringResult::new(Clustering::singletons(&[1_u8, 2, 3]), 0);
        assert_eq!(result.cluster_count(), 3);
        assert_eq!(result.into_clustering().len(), 3);
    }
}
