//! Signed graph model shared by the clustering engine and the LP formulator.
//!
//! A [`SignedGraph`] keeps the caller's vertex order (search scans and
//! triangle enumeration depend on it) together with one [`SignedEdgeSet`] per
//! sign. Edge endpoints are not checked against the vertex list.

mod edge;

use std::{fmt, hash::Hash, sync::Arc};

use tracing::debug;

use crate::error::{CorrelationError, Result};

pub use self::edge::{EdgeKey, Sign, SignedEdgeSet};

/// Identifier accepted as a graph vertex.
///
/// Blanket-implemented for every `Copy + Ord + Hash + Debug + Display` type,
/// so integers and small newtypes qualify without ceremony. `Display` feeds
/// the `z_<u>_<v>` LP variable names.
pub trait Vertex: Copy + Eq + Ord + Hash + fmt::Debug + fmt::Display {}

impl<T> Vertex for T where T: Copy + Eq + Ord + Hash + fmt::Debug + fmt::Display {}

/// How construction resolves a pair listed under both signs.
///
/// # Examples
/// ```
/// use corrclust_core::DualSignPolicy;
///
/// assert_eq!(DualSignPolicy::default(), DualSignPolicy::Reject);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DualSignPolicy {
    /// Fail with [`CorrelationError::DualSignedEdge`].
    #[default]
    Reject,
    /// Keep the positive entry and drop the negative one.
    PreferPositive,
    /// Keep the negative entry and drop the positive one.
    PreferNegative,
}

/// Diagnostic counts describing a [`SignedGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphStats {
    /// Length of the supplied vertex list.
    pub vertex_count: usize,
    /// Distinct positive edges.
    pub positive_edge_count: usize,
    /// Distinct negative edges.
    pub negative_edge_count: usize,
    /// Sum of positive and negative edges.
    pub total_edge_count: usize,
}

/// Vertices plus positive and negative edge sets.
///
/// # Examples
/// ```
/// use corrclust_core::{DualSignPolicy, Sign, SignedGraph};
///
/// let graph = SignedGraph::new(
///     vec![0, 1, 2],
///     [(0, 1)],
///     [(2, 1)],
///     DualSignPolicy::Reject,
/// )?;
/// assert_eq!(graph.sign_of(1, 2), Some(Sign::Negative));
/// assert_eq!(graph.stats().total_edge_count, 2);
/// # Ok::<(), corrclust_core::CorrelationError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SignedGraph<V> {
    vertices: Vec<V>,
    positive: SignedEdgeSet<V>,
    negative: SignedEdgeSet<V>,
}

impl<V: Vertex> SignedGraph<V> {
    /// Builds a graph, resolving dual-signed pairs according to `policy`.
    ///
    /// # Errors
    /// Returns [`CorrelationError::DualSignedEdge`] for the first pair found
    /// in both lists when `policy` is [`DualSignPolicy::Reject`].
    pub fn new(
        vertices: Vec<V>,
        positive: impl IntoIterator<Item = (V, V)>,
        negative: impl IntoIterator<Item = (V, V)>,
        policy: DualSignPolicy,
    ) -> Result<Self> {
        let mut positive: SignedEdgeSet<V> = positive.into_iter().collect();
        let mut negative: SignedEdgeSet<V> = negative.into_iter().collect();

        let conflicts: Vec<EdgeKey<V>> = positive
            .iter()
            .filter(|key| negative.contains_key(key))
            .collect();
        if let Some(first) = conflicts.first() {
            match policy {
                DualSignPolicy::Reject => {
                    return Err(CorrelationError::DualSignedEdge {
                        left: Arc::from(first.left().to_string()),
                        right: Arc::from(first.right().to_string()),
                    });
                }
                DualSignPolicy::PreferPositive => {
                    negative.retain(|key| !positive.contains_key(key));
                }
                DualSignPolicy::PreferNegative => {
                    positive.retain(|key| !negative.contains_key(key));
                }
            }
            debug!(
                conflicts = conflicts.len(),
                policy = ?policy,
                "resolved dual-signed edges"
            );
        }

        Ok(Self {
            vertices,
            positive,
            negative,
        })
    }

    /// Returns the vertices in caller order.
    #[must_use]
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// Returns the positive edge set.
    #[must_use]
    pub fn positive(&self) -> &SignedEdgeSet<V> {
        &self.positive
    }

    /// Returns the negative edge set.
    #[must_use]
    pub fn negative(&self) -> &SignedEdgeSet<V> {
        &self.negative
    }

    /// Looks up the sign of the pair in either orientation.
    #[must_use]
    pub fn sign_of(&self, u: V, v: V) -> Option<Sign> {
        let key = EdgeKey::new(u, v);
        if self.positive.contains_key(&key) {
            Some(Sign::Positive)
        } else if self.negative.contains_key(&key) {
            Some(Sign::Negative)
        } else {
            None
        }
    }

    /// Iterates every edge with its sign: positives first, then negatives.
    pub fn signed_edges(&self) -> impl Iterator<Item = (EdgeKey<V>, Sign)> + '_ {
        self.positive
            .iter()
            .map(|key| (key, Sign::Positive))
            .chain(self.negative.iter().map(|key| (key, Sign::Negative)))
    }

    /// Returns vertex and edge counts.
    #[must_use]
    pub fn stats(&self) -> GraphStats {
        let positive_edge_count = self.positive.len();
        let negative_edge_count = self.negative.len();
        GraphStats {
            vertex_count: self.vertices.len(),
            positive_edge_count,
            negative_edge_count,
            total_edge_count: positive_edge_count + negative_edge_count,
        }
    }
}
