//! Canonical undirected edge keys and insertion-ordered edge sets.

use std::collections::HashSet;

use super::Vertex;

/// Sign carried by an edge of a signed graph.
///
/// # Examples
/// ```
/// use corrclust_core::Sign;
///
/// assert_eq!(Sign::Positive.weight(), 1);
/// assert_eq!(Sign::Negative.weight(), -1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    /// The endpoints should share a cluster.
    Positive,
    /// The endpoints should be separated.
    Negative,
}

impl Sign {
    /// Returns `+1` or `-1`.
    #[must_use]
    pub const fn weight(self) -> i8 {
        match self {
            Self::Positive => 1,
            Self::Negative => -1,
        }
    }
}

/// An undirected edge stored under its canonical `(smaller, larger)` order.
///
/// # Examples
/// ```
/// use corrclust_core::EdgeKey;
///
/// assert_eq!(EdgeKey::new(5, 2), EdgeKey::new(2, 5));
/// assert_eq!(EdgeKey::new(5, 2).left(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey<V> {
    left: V,
    right: V,
}

impl<V: Vertex> EdgeKey<V> {
    /// Builds the canonical key for the pair `(u, v)`.
    #[must_use]
    pub fn new(u: V, v: V) -> Self {
        if v < u {
            Self { left: v, right: u }
        } else {
            Self { left: u, right: v }
        }
    }

    /// Returns the smaller endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub fn left(&self) -> V { self.left }

    /// Returns the larger endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub fn right(&self) -> V { self.right }

    /// Returns both endpoints as a tuple.
    #[must_use]
    pub fn endpoints(&self) -> (V, V) {
        (self.left, self.right)
    }
}

/// De-duplicated edge collection that remembers first-insertion order.
///
/// Both orientations of a pair map to the same [`EdgeKey`], so `(1, 2)` and
/// `(2, 1)` occupy a single slot.
///
/// # Examples
/// ```
/// use corrclust_core::SignedEdgeSet;
///
/// let set: SignedEdgeSet<u32> = [(2, 1), (1, 2), (3, 1)].into_iter().collect();
/// assert_eq!(set.len(), 2);
/// assert!(set.contains(1, 3));
/// ```
#[derive(Debug, Clone)]
pub struct SignedEdgeSet<V> {
    order: Vec<EdgeKey<V>>,
    members: HashSet<EdgeKey<V>>,
}

impl<V> Default for SignedEdgeSet<V> {
    fn default() -> Self {
        Self {
            order: Vec::new(),
            members: HashSet::new(),
        }
    }
}

impl<V: Vertex> SignedEdgeSet<V> {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts the pair, returning `false` if it was already present.
    pub fn insert(&mut self, u: V, v: V) -> bool {
        let key = EdgeKey::new(u, v);
        if !self.members.insert(key) {
            return false;
        }
        self.order.push(key);
        true
    }

    /// Reports whether the pair is present in either orientation.
    #[must_use]
    pub fn contains(&self, u: V, v: V) -> bool {
        self.members.contains(&EdgeKey::new(u, v))
    }

    /// Reports whether the canonical key is present.
    #[must_use]
    pub fn contains_key(&self, key: &EdgeKey<V>) -> bool {
        self.members.contains(key)
    }

    /// Number of distinct edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the set holds no edges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterates the edges in first-insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = EdgeKey<V>> + '_ {
        self.order.iter().copied()
    }

    pub(crate) fn retain(&mut self, mut keep: impl FnMut(&EdgeKey<V>) -> bool) {
        let members = &mut self.members;
        self.order.retain(|key| {
            let kept = keep(key);
            if !kept {
                members.remove(key);
            }
            kept
        });
    }
}

impl<V: Vertex> FromIterator<(V, V)> for SignedEdgeSet<V> {
    fn from_iter<I: IntoIterator<Item = (V, V)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (u, v) in iter {
            set.insert(u, v);
        }
        set
    }
}
