//! Vertex-to-label assignments.

use std::collections::{HashMap, HashSet, hash_map::Entry};
use std::hash::Hash;

use crate::graph::Vertex;

/// Insertion-ordered mapping from vertex to cluster label.
///
/// The engine labels clusters with vertex ids (`L = V`); LP rounding uses
/// [`crate::ClusterId`]. Looking up a vertex that was never assigned yields
/// `None`.
///
/// # Examples
/// ```
/// use corrclust_core::Clustering;
///
/// let mut clustering = Clustering::singletons(&[1, 2, 3]);
/// clustering.relabel(&1, &2);
/// assert_eq!(clustering.label(1), Some(&2));
/// assert_eq!(clustering.cluster_count(), 2);
/// assert_eq!(clustering.label(9), None);
/// ```
#[derive(Debug, Clone)]
pub struct Clustering<V, L> {
    order: Vec<V>,
    labels: HashMap<V, L>,
}

impl<V, L> Default for Clustering<V, L> {
    fn default() -> Self {
        Self {
            order: Vec::new(),
            labels: HashMap::new(),
        }
    }
}

impl<V: Vertex> Clustering<V, V> {
    /// Places every vertex in its own cluster, labelled by its own id.
    #[must_use]
    pub fn singletons(vertices: &[V]) -> Self {
        vertices.iter().map(|&vertex| (vertex, vertex)).collect()
    }
}

impl<V: Vertex, L: Copy + Eq + Hash> Clustering<V, L> {
    /// Creates an empty clustering.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns `label` to `vertex`, keeping its original position when the
    /// vertex is already present.
    pub fn assign(&mut self, vertex: V, label: L) {
        match self.labels.entry(vertex) {
            Entry::Occupied(mut slot) => {
                slot.insert(label);
            }
            Entry::Vacant(slot) => {
                slot.insert(label);
                self.order.push(vertex);
            }
        }
    }

    /// Returns the label of `vertex`, or `None` when it is unassigned.
    #[must_use]
    pub fn label(&self, vertex: V) -> Option<&L> {
        self.labels.get(&vertex)
    }

    /// Whether `vertex` carries a label.
    #[must_use]
    pub fn contains(&self, vertex: V) -> bool {
        self.labels.contains_key(&vertex)
    }

    /// Number of labelled vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether no vertex is labelled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterates `(vertex, label)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (V, L)> + '_ {
        self.order
            .iter()
            .filter_map(|vertex| self.labels.get(vertex).map(|&label| (*vertex, label)))
    }

    /// Moves every vertex labelled `from` to `to`, returning how many moved.
    pub fn relabel(&mut self, from: &L, to: &L) -> usize {
        let mut moved = 0;
        for label in self.labels.values_mut() {
            if label == from {
                *label = *to;
                moved += 1;
            }
        }
        moved
    }

    /// Distinct labels in order of first appearance.
    #[must_use]
    pub fn distinct_labels(&self) -> Vec<L> {
        let mut seen = HashSet::new();
        self.iter()
            .filter_map(|(_, label)| seen.insert(label).then_some(label))
            .collect()
    }

    /// Number of distinct labels in use.
    #[must_use]
    pub fn cluster_count(&self) -> usize {
        self.labels.values().collect::<HashSet<_>>().len()
    }

    /// Groups vertices by label; groups and members follow insertion order.
    #[must_use]
    pub fn groups(&self) -> Vec<(L, Vec<V>)> {
        let mut slots: HashMap<L, usize> = HashMap::new();
        let mut groups: Vec<(L, Vec<V>)> = Vec::new();
        for (vertex, label) in self.iter() {
            match slots.get(&label).and_then(|&slot| groups.get_mut(slot)) {
                Some((_, members)) => members.push(vertex),
                None => {
                    slots.insert(label, groups.len());
                    groups.push((label, vec![vertex]));
                }
            }
        }
        groups
    }
}

impl<V: Vertex, L: Copy + Eq + Hash> FromIterator<(V, L)> for Clustering<V, L> {
    fn from_iter<I: IntoIterator<Item = (V, L)>>(iter: I) -> Self {
        let mut clustering = Self::new();
        for (vertex, label) in iter {
            clustering.assign(vertex, label);
        }
        clustering
    }
}

impl<V: Vertex, L: Copy + Eq + Hash> PartialEq for Clustering<V, L> {
    fn eq(&self, other: &Self) -> bool {
        self.labels == other.labels
    }
}

impl<V: Vertex, L: Copy + Eq + Hash> Eq for Clustering<V, L> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reassigning_keeps_position() {
        let mut clustering: Clustering<u8, u8> = [(3, 3), (1, 1), (2, 2)].into_iter().collect();
        clustering.assign(3, 1);
        let pairs: Vec<_> = clustering.iter().collect();
        assert_eq!(pairs, vec![(3, 1), (1, 1), (2, 2)]);
        assert_eq!(clustering.len(), 3);
    }

    #[test]
    fn groups_follow_first_appearance() {
        let clustering: Clustering<u8, char> =
            [(0, 'b'), (1, 'a'), (2, 'b'), (3, 'c'), (4, 'a')].into_iter().collect();
        assert_eq!(
            clustering.groups(),
            vec![('b', vec![0, 2]), ('a', vec![1, 4]), ('c', vec![3])]
        );
        assert_eq!(clustering.distinct_labels(), vec!['b', 'a', 'c']);
        assert_eq!(clustering.cluster_count(), 3);
    }

    #[test]
    fn relabel_reports_moved_vertices() {
        let mut clustering = Clustering::singletons(&[5, 6, 7]);
        assert_eq!(clustering.relabel(&5, &6), 1);
        assert_eq!(clustering.relabel(&6, &7), 2);
        assert_eq!(clustering.cluster_count(), 1);
        assert_eq!(clustering.relabel(&5, &7), 0);
    }
}
