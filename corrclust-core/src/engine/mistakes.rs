//! Mistake counting shared by the engine searches and LP scoring.

use crate::graph::{SignedGraph, Vertex};

/// Counts violated edges under the labelling `label_of`.
///
/// `None` stands for an unlabelled vertex; two `None`s compare equal.
pub(crate) fn count_mistakes<V, L, F>(graph: &SignedGraph<V>, label_of: F) -> usize
where
    V: Vertex,
    L: Eq,
    F: Fn(V) -> Option<L>,
{
    let split = graph
        .positive()
        .iter()
        .filter(|key| label_of(key.left()) != label_of(key.right()))
        .count();
    let joined = graph
        .negative()
        .iter()
        .filter(|key| label_of(key.left()) == label_of(key.right()))
        .count();
    split + joined
}

/// Counts violated edges as if every vertex labelled `from` carried `to`.
pub(crate) fn count_mistakes_after_merge<V, L, F>(
    graph: &SignedGraph<V>,
    label_of: F,
    from: L,
    to: L,
) -> usize
where
    V: Vertex,
    L: Copy + Eq,
    F: Fn(V) -> Option<L>,
{
    count_mistakes(graph, |vertex| {
        label_of(vertex).map(|label| if label == from { to } else { label })
    })
}
