//! Signed graphs shared by the integration tests.

use corrclust_core::{ClusteringEngine, LpFormulator};

/// Vertex list, positive edges and negative edges.
pub type GraphParts = (Vec<u32>, Vec<(u32, u32)>, Vec<(u32, u32)>);

/// Two positive pairs separated by negative edges.
#[must_use]
pub fn split_square() -> GraphParts {
    (
        vec![1, 2, 3, 4],
        vec![(1, 2), (3, 4)],
        vec![(1, 3), (2, 4), (1, 4)],
    )
}

/// Two positive edges closing on a negative one; no clustering is perfect.
#[must_use]
pub fn frustrated_triangle() -> GraphParts {
    (vec![0, 1, 2], vec![(0, 1), (1, 2)], vec![(0, 2)])
}

#[must_use]
pub fn engine_for(parts: GraphParts) -> ClusteringEngine<u32> {
    let (vertices, positive, negative) = parts;
    ClusteringEngine::new(vertices, positive, negative).expect("fixture graphs are valid")
}

#[must_use]
pub fn formulator_for(parts: GraphParts) -> LpFormulator<u32> {
    let (vertices, positive, negative) = parts;
    LpFormulator::new(vertices, positive, negative).expect("fixture graphs are valid")
}
