//! Threshold rounding of relaxed pair values into a clustering.

use crate::{clustering::Clustering, graph::Vertex, result::ClusterId};

use super::{formulation::variable_name, solver::LpSolution};

/// Pair values strictly below this join the opening vertex's cluster.
pub const ROUNDING_THRESHOLD: f64 = 0.5;

/// Looks up the pair value under either name orientation, `z_u_v` first.
fn pair_value<V: Vertex>(solution: &LpSolution, u: V, v: V) -> Option<f64> {
    solution
        .get(&variable_name(u, v))
        .or_else(|| solution.get(&variable_name(v, u)))
}

/// Opens a cluster at each still-unlabelled vertex (in `vertices` order) and
/// pulls in every other vertex whose pair value is present and below
/// [`ROUNDING_THRESHOLD`].
///
/// Pulled vertices are relabelled even when an earlier cluster already
/// claimed them, and a vertex is never the opener once labelled, so the
/// outcome depends on vertex order and need not be transitive.
pub(super) fn round_solution<V: Vertex>(
    vertices: &[V],
    solution: &LpSolution,
) -> Clustering<V, ClusterId> {
    let mut clustering = Clustering::new();
    let mut next = ClusterId::new(0);
    for &opener in vertices {
        if clustering.contains(opener) {
            continue;
        }
        clustering.assign(opener, next);
        for &other in vertices {
            if other == opener {
                continue;
            }
            if pair_value(solution, opener, other).is_some_and(|z| z < ROUNDING_THRESHOLD) {
                clustering.assign(other, next);
            }
        }
        next = next.next();
    }
    clustering
}
