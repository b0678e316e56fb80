//! LP relaxation of correlation clustering.
//!
//! [`LpFormulator`] turns a signed graph into an [`LpFormulation`]: one
//! `[0, 1]` variable per edge, objective `Σ_{E+} z − Σ_{E−} z`, and the three
//! triangle inequalities for every vertex triple whose three pairs are all
//! edges. Triple enumeration is `O(|V|³)` and the rows are dense, so this is
//! only practical for small graphs.
//!
//! Solving is delegated to an [`LpSolver`]; rounding the solution back into a
//! clustering is a greedy threshold heuristic.

mod canonical;
mod formulation;
mod interpret;
mod solver;

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::{
    Result,
    builder::EngineBuilder,
    clustering::Clustering,
    engine::mistakes::count_mistakes,
    error::LpError,
    graph::{SignedGraph, Vertex},
    result::ClusterId,
};

pub use self::{
    canonical::{CanonicalLp, ObjectiveSense},
    formulation::{ConstraintType, LpFormulation, VariableBounds, variable_name},
    interpret::ROUNDING_THRESHOLD,
    solver::{LpSolution, LpSolver, PLACEHOLDER_VALUE, PlaceholderSolver},
};

use self::interpret::round_solution;

/// Builds, solves and rounds the LP relaxation of one signed graph.
///
/// # Examples
/// ```
/// use corrclust_core::LpFormulator;
///
/// let formulator = LpFormulator::new(vec![1, 2, 3, 4], [(1, 2), (2, 3)], [(1, 4), (3, 4)])?;
/// let lp = formulator.formulate_lp();
/// assert_eq!(lp.variable_names(), ["z_1_2", "z_2_3", "z_1_4", "z_3_4"]);
/// assert_eq!(lp.objective(), [1.0, 1.0, -1.0, -1.0]);
/// assert!(lp.constraints().is_empty());
/// # Ok::<(), corrclust_core::CorrelationError>(())
/// ```
#[derive(Debug, Clone)]
pub struct LpFormulator<V, S = PlaceholderSolver> {
    graph: SignedGraph<V>,
    solver: S,
}

impl<V: Vertex> LpFormulator<V> {
    /// Builds a formulator backed by the [`PlaceholderSolver`].
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
            .build_formulator()
    }
}

impl<V: Vertex, S: LpSolver<V>> LpFormulator<V, S> {
    pub(crate) const fn from_parts(graph: SignedGraph<V>, solver: S) -> Self {
        Self { graph, solver }
    }

    /// Replaces the solver used by [`Self::solve_lp`].
    #[must_use]
    pub fn with_solver<T: LpSolver<V>>(self, solver: T) -> LpFormulator<V, T> {
        LpFormulator {
            graph: self.graph,
            solver,
        }
    }

    /// Returns the underlying signed graph.
    #[must_use]
    pub fn graph(&self) -> &SignedGraph<V> {
        &self.graph
    }

    /// Returns the configured solver.
    #[must_use]
    pub fn solver(&self) -> &S {
        &self.solver
    }

    /// Emits the LP relaxation.
    ///
    /// Variables follow edge order: positive edges, then negative, each in
    /// first-insertion order. Triples are drawn as `i < j < k` over vertex
    /// list positions; a triple is skipped unless all three pairs are edges
    /// of either sign.
    #[must_use]
    #[instrument(
        name = "lp.formulate",
        skip(self),
        fields(vertices = self.graph.vertices().len()),
    )]
    pub fn formulate_lp(&self) -> LpFormulation<V> {
        let mut formulation = LpFormulation::with_variables(self.graph.signed_edges().collect());
        let vertices = self.graph.vertices();
        for (i, &a) in vertices.iter().enumerate() {
            for (j, &b) in vertices.iter().enumerate().skip(i + 1) {
                let Some(ab) = formulation.variable_index(a, b) else {
                    continue;
                };
                for &c in vertices.iter().skip(j + 1) {
                    let (Some(ac), Some(bc)) =
                        (formulation.variable_index(a, c), formulation.variable_index(b, c))
                    else {
                        continue;
                    };
                    formulation.push_triangle(ab, ac, bc);
                }
            }
        }
        debug!(
            variables = formulation.variable_count(),
            constraints = formulation.constraints().len(),
            "formulated LP relaxation"
        );
        formulation
    }

    /// Solves `formulation` with the configured solver.
    ///
    /// # Errors
    /// Returns [`LpError::Solver`] wrapping the solver's failure.
    #[instrument(
        name = "lp.solve",
        err,
        skip(self, formulation),
        fields(solver = %self.solver.name(), variables = formulation.variable_count()),
    )]
    pub fn solve_lp(
        &self,
        formulation: &LpFormulation<V>,
    ) -> core::result::Result<LpSolution, LpError> {
        self.solver
            .solve(formulation)
            .map_err(|error| LpError::Solver {
                solver: Arc::from(self.solver.name()),
                error,
            })
    }

    /// Rounds a solution into a clustering labelled by [`ClusterId`].
    ///
    /// Every vertex of the graph receives a label whatever the values.
    #[must_use]
    #[instrument(
        name = "lp.interpret",
        skip(self, solution),
        fields(authoritative = solution.is_authoritative()),
    )]
    pub fn interpret_solution(&self, solution: &LpSolution) -> Clustering<V, ClusterId> {
        round_solution(self.graph.vertices(), solution)
    }

    /// Formulates, solves and rounds in one call, scoring the rounded
    /// clustering against the graph.
    ///
    /// # Errors
    /// Returns [`LpError::Solver`] when the solver fails.
    pub fn cluster_via_lp(&self) -> core::result::Result<LpClustering<V>, LpError> {
        let formulation = self.formulate_lp();
        let solution = self.solve_lp(&formulation)?;
        let objective_value = formulation.objective_value(&solution);
        let clustering = self.interpret_solution(&solution);
        let mistakes = count_mistakes(&self.graph, |vertex| clustering.label(vertex).copied());
        Ok(LpClustering {
            cluster_count: clustering.cluster_count(),
            clustering,
            mistakes,
            objective_value,
            authoritative: solution.is_authoritative(),
        })
    }
}

/// Rounded LP clustering with its score.
#[derive(Debug, Clone)]
pub struct LpClustering<V> {
    clustering: Clustering<V, ClusterId>,
    mistakes: usize,
    cluster_count: usize,
    objective_value: Option<f64>,
    authoritative: bool,
}

impl<V: Vertex> LpClustering<V> {
    /// The rounded clustering.
    #[must_use]
    pub fn clustering(&self) -> &Clustering<V, ClusterId> {
        &self.clustering
    }

    /// Violated edges under the rounded clustering.
    #[must_use]
    pub fn mistakes(&self) -> usize {
        self.mistakes
    }

    /// Distinct clusters opened by rounding.
    #[must_use]
    pub fn cluster_count(&self) -> usize {
        self.cluster_count
    }

    /// Relaxed disagreement (objective plus `|E−|`) at the solver's values,
    /// if every variable was valued.
    #[must_use]
    pub fn objective_value(&self) -> Option<f64> {
        self.objective_value
    }

    /// Whether the underlying solution came from a real solver.
    #[must_use]
    pub fn is_authoritative(&self) -> bool {
        self.authoritative
    }
}
