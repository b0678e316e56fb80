//! Tests for the LP formulation, solver seam and rounding.

mod common;

use std::collections::HashMap;

use common::{GraphParts, engine_for, formulator_for, frustrated_triangle, split_square};
use corrclust_core::{
    ClusterId, LpErrorCode, LpFormulation, LpFormulator, LpSolution, LpSolveError, LpSolver,
    PLACEHOLDER_VALUE, PlaceholderSolver, Vertex,
};
use rstest::{fixture, rstest};
use tracing::Level;

use corrclust_test_support::tracing::with_recording;

/// Rounds every negative edge apart and every other pair together.
struct SignOracle;

impl<V: Vertex> LpSolver<V> for SignOracle {
    fn name(&self) -> &str {
        "sign-oracle"
    }

    fn solve(&self, formulation: &LpFormulation<V>) -> Result<LpSolution, LpSolveError> {
        let values: HashMap<String, f64> = formulation
            .variable_names()
            .iter()
            .zip(formulation.objective())
            .map(|(name, &coefficient)| (name.clone(), if coefficient < 0.0 { 1.0 } else { 0.0 }))
            .collect();
        Ok(LpSolution::from_values(values))
    }
}

#[fixture]
fn square() -> LpFormulator<u32> {
    formulator_for(split_square())
}

#[rstest]
fn formulation_covers_each_edge_once(square: LpFormulator<u32>) {
    let lp = square.formulate_lp();
    assert_eq!(
        lp.variable_names(),
        ["z_1_2", "z_3_4", "z_1_3", "z_2_4", "z_1_4"]
    );
    assert_eq!(lp.objective(), [1.0, 1.0, -1.0, -1.0, -1.0]);
    // Only (1, 2, 4) and (1, 3, 4) have an edge on every pair.
    assert_eq!(lp.constraints().len(), 6);
    assert_eq!(lp.objective_offset(), 3.0);
}

#[rstest]
fn placeholder_solution_is_flagged(square: LpFormulator<u32>) {
    let lp = square.formulate_lp();
    let (solution, layer) = with_recording(|| square.solve_lp(&lp));
    let solution = solution.expect("placeholder never fails");
    assert!(!solution.is_authoritative());
    assert_eq!(solution.len(), lp.variable_count());
    assert!(solution.iter().all(|(_, value)| value == PLACEHOLDER_VALUE));
    let warnings: Vec<_> = layer
        .events()
        .into_iter()
        .filter(|event| event.level == Level::WARN)
        .collect();
    assert_eq!(warnings.len(), 1);
}

#[rstest]
#[case::square(split_square())]
#[case::frustrated(frustrated_triangle())]
fn rounding_labels_every_vertex(#[case] parts: GraphParts) {
    let vertices = parts.0.clone();
    let formulator = formulator_for(parts);
    let lp = formulator.formulate_lp();
    let solution = formulator.solve_lp(&lp).expect("placeholder never fails");
    let clustering = formulator.interpret_solution(&solution);
    assert_eq!(clustering.len(), vertices.len());
    assert!(vertices.iter().all(|&vertex| clustering.contains(vertex)));
}

#[rstest]
fn integral_solution_reproduces_the_greedy_partition(square: LpFormulator<u32>) {
    let oracle = square.with_solver(SignOracle);
    let outcome = oracle.cluster_via_lp().expect("oracle succeeds");
    assert!(outcome.is_authoritative());
    assert_eq!(outcome.mistakes(), 0);
    assert_eq!(outcome.cluster_count(), 2);
    assert_eq!(outcome.objective_value(), Some(0.0));

    let clustering = outcome.clustering();
    assert_eq!(clustering.label(1), Some(&ClusterId::new(0)));
    assert_eq!(clustering.label(2), Some(&ClusterId::new(0)));
    assert_eq!(clustering.label(3), Some(&ClusterId::new(1)));
    assert_eq!(clustering.label(4), Some(&ClusterId::new(1)));

    let greedy = engine_for(split_square()).greedy_correlation_clustering();
    assert_eq!(outcome.mistakes(), greedy.mistakes());
}

#[rstest]
fn backend_failure_carries_solver_name(square: LpFormulator<u32>) {
    struct Broken;

    impl<V: Vertex> LpSolver<V> for Broken {
        fn name(&self) -> &str {
            "broken"
        }

        fn solve(&self, _: &LpFormulation<V>) -> Result<LpSolution, LpSolveError> {
            Err(LpSolveError::Backend {
                message: "license expired".into(),
            })
        }
    }

    let formulator = square.with_solver(Broken);
    let err = formulator.cluster_via_lp().expect_err("backend fails");
    assert_eq!(err.code(), LpErrorCode::SolverFailure);
    assert_eq!(
        err.to_string(),
        "solver `broken` failed: solver backend failed: license expired"
    );
    let restored = formulator.with_solver(PlaceholderSolver);
    assert!(restored.cluster_via_lp().is_ok());
}
